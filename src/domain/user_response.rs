use serde::{Deserialize, Serialize};

use super::user::User;

// Public view of a user: the password never leaves the store.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.as_ref().to_owned(),
        }
    }
}

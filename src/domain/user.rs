use uuid::Uuid;

use super::{email::Email, password::Password};

#[derive(PartialEq, Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: Email,
    pub password: Password,
}

impl User {
    pub fn new(name: String, email: Email, password: Password) -> Self {
        User {
            id: Uuid::new_v4(),
            name,
            email,
            password,
        }
    }
}

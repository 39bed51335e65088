use serde::{Deserialize, Serialize};

/// Only the name and password can change; the email is the identifier.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateUserRequestBody {
    pub name: Option<String>,
    pub password: Option<String>,
}

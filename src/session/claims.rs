use serde::{Deserialize, Serialize};

use crate::domain::User;

/// Identity carried inside the session token and attached to every
/// authenticated request. Owned by the request that decoded it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Principal {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.as_ref().to_owned(),
        }
    }
}

/// Signed session token payload. A fresh value is created on every renewal;
/// an existing one is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user: Principal,
    pub iat: usize, // Issued at time
    pub exp: usize, // Expiration time
}

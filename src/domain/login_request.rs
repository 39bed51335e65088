use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequestBody {
    pub email: String,
    pub password: String,
}

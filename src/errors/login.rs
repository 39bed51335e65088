use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must be at least 8 characters long, contain at least one uppercase letter and one special character.")]
    InvalidPassword,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User with email {0} not found.")]
    UserNotFound(String),

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for LoginError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            LoginError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            LoginError::InvalidPassword => StatusCode::UNPROCESSABLE_ENTITY,
            LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            LoginError::UserNotFound(_) => StatusCode::UNAUTHORIZED,
            LoginError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

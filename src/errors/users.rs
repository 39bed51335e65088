use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UsersError {
    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must be at least 8 characters long, contain at least one uppercase letter and one special character.")]
    InvalidPassword,

    #[error("User with email {0} already exists.")]
    UserAlreadyExists(String),

    #[error("User with email {0} not found.")]
    UserNotFound(String),

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for UsersError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            UsersError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            UsersError::InvalidPassword => StatusCode::UNPROCESSABLE_ENTITY,
            UsersError::UserAlreadyExists(_) => StatusCode::CONFLICT,
            UsersError::UserNotFound(_) => StatusCode::NOT_FOUND,
            UsersError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

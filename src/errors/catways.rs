use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatwaysError {
    #[error("Catway {0} already exists.")]
    CatwayAlreadyExists(u32),

    #[error("Catway {0} not found.")]
    CatwayNotFound(u32),

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for CatwaysError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            CatwaysError::CatwayAlreadyExists(_) => StatusCode::CONFLICT,
            CatwaysError::CatwayNotFound(_) => StatusCode::NOT_FOUND,
            CatwaysError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

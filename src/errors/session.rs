use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Outcomes of the session guard.
///
/// A missing token is not an error from the user's point of view: browser
/// navigations land back on the login page. Every failed verification, on
/// the other hand, is one structured 401, whatever the internal cause.
#[derive(Error, Debug, PartialEq)]
pub enum SessionError {
    #[error("no token provided")]
    MissingToken,

    #[error("Token is not valid")]
    InvalidToken,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> axum::response::Response {
        match self {
            SessionError::MissingToken => Redirect::to("/").into_response(),
            SessionError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Token is not valid" })),
            )
                .into_response(),
            SessionError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": self.to_string() })),
            )
                .into_response(),
        }
    }
}

use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReservationsError {
    #[error("Catway {0} not found.")]
    CatwayNotFound(u32),

    #[error("Reservation not found.")]
    ReservationNotFound,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for ReservationsError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            ReservationsError::CatwayNotFound(_) => StatusCode::NOT_FOUND,
            ReservationsError::ReservationNotFound => StatusCode::NOT_FOUND,
            ReservationsError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

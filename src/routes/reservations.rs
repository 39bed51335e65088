use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::domain::{
    CatwayStore, CreateReservationRequestBody, MessageResponse, Reservation, ReservationStore,
    ReservationStoreError,
};
use crate::errors::ReservationsError;

pub async fn list_reservations(
    State(state): State<AppState>,
    Path(catway_number): Path<u32>,
) -> Json<Vec<Reservation>> {
    Json(
        state
            .reservation_store
            .read()
            .await
            .list_for_catway(catway_number)
            .await,
    )
}

pub async fn get_reservation(
    State(state): State<AppState>,
    Path((catway_number, id)): Path<(u32, Uuid)>,
) -> Result<Json<Reservation>, ReservationsError> {
    let reservation = state
        .reservation_store
        .read()
        .await
        .get_reservation(id)
        .await
        .map_err(|_| ReservationsError::ReservationNotFound)?;

    // A reservation is only addressable under its own catway.
    if reservation.catway_number != catway_number {
        return Err(ReservationsError::ReservationNotFound);
    }

    Ok(Json(reservation))
}

pub async fn create_reservation(
    State(state): State<AppState>,
    Path(catway_number): Path<u32>,
    Json(request): Json<CreateReservationRequestBody>,
) -> Result<impl IntoResponse, ReservationsError> {
    // No berth, no booking.
    state
        .catway_store
        .read()
        .await
        .get_catway(catway_number)
        .await
        .map_err(|_| ReservationsError::CatwayNotFound(catway_number))?;

    let reservation = Reservation::new(
        catway_number,
        request.client_name,
        request.boat_name,
        request.start_date,
        request.end_date,
    );

    state
        .reservation_store
        .write()
        .await
        .add_reservation(reservation.clone())
        .await
        .map_err(|_| ReservationsError::InternalServerError)?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

pub async fn delete_reservation(
    State(state): State<AppState>,
    Path((catway_number, id)): Path<(u32, Uuid)>,
) -> Result<Json<MessageResponse>, ReservationsError> {
    {
        let store = state.reservation_store.read().await;
        let reservation = store
            .get_reservation(id)
            .await
            .map_err(|_| ReservationsError::ReservationNotFound)?;
        if reservation.catway_number != catway_number {
            return Err(ReservationsError::ReservationNotFound);
        }
    }

    state
        .reservation_store
        .write()
        .await
        .delete_reservation(id)
        .await
        .map_err(|e| match e {
            ReservationStoreError::ReservationNotFound => ReservationsError::ReservationNotFound,
            _ => ReservationsError::InternalServerError,
        })?;

    Ok(Json(MessageResponse::new(
        "Reservation deleted successfully!",
    )))
}

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{
    Catway, CatwayStore, CatwayStoreError, CreateCatwayRequestBody, MessageResponse,
    UpdateCatwayRequestBody,
};
use crate::errors::CatwaysError;

pub async fn list_catways(State(state): State<AppState>) -> Json<Vec<Catway>> {
    Json(state.catway_store.read().await.list_catways().await)
}

pub async fn get_catway(
    State(state): State<AppState>,
    Path(catway_number): Path<u32>,
) -> Result<Json<Catway>, CatwaysError> {
    let catway = state
        .catway_store
        .read()
        .await
        .get_catway(catway_number)
        .await
        .map_err(|_| CatwaysError::CatwayNotFound(catway_number))?;

    Ok(Json(catway))
}

pub async fn create_catway(
    State(state): State<AppState>,
    Json(request): Json<CreateCatwayRequestBody>,
) -> Result<impl IntoResponse, CatwaysError> {
    let catway = Catway::new(
        request.catway_number,
        request.catway_type,
        request.catway_state,
    );

    state
        .catway_store
        .write()
        .await
        .add_catway(catway.clone())
        .await
        .map_err(|e| match e {
            CatwayStoreError::CatwayAlreadyExists => {
                CatwaysError::CatwayAlreadyExists(request.catway_number)
            }
            _ => CatwaysError::InternalServerError,
        })?;

    Ok((StatusCode::CREATED, Json(catway)))
}

// Only the state is modifiable once a catway exists.
pub async fn update_catway(
    State(state): State<AppState>,
    Path(catway_number): Path<u32>,
    Json(request): Json<UpdateCatwayRequestBody>,
) -> Result<Json<Catway>, CatwaysError> {
    let catway = state
        .catway_store
        .write()
        .await
        .update_state(catway_number, request.catway_state)
        .await
        .map_err(|e| match e {
            CatwayStoreError::CatwayNotFound => CatwaysError::CatwayNotFound(catway_number),
            _ => CatwaysError::InternalServerError,
        })?;

    Ok(Json(catway))
}

pub async fn delete_catway(
    State(state): State<AppState>,
    Path(catway_number): Path<u32>,
) -> Result<Json<MessageResponse>, CatwaysError> {
    state
        .catway_store
        .write()
        .await
        .delete_catway(catway_number)
        .await
        .map_err(|e| match e {
            CatwayStoreError::CatwayNotFound => CatwaysError::CatwayNotFound(catway_number),
            _ => CatwaysError::InternalServerError,
        })?;

    Ok(Json(MessageResponse::new("Catway deleted successfully!")))
}

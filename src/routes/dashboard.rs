use axum::extract::State;
use axum::{Extension, Json};

use crate::app_state::AppState;
use crate::domain::{CatwayStore, DashboardResponse, ReservationStore};
use crate::session::Principal;

// The guard has already validated the session: the Principal extension is
// guaranteed to be present here.
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<Principal>,
) -> Json<DashboardResponse> {
    let catways = state.catway_store.read().await.list_catways().await;
    let reservations = state
        .reservation_store
        .read()
        .await
        .list_reservations()
        .await;

    Json(DashboardResponse {
        user,
        catways,
        reservations,
    })
}

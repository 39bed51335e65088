use serde::Serialize;

use super::{catway::Catway, reservation::Reservation};
use crate::session::Principal;

/// Data context the dashboard view is rendered from.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: Principal,
    pub catways: Vec<Catway>,
    pub reservations: Vec<Reservation>,
}

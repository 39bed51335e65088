use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// The catway number comes from the route path, not the body.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequestBody {
    pub client_name: String,
    pub boat_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Uuid,
    pub catway_number: u32,
    pub client_name: String,
    pub boat_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Reservation {
    pub fn new(
        catway_number: u32,
        client_name: String,
        boat_name: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Reservation {
            id: Uuid::new_v4(),
            catway_number,
            client_name,
            boat_name,
            start_date,
            end_date,
        }
    }
}

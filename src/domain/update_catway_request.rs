use serde::{Deserialize, Serialize};

/// Only the state of a catway is modifiable.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCatwayRequestBody {
    pub catway_state: String,
}

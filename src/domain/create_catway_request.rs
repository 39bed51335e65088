use serde::{Deserialize, Serialize};

use super::catway::CatwayType;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCatwayRequestBody {
    pub catway_number: u32,
    pub catway_type: CatwayType,
    pub catway_state: String,
}

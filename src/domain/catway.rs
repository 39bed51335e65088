use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatwayType {
    Long,
    Short,
}

/// A marina berth. `catway_number` is the unique business identifier; only
/// the state description is mutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catway {
    pub catway_number: u32,
    pub catway_type: CatwayType,
    pub catway_state: String,
}

impl Catway {
    pub fn new(catway_number: u32, catway_type: CatwayType, catway_state: String) -> Self {
        Catway {
            catway_number,
            catway_type,
            catway_state,
        }
    }
}

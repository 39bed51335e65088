use std::collections::HashMap;

use crate::domain::{Catway, CatwayStore, CatwayStoreError};

// In-memory catway store keyed by catway number.
#[derive(Default)]
pub struct HashmapCatwayStore {
    catways: HashMap<u32, Catway>,
}

impl HashmapCatwayStore {
    pub fn new() -> Self {
        HashmapCatwayStore {
            catways: HashMap::new(),
        }
    }
}

#[async_trait::async_trait]
impl CatwayStore for HashmapCatwayStore {
    async fn add_catway(&mut self, catway: Catway) -> Result<(), CatwayStoreError> {
        if self.catways.contains_key(&catway.catway_number) {
            return Err(CatwayStoreError::CatwayAlreadyExists);
        }
        self.catways.insert(catway.catway_number, catway);
        Ok(())
    }

    async fn get_catway(&self, catway_number: u32) -> Result<Catway, CatwayStoreError> {
        self.catways
            .get(&catway_number)
            .cloned()
            .ok_or(CatwayStoreError::CatwayNotFound)
    }

    async fn list_catways(&self) -> Vec<Catway> {
        let mut catways: Vec<Catway> = self.catways.values().cloned().collect();
        catways.sort_by_key(|c| c.catway_number);
        catways
    }

    async fn update_state(
        &mut self,
        catway_number: u32,
        catway_state: String,
    ) -> Result<Catway, CatwayStoreError> {
        let catway = self
            .catways
            .get_mut(&catway_number)
            .ok_or(CatwayStoreError::CatwayNotFound)?;

        catway.catway_state = catway_state;
        Ok(catway.clone())
    }

    async fn delete_catway(&mut self, catway_number: u32) -> Result<(), CatwayStoreError> {
        self.catways
            .remove(&catway_number)
            .map(|_| ())
            .ok_or(CatwayStoreError::CatwayNotFound)
    }
}

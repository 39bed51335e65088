use crate::domain::Catway;

#[derive(Debug, PartialEq)]
pub enum CatwayStoreError {
    CatwayAlreadyExists,
    CatwayNotFound,
    UnexpectedError,
}

#[async_trait::async_trait]
pub trait CatwayStore: Send + Sync {
    async fn add_catway(&mut self, catway: Catway) -> Result<(), CatwayStoreError>;
    async fn get_catway(&self, catway_number: u32) -> Result<Catway, CatwayStoreError>;
    async fn list_catways(&self) -> Vec<Catway>;
    async fn update_state(
        &mut self,
        catway_number: u32,
        catway_state: String,
    ) -> Result<Catway, CatwayStoreError>;
    async fn delete_catway(&mut self, catway_number: u32) -> Result<(), CatwayStoreError>;
}

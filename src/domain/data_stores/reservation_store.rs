use uuid::Uuid;

use crate::domain::Reservation;

#[derive(Debug, PartialEq)]
pub enum ReservationStoreError {
    ReservationNotFound,
    UnexpectedError,
}

#[async_trait::async_trait]
pub trait ReservationStore: Send + Sync {
    async fn add_reservation(&mut self, reservation: Reservation)
        -> Result<(), ReservationStoreError>;
    async fn get_reservation(&self, id: Uuid) -> Result<Reservation, ReservationStoreError>;
    async fn list_for_catway(&self, catway_number: u32) -> Vec<Reservation>;
    async fn list_reservations(&self) -> Vec<Reservation>;
    async fn delete_reservation(&mut self, id: Uuid) -> Result<(), ReservationStoreError>;
}

use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::{Reservation, ReservationStore, ReservationStoreError};

// In-memory reservation store keyed by reservation id.
#[derive(Default)]
pub struct HashmapReservationStore {
    reservations: HashMap<Uuid, Reservation>,
}

impl HashmapReservationStore {
    pub fn new() -> Self {
        HashmapReservationStore {
            reservations: HashMap::new(),
        }
    }
}

#[async_trait::async_trait]
impl ReservationStore for HashmapReservationStore {
    async fn add_reservation(
        &mut self,
        reservation: Reservation,
    ) -> Result<(), ReservationStoreError> {
        self.reservations.insert(reservation.id, reservation);
        Ok(())
    }

    async fn get_reservation(&self, id: Uuid) -> Result<Reservation, ReservationStoreError> {
        self.reservations
            .get(&id)
            .cloned()
            .ok_or(ReservationStoreError::ReservationNotFound)
    }

    async fn list_for_catway(&self, catway_number: u32) -> Vec<Reservation> {
        let mut reservations: Vec<Reservation> = self
            .reservations
            .values()
            .filter(|r| r.catway_number == catway_number)
            .cloned()
            .collect();
        reservations.sort_by_key(|r| r.start_date);
        reservations
    }

    async fn list_reservations(&self) -> Vec<Reservation> {
        let mut reservations: Vec<Reservation> = self.reservations.values().cloned().collect();
        reservations.sort_by_key(|r| r.start_date);
        reservations
    }

    async fn delete_reservation(&mut self, id: Uuid) -> Result<(), ReservationStoreError> {
        self.reservations
            .remove(&id)
            .map(|_| ())
            .ok_or(ReservationStoreError::ReservationNotFound)
    }
}

pub mod auth;
pub mod hashmap_catway_store;
pub mod hashmap_reservation_store;
pub mod hashmap_user_store;

pub use auth::*;
pub use hashmap_catway_store::*;
pub use hashmap_reservation_store::*;
pub use hashmap_user_store::*;

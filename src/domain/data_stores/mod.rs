pub mod catway_store;
pub mod reservation_store;
pub mod user_store;

pub use catway_store::*;
pub use reservation_store::*;
pub use user_store::*;

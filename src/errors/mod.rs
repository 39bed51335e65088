mod catways;
mod login;
mod reservations;
mod session;
mod users;

pub use catways::*;
pub use login::*;
pub use reservations::*;
pub use session::*;
pub use users::*;

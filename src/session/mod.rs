pub mod claims;
pub mod codec;
pub mod guard;

pub use claims::*;
pub use codec::*;
pub use guard::*;

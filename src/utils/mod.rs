pub mod config;
pub mod consts;
pub mod cookie_helpers;

pub use config::*;

pub mod catway;
pub mod create_catway_request;
pub mod create_reservation_request;
pub mod create_user_request;
pub mod dashboard_response;
pub mod data_stores;
pub mod email;
pub mod login_request;
pub mod login_response;
pub mod message_response;
pub mod password;
pub mod reservation;
pub mod update_catway_request;
pub mod update_user_request;
pub mod user;
pub mod user_response;

pub use catway::*;
pub use create_catway_request::*;
pub use create_reservation_request::*;
pub use create_user_request::*;
pub use dashboard_response::*;
pub use data_stores::*;
pub use email::*;
pub use login_request::*;
pub use login_response::*;
pub use message_response::*;
pub use password::*;
pub use reservation::*;
pub use update_catway_request::*;
pub use update_user_request::*;
pub use user::*;
pub use user_response::*;

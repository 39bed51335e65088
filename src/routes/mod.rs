pub(crate) mod catways;
pub(crate) mod dashboard;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod reservations;
pub(crate) mod users;

// re-export items from sub-modules
pub use catways::*;
pub use dashboard::*;
pub use login::*;
pub use logout::*;
pub use reservations::*;
pub use users::*;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

// Fallback kept byte-compatible with the historical API.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "name": "PORT RUSSELL",
            "version": "1.0",
            "status": 404,
            "message": "Not found"
        })),
    )
}

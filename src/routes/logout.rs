use axum::extract::State;
use axum::response::Redirect;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::utils::cookie_helpers::clear_cookie;

/// Clears the client's stored cookie and sends it back to the landing page.
/// The token itself stays valid until its embedded expiry; there is no
/// server-side revocation.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    let jar = jar.add(clear_cookie(state.config.token_cookie_name()));
    (jar, Redirect::to("/"))
}

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

// No max-age on purpose: the expiry embedded in the token is the sole
// validity bound once the client re-sends it.
pub fn session_cookie(name: &str, token: &str) -> Cookie<'static> {
    Cookie::build((name.to_owned(), token.to_owned()))
        .path("/")
        .http_only(true) // prevent JavaScript from accessing the cookie
        .same_site(SameSite::Lax)
        .build()
}

pub fn clear_cookie(name: &str) -> Cookie<'static> {
    Cookie::build((name.to_owned(), String::new()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(0))
        .build()
}

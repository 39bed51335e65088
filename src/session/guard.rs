use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use crate::app_state::AppState;
use crate::errors::SessionError;
use crate::utils::cookie_helpers::session_cookie;

/// Header carrying a raw session token.
pub const X_ACCESS_TOKEN: &str = "x-access-token";

/// Authentication middleware guarding every private route.
///
/// Per request: extract a token candidate, verify it, re-issue a renewed
/// token on the response (sliding expiration), and expose the decoded user
/// to the handler via request extensions.
///
/// - no token at all -> redirect to the landing page
/// - invalid, malformed or expired token -> 401, handler never runs
pub async fn check_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, SessionError> {
    let token = extract_token(req.headers(), state.config.token_cookie_name())
        .ok_or(SessionError::MissingToken)?;

    let claims = state.token_codec.verify(&token).map_err(|e| {
        // Expired, bad signature and malformed are deliberately collapsed
        // into one externally visible outcome.
        log::debug!("session token rejected: {}", e);
        SessionError::InvalidToken
    })?;

    // Sliding renewal: same user, fresh 24h window.
    let renewed = state
        .token_codec
        .sign(&claims.user, state.config.token_ttl_seconds())
        .map_err(|e| {
            log::error!("failed to renew session token: {}", e);
            SessionError::InternalServerError
        })?;

    req.extensions_mut().insert(claims.user);

    let mut response = next.run(req).await;
    attach_renewed_token(&mut response, &renewed, state.config.token_cookie_name());

    Ok(response)
}

// Token extraction, tried in strict order, first non-empty match wins:
// 1. the `token` cookie
// 2. the `x-access-token` header
// 3. the `Authorization` header, stripping a literal `Bearer ` prefix when
//    present and using the raw value otherwise
fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(cookie_name) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_owned());
        }
    }

    if let Some(raw) = headers.get(X_ACCESS_TOKEN).and_then(|v| v.to_str().ok()) {
        if !raw.is_empty() {
            return Some(raw.to_owned());
        }
    }

    let raw = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())?;

    // Case-sensitive, single space. Anything else is used verbatim.
    match raw.strip_prefix("Bearer ") {
        Some(token) => Some(token.to_owned()),
        None => Some(raw.to_owned()),
    }
}

// Expose the renewed token on both channels the client may read it from.
fn attach_renewed_token(response: &mut Response, token: &str, cookie_name: &str) {
    if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
        response.headers_mut().insert(header::AUTHORIZATION, value);
    }

    let cookie = session_cookie(cookie_name, token);
    if let Ok(value) = HeaderValue::from_str(&cookie.to_string()) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
}

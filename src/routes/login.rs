use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::{Email, LoginRequestBody, LoginResponse, Password};
use crate::errors::LoginError;
use crate::services::AuthService;
use crate::session::Principal;
use crate::utils::cookie_helpers::session_cookie;

/// Authenticate and open a session: the fresh token travels back on both the
/// `Authorization` header and the HTTP-only session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequestBody>,
) -> Result<(CookieJar, impl IntoResponse), LoginError> {
    let email = Email::parse(request.email).or(Err(LoginError::InvalidEmail))?;
    let password = Password::parse(request.password).or(Err(LoginError::InvalidPassword))?;

    let user = AuthService::login(state.clone(), email, password).await?;
    let principal = Principal::from(&user);

    let token = state
        .token_codec
        .sign(&principal, state.config.token_ttl_seconds())
        .map_err(|e| {
            log::error!("failed to sign session token at login: {}", e);
            LoginError::InternalServerError
        })?;

    let jar = jar.add(session_cookie(state.config.token_cookie_name(), &token));

    Ok((
        jar,
        (
            StatusCode::OK,
            [(header::AUTHORIZATION, format!("Bearer {}", token))],
            Json(LoginResponse {
                message: "Logged in successfully".to_string(),
            }),
        ),
    ))
}

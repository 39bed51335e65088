use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{
    CreateUserRequestBody, Email, MessageResponse, Password, UpdateUserRequestBody, User,
    UserResponse, UserStore, UserStoreError,
};
use crate::errors::UsersError;

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    let users = state.user_store.read().await.list_users().await;
    Json(users.iter().map(UserResponse::from).collect())
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequestBody>,
) -> Result<impl IntoResponse, UsersError> {
    let email = Email::parse(request.email).or(Err(UsersError::InvalidEmail))?;
    let password = Password::parse(request.password).or(Err(UsersError::InvalidPassword))?;

    let user = User::new(request.name, email.clone(), password);
    state
        .user_store
        .write()
        .await
        .add_user(user)
        .await
        .map_err(|e| match e {
            UserStoreError::UserAlreadyExists => {
                UsersError::UserAlreadyExists(email.as_ref().to_string())
            }
            _ => UsersError::InternalServerError,
        })?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully!")),
    ))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserResponse>, UsersError> {
    let user = state
        .user_store
        .read()
        .await
        .get_user(&email)
        .await
        .map_err(|_| UsersError::UserNotFound(email))?;

    Ok(Json(UserResponse::from(&user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(request): Json<UpdateUserRequestBody>,
) -> Result<Json<UserResponse>, UsersError> {
    let password = match request.password {
        Some(raw) => Some(Password::parse(raw).or(Err(UsersError::InvalidPassword))?),
        None => None,
    };

    let user = state
        .user_store
        .write()
        .await
        .update_user(&email, request.name, password)
        .await
        .map_err(|e| match e {
            UserStoreError::UserNotFound => UsersError::UserNotFound(email),
            _ => UsersError::InternalServerError,
        })?;

    Ok(Json(UserResponse::from(&user)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<MessageResponse>, UsersError> {
    state
        .user_store
        .write()
        .await
        .delete_user(&email)
        .await
        .map_err(|e| match e {
            UserStoreError::UserNotFound => UsersError::UserNotFound(email),
            _ => UsersError::InternalServerError,
        })?;

    Ok(Json(MessageResponse::new("User deleted successfully!")))
}

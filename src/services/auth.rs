use crate::app_state::AppState;
use crate::domain::{Email, Password, User, UserStore, UserStoreError};
use crate::errors::LoginError;

pub struct AuthService {}

impl AuthService {
    pub async fn login(
        state: AppState,
        email: Email,
        password: Password,
    ) -> Result<User, LoginError> {
        match state
            .user_store
            .read()
            .await
            .validate_user(&email, &password)
            .await
        {
            Err(UserStoreError::UserNotFound) => {
                Err(LoginError::UserNotFound(email.as_ref().to_string()))
            }
            Err(UserStoreError::InvalidCredentials) => Err(LoginError::InvalidCredentials),
            Err(_) => Err(LoginError::InternalServerError),
            Ok(user) => Ok(user),
        }
    }
}

use crate::domain::{Email, Password, User};

#[derive(Debug, PartialEq)]
pub enum UserStoreError {
    UserAlreadyExists,
    UserNotFound,
    InvalidCredentials,
    UnexpectedError,
}

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&mut self, user: User) -> Result<(), UserStoreError>;
    async fn get_user(&self, email: &str) -> Result<User, UserStoreError>;
    async fn list_users(&self) -> Vec<User>;
    async fn update_user(
        &mut self,
        email: &str,
        name: Option<String>,
        password: Option<Password>,
    ) -> Result<User, UserStoreError>;
    async fn delete_user(&mut self, email: &str) -> Result<(), UserStoreError>;
    async fn validate_user(&self, email: &Email, password: &Password)
        -> Result<User, UserStoreError>;
}

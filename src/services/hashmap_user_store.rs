use std::collections::HashMap;

use crate::domain::{Email, Password, User, UserStore, UserStoreError};

// In-memory user store keyed by email.
#[derive(Default)]
pub struct HashmapUserStore {
    users: HashMap<String, User>,
}

impl HashmapUserStore {
    pub fn new() -> Self {
        HashmapUserStore {
            users: HashMap::new(),
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, user: User) -> Result<(), UserStoreError> {
        if self.users.contains_key(user.email.as_ref()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        self.users.insert(user.email.as_ref().to_owned(), user);
        Ok(())
    }

    async fn get_user(&self, email: &str) -> Result<User, UserStoreError> {
        self.users
            .get(email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn list_users(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by(|a, b| a.email.as_ref().cmp(b.email.as_ref()));
        users
    }

    async fn update_user(
        &mut self,
        email: &str,
        name: Option<String>,
        password: Option<Password>,
    ) -> Result<User, UserStoreError> {
        let user = self
            .users
            .get_mut(email)
            .ok_or(UserStoreError::UserNotFound)?;

        if let Some(name) = name {
            user.name = name;
        }
        if let Some(password) = password {
            user.password = password;
        }

        Ok(user.clone())
    }

    async fn delete_user(&mut self, email: &str) -> Result<(), UserStoreError> {
        self.users
            .remove(email)
            .map(|_| ())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn validate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        match self.users.get(email.as_ref()) {
            Some(user) if &user.password == password => Ok(user.clone()),
            Some(_) => Err(UserStoreError::InvalidCredentials),
            None => Err(UserStoreError::UserNotFound),
        }
    }
}

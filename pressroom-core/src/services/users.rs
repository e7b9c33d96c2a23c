//! User service - signup and listing

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::{NewUser, User};
use crate::store::Store;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn Store>,
}

impl UserService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Create a user. Fails with `Conflict` when the email is already registered.
    pub async fn create_user(&self, name: Option<&str>, email: &str) -> Result<User> {
        let user = self.store.insert_user(NewUser::new(name, email)).await?;
        info!(user_id = %user.id, email = %user.email, "user created");
        Ok(user)
    }

    /// All users, identity ascending, unpaginated.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let users = self.store.list_users().await?;
        debug!(count = users.len(), "listed users");
        Ok(users)
    }
}

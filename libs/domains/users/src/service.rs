use std::sync::Arc;
use tracing::instrument;

use crate::error::UserResult;
use crate::models::{NewUser, User, UserUpdate};
use crate::repository::UserRepository;

/// Service layer for User operations
///
/// Stateless between calls: no cache, no retry, no lock. Each method is one
/// repository call.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a user and return its generated identifier
    #[instrument(skip(self, input), fields(role = %input.role))]
    pub async fn create_user(&self, input: NewUser) -> UserResult<i64> {
        self.repository.insert(input).await
    }

    /// Get a user by ID
    #[instrument(skip(self), fields(user_id = id))]
    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        self.repository.get_by_id(id).await
    }

    /// Update name/email (when set) and role
    #[instrument(
        skip(self, input),
        fields(
            user_id = id,
            set_name = !input.name.is_keep(),
            set_email = !input.email.is_keep(),
            role = %input.role,
        )
    )]
    pub async fn update_user(&self, id: i64, input: UserUpdate) -> UserResult<()> {
        self.repository.update(id, input).await
    }

    /// Delete a user
    #[instrument(skip(self), fields(user_id = id))]
    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        self.repository.delete(id).await
    }
}

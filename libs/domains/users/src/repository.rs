use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User, UserUpdate};

/// Repository trait for User persistence
///
/// Each operation is a single statement against the `users` table. Atomicity
/// and row isolation come from the store; implementations hold no process-wide
/// lock across calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the storage-generated identifier
    async fn insert(&self, input: NewUser) -> UserResult<i64>;

    /// Fetch every column of a user
    async fn get_by_id(&self, id: i64) -> UserResult<User>;

    /// Overwrite name/email when set, always write role, advance `updated_at`
    async fn update(&self, id: i64, input: UserUpdate) -> UserResult<()>;

    /// Remove a user
    async fn delete(&self, id: i64) -> UserResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    users: BTreeMap<i64, User>,
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, input: NewUser) -> UserResult<i64> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let id = store.last_id;
        let now = Utc::now();

        store.users.insert(
            id,
            User {
                id,
                name: input.name,
                email: input.email,
                role: input.role,
                password: input.password,
                created_at: now,
                updated_at: now,
            },
        );

        tracing::info!(user_id = id, "Created user");
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> UserResult<User> {
        let store = self.store.read().await;
        store.users.get(&id).cloned().ok_or(UserError::NotFound(id))
    }

    async fn update(&self, id: i64, input: UserUpdate) -> UserResult<()> {
        let mut store = self.store.write().await;
        let user = store.users.get_mut(&id).ok_or(UserError::NotFound(id))?;

        input.name.apply_to(&mut user.name);
        input.email.apply_to(&mut user.email);
        user.role = input.role;
        // Strictly later than the previous value even on a coarse clock
        user.updated_at = Utc::now().max(user.updated_at + TimeDelta::nanoseconds(1));

        tracing::info!(user_id = id, "Updated user");
        Ok(())
    }

    async fn delete(&self, id: i64) -> UserResult<()> {
        let mut store = self.store.write().await;

        if store.users.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
            Ok(())
        } else {
            Err(UserError::NotFound(id))
        }
    }
}

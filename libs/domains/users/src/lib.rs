//! Users Domain
//!
//! CRUD over the `users` table.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  Service     │  ← UserService<R>, instrumented, stateless
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │ Repository   │  ← UserRepository trait: Postgres (pooled) + in-memory
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │   Models     │  ← User, Role codec, Password, FieldUpdate
//! └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{InMemoryUserRepository, UserService};
//!
//! let repository = InMemoryUserRepository::new();
//! let service = UserService::new(repository);
//! ```

pub mod conversions;
pub mod error;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{FieldUpdate, InvalidRoleError, NewUser, Password, Role, User, UserUpdate};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;

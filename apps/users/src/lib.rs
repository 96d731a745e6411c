//! Users gRPC Service
//!
//! Create, read, update and delete users stored in PostgreSQL.
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ (gRPC, optional Zstd compression)
//! UserServiceImpl (service.rs)
//!   ↓ (proto ↔ domain conversions via From traits)
//! UserService (domain layer)
//!   ↓
//! PgUserRepository (pooled, one statement per call)
//!   ↓
//! PostgreSQL
//! ```
//!
//! ## Modules
//!
//! - `config`: Environment-driven configuration
//! - `server`: Server initialization and lifecycle
//! - `service`: gRPC service implementation (UserServiceImpl)

pub mod config;
pub mod server;
pub mod service;

// Re-export for convenience
pub use config::Config;
pub use server::run;
pub use service::UserServiceImpl;

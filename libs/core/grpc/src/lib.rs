//! # gRPC helpers
//!
//! Shared pieces for the workspace's tonic services:
//!
//! - [`conversions`]: wire timestamp convention (`DateTime<Utc>` → `google.protobuf.Timestamp`)
//! - [`error`]: ergonomic `Result` → `tonic::Status` conversion
//! - `server` (feature `server`): server configuration from the environment,
//!   health reporting and the shutdown signal
//!
//! ## Quick Start
//!
//! ```ignore
//! use grpc_client::server::{GrpcServer, ServerConfig, shutdown_signal};
//! use core_config::FromEnv;
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = GrpcServer::health_service();
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! ```

pub mod conversions;
pub mod error;

#[cfg(feature = "server")]
pub mod server;

pub use error::ToTonicResult;

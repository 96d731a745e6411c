//! gRPC server utilities
//!
//! ```ignore
//! use grpc_client::server::{GrpcServer, ServerConfig, shutdown_signal};
//! use rpc::user::user_service_server::{UserServiceServer, SERVICE_NAME};
//! use tonic::transport::Server;
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = GrpcServer::health_service();
//!
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! config
//!     .apply(Server::builder())
//!     .add_service(health_service)
//!     .add_service(
//!         UserServiceServer::new(my_impl)
//!             .max_decoding_message_size(config.max_decoding_message_size),
//!     )
//!     .serve_with_shutdown(config.socket_addr()?, shutdown_signal())
//!     .await?;
//! ```

mod builder;
mod config;
mod shutdown;

pub use builder::GrpcServer;
pub use config::ServerConfig;
pub use shutdown::shutdown_signal;

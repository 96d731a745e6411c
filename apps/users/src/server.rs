//! gRPC server initialization and lifecycle management
//!
//! This module handles all server setup:
//! - Tracing initialization
//! - Database connection pool
//! - Service creation
//! - gRPC server configuration, startup and graceful shutdown
//! - Health check service (grpc.health.v1.Health)

use core_config::Environment;
use domain_users::{PgUserRepository, UserRepository, UserService};
use eyre::{Result, WrapErr};
use grpc_client::server::{GrpcServer, ServerConfig, shutdown_signal};
use rpc::user::user_service_server::{SERVICE_NAME, UserServiceServer};
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tracing::info;

use crate::config::Config;
use crate::service::UserServiceImpl;

/// Wrap `service` in the generated tonic server with the configured
/// compression and message size limits.
pub fn user_service_server<R>(
    service: UserService<R>,
    config: &ServerConfig,
) -> UserServiceServer<UserServiceImpl<R>>
where
    R: UserRepository + 'static,
{
    let server = UserServiceServer::new(UserServiceImpl::new(service))
        .max_decoding_message_size(config.max_decoding_message_size)
        .max_encoding_message_size(config.max_encoding_message_size);

    if config.enable_compression {
        server
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd)
    } else {
        server
    }
}

/// Run the gRPC server
///
/// This is the main entry point for server initialization. It:
/// 1. Sets up structured logging (env-aware: JSON for prod, pretty for dev)
/// 2. Loads configuration from the environment
/// 3. Opens the database connection pool and probes it with `SELECT 1`
/// 4. Creates the repository and service layers
/// 5. Serves until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is missing or malformed
/// - The database cannot be reached at startup
/// - Server binding fails
/// - Server runtime encounters an error
pub async fn run() -> Result<()> {
    core_config::tracing::install_color_eyre();
    core_config::tracing::init_tracing(&Environment::from_env());

    let config = Config::from_env().wrap_err("Failed to load configuration")?;

    let addr_str = config.server.addr_string();
    let addr = config
        .server
        .socket_addr()
        .wrap_err_with(|| format!("Failed to parse server address: {}", addr_str))?;

    // Startup connect is not retried; per-call failures surface as UNAVAILABLE instead
    info!("Connecting to database...");
    let db = database::postgres::connect_from_config(config.database.clone())
        .await
        .wrap_err("Failed to connect to database")?;
    database::postgres::check_health(&db)
        .await
        .wrap_err("Database is not answering queries")?;
    info!("Connected to database successfully");

    let repository = PgUserRepository::new(db);
    let service = UserService::new(repository);

    let (health_reporter, health_service) = GrpcServer::health_service();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
    GrpcServer::log_startup(&config.server, SERVICE_NAME);

    config
        .server
        .apply(Server::builder())
        .add_service(health_service)
        .add_service(user_service_server(service, &config.server))
        .serve_with_shutdown(addr, async {
            shutdown_signal().await;
            GrpcServer::mark_not_serving(&health_reporter, SERVICE_NAME).await;
        })
        .await
        .wrap_err("gRPC server failed")?;

    info!("Server stopped");
    Ok(())
}

//! gRPC Server utilities.

use super::config::ServerConfig;
use tonic_health::pb::health_server::{Health, HealthServer};
use tonic_health::server::HealthReporter;
use tracing::info;

/// Helper for creating gRPC servers with health checks.
pub struct GrpcServer;

impl GrpcServer {
    /// Create the `grpc.health.v1.Health` service and its reporter.
    pub fn health_service() -> (HealthReporter, HealthServer<impl Health>) {
        tonic_health::server::health_reporter()
    }

    /// Log server startup information for a single service.
    pub fn log_startup(config: &ServerConfig, service_name: &str) {
        info!(
            addr = %config.addr_string(),
            service = service_name,
            compression = config.enable_compression,
            max_message_size = config.max_decoding_message_size,
            request_timeout_secs = config.request_timeout_secs,
            "gRPC server starting"
        );

        if config.enable_compression {
            info!("Zstd compression enabled");
        }

        info!("Health check service enabled (grpc.health.v1.Health)");
    }

    /// Mark `service_name` and the empty service name as serving
    /// (empty is used by k8s default health checks).
    pub async fn setup_health(health_reporter: &HealthReporter, service_name: &str) {
        health_reporter
            .set_service_status(service_name, tonic_health::ServingStatus::Serving)
            .await;
        health_reporter
            .set_service_status("", tonic_health::ServingStatus::Serving)
            .await;

        info!(service = service_name, "Service marked as serving");
    }

    /// Mark `service_name` and the empty service name as not serving.
    /// Called once shutdown starts so probes stop routing new calls.
    pub async fn mark_not_serving(health_reporter: &HealthReporter, service_name: &str) {
        health_reporter
            .set_service_status(service_name, tonic_health::ServingStatus::NotServing)
            .await;
        health_reporter
            .set_service_status("", tonic_health::ServingStatus::NotServing)
            .await;
    }
}

//! Server configuration loaded from environment variables.

use core_config::{ConfigError, FromEnv, env_flag, env_or_default, env_parse};
use std::net::SocketAddr;
use std::time::Duration;
use tonic::transport::Server;

/// Configuration for gRPC server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (default: 0.0.0.0)
    pub host: String,
    /// Port to listen on (default: 8080)
    pub port: u16,
    /// Enable Zstd compression (default: true)
    pub enable_compression: bool,
    /// Maximum message size for decoding (default: 4MB)
    pub max_decoding_message_size: usize,
    /// Maximum message size for encoding (default: 4MB)
    pub max_encoding_message_size: usize,
    /// Upper bound for a single call that carries no `grpc-timeout` (default: 30s)
    pub request_timeout_secs: u64,
    /// TCP keepalive interval in seconds (default: 60)
    pub keepalive_secs: u64,
}

pub(crate) const DEFAULT_MAX_MESSAGE_SIZE: usize = 4 * 1024 * 1024;

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_compression: true,
            max_decoding_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            max_encoding_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            request_timeout_secs: 30,
            keepalive_secs: 60,
        }
    }
}

impl FromEnv for ServerConfig {
    /// Reads:
    /// - `GRPC_HOST` (default: 0.0.0.0)
    /// - `GRPC_PORT` (default: 8080)
    /// - `GRPC_COMPRESSION` (default: true)
    /// - `GRPC_MAX_MESSAGE_SIZE` (default: 4194304 / 4MB)
    /// - `GRPC_REQUEST_TIMEOUT_SECS` (default: 30)
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let max_message_size = env_parse("GRPC_MAX_MESSAGE_SIZE", DEFAULT_MAX_MESSAGE_SIZE)?;

        Ok(Self {
            host: env_or_default("GRPC_HOST", &defaults.host),
            port: env_parse("GRPC_PORT", defaults.port)?,
            enable_compression: env_flag("GRPC_COMPRESSION", defaults.enable_compression)?,
            max_decoding_message_size: max_message_size,
            max_encoding_message_size: max_message_size,
            request_timeout_secs: env_parse(
                "GRPC_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            )?,
            keepalive_secs: defaults.keepalive_secs,
        })
    }
}

impl ServerConfig {
    /// Create a new server config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable compression.
    pub fn with_compression(mut self, enable: bool) -> Self {
        self.enable_compression = enable;
        self
    }

    /// Set maximum message size.
    pub fn with_max_message_size(mut self, size: usize) -> Self {
        self.max_decoding_message_size = size;
        self.max_encoding_message_size = size;
        self
    }

    /// Set the server-wide request timeout.
    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Apply transport-level settings (request timeout, TCP keepalive) to a server builder.
    pub fn apply(&self, builder: Server) -> Server {
        builder
            .timeout(self.request_timeout())
            .tcp_keepalive(Some(Duration::from_secs(self.keepalive_secs)))
    }

    /// Get the socket address to bind to.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.addr_string().parse()
    }

    /// Get the address string (for logging).
    pub fn addr_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(config.enable_compression);
        assert_eq!(config.max_decoding_message_size, 4 * 1024 * 1024);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ServerConfig::new()
            .with_compression(false)
            .with_max_message_size(1024)
            .with_request_timeout(5);

        assert_eq!(config.addr_string(), "0.0.0.0:8080");
        assert!(!config.enable_compression);
        assert_eq!(config.max_encoding_message_size, 1024);
        assert_eq!(config.request_timeout_secs, 5);
        assert!(config.socket_addr().is_ok());
    }

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars(
            [
                ("GRPC_HOST", None::<&str>),
                ("GRPC_PORT", None),
                ("GRPC_COMPRESSION", None),
                ("GRPC_MAX_MESSAGE_SIZE", None),
                ("GRPC_REQUEST_TIMEOUT_SECS", None),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.addr_string(), "0.0.0.0:8080");
                assert!(config.enable_compression);
                assert_eq!(config.request_timeout_secs, 30);
            },
        );
    }

    #[test]
    fn test_from_env_custom() {
        temp_env::with_vars(
            [
                ("GRPC_HOST", Some("[::1]")),
                ("GRPC_PORT", Some("50051")),
                ("GRPC_COMPRESSION", Some("false")),
                ("GRPC_MAX_MESSAGE_SIZE", Some("1048576")),
                ("GRPC_REQUEST_TIMEOUT_SECS", Some("10")),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.addr_string(), "[::1]:50051");
                assert!(config.socket_addr().is_ok());
                assert!(!config.enable_compression);
                assert_eq!(config.max_decoding_message_size, 1_048_576);
                assert_eq!(config.request_timeout_secs, 10);
            },
        );
    }

    #[test]
    fn test_from_env_invalid_port_is_an_error() {
        temp_env::with_var("GRPC_PORT", Some("99999"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("GRPC_PORT"));
        });
    }

    #[test]
    fn test_from_env_invalid_compression_flag() {
        temp_env::with_vars(
            [("GRPC_PORT", None::<&str>), ("GRPC_COMPRESSION", Some("sometimes"))],
            || {
                let err = ServerConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("GRPC_COMPRESSION"));
            },
        );
    }
}

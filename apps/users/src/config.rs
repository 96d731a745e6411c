use core_config::FromEnv;
use database::postgres::PostgresConfig;
use grpc_client::server::ServerConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components.
#[derive(Clone, Debug)]
pub struct Config {
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    /// `DATABASE_URL` is required; everything else has a default.
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            database,
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_requires_database_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("DATABASE_URL"));
        });
    }

    #[test]
    fn test_from_env_composes_sections() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://app:secret@db:5432/users")),
                ("DB_MAX_CONNECTIONS", Some("4")),
                ("GRPC_PORT", Some("50051")),
                ("GRPC_COMPRESSION", Some("false")),
                ("APP_ENV", Some("production")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.database.max_connections, 4);
                assert_eq!(config.server.port, 50051);
                assert!(!config.server.enable_compression);
                assert!(config.environment.is_production());
            },
        );
    }

    #[test]
    fn test_from_env_rejects_malformed_port() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/users")),
                ("GRPC_PORT", Some("not-a-port")),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("GRPC_PORT"));
            },
        );
    }
}

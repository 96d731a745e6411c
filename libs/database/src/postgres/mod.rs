//! PostgreSQL connection pool and health checks

mod config;
mod connector;
mod health;

pub use config::PostgresConfig;
pub use connector::connect_from_config;
pub use health::check_health;

/// Connection-level database error
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// The pool is open but a probe statement failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Classify a SeaORM error as a connectivity failure (pool exhausted, acquire
/// timeout, server unreachable).
#[cfg(feature = "postgres")]
pub fn is_connectivity_error(err: &sea_orm::DbErr) -> bool {
    matches!(
        err,
        sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_)
    )
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(all(test, feature = "postgres"))]
mod tests {
    use super::*;
    use sea_orm::{ConnAcquireErr, DbErr, RuntimeErr};

    #[test]
    fn test_acquire_timeout_is_connectivity() {
        let err = DbErr::ConnectionAcquire(ConnAcquireErr::Timeout);
        assert!(is_connectivity_error(&err));
    }

    #[test]
    fn test_conn_error_is_connectivity() {
        let err = DbErr::Conn(RuntimeErr::Internal("connection refused".into()));
        assert!(is_connectivity_error(&err));
    }

    #[test]
    fn test_query_error_is_not_connectivity() {
        let err = DbErr::Query(RuntimeErr::Internal("syntax error".into()));
        assert!(!is_connectivity_error(&err));
    }
}

use database::common::error::is_connectivity_error;
use sea_orm::DbErr;
use thiserror::Error;

use crate::models::InvalidRoleError;

#[derive(Debug, Error)]
pub enum UserError {
    /// The store could not be reached (pool exhausted, acquire timeout,
    /// connection refused). Always a per-call failure.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A stored role did not decode.
    #[error(transparent)]
    InvalidRole(#[from] InvalidRoleError),

    #[error("User not found: {0}")]
    NotFound(i64),

    #[error("Failed to {op} user {id}: {message}")]
    ReadFailed {
        op: &'static str,
        id: i64,
        message: String,
    },

    #[error("Failed to {op} user{}: {message}", fmt_id(.id))]
    WriteFailed {
        op: &'static str,
        id: Option<i64>,
        message: String,
    },
}

fn fmt_id(id: &Option<i64>) -> String {
    id.map(|id| format!(" {id}")).unwrap_or_default()
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    /// Classify a failed read statement.
    pub fn read(op: &'static str, id: i64, err: DbErr) -> Self {
        if is_connectivity_error(&err) {
            UserError::StorageUnavailable(format!("{op} user {id}: {err}"))
        } else {
            UserError::ReadFailed {
                op,
                id,
                message: err.to_string(),
            }
        }
    }

    /// Classify a failed write statement.
    pub fn write(op: &'static str, id: Option<i64>, err: DbErr) -> Self {
        if is_connectivity_error(&err) {
            UserError::StorageUnavailable(format!("{op} user{}: {err}", fmt_id(&id)))
        } else {
            UserError::WriteFailed {
                op,
                id,
                message: err.to_string(),
            }
        }
    }
}

/// Caller-facing status codes. Not-found, unavailable storage and storage
/// errors stay distinguishable so clients can branch on the cause.
impl From<UserError> for tonic::Status {
    fn from(err: UserError) -> Self {
        match &err {
            UserError::NotFound(_) => tonic::Status::not_found(err.to_string()),
            UserError::StorageUnavailable(msg) => {
                tracing::warn!(error = %msg, "Storage unavailable");
                tonic::Status::unavailable(err.to_string())
            }
            UserError::InvalidRole(e) => {
                tracing::error!(value = %e.value, "Stored role failed to decode");
                tonic::Status::data_loss(err.to_string())
            }
            UserError::ReadFailed { .. } | UserError::WriteFailed { .. } => {
                tracing::error!(error = %err, "Storage statement failed");
                tonic::Status::internal(err.to_string())
            }
        }
    }
}

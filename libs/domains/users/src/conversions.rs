//! User-specific proto ↔ domain conversions
//!
//! Generic conversions (timestamps) are re-exported from grpc_client::conversions.

use rpc::user::{CreateRequest, GetResponse, UpdateRequest, UserInfo};

use crate::models::{NewUser, Role, User, UserUpdate};

pub use grpc_client::conversions::*;

// ============================================================================
// Role Conversions
// ============================================================================

impl Role {
    /// Permissive mapping from the wire enum: ADMIN is admin, every other
    /// value (including ones this build does not know) is a plain user.
    pub fn from_wire(value: i32) -> Self {
        match rpc::user::Role::try_from(value) {
            Ok(rpc::user::Role::Admin) => Role::Admin,
            Ok(rpc::user::Role::User) | Err(_) => Role::User,
        }
    }
}

impl From<Role> for rpc::user::Role {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => rpc::user::Role::Admin,
            Role::User => rpc::user::Role::User,
        }
    }
}

impl From<Role> for i32 {
    fn from(role: Role) -> Self {
        rpc::user::Role::from(role) as i32
    }
}

// ============================================================================
// Request Conversions
// ============================================================================

impl From<CreateRequest> for NewUser {
    fn from(req: CreateRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            role: Role::from_wire(req.role),
            password: req.password.into(),
        }
    }
}

/// The identifier is not part of the update payload; callers read `req.id` first.
impl From<UpdateRequest> for UserUpdate {
    fn from(req: UpdateRequest) -> Self {
        Self {
            name: req.name.into(),
            email: req.email.into(),
            role: Role::from_wire(req.role),
        }
    }
}

// ============================================================================
// Response Conversions
// ============================================================================

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role.into(),
            password_confirm: user.password.expose_plaintext().to_string(),
            password: user.password.into_plaintext(),
            created_at: Some(datetime_to_timestamp(user.created_at)),
            updated_at: Some(datetime_to_timestamp(user.updated_at)),
        }
    }
}

impl From<User> for GetResponse {
    fn from(user: User) -> Self {
        Self {
            user: Some(user.into()),
        }
    }
}

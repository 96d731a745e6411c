use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// User roles
///
/// Stored as text (`"ADMIN"` / `"USER"`). Decoding stored text is strict;
/// anything outside the two tokens is an [`InvalidRoleError`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Stored role text that is not one of the known tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid role '{value}', expected ADMIN or USER")]
pub struct InvalidRoleError {
    pub value: String,
}

impl Role {
    /// Storage representation. Total: every role has a token.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }

    /// Strict decode of the storage representation (case-sensitive).
    pub fn decode(value: &str) -> Result<Self, InvalidRoleError> {
        match value {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            other => Err(InvalidRoleError {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = InvalidRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::decode(s)
    }
}

/// Plaintext password as stored.
///
/// `Debug` never prints the value. Reading it requires the explicit
/// [`Password::expose_plaintext`] call.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The stored plaintext. Fetch returns it verbatim to callers.
    pub fn expose_plaintext(&self) -> &str {
        &self.0
    }

    pub fn into_plaintext(self) -> String {
        self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A field in an update: either keep the stored value or overwrite it.
///
/// Kept distinct from `Option` so an omitted field can never be written as
/// NULL or an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    #[default]
    Keep,
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, FieldUpdate::Keep)
    }

    /// Value to write, if any.
    pub fn into_option(self) -> Option<T> {
        match self {
            FieldUpdate::Keep => None,
            FieldUpdate::Set(value) => Some(value),
        }
    }

    /// Resolve against the currently stored value.
    pub fn apply_to(self, current: &mut T) {
        if let FieldUpdate::Set(value) = self {
            *current = value;
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Keep,
        }
    }
}

/// User entity - matches the `users` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Storage-generated identifier, strictly positive
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password: Password,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
    /// Advanced on every successful update
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password: Password,
}

/// Input for updating a user. Role is always written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: FieldUpdate<String>,
    pub email: FieldUpdate<String>,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codec_roundtrip() {
        for role in [Role::Admin, Role::User] {
            assert_eq!(Role::decode(role.as_str()), Ok(role));
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_role_decode_is_strict() {
        for text in ["admin", "User", "", " ADMIN", "MODERATOR"] {
            let err = Role::decode(text).unwrap_err();
            assert_eq!(err.value, text);
        }
    }

    #[test]
    fn test_role_default_is_user() {
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("hunter2");
        assert_eq!(format!("{password:?}"), "Password(***)");
        assert_eq!(password.expose_plaintext(), "hunter2");

        let new_user = NewUser {
            name: "Ana".into(),
            email: "ana@x.com".into(),
            role: Role::User,
            password,
        };
        assert!(!format!("{new_user:?}").contains("hunter2"));
    }

    #[test]
    fn test_field_update_apply() {
        let mut name = "Ana".to_string();
        FieldUpdate::Keep.apply_to(&mut name);
        assert_eq!(name, "Ana");

        FieldUpdate::Set("Bea".to_string()).apply_to(&mut name);
        assert_eq!(name, "Bea");
    }

    #[test]
    fn test_field_update_from_option() {
        assert!(FieldUpdate::<String>::from(None).is_keep());
        assert_eq!(
            FieldUpdate::from(Some(String::new())),
            FieldUpdate::Set(String::new()),
            "an explicit empty string is still a write"
        );
    }
}

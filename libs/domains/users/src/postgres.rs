use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Statement};

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, Role, User, UserUpdate};
use crate::repository::UserRepository;

const INSERT_USER: &str = r#"
    INSERT INTO users (name, email, role, password)
    VALUES ($1, $2, $3, $4)
    RETURNING id
"#;

const SELECT_USER: &str = r#"
    SELECT id, name, email, role, password, created_at, updated_at
    FROM users
    WHERE id = $1
"#;

const UPDATE_USER: &str = r#"
    UPDATE users
    SET name = COALESCE($2, name),
        email = COALESCE($3, email),
        role = $4,
        updated_at = NOW()
    WHERE id = $1
"#;

const DELETE_USER: &str = "DELETE FROM users WHERE id = $1";

/// PostgreSQL implementation of UserRepository using SeaORM raw statements
///
/// Owns the pooled `DatabaseConnection`. Every call checks out one connection
/// for its single statement; the connection goes back to the pool when the
/// statement completes or the call future is dropped.
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct InsertedId {
    id: i64,
}

/// Helper struct for deserializing user rows from the database
#[derive(Debug, FromQueryResult)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    role: String,
    password: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: row.id,
            name: row.name,
            email: row.email,
            role: Role::decode(&row.role)?,
            password: row.password.into(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, input: NewUser) -> UserResult<i64> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            INSERT_USER,
            [
                input.name.into(),
                input.email.into(),
                input.role.as_str().into(),
                input.password.into_plaintext().into(),
            ],
        );

        let row = InsertedId::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| UserError::write("create", None, e))?
            .ok_or_else(|| UserError::WriteFailed {
                op: "create",
                id: None,
                message: "insert returned no id".to_string(),
            })?;

        tracing::info!(user_id = row.id, "Created user");
        Ok(row.id)
    }

    async fn get_by_id(&self, id: i64) -> UserResult<User> {
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, SELECT_USER, [id.into()]);

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| UserError::read("get", id, e))?
            .ok_or(UserError::NotFound(id))?;

        User::try_from(row).inspect_err(|e| {
            tracing::error!(user_id = id, error = %e, "Stored user row failed to decode");
        })
    }

    async fn update(&self, id: i64, input: UserUpdate) -> UserResult<()> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            UPDATE_USER,
            [
                id.into(),
                input.name.into_option().into(),
                input.email.into_option().into(),
                input.role.as_str().into(),
            ],
        );

        let result = self
            .db
            .execute_raw(stmt)
            .await
            .map_err(|e| UserError::write("update", Some(id), e))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id));
        }

        tracing::info!(user_id = id, "Updated user");
        Ok(())
    }

    async fn delete(&self, id: i64) -> UserResult<()> {
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, DELETE_USER, [id.into()]);

        let result = self
            .db
            .execute_raw(stmt)
            .await
            .map_err(|e| UserError::write("delete", Some(id), e))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id));
        }

        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}

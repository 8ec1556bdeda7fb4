use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

/// User row as exposed to the API. The password hash is never part of the
/// selected columns.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub created_at: OffsetDateTime,
}

/// Hash-bearing row, fetched only for credential verification. Deliberately
/// not serializable.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

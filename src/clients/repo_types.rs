use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

/// Client row as persisted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_by: Option<i32>,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

/// Read view with the creator's name joined in.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClientView {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_by: Option<i32>,
    pub created_by_name: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

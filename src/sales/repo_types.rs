use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use time::{Date, OffsetDateTime};

/// Sale row as persisted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Sale {
    pub id: i32,
    pub client_id: i32,
    pub amount: Decimal,
    pub sale_date: Date,
    pub description: Option<String>,
    pub created_by: Option<i32>,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

/// Read view with the client's and creator's names joined in.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SaleView {
    pub id: i32,
    pub client_id: i32,
    pub client_name: Option<String>,
    pub amount: Decimal,
    pub sale_date: Date,
    pub description: Option<String>,
    pub created_by: Option<i32>,
    pub created_by_name: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

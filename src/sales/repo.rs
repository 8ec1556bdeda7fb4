use rust_decimal::Decimal;
use sqlx::PgPool;
use time::Date;

use super::repo_types::{Sale, SaleView};

impl Sale {
    /// Insert a new sale. The referenced client is only checked by the
    /// foreign key, which does not distinguish soft-deleted clients.
    pub async fn create(
        db: &PgPool,
        client_id: i32,
        amount: Decimal,
        sale_date: Date,
        description: Option<&str>,
        created_by: i32,
    ) -> Result<Sale, sqlx::Error> {
        sqlx::query_as::<_, Sale>(
            r#"
            INSERT INTO sales (client_id, amount, sale_date, description, created_by, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id, client_id, amount, sale_date, description, created_by,
                      created_at, updated_at
            "#,
        )
        .bind(client_id)
        .bind(amount)
        .bind(sale_date)
        .bind(description)
        .bind(created_by)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i32) -> Result<Option<SaleView>, sqlx::Error> {
        sqlx::query_as::<_, SaleView>(
            r#"
            SELECT s.id, s.client_id, c.name AS client_name, s.amount, s.sale_date,
                   s.description, s.created_by, u.name AS created_by_name,
                   s.created_at, s.updated_at
            FROM sales s
            LEFT JOIN clients c ON s.client_id = c.id
            LEFT JOIN users u ON s.created_by = u.id
            WHERE s.id = $1 AND s.deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn find_all(db: &PgPool) -> Result<Vec<SaleView>, sqlx::Error> {
        sqlx::query_as::<_, SaleView>(
            r#"
            SELECT s.id, s.client_id, c.name AS client_name, s.amount, s.sale_date,
                   s.description, s.created_by, u.name AS created_by_name,
                   s.created_at, s.updated_at
            FROM sales s
            LEFT JOIN clients c ON s.client_id = c.id
            LEFT JOIN users u ON s.created_by = u.id
            WHERE s.deleted_at IS NULL
            ORDER BY s.created_at DESC
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn find_by_client_id(
        db: &PgPool,
        client_id: i32,
    ) -> Result<Vec<SaleView>, sqlx::Error> {
        sqlx::query_as::<_, SaleView>(
            r#"
            SELECT s.id, s.client_id, c.name AS client_name, s.amount, s.sale_date,
                   s.description, s.created_by, u.name AS created_by_name,
                   s.created_at, s.updated_at
            FROM sales s
            LEFT JOIN clients c ON s.client_id = c.id
            LEFT JOIN users u ON s.created_by = u.id
            WHERE s.client_id = $1 AND s.deleted_at IS NULL
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(client_id)
        .fetch_all(db)
        .await
    }

    /// Full-row overwrite: every mutable column is written; an absent
    /// description becomes NULL.
    pub async fn update(
        db: &PgPool,
        id: i32,
        client_id: i32,
        amount: Decimal,
        sale_date: Date,
        description: Option<&str>,
    ) -> Result<Option<Sale>, sqlx::Error> {
        sqlx::query_as::<_, Sale>(
            r#"
            UPDATE sales
            SET client_id = $1, amount = $2, sale_date = $3, description = $4, updated_at = NOW()
            WHERE id = $5 AND deleted_at IS NULL
            RETURNING id, client_id, amount, sale_date, description, created_by,
                      created_at, updated_at
            "#,
        )
        .bind(client_id)
        .bind(amount)
        .bind(sale_date)
        .bind(description)
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Soft delete, same contract as the client delete: a second call on the
    /// same id matches nothing.
    pub async fn delete(db: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE sales SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(db)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}

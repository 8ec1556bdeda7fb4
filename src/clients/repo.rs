use sqlx::PgPool;

use super::repo_types::{Client, ClientView};

impl Client {
    pub async fn create(
        db: &PgPool,
        name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        address: Option<&str>,
        created_by: i32,
    ) -> Result<Client, sqlx::Error> {
        sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, email, phone, address, created_by, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id, name, email, phone, address, created_by, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(address)
        .bind(created_by)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i32) -> Result<Option<ClientView>, sqlx::Error> {
        sqlx::query_as::<_, ClientView>(
            r#"
            SELECT c.id, c.name, c.email, c.phone, c.address, c.created_by,
                   u.name AS created_by_name, c.created_at, c.updated_at
            FROM clients c
            LEFT JOIN users u ON c.created_by = u.id
            WHERE c.id = $1 AND c.deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn find_all(db: &PgPool) -> Result<Vec<ClientView>, sqlx::Error> {
        sqlx::query_as::<_, ClientView>(
            r#"
            SELECT c.id, c.name, c.email, c.phone, c.address, c.created_by,
                   u.name AS created_by_name, c.created_at, c.updated_at
            FROM clients c
            LEFT JOIN users u ON c.created_by = u.id
            WHERE c.deleted_at IS NULL
            ORDER BY c.created_at DESC
            "#,
        )
        .fetch_all(db)
        .await
    }

    /// Full-row overwrite: every mutable column is written; absent optional
    /// fields become NULL.
    pub async fn update(
        db: &PgPool,
        id: i32,
        name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        address: Option<&str>,
    ) -> Result<Option<Client>, sqlx::Error> {
        sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET name = $1, email = $2, phone = $3, address = $4, updated_at = NOW()
            WHERE id = $5 AND deleted_at IS NULL
            RETURNING id, name, email, phone, address, created_by, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(address)
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Soft delete. A row that is already deleted does not match again, so
    /// the second delete on the same id reports no rows.
    pub async fn delete(db: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE clients SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(db)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}

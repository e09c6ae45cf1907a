//! PostgreSQL implementation of the LinkStore.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for short links.
///
/// Every method runs a single statement against the pool, so a connection is
/// held only for the duration of that statement.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    tenant: String,
    code: String,
    destination: String,
    expiry: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for ShortLink {
    fn from(r: LinkRow) -> Self {
        ShortLink::new(r.id, r.tenant, r.code, r.destination, r.expiry, r.created_at)
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_active_destination(&self, code: &str) -> Result<Option<String>, AppError> {
        let destination = sqlx::query_scalar::<_, String>(
            r#"
            SELECT destination
            FROM links
            WHERE code = $1
              AND (expiry IS NULL OR expiry > NOW())
            ORDER BY created_at ASC, id ASC
            LIMIT 1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(destination)
    }

    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (tenant, code, destination, expiry)
            VALUES ($1, $2, $3, $4)
            RETURNING id, tenant, code, destination, expiry, created_at
            "#,
        )
        .bind(&new_link.tenant)
        .bind(&new_link.code)
        .bind(&new_link.destination)
        .bind(new_link.expiry)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM links WHERE code = $1)",
        )
        .bind(code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn list_by_tenant(&self, tenant: &str) -> Result<Vec<ShortLink>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, tenant, code, destination, expiry, created_at
            FROM links
            WHERE tenant = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(tenant)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortLink::from).collect())
    }

    async fn delete(&self, tenant: &str, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE tenant = $1 AND code = $2")
            .bind(tenant)
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}

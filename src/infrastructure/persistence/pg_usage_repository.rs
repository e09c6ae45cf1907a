//! PostgreSQL implementation of the UsageLedger.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UsageEvent;
use crate::domain::repositories::UsageRepository;
use crate::domain::window::LookbackWindow;
use crate::error::AppError;

/// PostgreSQL repository for usage events.
///
/// Timestamps and window bounds both use the database clock (`NOW()`), so
/// application hosts with skewed clocks cannot shift analytics.
pub struct PgUsageRepository {
    pool: Arc<PgPool>,
}

impl PgUsageRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UsageRow {
    id: i64,
    code: String,
    occurred_at: DateTime<Utc>,
}

#[async_trait]
impl UsageRepository for PgUsageRepository {
    async fn append(&self, code: &str) -> Result<UsageEvent, AppError> {
        let row = sqlx::query_as::<_, UsageRow>(
            r#"
            INSERT INTO usage_events (code, occurred_at)
            VALUES ($1, NOW())
            RETURNING id, code, occurred_at
            "#,
        )
        .bind(code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(UsageEvent::new(row.id, row.code, row.occurred_at))
    }

    async fn count(&self, code: &str, window: LookbackWindow) -> Result<i64, AppError> {
        // The bound comes from the closed window enum as seconds; nothing from
        // the request path reaches the SQL text.
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM usage_events
            WHERE code = $1
              AND ($2::bigint IS NULL OR occurred_at >= NOW() - $2::bigint * INTERVAL '1 second')
            "#,
        )
        .bind(code)
        .bind(window.lookback_seconds())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}

//! Connection pool setup.

use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::config::Config;

/// Opens the shared connection pool, retrying the initial connect with
/// jittered exponential backoff.
///
/// Pool size and timeouts come from `DB_*` settings. Retries cover only
/// startup; statements issued later are never retried.
///
/// # Errors
///
/// Returns an error if every attempt fails.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let strategy = ExponentialBackoff::from_millis(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(config.db_connect_retries);

    let mut attempt = 0u32;
    Retry::spawn(strategy, || {
        attempt += 1;
        let options = options.clone();
        let url = config.database_url.clone();
        async move {
            options.connect(&url).await.inspect_err(|e| {
                tracing::warn!(attempt, error = %e, "Database connection attempt failed");
            })
        }
    })
    .await
    .context("Failed to connect to database")
}

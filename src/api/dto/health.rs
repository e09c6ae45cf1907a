//! Health report for `GET /health`.

use serde::Serialize;

/// Overall state: `healthy` while the database answers, `degraded` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Healthy,
    Degraded,
}

/// Health report. The database is the only dependency checked.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceState,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: DatabaseCheck,
}

/// Outcome of the database round-trip.
#[derive(Debug, Serialize)]
pub struct DatabaseCheck {
    pub status: &'static str,
    pub message: String,
}

impl DatabaseCheck {
    pub fn connected() -> Self {
        Self {
            status: "ok",
            message: "Connected".to_string(),
        }
    }

    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Self {
            status: "error",
            message: format!("Database error: {reason}"),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

impl HealthResponse {
    pub fn from_database(database: DatabaseCheck) -> Self {
        let status = if database.is_ok() {
            ServiceState::Healthy
        } else {
            ServiceState::Degraded
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { database },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ServiceState::Healthy
    }
}

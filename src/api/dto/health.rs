//! DTOs for health check endpoint.

use serde::Serialize;

/// Body of `GET /health`: overall status plus the database check result.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: &'static str,
    pub message: &'static str,
}

impl CheckStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            message: "Connected",
        }
    }

    pub fn unreachable() -> Self {
        Self {
            status: "error",
            message: "Database unreachable",
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

impl HealthResponse {
    /// Builds the response; the service is `healthy` only if the database answered.
    pub fn from_database(database: CheckStatus) -> Self {
        Self {
            status: if database.is_ok() { "healthy" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { database },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.checks.database.is_ok()
    }
}

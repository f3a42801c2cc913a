use sea_orm::DatabaseConnection;
use std::time::Instant;
use tracing::{debug, warn};

use crate::common::{DatabaseError, DatabaseResult};

/// Outcome of a timed ping, used by readiness probes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub healthy: bool,
    pub response_time_ms: u64,
    pub message: Option<String>,
}

/// Ping the pool
pub async fn check_health(db: &DatabaseConnection) -> DatabaseResult<()> {
    db.ping().await.map_err(|e| {
        warn!(error = %e, "PostgreSQL ping failed");
        DatabaseError::HealthCheckFailed(e.to_string())
    })?;
    debug!("PostgreSQL ping succeeded");
    Ok(())
}

/// Ping the pool and report how long it took. Never fails.
pub async fn check_health_detailed(db: &DatabaseConnection) -> HealthStatus {
    let start = Instant::now();
    let result = check_health(db).await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(()) => HealthStatus {
            healthy: true,
            response_time_ms,
            message: None,
        },
        Err(e) => HealthStatus {
            healthy: false,
            response_time_ms,
            message: Some(e.to_string()),
        },
    }
}

//! Liveness payload for the health-check route.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Path answered by the responder itself instead of the asset resolver.
pub const HEALTH_PATH: &str = "/api/health";

/// Body of a health-check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `true` while the process can answer requests.
    pub ok: bool,

    /// ISO-8601 instant the payload was produced, millisecond precision, UTC.
    pub ts: String,
}

impl HealthStatus {
    /// Payload stamped with the given instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            ok: true,
            ts: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Payload stamped with the current instant.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }
}

/// Returns true when `path` is the health-check route.
///
/// Exact match: `/api/health/` is not the health route.
pub fn is_health_path(path: &str) -> bool {
    path == HEALTH_PATH
}

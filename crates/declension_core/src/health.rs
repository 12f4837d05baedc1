//! Liveness reporting.

use serde::Serialize;

const STATUS_OK: &str = "ok";

/// Liveness payload, serialized as `{"status":"ok","version":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Returns process liveness; reaching this code means the process is up.
pub fn health() -> HealthStatus {
    HealthStatus {
        status: STATUS_OK,
        version: core_version(),
    }
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Crate settings loaded from environment variables.

use std::env;
use std::time::Duration;

use super::constants::{DEFAULT_OP_TIMEOUT_MS, ENV_OP_TIMEOUT_MS};

/// Runtime tunables for repository instances.
///
/// Collection names and store connections are injected by the composition
/// root, not configured here; only ambient knobs live in settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Deadline applied to every store-touching operation
    pub op_timeout: Duration,
}

impl Settings {
    /// Load settings from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let op_timeout_ms = env::var(ENV_OP_TIMEOUT_MS)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_OP_TIMEOUT_MS);

        Self {
            op_timeout: Duration::from_millis(op_timeout_ms),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            op_timeout: Duration::from_millis(DEFAULT_OP_TIMEOUT_MS),
        }
    }
}

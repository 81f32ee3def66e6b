//! Remote source settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{RemoteError, RemoteResult};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const MAX_TIMEOUT_SECS: u64 = 120;

/// Settings for the optional remote chart service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub enabled: bool,
    /// Full URL the chart request is POSTed to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Upper bound on the whole exchange, in seconds.
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> RemoteResult<()> {
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(RemoteError::Config(format!(
                "timeout_secs must be in 1..={MAX_TIMEOUT_SECS}, got {}",
                self.timeout_secs
            )));
        }
        if self.enabled && self.endpoint.as_deref().is_none_or(|e| e.trim().is_empty()) {
            return Err(RemoteError::Config(
                "enabled remote needs an endpoint".to_string(),
            ));
        }
        Ok(())
    }
}

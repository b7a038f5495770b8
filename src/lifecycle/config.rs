//! Runtime configuration for the console.
//!
//! Everything has a default. A JSON document in `INVENTORY_CONSOLE_CONFIG` overrides
//! any subset of the fields:
//!
//! ```text
//! INVENTORY_CONSOLE_CONFIG='{"actorBufferSize": 64, "replenishment": {"clampNegativeRestock": false}}'
//! ```

use crate::replenishment::{DashboardLimits, ReplenishmentPolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Environment variable holding the JSON configuration.
pub const CONFIG_ENV: &str = "INVENTORY_CONSOLE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid INVENTORY_CONSOLE_CONFIG: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("actorBufferSize must be at least 1")]
    ZeroBuffer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsoleConfig {
    /// Mailbox capacity of each resource actor.
    pub actor_buffer_size: usize,
    pub replenishment: ReplenishmentPolicy,
    pub recent_products: usize,
    pub recent_alerts: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        let limits = DashboardLimits::default();
        Self {
            actor_buffer_size: 32,
            replenishment: ReplenishmentPolicy::default(),
            recent_products: limits.recent_products,
            recent_alerts: limits.recent_alerts,
        }
    }
}

impl ConsoleConfig {
    /// Parses a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ConsoleConfig = serde_json::from_str(json)?;
        if config.actor_buffer_size == 0 {
            return Err(ConfigError::ZeroBuffer);
        }
        Ok(config)
    }

    /// Reads [`CONFIG_ENV`], falling back to the defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV) {
            Ok(json) => {
                info!("Loading configuration from {CONFIG_ENV}");
                Self::from_json(&json)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn dashboard_limits(&self) -> DashboardLimits {
        DashboardLimits {
            recent_products: self.recent_products,
            recent_alerts: self.recent_alerts,
        }
    }
}

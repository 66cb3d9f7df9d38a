use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;
use self::notification::NotificationConfig;
use self::scan::ScanConfig;
use self::source::SourceConfig;

pub mod network;
pub mod notification;
pub mod scan;
pub mod source;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub scan: ScanConfig,
    pub source: SourceConfig,
    pub notification: NotificationConfig,
}

impl Config {
    /// Build the config from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            network: NetworkConfig::new(),
            scan: ScanConfig::new(),
            source: SourceConfig::new(),
            notification: NotificationConfig::new(),
        }
    }
}

/// Parse an environment variable, `None` when unset or malformed
pub(crate) fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

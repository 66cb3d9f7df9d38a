use std::time::Duration;

use serde::{Deserialize, Serialize};
use verity_types::MIN_TEXT_LENGTH;

use crate::env_parse;

fn default_min_text_length() -> usize {
    MIN_TEXT_LENGTH
}

fn default_poll_interval_ms() -> u64 {
    2000
}

fn default_debounce_ms() -> u64 {
    3000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,
    /// How often the document source is sampled
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Quiet period before a real-time scan is sent
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_text_length: default_min_text_length(),
            poll_interval_ms: default_poll_interval_ms(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl ScanConfig {
    pub fn new() -> Self {
        Self {
            min_text_length: env_parse("MIN_TEXT_LENGTH").unwrap_or_else(default_min_text_length),
            poll_interval_ms: env_parse("POLL_INTERVAL_MS")
                .unwrap_or_else(default_poll_interval_ms),
            debounce_ms: env_parse("DEBOUNCE_MS").unwrap_or_else(default_debounce_ms),
        }
    }

    /// Poll period, never zero
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

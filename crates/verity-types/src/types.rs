use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

/// Minimum number of characters a scan request must carry
pub const MIN_TEXT_LENGTH: usize = 150;

/// Outcome of a single scan, exactly one of result or error
pub type ScanOutcome = Result<ScanResult, ScanError>;

#[derive(Debug)]
pub enum AppEvent {
    /// Manual scan, answered through `reply`
    ScanText {
        text: String,
        reply: oneshot::Sender<ScanOutcome>,
    },
    /// Document change picked up by a text source
    RealTimeScan(String),
    /// Status line from a watcher task
    SourceStatus { origin: TextOrigin, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    Manual,
    Realtime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub text: String,
    pub mode: ScanMode,
}

impl ScanRequest {
    pub fn manual(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: ScanMode::Manual,
        }
    }

    pub fn realtime(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: ScanMode::Realtime,
        }
    }

    /// Length in characters, the unit every threshold is expressed in
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextOrigin {
    Document,
    Clipboard,
    Websocket,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub ai_fraction: f64,
    pub human_fraction: f64,
    pub suggestions: Vec<String>,
}

impl ScanResult {
    /// AI likelihood as a percentage rounded to one decimal
    pub fn ai_percent(&self) -> f64 {
        round_tenth(self.ai_fraction * 100.0)
    }

    pub fn human_percent(&self) -> f64 {
        round_tenth(self.human_fraction * 100.0)
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanError {
    #[serde(rename = "error")]
    pub message: String,
}

impl ScanError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ScanError {}

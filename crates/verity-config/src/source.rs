use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Poll a document file, one rendered line per file line
    #[default]
    File,
    Clipboard,
    /// Full-text snapshots pushed by an editor bridge
    Websocket,
}

impl SourceKind {
    fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Some(Self::File),
            "clipboard" => Some(Self::Clipboard),
            "websocket" | "ws" => Some(Self::Websocket),
            _ => None,
        }
    }
}

fn default_document_path() -> PathBuf {
    PathBuf::from("document.txt")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    #[serde(default = "default_document_path")]
    pub document_path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            document_path: default_document_path(),
        }
    }
}

impl SourceConfig {
    pub fn new() -> Self {
        let kind = env::var("TEXT_SOURCE")
            .ok()
            .and_then(|v| SourceKind::from_env_value(&v))
            .unwrap_or_default();
        let document_path = env::var("DOCUMENT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_document_path());

        Self {
            kind,
            document_path,
        }
    }
}

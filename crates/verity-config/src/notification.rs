use std::env;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifierKind {
    #[default]
    Desktop,
    /// Only write notifications to the log
    Log,
}

fn default_icon() -> String {
    "icons/icon48.png".to_string()
}

fn default_max_error_chars() -> usize {
    100
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub notifier: NotifierKind,
    #[serde(default = "default_icon")]
    pub icon: String,
    /// Error messages are cut to this many characters in the body
    #[serde(default = "default_max_error_chars")]
    pub max_error_chars: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            notifier: NotifierKind::default(),
            icon: default_icon(),
            max_error_chars: default_max_error_chars(),
        }
    }
}

impl NotificationConfig {
    pub fn new() -> Self {
        let notifier = match env::var("NOTIFIER").as_deref() {
            Ok("log") => NotifierKind::Log,
            _ => NotifierKind::Desktop,
        };
        let icon = env::var("NOTIFICATION_ICON").unwrap_or_else(|_| default_icon());

        Self {
            notifier,
            icon,
            max_error_chars: default_max_error_chars(),
        }
    }
}

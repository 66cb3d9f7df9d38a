mod desktop;
mod format;
mod presenter;

pub use desktop::DesktopNotifier;
pub use format::{SUGGESTION_SEPARATOR, format_error, format_outcome, format_result};
pub use presenter::ResultPresenter;

use std::sync::Arc;

use verity_config::notification::{NotificationConfig, NotifierKind};

/// A basic desktop notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub icon: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Failed to launch notifier: {0}")]
    Launch(#[from] std::io::Error),

    #[error("Notifier exited with {0}")]
    Exit(std::process::ExitStatus),

    #[error("No desktop notifier on this platform")]
    Unsupported,
}

/// Notification capability of the host
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Writes notifications to the log instead of the desktop
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        tracing::info!(
            title = %notification.title,
            body = %notification.body,
            "notification"
        );
        Ok(())
    }
}

/// Build the notifier selected in the config
pub fn notifier_from_config(config: &NotificationConfig) -> Arc<dyn Notifier> {
    match config.notifier {
        NotifierKind::Desktop => Arc::new(DesktopNotifier),
        NotifierKind::Log => Arc::new(LogNotifier),
    }
}

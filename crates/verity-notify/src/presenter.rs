use std::sync::Arc;

use verity_config::notification::NotificationConfig;
use verity_types::ScanOutcome;

use crate::{Notifier, format_outcome};

/// Turns real-time scan outcomes into notifications
#[derive(Clone)]
pub struct ResultPresenter {
    notifier: Arc<dyn Notifier>,
    icon: String,
    max_error_chars: usize,
}

impl ResultPresenter {
    pub fn new(notifier: Arc<dyn Notifier>, config: &NotificationConfig) -> Self {
        Self {
            notifier,
            icon: config.icon.clone(),
            max_error_chars: config.max_error_chars,
        }
    }

    /// Notify the user about a finished real-time scan, success or not
    pub async fn display_realtime_result(&self, outcome: &ScanOutcome) {
        if let Err(e) = outcome {
            tracing::error!("Real-time scan error: {e}");
        }

        let notification = format_outcome(outcome, &self.icon, self.max_error_chars);
        if let Err(e) = self.notifier.notify(&notification).await {
            tracing::warn!("Failed to show notification: {e}");
        }
    }
}

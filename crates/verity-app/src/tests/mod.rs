mod pipeline_tests;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use verity_config::notification::NotificationConfig;
use verity_detector::{Classifier, DetectError};
use verity_notify::{Notification, Notifier, NotifyError, ResultPresenter};
use verity_types::ScanResult;

/// Classifier double that remembers every text it was asked about
pub struct RecordingClassifier {
    calls: Mutex<Vec<String>>,
    latency: Duration,
}

impl RecordingClassifier {
    pub fn new() -> Arc<Self> {
        Self::with_latency(Duration::ZERO)
    }

    pub fn with_latency(latency: Duration) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            latency,
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Classifier for RecordingClassifier {
    async fn classify(&self, text: &str) -> Result<ScanResult, DetectError> {
        self.calls.lock().unwrap().push(text.to_string());
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(ScanResult {
            ai_fraction: 0.873,
            human_fraction: 0.127,
            suggestions: vec!["a".to_string(), "b".to_string()],
        })
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

pub fn recording_presenter() -> (ResultPresenter, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let presenter = ResultPresenter::new(notifier.clone(), &NotificationConfig::default());
    (presenter, notifier)
}

/// Poll `condition` until it holds or `limit` runs out
pub async fn wait_until(limit: Duration, condition: impl Fn() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + limit;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}

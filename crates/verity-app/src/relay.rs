use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use verity_detector::Classifier;
use verity_notify::ResultPresenter;
use verity_types::ScanOutcome;

/// Validate-then-classify, shared by the manual and real-time paths
#[derive(Clone)]
pub struct Scanner {
    classifier: Arc<dyn Classifier>,
    min_len: usize,
}

impl Scanner {
    pub fn new(classifier: Arc<dyn Classifier>, min_len: usize) -> Self {
        Self {
            classifier,
            min_len,
        }
    }

    pub async fn scan(&self, text: &str) -> ScanOutcome {
        verity_detector::scan(self.classifier.as_ref(), text, self.min_len).await
    }
}

struct PendingScan {
    text: String,
    cancel: CancellationToken,
    fired: Arc<AtomicBool>,
    _handle: JoinHandle<()>,
}

/// The single real-time timer slot
#[derive(Default)]
pub struct DebounceState {
    pending: Option<PendingScan>,
}

impl DebounceState {
    /// Text waiting on an armed timer, `None` once it fired
    pub fn pending_text(&self) -> Option<&str> {
        self.pending
            .as_ref()
            .filter(|p| !p.fired.load(Ordering::SeqCst))
            .map(|p| p.text.as_str())
    }

    pub fn is_armed(&self) -> bool {
        self.pending_text().is_some()
    }

    /// Disarm the current timer; a scan already past its timer is left alone
    fn cancel(&mut self) {
        if let Some(text) = self.pending_text() {
            tracing::debug!(
                "Dropping superseded real-time scan ({} chars)",
                text.chars().count()
            );
        }
        if let Some(prev) = self.pending.take() {
            prev.cancel.cancel();
        }
    }

    fn arm(&mut self, next: PendingScan) {
        self.cancel();
        self.pending = Some(next);
    }
}

/// Background coordinator for scan requests
pub struct ScanRelay {
    scanner: Scanner,
    presenter: ResultPresenter,
    debounce_delay: Duration,
    debounce: DebounceState,
    cancel: CancellationToken,
}

impl ScanRelay {
    pub fn new(
        scanner: Scanner,
        presenter: ResultPresenter,
        debounce_delay: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            scanner,
            presenter,
            debounce_delay,
            debounce: DebounceState::default(),
            cancel,
        }
    }

    pub fn scanner(&self) -> Scanner {
        self.scanner.clone()
    }

    pub fn debounce(&self) -> &DebounceState {
        &self.debounce
    }

    /// Replace any armed timer with one carrying `text`
    ///
    /// The outcome goes to the presenter once the timer fires.
    pub fn schedule_realtime_scan(&mut self, text: String) {
        self.debounce.cancel();

        let cancel = self.cancel.child_token();
        let fired = Arc::new(AtomicBool::new(false));
        let handle = tokio::spawn(fire_after_quiet_period(
            self.debounce_delay,
            cancel.clone(),
            fired.clone(),
            self.scanner.clone(),
            self.presenter.clone(),
            text.clone(),
        ));

        self.debounce.arm(PendingScan {
            text,
            cancel,
            fired,
            _handle: handle,
        });
    }

    pub fn cancel_pending(&mut self) {
        self.debounce.cancel();
    }
}

async fn fire_after_quiet_period(
    delay: Duration,
    cancel: CancellationToken,
    fired: Arc<AtomicBool>,
    scanner: Scanner,
    presenter: ResultPresenter,
    text: String,
) {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => return,
        _ = tokio::time::sleep(delay) => {}
    }
    fired.store(true, Ordering::SeqCst);

    tracing::info!("Running real-time scan...");
    let outcome = scanner.scan(&text).await;
    presenter.display_realtime_result(&outcome).await;
}

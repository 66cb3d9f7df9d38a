use std::time::Duration;

use tokio::time;

use crate::{ChangeDetector, TextSource};

/// Shortest accepted poll period
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Poll `source` forever, calling `on_text` for every qualifying change
///
/// The first sample is taken one period after the call.
pub async fn watch_source<S, F>(mut source: S, every: Duration, min_len: usize, mut on_text: F)
where
    S: TextSource,
    F: FnMut(String) + Send + 'static,
{
    let mut detector = ChangeDetector::new(min_len);
    let every = every.max(MIN_POLL_INTERVAL);
    let mut interval = time::interval_at(time::Instant::now() + every, every);
    interval.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        if let Some(text) = detector.observe(source.get_text()) {
            tracing::debug!("Document changed ({} chars)", text.chars().count());
            on_text(text);
        }
    }
}

use std::sync::Arc;

use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use verity_detector::Classifier;
use verity_notify::ResultPresenter;
use verity_types::{AppEvent, ScanRequest};

use crate::relay::{ScanRelay, Scanner};
use crate::state::AppState;

pub mod scan_text;

use scan_text::handle_scan_text;

/// App's main loop, sole owner of the scan relay
pub async fn event_loop(
    state: Arc<AppState>,
    events_rx: AsyncReceiver<AppEvent>,
    classifier: Arc<dyn Classifier>,
    presenter: ResultPresenter,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut relay = {
        let config = state.config.read().await;
        ScanRelay::new(
            Scanner::new(classifier, config.scan.min_text_length),
            presenter,
            config.scan.debounce_delay(),
            cancel.child_token(),
        )
    };

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = events_rx.recv() => event?,
        };

        handle_event(&mut relay, event);
    }

    if relay.debounce().is_armed() {
        tracing::info!("[EVENT_LOOP] Discarding real-time scan still waiting on its timer");
    }
    relay.cancel_pending();
    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}

fn handle_event(relay: &mut ScanRelay, event: AppEvent) {
    match event {
        AppEvent::ScanText { text, reply } => {
            let request = ScanRequest::manual(text);
            tracing::debug!("Manual scan requested ({} chars)", request.char_len());
            handle_scan_text(relay.scanner(), request, reply);
        }
        AppEvent::RealTimeScan(text) => {
            let request = ScanRequest::realtime(text);
            tracing::debug!("Real-time scan scheduled ({} chars)", request.char_len());
            relay.schedule_realtime_scan(request.text);
        }
        AppEvent::SourceStatus { origin, message } => {
            tracing::info!("[{origin:?}] {message}");
        }
    }
}

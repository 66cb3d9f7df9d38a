use std::sync::Arc;

use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;
use verity_config::source::SourceKind;
use verity_io::{ChangeDetector, ClipboardSource, DocumentFileSource, watch_source};
use verity_types::{AppEvent, TextOrigin};

use crate::state::AppState;

/// Forward a detected change to the event loop without awaiting
fn forward(tx: &AsyncSender<AppEvent>, text: String) {
    match tx.try_send(AppEvent::RealTimeScan(text)) {
        Ok(true) => {}
        Ok(false) => tracing::warn!("Event queue full, dropping document change"),
        Err(e) => tracing::error!("Failed to send document change to app: {e}"),
    }
}

/// Watches the configured text source until cancelled
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (source, poll_interval, min_len, ws_url) = {
        let config = state.config.read().await;
        (
            config.source.clone(),
            config.scan.poll_interval(),
            config.scan.min_text_length,
            config.network.ws_url.clone(),
        )
    };

    match source.kind {
        SourceKind::File => {
            tracing::info!("Watching document {}", source.document_path.display());

            let tx = event_tx.clone();
            let document = DocumentFileSource::new(&source.document_path);
            tokio::select! {
                _ = watch_source(document, poll_interval, min_len, move |text| forward(&tx, text)) => {}
                _ = cancel.cancelled() => {
                    tracing::info!("Document watcher stopping");
                }
            }
        }
        SourceKind::Clipboard => {
            tracing::info!("Starting clipboard watcher");

            let tx = event_tx.clone();
            let clipboard = ClipboardSource::new()?;
            tokio::select! {
                _ = watch_source(clipboard, poll_interval, min_len, move |text| forward(&tx, text)) => {}
                _ = cancel.cancelled() => {
                    tracing::info!("Clipboard watcher stopping");
                }
            }
        }
        SourceKind::Websocket => {
            tracing::info!("Starting editor bridge listener on {ws_url}");

            // Snapshots that arrive across reconnects still dedupe against each other
            let detector = Arc::new(std::sync::Mutex::new(ChangeDetector::new(min_len)));
            while !cancel.is_cancelled() {
                let tx = event_tx.clone();
                let detector = detector.clone();
                let listener = verity_io::ws::start_ws_listener(&ws_url, move |text| {
                    let changed = match detector.lock() {
                        Ok(mut detector) => detector.observe(text),
                        Err(_) => None,
                    };
                    if let Some(text) = changed {
                        forward(&tx, text);
                    }
                });

                let reason = tokio::select! {
                    result = listener => match result {
                        Ok(()) => "editor bridge closed the connection".to_string(),
                        Err(e) => format!("editor bridge unavailable: {e}"),
                    },
                    _ = cancel.cancelled() => break,
                };

                let status = AppEvent::SourceStatus {
                    origin: TextOrigin::Websocket,
                    message: reason,
                };
                if let Err(e) = event_tx.send(status).await {
                    tracing::error!("Failed to send source status to app: {e}");
                }

                tokio::select! {
                    _ = tokio::time::sleep(poll_interval) => {}
                    _ = cancel.cancelled() => break,
                }
            }
            tracing::info!("Editor bridge listener stopping");
        }
    }

    Ok(())
}

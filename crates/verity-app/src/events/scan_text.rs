use tokio::sync::oneshot;
use verity_types::{ScanOutcome, ScanRequest};

use crate::relay::Scanner;

/// Run a manual scan off the event loop and answer the requester
pub fn handle_scan_text(
    scanner: Scanner,
    request: ScanRequest,
    reply: oneshot::Sender<ScanOutcome>,
) {
    tokio::spawn(async move {
        let outcome = scanner.scan(&request.text).await;
        if reply.send(outcome).is_err() {
            tracing::warn!("Manual scan requester went away before the result arrived");
        }
    });
}

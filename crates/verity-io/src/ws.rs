use futures_util::StreamExt;
use tokio_tungstenite::connect_async;

use crate::join_lines;

/// Receive full-text document snapshots pushed by an editor bridge
///
/// Snapshots get the same trailing-whitespace trim as the other sources.
/// Returns once the bridge closes the connection.
pub async fn start_ws_listener<F>(url: &str, mut on_text: F) -> Result<(), anyhow::Error>
where
    F: FnMut(String) + Send + 'static,
{
    let (ws_stream, _) = connect_async(url).await?;
    let (_, mut read) = ws_stream.split();

    tracing::info!("Connected to editor bridge at {url}");

    while let Some(msg) = read.next().await {
        match msg {
            Ok(msg) if msg.is_text() => {
                if let Ok(text) = msg.into_text() {
                    on_text(join_lines(text.as_str().lines()));
                }
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Editor bridge read failed: {e}");
                break;
            }
        }
    }

    Ok(())
}

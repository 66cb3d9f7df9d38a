use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::{sleep, timeout};
use verity_config::Config;
use verity_config::source::SourceKind;
use verity_detector::DetectorClient;
use verity_test_utils::{FakeEndpoint, score_body, text_of_len};
use verity_types::AppEvent;

use super::{recording_presenter, wait_until};
use crate::controller::AppController;
use crate::state::AppState;

fn test_config(endpoint: &FakeEndpoint, document: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.network.endpoint_url = endpoint.url();
    config.source.kind = SourceKind::File;
    config.source.document_path = document.to_path_buf();
    config.scan.poll_interval_ms = 10;
    config.scan.debounce_ms = 100;
    config
}

fn sent_text(endpoint: &FakeEndpoint, idx: usize) -> String {
    let body: serde_json::Value = serde_json::from_str(&endpoint.requests()[idx].body).unwrap();
    body["text"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_document_change_ends_in_one_notification() {
    let endpoint = FakeEndpoint::start(200, score_body(87.3, 12.7, &["a", "b"]))
        .await
        .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let document = dir.path().join("doc.txt");
    let text = text_of_len(160);
    std::fs::write(&document, &text).unwrap();

    let (presenter, notifier) = recording_presenter();
    let classifier = Arc::new(DetectorClient::new(endpoint.url()));
    let controller = AppController::new(Arc::new(AppState::new(test_config(&endpoint, &document))));
    let mut tasks = controller.spawn_tasks(classifier, presenter);

    assert!(wait_until(Duration::from_secs(3), || notifier.sent().len() == 1).await);

    // Unchanged document: nothing more goes out
    sleep(Duration::from_millis(250)).await;
    assert_eq!(endpoint.hits(), 1);
    assert_eq!(sent_text(&endpoint, 0), text);

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].title, "AI Score: 87.3% | Human Score: 12.7%");
    assert_eq!(sent[0].body, "Suggestions: a | b");

    controller.shutdown();
    while tasks.join_next().await.is_some() {}
}

#[tokio::test]
async fn test_rapid_edits_send_only_the_last() {
    let endpoint = FakeEndpoint::start(200, score_body(40.0, 60.0, &[]))
        .await
        .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let document = dir.path().join("doc.txt");

    let (presenter, notifier) = recording_presenter();
    let classifier = Arc::new(DetectorClient::new(endpoint.url()));
    let controller = AppController::new(Arc::new(AppState::new(test_config(&endpoint, &document))));
    let mut tasks = controller.spawn_tasks(classifier, presenter);

    let versions: Vec<String> = (1..=3).map(|n| format!("{} v{n}", text_of_len(160))).collect();
    for version in &versions {
        std::fs::write(&document, version).unwrap();
        sleep(Duration::from_millis(30)).await;
    }

    assert!(wait_until(Duration::from_secs(3), || notifier.sent().len() == 1).await);
    sleep(Duration::from_millis(200)).await;

    assert_eq!(endpoint.hits(), 1);
    assert_eq!(sent_text(&endpoint, 0), versions[2]);

    controller.shutdown();
    while tasks.join_next().await.is_some() {}
}

#[tokio::test]
async fn test_short_document_is_never_sent() {
    let endpoint = FakeEndpoint::start(200, score_body(40.0, 60.0, &[]))
        .await
        .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let document = dir.path().join("doc.txt");
    std::fs::write(&document, text_of_len(150)).unwrap();

    let (presenter, notifier) = recording_presenter();
    let classifier = Arc::new(DetectorClient::new(endpoint.url()));
    let controller = AppController::new(Arc::new(AppState::new(test_config(&endpoint, &document))));
    let mut tasks = controller.spawn_tasks(classifier, presenter);

    sleep(Duration::from_millis(300)).await;

    assert_eq!(endpoint.hits(), 0);
    assert!(notifier.sent().is_empty());

    controller.shutdown();
    while tasks.join_next().await.is_some() {}
}

#[tokio::test]
async fn test_manual_scan_replies_without_notification() {
    let endpoint = FakeEndpoint::start(500, "").await.unwrap();
    let dir = tempfile::tempdir().unwrap();
    let document = dir.path().join("missing.txt");

    let (presenter, notifier) = recording_presenter();
    let classifier = Arc::new(DetectorClient::new(endpoint.url()));
    let controller = AppController::new(Arc::new(AppState::new(test_config(&endpoint, &document))));
    let mut tasks = controller.spawn_tasks(classifier, presenter);

    let (reply, outcome) = oneshot::channel();
    controller
        .event_sender()
        .send(AppEvent::ScanText {
            text: text_of_len(200),
            reply,
        })
        .await
        .unwrap();

    let outcome = timeout(Duration::from_secs(3), outcome).await.unwrap().unwrap();
    let err = outcome.unwrap_err();
    assert!(err.message.contains("500"), "{}", err.message);
    assert_eq!(endpoint.hits(), 1);
    assert!(notifier.sent().is_empty());

    controller.shutdown();
    while tasks.join_next().await.is_some() {}
}

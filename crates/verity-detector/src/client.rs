use serde::{Deserialize, Serialize};
use verity_types::ScanResult;

use crate::{Classifier, DetectError};

#[derive(Clone)]
pub struct DetectorClient {
    endpoint_url: String,
    client: reqwest::Client,
}

impl DetectorClient {
    pub fn new(endpoint_url: String) -> Self {
        Self {
            endpoint_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

#[async_trait::async_trait]
impl Classifier for DetectorClient {
    async fn classify(&self, text: &str) -> Result<ScanResult, DetectError> {
        tracing::debug!("POST {} ({} chars)", self.endpoint_url, text.chars().count());

        let response = self
            .client
            .post(&self.endpoint_url)
            .json(&DetectRequest { text })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DetectError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        let response: DetectResponse = serde_json::from_slice(&body)
            .map_err(|e| DetectError::Malformed(e.to_string()))?;

        response.into_result()
    }
}

#[derive(Serialize)]
struct DetectRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct DetectResponse {
    ai_score: Option<f64>,
    human_score: Option<f64>,
    #[serde(default)]
    suggestions: Vec<String>,
    error: Option<String>,
}

impl DetectResponse {
    fn into_result(self) -> Result<ScanResult, DetectError> {
        if let Some(error) = self.error {
            return Err(DetectError::Service(error));
        }

        let ai_score = self
            .ai_score
            .ok_or_else(|| DetectError::Malformed("missing ai_score".to_string()))?;
        let human_score = self
            .human_score
            .ok_or_else(|| DetectError::Malformed("missing human_score".to_string()))?;

        Ok(ScanResult {
            ai_fraction: ai_score / 100.0,
            human_fraction: human_score / 100.0,
            suggestions: self.suggestions,
        })
    }
}

#[cfg(test)]
mod tests {
    use verity_test_utils::{FakeEndpoint, score_body, text_of_len, unreachable_url};
    use verity_types::MIN_TEXT_LENGTH;

    use super::*;
    use crate::scan;

    #[tokio::test]
    async fn test_success_normalizes_scores() {
        let endpoint = FakeEndpoint::start(200, score_body(87.3, 12.7, &["a", "b"]))
            .await
            .unwrap();
        let client = DetectorClient::new(endpoint.url());

        let result = client.classify(&text_of_len(200)).await.unwrap();

        assert!((result.ai_fraction - 0.873).abs() < 1e-9);
        assert!((result.human_fraction - 0.127).abs() < 1e-9);
        assert_eq!(result.suggestions, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_request_is_json_text_body() {
        let endpoint = FakeEndpoint::start(200, score_body(10.0, 90.0, &[]))
            .await
            .unwrap();
        let client = DetectorClient::new(endpoint.url());
        let text = text_of_len(160);

        client.classify(&text).await.unwrap();

        let requests = endpoint.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/api/detect-ai");
        assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
        assert_eq!(body, serde_json::json!({ "text": text }));
    }

    #[tokio::test]
    async fn test_http_failure_names_status() {
        let endpoint = FakeEndpoint::start(500, r#"{"error":"boom"}"#).await.unwrap();
        let client = DetectorClient::new(endpoint.url());

        let outcome = scan(&client, &text_of_len(MIN_TEXT_LENGTH), MIN_TEXT_LENGTH).await;

        let err = outcome.unwrap_err();
        assert!(err.message.contains("500"), "{}", err.message);
        assert!(!err.message.contains("boom"));
    }

    #[tokio::test]
    async fn test_service_error_is_verbatim() {
        let endpoint = FakeEndpoint::start(200, r#"{"error":"rate limited"}"#)
            .await
            .unwrap();
        let client = DetectorClient::new(endpoint.url());

        let outcome = scan(&client, &text_of_len(300), MIN_TEXT_LENGTH).await;

        assert_eq!(outcome.unwrap_err().message, "rate limited");
    }

    #[tokio::test]
    async fn test_malformed_json_is_an_error() {
        let endpoint = FakeEndpoint::start(200, "<html>not json</html>").await.unwrap();
        let client = DetectorClient::new(endpoint.url());

        let err = client.classify(&text_of_len(200)).await.unwrap_err();

        assert!(matches!(err, DetectError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        let client = DetectorClient::new(unreachable_url().await);

        let outcome = scan(&client, &text_of_len(200), MIN_TEXT_LENGTH).await;

        assert!(!outcome.unwrap_err().message.is_empty());
    }

    #[tokio::test]
    async fn test_short_text_never_reaches_network() {
        let endpoint = FakeEndpoint::start(200, score_body(50.0, 50.0, &[]))
            .await
            .unwrap();
        let client = DetectorClient::new(endpoint.url());

        let outcome = scan(&client, &text_of_len(149), MIN_TEXT_LENGTH).await;

        let err = outcome.unwrap_err();
        assert!(err.message.contains("149"));
        assert!(err.message.contains("150"));
        assert_eq!(endpoint.hits(), 0);
    }

    #[test]
    fn test_missing_suggestions_default_to_empty() {
        let response: DetectResponse =
            serde_json::from_str(r#"{"ai_score": 40, "human_score": 60}"#).unwrap();

        let result = response.into_result().unwrap();

        assert!(result.suggestions.is_empty());
        assert!((result.ai_fraction - 0.4).abs() < 1e-9);
    }
}

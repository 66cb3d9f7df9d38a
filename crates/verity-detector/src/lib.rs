mod client;
mod error;

pub use client::DetectorClient;
pub use error::DetectError;

use verity_types::{ScanError, ScanOutcome, ScanResult};

/// Classification backend interface
#[async_trait::async_trait]
pub trait Classifier: Send + Sync {
    /// Score `text` for AI vs human authorship
    async fn classify(&self, text: &str) -> Result<ScanResult, DetectError>;
}

/// Reject text shorter than `min_len` characters
pub fn validate_length(text: &str, min_len: usize) -> Result<(), DetectError> {
    let actual = text.chars().count();
    if actual < min_len {
        return Err(DetectError::TooShort {
            actual,
            required: min_len,
        });
    }
    Ok(())
}

/// Validate then classify, collapsing every failure into a `ScanError`
pub async fn scan<C>(classifier: &C, text: &str, min_len: usize) -> ScanOutcome
where
    C: Classifier + ?Sized,
{
    validate_length(text, min_len).map_err(ScanError::from)?;

    classifier.classify(text).await.map_err(|e| {
        tracing::warn!("Scan failed: {e}");
        ScanError::from(e)
    })
}

impl From<DetectError> for ScanError {
    fn from(err: DetectError) -> Self {
        ScanError::new(err.to_string())
    }
}

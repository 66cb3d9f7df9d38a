#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error("Text too short ({actual} chars). Needs at least {required}.")]
    TooShort { actual: usize, required: usize },

    #[error("API failed with status {0}. Is the detection service running?")]
    Status(u16),

    /// Reported by the service itself, passed through untouched
    #[error("{0}")]
    Service(String),

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

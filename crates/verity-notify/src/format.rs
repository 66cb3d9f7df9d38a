use verity_types::{ScanError, ScanOutcome, ScanResult};

use crate::Notification;

pub const SUGGESTION_SEPARATOR: &str = " | ";

pub fn format_result(result: &ScanResult, icon: &str) -> Notification {
    Notification {
        icon: icon.to_string(),
        title: format!(
            "AI Score: {:.1}% | Human Score: {:.1}%",
            result.ai_percent(),
            result.human_percent()
        ),
        body: format!(
            "Suggestions: {}",
            result.suggestions.join(SUGGESTION_SEPARATOR)
        ),
    }
}

pub fn format_error(error: &ScanError, icon: &str, max_chars: usize) -> Notification {
    let message: String = error.message.chars().take(max_chars).collect();

    Notification {
        icon: icon.to_string(),
        title: "AI Assistant Error: Server Offline?".to_string(),
        body: format!("Check the detection service. Error: {message}"),
    }
}

pub fn format_outcome(outcome: &ScanOutcome, icon: &str, max_error_chars: usize) -> Notification {
    match outcome {
        Ok(result) => format_result(result, icon),
        Err(error) => format_error(error, icon, max_error_chars),
    }
}

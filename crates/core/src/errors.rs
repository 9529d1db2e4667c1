use thiserror::Error;

/// Unified error type for the stock-chart-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Payload parsing (fatal) ─────────────────────────────────────
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Payload has no series object under key '{0}'")]
    MissingSeries(String),

    // ── Field defects (strict parse policy only) ────────────────────
    #[error("Unparseable timestamp key '{0}'")]
    InvalidTimestamp(String),

    #[error("Invalid {field} value '{value}' at {timestamp}")]
    InvalidField {
        field: &'static str,
        timestamp: String,
        value: String,
    },

    // ── Feed / Network ──────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::MalformedPayload(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs to
        // prevent API key leakage. reqwest errors often contain full
        // URLs with secrets.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

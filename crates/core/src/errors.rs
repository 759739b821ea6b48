use thiserror::Error;

/// Unified error type for the entire wealth-advisor-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Note that the Portfolio Resolver is deliberately infallible: provider
/// failures are absorbed there and recorded only as a provenance flag.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("No market data provider registered")]
    NoProvider,

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Unknown risk profile: '{0}' (expected stable, aggressive, or speculative)")]
    UnknownRiskProfile(String),

    #[error("No financial inputs submitted yet")]
    MissingInputs,

    #[error("No risk profile selected yet")]
    MissingProfile,

    // ── Deserialization ─────────────────────────────────────────────
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so
        // provider credentials never end up in logs or user-facing text.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use wealth_advisor_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn api() {
        let err = CoreError::Api {
            provider: "HttpFeed".into(),
            message: "HTTP 503".into(),
        };
        assert_eq!(err.to_string(), "API error (HttpFeed): HTTP 503");
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn no_provider() {
        assert_eq!(
            CoreError::NoProvider.to_string(),
            "No market data provider registered"
        );
    }

    #[test]
    fn validation() {
        let err = CoreError::ValidationError("horizon too long".into());
        assert_eq!(err.to_string(), "Validation failed: horizon too long");
    }

    #[test]
    fn unknown_risk_profile() {
        let err = CoreError::UnknownRiskProfile("balanced".into());
        assert_eq!(
            err.to_string(),
            "Unknown risk profile: 'balanced' (expected stable, aggressive, or speculative)"
        );
    }

    #[test]
    fn missing_inputs() {
        assert_eq!(
            CoreError::MissingInputs.to_string(),
            "No financial inputs submitted yet"
        );
    }

    #[test]
    fn missing_profile() {
        assert_eq!(
            CoreError::MissingProfile.to_string(),
            "No risk profile selected yet"
        );
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn serde_json_errors_become_deserialization() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = parse_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn deserialization_message_is_preserved() {
        let parse_err = serde_json::from_str::<u32>("\"text\"").unwrap_err();
        let msg = parse_err.to_string();
        let err: CoreError = parse_err.into();
        assert_eq!(err.to_string(), format!("Deserialization error: {msg}"));
    }
}

// ── Trait object compatibility ──────────────────────────────────────

mod traits {
    use super::*;

    #[test]
    fn implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CoreError::NoProvider);
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoreError>();
    }
}

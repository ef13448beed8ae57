//! Validation tests for base URLs and timeouts.

use std::time::Duration;

use proptest::prelude::*;

use crate::loader::builder::{ConfigLoader, validate_and_normalize_base_url};
use crate::loader::error::ConfigError;

#[test]
fn test_blank_explicit_base_url_is_missing() {
    let err = ConfigLoader::new()
        .with_base_url("   ".to_string())
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::MissingBaseUrl));
}

#[test]
fn test_relative_base_url_is_rejected() {
    let err = validate_and_normalize_base_url("/api").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_non_http_scheme_is_rejected() {
    let err = validate_and_normalize_base_url("ftp://files.example.kg").unwrap_err();
    assert!(err.to_string().contains("scheme must be http or https"));
}

#[test]
fn test_trailing_slashes_are_stripped() {
    assert_eq!(
        validate_and_normalize_base_url("http://localhost:8000/").unwrap(),
        "http://localhost:8000"
    );
    assert_eq!(
        validate_and_normalize_base_url(" https://portal.example.kg/backend/ ").unwrap(),
        "https://portal.example.kg/backend"
    );
}

#[test]
fn test_zero_timeout_is_rejected() {
    let err = ConfigLoader::new()
        .with_timeout(Duration::from_secs(0))
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
}

#[test]
fn test_excessive_timeout_is_rejected() {
    let err = ConfigLoader::new()
        .with_timeout(Duration::from_secs(3601))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("3600"));
}

proptest! {
    #[test]
    fn prop_normalized_url_never_ends_with_slash(port in 1u16..65535, slashes in 0usize..4) {
        let raw = format!("http://localhost:{port}{}", "/".repeat(slashes));
        let normalized = validate_and_normalize_base_url(&raw).unwrap();
        prop_assert!(!normalized.ends_with('/'));
        prop_assert!(normalized.starts_with("http://localhost"));
    }
}

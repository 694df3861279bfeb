use serde::{Deserialize, Serialize};

use super::{PreviewError, Result};

/// Outcome of a preview check as returned to callers: `{ error, message }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewValidation {
    pub error: bool,
    pub message: Option<String>,
}

impl PreviewValidation {
    pub fn ok() -> Self {
        Self {
            error: false,
            message: None,
        }
    }
}

impl From<Result<()>> for PreviewValidation {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(e) => Self {
                error: true,
                message: Some(e.to_string()),
            },
        }
    }
}

/// Restores `+` characters that URL decoding turned into spaces.
pub fn sanitize_preview_key(key: &str) -> String {
    key.replace(' ', "+")
}

/// Checks an inbound preview key against the expected one.
///
/// # Examples
///
/// ```
/// use pageprops_core::preview::{validate_preview_key, PreviewError};
///
/// assert_eq!(validate_preview_key(None, "a+b"), Err(PreviewError::MissingKey));
/// assert_eq!(validate_preview_key(Some("a b"), "a+b"), Ok(()));
/// assert_eq!(validate_preview_key(Some("nope"), "a+b"), Err(PreviewError::InvalidKey));
/// ```
pub fn validate_preview_key(inbound: Option<&str>, expected: &str) -> Result<()> {
    let inbound = match inbound {
        Some(key) if !key.is_empty() => key,
        _ => return Err(PreviewError::MissingKey),
    };

    if sanitize_preview_key(inbound) != expected {
        return Err(PreviewError::InvalidKey);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::generate_preview_key;

    #[test]
    fn test_correct_key_passes() {
        let key = generate_preview_key("secret");
        assert_eq!(validate_preview_key(Some(&key), &key), Ok(()));
    }

    #[test]
    fn test_key_with_spaces_for_plus_passes() {
        let key = generate_preview_key("secret");
        assert!(key.contains('+'));
        let mangled = key.replace('+', " ");
        assert_eq!(validate_preview_key(Some(&mangled), &key), Ok(()));
    }

    #[test]
    fn test_empty_key_is_missing() {
        let key = generate_preview_key("secret");
        assert_eq!(
            validate_preview_key(Some(""), &key),
            Err(PreviewError::MissingKey)
        );
        assert_eq!(
            validate_preview_key(None, &key),
            Err(PreviewError::MissingKey)
        );
    }

    #[test]
    fn test_other_key_is_invalid() {
        let key = generate_preview_key("secret");
        let other = generate_preview_key("other");
        assert_eq!(
            validate_preview_key(Some(&other), &key),
            Err(PreviewError::InvalidKey)
        );
        assert_eq!(
            validate_preview_key(Some("garbage"), &key),
            Err(PreviewError::InvalidKey)
        );
    }

    #[test]
    fn test_sanitize_replaces_every_space() {
        assert_eq!(sanitize_preview_key("a b c"), "a+b+c");
        assert_eq!(sanitize_preview_key("abc"), "abc");
    }

    #[test]
    fn test_validation_from_result() {
        assert_eq!(PreviewValidation::from(Ok(())), PreviewValidation::ok());

        let missing = PreviewValidation::from(Err(PreviewError::MissingKey));
        assert!(missing.error);
        assert!(missing.message.unwrap().contains("Missing"));

        let invalid = PreviewValidation::from(Err(PreviewError::InvalidKey));
        assert!(invalid.error);
        assert!(invalid.message.unwrap().contains("Invalid"));
    }

    #[test]
    fn test_validation_serializes_null_message() {
        let json = serde_json::to_value(PreviewValidation::ok()).unwrap();
        assert_eq!(json, serde_json::json!({"error": false, "message": null}));
    }
}

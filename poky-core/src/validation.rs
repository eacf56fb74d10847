/// Bucket name validation.
///
/// Bucket names are interpolated into partition DDL as identifiers, so they
/// are checked against a safe-identifier grammar before any backend call:
/// first character a letter or underscore, the rest letters, digits, or
/// underscores.
use crate::error::{Error, Result};

/// Returns true if `name` matches the safe-identifier grammar.
pub fn is_valid_bucket_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate a bucket name, returning `InvalidBucketName` on rejection.
pub fn validate_bucket_name(name: &str) -> Result<()> {
    if is_valid_bucket_name(name) {
        Ok(())
    } else {
        Err(Error::InvalidBucketName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_names() {
        assert!(is_valid_bucket_name("users"));
        assert!(is_valid_bucket_name("a_b2"));
        assert!(is_valid_bucket_name("_private"));
        assert!(is_valid_bucket_name("Bucket01"));
    }

    #[test]
    fn test_rejects_leading_digit() {
        assert!(!is_valid_bucket_name("2fast"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(!is_valid_bucket_name(""));
    }

    #[test]
    fn test_rejects_punctuation() {
        assert!(!is_valid_bucket_name("users;drop"));
        assert!(!is_valid_bucket_name("a-b"));
        assert!(!is_valid_bucket_name("a b"));
        assert!(!is_valid_bucket_name("a'b"));
    }

    #[test]
    fn test_validate_error_carries_name() {
        let err = validate_bucket_name("2fast").unwrap_err();
        assert!(err.to_string().contains("2fast"));
    }

    proptest::proptest! {
        #[test]
        fn prop_grammar_accepts(name in "[A-Za-z_][A-Za-z0-9_]{0,30}") {
            proptest::prop_assert!(is_valid_bucket_name(&name));
        }

        #[test]
        fn prop_digit_prefix_rejects(name in "[0-9][A-Za-z0-9_]{0,30}") {
            proptest::prop_assert!(!is_valid_bucket_name(&name));
        }
    }
}

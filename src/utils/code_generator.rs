//! Short code generation and format checks.
//!
//! Codes are six characters drawn from `[A-Za-z0-9]`, giving 62^6 possible codes.

use rand::{Rng, distr::Alphanumeric};

/// Number of characters in every short code.
pub const SHORT_CODE_LENGTH: usize = 6;

/// Source of candidate short codes.
///
/// The registry asks for a fresh candidate on every collision, so an
/// implementation must not be expected to return unique values on its own.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Generates codes from the thread-local RNG.
///
/// `rand`'s thread RNG is a CSPRNG reseeded from the OS, so codes are not
/// enumerable from earlier ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}

/// Generates a random alphanumeric short code.
///
/// # Examples
///
/// ```
/// use short_link_registry::utils::code_generator::{generate_code, is_valid_short_code};
///
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(is_valid_short_code(&code));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SHORT_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns true if `code` has the shape of a short code.
///
/// Anything else can be treated as a lookup miss without consulting the registry.
pub fn is_valid_short_code(code: &str) -> bool {
    code.len() == SHORT_CODE_LENGTH && code.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), SHORT_CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_alphanumeric_characters() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_random_generator_matches_format() {
        let generator = RandomCodeGenerator;
        assert!(is_valid_short_code(&generator.generate()));
    }

    #[test]
    fn test_valid_short_codes() {
        assert!(is_valid_short_code("abc123"));
        assert!(is_valid_short_code("ZZZZZZ"));
        assert!(is_valid_short_code("000000"));
        assert!(is_valid_short_code("aB3dE9"));
    }

    #[test]
    fn test_invalid_length() {
        assert!(!is_valid_short_code(""));
        assert!(!is_valid_short_code("abc12"));
        assert!(!is_valid_short_code("abc1234"));
    }

    #[test]
    fn test_invalid_characters() {
        assert!(!is_valid_short_code("abc-12"));
        assert!(!is_valid_short_code("abc_12"));
        assert!(!is_valid_short_code("abc 12"));
        assert!(!is_valid_short_code("abc12!"));
    }

    #[test]
    fn test_non_ascii_rejected() {
        // "äbc12" is six bytes but only five characters
        assert!(!is_valid_short_code("äbc12"));
        assert!(!is_valid_short_code("äbcd12"));
    }
}

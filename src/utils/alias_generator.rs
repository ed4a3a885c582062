//! Alias generation and validation utilities.
//!
//! Generated aliases are short opaque tokens drawn from a 62-symbol alphabet.
//! Explicit aliases supplied by callers are validated only for routability.

use rand::Rng;
use validator::ValidationError;

/// Symbols a generated alias is drawn from: ASCII digits and letters, case-sensitive.
pub const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Default length of a generated alias.
pub const DEFAULT_ALIAS_LENGTH: usize = 4;

/// Longest explicit alias accepted by the HTTP adapter.
pub const MAX_CUSTOM_ALIAS_LENGTH: usize = 64;

/// Aliases that would be shadowed by fixed routes.
const RESERVED_ALIASES: &[&str] = &["url", "health"];

/// Source of alias candidates.
///
/// The production implementation is [`RandomAliasGenerator`]; tests inject
/// deterministic sequences through the generated mock.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Produces a candidate of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Alias generator backed by the thread-local RNG, seeded from OS entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAliasGenerator;

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self, length: usize) -> String {
        generate_alias(length)
    }
}

/// Generates a random alias of `length` characters from [`ALPHABET`].
///
/// Successive calls are independent; duplicates occur only at the
/// birthday-bound rate for `62^length` possible values.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias(4);
/// assert_eq!(alias.len(), 4);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Validates a caller-supplied alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route name
///
/// Used as a `validator` custom function on the save request.
pub fn validate_custom_alias(alias: &str) -> Result<(), ValidationError> {
    if alias.is_empty() || alias.len() > MAX_CUSTOM_ALIAS_LENGTH {
        return Err(ValidationError::new("alias_length")
            .with_message("alias must be 1-64 characters".into()));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::new("alias_charset").with_message(
            "alias can only contain letters, digits, hyphens and underscores".into(),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(ValidationError::new("alias_reserved")
            .with_message("this alias is reserved".into()));
    }

    Ok(())
}

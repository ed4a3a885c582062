//! Canonical form of target URLs.

use url::Url;

/// Parses `input` and returns its serialized form.
///
/// The parser drops ASCII tabs and newlines, lowercases the scheme and host
/// and percent-encodes what a `Location` header cannot carry, so the result
/// is always a valid redirect target.
///
/// # Errors
///
/// Returns the parse error for relative or malformed URLs.
///
/// # Examples
///
/// ```
/// use alias_shortener::utils::url_normalizer::normalize_url;
///
/// assert_eq!(
///     normalize_url("HTTPS://Example.COM").unwrap(),
///     "https://example.com/"
/// );
/// ```
pub fn normalize_url(input: &str) -> Result<String, url::ParseError> {
    Ok(Url::parse(input)?.into())
}

//! Website-derived password heuristic.
//!
//! The password is a pure function of the input string: no randomness and no
//! I/O. Character positions and lengths are counted in Unicode scalar values.

use crate::utils::error::UtilError;

/// Builds a password from a website address.
///
/// # Algorithm
///
/// 1. Strip a leading `http://`, then a leading `https://`
/// 2. Split on `.` and drop empty segments
/// 3. Pick the domain segment: the second segment when the first is `www`
///    (any case) and a second one exists, otherwise the first
/// 4. Concatenate the first 3 characters of the domain, its length, the
///    number of lowercase `o` characters it contains, and `!`
///
/// The input is not trimmed; only the empty string is rejected up front.
///
/// # Errors
///
/// Returns [`UtilError::InvalidArgument`] if:
/// - `website` is empty
/// - no non-empty segment remains after splitting
///
/// # Examples
///
/// ```
/// use ws_utils::utils::generate_password;
///
/// assert_eq!(generate_password("http://www.google.com.test").unwrap(), "goo62!");
/// assert_eq!(generate_password("https://example.org").unwrap(), "exa70!");
/// ```
pub fn generate_password(website: &str) -> Result<String, UtilError> {
    if website.is_empty() {
        return Err(UtilError::invalid_argument("website required"));
    }

    let host = strip_scheme(website);
    let segments: Vec<&str> = host.split('.').filter(|s| !s.is_empty()).collect();

    let domain = match segments.as_slice() {
        [] => return Err(UtilError::invalid_argument("invalid website")),
        [first, second, ..] if first.to_lowercase() == "www" => *second,
        [first, ..] => *first,
    };

    let prefix: String = domain.chars().take(3).collect();
    let length = domain.chars().count();
    let o_count = domain.chars().filter(|&c| c == 'o').count();

    Ok(format!("{prefix}{length}{o_count}!"))
}

/// Removes `http://` then `https://`, only at the start of the string.
fn strip_scheme(website: &str) -> &str {
    let website = website.strip_prefix("http://").unwrap_or(website);
    website.strip_prefix("https://").unwrap_or(website)
}

//! Input validators shared by the services and the HTTP layer

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// `local@domain.tld`: one `@`, no whitespace, a dot in the domain part
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

/// Check if a string is not blank
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string has at most `max` characters
pub fn max_chars(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

/// Trim and lower-case an email address
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check if an email address has the `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check if a string parses as an absolute URL with a host
pub fn is_absolute_url(value: &str) -> bool {
    match Url::parse(value.trim()) {
        Ok(url) => url.has_host() && !url.cannot_be_a_base(),
        Err(_) => false,
    }
}

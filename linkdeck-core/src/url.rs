//! URL normalization for bookmark links.

/// Schemes accepted as already explicit. Matching is case-sensitive.
pub const ACCEPTED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Scheme prepended to bare hosts such as `example.com`.
pub const DEFAULT_SCHEME: &str = "https://";

/// Normalize a user-entered URL.
///
/// Surrounding whitespace is trimmed. Blank input yields `None`, which marks a
/// note-only bookmark. Input lacking an `http://` or `https://` prefix gets
/// `https://` prepended. Normalizing an already normalized URL returns it
/// unchanged.
pub fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if has_explicit_scheme(trimmed) {
        Some(trimmed.to_string())
    } else {
        Some(format!("{DEFAULT_SCHEME}{trimmed}"))
    }
}

/// Whether `url` already starts with one of the accepted schemes.
pub fn has_explicit_scheme(url: &str) -> bool {
    ACCEPTED_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}

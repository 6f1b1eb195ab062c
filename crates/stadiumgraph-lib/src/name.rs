//! Canonical stadium names.
//!
//! Every name that enters the graph, or is used to query it, passes through
//! [`normalize`] first. Two spellings of the same venue that differ only in
//! case, dash style, spacing or punctuation map to the same key.

use tracing::debug;

/// Unicode dash variants folded to an ASCII hyphen before stripping.
const DASH_VARIANTS: [char; 4] = [
    '\u{2012}', // figure dash
    '\u{2013}', // en dash
    '\u{2014}', // em dash
    '\u{2015}', // horizontal bar
];

/// Normalize a raw stadium name into its canonical key.
///
/// The input is trimmed and lower-cased, dash variants are folded to `-`, and
/// then every character outside `[a-z0-9]` is dropped (the folded dashes
/// included). Returns `None` when nothing is left.
///
/// ```
/// use stadiumgraph_lib::normalize;
///
/// assert_eq!(normalize("Angel Stadium").as_deref(), Some("angelstadium"));
/// assert_eq!(normalize("ANGEL-STADIUM").as_deref(), Some("angelstadium"));
/// assert_eq!(normalize("angel\u{2014}stadium").as_deref(), Some("angelstadium"));
/// assert_eq!(normalize(" -- "), None);
/// ```
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        debug!("ignoring empty or whitespace-only stadium name");
        return None;
    }

    let canonical: String = trimmed
        .to_lowercase()
        .chars()
        .map(|c| if DASH_VARIANTS.contains(&c) { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    if canonical.is_empty() {
        debug!(raw, "stadium name became empty after normalization");
        return None;
    }
    Some(canonical)
}

/// Whether a stored name is blank. Only reachable through raw imports.
pub(crate) fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

//! Shared string helpers for name derivation.

/// Upper-case the first character of a segment (e.g., "box" -> "Box").
///
/// Only the first character changes; the rest of the segment is kept as
/// written, so "fooBar" becomes "FooBar" and "hbs_template" becomes
/// "Hbs_template".
pub fn camelize_str(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Camel-case a sequence of segments into one identifier
/// (e.g., ["x", "box"] -> "XBox").
pub fn camelize<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .map(|s| camelize_str(s.as_ref()))
        .collect()
}

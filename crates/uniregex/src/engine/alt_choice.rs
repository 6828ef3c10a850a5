//! Literal Patterns

/// Escape all regex meta characters in `text`.
///
/// The result is a pattern matching `text` literally, on every engine.
pub fn escape(text: &str) -> String {
    fancy_regex::escape(text).to_string()
}

/// Create a union pattern of exact matches.
///
/// ## Arguments
/// * `alts` - A slice of alternatives to union.
///
/// ## Returns
/// A single-group pattern `(alt0|alt1|...)` of the escaped alternatives.
pub fn alternate_choice_pattern<S: AsRef<str>>(alts: &[S]) -> String {
    let parts = alts
        .iter()
        .map(|s| escape(s.as_ref()))
        .collect::<Vec<_>>();

    format!("({})", parts.join("|"))
}

//! Encoders from a [`Graph`](crate::Graph) to text.
//!
//! Three formats are supported:
//! - **Turtle** ([`turtle`]): prefixed names, statements grouped by subject
//!   and predicate.
//! - **N-Triples** ([`ntriples`]): one fully-qualified statement per line.
//! - **JSON-LD** ([`jsonld`]): one node object per subject under `@graph`.
//!
//! Named-graph membership is not written by any of them.

pub mod jsonld;
pub mod ntriples;
pub mod turtle;

/// Escapes backslash, double quote, newline, carriage return and tab for a
/// double-quoted literal.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_control_characters() {
        assert_eq!(escape("a\"b\\c\nd\re\tf"), "a\\\"b\\\\c\\nd\\re\\tf");
        assert_eq!(escape("plain"), "plain");
    }
}

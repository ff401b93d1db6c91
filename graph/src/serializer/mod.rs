//! Serializers for statement graphs.
//!
//! Two formats are supported:
//! - **Turtle** ([`turtle`]): prefixed, grouped by subject, for people and RDF tooling
//! - **N-Triples** ([`ntriples`]): one statement per line, for streaming and diffing

pub mod ntriples;
pub mod turtle;

/// Escapes a lexical form for a double-quoted Turtle / N-Triples string.
pub(crate) fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

//! Restricted decoders for the formats written by [`serializer`](crate::serializer).
//!
//! These are not full-grammar parsers. They read back what the encoders of
//! this crate produce (and simple hand-written files of the same shape):
//!
//! - **Turtle** ([`turtle`]): `@prefix` directives and `.`-terminated
//!   statements with `;` predicate lists and `,` object lists. No
//!   collections, no `[...]` blank nodes, no multi-line literals.
//! - **N-Triples** ([`ntriples`]): one `s p o .` statement per line.
//! - **JSON-LD** ([`jsonld`]): the flat `@context` / `@graph` shape written
//!   by the JSON-LD encoder.
//!
//! In [`DecodeMode::Lenient`] mode malformed statements are dropped and
//! logged at `debug` level; in [`DecodeMode::Strict`] mode the first one is
//! returned as [`Error::Decode`](crate::Error::Decode).

pub mod jsonld;
pub(crate) mod lexer;
pub mod ntriples;
pub mod turtle;

use crate::model::{Literal, LiteralValue};
use crate::vocab;

/// What a decoder does with malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Drop malformed statements and keep going.
    #[default]
    Lenient,
    /// Fail on the first malformed statement.
    Strict,
}

/// Decoder configuration.
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Handling of malformed input.
    pub mode: DecodeMode,
}

impl DecodeOptions {
    /// Best-effort decoding: malformed input is skipped.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            mode: DecodeMode::Lenient,
        }
    }

    /// Fail-fast decoding: malformed input is an error.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            mode: DecodeMode::Strict,
        }
    }

    /// Returns `true` in strict mode.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.mode == DecodeMode::Strict
    }
}

/// Builds a literal from its lexical form and annotation.
///
/// Values typed with a core XSD datatype are read into the matching
/// [`LiteralValue`] only when that value writes back to the same lexical
/// form; anything else stays [`LiteralValue::Text`].
pub(crate) fn literal(
    lexical: String,
    language: Option<String>,
    datatype: Option<String>,
) -> Literal {
    match (language, datatype) {
        (Some(tag), _) => Literal::lang(lexical, tag),
        (None, Some(dt)) => Literal::typed(typed_value(lexical, &dt), dt),
        (None, None) => Literal::plain(lexical),
    }
}

fn typed_value(lexical: String, datatype: &str) -> LiteralValue {
    let parsed = match datatype {
        vocab::XSD_INTEGER => lexical.parse::<i64>().ok().map(LiteralValue::Integer),
        vocab::XSD_DECIMAL => lexical.parse::<f64>().ok().map(LiteralValue::Decimal),
        vocab::XSD_BOOLEAN => match lexical.as_str() {
            "true" => Some(LiteralValue::Boolean(true)),
            "false" => Some(LiteralValue::Boolean(false)),
            _ => None,
        },
        vocab::XSD_DATETIME => return LiteralValue::DateTime(lexical),
        _ => None,
    };
    match parsed {
        Some(value) if value.lexical() == lexical => value,
        _ => LiteralValue::Text(lexical),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_datatypes_become_typed_values() {
        let lit = literal("42".into(), None, Some(vocab::XSD_INTEGER.into()));
        assert!(matches!(lit.value, LiteralValue::Integer(42)));
        let lit = literal("true".into(), None, Some(vocab::XSD_BOOLEAN.into()));
        assert!(matches!(lit.value, LiteralValue::Boolean(true)));
        let lit = literal("2.5".into(), None, Some(vocab::XSD_DECIMAL.into()));
        assert!(matches!(lit.value, LiteralValue::Decimal(d) if (d - 2.5).abs() < f64::EPSILON));
    }

    #[test]
    fn non_canonical_lexical_forms_stay_text() {
        let lit = literal("007".into(), None, Some(vocab::XSD_INTEGER.into()));
        assert!(matches!(&lit.value, LiteralValue::Text(s) if s == "007"));
        assert_eq!(lit.lexical(), "007");
    }

    #[test]
    fn language_wins_over_datatype() {
        let lit = literal("chat".into(), Some("fr".into()), Some(vocab::XSD_STRING.into()));
        assert_eq!(lit.language(), Some("fr"));
        assert_eq!(lit.datatype(), None);
    }

    #[test]
    fn option_presets() {
        assert!(DecodeOptions::strict().is_strict());
        assert!(!DecodeOptions::lenient().is_strict());
        assert_eq!(DecodeOptions::default().mode, DecodeMode::Lenient);
    }
}

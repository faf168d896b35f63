//! N-Triples decoder.
//!
//! Each non-blank, non-comment line must hold exactly one
//! `subject predicate object .` statement with full `<...>` URIs or `_:`
//! labels. Prefixed names and Turtle abbreviations are not accepted.

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Graph, Object, Statement};
use crate::parser::lexer::{DatatypeRef, Lexer, Token};
use crate::parser::{literal, DecodeOptions};

const FORMAT: &str = "ntriples";

/// Decodes an N-Triples document into a graph with the default namespaces.
///
/// # Errors
///
/// In strict mode, returns [`Error::Decode`] for the first malformed line.
/// Lenient decoding never fails.
pub fn from_ntriples(input: &str, options: &DecodeOptions) -> Result<Graph> {
    let mut statements = Vec::new();
    for (index, text) in input.lines().enumerate() {
        let line = index + 1;
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_line(text, line) {
            Ok(statement) => statements.push(statement),
            Err(message) if options.is_strict() => {
                return Err(Error::decode(FORMAT, line, message));
            }
            Err(message) => {
                debug!(format = FORMAT, line, reason = %message, "skipping malformed line");
            }
        }
    }
    Ok(Graph::new().extend(statements))
}

fn parse_line(text: &str, line: usize) -> std::result::Result<Statement, String> {
    let tokens = Lexer::starting_at(text, line)
        .map(|item| item.map(|spanned| spanned.token).map_err(|err| err.message))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    match tokens.as_slice() {
        [subject, Token::Iri(predicate), object, Token::Dot] => {
            let subject = match subject {
                Token::Iri(iri) | Token::Blank(iri) => iri.clone(),
                _ => return Err("subject must be a URI or blank node".to_owned()),
            };
            let object = match object {
                Token::Iri(iri) | Token::Blank(iri) => Object::resource(iri.clone()),
                Token::Literal {
                    lexical,
                    language,
                    datatype: None,
                } => Object::Literal(literal(lexical.clone(), language.clone(), None)),
                Token::Literal {
                    lexical,
                    language: None,
                    datatype: Some(DatatypeRef::Iri(datatype)),
                } => Object::Literal(literal(lexical.clone(), None, Some(datatype.clone()))),
                _ => return Err("object must be a URI, blank node or literal".to_owned()),
            };
            Ok(Statement::new(subject, predicate.clone(), object))
        }
        [_, _, _, Token::Dot] => Err("predicate must be a URI".to_owned()),
        _ => Err("expected `subject predicate object .`".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Literal;
    use crate::serializer::ntriples::to_ntriples;
    use crate::vocab::{RDFS_LABEL, XSD_INTEGER};

    #[test]
    fn reads_what_the_encoder_writes() {
        let original = Graph::new()
            .add(Statement::new(
                "http://example.org/a",
                "http://example.org/p",
                "http://example.org/b",
            ))
            .add(Statement::new("_:x", RDFS_LABEL, Literal::lang("Bonjour", "fr")))
            .add(Statement::new(
                "http://example.org/a",
                "http://example.org/n",
                Literal::typed(3_i64, XSD_INTEGER),
            ))
            .add(Statement::new(
                "http://example.org/a",
                RDFS_LABEL,
                Literal::plain("say \"hi\"\n"),
            ));
        let decoded =
            from_ntriples(&to_ntriples(&original), &DecodeOptions::lenient()).expect("decodes");
        assert_eq!(decoded.statements(), original.statements());
    }

    #[test]
    fn skips_comments_blank_and_malformed_lines() {
        let input = "# comment\n\n\
                     <http://a.org/s> <http://a.org/p> <http://a.org/o> .\n\
                     ex:s <http://a.org/p> <http://a.org/o> .\n\
                     <http://a.org/s> <http://a.org/p> <http://a.org/o>\n\
                     <http://a.org/s> <http://a.org/p> \"v\" .\n";
        let graph = from_ntriples(input, &DecodeOptions::lenient()).expect("lenient");
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn strict_mode_reports_the_first_bad_line() {
        let input = "<http://a.org/s> <http://a.org/p> <http://a.org/o> .\n\
                     <http://a.org/s> _:p <http://a.org/o> .\n";
        let err = from_ntriples(input, &DecodeOptions::strict()).expect_err("strict");
        assert!(
            matches!(&err, Error::Decode { format: "ntriples", line: 2, .. }),
            "{err}"
        );
    }
}

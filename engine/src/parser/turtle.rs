//! Turtle decoder for the subset written by [`to_turtle`](crate::serializer::turtle::to_turtle).
//!
//! Input is cut into chunks at every `.` that lies outside `<...>` and
//! quoted strings. A chunk is either an `@prefix p: <uri>` directive or one
//! statement: a subject, then predicate/object lists separated by `;` and
//! `,`. A malformed chunk is dropped as a whole, so no partial statement
//! ever reaches the graph.

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Graph, Namespaces, Object, Statement};
use crate::parser::lexer::{DatatypeRef, Lexer, Spanned, Token};
use crate::parser::{literal, DecodeOptions};
use crate::vocab;

const FORMAT: &str = "turtle";

/// Decodes a Turtle document into a graph.
///
/// The graph's namespace table is the default table extended by every
/// `@prefix` directive in the input.
///
/// # Errors
///
/// In strict mode, returns [`Error::Decode`] for the first malformed chunk.
/// Lenient decoding never fails.
pub fn from_turtle(input: &str, options: &DecodeOptions) -> Result<Graph> {
    let mut namespaces = Graph::new().namespaces().clone();
    let mut declared: Vec<(String, String)> = Vec::new();
    let mut statements: Vec<Statement> = Vec::new();

    let mut chunk: Vec<Spanned> = Vec::new();
    let mut chunk_error: Option<(usize, String)> = None;

    let mut finish = |chunk: Vec<Spanned>,
                      error: Option<(usize, String)>,
                      namespaces: &mut Namespaces|
     -> Result<()> {
        let outcome = match error {
            Some(err) => Err(err),
            None => ChunkParser::new(&chunk, namespaces, options.is_strict()).parse(),
        };
        match outcome {
            Ok(Chunk::Prefix(prefix, uri)) => {
                namespaces.insert(prefix.clone(), uri.clone());
                declared.push((prefix, uri));
            }
            Ok(Chunk::Statements(parsed)) => statements.extend(parsed),
            Err((line, message)) => {
                if options.is_strict() {
                    return Err(Error::decode(FORMAT, line, message));
                }
                debug!(format = FORMAT, line, reason = %message, "skipping malformed statement");
            }
        }
        Ok(())
    };

    for item in Lexer::new(input) {
        match item {
            Err(err) => {
                chunk_error.get_or_insert((err.line, err.message));
            }
            Ok(Spanned {
                token: Token::Dot,
                line,
            }) => {
                let error = chunk_error
                    .take()
                    .or_else(|| chunk.is_empty().then(|| (line, "empty statement".to_owned())));
                finish(std::mem::take(&mut chunk), error, &mut namespaces)?;
            }
            Ok(spanned) => chunk.push(spanned),
        }
    }

    if !chunk.is_empty() || chunk_error.is_some() {
        let line = chunk_error
            .as_ref()
            .map(|(line, _)| *line)
            .or_else(|| chunk.first().map(|s| s.line))
            .unwrap_or(1);
        finish(
            Vec::new(),
            Some((line, "statement is not terminated by `.`".to_owned())),
            &mut namespaces,
        )?;
    }

    Ok(Graph::with_namespaces(declared).extend(statements))
}

enum Chunk {
    Prefix(String, String),
    Statements(Vec<Statement>),
}

type ChunkResult<T> = std::result::Result<T, (usize, String)>;

struct ChunkParser<'t> {
    tokens: &'t [Spanned],
    pos: usize,
    namespaces: &'t Namespaces,
    strict: bool,
}

impl<'t> ChunkParser<'t> {
    fn new(tokens: &'t [Spanned], namespaces: &'t Namespaces, strict: bool) -> Self {
        Self {
            tokens,
            pos: 0,
            namespaces,
            strict,
        }
    }

    fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(1, |s| s.line)
    }

    fn fail<T>(&self, message: impl Into<String>) -> ChunkResult<T> {
        Err((self.line(), message.into()))
    }

    fn next(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos).map(|s| &s.token);
        self.pos += 1;
        token
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos).map(|s| &s.token)
    }

    fn parse(mut self) -> ChunkResult<Chunk> {
        if self.peek() == Some(&Token::PrefixDirective) {
            return self.prefix();
        }
        let subject = match self.next() {
            Some(Token::Iri(iri)) => iri.clone(),
            Some(Token::Prefixed(prefix, local)) => self.expand(prefix, local)?,
            Some(Token::Blank(label)) => label.clone(),
            _ => return self.fail("expected a subject"),
        };

        let mut statements = Vec::new();
        loop {
            let predicate = match self.next() {
                Some(Token::Iri(iri)) => iri.clone(),
                Some(Token::Prefixed(prefix, local)) => self.expand(prefix, local)?,
                Some(Token::A) => vocab::RDF_TYPE.to_owned(),
                _ => return self.fail("expected a predicate"),
            };
            loop {
                let object = self.object()?;
                statements.push(Statement::new(subject.clone(), predicate.clone(), object));
                if self.peek() == Some(&Token::Comma) {
                    self.pos += 1;
                } else {
                    break;
                }
            }
            match self.next() {
                None => break,
                Some(Token::Semicolon) if self.peek().is_none() => break,
                Some(Token::Semicolon) => continue,
                Some(_) => {
                    self.pos -= 1;
                    return self.fail("expected `;`, `,` or `.`");
                }
            }
        }
        Ok(Chunk::Statements(statements))
    }

    fn prefix(mut self) -> ChunkResult<Chunk> {
        self.pos += 1;
        match (self.next(), self.next(), self.next()) {
            (Some(Token::Prefixed(prefix, local)), Some(Token::Iri(uri)), None)
                if local.is_empty() =>
            {
                Ok(Chunk::Prefix(prefix.clone(), uri.clone()))
            }
            _ => self.fail("malformed @prefix directive"),
        }
    }

    fn object(&mut self) -> ChunkResult<Object> {
        match self.next() {
            Some(Token::Iri(iri)) => Ok(Object::resource(iri.clone())),
            Some(Token::Prefixed(prefix, local)) => {
                Ok(Object::Resource(self.expand(prefix, local)?))
            }
            Some(Token::Blank(label)) => Ok(Object::resource(label.clone())),
            Some(Token::Literal {
                lexical,
                language,
                datatype,
            }) => {
                let datatype = match datatype {
                    Some(DatatypeRef::Iri(iri)) => Some(iri.clone()),
                    Some(DatatypeRef::Prefixed(prefix, local)) => Some(self.expand(prefix, local)?),
                    None => None,
                };
                Ok(Object::Literal(literal(lexical.clone(), language.clone(), datatype)))
            }
            Some(Token::Bare { lexical, datatype }) => Ok(Object::Literal(literal(
                lexical.clone(),
                None,
                Some((*datatype).to_owned()),
            ))),
            _ => {
                self.pos = self.pos.saturating_sub(1);
                self.fail("expected an object")
            }
        }
    }

    /// Expands `prefix:local`. Unknown prefixes are kept verbatim unless the
    /// decoder is strict.
    fn expand(&self, prefix: &str, local: &str) -> ChunkResult<String> {
        match self.namespaces.get(prefix) {
            Some(ns) => Ok(format!("{ns}{local}")),
            None if self.strict => self.fail(format!("undefined prefix `{prefix}:`")),
            None => Ok(format!("{prefix}:{local}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Literal;
    use crate::serializer::turtle::to_turtle;
    use crate::vocab::{RDFS_CLASS, RDFS_LABEL, RDF_TYPE, XSD_INTEGER};

    fn lenient(input: &str) -> Graph {
        from_turtle(input, &DecodeOptions::lenient()).expect("lenient decoding never fails")
    }

    #[test]
    fn reads_prefixes_and_flat_statements() {
        let graph = lenient(
            "@prefix ex: <http://example.org/> .\n\
             ex:john ex:knows ex:mary .\n\
             <http://example.org/john> rdfs:label \"John\"@en .\n",
        );
        assert_eq!(graph.namespaces()["ex"], "http://example.org/");
        assert_eq!(graph.len(), 2);
        assert_eq!(
            graph.statements()[0],
            Statement::new(
                "http://example.org/john",
                "http://example.org/knows",
                "http://example.org/mary"
            )
        );
        assert_eq!(graph.statements()[1].object, Object::Literal(Literal::lang("John", "en")));
    }

    #[test]
    fn dotted_uris_survive() {
        let graph = lenient("<http://www.example.org/a> <http://www.example.org/p> \"1.5\" .");
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.statements()[0].subject, "http://www.example.org/a");
    }

    #[test]
    fn reads_grouped_output_of_the_encoder() {
        let original = Graph::new()
            .add(Statement::new("http://example.org/person", RDF_TYPE, RDFS_CLASS))
            .add(Statement::new("http://example.org/person", RDFS_LABEL, Literal::plain("Person")))
            .add(Statement::new(
                "http://example.org/person",
                RDFS_LABEL,
                Literal::lang("Personne", "fr"),
            ))
            .add(Statement::new(
                "_:n1",
                "http://example.org/n",
                Literal::typed(7_i64, XSD_INTEGER),
            ));
        let decoded = lenient(&to_turtle(&original));
        assert_eq!(decoded.statements(), original.statements());
    }

    #[test]
    fn malformed_chunks_are_skipped() {
        let graph = lenient(
            "<http://a.org/s> <http://a.org/p> .\n\
             <http://a.org/s> <http://a.org/p> <http://a.org/o> .\n\
             <http://a.org/s> \"bad\" <http://a.org/o> .\n\
             <http://a.org/s> <http://a.org/p> <http://a.org/bad iri> .\n\
             <http://a.org/s> <http://a.org/p> <http://a.org/o2> .\n",
        );
        let objects: Vec<_> = graph.iter().filter_map(|s| s.object.as_resource()).collect();
        assert_eq!(objects, vec!["http://a.org/o", "http://a.org/o2"]);
    }

    #[test]
    fn strict_mode_reports_the_line() {
        let err = from_turtle(
            "<http://a.org/s> <http://a.org/p> <http://a.org/o> .\n<http://a.org/s> \"bad\" <http://a.org/o> .\n",
            &DecodeOptions::strict(),
        )
        .expect_err("strict decoding fails");
        assert!(matches!(err, Error::Decode { line: 2, .. }), "{err}");
    }

    #[test]
    fn unknown_prefixes_are_kept_when_lenient_and_rejected_when_strict() {
        let graph = lenient("zz:a zz:b zz:c .");
        assert_eq!(graph.statements()[0].subject, "zz:a");
        assert!(from_turtle("zz:a zz:b zz:c .", &DecodeOptions::strict()).is_err());
    }

    #[test]
    fn unterminated_string_swallows_its_statement() {
        let graph = lenient(
            "<http://a.org/s> <http://a.org/p> \"open .\n\
             <http://a.org/s> <http://a.org/p> <http://a.org/next> .\n\
             <http://a.org/s> <http://a.org/p> <http://a.org/last> .\n",
        );
        let objects: Vec<_> = graph.iter().filter_map(|s| s.object.as_resource()).collect();
        assert_eq!(objects, vec!["http://a.org/last"]);
    }

    #[test]
    fn unterminated_trailing_statement_is_dropped() {
        let graph = lenient(
            "<http://a.org/s> <http://a.org/p> <http://a.org/o> .\n\
             <http://a.org/s> <http://a.org/p> <http://a.org/x>",
        );
        assert_eq!(graph.len(), 1);
    }
}

//! Format selection for the codecs.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::Graph;
use crate::parser::{jsonld, ntriples, turtle, DecodeOptions};
use crate::serializer;

/// A serialization format handled by both an encoder and a decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Turtle (`.ttl`).
    Turtle,
    /// N-Triples (`.nt`).
    NTriples,
    /// JSON-LD (`.jsonld`).
    JsonLd,
}

impl Format {
    /// Every supported format.
    pub const ALL: [Format; 3] = [Format::Turtle, Format::NTriples, Format::JsonLd];

    /// Canonical lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Format::Turtle => "turtle",
            Format::NTriples => "ntriples",
            Format::JsonLd => "jsonld",
        }
    }

    /// Preferred file extension, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Format::Turtle => "ttl",
            Format::NTriples => "nt",
            Format::JsonLd => "jsonld",
        }
    }

    /// Guesses the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] if the path has no extension or
    /// the extension is not recognised.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?
            .parse()
    }

    /// Encodes `graph` in this format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if JSON-LD output cannot be written.
    pub fn encode(self, graph: &Graph) -> Result<String> {
        match self {
            Format::Turtle => Ok(serializer::turtle::to_turtle(graph)),
            Format::NTriples => Ok(serializer::ntriples::to_ntriples(graph)),
            Format::JsonLd => serializer::jsonld::to_json_ld_string(graph),
        }
    }

    /// Decodes `input` in this format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] for malformed input in strict mode, and
    /// [`Error::Json`] if JSON-LD input is not JSON.
    pub fn decode(self, input: &str, options: &DecodeOptions) -> Result<Graph> {
        match self {
            Format::Turtle => turtle::from_turtle(input, options),
            Format::NTriples => ntriples::from_ntriples(input, options),
            Format::JsonLd => jsonld::from_json_ld(input, options),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(Format::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(Format::NTriples),
            "jsonld" | "json-ld" | "json" => Ok(Format::JsonLd),
            _ => Err(Error::UnsupportedFormat(s.to_owned())),
        }
    }
}

/// Encodes `graph` in `format`.
///
/// # Errors
///
/// See [`Format::encode`].
pub fn encode(graph: &Graph, format: Format) -> Result<String> {
    format.encode(graph)
}

/// Decodes `input` in `format`.
///
/// # Errors
///
/// See [`Format::decode`].
pub fn decode(input: &str, format: Format, options: &DecodeOptions) -> Result<Graph> {
    format.decode(input, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Statement;

    #[test]
    fn names_and_extensions_parse() {
        assert_eq!("ttl".parse::<Format>().ok(), Some(Format::Turtle));
        assert_eq!("N-Triples".parse::<Format>().ok(), Some(Format::NTriples));
        assert_eq!("json".parse::<Format>().ok(), Some(Format::JsonLd));
        for format in Format::ALL {
            assert_eq!(format.name().parse::<Format>().ok(), Some(format));
            assert_eq!(format.extension().parse::<Format>().ok(), Some(format));
        }
        assert!(matches!("rdfxml".parse::<Format>(), Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn from_path_uses_the_extension() {
        assert_eq!(Format::from_path("out/people.nt").ok(), Some(Format::NTriples));
        assert!(Format::from_path("README").is_err());
    }

    #[test]
    fn every_format_reads_back_its_own_output() {
        let graph = Graph::new().add(Statement::new(
            "http://example.org/a",
            "http://example.org/p",
            "http://example.org/b",
        ));
        for format in Format::ALL {
            let text = encode(&graph, format).expect("encodes");
            let back = decode(&text, format, &DecodeOptions::strict()).expect("decodes");
            assert_eq!(back.statements(), graph.statements(), "{format}");
        }
    }
}

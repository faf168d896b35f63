//! A small semantic graph engine.
//!
//! `semgraph` holds subject–predicate–object statements in a value-typed
//! [`Graph`], lowers ontology definitions (classes, properties, individuals,
//! restrictions, ontology headers) into statements, reads and writes
//! Turtle, N-Triples and JSON-LD, and closes graphs under the RDFS
//! subclass, subproperty, domain and range rules.
//!
//! # Lowering and encoding
//!
//! ```
//! use semgraph::ontology::{lower_class, ClassDefinition};
//! use semgraph::{Format, Graph};
//!
//! let person = ClassDefinition {
//!     name: "person".into(),
//!     label: Some("Person".into()),
//!     ..ClassDefinition::default()
//! };
//! let graph = Graph::new().extend(lower_class(&person, Some("http://example.org/people/")));
//! let turtle = Format::Turtle.encode(&graph).unwrap();
//! assert!(turtle.contains("<http://example.org/people/person> rdf:type rdfs:Class ;"));
//! ```
//!
//! # Decoding and entailment
//!
//! ```
//! use semgraph::{decode, reasoner, DecodeOptions, Format, Statement};
//! use semgraph::vocab::RDF_TYPE;
//!
//! let input = "\
//! @prefix ex: <http://example.org/> .
//! ex:Employee rdfs:subClassOf ex:Person .
//! ex:john a ex:Employee .
//! ";
//! let graph = decode(input, Format::Turtle, &DecodeOptions::strict()).unwrap();
//! let closed = reasoner::infer(graph);
//! assert!(closed.contains(&Statement::new(
//!     "http://example.org/john",
//!     RDF_TYPE,
//!     "http://example.org/Person",
//! )));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod format;
pub mod iri;
pub mod model;
pub mod ontology;
pub mod parser;
pub mod reasoner;
pub mod serializer;
pub mod vocab;

pub use error::{Error, Result};
pub use format::{decode, encode, Format};
pub use model::{
    Annotation, Graph, Literal, LiteralValue, MatchMode, Namespaces, Object, Statement,
};
pub use ontology::{lower_document, LoweringOptions, OntologyDocument};
pub use parser::{DecodeMode, DecodeOptions};
pub use reasoner::{Entailment, Reasoner, ReasonerConfig, Rule};

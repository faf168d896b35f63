//! Lowering of ontology definitions into statements.
//!
//! Every entity kind has a pure lowering function taking the entity and the
//! enclosing base URI. Identifier fields are expanded when they use one of
//! the default prefixes (`xsd:integer`, `owl:Thing`) and otherwise resolved
//! against the base with [`iri::resolve`]. Anonymous nodes get labels derived
//! only from entity names and list positions, so lowering the same input
//! twice produces identical output.
//!
//! ```
//! use semgraph::ontology::{lower_class, ClassDefinition};
//!
//! let person = ClassDefinition {
//!     name: "person".into(),
//!     label: Some("Person".into()),
//!     ..ClassDefinition::default()
//! };
//! let statements = lower_class(&person, Some("http://example.org/people/"));
//! assert_eq!(statements.len(), 2);
//! assert_eq!(statements[0].subject, "http://example.org/people/person");
//! ```

mod class;
pub mod definitions;
mod header;
mod individual;
mod list;
mod property;
mod restriction;

use tracing::debug;

pub use class::lower_class;
pub use definitions::{
    ClassDefinition, ClassKind, DifferentFrom, DisjointClass, EquivalentClass, EquivalentProperty,
    Import, Individual, InverseProperty, Ontology, PropertyAssertion, PropertyDefinition,
    PropertyKind, Restriction, SameAs, Type,
};
pub use header::lower_ontology;
pub use individual::lower_individual;
pub use list::rdf_list;
pub use property::lower_property;
pub use restriction::lower_restriction;

use crate::error::Result;
use crate::iri;
use crate::model::{Graph, Literal, LiteralValue, Namespaces, Object, Statement};
use crate::vocab;

/// What lowering does with a characteristic flag that does not apply to the
/// property's kind (for example `transitive` on a datatype property).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacteristicPolicy {
    /// Leave the flag out of the output.
    #[default]
    Drop,
    /// Fail with [`Error::Characteristic`](crate::Error::Characteristic).
    Reject,
}

/// Lowering configuration.
#[derive(Debug, Clone, Default)]
pub struct LoweringOptions {
    /// Handling of inapplicable characteristic flags.
    pub characteristics: CharacteristicPolicy,
}

impl LoweringOptions {
    /// Inapplicable flags are dropped.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            characteristics: CharacteristicPolicy::Drop,
        }
    }

    /// Inapplicable flags are an error.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            characteristics: CharacteristicPolicy::Reject,
        }
    }
}

/// A complete set of definitions sharing one base URI.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct OntologyDocument {
    /// Base URI that local names are resolved against.
    pub base: Option<String>,
    /// Extra namespace bindings for the lowered graph.
    pub prefixes: Namespaces,
    /// Ontology header.
    pub ontology: Option<Ontology>,
    /// Class definitions.
    pub classes: Vec<ClassDefinition>,
    /// Property definitions.
    pub properties: Vec<PropertyDefinition>,
    /// Restrictions.
    pub restrictions: Vec<Restriction>,
    /// Named individuals.
    pub individuals: Vec<Individual>,
}

/// Lowers every entity of `document` into one graph.
///
/// Entities are lowered in a fixed order: ontology header, classes,
/// properties, restrictions, individuals; each kind in document order.
///
/// # Errors
///
/// Returns [`Error::Characteristic`](crate::Error::Characteristic) if a
/// property sets an inapplicable characteristic and `options` rejects them.
pub fn lower_document(document: &OntologyDocument, options: &LoweringOptions) -> Result<Graph> {
    let base = document.base.as_deref();
    let mut statements = Vec::new();

    if let Some(ontology) = &document.ontology {
        statements.extend(lower_ontology(ontology, base));
    }
    for class in &document.classes {
        statements.extend(lower_class(class, base));
    }
    for property in &document.properties {
        statements.extend(lower_property(property, base, options)?);
    }
    for restriction in &document.restrictions {
        statements.extend(lower_restriction(restriction, base));
    }
    for individual in &document.individuals {
        statements.extend(lower_individual(individual, base));
    }

    debug!(
        classes = document.classes.len(),
        properties = document.properties.len(),
        restrictions = document.restrictions.len(),
        individuals = document.individuals.len(),
        statements = statements.len(),
        "lowered ontology document"
    );

    Ok(Graph::with_namespaces(document.prefixes.clone()).extend(statements))
}

/// Turns an identifier field into a URI: default-prefix names are expanded,
/// everything else goes through [`iri::resolve`].
pub(crate) fn expand(id: &str, base: Option<&str>) -> String {
    if !iri::is_absolute(id) {
        if let Some((prefix, local)) = id.split_once(':') {
            if let Some((_, ns)) = vocab::DEFAULT_NAMESPACES.iter().find(|(p, _)| *p == prefix) {
                return format!("{ns}{local}");
            }
        }
    }
    iri::resolve(id, base)
}

/// The URI of a named entity: its explicit `uri` if set, else its name.
pub(crate) fn identify(name: &str, uri: Option<&str>, base: Option<&str>) -> String {
    expand(uri.unwrap_or(name), base)
}

/// The object for an unannotated definition value: absolute-URI text is a
/// resource, other text a plain literal, and every other scalar a literal
/// typed with its natural XSD datatype.
pub(crate) fn value_object(value: &LiteralValue) -> Object {
    if let Some(text) = value.as_text().filter(|text| iri::is_absolute(text)) {
        return Object::resource(text);
    }
    match value.natural_datatype() {
        Some(datatype) => Literal::typed(value.clone(), datatype).into(),
        None => Literal::plain(value.clone()).into(),
    }
}

/// Collects the statements about one subject.
pub(crate) struct Triples {
    subject: String,
    statements: Vec<Statement>,
}

impl Triples {
    pub(crate) fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            statements: Vec::new(),
        }
    }

    pub(crate) fn subject(&self) -> &str {
        &self.subject
    }

    pub(crate) fn add(&mut self, predicate: &str, object: impl Into<Object>) {
        self.statements
            .push(Statement::new(self.subject.clone(), predicate, object));
    }

    /// Adds `(subject, predicate, "text")` when `text` is present.
    pub(crate) fn text(&mut self, predicate: &str, text: Option<&str>) {
        if let Some(text) = text {
            self.add(predicate, Literal::plain(text));
        }
    }

    /// Adds `(subject, predicate, <uri>)` with `id` expanded, when present.
    pub(crate) fn link(&mut self, predicate: &str, id: Option<&str>, base: Option<&str>) {
        if let Some(id) = id {
            self.add(predicate, expand(id, base));
        }
    }

    pub(crate) fn deprecated(&mut self, deprecated: bool) {
        if deprecated {
            self.add(vocab::OWL_DEPRECATED, Literal::typed(true, vocab::XSD_BOOLEAN));
        }
    }

    pub(crate) fn append(&mut self, statements: Vec<Statement>) {
        self.statements.extend(statements);
    }

    pub(crate) fn finish(self) -> Vec<Statement> {
        self.statements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn expand_handles_default_prefixes_and_local_names() {
        let base = Some("http://example.org/people/");
        assert_eq!(expand("xsd:integer", base), vocab::XSD_INTEGER);
        assert_eq!(expand("person", base), "http://example.org/people/person");
        assert_eq!(expand("http://other.org/x", base), "http://other.org/x");
        assert_eq!(expand("_:restriction_r", base), "_:restriction_r");
    }

    #[test]
    fn identify_prefers_the_explicit_uri() {
        let base = Some("http://example.org/");
        assert_eq!(identify("a", Some("http://x.org/A"), base), "http://x.org/A");
        assert_eq!(identify("a", None, base), "http://example.org/a");
    }

    #[test]
    fn document_lowering_keeps_entity_order_and_prefixes() {
        let document = OntologyDocument {
            base: Some("http://example.org/".into()),
            prefixes: [("ex".to_owned(), "http://example.org/".to_owned())].into(),
            ontology: Some(Ontology {
                name: "onto".into(),
                ..Ontology::default()
            }),
            classes: vec![ClassDefinition {
                name: "Person".into(),
                ..ClassDefinition::default()
            }],
            properties: vec![PropertyDefinition {
                name: "knows".into(),
                ..PropertyDefinition::default()
            }],
            ..OntologyDocument::default()
        };
        let graph = lower_document(&document, &LoweringOptions::default()).expect("lowers");
        assert_eq!(graph.namespaces()["ex"], "http://example.org/");
        let subjects = graph.subjects();
        assert_eq!(
            subjects,
            vec!["http://example.org/onto", "http://example.org/Person", "http://example.org/knows"]
        );
    }

    #[test]
    fn strict_options_surface_characteristic_errors() {
        let document = OntologyDocument {
            properties: vec![PropertyDefinition {
                name: "age".into(),
                kind: PropertyKind::Datatype,
                transitive: true,
                ..PropertyDefinition::default()
            }],
            ..OntologyDocument::default()
        };
        assert!(lower_document(&document, &LoweringOptions::permissive()).is_ok());
        let err = lower_document(&document, &LoweringOptions::strict()).expect_err("rejects");
        assert!(matches!(err, Error::Characteristic { characteristic: "transitive", .. }));
    }
}

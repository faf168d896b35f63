//! Core triple model: literals, statements and graphs.
//!
//! A [`Graph`] is an ordinary value. Every operation that changes it takes the
//! graph by value and hands back the updated graph, so a graph is never
//! mutated behind the back of whoever holds it.
//!
//! ```
//! use semgraph::{Graph, Literal, Object, Statement};
//! use semgraph::vocab::RDFS_LABEL;
//!
//! let graph = Graph::new().add(Statement::new(
//!     "http://example.org/people/person",
//!     RDFS_LABEL,
//!     Literal::plain("Person"),
//! ));
//! assert_eq!(graph.find(None, Some(RDFS_LABEL), None).len(), 1);
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};
use std::hash::{Hash, Hasher};

use crate::iri;
use crate::vocab;

/// Prefix → namespace URI table. Prefixes are unique by construction.
pub type Namespaces = BTreeMap<String, String>;

/// The scalar carried by a literal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum LiteralValue {
    /// `true` / `false`.
    Boolean(bool),
    /// A whole number.
    Integer(i64),
    /// A decimal number.
    Decimal(f64),
    /// Free text.
    Text(String),
    /// A date/time in its lexical (ISO 8601) form.
    DateTime(String),
}

impl LiteralValue {
    /// Returns the lexical form written by every encoder.
    #[must_use]
    pub fn lexical(&self) -> Cow<'_, str> {
        match self {
            LiteralValue::Boolean(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            LiteralValue::Integer(i) => Cow::Owned(i.to_string()),
            LiteralValue::Decimal(d) => Cow::Owned(decimal_lexical(*d)),
            LiteralValue::Text(s) | LiteralValue::DateTime(s) => Cow::Borrowed(s),
        }
    }

    /// Returns the text if this is a [`LiteralValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LiteralValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the XSD datatype this value naturally carries, if any.
    ///
    /// Text has no natural datatype; it is written as a plain literal.
    #[must_use]
    pub fn natural_datatype(&self) -> Option<&'static str> {
        match self {
            LiteralValue::Boolean(_) => Some(vocab::XSD_BOOLEAN),
            LiteralValue::Integer(_) => Some(vocab::XSD_INTEGER),
            LiteralValue::Decimal(_) => Some(vocab::XSD_DECIMAL),
            LiteralValue::DateTime(_) => Some(vocab::XSD_DATETIME),
            LiteralValue::Text(_) => None,
        }
    }
}

fn decimal_lexical(d: f64) -> String {
    if d.is_finite() && d.fract() == 0.0 && d.abs() < 1e15 {
        format!("{d:.1}")
    } else {
        d.to_string()
    }
}

impl From<&str> for LiteralValue {
    fn from(s: &str) -> Self {
        LiteralValue::Text(s.to_owned())
    }
}

impl From<String> for LiteralValue {
    fn from(s: String) -> Self {
        LiteralValue::Text(s)
    }
}

impl From<i64> for LiteralValue {
    fn from(i: i64) -> Self {
        LiteralValue::Integer(i)
    }
}

impl From<u64> for LiteralValue {
    fn from(i: u64) -> Self {
        i64::try_from(i).map_or_else(|_| LiteralValue::Text(i.to_string()), LiteralValue::Integer)
    }
}

impl From<bool> for LiteralValue {
    fn from(b: bool) -> Self {
        LiteralValue::Boolean(b)
    }
}

impl From<f64> for LiteralValue {
    fn from(d: f64) -> Self {
        LiteralValue::Decimal(d)
    }
}

/// What qualifies a literal: a datatype or a language tag, never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Annotation {
    /// Full datatype IRI.
    Datatype(String),
    /// Language tag without the leading `@`.
    Language(String),
}

/// A literal value with its optional annotation.
///
/// Two literals are equal when their lexical forms and annotations are equal,
/// so `Integer(1)` and `Text("1")` typed `xsd:integer` are the same literal.
#[derive(Debug, Clone)]
pub struct Literal {
    /// The scalar.
    pub value: LiteralValue,
    /// Datatype or language tag; `None` for a plain literal.
    pub annotation: Option<Annotation>,
}

impl Literal {
    /// Creates a plain literal.
    pub fn plain(value: impl Into<LiteralValue>) -> Self {
        Self {
            value: value.into(),
            annotation: None,
        }
    }

    /// Creates a datatyped literal.
    pub fn typed(value: impl Into<LiteralValue>, datatype: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            annotation: Some(Annotation::Datatype(datatype.into())),
        }
    }

    /// Creates a language-tagged literal.
    pub fn lang(value: impl Into<LiteralValue>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            annotation: Some(Annotation::Language(language.into())),
        }
    }

    /// Returns the lexical form of the value.
    #[must_use]
    pub fn lexical(&self) -> Cow<'_, str> {
        self.value.lexical()
    }

    /// Returns the datatype IRI, if the literal is datatyped.
    #[must_use]
    pub fn datatype(&self) -> Option<&str> {
        match &self.annotation {
            Some(Annotation::Datatype(dt)) => Some(dt),
            _ => None,
        }
    }

    /// Returns the language tag, if the literal is language-tagged.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        match &self.annotation {
            Some(Annotation::Language(tag)) => Some(tag),
            _ => None,
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.annotation == other.annotation && self.lexical() == other.lexical()
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lexical().hash(state);
        self.annotation.hash(state);
    }
}

/// The object position of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Object {
    /// An absolute URI or blank-node label.
    Resource(String),
    /// A literal value.
    Literal(Literal),
}

impl Object {
    /// Creates a resource object.
    pub fn resource(id: impl Into<String>) -> Self {
        Object::Resource(id.into())
    }

    /// Returns `true` for literal objects.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Object::Literal(_))
    }

    /// Returns the identifier of a resource object.
    #[must_use]
    pub fn as_resource(&self) -> Option<&str> {
        match self {
            Object::Resource(id) => Some(id),
            Object::Literal(_) => None,
        }
    }

    /// Returns the literal of a literal object.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Object::Literal(lit) => Some(lit),
            Object::Resource(_) => None,
        }
    }

    /// Compares two objects ignoring literal annotations.
    #[must_use]
    pub fn same_value(&self, other: &Object) -> bool {
        match (self, other) {
            (Object::Resource(a), Object::Resource(b)) => a == b,
            (Object::Literal(a), Object::Literal(b)) => a.lexical() == b.lexical(),
            _ => false,
        }
    }
}

impl From<Literal> for Object {
    fn from(lit: Literal) -> Self {
        Object::Literal(lit)
    }
}

/// How two statements are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Subject, predicate and object value only; literal annotations and the
    /// graph name are ignored.
    #[default]
    Triple,
    /// Every field, including annotations and graph name.
    Strict,
}

/// A subject–predicate–object statement, optionally in a named graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    /// Absolute URI or blank-node label.
    pub subject: String,
    /// Absolute URI.
    pub predicate: String,
    /// Resource or literal.
    pub object: Object,
    /// Named graph the statement belongs to.
    pub graph: Option<String>,
}

impl Statement {
    /// Creates a statement in the default graph.
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<Object>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph: None,
        }
    }

    /// Returns the same statement placed in a named graph.
    #[must_use]
    pub fn in_graph(mut self, graph: impl Into<String>) -> Self {
        self.graph = Some(graph.into());
        self
    }

    /// Compares with `other` under the given mode.
    #[must_use]
    pub fn matches(&self, other: &Statement, mode: MatchMode) -> bool {
        match mode {
            MatchMode::Strict => self == other,
            MatchMode::Triple => {
                self.subject == other.subject
                    && self.predicate == other.predicate
                    && self.object.same_value(&other.object)
            }
        }
    }

    fn triple_key(&self) -> (&str, &str, bool, Cow<'_, str>) {
        match &self.object {
            Object::Resource(id) => (&self.subject, &self.predicate, false, Cow::Borrowed(id)),
            Object::Literal(lit) => (&self.subject, &self.predicate, true, lit.lexical()),
        }
    }
}

impl From<String> for Object {
    fn from(id: String) -> Self {
        Object::Resource(id)
    }
}

impl From<&str> for Object {
    fn from(id: &str) -> Self {
        Object::Resource(id.to_owned())
    }
}

/// A collection of statements plus a namespace table.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    name: Option<String>,
    statements: Vec<Statement>,
    namespaces: Namespaces,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Creates an empty graph seeded with the default namespaces.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: None,
            statements: Vec::new(),
            namespaces: vocab::DEFAULT_NAMESPACES
                .iter()
                .map(|(prefix, uri)| ((*prefix).to_owned(), (*uri).to_owned()))
                .collect(),
        }
    }

    /// Creates an empty graph with the default namespaces overridden or
    /// extended by `overrides`.
    pub fn with_namespaces<I, P, U>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (P, U)>,
        P: Into<String>,
        U: Into<String>,
    {
        let mut graph = Self::new();
        graph
            .namespaces
            .extend(overrides.into_iter().map(|(p, u)| (p.into(), u.into())));
        graph
    }

    /// Returns the graph with the given name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The graph name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// All statements in insertion order.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// The namespace table.
    #[must_use]
    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    /// Number of statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns `true` if the graph holds no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterates over the statements.
    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    /// Consumes the graph, returning its statements.
    #[must_use]
    pub fn into_statements(self) -> Vec<Statement> {
        self.statements
    }

    /// Appends a statement.
    #[must_use]
    pub fn add(mut self, statement: Statement) -> Self {
        self.statements.push(statement);
        self
    }

    /// Appends every statement from `statements`.
    #[must_use]
    pub fn extend(mut self, statements: impl IntoIterator<Item = Statement>) -> Self {
        self.statements.extend(statements);
        self
    }

    /// Removes every statement equal to `statement` by subject, predicate and
    /// object value.
    #[must_use]
    pub fn remove(self, statement: &Statement) -> Self {
        self.remove_with(statement, MatchMode::Triple)
    }

    /// Removes every statement that matches `statement` under `mode`.
    #[must_use]
    pub fn remove_with(mut self, statement: &Statement, mode: MatchMode) -> Self {
        self.statements.retain(|s| !s.matches(statement, mode));
        self
    }

    /// Returns `true` if a statement equal by subject, predicate and object
    /// value is present.
    #[must_use]
    pub fn contains(&self, statement: &Statement) -> bool {
        self.contains_with(statement, MatchMode::Triple)
    }

    /// Returns `true` if a statement matching under `mode` is present.
    #[must_use]
    pub fn contains_with(&self, statement: &Statement, mode: MatchMode) -> bool {
        self.statements.iter().any(|s| s.matches(statement, mode))
    }

    /// Returns every statement matching the pattern. `None` components are
    /// wildcards; objects are compared by value, ignoring annotations.
    ///
    /// This is a linear scan.
    #[must_use]
    pub fn find(
        &self,
        subject: Option<&str>,
        predicate: Option<&str>,
        object: Option<&Object>,
    ) -> Vec<&Statement> {
        self.statements
            .iter()
            .filter(|s| pattern_matches(s, subject, predicate, object))
            .collect()
    }

    /// Returns the first statement matching the pattern.
    #[must_use]
    pub fn find_one(
        &self,
        subject: Option<&str>,
        predicate: Option<&str>,
        object: Option<&Object>,
    ) -> Option<&Statement> {
        self.statements
            .iter()
            .find(|s| pattern_matches(s, subject, predicate, object))
    }

    /// Distinct subjects in order of first appearance.
    #[must_use]
    pub fn subjects(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.statements
            .iter()
            .map(|s| s.subject.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Concatenates the statements of `other` and unions the namespace
    /// tables. Prefixes already bound in `self` keep their URI.
    #[must_use]
    pub fn merge(mut self, other: Graph) -> Self {
        self.statements.extend(other.statements);
        for (prefix, uri) in other.namespaces {
            self.namespaces.entry(prefix).or_insert(uri);
        }
        self
    }

    /// Binds `prefix` to `uri`, replacing any previous binding of `prefix`.
    #[must_use]
    pub fn add_namespace(mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        self.namespaces.insert(prefix.into(), uri.into());
        self
    }

    /// Drops statements that repeat an earlier one by subject, predicate and
    /// object value; the first occurrence is kept.
    #[must_use]
    pub fn dedup(self) -> Self {
        let Graph {
            name,
            statements,
            namespaces,
        } = self;
        let kept = {
            let mut seen = HashSet::new();
            statements
                .iter()
                .map(|s| seen.insert(s.triple_key()))
                .collect::<Vec<_>>()
        };
        let statements = statements
            .into_iter()
            .zip(kept)
            .filter_map(|(s, keep)| keep.then_some(s))
            .collect();
        Graph {
            name,
            statements,
            namespaces,
        }
    }

    /// Compacts `uri` against this graph's namespaces.
    #[must_use]
    pub fn to_qname(&self, uri: &str) -> String {
        iri::to_qname(uri, &self.namespaces)
    }

    /// Expands a `prefix:local` name against this graph's namespaces.
    #[must_use]
    pub fn from_qname(&self, qname: &str) -> String {
        iri::from_qname(qname, &self.namespaces)
    }
}

fn pattern_matches(
    statement: &Statement,
    subject: Option<&str>,
    predicate: Option<&str>,
    object: Option<&Object>,
) -> bool {
    subject.map_or(true, |s| statement.subject == s)
        && predicate.map_or(true, |p| statement.predicate == p)
        && object.map_or(true, |o| statement.object.same_value(o))
}

impl FromIterator<Statement> for Graph {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        Graph::new().extend(iter)
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{RDFS_LABEL, RDF_TYPE, XSD_INTEGER};

    const JOHN: &str = "http://example.org/john";
    const AGE: &str = "http://example.org/age";

    #[test]
    fn new_graph_has_default_namespaces() {
        let graph = Graph::new();
        assert_eq!(graph.namespaces().len(), 4);
        assert_eq!(graph.namespaces()["owl"], vocab::OWL);
        assert!(graph.is_empty());
    }

    #[test]
    fn overrides_replace_defaults_by_prefix() {
        let graph = Graph::with_namespaces([("ex", "http://example.org/"), ("xsd", "urn://xsd#")]);
        assert_eq!(graph.namespaces().len(), 5);
        assert_eq!(graph.namespaces()["xsd"], "urn://xsd#");
    }

    #[test]
    fn literal_equality_is_lexical() {
        assert_eq!(Literal::typed(1_i64, XSD_INTEGER), Literal::typed("1", XSD_INTEGER));
        assert_ne!(Literal::plain("1"), Literal::typed("1", XSD_INTEGER));
        assert_eq!(Literal::plain(2.0_f64).lexical(), "2.0");
        assert_eq!(Literal::plain(true).lexical(), "true");
    }

    #[test]
    fn remove_ignores_annotations() {
        let graph = Graph::new()
            .add(Statement::new(JOHN, AGE, Literal::typed(42_i64, XSD_INTEGER)))
            .add(Statement::new(JOHN, AGE, Literal::lang("42", "en")))
            .add(Statement::new(JOHN, RDFS_LABEL, Literal::plain("John")));
        let removed = graph.remove(&Statement::new(JOHN, AGE, Literal::plain("42")));
        assert_eq!(removed.len(), 1);
        assert_eq!(removed.statements()[0].predicate, RDFS_LABEL);
    }

    #[test]
    fn strict_remove_keeps_differently_typed_literals() {
        let graph = Graph::new()
            .add(Statement::new(JOHN, AGE, Literal::typed(42_i64, XSD_INTEGER)))
            .add(Statement::new(JOHN, AGE, Literal::lang("42", "en")));
        let removed = graph.remove_with(
            &Statement::new(JOHN, AGE, Literal::lang("42", "en")),
            MatchMode::Strict,
        );
        assert_eq!(removed.len(), 1);
        assert_eq!(
            removed.statements()[0].object.as_literal().and_then(Literal::datatype),
            Some(XSD_INTEGER)
        );
    }

    #[test]
    fn find_treats_none_as_wildcard() {
        let graph = Graph::new()
            .add(Statement::new(JOHN, RDF_TYPE, "http://example.org/Person"))
            .add(Statement::new(JOHN, RDFS_LABEL, Literal::plain("John")))
            .add(Statement::new("http://example.org/mary", RDF_TYPE, "http://example.org/Person"));

        assert_eq!(graph.find(None, None, None).len(), 3);
        assert_eq!(graph.find(Some(JOHN), None, None).len(), 2);
        let person = Object::resource("http://example.org/Person");
        assert_eq!(graph.find(None, Some(RDF_TYPE), Some(&person)).len(), 2);
        assert!(graph.find_one(Some("http://example.org/nobody"), None, None).is_none());
    }

    #[test]
    fn merge_prefers_left_namespaces() {
        let left = Graph::with_namespaces([("ex", "http://left.org/")])
            .add(Statement::new(JOHN, RDFS_LABEL, Literal::plain("John")));
        let right = Graph::with_namespaces([("ex", "http://right.org/"), ("r", "http://r.org/")])
            .add(Statement::new(JOHN, RDFS_LABEL, Literal::plain("Johnny")));
        let merged = left.merge(right);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.namespaces()["ex"], "http://left.org/");
        assert_eq!(merged.namespaces()["r"], "http://r.org/");
    }

    #[test]
    fn add_namespace_keeps_prefixes_unique() {
        let graph = Graph::new()
            .add_namespace("ex", "http://a.org/")
            .add_namespace("ex", "http://b.org/");
        assert_eq!(graph.namespaces().len(), 5);
        assert_eq!(graph.namespaces()["ex"], "http://b.org/");
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let graph = Graph::new()
            .add(Statement::new(JOHN, AGE, Literal::typed(42_i64, XSD_INTEGER)))
            .add(Statement::new(JOHN, AGE, Literal::plain("42")))
            .add(Statement::new(JOHN, AGE, "http://example.org/42"));
        let deduped = graph.dedup();
        assert_eq!(deduped.len(), 2);
        assert!(deduped.statements()[0].object.as_literal().and_then(Literal::datatype).is_some());
    }

    #[test]
    fn subjects_in_first_appearance_order() {
        let graph = Graph::new()
            .add(Statement::new("http://b.org/", RDF_TYPE, "http://x.org/C"))
            .add(Statement::new("http://a.org/", RDF_TYPE, "http://x.org/C"))
            .add(Statement::new("http://b.org/", RDFS_LABEL, Literal::plain("b")));
        assert_eq!(graph.subjects(), vec!["http://b.org/", "http://a.org/"]);
    }
}

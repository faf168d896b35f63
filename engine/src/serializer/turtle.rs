//! Turtle serializer.
//!
//! Produces `@prefix` declarations for every namespace of the graph whose
//! prefix is a plain name, then one block per subject in order of first
//! appearance. Within a block the predicates are joined with ` ;` and the
//! objects of one predicate with `, `; each block ends with ` .`.
//!
//! ```text
//! @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!
//! <http://example.org/people/person> rdf:type rdfs:Class ;
//!     rdfs:label "Person" .
//! ```

use indexmap::IndexMap;

use crate::iri;
use crate::model::{Graph, Literal, Namespaces, Object};
use crate::serializer::escape;

/// Serializes a graph to a Turtle string.
#[must_use]
pub fn to_turtle(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.len() * 64 + 256);
    let namespaces = graph.namespaces();

    for (prefix, uri) in namespaces {
        if is_prefix_name(prefix) {
            out.push_str(&format!("@prefix {prefix}: <{uri}> .\n"));
        }
    }

    // subject -> predicate -> objects, in first-appearance order
    let mut blocks: IndexMap<&str, IndexMap<&str, Vec<&Object>>> = IndexMap::new();
    for statement in graph {
        blocks
            .entry(statement.subject.as_str())
            .or_default()
            .entry(statement.predicate.as_str())
            .or_default()
            .push(&statement.object);
    }

    for (subject, predicates) in &blocks {
        out.push('\n');
        out.push_str(&resource(subject, namespaces));
        out.push(' ');
        let predicate_list: Vec<String> = predicates
            .iter()
            .map(|(predicate, objects)| {
                let objects: Vec<String> =
                    objects.iter().map(|o| object(o, namespaces)).collect();
                format!("{} {}", resource(predicate, namespaces), objects.join(", "))
            })
            .collect();
        out.push_str(&predicate_list.join(" ;\n    "));
        out.push_str(" .\n");
    }

    out
}

/// Writes a URI as a prefixed name when one of the namespaces covers it and
/// the remaining local part is a plain name; otherwise as `<uri>`.
pub(crate) fn resource(id: &str, namespaces: &Namespaces) -> String {
    if iri::is_blank(id) {
        return id.to_owned();
    }
    namespaces
        .iter()
        .filter(|(prefix, ns)| {
            !ns.is_empty() && id.starts_with(ns.as_str()) && is_prefix_name(prefix)
        })
        .max_by_key(|(_, ns)| ns.len())
        .and_then(|(prefix, ns)| {
            let local = &id[ns.len()..];
            is_local_name(local).then(|| format!("{prefix}:{local}"))
        })
        .unwrap_or_else(|| format!("<{id}>"))
}

fn object(obj: &Object, namespaces: &Namespaces) -> String {
    match obj {
        Object::Resource(id) => resource(id, namespaces),
        Object::Literal(lit) => literal(lit, namespaces),
    }
}

fn literal(lit: &Literal, namespaces: &Namespaces) -> String {
    let escaped = escape(&lit.lexical());
    if let Some(tag) = lit.language() {
        format!("\"{escaped}\"@{tag}")
    } else if let Some(dt) = lit.datatype() {
        format!("\"{escaped}\"^^{}", resource(dt, namespaces))
    } else {
        format!("\"{escaped}\"")
    }
}

/// A prefix this serializer is willing to write: a letter followed by
/// letters, digits, `_` or `-`.
pub(crate) fn is_prefix_name(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// A local part this serializer is willing to write unescaped.
pub(crate) fn is_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphanumeric() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

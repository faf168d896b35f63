//! N-Triples serializer.
//!
//! One `<s> <p> <o> .` line per statement, in graph order, with every URI
//! written in full. Blank nodes are written as `_:label`.

use crate::iri;
use crate::model::{Graph, Literal, Object};
use crate::serializer::escape;

/// Serializes a graph to an N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.len() * 96);
    for statement in graph {
        triple(
            &mut out,
            &resource(&statement.subject),
            &resource(&statement.predicate),
            &object(&statement.object),
        );
    }
    out
}

fn triple(out: &mut String, subj: &str, pred: &str, obj: &str) {
    out.push_str(subj);
    out.push(' ');
    out.push_str(pred);
    out.push(' ');
    out.push_str(obj);
    out.push_str(" .\n");
}

fn resource(id: &str) -> String {
    if iri::is_blank(id) {
        id.to_owned()
    } else {
        format!("<{id}>")
    }
}

fn object(obj: &Object) -> String {
    match obj {
        Object::Resource(id) => resource(id),
        Object::Literal(lit) => literal(lit),
    }
}

/// Formats a literal: language tag first, then datatype, then plain.
pub(crate) fn literal(lit: &Literal) -> String {
    let escaped = escape(&lit.lexical());
    if let Some(tag) = lit.language() {
        format!("\"{escaped}\"@{tag}")
    } else if let Some(dt) = lit.datatype() {
        format!("\"{escaped}\"^^<{dt}>")
    } else {
        format!("\"{escaped}\"")
    }
}

//! JSON-LD decoder for the `@context` / `@graph` shape written by
//! [`to_json_ld`](crate::serializer::jsonld::to_json_ld).
//!
//! Keys are expanded through the document's `@context`. A property value is
//! a `{"@id": ...}` reference, a `{"@value": ...}` object with an optional
//! `@language` or `@type`, a bare JSON scalar, or an array of these.
//! A top-level `@id` next to `@graph` names the decoded graph.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};
use crate::iri;
use crate::model::{Graph, Literal, LiteralValue, Namespaces, Object, Statement};
use crate::parser::{literal, DecodeOptions};
use crate::vocab;

const FORMAT: &str = "jsonld";

/// Decodes a JSON-LD document into a graph.
///
/// Prefixes from `@context` extend the default namespaces. A document that
/// is a single node object instead of a `@graph` array is accepted too.
///
/// # Errors
///
/// Returns [`Error::Json`] if the input is not JSON at all. In strict mode,
/// returns [`Error::Decode`] for the first malformed node or value; the line
/// reported is the 1-based position of the node in `@graph`.
pub fn from_json_ld(input: &str, options: &DecodeOptions) -> Result<Graph> {
    let document: Value = serde_json::from_str(input)?;
    from_json_ld_value(&document, options)
}

/// Decodes an already parsed JSON-LD document.
///
/// # Errors
///
/// See [`from_json_ld`].
pub fn from_json_ld_value(document: &Value, options: &DecodeOptions) -> Result<Graph> {
    let context: Vec<(String, String)> = document
        .get("@context")
        .and_then(Value::as_object)
        .map(|ctx| {
            ctx.iter()
                .filter(|(prefix, _)| !prefix.starts_with('@'))
                .filter_map(|(prefix, uri)| uri.as_str().map(|u| (prefix.clone(), u.to_owned())))
                .collect()
        })
        .unwrap_or_default();
    let mut graph = Graph::with_namespaces(context);
    if document.get("@graph").is_some() {
        if let Some(name) = document.get("@id").and_then(Value::as_str) {
            graph = graph.named(name);
        }
    }

    let nodes: Vec<&Value> = match document.get("@graph") {
        Some(Value::Array(nodes)) => nodes.iter().collect(),
        Some(node) => vec![node],
        None if document.get("@id").is_some() => vec![document],
        None => Vec::new(),
    };

    let mut statements = Vec::new();
    for (index, node) in nodes.into_iter().enumerate() {
        let position = index + 1;
        match node_statements(node, graph.namespaces(), options.is_strict()) {
            Ok(parsed) => statements.extend(parsed),
            Err(message) if options.is_strict() => {
                return Err(Error::decode(FORMAT, position, message));
            }
            Err(message) => {
                debug!(
                    format = FORMAT,
                    node = position,
                    reason = %message,
                    "skipping malformed node"
                );
            }
        }
    }
    Ok(graph.extend(statements))
}

fn node_statements(
    node: &Value,
    namespaces: &Namespaces,
    strict: bool,
) -> std::result::Result<Vec<Statement>, String> {
    let node: &Map<String, Value> = node.as_object().ok_or("node is not a JSON object")?;
    let subject = node
        .get("@id")
        .and_then(Value::as_str)
        .ok_or("node has no string @id")?;
    let subject = iri::from_qname(subject, namespaces);

    let mut statements = Vec::new();
    for (key, value) in node {
        if key.starts_with('@') {
            if key == "@type" {
                for class in as_list(value) {
                    let class = class.as_str().ok_or("@type entries must be strings")?;
                    statements.push(Statement::new(
                        subject.clone(),
                        vocab::RDF_TYPE,
                        iri::from_qname(class, namespaces),
                    ));
                }
            }
            continue;
        }
        let predicate = iri::from_qname(key, namespaces);
        for item in as_list(value) {
            match object(item, namespaces) {
                Ok(object) => {
                    statements.push(Statement::new(subject.clone(), predicate.clone(), object));
                }
                Err(message) if strict => return Err(format!("{key}: {message}")),
                Err(message) => {
                    debug!(
                        format = FORMAT,
                        key = %key,
                        reason = %message,
                        "skipping malformed value"
                    );
                }
            }
        }
    }
    Ok(statements)
}

fn as_list(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}

fn object(value: &Value, namespaces: &Namespaces) -> std::result::Result<Object, String> {
    match value {
        Value::Object(map) => {
            if let Some(id) = map.get("@id") {
                let id = id.as_str().ok_or("@id must be a string")?;
                return Ok(Object::resource(iri::from_qname(id, namespaces)));
            }
            let raw = map.get("@value").ok_or("value object has neither @id nor @value")?;
            let language = map.get("@language").and_then(Value::as_str);
            let datatype = map
                .get("@type")
                .and_then(Value::as_str)
                .map(|dt| iri::from_qname(dt, namespaces));
            value_literal(raw, language, datatype).map(Object::Literal)
        }
        Value::Null => Err("null value".to_owned()),
        Value::Array(_) => Err("nested arrays are not supported".to_owned()),
        scalar => value_literal(scalar, None, None).map(Object::Literal),
    }
}

fn value_literal(
    raw: &Value,
    language: Option<&str>,
    datatype: Option<String>,
) -> std::result::Result<Literal, String> {
    if let Some(tag) = language {
        let text = raw.as_str().ok_or("language-tagged @value must be a string")?;
        return Ok(Literal::lang(text, tag));
    }
    let value = match raw {
        Value::String(text) => return Ok(literal(text.clone(), None, datatype)),
        Value::Bool(b) => LiteralValue::Boolean(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => LiteralValue::Integer(i),
            None => LiteralValue::Decimal(n.as_f64().ok_or("number out of range")?),
        },
        _ => return Err("@value must be a scalar".to_owned()),
    };
    Ok(match datatype {
        Some(dt) => Literal::typed(value, dt),
        None => Literal::plain(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::jsonld::to_json_ld_string;
    use crate::vocab::{RDFS_LABEL, XSD_BOOLEAN, XSD_DECIMAL, XSD_INTEGER};

    #[test]
    fn reads_what_the_encoder_writes() {
        let original = Graph::with_namespaces([("ex", "http://example.org/")])
            .add(Statement::new("http://example.org/a", vocab::RDF_TYPE, "http://example.org/C"))
            .add(Statement::new("http://example.org/a", RDFS_LABEL, Literal::plain("A")))
            .add(Statement::new("http://example.org/a", RDFS_LABEL, Literal::lang("Ah", "fr")))
            .add(Statement::new(
                "http://example.org/a",
                "http://example.org/n",
                Literal::typed(5_i64, XSD_INTEGER),
            ))
            .add(Statement::new("_:b", "http://example.org/ok", Literal::typed(true, XSD_BOOLEAN)))
            .add(Statement::new("_:b", "http://example.org/x", Literal::typed(2.5, XSD_DECIMAL)));
        let text = to_json_ld_string(&original).expect("encodes");
        let decoded = from_json_ld(&text, &DecodeOptions::lenient()).expect("decodes");
        assert_eq!(decoded.statements(), original.statements());
        assert_eq!(decoded.namespaces()["ex"], "http://example.org/");
    }

    #[test]
    fn bare_scalars_and_type_keys() {
        let doc = r#"{
            "@context": { "ex": "http://example.org/" },
            "@graph": [
                { "@id": "ex:a", "@type": "ex:C", "ex:name": "Alice", "ex:age": 30 }
            ]
        }"#;
        let graph = from_json_ld(doc, &DecodeOptions::lenient()).expect("decodes");
        let a = "http://example.org/a";
        assert!(graph.contains(&Statement::new(a, vocab::RDF_TYPE, "http://example.org/C")));
        assert!(graph.contains(&Statement::new(
            a,
            "http://example.org/name",
            Literal::plain("Alice"),
        )));
        assert!(graph.contains(&Statement::new(
            a,
            "http://example.org/age",
            Literal::plain(30_i64),
        )));
    }

    #[test]
    fn malformed_nodes_follow_the_mode() {
        let doc = r#"{ "@graph": [
            { "http://a.org/p": "no id" },
            { "@id": "http://a.org/s", "http://a.org/p": "v" }
        ] }"#;
        let graph = from_json_ld(doc, &DecodeOptions::lenient()).expect("lenient");
        assert_eq!(graph.len(), 1);
        let err = from_json_ld(doc, &DecodeOptions::strict()).expect_err("strict");
        assert!(matches!(err, Error::Decode { line: 1, .. }), "{err}");
    }

    #[test]
    fn context_keywords_are_not_namespaces() {
        let doc = r#"{
            "@context": { "@vocab": "http://example.org/", "ex": "http://example.org/" },
            "@graph": [ { "@id": "ex:a", "ex:p": "v" } ]
        }"#;
        let graph = from_json_ld(doc, &DecodeOptions::strict()).expect("decodes");
        assert!(!graph.namespaces().contains_key("@vocab"));
        assert_eq!(graph.namespaces()["ex"], "http://example.org/");

        let turtle = crate::serializer::turtle::to_turtle(&graph);
        assert!(!turtle.contains("@vocab"), "{turtle}");
        let reread = crate::parser::turtle::from_turtle(&turtle, &DecodeOptions::strict())
            .expect("re-encoded output decodes strictly");
        assert_eq!(reread.statements(), graph.statements());
    }

    #[test]
    fn graph_names_survive() {
        let original = Graph::new()
            .named("http://example.org/graphs/people")
            .add(Statement::new("http://example.org/a", RDFS_LABEL, Literal::plain("A")));
        let text = to_json_ld_string(&original).expect("encodes");
        let decoded = from_json_ld(&text, &DecodeOptions::strict()).expect("decodes");
        assert_eq!(decoded.name(), Some("http://example.org/graphs/people"));
        assert_eq!(decoded.statements(), original.statements());

        let unnamed = from_json_ld(r#"{ "@id": "http://example.org/a" }"#, &DecodeOptions::strict())
            .expect("single node document");
        assert_eq!(unnamed.name(), None);
    }

    #[test]
    fn invalid_json_is_a_json_error() {
        let err = from_json_ld("{ not json", &DecodeOptions::lenient()).expect_err("fails");
        assert!(matches!(err, Error::Json(_)));
    }
}

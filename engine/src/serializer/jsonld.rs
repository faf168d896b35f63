//! JSON-LD serializer.
//!
//! Produces a single document with the graph's namespace table as
//! `@context` and one node object per distinct subject in `@graph`:
//!
//! ```json
//! {
//!   "@context": { "rdfs": "http://www.w3.org/2000/01/rdf-schema#" },
//!   "@graph": [
//!     { "@id": "http://example.org/people/person",
//!       "rdfs:label": { "@value": "Person" } }
//!   ]
//! }
//! ```
//!
//! Predicate keys are compacted against the context; `@id` values are kept
//! in full. A predicate with several values maps to an array.

use indexmap::IndexMap;
use serde_json::{json, Map, Number, Value};

use crate::error::Result;
use crate::model::{Graph, Literal, LiteralValue, Object};

/// Builds the JSON-LD `Value` for a graph.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
/// A named graph also carries its name as the top-level `@id`.
#[must_use]
pub fn to_json_ld(graph: &Graph) -> Value {
    let mut document = json!({
        "@context": build_context(graph),
        "@graph": build_graph(graph)
    });
    if let (Some(name), Some(map)) = (graph.name(), document.as_object_mut()) {
        map.insert("@id".to_owned(), json!(name));
    }
    document
}

/// Serializes a graph to a pretty-printed JSON-LD string.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if `serde_json` fails to write
/// the document.
pub fn to_json_ld_string(graph: &Graph) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json_ld(graph))?)
}

fn build_context(graph: &Graph) -> Value {
    let ctx: Map<String, Value> = graph
        .namespaces()
        .iter()
        .map(|(prefix, uri)| (prefix.clone(), json!(uri)))
        .collect();
    Value::Object(ctx)
}

fn build_graph(graph: &Graph) -> Value {
    let mut nodes: IndexMap<&str, Map<String, Value>> = IndexMap::new();

    for statement in graph {
        let node = nodes.entry(statement.subject.as_str()).or_insert_with(|| {
            let mut node = Map::new();
            node.insert("@id".to_owned(), json!(statement.subject));
            node
        });
        let key = graph.to_qname(&statement.predicate);
        let value = object_to_json(&statement.object);
        // Promote to an array rather than overwriting when a predicate repeats.
        if let Some(existing) = node.get_mut(&key) {
            let prev = std::mem::replace(existing, Value::Null);
            *existing = match prev {
                Value::Array(mut arr) => {
                    arr.push(value);
                    Value::Array(arr)
                }
                other => json!([other, value]),
            };
        } else {
            node.insert(key, value);
        }
    }

    Value::Array(nodes.into_values().map(Value::Object).collect())
}

fn object_to_json(obj: &Object) -> Value {
    match obj {
        Object::Resource(id) => json!({ "@id": id }),
        Object::Literal(lit) => literal_to_json(lit),
    }
}

fn literal_to_json(lit: &Literal) -> Value {
    let value = match &lit.value {
        LiteralValue::Boolean(b) => json!(b),
        LiteralValue::Integer(i) => json!(i),
        LiteralValue::Decimal(d) => Number::from_f64(*d)
            .map_or_else(|| json!(lit.lexical()), Value::Number),
        LiteralValue::Text(s) | LiteralValue::DateTime(s) => json!(s),
    };
    let mut node = Map::new();
    node.insert("@value".to_owned(), value);
    if let Some(tag) = lit.language() {
        node.insert("@language".to_owned(), json!(tag));
    } else if let Some(dt) = lit.datatype() {
        node.insert("@type".to_owned(), json!(dt));
    }
    Value::Object(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Statement;
    use crate::vocab::{RDFS_LABEL, RDF_TYPE, XSD_INTEGER};

    const PERSON: &str = "http://example.org/people/person";

    fn sample() -> Graph {
        Graph::new()
            .add(Statement::new(PERSON, RDF_TYPE, "http://www.w3.org/2000/01/rdf-schema#Class"))
            .add(Statement::new(PERSON, RDFS_LABEL, Literal::plain("Person")))
            .add(Statement::new(PERSON, RDFS_LABEL, Literal::lang("Personne", "fr")))
            .add(Statement::new(
                "http://example.org/john",
                "http://example.org/age",
                Literal::typed(42_i64, XSD_INTEGER),
            ))
    }

    #[test]
    fn produces_context_and_graph() {
        let json = to_json_ld(&sample());
        assert!(json["@context"].is_object());
        assert_eq!(json["@context"]["owl"], "http://www.w3.org/2002/07/owl#");
        assert!(json["@graph"].is_array());
        assert!(json.get("@id").is_none());
    }

    #[test]
    fn named_graphs_carry_their_name() {
        let json = to_json_ld(&sample().named("http://example.org/graphs/people"));
        assert_eq!(json["@id"], "http://example.org/graphs/people");
        assert_eq!(json["@graph"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn one_node_per_subject() {
        let json = to_json_ld(&sample());
        let graph = json["@graph"].as_array().expect("@graph must be array");
        assert_eq!(graph.len(), 2);
        for (i, node) in graph.iter().enumerate() {
            assert!(!node["@id"].is_null(), "Node at index {i} is missing @id");
        }
    }

    #[test]
    fn repeated_predicates_collapse_into_a_list() {
        let json = to_json_ld(&sample());
        let person = &json["@graph"][0];
        assert_eq!(
            person["rdf:type"],
            json!({ "@id": "http://www.w3.org/2000/01/rdf-schema#Class" })
        );
        assert_eq!(
            person["rdfs:label"],
            json!([{ "@value": "Person" }, { "@value": "Personne", "@language": "fr" }])
        );
    }

    #[test]
    fn typed_literals_carry_type() {
        let json = to_json_ld(&sample());
        let john = &json["@graph"][1];
        assert_eq!(
            john["http://example.org/age"],
            json!({ "@value": 42, "@type": XSD_INTEGER })
        );
    }

    #[test]
    fn string_form_is_valid_json() {
        let text = to_json_ld_string(&sample()).expect("serializes");
        let parsed: Value = serde_json::from_str(&text).expect("parses");
        assert_eq!(parsed, to_json_ld(&sample()));
    }
}

//! Lowers a small people ontology written in TOML, closes it under the RDFS
//! rules and prints it in every supported format.
//!
//! Run with: `cargo run --example people -p semgraph`

use semgraph::{encode, lower_document, Format, LoweringOptions, OntologyDocument, Reasoner};

const DOCUMENT: &str = r#"
base = "http://example.org/people/"

[prefixes]
people = "http://example.org/people/"

[ontology]
name = "people"
version_info = "1.0.0"
title = "People"
description = "Persons, employees and who they know."

[[classes]]
name = "Agent"
kind = "owl"

[[classes]]
name = "Person"
kind = "owl"
label = "Person"
subclass_of = ["Agent"]

[[classes]]
name = "Employee"
kind = "owl"
label = "Employee"
subclass_of = ["Person"]

[[properties]]
name = "knows"
kind = "object"
domain = "Person"
range = "Person"
symmetric = true

[[properties]]
name = "worksFor"
kind = "object"
domain = "Employee"

[[restrictions]]
name = "knows_someone"
on_property = "knows"
min_cardinality = 1

[[individuals]]
name = "john"
label = "John"
types = [{ class = "Employee" }]
property_assertions = [
    { property = "knows", value = "http://example.org/people/mary" },
    { property = "age", value = 42 },
]
"#;

fn main() {
    let document: OntologyDocument = match toml::from_str(DOCUMENT) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("invalid document: {e}");
            return;
        }
    };
    let graph = match lower_document(&document, &LoweringOptions::default()) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("lowering failed: {e}");
            return;
        }
    };
    println!("Lowered {} statements", graph.len());

    let result = Reasoner::default().run(graph);
    println!(
        "Derived {} statements in {} rounds (fixpoint: {})",
        result.derived, result.rounds, result.reached_fixpoint
    );
    println!();

    for format in Format::ALL {
        println!("--- {format} ---");
        match encode(&result.graph, format) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("{format} encoding failed: {e}"),
        }
    }
}

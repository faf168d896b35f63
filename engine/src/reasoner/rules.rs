//! The four schema entailment rules.
//!
//! Each rule reads its premises from the graph it is given and appends the
//! conclusions that are not already present, compared by subject, predicate
//! and object value. Rules never remove statements.

use std::fmt;

use crate::model::{Graph, Object, Statement};
use crate::vocab;

/// A schema entailment rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `(A subClassOf B), (X type A) => (X type B)`.
    SubClass,
    /// `(P subPropertyOf Q), (X P Y) => (X Q Y)`.
    SubProperty,
    /// `(P domain C), (X P Y) => (X type C)`.
    Domain,
    /// `(P range C), (X P Y), Y not a literal => (Y type C)`.
    Range,
}

impl Rule {
    /// The default application order within a round.
    pub const ALL: [Rule; 4] = [Rule::SubClass, Rule::SubProperty, Rule::Domain, Rule::Range];

    /// Short name used in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Rule::SubClass => "subclass",
            Rule::SubProperty => "subproperty",
            Rule::Domain => "domain",
            Rule::Range => "range",
        }
    }

    /// Applies the rule once.
    #[must_use]
    pub fn apply(self, graph: Graph) -> Graph {
        match self {
            Rule::SubClass => apply_subclass_rule(graph),
            Rule::SubProperty => apply_subproperty_rule(graph),
            Rule::Domain => apply_domain_rule(graph),
            Rule::Range => apply_range_rule(graph),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `(A subClassOf B), (X type A) => (X type B)`.
#[must_use]
pub fn apply_subclass_rule(graph: Graph) -> Graph {
    let mut conclusions = Vec::new();
    for axiom in graph.find(None, Some(vocab::RDFS_SUBCLASS_OF), None) {
        let Some(parent) = axiom.object.as_resource() else {
            continue;
        };
        let child = Object::resource(axiom.subject.as_str());
        for member in graph.find(None, Some(vocab::RDF_TYPE), Some(&child)) {
            conclusions.push(Statement::new(member.subject.as_str(), vocab::RDF_TYPE, parent));
        }
    }
    add_missing(graph, conclusions)
}

/// `(P subPropertyOf Q), (X P Y) => (X Q Y)`.
///
/// The object keeps its datatype or language and the statement keeps its
/// graph name.
#[must_use]
pub fn apply_subproperty_rule(graph: Graph) -> Graph {
    let mut conclusions = Vec::new();
    for axiom in graph.find(None, Some(vocab::RDFS_SUBPROPERTY_OF), None) {
        let Some(parent) = axiom.object.as_resource() else {
            continue;
        };
        for use_ in graph.find(None, Some(axiom.subject.as_str()), None) {
            conclusions.push(Statement {
                subject: use_.subject.clone(),
                predicate: parent.to_owned(),
                object: use_.object.clone(),
                graph: use_.graph.clone(),
            });
        }
    }
    add_missing(graph, conclusions)
}

/// `(P domain C), (X P Y) => (X type C)`.
#[must_use]
pub fn apply_domain_rule(graph: Graph) -> Graph {
    let mut conclusions = Vec::new();
    for axiom in graph.find(None, Some(vocab::RDFS_DOMAIN), None) {
        let Some(class) = axiom.object.as_resource() else {
            continue;
        };
        for use_ in graph.find(None, Some(axiom.subject.as_str()), None) {
            conclusions.push(Statement::new(use_.subject.as_str(), vocab::RDF_TYPE, class));
        }
    }
    add_missing(graph, conclusions)
}

/// `(P range C), (X P Y) => (Y type C)` for resource objects only.
#[must_use]
pub fn apply_range_rule(graph: Graph) -> Graph {
    let mut conclusions = Vec::new();
    for axiom in graph.find(None, Some(vocab::RDFS_RANGE), None) {
        let Some(class) = axiom.object.as_resource() else {
            continue;
        };
        for use_ in graph.find(None, Some(axiom.subject.as_str()), None) {
            if let Some(value) = use_.object.as_resource() {
                conclusions.push(Statement::new(value, vocab::RDF_TYPE, class));
            }
        }
    }
    add_missing(graph, conclusions)
}

fn add_missing(graph: Graph, conclusions: Vec<Statement>) -> Graph {
    conclusions.into_iter().fold(graph, |graph, statement| {
        if graph.contains(&statement) {
            graph
        } else {
            graph.add(statement)
        }
    })
}

use tracing::trace;

use crate::iri;
use crate::model::{Literal, Statement};
use crate::ontology::{expand, value_object, Restriction, Triples};
use crate::vocab;

/// Lowers a restriction into the anonymous class `_:restriction_<name>`.
///
/// Writes `type owl:Class`, `type owl:Restriction` and `owl:onProperty`,
/// then at most one cardinality statement (min > max > exact), `owl:onClass`
/// with at most one qualified cardinality (same priority) when `on_class` is
/// set, and at most one value constraint (`someValuesFrom` >
/// `allValuesFrom` > `hasValue` > `hasSelf`). Cardinalities are typed
/// `xsd:nonNegativeInteger`.
#[must_use]
pub fn lower_restriction(restriction: &Restriction, base: Option<&str>) -> Vec<Statement> {
    let mut out = Triples::new(iri::blank_label(&["restriction", &restriction.name]));
    out.add(vocab::RDF_TYPE, vocab::OWL_CLASS);
    out.add(vocab::RDF_TYPE, vocab::OWL_RESTRICTION);
    out.add(vocab::OWL_ON_PROPERTY, expand(&restriction.on_property, base));

    let cardinality = first_set([
        (vocab::OWL_MIN_CARDINALITY, restriction.min_cardinality),
        (vocab::OWL_MAX_CARDINALITY, restriction.max_cardinality),
        (vocab::OWL_CARDINALITY, restriction.cardinality),
    ]);
    if let Some((predicate, n)) = cardinality {
        out.add(predicate, count(n));
    }

    if let Some(class) = &restriction.on_class {
        out.add(vocab::OWL_ON_CLASS, expand(class, base));
        let qualified = first_set([
            (vocab::OWL_MIN_QUALIFIED_CARDINALITY, restriction.min_qualified_cardinality),
            (vocab::OWL_MAX_QUALIFIED_CARDINALITY, restriction.max_qualified_cardinality),
            (vocab::OWL_QUALIFIED_CARDINALITY, restriction.qualified_cardinality),
        ]);
        if let Some((predicate, n)) = qualified {
            out.add(predicate, count(n));
        }
    }

    if let Some(class) = &restriction.some_values_from {
        out.add(vocab::OWL_SOME_VALUES_FROM, expand(class, base));
    } else if let Some(class) = &restriction.all_values_from {
        out.add(vocab::OWL_ALL_VALUES_FROM, expand(class, base));
    } else if let Some(value) = &restriction.has_value {
        out.add(vocab::OWL_HAS_VALUE, value_object(value));
    } else if restriction.has_self {
        out.add(vocab::OWL_HAS_SELF, Literal::typed(true, vocab::XSD_BOOLEAN));
    }

    let statements = out.finish();
    trace!(restriction = %restriction.name, statements = statements.len(), "lowered restriction");
    statements
}

fn first_set(candidates: [(&'static str, Option<u64>); 3]) -> Option<(&'static str, u64)> {
    candidates
        .into_iter()
        .find_map(|(predicate, n)| n.map(|n| (predicate, n)))
}

fn count(n: u64) -> Literal {
    Literal::typed(n, vocab::XSD_NON_NEGATIVE_INTEGER)
}

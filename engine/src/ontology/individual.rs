use tracing::trace;

use crate::iri;
use crate::model::{Literal, Object, Statement};
use crate::ontology::{expand, identify, value_object, Individual, PropertyAssertion, Triples};
use crate::vocab;

/// Lowers a named individual.
///
/// Writes `type owl:NamedIndividual`, one `type` statement per declared
/// class, label, comment, `sameAs`, `differentFrom`, then one statement per
/// positive property assertion. A negative assertion is reified as a blank
/// node `_:neg_<individual>_<property local name>` of type
/// `owl:NegativePropertyAssertion`.
#[must_use]
pub fn lower_individual(individual: &Individual, base: Option<&str>) -> Vec<Statement> {
    let mut out = Triples::new(identify(&individual.name, individual.uri.as_deref(), base));
    out.add(vocab::RDF_TYPE, vocab::OWL_NAMED_INDIVIDUAL);
    for class in &individual.types {
        out.link(vocab::RDF_TYPE, Some(class.class.as_str()), base);
    }
    out.text(vocab::RDFS_LABEL, individual.label.as_deref());
    out.text(vocab::RDFS_COMMENT, individual.comment.as_deref());
    for same in &individual.same_as {
        out.link(vocab::OWL_SAME_AS, Some(same.individual.as_str()), base);
    }
    for different in &individual.different_from {
        out.link(vocab::OWL_DIFFERENT_FROM, Some(different.individual.as_str()), base);
    }

    for assertion in &individual.property_assertions {
        let property = expand(&assertion.property, base);
        let object = assertion_object(assertion, base);
        if assertion.negative {
            let reified = negative_assertion(&individual.name, out.subject(), &property, object);
            out.append(reified);
        } else {
            out.add(&property, object);
        }
    }

    let statements = out.finish();
    trace!(individual = %individual.name, statements = statements.len(), "lowered individual");
    statements
}

/// Picks the object of an assertion: explicit datatype, then explicit
/// language, then an absolute-URI text value as a resource, then a plain
/// literal.
fn assertion_object(assertion: &PropertyAssertion, base: Option<&str>) -> Object {
    if let Some(datatype) = &assertion.datatype {
        return Literal::typed(assertion.value.clone(), expand(datatype, base)).into();
    }
    if let Some(language) = &assertion.language {
        return Literal::lang(assertion.value.clone(), language.as_str()).into();
    }
    value_object(&assertion.value)
}

fn negative_assertion(name: &str, source: &str, property: &str, target: Object) -> Vec<Statement> {
    let mut node = Triples::new(iri::blank_label(&["neg", name, iri::local_name(property)]));
    node.add(vocab::RDF_TYPE, vocab::OWL_NEGATIVE_PROPERTY_ASSERTION);
    node.add(vocab::OWL_SOURCE_INDIVIDUAL, source);
    node.add(vocab::OWL_ASSERTION_PROPERTY, property);
    match target {
        Object::Resource(_) => node.add(vocab::OWL_TARGET_INDIVIDUAL, target),
        Object::Literal(_) => node.add(vocab::OWL_TARGET_VALUE, target),
    }
    node.finish()
}

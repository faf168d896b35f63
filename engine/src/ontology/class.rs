use tracing::trace;

use crate::iri;
use crate::model::Statement;
use crate::ontology::{expand, identify, rdf_list, ClassDefinition, ClassKind, Triples};
use crate::vocab;

/// Lowers a class definition.
///
/// RDFS classes carry `type rdfs:Class`, label, comment, `seeAlso` and
/// `subClassOf`. OWL classes carry `type owl:Class` and the same fields plus
/// equivalences, disjointness and the deprecated flag. Intersection and union
/// members become anonymous classes `_:<name>_intersection` and
/// `_:<name>_union`, linked through `owl:equivalentClass` and holding their
/// members in an RDF list; each complement member is a direct
/// `owl:complementOf` statement.
#[must_use]
pub fn lower_class(class: &ClassDefinition, base: Option<&str>) -> Vec<Statement> {
    let mut out = Triples::new(identify(&class.name, class.uri.as_deref(), base));
    let class_type = match class.kind {
        ClassKind::Rdfs => vocab::RDFS_CLASS,
        ClassKind::Owl => vocab::OWL_CLASS,
    };
    out.add(vocab::RDF_TYPE, class_type);
    out.text(vocab::RDFS_LABEL, class.label.as_deref());
    out.text(vocab::RDFS_COMMENT, class.comment.as_deref());
    out.link(vocab::RDFS_SEE_ALSO, class.see_also.as_deref(), base);
    for parent in &class.subclass_of {
        out.link(vocab::RDFS_SUBCLASS_OF, Some(parent.as_str()), base);
    }

    if class.kind == ClassKind::Owl {
        for equivalent in &class.equivalent_classes {
            out.link(vocab::OWL_EQUIVALENT_CLASS, Some(equivalent.class.as_str()), base);
        }
        for disjoint in &class.disjoint_classes {
            out.link(vocab::OWL_DISJOINT_WITH, Some(disjoint.class.as_str()), base);
        }
        out.deprecated(class.deprecated);
        boolean_class(
            &mut out,
            &class.name,
            "intersection",
            vocab::OWL_INTERSECTION_OF,
            &class.intersection_of,
            base,
        );
        boolean_class(
            &mut out,
            &class.name,
            "union",
            vocab::OWL_UNION_OF,
            &class.union_of,
            base,
        );
        for member in &class.complement_of {
            out.link(vocab::OWL_COMPLEMENT_OF, Some(member.as_str()), base);
        }
    }

    let statements = out.finish();
    trace!(class = %class.name, statements = statements.len(), "lowered class");
    statements
}

/// Writes `class equivalentClass _:<name>_<role>` and the anonymous class
/// holding `members` under `operator`.
fn boolean_class(
    out: &mut Triples,
    name: &str,
    role: &str,
    operator: &str,
    members: &[String],
    base: Option<&str>,
) {
    if members.is_empty() {
        return;
    }
    let node = iri::blank_label(&[name, role]);
    let members: Vec<String> = members.iter().map(|m| expand(m, base)).collect();
    let (head, cells) = rdf_list(&node, &members);

    out.add(vocab::OWL_EQUIVALENT_CLASS, node.as_str());
    let mut anonymous = Triples::new(node);
    anonymous.add(vocab::RDF_TYPE, vocab::OWL_CLASS);
    anonymous.add(operator, head);
    out.append(anonymous.finish());
    out.append(cells);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Literal;
    use crate::ontology::{DisjointClass, EquivalentClass};

    const BASE: Option<&str> = Some("http://example.org/people/");
    const PERSON: &str = "http://example.org/people/person";

    #[test]
    fn rdfs_class_with_label() {
        let class = ClassDefinition {
            name: "person".into(),
            label: Some("Person".into()),
            ..ClassDefinition::default()
        };
        assert_eq!(
            lower_class(&class, BASE),
            vec![
                Statement::new(PERSON, vocab::RDF_TYPE, vocab::RDFS_CLASS),
                Statement::new(PERSON, vocab::RDFS_LABEL, Literal::plain("Person")),
            ]
        );
    }

    #[test]
    fn rdfs_class_ignores_owl_fields() {
        let class = ClassDefinition {
            name: "person".into(),
            subclass_of: vec!["agent".into()],
            disjoint_classes: vec![DisjointClass { class: "rock".into() }],
            deprecated: true,
            ..ClassDefinition::default()
        };
        let statements = lower_class(&class, BASE);
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[1].object.as_resource(), Some("http://example.org/people/agent"));
    }

    #[test]
    fn owl_class_links() {
        let class = ClassDefinition {
            name: "person".into(),
            kind: ClassKind::Owl,
            comment: Some("A human".into()),
            see_also: Some("http://xmlns.com/foaf/0.1/Person".into()),
            equivalent_classes: vec![EquivalentClass { class: "human".into() }],
            disjoint_classes: vec![DisjointClass { class: "rock".into() }],
            complement_of: vec!["nonPerson".into()],
            deprecated: true,
            ..ClassDefinition::default()
        };
        let statements = lower_class(&class, BASE);
        assert_eq!(statements[0], Statement::new(PERSON, vocab::RDF_TYPE, vocab::OWL_CLASS));
        for (predicate, object) in [
            (vocab::OWL_EQUIVALENT_CLASS, "http://example.org/people/human"),
            (vocab::OWL_DISJOINT_WITH, "http://example.org/people/rock"),
            (vocab::OWL_COMPLEMENT_OF, "http://example.org/people/nonPerson"),
        ] {
            assert!(statements.contains(&Statement::new(PERSON, predicate, object)));
        }
        let deprecated = Literal::typed(true, vocab::XSD_BOOLEAN);
        assert!(statements.contains(&Statement::new(PERSON, vocab::OWL_DEPRECATED, deprecated)));
        assert_eq!(statements.len(), 7);
    }

    #[test]
    fn intersection_becomes_an_anonymous_class_with_a_list() {
        let class = ClassDefinition {
            name: "parent".into(),
            kind: ClassKind::Owl,
            intersection_of: vec!["person".into(), "owl:Thing".into()],
            ..ClassDefinition::default()
        };
        let statements = lower_class(&class, BASE);
        let parent = "http://example.org/people/parent";
        let node = "_:parent_intersection";
        let (first, second) = ("_:parent_intersection_list_0", "_:parent_intersection_list_1");
        let thing = format!("{}Thing", vocab::OWL);
        assert_eq!(
            statements,
            vec![
                Statement::new(parent, vocab::RDF_TYPE, vocab::OWL_CLASS),
                Statement::new(parent, vocab::OWL_EQUIVALENT_CLASS, node),
                Statement::new(node, vocab::RDF_TYPE, vocab::OWL_CLASS),
                Statement::new(node, vocab::OWL_INTERSECTION_OF, first),
                Statement::new(first, vocab::RDF_FIRST, PERSON),
                Statement::new(first, vocab::RDF_REST, second),
                Statement::new(second, vocab::RDF_FIRST, thing),
                Statement::new(second, vocab::RDF_REST, vocab::RDF_NIL),
            ]
        );
    }

    #[test]
    fn union_labels_are_sanitised() {
        let class = ClassDefinition {
            name: "pet owner".into(),
            kind: ClassKind::Owl,
            union_of: vec!["dogOwner".into()],
            ..ClassDefinition::default()
        };
        let statements = lower_class(&class, BASE);
        assert!(statements
            .iter()
            .any(|s| s.subject == "_:pet_owner_union" && s.predicate == vocab::OWL_UNION_OF));
    }
}

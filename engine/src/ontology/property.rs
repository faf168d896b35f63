use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::model::Statement;
use crate::ontology::{
    identify, CharacteristicPolicy, LoweringOptions, PropertyDefinition, PropertyKind, Triples,
};
use crate::vocab;

/// A characteristic flag and the kinds it applies to.
struct Characteristic {
    name: &'static str,
    class: &'static str,
    object_only: bool,
}

const fn characteristic(
    name: &'static str,
    class: &'static str,
    object_only: bool,
) -> Characteristic {
    Characteristic {
        name,
        class,
        object_only,
    }
}

const CHARACTERISTICS: [Characteristic; 7] = [
    characteristic("functional", vocab::OWL_FUNCTIONAL_PROPERTY, false),
    characteristic("inverseFunctional", vocab::OWL_INVERSE_FUNCTIONAL_PROPERTY, false),
    characteristic("transitive", vocab::OWL_TRANSITIVE_PROPERTY, true),
    characteristic("symmetric", vocab::OWL_SYMMETRIC_PROPERTY, true),
    characteristic("asymmetric", vocab::OWL_ASYMMETRIC_PROPERTY, true),
    characteristic("reflexive", vocab::OWL_REFLEXIVE_PROPERTY, true),
    characteristic("irreflexive", vocab::OWL_IRREFLEXIVE_PROPERTY, true),
];

impl Characteristic {
    fn applies_to(&self, kind: PropertyKind) -> bool {
        match kind {
            PropertyKind::Object => true,
            PropertyKind::Datatype | PropertyKind::Annotation => !self.object_only,
            PropertyKind::Rdf => false,
        }
    }
}

fn flags(property: &PropertyDefinition) -> [bool; 7] {
    [
        property.functional,
        property.inverse_functional,
        property.transitive,
        property.symmetric,
        property.asymmetric,
        property.reflexive,
        property.irreflexive,
    ]
}

/// Lowers a property definition.
///
/// RDF properties carry `type rdf:Property`, domain, range, label, comment
/// and `subPropertyOf`. OWL properties are typed by their kind and also carry
/// equivalences, inverses, the deprecated flag and one extra `type`
/// statement per applicable characteristic. `functional` and
/// `inverseFunctional` apply to every OWL property kind; the other five
/// apply to object properties only. Plain RDF properties take none.
///
/// # Errors
///
/// Returns [`Error::Characteristic`] for a flag that does not apply to the
/// property's kind when `options` uses [`CharacteristicPolicy::Reject`].
/// Under [`CharacteristicPolicy::Drop`] such flags are left out and this
/// never fails.
pub fn lower_property(
    property: &PropertyDefinition,
    base: Option<&str>,
    options: &LoweringOptions,
) -> Result<Vec<Statement>> {
    let mut out = Triples::new(identify(&property.name, property.uri.as_deref(), base));
    let property_type = match property.kind {
        PropertyKind::Rdf => vocab::RDF_PROPERTY,
        PropertyKind::Object => vocab::OWL_OBJECT_PROPERTY,
        PropertyKind::Datatype => vocab::OWL_DATATYPE_PROPERTY,
        PropertyKind::Annotation => vocab::OWL_ANNOTATION_PROPERTY,
    };
    out.add(vocab::RDF_TYPE, property_type);
    out.link(vocab::RDFS_DOMAIN, property.domain.as_deref(), base);
    out.link(vocab::RDFS_RANGE, property.range.as_deref(), base);
    out.text(vocab::RDFS_LABEL, property.label.as_deref());
    out.text(vocab::RDFS_COMMENT, property.comment.as_deref());
    for parent in &property.sub_property_of {
        out.link(vocab::RDFS_SUBPROPERTY_OF, Some(parent.as_str()), base);
    }

    if property.kind != PropertyKind::Rdf {
        for equivalent in &property.equivalent_properties {
            out.link(
                vocab::OWL_EQUIVALENT_PROPERTY,
                Some(equivalent.property.as_str()),
                base,
            );
        }
        for inverse in &property.inverse_properties {
            out.link(vocab::OWL_INVERSE_OF, Some(inverse.property.as_str()), base);
        }
    }

    for (characteristic, set) in CHARACTERISTICS.iter().zip(flags(property)) {
        if !set {
            continue;
        }
        if characteristic.applies_to(property.kind) {
            out.add(vocab::RDF_TYPE, characteristic.class);
            continue;
        }
        match options.characteristics {
            CharacteristicPolicy::Reject => {
                return Err(Error::Characteristic {
                    property: property.name.clone(),
                    characteristic: characteristic.name,
                    kind: property.kind.as_str(),
                });
            }
            CharacteristicPolicy::Drop => {
                debug!(
                    property = %property.name,
                    characteristic = characteristic.name,
                    kind = property.kind.as_str(),
                    "dropping inapplicable characteristic"
                );
            }
        }
    }

    if property.kind != PropertyKind::Rdf {
        out.deprecated(property.deprecated);
    }

    let statements = out.finish();
    trace!(property = %property.name, statements = statements.len(), "lowered property");
    Ok(statements)
}

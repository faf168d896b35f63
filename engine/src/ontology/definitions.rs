//! Ontology-definition records consumed by lowering.
//!
//! These are plain, already shape-validated inputs. Identifier fields hold
//! absolute URIs, `prefix:local` names under one of the default namespaces,
//! `_:` blank labels, or local names that lowering resolves against the
//! enclosing base URI. When `uri` is absent an entity is identified by its
//! `name` resolved the same way.

use crate::model::LiteralValue;

/// Ontology header metadata.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Ontology {
    /// Symbolic name.
    pub name: String,
    /// Explicit URI.
    pub uri: Option<String>,
    /// `owl:versionInfo`.
    pub version_info: Option<String>,
    /// Human-readable title, written as `rdfs:label`.
    pub title: Option<String>,
    /// Description, written as `rdfs:comment`.
    pub description: Option<String>,
    /// `owl:imports`.
    pub imports: Vec<Import>,
    /// `owl:priorVersion`.
    pub prior_version: Option<String>,
    /// `owl:backwardCompatibleWith`.
    pub backward_compatible_with: Option<String>,
    /// `owl:incompatibleWith`.
    pub incompatible_with: Option<String>,
}

/// An imported ontology.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct Import {
    /// URI of the imported ontology.
    pub uri: String,
}

/// Which vocabulary a class is declared in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ClassKind {
    /// `rdfs:Class`.
    #[default]
    Rdfs,
    /// `owl:Class`.
    Owl,
}

/// An `owl:equivalentClass` link.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct EquivalentClass {
    /// The equivalent class.
    pub class: String,
}

/// An `owl:disjointWith` link.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct DisjointClass {
    /// The disjoint class.
    pub class: String,
}

/// A class definition.
///
/// The OWL-only fields (`equivalent_classes`, `disjoint_classes`,
/// `intersection_of`, `union_of`, `complement_of`, `deprecated`) are ignored
/// for [`ClassKind::Rdfs`] classes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct ClassDefinition {
    /// Symbolic name.
    pub name: String,
    /// Explicit URI.
    pub uri: Option<String>,
    /// RDFS or OWL class.
    pub kind: ClassKind,
    /// `rdfs:label`.
    pub label: Option<String>,
    /// `rdfs:comment`.
    pub comment: Option<String>,
    /// `rdfs:seeAlso`.
    pub see_also: Option<String>,
    /// Parent classes (`rdfs:subClassOf`).
    pub subclass_of: Vec<String>,
    /// `owl:equivalentClass` links.
    pub equivalent_classes: Vec<EquivalentClass>,
    /// `owl:disjointWith` links.
    pub disjoint_classes: Vec<DisjointClass>,
    /// Members of an anonymous `owl:intersectionOf` class.
    pub intersection_of: Vec<String>,
    /// Members of an anonymous `owl:unionOf` class.
    pub union_of: Vec<String>,
    /// Classes this one is the complement of.
    pub complement_of: Vec<String>,
    /// `owl:deprecated true`.
    pub deprecated: bool,
}

/// Which vocabulary and kind a property is declared as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PropertyKind {
    /// `rdf:Property`.
    #[default]
    Rdf,
    /// `owl:ObjectProperty`.
    Object,
    /// `owl:DatatypeProperty`.
    Datatype,
    /// `owl:AnnotationProperty`.
    Annotation,
}

impl PropertyKind {
    /// Lowercase name used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyKind::Rdf => "rdf",
            PropertyKind::Object => "object",
            PropertyKind::Datatype => "datatype",
            PropertyKind::Annotation => "annotation",
        }
    }
}

/// An `owl:equivalentProperty` link.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct EquivalentProperty {
    /// The equivalent property.
    pub property: String,
}

/// An `owl:inverseOf` link.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct InverseProperty {
    /// The inverse property.
    pub property: String,
}

/// A property definition.
///
/// `equivalent_properties`, `inverse_properties`, `deprecated` and the
/// characteristic flags only apply to OWL kinds.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct PropertyDefinition {
    /// Symbolic name.
    pub name: String,
    /// Explicit URI.
    pub uri: Option<String>,
    /// RDF or OWL property kind.
    pub kind: PropertyKind,
    /// `rdfs:label`.
    pub label: Option<String>,
    /// `rdfs:comment`.
    pub comment: Option<String>,
    /// `rdfs:domain`.
    pub domain: Option<String>,
    /// `rdfs:range`.
    pub range: Option<String>,
    /// Parent properties (`rdfs:subPropertyOf`).
    pub sub_property_of: Vec<String>,
    /// `owl:equivalentProperty` links.
    pub equivalent_properties: Vec<EquivalentProperty>,
    /// `owl:inverseOf` links.
    pub inverse_properties: Vec<InverseProperty>,
    /// `owl:FunctionalProperty`.
    pub functional: bool,
    /// `owl:InverseFunctionalProperty`.
    pub inverse_functional: bool,
    /// `owl:TransitiveProperty`.
    pub transitive: bool,
    /// `owl:SymmetricProperty`.
    pub symmetric: bool,
    /// `owl:AsymmetricProperty`.
    pub asymmetric: bool,
    /// `owl:ReflexiveProperty`.
    pub reflexive: bool,
    /// `owl:IrreflexiveProperty`.
    pub irreflexive: bool,
    /// `owl:deprecated true`.
    pub deprecated: bool,
}

/// A class membership of an individual.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct Type {
    /// The class.
    pub class: String,
}

/// An `owl:sameAs` link.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct SameAs {
    /// The identical individual.
    pub individual: String,
}

/// An `owl:differentFrom` link.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct DifferentFrom {
    /// The distinct individual.
    pub individual: String,
}

/// A (possibly negative) property assertion on an individual.
///
/// The object is chosen by priority: an explicit `datatype` makes a typed
/// literal, else an explicit `language` makes a tagged literal, else a text
/// value that is an absolute URI becomes a resource, else a plain literal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct PropertyAssertion {
    /// The asserted property.
    pub property: String,
    /// The asserted value.
    pub value: LiteralValue,
    /// Datatype of a literal value.
    #[cfg_attr(feature = "serde", serde(default))]
    pub datatype: Option<String>,
    /// Language tag of a literal value.
    #[cfg_attr(feature = "serde", serde(default))]
    pub language: Option<String>,
    /// Lower as an `owl:NegativePropertyAssertion` instead of a triple.
    #[cfg_attr(feature = "serde", serde(default))]
    pub negative: bool,
}

impl PropertyAssertion {
    /// Creates a positive assertion without datatype or language.
    pub fn new(property: impl Into<String>, value: impl Into<LiteralValue>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            datatype: None,
            language: None,
            negative: false,
        }
    }

    /// Returns the assertion with the given datatype.
    #[must_use]
    pub fn typed(mut self, datatype: impl Into<String>) -> Self {
        self.datatype = Some(datatype.into());
        self
    }

    /// Returns the assertion with the given language tag.
    #[must_use]
    pub fn lang(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Returns the assertion marked negative.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.negative = true;
        self
    }
}

/// A named individual.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Individual {
    /// Symbolic name.
    pub name: String,
    /// Explicit URI.
    pub uri: Option<String>,
    /// `rdfs:label`.
    pub label: Option<String>,
    /// `rdfs:comment`.
    pub comment: Option<String>,
    /// Declared classes.
    pub types: Vec<Type>,
    /// `owl:sameAs` links.
    pub same_as: Vec<SameAs>,
    /// `owl:differentFrom` links.
    pub different_from: Vec<DifferentFrom>,
    /// Property assertions.
    pub property_assertions: Vec<PropertyAssertion>,
}

/// An anonymous class constraining a property.
///
/// At most one cardinality triple and one qualified-cardinality triple are
/// written, each picked by the priority min > max > exact. At most one value
/// constraint is written, picked by the priority `some_values_from` >
/// `all_values_from` > `has_value` > `has_self`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Restriction {
    /// Symbolic name; determines the blank-node label.
    pub name: String,
    /// `owl:onProperty`.
    pub on_property: String,
    /// `owl:minCardinality`.
    pub min_cardinality: Option<u64>,
    /// `owl:maxCardinality`.
    pub max_cardinality: Option<u64>,
    /// `owl:cardinality`.
    pub cardinality: Option<u64>,
    /// `owl:onClass` for qualified cardinalities.
    pub on_class: Option<String>,
    /// `owl:minQualifiedCardinality`.
    pub min_qualified_cardinality: Option<u64>,
    /// `owl:maxQualifiedCardinality`.
    pub max_qualified_cardinality: Option<u64>,
    /// `owl:qualifiedCardinality`.
    pub qualified_cardinality: Option<u64>,
    /// `owl:someValuesFrom`.
    pub some_values_from: Option<String>,
    /// `owl:allValuesFrom`.
    pub all_values_from: Option<String>,
    /// `owl:hasValue`; an absolute-URI text value is written as a resource.
    pub has_value: Option<LiteralValue>,
    /// `owl:hasSelf true`.
    pub has_self: bool,
}

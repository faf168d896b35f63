use tracing::trace;

use crate::model::Statement;
use crate::ontology::{identify, Ontology, Triples};
use crate::vocab;

/// Lowers an ontology header.
///
/// Always writes `type owl:Ontology`; every other field contributes one
/// statement when present. The title becomes `rdfs:label` and the
/// description `rdfs:comment`.
#[must_use]
pub fn lower_ontology(ontology: &Ontology, base: Option<&str>) -> Vec<Statement> {
    let mut out = Triples::new(identify(&ontology.name, ontology.uri.as_deref(), base));
    out.add(vocab::RDF_TYPE, vocab::OWL_ONTOLOGY);
    out.text(vocab::OWL_VERSION_INFO, ontology.version_info.as_deref());
    out.text(vocab::RDFS_LABEL, ontology.title.as_deref());
    out.text(vocab::RDFS_COMMENT, ontology.description.as_deref());
    for import in &ontology.imports {
        out.link(vocab::OWL_IMPORTS, Some(import.uri.as_str()), base);
    }
    out.link(vocab::OWL_PRIOR_VERSION, ontology.prior_version.as_deref(), base);
    out.link(
        vocab::OWL_BACKWARD_COMPATIBLE_WITH,
        ontology.backward_compatible_with.as_deref(),
        base,
    );
    out.link(vocab::OWL_INCOMPATIBLE_WITH, ontology.incompatible_with.as_deref(), base);

    let statements = out.finish();
    trace!(ontology = %ontology.name, statements = statements.len(), "lowered ontology header");
    statements
}

use crate::model::Statement;
use crate::vocab;

/// Builds an RDF list over `members`.
///
/// Cell `i` is labelled `<head>_list_<i>` and carries `rdf:first` pointing to
/// the member and `rdf:rest` pointing to the next cell, or to `rdf:nil` for
/// the last one. Returns the identifier to link the list from (the first
/// cell, or `rdf:nil` for an empty list) together with the cell statements.
///
/// ```
/// use semgraph::ontology::rdf_list;
/// use semgraph::vocab::RDF_NIL;
///
/// let (head, cells) = rdf_list("_:c_union", &["http://x.org/A".to_owned()]);
/// assert_eq!(head, "_:c_union_list_0");
/// assert_eq!(cells.len(), 2);
///
/// let (head, cells) = rdf_list("_:c_union", &[]);
/// assert_eq!(head, RDF_NIL);
/// assert!(cells.is_empty());
/// ```
#[must_use]
pub fn rdf_list(head: &str, members: &[String]) -> (String, Vec<Statement>) {
    let cell = |i: usize| format!("{head}_list_{i}");
    let mut statements = Vec::with_capacity(members.len() * 2);
    for (i, member) in members.iter().enumerate() {
        let rest = if i + 1 == members.len() {
            vocab::RDF_NIL.to_owned()
        } else {
            cell(i + 1)
        };
        statements.push(Statement::new(cell(i), vocab::RDF_FIRST, member.as_str()));
        statements.push(Statement::new(cell(i), vocab::RDF_REST, rest));
    }
    let first = if members.is_empty() {
        vocab::RDF_NIL.to_owned()
    } else {
        cell(0)
    };
    (first, statements)
}

//! Identifier resolution: absolute-URI detection, base joining, local names
//! and prefixed-name (qname) conversion.
//!
//! The join performed by [`resolve`] is a deliberate simplification of
//! RFC 3986 reference resolution: it never interprets `..` segments or
//! authorities, it only glues a relative name onto a base.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::Namespaces;

/// Prefix marking a graph-local blank-node label.
pub const BLANK_PREFIX: &str = "_:";

// The pattern is a compile-time constant.
#[allow(clippy::unwrap_used)]
fn absolute_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").unwrap())
}

/// Returns `true` if `id` starts with a `scheme://` prefix.
#[must_use]
pub fn is_absolute(id: &str) -> bool {
    absolute_pattern().is_match(id)
}

/// Returns `true` if `id` is a blank-node label (`_:name`).
#[must_use]
pub fn is_blank(id: &str) -> bool {
    id.starts_with(BLANK_PREFIX)
}

/// Resolves `id` against `base`.
///
/// Absolute URIs and blank-node labels are returned unchanged, as is every
/// identifier when no base is given. Otherwise one trailing `/` is stripped
/// from the base, one leading `/` from the identifier, and the two are joined
/// with a single `/`.
///
/// The one exception to that join is a base ending in `#`: it is a fragment
/// namespace, so the identifier is appended to it directly instead of after
/// an added `/`. `http://example.org/onto#` with `Person` gives
/// `http://example.org/onto#Person`, never `http://example.org/onto#/Person`.
///
/// ```
/// use semgraph::iri::resolve;
///
/// let base = Some("http://example.org/people/");
/// assert_eq!(resolve("person", base), "http://example.org/people/person");
/// let unslashed = Some("http://example.org/people");
/// assert_eq!(resolve("/person", unslashed), "http://example.org/people/person");
/// let fragment = Some("http://example.org/onto#");
/// assert_eq!(resolve("Person", fragment), "http://example.org/onto#Person");
/// assert_eq!(resolve("urn://x/y", base), "urn://x/y");
/// ```
#[must_use]
pub fn resolve(id: &str, base: Option<&str>) -> String {
    let base = match base {
        Some(base) if !is_absolute(id) && !is_blank(id) => base,
        _ => return id.to_owned(),
    };
    let relative = id.strip_prefix('/').unwrap_or(id);
    if base.ends_with('#') {
        return format!("{base}{relative}");
    }
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{base}/{relative}")
}

/// Returns the local part of a URI: its last path segment, narrowed to the
/// text after the final `#` when the segment contains one.
#[must_use]
pub fn local_name(uri: &str) -> &str {
    let segment = uri.rsplit('/').next().unwrap_or(uri);
    match segment.rfind('#') {
        Some(idx) => &segment[idx + 1..],
        None => segment,
    }
}

/// Compacts `uri` to `prefix:local` using the longest matching namespace.
///
/// URIs under no known namespace are returned unchanged.
#[must_use]
pub fn to_qname(uri: &str, namespaces: &Namespaces) -> String {
    namespaces
        .iter()
        .filter(|(_, ns)| !ns.is_empty() && uri.starts_with(ns.as_str()))
        .max_by_key(|(_, ns)| ns.len())
        .map(|(prefix, ns)| format!("{prefix}:{}", &uri[ns.len()..]))
        .unwrap_or_else(|| uri.to_owned())
}

/// Expands `prefix:local` using the namespace table.
///
/// Absolute URIs, blank-node labels, identifiers without a colon and unknown
/// prefixes are returned unchanged.
#[must_use]
pub fn from_qname(qname: &str, namespaces: &Namespaces) -> String {
    if is_absolute(qname) || is_blank(qname) {
        return qname.to_owned();
    }
    match qname.split_once(':') {
        Some((prefix, local)) => match namespaces.get(prefix) {
            Some(ns) => format!("{ns}{local}"),
            None => qname.to_owned(),
        },
        None => qname.to_owned(),
    }
}

/// Builds a blank-node label from name parts, replacing every character
/// outside `[A-Za-z0-9_-]` with `_` so the label is valid in every codec.
#[must_use]
pub fn blank_label(parts: &[&str]) -> String {
    let mut label = String::from(BLANK_PREFIX);
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            label.push('_');
        }
        label.extend(part.chars().map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        }));
    }
    label
}

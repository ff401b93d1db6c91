//! Lookups over assessed graphs.

use std::collections::BTreeSet;

use dq_graph::{Graph, Literal, Term};
use dq_vocab::{Registry, VocabError};

/// Subjects carrying `label` of dimension `key`.
///
/// Matches `?s <assess-namespace>property <label-iri>` as well as the plain
/// literal form `?s <assess-namespace>property "label"`. The dimension and
/// label are bound as pattern terms, never spliced into query text.
///
/// # Errors
///
/// Returns [`VocabError`] if the dimension or the label is not in `registry`.
pub fn subjects_with_label<'g>(
    graph: &'g Graph,
    registry: &Registry,
    key: &str,
    label: &str,
) -> Result<BTreeSet<&'g Term>, VocabError> {
    let (_, assess_namespace) = registry.lookup_namespaces(key)?;
    let label_iri = registry.label_iri(key, label)?;
    let property = Term::iri(format!("{assess_namespace}property"));
    let mut subjects = graph.subjects(&property, &Term::iri(label_iri));
    subjects.extend(graph.subjects(&property, &Literal::string(label).into()));
    Ok(subjects)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tagged() -> Graph {
        let mut graph = Graph::new();
        let property = Term::iri("http://example.com/assess/coordinate_in_australia_state/property");
        graph.insert(
            Term::iri("http://example.com/occ/1"),
            property.clone(),
            Term::iri("http://example.com/vocab/coordinate_in_australia_state/Western_Australia"),
        );
        graph.insert(
            Term::iri("http://example.com/occ/2"),
            property.clone(),
            Literal::string("Western_Australia").into(),
        );
        graph.insert(
            Term::iri("http://example.com/occ/3"),
            property,
            Literal::string("Victoria").into(),
        );
        graph
    }

    #[test]
    fn finds_iri_and_literal_forms() {
        let graph = tagged();
        let found = subjects_with_label(
            &graph,
            Registry::full(),
            "coordinate_in_australia_state",
            "Western_Australia",
        )
        .unwrap();
        let iris: Vec<_> = found.iter().filter_map(|t| t.as_iri()).collect();
        assert_eq!(iris, vec!["http://example.com/occ/1", "http://example.com/occ/2"]);
    }

    #[test]
    fn unknown_label_fails() {
        let graph = tagged();
        let err = subjects_with_label(&graph, Registry::full(), "coordinate_in_australia_state", "Bavaria");
        assert!(matches!(err, Err(VocabError::UnknownLabel { .. })));
        let err = subjects_with_label(&graph, Registry::full(), "state", "Victoria");
        assert!(matches!(err, Err(VocabError::NotFound { .. })));
    }
}

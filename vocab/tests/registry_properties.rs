//! Cross-module properties of the vocabulary registry.

use dq_graph::Graph;
use dq_vocab::{Registry, VocabError};

#[test]
fn every_label_resolves_to_a_definition_row() {
    let registry = Registry::full();
    let rows = registry.label_definitions();
    for assertion in registry.all_labels() {
        let (prefix, label) = assertion
            .split_once(':')
            .unwrap_or_else(|| (assertion.as_str(), ""));
        let dimension = registry
            .dimension(prefix)
            .unwrap_or_else(|e| panic!("{assertion}: {e}"));
        let row = rows
            .iter()
            .find(|r| r.assertion == assertion)
            .unwrap_or_else(|| panic!("no definition row for {assertion}"));
        assert_eq!(row.label, label);
        assert_eq!(row.category, dimension.category.as_str());
        assert_eq!(row.input_field, dimension.input_field);
    }
}

#[test]
fn materializing_twice_equals_once() {
    let registry = Registry::full();
    let mut once = Graph::new();
    registry.materialize_definitions(&mut once);
    let mut twice = Graph::new();
    registry.materialize_definitions(&mut twice);
    registry.materialize_definitions(&mut twice);
    assert_eq!(once, twice);
}

#[test]
fn materializing_keeps_existing_statements() {
    let mut graph = Graph::new();
    graph.insert(
        dq_graph::Term::iri("http://example.com/a"),
        dq_graph::Term::iri("http://example.com/p"),
        dq_graph::Literal::string("x").into(),
    );
    Registry::full().materialize_definitions(&mut graph);
    assert_eq!(graph.len(), 1 + Registry::full().label_count() * 3);
}

#[test]
fn unknown_dimension_never_defaults() {
    for key in ["", "coordinate", "DATE_RECENCY", "date_recency/"] {
        assert!(matches!(
            Registry::full().lookup_namespaces(key),
            Err(VocabError::NotFound { .. })
        ));
    }
}

#[test]
fn definition_turtle_abbreviates_labels() {
    let ttl = dq_graph::serializer::turtle::to_turtle(&Registry::full().definition_graph());
    assert!(ttl.contains("@prefix coordinate_precision: <http://example.com/vocab/coordinate_precision/> ."));
    assert!(ttl.contains("coordinate_precision:High\n    a skos:Concept"));
}

#[test]
fn expanded_rules_keep_source_punctuation() {
    let registry = Registry::full();
    let rule = |key: &str, label: &str| {
        registry
            .dimension(key)
            .ok()
            .and_then(|d| d.label(label))
            .map(|l| l.rule)
            .unwrap_or_else(|| panic!("{key}:{label} missing"))
    };
    let irq = rule("coordinate_outlier_irq", "outlier_coordinate");
    assert!(irq.contains("(IRQ) method—meaning the point's"));
    assert!(irq.ends_with("geographic location range. "));
    assert!(rule("scientific_name_validation", "invalid_name").contains("criteria—whether"));
    assert!(rule("date_outlier_irq", "normal_date").contains("1.5IQR—label"));
    assert!(rule("coordinate_in_australia_state", "Queensland").ends_with("'Queensland'. "));

    let rows = registry.label_definitions();
    let row = rows
        .iter()
        .find(|r| r.assertion == "datum_type:GDA2020")
        .unwrap_or_else(|| panic!("no GDA2020 row"));
    assert!(row.rule.ends_with("a more recent datum for Australia. "));
}

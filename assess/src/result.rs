//! Result values and their statement encoding.
//!
//! A result is a fresh blank node `_:r` hanging off the assessed subject:
//!
//! ```text
//! <subject> dqaf:hasDQAFResult _:r .
//! _:r sosa:observedProperty <assessment> .
//! _:r schema:value <value> .
//! _:r dqaf:assessmentDate "YYYY-MM-DD"^^xsd:date .   # optional
//! ```

use chrono::NaiveDate;
use dq_graph::iris::{DQAF_ASSESSMENT_DATE, DQAF_HAS_RESULT, SCHEMA_VALUE, SOSA_OBSERVED_PROPERTY};
use dq_graph::{Graph, Literal, Term};
use dq_vocab::{Registry, VocabError};

/// A label IRI checked against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelValue {
    iri: String,
}

impl LabelValue {
    /// Resolves `label` within dimension `key`.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::NotFound`] for an unknown dimension and
    /// [`VocabError::UnknownLabel`] for a label outside its enumerated set.
    pub fn new(registry: &Registry, key: &str, label: &str) -> Result<Self, VocabError> {
        registry.label_iri(key, label).map(|iri| Self { iri })
    }

    /// The label's full IRI.
    #[must_use]
    pub fn iri(&self) -> &str {
        &self.iri
    }
}

/// The outcome held by a result's `schema:value` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultValue {
    /// Validity and completeness checks.
    Boolean(bool),
    /// Numeric scores.
    Integer(i64),
    /// Classification checks.
    Label(LabelValue),
}

impl ResultValue {
    fn to_term(&self) -> Term {
        match self {
            ResultValue::Boolean(b) => Literal::boolean(*b).into(),
            ResultValue::Integer(n) => Literal::integer(*n).into(),
            ResultValue::Label(label) => Term::iri(label.iri.clone()),
        }
    }
}

/// Writes one result for `subject` into `graph` and returns its blank node.
pub(crate) fn write_result(
    graph: &mut Graph,
    subject: Term,
    assessment: &str,
    value: &ResultValue,
    assessed_on: Option<NaiveDate>,
) -> Term {
    let node = Term::fresh_blank();
    graph.insert(subject, Term::iri(DQAF_HAS_RESULT), node.clone());
    graph.insert(
        node.clone(),
        Term::iri(SOSA_OBSERVED_PROPERTY),
        Term::iri(assessment),
    );
    graph.insert(node.clone(), Term::iri(SCHEMA_VALUE), value.to_term());
    if let Some(date) = assessed_on {
        graph.insert(
            node.clone(),
            Term::iri(DQAF_ASSESSMENT_DATE),
            Literal::date(date).into(),
        );
    }
    node
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn label_value_requires_membership() {
        let registry = Registry::full();
        let value = LabelValue::new(registry, "date_recency", "recent_20_years").unwrap();
        assert_eq!(value.iri(), "http://example.com/vocab/date_recency/recent_20_years");
        assert!(LabelValue::new(registry, "date_recency", "recent_10_years").is_err());
        assert!(LabelValue::new(registry, "date_freshness", "recent_20_years").is_err());
    }

    #[test]
    fn result_has_one_property_and_one_value() {
        let mut graph = Graph::new();
        let subject = Term::iri("http://example.com/obs/1");
        let node = write_result(
            &mut graph,
            subject.clone(),
            "http://example.com/assessment/x",
            &ResultValue::Integer(5),
            None,
        );
        assert!(node.is_blank());
        assert_eq!(graph.len(), 3);
        assert!(graph.contains(&subject, &Term::iri(DQAF_HAS_RESULT), &node));
        let values: Vec<_> = graph.objects(&node, &Term::iri(SCHEMA_VALUE)).collect();
        assert_eq!(values, vec![&Term::Literal(Literal::integer(5))]);
    }

    #[test]
    fn label_value_is_a_resource() {
        let mut graph = Graph::new();
        let label = LabelValue::new(Registry::full(), "coordinate_precision", "High").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let node = write_result(
            &mut graph,
            Term::iri("http://example.com/geom/1"),
            "http://example.com/assessment/x",
            &ResultValue::Label(label),
            Some(date),
        );
        assert_eq!(graph.len(), 4);
        let value: Vec<_> = graph.objects(&node, &Term::iri(SCHEMA_VALUE)).collect();
        assert_eq!(value[0].as_iri(), Some("http://example.com/vocab/coordinate_precision/High"));
    }

    #[test]
    fn each_result_gets_its_own_node() {
        let mut graph = Graph::new();
        let subject = Term::iri("http://example.com/p");
        let a = write_result(&mut graph, subject.clone(), "http://e/a", &ResultValue::Boolean(true), None);
        let b = write_result(&mut graph, subject, "http://e/a", &ResultValue::Boolean(true), None);
        assert_ne!(a, b);
        assert_eq!(graph.len(), 6);
    }
}

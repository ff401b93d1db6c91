//! Per-run outcome: the result graph plus every input that was skipped.

use chrono::NaiveDate;
use dq_graph::iris::{DQAF, GEO, SCHEMA, SOSA, TIME, XSD};
use dq_graph::{Graph, Term};

use crate::error::LiteralError;
use crate::kind::AssessmentKind;
use crate::result::{write_result, ResultValue};

/// Why an input produced no result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// A literal did not match the expected micro-format.
    Literal(LiteralError),
    /// The size score is undefined for this statement count.
    UndefinedSizeScore {
        /// Statements in the assessed graph.
        statements: usize,
    },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Literal(err) => write!(f, "{err}"),
            SkipReason::UndefinedSizeScore { statements } => {
                write!(f, "no size score is defined for {statements} statements")
            }
        }
    }
}

impl From<LiteralError> for SkipReason {
    fn from(err: LiteralError) -> Self {
        SkipReason::Literal(err)
    }
}

/// One skipped input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// The resource whose input was skipped.
    pub subject: Term,
    /// Classification of the skip.
    pub reason: SkipReason,
}

/// Everything one assessment run produced.
#[derive(Debug, Clone)]
pub struct AssessmentOutcome {
    /// Which assessment ran.
    pub kind: AssessmentKind,
    /// Result statements only; the input graph is never included.
    pub results: Graph,
    /// Number of results written to `results`.
    pub emitted: usize,
    /// Inputs that produced no result, in scan order.
    pub skipped: Vec<Skipped>,
}

impl AssessmentOutcome {
    /// An empty outcome with the result prefixes bound, plus `time` for
    /// date recency and `geo` for coordinate precision.
    #[must_use]
    pub fn new(kind: AssessmentKind) -> Self {
        let mut results = Graph::new();
        bind_result_prefixes(&mut results);
        match kind {
            AssessmentKind::DateRecency => results.bind("time", TIME),
            AssessmentKind::CoordinatePrecision => results.bind("geo", GEO),
            AssessmentKind::SizeScore | AssessmentKind::NameCompleteness => {}
        }
        Self {
            kind,
            results,
            emitted: 0,
            skipped: Vec::new(),
        }
    }

    /// Records a result for `subject` and returns its blank node.
    pub fn record(
        &mut self,
        subject: Term,
        value: ResultValue,
        assessed_on: Option<NaiveDate>,
    ) -> Term {
        self.emitted += 1;
        write_result(
            &mut self.results,
            subject,
            self.kind.iri(),
            &value,
            assessed_on,
        )
    }

    /// Records that `subject` was skipped.
    pub fn skip(&mut self, subject: Term, reason: impl Into<SkipReason>) {
        let reason = reason.into();
        tracing::debug!(assessment = %self.kind, %subject, %reason, "skipped");
        self.skipped.push(Skipped { subject, reason });
    }

    /// Number of skipped inputs.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Appends the result statements to a caller-owned graph.
    pub fn apply_to(&self, graph: &mut Graph) {
        graph.extend_from(&self.results);
    }
}

/// Binds `dqaf`, `sosa`, `schema` and `xsd` on `graph`.
pub fn bind_result_prefixes(graph: &mut Graph) {
    graph.bind("dqaf", DQAF);
    graph.bind("sosa", SOSA);
    graph.bind("schema", SCHEMA);
    graph.bind("xsd", XSD);
}

#[cfg(test)]
mod tests {
    use dq_graph::iris::DQAF_HAS_RESULT;

    use super::*;

    #[test]
    fn record_counts_results() {
        let mut outcome = AssessmentOutcome::new(AssessmentKind::NameCompleteness);
        outcome.record(Term::iri("http://example.com/p/1"), ResultValue::Boolean(true), None);
        outcome.record(Term::iri("http://example.com/p/2"), ResultValue::Boolean(false), None);
        assert_eq!(outcome.emitted, 2);
        assert_eq!(outcome.results.len(), 6);
        assert_eq!(outcome.skipped_count(), 0);
    }

    #[test]
    fn input_vocabulary_prefixes_follow_kind() {
        let recency = AssessmentOutcome::new(AssessmentKind::DateRecency);
        assert_eq!(recency.results.prefixes().get("time").map(String::as_str), Some(TIME));
        assert!(!recency.results.prefixes().contains_key("geo"));
        let precision = AssessmentOutcome::new(AssessmentKind::CoordinatePrecision);
        assert_eq!(precision.results.prefixes().get("geo").map(String::as_str), Some(GEO));
        let names = AssessmentOutcome::new(AssessmentKind::NameCompleteness);
        assert_eq!(names.results.prefixes().len(), 4);
    }

    #[test]
    fn skip_keeps_results_untouched() {
        let mut outcome = AssessmentOutcome::new(AssessmentKind::CoordinatePrecision);
        outcome.skip(
            Term::iri("http://example.com/g/1"),
            LiteralError::TooFewCoordinates {
                text: "POINT(1)".to_owned(),
            },
        );
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.skipped_count(), 1);
    }

    #[test]
    fn apply_to_preserves_existing_statements() {
        let subject = Term::iri("http://example.com/p/1");
        let mut data = Graph::new();
        data.insert(
            subject.clone(),
            Term::iri("http://example.com/q"),
            Term::iri("http://example.com/o"),
        );
        data.bind("ex", "http://example.com/");
        let mut outcome = AssessmentOutcome::new(AssessmentKind::NameCompleteness);
        outcome.record(subject.clone(), ResultValue::Boolean(false), None);
        outcome.apply_to(&mut data);
        assert_eq!(data.len(), 4);
        assert_eq!(data.objects(&subject, &Term::iri(DQAF_HAS_RESULT)).count(), 1);
        assert_eq!(data.prefixes().get("ex").map(String::as_str), Some("http://example.com/"));
        assert_eq!(data.prefixes().get("dqaf").map(String::as_str), Some(DQAF));
    }
}

//! Runs configured assessments and merges their results.

use dq_graph::Graph;

use crate::assessments::{coordinate_precision, date_recency, name_completeness, size_score};
use crate::config::AssessConfig;
use crate::kind::AssessmentKind;
use crate::outcome::{bind_result_prefixes, AssessmentOutcome};

/// Dispatches assessments with one shared configuration.
#[derive(Debug, Clone, Default)]
pub struct Assessor {
    config: AssessConfig,
}

impl Assessor {
    /// Creates an assessor for `config`.
    #[must_use]
    pub fn new(config: AssessConfig) -> Self {
        Self { config }
    }

    /// Runs one assessment over `graph`.
    #[must_use]
    pub fn run(&self, kind: AssessmentKind, graph: &Graph) -> AssessmentOutcome {
        let outcome = match kind {
            AssessmentKind::SizeScore => size_score::assess(graph),
            AssessmentKind::NameCompleteness => name_completeness::assess(graph),
            AssessmentKind::DateRecency => date_recency::assess_at(
                graph,
                self.config.today(),
                self.config.recency_window_years,
            ),
            AssessmentKind::CoordinatePrecision => coordinate_precision::assess_with(
                graph,
                self.config.today(),
                self.config.precision_digits,
            ),
        };
        tracing::info!(
            assessment = %kind,
            emitted = outcome.emitted,
            skipped = outcome.skipped_count(),
            "assessment complete"
        );
        outcome
    }

    /// Runs every configured assessment, in configuration order.
    #[must_use]
    pub fn run_all(&self, graph: &Graph) -> Vec<AssessmentOutcome> {
        self.config
            .assessments
            .iter()
            .map(|kind| self.run(*kind, graph))
            .collect()
    }
}

/// Unions the result graphs of `outcomes` into one graph.
///
/// Merging is a set union, so the order of `outcomes` does not matter.
#[must_use]
pub fn merge_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a AssessmentOutcome>) -> Graph {
    let mut merged = Graph::new();
    bind_result_prefixes(&mut merged);
    for outcome in outcomes {
        outcome.apply_to(&mut merged);
    }
    merged
}

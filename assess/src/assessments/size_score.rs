//! Demo score derived from the size of the whole graph.

use dq_graph::{Graph, Term};

use crate::kind::AssessmentKind;
use crate::outcome::{AssessmentOutcome, SkipReason};
use crate::result::ResultValue;

/// Fixed subject the score is attached to.
pub const TARGET: &str = "http://example.com/thingWithResult";

/// Score for a graph of `statements` statements, if one is defined.
///
/// The `2 < n < 3` branch can never match, so exactly two statements have
/// no score.
#[must_use]
pub fn score(statements: usize) -> Option<i64> {
    if statements < 2 {
        Some(0)
    } else if 2 < statements && statements < 3 {
        Some(2)
    } else if statements >= 3 {
        Some(5)
    } else {
        None
    }
}

/// Scores `graph` by its statement count.
#[must_use]
pub fn assess(graph: &Graph) -> AssessmentOutcome {
    let mut outcome = AssessmentOutcome::new(AssessmentKind::SizeScore);
    let statements = graph.len();
    let target = Term::iri(TARGET);
    match score(statements) {
        Some(value) => {
            outcome.record(target, ResultValue::Integer(value), None);
        }
        None => {
            tracing::warn!(statements, "size score is undefined for this graph size");
            outcome.skip(target, SkipReason::UndefinedSizeScore { statements });
        }
    }
    outcome
}

//! Name completeness of every `schema:Person`.

use dq_graph::iris::{RDF_TYPE, SCHEMA_NAME, SCHEMA_PERSON};
use dq_graph::{Graph, Term};

use crate::kind::AssessmentKind;
use crate::outcome::AssessmentOutcome;
use crate::result::ResultValue;

/// Names a person needs to count as complete.
pub const MIN_NAMES: usize = 2;

/// Asserts `true` for every person with at least [`MIN_NAMES`] distinct
/// names and `false` for the rest.
#[must_use]
pub fn assess(graph: &Graph) -> AssessmentOutcome {
    let mut outcome = AssessmentOutcome::new(AssessmentKind::NameCompleteness);
    let name = Term::iri(SCHEMA_NAME);
    for person in graph.subjects(&Term::iri(RDF_TYPE), &Term::iri(SCHEMA_PERSON)) {
        let names = graph.objects(person, &name).count();
        outcome.record(person.clone(), ResultValue::Boolean(names >= MIN_NAMES), None);
    }
    outcome
}

//! Latitude precision of WKT geometries.

use chrono::NaiveDate;
use dq_graph::iris::GEO_AS_WKT;
use dq_graph::{Graph, Term};

use crate::error::LiteralError;
use crate::kind::AssessmentKind;
use crate::literal::{decimal_digits, wkt_latitude};
use crate::outcome::AssessmentOutcome;
use crate::result::ResultValue;

/// Default threshold: more decimal digits than this is high precision.
pub const DEFAULT_PRECISION_DIGITS: usize = 4;

/// Assesses `graph` with today's local date and the default threshold.
#[must_use]
pub fn assess(graph: &Graph) -> AssessmentOutcome {
    assess_with(
        graph,
        chrono::Local::now().date_naive(),
        DEFAULT_PRECISION_DIGITS,
    )
}

/// Assesses every `?g geo:asWKT ?wkt` statement, attaching the result to `?g`.
///
/// Query results as `?g dqaf:hasDQAFResult ?r`; the WKT literal itself never
/// carries a result. Geometries whose latitude cannot be extracted are skipped.
#[must_use]
pub fn assess_with(graph: &Graph, today: NaiveDate, precision_digits: usize) -> AssessmentOutcome {
    let mut outcome = AssessmentOutcome::new(AssessmentKind::CoordinatePrecision);
    for statement in graph.triples_matching(None, Some(&Term::iri(GEO_AS_WKT)), None) {
        match high_precision(&statement.object, precision_digits) {
            Ok(high) => {
                outcome.record(
                    statement.subject.clone(),
                    ResultValue::Boolean(high),
                    Some(today),
                );
            }
            Err(err) => outcome.skip(statement.subject.clone(), err),
        }
    }
    outcome
}

fn high_precision(wkt: &Term, precision_digits: usize) -> Result<bool, LiteralError> {
    let literal = wkt.as_literal().ok_or_else(|| LiteralError::NotALiteral {
        term: wkt.to_string(),
    })?;
    let latitude = wkt_latitude(&literal.lexical)?;
    Ok(decimal_digits(latitude) > precision_digits)
}

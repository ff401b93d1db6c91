//! Whether an observation's phenomenon time falls within the recency window.

use chrono::{Datelike, NaiveDate};
use dq_graph::iris::{SOSA_PHENOMENON_TIME, TIME_IN_XSD_DATE};
use dq_graph::{Graph, Term};

use crate::kind::AssessmentKind;
use crate::literal::xsd_date_term;
use crate::outcome::AssessmentOutcome;
use crate::result::ResultValue;

/// Default window, in years back from today.
pub const DEFAULT_WINDOW_YEARS: i32 = 20;

/// Assesses `graph` against today's local date and the default window.
#[must_use]
pub fn assess(graph: &Graph) -> AssessmentOutcome {
    assess_at(graph, chrono::Local::now().date_naive(), DEFAULT_WINDOW_YEARS)
}

/// Assesses every `?s sosa:phenomenonTime ?t` statement.
///
/// A result is `true` if any `?t time:inXSDDate ?d` falls in
/// `today.year - window ..= today.year`. Every date of `?t` is checked, so
/// each one that is not a valid `xsd:date` literal is recorded as skipped
/// regardless of its order among its siblings. If every date of `?t` was
/// skipped the statement gets no result at all. A time with no dates is
/// `false`.
#[must_use]
pub fn assess_at(graph: &Graph, today: NaiveDate, window_years: i32) -> AssessmentOutcome {
    let mut outcome = AssessmentOutcome::new(AssessmentKind::DateRecency);
    let in_date = Term::iri(TIME_IN_XSD_DATE);
    let range = (today.year() - window_years)..=today.year();

    for statement in graph.triples_matching(None, Some(&Term::iri(SOSA_PHENOMENON_TIME)), None) {
        let mut within = false;
        let mut usable = false;
        let mut rejected = false;
        for date in graph.objects(&statement.object, &in_date) {
            match xsd_date_term(date) {
                Ok(date) => {
                    usable = true;
                    within |= range.contains(&date.year());
                }
                Err(err) => {
                    rejected = true;
                    outcome.skip(statement.subject.clone(), err);
                }
            }
        }
        if rejected && !usable {
            continue;
        }
        outcome.record(
            statement.subject.clone(),
            ResultValue::Boolean(within),
            Some(today),
        );
    }
    outcome
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dq_graph::iris::{DQAF_ASSESSMENT_DATE, DQAF_HAS_RESULT, SCHEMA_VALUE, XSD_DATE};
    use dq_graph::Literal;

    use super::*;
    use crate::error::LiteralError;
    use crate::outcome::SkipReason;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn observation(graph: &mut Graph, n: u32, dates: &[Literal]) -> Term {
        let obs = Term::iri(format!("http://example.com/obs/{n}"));
        let time = Term::iri(format!("http://example.com/time/{n}"));
        graph.insert(obs.clone(), Term::iri(SOSA_PHENOMENON_TIME), time.clone());
        for d in dates {
            graph.insert(time.clone(), Term::iri(TIME_IN_XSD_DATE), d.clone().into());
        }
        obs
    }

    fn date(lexical: &str) -> Literal {
        Literal::typed(lexical, XSD_DATE)
    }

    fn value_for(outcome: &AssessmentOutcome, subject: &Term) -> Option<bool> {
        let node = outcome
            .results
            .objects(subject, &Term::iri(DQAF_HAS_RESULT))
            .next()?;
        outcome
            .results
            .objects(node, &Term::iri(SCHEMA_VALUE))
            .next()
            .and_then(Term::as_literal)
            .and_then(Literal::as_bool)
    }

    #[test]
    fn window_start_year_is_inclusive() {
        let mut graph = Graph::new();
        let first_day = observation(&mut graph, 1, &[date("2004-01-01")]);
        let day_before = observation(&mut graph, 2, &[date("2003-12-31")]);
        let this_year = observation(&mut graph, 3, &[date("2024-12-31")]);
        let next_year = observation(&mut graph, 4, &[date("2025-01-01")]);
        let outcome = assess_at(&graph, today(), 20);
        assert_eq!(value_for(&outcome, &first_day), Some(true));
        assert_eq!(value_for(&outcome, &day_before), Some(false));
        assert_eq!(value_for(&outcome, &this_year), Some(true));
        assert_eq!(value_for(&outcome, &next_year), Some(false));
    }

    #[test]
    fn any_recent_date_is_enough() {
        let mut graph = Graph::new();
        let obs = observation(&mut graph, 1, &[date("1950-05-05"), date("2020-05-05")]);
        assert_eq!(value_for(&assess_at(&graph, today(), 20), &obs), Some(true));
    }

    #[test]
    fn time_without_dates_is_false() {
        let mut graph = Graph::new();
        let obs = observation(&mut graph, 1, &[]);
        assert_eq!(value_for(&assess_at(&graph, today(), 20), &obs), Some(false));
    }

    #[test]
    fn result_records_assessment_date() {
        let mut graph = Graph::new();
        let obs = observation(&mut graph, 1, &[date("2020-01-01")]);
        let outcome = assess_at(&graph, today(), 20);
        let node = outcome
            .results
            .objects(&obs, &Term::iri(DQAF_HAS_RESULT))
            .next()
            .unwrap();
        let recorded: Vec<_> = outcome
            .results
            .objects(node, &Term::iri(DQAF_ASSESSMENT_DATE))
            .collect();
        assert_eq!(recorded, vec![&Term::Literal(date("2024-06-30"))]);
    }

    #[test]
    fn unusable_dates_reduce_emitted_count() {
        let mut graph = Graph::new();
        observation(&mut graph, 1, &[date("2020-01-01")]);
        let wrong_type = observation(&mut graph, 2, &[Literal::string("2020-01-01")]);
        let malformed = observation(&mut graph, 3, &[date("2020-02-30")]);
        let outcome = assess_at(&graph, today(), 20);
        assert_eq!(outcome.emitted, 1);
        assert_eq!(outcome.skipped_count(), 2);
        assert_eq!(value_for(&outcome, &wrong_type), None);
        assert_eq!(value_for(&outcome, &malformed), None);
        assert!(matches!(
            outcome.skipped[0].reason,
            SkipReason::Literal(LiteralError::DateWrongDatatype { .. })
        ));
    }

    #[test]
    fn usable_date_outvotes_rejected_sibling() {
        let mut graph = Graph::new();
        let obs = observation(&mut graph, 1, &[date("1900-01-01"), date("not a date")]);
        let outcome = assess_at(&graph, today(), 20);
        assert_eq!(value_for(&outcome, &obs), Some(false));
        assert_eq!(outcome.skipped_count(), 1);
    }

    #[test]
    fn rejected_dates_count_after_an_in_range_sibling() {
        let mut graph = Graph::new();
        // "2020-01-01" sorts before both malformed siblings.
        let obs = observation(
            &mut graph,
            1,
            &[date("2020-01-01"), date("not a date"), Literal::string("2021-01-01")],
        );
        let outcome = assess_at(&graph, today(), 20);
        assert_eq!(value_for(&outcome, &obs), Some(true));
        assert_eq!(outcome.skipped_count(), 2);
    }

    #[test]
    fn narrower_window_applies() {
        let mut graph = Graph::new();
        let obs = observation(&mut graph, 1, &[date("2014-03-01")]);
        assert_eq!(value_for(&assess_at(&graph, today(), 5), &obs), Some(false));
        assert_eq!(value_for(&assess_at(&graph, today(), 10), &obs), Some(true));
    }
}

//! Value extraction from semi-structured literals.

use chrono::NaiveDate;
use dq_graph::iris::{XSD_DATE, XSD_STRING};
use dq_graph::{Literal, Term};

use crate::error::LiteralError;

/// Returns the latitude token of a WKT point such as `POINT(130.12 -25.67891)`.
///
/// The text between the last `(` and the following `)` is split on
/// whitespace; the second token is the latitude (WKT order is `lon lat`).
///
/// # Errors
///
/// Returns [`LiteralError::TooFewCoordinates`] if fewer than two tokens remain.
pub fn wkt_latitude(text: &str) -> Result<&str, LiteralError> {
    let inner = text.rsplit('(').next().unwrap_or(text);
    let inner = inner.split(')').next().unwrap_or(inner);
    inner
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| LiteralError::TooFewCoordinates {
            text: text.to_owned(),
        })
}

/// Number of characters after the last `.` of a coordinate token; 0 without one.
#[must_use]
pub fn decimal_digits(token: &str) -> usize {
    token
        .rsplit_once('.')
        .map_or(0, |(_, fraction)| fraction.chars().count())
}

/// Extracts a calendar date from a literal typed `xsd:date`.
///
/// Accepts `YYYY-MM-DD` with an optional `Z` or `±HH:MM` timezone suffix;
/// the timezone does not affect the calendar date.
///
/// # Errors
///
/// Returns [`LiteralError::DateWrongDatatype`] for any other datatype and
/// [`LiteralError::DateMalformed`] if the lexical form is not a valid date.
pub fn xsd_date(literal: &Literal) -> Result<NaiveDate, LiteralError> {
    if !literal.has_datatype(XSD_DATE) {
        return Err(LiteralError::DateWrongDatatype {
            lexical: literal.lexical.clone(),
            datatype: literal
                .datatype
                .clone()
                .unwrap_or_else(|| XSD_STRING.to_owned()),
        });
    }
    let malformed = || LiteralError::DateMalformed {
        lexical: literal.lexical.clone(),
    };
    let lexical = literal.lexical.trim();
    let (date, zone) = lexical.split_at_checked(10).ok_or_else(malformed)?;
    if !is_timezone(zone) {
        return Err(malformed());
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| malformed())
}

/// Like [`xsd_date`], for a term that may not be a literal at all.
///
/// # Errors
///
/// Non-literal terms are reported as [`LiteralError::DateWrongDatatype`].
pub fn xsd_date_term(term: &Term) -> Result<NaiveDate, LiteralError> {
    match term.as_literal() {
        Some(lit) => xsd_date(lit),
        None => Err(LiteralError::DateWrongDatatype {
            lexical: term.to_string(),
            datatype: "a resource".to_owned(),
        }),
    }
}

fn is_timezone(zone: &str) -> bool {
    match zone.as_bytes() {
        [] | [b'Z'] => true,
        [sign, h1, h2, b':', m1, m2] => {
            matches!(*sign, b'+' | b'-')
                && [h1, h2, m1, m2].iter().all(|b| b.is_ascii_digit())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_is_second_token() {
        assert_eq!(wkt_latitude("POINT(130.12 -25.67891)"), Ok("-25.67891"));
        assert_eq!(wkt_latitude("POINT (130.12   -25.6)"), Ok("-25.6"));
    }

    #[test]
    fn crs_prefix_is_ignored() {
        let text = "<http://www.opengis.net/def/crs/EPSG/0/4283> POINT(149.1 -35.28)";
        assert_eq!(wkt_latitude(text), Ok("-35.28"));
    }

    #[test]
    fn single_token_is_rejected() {
        assert!(matches!(
            wkt_latitude("POINT(130.12)"),
            Err(LiteralError::TooFewCoordinates { .. })
        ));
        assert!(wkt_latitude("").is_err());
    }

    #[test]
    fn counts_digits_after_point() {
        assert_eq!(decimal_digits("-25.67891"), 5);
        assert_eq!(decimal_digits("-25.6"), 1);
        assert_eq!(decimal_digits("-25"), 0);
        assert_eq!(decimal_digits("-25."), 0);
    }

    #[test]
    fn parses_plain_and_zoned_dates() {
        let expected = NaiveDate::from_ymd_opt(2010, 4, 1);
        for lexical in ["2010-04-01", "2010-04-01Z", "2010-04-01+10:00", "2010-04-01-03:30"] {
            let lit = Literal::typed(lexical, XSD_DATE);
            assert_eq!(xsd_date(&lit).ok(), expected, "{lexical}");
        }
    }

    #[test]
    fn rejects_malformed_dates() {
        for lexical in ["2010-13-01", "2010-04", "01/04/2010", "2010-04-01T00:00:00", "2010-04-01+1000"] {
            let lit = Literal::typed(lexical, XSD_DATE);
            assert!(
                matches!(xsd_date(&lit), Err(LiteralError::DateMalformed { .. })),
                "{lexical}"
            );
        }
    }

    #[test]
    fn rejects_wrong_datatype() {
        let lit = Literal::string("2010-04-01");
        assert!(matches!(
            xsd_date(&lit),
            Err(LiteralError::DateWrongDatatype { .. })
        ));
        assert!(xsd_date_term(&Term::iri("http://example.com/d")).is_err());
    }
}

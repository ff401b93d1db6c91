//! The fixed set of implemented assessments.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// One implemented assessment.
///
/// Dimensions declared in the vocabulary without a variant here are defined
/// but unimplemented; nothing asserts their labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentKind {
    /// Demo score from the statement count of the whole graph.
    SizeScore,
    /// Whether every `schema:Person` has at least two names.
    NameCompleteness,
    /// Whether an observation date lies within the recency window.
    DateRecency,
    /// Whether a WKT latitude has more than the configured decimal digits.
    CoordinatePrecision,
}

impl AssessmentKind {
    /// Every implemented assessment, in run order.
    pub const ALL: [AssessmentKind; 4] = [
        AssessmentKind::SizeScore,
        AssessmentKind::NameCompleteness,
        AssessmentKind::DateRecency,
        AssessmentKind::CoordinatePrecision,
    ];

    /// The IRI recorded as `sosa:observedProperty` on every result.
    #[must_use]
    pub fn iri(self) -> &'static str {
        match self {
            AssessmentKind::SizeScore => "http://example.com/assessment/01",
            AssessmentKind::NameCompleteness => "http://example.com/assessment/medi",
            AssessmentKind::DateRecency => "http://example.com/assessment/dateWithinLast20Years",
            AssessmentKind::CoordinatePrecision => {
                "http://example.com/assessment/check_lat_high_precision"
            }
        }
    }

    /// Kebab-case name used in configuration and on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AssessmentKind::SizeScore => "size-score",
            AssessmentKind::NameCompleteness => "name-completeness",
            AssessmentKind::DateRecency => "date-recency",
            AssessmentKind::CoordinatePrecision => "coordinate-precision",
        }
    }

}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AssessmentKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssessmentKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ConfigError::UnknownAssessment(s.to_owned()))
    }
}

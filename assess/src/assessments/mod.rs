//! One module per implemented assessment.
//!
//! Every assessment reads the input graph only and returns a fresh
//! [`AssessmentOutcome`](crate::AssessmentOutcome); none depends on
//! another's results.

pub mod coordinate_precision;
pub mod date_recency;
pub mod name_completeness;
pub mod size_score;

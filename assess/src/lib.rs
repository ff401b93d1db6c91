//! BDR data quality assessment engine.
//!
//! Each assessment scans an input [`Graph`](dq_graph::Graph) and returns an
//! [`AssessmentOutcome`]: a fresh graph of result statements plus the inputs
//! it had to skip. Results follow one encoding: the assessed resource gets a
//! `dqaf:hasDQAFResult` link to a blank node carrying exactly one
//! `sosa:observedProperty` and one `schema:value`.
//!
//! # Running
//!
//! ```
//! use dq_assess::{AssessConfig, AssessmentKind, Assessor};
//! use dq_graph::{Graph, Literal, Term};
//! use dq_graph::iris::GEO_AS_WKT;
//!
//! let mut graph = Graph::new();
//! graph.insert(
//!     Term::iri("http://example.com/geom/1"),
//!     Term::iri(GEO_AS_WKT),
//!     Literal::string("POINT(130.12 -25.67891)").into(),
//! );
//! let assessor = Assessor::new(AssessConfig::default());
//! let outcome = assessor.run(AssessmentKind::CoordinatePrecision, &graph);
//! assert_eq!(outcome.emitted, 1);
//! assert_eq!(outcome.results.len(), 4);
//! ```
//!
//! # Skipped inputs
//!
//! Literals that do not parse never abort a run. They are recorded on the
//! outcome with a [`SkipReason`]:
//!
//! ```
//! use dq_graph::{Graph, Literal, Term};
//! use dq_graph::iris::GEO_AS_WKT;
//!
//! let mut graph = Graph::new();
//! graph.insert(
//!     Term::iri("http://example.com/geom/1"),
//!     Term::iri(GEO_AS_WKT),
//!     Literal::string("POINT(130.12)").into(),
//! );
//! let outcome = dq_assess::assessments::coordinate_precision::assess(&graph);
//! assert_eq!(outcome.emitted, 0);
//! assert_eq!(outcome.skipped_count(), 1);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod assessments;
pub mod config;
pub mod engine;
pub mod error;
pub mod kind;
pub mod literal;
pub mod outcome;
pub mod query;
pub mod result;

pub use config::AssessConfig;
pub use engine::{merge_outcomes, Assessor};
pub use error::{ConfigError, LiteralError};
pub use kind::AssessmentKind;
pub use outcome::{AssessmentOutcome, SkipReason, Skipped};
pub use result::{LabelValue, ResultValue};

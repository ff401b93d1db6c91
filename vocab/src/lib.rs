//! BDR data quality vocabulary encoded as typed Rust data.
//!
//! The `dq-vocab` crate is the single source of truth for every quality
//! dimension: its category, the field it inspects, its enumerated outcome
//! labels with short and expanded rule definitions, and the namespaces the
//! labels and assessments live under.
//!
//! # Entry Point
//!
//! ```
//! let registry = dq_vocab::Registry::full();
//! assert_eq!(registry.dimensions.len(), 16);
//! let (labels, assessments) = registry.lookup_namespaces("date_recency")?;
//! assert_eq!(labels, "http://example.com/vocab/date_recency/");
//! assert_eq!(assessments, "http://example.com/assess/date_recency/");
//! # Ok::<(), dq_vocab::VocabError>(())
//! ```
//!
//! # Export
//!
//! ```
//! let registry = dq_vocab::Registry::full();
//! let definitions = registry.definition_graph();
//! let turtle = dq_graph::serializer::turtle::to_turtle(&definitions);
//! assert!(turtle.contains("skos:Concept"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod definitions;
pub mod dimensions;
pub mod error;
pub mod export;
pub mod model;

pub use error::VocabError;
pub use export::{LabelDefinitionRow, ReviewTemplate, UseCaseRow};
pub use model::{Category, Dimension, Label, Registry};

impl Registry {
    /// Returns the complete registry with all sixteen dimensions.
    ///
    /// Built once per process and never mutated afterwards. Declaration
    /// order is `coordinate → date → scientific_name → datum`, and within
    /// each category the order of its module's `dimensions()`.
    #[must_use]
    pub fn full() -> &'static Registry {
        static REGISTRY: std::sync::OnceLock<Registry> = std::sync::OnceLock::new();
        REGISTRY.get_or_init(|| {
            let mut all = Vec::new();
            all.extend(dimensions::coordinate::dimensions());
            all.extend(dimensions::date::dimensions());
            all.extend(dimensions::scientific_name::dimensions());
            all.extend(dimensions::datum::dimensions());
            Registry { dimensions: all }
        })
    }
}

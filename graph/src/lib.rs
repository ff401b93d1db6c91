//! Statement graph model for BDR data quality assessment.
//!
//! The `dq-graph` crate provides the small RDF data model the assessment
//! engine reads and writes: terms, statements, and a set-semantics [`Graph`]
//! with parameterized pattern matching. It also carries the IRI constants of
//! the external vocabularies, a Turtle/N-Triples loader and hand-written
//! serializers.
//!
//! # Entry Point
//!
//! ```
//! use dq_graph::{iris, Graph, Literal, Term};
//!
//! let mut graph = Graph::new();
//! let person = Term::iri("http://example.com/person/1");
//! graph.insert(person.clone(), Term::iri(iris::RDF_TYPE), Term::iri(iris::SCHEMA_PERSON));
//! graph.insert(person, Term::iri(iris::SCHEMA_NAME), Literal::string("Ada").into());
//! assert_eq!(graph.len(), 2);
//! ```
//!
//! # Serialization
//!
//! ```
//! let graph = dq_graph::Graph::new();
//! let turtle = dq_graph::serializer::turtle::to_turtle(&graph);
//! let ntriples = dq_graph::serializer::ntriples::to_ntriples(&graph);
//! assert!(ntriples.is_empty());
//! assert!(turtle.is_empty());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod graph;
pub mod iris;
pub mod loader;
pub mod model;
pub mod serializer;

pub use error::GraphError;
pub use graph::Graph;
pub use loader::{load_data, GraphSource};
pub use model::{Literal, Term, Triple};

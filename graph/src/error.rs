//! Errors raised at the graph loading boundary.

use std::path::PathBuf;

/// Failure to obtain a graph from the caller's input.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The caller supplied neither a loadable file nor an in-memory graph.
    #[error("could not load data to assess: {path} is not a readable file; supply a graph file or an in-memory graph")]
    InvalidInput {
        /// The offending path.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid Turtle / N-Triples.
    #[error("failed to parse {path}: {message}")]
    Parse {
        /// The file being parsed.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    /// The parser produced a term this model cannot represent (RDF-star, variables).
    #[error("unsupported term in {path}: {term}")]
    UnsupportedTerm {
        /// The file being parsed.
        path: PathBuf,
        /// Debug rendering of the term.
        term: String,
    },
}

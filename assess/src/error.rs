//! Error classification for the assessment engine.
//!
//! [`LiteralError`] never escapes an assessment: it is recorded on the
//! outcome as the reason a single input was skipped. [`ConfigError`] is the
//! only error a caller sees, and only when loading a configuration file.

use std::path::PathBuf;

/// A literal that does not match the micro-format an assessment expects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    /// The object of a geometry statement is not a literal.
    #[error("expected a geometry literal, found {term}")]
    NotALiteral {
        /// Rendering of the offending term.
        term: String,
    },

    /// The WKT text has fewer than two whitespace-separated coordinates.
    #[error("geometry {text:?} has fewer than two coordinate tokens")]
    TooFewCoordinates {
        /// The literal's lexical form.
        text: String,
    },

    /// A date statement's object is not typed `xsd:date`.
    #[error("date {lexical:?} is typed {datatype}, expected xsd:date")]
    DateWrongDatatype {
        /// The literal's lexical form.
        lexical: String,
        /// The datatype found, or `xsd:string` for plain literals.
        datatype: String,
    },

    /// A literal typed `xsd:date` whose lexical form is not a calendar date.
    #[error("date {lexical:?} is not a valid xsd:date")]
    DateMalformed {
        /// The literal's lexical form.
        lexical: String,
    },
}

/// Failure to load an assessment configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// The configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has unknown keys.
    #[error("invalid assessment config: {0}")]
    Parse(#[from] toml::de::Error),

    /// An assessment name is not one of the implemented assessments.
    #[error("unknown assessment '{0}'")]
    UnknownAssessment(String),
}

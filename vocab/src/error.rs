//! Vocabulary lookup errors.

/// A requested dimension or label is not part of the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VocabError {
    /// No dimension is registered under this key.
    #[error("namespace '{key}' not found in the data quality vocabulary")]
    NotFound {
        /// The requested key.
        key: String,
    },

    /// The dimension exists but does not declare this label.
    #[error("label '{label}' is not an outcome of dimension '{key}'")]
    UnknownLabel {
        /// The dimension key.
        key: String,
        /// The requested label.
        label: String,
    },
}

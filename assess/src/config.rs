//! Assessment configuration.
//!
//! ```toml
//! assessments = ["date-recency", "coordinate-precision"]
//! recency_window_years = 20
//! precision_digits = 4
//! reference_date = "2024-06-30"
//! ```
//!
//! Every key is optional; `reference_date` must be a quoted `YYYY-MM-DD`.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::kind::AssessmentKind;

/// Parameters shared by every assessment run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssessConfig {
    /// Assessments to run, in order.
    pub assessments: Vec<AssessmentKind>,
    /// Years back from today that still count as recent.
    pub recency_window_years: i32,
    /// A latitude with strictly more decimal digits than this is high precision.
    pub precision_digits: usize,
    /// Fixed "today" for reproducible runs; the local date when absent.
    pub reference_date: Option<NaiveDate>,
}

impl Default for AssessConfig {
    fn default() -> Self {
        Self {
            assessments: AssessmentKind::ALL.to_vec(),
            recency_window_years: 20,
            precision_digits: 4,
            reference_date: None,
        }
    }
}

impl AssessConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on invalid TOML, unknown keys or
    /// unknown assessment names.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its content is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The date assessments treat as today.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(AssessConfig::from_toml_str("").unwrap(), AssessConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = AssessConfig::from_toml_str(
            r#"
assessments = ["coordinate-precision"]
precision_digits = 3
reference_date = "2024-06-30"
"#,
        )
        .unwrap();
        assert_eq!(config.assessments, vec![AssessmentKind::CoordinatePrecision]);
        assert_eq!(config.precision_digits, 3);
        assert_eq!(config.recency_window_years, 20);
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            AssessConfig::from_toml_str("recency_window = 10"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn unimplemented_assessment_is_rejected() {
        assert!(AssessConfig::from_toml_str(r#"assessments = ["date-outlier-irq"]"#).is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"recency_window_years = 5\n").unwrap();
        let config = AssessConfig::load(file.path()).unwrap();
        assert_eq!(config.recency_window_years, 5);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AssessConfig::load(Path::new("/no/such/dq.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

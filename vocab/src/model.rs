//! Core vocabulary model types.
//!
//! These types represent the data quality vocabulary as typed Rust data. The
//! top-level entry point is [`Registry::full()`](crate::Registry::full).

use crate::error::VocabError;

/// The kind of record field a quality dimension inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Geographic coordinates (`geo:hasGeometry`).
    Coordinate,
    /// Observation dates (`sosa:phenomenonTime`).
    Date,
    /// Taxon names (`tern:FeatureOfInterest`).
    ScientificName,
    /// Geodetic datum references (`geo:hasGeometry`).
    Datum,
}

impl Category {
    /// Returns the category name used in exported tables.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Coordinate => "coordinate",
            Category::Date => "date",
            Category::ScientificName => "scientific_name",
            Category::Datum => "datum",
        }
    }
}

/// One outcome label of a quality dimension.
#[derive(Debug, Clone)]
pub struct Label {
    /// Local name of the label within its dimension namespace (e.g. `"High"`).
    pub name: &'static str,
    /// Short definition, asserted as `skos:definition`.
    pub definition: &'static str,
    /// Expanded rule text describing when a record receives this label.
    pub rule: &'static str,
}

/// A quality dimension: one fixed check with an enumerated outcome set.
#[derive(Debug, Clone)]
pub struct Dimension {
    /// Registry key, also used as the namespace prefix (e.g. `"date_recency"`).
    pub key: &'static str,
    /// The kind of field inspected.
    pub category: Category,
    /// Compact IRI of the input field (e.g. `"sosa:phenomenonTime"`).
    pub input_field: &'static str,
    /// Namespace holding the outcome labels.
    pub namespace: &'static str,
    /// Namespace identifying assessments of this dimension.
    pub assess_namespace: &'static str,
    /// Outcome labels in declaration order.
    pub labels: Vec<Label>,
}

impl Dimension {
    /// The prefix bound to [`Dimension::namespace`] in serialized output.
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        self.key
    }

    /// Looks up a label by local name. Returns `None` if not declared.
    #[must_use]
    pub fn label(&self, name: &str) -> Option<&Label> {
        self.labels.iter().find(|l| l.name == name)
    }

    /// Full IRI of a label in this dimension's namespace.
    #[must_use]
    pub fn label_iri(&self, label: &Label) -> String {
        format!("{}{}", self.namespace, label.name)
    }
}

/// The complete set of quality dimensions.
#[derive(Debug)]
pub struct Registry {
    /// Every dimension in declaration order.
    pub dimensions: Vec<Dimension>,
}

impl Registry {
    /// Looks up a dimension by key.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::NotFound`] if the key is not registered.
    pub fn dimension(&self, key: &str) -> Result<&Dimension, VocabError> {
        self.dimensions
            .iter()
            .find(|d| d.key == key)
            .ok_or_else(|| VocabError::NotFound {
                key: key.to_owned(),
            })
    }

    /// Returns `(label namespace, assessment namespace)` for a dimension.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::NotFound`] if the key is not registered.
    pub fn lookup_namespaces(&self, key: &str) -> Result<(&'static str, &'static str), VocabError> {
        let dimension = self.dimension(key)?;
        Ok((dimension.namespace, dimension.assess_namespace))
    }

    /// Resolves a label of a dimension to its full IRI.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::NotFound`] for an unknown dimension and
    /// [`VocabError::UnknownLabel`] if the label is not one of its outcomes.
    pub fn label_iri(&self, key: &str, label: &str) -> Result<String, VocabError> {
        let dimension = self.dimension(key)?;
        dimension
            .label(label)
            .map(|l| dimension.label_iri(l))
            .ok_or_else(|| VocabError::UnknownLabel {
                key: key.to_owned(),
                label: label.to_owned(),
            })
    }

    /// Every label as `"prefix:label"`, in dimension then label declaration order.
    #[must_use]
    pub fn all_labels(&self) -> Vec<String> {
        self.dimensions
            .iter()
            .flat_map(|d| d.labels.iter().map(move |l| format!("{}:{}", d.prefix(), l.name)))
            .collect()
    }

    /// Returns the total number of labels across all dimensions.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.dimensions.iter().map(|d| d.labels.len()).sum()
    }
}

//! Tabular views of the vocabulary for review templates and documentation.
//!
//! Rows serialize with the spreadsheet column headings, so any serde format
//! (JSON, CSV) reproduces the review sheet layout.

use serde::Serialize;

use crate::model::Registry;

/// One row of the "Definition of assertions" table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelDefinitionRow {
    /// `prefix:label` identifier.
    #[serde(rename = "Data quality assertion")]
    pub assertion: String,
    /// Dimension category name.
    #[serde(rename = "Category")]
    pub category: &'static str,
    /// Compact IRI of the inspected field.
    #[serde(rename = "Input field (RDF)")]
    pub input_field: &'static str,
    /// Label local name.
    #[serde(rename = "Label")]
    pub label: &'static str,
    /// Short definition.
    #[serde(rename = "Simple rule definition")]
    pub definition: &'static str,
    /// Expanded rule text.
    #[serde(rename = "Expanded rule definition")]
    pub rule: &'static str,
}

/// One row of the "Use case template" table; the use-case column starts empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseCaseRow {
    /// `prefix:label` identifier.
    #[serde(rename = "Data quality assertion")]
    pub assertion: String,
    /// Filled in by reviewers.
    #[serde(rename = "New Use Case Name")]
    pub use_case: String,
}

/// Both review tables together.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewTemplate {
    /// The use-case sheet.
    #[serde(rename = "Use case template")]
    pub use_case: Vec<UseCaseRow>,
    /// The definitions sheet.
    #[serde(rename = "Definition of assertions")]
    pub definitions: Vec<LabelDefinitionRow>,
}

impl Registry {
    /// One definition row per (dimension, label), in declaration order.
    #[must_use]
    pub fn label_definitions(&self) -> Vec<LabelDefinitionRow> {
        self.dimensions
            .iter()
            .flat_map(|d| {
                d.labels.iter().map(move |l| LabelDefinitionRow {
                    assertion: format!("{}:{}", d.prefix(), l.name),
                    category: d.category.as_str(),
                    input_field: d.input_field,
                    label: l.name,
                    definition: l.definition,
                    rule: l.rule,
                })
            })
            .collect()
    }

    /// One empty use-case row per label.
    #[must_use]
    pub fn use_case_template(&self) -> Vec<UseCaseRow> {
        self.all_labels()
            .into_iter()
            .map(|assertion| UseCaseRow {
                assertion,
                use_case: String::new(),
            })
            .collect()
    }

    /// Both review tables.
    #[must_use]
    pub fn review_template(&self) -> ReviewTemplate {
        ReviewTemplate {
            use_case: self.use_case_template(),
            definitions: self.label_definitions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Registry;

    #[test]
    fn one_row_per_label() {
        let registry = Registry::full();
        assert_eq!(registry.label_definitions().len(), registry.label_count());
        assert_eq!(registry.use_case_template().len(), registry.label_count());
    }

    #[test]
    fn template_use_case_column_is_empty() {
        assert!(Registry::full()
            .use_case_template()
            .iter()
            .all(|row| row.use_case.is_empty()));
    }

    #[test]
    fn first_row_is_low_coordinate_precision() {
        let rows = Registry::full().label_definitions();
        let first = &rows[0];
        assert_eq!(first.assertion, "coordinate_precision:Low");
        assert_eq!(first.category, "coordinate");
        assert_eq!(first.input_field, "geo:hasGeometry");
    }

    #[test]
    fn rows_serialize_with_sheet_headings() {
        let rows = Registry::full().label_definitions();
        let json = serde_json::to_value(&rows[0]).unwrap_or_default();
        assert_eq!(json["Data quality assertion"], "coordinate_precision:Low");
        assert!(json.get("Expanded rule definition").is_some());
    }
}

//! Scientific-name dimensions over `tern:FeatureOfInterest`.

use crate::model::{Category, Dimension, Label};

const INPUT_FIELD: &str = "tern:FeatureOfInterest";

/// Returns the scientific-name dimensions in declaration order.
#[must_use]
pub fn dimensions() -> Vec<Dimension> {
    vec![completeness(), validation()]
}

fn completeness() -> Dimension {
    Dimension {
        key: "scientific_name_completeness",
        category: Category::ScientificName,
        input_field: INPUT_FIELD,
        namespace: "http://example.com/vocab/scientific_name_completeness/",
        assess_namespace: "http://example.com/assess/scientific_name_completeness/",
        labels: vec![
            Label {
                name: "empty_name",
                definition: "This label is used to mark records where the scientific name \
                             field is missing or contains no data, indicating a lack of \
                             specified scientific identification for the observation or \
                             entity.",
                rule: "If the 'tern:FeatureOfInterest' field does not exist or contains no \
                       data for a given record, label the record as 'empty_name'. This \
                       indicates the absence of a scientific name, signifying that specific \
                       scientific identification for the observation or entity is missing. ",
            },
            Label {
                name: "non_empty_name",
                definition: "This label is applied to records that have a valid scientific \
                             name provided, indicating the presence of specified scientific \
                             identification for the observation or entity.",
                rule: "If the 'tern:FeatureOfInterest' field exists and contains data for a \
                       given record, label the record as 'non_empty_name'. This signifies the \
                       presence of a scientific name, indicating that specific scientific \
                       identification for the observation or entity has been provided.",
            },
        ],
    }
}

fn validation() -> Dimension {
    Dimension {
        key: "scientific_name_validation",
        category: Category::ScientificName,
        input_field: INPUT_FIELD,
        namespace: "http://example.com/vocab/scientific_name_validation/",
        assess_namespace: "http://example.com/assess/scientific_name_validation/",
        labels: vec![
            Label {
                name: "valid_name",
                definition: "This label is applied to records where the scientific name has \
                             been verified as correct and adheres to accepted naming \
                             conventions or validation criteria, indicating the scientific \
                             name is legitimate and accurately represents the entity.",
                rule: "If the scientific name in the 'tern:FeatureOfInterest' field has \
                       been verified against accepted naming conventions or validation \
                       criteria and is found to be correct, label the record as \
                       'valid_name'. This indicates that the scientific name is legitimate \
                       and accurately represents the observed entity, adhering to the \
                       recognized standards for scientific nomenclature. ",
            },
            Label {
                name: "invalid_name",
                definition: "This label is used for records with scientific names that do not \
                             meet the established validation criteria, suggesting the name \
                             might be incorrect, misspelled, or not conforming to accepted \
                             scientific naming conventions.",
                rule: "If the scientific name in the 'tern:FeatureOfInterest' field does \
                       not meet established validation criteria—whether due to being \
                       incorrect, misspelled, or not conforming to accepted scientific \
                       naming conventions—label the record as 'invalid_name'. This suggests \
                       that the name may not be legitimate or accurately represent the \
                       entity as per the recognized standards for scientific nomenclature.",
            },
        ],
    }
}

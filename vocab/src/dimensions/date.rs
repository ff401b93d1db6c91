//! Date dimensions over `sosa:phenomenonTime`: recency, format validity,
//! completeness and statistical outliers.

use crate::model::{Category, Dimension, Label};

const INPUT_FIELD: &str = "sosa:phenomenonTime";

/// Returns the date dimensions in declaration order.
#[must_use]
pub fn dimensions() -> Vec<Dimension> {
    vec![
        recency(),
        format_validation(),
        completeness(),
        outlier_kmeans(),
        outlier_irq(),
    ]
}

fn recency() -> Dimension {
    Dimension {
        key: "date_recency",
        category: Category::Date,
        input_field: INPUT_FIELD,
        namespace: "http://example.com/vocab/date_recency/",
        assess_namespace: "http://example.com/assess/date_recency/",
        labels: vec![
            Label {
                name: "recent_20_years",
                definition: "This label indicates that the observation date is within the last \
                             20 years, making it more relevant to current contexts and \
                             studies.",
                rule: "If the 'sosa:phenomenonTime' field contains a date that falls within \
                       the last 20 years from the current date, label the record as \
                       'recent'. This label suggests the observation is relevant to current \
                       contexts and studies due to its recency. ",
            },
            Label {
                name: "outdated_20_years",
                definition: "This label indicates that the observation date is more than 20 \
                             years ago, before 20 years, and may not reflect the current state \
                             or conditions.",
                rule: "If the 'sosa:phenomenonTime' field contains a date that is more than \
                       20 years ago from the current date, label the record as 'outdated'. \
                       This indicates the observation may not reflect current conditions, \
                       deeming it potentially less relevant for recent applications or \
                       analyses.",
            },
        ],
    }
}

fn format_validation() -> Dimension {
    Dimension {
        key: "date_format_validation",
        category: Category::Date,
        input_field: INPUT_FIELD,
        namespace: "http://example.com/vocab/date_format_validation/",
        assess_namespace: "http://example.com/assess/date_format_validation/",
        labels: vec![
            Label {
                name: "valid",
                definition: "Indicates that the date format is valid and recognized.",
                rule: "If the date format in the 'sosa:phenomenonTime' field adheres to \
                       recognized and accepted standards, label the record as 'valid'. This \
                       indicates that the date is structured in a manner that is \
                       universally understood and correctly interpretable by systems and \
                       users alike. ",
            },
            Label {
                name: "invalid",
                definition: "Indicates that the date format is invalid or unrecognized.",
                rule: "If the date format in the 'sosa:phenomenonTime' field does not follow \
                       recognized and accepted standards or is structured in a way that is \
                       not correctly interpretable (e.g., mixing up day and month in a \
                       non-standard format), label the record as 'invalid'. This suggests \
                       that the date may be prone to misinterpretation or errors in \
                       processing due to its unconventional format.",
            },
        ],
    }
}

// Both labels carry the same combined rule text.
const COMPLETENESS_RULE: &str = "If the 'sosa:phenomenonTime' field does not exist or \
    contains no data for a given record, label the record as 'empty'. This indicates that \
    there is no date information provided, signifying an absence of temporal data for the \
    observation. Non_Empty: If the 'sosa:phenomenonTime' field exists and contains data for \
    a given record, label the record as 'non_empty'. This signifies that date information \
    is present, indicating the availability of temporal data for the observation.";

fn completeness() -> Dimension {
    Dimension {
        key: "date_completeness",
        category: Category::Date,
        input_field: INPUT_FIELD,
        namespace: "http://example.com/vocab/date_completeness/",
        assess_namespace: "http://example.com/assess/date_completeness/",
        labels: vec![
            Label {
                name: "empty",
                definition: "Indicates that the date is empty.",
                rule: COMPLETENESS_RULE,
            },
            Label {
                name: "non_empty",
                definition: "Indicates that the date is not empty.",
                rule: COMPLETENESS_RULE,
            },
        ],
    }
}

fn outlier_kmeans() -> Dimension {
    Dimension {
        key: "date_outlier_kmeans",
        category: Category::Date,
        input_field: INPUT_FIELD,
        namespace: "http://example.com/vocab/date_outlier_kmeans/",
        assess_namespace: "http://example.com/assess/date_outlier_kmeans/",
        labels: vec![
            Label {
                name: "outlier_date",
                definition: "This label is used to tag dates that are determined to be \
                             significantly different from the majority, based on the KMeans \
                             clustering algorithm. Such dates fall into the smallest cluster \
                             or are far from the centroids of their clusters, indicating they \
                             deviate notably from typical date values.",
                rule: "If the date from the 'sosa:phenomenonTime' field is significantly \
                       different from the majority, as determined by falling into the \
                       smallest cluster or being far from the centroids of their clusters \
                       when analyzed by the KMeans clustering algorithm, label the record \
                       as 'outlier_date'. This label indicates the date deviates notably \
                       from typical date values, suggesting it might be an outlier. ",
            },
            Label {
                name: "normal_date",
                definition: "This label is applied to dates that are considered to be within \
                             the expected range, based on the KMeans clustering results. These \
                             dates fall into larger clusters and are close to the centroids, \
                             indicating they align with the common patterns observed in the \
                             dataset.",
                rule: "If the date from the 'sosa:phenomenonTime' field falls into larger \
                       clusters and is close to the centroids, according to the KMeans \
                       clustering results, label the record as 'normal_date'. This suggests \
                       the date aligns with common patterns observed in the dataset, \
                       indicating it is within the expected range of dates and considered \
                       normal.",
            },
        ],
    }
}

fn outlier_irq() -> Dimension {
    Dimension {
        key: "date_outlier_irq",
        category: Category::Date,
        input_field: INPUT_FIELD,
        namespace: "http://example.com/vocab/date_outlier_irq/",
        assess_namespace: "http://example.com/assess/date_outlier_irq/",
        labels: vec![
            Label {
                name: "outlier_date",
                definition: "This label indicates that the observation date significantly \
                             deviates from the typical range, suggesting it may be an anomaly. \
                             (Based on IRQ Method)",
                rule: "If the date from the 'sosa:phenomenonTime' field significantly \
                       deviates from the typical range, based on the Interquartile Range \
                       (IRQ) method—meaning it falls outside the bounds established by the \
                       IRQ calculations (e.g., below Q1 - 1.5IQR or above Q3 + \
                       1.5IQR)—label the record as 'outlier_date'. This label indicates \
                       that the date is considered an anomaly, deviating notably from the \
                       expected date range.",
            },
            Label {
                name: "normal_date",
                definition: "This label indicates that the observation date falls within the \
                             typical range, suggesting it is not an anomaly. (Based on IRQ \
                             Method)",
                rule: "If the date from the 'sosa:phenomenonTime' field falls within the \
                       typical range, as determined by the Interquartile Range (IRQ) \
                       method—meaning it is within the bounds set by Q1 - 1.5IQR and Q3 + \
                       1.5IQR—label the record as 'normal_date'. This suggests the date \
                       does not significantly deviate from what is typically observed, \
                       indicating it is not considered an anomaly.",
            },
        ],
    }
}

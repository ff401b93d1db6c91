//! Coordinate dimensions: precision, completeness, unusual patterns, state
//! membership and statistical outliers of `geo:hasGeometry` values.

use crate::model::{Category, Dimension, Label};

const INPUT_FIELD: &str = "geo:hasGeometry";

/// Returns the coordinate dimensions in declaration order.
#[must_use]
pub fn dimensions() -> Vec<Dimension> {
    vec![
        precision(),
        completeness(),
        unusual(),
        in_australia_state(),
        outlier_irq(),
        outlier_zscore(),
    ]
}

fn precision() -> Dimension {
    Dimension {
        key: "coordinate_precision",
        category: Category::Coordinate,
        input_field: INPUT_FIELD,
        namespace: "http://example.com/vocab/coordinate_precision/",
        assess_namespace: "http://example.com/assess/coordinate_precision/",
        labels: vec![
            Label {
                name: "Low",
                definition: "Indicates low precision in coordinate values if either or both of \
                             the latitude or longitude of the location's coordinate has less \
                             than 2 decimal points.",
                rule: "If either the latitude or longitude values of the location coordinate \
                       in the 'geo:hasGeometry' field have less than 2 decimal places, label \
                       the record as 'Low'. This indicates a low level of precision in the \
                       coordinate values, suggesting a broad, general area rather than a \
                       specific location.",
            },
            Label {
                name: "Medium",
                definition: "Indicates medium precision in coordinate values if either or both \
                             of the latitude or longitude of the location's coordinate has \
                             between 2 and 4 decimal points.",
                rule: "If either the latitude or longitude values of the location coordinate \
                       in the 'geo:hasGeometry' field have between 2 and 4 decimal places, \
                       label the record as 'Medium'. This denotes a moderate level of \
                       precision in the coordinate values, pinpointing a more specific \
                       location but not with the highest degree of accuracy.",
            },
            Label {
                name: "High",
                definition: "Indicates high precision in coordinate values if latitude and \
                             longitude of the location's coordinate has more than 4 decimal \
                             points.",
                rule: "If either the latitude or longitude values of the location coordinate \
                       in the 'geo:hasGeometry' field have more than 4 decimal places, label \
                       the record as 'High'. This signifies a high level of precision in the \
                       coordinate values, indicating a very specific location with detailed \
                       geographical accuracy.",
            },
        ],
    }
}

fn completeness() -> Dimension {
    Dimension {
        key: "coordinate_completeness",
        category: Category::Coordinate,
        input_field: INPUT_FIELD,
        namespace: "http://example.com/vocab/coordinate_completeness/",
        assess_namespace: "http://example.com/assess/coordinate_completeness/",
        labels: vec![
            Label {
                name: "empty",
                definition: "This label is used to mark records where no geographic coordinate \
                             data is provided, indicating an absence of specific latitude and \
                             longitude information in the geometry of the feature.",
                rule: "If the 'geo:hasGeometry' field does not exist or contains no data, \
                       label the record as 'empty'. This indicates an absence of geographic \
                       coordinate data, highlighting that no specific latitude and longitude \
                       information is provided.",
            },
            Label {
                name: "non_empty",
                definition: "This label is applied to records that contain valid geographic \
                             coordinate data, signifying the presence of specific latitude and \
                             longitude information in the feature's geometry.",
                rule: "If the 'geo:hasGeometry' field exists and contains data, label the \
                       record as 'non_empty'. This signifies the presence of specific \
                       latitude and longitude information, indicating that geographic \
                       coordinate data is provided.",
            },
        ],
    }
}

fn unusual() -> Dimension {
    Dimension {
        key: "coordinate_unusual",
        category: Category::Coordinate,
        input_field: INPUT_FIELD,
        namespace: "http://example.com/vocab/coordinate_unusual/",
        assess_namespace: "http://example.com/assess/coordinate_unusual/",
        labels: vec![
            Label {
                name: "usual",
                definition: "This label is assigned to records where latitude and longitude \
                             values do not exhibit any repeating patterns in their decimal \
                             parts, indicating that the geographic coordinate data is \
                             considered normal and without abnormalities or fabrication.",
                rule: "If the latitude and longitude values within the 'geo:hasGeometry' \
                       field do not exhibit any repeating patterns in their decimal parts, \
                       label the record as 'usual'. This suggests that the geographic \
                       coordinates data appears normal, without any detectable anomalies or \
                       fabrication indicating potential inaccuracies.",
            },
            Label {
                name: "unusual",
                definition: "This label is applied to records where either latitude or \
                             longitude (or both) show repeating patterns in their decimal \
                             parts, suggesting that the geographic coordinate data may be \
                             inaccurate, fabricated, or otherwise atypical.",
                rule: "If either the latitude or longitude values (or both) within the \
                       'geo:hasGeometry' field show repeating patterns in their decimal parts, \
                       label the record as 'unusual'. This implies that the geographic \
                       coordinates data may be inaccurate, fabricated, or exhibit atypical \
                       characteristics that deviate from normal precision or representation.",
            },
        ],
    }
}

fn in_australia_state() -> Dimension {
    Dimension {
        key: "coordinate_in_australia_state",
        category: Category::Coordinate,
        input_field: INPUT_FIELD,
        namespace: "http://example.com/vocab/coordinate_in_australia_state/",
        assess_namespace: "http://example.com/assess/coordinate_in_australia_state/",
        labels: vec![
            Label {
                name: "New_South_Wales",
                definition: "Indicates that the coordinate is in New South Wales, a state on \
                             the east coast of Australia.",
                rule: "If the geographic coordinate falls within the boundaries of New South \
                       Wales, label the record as 'New_South_Wales'.",
            },
            Label {
                name: "Victoria",
                definition: "Indicates that the coordinate is in Victoria, a state in \
                             southeast Australia.",
                rule: "If the geographic coordinate is located within Victoria's boundaries, \
                       label the record as 'Victoria'.",
            },
            Label {
                name: "Queensland",
                definition: "Indicates that the coordinate is in Queensland, a state in \
                             northeast Australia.",
                rule: "If the geographic coordinate lies within Queensland, label the \
                       record as 'Queensland'. ",
            },
            Label {
                name: "Western_Australia",
                definition: "Indicates that the coordinate is in Western Australia, a state \
                             occupying the entire western third of Australia.",
                rule: "If the geographic coordinate is situated within Western Australia, \
                       label the record as 'Western_Australia'.",
            },
            Label {
                name: "South_Australia",
                definition: "Indicates that the coordinate is in South Australia, a state in \
                             the southern central part of Australia.",
                rule: "If the geographic coordinate is found within South Australia, label \
                       the record as 'South_Australia'. ",
            },
            Label {
                name: "Tasmania",
                definition: "Indicates that the coordinate is in Tasmania, an island state off \
                             the southern coast of Australia.",
                rule: "If the geographic coordinate is located within Tasmania, label the \
                       record as 'Tasmania'. ",
            },
            Label {
                name: "Northern_Territory",
                definition: "Indicates that the coordinate is in the Northern Territory, a \
                             federal Australian territory in the center and central northern \
                             regions.",
                rule: "If the geographic coordinate falls within the Northern Territory, \
                       label the record as 'Northern_Territory'. ",
            },
            Label {
                name: "Australian_Capital_Territory",
                definition: "Indicates that the coordinate is in the Australian Capital \
                             Territory, Australia's federal district, located in the southeast \
                             of the country.",
                rule: "If the geographic coordinate is within the Australian Capital \
                       Territory, label the record as 'Australian_Capital_Territory'. ",
            },
            Label {
                name: "Outside_Australia",
                definition: "Indicates that the coordinate is outside the geographical bounds \
                             of Australia.",
                rule: "If the geographic coordinate does not fall within the geographical \
                       bounds of any Australian states or territories, label the record as \
                       'Outside_Australia'.",
            },
        ],
    }
}

fn outlier_irq() -> Dimension {
    Dimension {
        key: "coordinate_outlier_irq",
        category: Category::Coordinate,
        input_field: INPUT_FIELD,
        namespace: "http://example.com/vocab/coordinate_outlier_irq/",
        assess_namespace: "http://example.com/assess/coordinate_outlier_irq/",
        labels: vec![
            Label {
                name: "outlier_coordinate",
                definition: "This label indicates that the observation coordinate \
                             significantly deviates from the typical range, suggesting it may \
                             be an anomaly. (Based on IRQ Method)",
                rule: "If the geographic coordinate data (latitude and/or longitude) from \
                       the 'geo:hasGeometry' field significantly deviates from the typical \
                       range based on the Interquartile Range (IRQ) method—meaning the \
                       point's coordinate values fall outside the bounds established by the \
                       IRQ calculations (e.g., below Q1 - 1.5IQR or above Q3 + 1.5IQR for \
                       either latitude or longitude)—label the record as 'outlier_point'. \
                       This indicates the observation point is considered an anomaly, \
                       significantly deviating from the common geographic location range. ",
            },
            Label {
                name: "normal_coordinate",
                definition: "This label indicates that the observation coordinate falls \
                             within the typical range, suggesting it is not an anomaly. (Based \
                             on IRQ Method)",
                rule: "If the geographic coordinate data (latitude and/or longitude) from \
                       the 'geo:hasGeometry' field falls within the typical range, as \
                       determined by the Interquartile Range (IRQ) method—meaning the \
                       point's coordinate values are within the bounds set by Q1 - 1.5IQR \
                       and Q3 + 1.5IQR for both latitude and longitude—label the record as \
                       'normal_point'. This suggests the observation point does not \
                       significantly deviate from the expected geographic location range, \
                       indicating it is not considered an anomaly.",
            },
        ],
    }
}

fn outlier_zscore() -> Dimension {
    Dimension {
        key: "coordinate_outlier_zscore",
        category: Category::Coordinate,
        input_field: INPUT_FIELD,
        namespace: "http://example.com/vocab/coordinate_outlier_zscore/",
        assess_namespace: "http://example.com/assess/coordinate_outlier_zscore/",
        labels: vec![
            Label {
                name: "outlier_coordinate",
                definition: "This label indicates that the observation coordinate \
                             significantly deviates from the typical range, suggesting it may \
                             be an anomaly. (Based on Z-Score Method)",
                rule: "If the geographic coordinate data (latitude and/or longitude) from \
                       the 'geo:hasGeometry' field significantly deviates from the mean, \
                       based on the Z-Score method—meaning the coordinates Z-Score is \
                       beyond a predefined threshold (typically, a Z-Score greater than 3 \
                       or less than -3 for either latitude or longitude)—label the record \
                       as 'outlier_point'. This suggests the observation point is an \
                       anomaly, significantly deviating from the standard range of \
                       geographic locations. ",
            },
            Label {
                name: "normal_coordinate",
                definition: "This label indicates that the observation coordinate falls \
                             within the typical range, suggesting it is not an anomaly. (Based \
                             on Z-Score Method)",
                rule: "If the geographic coordinate data (latitude and/or longitude) from the \
                       'geo:hasGeometry' field has a Z-Score within a normal range (typically, \
                       a Z-Score between -3 and 3 for both latitude and longitude), based on \
                       the Z-Score method, label the record as 'normal_point'. This indicates \
                       the observation coordinates falls within the expected range of \
                       geographic locations, suggesting it is not considered an anomaly.",
            },
        ],
    }
}

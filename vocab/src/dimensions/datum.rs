//! Datum dimensions: presence, validity and type of the geodetic datum
//! referenced by `geo:hasGeometry`.

use crate::model::{Category, Dimension, Label};

const INPUT_FIELD: &str = "geo:hasGeometry";

/// Returns the datum dimensions in declaration order.
#[must_use]
pub fn dimensions() -> Vec<Dimension> {
    vec![completeness(), validation(), datum_type()]
}

fn completeness() -> Dimension {
    Dimension {
        key: "datum_completeness",
        category: Category::Datum,
        input_field: INPUT_FIELD,
        namespace: "http://example.com/vocab/datum_completeness/",
        assess_namespace: "http://example.com/assess/datum_completeness/",
        labels: vec![
            Label {
                name: "empty",
                definition: "Indicates that the datum link reference is empty.",
                rule: "If the 'geo:hasGeometry' field either does not exist or contains no \
                       link reference data for a given record, label the record as 'empty'. \
                       This label indicates the absence of a datum link reference, \
                       signifying that no specific geographic datum information is provided \
                       for the geographic coordinate data. ",
            },
            Label {
                name: "not_empty",
                definition: "Indicates that the datum link reference is not empty.",
                rule: "If the 'geo:hasGeometry' field exists and contains link reference data \
                       for a given record, label the record as 'not_empty'. This label \
                       signifies the presence of a datum link reference, indicating that \
                       specific geographic datum information is provided for the geographic \
                       coordinate data.",
            },
        ],
    }
}

fn validation() -> Dimension {
    Dimension {
        key: "datum_validation",
        category: Category::Datum,
        input_field: INPUT_FIELD,
        namespace: "http://example.com/vocab/datum_validation/",
        assess_namespace: "http://example.com/assess/datum_validation/",
        labels: vec![
            Label {
                name: "valid",
                definition: "Indicates that the datum link reference is valid and recognized.",
                rule: "If the datum link reference in the 'geo:hasGeometry' field is \
                       recognized and conforms to known and accepted geographic datum \
                       standards, label the record as 'valid'. This indicates that the datum \
                       link reference is appropriate and can be reliably used for geographic \
                       coordinate data interpretation.",
            },
            Label {
                name: "invalid",
                definition: "Indicates that the datum link reference is invalid or \
                             unrecognized.",
                rule: "If the datum link reference in the 'geo:hasGeometry' field is not \
                       recognized or does not conform to known and accepted geographic datum \
                       standards, label the record as 'invalid'. This indicates that the \
                       datum link reference may be incorrect, fabricated, or not suitable for \
                       accurate geographic coordinate data interpretation.",
            },
        ],
    }
}

fn datum_type() -> Dimension {
    Dimension {
        key: "datum_type",
        category: Category::Datum,
        input_field: INPUT_FIELD,
        namespace: "http://example.com/vocab/datum_type/",
        assess_namespace: "http://example.com/assess/datum_type/",
        labels: vec![
            Label {
                name: "AGD84",
                definition: "Indicates that the datum is in the Australian Geodetic Datum 1984 \
                             type.",
                rule: "If the datum link reference within the 'geo:hasGeometry' field \
                       specifies the Australian Geodetic Datum 1984 (AGD84), label the \
                       record as 'AGD84'. This classification indicates that the geographic \
                       data is referenced according to the AGD84 standard. ",
            },
            Label {
                name: "GDA2020",
                definition: "Indicates that the datum is in the Geocentric Datum of Australia \
                             2020 type.",
                rule: "If the datum link reference in the 'geo:hasGeometry' field is \
                       identified as the Geocentric Datum of Australia 2020 (GDA2020), \
                       label the record as 'GDA2020'. This shows that the geographic data \
                       adheres to the GDA2020 standard, a more recent datum for Australia. ",
            },
            Label {
                name: "GDA94",
                definition: "Indicates that the datum is in the Geocentric Datum of Australia \
                             1994 type.",
                rule: "If the datum link reference in the 'geo:hasGeometry' field corresponds \
                       to the Geocentric Datum of Australia 1994 (GDA94), label the record as \
                       'GDA94'. This indicates the use of the GDA94 standard, preceding \
                       GDA2020 for Australian geographic data.",
            },
            Label {
                name: "WGS84",
                definition: "Indicates that the datum is in the World Geodetic System 1984 \
                             type.",
                rule: "If the datum link reference in the 'geo:hasGeometry' field is \
                       recognized as the World Geodetic System 1984 (WGS84), label the record \
                       as 'WGS84'. This classification signifies that the geographic data is \
                       based on the globally used WGS84 standard.",
            },
            Label {
                name: "None",
                definition: "Indicates that the datum is not in the AGD84, GDA2020, GDA94, or \
                             WGS84 types.",
                rule: "If the datum link reference in the 'geo:hasGeometry' field does not \
                       correspond to any of the specified types (AGD84, GDA2020, GDA94, \
                       WGS84), label the record as 'None'. This label indicates that the \
                       datum used does not match the predefined types, suggesting either a \
                       different standard is in use or the datum type is unspecified.",
            },
        ],
    }
}

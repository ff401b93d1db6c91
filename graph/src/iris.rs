//! IRI constants for the vocabularies read and written by the assessment engine.

/// XSD namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
/// SKOS namespace.
pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";
/// SOSA (Sensor, Observation, Sample, and Actuator) namespace.
pub const SOSA: &str = "http://www.w3.org/ns/sosa/";
/// OWL-Time namespace.
pub const TIME: &str = "http://www.w3.org/2006/time#";
/// GeoSPARQL namespace.
pub const GEO: &str = "http://www.opengis.net/ont/geosparql#";
/// schema.org namespace.
pub const SCHEMA: &str = "https://schema.org/";
/// Data quality assessment framework namespace.
pub const DQAF: &str = "http://example.com/def/dqaf/";

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:integer`.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
/// `xsd:boolean`.
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
/// `xsd:date`.
pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

/// `skos:Concept`.
pub const SKOS_CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";
/// `skos:prefLabel`.
pub const SKOS_PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
/// `skos:definition`.
pub const SKOS_DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";

/// `sosa:observedProperty`.
pub const SOSA_OBSERVED_PROPERTY: &str = "http://www.w3.org/ns/sosa/observedProperty";
/// `sosa:phenomenonTime`.
pub const SOSA_PHENOMENON_TIME: &str = "http://www.w3.org/ns/sosa/phenomenonTime";

/// `time:inXSDDate`.
pub const TIME_IN_XSD_DATE: &str = "http://www.w3.org/2006/time#inXSDDate";

/// `geo:asWKT`.
pub const GEO_AS_WKT: &str = "http://www.opengis.net/ont/geosparql#asWKT";
/// `geo:wktLiteral`.
pub const GEO_WKT_LITERAL: &str = "http://www.opengis.net/ont/geosparql#wktLiteral";

/// `schema:Person`.
pub const SCHEMA_PERSON: &str = "https://schema.org/Person";
/// `schema:name`.
pub const SCHEMA_NAME: &str = "https://schema.org/name";
/// `schema:value`.
pub const SCHEMA_VALUE: &str = "https://schema.org/value";

/// `dqaf:hasDQAFResult`.
pub const DQAF_HAS_RESULT: &str = "http://example.com/def/dqaf/hasDQAFResult";
/// `dqaf:assessmentDate`.
pub const DQAF_ASSESSMENT_DATE: &str = "http://example.com/def/dqaf/assessmentDate";

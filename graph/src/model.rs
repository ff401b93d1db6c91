//! Core term and statement types.
//!
//! Terms are owned and totally ordered so a [`Graph`](crate::Graph) can hold
//! them in a `BTreeSet`: duplicate statements collapse and iteration order is
//! deterministic, which keeps serializer output stable across runs.

use std::fmt;

use chrono::NaiveDate;

use crate::iris::{XSD_BOOLEAN, XSD_DATE, XSD_INTEGER};

/// A literal value: lexical form plus optional datatype or language tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// Lexical form as written in the source document.
    pub lexical: String,
    /// Full IRI of the datatype, or `None` for a plain string.
    pub datatype: Option<String>,
    /// BCP 47 language tag for language-tagged strings.
    pub language: Option<String>,
}

impl Literal {
    /// A plain string literal.
    #[must_use]
    pub fn string(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }

    /// A literal with an explicit datatype IRI.
    #[must_use]
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(datatype.into()),
            language: None,
        }
    }

    /// A language-tagged string. Tags are case-insensitive and stored lowercase.
    #[must_use]
    pub fn lang(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: Some(language.into().to_ascii_lowercase()),
        }
    }

    /// An `xsd:boolean` literal.
    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Self::typed(value.to_string(), XSD_BOOLEAN)
    }

    /// An `xsd:integer` literal.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self::typed(value.to_string(), XSD_INTEGER)
    }

    /// An `xsd:date` literal in `YYYY-MM-DD` form.
    #[must_use]
    pub fn date(value: NaiveDate) -> Self {
        Self::typed(value.format("%Y-%m-%d").to_string(), XSD_DATE)
    }

    /// Returns true if the literal carries the given datatype IRI.
    #[must_use]
    pub fn has_datatype(&self, iri: &str) -> bool {
        self.datatype.as_deref() == Some(iri)
    }

    /// Parses the literal as a boolean if it is typed `xsd:boolean`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        if !self.has_datatype(XSD_BOOLEAN) {
            return None;
        }
        match self.lexical.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }

    /// Parses the literal as an integer if it is typed `xsd:integer`.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        if !self.has_datatype(XSD_INTEGER) {
            return None;
        }
        self.lexical.parse().ok()
    }
}

/// A node in the graph: a named resource, a blank node, or a literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// A resource identified by an absolute IRI.
    Iri(String),
    /// An anonymous resource, scoped to the graph that defines it.
    Blank(String),
    /// A literal value.
    Literal(Literal),
}

impl Term {
    /// A named resource.
    #[must_use]
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// A blank node with the given label.
    #[must_use]
    pub fn blank(label: impl Into<String>) -> Self {
        Term::Blank(label.into())
    }

    /// A blank node with a fresh, globally unique label.
    ///
    /// Result fragments produced by independent runs can therefore be merged
    /// without their anonymous resources being conflated.
    #[must_use]
    pub fn fresh_blank() -> Self {
        Term::Blank(format!("r{}", uuid::Uuid::new_v4().simple()))
    }

    /// Returns the IRI if this term is a named resource.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this term is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Returns true for blank nodes.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::Blank(_))
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::Blank(label) => write!(f, "_:{label}"),
            Term::Literal(lit) => {
                write!(f, "\"{}\"", lit.lexical)?;
                if let Some(lang) = &lit.language {
                    write!(f, "@{lang}")
                } else if let Some(dt) = &lit.datatype {
                    write!(f, "^^<{dt}>")
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// A single statement: subject, predicate, object.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    /// The resource the statement is about.
    pub subject: Term,
    /// The relation; always a named resource in well-formed input.
    pub predicate: Term,
    /// The value: a resource or a literal.
    pub object: Term,
}

impl Triple {
    /// Builds a statement from its three parts.
    #[must_use]
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

//! Set-semantics statement graph with parameterized pattern matching.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Term, Triple};

/// An in-memory set of statements plus the prefixes bound for serialization.
///
/// Adding a statement that is already present is a no-op, so merging result
/// fragments is idempotent and commutative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    triples: BTreeSet<Triple>,
    prefixes: BTreeMap<String, String>,
}

impl Graph {
    /// Creates an empty graph with no prefixes bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph holds no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Adds a statement. Returns false if it was already present.
    pub fn insert(&mut self, subject: Term, predicate: Term, object: Term) -> bool {
        self.triples.insert(Triple::new(subject, predicate, object))
    }

    /// Adds an already-built statement. Returns false if it was already present.
    pub fn insert_triple(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Returns true if the exact statement is present.
    #[must_use]
    pub fn contains(&self, subject: &Term, predicate: &Term, object: &Term) -> bool {
        self.triples
            .contains(&Triple::new(subject.clone(), predicate.clone(), object.clone()))
    }

    /// Matches statements against a pattern; `None` positions are wildcards.
    ///
    /// Bound positions are compared by value, so callers pass terms as
    /// parameters rather than splicing them into query text. The pattern is
    /// copied, so the returned statements borrow only the graph.
    pub fn triples_matching<'a>(
        &'a self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        let (subject, predicate, object) = (
            subject.cloned(),
            predicate.cloned(),
            object.cloned(),
        );
        self.triples.iter().filter(move |t| {
            subject.as_ref().map_or(true, |s| &t.subject == s)
                && predicate.as_ref().map_or(true, |p| &t.predicate == p)
                && object.as_ref().map_or(true, |o| &t.object == o)
        })
    }

    /// Objects of every `subject predicate ?o` statement.
    pub fn objects<'a>(
        &'a self,
        subject: &Term,
        predicate: &Term,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples_matching(Some(subject), Some(predicate), None)
            .map(|t| &t.object)
    }

    /// Distinct subjects of every `?s predicate object` statement.
    #[must_use]
    pub fn subjects<'a>(&'a self, predicate: &Term, object: &Term) -> BTreeSet<&'a Term> {
        self.triples_matching(None, Some(predicate), Some(object))
            .map(|t| &t.subject)
            .collect()
    }

    /// Adds every statement and prefix binding of `other` to this graph.
    pub fn extend_from(&mut self, other: &Graph) {
        self.triples.extend(other.triples.iter().cloned());
        for (prefix, iri) in &other.prefixes {
            self.prefixes
                .entry(prefix.clone())
                .or_insert_with(|| iri.clone());
        }
    }

    /// Binds a prefix for serialization. Rebinding replaces the namespace.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Bound prefixes, ordered by prefix.
    #[must_use]
    pub fn prefixes(&self) -> &BTreeMap<String, String> {
        &self.prefixes
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::collections::btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

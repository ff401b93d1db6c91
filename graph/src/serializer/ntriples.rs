//! N-Triples serializer.
//!
//! Produces a valid N-Triples document (one statement per line, absolute IRIs,
//! blank nodes as `_:label`). Statement order follows the graph's ordering,
//! so output is stable and diff-friendly.

use crate::graph::Graph;
use crate::model::Term;

use super::escape_string;

/// Serializes every statement of the graph to an N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.len() * 96);
    for t in graph {
        out.push_str(&term(&t.subject));
        out.push(' ');
        out.push_str(&term(&t.predicate));
        out.push(' ');
        out.push_str(&term(&t.object));
        out.push_str(" .\n");
    }
    out
}

fn term(t: &Term) -> String {
    match t {
        Term::Iri(iri) => format!("<{iri}>"),
        Term::Blank(label) => format!("_:{label}"),
        Term::Literal(lit) => {
            let quoted = format!("\"{}\"", escape_string(&lit.lexical));
            match (&lit.language, &lit.datatype) {
                (Some(lang), _) => format!("{quoted}@{lang}"),
                (None, Some(dt)) => format!("{quoted}^^<{dt}>"),
                (None, None) => quoted,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iris::{SCHEMA_VALUE, SOSA_OBSERVED_PROPERTY};
    use crate::model::Literal;

    fn sample() -> Graph {
        let mut g = Graph::new();
        let bn = Term::blank("b0");
        g.insert(
            bn.clone(),
            Term::iri(SOSA_OBSERVED_PROPERTY),
            Term::iri("http://example.com/assessment/01"),
        );
        g.insert(bn, Term::iri(SCHEMA_VALUE), Literal::integer(5).into());
        g
    }

    #[test]
    fn every_line_ends_with_period() {
        let nt = to_ntriples(&sample());
        assert_eq!(nt.lines().count(), 2);
        for line in nt.lines() {
            assert!(line.ends_with(" ."), "Line does not end with ' .': {line}");
        }
    }

    #[test]
    fn typed_literal_keeps_datatype() {
        let nt = to_ntriples(&sample());
        assert!(nt.contains("\"5\"^^<http://www.w3.org/2001/XMLSchema#integer>"));
        assert!(nt.contains("_:b0 <http://www.w3.org/ns/sosa/observedProperty>"));
    }

    #[test]
    fn quotes_are_escaped() {
        let mut g = Graph::new();
        g.insert(
            Term::iri("http://example.com/a"),
            Term::iri("http://example.com/p"),
            Literal::string("say \"hi\"").into(),
        );
        assert!(to_ntriples(&g).contains(r#""say \"hi\"""#));
    }
}

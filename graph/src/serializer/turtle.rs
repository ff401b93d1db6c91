//! Turtle 1.1 serializer.
//!
//! Emits one `@prefix` line per bound prefix, then one block per subject with
//! predicates separated by `;` and objects by `,`. IRIs are abbreviated to
//! `prefix:local` when a bound namespace covers them and the local part is a
//! plain name.

use crate::graph::Graph;
use crate::iris::RDF_TYPE;
use crate::model::Term;

use super::escape_string;

/// Serializes the graph to a Turtle string.
#[must_use]
pub fn to_turtle(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.len() * 80 + 256);

    for (prefix, ns) in graph.prefixes() {
        out.push_str(&format!("@prefix {prefix}: <{ns}> .\n"));
    }
    if !graph.prefixes().is_empty() && !graph.is_empty() {
        out.push('\n');
    }

    let mut current_subject: Option<&Term> = None;
    let mut current_predicate: Option<&Term> = None;

    for t in graph {
        if current_subject == Some(&t.subject) {
            if current_predicate == Some(&t.predicate) {
                out.push_str(" ,\n        ");
            } else {
                out.push_str(" ;\n    ");
                out.push_str(&predicate(graph, &t.predicate));
                out.push(' ');
            }
        } else {
            if current_subject.is_some() {
                out.push_str(" .\n\n");
            }
            out.push_str(&term(graph, &t.subject));
            out.push_str("\n    ");
            out.push_str(&predicate(graph, &t.predicate));
            out.push(' ');
        }
        out.push_str(&term(graph, &t.object));
        current_subject = Some(&t.subject);
        current_predicate = Some(&t.predicate);
    }
    if current_subject.is_some() {
        out.push_str(" .\n");
    }

    out
}

fn predicate(graph: &Graph, p: &Term) -> String {
    if p.as_iri() == Some(RDF_TYPE) {
        "a".to_owned()
    } else {
        term(graph, p)
    }
}

fn term(graph: &Graph, t: &Term) -> String {
    match t {
        Term::Iri(iri) => iri_ref(graph, iri),
        Term::Blank(label) => format!("_:{label}"),
        Term::Literal(lit) => {
            let quoted = format!("\"{}\"", escape_string(&lit.lexical));
            match (&lit.language, &lit.datatype) {
                (Some(lang), _) => format!("{quoted}@{lang}"),
                (None, Some(dt)) => format!("{quoted}^^{}", iri_ref(graph, dt)),
                (None, None) => quoted,
            }
        }
    }
}

fn iri_ref(graph: &Graph, iri: &str) -> String {
    graph
        .prefixes()
        .iter()
        .filter_map(|(prefix, ns)| {
            iri.strip_prefix(ns.as_str())
                .filter(|local| is_plain_local(local))
                .map(|local| (ns.len(), format!("{prefix}:{local}")))
        })
        .max_by_key(|(len, _)| *len)
        .map(|(_, curie)| curie)
        .unwrap_or_else(|| format!("<{iri}>"))
}

fn is_plain_local(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('-')
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iris::{SCHEMA, SCHEMA_NAME, SCHEMA_PERSON, XSD, XSD_BOOLEAN};
    use crate::model::Literal;

    fn sample() -> Graph {
        let mut g = Graph::new();
        g.bind("schema", SCHEMA);
        g.bind("xsd", XSD);
        let p = Term::iri("http://example.com/p/1");
        g.insert(p.clone(), Term::iri(RDF_TYPE), Term::iri(SCHEMA_PERSON));
        g.insert(p.clone(), Term::iri(SCHEMA_NAME), Literal::string("Ada").into());
        g.insert(p.clone(), Term::iri(SCHEMA_NAME), Literal::string("Lovelace").into());
        g.insert(
            p,
            Term::iri("http://example.com/flag"),
            Literal::typed("true", XSD_BOOLEAN).into(),
        );
        g
    }

    #[test]
    fn declares_bound_prefixes() {
        let ttl = to_turtle(&sample());
        assert!(ttl.contains("@prefix schema: <https://schema.org/> ."));
        assert!(ttl.contains("@prefix xsd: <http://www.w3.org/2001/XMLSchema#> ."));
    }

    #[test]
    fn abbreviates_covered_iris() {
        let ttl = to_turtle(&sample());
        assert!(ttl.contains("a schema:Person"));
        assert!(ttl.contains("\"true\"^^xsd:boolean"));
        assert!(ttl.contains("<http://example.com/flag>"));
    }

    #[test]
    fn groups_objects_of_one_predicate() {
        let ttl = to_turtle(&sample());
        assert!(ttl.contains("schema:name \"Ada\" ,"));
        assert_eq!(ttl.matches("<http://example.com/p/1>").count(), 1);
        assert!(ttl.trim_end().ends_with(" ."));
    }

    #[test]
    fn empty_graph_without_prefixes_is_empty() {
        assert!(to_turtle(&Graph::new()).is_empty());
    }
}

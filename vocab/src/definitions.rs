//! Materializes the vocabulary as a SKOS concept graph.

use dq_graph::iris::{RDF_TYPE, SKOS, SKOS_CONCEPT, SKOS_DEFINITION, SKOS_PREF_LABEL};
use dq_graph::{Graph, Literal, Term};

use crate::model::Registry;

impl Registry {
    /// Binds `skos` and every dimension prefix on the graph.
    pub fn bind_namespaces(&self, graph: &mut Graph) {
        graph.bind("skos", SKOS);
        for d in &self.dimensions {
            graph.bind(d.prefix(), d.namespace);
        }
    }

    /// Asserts every label as a `skos:Concept` with preferred label and definition.
    ///
    /// Re-running on the same graph adds nothing new.
    pub fn materialize_definitions(&self, graph: &mut Graph) {
        self.bind_namespaces(graph);
        let rdf_type = Term::iri(RDF_TYPE);
        let pref_label = Term::iri(SKOS_PREF_LABEL);
        let definition = Term::iri(SKOS_DEFINITION);
        let concept = Term::iri(SKOS_CONCEPT);

        for d in &self.dimensions {
            for label in &d.labels {
                let iri = Term::iri(d.label_iri(label));
                graph.insert(iri.clone(), rdf_type.clone(), concept.clone());
                graph.insert(
                    iri.clone(),
                    pref_label.clone(),
                    Literal::string(capitalize(label.name)).into(),
                );
                graph.insert(iri, definition.clone(), Literal::string(label.definition).into());
            }
        }
    }

    /// A fresh graph holding only the materialized definitions.
    #[must_use]
    pub fn definition_graph(&self) -> Graph {
        let mut graph = Graph::new();
        self.materialize_definitions(&mut graph);
        graph
    }
}

/// Upper-cases the first character and lower-cases the rest
/// (`"New_South_Wales"` becomes `"New_south_wales"`).
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

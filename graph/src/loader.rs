//! Loads a graph from a Turtle or N-Triples file, or accepts one already in memory.
//!
//! Parsing is delegated to `sophia_turtle`; parsed terms are copied into the
//! owned [`Term`] model so the assessment engine never sees parser types.

use std::path::{Path, PathBuf};

use sophia_api::source::{StreamError, TripleSource};
use sophia_api::term::{Term as _, TermKind};
use sophia_api::triple::Triple as _;
use sophia_turtle::parser::{nt, turtle};

use crate::error::GraphError;
use crate::graph::Graph;
use crate::iris::XSD_STRING;
use crate::model::{Literal, Term, Triple};

/// What the caller hands to the engine: a file to parse or a loaded graph.
#[derive(Debug, Clone)]
pub enum GraphSource {
    /// A Turtle (`.ttl`, default) or N-Triples (`.nt`) file.
    Path(PathBuf),
    /// A graph the caller already holds.
    Graph(Graph),
}

impl From<PathBuf> for GraphSource {
    fn from(path: PathBuf) -> Self {
        GraphSource::Path(path)
    }
}

impl From<&Path> for GraphSource {
    fn from(path: &Path) -> Self {
        GraphSource::Path(path.to_path_buf())
    }
}

impl From<Graph> for GraphSource {
    fn from(graph: Graph) -> Self {
        GraphSource::Graph(graph)
    }
}

/// Resolves the caller's input into a graph.
///
/// # Errors
///
/// Returns [`GraphError::InvalidInput`] if the path does not name a regular
/// file, [`GraphError::Io`] if it cannot be read, and [`GraphError::Parse`]
/// if its content is not valid Turtle / N-Triples.
pub fn load_data(source: impl Into<GraphSource>) -> Result<Graph, GraphError> {
    match source.into() {
        GraphSource::Graph(graph) => Ok(graph),
        GraphSource::Path(path) => load_file(&path),
    }
}

fn load_file(path: &Path) -> Result<Graph, GraphError> {
    if !path.is_file() {
        return Err(GraphError::InvalidInput {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_ntriples = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("nt"));

    let graph = if is_ntriples {
        collect(nt::parse_str(&content), path)?
    } else {
        collect(turtle::parse_str(&content), path)?
    };
    tracing::debug!(path = %path.display(), statements = graph.len(), "graph loaded");
    Ok(graph)
}

fn collect<S: TripleSource>(mut source: S, path: &Path) -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    source
        .try_for_each_triple(|t| -> Result<(), GraphError> {
            let triple = Triple::new(
                convert(t.s(), path)?,
                convert(t.p(), path)?,
                convert(t.o(), path)?,
            );
            graph.insert_triple(triple);
            Ok(())
        })
        .map_err(|err| match err {
            StreamError::SourceError(e) => GraphError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
            StreamError::SinkError(e) => e,
        })?;
    Ok(graph)
}

fn convert<T: sophia_api::term::Term>(term: T, path: &Path) -> Result<Term, GraphError> {
    let converted = match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Term::Iri(iri.as_str().to_owned())),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| Term::Blank(id.as_str().to_owned())),
        TermKind::Literal => term.lexical_form().map(|lexical| {
            let lexical = lexical.to_string();
            let literal = if let Some(tag) = term.language_tag() {
                Literal::lang(lexical, tag.as_str().to_owned())
            } else {
                match term.datatype() {
                    Some(dt) if dt.as_str() != XSD_STRING => {
                        Literal::typed(lexical, dt.as_str().to_owned())
                    }
                    _ => Literal::string(lexical),
                }
            };
            Term::Literal(literal)
        }),
        // Quoted triples and variables have no counterpart in the model.
        _ => None,
    };
    converted.ok_or_else(|| GraphError::UnsupportedTerm {
        path: path.to_path_buf(),
        term: format!("{:?}", term.kind()),
    })
}

use serde::Serialize;
use std::fmt;

use crate::graph::traits::{Graph, VertexId, Weight};
use crate::graph::weighted::{Edge, WeightedGraph};

/// One vertex and its outgoing edges in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexDump<W> {
    pub id: VertexId,
    pub edges: Vec<Edge<W>>,
}

/// Snapshot of a graph with vertices ordered by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphDump<W> {
    pub vertices: Vec<VertexDump<W>>,
}

impl<W> GraphDump<W>
where
    W: Weight + Serialize,
{
    /// Serializes the snapshot as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<W> fmt::Display for GraphDump<W>
where
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            write!(f, "{} -> ", vertex.id)?;
            for edge in &vertex.edges {
                write!(f, "({}, {}) ", edge.destination, edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<W> WeightedGraph<W>
where
    W: Weight,
{
    /// Structured snapshot of every vertex and its edges
    pub fn dump(&self) -> GraphDump<W> {
        let vertices = self
            .vertices()
            .into_iter()
            .map(|id| VertexDump {
                id,
                edges: self
                    .outgoing_edges(id)
                    .map(|(destination, weight)| Edge { destination, weight })
                    .collect(),
            })
            .collect();

        GraphDump { vertices }
    }

    /// Text listing, one `id -> (dst, weight) ...` line per vertex
    pub fn print_graph(&self) -> String {
        self.dump().to_string()
    }
}

impl<W> fmt::Display for WeightedGraph<W>
where
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.dump(), f)
    }
}

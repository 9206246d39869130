use std::fmt::{Debug, Display};
use num_traits::PrimInt;

use crate::{Error, Result};

/// Integer label identifying a vertex
pub type VertexId = i64;

/// Integer edge weight. Shortest-path sums saturate at `max_value()`,
/// which doubles as the "unreachable" distance.
pub trait Weight: PrimInt + Debug + Display {}

impl<T> Weight for T where T: PrimInt + Debug + Display {}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, duplicates included
    fn edge_count(&self) -> usize;

    /// Returns all vertex ids in ascending order
    fn vertices(&self) -> Vec<VertexId>;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool;

    /// Gets the weight of the first edge between two vertices if one exists
    fn get_edge_weight(&self, from: VertexId, to: VertexId) -> Option<W>;

    /// Checks that no edge has a negative weight, reporting the first offender by source id
    fn validate_non_negative(&self) -> Result<()> {
        for from in self.vertices() {
            if let Some((to, _)) = self.outgoing_edges(from).find(|&(_, w)| w < W::zero()) {
                return Err(Error::NegativeWeight { from, to });
            }
        }
        Ok(())
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Inserts a vertex with no outgoing edges.
    ///
    /// An existing vertex is reset: its outgoing edges are dropped.
    fn add_vertex(&mut self, vertex: VertexId);

    /// Appends a directed edge, creating either endpoint if it is missing.
    /// Existing edges between the same pair are kept.
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W);

    /// Sets the weight of the first edge from `from` to `to` and returns the old weight
    fn update_edge_weight(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<W>;
}

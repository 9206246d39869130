use log::{debug, warn};
use serde::Serialize;
use std::collections::HashMap;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPaths};
use crate::graph::traits::{Graph, MutableGraph, VertexId, Weight};
use crate::{Error, Result};

/// A directed edge, owned by the adjacency list of its source vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge<W> {
    pub destination: VertexId,
    pub weight: W,
}

/// A directed weighted graph using adjacency lists keyed by vertex id.
///
/// Several edges may connect the same ordered pair. Lookups and weight
/// updates always act on the first one inserted; the rest stay in the
/// list and still take part in shortest-path relaxation.
#[derive(Debug, Clone)]
pub struct WeightedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: vertex_id -> [edge]
    adjacency: HashMap<VertexId, Vec<Edge<W>>>,
}

impl<W> WeightedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        WeightedGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Creates an empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        WeightedGraph {
            adjacency: HashMap::with_capacity(vertices),
        }
    }

    /// Number of vertex entries, including vertices with no edges
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Changes the weight of the first edge from `from` to `to`.
    ///
    /// A missing edge is not an error: it is logged and the graph is left
    /// untouched. Returns whether an edge was updated.
    pub fn change_edge_weight(&mut self, from: VertexId, to: VertexId, weight: W) -> bool {
        match self.update_edge_weight(from, to, weight) {
            Ok(_) => true,
            Err(err) => {
                warn!("{}", err);
                false
            }
        }
    }

    /// Weight of the first edge from `from` to `to`
    pub fn get_weight(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.get_edge_weight(from, to)
    }

    /// Number of stored edges from `from` to `to`
    pub fn edge_multiplicity(&self, from: VertexId, to: VertexId) -> usize {
        self.adjacency
            .get(&from)
            .map_or(0, |edges| edges.iter().filter(|e| e.destination == to).count())
    }

    /// Shortest distances from `start` to every vertex, using Dijkstra's algorithm
    pub fn shortest_paths(&self, start: VertexId) -> Result<ShortestPaths<W>> {
        Dijkstra::new().compute_shortest_paths(self, start)
    }

    fn first_edge_mut(&mut self, from: VertexId, to: VertexId) -> Option<&mut Edge<W>> {
        self.adjacency
            .get_mut(&from)?
            .iter_mut()
            .find(|edge| edge.destination == to)
    }
}

impl<W> Default for WeightedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for WeightedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Vec<VertexId> {
        let mut ids: Vec<VertexId> = self.adjacency.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        if let Some(edges) = self.adjacency.get(&vertex) {
            Box::new(edges.iter().map(|edge| (edge.destination, edge.weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        if let Some(edges) = self.adjacency.get(&from) {
            edges.iter().any(|edge| edge.destination == to)
        } else {
            false
        }
    }

    fn get_edge_weight(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.adjacency
            .get(&from)?
            .iter()
            .find(|edge| edge.destination == to)
            .map(|edge| edge.weight)
    }
}

impl<W> MutableGraph<W> for WeightedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self, vertex: VertexId) {
        if let Some(dropped) = self.adjacency.insert(vertex, Vec::new()) {
            if !dropped.is_empty() {
                debug!("vertex {} reset, dropped {} outgoing edges", vertex, dropped.len());
            }
        }
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) {
        // Only missing endpoints go through add_vertex, so nothing is reset here
        if !self.has_vertex(from) {
            self.add_vertex(from);
        }
        if !self.has_vertex(to) {
            self.add_vertex(to);
        }

        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge { destination: to, weight });
    }

    fn update_edge_weight(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<W> {
        let duplicates = self.edge_multiplicity(from, to);
        if duplicates > 1 {
            debug!(
                "{} edges from {} to {}, updating the first one",
                duplicates, from, to
            );
        }

        let edge = self
            .first_edge_mut(from, to)
            .ok_or(Error::EdgeNotFound(from, to))?;
        let previous = edge.weight;
        edge.weight = weight;
        Ok(previous)
    }
}

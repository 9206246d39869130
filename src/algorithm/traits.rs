use std::collections::HashMap;

use crate::graph::{Graph, VertexId, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths<W>
where
    W: Weight,
{
    /// Source vertex ID
    pub source: VertexId,

    /// Distance from the source for every vertex of the graph.
    /// Unreachable vertices hold `W::max_value()`.
    pub distances: HashMap<VertexId, W>,

    /// Predecessor of each reached vertex in the shortest path tree
    pub predecessors: HashMap<VertexId, VertexId>,
}

impl<W> ShortestPaths<W>
where
    W: Weight,
{
    /// The distance recorded for unreachable vertices
    pub fn infinity() -> W {
        W::max_value()
    }

    /// Finite distance to `vertex`, `None` if it is unreachable or unknown
    pub fn distance(&self, vertex: VertexId) -> Option<W> {
        self.distances
            .get(&vertex)
            .copied()
            .filter(|&d| d != Self::infinity())
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    /// `(vertex, distance)` pairs ordered by vertex id
    pub fn sorted(&self) -> Vec<(VertexId, W)> {
        let mut pairs: Vec<(VertexId, W)> = self.distances.iter().map(|(&v, &d)| (v, d)).collect();
        pairs.sort_unstable_by_key(|&(v, _)| v);
        pairs
    }

    /// Vertices on a shortest path from the source to `target`, both ends included
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = *self.predecessors.get(&current)?;
            path.push(current);

            // A predecessor chain longer than the graph means it loops
            if path.len() > self.distances.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPaths<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

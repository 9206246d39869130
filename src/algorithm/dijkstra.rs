use log::trace;
use num_traits::Saturating;
use std::collections::{HashMap, HashSet};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPaths};
use crate::data_structures::DistanceQueue;
use crate::graph::{Graph, VertexId, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    /// Skip vertices that were already expanded once, on top of the stale-entry check
    track_settled: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            track_settled: false,
        }
    }

    /// Keep a settled set so each vertex is expanded at most once
    pub fn with_settled_tracking(mut self, enabled: bool) -> Self {
        self.track_settled = enabled;
        self
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPaths<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::VertexNotFound(source));
        }
        graph.validate_non_negative()?;

        let infinity = ShortestPaths::<W>::infinity();

        // Every known vertex starts unreachable
        let mut distances: HashMap<VertexId, W> = graph
            .vertices()
            .into_iter()
            .map(|v| (v, infinity))
            .collect();
        let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();
        let mut settled: HashSet<VertexId> = HashSet::new();

        distances.insert(source, W::zero());
        let mut queue = DistanceQueue::seeded(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // A shorter path to u was found after this entry was queued
            if dist_u > distances.get(&u).copied().unwrap_or(infinity) {
                trace!("discarding stale entry ({}, {})", u, dist_u);
                continue;
            }
            if self.track_settled && !settled.insert(u) {
                continue;
            }
            trace!("expanding {} at distance {}", u, dist_u);

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(u) {
                let new_dist = Saturating::saturating_add(dist_u, weight);

                if new_dist < distances.get(&v).copied().unwrap_or(infinity) {
                    distances.insert(v, new_dist);
                    predecessors.insert(v, u);
                    queue.push(v, new_dist);
                }
            }
        }

        Ok(ShortestPaths {
            source,
            distances,
            predecessors,
        })
    }
}

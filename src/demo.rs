//! Sample graph and weight randomisation used by the `demo` binary.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::{Graph, MutableGraph, VertexId, WeightedGraph};

/// Settings for the demo binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Vertex the shortest paths are computed from
    pub source: VertexId,
    /// Exclusive upper bound of the random amount added to each weight
    pub max_jitter: i64,
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Print JSON dumps instead of text listings
    pub json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            source: 1,
            max_jitter: 5,
            seed: None,
            json: false,
        }
    }
}

impl DemoConfig {
    /// Parses `[source] [max_jitter] [seed] [--json]`, program name excluded.
    /// Values that do not parse keep their defaults.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut position = 0;

        for arg in args {
            let arg = arg.as_ref();
            if arg == "--json" {
                config.json = true;
                continue;
            }

            match position {
                0 => config.source = arg.parse().unwrap_or(config.source),
                1 => config.max_jitter = arg.parse().unwrap_or(config.max_jitter),
                2 => config.seed = arg.parse().ok().or(config.seed),
                _ => warn!("ignoring extra argument {:?}", arg),
            }
            position += 1;
        }

        config
    }

    /// Random generator honouring the configured seed
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Five vertices and eight edges; from vertex 1 the distances are
/// `{1: 0, 2: 3, 3: 5, 4: 5, 5: 13}`.
pub fn sample_graph() -> WeightedGraph<i64> {
    let mut graph = WeightedGraph::with_capacity(5);

    for v in 1..=5 {
        graph.add_vertex(v);
    }

    graph.add_edge(1, 2, 3);
    graph.add_edge(1, 3, 5);
    graph.add_edge(2, 3, 2);
    graph.add_edge(3, 4, 7);
    graph.add_edge(4, 1, 10);
    graph.add_edge(2, 4, 2);
    graph.add_edge(1, 5, 20);
    graph.add_edge(2, 5, 10);

    graph
}

/// Re-weights every edge `i -> j` (`i != j`) of `graph` to its weight in
/// `baseline` plus a uniform amount in `[0, max_jitter)`.
///
/// Only the first edge of each pair is touched. Returns the number of edges updated.
pub fn randomize_weights<R: Rng>(
    graph: &mut WeightedGraph<i64>,
    baseline: &WeightedGraph<i64>,
    max_jitter: i64,
    rng: &mut R,
) -> usize {
    let vertices = graph.vertices();
    let mut updated = 0;

    for &i in &vertices {
        for &j in &vertices {
            if i == j || !graph.has_edge(i, j) {
                continue;
            }

            let Some(base) = baseline.get_weight(i, j) else {
                warn!("no baseline weight for ({}, {})", i, j);
                continue;
            };
            let jitter = if max_jitter > 0 {
                rng.gen_range(0..max_jitter)
            } else {
                0
            };

            if graph.change_edge_weight(i, j, base.saturating_add(jitter)) {
                updated += 1;
            }
        }
    }

    debug!("randomised {} edge weights", updated);
    updated
}

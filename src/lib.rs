//! Weighted Graph - directed integer-weighted graph with Dijkstra shortest paths
//!
//! Vertices are integer ids created on demand. Edges carry an integer weight that
//! can be changed in place, and `shortest_paths` computes single-source distances
//! for non-negative weights.

pub mod algorithm;
pub mod data_structures;
pub mod demo;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPaths};
/// Re-export main types for convenient use
pub use graph::weighted::{Edge, WeightedGraph};
pub use graph::{GraphDump, VertexId, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Vertex not found: {0}")]
    VertexNotFound(VertexId),

    #[error("Edge not found: ({0}, {1})")]
    EdgeNotFound(VertexId, VertexId),

    #[error("Negative edge weight on ({from}, {to})")]
    NegativeWeight { from: VertexId, to: VertexId },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

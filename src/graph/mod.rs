pub mod traits;
pub mod weighted;
pub mod dump;

pub use traits::{Graph, MutableGraph, VertexId, Weight};
pub use weighted::{Edge, WeightedGraph};
pub use dump::{GraphDump, VertexDump};

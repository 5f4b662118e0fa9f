//! Turns a raw Overpass response into the node and way sets the graph
//! builder consumes, and resolves a query point to the nearest known node.

mod ingest;
mod nearest;

pub use ingest::{ingest, RawNode, RawWay};
pub use nearest::nearest_node;

//! Core graph data structures

mod edge;
mod engine;
mod facade;
mod frequency;
mod predecessor;
mod vertex;
mod view;

#[cfg(test)]
mod tests;

pub use edge::{describe, Edge, EdgeId, Orientation};
pub use engine::{AdjacencyEngine, EdgePolicy, GraphError, GraphResult, Incompatibility};
pub use facade::{DiGraph, Directed, EdgeType, Graph, GraphConfig, GraphKind, UnGraph, Undirected};
pub use vertex::{Vertex, VertexId};
pub use view::{
    EdgeCursor, Edges, EdgesMut, Incidence, Neighbors, SortOrder, VertexCursor, Vertices,
    VerticesMut,
};

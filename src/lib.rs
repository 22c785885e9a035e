//! Graphite: In-Memory Graph Storage Engine
//!
//! A general-purpose graph library whose core keeps adjacency, incidence,
//! a canonical edge set and an edge-presence index consistent under any
//! sequence of insertions and removals, and exposes them to graph
//! algorithms through cheap, live views.
//!
//! # Core Concepts
//!
//! - **Vertices**: string-identified, optionally tagged, carry a payload and
//!   scratch slots for algorithms
//! - **Edges**: directed or undirected, weighted, with a canonical description
//!   used to answer "are these two connected"
//! - **Variants**: simple graphs, multigraphs and pseudographs, in either
//!   orientation
//! - **Union-find**: disjoint sets for connectivity consumers
//!
//! # Example
//!
//! ```
//! use graphite::{DiGraph, Vertex, VertexId};
//!
//! let mut graph: DiGraph = DiGraph::simple();
//! graph.add_vertex(Vertex::new("a"));
//! graph.add_vertex(Vertex::new("b"));
//! graph.connect(&VertexId::from("a"), &VertexId::from("b")).unwrap();
//!
//! assert_eq!(graph.out_degree_of(&VertexId::from("a")).unwrap(), 1);
//! ```

mod graph;
pub mod identity;
pub mod union_find;

pub use graph::{
    describe, AdjacencyEngine, DiGraph, Directed, Edge, EdgeCursor, EdgeId, EdgePolicy, EdgeType,
    Edges, EdgesMut, Graph, GraphConfig, GraphError, GraphKind, GraphResult, Incidence,
    Incompatibility, Neighbors, Orientation, SortOrder, UnGraph, Undirected, Vertex, VertexCursor,
    VertexId, Vertices, VerticesMut,
};
pub use identity::{Disposable, IdGenerator, Identifiable, SequentialIds, Tagged, UuidIds};
pub use union_find::{NaiveUnionFind, UnionFind, UnionFindError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

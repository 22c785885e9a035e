//! Graphs induced by predecessor maps
//!
//! Search algorithms record, for each reached vertex, the vertex it was
//! reached from. Turning that map back into a graph gives the search tree.

use super::edge::Edge;
use super::engine::GraphResult;
use super::facade::{DiGraph, GraphKind};
use super::vertex::{Vertex, VertexId};
use tracing::debug;

impl<V, E> DiGraph<V, E> {
    /// Build the simple directed graph of a `child -> parent` map
    ///
    /// Each pair contributes both vertices and a `parent -> child` edge.
    /// `start` is always a vertex of the result, even when the map is empty.
    pub fn from_predecessors<'p>(
        predecessors: impl IntoIterator<Item = (&'p VertexId, &'p VertexId)>,
        start: &VertexId,
    ) -> GraphResult<Self> {
        let mut graph = Self::new(GraphKind::Simple);
        graph.add_vertex(Vertex::new(start.clone()));
        for (child, parent) in predecessors {
            graph.add_vertex(Vertex::new(child.clone()));
            graph.add_vertex(Vertex::new(parent.clone()));
            graph.add_edge(Edge::directed(parent.clone(), child.clone()))?;
        }
        debug!(
            start = %start,
            vertices = graph.num_vertices(),
            edges = graph.num_edges(),
            "predecessor graph built"
        );
        Ok(graph)
    }
}

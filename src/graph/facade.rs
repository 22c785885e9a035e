//! Graph: an identified, tagged graph of a fixed variant
//!
//! The orientation is a type parameter (`Directed` / `Undirected`), so
//! degree queries that only make sense for one orientation exist only on
//! that orientation. The edge policy (simple, multigraph, pseudograph) is a
//! runtime [`GraphKind`] fixed at construction.

use super::edge::{Edge, EdgeId, Orientation};
use super::engine::{AdjacencyEngine, EdgePolicy, GraphResult};
use super::vertex::{Vertex, VertexId};
use super::view::{Edges, EdgesMut, Incidence, Neighbors, Vertices, VerticesMut};
use crate::identity::{Disposable, Identifiable, SequentialIds, Tagged};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Compile-time orientation marker
pub trait EdgeType: Copy + Default + fmt::Debug + 'static {
    const ORIENTATION: Orientation;
}

/// Marker for directed graphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Marker for undirected graphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl EdgeType for Directed {
    const ORIENTATION: Orientation = Orientation::Directed;
}

impl EdgeType for Undirected {
    const ORIENTATION: Orientation = Orientation::Undirected;
}

/// Which edges a graph accepts beyond a single edge per pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// No parallel edges, no self-loops
    #[default]
    Simple,
    /// Parallel edges, no self-loops
    Multigraph,
    /// Parallel edges and self-loops
    Pseudograph,
}

impl GraphKind {
    pub fn policy(self) -> EdgePolicy {
        match self {
            GraphKind::Simple => EdgePolicy::SIMPLE,
            GraphKind::Multigraph => EdgePolicy::MULTI,
            GraphKind::Pseudograph => EdgePolicy::PSEUDO,
        }
    }
}

/// Declarative graph construction parameters
///
/// ```yaml
/// kind: multigraph
/// id: roads
/// tag: Road network
/// id_prefix: junction-
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub kind: GraphKind,
    pub id: Option<String>,
    pub tag: Option<String>,
    /// Generate sequential vertex ids with this prefix instead of UUIDs
    pub id_prefix: Option<String>,
}

impl GraphConfig {
    /// Parse a config from YAML
    pub fn from_yaml(yaml: &str) -> GraphResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// A graph over an [`AdjacencyEngine`]
///
/// The engine is owned for the graph's whole life and cannot be swapped out.
#[derive(Debug)]
pub struct Graph<V = (), E = (), Ty = Directed> {
    id: Option<String>,
    tag: Option<String>,
    kind: GraphKind,
    engine: AdjacencyEngine<V, E>,
    ty: PhantomData<Ty>,
}

/// Directed graph
pub type DiGraph<V = (), E = ()> = Graph<V, E, Directed>;

/// Undirected graph
pub type UnGraph<V = (), E = ()> = Graph<V, E, Undirected>;

impl<V, E, Ty: EdgeType> Graph<V, E, Ty> {
    /// Create an empty graph of the given kind
    pub fn new(kind: GraphKind) -> Self {
        Self {
            id: None,
            tag: None,
            kind,
            engine: AdjacencyEngine::new(Ty::ORIENTATION, kind.policy()),
            ty: PhantomData,
        }
    }

    /// No parallel edges, no self-loops
    pub fn simple() -> Self {
        Self::new(GraphKind::Simple)
    }

    /// Parallel edges, no self-loops
    pub fn multigraph() -> Self {
        Self::new(GraphKind::Multigraph)
    }

    /// Parallel edges and self-loops
    pub fn pseudograph() -> Self {
        Self::new(GraphKind::Pseudograph)
    }

    pub fn from_config(config: &GraphConfig) -> Self {
        let mut graph = Self::new(config.kind);
        graph.id = config.id.clone();
        graph.tag = config.tag.clone();
        if let Some(prefix) = &config.id_prefix {
            graph.engine = graph
                .engine
                .with_id_generator(SequentialIds::new(prefix.clone()));
        }
        graph
    }

    /// Set the identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        Ty::ORIENTATION
    }

    pub fn is_directed(&self) -> bool {
        Ty::ORIENTATION == Orientation::Directed
    }

    pub fn allows_multi_edges(&self) -> bool {
        self.kind.policy().multi_edges
    }

    pub fn allows_self_loops(&self) -> bool {
        self.kind.policy().self_loops
    }

    /// The underlying storage engine
    pub fn engine(&self) -> &AdjacencyEngine<V, E> {
        &self.engine
    }

    // === Vertices ===

    /// A detached vertex with a freshly generated id
    pub fn new_vertex(&mut self) -> Vertex<V> {
        self.engine.new_vertex()
    }

    pub fn has_vertex(&self, vertex: &VertexId) -> bool {
        self.engine.has_vertex(vertex)
    }

    pub fn vertex(&self, vertex: &VertexId) -> Option<&Vertex<V>> {
        self.engine.vertex(vertex)
    }

    pub fn vertex_mut(&mut self, vertex: &VertexId) -> Option<&mut Vertex<V>> {
        self.engine.vertex_mut(vertex)
    }

    pub fn add_vertex(&mut self, vertex: Vertex<V>) -> bool {
        self.engine.add_vertex(vertex)
    }

    pub fn add_all(
        &mut self,
        vertices: impl IntoIterator<Item = Vertex<V>>,
        edges: impl IntoIterator<Item = Edge<E>>,
    ) -> GraphResult<()> {
        self.engine.add_all(vertices, edges)
    }

    pub fn remove_vertex(&mut self, vertex: &VertexId) -> bool {
        self.engine.remove_vertex(vertex)
    }

    // === Edges ===

    pub fn contains_edge(&self, edge: &EdgeId) -> bool {
        self.engine.contains_edge(edge)
    }

    pub fn has_edge(&self, v1: &VertexId, v2: &VertexId) -> bool {
        self.engine.has_edge(v1, v2)
    }

    pub fn edge(&self, edge: &EdgeId) -> Option<&Edge<E>> {
        self.engine.edge(edge)
    }

    pub fn edge_mut(&mut self, edge: &EdgeId) -> Option<&mut Edge<E>> {
        self.engine.edge_mut(edge)
    }

    pub fn edge_between(&self, v1: &VertexId, v2: &VertexId) -> Option<&Edge<E>> {
        self.engine.edge_between(v1, v2)
    }

    pub fn multi_edges(&self, u: &VertexId, v: &VertexId) -> Vec<&Edge<E>> {
        self.engine.multi_edges(u, v)
    }

    pub fn add_edge(&mut self, edge: Edge<E>) -> GraphResult<Option<EdgeId>> {
        self.engine.add_edge(edge)
    }

    pub fn connect(&mut self, v1: &VertexId, v2: &VertexId) -> GraphResult<Option<EdgeId>> {
        self.engine.connect(v1, v2)
    }

    pub fn connect_weighted(
        &mut self,
        v1: &VertexId,
        v2: &VertexId,
        weight: f32,
    ) -> GraphResult<Option<EdgeId>> {
        self.engine.connect_weighted(v1, v2, weight)
    }

    pub fn remove_edge(&mut self, edge: &EdgeId) -> Option<Edge<E>> {
        self.engine.remove_edge(edge)
    }

    pub fn remove_edge_between(&mut self, v1: &VertexId, v2: &VertexId) -> Option<Edge<E>> {
        self.engine.remove_edge_between(v1, v2)
    }

    pub fn remove_multi_edges(&mut self, u: &VertexId, v: &VertexId) -> Vec<Edge<E>> {
        self.engine.remove_multi_edges(u, v)
    }

    // === Queries ===

    pub fn neighbors_of(&self, vertex: &VertexId) -> GraphResult<Neighbors<'_, V>> {
        self.engine.neighbors_of(vertex)
    }

    pub fn incidence_out_of(&self, vertex: &VertexId) -> GraphResult<Incidence<'_, E>> {
        self.engine.incidence_out_of(vertex)
    }

    pub fn incidence_in_of(&self, vertex: &VertexId) -> GraphResult<Incidence<'_, E>> {
        self.engine.incidence_in_of(vertex)
    }

    pub fn num_vertices(&self) -> usize {
        self.engine.num_vertices()
    }

    pub fn num_edges(&self) -> usize {
        self.engine.num_edges()
    }

    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    pub fn clear(&mut self) {
        self.engine.clear();
    }

    pub fn vertices(&self) -> Vertices<'_, V> {
        self.engine.vertices()
    }

    pub fn vertices_mut(&mut self) -> VerticesMut<'_, V, E> {
        self.engine.vertices_mut()
    }

    pub fn edges(&self) -> Edges<'_, E> {
        self.engine.edges()
    }

    pub fn edges_mut(&mut self) -> EdgesMut<'_, V, E> {
        self.engine.edges_mut()
    }

    pub fn iter(&self) -> indexmap::map::Values<'_, VertexId, Vertex<V>> {
        self.engine.iter()
    }
}

impl<V, E> Graph<V, E, Directed> {
    /// Number of edges leaving `vertex`
    pub fn out_degree_of(&self, vertex: &VertexId) -> GraphResult<usize> {
        self.engine.out_degree_of(vertex)
    }

    /// Number of edges entering `vertex`
    pub fn in_degree_of(&self, vertex: &VertexId) -> GraphResult<usize> {
        self.engine.in_degree_of(vertex)
    }
}

impl<V, E> Graph<V, E, Undirected> {
    /// Number of edges touching `vertex`; a self-loop counts once
    pub fn degree_of(&self, vertex: &VertexId) -> GraphResult<usize> {
        self.engine.out_degree_of(vertex)
    }
}

impl<V, E, Ty: EdgeType> Default for Graph<V, E, Ty> {
    fn default() -> Self {
        Self::simple()
    }
}

impl<V, E, Ty> Identifiable for Graph<V, E, Ty> {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl<V, E, Ty> Tagged for Graph<V, E, Ty> {
    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    fn set_tag(&mut self, tag: Option<String>) {
        self.tag = tag;
    }
}

impl<V, E, Ty> Disposable for Graph<V, E, Ty> {
    /// Dispose every vertex payload and empty the graph
    fn dispose(&mut self) {
        self.engine.dispose();
    }
}

impl<'a, V, E, Ty> IntoIterator for &'a Graph<V, E, Ty> {
    type Item = &'a Vertex<V>;
    type IntoIter = indexmap::map::Values<'a, VertexId, Vertex<V>>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.engine).into_iter()
    }
}

impl<V, E, Ty> fmt::Display for Graph<V, E, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id={}, tag={}::{}",
            self.id.as_deref().unwrap_or("null"),
            self.tag.as_deref().unwrap_or("null"),
            self.engine
        )
    }
}

//! Live views over an engine's collections
//!
//! Read views borrow the engine immutably and can never mutate it. The
//! mutating views (`VerticesMut`, `EdgesMut`) borrow it exclusively and route
//! every removal through the engine, so a vertex removed through a view drops
//! its incident edges the same way `remove_vertex` does.
//!
//! Per-vertex views have no mutators at all:
//!
//! ```compile_fail
//! use graphite::{DiGraph, Vertex, VertexId};
//!
//! let mut graph: DiGraph = DiGraph::simple();
//! graph.add_vertex(Vertex::new("a"));
//! let neighbors = graph.neighbors_of(&VertexId::from("a")).unwrap();
//! neighbors.insert(VertexId::from("b"));
//! ```

use super::edge::{Edge, EdgeId};
use super::engine::{AdjacencyEngine, GraphResult};
use super::frequency::FrequencySet;
use super::vertex::{Vertex, VertexId};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;

/// Direction of a weight sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    NonDecreasing,
    NonIncreasing,
}

// ============================================================================
// Read views
// ============================================================================

/// Every vertex of a graph, in index order
///
/// Index order is insertion order until the first removal; a removal moves
/// the last vertex into the vacated position.
#[derive(Debug)]
pub struct Vertices<'a, V> {
    inner: &'a IndexMap<VertexId, Vertex<V>>,
}

impl<'a, V> Vertices<'a, V> {
    pub(crate) fn new(inner: &'a IndexMap<VertexId, Vertex<V>>) -> Self {
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn contains(&self, vertex: &VertexId) -> bool {
        self.inner.contains_key(vertex)
    }

    pub fn get(&self, vertex: &VertexId) -> Option<&'a Vertex<V>> {
        self.inner.get(vertex)
    }

    pub fn iter(&self) -> indexmap::map::Values<'a, VertexId, Vertex<V>> {
        self.inner.values()
    }

    pub fn ids(&self) -> indexmap::map::Keys<'a, VertexId, Vertex<V>> {
        self.inner.keys()
    }

    /// Position of `vertex` in index order
    pub fn index_of(&self, vertex: &VertexId) -> Option<usize> {
        self.inner.get_index_of(vertex)
    }

    /// Vertex at `position` in index order
    pub fn get_index(&self, position: usize) -> Option<&'a Vertex<V>> {
        self.inner.get_index(position).map(|(_, vertex)| vertex)
    }

    /// Snapshot of `id -> position`, for array-backed algorithms
    ///
    /// Positions are only stable between mutations: removing a vertex moves
    /// the last vertex into the vacated position, so take a fresh snapshot
    /// after any removal.
    pub fn index_map(&self) -> HashMap<VertexId, usize> {
        self.inner
            .keys()
            .enumerate()
            .map(|(position, id)| (id.clone(), position))
            .collect()
    }

    /// Snapshot of `position -> id`, the inverse of [`index_map`](Self::index_map)
    pub fn position_map(&self) -> HashMap<usize, VertexId> {
        self.inner.keys().cloned().enumerate().collect()
    }
}

impl<'a, V> IntoIterator for Vertices<'a, V> {
    type Item = &'a Vertex<V>;
    type IntoIter = indexmap::map::Values<'a, VertexId, Vertex<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.values()
    }
}

/// Every edge of a graph, in index order
#[derive(Debug)]
pub struct Edges<'a, E> {
    inner: &'a IndexMap<EdgeId, Edge<E>>,
}

impl<'a, E> Edges<'a, E> {
    pub(crate) fn new(inner: &'a IndexMap<EdgeId, Edge<E>>) -> Self {
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn contains(&self, edge: &EdgeId) -> bool {
        self.inner.contains_key(edge)
    }

    pub fn get(&self, edge: &EdgeId) -> Option<&'a Edge<E>> {
        self.inner.get(edge)
    }

    pub fn iter(&self) -> indexmap::map::Values<'a, EdgeId, Edge<E>> {
        self.inner.values()
    }

    pub fn ids(&self) -> indexmap::map::Keys<'a, EdgeId, Edge<E>> {
        self.inner.keys()
    }

    pub fn index_of(&self, edge: &EdgeId) -> Option<usize> {
        self.inner.get_index_of(edge)
    }

    pub fn get_index(&self, position: usize) -> Option<&'a Edge<E>> {
        self.inner.get_index(position).map(|(_, edge)| edge)
    }

    /// Snapshot of `id -> position`
    ///
    /// Removing an edge moves the last edge into its position, which
    /// invalidates earlier snapshots.
    pub fn index_map(&self) -> HashMap<EdgeId, usize> {
        self.inner
            .keys()
            .enumerate()
            .map(|(position, id)| (*id, position))
            .collect()
    }

    /// Snapshot of `position -> id`
    pub fn position_map(&self) -> HashMap<usize, EdgeId> {
        self.inner.keys().copied().enumerate().collect()
    }

    /// Edges ordered by weight; ties keep index order
    pub fn sorted_by_weight(&self, order: SortOrder) -> Vec<&'a Edge<E>> {
        let mut sorted: Vec<&'a Edge<E>> = self.inner.values().collect();
        match order {
            SortOrder::NonDecreasing => sorted.sort_by(|a, b| a.weight().total_cmp(&b.weight())),
            SortOrder::NonIncreasing => sorted.sort_by(|a, b| b.weight().total_cmp(&a.weight())),
        }
        sorted
    }
}

impl<'a, E> IntoIterator for Edges<'a, E> {
    type Item = &'a Edge<E>;
    type IntoIter = indexmap::map::Values<'a, EdgeId, Edge<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.values()
    }
}

/// Vertices reachable from one vertex over a single edge
///
/// Each neighbor appears once no matter how many parallel edges lead to it.
#[derive(Debug)]
pub struct Neighbors<'a, V> {
    set: &'a FrequencySet<VertexId>,
    vertices: &'a IndexMap<VertexId, Vertex<V>>,
}

impl<'a, V> Neighbors<'a, V> {
    pub(crate) fn new(
        set: &'a FrequencySet<VertexId>,
        vertices: &'a IndexMap<VertexId, Vertex<V>>,
    ) -> Self {
        Self { set, vertices }
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn contains(&self, vertex: &VertexId) -> bool {
        self.set.contains(vertex)
    }

    /// How many edges lead to `vertex`
    pub fn multiplicity(&self, vertex: &VertexId) -> usize {
        self.set.frequency_of(vertex)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'a VertexId> + 'a {
        let set = self.set;
        set.iter()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Vertex<V>> + 'a {
        let (set, vertices) = (self.set, self.vertices);
        set.iter().filter_map(move |id| vertices.get(id))
    }
}

/// Edges entering or leaving one vertex
#[derive(Debug)]
pub struct Incidence<'a, E> {
    set: &'a IndexSet<EdgeId>,
    edges: &'a IndexMap<EdgeId, Edge<E>>,
}

impl<'a, E> Incidence<'a, E> {
    pub(crate) fn new(set: &'a IndexSet<EdgeId>, edges: &'a IndexMap<EdgeId, Edge<E>>) -> Self {
        Self { set, edges }
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn contains(&self, edge: &EdgeId) -> bool {
        self.set.contains(edge)
    }

    pub fn ids(&self) -> indexmap::set::Iter<'a, EdgeId> {
        self.set.iter()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Edge<E>> + 'a {
        let (set, edges) = (self.set, self.edges);
        set.iter().filter_map(move |id| edges.get(id))
    }
}

// ============================================================================
// Mutating views
// ============================================================================

/// Vertex view with insertion and cascading removal
#[derive(Debug)]
pub struct VerticesMut<'a, V, E> {
    engine: &'a mut AdjacencyEngine<V, E>,
}

impl<'a, V, E> VerticesMut<'a, V, E> {
    pub(crate) fn new(engine: &'a mut AdjacencyEngine<V, E>) -> Self {
        Self { engine }
    }

    pub fn len(&self) -> usize {
        self.engine.num_vertices()
    }

    pub fn is_empty(&self) -> bool {
        self.engine.num_vertices() == 0
    }

    pub fn contains(&self, vertex: &VertexId) -> bool {
        self.engine.has_vertex(vertex)
    }

    /// Same as `add_vertex`
    pub fn insert(&mut self, vertex: Vertex<V>) -> bool {
        self.engine.add_vertex(vertex)
    }

    /// Same as `remove_vertex`: incident edges go too
    pub fn remove(&mut self, vertex: &VertexId) -> bool {
        self.engine.remove_vertex(vertex)
    }

    /// Keep only the vertices for which `keep` returns true
    ///
    /// Returns how many vertices were removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&Vertex<V>) -> bool) -> usize {
        let mut cursor = self.cursor();
        let mut removed = 0;
        while let Some(vertex) = cursor.advance() {
            if !keep(vertex) && cursor.remove_current() {
                removed += 1;
            }
        }
        removed
    }

    pub fn cursor(&mut self) -> VertexCursor<'_, V, E> {
        VertexCursor::new(&mut *self.engine)
    }
}

/// Edge view with removal through the engine
#[derive(Debug)]
pub struct EdgesMut<'a, V, E> {
    engine: &'a mut AdjacencyEngine<V, E>,
}

impl<'a, V, E> EdgesMut<'a, V, E> {
    pub(crate) fn new(engine: &'a mut AdjacencyEngine<V, E>) -> Self {
        Self { engine }
    }

    pub fn len(&self) -> usize {
        self.engine.num_edges()
    }

    pub fn is_empty(&self) -> bool {
        self.engine.num_edges() == 0
    }

    pub fn contains(&self, edge: &EdgeId) -> bool {
        self.engine.contains_edge(edge)
    }

    /// Same as `add_edge`
    pub fn insert(&mut self, edge: Edge<E>) -> GraphResult<Option<EdgeId>> {
        self.engine.add_edge(edge)
    }

    /// Same as `remove_edge`
    pub fn remove(&mut self, edge: &EdgeId) -> Option<Edge<E>> {
        self.engine.remove_edge(edge)
    }

    /// Keep only the edges for which `keep` returns true
    ///
    /// Returns how many edges were removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&Edge<E>) -> bool) -> usize {
        let mut cursor = self.cursor();
        let mut removed = 0;
        while let Some(edge) = cursor.advance() {
            if !keep(edge) && cursor.remove_current().is_some() {
                removed += 1;
            }
        }
        removed
    }

    pub fn cursor(&mut self) -> EdgeCursor<'_, V, E> {
        EdgeCursor::new(&mut *self.engine)
    }
}

/// Walks the vertices and can remove the one it last yielded
///
/// Removing moves the last vertex into the vacated slot; the cursor revisits
/// that slot so no vertex is skipped.
#[derive(Debug)]
pub struct VertexCursor<'a, V, E> {
    engine: &'a mut AdjacencyEngine<V, E>,
    position: usize,
    current: Option<VertexId>,
}

impl<'a, V, E> VertexCursor<'a, V, E> {
    fn new(engine: &'a mut AdjacencyEngine<V, E>) -> Self {
        Self {
            engine,
            position: 0,
            current: None,
        }
    }

    /// Move to the next vertex
    pub fn advance(&mut self) -> Option<&Vertex<V>> {
        match self.engine.vertex_at(self.position) {
            Some(vertex) => {
                self.current = Some(vertex.vertex_id().clone());
                self.position += 1;
                Some(vertex)
            }
            None => {
                self.current = None;
                None
            }
        }
    }

    /// Remove the vertex last returned by [`advance`](Self::advance)
    ///
    /// Returns false if there is no such vertex or it was already removed.
    pub fn remove_current(&mut self) -> bool {
        let Some(vertex) = self.current.take() else {
            return false;
        };
        let removed = self.engine.remove_vertex(&vertex);
        if removed {
            self.position -= 1;
        }
        removed
    }
}

/// Walks the edges and can remove the one it last yielded
#[derive(Debug)]
pub struct EdgeCursor<'a, V, E> {
    engine: &'a mut AdjacencyEngine<V, E>,
    position: usize,
    current: Option<EdgeId>,
}

impl<'a, V, E> EdgeCursor<'a, V, E> {
    fn new(engine: &'a mut AdjacencyEngine<V, E>) -> Self {
        Self {
            engine,
            position: 0,
            current: None,
        }
    }

    /// Move to the next edge
    pub fn advance(&mut self) -> Option<&Edge<E>> {
        match self.engine.edge_at(self.position) {
            Some(edge) => {
                self.current = Some(edge.id());
                self.position += 1;
                Some(edge)
            }
            None => {
                self.current = None;
                None
            }
        }
    }

    /// Remove the edge last returned by [`advance`](Self::advance)
    pub fn remove_current(&mut self) -> Option<Edge<E>> {
        let edge = self.current.take()?;
        let removed = self.engine.remove_edge(&edge);
        if removed.is_some() {
            self.position -= 1;
        }
        removed
    }
}

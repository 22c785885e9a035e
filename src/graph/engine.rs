//! AdjacencyEngine: the storage core behind every graph
//!
//! Five indices are kept in lockstep:
//!
//! - **vertex index**: `VertexId -> Vertex`, the only owner of vertices
//! - **adjacency**: per-vertex counting set of reachable neighbors
//! - **canonical edge set**: `EdgeId -> Edge`, the only owner of edges
//! - **presence index**: canonical endpoint pair -> edge ids, in insertion order
//! - **incidence**: per-vertex out and in edge sets; undirected graphs share
//!   one set per vertex for both directions
//!
//! Every mutation validates before it touches any index, and every removal
//! path (direct calls, view cursors, vertex cascades) funnels through
//! `unlink_edge`.

use super::edge::{canonical_pair, Edge, EdgeId, Orientation};
use super::frequency::FrequencySet;
use super::vertex::{Vertex, VertexId};
use super::view::{Edges, EdgesMut, Incidence, Neighbors, Vertices, VerticesMut};
use crate::identity::{Disposable, IdGenerator, Tagged, UuidIds};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur in graph operations
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Vertex not found: {0}")]
    VertexNotFound(VertexId),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Which edge shapes a graph accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgePolicy {
    /// More than one edge per endpoint pair
    pub multi_edges: bool,
    /// Edges whose endpoints coincide
    pub self_loops: bool,
}

impl EdgePolicy {
    pub const SIMPLE: Self = Self {
        multi_edges: false,
        self_loops: false,
    };
    pub const MULTI: Self = Self {
        multi_edges: true,
        self_loops: false,
    };
    pub const PSEUDO: Self = Self {
        multi_edges: true,
        self_loops: true,
    };
}

/// Why an edge was turned away by `add_edge`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Incompatibility {
    /// The edge's orientation differs from the graph's
    OrientationMismatch,
    /// The pair is already connected and multi-edges are off
    MultiEdge,
    /// Both endpoints are the same vertex and self-loops are off
    SelfLoop,
    /// This very edge instance is already stored
    AlreadyPresent,
}

type IncidenceSet = IndexSet<EdgeId>;

/// Presence-index key: endpoints, ordered for undirected graphs
type PairKey = (VertexId, VertexId);

#[derive(Debug)]
enum IncidenceIndex {
    /// One set per vertex answers both in and out queries
    Shared(HashMap<VertexId, IncidenceSet>),
    Split {
        outgoing: HashMap<VertexId, IncidenceSet>,
        incoming: HashMap<VertexId, IncidenceSet>,
    },
}

impl IncidenceIndex {
    fn new(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Undirected => Self::Shared(HashMap::new()),
            Orientation::Directed => Self::Split {
                outgoing: HashMap::new(),
                incoming: HashMap::new(),
            },
        }
    }

    fn out_of(&self, vertex: &VertexId) -> Option<&IncidenceSet> {
        match self {
            Self::Shared(sets) => sets.get(vertex),
            Self::Split { outgoing, .. } => outgoing.get(vertex),
        }
    }

    fn in_of(&self, vertex: &VertexId) -> Option<&IncidenceSet> {
        match self {
            Self::Shared(sets) => sets.get(vertex),
            Self::Split { incoming, .. } => incoming.get(vertex),
        }
    }

    fn out_mut(&mut self, vertex: &VertexId) -> Option<&mut IncidenceSet> {
        match self {
            Self::Shared(sets) => sets.get_mut(vertex),
            Self::Split { outgoing, .. } => outgoing.get_mut(vertex),
        }
    }

    fn in_mut(&mut self, vertex: &VertexId) -> Option<&mut IncidenceSet> {
        match self {
            Self::Shared(sets) => sets.get_mut(vertex),
            Self::Split { incoming, .. } => incoming.get_mut(vertex),
        }
    }

    fn register(&mut self, vertex: &VertexId) {
        match self {
            Self::Shared(sets) => {
                sets.insert(vertex.clone(), IncidenceSet::new());
            }
            Self::Split { outgoing, incoming } => {
                outgoing.insert(vertex.clone(), IncidenceSet::new());
                incoming.insert(vertex.clone(), IncidenceSet::new());
            }
        }
    }

    fn unregister(&mut self, vertex: &VertexId) {
        match self {
            Self::Shared(sets) => {
                sets.remove(vertex);
            }
            Self::Split { outgoing, incoming } => {
                outgoing.remove(vertex);
                incoming.remove(vertex);
            }
        }
    }

    fn link<E>(&mut self, edge: &Edge<E>) {
        if let Some(set) = self.out_mut(edge.v1()) {
            set.insert(edge.id());
        }
        if let Some(set) = self.in_mut(edge.v2()) {
            set.insert(edge.id());
        }
    }

    fn unlink<E>(&mut self, edge: &Edge<E>) {
        if let Some(set) = self.out_mut(edge.v1()) {
            set.swap_remove(&edge.id());
        }
        if let Some(set) = self.in_mut(edge.v2()) {
            set.swap_remove(&edge.id());
        }
    }

    /// Every edge entering or leaving `vertex`, each listed once
    fn incident_to(&self, vertex: &VertexId) -> Vec<EdgeId> {
        let mut ids: IndexSet<EdgeId> = IndexSet::new();
        if let Some(set) = self.out_of(vertex) {
            ids.extend(set.iter().copied());
        }
        if let Some(set) = self.in_of(vertex) {
            ids.extend(set.iter().copied());
        }
        ids.into_iter().collect()
    }

    fn clear(&mut self) {
        match self {
            Self::Shared(sets) => sets.clear(),
            Self::Split { outgoing, incoming } => {
                outgoing.clear();
                incoming.clear();
            }
        }
    }
}

/// Adjacency + incidence graph storage
///
/// Optimized for algorithms that issue many edge queries: neighbor sets,
/// incidence sets and degrees are O(1) lookups, "is there an edge between
/// these two" is a single hash probe on the presence index. Memory use is
/// higher than a plain adjacency list as a consequence.
#[derive(Debug)]
pub struct AdjacencyEngine<V = (), E = ()> {
    orientation: Orientation,
    policy: EdgePolicy,
    ids: Box<dyn IdGenerator>,
    vertices: IndexMap<VertexId, Vertex<V>>,
    adjacency: HashMap<VertexId, FrequencySet<VertexId>>,
    edges: IndexMap<EdgeId, Edge<E>>,
    presence: HashMap<PairKey, Vec<EdgeId>>,
    incidence: IncidenceIndex,
}

impl<V, E> AdjacencyEngine<V, E> {
    /// Create an empty engine with random vertex ids
    pub fn new(orientation: Orientation, policy: EdgePolicy) -> Self {
        Self {
            orientation,
            policy,
            ids: Box::new(UuidIds),
            vertices: IndexMap::new(),
            adjacency: HashMap::new(),
            edges: IndexMap::new(),
            presence: HashMap::new(),
            incidence: IncidenceIndex::new(orientation),
        }
    }

    /// Replace the generator used by [`new_vertex`](Self::new_vertex)
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// A detached vertex carrying a freshly generated id
    pub fn new_vertex(&mut self) -> Vertex<V> {
        Vertex::generated(self.ids.as_mut())
    }

    // === Vertices ===

    pub fn has_vertex(&self, vertex: &VertexId) -> bool {
        self.vertices.contains_key(vertex)
    }

    pub fn vertex(&self, vertex: &VertexId) -> Option<&Vertex<V>> {
        self.vertices.get(vertex)
    }

    /// Mutable access to tag, payload and scratch slots
    pub fn vertex_mut(&mut self, vertex: &VertexId) -> Option<&mut Vertex<V>> {
        self.vertices.get_mut(vertex)
    }

    /// Add `vertex` with empty adjacency and incidence sets
    ///
    /// Returns false (and drops `vertex`) if its id is already present.
    pub fn add_vertex(&mut self, vertex: Vertex<V>) -> bool {
        if self.has_vertex(vertex.vertex_id()) {
            return false;
        }
        let id = vertex.vertex_id().clone();
        self.adjacency.insert(id.clone(), FrequencySet::new());
        self.incidence.register(&id);
        trace!(vertex = %id, "vertex added");
        self.vertices.insert(id, vertex);
        true
    }

    /// Add every vertex, then every edge
    ///
    /// Edges refused by the graph policy are skipped; an edge naming an
    /// absent vertex aborts with `VertexNotFound`.
    pub fn add_all(
        &mut self,
        vertices: impl IntoIterator<Item = Vertex<V>>,
        edges: impl IntoIterator<Item = Edge<E>>,
    ) -> GraphResult<()> {
        for vertex in vertices {
            self.add_vertex(vertex);
        }
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    /// Remove `vertex` and every edge incident to it
    ///
    /// The vertex payload is disposed. Returns false if the vertex is absent.
    pub fn remove_vertex(&mut self, vertex: &VertexId) -> bool {
        if !self.has_vertex(vertex) {
            return false;
        }
        let incident = self.incidence.incident_to(vertex);
        for edge in &incident {
            self.unlink_edge(edge);
        }
        self.adjacency.remove(vertex);
        self.incidence.unregister(vertex);
        if let Some(mut removed) = self.vertices.swap_remove(vertex) {
            removed.dispose();
        }
        debug!(vertex = %vertex, cascaded_edges = incident.len(), "vertex removed");
        true
    }

    // === Edges ===

    /// Whether this exact edge instance is stored
    pub fn contains_edge(&self, edge: &EdgeId) -> bool {
        self.edges.contains_key(edge)
    }

    /// Whether any edge connects `v1` to `v2`
    pub fn has_edge(&self, v1: &VertexId, v2: &VertexId) -> bool {
        self.edge_between(v1, v2).is_some()
    }

    pub fn edge(&self, edge: &EdgeId) -> Option<&Edge<E>> {
        self.edges.get(edge)
    }

    /// Mutable access to weight, tag and payload
    pub fn edge_mut(&mut self, edge: &EdgeId) -> Option<&mut Edge<E>> {
        self.edges.get_mut(edge)
    }

    /// The first-inserted edge connecting `v1` to `v2`
    pub fn edge_between(&self, v1: &VertexId, v2: &VertexId) -> Option<&Edge<E>> {
        self.presence
            .get(&canonical_pair(v1, v2, self.orientation))
            .and_then(|ids| ids.first())
            .and_then(|id| self.edges.get(id))
    }

    /// Every edge connecting `u` to `v`, in insertion order
    pub fn multi_edges(&self, u: &VertexId, v: &VertexId) -> Vec<&Edge<E>> {
        self.presence
            .get(&canonical_pair(u, v, self.orientation))
            .map(|ids| ids.iter().filter_map(|id| self.edges.get(id)).collect())
            .unwrap_or_default()
    }

    /// Add `edge` to every index
    ///
    /// Both endpoints must already be vertices of the graph. Returns
    /// `Ok(None)` when the graph's policy refuses the edge: the pair is
    /// already connected without multi-edge support, the edge is a
    /// disallowed self-loop, or its orientation differs from the graph's.
    pub fn add_edge(&mut self, edge: Edge<E>) -> GraphResult<Option<EdgeId>> {
        self.validate_vertex(edge.v1())?;
        self.validate_vertex(edge.v2())?;
        if let Some(reason) = self.incompatibility(&edge) {
            debug!(edge = %edge.description(), ?reason, "edge refused by graph policy");
            return Ok(None);
        }

        // adjacency
        if let Some(neighbors) = self.adjacency.get_mut(edge.v1()) {
            neighbors.insert(edge.v2().clone());
        }
        if self.orientation == Orientation::Undirected {
            if let Some(neighbors) = self.adjacency.get_mut(edge.v2()) {
                neighbors.insert(edge.v1().clone());
            }
        }

        // presence + incidence
        let id = edge.id();
        self.presence
            .entry(edge.canonical_pair())
            .or_default()
            .push(id);
        self.incidence.link(&edge);

        trace!(edge = %edge.description(), id = %id, "edge added");
        self.edges.insert(id, edge);
        Ok(Some(id))
    }

    /// Connect `v1` to `v2` with a weightless edge of the graph's orientation
    pub fn connect(&mut self, v1: &VertexId, v2: &VertexId) -> GraphResult<Option<EdgeId>> {
        self.connect_weighted(v1, v2, 0.0)
    }

    /// Connect `v1` to `v2` with an edge of the graph's orientation
    pub fn connect_weighted(
        &mut self,
        v1: &VertexId,
        v2: &VertexId,
        weight: f32,
    ) -> GraphResult<Option<EdgeId>> {
        let edge = Edge::new(v1.clone(), v2.clone(), self.orientation).with_weight(weight);
        self.add_edge(edge)
    }

    /// Remove an edge from every index; `None` if it is not stored
    pub fn remove_edge(&mut self, edge: &EdgeId) -> Option<Edge<E>> {
        self.unlink_edge(edge)
    }

    /// Remove the first-inserted edge connecting `v1` to `v2`
    pub fn remove_edge_between(&mut self, v1: &VertexId, v2: &VertexId) -> Option<Edge<E>> {
        let id = self.edge_between(v1, v2)?.id();
        self.unlink_edge(&id)
    }

    /// Remove every edge connecting `u` to `v`, returned in insertion order
    pub fn remove_multi_edges(&mut self, u: &VertexId, v: &VertexId) -> Vec<Edge<E>> {
        let ids = self
            .presence
            .get(&canonical_pair(u, v, self.orientation))
            .cloned()
            .unwrap_or_default();
        ids.iter().filter_map(|id| self.unlink_edge(id)).collect()
    }

    // === Representation queries ===

    /// Vertices reachable from `vertex` over one edge
    pub fn neighbors_of(&self, vertex: &VertexId) -> GraphResult<Neighbors<'_, V>> {
        let set = self
            .adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))?;
        Ok(Neighbors::new(set, &self.vertices))
    }

    /// Edges leaving `vertex`
    pub fn incidence_out_of(&self, vertex: &VertexId) -> GraphResult<Incidence<'_, E>> {
        let set = self
            .incidence
            .out_of(vertex)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))?;
        Ok(Incidence::new(set, &self.edges))
    }

    /// Edges entering `vertex`
    pub fn incidence_in_of(&self, vertex: &VertexId) -> GraphResult<Incidence<'_, E>> {
        let set = self
            .incidence
            .in_of(vertex)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))?;
        Ok(Incidence::new(set, &self.edges))
    }

    /// Number of edges leaving `vertex`; parallel edges each count
    pub fn out_degree_of(&self, vertex: &VertexId) -> GraphResult<usize> {
        self.incidence
            .out_of(vertex)
            .map(IndexSet::len)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))
    }

    /// Number of edges entering `vertex`; parallel edges each count
    pub fn in_degree_of(&self, vertex: &VertexId) -> GraphResult<usize> {
        self.incidence
            .in_of(vertex)
            .map(IndexSet::len)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    /// Drop every vertex and edge
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
        self.edges.clear();
        self.presence.clear();
        self.incidence.clear();
    }

    /// Live view over the vertices
    pub fn vertices(&self) -> Vertices<'_, V> {
        Vertices::new(&self.vertices)
    }

    /// Vertex view whose removals cascade through the engine
    pub fn vertices_mut(&mut self) -> VerticesMut<'_, V, E> {
        VerticesMut::new(self)
    }

    /// Live view over the canonical edge set
    pub fn edges(&self) -> Edges<'_, E> {
        Edges::new(&self.edges)
    }

    /// Edge view whose removals cascade through the engine
    pub fn edges_mut(&mut self) -> EdgesMut<'_, V, E> {
        EdgesMut::new(self)
    }

    pub fn iter(&self) -> indexmap::map::Values<'_, VertexId, Vertex<V>> {
        self.vertices.values()
    }

    pub(crate) fn vertex_at(&self, position: usize) -> Option<&Vertex<V>> {
        self.vertices.get_index(position).map(|(_, vertex)| vertex)
    }

    pub(crate) fn edge_at(&self, position: usize) -> Option<&Edge<E>> {
        self.edges.get_index(position).map(|(_, edge)| edge)
    }

    // === Internals ===

    fn validate_vertex(&self, vertex: &VertexId) -> GraphResult<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(vertex.clone()))
        }
    }

    fn incompatibility(&self, edge: &Edge<E>) -> Option<Incompatibility> {
        if edge.orientation() != self.orientation {
            return Some(Incompatibility::OrientationMismatch);
        }
        if self.edges.contains_key(&edge.id()) {
            return Some(Incompatibility::AlreadyPresent);
        }
        if edge.is_self_loop() && !self.policy.self_loops {
            return Some(Incompatibility::SelfLoop);
        }
        if !self.policy.multi_edges && self.presence.contains_key(&edge.canonical_pair()) {
            return Some(Incompatibility::MultiEdge);
        }
        None
    }

    /// The single removal routine: reverses `add_edge` across all indices
    fn unlink_edge(&mut self, id: &EdgeId) -> Option<Edge<E>> {
        let edge = self.edges.swap_remove(id)?;

        if let Some(neighbors) = self.adjacency.get_mut(edge.v1()) {
            neighbors.remove(edge.v2());
        }
        if self.orientation == Orientation::Undirected {
            if let Some(neighbors) = self.adjacency.get_mut(edge.v2()) {
                neighbors.remove(edge.v1());
            }
        }

        self.incidence.unlink(&edge);

        let key = edge.canonical_pair();
        let drained = match self.presence.get_mut(&key) {
            Some(ids) => {
                ids.retain(|other| other != id);
                ids.is_empty()
            }
            None => false,
        };
        if drained {
            self.presence.remove(&key);
        }

        trace!(edge = %edge.description(), id = %id, "edge removed");
        Some(edge)
    }

    /// Display form of an edge using vertex display names
    fn edge_label(&self, edge: &Edge<E>) -> String {
        if let Some(tag) = edge.tag() {
            return tag.to_string();
        }
        let name = |id: &VertexId| match self.vertices.get(id) {
            Some(vertex) => vertex.to_string(),
            None => id.to_string(),
        };
        let (first, second) = (name(edge.v1()), name(edge.v2()));
        match self.orientation {
            Orientation::Directed => format!("{}->{}", first, second),
            Orientation::Undirected if first <= second => format!("{}<->{}", first, second),
            Orientation::Undirected => format!("{}<->{}", second, first),
        }
    }

    /// Check every cross-index invariant, panicking on the first violation
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        for (id, edge) in &self.edges {
            assert!(self.has_vertex(edge.v1()), "{} has dangling v1", edge);
            assert!(self.has_vertex(edge.v2()), "{} has dangling v2", edge);
            assert!(self.incidence.out_of(edge.v1()).is_some_and(|s| s.contains(id)));
            assert!(self.incidence.in_of(edge.v2()).is_some_and(|s| s.contains(id)));
            assert!(self.adjacency[edge.v1()].contains(edge.v2()));
            assert!(self
                .presence
                .get(&edge.canonical_pair())
                .is_some_and(|ids| ids.contains(id)));
            if !self.policy.self_loops {
                assert!(!edge.is_self_loop());
            }
        }

        let presence_total: usize = self.presence.values().map(Vec::len).sum();
        assert_eq!(presence_total, self.edges.len());
        if !self.policy.multi_edges {
            assert!(self.presence.values().all(|ids| ids.len() == 1));
        }

        // adjacency multiplicities match the edges that put them there
        for (vertex, neighbors) in &self.adjacency {
            for neighbor in neighbors.iter() {
                let expected = self
                    .edges
                    .values()
                    .map(|edge| {
                        let forward = edge.v1() == vertex && edge.v2() == neighbor;
                        let backward = self.orientation == Orientation::Undirected
                            && edge.v2() == vertex
                            && edge.v1() == neighbor;
                        usize::from(forward) + usize::from(backward)
                    })
                    .sum::<usize>();
                assert_eq!(neighbors.frequency_of(neighbor), expected);
            }
        }

        for vertex in self.vertices.keys() {
            let out = self.incidence.out_of(vertex).map(IndexSet::len);
            let inc = self.incidence.in_of(vertex).map(IndexSet::len);
            assert!(out.is_some() && inc.is_some(), "{} has no incidence sets", vertex);
            for id in self.incidence.incident_to(vertex) {
                assert!(self.edges.contains_key(&id), "{} lists a removed edge", vertex);
            }
            if self.orientation == Orientation::Undirected {
                assert_eq!(out, inc);
            }
        }
        assert_eq!(self.adjacency.len(), self.vertices.len());
    }
}

impl<V, E> Default for AdjacencyEngine<V, E> {
    fn default() -> Self {
        Self::new(Orientation::Directed, EdgePolicy::SIMPLE)
    }
}

impl<V, E> Disposable for AdjacencyEngine<V, E> {
    /// Dispose every vertex payload, then clear
    fn dispose(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.dispose();
        }
        self.clear();
    }
}

impl<'a, V, E> IntoIterator for &'a AdjacencyEngine<V, E> {
    type Item = &'a Vertex<V>;
    type IntoIter = indexmap::map::Values<'a, VertexId, Vertex<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.values()
    }
}

impl<V, E> std::fmt::Display for AdjacencyEngine<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "V = {{")?;
        for vertex in self.vertices.values() {
            write!(f, "{}, ", vertex)?;
        }
        write!(f, "}} E = {{")?;
        for edge in self.edges.values() {
            write!(f, "{}, ", self.edge_label(edge))?;
        }
        write!(f, "}}")
    }
}

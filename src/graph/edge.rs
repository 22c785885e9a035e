//! Edge representation and canonical descriptions

use super::vertex::VertexId;
use crate::identity::{Disposable, Tagged};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an edge
///
/// Every constructed edge gets a fresh id, so two edges between the same
/// pair of vertices stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(Uuid);

impl EdgeId {
    /// Create a new random EdgeId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EdgeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directed or undirected classification of an edge or graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Directed,
    Undirected,
}

/// Endpoint pair identifying the connection between `v1` and `v2`
///
/// Directed pairs keep their order; undirected pairs put the smaller id
/// first so both endpoint orders map to the same key.
pub(crate) fn canonical_pair(
    v1: &VertexId,
    v2: &VertexId,
    orientation: Orientation,
) -> (VertexId, VertexId) {
    match orientation {
        Orientation::Undirected if v2 < v1 => (v2.clone(), v1.clone()),
        _ => (v1.clone(), v2.clone()),
    }
}

/// Human-readable form of the connection between `v1` and `v2`
///
/// Directed: `v1->v2`. Undirected: the smaller id first, `a<->b`. Ids may
/// themselves contain the separators, so this is for display only.
pub fn describe(v1: &VertexId, v2: &VertexId, orientation: Orientation) -> String {
    let (first, second) = canonical_pair(v1, v2, orientation);
    match orientation {
        Orientation::Directed => format!("{}->{}", first, second),
        Orientation::Undirected => format!("{}<->{}", first, second),
    }
}

/// An edge between two vertices
///
/// Endpoints and orientation are fixed at construction; weight, tag and
/// payload stay mutable. The description is always derived from the
/// endpoints, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge<E = ()> {
    id: EdgeId,
    v1: VertexId,
    v2: VertexId,
    orientation: Orientation,
    weight: f32,
    tag: Option<String>,
    data: Option<E>,
}

impl<E> Edge<E> {
    /// Create a new edge with weight 0
    pub fn new(v1: VertexId, v2: VertexId, orientation: Orientation) -> Self {
        Self {
            id: EdgeId::new(),
            v1,
            v2,
            orientation,
            weight: 0.0,
            tag: None,
            data: None,
        }
    }

    pub fn directed(v1: impl Into<VertexId>, v2: impl Into<VertexId>) -> Self {
        Self::new(v1.into(), v2.into(), Orientation::Directed)
    }

    pub fn undirected(v1: impl Into<VertexId>, v2: impl Into<VertexId>) -> Self {
        Self::new(v1.into(), v2.into(), Orientation::Undirected)
    }

    /// Set the weight
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    /// Set the tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Attach a payload
    pub fn with_data(mut self, data: E) -> Self {
        self.data = Some(data);
        self
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn v1(&self) -> &VertexId {
        &self.v1
    }

    pub fn v2(&self) -> &VertexId {
        &self.v2
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Display form of the endpoints (see [`describe`])
    pub fn description(&self) -> String {
        describe(&self.v1, &self.v2, self.orientation)
    }

    /// Key under which the engine files this edge's endpoint pair
    pub(crate) fn canonical_pair(&self) -> (VertexId, VertexId) {
        canonical_pair(&self.v1, &self.v2, self.orientation)
    }

    pub fn is_self_loop(&self) -> bool {
        self.v1 == self.v2
    }

    /// The endpoint across from `vertex`, if `vertex` is an endpoint
    pub fn opposite(&self, vertex: &VertexId) -> Option<&VertexId> {
        if &self.v1 == vertex {
            Some(&self.v2)
        } else if &self.v2 == vertex {
            Some(&self.v1)
        } else {
            None
        }
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f32) {
        self.weight = weight;
    }

    pub fn data(&self) -> Option<&E> {
        self.data.as_ref()
    }

    pub fn data_mut(&mut self) -> Option<&mut E> {
        self.data.as_mut()
    }

    /// Replace the payload, returning the previous one
    pub fn set_data(&mut self, data: Option<E>) -> Option<E> {
        std::mem::replace(&mut self.data, data)
    }
}

impl<E> PartialEq for Edge<E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<E> Eq for Edge<E> {}

impl<E> std::hash::Hash for Edge<E> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<E> Tagged for Edge<E> {
    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    fn set_tag(&mut self, tag: Option<String>) {
        self.tag = tag;
    }
}

impl<E> Disposable for Edge<E> {
    fn dispose(&mut self) {
        self.data = None;
    }
}

impl<E> std::fmt::Display for Edge<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.tag() {
            Some(tag) => f.write_str(tag),
            None => f.write_str(&self.description()),
        }
    }
}

//! Arena-backed [`Graph`] implementation.
//!
//! Vertices and edges live in flat `Vec`s indexed by their handle: no `Rc`,
//! no cycles in the ownership graph, and the paint/assignment side tables
//! the engine keeps can index straight into these `Vec`s with a plain
//! integer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{EdgeId, Graph, VertexId};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct VertexData<VertexLabel> {
    label: VertexLabel,
    incident: Vec<(EdgeId, VertexId)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EdgeData<EdgeLabel> {
    label: EdgeLabel,
    endpoints: (VertexId, VertexId),
}

/// An arena-backed, labeled undirected graph. Used both for patterns and
/// for targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaGraph<VertexLabel, EdgeLabel> {
    vertices: Vec<VertexData<VertexLabel>>,
    edges: Vec<EdgeData<EdgeLabel>>,
    #[serde(skip)]
    vertex_ids: Vec<VertexId>,
    #[serde(skip)]
    edge_ids: Vec<EdgeId>,
}

impl<VertexLabel, EdgeLabel> Default for ArenaGraph<VertexLabel, EdgeLabel> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            vertex_ids: Vec::new(),
            edge_ids: Vec::new(),
        }
    }
}

impl<VertexLabel, EdgeLabel> ArenaGraph<VertexLabel, EdgeLabel> {
    /// Rebuilds the cached `vertex_ids`/`edge_ids` slices after
    /// deserialization (these are not stored, since they are a pure
    /// function of length).
    pub(crate) fn rebuild_id_caches(&mut self) {
        self.vertex_ids = (0..self.vertices.len() as u32).map(VertexId).collect();
        self.edge_ids = (0..self.edges.len() as u32).map(EdgeId).collect();
    }
}

impl<VertexLabel, EdgeLabel> Graph for ArenaGraph<VertexLabel, EdgeLabel> {
    type VertexLabel = VertexLabel;
    type EdgeLabel = EdgeLabel;

    fn vertices(&self) -> &[VertexId] {
        &self.vertex_ids
    }

    fn edges(&self) -> &[EdgeId] {
        &self.edge_ids
    }

    fn edges_of(&self, v: VertexId) -> &[(EdgeId, VertexId)] {
        &self.vertices[v.index()].incident
    }

    fn endpoints(&self, e: EdgeId) -> (VertexId, VertexId) {
        self.edges[e.index()].endpoints
    }

    fn vertex_label(&self, v: VertexId) -> &VertexLabel {
        &self.vertices[v.index()].label
    }

    fn edge_label(&self, e: EdgeId) -> &EdgeLabel {
        &self.edges[e.index()].label
    }
}

/// Builder for [`ArenaGraph`]. Vertices and edges are assigned handles in
/// the order they are added; that order is also the stable iteration order
/// the matcher relies on for determinism.
#[derive(Debug, Clone)]
pub struct ArenaGraphBuilder<VertexLabel, EdgeLabel> {
    vertices: Vec<VertexData<VertexLabel>>,
    edges: Vec<EdgeData<EdgeLabel>>,
}

impl<VertexLabel, EdgeLabel> Default for ArenaGraphBuilder<VertexLabel, EdgeLabel> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<VertexLabel, EdgeLabel> ArenaGraphBuilder<VertexLabel, EdgeLabel> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex with the given label and returns its handle.
    pub fn add_vertex(&mut self, label: VertexLabel) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(VertexData {
            label,
            incident: Vec::new(),
        });
        id
    }

    /// Adds an undirected edge between `a` and `b` with the given label and
    /// returns its handle. Panics if `a` or `b` is not a vertex of this
    /// builder.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, label: EdgeLabel) -> EdgeId {
        assert!(a.index() < self.vertices.len(), "unknown vertex {a:?}");
        assert!(b.index() < self.vertices.len(), "unknown vertex {b:?}");
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(EdgeData {
            label,
            endpoints: (a, b),
        });
        self.vertices[a.index()].incident.push((id, b));
        if a != b {
            self.vertices[b.index()].incident.push((id, a));
        }
        id
    }

    pub fn build(self) -> ArenaGraph<VertexLabel, EdgeLabel> {
        let mut graph = ArenaGraph {
            vertices: self.vertices,
            edges: self.edges,
            vertex_ids: Vec::new(),
            edge_ids: Vec::new(),
        };
        graph.rebuild_id_caches();
        graph
    }
}

/// Convenience alias used by fixture helpers that want to look a vertex up
/// by a human-readable name while building a graph.
pub type NamedVertices = HashMap<&'static str, VertexId>;

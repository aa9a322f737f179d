//! Mapping and paint state owned by the search engine.

use crate::graph::{EdgeId, VertexId};

/// The partial injective functions `v_map`/`e_map` from pattern vertices and
/// edges to the target vertices/edges they are currently bound to.
#[derive(Debug)]
pub(crate) struct Assignment {
    v_map: Vec<Option<VertexId>>,
    e_map: Vec<Option<EdgeId>>,
}

impl Assignment {
    pub(crate) fn new(pattern_vertex_count: usize, pattern_edge_count: usize) -> Self {
        Self {
            v_map: vec![None; pattern_vertex_count],
            e_map: vec![None; pattern_edge_count],
        }
    }

    pub(crate) fn vertex(&self, p: VertexId) -> Option<VertexId> {
        self.v_map[p.index()]
    }

    pub(crate) fn set_vertex(&mut self, p: VertexId, t: VertexId) {
        self.v_map[p.index()] = Some(t);
    }

    pub(crate) fn clear_vertex(&mut self, p: VertexId) {
        self.v_map[p.index()] = None;
    }

    pub(crate) fn set_edge(&mut self, p: EdgeId, t: EdgeId) {
        self.e_map[p.index()] = Some(t);
    }

    pub(crate) fn clear_edge(&mut self, p: EdgeId) {
        self.e_map[p.index()] = None;
    }

    pub(crate) fn vertex_map(&self) -> &[Option<VertexId>] {
        &self.v_map
    }

    pub(crate) fn edge_map(&self) -> &[Option<EdgeId>] {
        &self.e_map
    }
}

/// The paint set over `V(T) ∪ E(T)`: which target vertices/edges currently
/// participate in a mapping.
///
/// Split into two layers. The search layer is what the engine itself paints
/// and unpaints as it descends and backtracks through the plan. The
/// exclusion layer is set by the iterator layer (to keep target objects
/// already spent by a previously yielded match out of consideration when
/// `overlap = false`) and is never touched by backtracking.
#[derive(Debug)]
pub(crate) struct PaintSet {
    search_vertices: Vec<bool>,
    search_edges: Vec<bool>,
    excluded_vertices: Vec<bool>,
    excluded_edges: Vec<bool>,
}

impl PaintSet {
    pub(crate) fn new(target_vertex_count: usize, target_edge_count: usize) -> Self {
        Self {
            search_vertices: vec![false; target_vertex_count],
            search_edges: vec![false; target_edge_count],
            excluded_vertices: vec![false; target_vertex_count],
            excluded_edges: vec![false; target_edge_count],
        }
    }

    pub(crate) fn is_vertex_painted(&self, v: VertexId) -> bool {
        self.search_vertices[v.index()] || self.excluded_vertices[v.index()]
    }

    pub(crate) fn is_edge_painted(&self, e: EdgeId) -> bool {
        self.search_edges[e.index()] || self.excluded_edges[e.index()]
    }

    pub(crate) fn paint_vertex(&mut self, v: VertexId) {
        self.search_vertices[v.index()] = true;
    }

    pub(crate) fn unpaint_vertex(&mut self, v: VertexId) {
        self.search_vertices[v.index()] = false;
    }

    pub(crate) fn paint_edge(&mut self, e: EdgeId) {
        self.search_edges[e.index()] = true;
    }

    pub(crate) fn unpaint_edge(&mut self, e: EdgeId) {
        self.search_edges[e.index()] = false;
    }

    /// Resets the search-owned paint to empty; the exclusion layer is left
    /// untouched. Called whenever the engine is rebound to a new anchor.
    pub(crate) fn clear_search(&mut self) {
        self.search_vertices.iter_mut().for_each(|p| *p = false);
        self.search_edges.iter_mut().for_each(|p| *p = false);
    }

    pub(crate) fn exclude_vertex(&mut self, v: VertexId) {
        self.excluded_vertices[v.index()] = true;
    }

    pub(crate) fn exclude_edge(&mut self, e: EdgeId) {
        self.excluded_edges[e.index()] = true;
    }

    pub(crate) fn is_vertex_excluded(&self, v: VertexId) -> bool {
        self.excluded_vertices[v.index()]
    }
}

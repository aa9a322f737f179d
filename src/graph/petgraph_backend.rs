//! Adapter so callers who already keep molecules in a
//! [`petgraph::Graph`](petgraph::graph::Graph) can hand them straight to
//! [`crate::Matcher`] without going through [`super::ArenaGraph`].
//!
//! Only the undirected case is supported: the matcher's data model is
//! explicitly undirected, and `petgraph::Undirected` is the only
//! `petgraph::EdgeType` for which "the edge's two endpoints" (as opposed to
//! "source" and "target") is a meaningful phrase.

use petgraph::graph::{EdgeIndex, IndexType, NodeIndex};
use petgraph::Undirected;

use super::{EdgeId, Graph, VertexId};

/// Wraps a `petgraph::Graph<V, E, Undirected, Ix>` so it can serve as a
/// pattern or a target. Built once up front (`PetgraphView::new`) because
/// the [`Graph`] trait hands back index-addressed incidence lists by
/// reference, and petgraph's own iterators borrow the graph rather than
/// precomputing that shape.
pub struct PetgraphView<'g, V, E, Ix: IndexType> {
    inner: &'g petgraph::Graph<V, E, Undirected, Ix>,
    vertex_ids: Vec<VertexId>,
    edge_ids: Vec<EdgeId>,
    incident: Vec<Vec<(EdgeId, VertexId)>>,
    endpoints: Vec<(VertexId, VertexId)>,
}

impl<'g, V, E, Ix: IndexType> PetgraphView<'g, V, E, Ix> {
    pub fn new(inner: &'g petgraph::Graph<V, E, Undirected, Ix>) -> Self {
        use petgraph::visit::EdgeRef;

        let vertex_ids: Vec<VertexId> = (0..inner.node_count() as u32).map(VertexId).collect();
        let edge_ids: Vec<EdgeId> = (0..inner.edge_count() as u32).map(EdgeId).collect();

        let to_vid = |n: NodeIndex<Ix>| VertexId(n.index() as u32);

        let mut endpoints = vec![(VertexId(0), VertexId(0)); inner.edge_count()];
        let mut incident = vec![Vec::new(); inner.node_count()];
        for e in inner.edge_references() {
            let eid = EdgeId(e.id().index() as u32);
            let a = to_vid(e.source());
            let b = to_vid(e.target());
            endpoints[eid.index()] = (a, b);
            incident[a.index()].push((eid, b));
            if a != b {
                incident[b.index()].push((eid, a));
            }
        }

        Self {
            inner,
            vertex_ids,
            edge_ids,
            incident,
            endpoints,
        }
    }
}

impl<'g, V, E, Ix: IndexType> Graph for PetgraphView<'g, V, E, Ix> {
    type VertexLabel = V;
    type EdgeLabel = E;

    fn vertices(&self) -> &[VertexId] {
        &self.vertex_ids
    }

    fn edges(&self) -> &[EdgeId] {
        &self.edge_ids
    }

    fn edges_of(&self, v: VertexId) -> &[(EdgeId, VertexId)] {
        &self.incident[v.index()]
    }

    fn endpoints(&self, e: EdgeId) -> (VertexId, VertexId) {
        self.endpoints[e.index()]
    }

    fn vertex_label(&self, v: VertexId) -> &V {
        self.inner
            .node_weight(NodeIndex::new(v.index()))
            .expect("vertex handle outlived the petgraph it was built from")
    }

    fn edge_label(&self, e: EdgeId) -> &E {
        self.inner
            .edge_weight(EdgeIndex::new(e.index()))
            .expect("edge handle outlived the petgraph it was built from")
    }
}

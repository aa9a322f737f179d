//! Everywhere a graph is used as a pattern or a target within this crate, it
//! is required to implement the [`Graph`] trait.
//!
//! This indirection allows the matching core to stay agnostic of storage:
//! the crate ships [`arena::ArenaGraph`] as its first-class, arena-backed
//! implementation, and [`petgraph_backend`] adapts `petgraph::Graph` for
//! callers who already keep their molecules in a petgraph graph.
//!
//! Implementors must present their vertices and edges in a *stable* order:
//! two calls to [`Graph::vertices`] (or [`Graph::edges_of`]) on the same,
//! unmutated graph must yield the same sequence. The search engine's
//! determinism guarantee depends on it.

mod arena;
mod file_io;
mod petgraph_backend;
mod print;

pub use arena::{ArenaGraph, ArenaGraphBuilder};
pub use file_io::{GraphReadWriter, JsonGraphReadWriter};
pub use petgraph_backend::PetgraphView;
pub use print::VizDotGraph;

/// A handle to a vertex, valid for the lifetime of the [`Graph`] it was
/// obtained from. Opaque on purpose — callers should not assume anything
/// about its numeric value beyond equality and use as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct VertexId(pub(crate) u32);

/// A handle to an edge, valid for the lifetime of the [`Graph`] it was
/// obtained from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct EdgeId(pub(crate) u32);

impl VertexId {
    /// Returns the dense `0..vertex_count()` index backing this handle.
    /// Used by the engine's paint bitset and by fixture tests that want to
    /// print `a1, a2, ...`-style labels.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl EdgeId {
    /// Returns the dense `0..edge_count()` index backing this handle.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Generic interface for a labeled, undirected graph: a pattern P or a
/// target T in the matcher's terms.
///
/// `VertexLabel`/`EdgeLabel` are the opaque per-element labels the default
/// predicates (element-label / order-label equality) compare; the matching
/// core otherwise never inspects them directly.
pub trait Graph {
    type VertexLabel;
    type EdgeLabel;

    /// All vertices, in stable insertion order.
    fn vertices(&self) -> &[VertexId];

    /// All edges, in stable insertion order.
    fn edges(&self) -> &[EdgeId];

    /// The edges incident to `v`, each paired with `v`'s neighbor across
    /// that edge, in stable order.
    fn edges_of(&self, v: VertexId) -> &[(EdgeId, VertexId)];

    /// The two endpoints of `e`, in no particular order (the graph is
    /// undirected).
    fn endpoints(&self, e: EdgeId) -> (VertexId, VertexId);

    fn vertex_label(&self, v: VertexId) -> &Self::VertexLabel;

    fn edge_label(&self, e: EdgeId) -> &Self::EdgeLabel;

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Given an edge incident to `from`, returns the endpoint that is not
    /// `from`. Panics if `e` is not incident to `from` — the engine only
    /// ever calls this with edges drawn from [`Graph::edges_of`].
    fn other_end(&self, e: EdgeId, from: VertexId) -> VertexId {
        let (a, b) = self.endpoints(e);
        if a == from {
            b
        } else if b == from {
            a
        } else {
            panic!("edge {e:?} is not incident to vertex {from:?}");
        }
    }
}

impl std::fmt::Debug for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl std::fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

//! Component A: pattern vertices/edges and their label predicates.
//!
//! A pattern is an [`ArenaGraph`](crate::graph::ArenaGraph) whose vertex and
//! edge labels are [`PatternVertex`]/[`PatternEdge`] wrappers: each pairs the
//! caller's real label (an element symbol, a bond order, ...) with an
//! optional predicate that overrides the default label-equality test.

mod predicate;

pub use predicate::{Predicate, PatternEdge, PatternVertex};

use crate::graph::{ArenaGraph, ArenaGraphBuilder, EdgeId, VertexId};

/// An `ArenaGraph` specialized so its vertex/edge weights carry the caller's
/// label plus an optional match predicate: the pattern graph searched for
/// inside a target graph.
pub type Pattern<VertexLabel, EdgeLabel> =
    ArenaGraph<PatternVertex<VertexLabel>, PatternEdge<EdgeLabel>>;

/// Builder for a [`Pattern`]. Thin wrapper over [`ArenaGraphBuilder`] that
/// accepts optional predicates instead of bare labels.
#[derive(Default)]
pub struct PatternBuilder<VertexLabel, EdgeLabel> {
    inner: ArenaGraphBuilder<PatternVertex<VertexLabel>, PatternEdge<EdgeLabel>>,
}

impl<VertexLabel, EdgeLabel> PatternBuilder<VertexLabel, EdgeLabel>
where
    VertexLabel: PartialEq + 'static,
    EdgeLabel: PartialEq + 'static,
{
    pub fn new() -> Self {
        Self {
            inner: ArenaGraphBuilder::new(),
        }
    }

    /// Adds a pattern vertex matched by plain label equality.
    pub fn add_vertex(&mut self, label: VertexLabel) -> VertexId {
        self.inner.add_vertex(PatternVertex::new(label))
    }

    /// Adds a pattern vertex matched by a caller-supplied predicate,
    /// overriding the default label-equality test.
    ///
    /// `predicate(pattern_label, target_label)` is called with the pattern
    /// vertex's own label and a candidate target vertex's label, in that
    /// order, and exactly once per candidate — it is never called with the
    /// arguments swapped, so an asymmetric predicate is safe to write but is
    /// the caller's responsibility to get right.
    pub fn add_vertex_with_predicate<F>(&mut self, label: VertexLabel, predicate: F) -> VertexId
    where
        F: Fn(&VertexLabel, &VertexLabel) -> bool + 'static,
    {
        self.inner
            .add_vertex(PatternVertex::with_predicate(label, predicate))
    }

    /// Adds a pattern edge matched by plain label equality.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, label: EdgeLabel) -> EdgeId {
        self.inner.add_edge(a, b, PatternEdge::new(label))
    }

    /// Adds a pattern edge matched by a caller-supplied predicate.
    pub fn add_edge_with_predicate<F>(
        &mut self,
        a: VertexId,
        b: VertexId,
        label: EdgeLabel,
        predicate: F,
    ) -> EdgeId
    where
        F: Fn(&EdgeLabel, &EdgeLabel) -> bool + 'static,
    {
        self.inner
            .add_edge(a, b, PatternEdge::with_predicate(label, predicate))
    }

    pub fn build(self) -> Pattern<VertexLabel, EdgeLabel> {
        self.inner.build()
    }
}

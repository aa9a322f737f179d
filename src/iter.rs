//! Component D: anchor progression, duplicate suppression, and the
//! `overlap` discipline, layered over [`SearchEngine`].

use std::collections::{HashSet, VecDeque};

use crate::engine::{Advance, SearchEngine};
use crate::graph::{EdgeId, Graph, VertexId};
use crate::pattern::{PatternEdge, PatternVertex};
use crate::MatcherOptions;

/// One complete, injective mapping from pattern vertices/edges to target
/// vertices/edges, in pattern insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub vertex_map: Vec<VertexId>,
    pub edge_map: Vec<EdgeId>,
}

/// The canonical key used to suppress duplicate matches. An ordered tuple
/// of target identities when `permute = true`; the same tuple sorted when
/// `permute = false`, so that two correspondences covering the same target
/// objects collapse to one.
type MatchKey = Vec<u32>;

/// Drives [`SearchEngine`] across every anchor of the target, yielding one
/// [`Match`] per call to [`MatchIter::next`] until the target is exhausted.
pub struct MatchIter<'p, 't, P, T, VL, EL>
where
    P: Graph<VertexLabel = PatternVertex<VL>, EdgeLabel = PatternEdge<EL>>,
    T: Graph<VertexLabel = VL, EdgeLabel = EL>,
    VL: PartialEq,
    EL: PartialEq,
{
    engine: SearchEngine<'p, 't, P, T, VL, EL>,
    anchor_queue: VecDeque<VertexId>,
    yielded: HashSet<MatchKey>,
    options: MatcherOptions,
}

impl<'p, 't, P, T, VL, EL> MatchIter<'p, 't, P, T, VL, EL>
where
    P: Graph<VertexLabel = PatternVertex<VL>, EdgeLabel = PatternEdge<EL>>,
    T: Graph<VertexLabel = VL, EdgeLabel = EL>,
    VL: PartialEq,
    EL: PartialEq,
{
    pub fn new(engine: SearchEngine<'p, 't, P, T, VL, EL>, target: &'t T, options: MatcherOptions) -> Self {
        Self {
            engine,
            anchor_queue: target.vertices().iter().copied().collect(),
            yielded: HashSet::new(),
            options,
        }
    }

    /// Returns the next match, or `None` once every anchor has been
    /// exhausted.
    pub fn next(&mut self) -> Option<Match> {
        loop {
            match self.engine.advance() {
                Advance::Matched => {
                    let key = self.match_key();
                    if !self.yielded.insert(key) {
                        continue;
                    }
                    let result = self.current_match();
                    if !self.options.overlap {
                        self.exclude_match(&result);
                        if !self.advance_to_next_anchor() {
                            self.engine.abandon();
                        }
                    }
                    return Some(result);
                }
                Advance::Exhausted => {
                    if !self.advance_to_next_anchor() {
                        return None;
                    }
                }
            }
        }
    }

    fn advance_to_next_anchor(&mut self) -> bool {
        while let Some(t0) = self.anchor_queue.pop_front() {
            if !self.options.overlap && self.engine.is_target_vertex_excluded(t0) {
                continue;
            }
            self.engine.bind_anchor(t0);
            return true;
        }
        false
    }

    fn current_match(&self) -> Match {
        let vertex_map = self
            .engine
            .current_vertex_map()
            .iter()
            .map(|v| v.expect("a completed match maps every pattern vertex"))
            .collect();
        let edge_map = self
            .engine
            .current_edge_map()
            .iter()
            .map(|e| e.expect("a completed match maps every pattern edge"))
            .collect();
        Match { vertex_map, edge_map }
    }

    fn match_key(&self) -> MatchKey {
        let mut vertices: Vec<u32> = self
            .engine
            .current_vertex_map()
            .iter()
            .map(|v| v.expect("a completed match maps every pattern vertex").index() as u32)
            .collect();
        let mut edges: Vec<u32> = self
            .engine
            .current_edge_map()
            .iter()
            .map(|e| e.expect("a completed match maps every pattern edge").index() as u32)
            .collect();
        // Sorted independently, never mixed: vertex ids and edge ids share a
        // numeric namespace (both start at 0), so sorting them together
        // would let a vertex id stand in for an edge id in the key.
        if !self.options.permute {
            vertices.sort_unstable();
            edges.sort_unstable();
        }
        vertices.into_iter().chain(edges).collect()
    }

    /// Permanently excludes every target vertex/edge used by `m` so no
    /// future match may reuse them; implements `overlap = false`.
    fn exclude_match(&mut self, m: &Match) {
        for &v in &m.vertex_map {
            self.engine.exclude_target_vertex(v);
        }
        for &e in &m.edge_map {
            self.engine.exclude_target_edge(e);
        }
    }
}

//! Public entry point: wires the flattener, the search engine, and the
//! iterator/dedup layer together behind `bind`/`next_match`.

use std::rc::Rc;

use crate::config::MatcherOptions;
use crate::engine::SearchEngine;
use crate::error::MatchError;
use crate::flatten::{flatten, Plan};
use crate::graph::{EdgeId, Graph, VertexId};
use crate::iter::{Match, MatchIter};
use crate::pattern::{PatternEdge, PatternVertex};

/// Matches a pattern graph `P` against target graphs `T`, one bind at a
/// time.
///
/// A `Matcher` is constructed once against a pattern and reused across
/// targets via [`Matcher::bind`]; each bind resets all search state. The
/// instance owns no global state and is `!Send`/`!Sync` in spirit — nothing
/// about the search may cross a thread boundary mid-match.
pub struct Matcher<'p, P, VL, EL>
where
    P: Graph<VertexLabel = PatternVertex<VL>, EdgeLabel = PatternEdge<EL>>,
    VL: PartialEq,
    EL: PartialEq,
{
    pattern: &'p P,
    plan: Rc<Plan>,
    options: MatcherOptions,
}

impl<'p, P, VL, EL> Matcher<'p, P, VL, EL>
where
    P: Graph<VertexLabel = PatternVertex<VL>, EdgeLabel = PatternEdge<EL>>,
    VL: PartialEq,
    EL: PartialEq,
{
    /// Builds a matcher for `pattern`. Fails with [`MatchError::EmptyPattern`]
    /// if the pattern has no vertices — there would be nothing to anchor a
    /// search on — or with [`MatchError::MalformedGraph`] if any pattern
    /// edge names an endpoint outside the pattern's own vertices.
    pub fn new(pattern: &'p P, options: MatcherOptions) -> Result<Self, MatchError> {
        if pattern.vertex_count() == 0 {
            return Err(MatchError::EmptyPattern);
        }
        check_edges_in_range(pattern)?;
        Ok(Self {
            pattern,
            plan: Rc::new(flatten(pattern)),
            options,
        })
    }

    /// (Re)binds the matcher to `target`, discarding any in-progress search
    /// and duplicate-suppression state from a previous bind. Fails with
    /// [`MatchError::MalformedGraph`] if any target edge names an endpoint
    /// outside the target's own vertices; no engine or iterator state is
    /// constructed in that case.
    pub fn bind<'t, T>(&self, target: &'t T) -> Result<Bound<'p, 't, P, T, VL, EL>, MatchError>
    where
        T: Graph<VertexLabel = VL, EdgeLabel = EL>,
    {
        check_edges_in_range(target)?;
        let engine = SearchEngine::new(self.pattern, Rc::clone(&self.plan), target);
        Ok(Bound {
            iter: MatchIter::new(engine, target, self.options),
            current: None,
        })
    }
}

/// Checks that every edge of `graph` names two endpoints within
/// `0..graph.vertex_count()`. Shared between [`Matcher::new`] (over the
/// pattern) and [`Matcher::bind`] (over the target) since both are graphs a
/// hand-rolled [`Graph`] implementor could report inconsistently.
fn check_edges_in_range<G: Graph>(graph: &G) -> Result<(), MatchError> {
    let vertex_count = graph.vertex_count();
    for &e in graph.edges() {
        let (a, b) = graph.endpoints(e);
        if a.index() >= vertex_count || b.index() >= vertex_count {
            return Err(MatchError::MalformedGraph {
                detail: format!("edge {e:?} references a vertex outside the graph's {vertex_count} vertices"),
            });
        }
    }
    Ok(())
}

/// A [`Matcher`] bound to one target: the live search/dedup state that
/// `next_match` advances.
pub struct Bound<'p, 't, P, T, VL, EL>
where
    P: Graph<VertexLabel = PatternVertex<VL>, EdgeLabel = PatternEdge<EL>>,
    T: Graph<VertexLabel = VL, EdgeLabel = EL>,
    VL: PartialEq,
    EL: PartialEq,
{
    iter: MatchIter<'p, 't, P, T, VL, EL>,
    current: Option<Match>,
}

impl<'p, 't, P, T, VL, EL> Bound<'p, 't, P, T, VL, EL>
where
    P: Graph<VertexLabel = PatternVertex<VL>, EdgeLabel = PatternEdge<EL>>,
    T: Graph<VertexLabel = VL, EdgeLabel = EL>,
    VL: PartialEq,
    EL: PartialEq,
{
    /// Returns the next match, or `None` once the bound target is
    /// exhausted. Further calls after exhaustion keep returning `None`.
    pub fn next_match(&mut self) -> Option<Match> {
        let found = self.iter.next();
        self.current = found.clone();
        found
    }

    /// The target-vertex map of the most recently returned match, in
    /// pattern-vertex insertion order. `None` before the first match or
    /// after exhaustion.
    pub fn current_vertex_map(&self) -> Option<&[VertexId]> {
        self.current.as_ref().map(|m| m.vertex_map.as_slice())
    }

    /// The target-edge map of the most recently returned match, in
    /// pattern-edge insertion order.
    pub fn current_edge_map(&self) -> Option<&[EdgeId]> {
        self.current.as_ref().map(|m| m.edge_map.as_slice())
    }
}

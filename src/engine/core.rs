//! Component C: the resumable backtracking search engine.

use std::rc::Rc;

use crate::flatten::{Plan, Step};
use crate::graph::{EdgeId, Graph, VertexId};
use crate::pattern::{PatternEdge, PatternVertex};

use super::frame::{Effect, Frame};
use super::state::{Assignment, PaintSet};

/// Result of one call to [`SearchEngine::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The plan was completed: a full, injective mapping is parked in the
    /// engine's `v_map`/`e_map`. The next call to `advance` backs out of it
    /// and resumes the search for a different mapping.
    Matched,
    /// No further mappings exist from the current anchor.
    Exhausted,
}

/// Drives one pattern-against-one-anchor backtracking search over the plan
/// produced by [`crate::flatten::flatten`].
///
/// The engine owns all mutable search state (the partial mapping, the
/// paint set, the exploration stack) and is reused across every anchor the
/// iterator layer tries by calling [`SearchEngine::bind_anchor`], which
/// resets it in place.
pub struct SearchEngine<'p, 't, P, T, VL, EL>
where
    P: Graph<VertexLabel = PatternVertex<VL>, EdgeLabel = PatternEdge<EL>>,
    T: Graph<VertexLabel = VL, EdgeLabel = EL>,
    VL: PartialEq,
    EL: PartialEq,
{
    pattern: &'p P,
    target: &'t T,
    plan: Rc<Plan>,
    anchor_target: Option<VertexId>,
    assignment: Assignment,
    paint: PaintSet,
    stack: Vec<Frame>,
}

impl<'p, 't, P, T, VL, EL> SearchEngine<'p, 't, P, T, VL, EL>
where
    P: Graph<VertexLabel = PatternVertex<VL>, EdgeLabel = PatternEdge<EL>>,
    T: Graph<VertexLabel = VL, EdgeLabel = EL>,
    VL: PartialEq,
    EL: PartialEq,
{
    pub fn new(pattern: &'p P, plan: Rc<Plan>, target: &'t T) -> Self {
        Self {
            pattern,
            target,
            plan,
            anchor_target: None,
            assignment: Assignment::new(pattern.vertex_count(), pattern.edge_count()),
            paint: PaintSet::new(target.vertex_count(), target.edge_count()),
            stack: Vec::with_capacity(plan.len() + 1),
        }
    }

    /// Permanently excludes a target vertex from every future search run by
    /// this engine, until [`Self::clear_exclusions`] is called. Used by the
    /// iterator layer to implement `overlap = false`.
    pub fn exclude_target_vertex(&mut self, v: VertexId) {
        self.paint.exclude_vertex(v);
    }

    /// See [`Self::exclude_target_vertex`].
    pub fn exclude_target_edge(&mut self, e: EdgeId) {
        self.paint.exclude_edge(e);
    }

    pub fn clear_exclusions(&mut self) {
        self.paint = PaintSet::new(self.target.vertex_count(), self.target.edge_count());
    }

    pub fn is_target_vertex_excluded(&self, v: VertexId) -> bool {
        self.paint.is_vertex_excluded(v)
    }

    /// (Re)initializes the engine for a fresh search anchored at `t0`:
    /// clears `v_map`/`e_map` and the search-owned paint, then pushes the
    /// bootstrap frame for plan position 0. Objects excluded via
    /// [`Self::exclude_target_vertex`]/[`Self::exclude_target_edge`] stay
    /// excluded.
    pub fn bind_anchor(&mut self, t0: VertexId) {
        self.anchor_target = Some(t0);
        self.assignment = Assignment::new(self.pattern.vertex_count(), self.pattern.edge_count());
        self.paint.clear_search();
        self.stack.clear();
        if !self.plan.is_empty() {
            self.stack.push(Frame::bootstrap());
        }
    }

    pub fn current_vertex_map(&self) -> &[Option<VertexId>] {
        self.assignment.vertex_map()
    }

    pub fn current_edge_map(&self) -> &[Option<EdgeId>] {
        self.assignment.edge_map()
    }

    /// Drops all search state, making the engine report [`Advance::Exhausted`]
    /// until the next [`Self::bind_anchor`]. Used by the iterator layer when
    /// no anchors remain after a non-overlapping match has excluded some of
    /// the target's vertices/edges mid-search.
    pub fn abandon(&mut self) {
        self.stack.clear();
        self.assignment = Assignment::new(self.pattern.vertex_count(), self.pattern.edge_count());
        self.anchor_target = None;
    }

    /// Advances the search by one match. See [`Advance`] for what each
    /// variant means for the next call.
    pub fn advance(&mut self) -> Advance {
        // A frame parked past the end of the plan is the match returned by
        // the previous call; back out of it before resuming the search.
        if let Some(top) = self.stack.last() {
            if top.step_index >= self.plan.len() {
                let popped = self.stack.pop().expect("checked Some above");
                self.undo(popped);
            }
        }

        loop {
            let Some(frame) = self.stack.last().copied() else {
                return Advance::Exhausted;
            };
            if frame.step_index >= self.plan.len() {
                return Advance::Matched;
            }

            let step = self.plan.steps()[frame.step_index];
            match self.try_candidates(step, frame.candidate_index) {
                Some((effect, resume_at)) => {
                    tracing::trace!(step = frame.step_index, ?effect, "matched step");
                    self.stack
                        .last_mut()
                        .expect("checked Some above")
                        .candidate_index = resume_at;
                    self.apply(effect);
                    self.stack.push(Frame::following(frame.step_index + 1, effect));
                }
                None => {
                    tracing::trace!(step = frame.step_index, "exhausted candidates, backtracking");
                    let popped = self.stack.pop().expect("checked Some above");
                    self.undo(popped);
                }
            }
        }
    }

    /// Tries candidates for `step` starting at `candidate_index`, returning
    /// the effect and the index to resume at on the next attempt, or `None`
    /// if no candidate works.
    fn try_candidates(&self, step: Step, candidate_index: usize) -> Option<(Effect, usize)> {
        match step {
            Step::Anchor(v_p) => {
                if candidate_index > 0 {
                    return None;
                }
                let t0 = self
                    .anchor_target
                    .expect("bind_anchor must be called before advance");
                if self.paint.is_vertex_painted(t0) {
                    return None;
                }
                if !self.pattern.vertex_label(v_p).accepts(self.target.vertex_label(t0)) {
                    return None;
                }
                Some((
                    Effect::Vertex {
                        pattern_vertex: v_p,
                        target_vertex: t0,
                    },
                    1,
                ))
            }
            Step::UnanchoredAnchor(v_p) => {
                let targets = self.target.vertices();
                for idx in candidate_index..targets.len() {
                    let t = targets[idx];
                    if self.paint.is_vertex_painted(t) {
                        continue;
                    }
                    if self.pattern.vertex_label(v_p).accepts(self.target.vertex_label(t)) {
                        return Some((
                            Effect::Vertex {
                                pattern_vertex: v_p,
                                target_vertex: t,
                            },
                            idx + 1,
                        ));
                    }
                }
                None
            }
            Step::Edge {
                edge,
                from_end,
                to_end,
            } => {
                let t_from = self
                    .assignment
                    .vertex(from_end)
                    .expect("from_end is always mapped before an Edge step runs");
                let incident = self.target.edges_of(t_from);
                for idx in candidate_index..incident.len() {
                    let (f, t_other) = incident[idx];
                    if self.paint.is_edge_painted(f) || self.paint.is_vertex_painted(t_other) {
                        continue;
                    }
                    if !self.pattern.edge_label(edge).accepts(self.target.edge_label(f)) {
                        continue;
                    }
                    if !self
                        .pattern
                        .vertex_label(to_end)
                        .accepts(self.target.vertex_label(t_other))
                    {
                        continue;
                    }
                    return Some((
                        Effect::EdgeAndVertex {
                            pattern_edge: edge,
                            target_edge: f,
                            pattern_vertex: to_end,
                            target_vertex: t_other,
                        },
                        idx + 1,
                    ));
                }
                None
            }
            Step::RingClose { edge, end_a, end_b } => {
                let t_a = self
                    .assignment
                    .vertex(end_a)
                    .expect("end_a is always mapped before a RingClose step runs");
                let t_b = self
                    .assignment
                    .vertex(end_b)
                    .expect("end_b is always mapped before a RingClose step runs");
                let incident = self.target.edges_of(t_a);
                for idx in candidate_index..incident.len() {
                    let (f, other) = incident[idx];
                    if other != t_b {
                        continue;
                    }
                    if self.paint.is_edge_painted(f) {
                        continue;
                    }
                    if !self.pattern.edge_label(edge).accepts(self.target.edge_label(f)) {
                        continue;
                    }
                    return Some((
                        Effect::Edge {
                            pattern_edge: edge,
                            target_edge: f,
                        },
                        idx + 1,
                    ));
                }
                None
            }
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Vertex {
                pattern_vertex,
                target_vertex,
            } => {
                self.paint.paint_vertex(target_vertex);
                self.assignment.set_vertex(pattern_vertex, target_vertex);
            }
            Effect::Edge {
                pattern_edge,
                target_edge,
            } => {
                self.paint.paint_edge(target_edge);
                self.assignment.set_edge(pattern_edge, target_edge);
            }
            Effect::EdgeAndVertex {
                pattern_edge,
                target_edge,
                pattern_vertex,
                target_vertex,
            } => {
                self.paint.paint_edge(target_edge);
                self.paint.paint_vertex(target_vertex);
                self.assignment.set_edge(pattern_edge, target_edge);
                self.assignment.set_vertex(pattern_vertex, target_vertex);
            }
        }
    }

    /// Undoes the effect recorded on a popped frame. A no-op for the
    /// bootstrap frame, which has no effect.
    fn undo(&mut self, frame: Frame) {
        let Some(effect) = frame.effect else {
            return;
        };
        match effect {
            Effect::Vertex {
                pattern_vertex,
                target_vertex,
            } => {
                self.paint.unpaint_vertex(target_vertex);
                self.assignment.clear_vertex(pattern_vertex);
            }
            Effect::Edge {
                pattern_edge,
                target_edge,
            } => {
                self.paint.unpaint_edge(target_edge);
                self.assignment.clear_edge(pattern_edge);
            }
            Effect::EdgeAndVertex {
                pattern_edge,
                target_edge,
                pattern_vertex,
                target_vertex,
            } => {
                self.paint.unpaint_edge(target_edge);
                self.paint.unpaint_vertex(target_vertex);
                self.assignment.clear_edge(pattern_edge);
                self.assignment.clear_vertex(pattern_vertex);
            }
        }
    }
}

//! Component B: the flattener.
//!
//! Turns a pattern graph into a linear [`Plan`] — a DFS pre-order walk
//! recorded as a `Vec<Step>` — so that the search engine (component C) can
//! drive the backtracking search as an iterative loop over stack frames
//! instead of a recursive graph walk. This is what makes matching resumable.

use std::collections::HashSet;

use crate::graph::{EdgeId, Graph, VertexId};

/// One step of a flattened DFS plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The first vertex of a connected component of the pattern; matched
    /// against the anchor vertex chosen by the iterator layer.
    Anchor(VertexId),
    /// The first vertex of a *subsequent* connected component; ranges over
    /// all currently-unused target vertices.
    UnanchoredAnchor(VertexId),
    /// A forward DFS edge: `from_end` is already mapped, `to_end` is not.
    Edge {
        edge: EdgeId,
        from_end: VertexId,
        to_end: VertexId,
    },
    /// A back edge, discovered when the DFS reaches an already-visited
    /// vertex: both ends are already mapped.
    RingClose {
        edge: EdgeId,
        end_a: VertexId,
        end_b: VertexId,
    },
}

/// The flattened plan for a pattern: an ordered sequence of [`Step`]s, one
/// per pattern vertex after the first in each connected component plus one
/// per pattern edge, in DFS order.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    steps: Vec<Step>,
}

impl Plan {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Flattens `pattern` into a [`Plan`] by DFS in stable vertex order,
/// emitting an `UnanchoredAnchor` step whenever a new connected component is
/// started after the first.
pub fn flatten<G: Graph>(pattern: &G) -> Plan {
    let mut steps = Vec::with_capacity(pattern.vertex_count() + pattern.edge_count());
    let mut visited_vertices: HashSet<VertexId> = HashSet::new();
    let mut visited_edges: HashSet<EdgeId> = HashSet::new();
    let mut first_component = true;

    for &start in pattern.vertices() {
        if visited_vertices.contains(&start) {
            continue;
        }

        if first_component {
            steps.push(Step::Anchor(start));
            first_component = false;
        } else {
            steps.push(Step::UnanchoredAnchor(start));
        }
        visited_vertices.insert(start);

        dfs_component(pattern, start, &mut visited_vertices, &mut visited_edges, &mut steps);
    }

    Plan { steps }
}

/// Explicit-stack DFS over one connected component, starting at `start`
/// (already marked visited and emitted by the caller). Emits `Edge` steps
/// when descending to an unvisited vertex and `RingClose` steps when an
/// edge leads back to an already-visited one.
///
/// Implemented iteratively (rather than by recursive calls) so the
/// flattener places no recursion-depth limit on how large a ring system the
/// pattern may describe.
fn dfs_component<G: Graph>(
    pattern: &G,
    start: VertexId,
    visited_vertices: &mut HashSet<VertexId>,
    visited_edges: &mut HashSet<EdgeId>,
    steps: &mut Vec<Step>,
) {
    // One frame per vertex currently on the DFS stack: the vertex itself
    // and how far we've gotten through its incidence list.
    let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];

    while let Some(&mut (v, ref mut next_incidence)) = stack.last_mut() {
        let incident = pattern.edges_of(v);
        if *next_incidence >= incident.len() {
            stack.pop();
            continue;
        }

        let (edge, neighbor) = incident[*next_incidence];
        *next_incidence += 1;

        if visited_edges.contains(&edge) {
            continue;
        }
        visited_edges.insert(edge);

        if visited_vertices.contains(&neighbor) {
            steps.push(Step::RingClose {
                edge,
                end_a: v,
                end_b: neighbor,
            });
        } else {
            steps.push(Step::Edge {
                edge,
                from_end: v,
                to_end: neighbor,
            });
            visited_vertices.insert(neighbor);
            stack.push((neighbor, 0));
        }
    }
}

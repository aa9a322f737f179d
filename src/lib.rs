//! A deterministic, resumable backtracking subgraph-isomorphism matcher
//! over labeled undirected graphs, built for chemical substructure search.
//!
//! Given a pattern graph `P` and a target graph `T`, [`Matcher`] finds every
//! injective mapping of `P` into `T` that respects per-vertex and per-edge
//! label predicates, with caller-tunable duplicate suppression (see
//! [`MatcherOptions`]).
//!
//! ```
//! use molmatch::graph::ArenaGraphBuilder;
//! use molmatch::pattern::PatternBuilder;
//! use molmatch::{Matcher, MatcherOptions};
//!
//! // Pattern: C-C (a plain carbon-carbon bond).
//! let mut pb = PatternBuilder::<&str, u8>::new();
//! let p1 = pb.add_vertex("C");
//! let p2 = pb.add_vertex("C");
//! pb.add_edge(p1, p2, 1);
//! let pattern = pb.build();
//!
//! // Target: C-C-O (ethanol's carbon skeleton, roughly).
//! let mut tb = ArenaGraphBuilder::<&str, u8>::new();
//! let t1 = tb.add_vertex("C");
//! let t2 = tb.add_vertex("C");
//! let t3 = tb.add_vertex("O");
//! tb.add_edge(t1, t2, 1);
//! tb.add_edge(t2, t3, 1);
//! let target = tb.build();
//!
//! let matcher = Matcher::new(&pattern, MatcherOptions::default()).unwrap();
//! let mut bound = matcher.bind(&target).unwrap();
//! assert!(bound.next_match().is_some());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod flatten;
pub mod graph;
mod iter;
mod matcher;
pub mod pattern;

pub use config::MatcherOptions;
pub use error::MatchError;
pub use iter::Match;
pub use matcher::{Bound, Matcher};

//! Component C: the stateful, resumable backtracking search engine.
//!
//! Builds on the flattened [`crate::flatten::Plan`] to turn subgraph
//! isomorphism search into an iterative walk over an explicit stack of
//! [`frame::Frame`]s, rather than a recursive graph traversal — so a caller
//! can pull one match at a time without the engine unwinding and redoing
//! work between calls.

mod core;
mod frame;
mod state;

pub use core::{Advance, SearchEngine};

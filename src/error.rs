//! Typed failures surfaced at the matcher's boundary.
//!
//! Exhaustion is not an error — it is `None` from [`crate::Matcher::next_match`].
//! Everything here is a programmer error: a malformed input the caller should
//! have caught before binding, not a condition the search backtracks past.

use thiserror::Error;

/// A programmer error raised at `bind` or `next_match` time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// The pattern has no vertices; there is nothing to anchor a search on.
    #[error("pattern graph has no vertices")]
    EmptyPattern,

    /// An edge's recorded endpoint is not a vertex of the graph it came
    /// from. Should be unreachable through `ArenaGraphBuilder`/`PetgraphView`,
    /// but a hand-rolled `Graph` implementor could violate it.
    #[error("malformed graph: {detail}")]
    MalformedGraph { detail: String },

    /// An option key the caller passed was not recognized.
    #[error("unknown matcher option: {key}")]
    UnknownOption { key: String },
}

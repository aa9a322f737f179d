//! Matcher configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Duplicate-suppression options passed to [`crate::Matcher::new`].
///
/// Round-trips through `serde_json` the same way `ArenaGraph` does, so a
/// caller can keep a matcher's options next to its graph fixtures on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherOptions {
    /// When `false`, no two yielded matches may share a target vertex or
    /// edge. When `true` (the default), matches are only deduplicated by
    /// their match key; they may otherwise overlap freely.
    #[serde(default = "default_overlap")]
    pub overlap: bool,

    /// When `true`, two mappings that cover the same target vertices/edges
    /// but assign them to different pattern elements are both yielded. When
    /// `false` (the default), only the first such mapping is yielded.
    #[serde(default)]
    pub permute: bool,
}

fn default_overlap() -> bool {
    true
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            overlap: true,
            permute: false,
        }
    }
}

impl MatcherOptions {
    /// Builds options from a loosely-typed key/value map, the shape a caller
    /// gets back from a generic config file or CLI flag parser rather than
    /// from constructing this struct directly. Unset keys fall back to the
    /// documented defaults; any key other than `overlap`/`permute` is
    /// rejected rather than silently ignored.
    pub fn from_map(raw: &HashMap<String, bool>) -> Result<Self, MatchError> {
        let mut opts = Self::default();
        for (key, &value) in raw {
            match key.as_str() {
                "overlap" => opts.overlap = value,
                "permute" => opts.permute = value,
                other => {
                    return Err(MatchError::UnknownOption {
                        key: other.to_string(),
                    })
                }
            }
        }
        Ok(opts)
    }
}

//! Serializing and deserializing [`ArenaGraph`]s to/from files via a small
//! `GraphReadWriter` trait. File I/O is not part of the matching core itself;
//! this module exists so callers assembling test fixtures or demo data have
//! somewhere to put graphs between runs.

use std::fs::File;
use std::io;

use serde::{de::DeserializeOwned, Serialize};

use super::ArenaGraph;

/// Serializes/deserializes a graph to/from a file.
pub trait GraphReadWriter<VertexLabel, EdgeLabel> {
    fn serialize_graph(&self, path: &str, graph: &ArenaGraph<VertexLabel, EdgeLabel>) -> io::Result<()>;

    fn deserialize_graph(&self, path: &str) -> io::Result<Box<ArenaGraph<VertexLabel, EdgeLabel>>>;
}

/// The only `GraphReadWriter` this crate ships: plain JSON via `serde_json`.
#[derive(Default)]
pub struct JsonGraphReadWriter;

impl JsonGraphReadWriter {
    pub fn new() -> Self {
        Self
    }
}

impl<VertexLabel, EdgeLabel> GraphReadWriter<VertexLabel, EdgeLabel> for JsonGraphReadWriter
where
    VertexLabel: Serialize + DeserializeOwned,
    EdgeLabel: Serialize + DeserializeOwned,
{
    fn serialize_graph(&self, path: &str, graph: &ArenaGraph<VertexLabel, EdgeLabel>) -> io::Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer(file, graph).map_err(io::Error::from)
    }

    fn deserialize_graph(&self, path: &str) -> io::Result<Box<ArenaGraph<VertexLabel, EdgeLabel>>> {
        let file = File::open(path)?;
        let mut graph: ArenaGraph<VertexLabel, EdgeLabel> =
            serde_json::from_reader(file).map_err(io::Error::from)?;
        // `vertex_ids`/`edge_ids` are not part of the wire format (they are
        // a pure function of length) — rebuild them post-deserialization.
        graph.rebuild_id_caches();
        Ok(Box::new(graph))
    }
}

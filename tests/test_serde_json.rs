//! Round-trips `ArenaGraph` through `JsonGraphReadWriter`, and checks the
//! same read/write failure cases the file I/O layer is expected to surface
//! as plain `io::Error`s.

mod common;

use molmatch::graph::{ArenaGraphBuilder, GraphReadWriter, JsonGraphReadWriter};
use molmatch::graph::Graph as _;
use test_dir::{DirBuilder, TestDir};

const NAME_TO_READ_AND_WRITE: &str = "graph.json";
const EMPTY_FILE_NAME: &str = "empty.json";
const MISSING_NAME: &str = "missing.json";
const MISSING_DIR_NAME: &str = "missing_dir/unwritable_file.json";

fn sample_graph() -> molmatch::graph::ArenaGraph<String, String> {
    let mut b = ArenaGraphBuilder::<String, String>::new();
    let c1 = b.add_vertex("C".to_string());
    let c2 = b.add_vertex("C".to_string());
    let o = b.add_vertex("O".to_string());
    b.add_edge(c1, c2, "single".to_string());
    b.add_edge(c2, o, "single".to_string());
    b.build()
}

fn append_path(dir: &TestDir, path: &str) -> String {
    dir.path(path).to_str().unwrap().to_string()
}

#[test]
fn graph_round_trips_through_json() {
    common::setup_test_logging();
    let dir = TestDir::current_rnd();
    let rw = JsonGraphReadWriter::new();
    let original = sample_graph();

    rw.serialize_graph(&append_path(&dir, NAME_TO_READ_AND_WRITE), &original)
        .unwrap();
    let restored = rw
        .deserialize_graph(&append_path(&dir, NAME_TO_READ_AND_WRITE))
        .unwrap();

    assert_eq!(restored.vertex_count(), original.vertex_count());
    assert_eq!(restored.edge_count(), original.edge_count());
    for &v in original.vertices() {
        assert_eq!(restored.vertex_label(v), original.vertex_label(v));
    }
    for &e in original.edges() {
        assert_eq!(restored.edge_label(e), original.edge_label(e));
        assert_eq!(restored.endpoints(e), original.endpoints(e));
    }
}

#[test]
fn reading_a_missing_or_empty_file_fails() {
    let dir = TestDir::temp().create(EMPTY_FILE_NAME, test_dir::FileType::EmptyFile);
    let rw = JsonGraphReadWriter::new();

    let read_attempt: std::io::Result<Box<molmatch::graph::ArenaGraph<String, String>>> =
        rw.deserialize_graph(&append_path(&dir, MISSING_NAME));
    let err = read_attempt.expect_err("read from a missing file should fail");
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);

    let read_attempt: std::io::Result<Box<molmatch::graph::ArenaGraph<String, String>>> =
        rw.deserialize_graph(&append_path(&dir, EMPTY_FILE_NAME));
    let err = read_attempt.expect_err("read from an empty file should fail");
    assert_eq!(err.kind(), std::io::ErrorKind::Other);
    assert!(err.into_inner().is_some());
}

#[test]
fn writing_into_a_nonexistent_directory_fails() {
    let dir = TestDir::temp();
    let rw = JsonGraphReadWriter::new();
    let graph = molmatch::graph::ArenaGraph::<String, String>::default();

    let write_attempt = rw.serialize_graph(&append_path(&dir, MISSING_DIR_NAME), &graph);
    let err = write_attempt.expect_err("write into a nonexistent directory should fail");
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

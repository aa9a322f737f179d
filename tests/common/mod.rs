//! Shared fixtures for the integration tests: small molecule-shaped graphs
//! built directly with `ArenaGraphBuilder`/`PatternBuilder` rather than
//! through a SMILES parser (parsing chemical notation is not part of this
//! crate). Bond orders are plain `u8`s: 1 = single, 2 = double, 3 = triple.

use std::sync::Once;

use molmatch::graph::{ArenaGraph, ArenaGraphBuilder};
use molmatch::pattern::{Pattern, PatternBuilder};

static INIT: Once = Once::new();

/// Turns on `tracing` output for the backtracking search, gated behind
/// `RUST_LOG` so a plain `cargo test` stays quiet. Safe to call from every
/// test; only the first call does anything.
pub fn setup_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A straight chain of `n` carbons joined by single bonds — the shape of
/// the SMILES string `CCCC...` (`n` repetitions of `C`).
pub fn carbon_chain(n: usize) -> ArenaGraph<&'static str, u8> {
    let mut b = ArenaGraphBuilder::<&str, u8>::new();
    let mut prev = None;
    for _ in 0..n {
        let v = b.add_vertex("C");
        if let Some(p) = prev {
            b.add_edge(p, v, 1);
        }
        prev = Some(v);
    }
    b.build()
}

/// The pattern `CC`: two carbons joined by a single bond.
pub fn pattern_cc() -> Pattern<&'static str, u8> {
    let mut b = PatternBuilder::<&str, u8>::new();
    let c1 = b.add_vertex("C");
    let c2 = b.add_vertex("C");
    b.add_edge(c1, c2, 1);
    b.build()
}

/// The pattern `CN`: a carbon single-bonded to a nitrogen.
pub fn pattern_cn() -> Pattern<&'static str, u8> {
    let mut b = PatternBuilder::<&str, u8>::new();
    let c = b.add_vertex("C");
    let n = b.add_vertex("N");
    b.add_edge(c, n, 1);
    b.build()
}

/// The target `CCO`: ethanol's heavy-atom skeleton (C-C-O, all single bonds).
pub fn target_cco() -> ArenaGraph<&'static str, u8> {
    let mut b = ArenaGraphBuilder::<&str, u8>::new();
    let c1 = b.add_vertex("C");
    let c2 = b.add_vertex("C");
    let o = b.add_vertex("O");
    b.add_edge(c1, c2, 1);
    b.add_edge(c2, o, 1);
    b.build()
}

/// The pattern `C(=O)Cl`: a carbon double-bonded to oxygen and
/// single-bonded to chlorine (an acyl chloride carbon).
pub fn pattern_acyl_chloride() -> Pattern<&'static str, u8> {
    let mut b = PatternBuilder::<&str, u8>::new();
    let c = b.add_vertex("C");
    let o = b.add_vertex("O");
    let cl = b.add_vertex("Cl");
    b.add_edge(c, o, 2);
    b.add_edge(c, cl, 1);
    b.build()
}

/// The target `C1CCCC1C(Cl)=O`: cyclopentane with an acyl chloride
/// substituent on the ring-closing carbon. Returns the graph plus the
/// handles of the acyl carbon, its oxygen, and its chlorine, so tests can
/// assert on the expected mapping without guessing insertion order.
pub struct AcylCyclopentane {
    pub graph: ArenaGraph<&'static str, u8>,
    pub acyl_carbon: molmatch::graph::VertexId,
    pub oxygen: molmatch::graph::VertexId,
    pub chlorine: molmatch::graph::VertexId,
}

pub fn target_acyl_chloride_cyclopentane() -> AcylCyclopentane {
    let mut b = ArenaGraphBuilder::<&str, u8>::new();
    let r1 = b.add_vertex("C");
    let r2 = b.add_vertex("C");
    let r3 = b.add_vertex("C");
    let r4 = b.add_vertex("C");
    let r5 = b.add_vertex("C");
    b.add_edge(r1, r2, 1);
    b.add_edge(r2, r3, 1);
    b.add_edge(r3, r4, 1);
    b.add_edge(r4, r5, 1);
    b.add_edge(r5, r1, 1);

    let acyl_carbon = b.add_vertex("C");
    let chlorine = b.add_vertex("Cl");
    let oxygen = b.add_vertex("O");
    b.add_edge(r5, acyl_carbon, 1);
    b.add_edge(acyl_carbon, chlorine, 1);
    b.add_edge(acyl_carbon, oxygen, 2);

    AcylCyclopentane {
        graph: b.build(),
        acyl_carbon,
        oxygen,
        chlorine,
    }
}

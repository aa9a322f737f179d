//! The concrete matching scenarios: one test per row of the scenario table,
//! built directly as `ArenaGraph`/`Pattern` values (see `tests/common`)
//! rather than by parsing the SMILES strings that motivate each shape.

mod common;

use molmatch::{Matcher, MatcherOptions};

fn vertex_ids(map: &[molmatch::graph::VertexId]) -> Vec<u32> {
    map.iter().map(|v| v.index() as u32).collect()
}

/// Scenario 1: `CC` against `CCCC`, `overlap = true, permute = false`.
/// Every adjacent pair matches once each, in anchor order.
#[test]
fn chain_overlapping_matches_every_adjacent_pair() {
    common::setup_test_logging();
    let pattern = common::pattern_cc();
    let target = common::carbon_chain(4);
    let matcher = Matcher::new(&pattern, MatcherOptions {
        overlap: true,
        permute: false,
    })
    .unwrap();
    let mut bound = matcher.bind(&target).unwrap();

    let mut matches = Vec::new();
    while let Some(m) = bound.next_match() {
        matches.push(vertex_ids(&m.vertex_map));
    }
    assert_eq!(matches, vec![vec![0, 1], vec![1, 2], vec![2, 3]]);
}

/// Scenario 2: same pattern/target, `overlap = false`: matches must not
/// share target vertices, so only every other pair survives.
#[test]
fn chain_non_overlapping_matches_are_vertex_disjoint() {
    let pattern = common::pattern_cc();
    let target = common::carbon_chain(4);
    let matcher = Matcher::new(&pattern, MatcherOptions {
        overlap: false,
        permute: false,
    })
    .unwrap();
    let mut bound = matcher.bind(&target).unwrap();

    let mut matches = Vec::new();
    while let Some(m) = bound.next_match() {
        matches.push(vertex_ids(&m.vertex_map));
    }
    assert_eq!(matches, vec![vec![0, 1], vec![2, 3]]);
}

/// Scenario 3: `CC` against `CC`, `overlap = true, permute = true`: both
/// orientations of the one edge are distinct matches.
#[test]
fn single_bond_self_match_yields_both_permutations() {
    let pattern = common::pattern_cc();
    let target = common::carbon_chain(2);
    let matcher = Matcher::new(&pattern, MatcherOptions {
        overlap: true,
        permute: true,
    })
    .unwrap();
    let mut bound = matcher.bind(&target).unwrap();

    let mut matches = Vec::new();
    while let Some(m) = bound.next_match() {
        matches.push(vertex_ids(&m.vertex_map));
    }
    assert_eq!(matches, vec![vec![0, 1], vec![1, 0]]);
}

/// Scenario 4: same as scenario 3 but `permute = false`: the two
/// orientations collapse into a single match.
#[test]
fn single_bond_self_match_collapses_without_permute() {
    let pattern = common::pattern_cc();
    let target = common::carbon_chain(2);
    let matcher = Matcher::new(&pattern, MatcherOptions::default()).unwrap();
    let mut bound = matcher.bind(&target).unwrap();

    let mut matches = Vec::new();
    while let Some(m) = bound.next_match() {
        matches.push(vertex_ids(&m.vertex_map));
    }
    assert_eq!(matches, vec![vec![0, 1]]);
}

/// Scenario 5: `C(=O)Cl` against cyclopentanecarbonyl chloride: exactly one
/// match, with the pattern's carbon/oxygen/chlorine landing on the acyl
/// carbon and its substituents.
#[test]
fn acyl_chloride_matches_only_the_exocyclic_carbon() {
    let pattern = common::pattern_acyl_chloride();
    let fixture = common::target_acyl_chloride_cyclopentane();
    let matcher = Matcher::new(&pattern, MatcherOptions::default()).unwrap();
    let mut bound = matcher.bind(&fixture.graph).unwrap();

    let m = bound.next_match().expect("the acyl chloride should match once");
    assert_eq!(m.vertex_map[0], fixture.acyl_carbon);
    assert_eq!(m.vertex_map[1], fixture.oxygen);
    assert_eq!(m.vertex_map[2], fixture.chlorine);
    assert!(bound.next_match().is_none());
}

/// Scenario 6: `CN` against `CCO`: no nitrogen in the target, so the
/// search exhausts immediately.
#[test]
fn pattern_with_absent_element_never_matches() {
    let pattern = common::pattern_cn();
    let target = common::target_cco();
    let matcher = Matcher::new(&pattern, MatcherOptions::default()).unwrap();
    let mut bound = matcher.bind(&target).unwrap();
    assert!(bound.next_match().is_none());
}

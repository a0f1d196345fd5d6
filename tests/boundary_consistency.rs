use four_russians_lcs::alphabet::PaddedPair;
use four_russians_lcs::grid::fill_grid;
use four_russians_lcs::{FourRussians, FourRussiansBuilder, Schedule};
use proptest::prelude::*;

/// Every materialized boundary cell must equal the full padded-grid DP.
fn check_against_full_grid(engine: &FourRussians, u: &[u8], v: &[u8]) -> Result<(), TestCaseError> {
    let grid = engine.assemble(u, v).unwrap();
    let pair = PaddedPair::prepare(u, v).unwrap();
    let n = pair.len();
    let zeros = vec![0; n + 1];
    let full = fill_grid(&pair.u, &pair.v, &zeros, &zeros);

    prop_assert_eq!(grid.len(), n);
    prop_assert_eq!(grid.violations(), 0);
    prop_assert!(grid.corners_agree());
    for i in 0..=n {
        for j in 0..=n {
            if let Some(value) = grid.get(i, j) {
                prop_assert_eq!(value, full.get(i, j), "cell ({}, {})", i, j);
            }
        }
    }
    prop_assert_eq!(grid.score(), full.get(pair.len_u, pair.len_v));
    Ok(())
}

proptest! {
    #[test]
    fn boundaries_match_full_grid(a in "[ACGT]{1,40}", b in "[ACGT]{1,40}") {
        check_against_full_grid(&FourRussians::new(), a.as_bytes(), b.as_bytes())?;
    }

    #[test]
    fn boundaries_match_with_unit_blocks(a in "[ACGT]{1,20}", b in "[ACGT]{1,20}") {
        let engine = FourRussiansBuilder::new()
            .with_block_size(1)
            .with_schedule(Schedule::Wavefront)
            .build();
        check_against_full_grid(&engine, a.as_bytes(), b.as_bytes())?;
    }
}

#[test]
fn only_block_boundaries_are_materialized() {
    let grid = FourRussians::new()
        .assemble(b"GACGTAGCATAAGCGC", b"TGCAACGTATAACGGG")
        .unwrap();
    let t = grid.block_size();
    assert_eq!(t, 2);
    for i in 0..=grid.len() {
        for j in 0..=grid.len() {
            let on_boundary = i % t == 0 || j % t == 0;
            assert_eq!(grid.get(i, j).is_some(), on_boundary, "cell ({i}, {j})");
        }
    }
    assert_eq!(grid.score(), 11);
}

#[test]
fn boundary_grid_renders_interior_as_dots() {
    let grid = FourRussiansBuilder::new()
        .with_block_size(2)
        .build()
        .assemble(b"ATCG", b"ATCG")
        .unwrap();
    let text = grid.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "0  0  0  0  0 ");
    assert_eq!(lines[1], "0  .  1  .  1 ");
    assert_eq!(lines[4], "0  1  2  3  4 ");
}

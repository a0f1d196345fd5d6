use four_russians_lcs::alphabet::Symbol;
use four_russians_lcs::blocks::{content_from_index, content_index, key_space, BlockKey, OffsetVector};
use four_russians_lcs::grid::fill_grid;
use four_russians_lcs::table::BlockTable;
use four_russians_lcs::FourRussians;

#[test]
fn precomputing_twice_gives_identical_tables() {
    for t in 0..=2 {
        let first = BlockTable::precompute(t).unwrap();
        let second = BlockTable::precompute(t).unwrap();
        assert_eq!(first.len(), key_space(t));
        assert_eq!(first, second, "t={t}");
    }
}

#[test]
fn engine_cache_matches_fresh_table() {
    let engine = FourRussians::new();
    let cached = engine.table(2).unwrap();
    assert_eq!(cached, &BlockTable::precompute(2).unwrap());
}

#[test]
fn lookup_by_key_equals_direct_fill() {
    use Symbol::*;
    let table = BlockTable::precompute(2).unwrap();
    let cases = [
        ([A, C], [C, A], 0b00, 0b00),
        ([G, G], [G, G], 0b11, 0b01),
        ([T, Pad], [Pad, T], 0b10, 0b11),
        ([Pad, Pad], [A, T], 0b01, 0b10),
    ];
    for (u, v, row, col) in cases {
        let key = BlockKey {
            u: content_index(&u),
            v: content_index(&v),
            row_offsets: OffsetVector::new(row, 2),
            col_offsets: OffsetVector::new(col, 2),
        };
        let expected = fill_grid(
            &u,
            &v,
            &key.row_offsets.to_edge(),
            &key.col_offsets.to_edge(),
        );
        assert_eq!(table.get(&key).to_grid(), expected);
        assert_eq!(content_from_index(key.u, 2), u.to_vec());
    }
}

#[test]
fn local_values_are_bounded() {
    let t = 2;
    let table = BlockTable::precompute(t).unwrap();
    for index in 0..table.len() {
        let grid = table.entry(index).to_grid();
        assert_eq!(grid.get(0, 0), 0);
        assert!(grid.last() as usize <= 2 * t);
    }
}

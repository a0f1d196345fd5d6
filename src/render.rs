//! Plain-text rendering of score grids for diagnostics.

use crate::grid::ScoreGrid;

/// Render a `rows × cols` region, one line per row.
///
/// Each value is centered in `padding` columns and cells are separated by a
/// single space. Cells for which `cell` returns `None` print `default`.
pub fn render_cells<F>(rows: usize, cols: usize, cell: F, default: &str, padding: usize) -> String
where
    F: Fn(usize, usize) -> Option<u32>,
{
    let mut out = String::new();
    for i in 0..rows {
        for j in 0..cols {
            if j > 0 {
                out.push(' ');
            }
            let text = match cell(i, j) {
                Some(value) => format!("{value:^padding$}"),
                None => format!("{default:^padding$}"),
            };
            out.push_str(&text);
        }
        out.push('\n');
    }
    out
}

impl std::fmt::Display for ScoreGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = render_cells(
            self.rows() + 1,
            self.cols() + 1,
            |i, j| Some(self.get(i, j)),
            ".",
            2,
        );
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{encode, Symbol};
    use crate::error::Side;
    use crate::grid::fill_grid;

    #[test]
    fn missing_cells_use_default() {
        let text = render_cells(2, 3, |i, j| (i == j).then_some(7), ".", 2);
        assert_eq!(text, "7  .  . \n.  7  . \n");
    }

    #[test]
    fn empty_region_renders_nothing() {
        assert_eq!(render_cells(0, 4, |_, _| Some(1), ".", 2), "");
    }

    #[test]
    fn score_grid_display() {
        let a: Vec<Symbol> = encode(b"AT", Side::U).unwrap();
        let g = fill_grid(&a, &a, &[0, 0, 0], &[0, 0, 0]);
        assert_eq!(g.to_string(), "0  0  0 \n0  1  1 \n0  1  2 \n");
    }
}

use crate::board::{Cell, GRID_SIZE, Grid, Symbol};

/// Validity of the current grid: which rows and columns break a rule,
/// and whether the puzzle is solved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    pub invalid_rows: Vec<usize>,
    pub invalid_cols: Vec<usize>,
    pub solved: bool,
}

/// A fully-filled line must hold as many black cells as white ones.
pub fn is_balanced(line: &[Cell; GRID_SIZE]) -> bool {
    let black = line
        .iter()
        .filter(|c| c.symbol() == Some(Symbol::Black))
        .count();
    let white = line
        .iter()
        .filter(|c| c.symbol() == Some(Symbol::White))
        .count();
    black == white
}

/// No three consecutive cells in a line may hold the same symbol.
pub fn has_no_triple(line: &[Cell; GRID_SIZE]) -> bool {
    !line.windows(3).any(|w| {
        let first = w[0].symbol();
        first.is_some() && first == w[1].symbol() && first == w[2].symbol()
    })
}

fn line_is_full(line: &[Cell; GRID_SIZE]) -> bool {
    line.iter().all(|c| !c.is_empty())
}

fn breaks_a_rule(line: &[Cell; GRID_SIZE]) -> bool {
    line_is_full(line) && !(is_balanced(line) && has_no_triple(line))
}

/// Every cell holds a symbol.
pub fn is_complete(grid: &Grid) -> bool {
    grid.iter().flatten().all(|c| !c.is_empty())
}

/// Number of non-empty cells, givens included.
pub fn filled_count(grid: &Grid) -> usize {
    grid.iter().flatten().filter(|c| !c.is_empty()).count()
}

/// Recompute validity from scratch. Rules are judged only on fully-filled
/// lines; a line with any empty cell is never flagged.
pub fn validate(grid: &Grid) -> ValidationReport {
    let mut invalid_rows = Vec::new();
    let mut invalid_cols = Vec::new();

    for r in 0..GRID_SIZE {
        if breaks_a_rule(&grid[r]) {
            invalid_rows.push(r);
        }
    }
    for c in 0..GRID_SIZE {
        let column: [Cell; GRID_SIZE] = std::array::from_fn(|r| grid[r][c]);
        if breaks_a_rule(&column) {
            invalid_cols.push(c);
        }
    }

    let solved = is_complete(grid) && invalid_rows.is_empty() && invalid_cols.is_empty();

    ValidationReport {
        invalid_rows,
        invalid_cols,
        solved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const B: Cell = Cell::Player(Symbol::Black);
    const W: Cell = Cell::Player(Symbol::White);
    const E: Cell = Cell::Empty;

    fn empty_grid() -> Grid {
        [[E; GRID_SIZE]; GRID_SIZE]
    }

    fn checkerboard() -> Grid {
        std::array::from_fn(|r| std::array::from_fn(|c| if (r + c) % 2 == 0 { B } else { W }))
    }

    #[test]
    fn balanced_line_without_runs_passes() {
        let mut grid = empty_grid();
        grid[0] = [B, B, W, W, B, W];
        assert!(validate(&grid).invalid_rows.is_empty());
    }

    #[test]
    fn alternating_line_passes() {
        let mut grid = empty_grid();
        grid[1] = [B, W, B, W, B, W];
        assert!(validate(&grid).invalid_rows.is_empty());
    }

    #[test]
    fn paired_line_passes() {
        let mut grid = empty_grid();
        grid[3] = [B, B, W, B, W, W];
        assert!(validate(&grid).invalid_rows.is_empty());
    }

    #[test]
    fn triple_run_flags_the_row() {
        let mut grid = empty_grid();
        grid[2] = [B, B, B, W, W, W];
        assert_eq!(validate(&grid).invalid_rows, vec![2]);
    }

    #[test]
    fn triple_flags_even_when_unbalanced() {
        let mut grid = empty_grid();
        grid[4] = [B, B, B, W, W, B];
        assert_eq!(validate(&grid).invalid_rows, vec![4]);
    }

    #[test]
    fn imbalance_alone_flags_the_row() {
        let mut grid = empty_grid();
        grid[5] = [B, B, W, W, B, B];
        assert_eq!(validate(&grid).invalid_rows, vec![5]);
    }

    #[test]
    fn partial_lines_are_never_flagged() {
        let mut grid = empty_grid();
        // Would break both rules if it were full.
        grid[0] = [B, B, B, B, B, E];
        let report = validate(&grid);
        assert!(report.invalid_rows.is_empty());
        assert!(report.invalid_cols.is_empty());
    }

    #[test]
    fn invalid_column_is_reported() {
        let mut grid = empty_grid();
        for r in 0..GRID_SIZE {
            grid[r][2] = if r < 3 { B } else { W };
        }
        let report = validate(&grid);
        assert_eq!(report.invalid_cols, vec![2]);
        assert!(report.invalid_rows.is_empty());
    }

    #[test]
    fn givens_and_player_cells_are_judged_alike() {
        let mut grid = empty_grid();
        let g = Cell::Given(Symbol::Black);
        grid[0] = [g, g, g, W, W, W];
        assert_eq!(validate(&grid).invalid_rows, vec![0]);
    }

    #[test]
    fn checkerboard_is_solved() {
        // Rows 0, 2 and 4 are identical; only balance and runs are judged.
        let report = validate(&checkerboard());
        assert!(report.solved);
        assert!(report.invalid_rows.is_empty());
        assert!(report.invalid_cols.is_empty());
    }

    #[test]
    fn empty_grid_is_not_solved() {
        let report = validate(&empty_grid());
        assert!(!report.solved);
        assert!(report.invalid_rows.is_empty());
        assert!(report.invalid_cols.is_empty());
    }

    #[test]
    fn complete_but_broken_grid_is_not_solved() {
        let mut grid = checkerboard();
        grid[0][0] = W;
        let report = validate(&grid);
        assert!(!report.solved);
        assert_eq!(report.invalid_rows, vec![0]);
        assert_eq!(report.invalid_cols, vec![0]);
    }

    #[test]
    fn validation_is_idempotent() {
        let mut grid = checkerboard();
        grid[0][0] = W;
        assert_eq!(validate(&grid), validate(&grid));
    }

    #[test]
    fn filled_count_counts_all_symbols() {
        let mut grid = empty_grid();
        grid[0][0] = Cell::Given(Symbol::Black);
        grid[3][4] = W;
        assert_eq!(filled_count(&grid), 2);
        assert!(!is_complete(&grid));
        assert!(is_complete(&checkerboard()));
    }
}

use rand::RngExt;
use rand::rng;
use rand::seq::SliceRandom;

use crate::board::{Cell, GRID_SIZE, Given, Grid, Symbol};
use crate::difficulty::Difficulty;
use crate::error::Error;
use crate::validation::{ValidationReport, validate};

/// Pick the given cells for a new puzzle at the requested difficulty.
pub fn generate_givens(difficulty: Difficulty) -> Vec<Given> {
    generate_givens_with(&mut rng(), difficulty)
}

/// Seedable variant of [`generate_givens`].
///
/// Shuffles the full list of coordinates and keeps a prefix, so positions
/// are distinct by construction. Each kept position gets a coin-flip symbol.
pub fn generate_givens_with(rng: &mut impl RngExt, difficulty: Difficulty) -> Vec<Given> {
    let count = difficulty.given_count();

    let mut positions: Vec<(usize, usize)> = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            positions.push((r, c));
        }
    }
    positions.shuffle(rng);
    positions.truncate(count);

    positions
        .into_iter()
        .map(|(row, col)| Given {
            row,
            col,
            symbol: if rng.random_bool(0.5) {
                Symbol::Black
            } else {
                Symbol::White
            },
        })
        .collect()
}

/// Build the starting grid from a set of givens.
pub fn build_grid(givens: &[Given]) -> Grid {
    let mut grid = [[Cell::Empty; GRID_SIZE]; GRID_SIZE];
    for given in givens {
        grid[given.row][given.col] = Cell::Given(given.symbol);
    }
    grid
}

/// Generate a new puzzle: the starting grid plus the givens it was seeded with.
pub fn new_puzzle(difficulty: Difficulty) -> (Grid, Vec<Given>) {
    let givens = generate_givens(difficulty);
    let grid = build_grid(&givens);
    (grid, givens)
}

/// Cycle the cell at (row, col) through Empty -> Black -> White -> Empty,
/// then revalidate the whole grid. Given cells never change; toggling one
/// still returns a fresh report.
pub fn toggle_cell(grid: &mut Grid, row: usize, col: usize) -> Result<ValidationReport, Error> {
    if row >= GRID_SIZE || col >= GRID_SIZE {
        return Err(Error::OutOfBounds { row, col });
    }

    match grid[row][col] {
        Cell::Given(_) => {}
        Cell::Empty => grid[row][col] = Cell::Player(Symbol::Black),
        Cell::Player(Symbol::Black) => grid[row][col] = Cell::Player(Symbol::White),
        Cell::Player(Symbol::White) => grid[row][col] = Cell::Empty,
    }

    Ok(validate(grid))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn generates_the_configured_number_of_givens() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_givens_with(&mut rng, Difficulty::Easy).len(), 13);
        assert_eq!(generate_givens_with(&mut rng, Difficulty::Hard).len(), 10);
    }

    #[test]
    fn given_positions_are_distinct() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let givens = generate_givens_with(&mut rng, Difficulty::Easy);
            let mut positions: Vec<(usize, usize)> =
                givens.iter().map(|g| (g.row, g.col)).collect();
            positions.sort();
            positions.dedup();
            assert_eq!(positions.len(), givens.len());
        }
    }

    #[test]
    fn given_positions_stay_on_the_grid() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            for given in generate_givens_with(&mut rng, Difficulty::Hard) {
                assert!(given.row < GRID_SIZE);
                assert!(given.col < GRID_SIZE);
            }
        }
    }

    #[test]
    fn same_seed_same_givens() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(
            generate_givens_with(&mut a, Difficulty::Hard),
            generate_givens_with(&mut b, Difficulty::Hard)
        );
    }

    #[test]
    fn build_grid_places_exactly_the_givens() {
        let givens = vec![
            Given {
                row: 0,
                col: 0,
                symbol: Symbol::Black,
            },
            Given {
                row: 5,
                col: 3,
                symbol: Symbol::White,
            },
        ];
        let grid = build_grid(&givens);
        assert_eq!(grid[0][0], Cell::Given(Symbol::Black));
        assert_eq!(grid[5][3], Cell::Given(Symbol::White));
        let filled = grid.iter().flatten().filter(|c| !c.is_empty()).count();
        assert_eq!(filled, 2);
    }

    #[test]
    fn toggle_cycles_back_to_empty() {
        let mut grid = build_grid(&[]);
        toggle_cell(&mut grid, 2, 4).unwrap();
        assert_eq!(grid[2][4], Cell::Player(Symbol::Black));
        toggle_cell(&mut grid, 2, 4).unwrap();
        assert_eq!(grid[2][4], Cell::Player(Symbol::White));
        toggle_cell(&mut grid, 2, 4).unwrap();
        assert_eq!(grid[2][4], Cell::Empty);
    }

    #[test]
    fn toggle_touches_only_the_target_cell() {
        let mut grid = build_grid(&[]);
        toggle_cell(&mut grid, 0, 0).unwrap();
        let filled = grid.iter().flatten().filter(|c| !c.is_empty()).count();
        assert_eq!(filled, 1);
    }

    #[test]
    fn toggling_a_given_never_changes_it() {
        let givens = vec![Given {
            row: 1,
            col: 1,
            symbol: Symbol::White,
        }];
        let mut grid = build_grid(&givens);
        for _ in 0..3 {
            let report = toggle_cell(&mut grid, 1, 1).unwrap();
            assert_eq!(grid[1][1], Cell::Given(Symbol::White));
            assert!(grid[1][1].is_given());
            assert!(!report.solved);
        }
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut grid = build_grid(&[]);
        assert_eq!(
            toggle_cell(&mut grid, GRID_SIZE, 0),
            Err(Error::OutOfBounds {
                row: GRID_SIZE,
                col: 0
            })
        );
        assert_eq!(
            toggle_cell(&mut grid, 0, 9),
            Err(Error::OutOfBounds { row: 0, col: 9 })
        );
    }

    #[test]
    fn completing_toggle_reports_solved_and_can_be_undone() {
        // Checkerboard solution with (0, 0) left for the player.
        let mut givens = Vec::new();
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                if (r, c) == (0, 0) {
                    continue;
                }
                let symbol = if (r + c) % 2 == 0 {
                    Symbol::Black
                } else {
                    Symbol::White
                };
                givens.push(Given {
                    row: r,
                    col: c,
                    symbol,
                });
            }
        }
        let mut grid = build_grid(&givens);

        // Empty -> Black completes the checkerboard.
        let report = toggle_cell(&mut grid, 0, 0).unwrap();
        assert!(report.solved);

        // Black -> White breaks row 0 and column 0.
        let report = toggle_cell(&mut grid, 0, 0).unwrap();
        assert!(!report.solved);
        assert_eq!(report.invalid_rows, vec![0]);
        assert_eq!(report.invalid_cols, vec![0]);

        // White -> Empty leaves the grid incomplete and unflagged.
        let report = toggle_cell(&mut grid, 0, 0).unwrap();
        assert!(!report.solved);
        assert!(report.invalid_rows.is_empty());

        // Empty -> Black solves it again.
        let report = toggle_cell(&mut grid, 0, 0).unwrap();
        assert!(report.solved);
    }
}

use crate::records::Records;
use binairo_core::puzzle::{new_puzzle, toggle_cell};
use binairo_core::validation::{validate, ValidationReport};
use binairo_core::{Cell, Difficulty, Grid, GRID_SIZE};
use std::time::Instant;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    Won,
}

/// How the previous game ended, shown on the menu until the next one starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub secs: u64,
    pub won: bool,
}

pub struct Game {
    pub grid: Grid,
    pub difficulty: Difficulty,
    pub selected_row: usize,
    pub selected_col: usize,
    pub state: GameState,
    pub report: ValidationReport,
    pub timer_start: Option<Instant>,
    pub elapsed_secs: u64,
    pub last_outcome: Option<Outcome>,
    pub new_best: bool,
    pub show_quit_confirm: bool,
    pub records: Records,
}

impl Game {
    pub fn new() -> Self {
        let grid = [[Cell::Empty; GRID_SIZE]; GRID_SIZE];
        Self {
            report: validate(&grid),
            grid,
            difficulty: Difficulty::Easy,
            selected_row: GRID_SIZE / 2,
            selected_col: GRID_SIZE / 2,
            state: GameState::Menu,
            timer_start: None,
            elapsed_secs: 0,
            last_outcome: None,
            new_best: false,
            show_quit_confirm: false,
            records: Records::load(),
        }
    }

    pub fn start_new_game(&mut self) {
        let (grid, _givens) = new_puzzle(self.difficulty);
        // Givens alone can already complete a line, so judge them up front.
        self.report = validate(&grid);
        self.grid = grid;
        self.selected_row = GRID_SIZE / 2;
        self.selected_col = GRID_SIZE / 2;
        self.state = GameState::Playing;
        self.timer_start = Some(Instant::now());
        self.elapsed_secs = 0;
        self.new_best = false;
        self.show_quit_confirm = false;
    }

    pub fn move_cursor(&mut self, row_delta: i32, col_delta: i32) {
        let size = GRID_SIZE as i32;
        let new_row = (self.selected_row as i32 + row_delta).rem_euclid(size);
        let new_col = (self.selected_col as i32 + col_delta).rem_euclid(size);
        self.selected_row = new_row as usize;
        self.selected_col = new_col as usize;
    }

    /// Cycle the selected cell and pick up the fresh validation report.
    /// Wins the game when the report says the grid is solved.
    pub fn toggle_selected(&mut self) {
        if self.state != GameState::Playing {
            return;
        }

        // The cursor never leaves the grid, so out of bounds cannot happen here.
        let report = match toggle_cell(&mut self.grid, self.selected_row, self.selected_col) {
            Ok(report) => report,
            Err(_) => return,
        };
        self.report = report;

        if self.report.solved {
            self.finish_won();
        }
    }

    fn finish_won(&mut self) {
        self.state = GameState::Won;
        if let Some(start) = self.timer_start {
            self.elapsed_secs = start.elapsed().as_secs();
        }
        self.timer_start = None;
        self.new_best = self.records.record_win(self.difficulty, self.elapsed_secs);
        self.last_outcome = Some(Outcome {
            secs: self.elapsed_secs,
            won: true,
        });
    }

    /// Give up on the current puzzle and go back to the menu.
    pub fn abandon(&mut self) {
        self.last_outcome = Some(Outcome {
            secs: self.get_elapsed_secs(),
            won: false,
        });
        self.state = GameState::Menu;
        self.timer_start = None;
        self.show_quit_confirm = false;
    }

    pub fn back_to_menu(&mut self) {
        self.state = GameState::Menu;
    }

    pub fn get_elapsed_secs(&self) -> u64 {
        match self.state {
            GameState::Won => self.elapsed_secs,
            GameState::Playing => self
                .timer_start
                .map(|start| start.elapsed().as_secs())
                .unwrap_or(0),
            GameState::Menu => 0,
        }
    }

    pub fn format_time(&self) -> String {
        format_secs(self.get_elapsed_secs())
    }
}

pub fn format_secs(secs: u64) -> String {
    let mins = secs / 60;
    let secs = secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use binairo_core::{Symbol, filled_count};

    /// A checkerboard solution with only (0, 0) left open.
    fn near_solved_game() -> Game {
        let mut game = Game::new();
        game.start_new_game();
        game.grid = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                if (row, col) == (0, 0) {
                    Cell::Empty
                } else if (row + col) % 2 == 0 {
                    Cell::Given(Symbol::Black)
                } else {
                    Cell::Given(Symbol::White)
                }
            })
        });
        game.report = validate(&game.grid);
        game.selected_row = 0;
        game.selected_col = 0;
        game
    }

    #[test]
    fn new_game_starts_playing_with_a_running_clock() {
        let mut game = Game::new();
        game.difficulty = Difficulty::Hard;
        game.start_new_game();

        assert_eq!(game.state, GameState::Playing);
        assert!(game.timer_start.is_some());
        assert_eq!(filled_count(&game.grid), 10);
    }

    #[test]
    fn completing_toggle_wins_and_freezes_the_clock() {
        let mut game = near_solved_game();
        game.toggle_selected();

        assert_eq!(game.state, GameState::Won);
        assert!(game.timer_start.is_none());
        assert_eq!(
            game.last_outcome,
            Some(Outcome {
                secs: game.elapsed_secs,
                won: true
            })
        );
    }

    #[test]
    fn toggles_are_ignored_once_won() {
        let mut game = near_solved_game();
        game.toggle_selected();
        let grid_after_win = game.grid;

        game.toggle_selected();
        assert_eq!(game.grid, grid_after_win);
    }

    #[test]
    fn abandon_returns_to_menu_with_a_lost_outcome() {
        let mut game = Game::new();
        game.start_new_game();
        game.show_quit_confirm = true;
        game.abandon();

        assert_eq!(game.state, GameState::Menu);
        assert!(!game.show_quit_confirm);
        let outcome = game.last_outcome.unwrap();
        assert!(!outcome.won);
    }

    #[test]
    fn cursor_wraps_around_the_grid_edges() {
        let mut game = Game::new();
        game.selected_row = 0;
        game.selected_col = 0;

        game.move_cursor(-1, -1);
        assert_eq!(
            (game.selected_row, game.selected_col),
            (GRID_SIZE - 1, GRID_SIZE - 1)
        );

        game.move_cursor(1, 1);
        assert_eq!((game.selected_row, game.selected_col), (0, 0));
    }

    #[test]
    fn format_secs_pads_minutes_and_seconds() {
        assert_eq!(format_secs(0), "00:00");
        assert_eq!(format_secs(83), "01:23");
        assert_eq!(format_secs(600), "10:00");
    }
}

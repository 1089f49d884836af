use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures_util::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::game::{Game, GameState};
use crate::ui;

use binairo_core::Difficulty;

pub fn run(start_level: Option<Difficulty>) -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async_run(start_level))
}

async fn async_run(start_level: Option<Difficulty>) -> Result<(), Box<dyn std::error::Error>> {
    // Restore the terminal even when we panic somewhere inside the loop.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = Game::new();
    if let Some(level) = start_level {
        game.difficulty = level;
        game.start_new_game();
    }

    let result = run_loop(&mut terminal, &mut game).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut Game,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut event_stream = EventStream::new();
    // Redraw on a short tick so the clock keeps moving between key presses.
    let tick_rate = Duration::from_millis(250);

    loop {
        terminal.draw(|f| ui::draw(f, game))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(Event::Key(key))) = maybe_event {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key(game, key) {
                        return Ok(());
                    }
                }
            }
            _ = tokio::time::sleep(tick_rate) => {}
        }
    }
}

/// Route a key press to the current screen. Returns true to quit the app.
fn handle_key(game: &mut Game, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match game.state {
        GameState::Menu => handle_menu_key(game, key),
        GameState::Playing => handle_playing_key(game, key),
        GameState::Won => handle_won_key(game, key),
    }
}

fn handle_menu_key(game: &mut Game, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            game.difficulty = game.difficulty.next();
        }
        KeyCode::Enter => game.start_new_game(),
        KeyCode::Char('q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}

fn handle_playing_key(game: &mut Game, key: KeyEvent) -> bool {
    if game.show_quit_confirm {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => game.abandon(),
            _ => game.show_quit_confirm = false,
        }
        return false;
    }

    match key.code {
        KeyCode::Up => game.move_cursor(-1, 0),
        KeyCode::Down => game.move_cursor(1, 0),
        KeyCode::Left => game.move_cursor(0, -1),
        KeyCode::Right => game.move_cursor(0, 1),
        KeyCode::Char(' ') | KeyCode::Enter => {
            game.toggle_selected();
            if game.state == GameState::Won {
                game.records.save();
            }
        }
        KeyCode::Char('q') | KeyCode::Esc => game.show_quit_confirm = true,
        _ => {}
    }
    false
}

fn handle_won_key(game: &mut Game, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Char('n') => game.back_to_menu(),
        KeyCode::Char('q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}

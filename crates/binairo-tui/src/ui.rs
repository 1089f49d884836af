use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
    Frame,
};

use crate::game::{format_secs, Game, GameState};
use binairo_core::{filled_count, Cell, Difficulty, Symbol, GRID_SIZE};

// ── Constants ────────────────────────────────────────────────────────────────

const GRID_WIDTH: u16 = 49;
const GRID_HEIGHT: u16 = 25;

// ── Public entry point ───────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, game: &Game) {
    match game.state {
        GameState::Menu => draw_menu(f, game),
        GameState::Playing => draw_playing(f, game),
        GameState::Won => draw_won(f, game),
    }

    if game.show_quit_confirm {
        draw_quit_confirm(f);
    }
}

// ── Menu screen ──────────────────────────────────────────────────────────────

fn draw_menu(f: &mut Frame, game: &Game) {
    let area = f.area();

    let chunks = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(8),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Min(0),
    ])
    .split(center_rect(60, 30, area));

    let title_lines = vec![
        Line::from(Span::styled(
            r"  ██████╗ ██╗███╗   ██╗ █████╗ ██╗██████╗  ██████╗ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            r"  ██╔══██╗██║████╗  ██║██╔══██╗██║██╔══██╗██╔═══██╗",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            r"  ██████╔╝██║██╔██╗ ██║███████║██║██████╔╝██║   ██║",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            r"  ██╔══██╗██║██║╚██╗██║██╔══██║██║██╔══██╗██║   ██║",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            r"  ██████╔╝██║██║ ╚████║██║  ██║██║██║  ██║╚██████╔╝",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            r"  ╚═════╝ ╚═╝╚═╝  ╚═══╝╚═╝  ╚═╝╚═╝╚═╝  ╚═╝ ╚═════╝ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let title = Paragraph::new(title_lines).alignment(Alignment::Center);
    f.render_widget(title, chunks[1]);

    let diff_label = game.difficulty.label();
    let diff_color = difficulty_color(game.difficulty);
    let selector_line = Line::from(vec![
        Span::styled("◄  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("  {}  ", diff_label),
            Style::default()
                .fg(diff_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ►", Style::default().fg(Color::DarkGray)),
    ]);
    let selector = Paragraph::new(vec![
        Line::from(Span::styled(
            "Select Difficulty",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        selector_line,
    ])
    .alignment(Alignment::Center);
    f.render_widget(selector, chunks[3]);

    let mut record_lines: Vec<Line> = Vec::new();
    if let Some(outcome) = game.last_outcome {
        let (verdict, verdict_color) = if outcome.won {
            ("solved", Color::Green)
        } else {
            ("abandoned", Color::Red)
        };
        record_lines.push(Line::from(vec![
            Span::styled("Last game: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format_secs(outcome.secs),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" ({})", verdict), Style::default().fg(verdict_color)),
        ]));
    } else {
        record_lines.push(Line::from(""));
    }
    record_lines.push(Line::from(""));
    for &level in Difficulty::all() {
        let best = match game.records.best(level) {
            Some(secs) => format_secs(secs),
            None => "--:--".to_string(),
        };
        record_lines.push(Line::from(vec![
            Span::styled(
                format!("Best {}: ", level.label()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(best, Style::default().fg(difficulty_color(level))),
        ]));
    }
    let records = Paragraph::new(record_lines).alignment(Alignment::Center);
    f.render_widget(records, chunks[5]);

    let controls = Paragraph::new(vec![
        Line::from(Span::styled(
            "Controls",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::styled("    Change difficulty", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled("  Start game", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::styled("      Quit", Style::default().fg(Color::Gray)),
        ]),
    ])
    .alignment(Alignment::Center);
    f.render_widget(controls, chunks[7]);
}

// ── Playing screen ───────────────────────────────────────────────────────────

fn draw_playing(f: &mut Frame, game: &Game) {
    let area = f.area();

    let outer = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);
    let main_area = outer[0];
    let bottom_area = outer[1];

    let h_chunks = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(GRID_WIDTH + 2),
        Constraint::Length(2),
        Constraint::Length(28),
        Constraint::Min(0),
    ])
    .split(main_area);

    let grid_v = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(GRID_HEIGHT + 2),
        Constraint::Min(0),
    ])
    .split(h_chunks[1]);

    draw_grid(f, game, grid_v[1]);

    let panel_v = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(13),
        Constraint::Min(0),
    ])
    .split(h_chunks[3]);

    draw_info_panel(f, game, panel_v[1]);

    draw_key_hints(f, bottom_area);
}

// ── Grid rendering ───────────────────────────────────────────────────────────

fn draw_grid(f: &mut Frame, game: &Game, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(GRID_HEIGHT as usize);

    for visual_row in 0..GRID_HEIGHT {
        let mut spans: Vec<Span> = Vec::new();
        let row_kind = classify_row(visual_row);

        match row_kind {
            RowKind::Border(border_idx) => {
                spans.push(horizontal_line(border_idx));
            }
            RowKind::CellRow(grid_row, sub_row) => {
                for seg in 0..13 {
                    let col_kind = classify_col(seg);
                    match col_kind {
                        ColKind::Border => {
                            spans.push(Span::styled(
                                "│",
                                Style::default().fg(Color::DarkGray),
                            ));
                        }
                        ColKind::Cell(grid_col) => {
                            let cell = game.grid[grid_row][grid_col];
                            let is_selected =
                                grid_row == game.selected_row && grid_col == game.selected_col;
                            let in_broken_line = game.report.invalid_rows.contains(&grid_row)
                                || game.report.invalid_cols.contains(&grid_col);

                            let bg = if is_selected {
                                Color::Yellow
                            } else if in_broken_line {
                                Color::Red
                            } else {
                                Color::Reset
                            };

                            let cell_span = render_cell(cell, bg, is_selected, sub_row);
                            spans.push(cell_span);
                        }
                    }
                }
            }
        }

        lines.push(Line::from(spans));
    }

    let block = Block::bordered()
        .title(" Binairo ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White));

    let grid_paragraph = Paragraph::new(lines).block(block);
    f.render_widget(grid_paragraph, area);
}

fn render_cell(cell: Cell, bg: Color, is_selected: bool, sub_row: usize) -> Span<'static> {
    let fg_for_bg = if bg == Color::Yellow {
        Color::Black
    } else if bg == Color::Red {
        Color::White
    } else {
        Color::Reset
    };

    let blank = "       ";

    match cell {
        Cell::Given(symbol) => {
            if sub_row == 1 {
                let fg = if fg_for_bg != Color::Reset {
                    fg_for_bg
                } else {
                    Color::White
                };
                Span::styled(
                    format!("   {}   ", symbol_glyph(symbol)),
                    Style::default()
                        .fg(fg)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(blank, Style::default().bg(bg))
            }
        }
        Cell::Player(symbol) => {
            if sub_row == 1 {
                let fg = if fg_for_bg != Color::Reset {
                    fg_for_bg
                } else {
                    Color::Cyan
                };
                Span::styled(
                    format!("   {}   ", symbol_glyph(symbol)),
                    Style::default().fg(fg).bg(bg),
                )
            } else {
                Span::styled(blank, Style::default().bg(bg))
            }
        }
        Cell::Empty => {
            if is_selected && sub_row == 1 {
                Span::styled("   ·   ", Style::default().fg(Color::DarkGray).bg(bg))
            } else {
                Span::styled(blank, Style::default().bg(bg))
            }
        }
    }
}

fn symbol_glyph(symbol: Symbol) -> char {
    match symbol {
        Symbol::Black => '●',
        Symbol::White => '○',
    }
}

// ── Row/column classification helpers ────────────────────────────────────────

#[derive(Debug)]
enum RowKind {
    Border(usize),
    CellRow(usize, usize),
}

fn classify_row(visual: u16) -> RowKind {
    if visual % 4 == 0 {
        RowKind::Border((visual / 4) as usize)
    } else {
        let grid_row = (visual / 4) as usize;
        let sub_row = (visual % 4 - 1) as usize;
        RowKind::CellRow(grid_row, sub_row)
    }
}

enum ColKind {
    Border,
    Cell(usize),
}

fn classify_col(seg: usize) -> ColKind {
    if seg % 2 == 0 {
        ColKind::Border
    } else {
        ColKind::Cell(seg / 2)
    }
}

fn horizontal_line(border_idx: usize) -> Span<'static> {
    let (left, cross, right) = match border_idx {
        0 => ('┌', '┬', '┐'),
        GRID_SIZE => ('└', '┴', '┘'),
        _ => ('├', '┼', '┤'),
    };

    let mut s = String::with_capacity(64);
    s.push(left);
    for col in 0..GRID_SIZE {
        s.push_str("───────");
        if col < GRID_SIZE - 1 {
            s.push(cross);
        }
    }
    s.push(right);

    Span::styled(s, Style::default().fg(Color::DarkGray))
}

// ── Info panel ───────────────────────────────────────────────────────────────

fn draw_info_panel(f: &mut Frame, game: &Game, area: Rect) {
    let block = Block::bordered()
        .title(" Info ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White));

    let diff_color = difficulty_color(game.difficulty);

    let broken_lines = game.report.invalid_rows.len() + game.report.invalid_cols.len();
    let lines_indicator = if broken_lines == 0 {
        Span::styled("OK", Style::default().fg(Color::Green))
    } else {
        Span::styled(
            format!("{} broken", broken_lines),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    };

    let best_indicator = match game.records.best(game.difficulty) {
        Some(secs) => Span::styled(format_secs(secs), Style::default().fg(Color::White)),
        None => Span::styled("--:--", Style::default().fg(Color::DarkGray)),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" Difficulty: ", Style::default().fg(Color::Gray)),
            Span::styled(
                game.difficulty.label(),
                Style::default()
                    .fg(diff_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Time:       ", Style::default().fg(Color::Gray)),
            Span::styled(
                game.format_time(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Filled:     ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}/{}", filled_count(&game.grid), GRID_SIZE * GRID_SIZE),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Lines:      ", Style::default().fg(Color::Gray)),
            lines_indicator,
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Best:       ", Style::default().fg(Color::Gray)),
            best_indicator,
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

// ── Key hints (bottom status bar) ────────────────────────────────────────────

fn draw_key_hints(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" ←↑↓→", Style::default().fg(Color::Yellow)),
        Span::styled(" Move  ", Style::default().fg(Color::Gray)),
        Span::styled("Spc", Style::default().fg(Color::Yellow)),
        Span::styled(" Toggle  ", Style::default().fg(Color::Gray)),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::styled(" Menu", Style::default().fg(Color::Gray)),
    ]);

    let bar = Paragraph::new(hints).style(Style::default().bg(Color::DarkGray));
    f.render_widget(bar, area);
}

// ── Won screen ───────────────────────────────────────────────────────────────

fn draw_won(f: &mut Frame, game: &Game) {
    let area = f.area();

    let bg = Paragraph::new("").style(Style::default().bg(Color::Black));
    f.render_widget(bg, area);

    let height = if game.new_best { 13 } else { 11 };
    let popup = center_rect(44, height, area);
    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" Solved! ")
        .border_type(BorderType::Double)
        .style(Style::default().fg(Color::Green));

    let mut text_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "PUZZLE SOLVED!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Every row and column checks out.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Time:       ", Style::default().fg(Color::Gray)),
            Span::styled(
                game.format_time(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Difficulty: ", Style::default().fg(Color::Gray)),
            Span::styled(
                game.difficulty.label(),
                Style::default()
                    .fg(difficulty_color(game.difficulty))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    if game.new_best {
        text_lines.push(Line::from(""));
        text_lines.push(Line::from(Span::styled(
            "★ New best time!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }

    text_lines.push(Line::from(""));
    text_lines.push(Line::from(Span::styled(
        "Press Enter for menu, Q to quit",
        Style::default().fg(Color::DarkGray),
    )));

    let text = Paragraph::new(text_lines)
        .block(block)
        .alignment(Alignment::Center);

    f.render_widget(text, popup);
}

// ── Quit confirmation dialog ─────────────────────────────────────────────────

fn draw_quit_confirm(f: &mut Frame) {
    let area = f.area();
    let popup = center_rect(50, 7, area);

    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" Abandon? ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Red));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Abandon this puzzle and return to the menu?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Y",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("/", Style::default().fg(Color::Gray)),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Yes   ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Any key",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" No", Style::default().fg(Color::Gray)),
        ]),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(text, popup);
}

// ── Layout helpers ───────────────────────────────────────────────────────────

fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vert = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(area);

    let horiz = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .split(vert[1]);

    horiz[1]
}

fn difficulty_color(d: Difficulty) -> Color {
    match d {
        Difficulty::Easy => Color::Green,
        Difficulty::Hard => Color::Red,
    }
}

//! Stateless UI rendering of a [`GameView`].

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use replay_core::{BOARD_SIZE, CellView, GameView, Mark, Status};

/// Draws one frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(9),    // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_board(frame, panes[0], app, &view);
    draw_moves(frame, panes[1], app, &view);
    draw_status(frame, chunks[2], &view);

    let help = Paragraph::new(
        "arrows move · enter place · 1-9 place · tab switch pane · o order · q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let focused = app.focus() == Focus::Board;
    let game_over = view.status.is_terminal();
    let mut lines = Vec::new();

    if app.show_headers() {
        let mut header = vec![Span::raw("# ")];
        for col in 0..BOARD_SIZE {
            header.push(Span::styled(
                format!(" {col} "),
                Style::default().fg(Color::DarkGray),
            ));
            if col + 1 < BOARD_SIZE {
                header.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(header));
    }

    let gutter = if app.show_headers() { "  " } else { "" };
    for (row, cells) in view.cells.chunks(BOARD_SIZE).enumerate() {
        let mut spans = Vec::new();
        if app.show_headers() {
            spans.push(Span::styled(
                format!("{row} "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        for (col, cell) in cells.iter().enumerate() {
            let under_cursor = focused && cell.coord == app.cursor();
            spans.push(cell_span(cell, under_cursor, game_over));
            if col + 1 < BOARD_SIZE {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
        }
        lines.push(Line::from(spans));
        if row + 1 < BOARD_SIZE {
            lines.push(Line::styled(
                format!("{gutter}───┼───┼───"),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(pane_block("Board".to_string(), focused));
    frame.render_widget(board, area);
}

/// Styles one cell. Once the game is over every cell outside the winning
/// line is dimmed.
fn cell_span(cell: &CellView, under_cursor: bool, game_over: bool) -> Span<'static> {
    let (symbol, mut style) = match cell.mark {
        None => (" · ".to_string(), Style::default().fg(Color::DarkGray)),
        Some(Mark::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if cell.in_win_line {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if game_over {
        style = style.add_modifier(Modifier::DIM);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(symbol, style)
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let focused = app.focus() == Focus::Moves;

    let items: Vec<ListItem> = view
        .moves
        .iter()
        .map(|entry| {
            let style = if entry.selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(entry.label.clone(), style))
        })
        .collect();

    let title = format!("Moves {} (o)", view.order.glyph());
    let list = List::new(items)
        .block(pane_block(title, focused))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(view.moves.iter().position(|m| m.step == app.list_step()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView) {
    let color = match view.status {
        Status::Winner(_) => Color::Green,
        Status::Draw => Color::Magenta,
        Status::NextPlayer(_) => Color::Yellow,
    };
    let status = Paragraph::new(view.status.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

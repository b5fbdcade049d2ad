//! Rendering tests against ratatui's test backend.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use replay_tui::{App, TuiConfig, ui};

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn play(app: &mut App, keys: &str) {
    for c in keys.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

#[test]
fn test_initial_screen() {
    let app = App::new(&TuiConfig::default());
    let text = screen(&app);
    assert!(text.contains("Tic Tac Toe"));
    assert!(text.contains("Next player: X"));
    assert!(text.contains("Go to start"));
    assert!(text.contains("Moves ↓"));
}

#[test]
fn test_win_screen() {
    let mut app = App::new(&TuiConfig::default());
    play(&mut app, "15243");
    let text = screen(&app);
    assert!(text.contains("Winner: X"));
    assert!(text.contains(" X │ X │ X "));
    assert!(text.contains("Go to move #5 (0, 2)"));
}

#[test]
fn test_order_toggle_redraws_title() {
    let mut app = App::new(&TuiConfig::default());
    play(&mut app, "5o");
    let text = screen(&app);
    assert!(text.contains("Moves ↑"));
    let latest = text.find("Go to move #1").unwrap();
    let start = text.find("Go to start").unwrap();
    assert!(latest < start);
}

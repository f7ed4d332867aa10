//! Common test utilities for integration tests.
//!
//! Apps here run over a [`JsonFileStore`] in a temporary directory, so every
//! test also exercises the on-disk format.
//!
//! # Example
//!
//! ```ignore
//! let (mut app, dir) = signed_in_app(1.0);
//! app.navigate_to(Screen::Swipe);
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use pawmatch::adapters::JsonFileStore;
use pawmatch::app::App;
use pawmatch::config::AppConfig;
use pawmatch::models::LoginCredentials;
use pawmatch::services::{DEMO_EMAIL, DEMO_PASSWORD};
use pawmatch::ui;
use ratatui::{backend::TestBackend, Terminal};
use tempfile::TempDir;

/// Store over `<dir>/store.json`.
pub fn file_store(dir: &TempDir) -> Arc<JsonFileStore> {
    Arc::new(JsonFileStore::in_dir(dir.path()))
}

/// App over a fresh temporary directory; `chance` is the mutual-like probability.
pub fn test_app(chance: f64) -> (App, TempDir) {
    let dir = TempDir::new().unwrap();
    let app = reopen_app(&dir, chance);
    (app, dir)
}

/// A second App over an existing directory, as after a restart.
pub fn reopen_app(dir: &TempDir, chance: f64) -> App {
    let config = AppConfig::default()
        .with_mutual_like_chance(chance)
        .with_data_dir(dir.path());
    App::new(config, file_store(dir)).unwrap()
}

/// App signed in as the demo user.
pub fn signed_in_app(chance: f64) -> (App, TempDir) {
    let (mut app, dir) = test_app(chance);
    app.auth
        .sign_in(&LoginCredentials::new(DEMO_EMAIL, DEMO_PASSWORD))
        .unwrap();
    (app, dir)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent {
        modifiers: KeyModifiers::CONTROL,
        ..key(KeyCode::Char(c))
    }
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn left_down(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

pub fn left_drag(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

pub fn left_up(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}

/// Draw one 80x24 frame, which also refreshes the hit areas.
///
/// Returns the buffer as text, row after row.
pub fn render(app: &mut App) -> String {
    app.set_terminal_size(80, 24);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

//! UI rendering for PawMatch
//!
//! One render function per [`Screen`]. Every frame rebuilds the click
//! targets in [`App::hit_areas`], so mouse handling always sees what was
//! drawn last.

mod auth;
mod helpers;
pub mod interaction;
mod preferences;
mod profile;
mod register;
mod swipe;
mod theme;

pub use swipe::transform_cells;
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Clear, Paragraph},
};

use crate::app::{App, Screen, Toast, ToastKind};
use theme::{COLOR_ERROR, COLOR_INFO, COLOR_MATCH};

/// Draw the current screen and any pending toast.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_areas.clear();

    match app.screen {
        Screen::Welcome => auth::render_welcome_screen(frame, app),
        Screen::SignIn => auth::render_sign_in_screen(frame, app),
        Screen::SignUp => auth::render_sign_up_screen(frame, app),
        Screen::Register => register::render_register_screen(frame, app),
        Screen::Swipe => swipe::render_swipe_screen(frame, app, Instant::now()),
        Screen::Preferences => preferences::render_preferences_screen(frame, app),
        Screen::Profile => profile::render_profile_screen(frame, app),
    }

    if let Some(toast) = &app.toast {
        render_toast(frame, toast);
    }
}

fn render_toast(frame: &mut Frame, toast: &Toast) {
    let area = frame.area();
    if area.height == 0 {
        return;
    }
    let color = match toast.kind {
        ToastKind::Match => COLOR_MATCH,
        ToastKind::Info => COLOR_INFO,
        ToastKind::Error => COLOR_ERROR,
    };
    let row = Rect::new(area.x, area.bottom() - 1, area.width, 1);
    let line = Line::from(Span::styled(
        format!(" {} ", toast.message),
        Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Clear, row);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
}

//! Terminal event handling for the App.
//!
//! Keys are dispatched per screen. Mouse presses first consult the hit areas
//! of the last frame; a press on the card starts a drag whose cell positions
//! are converted to pixel-like units before reaching the gesture engine.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{App, Screen, ToastKind};
use crate::deck::CommandOutcome;
use crate::error::ResultExt;
use crate::swipe::{key_command, wheel_action, CardCommand, CardKey, ReleaseOutcome};
use crate::ui::interaction::ClickAction;

/// Lines scrolled per wheel notch, as browsers report it.
const WHEEL_NOTCH_LINES: f64 = 3.0;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_at(key, Instant::now());
    }

    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match self.screen {
            Screen::Welcome => self.handle_welcome_key(key),
            Screen::SignIn => self.handle_auth_key(key, false),
            Screen::SignUp => self.handle_auth_key(key, true),
            Screen::Register => self.handle_register_key(key),
            Screen::Swipe => self.handle_swipe_key(key, now),
            Screen::Preferences => self.handle_preferences_key(key),
            Screen::Profile => self.handle_profile_key(key),
        }
    }

    fn handle_welcome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('i') => {
                if self.auth.is_authenticated() {
                    self.enter_after_auth();
                } else {
                    self.navigate_to(Screen::SignIn);
                }
            }
            KeyCode::Char('u') => self.navigate_to(Screen::SignUp),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    fn handle_swipe_key(&mut self, key: KeyEvent, now: Instant) {
        let card_key = match key.code {
            KeyCode::Left => Some(CardKey::ArrowLeft),
            KeyCode::Right => Some(CardKey::ArrowRight),
            KeyCode::Up => Some(CardKey::ArrowUp),
            KeyCode::Char(c) => Some(CardKey::Char(c)),
            _ => None,
        };
        let ctrl_or_meta = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::META | KeyModifiers::SUPER);

        if let Some(command) = card_key.and_then(|k| key_command(k, ctrl_or_meta)) {
            self.apply_card_command(command, now);
            return;
        }

        match key.code {
            KeyCode::Char('p') => self.navigate_to(Screen::Preferences),
            KeyCode::Char('m') => self.navigate_to(Screen::Profile),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_profile_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => self.navigate_to(Screen::Swipe),
            KeyCode::Char('e') => self.start_registration(),
            KeyCode::Char('p') => self.navigate_to(Screen::Preferences),
            KeyCode::Char('c') => self.clear_matches(),
            KeyCode::Char('o') => self.sign_out(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    /// Apply a key, button or wheel command to the front card.
    pub fn apply_card_command(&mut self, command: CardCommand, now: Instant) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.command(command, now).log_err("card_command") {
            Ok(CommandOutcome::Committing(action)) => {
                tracing::debug!(%action, "card committing");
                self.mark_dirty();
            }
            Ok(CommandOutcome::Restored(dog)) => {
                self.show_toast(format!("{} is back", dog.name), ToastKind::Info, now);
            }
            Ok(CommandOutcome::Ignored) => {}
            Err(err) => self.report_error(err, now),
        }
    }

    pub fn clear_matches(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.dogs_mut().clear_matches().log_err("clear_matches") {
            Ok(()) => self.show_toast("Matches cleared", ToastKind::Info, Instant::now()),
            Err(err) => self.report_error(err, Instant::now()),
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        self.handle_mouse_at(mouse, Instant::now());
    }

    pub fn handle_mouse_at(&mut self, mouse: MouseEvent, now: Instant) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match self.hit_areas.hit_test(column, row) {
                Some(ClickAction::DragCard) => self.begin_drag(column, row),
                Some(action) => self.perform_click(action, now),
                None => {}
            },
            MouseEventKind::Drag(MouseButton::Left) if self.dragging => {
                let at = self.cell_to_px(column, row);
                let viewport = self.viewport_width_px();
                if let Some(session) = self.session.as_mut() {
                    if session.pointer_move(at, viewport) {
                        self.mark_dirty();
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) if self.dragging => {
                self.dragging = false;
                if let Some(session) = self.session.as_mut() {
                    match session.pointer_up(now) {
                        ReleaseOutcome::Committed(action) => tracing::debug!(%action, "drag committed"),
                        ReleaseOutcome::SnappedBack => tracing::trace!("drag snapped back"),
                        ReleaseOutcome::Ignored => {}
                    }
                }
                self.mark_dirty();
            }
            MouseEventKind::Moved => {
                if self.hit_areas.update_hover(column, row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::ScrollUp => self.handle_wheel(0.0, -self.wheel_notch_y(), now),
            MouseEventKind::ScrollDown => self.handle_wheel(0.0, self.wheel_notch_y(), now),
            MouseEventKind::ScrollLeft => self.handle_wheel(-self.wheel_notch_x(), 0.0, now),
            MouseEventKind::ScrollRight => self.handle_wheel(self.wheel_notch_x(), 0.0, now),
            _ => {}
        }
    }

    fn begin_drag(&mut self, column: u16, row: u16) {
        if self.screen != Screen::Swipe {
            return;
        }
        let at = self.cell_to_px(column, row);
        let viewport = self.viewport_width_px();
        if let Some(session) = self.session.as_mut() {
            if session.pointer_down(at, viewport) {
                self.dragging = true;
                self.mark_dirty();
            }
        }
    }

    fn perform_click(&mut self, action: ClickAction, now: Instant) {
        tracing::trace!(?action, "click");
        match action {
            ClickAction::DragCard => {}
            ClickAction::Swipe(action) => self.apply_card_command(CardCommand::Swipe(action), now),
            ClickAction::Undo => self.apply_card_command(CardCommand::Undo, now),
            ClickAction::Navigate(screen) => {
                if screen == Screen::Register {
                    self.start_registration();
                } else {
                    self.navigate_to(screen);
                }
            }
            ClickAction::TogglePreference(index) => self.toggle_preference(index),
            ClickAction::SavePreferences => self.save_preferences(),
            ClickAction::ResetPreferences => self.reset_preferences(),
            ClickAction::SignOut => self.sign_out(),
            ClickAction::ClearMatches => self.clear_matches(),
        }
    }

    fn wheel_notch_x(&self) -> f64 {
        WHEEL_NOTCH_LINES * self.config.cell_width_px
    }

    fn wheel_notch_y(&self) -> f64 {
        WHEEL_NOTCH_LINES * self.config.cell_height_px
    }

    /// Wheel deltas decide cards on the swipe screen and scroll the preferences list.
    fn handle_wheel(&mut self, delta_x: f64, delta_y: f64, now: Instant) {
        match self.screen {
            Screen::Swipe => {
                if let Some(action) = wheel_action(delta_x, delta_y) {
                    self.apply_card_command(CardCommand::Swipe(action), now);
                }
            }
            Screen::Preferences if delta_y != 0.0 => {
                let last = self.pref_rows.len().saturating_sub(1);
                self.pref_cursor = if delta_y < 0.0 {
                    self.pref_cursor.saturating_sub(1)
                } else {
                    (self.pref_cursor + 1).min(last)
                };
                self.mark_dirty();
            }
            _ => {}
        }
    }

    /// Insert pasted text into the focused field, without line breaks.
    pub fn handle_paste(&mut self, text: &str) {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        if text.is_empty() {
            return;
        }
        match self.screen {
            Screen::SignIn => self.sign_in.focused_text_mut().push_str(&text),
            Screen::SignUp => self.sign_up.focused_text_mut().push_str(&text),
            Screen::Register => {
                let field = self.focused_register_field();
                for c in text.chars() {
                    self.edit_register_text(field, Some(c));
                }
            }
            _ => return,
        }
        self.mark_dirty();
    }
}

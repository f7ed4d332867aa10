//! Form editing for the sign-in, sign-up, registration and preferences screens.

use std::time::Instant;

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, AuthForm, PrefRow, RegisterField, Screen, ToastKind};
use crate::error::{PawError, ResultExt};
use crate::models::{DogSize, EnergyLevel, Gender, LoginCredentials, ACTIVITY_OPTIONS};
use crate::services::{filter_breeds, filter_provinces};

/// Suggestions shown under the breed and city fields.
pub const MAX_SUGGESTIONS: usize = 5;

/// Radius change per Left/Right press on the preferences screen.
const RADIUS_STEP_KM: u32 = 5;

const MAX_AGE_DIGITS: usize = 2;

impl App {
    // ------------------------------------------------------------------
    // Sign in / sign up
    // ------------------------------------------------------------------

    pub(crate) fn handle_auth_key(&mut self, key: KeyEvent, sign_up: bool) {
        let form = if sign_up {
            &mut self.sign_up
        } else {
            &mut self.sign_in
        };
        match key.code {
            KeyCode::Esc => {
                self.navigate_to(Screen::Welcome);
                return;
            }
            KeyCode::Tab | KeyCode::Down => form.cycle_focus(sign_up, true),
            KeyCode::BackTab | KeyCode::Up => form.cycle_focus(sign_up, false),
            KeyCode::Backspace => {
                form.focused_text_mut().pop();
            }
            KeyCode::Enter => {
                if sign_up {
                    self.submit_sign_up();
                } else {
                    self.submit_sign_in();
                }
                return;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.focused_text_mut().push(c);
                form.error = None;
            }
            _ => return,
        }
        self.mark_dirty();
    }

    pub fn submit_sign_in(&mut self) {
        let credentials = LoginCredentials::new(self.sign_in.email.trim(), self.sign_in.password.as_str());
        match self.auth.sign_in(&credentials).log_err("sign_in") {
            Ok(user) => {
                self.sign_in = AuthForm::default();
                self.show_toast(format!("Welcome back, {}!", user.name), ToastKind::Info, Instant::now());
                self.enter_after_auth();
            }
            Err(err) => {
                self.sign_in.password.clear();
                self.sign_in.error = Some(err.user_message());
                self.mark_dirty();
            }
        }
    }

    pub fn submit_sign_up(&mut self) {
        let form = &self.sign_up;
        let result = self
            .auth
            .sign_up(form.email.trim(), &form.password, &form.name)
            .log_err("sign_up");
        match result {
            Ok(user) => {
                self.sign_up = AuthForm::sign_up();
                self.show_toast(format!("Welcome, {}!", user.name), ToastKind::Info, Instant::now());
                self.start_registration();
            }
            Err(err) => {
                self.sign_up.error = Some(err.user_message());
                self.mark_dirty();
            }
        }
    }

    // ------------------------------------------------------------------
    // Dog registration
    // ------------------------------------------------------------------

    pub fn focused_register_field(&self) -> RegisterField {
        let fields = RegisterField::for_step(self.registration.step());
        fields[self.register_view.focus_index.min(fields.len() - 1)]
    }

    pub fn breed_suggestions(&self) -> Vec<&'static str> {
        suggestions(filter_breeds(&self.registration.breed), &self.registration.breed)
    }

    pub fn city_suggestions(&self) -> Vec<&'static str> {
        suggestions(filter_provinces(&self.registration.city), &self.registration.city)
    }

    pub(crate) fn handle_register_key(&mut self, key: KeyEvent) {
        let field = self.focused_register_field();
        let fields_len = RegisterField::for_step(self.registration.step()).len();

        match key.code {
            KeyCode::Esc => {
                if self.registration.step() == 1 {
                    self.navigate_to(Screen::Welcome);
                    return;
                }
                self.registration.previous_step();
                self.register_view.focus_index = 0;
                self.register_view.errors.clear();
            }
            KeyCode::Tab | KeyCode::Down => {
                self.register_view.focus_index = (self.register_view.focus_index + 1) % fields_len;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.register_view.focus_index = (self.register_view.focus_index + fields_len - 1) % fields_len;
            }
            KeyCode::Enter => {
                if !self.accept_suggestion(field) {
                    self.register_next();
                }
            }
            KeyCode::Left | KeyCode::Right => {
                self.adjust_register_choice(field, key.code == KeyCode::Right);
            }
            KeyCode::Char(' ') if field == RegisterField::Activities => {
                if let Some(activity) = ACTIVITY_OPTIONS.get(self.register_view.activity_cursor) {
                    self.registration.toggle_activity(activity);
                }
            }
            KeyCode::Backspace => self.edit_register_text(field, None),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_register_text(field, Some(c));
            }
            _ => return,
        }
        self.mark_dirty();
    }

    /// Append `c` to (or with `None`, delete from) a text field.
    pub(crate) fn edit_register_text(&mut self, field: RegisterField, c: Option<char>) {
        let form = &mut self.registration;
        let text = match field {
            RegisterField::Name => &mut form.name,
            RegisterField::Breed => &mut form.breed,
            RegisterField::Bio => &mut form.bio,
            RegisterField::City => &mut form.city,
            RegisterField::Age => &mut self.register_view.age_text,
            _ => return,
        };
        match c {
            Some(c) if field == RegisterField::Age => {
                if c.is_ascii_digit() && text.len() < MAX_AGE_DIGITS {
                    text.push(c);
                }
            }
            Some(c) => text.push(c),
            None => {
                text.pop();
            }
        }
        if field == RegisterField::Age {
            let age_text = self.register_view.age_text.clone();
            self.registration.set_age_text(&age_text);
        }
        self.register_view.errors.retain(|e| e.field != field.error_key());
    }

    fn adjust_register_choice(&mut self, field: RegisterField, forward: bool) {
        let form = &mut self.registration;
        match field {
            RegisterField::Gender => {
                form.gender = match form.gender {
                    Gender::Male => Gender::Female,
                    Gender::Female => Gender::Male,
                };
            }
            RegisterField::Size => form.size = cycle_option(&DogSize::ALL, form.size, forward),
            RegisterField::Energy => {
                form.energy = cycle_option(&EnergyLevel::ALL, form.energy, forward)
            }
            RegisterField::Activities => {
                let len = ACTIVITY_OPTIONS.len();
                let cursor = &mut self.register_view.activity_cursor;
                *cursor = if forward {
                    (*cursor + 1) % len
                } else {
                    (*cursor + len - 1) % len
                };
            }
            _ => {}
        }
    }

    /// Replace a partial breed or city with its first suggestion.
    fn accept_suggestion(&mut self, field: RegisterField) -> bool {
        let first = match field {
            RegisterField::Breed => self.breed_suggestions().first().copied(),
            RegisterField::City => self.city_suggestions().first().copied(),
            _ => None,
        };
        let Some(choice) = first else {
            return false;
        };
        match field {
            RegisterField::Breed => self.registration.breed = choice.to_string(),
            _ => self.registration.city = choice.to_string(),
        }
        true
    }

    /// Advance a step, or save the dog from the last step.
    pub fn register_next(&mut self) {
        if self.registration.is_last_step() {
            self.submit_registration();
            return;
        }
        match self.registration.next_step() {
            Ok(step) => {
                tracing::debug!(step, "registration step");
                self.register_view.focus_index = 0;
                self.register_view.errors.clear();
            }
            Err(err) => self.register_view.errors = err.field_errors().to_vec(),
        }
        self.mark_dirty();
    }

    fn submit_registration(&mut self) {
        let now = Utc::now();
        let owner = match self.auth.require_auth_at(now).cloned().log_err("register_dog") {
            Ok(user) => user,
            Err(err) => return self.report_error(err, Instant::now()),
        };
        match self.profile.submit(&self.registration, &owner, now).log_err("register_dog") {
            Ok(profile) => {
                let message = format!("{} is ready to meet new friends!", profile.dog.name);
                self.show_toast(message, ToastKind::Info, Instant::now());
                self.navigate_to(Screen::Swipe);
            }
            Err(err) => {
                if let PawError::Profile(profile_err) = &err {
                    self.register_view.errors = profile_err.field_errors().to_vec();
                }
                self.report_error(err, Instant::now());
            }
        }
    }

    // ------------------------------------------------------------------
    // Preferences
    // ------------------------------------------------------------------

    pub(crate) fn handle_preferences_key(&mut self, key: KeyEvent) {
        let last = self.pref_rows.len().saturating_sub(1);
        match key.code {
            KeyCode::Esc => {
                self.navigate_to(Screen::Swipe);
                return;
            }
            KeyCode::Up => self.pref_cursor = self.pref_cursor.saturating_sub(1),
            KeyCode::Down => self.pref_cursor = (self.pref_cursor + 1).min(last),
            KeyCode::PageUp => self.pref_cursor = self.pref_cursor.saturating_sub(10),
            KeyCode::PageDown => self.pref_cursor = (self.pref_cursor + 10).min(last),
            KeyCode::Left => self.adjust_preference(self.pref_cursor, false),
            KeyCode::Right => self.adjust_preference(self.pref_cursor, true),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_preference(self.pref_cursor),
            KeyCode::Char('s') => return self.save_preferences(),
            KeyCode::Char('r') => return self.reset_preferences(),
            _ => return,
        }
        self.mark_dirty();
    }

    /// Toggle a size, energy, breed or activity row.
    pub fn toggle_preference(&mut self, index: usize) {
        let Some(row) = self.pref_rows.get(index).copied() else {
            return;
        };
        let draft = &mut self.filters_draft;
        match row {
            PrefRow::Size(size) => draft.toggle_size(size),
            PrefRow::Energy(energy) => draft.toggle_energy(energy),
            PrefRow::Breed(breed) => draft.toggle_breed(breed),
            PrefRow::Activity(activity) => draft.toggle_activity(activity),
            PrefRow::Radius | PrefRow::MinAge | PrefRow::MaxAge => return,
        }
        self.pref_cursor = index;
        self.mark_dirty();
    }

    /// Step the radius or an age bound up or down.
    pub fn adjust_preference(&mut self, index: usize, up: bool) {
        let draft = &mut self.filters_draft;
        let range = draft.age_range;
        match self.pref_rows.get(index) {
            Some(PrefRow::Radius) => {
                let radius = if up {
                    draft.radius_km.saturating_add(RADIUS_STEP_KM)
                } else {
                    draft.radius_km.saturating_sub(RADIUS_STEP_KM)
                };
                draft.set_radius(radius);
            }
            Some(PrefRow::MinAge) => {
                let min = if up {
                    range.min.saturating_add(1)
                } else {
                    range.min.saturating_sub(1)
                };
                draft.set_age_range(min, range.max.max(min));
            }
            Some(PrefRow::MaxAge) => {
                let max = if up {
                    range.max.saturating_add(1)
                } else {
                    range.max.saturating_sub(1)
                };
                draft.set_age_range(range.min, max);
            }
            _ => return,
        }
        self.mark_dirty();
    }

    /// Persist the draft, apply it to the deck and go back to swiping.
    pub fn save_preferences(&mut self) {
        match self.preferences.save(&self.filters_draft).log_err("save_preferences") {
            Ok(()) => {
                if let Some(session) = self.session.as_mut() {
                    session.set_filters(self.filters_draft.clone());
                }
                self.show_toast("Preferences saved", ToastKind::Info, Instant::now());
                self.navigate_to(Screen::Swipe);
            }
            Err(err) => self.report_error(err, Instant::now()),
        }
    }

    pub fn reset_preferences(&mut self) {
        self.filters_draft = self.preferences.reset();
        self.show_toast("Filters reset to defaults", ToastKind::Info, Instant::now());
    }
}

/// Suggestions for a partially typed value; none once it matches exactly.
fn suggestions(mut matches: Vec<&'static str>, typed: &str) -> Vec<&'static str> {
    let typed = typed.trim();
    if typed.is_empty() || matches.iter().any(|m| m.eq_ignore_ascii_case(typed)) {
        return Vec::new();
    }
    matches.truncate(MAX_SUGGESTIONS);
    matches
}

fn cycle_option<T: Copy + PartialEq>(all: &[T], current: Option<T>, forward: bool) -> Option<T> {
    let len = all.len();
    let next = match current.and_then(|c| all.iter().position(|a| *a == c)) {
        None if forward => 0,
        None => len - 1,
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
    };
    all.get(next).copied()
}

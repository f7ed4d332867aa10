//! Type definitions for the application state.
//!
//! Contains enums and structs used for tracking UI state:
//! - [`Screen`] - Which screen is currently displayed
//! - [`Toast`] - Transient status line
//! - [`AuthForm`] - Sign-in / sign-up text fields
//! - [`RegisterField`] / [`PrefRow`] - Focusable rows of the form screens

use std::time::{Duration, Instant};

use crate::models::{DogSize, EnergyLevel, ACTIVITY_OPTIONS, BREED_OPTIONS};

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Welcome,
    SignIn,
    SignUp,
    Register,
    Swipe,
    Preferences,
    Profile,
}

impl Screen {
    /// Screens reachable only with a valid session.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Screen::Welcome | Screen::SignIn | Screen::SignUp)
    }

    /// Whether printable keys go into a text field on this screen.
    pub fn captures_text(&self) -> bool {
        matches!(self, Screen::SignIn | Screen::SignUp | Screen::Register)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Match,
    Info,
    Error,
}

/// One-line status message with an expiry.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: now + TOAST_DURATION,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Text fields of the sign-in and sign-up screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    Name,
    #[default]
    Email,
    Password,
}

/// Sign-in / sign-up form. `name` is only shown on sign-up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub focus: AuthField,
    pub error: Option<String>,
}

impl AuthForm {
    /// Empty sign-up form, focused on the name.
    pub fn sign_up() -> Self {
        Self {
            focus: AuthField::Name,
            ..Self::default()
        }
    }

    pub fn fields(with_name: bool) -> &'static [AuthField] {
        if with_name {
            &[AuthField::Name, AuthField::Email, AuthField::Password]
        } else {
            &[AuthField::Email, AuthField::Password]
        }
    }

    pub fn focused_text_mut(&mut self) -> &mut String {
        match self.focus {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    /// Move focus to the next or previous field, wrapping.
    pub fn cycle_focus(&mut self, with_name: bool, forward: bool) {
        self.focus = cycle(Self::fields(with_name), self.focus, forward);
    }
}

/// Focusable fields of the registration form, per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Name,
    Breed,
    Age,
    Gender,
    Size,
    Energy,
    Activities,
    Bio,
    City,
}

impl RegisterField {
    pub fn for_step(step: u8) -> &'static [RegisterField] {
        match step {
            1 => &[
                RegisterField::Name,
                RegisterField::Breed,
                RegisterField::Age,
                RegisterField::Gender,
            ],
            2 => &[RegisterField::Size, RegisterField::Energy],
            _ => &[
                RegisterField::Activities,
                RegisterField::Bio,
                RegisterField::City,
            ],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegisterField::Name => "Name",
            RegisterField::Breed => "Breed",
            RegisterField::Age => "Age",
            RegisterField::Gender => "Gender",
            RegisterField::Size => "Size",
            RegisterField::Energy => "Energy",
            RegisterField::Activities => "Activities",
            RegisterField::Bio => "Bio",
            RegisterField::City => "City",
        }
    }

    /// Key used by the validator for this field.
    pub fn error_key(&self) -> &'static str {
        match self {
            RegisterField::Name => "name",
            RegisterField::Breed => "breed",
            RegisterField::Age => "age",
            RegisterField::Gender => "gender",
            RegisterField::Size => "size",
            RegisterField::Energy => "energy",
            RegisterField::Activities => "activities",
            RegisterField::Bio => "bio",
            RegisterField::City => "city",
        }
    }

    /// Fields edited by typing.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            RegisterField::Name
                | RegisterField::Breed
                | RegisterField::Age
                | RegisterField::Bio
                | RegisterField::City
        )
    }
}

/// Registration screen state around the form itself.
#[derive(Debug, Clone, Default)]
pub struct RegisterView {
    pub focus_index: usize,
    /// Highlighted entry of the activity picker
    pub activity_cursor: usize,
    pub age_text: String,
    pub errors: Vec<crate::error::FieldError>,
}

/// One row of the preferences screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefRow {
    Radius,
    MinAge,
    MaxAge,
    Size(DogSize),
    Energy(EnergyLevel),
    Breed(&'static str),
    Activity(&'static str),
}

impl PrefRow {
    /// Every row, top to bottom.
    pub fn all() -> Vec<PrefRow> {
        let mut rows = vec![PrefRow::Radius, PrefRow::MinAge, PrefRow::MaxAge];
        rows.extend(DogSize::ALL.iter().copied().map(PrefRow::Size));
        rows.extend(EnergyLevel::ALL.iter().copied().map(PrefRow::Energy));
        rows.extend(BREED_OPTIONS.iter().copied().map(PrefRow::Breed));
        rows.extend(ACTIVITY_OPTIONS.iter().copied().map(PrefRow::Activity));
        rows
    }

    /// Section heading shown above the first row of each group.
    pub fn section(&self) -> &'static str {
        match self {
            PrefRow::Radius | PrefRow::MinAge | PrefRow::MaxAge => "Distance & age",
            PrefRow::Size(_) => "Size",
            PrefRow::Energy(_) => "Energy level",
            PrefRow::Breed(_) => "Breeds",
            PrefRow::Activity(_) => "Activities",
        }
    }
}

fn cycle<T: Copy + PartialEq>(items: &[T], current: T, forward: bool) -> T {
    let len = items.len();
    let index = items.iter().position(|i| *i == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    items[next]
}

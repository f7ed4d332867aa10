//! Navigation methods for the App.

use std::time::Instant;

use chrono::{DateTime, Utc};

use super::{App, AuthForm, RegisterView, Screen, ToastKind};
use crate::error::ResultExt;
use crate::services::DogRegistration;

impl App {
    /// Switch screens, sending signed-out users to sign-in for protected screens.
    pub fn navigate_to(&mut self, screen: Screen) {
        self.navigate_to_at(screen, Utc::now());
    }

    /// Returns the screen actually shown.
    pub fn navigate_to_at(&mut self, screen: Screen, now: DateTime<Utc>) -> Screen {
        let mut target = screen;
        if screen.requires_auth() && !self.auth.check_auth_at(now).log_err("check_auth").unwrap_or(false) {
            tracing::debug!(?screen, "route guard redirected to sign-in");
            self.session = None;
            target = Screen::SignIn;
        }

        match target {
            Screen::Swipe | Screen::Profile => {
                if let Err(err) = self.ensure_session().log_err("start_session") {
                    self.report_error(err, Instant::now());
                    return self.screen;
                }
            }
            Screen::Preferences => {
                self.filters_draft = match &self.session {
                    Some(session) => session.filters().clone(),
                    None => self
                        .preferences
                        .load()
                        .log_err("load_preferences")
                        .unwrap_or_default(),
                };
                self.pref_cursor = 0;
            }
            Screen::SignIn => {
                self.sign_in.password.clear();
                self.sign_in.error = None;
            }
            Screen::Register => {
                self.register_view.errors.clear();
            }
            _ => {}
        }

        self.dragging = false;
        self.screen = target;
        self.mark_dirty();
        target
    }

    /// After a successful sign-in: swipe when a dog is registered, otherwise register one.
    pub fn enter_after_auth(&mut self) {
        let has_dog = self
            .profile
            .load()
            .log_err("load_profile")
            .map(|p| p.is_some())
            .unwrap_or(false);
        if has_dog {
            self.navigate_to(Screen::Swipe);
        } else {
            self.start_registration();
        }
    }

    /// Open the registration form, prefilled from the saved dog if there is one.
    pub fn start_registration(&mut self) {
        self.registration = match self.profile.load().log_err("load_profile") {
            Ok(Some(profile)) => DogRegistration::from_profile(&profile),
            _ => DogRegistration::new(),
        };
        self.register_view = RegisterView {
            age_text: self
                .registration
                .age
                .map(|a| a.to_string())
                .unwrap_or_default(),
            ..RegisterView::default()
        };
        self.navigate_to(Screen::Register);
    }

    pub fn sign_out(&mut self) {
        match self.auth.sign_out().log_err("sign_out") {
            Ok(()) => {
                self.session = None;
                self.sign_in = AuthForm::default();
                self.sign_up = AuthForm::sign_up();
                self.screen = Screen::Welcome;
                self.show_toast("Signed out", ToastKind::Info, Instant::now());
            }
            Err(err) => self.report_error(err, Instant::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::models::{DogSize, EnergyLevel, LoginCredentials};
    use crate::services::{DEMO_EMAIL, DEMO_PASSWORD};

    #[test]
    fn test_guard_redirects_signed_out_user() {
        let (mut app, _) = app_with_chance(0.0);
        for screen in [Screen::Swipe, Screen::Preferences, Screen::Profile, Screen::Register] {
            assert_eq!(app.navigate_to_at(screen, Utc::now()), Screen::SignIn);
        }
        assert!(app.session.is_none());
    }

    #[test]
    fn test_public_screens_open_without_session() {
        let (mut app, _) = app_with_chance(0.0);
        assert_eq!(app.navigate_to_at(Screen::SignUp, Utc::now()), Screen::SignUp);
        assert_eq!(app.navigate_to_at(Screen::Welcome, Utc::now()), Screen::Welcome);
    }

    #[test]
    fn test_swipe_screen_builds_session() {
        let (app, _) = swiping_app(0.0);
        let session = app.session.as_ref().unwrap();
        assert!(!session.deck().is_empty());
    }

    #[test]
    fn test_enter_after_auth_without_dog_opens_registration() {
        let (mut app, _) = app_with_chance(0.0);
        app.auth
            .sign_in(&LoginCredentials::new(DEMO_EMAIL, DEMO_PASSWORD))
            .unwrap();
        app.enter_after_auth();
        assert_eq!(app.screen, Screen::Register);
        assert_eq!(app.registration.step(), 1);
    }

    #[test]
    fn test_enter_after_auth_with_dog_opens_swipe() {
        let (mut app, _) = app_with_chance(0.0);
        let user = app
            .auth
            .sign_in(&LoginCredentials::new(DEMO_EMAIL, DEMO_PASSWORD))
            .unwrap();
        let mut form = DogRegistration::new();
        form.name = "Biscuit".to_string();
        form.breed = "Beagle".to_string();
        form.age = Some(3);
        form.size = Some(DogSize::Medium);
        form.energy = Some(EnergyLevel::High);
        form.toggle_activity("Fetch");
        app.profile.submit(&form, &user, Utc::now()).unwrap();

        app.enter_after_auth();
        assert_eq!(app.screen, Screen::Swipe);

        app.start_registration();
        assert_eq!(app.registration.name, "Biscuit");
        assert_eq!(app.register_view.age_text, "3");
    }

    #[test]
    fn test_sign_out_returns_to_welcome() {
        let (mut app, _) = swiping_app(0.0);
        app.sign_out();
        assert_eq!(app.screen, Screen::Welcome);
        assert!(app.session.is_none());
        assert!(!app.auth.is_authenticated());
    }

    #[test]
    fn test_preferences_draft_follows_session_filters() {
        let (mut app, _) = swiping_app(0.0);
        let mut filters = app.filters_draft.clone();
        filters.toggle_size(DogSize::Toy);
        app.session.as_mut().unwrap().set_filters(filters.clone());

        app.navigate_to(Screen::Preferences);
        assert_eq!(app.filters_draft, filters);
    }
}

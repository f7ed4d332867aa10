//! Application state for the PawMatch terminal front end.
//!
//! [`App`] owns the services, the swipe session and all per-screen form state.
//! Input arrives through [`handlers`](self::handlers); rendering lives in
//! [`crate::ui`] and only reads from here (plus registering hit areas).

mod forms;
mod handlers;
mod navigation;
mod types;

pub use types::{
    AuthField, AuthForm, PrefRow, RegisterField, RegisterView, Screen, Toast, ToastKind,
    TOAST_DURATION,
};

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::deck::{SwipeResolved, SwipeSession};
use crate::error::{PawError, PawResult, ResultExt};
use crate::models::DogFilters;
use crate::services::{AuthService, DogRegistration, DogService, PreferencesService, ProfileService};
use crate::swipe::{Point, SwipeEngine};
use crate::traits::KeyValueStore;
use crate::ui::interaction::HitAreaRegistry;

/// Main application state
pub struct App {
    pub config: AppConfig,
    /// Current screen being displayed
    pub screen: Screen,
    pub auth: AuthService,
    pub preferences: PreferencesService,
    pub profile: ProfileService,
    /// Created on first visit to the swipe screen
    pub session: Option<SwipeSession>,
    pub sign_in: AuthForm,
    pub sign_up: AuthForm,
    pub registration: DogRegistration,
    pub register_view: RegisterView,
    /// Filters being edited on the preferences screen
    pub filters_draft: DogFilters,
    pub pref_rows: Vec<PrefRow>,
    pub pref_cursor: usize,
    pub toast: Option<Toast>,
    /// Clickable regions of the last frame
    pub hit_areas: HitAreaRegistry,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Flag indicating the UI needs to be redrawn
    pub needs_redraw: bool,
    pub should_quit: bool,
    /// A left-button drag on the card is in progress
    pub(crate) dragging: bool,
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("authenticated", &self.auth.is_authenticated())
            .field("has_session", &self.session.is_some())
            .field("toast", &self.toast)
            .finish_non_exhaustive()
    }
}

impl App {
    pub fn new(config: AppConfig, store: Arc<dyn KeyValueStore>) -> PawResult<Self> {
        let auth = AuthService::new(store.clone())?;
        let preferences = PreferencesService::new(store.clone());
        let filters_draft = preferences.load()?;

        Ok(Self {
            config,
            screen: Screen::default(),
            auth,
            preferences,
            profile: ProfileService::new(store.clone()),
            session: None,
            sign_in: AuthForm::default(),
            sign_up: AuthForm::sign_up(),
            registration: DogRegistration::new(),
            register_view: RegisterView::default(),
            filters_draft,
            pref_rows: PrefRow::all(),
            pref_cursor: 0,
            toast: None,
            hit_areas: HitAreaRegistry::new(),
            terminal_width: 80,
            terminal_height: 24,
            needs_redraw: true,
            should_quit: false,
            dragging: false,
            store,
        })
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    pub fn set_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Viewport width for the gesture engine, in pixel-like units.
    pub fn viewport_width_px(&self) -> f64 {
        f64::from(self.terminal_width) * self.config.cell_width_px
    }

    /// Convert a terminal cell to pixel-like units.
    pub fn cell_to_px(&self, column: u16, row: u16) -> Point {
        Point::new(
            f64::from(column) * self.config.cell_width_px,
            f64::from(row) * self.config.cell_height_px,
        )
    }

    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        self.toast = Some(Toast::new(message, kind, now));
        self.mark_dirty();
    }

    /// Surface an error as a toast; errors needing a fresh sign-in also route there.
    pub fn report_error(&mut self, err: PawError, now: Instant) {
        if err.requires_reauth() {
            self.session = None;
            self.screen = Screen::SignIn;
        }
        self.show_toast(err.user_message(), ToastKind::Error, now);
    }

    fn leave_session(&mut self) {
        self.session = None;
        self.dragging = false;
        self.screen = Screen::SignIn;
    }

    /// Periodic update driven by the event loop.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now(), Utc::now());
    }

    /// Expire toasts, enforce the session and finish card animations.
    pub fn tick_at(&mut self, now: Instant, wall: DateTime<Utc>) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
            self.mark_dirty();
        }

        if self.screen.requires_auth() {
            match self.auth.check_auth_at(wall).log_err("check_auth") {
                Ok(true) => {}
                Ok(false) => {
                    self.leave_session();
                    self.show_toast(
                        "Your session has expired. Please sign in again.",
                        ToastKind::Error,
                        now,
                    );
                    return;
                }
                Err(err) => {
                    // the session is gone either way; report once, not every tick
                    self.leave_session();
                    self.report_error(err, now);
                    return;
                }
            }
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.is_animating() {
            self.needs_redraw = true;
        }
        match session.tick(now).log_err("submit_swipe") {
            Ok(Some(resolved)) => self.on_swipe_resolved(resolved, now),
            Ok(None) => {}
            Err(err) => self.report_error(err, now),
        }
    }

    fn on_swipe_resolved(&mut self, resolved: SwipeResolved, now: Instant) {
        tracing::debug!(
            dog_id = %resolved.dog.id,
            action = %resolved.action,
            matched = resolved.outcome.is_match(),
            "swipe resolved"
        );
        if let Some(matched) = &resolved.outcome.matched {
            let message = format!("🎉 It's a match! You matched with {}!", matched.dog.name);
            self.show_toast(message, ToastKind::Match, now);
        }
        self.mark_dirty();
    }

    /// Build the swipe session if it does not exist yet.
    pub(crate) fn ensure_session(&mut self) -> PawResult<()> {
        if self.session.is_some() {
            return Ok(());
        }
        let dogs = DogService::new(self.store.clone())?
            .with_mutual_like_chance(self.config.mutual_like_chance);
        let filters = self.preferences.load()?;
        let session = SwipeSession::new(
            dogs,
            SwipeEngine::with_config(self.config.swipe),
            filters,
            self.config.refill_below,
        );
        tracing::info!(cards = session.deck().len(), "swipe session started");
        self.session = Some(session);
        Ok(())
    }

    /// Number of matches so far, zero before the swipe screen was opened.
    pub fn match_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.dogs().matches().len())
    }

    pub(crate) fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::models::LoginCredentials;
    use crate::services::{DEMO_EMAIL, DEMO_PASSWORD};

    /// App over an in-memory store; `chance` is the mutual-like probability.
    pub fn app_with_chance(chance: f64) -> (App, InMemoryStore) {
        let store = InMemoryStore::new();
        let config = AppConfig::default().with_mutual_like_chance(chance);
        let app = App::new(config, Arc::new(store.clone())).unwrap();
        (app, store)
    }

    /// Signed in as the demo user and on the swipe screen.
    pub fn swiping_app(chance: f64) -> (App, InMemoryStore) {
        let (mut app, store) = app_with_chance(chance);
        app.auth
            .sign_in(&LoginCredentials::new(DEMO_EMAIL, DEMO_PASSWORD))
            .unwrap();
        app.navigate_to(Screen::Swipe);
        assert_eq!(app.screen, Screen::Swipe);
        (app, store)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::swipe::{CardCommand, SwipeAction, COMMIT_DELAY};
    use chrono::Duration as ChronoDuration;

    #[test]
    fn test_new_app_starts_on_welcome() {
        let (app, _) = app_with_chance(0.0);
        assert_eq!(app.screen, Screen::Welcome);
        assert!(app.needs_redraw);
        assert!(!app.should_quit);
        assert_eq!(app.match_count(), 0);
    }

    #[test]
    fn test_cell_to_px_uses_config() {
        let (mut app, _) = app_with_chance(0.0);
        app.set_terminal_size(100, 40);
        assert_eq!(app.cell_to_px(10, 2), Point::new(80.0, 32.0));
        assert_eq!(app.viewport_width_px(), 800.0);
    }

    #[test]
    fn test_toast_expires_on_tick() {
        let (mut app, _) = app_with_chance(0.0);
        let now = Instant::now();
        app.show_toast("hello", ToastKind::Info, now);
        app.needs_redraw = false;

        app.tick_at(now, Utc::now());
        assert!(app.toast.is_some());

        app.tick_at(now + TOAST_DURATION, Utc::now());
        assert!(app.toast.is_none());
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_match_shows_toast() {
        let (mut app, _) = swiping_app(1.0);
        let now = Instant::now();
        let name = app.session.as_ref().unwrap().current().unwrap().name.clone();

        app.apply_card_command(CardCommand::Swipe(SwipeAction::Like), now);
        app.tick_at(now + COMMIT_DELAY, Utc::now());

        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Match);
        assert_eq!(
            toast.message,
            format!("🎉 It's a match! You matched with {}!", name)
        );
        assert_eq!(app.match_count(), 1);
    }

    #[test]
    fn test_expired_session_routes_to_sign_in() {
        let (mut app, _) = swiping_app(0.0);
        app.tick_at(Instant::now(), Utc::now() + ChronoDuration::hours(2));

        assert_eq!(app.screen, Screen::SignIn);
        assert!(app.session.is_none());
        assert!(!app.auth.is_authenticated());
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn test_failed_sign_out_on_expiry_reports_once() {
        let (mut app, store) = swiping_app(0.0);
        store.set_remove_should_fail(true);
        let now = Instant::now();
        let later = Utc::now() + ChronoDuration::hours(2);

        app.tick_at(now, later);
        assert_eq!(app.screen, Screen::SignIn);
        assert!(app.session.is_none());
        let first = app.toast.clone().unwrap();
        assert_eq!(first.kind, ToastKind::Error);

        app.toast = None;
        app.tick_at(now + std::time::Duration::from_millis(16), later);
        assert!(app.toast.is_none());
    }
}

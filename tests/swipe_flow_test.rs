//! End-to-end swiping: mouse drags, keys and the wheel through to storage.

mod common;

use std::time::Instant;

use chrono::Utc;
use crossterm::event::{KeyCode, MouseEventKind};
use pawmatch::app::{Screen, ToastKind};
use pawmatch::services::DogService;
use pawmatch::swipe::{SwipeAction, COMMIT_DELAY};
use pawmatch::ui::interaction::ClickAction;

use common::{
    ctrl, file_store, key, left_down, left_drag, left_up, mouse, render, reopen_app,
    signed_in_app,
};

#[test]
fn test_drag_right_commits_like_and_matches() {
    let (mut app, dir) = signed_in_app(1.0);
    app.navigate_to(Screen::Swipe);
    render(&mut app);

    let card = app.hit_areas.card_rect().expect("card should be draggable");
    let (x, y) = (card.x + card.width / 2, card.y + card.height / 2);
    let liked = app.session.as_ref().unwrap().current().unwrap().clone();

    let t0 = Instant::now();
    app.handle_mouse_at(left_down(x, y), t0);
    // 20 cells at 8px is past the 100px threshold
    app.handle_mouse_at(left_drag(x + 20, y), t0);
    app.handle_mouse_at(left_up(x + 20, y), t0);
    assert!(app.session.as_ref().unwrap().tracker().is_committing());

    app.tick_at(t0 + COMMIT_DELAY, Utc::now());

    let session = app.session.as_ref().unwrap();
    assert_eq!(session.dogs().swipes().len(), 1);
    assert_eq!(session.dogs().swipes()[0].action, SwipeAction::Like);
    assert_eq!(session.dogs().matches()[0].dog.id, liked.id);
    let toast = app.toast.as_ref().unwrap();
    assert_eq!(toast.kind, ToastKind::Match);
    assert!(toast.message.contains(&liked.name));

    // written through to disk
    let reread = DogService::new(file_store(&dir)).unwrap();
    assert_eq!(reread.stats().matches, 1);
}

#[test]
fn test_short_drag_snaps_back() {
    let (mut app, _dir) = signed_in_app(1.0);
    app.navigate_to(Screen::Swipe);
    render(&mut app);

    let card = app.hit_areas.card_rect().unwrap();
    let (x, y) = (card.x + card.width / 2, card.y + card.height / 2);
    let t0 = Instant::now();
    app.handle_mouse_at(left_down(x, y), t0);
    app.handle_mouse_at(left_drag(x + 3, y), t0);
    app.handle_mouse_at(left_up(x + 3, y), t0);

    app.tick_at(t0 + COMMIT_DELAY, Utc::now());
    let session = app.session.as_ref().unwrap();
    assert!(session.dogs().swipes().is_empty());
    assert!(session.tracker().is_idle());
}

#[test]
fn test_keys_pass_then_undo() {
    let (mut app, _dir) = signed_in_app(0.0);
    app.navigate_to(Screen::Swipe);
    let first = app.session.as_ref().unwrap().current().unwrap().clone();

    let t0 = Instant::now();
    app.handle_key_at(key(KeyCode::Left), t0);
    app.tick_at(t0 + COMMIT_DELAY, Utc::now());
    assert_ne!(app.session.as_ref().unwrap().current().unwrap().id, first.id);

    app.handle_key_at(ctrl('z'), t0 + COMMIT_DELAY);
    let session = app.session.as_ref().unwrap();
    assert_eq!(session.current().unwrap().id, first.id);
    assert!(session.dogs().swipes().is_empty());
    assert!(app.toast.as_ref().unwrap().message.contains(&first.name));
}

#[test]
fn test_wheel_up_favorites() {
    let (mut app, _dir) = signed_in_app(0.0);
    app.navigate_to(Screen::Swipe);

    let t0 = Instant::now();
    app.handle_mouse_at(mouse(MouseEventKind::ScrollUp, 40, 10), t0);
    app.tick_at(t0 + COMMIT_DELAY, Utc::now());

    let session = app.session.as_ref().unwrap();
    assert_eq!(session.dogs().swipes()[0].action, SwipeAction::Favorite);
    assert_eq!(session.dogs().stats().favorites, 1);
}

#[test]
fn test_clicking_like_button() {
    let (mut app, _dir) = signed_in_app(0.0);
    app.navigate_to(Screen::Swipe);
    render(&mut app);
    let like_col = (0..24u16).find_map(|row| {
        (0..80u16)
            .find(|col| {
                app.hit_areas.hit_test(*col, row) == Some(ClickAction::Swipe(SwipeAction::Like))
            })
            .map(|col| (col, row))
    });
    let (col, row) = like_col.expect("like button should be on screen");

    let t0 = Instant::now();
    app.handle_mouse_at(left_down(col, row), t0);
    app.tick_at(t0 + COMMIT_DELAY, Utc::now());
    assert_eq!(
        app.session.as_ref().unwrap().dogs().swipes()[0].action,
        SwipeAction::Like
    );
}

#[test]
fn test_history_survives_restart() {
    let (mut app, dir) = signed_in_app(0.0);
    app.navigate_to(Screen::Swipe);
    let t0 = Instant::now();
    app.handle_key_at(key(KeyCode::Right), t0);
    app.tick_at(t0 + COMMIT_DELAY, Utc::now());
    let swiped = app.session.as_ref().unwrap().dogs().swipes()[0].dog_id.clone();
    drop(app);

    let mut app = reopen_app(&dir, 0.0);
    assert!(app.auth.is_authenticated(), "session is restored from disk");
    app.navigate_to(Screen::Swipe);
    let session = app.session.as_ref().unwrap();
    assert_eq!(session.dogs().swipes().len(), 1);
    assert!(session.deck().iter().all(|dog| dog.id != swiped));
}

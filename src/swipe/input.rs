//! Discrete inputs that decide a card without dragging it.

use super::types::SwipeAction;

/// Wheel delta magnitude (pixels) needed before a scroll counts as a swipe.
pub const WHEEL_THRESHOLD: f64 = 20.0;

/// Command produced by a key press on the swipe screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardCommand {
    Swipe(SwipeAction),
    Undo,
}

/// Key identity the mapping cares about, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    Char(char),
}

/// Map a key press to a card command.
///
/// `Ctrl+Z` / `Cmd+Z` undoes; the arrows decide the front card.
pub fn key_command(key: CardKey, ctrl_or_meta: bool) -> Option<CardCommand> {
    match key {
        CardKey::ArrowLeft => Some(CardCommand::Swipe(SwipeAction::Pass)),
        CardKey::ArrowRight => Some(CardCommand::Swipe(SwipeAction::Like)),
        CardKey::ArrowUp => Some(CardCommand::Swipe(SwipeAction::Favorite)),
        CardKey::Char('z' | 'Z') if ctrl_or_meta => Some(CardCommand::Undo),
        CardKey::Char(_) => None,
    }
}

/// Map a wheel delta to an action with the same axis-dominance rule as drags.
///
/// Scrolling down never decides anything.
pub fn wheel_action(delta_x: f64, delta_y: f64) -> Option<SwipeAction> {
    if delta_x.abs() > delta_y.abs() {
        if delta_x > WHEEL_THRESHOLD {
            Some(SwipeAction::Like)
        } else if delta_x < -WHEEL_THRESHOLD {
            Some(SwipeAction::Pass)
        } else {
            None
        }
    } else if delta_y < -WHEEL_THRESHOLD {
        Some(SwipeAction::Favorite)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(key_command(CardKey::ArrowLeft, false), Some(CardCommand::Swipe(SwipeAction::Pass)));
        assert_eq!(key_command(CardKey::ArrowRight, false), Some(CardCommand::Swipe(SwipeAction::Like)));
        assert_eq!(key_command(CardKey::ArrowUp, true), Some(CardCommand::Swipe(SwipeAction::Favorite)));
    }

    #[test]
    fn test_undo_needs_modifier() {
        assert_eq!(key_command(CardKey::Char('z'), true), Some(CardCommand::Undo));
        assert_eq!(key_command(CardKey::Char('Z'), true), Some(CardCommand::Undo));
        assert_eq!(key_command(CardKey::Char('z'), false), None);
        assert_eq!(key_command(CardKey::Char('x'), true), None);
    }

    #[test]
    fn test_wheel_mapping() {
        assert_eq!(wheel_action(48.0, 0.0), Some(SwipeAction::Like));
        assert_eq!(wheel_action(-48.0, 3.0), Some(SwipeAction::Pass));
        assert_eq!(wheel_action(0.0, -48.0), Some(SwipeAction::Favorite));
        assert_eq!(wheel_action(0.0, 48.0), None);
        assert_eq!(wheel_action(15.0, 0.0), None);
        assert_eq!(wheel_action(0.0, -20.0), None);
    }
}

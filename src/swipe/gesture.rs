//! Lifecycle of one card gesture.
//!
//! ```text
//! Idle --down--> Dragging --up--> Committing --tick--> Idle
//!                          \----> SnappingBack --tick--> Idle
//! ```
//!
//! Time is passed in explicitly so the tracker can be driven by the event
//! loop's tick as well as by tests.

use std::time::{Duration, Instant};

use super::engine::{compute_drag_state, should_trigger_swipe};
use super::types::{Direction, DragState, Point, SwipeAction, SwipeConfig};

/// How long a committed card animates off-screen before the action fires.
pub const COMMIT_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    Idle,
    Dragging(DragState),
    Committing {
        action: SwipeAction,
        state: DragState,
        started: Instant,
    },
    SnappingBack {
        from: DragState,
        started: Instant,
        duration: Duration,
    },
}

/// What a pointer release did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The drag crossed the threshold; the action fires after [`COMMIT_DELAY`].
    Committed(SwipeAction),
    SnappedBack,
    /// Release without an active drag.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct GestureTracker {
    phase: GesturePhase,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            phase: GesturePhase::Idle,
        }
    }

    pub fn phase(&self) -> &GesturePhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, GesturePhase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging(_))
    }

    pub fn is_committing(&self) -> bool {
        matches!(self.phase, GesturePhase::Committing { .. })
    }

    /// Start a drag at `at`. Ignored while a committed card is still leaving.
    pub fn pointer_down(&mut self, at: Point, config: &SwipeConfig, viewport_width: f64) -> bool {
        if self.is_committing() {
            return false;
        }
        self.phase = GesturePhase::Dragging(compute_drag_state(at, at, true, config, viewport_width));
        true
    }

    /// Track the pointer. Returns true when the drag state changed.
    pub fn pointer_move(&mut self, at: Point, config: &SwipeConfig, viewport_width: f64) -> bool {
        let GesturePhase::Dragging(state) = &mut self.phase else {
            return false;
        };
        let next = compute_drag_state(state.start, at, true, config, viewport_width);
        let changed = next != *state;
        *state = next;
        changed
    }

    /// End the drag and decide between committing and snapping back.
    pub fn pointer_up(&mut self, config: &SwipeConfig, now: Instant) -> ReleaseOutcome {
        let GesturePhase::Dragging(state) = self.phase else {
            return ReleaseOutcome::Ignored;
        };
        let released = DragState {
            is_dragging: false,
            ..state
        };

        match should_trigger_swipe(&released, config).action {
            Some(action) => {
                tracing::debug!(%action, dx = released.delta.x, dy = released.delta.y, "swipe committed");
                self.phase = GesturePhase::Committing {
                    action,
                    state: exit_state(&released, action),
                    started: now,
                };
                ReleaseOutcome::Committed(action)
            }
            None => {
                self.phase = GesturePhase::SnappingBack {
                    from: released,
                    started: now,
                    duration: millis(config.snap_back_duration),
                };
                ReleaseOutcome::SnappedBack
            }
        }
    }

    /// Commit `action` without a drag (buttons, keys, wheel).
    ///
    /// Returns false if another commit is already in flight.
    pub fn commit(&mut self, action: SwipeAction, now: Instant) -> bool {
        if self.is_committing() {
            return false;
        }
        let from = match self.phase {
            GesturePhase::Dragging(state) => state,
            _ => DragState::neutral(),
        };
        self.phase = GesturePhase::Committing {
            action,
            state: exit_state(&from, action),
            started: now,
        };
        true
    }

    /// Advance animations. Returns the action once a commit has finished.
    pub fn tick(&mut self, now: Instant) -> Option<SwipeAction> {
        match self.phase {
            GesturePhase::Committing { action, started, .. }
                if now.saturating_duration_since(started) >= COMMIT_DELAY =>
            {
                self.phase = GesturePhase::Idle;
                Some(action)
            }
            GesturePhase::SnappingBack { started, duration, .. }
                if now.saturating_duration_since(started) >= duration =>
            {
                self.phase = GesturePhase::Idle;
                None
            }
            _ => None,
        }
    }

    /// Drop the gesture, whatever its phase.
    pub fn cancel(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    /// Drag state to draw at `now`.
    pub fn current(&self, now: Instant) -> DragState {
        match self.phase {
            GesturePhase::Idle => DragState::neutral(),
            GesturePhase::Dragging(state) => state,
            GesturePhase::Committing { state, .. } => state,
            GesturePhase::SnappingBack {
                from,
                started,
                duration,
            } => snap_back_frame(&from, now.saturating_duration_since(started), duration),
        }
    }
}

fn millis(ms: f64) -> Duration {
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::ZERO)
}

/// Card flying off-screen towards the action's exit target, fully transparent.
fn exit_state(from: &DragState, action: SwipeAction) -> DragState {
    let target = action.exit_target();
    DragState {
        is_dragging: false,
        start: from.start,
        current: Point::new(from.start.x + target.x, from.start.y + target.y),
        delta: target,
        rotation_deg: from.rotation_deg,
        opacity: 0.0,
        direction: from.direction,
    }
}

/// Linear interpolation from `from` back to the neutral card.
fn snap_back_frame(from: &DragState, elapsed: Duration, duration: Duration) -> DragState {
    let progress = if duration.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
    };
    let remaining = 1.0 - progress;

    DragState {
        is_dragging: false,
        start: from.start,
        current: Point::new(
            from.start.x + from.delta.x * remaining,
            from.start.y + from.delta.y * remaining,
        ),
        delta: Point::new(from.delta.x * remaining, from.delta.y * remaining),
        rotation_deg: from.rotation_deg * remaining,
        opacity: from.opacity + (1.0 - from.opacity) * progress,
        direction: Direction::None,
    }
}

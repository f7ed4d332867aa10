//! Swipe gesture interpretation.
//!
//! - [`engine`] - pure drag state computation and commit decision
//! - [`gesture`] - the per-card gesture lifecycle
//! - [`input`] - key and wheel shortcuts
//! - [`types`] - shared value types

pub mod engine;
pub mod gesture;
pub mod input;
pub mod types;

pub use engine::{
    card_transform, compute_drag_state, overlay_label, should_trigger_swipe, SwipeEngine,
};
pub use gesture::{GesturePhase, GestureTracker, ReleaseOutcome, COMMIT_DELAY};
pub use input::{key_command, wheel_action, CardCommand, CardKey, WHEEL_THRESHOLD};
pub use types::{
    CardTransform, Direction, DragState, OverlayLabel, Point, SwipeAction, SwipeConfig,
    SwipeConfigUpdate, TriggerResult,
};

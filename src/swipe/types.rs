//! Value types shared by the gesture engine and its callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in viewport coordinates (pixels, or pixel-like units).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - origin`.
    pub fn delta_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    /// Euclidean length when the point is read as a vector.
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Visual direction hint for an in-progress drag.
///
/// There is no `Down`: only three directions map to actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
    Up,
}

/// A committed decision on a candidate card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Pass,
    Like,
    Favorite,
}

impl SwipeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeAction::Pass => "pass",
            SwipeAction::Like => "like",
            SwipeAction::Favorite => "favorite",
        }
    }

    /// Whether this action can produce a mutual match.
    pub fn can_match(&self) -> bool {
        matches!(self, SwipeAction::Like | SwipeAction::Favorite)
    }

    /// Off-screen target a committed card animates towards.
    pub fn exit_target(&self) -> Point {
        match self {
            SwipeAction::Pass => Point::new(-1000.0, 0.0),
            SwipeAction::Like => Point::new(1000.0, 0.0),
            SwipeAction::Favorite => Point::new(0.0, -1000.0),
        }
    }
}

impl fmt::Display for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tunable parameters read by every gesture computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwipeConfig {
    /// Minimum drag distance that commits an action.
    pub threshold: f64,
    /// Rotation in degrees at a full viewport-width drag.
    pub rotation_factor: f64,
    /// Snap-back animation length in milliseconds. Only the animation layer reads it.
    pub snap_back_duration: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: 100.0,
            rotation_factor: 20.0,
            snap_back_duration: 200.0,
        }
    }
}

/// Partial update merged into a [`SwipeConfig`]; `None` fields are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwipeConfigUpdate {
    pub threshold: Option<f64>,
    pub rotation_factor: Option<f64>,
    pub snap_back_duration: Option<f64>,
}

impl SwipeConfigUpdate {
    pub fn threshold(value: f64) -> Self {
        Self {
            threshold: Some(value),
            ..Self::default()
        }
    }

    pub fn with_rotation_factor(mut self, value: f64) -> Self {
        self.rotation_factor = Some(value);
        self
    }

    pub fn with_snap_back_duration(mut self, value: f64) -> Self {
        self.snap_back_duration = Some(value);
        self
    }

    /// Apply the present fields onto `config`.
    pub fn apply_to(&self, config: &mut SwipeConfig) {
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(rotation_factor) = self.rotation_factor {
            config.rotation_factor = rotation_factor;
        }
        if let Some(duration) = self.snap_back_duration {
            config.snap_back_duration = duration;
        }
    }
}

/// Snapshot of one drag gesture, recomputed on every move event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub is_dragging: bool,
    pub start: Point,
    pub current: Point,
    /// Always `current - start`.
    pub delta: Point,
    pub rotation_deg: f64,
    /// In `[0.5, 1.0]` for finite input.
    pub opacity: f64,
    pub direction: Direction,
}

impl DragState {
    /// The resting state of a card with no gesture applied.
    pub fn neutral() -> Self {
        Self {
            is_dragging: false,
            start: Point::ORIGIN,
            current: Point::ORIGIN,
            delta: Point::ORIGIN,
            rotation_deg: 0.0,
            opacity: 1.0,
            direction: Direction::None,
        }
    }

    pub fn distance(&self) -> f64 {
        self.delta.length()
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Outcome of evaluating a drag for commitment.
///
/// `triggered` is true exactly when `action` is `Some`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerResult {
    pub triggered: bool,
    pub action: Option<SwipeAction>,
}

impl TriggerResult {
    pub const NONE: TriggerResult = TriggerResult {
        triggered: false,
        action: None,
    };

    pub fn fire(action: SwipeAction) -> Self {
        Self {
            triggered: true,
            action: Some(action),
        }
    }
}

/// Translation plus rotation to apply to the card being dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_deg: f64,
}

impl CardTransform {
    pub const IDENTITY: CardTransform = CardTransform {
        translate_x: 0.0,
        translate_y: 0.0,
        rotate_deg: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl fmt::Display for CardTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return f.write_str("translate(0, 0) rotate(0deg)");
        }
        write!(
            f,
            "translate({}px, {}px) rotate({}deg)",
            self.translate_x, self.translate_y, self.rotate_deg
        )
    }
}

/// Text and style class shown over a card while it is dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLabel {
    pub text: &'static str,
    pub class: &'static str,
}

impl OverlayLabel {
    pub const PASS: OverlayLabel = OverlayLabel {
        text: "PASS",
        class: "pass",
    };
    pub const LIKE: OverlayLabel = OverlayLabel {
        text: "LIKE",
        class: "like",
    };
    pub const FAVORITE: OverlayLabel = OverlayLabel {
        text: "FAVORITE",
        class: "favorite",
    };
}

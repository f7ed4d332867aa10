//! Pure drag-to-action interpretation.
//!
//! Two thresholds are at work here. Direction classification in
//! [`compute_drag_state`] uses half the configured threshold so the overlay
//! label shows up early, while [`should_trigger_swipe`] needs the full
//! threshold before an action is committed. Keep them separate.

use super::types::{
    CardTransform, Direction, DragState, OverlayLabel, Point, SwipeAction, SwipeConfig,
    SwipeConfigUpdate, TriggerResult,
};

/// Build the drag state for a pointer that went down at `start` and is now at `current`.
///
/// Non-finite coordinates are not trapped and propagate into the result.
/// A `viewport_width` of zero or less yields no rotation.
pub fn compute_drag_state(
    start: Point,
    current: Point,
    is_dragging: bool,
    config: &SwipeConfig,
    viewport_width: f64,
) -> DragState {
    let delta = current.delta_from(start);
    let distance = delta.length();

    let rotation_deg = if viewport_width > 0.0 {
        (delta.x / viewport_width) * config.rotation_factor
    } else {
        0.0
    };

    // NaN passes through; `f64::max` would replace it with the floor.
    let faded = 1.0 - distance / (config.threshold * 3.0);
    let opacity = if faded.is_nan() || faded >= 0.5 { faded } else { 0.5 };

    DragState {
        is_dragging,
        start,
        current,
        delta,
        rotation_deg,
        opacity,
        direction: classify_direction(delta, config.threshold / 2.0),
    }
}

/// Axis-dominance classification against `cutoff`. Ties go to the vertical axis.
fn classify_direction(delta: Point, cutoff: f64) -> Direction {
    if delta.x.abs() > delta.y.abs() {
        if delta.x > cutoff {
            Direction::Right
        } else if delta.x < -cutoff {
            Direction::Left
        } else {
            Direction::None
        }
    } else if delta.y < -cutoff {
        Direction::Up
    } else {
        Direction::None
    }
}

/// Decide whether a (usually released) drag commits an action.
pub fn should_trigger_swipe(state: &DragState, config: &SwipeConfig) -> TriggerResult {
    let threshold = config.threshold;
    if state.distance() < threshold {
        return TriggerResult::NONE;
    }

    let delta = state.delta;
    if delta.x.abs() > delta.y.abs() {
        if delta.x < -threshold {
            return TriggerResult::fire(SwipeAction::Pass);
        }
        if delta.x > threshold {
            return TriggerResult::fire(SwipeAction::Like);
        }
    } else if delta.y < -threshold {
        return TriggerResult::fire(SwipeAction::Favorite);
    }

    TriggerResult::NONE
}

/// Transform to render the card with.
pub fn card_transform(state: &DragState) -> CardTransform {
    if !state.is_dragging && state.delta.x == 0.0 && state.delta.y == 0.0 {
        return CardTransform::IDENTITY;
    }
    CardTransform {
        translate_x: state.delta.x,
        translate_y: state.delta.y,
        rotate_deg: state.rotation_deg,
    }
}

pub fn overlay_label(direction: Direction) -> Option<OverlayLabel> {
    match direction {
        Direction::Left => Some(OverlayLabel::PASS),
        Direction::Right => Some(OverlayLabel::LIKE),
        Direction::Up => Some(OverlayLabel::FAVORITE),
        Direction::None => None,
    }
}

/// Holder of the shared [`SwipeConfig`].
///
/// The functions above take the config explicitly; this type only exists so
/// callers have one place to read and tune it between gestures.
#[derive(Debug, Clone, Default)]
pub struct SwipeEngine {
    config: SwipeConfig,
}

impl SwipeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SwipeConfig) -> Self {
        Self { config }
    }

    /// Copy of the current configuration.
    pub fn config(&self) -> SwipeConfig {
        self.config
    }

    /// Merge `update` into the configuration. No bounds checking is done.
    pub fn update_config(&mut self, update: SwipeConfigUpdate) {
        update.apply_to(&mut self.config);
        tracing::debug!(config = ?self.config, "swipe config updated");
    }

    pub fn compute(&self, start: Point, current: Point, is_dragging: bool, viewport_width: f64) -> DragState {
        compute_drag_state(start, current, is_dragging, &self.config, viewport_width)
    }

    pub fn should_trigger(&self, state: &DragState) -> TriggerResult {
        should_trigger_swipe(state, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 1000.0;

    fn drag(sx: f64, sy: f64, cx: f64, cy: f64) -> DragState {
        compute_drag_state(
            Point::new(sx, sy),
            Point::new(cx, cy),
            true,
            &SwipeConfig::default(),
            WIDTH,
        )
    }

    fn released(sx: f64, sy: f64, cx: f64, cy: f64) -> DragState {
        DragState {
            is_dragging: false,
            ..drag(sx, sy, cx, cy)
        }
    }

    #[test]
    fn test_delta_is_current_minus_start() {
        let state = drag(100.0, 100.0, 200.0, 150.0);
        assert_eq!(state.delta, Point::new(100.0, 50.0));
        assert!(state.is_dragging);
    }

    #[test]
    fn test_delta_holds_for_negative_and_fractional_input() {
        let state = drag(-12.5, 40.25, 7.75, -3.0);
        assert_eq!(state.delta, Point::new(7.75 - -12.5, -3.0 - 40.25));
    }

    #[test]
    fn test_rightward_drag_rotates_positively() {
        let state = drag(100.0, 100.0, 200.0, 100.0);
        assert!(state.rotation_deg > 0.0);
        assert!((state.rotation_deg - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_viewport_width_means_no_rotation() {
        let state = compute_drag_state(
            Point::new(0.0, 0.0),
            Point::new(300.0, 0.0),
            true,
            &SwipeConfig::default(),
            0.0,
        );
        assert_eq!(state.rotation_deg, 0.0);
    }

    #[test]
    fn test_opacity_bounds() {
        assert_eq!(drag(0.0, 0.0, 0.0, 0.0).opacity, 1.0);
        assert!((drag(0.0, 0.0, 150.0, 0.0).opacity - 0.5).abs() < 1e-9);
        assert_eq!(drag(0.0, 0.0, 5000.0, 0.0).opacity, 0.5);
        for step in 0..50 {
            let opacity = drag(0.0, 0.0, step as f64 * 13.0, step as f64 * -7.0).opacity;
            assert!((0.5..=1.0).contains(&opacity), "opacity {} out of range", opacity);
        }
    }

    #[test]
    fn test_leftward_drag_classifies_left() {
        assert_eq!(drag(200.0, 100.0, 100.0, 100.0).direction, Direction::Left);
    }

    #[test]
    fn test_direction_uses_half_threshold() {
        assert_eq!(drag(0.0, 0.0, 50.0, 0.0).direction, Direction::None);
        assert_eq!(drag(0.0, 0.0, 51.0, 0.0).direction, Direction::Right);
        assert_eq!(drag(0.0, 0.0, 0.0, -51.0).direction, Direction::Up);
    }

    #[test]
    fn test_downward_drag_has_no_direction() {
        assert_eq!(drag(0.0, 0.0, 0.0, 400.0).direction, Direction::None);
    }

    #[test]
    fn test_equal_axes_fall_to_vertical_rule() {
        assert_eq!(drag(0.0, 0.0, 80.0, -80.0).direction, Direction::Up);
        assert_eq!(drag(0.0, 0.0, 80.0, 80.0).direction, Direction::None);
    }

    #[test]
    fn test_short_drag_does_not_trigger() {
        let result = should_trigger_swipe(&released(100.0, 100.0, 110.0, 100.0), &SwipeConfig::default());
        assert_eq!(result, TriggerResult::NONE);
    }

    #[test]
    fn test_left_swipe_passes() {
        let result = should_trigger_swipe(&released(200.0, 100.0, 50.0, 100.0), &SwipeConfig::default());
        assert_eq!(result, TriggerResult::fire(SwipeAction::Pass));
    }

    #[test]
    fn test_right_swipe_likes() {
        let result = should_trigger_swipe(&released(100.0, 100.0, 250.0, 100.0), &SwipeConfig::default());
        assert!(result.triggered);
        assert_eq!(result.action, Some(SwipeAction::Like));
    }

    #[test]
    fn test_up_swipe_favorites() {
        let result = should_trigger_swipe(&released(100.0, 200.0, 100.0, 50.0), &SwipeConfig::default());
        assert_eq!(result, TriggerResult::fire(SwipeAction::Favorite));
    }

    #[test]
    fn test_far_diagonal_below_axis_threshold_does_not_trigger() {
        // distance ~113 clears the threshold but neither axis exceeds 100
        let result = should_trigger_swipe(&released(0.0, 0.0, 90.0, -70.0), &SwipeConfig::default());
        assert_eq!(result, TriggerResult::NONE);
    }

    #[test]
    fn test_preview_direction_without_commit() {
        let state = released(0.0, 0.0, 80.0, 0.0);
        assert_eq!(state.direction, Direction::Right);
        assert!(!should_trigger_swipe(&state, &SwipeConfig::default()).triggered);
    }

    #[test]
    fn test_triggered_iff_action_present() {
        let samples = [
            (0.0, 0.0),
            (150.0, 0.0),
            (-150.0, 10.0),
            (0.0, 150.0),
            (0.0, -150.0),
            (101.0, 101.0),
            (99.0, -30.0),
        ];
        for (dx, dy) in samples {
            let result = should_trigger_swipe(&released(0.0, 0.0, dx, dy), &SwipeConfig::default());
            assert_eq!(result.triggered, result.action.is_some());
        }
    }

    #[test]
    fn test_card_transform_identity_when_resting() {
        let state = DragState::neutral();
        assert_eq!(card_transform(&state), CardTransform::IDENTITY);
    }

    #[test]
    fn test_card_transform_translation() {
        let state = drag(0.0, 0.0, 50.0, 20.0);
        let transform = card_transform(&state);
        assert_eq!(transform.translate_x, 50.0);
        assert_eq!(transform.translate_y, 20.0);
        assert_eq!(transform.rotate_deg, state.rotation_deg);
    }

    #[test]
    fn test_overlay_labels() {
        assert_eq!(overlay_label(Direction::Left), Some(OverlayLabel { text: "PASS", class: "pass" }));
        assert_eq!(overlay_label(Direction::Right), Some(OverlayLabel::LIKE));
        assert_eq!(overlay_label(Direction::Up), Some(OverlayLabel::FAVORITE));
        assert_eq!(overlay_label(Direction::None), None);
    }

    #[test]
    fn test_compute_is_pure() {
        assert_eq!(drag(3.0, 4.0, 120.0, -60.0), drag(3.0, 4.0, 120.0, -60.0));
    }

    #[test]
    fn test_engine_update_config_merges() {
        let mut engine = SwipeEngine::new();
        engine.update_config(SwipeConfigUpdate::threshold(150.0));
        let config = engine.config();
        assert_eq!(config.threshold, 150.0);
        assert_eq!(config.rotation_factor, 20.0);
        assert_eq!(config.snap_back_duration, 200.0);
    }

    #[test]
    fn test_engine_config_change_applies_to_later_computations() {
        let mut engine = SwipeEngine::new();
        let before = engine.compute(Point::new(0.0, 0.0), Point::new(120.0, 0.0), false, WIDTH);
        assert!(engine.should_trigger(&before).triggered);

        engine.update_config(SwipeConfigUpdate::threshold(150.0));
        assert!(!engine.should_trigger(&before).triggered);
        let after = engine.compute(Point::new(0.0, 0.0), Point::new(120.0, 0.0), false, WIDTH);
        assert_eq!(after.direction, Direction::Right);
        assert!(!engine.should_trigger(&after).triggered);
    }

    #[test]
    fn test_nan_input_propagates() {
        let state = drag(0.0, 0.0, f64::NAN, 0.0);
        assert!(state.delta.x.is_nan());
        assert!(state.rotation_deg.is_nan());
        assert!(state.opacity.is_nan());
    }
}

//! View state for the spinning exoskeleton in the hero.
//!
//! The model scales with page scroll, turns to follow the cursor while the
//! cursor is over it, and eases back to its resting angle once the cursor
//! leaves.

use std::f64::consts::PI;

pub const BASE_ROTATION: f64 = 317.0 * PI / 180.0;
pub const FOLLOW_SENSITIVITY: f64 = PI * 1.2;
pub const RESET_DURATION_MS: f64 = 1_200.0;

const SCROLL_START: f64 = 0.0;
const SCROLL_END: f64 = 600.0;
const SCALE_AT_START: f64 = 0.9;
const SCALE_AT_END: f64 = 1.1;

pub const MIN_DISTANCE: f64 = 2.5;
pub const MAX_DISTANCE: f64 = 6.0;
const ZOOM_PER_WHEEL_PIXEL: f64 = 0.005;

/// Camera sits at (0, 1, 5) looking at the origin.
pub fn start_distance() -> f64 {
    (1.0f64 + 25.0).sqrt()
}

/// Linear map of scroll offset onto model scale, clamped at both ends.
pub fn scroll_scale(scroll_y: f64) -> f64 {
    let t = ((scroll_y - SCROLL_START) / (SCROLL_END - SCROLL_START)).clamp(0.0, 1.0);
    SCALE_AT_START + (SCALE_AT_END - SCALE_AT_START) * t
}

/// power3.out: fast start, gentle landing.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }

    /// Horizontal position of `x` inside the box, 0.0 at the left edge.
    pub fn fraction_x(&self, x: f64) -> f64 {
        if self.width <= 0.0 {
            return 0.5;
        }
        (x - self.left) / self.width
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationTween {
    from: f64,
    to: f64,
    duration_ms: f64,
    elapsed_ms: f64,
}

impl RotationTween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self { from, to, duration_ms, elapsed_ms: 0.0 }
    }

    pub fn step(&mut self, dt_ms: f64) -> f64 {
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
        self.value()
    }

    pub fn value(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let eased = ease_out_cubic(self.elapsed_ms / self.duration_ms);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_done(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    following: bool,
    cursor_x: f64,
    rotation: f64,
    scroll_y: f64,
    distance: f64,
    tween: Option<RotationTween>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            following: false,
            cursor_x: 0.5,
            rotation: BASE_ROTATION,
            scroll_y: 0.0,
            distance: start_distance(),
            tween: None,
        }
    }
}

impl ViewState {
    pub fn is_following(&self) -> bool {
        self.following
    }

    pub fn is_resetting(&self) -> bool {
        self.tween.is_some()
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Feeds a window-level pointer position. Returns true when the model
    /// switched between following and resting.
    pub fn pointer_moved(&mut self, x: f64, y: f64, bounds: &Bounds) -> bool {
        if bounds.contains(x, y) {
            let changed = !self.following;
            self.following = true;
            self.tween = None;
            self.cursor_x = bounds.fraction_x(x);
            self.rotation = BASE_ROTATION + (self.cursor_x - 0.5) * FOLLOW_SENSITIVITY;
            changed
        } else if self.following {
            self.following = false;
            self.tween = Some(RotationTween::new(self.rotation, BASE_ROTATION, RESET_DURATION_MS));
            true
        } else {
            false
        }
    }

    /// Advances the return-to-rest animation. Returns true while it is still running.
    pub fn step(&mut self, dt_ms: f64) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        self.rotation = tween.step(dt_ms);
        if tween.is_done() {
            self.tween = None;
            return false;
        }
        true
    }

    pub fn set_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }

    pub fn zoom(&mut self, wheel_delta_y: f64) {
        self.distance = (self.distance + wheel_delta_y * ZOOM_PER_WHEEL_PIXEL).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn scale(&self) -> f64 {
        scroll_scale(self.scroll_y) * start_distance() / self.distance
    }

    /// CSS transform for the model image. The resting angle renders face-on.
    pub fn css_transform(&self) -> String {
        format!(
            "perspective(1200px) rotateY({:.4}rad) scale({:.4})",
            self.rotation - BASE_ROTATION,
            self.scale()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Bounds = Bounds { left: 100.0, top: 50.0, width: 400.0, height: 300.0 };

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_scroll_scale_is_clamped_linear() {
        assert!(approx(scroll_scale(-50.0), 0.9));
        assert!(approx(scroll_scale(0.0), 0.9));
        assert!(approx(scroll_scale(300.0), 1.0));
        assert!(approx(scroll_scale(600.0), 1.1));
        assert!(approx(scroll_scale(5_000.0), 1.1));
    }

    #[test]
    fn test_easing_endpoints() {
        assert!(approx(ease_out_cubic(0.0), 0.0));
        assert!(approx(ease_out_cubic(1.0), 1.0));
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_pointer_inside_follows_cursor() {
        let mut view = ViewState::default();
        assert!(view.pointer_moved(400.0, 200.0, &BOX));
        assert!(view.is_following());
        assert!(approx(view.rotation(), BASE_ROTATION + 0.25 * FOLLOW_SENSITIVITY));

        // Still inside: no state flip, rotation keeps tracking.
        assert!(!view.pointer_moved(100.0, 200.0, &BOX));
        assert!(approx(view.rotation(), BASE_ROTATION - 0.5 * FOLLOW_SENSITIVITY));
    }

    #[test]
    fn test_leaving_eases_back_to_rest() {
        let mut view = ViewState::default();
        view.pointer_moved(500.0, 100.0, &BOX);
        let turned = view.rotation();

        assert!(view.pointer_moved(20.0, 20.0, &BOX));
        assert!(!view.is_following());
        assert!(view.is_resetting());

        let mut previous = turned;
        let mut frames = 0;
        while view.step(16.0) {
            assert!(view.rotation() <= previous);
            previous = view.rotation();
            frames += 1;
        }
        assert!(frames > 10);
        assert!(approx(view.rotation(), BASE_ROTATION));
        assert!(!view.is_resetting());
    }

    #[test]
    fn test_pointer_outside_while_resting_is_ignored() {
        let mut view = ViewState::default();
        assert!(!view.pointer_moved(0.0, 0.0, &BOX));
        assert!(!view.is_resetting());
        assert!(!view.step(16.0));
    }

    #[test]
    fn test_reset_runs_only_between_leave_and_rest() {
        let mut view = ViewState::default();
        assert!(!view.is_resetting());

        view.pointer_moved(300.0, 100.0, &BOX);
        assert!(!view.is_resetting());

        view.pointer_moved(20.0, 20.0, &BOX);
        assert!(view.is_resetting());

        // Coming back mid-ease cancels it.
        assert!(view.step(16.0));
        assert!(view.pointer_moved(300.0, 100.0, &BOX));
        assert!(!view.is_resetting());
        assert!(!view.step(16.0));

        view.pointer_moved(20.0, 20.0, &BOX);
        assert!(!view.step(RESET_DURATION_MS));
        assert!(!view.is_resetting());
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut view = ViewState::default();
        view.zoom(-10_000.0);
        assert!(approx(view.distance(), MIN_DISTANCE));
        view.zoom(10_000.0);
        assert!(approx(view.distance(), MAX_DISTANCE));
        assert!(view.scale() < scroll_scale(0.0));
    }
}

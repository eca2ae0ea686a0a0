//! Viewport transform (zoom/pan) for the map group.
//!
//! The controller owns the single `ViewportTransform` applied to every
//! polygon. Input sources (buttons, wheel, drag, pinch) are translated by
//! the render surface into `ViewportCommand`s, so nothing here depends on
//! how gestures are captured.

use crate::geo::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use eframe::egui::{Id, Pos2, Vec2};
use std::fmt;
use std::time::Duration;
use web_time::Instant;

/// Smallest allowed scale; identity is the "fit whole world" level.
pub const MIN_SCALE: f32 = 1.0;
/// Largest allowed scale.
pub const MAX_SCALE: f32 = 8.0;
/// Multiplier applied by one zoom-in/zoom-out step.
pub const ZOOM_STEP: f32 = 1.5;
pub const ZOOM_DURATION: Duration = Duration::from_millis(300);
pub const RESET_DURATION: Duration = Duration::from_millis(500);
/// Radius of overlay markers in logical units, constant on screen.
pub const MARKER_RADIUS: f32 = 12.0;

const SCALE_EPSILON: f32 = 1e-4;

/// Affine scale + translate in logical viewport units.
///
/// Maps a logical point `p` to `translate + scale * p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for ViewportTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({},{}) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

impl ViewportTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    pub fn apply(&self, p: Pos2) -> Pos2 {
        Pos2::new(
            self.translate_x + self.scale * p.x,
            self.translate_y + self.scale * p.y,
        )
    }

    pub fn invert(&self, p: Pos2) -> Pos2 {
        Pos2::new(
            (p.x - self.translate_x) / self.scale,
            (p.y - self.translate_y) / self.scale,
        )
    }

    /// Scales by `factor` around `anchor` (in viewport space), keeping the
    /// point under the anchor fixed, then clamps.
    pub fn zoomed_at(&self, anchor: Pos2, factor: f32) -> Self {
        let world = self.invert(anchor);
        let scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        Self {
            scale,
            translate_x: anchor.x - scale * world.x,
            translate_y: anchor.y - scale * world.y,
        }
        .constrained()
    }

    pub fn panned(&self, delta: Vec2) -> Self {
        Self {
            translate_x: self.translate_x + delta.x,
            translate_y: self.translate_y + delta.y,
            ..*self
        }
        .constrained()
    }

    /// Clamps scale into range and keeps the map covering the viewport.
    pub fn constrained(&self) -> Self {
        let scale = if self.scale.is_finite() {
            self.scale.clamp(MIN_SCALE, MAX_SCALE)
        } else {
            MIN_SCALE
        };
        let clamp_axis = |t: f32, extent: f32| {
            if !t.is_finite() {
                return 0.0;
            }
            t.clamp(extent * (1.0 - scale), 0.0)
        };
        Self {
            scale,
            translate_x: clamp_axis(self.translate_x, VIEWPORT_WIDTH),
            translate_y: clamp_axis(self.translate_y, VIEWPORT_HEIGHT),
        }
    }

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            scale: mix(self.scale, other.scale),
            translate_x: mix(self.translate_x, other.translate_x),
            translate_y: mix(self.translate_y, other.translate_y),
        }
    }
}

/// Inverse-scale transform for an overlay marker.
///
/// translate(anchor) · scale(1/k) · translate(-anchor): composed with the
/// viewport transform, the anchor lands where the polygons put it while the
/// marker keeps its logical size on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerTransform {
    anchor: Pos2,
    inverse_scale: f32,
}

impl MarkerTransform {
    pub fn new(anchor: Pos2, viewport: &ViewportTransform) -> Self {
        Self {
            anchor,
            inverse_scale: 1.0 / viewport.scale,
        }
    }

    pub fn apply(&self, p: Pos2) -> Pos2 {
        self.anchor + (p - self.anchor) * self.inverse_scale
    }
}

/// A request to change the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportCommand {
    ZoomIn,
    ZoomOut,
    Reset,
    PanTo(ViewportTransform),
    PanBy(Vec2),
    ZoomAt { anchor: Pos2, factor: f32 },
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: ViewportTransform,
    to: ViewportTransform,
    started: Instant,
    duration: Duration,
}

impl Transition {
    fn sample(&self, now: Instant) -> (ViewportTransform, bool) {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration || self.duration.is_zero() {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (self.from.lerp(&self.to, ease_cubic_in_out(t)), false)
    }
}

fn ease_cubic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let f = -2.0 * t + 2.0;
        1.0 - f * f * f / 2.0
    }
}

/// Owns the viewport transform and its animations.
#[derive(Debug, Default)]
pub struct ViewportController {
    surface: Option<Id>,
    current: ViewportTransform,
    target: ViewportTransform,
    transition: Option<Transition>,
    last_emitted: Option<ViewportTransform>,
}

impl ViewportController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the controller to a render surface.
    ///
    /// Returns false when already bound to `surface`. Binding to a
    /// different surface replaces the previous binding.
    pub fn attach(&mut self, surface: Id) -> bool {
        if self.surface == Some(surface) {
            return false;
        }
        log::debug!("Viewport attached to surface {:?}", surface);
        self.surface = Some(surface);
        true
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Applies a command. Ignored when no surface is attached.
    pub fn apply(&mut self, command: ViewportCommand, now: Instant) {
        if !self.is_attached() {
            log::debug!("Ignoring {:?}: no surface attached", command);
            return;
        }
        self.tick(now);

        let center = Pos2::new(VIEWPORT_WIDTH / 2.0, VIEWPORT_HEIGHT / 2.0);
        match command {
            ViewportCommand::ZoomIn => {
                let to = self.target.zoomed_at(center, ZOOM_STEP);
                self.animate_to(to, ZOOM_DURATION, now);
            }
            ViewportCommand::ZoomOut => {
                let to = self.target.zoomed_at(center, 1.0 / ZOOM_STEP);
                self.animate_to(to, ZOOM_DURATION, now);
            }
            ViewportCommand::Reset => {
                self.animate_to(ViewportTransform::IDENTITY, RESET_DURATION, now);
            }
            ViewportCommand::PanTo(transform) => self.jump_to(transform.constrained()),
            ViewportCommand::PanBy(delta) => self.jump_to(self.current.panned(delta)),
            ViewportCommand::ZoomAt { anchor, factor } => {
                self.jump_to(self.current.zoomed_at(anchor, factor))
            }
        }
    }

    pub fn zoom_in(&mut self, now: Instant) {
        self.apply(ViewportCommand::ZoomIn, now);
    }

    pub fn zoom_out(&mut self, now: Instant) {
        self.apply(ViewportCommand::ZoomOut, now);
    }

    pub fn reset(&mut self, now: Instant) {
        self.apply(ViewportCommand::Reset, now);
    }

    #[allow(dead_code)] // No gesture sets an absolute transform yet
    pub fn pan_to(&mut self, transform: ViewportTransform, now: Instant) {
        self.apply(ViewportCommand::PanTo(transform), now);
    }

    pub fn pan_by(&mut self, delta: Vec2, now: Instant) {
        self.apply(ViewportCommand::PanBy(delta), now);
    }

    /// Zooms by `factor` around a logical-space anchor without animating.
    pub fn zoom_at(&mut self, anchor: Pos2, factor: f32, now: Instant) {
        self.apply(ViewportCommand::ZoomAt { anchor, factor }, now);
    }

    fn animate_to(&mut self, to: ViewportTransform, duration: Duration, now: Instant) {
        self.target = to;
        self.transition = Some(Transition {
            from: self.current,
            to,
            started: now,
            duration,
        });
    }

    fn jump_to(&mut self, to: ViewportTransform) {
        self.transition = None;
        self.target = to;
        self.current = to;
    }

    /// Advances any running transition and returns the displayed transform.
    pub fn tick(&mut self, now: Instant) -> ViewportTransform {
        if let Some(transition) = self.transition {
            let (value, done) = transition.sample(now);
            self.current = value;
            if done {
                self.transition = None;
            }
        }
        self.current
    }

    /// Returns the displayed transform when it changed since the last call.
    pub fn poll_update(&mut self, now: Instant) -> Option<ViewportTransform> {
        let current = self.tick(now);
        if self.last_emitted == Some(current) {
            return None;
        }
        self.last_emitted = Some(current);
        Some(current)
    }

    pub fn transform(&self) -> ViewportTransform {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn can_zoom_in(&self) -> bool {
        self.target.scale < MAX_SCALE - SCALE_EPSILON
    }

    pub fn can_zoom_out(&self) -> bool {
        self.target.scale > MIN_SCALE + SCALE_EPSILON
    }

    /// Displayed scale as a whole percentage.
    pub fn zoom_percent(&self) -> u32 {
        (self.current.scale * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached() -> ViewportController {
        let mut controller = ViewportController::new();
        assert!(controller.attach(Id::new("map")));
        controller
    }

    #[test]
    fn test_attach_is_idempotent() {
        let mut controller = ViewportController::new();
        assert!(controller.attach(Id::new("map")));
        assert!(!controller.attach(Id::new("map")));
        assert!(controller.attach(Id::new("other_map")));
    }

    #[test]
    fn test_commands_ignored_before_attach() {
        let mut controller = ViewportController::new();
        let now = Instant::now();
        controller.zoom_in(now);
        controller.apply(ViewportCommand::PanBy(Vec2::new(-50.0, 0.0)), now);
        assert!(!controller.is_animating());
        assert_eq!(controller.tick(now + RESET_DURATION), ViewportTransform::IDENTITY);
    }

    #[test]
    fn test_zoom_in_saturates_at_max() {
        let mut controller = attached();
        let now = Instant::now();
        for _ in 0..20 {
            controller.zoom_in(now);
        }
        let t = controller.tick(now + ZOOM_DURATION);
        assert_eq!(t.scale, MAX_SCALE);
        assert!(!controller.can_zoom_in());
        assert!(controller.can_zoom_out());
    }

    #[test]
    fn test_zoom_steps_compound() {
        let mut controller = attached();
        let now = Instant::now();
        controller.zoom_in(now);
        controller.zoom_in(now + Duration::from_millis(50));
        let t = controller.tick(now + Duration::from_millis(400));
        assert!((t.scale - 2.25).abs() < 1e-4);
        assert_eq!(controller.zoom_percent(), 225);
    }

    #[test]
    fn test_zoom_keeps_center_fixed() {
        let mut controller = attached();
        let now = Instant::now();
        controller.zoom_in(now);
        let t = controller.tick(now + ZOOM_DURATION);
        let center = Pos2::new(VIEWPORT_WIDTH / 2.0, VIEWPORT_HEIGHT / 2.0);
        assert!((t.scale - ZOOM_STEP).abs() < 1e-6);
        let back = t.invert(center);
        assert!((back.x - center.x).abs() < 1e-3);
        assert!((back.y - center.y).abs() < 1e-3);
    }

    #[test]
    fn test_zoom_out_disabled_at_identity() {
        let mut controller = attached();
        let now = Instant::now();
        assert!(!controller.can_zoom_out());
        controller.zoom_out(now);
        assert_eq!(controller.tick(now + ZOOM_DURATION), ViewportTransform::IDENTITY);
    }

    #[test]
    fn test_reset_is_exact_identity() {
        let mut controller = attached();
        let now = Instant::now();
        controller.zoom_in(now);
        controller.apply(ViewportCommand::PanBy(Vec2::new(-40.0, 25.0)), now + ZOOM_DURATION);
        controller.reset(now + ZOOM_DURATION);
        let mid = controller.tick(now + ZOOM_DURATION + RESET_DURATION / 2);
        assert!(mid.scale > 1.0);
        let end = controller.tick(now + ZOOM_DURATION + RESET_DURATION);
        assert_eq!(end, ViewportTransform::IDENTITY);
        assert_eq!(end.to_string(), "translate(0,0) scale(1)");
    }

    #[test]
    fn test_new_command_supersedes_animation() {
        let mut controller = attached();
        let now = Instant::now();
        controller.zoom_in(now);
        let halfway = now + ZOOM_DURATION / 2;
        let displayed = controller.tick(halfway);
        controller.reset(halfway);
        let just_after = controller.tick(halfway);
        assert_eq!(just_after, displayed);
        assert_eq!(
            controller.tick(halfway + RESET_DURATION),
            ViewportTransform::IDENTITY
        );
    }

    #[test]
    fn test_pan_is_constrained_to_map() {
        let mut controller = attached();
        let now = Instant::now();
        controller.apply(ViewportCommand::PanBy(Vec2::new(300.0, 300.0)), now);
        assert_eq!(controller.transform(), ViewportTransform::IDENTITY);

        controller.apply(
            ViewportCommand::ZoomAt {
                anchor: Pos2::new(600.0, 325.0),
                factor: 2.0,
            },
            now,
        );
        controller.apply(ViewportCommand::PanBy(Vec2::new(-5000.0, 0.0)), now);
        let t = controller.transform();
        assert_eq!(t.scale, 2.0);
        assert_eq!(t.translate_x, -VIEWPORT_WIDTH);
    }

    #[test]
    fn test_poll_update_emits_changes_once() {
        let mut controller = attached();
        let now = Instant::now();
        assert_eq!(controller.poll_update(now), Some(ViewportTransform::IDENTITY));
        assert_eq!(controller.poll_update(now), None);
        controller.pan_to(
            ViewportTransform {
                scale: 2.0,
                translate_x: -100.0,
                translate_y: -50.0,
            },
            now,
        );
        let emitted = controller.poll_update(now).unwrap();
        assert_eq!(emitted.scale, 2.0);
        assert_eq!(controller.poll_update(now), None);
    }

    #[test]
    fn test_marker_radius_invariant_under_zoom() {
        let anchor = Pos2::new(400.0, 200.0);
        let on_screen_radius = |viewport: ViewportTransform| {
            let marker = MarkerTransform::new(anchor, &viewport);
            let center = viewport.apply(marker.apply(anchor));
            let edge = viewport.apply(marker.apply(anchor + Vec2::new(MARKER_RADIUS, 0.0)));
            (center, (edge - center).length())
        };

        let (c1, r1) = on_screen_radius(ViewportTransform::IDENTITY);
        let zoomed = ViewportTransform {
            scale: 4.0,
            translate_x: -900.0,
            translate_y: -500.0,
        };
        let (c4, r4) = on_screen_radius(zoomed);

        assert!((r1 - MARKER_RADIUS).abs() < 1e-4);
        assert!((r4 - r1).abs() < 1e-4);
        assert_eq!(c1, anchor);
        assert_eq!(c4, zoomed.apply(anchor));
    }
}

//! Orientation-to-position mapping.
//!
//! Each controlled screen axis keeps a clamped target and a spring that eases
//! the rendered value toward it. Clamping applies to the target only: while
//! the spring settles the eased value may briefly pass the bound.

use crate::config::{ControlMode, GameConfig, SpriteMetrics};
use crate::sensor::{Axis, OrientationSample};
use crate::spring::{Spring, SpringConfig};
use glam::Vec2;

/// Logical pixel size of the play area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Inclusive range a target is clamped into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub lower: f32,
    pub upper: f32,
}

impl AxisBounds {
    /// An inverted range (sprite larger than the viewport) collapses to
    /// `lower`.
    pub fn new(lower: f32, upper: f32) -> Self {
        Self {
            lower,
            upper: upper.max(lower),
        }
    }

    #[inline]
    pub fn clamp(&self, v: f32) -> f32 {
        v.clamp(self.lower, self.upper)
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.lower && v <= self.upper
    }

    /// Horizontal range: the sprite's left edge stays on screen.
    pub fn horizontal(viewport: Viewport, sprite: &SpriteMetrics) -> Self {
        Self::new(0.0, viewport.width - sprite.extent)
    }

    /// Vertical range in two-axis mode: `[margin, height - margin]`.
    pub fn vertical(viewport: Viewport, margin: f32) -> Self {
        Self::new(margin, viewport.height - margin)
    }
}

/// `clamp(prev - axis * sensitivity, lower, upper)`. A non-finite axis
/// reading leaves the target where it was.
#[inline]
pub fn map_target(prev: f32, axis_value: f32, sensitivity: f32, bounds: AxisBounds) -> f32 {
    if !axis_value.is_finite() {
        return bounds.clamp(prev);
    }
    bounds.clamp(prev - axis_value * sensitivity)
}

/// One screen axis following one orientation axis.
#[derive(Clone, Debug)]
pub struct AxisChannel {
    pub source: Axis,
    bounds: AxisBounds,
    target: f32,
    spring: Spring,
}

impl AxisChannel {
    pub fn new(source: Axis, bounds: AxisBounds, start: f32, spring: SpringConfig) -> Self {
        let start = bounds.clamp(start);
        Self {
            source,
            bounds,
            target: start,
            spring: Spring::new(start, spring),
        }
    }

    pub fn bounds(&self) -> AxisBounds {
        self.bounds
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn value(&self) -> f32 {
        self.spring.value()
    }

    pub fn spring(&self) -> &Spring {
        &self.spring
    }

    fn apply(&mut self, sample: &OrientationSample, sensitivity: f32) {
        self.target = map_target(self.target, sample.axis(self.source), sensitivity, self.bounds);
        self.spring.retarget(self.target);
    }

    fn set_bounds(&mut self, bounds: AxisBounds) {
        self.bounds = bounds;
        self.target = bounds.clamp(self.target);
        self.spring.retarget(self.target);
    }
}

/// Maps orientation samples to the plane's target and eased position.
#[derive(Clone, Debug)]
pub struct PositionMapper {
    sensitivity: f32,
    sprite: SpriteMetrics,
    vertical_margin: f32,
    horizontal: AxisChannel,
    vertical: Option<AxisChannel>,
    fixed_y: f32,
}

impl PositionMapper {
    /// Horizontal rotation axis (steering wheel).
    pub const HORIZONTAL_SOURCE: Axis = Axis::Z;
    /// Vertical rotation axis in two-axis mode (pitch).
    pub const VERTICAL_SOURCE: Axis = Axis::X;

    pub fn new(cfg: &GameConfig, viewport: Viewport) -> Self {
        let sprite = cfg.sprite;
        let start_x = viewport.width / 2.0 - sprite.extent / 2.0;
        let fixed_y = resting_y(viewport, &sprite);
        let horizontal = AxisChannel::new(
            Self::HORIZONTAL_SOURCE,
            AxisBounds::horizontal(viewport, &sprite),
            start_x,
            cfg.spring,
        );
        let vertical = match cfg.mode {
            ControlMode::SingleAxis => None,
            ControlMode::TwoAxis => Some(AxisChannel::new(
                Self::VERTICAL_SOURCE,
                AxisBounds::vertical(viewport, cfg.vertical_margin),
                fixed_y,
                cfg.spring,
            )),
        };
        Self {
            sensitivity: cfg.sensitivity,
            sprite,
            vertical_margin: cfg.vertical_margin,
            horizontal,
            vertical,
            fixed_y,
        }
    }

    pub fn horizontal(&self) -> &AxisChannel {
        &self.horizontal
    }

    pub fn vertical(&self) -> Option<&AxisChannel> {
        self.vertical.as_ref()
    }

    /// Retarget every channel from one sample.
    pub fn apply(&mut self, sample: &OrientationSample) {
        self.horizontal.apply(sample, self.sensitivity);
        if let Some(v) = &mut self.vertical {
            v.apply(sample, self.sensitivity);
        }
    }

    /// Advance the springs by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.horizontal.spring.step(dt);
        if let Some(v) = &mut self.vertical {
            v.spring.step(dt);
        }
    }

    /// Clamped, un-eased position.
    pub fn target(&self) -> Vec2 {
        Vec2::new(
            self.horizontal.target,
            self.vertical.as_ref().map_or(self.fixed_y, |v| v.target),
        )
    }

    /// Eased position the renderer draws.
    pub fn position(&self) -> Vec2 {
        Vec2::new(
            self.horizontal.value(),
            self.vertical.as_ref().map_or(self.fixed_y, |v| v.value()),
        )
    }

    /// Recompute bounds for a new viewport and pull targets back inside.
    pub fn resize(&mut self, viewport: Viewport) {
        self.horizontal
            .set_bounds(AxisBounds::horizontal(viewport, &self.sprite));
        self.fixed_y = resting_y(viewport, &self.sprite);
        if let Some(v) = &mut self.vertical {
            v.set_bounds(AxisBounds::vertical(viewport, self.vertical_margin));
        }
    }
}

/// Top edge of the plane when it sits `bottom_margin` above the floor.
fn resting_y(viewport: Viewport, sprite: &SpriteMetrics) -> f32 {
    (viewport.height - sprite.bottom_margin - sprite.draw_size).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_bounds_collapse_to_lower() {
        let b = AxisBounds::horizontal(Viewport::new(30.0, 100.0), &SpriteMetrics::default());
        assert_eq!(b.lower, 0.0);
        assert_eq!(b.upper, 0.0);
        assert_eq!(map_target(10.0, -5.0, 20.0, b), 0.0);
    }

    #[test]
    fn nan_axis_keeps_target() {
        let b = AxisBounds::new(0.0, 350.0);
        assert_eq!(map_target(175.0, f32::NAN, 20.0, b), 175.0);
        assert_eq!(map_target(175.0, f32::INFINITY, 20.0, b), 175.0);
    }
}

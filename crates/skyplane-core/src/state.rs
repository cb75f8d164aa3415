//! Screen state shared with the front-ends.
//!
//! `Screen` owns the only mutable game state: the plane position (through
//! the mapper), the sky offset and the score. Front-ends read it back as a
//! [`FrameSnapshot`] and never mutate it directly.

use crate::config::GameConfig;
use crate::looper::BackgroundLooper;
use crate::mapper::{PositionMapper, Viewport};
use crate::sensor::{OrientationSample, SensorStatus};
use glam::Vec2;

/// Displayed score. Nothing increments it yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score(u32);

impl Score {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score: {}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Screen {
    pub config: GameConfig,
    viewport: Viewport,
    mapper: PositionMapper,
    looper: BackgroundLooper,
    score: Score,
}

impl Screen {
    pub fn new(config: GameConfig, viewport: Viewport) -> Self {
        let mapper = PositionMapper::new(&config, viewport);
        let looper = BackgroundLooper::new(viewport.height, config.scroll_step);
        Self {
            config,
            viewport,
            mapper,
            looper,
            score: Score::default(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn mapper(&self) -> &PositionMapper {
        &self.mapper
    }

    pub fn looper(&self) -> &BackgroundLooper {
        &self.looper
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn apply_sample(&mut self, sample: &OrientationSample) {
        self.mapper.apply(sample);
    }

    /// One display frame: scroll the sky and ease the plane.
    pub fn tick(&mut self, dt_sec: f32) {
        self.looper.tick();
        self.mapper.step(dt_sec);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.mapper.resize(viewport);
        self.looper.resize(viewport.height);
    }

    pub fn snapshot(&self, sensor: &SensorStatus) -> FrameSnapshot {
        FrameSnapshot {
            viewport: self.viewport,
            plane: self.mapper.position(),
            plane_target: self.mapper.target(),
            plane_size: self.config.sprite.draw_size,
            sky_tiles: self.looper.tiles(),
            score: self.score,
            sensor: sensor.clone(),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct FrameSnapshot {
    pub viewport: Viewport,
    /// Top-left corner of the plane, eased.
    pub plane: Vec2,
    pub plane_target: Vec2,
    pub plane_size: f32,
    pub sky_tiles: [f32; 2],
    pub score: Score,
    pub sensor: SensorStatus,
}

//! Lifecycle of one game screen.
//!
//! The session owns the screen state and both event subscriptions: the
//! orientation stream and the display refresh callback. Hosts forward raw
//! events into it; after [`GameSession::teardown`] both subscriptions are
//! released and every entry point stops mutating state.

use crate::config::GameConfig;
use crate::mapper::Viewport;
use crate::sensor::{OrientationSample, SensorBackend, SensorSampler, SensorStatus};
use crate::state::{FrameSnapshot, Screen};

/// Display refresh primitive: arms one callback at a time.
pub trait FrameScheduler {
    /// Arm the next frame callback.
    fn request(&mut self);
    /// Release the armed callback, if any.
    fn cancel(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Created,
    Running,
    TornDown,
}

pub struct GameSession<S: SensorBackend, F: FrameScheduler> {
    screen: Screen,
    sampler: SensorSampler,
    sensor: S,
    frames: F,
    phase: Phase,
}

impl<S: SensorBackend, F: FrameScheduler> GameSession<S, F> {
    pub fn new(config: GameConfig, viewport: Viewport, sensor: S, frames: F) -> Self {
        let sampler = SensorSampler::new(config.sample_interval, config.sensor_timeout);
        Self {
            screen: Screen::new(config, viewport),
            sampler,
            sensor,
            frames,
            phase: Phase::Created,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn sensor_status(&self) -> &SensorStatus {
        self.sampler.status()
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    pub fn frames(&self) -> &F {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut F {
        &mut self.frames
    }

    /// Open the sensor stream and arm the first frame. A sensor that
    /// cannot be opened leaves the session running with tilt disabled.
    pub fn start(&mut self, now_ms: f64) {
        if self.phase != Phase::Created {
            return;
        }
        let interval = self.screen.config.sample_interval;
        match self.sensor.subscribe(interval) {
            Ok(()) => self.sampler.start(now_ms),
            Err(e) => self.sampler.fail(e),
        }
        self.frames.request();
        self.phase = Phase::Running;
        log::info!(
            "session started: mode={:?} viewport={:.0}x{:.0}",
            self.screen.config.mode,
            self.screen.viewport().width,
            self.screen.viewport().height
        );
    }

    /// Raw sample from the sensor. Returns whether it moved a target.
    pub fn on_sample(&mut self, now_ms: f64, sample: OrientationSample) -> bool {
        if self.phase != Phase::Running {
            log::debug!("dropping sample outside a running session");
            return false;
        }
        match self.sampler.offer(now_ms, sample) {
            Some(s) => {
                self.screen.apply_sample(&s);
                true
            }
            None => false,
        }
    }

    /// Fallback input (keyboard), honoured only while tilt control is not
    /// active so the two sources never fight.
    pub fn apply_manual(&mut self, sample: OrientationSample) -> bool {
        if self.phase != Phase::Running || self.sampler.status().is_active() {
            return false;
        }
        self.screen.apply_sample(&sample);
        true
    }

    /// Display refresh callback. Advances the screen and re-arms the next
    /// frame. Returns `false` once torn down.
    pub fn on_frame(&mut self, now_ms: f64, dt_sec: f32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        if let Some(s) = self.sampler.poll(now_ms) {
            self.screen.apply_sample(&s);
        }
        self.screen.tick(dt_sec);
        self.frames.request();
        true
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if self.phase == Phase::TornDown {
            return;
        }
        self.screen.resize(viewport);
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.screen.snapshot(self.sampler.status())
    }

    /// Release the sensor and the frame callback. Safe to call twice.
    pub fn teardown(&mut self) {
        if self.phase == Phase::TornDown {
            return;
        }
        if self.phase == Phase::Running {
            self.sensor.unsubscribe();
            self.frames.cancel();
        }
        self.sampler.stop();
        self.phase = Phase::TornDown;
        log::info!("session torn down after {} frames", self.screen.looper().frames());
    }
}

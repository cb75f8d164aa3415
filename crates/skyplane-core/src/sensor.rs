//! Orientation samples and the sampler that paces them.
//!
//! Hosts push raw samples at whatever rate the hardware delivers; the
//! sampler forwards at most one per configured interval. Samples that arrive
//! early replace each other (most-recent-wins) and are released on the next
//! frame poll. There is no queue and no back-pressure.

use crate::error::SensorError;
use std::time::Duration;

/// One reading of angular rate (rad/s) around each device axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl OrientationSample {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SensorStatus {
    /// Not subscribed.
    Idle,
    /// Subscribed, no sample seen yet.
    Waiting { since_ms: f64 },
    Active,
    Unavailable(SensorError),
}

impl SensorStatus {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Short text for the HUD; `None` while tilt control works.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle | Self::Active => None,
            Self::Waiting { .. } => Some("Waiting for motion sensor...".to_string()),
            Self::Unavailable(err) => Some(format!(
                "Tilt control disabled: {err}. Use the arrow keys instead."
            )),
        }
    }
}

/// Hardware side of the sampler: a stream of samples that can be opened
/// and released. Delivery happens out of band, through
/// [`crate::GameSession::on_sample`].
pub trait SensorBackend {
    fn subscribe(&mut self, interval: Duration) -> Result<(), SensorError>;
    fn unsubscribe(&mut self);
}

/// Backend for hosts without an orientation sensor.
#[derive(Debug, Default)]
pub struct NoSensor;

impl SensorBackend for NoSensor {
    fn subscribe(&mut self, _interval: Duration) -> Result<(), SensorError> {
        Err(SensorError::Unsupported)
    }

    fn unsubscribe(&mut self) {}
}

#[derive(Debug)]
pub struct SensorSampler {
    interval_ms: f64,
    timeout_ms: f64,
    status: SensorStatus,
    pending: Option<OrientationSample>,
    last_delivery_ms: Option<f64>,
    delivered: u64,
}

impl SensorSampler {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self {
            interval_ms: interval.as_secs_f64() * 1000.0,
            timeout_ms: timeout.as_secs_f64() * 1000.0,
            status: SensorStatus::Idle,
            pending: None,
            last_delivery_ms: None,
            delivered: 0,
        }
    }

    pub fn status(&self) -> &SensorStatus {
        &self.status
    }

    /// Number of samples forwarded so far.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// The subscription is open; start waiting for the first sample.
    pub fn start(&mut self, now_ms: f64) {
        self.pending = None;
        self.last_delivery_ms = None;
        self.set_status(SensorStatus::Waiting { since_ms: now_ms });
    }

    pub fn fail(&mut self, err: SensorError) {
        self.pending = None;
        self.set_status(SensorStatus::Unavailable(err));
    }

    /// The subscription is closed; nothing is forwarded until `start`.
    pub fn stop(&mut self) {
        self.pending = None;
        self.set_status(SensorStatus::Idle);
    }

    /// Accept a raw sample. Returns it if the interval has elapsed since
    /// the last delivery, otherwise holds it as the pending sample.
    pub fn offer(&mut self, now_ms: f64, sample: OrientationSample) -> Option<OrientationSample> {
        let activates = match self.status {
            SensorStatus::Idle => return None,
            SensorStatus::Unavailable(SensorError::Silent { .. })
            | SensorStatus::Waiting { .. } => true,
            SensorStatus::Unavailable(_) => return None,
            SensorStatus::Active => false,
        };
        if activates {
            self.set_status(SensorStatus::Active);
        }
        if self.is_due(now_ms) {
            self.pending = None;
            Some(self.deliver(now_ms, sample))
        } else {
            log::trace!("sensor: holding sample {:?}", sample);
            self.pending = Some(sample);
            None
        }
    }

    /// Called once per frame: releases the pending sample when due and
    /// turns a silent subscription into `Unavailable`.
    pub fn poll(&mut self, now_ms: f64) -> Option<OrientationSample> {
        if let SensorStatus::Waiting { since_ms } = self.status {
            let waited = now_ms - since_ms;
            if waited >= self.timeout_ms {
                self.fail(SensorError::Silent {
                    waited_ms: waited.max(0.0) as u64,
                });
            }
            return None;
        }
        if !self.status.is_active() || !self.is_due(now_ms) {
            return None;
        }
        let sample = self.pending.take()?;
        Some(self.deliver(now_ms, sample))
    }

    fn is_due(&self, now_ms: f64) -> bool {
        match self.last_delivery_ms {
            None => true,
            Some(last) => now_ms - last >= self.interval_ms,
        }
    }

    fn deliver(&mut self, now_ms: f64, sample: OrientationSample) -> OrientationSample {
        self.last_delivery_ms = Some(now_ms);
        self.delivered += 1;
        sample
    }

    fn set_status(&mut self, status: SensorStatus) {
        if self.status != status {
            match &status {
                SensorStatus::Unavailable(err) => log::warn!("sensor unavailable: {err}"),
                SensorStatus::Waiting { .. } => {}
                other => log::info!("sensor status: {:?}", other),
            }
        }
        self.status = status;
    }
}

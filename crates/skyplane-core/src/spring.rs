//! Deterministic spring easing.
//!
//! The rendered plane lags behind its target like a mass on a damped spring:
//! `m x'' + c x' + k x = 0` with `x` the displacement from the target. Each
//! step evaluates the closed-form solution over `dt`, so the result depends
//! only on elapsed time and the physical constants, not on how a host
//! slices its frames.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub damping: f32,
    pub stiffness: f32,
    pub mass: f32,
    /// Below this distance from the target (and below `rest_speed`) the
    /// spring snaps to the target and stops.
    pub rest_displacement: f32,
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: SPRING_DAMPING,
            stiffness: SPRING_STIFFNESS,
            mass: SPRING_MASS,
            rest_displacement: SPRING_REST_DISPLACEMENT,
            rest_speed: SPRING_REST_SPEED,
        }
    }
}

impl SpringConfig {
    /// Undamped angular frequency, sqrt(k/m).
    #[inline]
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// 1.0 is critical damping; below that the spring overshoots.
    #[inline]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Displacement and velocity `t` seconds after releasing the spring at
/// displacement `x0` with velocity `v0`.
pub fn spring_response(cfg: &SpringConfig, x0: f32, v0: f32, t: f32) -> (f32, f32) {
    let w0 = cfg.natural_frequency();
    let zeta = cfg.damping_ratio();
    if (zeta - 1.0).abs() < 1e-4 {
        let decay = (-w0 * t).exp();
        let b = v0 + w0 * x0;
        let x = decay * (x0 + b * t);
        let v = decay * (v0 - w0 * b * t);
        (x, v)
    } else if zeta < 1.0 {
        let a = zeta * w0;
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let b = (v0 + a * x0) / wd;
        let decay = (-a * t).exp();
        let (s, c) = (wd * t).sin_cos();
        let x = decay * (x0 * c + b * s);
        let v = decay * (v0 * c - (a * b + x0 * wd) * s);
        (x, v)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - root);
        let r2 = -w0 * (zeta + root);
        let c1 = (v0 - r2 * x0) / (r1 - r2);
        let c2 = x0 - c1;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
    }
}

/// A single eased scalar chasing a target.
#[derive(Clone, Debug)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    cfg: SpringConfig,
}

impl Spring {
    /// A spring at rest on `value`.
    pub fn new(value: f32, cfg: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            cfg,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Move the target; current value and velocity carry over so motion
    /// stays continuous.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.value == self.target
    }

    /// Advance by `dt` seconds and return the new eased value.
    pub fn step(&mut self, dt: f32) -> f32 {
        if self.is_at_rest() || !(dt > 0.0) {
            return self.value;
        }
        let (x, v) = spring_response(&self.cfg, self.value - self.target, self.velocity, dt);
        if x.abs() < self.cfg.rest_displacement && v.abs() < self.cfg.rest_speed {
            self.value = self.target;
            self.velocity = 0.0;
        } else {
            self.value = self.target + x;
            self.velocity = v;
        }
        self.value
    }

    /// Values the spring would take over the next `steps` steps of `dt`,
    /// without changing this spring.
    pub fn trajectory(&self, dt: f32, steps: usize) -> Vec<f32> {
        let mut probe = self.clone();
        (0..steps).map(|_| probe.step(dt)).collect()
    }
}

/// Eased sequence from `from` (at rest) toward `to`, sampled every `dt`.
pub fn ease(cfg: SpringConfig, from: f32, to: f32, dt: f32, steps: usize) -> Vec<f32> {
    let mut spring = Spring::new(from, cfg);
    spring.retarget(to);
    spring.trajectory(dt, steps)
}

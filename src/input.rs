// Pure conversions from browser input to orientation samples.
// Kept free of `web_sys` calls so the host-side tests can include it.

use skyplane_core::{OrientationSample, SensorError, KEY_TILT_RATE};

use crate::constants::DEG_TO_RAD;

/// `devicemotion` reports `rotationRate` in deg/s as alpha (around z),
/// beta (around x) and gamma (around y). Returns `None` when the browser
/// fires the event without any rotation data, which desktop browsers do.
#[inline]
pub fn sample_from_rotation_rate(
    alpha: Option<f64>,
    beta: Option<f64>,
    gamma: Option<f64>,
) -> Option<OrientationSample> {
    if alpha.is_none() && beta.is_none() && gamma.is_none() {
        return None;
    }
    let rad = |v: Option<f64>| v.unwrap_or(0.0) as f32 * DEG_TO_RAD;
    Some(OrientationSample::new(rad(beta), rad(gamma), rad(alpha)))
}

/// Arrow keys stand in for tilt: left/right steer, up/down climb and dive.
#[inline]
pub fn tilt_for_key(key: &str) -> Option<OrientationSample> {
    match key {
        "ArrowLeft" => Some(OrientationSample::new(0.0, 0.0, KEY_TILT_RATE)),
        "ArrowRight" => Some(OrientationSample::new(0.0, 0.0, -KEY_TILT_RATE)),
        "ArrowUp" => Some(OrientationSample::new(KEY_TILT_RATE, 0.0, 0.0)),
        "ArrowDown" => Some(OrientationSample::new(-KEY_TILT_RATE, 0.0, 0.0)),
        _ => None,
    }
}

/// Result of `DeviceMotionEvent.requestPermission()`.
#[inline]
pub fn permission_from_state(state: Option<&str>) -> Result<(), SensorError> {
    match state {
        Some("granted") => Ok(()),
        _ => Err(SensorError::PermissionDenied),
    }
}

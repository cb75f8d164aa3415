// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use input::*;
use skyplane_core::{OrientationSample, SensorError};

#[test]
fn rotation_rate_maps_browser_axes_to_device_axes() {
    // alpha is rotation around z, beta around x, gamma around y
    let s = sample_from_rotation_rate(Some(180.0), Some(90.0), Some(-45.0)).unwrap();
    assert!((s.z - std::f32::consts::PI).abs() < 1e-5);
    assert!((s.x - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    assert!((s.y + std::f32::consts::FRAC_PI_4).abs() < 1e-5);
}

#[test]
fn rotation_rate_without_data_is_not_a_sample() {
    assert_eq!(sample_from_rotation_rate(None, None, None), None);
}

#[test]
fn partial_rotation_rate_fills_missing_axes_with_zero() {
    let s = sample_from_rotation_rate(Some(57.29578), None, None).unwrap();
    assert!((s.z - 1.0).abs() < 1e-4);
    assert_eq!(s.x, 0.0);
    assert_eq!(s.y, 0.0);
}

#[test]
fn permission_states() {
    assert_eq!(permission_from_state(Some("granted")), Ok(()));
    assert_eq!(
        permission_from_state(Some("denied")),
        Err(SensorError::PermissionDenied)
    );
    assert_eq!(permission_from_state(None), Err(SensorError::PermissionDenied));
}

#[test]
fn still_device_gives_zero_sample() {
    assert_eq!(
        sample_from_rotation_rate(Some(0.0), Some(0.0), Some(0.0)),
        Some(OrientationSample::default())
    );
}

// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use skyplane_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_positive() {
    assert!(SENSITIVITY > 0.0);
    assert!(SPRING_STIFFNESS > 0.0);
    assert!(SPRING_MASS > 0.0);
    assert!(SPRING_DAMPING >= 0.0);
    assert!(SCROLL_STEP > 0.0);
    assert!(SAMPLE_INTERVAL_MS > 0);
    assert!(KEY_TILT_RATE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sensor_timeout_spans_many_samples() {
    assert!(SENSOR_TIMEOUT_MS >= SAMPLE_INTERVAL_MS * 10);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sprite_fits_inside_its_draw_box() {
    assert!(SPRITE_EXTENT <= SPRITE_DRAW_SIZE);
}

#[test]
fn default_spring_settles_with_some_overshoot() {
    let ratio = SpringConfig::default().damping_ratio();
    assert!(ratio > 0.0 && ratio < 1.0);
}

#[test]
fn sky_fill_matches_shared_colour() {
    let hex = SKY_FILL_CSS.trim_start_matches('#');
    let rgb: Vec<f32> = (0..3)
        .map(|i| u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).unwrap() as f32 / 255.0)
        .collect();
    for (a, b) in rgb.iter().zip(SKY_RGB.iter()) {
        assert!((a - b).abs() < 0.01, "{a} vs {b}");
    }
}

#[test]
fn asset_paths_are_relative() {
    assert!(!SKY_ASSET.starts_with('/'));
    assert!(!PLANE_ASSET.starts_with('/'));
}

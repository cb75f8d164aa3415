// Host-side tests for the closed-form spring easing.

use skyplane_core::*;

const DT: f32 = 1.0 / 60.0;

#[test]
fn default_spring_overshoots_then_settles() {
    let path = ease(SpringConfig::default(), 0.0, 100.0, 1.0 / 240.0, 240 * 3);
    let peak = path.iter().cloned().fold(f32::MIN, f32::max);
    // ratio 0.5 overshoots by exp(-pi * 0.5 / sqrt(0.75)) ~ 16.3%
    assert!(peak > 114.0 && peak < 118.0, "peak {peak}");
    assert_eq!(*path.last().unwrap(), 100.0);
}

#[test]
fn critically_damped_spring_does_not_overshoot() {
    let cfg = SpringConfig {
        damping: 20.0,
        ..SpringConfig::default()
    };
    assert!((cfg.damping_ratio() - 1.0).abs() < 1e-6);
    let path = ease(cfg, 0.0, 100.0, DT, 180);
    assert!(path.iter().all(|v| *v <= 100.0 + 1e-3));
    assert!(path.windows(2).all(|w| w[1] >= w[0] - 1e-4));
}

#[test]
fn overdamped_spring_approaches_monotonically() {
    let cfg = SpringConfig {
        damping: 60.0,
        ..SpringConfig::default()
    };
    let path = ease(cfg, 50.0, -50.0, DT, 600);
    assert!(path.windows(2).all(|w| w[1] <= w[0] + 1e-4));
    assert!(path.iter().all(|v| *v >= -50.0 - 1e-3));
}

#[test]
fn stepping_is_independent_of_frame_slicing() {
    let mut coarse = Spring::new(0.0, SpringConfig::default());
    let mut fine = coarse.clone();
    coarse.retarget(100.0);
    fine.retarget(100.0);

    coarse.step(0.1);
    for _ in 0..4 {
        fine.step(0.025);
    }
    assert!((coarse.value() - fine.value()).abs() < 1e-2);
    assert!((coarse.velocity() - fine.velocity()).abs() < 1e-1);
}

#[test]
fn retarget_preserves_motion() {
    let mut s = Spring::new(0.0, SpringConfig::default());
    s.retarget(100.0);
    s.step(0.05);
    let (value, velocity) = (s.value(), s.velocity());
    assert!(velocity > 0.0);
    s.retarget(-100.0);
    assert_eq!(s.value(), value);
    assert_eq!(s.velocity(), velocity);
    // still moving up for a moment before the new target wins
    let next = s.step(0.001);
    assert!(next > value);
}

#[test]
fn trajectory_does_not_mutate() {
    let mut s = Spring::new(10.0, SpringConfig::default());
    s.retarget(20.0);
    let path = s.trajectory(DT, 30);
    assert_eq!(path.len(), 30);
    assert_eq!(s.value(), 10.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn resting_spring_stays_put() {
    let mut s = Spring::new(42.0, SpringConfig::default());
    assert!(s.is_at_rest());
    for _ in 0..10 {
        assert_eq!(s.step(DT), 42.0);
    }
    assert_eq!(s.step(0.0), 42.0);
}

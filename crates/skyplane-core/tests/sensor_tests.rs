// Host-side tests for sample pacing and sensor availability.

use skyplane_core::*;
use std::time::Duration;

fn sampler() -> SensorSampler {
    SensorSampler::new(
        Duration::from_millis(SAMPLE_INTERVAL_MS),
        Duration::from_millis(SENSOR_TIMEOUT_MS),
    )
}

fn sample(z: f32) -> OrientationSample {
    OrientationSample::new(0.0, 0.0, z)
}

#[test]
fn idle_sampler_drops_samples() {
    let mut s = sampler();
    assert_eq!(s.offer(0.0, sample(1.0)), None);
    assert_eq!(s.poll(100.0), None);
    assert_eq!(*s.status(), SensorStatus::Idle);
}

#[test]
fn early_samples_are_replaced_by_the_latest() {
    let mut s = sampler();
    s.start(0.0);
    assert_eq!(s.offer(0.0, sample(1.0)), Some(sample(1.0)));
    assert!(s.status().is_active());

    assert_eq!(s.offer(5.0, sample(2.0)), None);
    assert_eq!(s.offer(10.0, sample(3.0)), None);
    assert_eq!(s.poll(12.0), None);
    assert_eq!(s.poll(16.0), Some(sample(3.0)));
    assert_eq!(s.poll(40.0), None);
    assert_eq!(s.delivered(), 2);
}

#[test]
fn samples_at_hardware_rate_pass_straight_through() {
    let mut s = sampler();
    s.start(0.0);
    let mut passed = 0;
    for i in 0..60 {
        let t = i as f64 * 16.7;
        if s.offer(t, sample(i as f32)).is_some() {
            passed += 1;
        }
    }
    assert_eq!(passed, 60);
}

#[test]
fn silent_subscription_times_out_and_recovers() {
    let mut s = sampler();
    s.start(0.0);
    assert_eq!(s.poll(1000.0), None);
    assert!(matches!(s.status(), SensorStatus::Waiting { .. }));
    assert!(s.status().message().is_some());

    s.poll(1500.0);
    assert_eq!(
        *s.status(),
        SensorStatus::Unavailable(SensorError::Silent { waited_ms: 1500 })
    );

    assert_eq!(s.offer(1600.0, sample(1.0)), Some(sample(1.0)));
    assert!(s.status().is_active());
    assert_eq!(s.status().message(), None);
}

#[test]
fn denied_permission_blocks_samples() {
    let mut s = sampler();
    s.start(0.0);
    s.fail(SensorError::PermissionDenied);
    assert_eq!(s.offer(20.0, sample(1.0)), None);
    let msg = s.status().message().unwrap();
    assert!(msg.contains("permission"), "{msg}");
}

#[test]
fn stop_discards_pending_sample() {
    let mut s = sampler();
    s.start(0.0);
    s.offer(0.0, sample(1.0));
    s.offer(4.0, sample(2.0));
    s.stop();
    assert_eq!(s.poll(100.0), None);
    assert_eq!(s.offer(120.0, sample(3.0)), None);
}

#[test]
fn sample_axis_selection() {
    let s = OrientationSample::new(1.0, 2.0, 3.0);
    assert_eq!(s.axis(Axis::X), 1.0);
    assert_eq!(s.axis(Axis::Y), 2.0);
    assert_eq!(s.axis(Axis::Z), 3.0);
}

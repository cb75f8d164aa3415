// Host-side tests for the endless sky scroll.

use skyplane_core::*;

#[test]
fn offset_after_n_ticks_is_n_mod_height() {
    for n in [0_u32, 1, 42, 799, 800, 801, 1599, 1600, 5000, 12345] {
        let mut l = BackgroundLooper::new(800.0, 1.0);
        for _ in 0..n {
            l.tick();
        }
        assert_eq!(l.offset(), (n % 800) as f32, "after {n} ticks");
        assert_eq!(l.frames(), n as u64);
    }
}

#[test]
fn offset_stays_in_range() {
    let mut l = BackgroundLooper::new(640.0, 3.0);
    for _ in 0..5000 {
        let o = l.tick();
        assert!((0.0..640.0).contains(&o), "offset {o}");
    }
}

#[test]
fn tiles_are_stacked_one_viewport_apart() {
    let mut l = BackgroundLooper::new(800.0, 1.0);
    for _ in 0..300 {
        l.tick();
    }
    assert_eq!(l.tiles(), [300.0, -500.0]);
    let [lower, upper] = l.tiles();
    assert_eq!(lower - upper, 800.0);
}

#[test]
fn screen_scroll_uses_configured_step() {
    let cfg = GameConfig {
        scroll_step: 2.0,
        ..GameConfig::default()
    };
    let mut screen = Screen::new(cfg, Viewport::new(400.0, 800.0));
    for _ in 0..450 {
        screen.tick(1.0 / 60.0);
    }
    assert_eq!(screen.looper().offset(), 100.0);
}

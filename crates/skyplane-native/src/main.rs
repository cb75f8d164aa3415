use std::time::Instant;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use skyplane_core::{
    FrameScheduler, GameConfig, GameSession, NoSensor, OrientationSample, Viewport, KEY_TILT_RATE,
};

mod gpu;

use gpu::GpuState;

/// Desktop stand-in for the display refresh callback: the event loop fires
/// one frame whenever this is armed.
#[derive(Default)]
struct RedrawFrames {
    armed: bool,
}

impl RedrawFrames {
    fn take(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }
}

impl FrameScheduler for RedrawFrames {
    fn request(&mut self) {
        self.armed = true;
    }

    fn cancel(&mut self) {
        self.armed = false;
    }
}

type NativeSession = GameSession<NoSensor, RedrawFrames>;

/// `skyplane-native mode=two-axis sensitivity=30` uses the same keys as the
/// page query string.
fn config_from_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<GameConfig> {
    let query = args.into_iter().collect::<Vec<_>>().join("&");
    Ok(GameConfig::from_query(&query)?)
}

fn tilt_for_key(key: &Key) -> Option<OrientationSample> {
    let Key::Named(named) = key else {
        return None;
    };
    match named {
        NamedKey::ArrowLeft => Some(OrientationSample::new(0.0, 0.0, KEY_TILT_RATE)),
        NamedKey::ArrowRight => Some(OrientationSample::new(0.0, 0.0, -KEY_TILT_RATE)),
        NamedKey::ArrowUp => Some(OrientationSample::new(KEY_TILT_RATE, 0.0, 0.0)),
        NamedKey::ArrowDown => Some(OrientationSample::new(-KEY_TILT_RATE, 0.0, 0.0)),
        _ => None,
    }
}

/// What the event loop does after presenting (or failing to present) a frame.
#[derive(Debug, PartialEq, Eq)]
enum AfterRender {
    Redraw,
    Reconfigure,
    Exit,
}

// Every arm except Exit keeps a redraw pending, otherwise the loop idles
// until the next input event.
fn after_render(result: Result<(), wgpu::SurfaceError>) -> AfterRender {
    match result {
        Ok(()) => AfterRender::Redraw,
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => AfterRender::Reconfigure,
        Err(wgpu::SurfaceError::OutOfMemory) => AfterRender::Exit,
        Err(e) => {
            log::warn!("surface error: {:?}", e);
            AfterRender::Redraw
        }
    }
}

fn logical_viewport(window: &winit::window::Window) -> Viewport {
    let size = window.inner_size().to_logical::<f32>(window.scale_factor());
    Viewport::new(size.width, size.height)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = config_from_args(std::env::args().skip(1))?;
    log::info!("mode {:?}: {}", config.mode, config.mode.instructions());

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Skyplane (native)")
        .with_inner_size(winit::dpi::LogicalSize::new(400.0, 800.0))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    let mut session: NativeSession = GameSession::new(
        config,
        logical_viewport(&window),
        NoSensor,
        RedrawFrames::default(),
    );
    let start = Instant::now();
    let mut last_frame = start;
    session.start(0.0);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            state.resize(size);
            session.resize(logical_viewport(state.window));
        }
        Event::WindowEvent {
            event: WindowEvent::KeyboardInput { event, .. },
            ..
        } => {
            if event.state == ElementState::Pressed {
                if let Some(sample) = tilt_for_key(&event.logical_key) {
                    session.apply_manual(sample);
                }
            }
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => {
            session.teardown();
            elwt.exit();
        }
        Event::AboutToWait => {
            if !session.frames_mut().take() {
                return;
            }
            let now = Instant::now();
            let dt = now - last_frame;
            last_frame = now;
            let now_ms = (now - start).as_secs_f64() * 1000.0;
            if !session.on_frame(now_ms, dt.as_secs_f32()) {
                return;
            }
            match after_render(state.render(&session.snapshot())) {
                AfterRender::Redraw => state.window.request_redraw(),
                AfterRender::Reconfigure => {
                    state.resize(state.window.inner_size());
                    state.window.request_redraw();
                }
                AfterRender::Exit => {
                    session.teardown();
                    elwt.exit();
                }
            }
        }
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyplane_core::{Axis, ControlMode};

    #[test]
    fn args_become_config_overrides() {
        let cfg = config_from_args(vec!["mode=two-axis".to_string(), "sensitivity=30".to_string()])
            .unwrap();
        assert_eq!(cfg.mode, ControlMode::TwoAxis);
        assert_eq!(cfg.sensitivity, 30.0);
    }

    #[test]
    fn no_args_is_default() {
        let cfg = config_from_args(Vec::new()).unwrap();
        assert_eq!(cfg.mode, ControlMode::SingleAxis);
    }

    #[test]
    fn bad_args_are_rejected() {
        assert!(config_from_args(vec!["speed=9".to_string()]).is_err());
    }

    #[test]
    fn arrow_keys_tilt_the_matching_axis() {
        let left = tilt_for_key(&Key::Named(NamedKey::ArrowLeft)).unwrap();
        assert_eq!(left.axis(Axis::Z), KEY_TILT_RATE);
        let down = tilt_for_key(&Key::Named(NamedKey::ArrowDown)).unwrap();
        assert_eq!(down.axis(Axis::X), -KEY_TILT_RATE);
        assert!(tilt_for_key(&Key::Named(NamedKey::Space)).is_none());
        assert!(tilt_for_key(&Key::Character("a".into())).is_none());
    }

    #[test]
    fn lost_or_outdated_surface_is_reconfigured() {
        assert_eq!(after_render(Err(wgpu::SurfaceError::Lost)), AfterRender::Reconfigure);
        assert_eq!(after_render(Err(wgpu::SurfaceError::Outdated)), AfterRender::Reconfigure);
    }

    #[test]
    fn render_outcomes_keep_the_loop_going() {
        assert_eq!(after_render(Ok(())), AfterRender::Redraw);
        assert_eq!(after_render(Err(wgpu::SurfaceError::Timeout)), AfterRender::Redraw);
        assert_eq!(after_render(Err(wgpu::SurfaceError::OutOfMemory)), AfterRender::Exit);
    }

    #[test]
    fn redraw_frames_fire_once_per_request() {
        let mut frames = RedrawFrames::default();
        assert!(!frames.take());
        frames.request();
        assert!(frames.take());
        assert!(!frames.take());
        frames.request();
        frames.cancel();
        assert!(!frames.take());
    }
}

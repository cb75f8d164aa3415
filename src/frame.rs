use crate::overlay::Hud;
use crate::render::Renderer;
use crate::sensor::WebMotionSensor;
use instant::Instant;
use skyplane_core::{FrameScheduler, GameSession};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebSession = GameSession<WebMotionSensor, RafScheduler>;

/// `requestAnimationFrame` with a single armed callback.
pub struct RafScheduler {
    window: web::Window,
    callback: Option<Closure<dyn FnMut(f64)>>,
    handle: Option<i32>,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            callback: None,
            handle: None,
        }
    }

    pub fn set_callback(&mut self, callback: Closure<dyn FnMut(f64)>) {
        self.callback = Some(callback);
    }
}

impl FrameScheduler for RafScheduler {
    fn request(&mut self) {
        let Some(cb) = &self.callback else {
            log::warn!("frame requested before the callback was bound");
            return;
        };
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(h) => self.handle = Some(h),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel(&mut self) {
        if let Some(h) = self.handle.take() {
            _ = self.window.cancel_animation_frame(h);
        }
    }
}

/// Monotonic milliseconds shared by the sensor sink and the frame loop.
#[derive(Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Per-frame work outside the session: drawing and HUD text.
pub struct FrameContext {
    pub renderer: Renderer,
    pub document: web::Document,
    pub hud: Hud,
    pub clock: Clock,
    pub last_instant: Instant,
}

impl FrameContext {
    fn frame(&mut self, session: &mut WebSession) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        if !session.on_frame(self.clock.now_ms(), dt.as_secs_f32()) {
            return;
        }
        let snap = session.snapshot();
        if let Err(e) = self.renderer.draw(&snap) {
            log::error!("render error: {:?}", e);
        }
        self.hud.update(&self.document, &snap);
    }
}

/// Bind the display callback to the session. The closure holds the session
/// weakly so a dropped page does not keep it alive.
pub fn bind_loop(session: &Rc<RefCell<WebSession>>, ctx: FrameContext) {
    let weak: Weak<RefCell<WebSession>> = Rc::downgrade(session);
    let mut ctx = ctx;
    let closure = Closure::wrap(Box::new(move |_ts: f64| {
        let Some(session) = weak.upgrade() else {
            return;
        };
        let Ok(mut s) = session.try_borrow_mut() else {
            log::warn!("frame skipped: session busy");
            return;
        };
        ctx.frame(&mut s);
    }) as Box<dyn FnMut(f64)>);
    session.borrow_mut().frames_mut().set_callback(closure);
}

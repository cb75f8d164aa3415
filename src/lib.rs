#![cfg(target_arch = "wasm32")]
use instant::Instant;
use skyplane_core::{GameConfig, GameSession, OrientationSample};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod page;
mod render;
mod sensor;

use constants::{CANVAS_ID, START_BUTTON_ID};
use frame::{Clock, FrameContext, RafScheduler, WebSession};
use sensor::WebMotionSensor;

/// Page query overrides (`?mode=two-axis&sensitivity=25`). Bad input is
/// logged and the defaults are kept.
fn load_config(window: &web::Window) -> GameConfig {
    let query = window.location().search().unwrap_or_default();
    match GameConfig::from_query(&query) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("ignoring config overrides `{}`: {}", query, e);
            GameConfig::default()
        }
    }
}

/// Sensor samples go straight into the session, stamped by the shared clock.
fn bind_sensor(session: &Rc<RefCell<WebSession>>, clock: Clock) {
    let weak = Rc::downgrade(session);
    let sink = Rc::new(move |sample: OrientationSample| {
        let Some(session) = weak.upgrade() else {
            return;
        };
        // A busy session means a frame is running; the next sample replaces
        // this one anyway.
        if let Ok(mut s) = session.try_borrow_mut() {
            s.on_sample(clock.now_ms(), sample);
        }
    });
    session.borrow_mut().sensor_mut().set_sink(sink);
}

/// The start button doubles as the user gesture some browsers require
/// before granting motion access.
fn wire_start_button(document: &web::Document, session: Rc<RefCell<WebSession>>, clock: Clock) {
    let prompt_pending = Rc::new(Cell::new(false));
    let doc = document.clone();
    dom::add_click_listener(document, START_BUTTON_ID, move || {
        let Ok(phase) = session.try_borrow().map(|s| s.phase()) else {
            return;
        };
        if !page::accepts_start(phase, prompt_pending.get()) {
            return;
        }
        prompt_pending.set(true);
        let pending = prompt_pending.clone();
        let session = session.clone();
        let doc = doc.clone();
        spawn_local(async move {
            let permission = match web::window() {
                Some(w) => sensor::request_permission(&w).await,
                None => Err(skyplane_core::SensorError::Unsupported),
            };
            if let Err(e) = &permission {
                log::warn!("motion permission: {}", e);
            }
            {
                let mut s = session.borrow_mut();
                s.sensor_mut().set_permission(permission);
                s.start(clock.now_ms());
            }
            pending.set(false);
            overlay::hide(&doc);
        });
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("skyplane-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let config = load_config(&window);
    overlay::init_hud(&document, config.mode);
    let viewport = dom::canvas_viewport(&canvas);
    log::info!(
        "viewport {:.0}x{:.0}, mode {:?}",
        viewport.width,
        viewport.height,
        config.mode
    );

    let session: Rc<RefCell<WebSession>> = Rc::new(RefCell::new(GameSession::new(
        config,
        viewport,
        WebMotionSensor::new(window.clone()),
        RafScheduler::new(window.clone()),
    )));
    let clock = Clock::new();

    bind_sensor(&session, clock);
    frame::bind_loop(
        &session,
        FrameContext {
            renderer: render::Renderer::new(canvas.clone())?,
            document: document.clone(),
            hud: overlay::Hud::default(),
            clock,
            last_instant: Instant::now(),
        },
    );

    events::wire_resize(canvas, session.clone());
    events::wire_global_keydown(session.clone());
    events::wire_teardown(session.clone());
    wire_start_button(&document, session, clock);

    overlay::show(&document);
    Ok(())
}

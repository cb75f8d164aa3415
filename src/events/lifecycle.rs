use crate::dom;
use crate::frame::WebSession;
use crate::page;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store and the play-area bounds in step with the
/// window size.
pub fn wire_resize(canvas: web::HtmlCanvasElement, session: Rc<RefCell<WebSession>>) {
    dom::add_window_listener("resize", move || {
        dom::sync_canvas_backing_size(&canvas);
        let viewport = dom::canvas_viewport(&canvas);
        if let Ok(mut s) = session.try_borrow_mut() {
            s.resize(viewport);
        }
    });
}

/// Release the sensor and the frame callback when the page goes away for
/// good. Pages parked in the back/forward cache keep their session.
pub fn wire_teardown(session: Rc<RefCell<WebSession>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if !page::releases_on_pagehide(ev.persisted()) {
            log::info!("page cached, keeping session");
            return;
        }
        match session.try_borrow_mut() {
            Ok(mut s) => s.teardown(),
            Err(_) => log::error!("teardown skipped: session busy"),
        }
    }) as Box<dyn FnMut(web::PageTransitionEvent)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

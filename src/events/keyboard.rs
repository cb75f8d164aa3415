use crate::dom;
use crate::frame::WebSession;
use crate::input;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, session: &Rc<RefCell<WebSession>>) {
    let key = ev.key();
    if let Some(sample) = input::tilt_for_key(&key) {
        let Ok(mut s) = session.try_borrow_mut() else {
            return;
        };
        if s.apply_manual(sample) {
            ev.prevent_default();
        } else {
            log::debug!("key {key} ignored: tilt control active or session stopped");
        }
        return;
    }
    if let "h" | "H" = key.as_str() {
        if let Some(document) = dom::window_document() {
            overlay::toggle_hint(&document);
        }
    }
}

pub fn wire_global_keydown(session: Rc<RefCell<WebSession>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &session);
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

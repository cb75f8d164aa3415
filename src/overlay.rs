use crate::constants::{
    HINT_SELECTOR, INSTRUCTIONS_ID, SCORE_ID, SENSOR_STATUS_ID, START_OVERLAY_ID,
};
use crate::dom;
use skyplane_core::{ControlMode, FrameSnapshot};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

pub fn toggle_hint(document: &web::Document) {
    if let Ok(Some(el)) = document.query_selector(HINT_SELECTOR) {
        let show = el.get_attribute("data-visible").as_deref() != Some("1");
        _ = el.set_attribute("data-visible", if show { "1" } else { "0" });
        _ = el.set_attribute("style", if show { "" } else { "display:none" });
    }
}

/// Static HUD text set once at startup.
pub fn init_hud(document: &web::Document, mode: ControlMode) {
    dom::set_text(document, INSTRUCTIONS_ID, mode.instructions());
}

/// Keeps the HUD in sync with the session, touching the DOM only when the
/// text changes.
#[derive(Default)]
pub struct Hud {
    score: String,
    status: Option<String>,
}

impl Hud {
    pub fn update(&mut self, document: &web::Document, snap: &FrameSnapshot) {
        let score = snap.score.to_string();
        if score != self.score {
            dom::set_text(document, SCORE_ID, &score);
            self.score = score;
        }
        let status = snap.sensor.message();
        if status != self.status {
            if let Some(el) = document.get_element_by_id(SENSOR_STATUS_ID) {
                match &status {
                    Some(text) => {
                        el.set_text_content(Some(text));
                        _ = el.set_attribute("style", "");
                    }
                    None => {
                        el.set_text_content(None);
                        _ = el.set_attribute("style", "display:none");
                    }
                }
            }
            self.status = status;
        }
    }
}

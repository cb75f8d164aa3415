//! `devicemotion` as an orientation sample source.

use crate::input;
use js_sys::Reflect;
use skyplane_core::{OrientationSample, SensorBackend, SensorError};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Receives converted samples; set once the session exists.
pub type SampleSink = Rc<dyn Fn(OrientationSample)>;

pub struct WebMotionSensor {
    window: web::Window,
    sink: Option<SampleSink>,
    permission: Result<(), SensorError>,
    listener: Option<Closure<dyn FnMut(web::DeviceMotionEvent)>>,
}

impl WebMotionSensor {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            sink: None,
            permission: Ok(()),
            listener: None,
        }
    }

    pub fn set_sink(&mut self, sink: SampleSink) {
        self.sink = Some(sink);
    }

    /// Outcome of the permission prompt; a refusal makes `subscribe` fail.
    pub fn set_permission(&mut self, permission: Result<(), SensorError>) {
        self.permission = permission;
    }
}

impl SensorBackend for WebMotionSensor {
    fn subscribe(&mut self, interval: Duration) -> Result<(), SensorError> {
        self.permission.clone()?;
        if !motion_events_supported(&self.window) {
            return Err(SensorError::Unsupported);
        }
        let sink = self
            .sink
            .clone()
            .ok_or_else(|| SensorError::Subscribe("no sample sink bound".into()))?;
        // The browser picks the delivery rate; the sampler enforces `interval`.
        log::info!("subscribing to devicemotion (interval {:?})", interval);
        let closure = Closure::wrap(Box::new(move |ev: web::DeviceMotionEvent| {
            let Some(rate) = ev.rotation_rate() else {
                return;
            };
            if let Some(sample) =
                input::sample_from_rotation_rate(rate.alpha(), rate.beta(), rate.gamma())
            {
                sink(sample);
            }
        }) as Box<dyn FnMut(web::DeviceMotionEvent)>);
        self.window
            .add_event_listener_with_callback("devicemotion", closure.as_ref().unchecked_ref())
            .map_err(|e| SensorError::Subscribe(format!("{:?}", e)))?;
        self.listener = Some(closure);
        Ok(())
    }

    fn unsubscribe(&mut self) {
        if let Some(closure) = self.listener.take() {
            _ = self.window.remove_event_listener_with_callback(
                "devicemotion",
                closure.as_ref().unchecked_ref(),
            );
            log::info!("devicemotion listener removed");
        }
    }
}

fn motion_events_supported(window: &web::Window) -> bool {
    Reflect::has(window, &JsValue::from_str("DeviceMotionEvent")).unwrap_or(false)
}

/// Ask for motion access where the browser gates it behind a prompt
/// (`DeviceMotionEvent.requestPermission`). Must run from a user gesture.
pub async fn request_permission(window: &web::Window) -> Result<(), SensorError> {
    let ctor = Reflect::get(window, &JsValue::from_str("DeviceMotionEvent"))
        .map_err(|_| SensorError::Unsupported)?;
    if ctor.is_undefined() {
        return Err(SensorError::Unsupported);
    }
    let request = Reflect::get(&ctor, &JsValue::from_str("requestPermission"))
        .unwrap_or(JsValue::UNDEFINED);
    let Some(request) = request.dyn_ref::<js_sys::Function>() else {
        // No prompt on this platform; access is implicit.
        return Ok(());
    };
    let promise = request
        .call0(&ctor)
        .map_err(|e| SensorError::Subscribe(format!("{:?}", e)))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|e| SensorError::Subscribe(format!("{:?}", e)))?;
    let state = JsFuture::from(promise)
        .await
        .map_err(|_| SensorError::PermissionDenied)?;
    input::permission_from_state(state.as_string().as_deref())
}

//! The `KineticViewport` class exported to JavaScript.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use kinetic_core::{Anchor, Kinetic, KineticError, PartialSettings, SubscriptionId, ZoomTarget};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::dom::host::{DomHost, FrameScheduler};
use crate::dom::listeners::{Engine, Listeners};
use crate::notify::{self, PendingZoom};

#[wasm_bindgen]
pub struct KineticViewport {
    engine: Engine,
    frames: Rc<FrameScheduler>,
    listeners: Listeners,
    pending: PendingZoom,
}

/// `undefined`/`null` means defaults, anything else goes through
/// `JSON.stringify` into [`PartialSettings`].
fn read_settings(value: &JsValue) -> Result<PartialSettings, KineticError> {
    if value.is_undefined() || value.is_null() {
        return Ok(PartialSettings::default());
    }
    let json: String = js_sys::JSON::stringify(value)
        .map_err(|e| KineticError::InvalidSettings(format!("{:?}", e)))?
        .into();
    let settings = PartialSettings::from_json(&json).map_err(|e| {
        log::warn!("rejected settings {json}: {e}");
        KineticError::from(e)
    })?;
    Ok(settings)
}

/// Numbers are pixels, strings like `"25%"` are percentages of the
/// viewport. Missing or unreadable values fall back to the default anchor.
fn read_anchor(value: &JsValue) -> Option<Anchor> {
    if let Some(px) = value.as_f64() {
        return Some(Anchor::Pixels(px));
    }
    let text = value.as_string()?;
    let anchor = Anchor::parse(&text);
    if anchor.is_none() {
        log::warn!("ignoring anchor {text:?}");
    }
    anchor
}

fn read_zoom_target(value: &JsValue) -> Result<ZoomTarget, JsError> {
    if let Some(step) = value.as_f64() {
        if step.fract() == 0.0 && step.abs() <= i32::MAX as f64 {
            return Ok(ZoomTarget::Step(step as i32));
        }
    } else if let Some(text) = value.as_string() {
        if let Ok(target) = text.parse() {
            return Ok(target);
        }
    }
    Err(JsError::new("zoom must be an integer step or \"fit\""))
}

#[wasm_bindgen]
impl KineticViewport {
    /// Take over `element`, which must wrap its content in exactly one child.
    #[wasm_bindgen(constructor)]
    pub fn new(element: HtmlElement, settings: JsValue) -> Result<KineticViewport, JsError> {
        let settings = read_settings(&settings)?;
        let frames = Rc::new(FrameScheduler::default());
        let host = DomHost::new(element.clone(), frames.clone());
        let engine: Engine = Rc::new(RefCell::new(Kinetic::new(host, settings)?));

        frames.install(frame_callback(Rc::downgrade(&engine), Rc::downgrade(&frames)));

        let pending = PendingZoom::default();
        let mut listeners = Listeners::new(&element, &engine, &pending)
            .map_err(|e| JsError::new(&format!("cannot attach listeners: {:?}", e)))?;
        listeners.attach();

        Ok(Self { engine, frames, listeners, pending })
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.engine.borrow().active()
    }

    #[wasm_bindgen(getter, js_name = zoomStep)]
    pub fn zoom_step(&self) -> i32 {
        self.engine.borrow().zoom_step()
    }

    /// Replace the settings and keep moving without friction.
    pub fn start(&self, settings: JsValue) -> Result<(), JsError> {
        let settings = read_settings(&settings)?;
        self.engine.borrow_mut().start(settings);
        Ok(())
    }

    pub fn stop(&self) {
        self.engine.borrow_mut().stop();
    }

    pub fn end(&self) {
        self.engine.borrow_mut().end();
    }

    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&self, x: JsValue, y: JsValue) -> bool {
        self.with_engine(|k| k.zoom_in(read_anchor(&x), read_anchor(&y)))
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&self, x: JsValue, y: JsValue) -> bool {
        self.with_engine(|k| k.zoom_out(read_anchor(&x), read_anchor(&y)))
    }

    /// Returns the resulting step.
    #[wasm_bindgen(js_name = setZoom)]
    pub fn set_zoom(&self, value: JsValue, x: JsValue, y: JsValue) -> Result<i32, JsError> {
        let target = read_zoom_target(&value)?;
        Ok(self.with_engine(|k| k.set_zoom(target, read_anchor(&x), read_anchor(&y)).step))
    }

    #[wasm_bindgen(js_name = setNaturalDimensions)]
    pub fn set_natural_dimensions(&self, width: f64, height: f64) {
        self.engine.borrow_mut().set_natural_dimensions(width, height);
    }

    pub fn center(&self) {
        self.engine.borrow_mut().center();
    }

    #[wasm_bindgen(js_name = scrollTo)]
    pub fn scroll_to(&self, x: JsValue, y: JsValue) -> Result<(), JsError> {
        let (Some(x), Some(y)) = (read_anchor(&x), read_anchor(&y)) else {
            return Err(JsError::new("scrollTo needs pixel numbers or percentage strings"));
        };
        self.engine.borrow_mut().scroll_to(x, y);
        Ok(())
    }

    pub fn reinitialize(&mut self) -> Result<(), JsError> {
        self.engine.borrow_mut().reinitialize()?;
        self.listeners.attach();
        Ok(())
    }

    /// Detach every listener and drop zoom subscribers. The instance can be
    /// brought back with `reinitialize`.
    pub fn destroy(&mut self) -> Result<(), JsError> {
        self.engine.borrow_mut().destroy()?;
        self.listeners.detach();
        self.pending.borrow_mut().clear();
        Ok(())
    }

    /// Subscribe to zoom changes. `callback(multiplier, step)` runs after
    /// every applied zoom. Returns an id for `offZoom`.
    #[wasm_bindgen(js_name = onZoom)]
    pub fn on_zoom(&self, callback: js_sys::Function) -> u32 {
        let listener = notify::enqueue(&self.pending, callback);
        self.engine.borrow_mut().on_zoom(listener).as_u32()
    }

    #[wasm_bindgen(js_name = offZoom)]
    pub fn off_zoom(&self, id: u32) -> bool {
        self.engine.borrow_mut().off_zoom(SubscriptionId::from_u32(id))
    }
}

impl KineticViewport {
    /// Run `f` on the engine, then deliver the zoom notifications it queued.
    fn with_engine<R>(&self, f: impl FnOnce(&mut Kinetic<DomHost>) -> R) -> R {
        let result = f(&mut *self.engine.borrow_mut());
        notify::flush(&self.pending);
        result
    }
}

impl Drop for KineticViewport {
    fn drop(&mut self) {
        self.listeners.detach();
        self.frames.release();
        log::debug!("kinetic viewport freed");
    }
}

fn frame_callback(
    engine: Weak<RefCell<Kinetic<DomHost>>>,
    frames: Weak<FrameScheduler>,
) -> Closure<dyn FnMut(f64)> {
    Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
        if let Some(frames) = frames.upgrade() {
            frames.fired();
        }
        let Some(engine) = engine.upgrade() else {
            return;
        };
        match engine.try_borrow_mut() {
            Ok(mut k) => k.on_frame(),
            Err(_) => log::warn!("animation frame arrived while the viewport was busy"),
        };
    })
}

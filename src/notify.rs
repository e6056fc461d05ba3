//! Zoom notifications for JavaScript subscribers.
//!
//! Engine subscribers only queue the change. The queue is flushed once the
//! engine borrow is released, so a JS callback may call back into the
//! viewport.

use std::cell::RefCell;
use std::rc::Rc;

use kinetic_core::ZoomChange;
use wasm_bindgen::JsValue;

pub type PendingZoom = Rc<RefCell<Vec<(js_sys::Function, ZoomChange)>>>;

/// Engine-side subscriber that queues `change` for `callback`.
pub fn enqueue(pending: &PendingZoom, callback: js_sys::Function) -> impl FnMut(ZoomChange) + 'static {
    let pending = pending.clone();
    move |change| pending.borrow_mut().push((callback.clone(), change))
}

/// Call every queued subscriber with `(multiplier, step)`.
pub fn flush(pending: &PendingZoom) {
    let queued = std::mem::take(&mut *pending.borrow_mut());
    for (callback, change) in queued {
        let multiplier = JsValue::from_f64(change.multiplier);
        let step = JsValue::from(change.step);
        if let Err(e) = callback.call2(&JsValue::NULL, &multiplier, &step) {
            log::error!("zoom listener threw: {:?}", e);
        }
    }
}

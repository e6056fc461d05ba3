//! Browser binding for the `kinetic-core` engine.
//!
//! ```js
//! import init, { KineticViewport, initLogging } from "kinetic_viewport";
//! await init();
//! initLogging("debug");
//! const viewport = new KineticViewport(document.getElementById("viewer"), { slowdown: 0.85 });
//! viewport.onZoom((multiplier, step) => console.log(multiplier, step));
//! ```

use wasm_bindgen::prelude::*;

mod dom;
mod notify;
mod viewport;

pub use viewport::KineticViewport;

/// Route `log` output to the browser console and report panics there.
/// `level` is one of `error`, `warn`, `info`, `debug`, `trace`; defaults to
/// `info`.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) {
    console_error_panic_hook::set_once();
    let level = level
        .as_deref()
        .and_then(|l| l.parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}

//! `Host` implementation over a live `HtmlElement`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kinetic_core::{Host, Point, Size};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub const ACTIVE_CLASS: &str = "kinetic--active";

// ── Frame scheduling ──────────────────────────────────────────────────────────

/// Owns the `requestAnimationFrame` callback and the id of the pending
/// request. The callback is installed after the engine exists because it
/// holds a handle back to it.
#[derive(Default)]
pub struct FrameScheduler {
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    pending: Cell<Option<i32>>,
}

impl FrameScheduler {
    pub fn install(&self, callback: Closure<dyn FnMut(f64)>) {
        *self.callback.borrow_mut() = Some(callback);
    }

    /// Called first thing in the frame callback.
    pub fn fired(&self) {
        self.pending.set(None);
    }

    fn request(&self) {
        let Some(window) = web_sys::window() else {
            log::error!("no window, cannot schedule a frame");
            return;
        };
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            log::warn!("frame requested before the callback was installed");
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.cancel_animation_frame(id) {
                    log::warn!("cancelAnimationFrame failed: {:?}", e);
                }
            }
        }
    }

    /// Cancel any pending frame and drop the callback.
    pub fn release(&self) {
        self.cancel();
        self.callback.borrow_mut().take();
    }
}

// ── Element ───────────────────────────────────────────────────────────────────

pub struct DomHost {
    element: HtmlElement,
    /// The single child that receives the scale transform. `None` only when
    /// construction is about to be rejected.
    content: Option<HtmlElement>,
    frames: Rc<FrameScheduler>,
}

impl DomHost {
    pub fn new(element: HtmlElement, frames: Rc<FrameScheduler>) -> Self {
        let content = element
            .first_element_child()
            .and_then(|child| child.dyn_into::<HtmlElement>().ok());
        Self { element, content, frames }
    }

    pub fn content(&self) -> Option<&HtmlElement> {
        self.content.as_ref()
    }

    fn style_content(&self, name: &str, value: &str) {
        if let Some(content) = &self.content {
            set_style(content, name, value);
        }
    }
}

fn set_style(element: &HtmlElement, name: &str, value: &str) {
    if let Err(e) = element.style().set_property(name, value) {
        log::warn!("failed to set {name}: {:?}", e);
    }
}

impl Host for DomHost {
    type Target = Element;

    fn is_document_root(&self) -> bool {
        let tag = self.element.tag_name();
        tag.eq_ignore_ascii_case("html") || tag.eq_ignore_ascii_case("body")
    }

    fn child_count(&self) -> usize {
        self.element.child_element_count() as usize
    }

    fn scroll_offset(&self) -> Point {
        Point::new(self.element.scroll_left() as f64, self.element.scroll_top() as f64)
    }

    fn set_scroll_offset(&mut self, offset: Point) {
        self.element.set_scroll_left(offset.x as _);
        self.element.set_scroll_top(offset.y as _);
    }

    fn scroll_size(&self) -> Size {
        Size::new(self.element.scroll_width() as f64, self.element.scroll_height() as f64)
    }

    fn client_size(&self) -> Size {
        Size::new(self.element.client_width() as f64, self.element.client_height() as f64)
    }

    fn set_content_transform_origin(&mut self) {
        self.style_content("transform-origin", "0 0");
    }

    fn set_content_scale(&mut self, multiplier: f64) {
        self.style_content("transform", &format!("scale({multiplier})"));
    }

    fn set_content_height(&mut self, height: Option<f64>) {
        match (height, &self.content) {
            (Some(px), Some(_)) => self.style_content("height", &format!("{px}px")),
            (None, Some(content)) => {
                if let Err(e) = content.style().remove_property("height") {
                    log::warn!("failed to clear height: {:?}", e);
                }
            }
            (_, None) => {}
        }
    }

    fn set_active_class(&mut self, active: bool) {
        let classes = self.element.class_list();
        let result = if active {
            classes.add_1(ACTIVE_CLASS)
        } else {
            classes.remove_1(ACTIVE_CLASS)
        };
        if let Err(e) = result {
            log::warn!("failed to toggle {ACTIVE_CLASS}: {:?}", e);
        }
    }

    fn apply_hardware_acceleration(&mut self) {
        set_style(&self.element, "transform", "translate3d(0,0,0)");
        set_style(&self.element, "perspective", "1000px");
        set_style(&self.element, "backface-visibility", "hidden");
    }

    fn focus_viewport(&mut self) {
        if let Err(e) = self.element.focus() {
            log::debug!("focus failed: {:?}", e);
        }
    }

    fn blur(&mut self, target: &Element) {
        if let Some(el) = target.dyn_ref::<HtmlElement>() {
            if let Err(e) = el.blur() {
                log::debug!("blur failed: {:?}", e);
            }
        }
    }

    fn is_image(&self, target: &Element) -> bool {
        target.tag_name().eq_ignore_ascii_case("img")
    }

    fn request_frame(&mut self) {
        self.frames.request();
    }

    fn cancel_frame(&mut self) {
        self.frames.cancel();
    }
}

impl std::fmt::Debug for DomHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomHost")
            .field("element", &self.element.tag_name())
            .field("has_content", &self.content.is_some())
            .finish()
    }
}

//! DOM events to engine inputs, and engine responses back onto DOM events.

use kinetic_core::geometry::offset_in;
use kinetic_core::{EventResponse, OffsetFrame, Point, PointerInput, TouchInput, TouchPoint, WheelInput};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent, Touch, TouchEvent, WheelEvent};

/// Element the event was dispatched to, if it is an element at all.
pub fn target(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

pub fn apply(event: &Event, response: EventResponse) {
    if response.prevent_default {
        event.prevent_default();
    }
    if response.stop_propagation {
        event.stop_propagation();
    }
}

/// `element` and its offset parents, innermost first.
fn offset_chain(element: &HtmlElement) -> impl Iterator<Item = OffsetFrame> {
    std::iter::successors(Some(element.clone()), |el| {
        el.offset_parent().and_then(|p| p.dyn_into::<HtmlElement>().ok())
    })
    .map(|el| OffsetFrame {
        offset_left: el.offset_left() as f64,
        offset_top: el.offset_top() as f64,
        scroll_left: el.scroll_left() as f64,
        scroll_top: el.scroll_top() as f64,
    })
}

fn relative_to(client: Point, content: Option<&HtmlElement>) -> Point {
    match content {
        Some(el) => offset_in(client, offset_chain(el)),
        None => client,
    }
}

pub fn pointer(ev: &MouseEvent) -> PointerInput<Element> {
    PointerInput {
        client: Point::new(ev.client_x() as f64, ev.client_y() as f64),
        time_ms: ev.time_stamp(),
        target: target(ev),
    }
}

fn touch_point(touch: &Touch, content: Option<&HtmlElement>) -> TouchPoint {
    let client = Point::new(touch.client_x() as f64, touch.client_y() as f64);
    TouchPoint { client, offset: relative_to(client, content) }
}

/// Touches still on the surface. For `touchend` that excludes the lifted
/// finger.
pub fn touches(ev: &TouchEvent, content: Option<&HtmlElement>) -> TouchInput<Element> {
    let list = ev.touches();
    let touches = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| touch_point(&t, content))
        .collect();
    TouchInput { touches, time_ms: ev.time_stamp(), target: target(ev) }
}

pub fn wheel(ev: &WheelEvent, content: Option<&HtmlElement>) -> WheelInput {
    let client = Point::new(ev.client_x() as f64, ev.client_y() as f64);
    WheelInput { delta_y: ev.delta_y(), offset: relative_to(client, content) }
}

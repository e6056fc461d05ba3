//! Listener closures for one viewport.
//!
//! Built once at construction, attached and detached as the viewport is
//! (re)activated, removed for good when dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use kinetic_core::{EventResponse, Kinetic};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, HtmlElement, MouseEvent, TouchEvent, WheelEvent};

use super::host::DomHost;
use super::input;
use crate::notify::{self, PendingZoom};

pub type Engine = Rc<RefCell<Kinetic<DomHost>>>;

/// Shared by every handler. Holds the engine weakly so the closures never
/// keep a dropped viewport alive.
#[derive(Clone)]
struct Context {
    engine: Weak<RefCell<Kinetic<DomHost>>>,
    pending: PendingZoom,
    content: Option<HtmlElement>,
}

impl Context {
    fn dispatch(&self, event: &Event, handle: impl FnOnce(&mut Kinetic<DomHost>) -> EventResponse) {
        let Some(engine) = self.engine.upgrade() else {
            return;
        };
        let response = match engine.try_borrow_mut() {
            Ok(mut k) => handle(&mut *k),
            Err(_) => {
                log::warn!("{} arrived while the viewport was busy", event.type_());
                return;
            }
        };
        input::apply(event, response);
        notify::flush(&self.pending);
    }
}

struct Binding {
    target: EventTarget,
    kind: &'static str,
    capture: bool,
    handler: Closure<dyn FnMut(Event)>,
}

fn bind<E>(
    target: &EventTarget,
    kind: &'static str,
    capture: bool,
    ctx: &Context,
    handle: impl Fn(&mut Kinetic<DomHost>, &E, &Context) -> EventResponse + 'static,
) -> Binding
where
    E: JsCast + 'static,
{
    let ctx = ctx.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(ev) = event.dyn_ref::<E>() else {
            return;
        };
        ctx.dispatch(&event, |k| handle(k, ev, &ctx));
    });
    Binding { target: target.clone(), kind, capture, handler }
}

pub struct Listeners {
    bindings: Vec<Binding>,
    attached: bool,
}

impl Listeners {
    pub fn new(element: &HtmlElement, engine: &Engine, pending: &PendingZoom) -> Result<Self, JsValue> {
        let document_root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or_else(|| JsValue::from_str("no document element"))?;

        let ctx = Context {
            engine: Rc::downgrade(engine),
            pending: pending.clone(),
            content: engine.borrow().host().content().cloned(),
        };
        let el: EventTarget = element.clone().into();
        let root: EventTarget = document_root.into();

        let bindings = vec![
            bind::<TouchEvent>(&el, "touchstart", false, &ctx, |k, ev, c| {
                k.on_touch_start(input::touches(ev, c.content.as_ref()))
            }),
            bind::<TouchEvent>(&el, "touchmove", false, &ctx, |k, ev, c| {
                k.on_touch_move(input::touches(ev, c.content.as_ref()))
            }),
            bind::<TouchEvent>(&el, "touchend", false, &ctx, |k, ev, c| {
                k.on_touch_end(input::touches(ev, c.content.as_ref()))
            }),
            bind::<MouseEvent>(&el, "mousedown", false, &ctx, |k, ev, _| k.on_pointer_down(input::pointer(ev))),
            bind::<MouseEvent>(&el, "mousemove", false, &ctx, |k, ev, _| k.on_pointer_move(input::pointer(ev))),
            bind::<MouseEvent>(&el, "mouseup", false, &ctx, |k, ev, _| k.on_pointer_up(input::target(ev))),
            bind::<MouseEvent>(&el, "click", false, &ctx, |k, _, _| k.on_click()),
            bind::<Event>(&el, "scroll", false, &ctx, |k, _, _| k.on_scroll()),
            bind::<Event>(&el, "selectstart", false, &ctx, |k, ev, _| k.on_select_start(input::target(ev))),
            bind::<Event>(&el, "dragstart", false, &ctx, |k, ev, _| k.on_drag_start(input::target(ev))),
            bind::<WheelEvent>(&el, "wheel", true, &ctx, |k, ev, c| k.on_wheel(input::wheel(ev, c.content.as_ref()))),
            bind::<MouseEvent>(&root, "mouseup", false, &ctx, |k, _, _| {
                k.on_document_release();
                EventResponse::NONE
            }),
            bind::<MouseEvent>(&root, "click", false, &ctx, |k, _, _| {
                k.on_document_release();
                EventResponse::NONE
            }),
        ];

        Ok(Self { bindings, attached: false })
    }

    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        for b in &self.bindings {
            if let Err(e) = b.target.add_event_listener_with_callback_and_bool(
                b.kind,
                b.handler.as_ref().unchecked_ref(),
                b.capture,
            ) {
                log::error!("failed to add {} listener: {:?}", b.kind, e);
            }
        }
        self.attached = true;
    }

    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        for b in &self.bindings {
            if let Err(e) = b.target.remove_event_listener_with_callback_and_bool(
                b.kind,
                b.handler.as_ref().unchecked_ref(),
                b.capture,
            ) {
                log::warn!("failed to remove {} listener: {:?}", b.kind, e);
            }
        }
        self.attached = false;
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.detach();
    }
}

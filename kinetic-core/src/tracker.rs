//! Pointer, touch and wheel input.
//!
//! Handlers take plain input structs built by the DOM binding and return an
//! [`EventResponse`] telling the binding what to do with the DOM event.
//! They never fail: missing drag state simply makes them no-ops.

use crate::engine::Kinetic;
use crate::geometry::{cap_velocity, distance, pinch_ticks, Anchor, Point};
use crate::host::Host;

// ── Inputs ────────────────────────────────────────────────────────────────────

/// Mouse-style input.
#[derive(Clone, Debug)]
pub struct PointerInput<T> {
    /// Client (viewport) coordinates.
    pub client: Point,
    /// Event timestamp in milliseconds.
    pub time_ms: f64,
    pub target: Option<T>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub client: Point,
    /// Position relative to the content element.
    pub offset: Point,
}

/// Every touch currently on the surface, in the order the browser reports them.
#[derive(Clone, Debug)]
pub struct TouchInput<T> {
    pub touches: Vec<TouchPoint>,
    pub time_ms: f64,
    pub target: Option<T>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    pub delta_y: f64,
    /// Cursor position relative to the content element.
    pub offset: Point,
}

/// What the binding should do with the DOM event after handling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl EventResponse {
    pub const NONE: EventResponse = EventResponse { prevent_default: false, stop_propagation: false };
    pub const PREVENT: EventResponse = EventResponse { prevent_default: true, stop_propagation: false };
    pub const STOP: EventResponse = EventResponse { prevent_default: false, stop_propagation: true };
    pub const BOTH: EventResponse = EventResponse { prevent_default: true, stop_propagation: true };
}

// ── State ─────────────────────────────────────────────────────────────────────

/// `current` and `previous` are either both set (drag in progress) or both
/// empty.
#[derive(Clone, Debug)]
pub(crate) struct DragState<T> {
    pub pointer_down: bool,
    pub current: Option<Point>,
    pub previous: Option<Point>,
    /// Timestamp of the last accepted move sample.
    pub last_sample_ms: Option<f64>,
    /// Distance the pointer must still travel from the drag origin before
    /// the view moves. Zero once crossed.
    pub threshold: f64,
    pub focused: Option<T>,
}

impl<T> Default for DragState<T> {
    fn default() -> Self {
        Self {
            pointer_down: false,
            current: None,
            previous: None,
            last_sample_ms: None,
            threshold: 0.0,
            focused: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct PinchState {
    pub touch_count: usize,
    /// Pinch midpoint as a fraction of the viewport's client size.
    pub center_fraction: Point,
    pub initial_distance: f64,
    pub last_distance: f64,
}

// ── Handlers ──────────────────────────────────────────────────────────────────

impl<H: Host> Kinetic<H> {
    pub fn on_pointer_down(&mut self, input: PointerInput<H::Target>) -> EventResponse {
        if !self.accepts(input.target.as_ref()) {
            return EventResponse::NONE;
        }
        self.drag.threshold = self.threshold_for(input.target.as_ref());
        self.begin_drag(input.client);

        let mut response = EventResponse::STOP;
        if let Some(target) = input.target {
            if self.host.is_image(&target) {
                response.prevent_default = true;
            }
            self.drag.focused = Some(target);
        }
        response
    }

    pub fn on_pointer_move(&mut self, input: PointerInput<H::Target>) -> EventResponse {
        if !self.drag.pointer_down {
            return EventResponse::NONE;
        }
        self.sample_move(input.client, input.time_ms);
        EventResponse::PREVENT
    }

    /// Pointer released over the viewport. Starts deceleration when a drag
    /// actually moved; otherwise does nothing.
    pub fn on_pointer_up(&mut self, target: Option<H::Target>) -> EventResponse {
        if !self.accepts(target.as_ref()) {
            return EventResponse::NONE;
        }
        self.end_drag();
        self.drag.focused = None;
        EventResponse::PREVENT
    }

    /// Mouse-up or click anywhere in the document: forget the drag even if
    /// the pointer was released outside the viewport.
    pub fn on_document_release(&mut self) {
        self.drag.current = None;
        self.drag.previous = None;
        self.drag.pointer_down = false;
    }

    pub fn on_touch_start(&mut self, input: TouchInput<H::Target>) -> EventResponse {
        self.pinch.touch_count = input.touches.len();
        let Some(first) = input.touches.first().copied() else {
            return EventResponse::NONE;
        };

        if let [a, b] = input.touches[..] {
            self.begin_pinch(a.offset, b.offset);
        }

        if !self.accepts(input.target.as_ref()) {
            return EventResponse::NONE;
        }
        self.drag.threshold = self.threshold_for(input.target.as_ref());
        self.begin_drag(first.client);
        EventResponse::STOP
    }

    pub fn on_touch_move(&mut self, input: TouchInput<H::Target>) -> EventResponse {
        if !self.drag.pointer_down {
            return EventResponse::NONE;
        }
        match (self.pinch.touch_count, &input.touches[..]) {
            (1, [touch, ..]) => {
                self.sample_move(touch.client, input.time_ms);
                EventResponse::PREVENT
            }
            (2, [a, b, ..]) => {
                self.pinch_to(distance(a.offset, b.offset));
                EventResponse::PREVENT
            }
            _ => EventResponse::NONE,
        }
    }

    /// `input.touches` holds the fingers still down after the change.
    pub fn on_touch_end(&mut self, input: TouchInput<H::Target>) -> EventResponse {
        self.pinch.touch_count = input.touches.len();
        match input.touches[..] {
            [] => {
                self.end_drag();
                // Touch gets no document mouse-up, so release here as well.
                self.on_document_release();
                // Also keeps the emulated mouse events of a tap away.
                EventResponse::PREVENT
            }
            [remaining] => {
                self.begin_drag(remaining.client);
                EventResponse::NONE
            }
            _ => EventResponse::NONE,
        }
    }

    /// Wheel up zooms in, anything else zooms out, anchored at the cursor.
    pub fn on_wheel(&mut self, input: WheelInput) -> EventResponse {
        let x = Some(Anchor::Pixels(input.offset.x));
        let y = Some(Anchor::Pixels(input.offset.y));
        if input.delta_y < 0.0 {
            self.zoom_in(x, y);
        } else {
            self.zoom_out(x, y);
        }
        EventResponse::NONE
    }

    /// Swallow clicks while the view is still sliding.
    pub fn on_click(&mut self) -> EventResponse {
        if self.motion.velocity.x.abs() > 0.0 || self.motion.velocity.y.abs() > 0.0 {
            EventResponse::BOTH
        } else {
            EventResponse::NONE
        }
    }

    pub fn on_drag_start(&mut self, target: Option<H::Target>) -> EventResponse {
        if self.accepts(target.as_ref()) && self.drag.focused.is_some() {
            EventResponse::BOTH
        } else {
            EventResponse::NONE
        }
    }

    pub fn on_select_start(&mut self, target: Option<H::Target>) -> EventResponse {
        if self.accepts(target.as_ref()) {
            EventResponse::BOTH
        } else {
            EventResponse::NONE
        }
    }

    /// Scrollbar scrolling (not the wheel).
    pub fn on_scroll(&mut self) -> EventResponse {
        EventResponse::PREVENT
    }

    pub fn is_pointer_down(&self) -> bool {
        self.drag.pointer_down
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn accepts(&self, target: Option<&H::Target>) -> bool {
        match (&self.target_filter, target) {
            (Some(filter), Some(target)) => filter(target),
            _ => true,
        }
    }

    fn threshold_for(&self, target: Option<&H::Target>) -> f64 {
        match (&self.threshold_hook, target) {
            (Some(hook), Some(target)) => hook(target),
            _ => self.settings.threshold,
        }
    }

    /// Takes over from any deceleration: the pending frame is dropped.
    fn begin_drag(&mut self, point: Point) {
        if self.motion.moving {
            self.host.cancel_frame();
            self.motion.moving = false;
        }
        self.drag.pointer_down = true;
        self.drag.current = Some(point);
        self.drag.previous = Some(point);
        self.motion.velocity = Point::ZERO;
    }

    fn sample_move(&mut self, point: Point, time_ms: f64) {
        if let Some(last) = self.drag.last_sample_ms {
            if time_ms - last < self.settings.sample_interval_ms() {
                return;
            }
        }
        self.drag.last_sample_ms = Some(time_ms);

        let Some(current) = self.drag.current else {
            return;
        };
        let mut moved = point - current;
        if self.settings.invert {
            moved = Point::ZERO - moved;
        }

        if self.drag.threshold > 0.0 {
            if self.drag.threshold > distance(moved, Point::ZERO) {
                return;
            }
            self.drag.threshold = 0.0;
        }

        if let Some(focused) = self.drag.focused.take() {
            self.host.blur(&focused);
            self.host.focus_viewport();
        }

        self.motion.decelerate = false;
        self.motion.velocity = Point::ZERO;

        let offset = self.host.scroll_offset();
        let next = Point::new(
            if self.settings.x { offset.x - moved.x } else { offset.x },
            if self.settings.y { offset.y - moved.y } else { offset.y },
        );
        self.host.set_scroll_offset(next);

        self.drag.previous = Some(current);
        self.drag.current = Some(point);
        self.calculate_velocity();
    }

    fn end_drag(&mut self) {
        if self.drag.current.is_none() || self.drag.previous.is_none() || self.motion.decelerate {
            return;
        }
        self.motion.decelerate = true;
        self.calculate_velocity();
        self.drag.current = None;
        self.drag.previous = None;
        self.drag.pointer_down = false;
        self.step();
    }

    fn calculate_velocity(&mut self) {
        let (Some(previous), Some(current)) = (self.drag.previous, self.drag.current) else {
            return;
        };
        let max = self.settings.max_velocity;
        let mut velocity = Point::new(
            cap_velocity(previous.x - current.x, max),
            cap_velocity(previous.y - current.y, max),
        );
        if self.settings.invert {
            velocity = Point::ZERO - velocity;
        }
        self.motion.velocity = velocity;
    }

    fn begin_pinch(&mut self, a: Point, b: Point) {
        let client = self.host.client_size();
        let center = Point::new(
            (a.x.min(b.x) + (a.x - b.x).abs() / 2.0).round(),
            (a.y.min(b.y) + (a.y - b.y).abs() / 2.0).round(),
        );
        self.pinch.center_fraction = Point::new(
            if client.width > 0.0 { center.x / client.width } else { 0.5 },
            if client.height > 0.0 { center.y / client.height } else { 0.5 },
        );
        self.pinch.initial_distance = distance(a, b);
        self.pinch.last_distance = self.pinch.initial_distance;
    }

    fn pinch_to(&mut self, current_distance: f64) {
        let ticks = pinch_ticks(
            self.pinch.initial_distance,
            self.pinch.last_distance,
            current_distance,
        );
        let x = Some(Anchor::Percent(self.pinch.center_fraction.x * 100.0));
        let y = Some(Anchor::Percent(self.pinch.center_fraction.y * 100.0));
        for _ in 0..ticks.unsigned_abs() {
            if ticks > 0 {
                self.zoom_in(x, y);
            } else {
                self.zoom_out(x, y);
            }
        }
        self.pinch.last_distance = current_distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PartialSettings;
    use crate::testing::{run_frames, TestHost, TestTarget};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn viewport_with(settings: PartialSettings) -> Kinetic<TestHost> {
        let mut host = TestHost::new(400.0, 300.0, 2000.0, 2000.0);
        host.scroll = Point::new(500.0, 500.0);
        Kinetic::new(host, settings).unwrap()
    }

    fn viewport() -> Kinetic<TestHost> {
        viewport_with(PartialSettings::default())
    }

    fn pointer(x: f64, y: f64, t: f64) -> PointerInput<TestTarget> {
        TestHost::pointer(x, y, t, TestTarget::Div)
    }

    fn touches(points: &[(f64, f64)], t: f64) -> TouchInput<TestTarget> {
        TouchInput {
            touches: points
                .iter()
                .map(|&(x, y)| TouchPoint { client: Point::new(x, y), offset: Point::new(x, y) })
                .collect(),
            time_ms: t,
            target: Some(TestTarget::Div),
        }
    }

    #[test]
    fn test_drag_scenario() {
        let mut k = viewport_with(PartialSettings {
            threshold: Some(0.0),
            slowdown: Some(0.9),
            max_velocity: Some(40.0),
            ..Default::default()
        });
        let down = k.on_pointer_down(pointer(100.0, 100.0, 0.0));
        assert!(down.stop_propagation);
        assert!(k.is_pointer_down());

        let mv = k.on_pointer_move(pointer(80.0, 130.0, 20.0));
        assert!(mv.prevent_default);
        assert_eq!(k.scroll_offset(), Point::new(520.0, 470.0));
        assert_eq!(k.velocity(), Point::new(20.0, -30.0));

        k.on_pointer_up(Some(TestTarget::Div));
        assert!(!k.is_pointer_down());
        assert!(k.is_decelerating());
        run_frames(&mut k);
        assert!(k.velocity().is_zero());
    }

    #[test]
    fn test_velocity_is_capped() {
        let mut k = viewport();
        k.on_pointer_down(pointer(300.0, 300.0, 0.0));
        k.on_pointer_move(pointer(200.0, 350.0, 20.0));
        // Scroll follows the pointer exactly, velocity does not.
        assert_eq!(k.scroll_offset(), Point::new(600.0, 450.0));
        assert_eq!(k.velocity(), Point::new(40.0, -40.0));
    }

    #[test]
    fn test_move_without_pointer_down_is_ignored() {
        let mut k = viewport();
        let r = k.on_pointer_move(pointer(80.0, 130.0, 20.0));
        assert_eq!(r, EventResponse::NONE);
        assert_eq!(k.scroll_offset(), Point::new(500.0, 500.0));
    }

    #[test]
    fn test_moves_are_throttled() {
        let mut k = viewport();
        k.on_pointer_down(pointer(100.0, 100.0, 0.0));
        k.on_pointer_move(pointer(90.0, 100.0, 100.0));
        assert_eq!(k.scroll_offset().x, 510.0);

        // 10ms later is inside the 60Hz window.
        k.on_pointer_move(pointer(80.0, 100.0, 110.0));
        assert_eq!(k.scroll_offset().x, 510.0);

        k.on_pointer_move(pointer(70.0, 100.0, 117.0));
        assert_eq!(k.scroll_offset().x, 530.0);
    }

    #[test]
    fn test_threshold_gates_small_drags() {
        let mut k = viewport_with(PartialSettings { threshold: Some(10.0), ..Default::default() });
        k.on_pointer_down(pointer(0.0, 0.0, 0.0));
        k.on_pointer_move(pointer(3.0, 4.0, 20.0));
        k.on_pointer_move(pointer(-5.0, 5.0, 40.0));
        k.on_pointer_move(pointer(0.0, 9.0, 60.0));
        assert_eq!(k.scroll_offset(), Point::new(500.0, 500.0));
        assert!(k.velocity().is_zero());

        // Crossing applies the whole displacement from the drag origin.
        k.on_pointer_move(pointer(6.0, 8.0, 80.0));
        assert_eq!(k.scroll_offset(), Point::new(494.0, 492.0));

        // Once crossed, small moves count.
        k.on_pointer_move(pointer(7.0, 8.0, 100.0));
        assert_eq!(k.scroll_offset(), Point::new(493.0, 492.0));
    }

    #[test]
    fn test_threshold_never_crossed_leaves_no_velocity() {
        let mut k = viewport_with(PartialSettings { threshold: Some(10.0), ..Default::default() });
        k.on_pointer_down(pointer(0.0, 0.0, 0.0));
        k.on_pointer_move(pointer(3.0, 4.0, 20.0));
        k.on_pointer_up(Some(TestTarget::Div));
        k.on_document_release();
        assert_eq!(k.scroll_offset(), Point::new(500.0, 500.0));
        assert!(!k.is_moving());
        assert_eq!(k.on_click(), EventResponse::NONE);
    }

    #[test]
    fn test_invert() {
        let mut k = viewport_with(PartialSettings { invert: Some(true), ..Default::default() });
        k.on_pointer_down(pointer(100.0, 100.0, 0.0));
        k.on_pointer_move(pointer(80.0, 130.0, 20.0));
        assert_eq!(k.scroll_offset(), Point::new(480.0, 530.0));
        assert_eq!(k.velocity(), Point::new(-20.0, 30.0));

        k.on_pointer_up(Some(TestTarget::Div));
        assert_eq!(k.scroll_offset(), Point::new(460.0, 560.0));
    }

    #[test]
    fn test_pointer_up_is_idempotent() {
        let mut k = viewport();
        k.on_pointer_down(pointer(100.0, 100.0, 0.0));
        k.on_pointer_move(pointer(80.0, 130.0, 20.0));
        k.on_pointer_up(Some(TestTarget::Div));
        let after_first = k.scroll_offset();
        let requested = k.host().frames_requested;

        k.on_pointer_up(Some(TestTarget::Div));
        assert_eq!(k.scroll_offset(), after_first);
        assert_eq!(k.host().frames_requested, requested);
    }

    #[test]
    fn test_pointer_down_takes_over_deceleration() {
        let mut k = viewport();
        k.on_pointer_down(pointer(100.0, 100.0, 0.0));
        k.on_pointer_move(pointer(80.0, 130.0, 20.0));
        k.on_pointer_up(Some(TestTarget::Div));
        assert!(k.is_moving());

        k.on_pointer_down(pointer(200.0, 200.0, 40.0));
        assert!(k.velocity().is_zero());
        let held = k.scroll_offset();
        run_frames(&mut k);
        assert_eq!(k.scroll_offset(), held);
        assert!(k.is_pointer_down());
    }

    #[test]
    fn test_new_drag_cancels_pending_frame() {
        let mut k = viewport();
        k.on_pointer_down(pointer(100.0, 100.0, 0.0));
        k.on_pointer_move(pointer(80.0, 130.0, 20.0));
        k.on_pointer_up(Some(TestTarget::Div));
        assert!(k.host().pending_frame);

        k.on_pointer_down(pointer(200.0, 200.0, 40.0));
        assert!(!k.host().pending_frame);
        assert_eq!(k.host().frames_cancelled, 1);
        k.on_pointer_move(pointer(190.0, 200.0, 60.0));
        let held = k.scroll_offset();

        assert_eq!(run_frames(&mut k), 0);
        assert_eq!(k.scroll_offset(), held);
        assert!(!k.is_moving());
    }

    #[test]
    fn test_image_target_prevents_native_drag_and_is_blurred() {
        let mut k = viewport();
        let r = k.on_pointer_down(TestHost::pointer(100.0, 100.0, 0.0, TestTarget::Img));
        assert_eq!(r, EventResponse::BOTH);
        assert_eq!(k.on_drag_start(Some(TestTarget::Img)), EventResponse::BOTH);

        k.on_pointer_move(pointer(90.0, 100.0, 20.0));
        assert_eq!(k.host().blurred, vec![TestTarget::Img]);
        assert_eq!(k.host().focus_count, 1);
        assert_eq!(k.on_drag_start(Some(TestTarget::Img)), EventResponse::NONE);
    }

    #[test]
    fn test_plain_target_only_stops_propagation() {
        let mut k = viewport();
        let r = k.on_pointer_down(pointer(100.0, 100.0, 0.0));
        assert_eq!(r, EventResponse::STOP);
    }

    #[test]
    fn test_target_filter_and_threshold_hook() {
        let mut k = viewport();
        k.set_target_filter(|t| *t != TestTarget::Img);
        k.set_threshold_hook(|_| 50.0);

        let r = k.on_pointer_down(TestHost::pointer(100.0, 100.0, 0.0, TestTarget::Img));
        assert_eq!(r, EventResponse::NONE);
        assert!(!k.is_pointer_down());
        assert_eq!(k.on_select_start(Some(TestTarget::Img)), EventResponse::NONE);
        assert_eq!(k.on_select_start(Some(TestTarget::Div)), EventResponse::BOTH);

        k.on_pointer_down(pointer(100.0, 100.0, 0.0));
        k.on_pointer_move(pointer(70.0, 100.0, 20.0));
        assert_eq!(k.scroll_offset(), Point::new(500.0, 500.0));
    }

    #[test]
    fn test_click_suppressed_while_sliding() {
        let mut k = viewport();
        k.on_pointer_down(pointer(100.0, 100.0, 0.0));
        k.on_pointer_move(pointer(80.0, 130.0, 20.0));
        k.on_pointer_up(Some(TestTarget::Div));
        assert_eq!(k.on_click(), EventResponse::BOTH);

        run_frames(&mut k);
        assert_eq!(k.on_click(), EventResponse::NONE);
    }

    #[test]
    fn test_document_release_clears_drag() {
        let mut k = viewport();
        k.on_pointer_down(pointer(100.0, 100.0, 0.0));
        k.on_document_release();
        assert!(!k.is_pointer_down());
        k.on_pointer_move(pointer(50.0, 50.0, 20.0));
        assert_eq!(k.scroll_offset(), Point::new(500.0, 500.0));
    }

    #[test]
    fn test_scroll_event_prevented() {
        let mut k = viewport();
        assert_eq!(k.on_scroll(), EventResponse::PREVENT);
    }

    #[test]
    fn test_single_finger_touch_drags() {
        let mut k = viewport();
        assert_eq!(k.on_touch_start(touches(&[(100.0, 100.0)], 0.0)), EventResponse::STOP);
        assert_eq!(
            k.on_touch_move(touches(&[(80.0, 130.0)], 20.0)),
            EventResponse::PREVENT
        );
        assert_eq!(k.scroll_offset(), Point::new(520.0, 470.0));

        assert_eq!(k.on_touch_end(touches(&[], 40.0)), EventResponse::PREVENT);
        assert!(!k.is_pointer_down());
        assert!(k.is_moving());
    }

    #[test]
    fn test_tap_leaves_no_drag_behind() {
        let mut k = viewport();
        k.on_touch_start(touches(&[(100.0, 100.0)], 0.0));
        k.on_touch_end(touches(&[], 10.0));
        assert!(!k.is_pointer_down());
        assert!(k.velocity().is_zero());
        assert!(!k.is_moving());
    }

    fn pinch_viewport() -> (Kinetic<TestHost>, Rc<RefCell<Vec<i32>>>) {
        let host = TestHost::new(400.0, 300.0, 1000.0, 800.0);
        let mut k = Kinetic::new(host, PartialSettings::default()).unwrap();
        let steps = Rc::new(RefCell::new(Vec::new()));
        let s = steps.clone();
        k.on_zoom(move |c| s.borrow_mut().push(c.step));
        (k, steps)
    }

    #[test]
    fn test_pinch_spread_zooms_in_once() {
        let (mut k, steps) = pinch_viewport();
        k.on_touch_start(touches(&[(100.0, 100.0), (110.0, 100.0)], 0.0));
        k.on_touch_move(touches(&[(100.0, 100.0), (125.0, 100.0)], 20.0));
        assert_eq!(*steps.borrow(), vec![1]);
        assert_eq!(k.zoom_step(), 1);

        // Center (105,100) stays put: content point (105,100) maps to itself * 1.1.
        let offset = k.scroll_offset();
        approx::assert_relative_eq!(offset.x, 105.0 * 1.1 - 105.0, epsilon = 1e-9);
        approx::assert_relative_eq!(offset.y, 100.0 * 1.1 - 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pinch_steps_follow_distance_ticks() {
        let (mut k, steps) = pinch_viewport();
        k.on_touch_start(touches(&[(100.0, 100.0), (150.0, 100.0)], 0.0));
        // +25px: two ticks in.
        k.on_touch_move(touches(&[(100.0, 100.0), (175.0, 100.0)], 20.0));
        assert_eq!(*steps.borrow(), vec![1, 2]);
        // Back to +5px: two ticks out.
        k.on_touch_move(touches(&[(100.0, 100.0), (155.0, 100.0)], 40.0));
        assert_eq!(*steps.borrow(), vec![1, 2, 1, 0]);
        // Pinch closed by 5px: one tick out.
        k.on_touch_move(touches(&[(100.0, 100.0), (145.0, 100.0)], 60.0));
        assert_eq!(*steps.borrow(), vec![1, 2, 1, 0, -1]);
        // Pinching never pans.
        assert!(k.velocity().is_zero());
    }

    #[test]
    fn test_two_to_one_finger_restarts_drag() {
        let (mut k, _) = pinch_viewport();
        k.host_mut().scroll = Point::new(200.0, 200.0);
        k.on_touch_start(touches(&[(100.0, 100.0), (110.0, 100.0)], 0.0));
        k.on_touch_end(touches(&[(110.0, 100.0)], 10.0));
        assert!(k.is_pointer_down());

        k.on_touch_move(touches(&[(100.0, 90.0)], 30.0));
        assert_eq!(k.scroll_offset(), Point::new(210.0, 210.0));
    }

    #[test]
    fn test_three_fingers_are_ignored() {
        let (mut k, steps) = pinch_viewport();
        k.host_mut().scroll = Point::new(200.0, 200.0);
        k.on_touch_start(touches(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)], 0.0));
        let r = k.on_touch_move(touches(&[(50.0, 50.0), (100.0, 0.0), (200.0, 0.0)], 20.0));
        assert_eq!(r, EventResponse::NONE);
        assert!(steps.borrow().is_empty());
        assert_eq!(k.scroll_offset(), Point::new(200.0, 200.0));
    }

    #[test]
    fn test_touch_start_without_touches() {
        let mut k = viewport();
        assert_eq!(k.on_touch_start(touches(&[], 0.0)), EventResponse::NONE);
        assert!(!k.is_pointer_down());
    }

    #[test]
    fn test_wheel_zooms_at_cursor() {
        let (mut k, steps) = pinch_viewport();
        k.on_wheel(WheelInput { delta_y: -3.0, offset: Point::new(40.0, 60.0) });
        k.on_wheel(WheelInput { delta_y: -3.0, offset: Point::new(40.0, 60.0) });
        k.on_wheel(WheelInput { delta_y: 3.0, offset: Point::new(40.0, 60.0) });
        assert_eq!(*steps.borrow(), vec![1, 2, 1]);
    }
}

//! The hosting element as seen by the engine.
//!
//! The DOM binding implements this for a real `HtmlElement`; tests use an
//! in-memory element. All calls happen on the UI thread.

use crate::geometry::{Point, Size};

pub trait Host {
    /// An event target (a DOM element in the web binding).
    type Target: Clone;

    /// True when the hosting element is the document root or body.
    fn is_document_root(&self) -> bool;
    /// Number of element children of the hosting element.
    fn child_count(&self) -> usize;

    fn scroll_offset(&self) -> Point;
    /// Browsers clamp the offset to the scrollable extent.
    fn set_scroll_offset(&mut self, offset: Point);
    /// Full scrollable content size (`scrollWidth`/`scrollHeight`).
    fn scroll_size(&self) -> Size;
    /// Visible size (`clientWidth`/`clientHeight`).
    fn client_size(&self) -> Size;

    /// Pin the content child's transform origin to its top-left corner.
    fn set_content_transform_origin(&mut self);
    fn set_content_scale(&mut self, multiplier: f64);
    /// `Some(px)` sets an explicit height on the content child, `None` clears it.
    fn set_content_height(&mut self, height: Option<f64>);

    /// Add or remove the "active" marker class on the hosting element.
    fn set_active_class(&mut self, active: bool);
    fn apply_hardware_acceleration(&mut self);

    fn focus_viewport(&mut self);
    fn blur(&mut self, target: &Self::Target);
    /// Images get their native drag behavior suppressed on pointer-down.
    fn is_image(&self, target: &Self::Target) -> bool;

    /// Ask for one `Kinetic::on_frame` call on the next animation frame.
    fn request_frame(&mut self);
    /// Drop a pending frame request, if any.
    fn cancel_frame(&mut self);

    /// Scrollable extent per axis, never negative.
    fn scrollable_extent(&self) -> Size {
        let scroll = self.scroll_size();
        let client = self.client_size();
        Size::new(
            (scroll.width - client.width).max(0.0),
            (scroll.height - client.height).max(0.0),
        )
    }
}

//! In-memory element used by the unit tests.

use crate::engine::Kinetic;
use crate::geometry::{Point, Size};
use crate::host::Host;
use crate::tracker::PointerInput;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestTarget {
    Div,
    Img,
}

/// A scrollable element with one content child. Scroll size follows the
/// content scale and offsets clamp like a browser's.
#[derive(Debug)]
pub struct TestHost {
    pub client: Size,
    pub natural: Size,
    pub scale: f64,
    pub content_height: Option<f64>,
    pub scroll: Point,
    pub children: usize,
    pub document_root: bool,
    pub active_class: bool,
    pub class_removals: usize,
    pub origin_pinned: bool,
    pub hardware: bool,
    pub blurred: Vec<TestTarget>,
    pub focus_count: usize,
    pub pending_frame: bool,
    pub frames_requested: usize,
    pub frames_cancelled: usize,
}

impl TestHost {
    pub fn new(client_w: f64, client_h: f64, content_w: f64, content_h: f64) -> Self {
        Self {
            client: Size::new(client_w, client_h),
            natural: Size::new(content_w, content_h),
            scale: 1.0,
            content_height: None,
            scroll: Point::ZERO,
            children: 1,
            document_root: false,
            active_class: false,
            class_removals: 0,
            origin_pinned: false,
            hardware: false,
            blurred: Vec::new(),
            focus_count: 0,
            pending_frame: false,
            frames_requested: 0,
            frames_cancelled: 0,
        }
    }

    pub fn pointer(x: f64, y: f64, time_ms: f64, target: TestTarget) -> PointerInput<TestTarget> {
        PointerInput { client: Point::new(x, y), time_ms, target: Some(target) }
    }
}

impl Host for TestHost {
    type Target = TestTarget;

    fn is_document_root(&self) -> bool {
        self.document_root
    }

    fn child_count(&self) -> usize {
        self.children
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn set_scroll_offset(&mut self, offset: Point) {
        let extent = self.scrollable_extent();
        self.scroll = Point::new(
            offset.x.clamp(0.0, extent.width),
            offset.y.clamp(0.0, extent.height),
        );
    }

    fn scroll_size(&self) -> Size {
        Size::new(
            self.client.width.max(self.natural.width * self.scale),
            self.client.height.max(self.natural.height * self.scale),
        )
    }

    fn client_size(&self) -> Size {
        self.client
    }

    fn set_content_transform_origin(&mut self) {
        self.origin_pinned = true;
    }

    fn set_content_scale(&mut self, multiplier: f64) {
        self.scale = multiplier;
    }

    fn set_content_height(&mut self, height: Option<f64>) {
        self.content_height = height;
    }

    fn set_active_class(&mut self, active: bool) {
        if self.active_class && !active {
            self.class_removals += 1;
        }
        self.active_class = active;
    }

    fn apply_hardware_acceleration(&mut self) {
        self.hardware = true;
    }

    fn focus_viewport(&mut self) {
        self.focus_count += 1;
    }

    fn blur(&mut self, target: &TestTarget) {
        self.blurred.push(*target);
    }

    fn is_image(&self, target: &TestTarget) -> bool {
        *target == TestTarget::Img
    }

    fn request_frame(&mut self) {
        self.pending_frame = true;
        self.frames_requested += 1;
    }

    fn cancel_frame(&mut self) {
        if self.pending_frame {
            self.pending_frame = false;
            self.frames_cancelled += 1;
        }
    }
}

/// Fire pending frames until none is requested. Returns how many ran.
pub fn run_frames(k: &mut Kinetic<TestHost>) -> usize {
    let mut frames = 0;
    while k.host().pending_frame {
        k.host_mut().pending_frame = false;
        k.on_frame();
        frames += 1;
        assert!(frames < 10_000, "deceleration never settled");
    }
    frames
}

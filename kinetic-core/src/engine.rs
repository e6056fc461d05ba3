//! The `Kinetic` facade: owns every piece of per-viewport state and the host.
//!
//! Input handling, the deceleration loop and zoom live in their own modules as
//! further `impl` blocks on the same type.

use crate::error::{KineticError, KineticResult};
use crate::events::{SubscriptionId, ZoomChange, ZoomListeners};
use crate::geometry::{Anchor, Point, Size};
use crate::host::Host;
use crate::motion::MotionState;
use crate::settings::{PartialSettings, Settings};
use crate::tracker::{DragState, PinchState};
use crate::zoom::ZoomState;

pub(crate) type TargetFilter<T> = Box<dyn Fn(&T) -> bool>;
pub(crate) type ThresholdHook<T> = Box<dyn Fn(&T) -> f64>;

pub struct Kinetic<H: Host> {
    pub(crate) host: H,
    pub(crate) settings: Settings,
    pub(crate) active: bool,
    pub(crate) drag: DragState<H::Target>,
    pub(crate) pinch: PinchState,
    pub(crate) motion: MotionState,
    pub(crate) zoom: ZoomState,
    pub(crate) listeners: ZoomListeners,
    pub(crate) target_filter: Option<TargetFilter<H::Target>>,
    pub(crate) threshold_hook: Option<ThresholdHook<H::Target>>,
}

impl<H: Host> Kinetic<H> {
    /// Validate the hosting element and take ownership of it.
    ///
    /// The element must not be the document root and must have exactly one
    /// child, which receives the scale transform.
    pub fn new(mut host: H, settings: PartialSettings) -> KineticResult<Self> {
        if host.is_document_root() {
            return Err(KineticError::RootElement);
        }
        let found = host.child_count();
        if found != 1 {
            return Err(KineticError::ChildCount { found });
        }

        let settings = settings.resolve();
        host.set_content_transform_origin();
        host.set_active_class(true);
        if settings.trigger_hardware {
            host.apply_hardware_acceleration();
        }
        let natural = host.scroll_size();
        log::debug!(
            "kinetic viewport ready, natural content {}x{}",
            natural.width,
            natural.height
        );

        Ok(Self {
            host,
            motion: MotionState::new(settings.decelerate),
            settings,
            active: true,
            drag: DragState::default(),
            pinch: PinchState::default(),
            zoom: ZoomState::new(natural),
            listeners: ZoomListeners::new(),
            target_filter: None,
            threshold_hook: None,
        })
    }

    /// True while listeners are attached.
    pub fn active(&self) -> bool {
        self.active
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn reinitialize(&mut self) -> KineticResult<()> {
        if self.active {
            return Err(KineticError::AlreadyActive);
        }
        self.host.set_active_class(true);
        self.active = true;
        log::debug!("kinetic viewport reinitialized");
        Ok(())
    }

    /// Tear down: drop pending frames, subscribers and drag state.
    ///
    /// Zoom step and natural dimensions survive so `reinitialize` resumes
    /// with the content as it is rendered.
    pub fn destroy(&mut self) -> KineticResult<()> {
        if !self.active {
            return Err(KineticError::AlreadyDestroyed);
        }
        self.host.cancel_frame();
        self.host.set_active_class(false);
        self.listeners.clear();
        self.drag = DragState::default();
        self.pinch = PinchState::default();
        self.motion.velocity = Point::ZERO;
        self.motion.moving = false;
        self.active = false;
        log::debug!("kinetic viewport destroyed");
        Ok(())
    }

    /// Override the unscaled content size used by zoom math, e.g. once an
    /// image has decoded.
    pub fn set_natural_dimensions(&mut self, width: f64, height: f64) {
        self.zoom.natural = Size::new(width, height);
    }

    pub fn natural_dimensions(&self) -> Size {
        self.zoom.natural
    }

    pub fn center(&mut self) {
        self.scroll_to(Anchor::Percent(50.0), Anchor::Percent(50.0));
    }

    /// Stop any motion and jump to the given position. Percentages resolve
    /// against the scrollable extent (0 when the axis cannot scroll).
    pub fn scroll_to(&mut self, x: Anchor, y: Anchor) {
        self.stop();
        let extent = self.host.scrollable_extent();
        let target = Point::new(scroll_position(x, extent.width), scroll_position(y, extent.height));
        self.host.set_scroll_offset(target);
    }

    pub fn scroll_offset(&self) -> Point {
        self.host.scroll_offset()
    }

    pub fn on_zoom(&mut self, listener: impl FnMut(ZoomChange) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn off_zoom(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Only targets passing `filter` start drags or have their selection and
    /// native drag suppressed.
    pub fn set_target_filter(&mut self, filter: impl Fn(&H::Target) -> bool + 'static) {
        self.target_filter = Some(Box::new(filter));
    }

    /// Per-target drag threshold, replacing the configured one.
    pub fn set_threshold_hook(&mut self, hook: impl Fn(&H::Target) -> f64 + 'static) {
        self.threshold_hook = Some(Box::new(hook));
    }
}

fn scroll_position(value: Anchor, extent: f64) -> f64 {
    match value {
        Anchor::Pixels(px) => px,
        Anchor::Percent(_) if extent <= 0.0 => 0.0,
        Anchor::Percent(_) => value.resolve(extent),
    }
}

impl<H: Host + std::fmt::Debug> std::fmt::Debug for Kinetic<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kinetic")
            .field("host", &self.host)
            .field("active", &self.active)
            .field("motion", &self.motion)
            .field("zoom", &self.zoom)
            .finish_non_exhaustive()
    }
}

//! Velocity and the per-frame deceleration loop.

use crate::engine::Kinetic;
use crate::geometry::{decelerate_velocity, Point};
use crate::host::Host;
use crate::settings::PartialSettings;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct MotionState {
    /// Pixels per frame, each axis capped at `max_velocity` when sampled.
    pub velocity: Point,
    /// When set, each frame multiplies velocity by `slowdown`.
    pub decelerate: bool,
    /// A frame callback is pending. At most one per viewport.
    pub moving: bool,
}

impl MotionState {
    pub fn new(decelerate: bool) -> Self {
        Self { decelerate, ..Default::default() }
    }
}

impl<H: Host> Kinetic<H> {
    /// Replace the configuration and keep moving at the current velocity
    /// without friction until [`end`](Self::end) or [`stop`](Self::stop).
    pub fn start(&mut self, settings: PartialSettings) {
        self.settings = settings.resolve();
        self.motion.decelerate = false;
        self.step();
    }

    /// Zero velocity now. Any pending frame finds nothing to do.
    pub fn stop(&mut self) {
        self.motion.velocity = Point::ZERO;
        self.motion.decelerate = true;
    }

    /// Engage friction but keep the current velocity, letting it decay.
    pub fn end(&mut self) {
        self.motion.decelerate = true;
    }

    /// Animation frame callback. The host calls this once per
    /// [`Host::request_frame`].
    pub fn on_frame(&mut self) {
        self.motion.moving = false;
        if !self.active {
            log::trace!("frame fired after destroy, ignoring");
            return;
        }
        if self.drag.pointer_down {
            log::trace!("frame fired during a drag, ignoring");
            return;
        }
        self.step();
    }

    pub fn velocity(&self) -> Point {
        self.motion.velocity
    }

    pub fn is_decelerating(&self) -> bool {
        self.motion.decelerate
    }

    /// True while a frame callback is scheduled.
    pub fn is_moving(&self) -> bool {
        self.motion.moving
    }

    /// Apply velocity to the scroll offset, decay it, and schedule the next
    /// frame while anything is still moving.
    pub(crate) fn step(&mut self) {
        let extent = self.host.scrollable_extent();
        let mut offset = self.host.scroll_offset();
        let slowdown = self.settings.slowdown;
        let decelerate = self.motion.decelerate;
        let velocity = &mut self.motion.velocity;

        if self.settings.x && extent.width > 0.0 {
            offset.x += velocity.x;
            if velocity.x.abs() > 0.0 && decelerate {
                velocity.x = decelerate_velocity(velocity.x, slowdown);
            }
        } else {
            velocity.x = 0.0;
        }

        if self.settings.y && extent.height > 0.0 {
            offset.y += velocity.y;
            if velocity.y.abs() > 0.0 && decelerate {
                velocity.y = decelerate_velocity(velocity.y, slowdown);
            }
        } else {
            velocity.y = 0.0;
        }

        self.host.set_scroll_offset(offset);

        if self.motion.velocity.is_zero() {
            self.stop();
        } else if !self.motion.moving {
            self.motion.moving = true;
            log::trace!(
                "next frame, velocity ({:.2}, {:.2})",
                self.motion.velocity.x,
                self.motion.velocity.y
            );
            self.host.request_frame();
        }
    }
}

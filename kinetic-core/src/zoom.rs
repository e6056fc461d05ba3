//! Focal-point preserving zoom.
//!
//! The content child is scaled with a CSS transform around its top-left
//! corner. Zooming maps the anchor through the current scale back to content
//! space, forward through the target scale, and scrolls so the anchor lands
//! on the same screen point.

use crate::engine::Kinetic;
use crate::events::ZoomChange;
use crate::geometry::{zoom_multiplier, zoom_step, Anchor, Point, Size};
use crate::host::Host;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ZoomState {
    /// 0 is natural size.
    pub step: i32,
    /// Unscaled content size.
    pub natural: Size,
}

impl ZoomState {
    pub fn new(natural: Size) -> Self {
        Self { step: 0, natural }
    }
}

/// A requested zoom level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomTarget {
    Step(i32),
    /// Smallest scale at which the content covers the viewport on at least
    /// one axis.
    Fit,
}

impl From<i32> for ZoomTarget {
    fn from(step: i32) -> Self {
        ZoomTarget::Step(step)
    }
}

impl std::str::FromStr for ZoomTarget {
    type Err = std::num::ParseIntError;

    /// `"fit"` or an integer step.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("fit") {
            Ok(ZoomTarget::Fit)
        } else {
            s.parse().map(ZoomTarget::Step)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoomOutcome {
    pub applied: bool,
    /// Realized step when applied, otherwise the unchanged current step.
    pub step: i32,
}

impl<H: Host> Kinetic<H> {
    /// One step in. Returns false when rejected.
    pub fn zoom_in(&mut self, x: Option<Anchor>, y: Option<Anchor>) -> bool {
        self.zoom_by(1, x, y)
    }

    /// One step out. Returns false when the content would no longer cover
    /// the viewport.
    pub fn zoom_out(&mut self, x: Option<Anchor>, y: Option<Anchor>) -> bool {
        self.zoom_by(-1, x, y)
    }

    /// Jump to `target`. The current step always follows the outcome.
    pub fn set_zoom(&mut self, target: ZoomTarget, x: Option<Anchor>, y: Option<Anchor>) -> ZoomOutcome {
        let outcome = self.apply_zoom(target, self.zoom.step, x, y);
        self.zoom.step = outcome.step;
        outcome
    }

    pub fn zoom_step(&self) -> i32 {
        self.zoom.step
    }

    /// Multiplier of the current step.
    pub fn zoom_multiplier(&self) -> f64 {
        zoom_multiplier(self.zoom.step)
    }

    fn zoom_by(&mut self, delta: i32, x: Option<Anchor>, y: Option<Anchor>) -> bool {
        let current = self.zoom.step;
        let outcome = self.apply_zoom(ZoomTarget::Step(current.saturating_add(delta)), current, x, y);
        if outcome.applied {
            self.zoom.step = outcome.step;
        }
        outcome.applied
    }

    fn target_multiplier(&self, target: ZoomTarget) -> Option<f64> {
        match target {
            ZoomTarget::Step(step) => Some(zoom_multiplier(step)),
            ZoomTarget::Fit => {
                let client = self.host.client_size();
                let natural = self.zoom.natural;
                if natural.width <= 0.0 || natural.height <= 0.0 {
                    return None;
                }
                let fit = (client.width / natural.width).max(client.height / natural.height);
                (fit.is_finite() && fit > 0.0).then_some(fit)
            }
        }
    }

    pub(crate) fn apply_zoom(
        &mut self,
        target: ZoomTarget,
        current_step: i32,
        x: Option<Anchor>,
        y: Option<Anchor>,
    ) -> ZoomOutcome {
        let rejected = ZoomOutcome { applied: false, step: current_step };

        if let ZoomTarget::Step(step) = target {
            if step > self.settings.max_zoom_step {
                log::debug!("zoom step {step} above maximum {}", self.settings.max_zoom_step);
                return rejected;
            }
        }
        let Some(target_m) = self.target_multiplier(target) else {
            log::warn!("cannot fit, viewport or natural content size is empty");
            return rejected;
        };

        let client = self.host.client_size();
        let anchor = Point::new(
            x.map_or(client.width / 2.0, |a| a.resolve(client.width)),
            y.map_or(client.height / 2.0, |a| a.resolve(client.height)),
        );

        let natural = self.zoom.natural;
        let scaled = Size::new(
            (natural.width * target_m).round(),
            (natural.height * target_m).round(),
        );
        if target != ZoomTarget::Fit && (scaled.width < client.width || scaled.height < client.height) {
            log::trace!("zoom rejected, {}x{} would not cover the viewport", scaled.width, scaled.height);
            return rejected;
        }

        let current_m = zoom_multiplier(current_step);
        let content = Point::new(
            (anchor.x + self.host.scroll_offset().x) / current_m,
            (anchor.y + self.host.scroll_offset().y) / current_m,
        );
        let scroll = Point::new(content.x * target_m - anchor.x, content.y * target_m - anchor.y);

        if target_m < 1.0 {
            self.host.set_content_height(Some(natural.height * target_m));
        } else {
            self.host.set_content_height(None);
        }
        self.host.set_content_scale(target_m);
        self.host.set_scroll_offset(scroll);

        let step = zoom_step(target_m);
        self.listeners.emit(ZoomChange { multiplier: target_m, step });
        ZoomOutcome { applied: true, step }
    }
}

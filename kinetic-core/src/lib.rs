//! Kinetic panning and focal-point zoom for a scrollable viewport.
//!
//! The engine is DOM-free: everything it needs from the hosting element goes
//! through the [`Host`] trait, and input arrives as plain structs. The
//! `kinetic-viewport` crate wires it to `web-sys`.

pub mod engine;
pub mod error;
pub mod events;
pub mod geometry;
pub mod host;
mod motion;
pub mod settings;
pub mod tracker;
pub mod zoom;

#[cfg(test)]
pub(crate) mod testing;

pub use engine::Kinetic;
pub use error::{KineticError, KineticResult};
pub use events::{SubscriptionId, ZoomChange, ZoomListeners};
pub use geometry::{Anchor, OffsetFrame, Point, Size};
pub use host::Host;
pub use settings::{DirectionClasses, PartialSettings, Settings};
pub use tracker::{EventResponse, PointerInput, TouchInput, TouchPoint, WheelInput};
pub use zoom::{ZoomOutcome, ZoomTarget};

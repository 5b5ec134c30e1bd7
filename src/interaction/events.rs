// SPDX-License-Identifier: MPL-2.0
//! Input vocabulary consumed by the interaction controller.
//!
//! The application shell translates raw windowing events (mouse buttons,
//! cursor movement, keyboard shortcuts) and the periodic tick into these
//! events before handing them to [`InteractionController::handle`].
//!
//! [`InteractionController::handle`]: super::InteractionController::handle

use iced::Point;

use crate::camera::CameraOrbit;

/// Identity of a pointer within one input stream.
///
/// Mouse input always reports [`PointerId::MOUSE`]; touch input reports the
/// platform finger id. The controller tracks exactly one pointer per gesture
/// and ignores events from any other id while a gesture is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

impl PointerId {
    /// The single mouse pointer.
    pub const MOUSE: PointerId = PointerId(0);
}

/// One step of the unified input stream.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionEvent {
    /// A pointer went down over the card surface.
    PointerPressed { pointer: PointerId, position: Point },
    /// A tracked pointer moved.
    PointerMoved { pointer: PointerId, position: Point },
    /// A tracked pointer lifted.
    PointerReleased { pointer: PointerId },
    /// The platform canceled the pointer (window lost the stream).
    /// Treated exactly like a release.
    PointerCanceled { pointer: PointerId },
    /// The viewer surface reported a new camera orientation.
    OrbitChanged { orbit: CameraOrbit },
    /// The user asked to leave the video early (skip control or Escape).
    SkipRequested,
    /// Periodic clock tick. The accompanying `Instant` is passed alongside
    /// the event to [`handle`](super::InteractionController::handle).
    Tick,
}

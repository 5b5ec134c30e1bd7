// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for PNG icons.
//!
//! PNG format ensures consistent cross-platform rendering (no SVG
//! interpretation differences on Windows). Icons are embedded at compile
//! time via `include_bytes!` and handles are cached using `OnceLock`.
//!
//! Severity glyphs carry their own color; the neutral glyphs are white and
//! sit on tinted or dark surfaces.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_notification`).

use iced::widget::image::{Handle, Image};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached handle. The handle is created
/// once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Image<Handle> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_bytes(DATA));
            Image::new(handle.clone())
        }
    };
}

define_icon!(checkmark, "checkmark.png", "Checkmark icon: tick shape.");
define_icon!(info, "info.png", "Info icon: letter 'i' in a circle.");
define_icon!(warning, "warning.png", "Warning icon: exclamation triangle.");
define_icon!(cross, "cross.png", "Cross icon: X mark shape.");
define_icon!(share, "share.png", "Share icon: arrow leaving a tray.");
define_icon!(skip, "skip.png", "Skip icon: double chevron pointing right.");

/// Returns the icon constrained to a square of `size` logical pixels.
pub fn sized(icon: Image<Handle>, size: f32) -> Image<Handle> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

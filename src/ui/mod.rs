// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down,
//! messages up" pattern.
//!
//! # Panes
//!
//! - [`card_pane`] - Canvas stage that renders the card model, progress
//!   ring, and particles, and reports pointer gestures
//! - [`video_pane`] - Reveal video surface with playback bar and skip
//! - [`error_screen`] - Blocking panel for unrecoverable startup errors
//!
//! # Shared Infrastructure
//!
//! - [`card_art`] - Decoded image handles for the card surfaces
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Light/dark color schemes
//! - [`icons`] - Embedded PNG icon loading
//! - [`notifications`] - Toast notification system for user feedback

pub mod card_art;
pub mod card_pane;
pub mod design_tokens;
pub mod error_screen;
pub mod icons;
pub mod notifications;
pub mod theme;
pub mod video_pane;

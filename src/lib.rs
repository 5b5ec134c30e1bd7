// SPDX-License-Identifier: MPL-2.0
//! `holocard` is an interactive viewer for 3D collectible cards built with
//! the Iced GUI framework.
//!
//! A card is shown as an orbitable 3D model; holding the pointer on it for a
//! beat reveals a short video, cross-faded in and out. The crate centers on a
//! deterministic interaction core (gesture classification, reveal state
//! machine, camera control, timed feedback) that takes every timestamp as an
//! argument, with the Iced shell and the share pipeline layered on top.

#![doc(html_root_url = "https://docs.rs/holocard/0.2.0")]

pub mod app;
pub mod camera;
pub mod error;
pub mod feedback;
pub mod icon;
pub mod interaction;
pub mod playback;
pub mod resources;
pub mod share;
pub mod ui;
pub mod viewer;

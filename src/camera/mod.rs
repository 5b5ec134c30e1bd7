// SPDX-License-Identifier: MPL-2.0
//! Camera orientation control: idle auto-rotation and snap-to-face.

pub mod controller;
pub mod orbit;

pub use controller::{CameraController, CameraTuning};
pub use orbit::CameraOrbit;

// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Decodes the embedded branding PNG into an RGBA icon for the window
//! title bar. Falls back to `None` if decoding fails.

use iced::window::{icon, Icon};

/// Decode the embedded PNG icon to an RGBA buffer.
/// Returns `None` if decoding fails; the window then uses the platform default.
pub fn load_window_icon() -> Option<Icon> {
    // Embed the PNG so packaging does not need to locate assets on disk.
    const ICON_PNG: &[u8] = include_bytes!("../assets/branding/holocard-64.png");

    let decoded = match image_rs::load_from_memory(ICON_PNG) {
        Ok(image) => image.into_rgba8(),
        Err(err) => {
            log::warn!("window icon failed to decode: {}", err);
            return None;
        }
    };

    let (width, height) = decoded.dimensions();
    match icon::from_rgba(decoded.into_raw(), width, height) {
        Ok(icon) => Some(icon),
        Err(err) => {
            log::warn!("window icon rejected: {}", err);
            None
        }
    }
}

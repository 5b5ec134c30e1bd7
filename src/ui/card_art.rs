// SPDX-License-Identifier: MPL-2.0
//! Decoded card artwork, ready for the GPU.
//!
//! [`CardManifest::load`] only proves the asset files exist; this module
//! proves they decode. Loading happens once, off the update loop, and the
//! resulting handles are cheap to clone into the canvas every frame.
//!
//! [`CardManifest::load`]: crate::resources::CardManifest::load

use std::path::Path;

use iced::widget::image::Handle;

use crate::error::{Error, Result};
use crate::resources::CardManifest;

/// Image handles for every card surface, plus their pixel dimensions.
#[derive(Debug, Clone)]
pub struct CardArt {
    pub front: Handle,
    pub back: Handle,
    /// Poster frame presented while the reveal plays.
    pub poster: Handle,
    /// Front image dimensions, used to letterbox the card on the stage.
    pub front_size: (u32, u32),
}

impl CardArt {
    /// Decodes the three card surfaces named by `manifest`.
    ///
    /// Any undecodable image is an error; the caller shows the blocking
    /// error pane rather than an empty stage.
    pub fn load(manifest: &CardManifest) -> Result<Self> {
        let (front, front_size) = decode(&manifest.front_image)?;
        let (back, _) = decode(&manifest.back_image)?;
        let (poster, _) = decode(&manifest.reveal_poster)?;
        log::info!(
            "card art decoded, front is {}x{}",
            front_size.0,
            front_size.1
        );
        Ok(Self {
            front,
            back,
            poster,
            front_size,
        })
    }
}

fn decode(path: &Path) -> Result<(Handle, (u32, u32))> {
    let bytes = std::fs::read(path)?;
    let decoded = image_rs::load_from_memory(&bytes)
        .map_err(|err| Error::Image(format!("{}: {}", path.display(), err)))?;
    let size = (decoded.width(), decoded.height());
    // Hand iced the original bytes; it decodes lazily on the render thread.
    Ok((Handle::from_bytes(bytes), size))
}

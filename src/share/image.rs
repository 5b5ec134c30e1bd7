// SPDX-License-Identifier: MPL-2.0
//! Share image selection and placeholder synthesis.

use std::io::Cursor;

use crate::app::config::ShareConfig;
use crate::error::{Error, Result};
use crate::resources::CardManifest;

/// Social card aspect, 1.91:1.
const PLACEHOLDER_WIDTH: u32 = 800;
const PLACEHOLDER_HEIGHT: u32 = 418;

/// Resolves the PNG bytes to share for `card`.
///
/// A pre-rendered share image from the card bundle wins. Without one, a
/// gradient placeholder is synthesized, unless the configuration forbids
/// placeholders, which turns the situation into an error the pipeline
/// reports as a failed share.
pub fn share_image_bytes(card: &CardManifest, share: &ShareConfig) -> Result<Vec<u8>> {
    if let Some(path) = &card.share_image {
        let bytes = std::fs::read(path)?;
        // Re-validate: existence was checked at load, content was not
        image_rs::load_from_memory(&bytes)
            .map_err(|err| Error::Image(format!("share image unreadable: {}", err)))?;
        return Ok(bytes);
    }

    if !share.allow_placeholder() {
        return Err(Error::Image(
            "card ships no share image and placeholders are disabled".into(),
        ));
    }

    log::debug!("synthesizing placeholder share image");
    synthesize_placeholder()
}

/// Renders the fallback share card: a diagonal violet-to-teal gradient at
/// the social card aspect.
fn synthesize_placeholder() -> Result<Vec<u8>> {
    let buffer = image_rs::ImageBuffer::from_fn(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, |x, y| {
        let t = (x + y) as f32 / (PLACEHOLDER_WIDTH + PLACEHOLDER_HEIGHT) as f32;
        let r = (48.0 + 32.0 * (1.0 - t)) as u8;
        let g = (24.0 + 140.0 * t) as u8;
        let b = (96.0 + 64.0 * t) as u8;
        image_rs::Rgba([r, g, b, 255])
    });

    let mut bytes = Vec::new();
    image_rs::DynamicImage::ImageRgba8(buffer)
        .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn card_with_share_image(share_image: Option<PathBuf>) -> CardManifest {
        CardManifest {
            title: "Aurora Drake".into(),
            handle: "@nightfoil".into(),
            front_image: PathBuf::from("front.png"),
            back_image: PathBuf::from("back.png"),
            reveal_poster: PathBuf::from("reveal.png"),
            reveal_duration_secs: 8.0,
            share_image,
        }
    }

    fn tiny_png() -> Vec<u8> {
        let buffer = image_rs::ImageBuffer::from_pixel(2, 2, image_rs::Rgba([255u8, 0, 0, 255]));
        let mut bytes = Vec::new();
        image_rs::DynamicImage::ImageRgba8(buffer)
            .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn prerendered_share_image_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("share.png");
        let png = tiny_png();
        std::fs::write(&path, &png).unwrap();

        let bytes =
            share_image_bytes(&card_with_share_image(Some(path)), &ShareConfig::default())
                .unwrap();
        assert_eq!(bytes, png);
    }

    #[test]
    fn corrupt_prerendered_image_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("share.png");
        std::fs::write(&path, b"not a png").unwrap();

        let err = share_image_bytes(&card_with_share_image(Some(path)), &ShareConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn placeholder_is_a_decodable_png_at_social_aspect() {
        let bytes =
            share_image_bytes(&card_with_share_image(None), &ShareConfig::default()).unwrap();

        let decoded = image_rs::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), PLACEHOLDER_WIDTH);
        assert_eq!(decoded.height(), PLACEHOLDER_HEIGHT);
    }

    #[test]
    fn disabled_placeholder_turns_into_an_error() {
        let share = ShareConfig {
            allow_placeholder: Some(false),
            ..ShareConfig::default()
        };

        let err = share_image_bytes(&card_with_share_image(None), &share).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }
}

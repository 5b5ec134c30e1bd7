// SPDX-License-Identifier: MPL-2.0
//! Card bundle loading and validation.
//!
//! A card ships as a directory containing a `card.toml` manifest next to its
//! image assets. Everything is validated up front: a card that loads is a
//! card whose required assets all exist, so the rest of the application
//! never re-checks paths.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::app::config;
use crate::error::{ResourceError, Result};

/// Manifest file expected inside a card directory.
pub const MANIFEST_FILE: &str = "card.toml";

/// On-disk manifest shape. Paths are relative to the card directory.
#[derive(Debug, Deserialize)]
struct RawManifest {
    title: String,
    handle: String,
    front_image: String,
    back_image: String,
    reveal_poster: String,
    #[serde(default)]
    reveal_duration_secs: Option<f64>,
    #[serde(default)]
    share_image: Option<String>,
}

/// A fully validated card: metadata plus absolute asset paths that are
/// known to exist at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct CardManifest {
    /// Display title, also used in the share caption.
    pub title: String,
    /// Creator handle shown under the title.
    pub handle: String,
    pub front_image: PathBuf,
    pub back_image: PathBuf,
    /// Poster frame presented while the reveal plays.
    pub reveal_poster: PathBuf,
    /// Reveal length in seconds. Falls back to the built-in default when
    /// the manifest does not specify one.
    pub reveal_duration_secs: f64,
    /// Pre-rendered share image. When absent the share pipeline synthesizes
    /// a placeholder.
    pub share_image: Option<PathBuf>,
}

impl CardManifest {
    /// Loads and validates the card bundle at `card_dir`.
    ///
    /// Fails when the directory or manifest is missing, the manifest does
    /// not parse, the reveal duration is not positive, or any referenced
    /// image does not exist. All of these are startup-fatal: the viewer
    /// opens with a card or it explains why it could not.
    pub fn load(card_dir: &Path) -> Result<Self> {
        if !card_dir.is_dir() {
            return Err(ResourceError::DirectoryNotFound(card_dir.to_path_buf()).into());
        }

        let manifest_path = card_dir.join(MANIFEST_FILE);
        let raw_text = std::fs::read_to_string(&manifest_path)
            .map_err(|err| ResourceError::ManifestUnreadable(err.to_string()))?;
        let raw: RawManifest = toml::from_str(&raw_text)
            .map_err(|err| ResourceError::ManifestInvalid(err.to_string()))?;

        let reveal_duration_secs = match raw.reveal_duration_secs {
            Some(secs) if secs > 0.0 => secs,
            Some(secs) => {
                return Err(ResourceError::ManifestInvalid(format!(
                    "reveal_duration_secs must be positive, got {}",
                    secs
                ))
                .into());
            }
            None => config::DEFAULT_REVEAL_DURATION_SECS,
        };
        if raw.title.trim().is_empty() {
            return Err(ResourceError::ManifestInvalid("title must not be empty".into()).into());
        }

        let manifest = Self {
            title: raw.title,
            handle: raw.handle,
            front_image: require_asset(card_dir, &raw.front_image)?,
            back_image: require_asset(card_dir, &raw.back_image)?,
            reveal_poster: require_asset(card_dir, &raw.reveal_poster)?,
            reveal_duration_secs,
            share_image: raw
                .share_image
                .as_deref()
                .map(|name| require_asset(card_dir, name))
                .transpose()?,
        };

        log::info!(
            "card '{}' loaded from {} ({}s reveal)",
            manifest.title,
            card_dir.display(),
            manifest.reveal_duration_secs
        );
        Ok(manifest)
    }
}

/// Resolves `name` against the card directory and insists the file exists.
fn require_asset(card_dir: &Path, name: &str) -> Result<PathBuf> {
    let path = card_dir.join(name);
    if path.is_file() {
        Ok(path)
    } else {
        Err(ResourceError::Missing(path).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;

    const MANIFEST: &str = r#"
title = "Aurora Drake"
handle = "@nightfoil"
front_image = "front.png"
back_image = "back.png"
reveal_poster = "reveal.png"
reveal_duration_secs = 6.5
"#;

    fn write_card(dir: &Path, manifest: &str, assets: &[&str]) {
        fs::write(dir.join(MANIFEST_FILE), manifest).unwrap();
        for asset in assets {
            fs::write(dir.join(asset), b"png-bytes").unwrap();
        }
    }

    #[test]
    fn loads_a_complete_card() {
        let dir = tempfile::tempdir().unwrap();
        write_card(dir.path(), MANIFEST, &["front.png", "back.png", "reveal.png"]);

        let card = CardManifest::load(dir.path()).unwrap();

        assert_eq!(card.title, "Aurora Drake");
        assert_eq!(card.handle, "@nightfoil");
        assert_eq!(card.reveal_duration_secs, 6.5);
        assert_eq!(card.front_image, dir.path().join("front.png"));
        assert_eq!(card.share_image, None);
    }

    #[test]
    fn missing_directory_is_reported_as_such() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("no-such-card");

        let err = CardManifest::load(&gone).unwrap_err();
        assert!(matches!(
            err,
            Error::Resource(ResourceError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn missing_manifest_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();

        let err = CardManifest::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            Error::Resource(ResourceError::ManifestUnreadable(_))
        ));
    }

    #[test]
    fn malformed_manifest_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        write_card(dir.path(), "title = [broken", &[]);

        let err = CardManifest::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            Error::Resource(ResourceError::ManifestInvalid(_))
        ));
    }

    #[test]
    fn missing_required_image_fails_with_its_path() {
        let dir = tempfile::tempdir().unwrap();
        write_card(dir.path(), MANIFEST, &["front.png", "back.png"]);

        let err = CardManifest::load(dir.path()).unwrap_err();
        match err {
            Error::Resource(ResourceError::Missing(path)) => {
                assert!(path.ends_with("reveal.png"));
            }
            other => panic!("expected missing resource, got {:?}", other),
        }
    }

    #[test]
    fn omitted_duration_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = MANIFEST.replace("reveal_duration_secs = 6.5", "");
        write_card(dir.path(), &manifest, &["front.png", "back.png", "reveal.png"]);

        let card = CardManifest::load(dir.path()).unwrap();
        assert_eq!(
            card.reveal_duration_secs,
            config::DEFAULT_REVEAL_DURATION_SECS
        );
    }

    #[test]
    fn non_positive_duration_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = MANIFEST.replace("6.5", "0.0");
        write_card(dir.path(), &manifest, &["front.png", "back.png", "reveal.png"]);

        let err = CardManifest::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            Error::Resource(ResourceError::ManifestInvalid(_))
        ));
    }

    #[test]
    fn named_share_image_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = format!("{}share_image = \"share.png\"\n", MANIFEST);
        write_card(dir.path(), &manifest, &["front.png", "back.png", "reveal.png"]);

        let err = CardManifest::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Resource(ResourceError::Missing(_))));

        fs::write(dir.path().join("share.png"), b"png-bytes").unwrap();
        let card = CardManifest::load(dir.path()).unwrap();
        assert_eq!(card.share_image, Some(dir.path().join("share.png")));
    }

    #[test]
    fn empty_title_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = MANIFEST.replace("Aurora Drake", "  ");
        write_card(dir.path(), &manifest, &["front.png", "back.png", "reveal.png"]);

        let err = CardManifest::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            Error::Resource(ResourceError::ManifestInvalid(_))
        ));
    }
}

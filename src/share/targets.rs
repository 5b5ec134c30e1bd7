// SPDX-License-Identifier: MPL-2.0
//! Delivery targets for the share pipeline.

use std::path::PathBuf;

use crate::app::paths;

use super::{ShareMethod, ShareRequest};

/// Why a target did not deliver.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetError {
    /// The target cannot work in this environment. The pipeline moves on.
    Unsupported,
    /// The user explicitly dismissed the target. The pipeline stops.
    Cancelled,
    /// The target tried and failed. The pipeline moves on.
    Failed(String),
}

/// One way of getting the payload out of the application.
pub trait ShareTarget {
    fn method(&self) -> ShareMethod;

    /// Attempts delivery. `Ok` carries an optional detail string for the
    /// success notification; the download target reports the written path.
    fn deliver(&mut self, request: &ShareRequest) -> Result<Option<String>, TargetError>;
}

/// Operating system share sheet. No desktop platform in this stack exposes
/// one, so this always falls through to the next target.
#[derive(Debug, Default)]
pub struct NativeShare;

impl ShareTarget for NativeShare {
    fn method(&self) -> ShareMethod {
        ShareMethod::Native
    }

    fn deliver(&mut self, _request: &ShareRequest) -> Result<Option<String>, TargetError> {
        Err(TargetError::Unsupported)
    }
}

/// System clipboard. The payload is an image plus a caption, and there is
/// no portable way to put both on the clipboard from this stack, so this
/// target declines rather than deliver half of the payload.
#[derive(Debug, Default)]
pub struct ClipboardShare;

impl ShareTarget for ClipboardShare {
    fn method(&self) -> ShareMethod {
        ShareMethod::Clipboard
    }

    fn deliver(&mut self, _request: &ShareRequest) -> Result<Option<String>, TargetError> {
        Err(TargetError::Unsupported)
    }
}

/// Writes the share image as a timestamped PNG into a directory.
#[derive(Debug)]
pub struct DownloadShare {
    directory: PathBuf,
}

impl DownloadShare {
    #[must_use]
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    /// Targets the user's download directory.
    #[must_use]
    pub fn into_downloads() -> Self {
        Self::new(paths::get_downloads_dir())
    }
}

impl ShareTarget for DownloadShare {
    fn method(&self) -> ShareMethod {
        ShareMethod::Download
    }

    fn deliver(&mut self, request: &ShareRequest) -> Result<Option<String>, TargetError> {
        let filename = format!(
            "holocard-{}.png",
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        let path = self.directory.join(filename);

        std::fs::create_dir_all(&self.directory)
            .and_then(|_| std::fs::write(&path, &request.image_png))
            .map_err(|err| TargetError::Failed(err.to_string()))?;

        Ok(Some(path.display().to_string()))
    }
}

/// The desktop delivery chain, in priority order.
pub fn desktop_targets() -> Vec<Box<dyn ShareTarget + Send>> {
    vec![
        Box::new(NativeShare),
        Box::new(ClipboardShare),
        Box::new(DownloadShare::into_downloads()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ShareRequest {
        ShareRequest {
            text: "caption".into(),
            image_png: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    #[test]
    fn native_and_clipboard_are_unsupported_on_desktop() {
        assert_eq!(
            NativeShare.deliver(&request()),
            Err(TargetError::Unsupported)
        );
        assert_eq!(
            ClipboardShare.deliver(&request()),
            Err(TargetError::Unsupported)
        );
    }

    #[test]
    fn download_writes_the_png_and_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut target = DownloadShare::new(dir.path().to_path_buf());

        let detail = target.deliver(&request()).unwrap();

        let reported = detail.expect("download reports its path");
        assert!(reported.contains("holocard-"));
        assert!(reported.ends_with(".png"));

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        let written = entries[0].as_ref().unwrap().path();
        assert_eq!(std::fs::read(written).unwrap(), request().image_png);
    }

    #[test]
    fn download_creates_the_directory_if_needed() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("downloads");
        let mut target = DownloadShare::new(nested.clone());

        target.deliver(&request()).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn download_failure_is_reported_not_panicked() {
        // A file where the directory should be
        let dir = tempfile::tempdir().unwrap();
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, b"file").unwrap();
        let mut target = DownloadShare::new(blocked);

        assert!(matches!(
            target.deliver(&request()),
            Err(TargetError::Failed(_))
        ));
    }

    #[test]
    fn desktop_chain_is_native_clipboard_download() {
        let methods: Vec<_> = desktop_targets().iter().map(|t| t.method()).collect();
        assert_eq!(
            methods,
            vec![
                ShareMethod::Native,
                ShareMethod::Clipboard,
                ShareMethod::Download
            ]
        );
    }
}

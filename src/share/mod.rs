// SPDX-License-Identifier: MPL-2.0
//! Share pipeline: caption, image, and delivery.
//!
//! Sharing walks a fixed priority list of delivery targets: the platform
//! share sheet first, then the clipboard, then a plain file download. The
//! first target that accepts the payload wins; unsupported or failing
//! targets are logged and skipped. A user canceling the platform sheet ends
//! the whole pipeline quietly, with no fallback and no error surfaced.
//!
//! The pipeline runs as a one-shot async task started by the application
//! shell. It re-validates nothing itself; the shell only offers sharing
//! while the model surface is showing.

pub mod image;
pub mod targets;
pub mod text;

pub use targets::{desktop_targets, ShareTarget, TargetError};

/// Fully prepared share payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareRequest {
    /// Localized caption, already resolved for the configured platform.
    pub text: String,
    /// Encoded PNG bytes of the share image.
    pub image_png: Vec<u8>,
}

/// How the payload ended up being delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareMethod {
    /// The operating system share sheet.
    Native,
    /// The system clipboard.
    Clipboard,
    /// A file written to the user's download directory.
    Download,
}

/// Terminal result of one share attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ShareOutcome {
    Delivered {
        method: ShareMethod,
        /// Extra context for the success notification; the download target
        /// reports the written file path here.
        detail: Option<String>,
    },
    /// The user dismissed the share sheet. Not an error; nothing is shown.
    Cancelled,
    /// Every target declined or failed.
    Failed { detail: String },
}

/// Tries each target in order until one delivers, the user cancels, or the
/// list is exhausted.
pub async fn run_share(
    request: ShareRequest,
    mut targets: Vec<Box<dyn ShareTarget + Send>>,
) -> ShareOutcome {
    for target in targets.iter_mut() {
        let method = target.method();
        match target.deliver(&request) {
            Ok(detail) => {
                log::info!("share delivered via {:?}", method);
                return ShareOutcome::Delivered { method, detail };
            }
            Err(TargetError::Unsupported) => {
                log::debug!("share target {:?} unsupported here, trying next", method);
            }
            Err(TargetError::Cancelled) => {
                log::info!("share canceled by the user");
                return ShareOutcome::Cancelled;
            }
            Err(TargetError::Failed(detail)) => {
                log::warn!("share target {:?} failed: {}", method, detail);
            }
        }
    }

    log::warn!("share failed, every target declined");
    ShareOutcome::Failed {
        detail: "every share target declined".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    enum Script {
        Deliver(Option<String>),
        Unsupported,
        Cancel,
        Fail,
    }

    struct ScriptedTarget {
        method: ShareMethod,
        script: Script,
        calls: Arc<AtomicUsize>,
    }

    impl ScriptedTarget {
        fn boxed(method: ShareMethod, script: Script) -> (Box<dyn ShareTarget + Send>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let target = Box::new(Self {
                method,
                script,
                calls: Arc::clone(&calls),
            });
            (target, calls)
        }
    }

    impl ShareTarget for ScriptedTarget {
        fn method(&self) -> ShareMethod {
            self.method
        }

        fn deliver(&mut self, _request: &ShareRequest) -> Result<Option<String>, TargetError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.script {
                Script::Deliver(detail) => Ok(detail.clone()),
                Script::Unsupported => Err(TargetError::Unsupported),
                Script::Cancel => Err(TargetError::Cancelled),
                Script::Fail => Err(TargetError::Failed("scripted failure".into())),
            }
        }
    }

    fn request() -> ShareRequest {
        ShareRequest {
            text: "caption".into(),
            image_png: vec![1, 2, 3],
        }
    }

    #[tokio::test]
    async fn first_supporting_target_wins() {
        let (native, _) = ScriptedTarget::boxed(ShareMethod::Native, Script::Deliver(None));
        let (download, download_calls) =
            ScriptedTarget::boxed(ShareMethod::Download, Script::Deliver(None));

        let outcome = run_share(request(), vec![native, download]).await;

        assert_eq!(
            outcome,
            ShareOutcome::Delivered {
                method: ShareMethod::Native,
                detail: None
            }
        );
        assert_eq!(download_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unsupported_targets_fall_through_in_order() {
        let (native, _) = ScriptedTarget::boxed(ShareMethod::Native, Script::Unsupported);
        let (clipboard, _) = ScriptedTarget::boxed(ShareMethod::Clipboard, Script::Unsupported);
        let (download, _) = ScriptedTarget::boxed(
            ShareMethod::Download,
            Script::Deliver(Some("/tmp/card.png".into())),
        );

        let outcome = run_share(request(), vec![native, clipboard, download]).await;

        assert_eq!(
            outcome,
            ShareOutcome::Delivered {
                method: ShareMethod::Download,
                detail: Some("/tmp/card.png".into())
            }
        );
    }

    #[tokio::test]
    async fn user_cancel_stops_the_pipeline() {
        let (native, _) = ScriptedTarget::boxed(ShareMethod::Native, Script::Cancel);
        let (clipboard, clipboard_calls) =
            ScriptedTarget::boxed(ShareMethod::Clipboard, Script::Deliver(None));

        let outcome = run_share(request(), vec![native, clipboard]).await;

        assert_eq!(outcome, ShareOutcome::Cancelled);
        // No fallback after an explicit cancel
        assert_eq!(clipboard_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failures_fall_through_unlike_cancels() {
        let (native, _) = ScriptedTarget::boxed(ShareMethod::Native, Script::Fail);
        let (clipboard, _) = ScriptedTarget::boxed(ShareMethod::Clipboard, Script::Deliver(None));

        let outcome = run_share(request(), vec![native, clipboard]).await;

        assert_eq!(
            outcome,
            ShareOutcome::Delivered {
                method: ShareMethod::Clipboard,
                detail: None
            }
        );
    }

    #[tokio::test]
    async fn exhausted_pipeline_reports_failure() {
        let (native, _) = ScriptedTarget::boxed(ShareMethod::Native, Script::Unsupported);
        let (download, _) = ScriptedTarget::boxed(ShareMethod::Download, Script::Fail);

        let outcome = run_share(request(), vec![native, download]).await;

        assert!(matches!(outcome, ShareOutcome::Failed { .. }));
    }

    #[tokio::test]
    async fn empty_target_list_reports_failure() {
        let outcome = run_share(request(), Vec::new()).await;
        assert!(matches!(outcome, ShareOutcome::Failed { .. }));
    }
}

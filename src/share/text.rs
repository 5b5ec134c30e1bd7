// SPDX-License-Identifier: MPL-2.0
//! Share caption resolution.
//!
//! Captions are Fluent messages fed with the card title and creator handle.
//! Platforms may ship their own template (`share-text-windows` and friends);
//! when the active locale has none, the generic `share-text` message is
//! used instead.

use crate::app::config::{ShareConfig, SharePlatform};
use crate::app::i18n::I18n;
use crate::resources::CardManifest;

/// Builds the localized share caption for `card`.
pub fn share_caption(i18n: &I18n, share: &ShareConfig, card: &CardManifest) -> String {
    let args = [
        ("title", card.title.as_str()),
        ("handle", card.handle.as_str()),
    ];

    let platform_key = platform_message_key(resolve_platform(share.platform));
    if i18n.has_message(platform_key) {
        i18n.tr_with_args(platform_key, &args)
    } else {
        i18n.tr_with_args("share-text", &args)
    }
}

fn platform_message_key(platform: SharePlatform) -> &'static str {
    match platform {
        SharePlatform::Windows => "share-text-windows",
        SharePlatform::Macos => "share-text-macos",
        // Auto is resolved before this point
        SharePlatform::Linux | SharePlatform::Auto => "share-text-linux",
    }
}

/// Pins `Auto` to the operating system the binary was built for.
fn resolve_platform(configured: SharePlatform) -> SharePlatform {
    match configured {
        SharePlatform::Auto => {
            if cfg!(target_os = "windows") {
                SharePlatform::Windows
            } else if cfg!(target_os = "macos") {
                SharePlatform::Macos
            } else {
                SharePlatform::Linux
            }
        }
        explicit => explicit,
    }
}

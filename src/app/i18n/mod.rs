// SPDX-License-Identifier: MPL-2.0
//! Internationalization support backed by Fluent resources embedded at
//! compile time.

pub mod fluent;

pub use fluent::I18n;

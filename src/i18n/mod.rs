// SPDX-License-Identifier: MPL-2.0
//! Localization support built on Fluent.
//!
//! UI chrome (dialog buttons, demo labels) is resolved through [`fluent::I18n`];
//! toast message bodies are caller-supplied literal text and are never
//! translated by the notification system itself.

pub mod fluent;

pub use fluent::I18n;

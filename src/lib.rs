// SPDX-License-Identifier: MPL-2.0
//! `iced_feedback` provides transient toast notifications and a reusable
//! confirmation dialog for applications built with the Iced GUI framework.
//!
//! It demonstrates internationalization with Fluent, user preference
//! management, and modular UI design; the bundled binary is a small
//! playground exercising both helpers.

#![doc(html_root_url = "https://docs.rs/iced_feedback/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;

// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` owning the shared toast container
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification, Toast};
//!
//! // Create the container once, alongside the application state
//! let mut manager = Manager::new();
//!
//! // Push a notification
//! manager.push(Notification::success("Image saved successfully"));
//!
//! // In your view function, render the overlay
//! let toast_overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: 3s, auto-hide always on, with a manual close control
//! - Position: bottom-right corner, layered above the base view
//! - Message bodies are literal text, never interpreted as markup

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Severity, DEFAULT_DURATION};
pub use toast::Toast;

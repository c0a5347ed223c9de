// SPDX-License-Identifier: MPL-2.0
//! Reusable confirmation dialog.
//!
//! The dialog shows a plain-text question with an affirmative and a cancel
//! control on top of a dimmed backdrop, and delivers a boolean outcome to
//! the caller exactly once: `true` when the affirmative control is chosen,
//! `false` for every dismissal path (cancel button or backdrop).
//!
//! # Components
//!
//! - [`dialog`] - `State` machine and modal widget rendering
//! - [`responder`] - Single-use slot mapping the outcome to a caller message
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::confirm;
//!
//! // Arm a request; the closure maps the outcome to an application message
//! state.open("Delete item?", |confirmed| Message::DeleteResolved(confirmed));
//!
//! // Route dialog messages through the update loop
//! if let Some(follow_up) = state.update(dialog_message) {
//!     return self.update(follow_up);
//! }
//!
//! // Stack the modal above the base view while a request is armed
//! let modal = state.view(&i18n).map(Message::Confirm);
//! ```

pub mod dialog;
pub mod responder;

pub use dialog::{Message, State};
pub use responder::Responder;

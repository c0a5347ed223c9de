// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::confirm;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// The toast message input changed.
    MessageInputChanged(String),
    /// The severity name input changed.
    SeverityInputChanged(String),
    /// Emit a toast from the current inputs.
    ShowToast,
    /// Ask for confirmation before deleting a sample item.
    RequestDelete(usize),
    /// Outcome of the delete confirmation.
    DeleteResolved { index: usize, confirmed: bool },
    /// Confirmation dialog control messages.
    Confirm(confirm::Message),
    /// Toast overlay messages (manual dismissal).
    Notification(notifications::Message),
    /// Periodic tick driving toast auto-dismissal.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}

// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long a toast stays on screen before auto-dismissal.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the accent color and glyph of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, check mark).
    #[default]
    Success,
    /// Informational message (blue).
    Info,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red, cross mark).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the text glyph shown next to the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "ℹ",
            Severity::Warning => "⚠",
            Severity::Error => "✗",
        }
    }

    /// Parses a severity name, case-insensitively.
    ///
    /// `danger` is accepted as an alias for [`Severity::Error`]; any
    /// unrecognized name degrades to [`Severity::Info`] rather than failing.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" | "danger" => Severity::Error,
            _ => Severity::Info,
        }
    }
}

/// A notification to be displayed to the user.
///
/// The message is literal text; it is rendered verbatim, never interpreted
/// as markup or as a translation key.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity level (determines accent color and glyph).
    severity: Severity,
    /// The message text shown in the toast body.
    message: String,
    /// When this notification was created.
    created_at: Instant,
    /// Custom auto-dismiss duration (overrides `DEFAULT_DURATION`).
    custom_dismiss_duration: Option<Duration>,
}

impl Notification {
    /// Creates a new notification with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: Instant::now(),
            custom_dismiss_duration: None,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a notification from a message and a severity name.
    ///
    /// This mirrors the string-typed category of callers that take user or
    /// config input; unknown names degrade to [`Severity::Info`].
    pub fn with_severity_name(message: impl Into<String>, name: &str) -> Self {
        Self::new(Severity::from_name(name), message)
    }

    /// Sets a custom auto-dismiss duration, overriding `DEFAULT_DURATION`.
    ///
    /// Useful for notifications that need more time to read.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_dismiss_duration = Some(duration);
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns whether this notification has outlived its display duration.
    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        let duration = self.custom_dismiss_duration.unwrap_or(DEFAULT_DURATION);
        self.age() >= duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let success = Severity::Success.color();
        let info = Severity::Info.color();
        let warning = Severity::Warning.color();
        let error = Severity::Error.color();

        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn severity_glyph_table_matches_documented_lookup() {
        assert_eq!(Severity::Success.glyph(), "✓");
        assert_eq!(Severity::Error.glyph(), "✗");
        assert_eq!(Severity::Warning.glyph(), "⚠");
        assert_eq!(Severity::Info.glyph(), "ℹ");
    }

    #[test]
    fn severity_defaults_to_success() {
        assert_eq!(Severity::default(), Severity::Success);
    }

    #[test]
    fn from_name_parses_known_severities() {
        assert_eq!(Severity::from_name("success"), Severity::Success);
        assert_eq!(Severity::from_name("Warning"), Severity::Warning);
        assert_eq!(Severity::from_name("ERROR"), Severity::Error);
        assert_eq!(Severity::from_name("info"), Severity::Info);
    }

    #[test]
    fn from_name_accepts_danger_alias() {
        assert_eq!(Severity::from_name("danger"), Severity::Error);
    }

    #[test]
    fn from_name_falls_back_to_info() {
        assert_eq!(Severity::from_name("verbose"), Severity::Info);
        assert_eq!(Severity::from_name(""), Severity::Info);
        assert_eq!(Severity::from_name("  spaced  "), Severity::Info);
    }

    #[test]
    fn fresh_notification_does_not_auto_dismiss() {
        let notification = Notification::info("still fresh");
        assert!(!notification.should_auto_dismiss());
    }

    #[test]
    fn zero_duration_notification_dismisses_immediately() {
        let notification = Notification::info("gone").auto_dismiss(Duration::ZERO);
        assert!(notification.should_auto_dismiss());
    }

    #[test]
    fn notification_constructors_set_correct_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
        assert_eq!(Notification::error("").severity(), Severity::Error);
    }

    #[test]
    fn with_severity_name_keeps_message_verbatim() {
        let notification = Notification::with_severity_name("<b>plain</b>", "bogus");
        assert_eq!(notification.message(), "<b>plain</b>");
        assert_eq!(notification.severity(), Severity::Info);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` is the shared toast container: it owns every live
//! notification, appends new ones, and removes them on manual dismissal or
//! when their display duration elapses. One manager is created with the
//! application state and reused for every emission.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Manages the live notifications of the shared container.
#[derive(Debug, Default)]
pub struct Manager {
    /// Live notifications in emission order (oldest first).
    live: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification to the container.
    pub fn push(&mut self, notification: Notification) {
        self.live.push_back(notification);
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed; dismissing
    /// an unknown ID is a no-op.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.live.len();
        self.live.retain(|n| n.id() != id);
        self.live.len() != before
    }

    /// Processes a tick event, dismissing any notifications that have expired.
    ///
    /// Should be called periodically (e.g. every 100-500ms) to handle
    /// auto-dismiss.
    pub fn tick(&mut self) {
        self.live.retain(|n| !n.should_auto_dismiss());
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the live notifications, oldest first.
    pub fn live(&self) -> impl Iterator<Item = &Notification> {
        self.live.iter()
    }

    /// Returns the number of live notifications.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Returns whether any notification is on screen.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.live.is_empty()
    }

    /// Clears all notifications.
    pub fn clear(&mut self) {
        self.live.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.live_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_appends_every_notification() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::success(format!("test-{i}")));
        }
        assert_eq!(manager.live_count(), 5);
    }

    #[test]
    fn live_preserves_emission_order() {
        let mut manager = Manager::new();
        manager.push(Notification::success("first"));
        manager.push(Notification::error("second"));

        let messages: Vec<&str> = manager.live().map(|n| n.message()).collect();
        assert_eq!(messages, ["first", "second"]);
    }

    #[test]
    fn dismiss_removes_from_live() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();

        manager.push(notification);
        assert_eq!(manager.live_count(), 1);

        let removed = manager.dismiss(id);
        assert!(removed);
        assert_eq!(manager.live_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::success("temp").id();

        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn tick_sweeps_expired_notifications_only() {
        let mut manager = Manager::new();
        manager.push(Notification::success("expired").auto_dismiss(Duration::ZERO));
        manager.push(Notification::success("fresh"));

        manager.tick();

        assert_eq!(manager.live_count(), 1);
        assert_eq!(manager.live().next().map(|n| n.message()), Some("fresh"));
    }

    #[test]
    fn tick_empties_container_once_everything_expired() {
        let mut manager = Manager::new();
        for i in 0..4 {
            manager.push(Notification::info(format!("test-{i}")).auto_dismiss(Duration::ZERO));
        }

        manager.tick();

        assert_eq!(manager.live_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();

        for i in 0..5 {
            manager.push(Notification::success(format!("test-{i}")));
        }

        manager.clear();
        assert_eq!(manager.live_count(), 0);
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.live_count(), 0);
    }

    #[test]
    fn handle_message_tick() {
        let mut manager = Manager::new();
        manager.push(Notification::success("gone").auto_dismiss(Duration::ZERO));

        manager.handle_message(&Message::Tick);
        assert!(!manager.has_notifications());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the feedback components.
//!
//! The `App` struct wires together localization, configuration, and the two
//! feedback helpers (toast notifications and the confirmation dialog), and
//! translates messages into state changes. This file intentionally keeps
//! policy decisions (toast lifetime override, locale resolution, theme
//! selection) close to the main update loop so user-facing behavior is easy
//! to audit.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::I18n;
use crate::ui::confirm;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 820;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;

/// Root Iced application state bridging the feedback components,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Current content of the toast message input.
    message_input: String,
    /// Current content of the severity name input.
    severity_input: String,
    /// Sample items the delete confirmation operates on.
    items: Vec<String>,
    /// Toast lifetime override from the config file.
    toast_duration: Option<Duration>,
    /// Shared toast container, created once with the application.
    notifications: notifications::Manager,
    /// Confirmation dialog state.
    confirm: confirm::State<Message>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.items.len())
            .field("live_toasts", &self.notifications.live_count())
            .field("confirm_open", &self.confirm.is_open())
            .finish()
    }
}

fn sample_items() -> Vec<String> {
    ["notes.txt", "draft-2.png", "backup.tar.gz"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            message_input: String::new(),
            severity_input: String::new(),
            items: sample_items(),
            toast_duration: None,
            notifications: notifications::Manager::new(),
            confirm: confirm::State::new(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` and the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match config::load() {
            Ok(config) => (config, false),
            Err(_) => (config::Config::default(), true),
        };
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.theme_mode;
        app.toast_duration = config.toast_duration_secs.map(Duration::from_secs);

        // A config file that exists but does not parse degrades to defaults
        // and is surfaced to the user rather than aborting startup
        if config_warning {
            let message = app.i18n.tr("notification-config-load-failed");
            app.notifications.push(Notification::warning(message));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::MessageInputChanged(value) => {
                self.message_input = value;
            }
            Message::SeverityInputChanged(value) => {
                self.severity_input = value;
            }
            Message::ShowToast => {
                let text = if self.message_input.trim().is_empty() {
                    self.i18n.tr("demo-default-message")
                } else {
                    self.message_input.clone()
                };
                self.push_notification(Notification::with_severity_name(
                    text,
                    &self.severity_input,
                ));
            }
            Message::RequestDelete(index) => {
                if let Some(name) = self.items.get(index) {
                    let question = self
                        .i18n
                        .tr_with_args("confirm-delete-message", &[("name", name.as_str())]);
                    self.confirm
                        .open(question, move |confirmed| Message::DeleteResolved {
                            index,
                            confirmed,
                        });
                }
            }
            Message::DeleteResolved { index, confirmed } => {
                if confirmed {
                    if index < self.items.len() {
                        let name = self.items.remove(index);
                        let message = self
                            .i18n
                            .tr_with_args("notification-item-deleted", &[("name", name.as_str())]);
                        self.push_notification(Notification::success(message));
                    }
                } else {
                    let message = self.i18n.tr("notification-delete-cancelled");
                    self.push_notification(Notification::info(message));
                }
            }
            Message::Confirm(dialog_message) => {
                // The dialog resolves to an application message at most once
                if let Some(follow_up) = self.confirm.update(dialog_message) {
                    return self.update(follow_up);
                }
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
            }
            Message::Tick(_now) => {
                self.notifications.tick();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            message_input: &self.message_input,
            severity_input: &self.severity_input,
            items: &self.items,
            notifications: &self.notifications,
            confirm: &self.confirm,
        })
    }

    /// Applies the configured toast lifetime before handing the notification
    /// to the shared container.
    fn push_notification(&mut self, notification: Notification) {
        let notification = match self.toast_duration {
            Some(duration) => notification.auto_dismiss(duration),
            None => notification,
        };
        self.notifications.push(notification);
    }
}

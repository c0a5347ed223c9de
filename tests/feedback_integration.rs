// SPDX-License-Identifier: MPL-2.0
//! Integration tests exercising the feedback components together: emission,
//! dismissal, and the full confirmation round-trip with localized chrome.

use iced_feedback::config::Config;
use iced_feedback::i18n::I18n;
use iced_feedback::ui::confirm;
use iced_feedback::ui::notifications::{Manager, Notification, Severity};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn english() -> I18n {
    I18n::new(Some("en-US".to_string()), &Config::default())
}

#[test]
fn toast_lifecycle_returns_container_to_empty() {
    let mut manager = Manager::new();

    for i in 0..4 {
        manager.push(Notification::success(format!("message {i}")).auto_dismiss(Duration::ZERO));
    }
    assert_eq!(manager.live_count(), 4);

    manager.tick();
    assert_eq!(manager.live_count(), 0);
}

#[test]
fn string_typed_categories_map_to_documented_styles() {
    let cases = [
        ("success", Severity::Success, "✓"),
        ("danger", Severity::Error, "✗"),
        ("warning", Severity::Warning, "⚠"),
        ("anything-else", Severity::Info, "ℹ"),
    ];

    for (name, expected, glyph) in cases {
        let notification = Notification::with_severity_name("Saved", name);
        assert_eq!(notification.severity(), expected);
        assert_eq!(notification.severity().glyph(), glyph);
        assert_eq!(notification.severity().color(), expected.color());
    }
}

#[test]
fn confirmation_round_trip_resolves_exactly_once() {
    let outcomes: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
    let mut dialog: confirm::State<()> = confirm::State::new();

    let i18n = english();
    let question = i18n.tr_with_args("confirm-delete-message", &[("name", "notes.txt")]);

    let sink = Rc::clone(&outcomes);
    dialog.open(question, move |confirmed| {
        sink.borrow_mut().push(confirmed);
    });
    assert!(dialog.is_open());
    assert!(dialog.message_text().unwrap().contains("notes.txt"));

    // Affirmative control, then a duplicate activation racing the close
    let _ = dialog.update(confirm::Message::Confirm);
    let _ = dialog.update(confirm::Message::Confirm);

    assert!(!dialog.is_open());
    assert_eq!(*outcomes.borrow(), vec![true]);
}

#[test]
fn dismissal_resolves_false_exactly_once() {
    let outcomes: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
    let mut dialog: confirm::State<()> = confirm::State::new();

    let sink = Rc::clone(&outcomes);
    dialog.open("Delete item?", move |confirmed| {
        sink.borrow_mut().push(confirmed);
    });

    // Cancel button and backdrop press funnel into the same dismissal message
    let _ = dialog.update(confirm::Message::Dismiss);
    let _ = dialog.update(confirm::Message::Dismiss);

    assert_eq!(*outcomes.borrow(), vec![false]);
}

#[test]
fn dialog_chrome_is_localized() {
    let mut i18n = english();
    assert_eq!(i18n.tr("confirm-ok"), "OK");
    assert_eq!(i18n.tr("confirm-cancel"), "Cancel");

    i18n.set_locale("fr".parse().unwrap());
    assert_eq!(i18n.tr("confirm-cancel"), "Annuler");
}

use super::*;
use crate::util::notify::{Alert, RecordingNotifier};
use crate::util::page::FakePage;

fn run(page: &FakePage) -> Vec<Alert> {
    let mut notifier = RecordingNotifier::default();
    display_messages(page, &mut notifier, &UiConfig::default());
    notifier.alerts
}

#[test]
fn error_only_fires_single_error_alert() {
    let page = FakePage::new().with_element(".error-message", "Room unavailable");
    assert_eq!(run(&page), vec![Alert::Error("Room unavailable".to_owned())]);
}

#[test]
fn reservation_only_fires_confirmation() {
    let page = FakePage::new().with_element(".reservation-message", "Room reserved successfully!");
    assert_eq!(run(&page), vec![Alert::Confirmation("Room reserved successfully!".to_owned())]);
}

#[test]
fn both_present_fires_error_first() {
    let page = FakePage::new()
        .with_element(".reservation-message", "Reserved")
        .with_element(".error-message", "Room unavailable");
    assert_eq!(
        run(&page),
        vec![
            Alert::Error("Room unavailable".to_owned()),
            Alert::Confirmation("Reserved".to_owned()),
        ]
    );
}

#[test]
fn no_markers_fires_nothing() {
    let page = FakePage::new().with_element(".flash-info", "Password reset link sent");
    assert!(run(&page).is_empty());
}

#[test]
fn duplicate_markers_use_first_match() {
    let page = FakePage::new()
        .with_element(".error-message", "first")
        .with_element(".error-message", "second");
    assert_eq!(run(&page), vec![Alert::Error("first".to_owned())]);
}

#[test]
fn empty_text_is_still_shown() {
    let page = FakePage::new().with_element(".error-message", "");
    assert_eq!(run(&page), vec![Alert::Error(String::new())]);
}

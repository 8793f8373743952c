use super::*;

#[test]
fn recording_notifier_keeps_call_order() {
    let mut notifier = RecordingNotifier::default();
    notifier.show_confirmation("Room reserved successfully!");
    notifier.show_error("Reservation not found.");
    assert_eq!(
        notifier.alerts,
        vec![
            Alert::Confirmation("Room reserved successfully!".to_owned()),
            Alert::Error("Reservation not found.".to_owned()),
        ]
    );
}

#[test]
fn alert_text_ignores_kind() {
    assert_eq!(Alert::Error("x".to_owned()).text(), "x");
    assert_eq!(Alert::Confirmation("y".to_owned()).text(), "y");
}

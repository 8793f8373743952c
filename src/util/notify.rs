//! User-facing notification capability.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Surfaces server-rendered messages to the user.
pub trait Notifier {
    fn show_error(&mut self, text: &str);
    fn show_confirmation(&mut self, text: &str);
}

/// One notification, as seen by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Alert {
    Error(String),
    Confirmation(String),
}

impl Alert {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Error(text) | Self::Confirmation(text) => text,
        }
    }
}

/// Notifier that records alerts in the order they fire.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    pub alerts: Vec<Alert>,
}

impl Notifier for RecordingNotifier {
    fn show_error(&mut self, text: &str) {
        self.alerts.push(Alert::Error(text.to_owned()));
    }

    fn show_confirmation(&mut self, text: &str) {
        self.alerts.push(Alert::Confirmation(text.to_owned()));
    }
}

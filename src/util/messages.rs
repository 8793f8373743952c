//! Server-rendered message surfacing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates render at most one `.error-message` and one
//! `.reservation-message` element. Only the first match of each is shown;
//! extra elements are ignored.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::config::UiConfig;
use crate::util::notify::Notifier;
use crate::util::page::MessageQuery;

/// Show the error message, then the reservation message, when present.
pub fn display_messages<P, N>(page: &P, notifier: &mut N, config: &UiConfig)
where
    P: MessageQuery + ?Sized,
    N: Notifier + ?Sized,
{
    if let Some(text) = page.first_text(&config.error_selector) {
        notifier.show_error(&text);
    }
    if let Some(text) = page.first_text(&config.reservation_selector) {
        notifier.show_confirmation(&text);
    }
}

//! Page-load initialization.
//!
//! SYSTEM CONTEXT
//! ==============
//! Invoked once by the host page's bootstrap sequence after the document has
//! fully loaded. All browser capabilities are injected so the same routine
//! runs against fakes in tests.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::config::UiConfig;
use crate::util::dark_mode;
use crate::util::messages::display_messages;
use crate::util::notify::Notifier;
use crate::util::page::{ClassList, MessageQuery};
use crate::util::storage::KeyValueStore;
use crate::util::theme::Theme;

/// Capabilities the page-load hook operates on.
pub struct PageContext<'a> {
    pub root: &'a mut dyn ClassList,
    pub page: &'a dyn MessageQuery,
    pub store: &'a dyn KeyValueStore,
    pub notifier: &'a mut dyn Notifier,
    pub config: &'a UiConfig,
}

/// Restore the saved theme, then surface any rendered messages.
///
/// Returns the restored theme, or `None` when default styling was kept.
pub fn on_page_load(ctx: PageContext<'_>) -> Option<Theme> {
    let PageContext { root, page, store, notifier, config } = ctx;
    let theme = dark_mode::restore(root, store, config);
    display_messages(page, notifier, config);
    theme
}

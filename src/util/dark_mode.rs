//! Dark mode restore and toggle.
//!
//! Reads the user's preference from key-value storage and applies a
//! `dark-mode` / `light-mode` class to the root container. Toggle flips the
//! dark class and writes the resulting theme back.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort. An unreadable store leaves default
//! styling, and a rejected write keeps the visual change for this page view
//! only. Both cases are logged, never raised.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::config::UiConfig;
use crate::util::page::ClassList;
use crate::util::storage::KeyValueStore;
use crate::util::theme::Theme;

/// Read the stored theme preference.
///
/// Returns `None` when nothing (or an empty string) is stored, or when the
/// store cannot be read. Unknown non-empty values are treated as light.
pub fn read_preference<S: KeyValueStore + ?Sized>(store: &S, config: &UiConfig) -> Option<Theme> {
    let raw = match store.get(&config.storage_key) {
        Ok(Some(raw)) if !raw.is_empty() => raw,
        Ok(_) => return None,
        Err(e) => {
            log::warn!("theme preference not restored: {e}");
            return None;
        }
    };
    match raw.parse::<Theme>() {
        Ok(theme) => Some(theme),
        Err(e) => {
            log::warn!("{e}; falling back to light");
            Some(Theme::Light)
        }
    }
}

/// Add the class for `theme` on the root container.
pub fn apply<R: ClassList + ?Sized>(root: &mut R, theme: Theme, config: &UiConfig) {
    root.add(theme.body_class(config));
}

/// Current theme as shown by the root container.
pub fn current<R: ClassList + ?Sized>(root: &R, config: &UiConfig) -> Theme {
    if root.contains(&config.dark_class) { Theme::Dark } else { Theme::Light }
}

/// Reapply the stored preference, if any. Safe to call repeatedly.
pub fn restore<R, S>(root: &mut R, store: &S, config: &UiConfig) -> Option<Theme>
where
    R: ClassList + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let theme = read_preference(store, config)?;
    apply(root, theme, config);
    log::debug!("restored {theme} theme");
    Some(theme)
}

/// Toggle dark mode and persist the new preference.
pub fn toggle<R, S>(root: &mut R, store: &mut S, config: &UiConfig) -> Theme
where
    R: ClassList + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let next = if root.toggle(&config.dark_class) { Theme::Dark } else { Theme::Light };
    if let Err(e) = store.set(&config.storage_key, next.as_str()) {
        log::warn!("theme preference not saved: {e}");
    }
    next
}

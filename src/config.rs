//! Page helper configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates can override storage key, class names and selectors by embedding
//! a JSON object in `<script id="ui-config" type="application/json">`. Every
//! field is optional; omitted fields keep the defaults the stylesheet expects.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// DOM id of the optional JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

/// Error returned by [`UiConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid ui config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Names shared between the page hooks and the server templates.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Storage key holding the theme preference.
    pub storage_key: String,
    pub dark_class: String,
    pub light_class: String,
    /// Selector for the server-rendered error message.
    pub error_selector: String,
    /// Selector for the reservation confirmation message.
    pub reservation_selector: String,
    /// Element id where the toggle button is mounted, if present.
    pub toggle_mount_id: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            dark_class: "dark-mode".to_owned(),
            light_class: "light-mode".to_owned(),
            error_selector: ".error-message".to_owned(),
            reservation_selector: ".reservation-message".to_owned(),
            toggle_mount_id: "theme-toggle".to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse a config object, filling omitted fields with defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse `raw` if given, falling back to defaults on absence or error.
    #[must_use]
    pub fn from_optional_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}

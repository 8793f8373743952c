//! Browser bindings and WASM entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! Adapts `web-sys` handles to the capability traits in `util` and exports
//! the two hooks the templates rely on: the module start hook (runs the
//! page-load routine) and `toggleDarkMode()` for inline click handlers.
//! Compiled only with the `hydrate` feature.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};

use crate::bootstrap::{PageContext, on_page_load};
use crate::components::theme_toggle::ThemeToggle;
use crate::config::{CONFIG_ELEMENT_ID, UiConfig};
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::notify::Notifier;
use crate::util::page::{ClassList, MessageQuery};
use crate::util::storage::{KeyValueStore, StorageError};
use crate::util::theme::Theme;

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

// =============================================================
// Capabilities
// =============================================================

/// `window.localStorage`.
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    #[must_use]
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|e| StorageError::Read(describe(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write(describe(&e)))
    }
}

/// `document.body` class list. Missing body degrades to a no-op root.
pub struct BrowserRoot {
    body: Option<web_sys::HtmlElement>,
}

impl BrowserRoot {
    #[must_use]
    pub fn new() -> Self {
        Self { body: document().and_then(|d| d.body()) }
    }
}

impl Default for BrowserRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassList for BrowserRoot {
    fn contains(&self, class: &str) -> bool {
        self.body.as_ref().map_or(false, |b| b.class_list().contains(class))
    }

    fn toggle(&mut self, class: &str) -> bool {
        let Some(body) = self.body.as_ref() else {
            return false;
        };
        match body.class_list().toggle(class) {
            Ok(present) => present,
            Err(e) => {
                log::warn!("class toggle failed: {}", describe(&e));
                body.class_list().contains(class)
            }
        }
    }

    fn add(&mut self, class: &str) {
        if let Some(body) = self.body.as_ref() {
            if let Err(e) = body.class_list().add_1(class) {
                log::warn!("class add failed: {}", describe(&e));
            }
        }
    }
}

/// `document.querySelector(..).textContent`.
pub struct BrowserPage {
    document: Option<web_sys::Document>,
}

impl BrowserPage {
    #[must_use]
    pub fn new() -> Self {
        Self { document: document() }
    }
}

impl Default for BrowserPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageQuery for BrowserPage {
    fn first_text(&self, selector: &str) -> Option<String> {
        let doc = self.document.as_ref()?;
        let el = doc.query_selector(selector).ok().flatten()?;
        Some(el.text_content().unwrap_or_default())
    }
}

/// Blocking `window.alert` dialogs.
#[derive(Default)]
pub struct AlertNotifier;

impl AlertNotifier {
    fn alert(text: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(text) {
                log::warn!("alert failed: {}", describe(&e));
            }
        }
    }
}

impl Notifier for AlertNotifier {
    fn show_error(&mut self, text: &str) {
        Self::alert(text);
    }

    fn show_confirmation(&mut self, text: &str) {
        Self::alert(text);
    }
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Config from the optional `#ui-config` JSON element.
fn load_config() -> UiConfig {
    let raw = document()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    UiConfig::from_optional_json(raw.as_deref())
}

// =============================================================
// Entry points
// =============================================================

/// Flip the page theme against the live document and storage.
pub fn toggle_theme() -> Theme {
    let config = load_config();
    dark_mode::toggle(&mut BrowserRoot::new(), &mut BrowserStorage::new(), &config)
}

/// Inline handler target: `<button onclick="toggleDarkMode()">`.
#[wasm_bindgen(js_name = toggleDarkMode)]
pub fn toggle_dark_mode() {
    let theme = toggle_theme();
    log::info!("theme switched to {theme}");
}

fn run_page_load() {
    let config = load_config();
    let mut root = BrowserRoot::new();
    let page = BrowserPage::new();
    let store = BrowserStorage::new();
    let mut notifier = AlertNotifier;

    on_page_load(PageContext {
        root: &mut root,
        page: &page,
        store: &store,
        notifier: &mut notifier,
        config: &config,
    });

    mount_toggle(&root, &config);
}

fn mount_toggle(root: &BrowserRoot, config: &UiConfig) {
    let Some(target) = document()
        .and_then(|d| d.get_element_by_id(&config.toggle_mount_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let ui = RwSignal::new(UiState::new(dark_mode::current(root, config)));
    leptos::mount::mount_to(target, move || {
        provide_context(ui);
        view! { <ThemeToggle/> }
    })
    .forget();
}

/// Module start hook: run the page-load routine once the document is loaded.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(window) = web_sys::window() else {
        return;
    };
    let loaded = window.document().map_or(false, |d| d.ready_state() == "complete");
    if loaded {
        run_page_load();
        return;
    }

    let on_load = Closure::once(run_page_load);
    if let Err(e) = window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref()) {
        log::warn!("load listener not installed: {}", describe(&e));
        return;
    }
    on_load.forget();
}

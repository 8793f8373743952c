//! Dark mode toggle button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `#theme-toggle` when a template provides that element. Pages
//! that wire their own `onclick="toggleDarkMode()"` control do not need it.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Button that flips the page theme and persists the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let next = crate::browser::toggle_theme();
            ui.update(|u| u.theme = next);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            ui.update(|u| u.theme = u.theme.toggled());
        }
    };

    view! {
        <button
            class="btn theme-toggle"
            type="button"
            on:click=on_click
            title=move || ui.get().toggle_title()
            aria-pressed=move || if ui.get().dark_mode() { "true" } else { "false" }
        >
            {move || ui.get().toggle_glyph()}
        </button>
    }
}

use super::*;

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode());
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn toggle_glyph_shows_target_theme() {
    assert_eq!(UiState::new(Theme::Light).toggle_glyph(), "☾");
    assert_eq!(UiState::new(Theme::Dark).toggle_glyph(), "☀");
}

#[test]
fn toggle_title_names_target_theme() {
    assert_eq!(UiState::new(Theme::Dark).toggle_title(), "Switch to light mode");
    assert_eq!(UiState::new(Theme::Light).toggle_title(), "Switch to dark mode");
}

use super::*;

#[test]
fn parses_both_storage_literals() {
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
}

#[test]
fn rejects_other_values_case_sensitively() {
    assert_eq!("Dark".parse::<Theme>(), Err(ThemeParseError("Dark".to_owned())));
    assert!("".parse::<Theme>().is_err());
    assert!("blue".parse::<Theme>().is_err());
}

#[test]
fn as_str_matches_display() {
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.to_string(), "light");
}

#[test]
fn toggled_flips_and_returns() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn body_class_follows_config() {
    let config = UiConfig::default();
    assert_eq!(Theme::Dark.body_class(&config), "dark-mode");
    assert_eq!(Theme::Light.body_class(&config), "light-mode");
}

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!Theme::default().is_dark());
}

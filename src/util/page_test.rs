use super::*;

#[test]
fn toggle_adds_then_removes() {
    let mut root = FakeRoot::new();
    assert!(root.toggle("dark-mode"));
    assert!(root.contains("dark-mode"));
    assert!(!root.toggle("dark-mode"));
    assert!(root.classes().is_empty());
}

#[test]
fn add_is_idempotent() {
    let mut root = FakeRoot::new();
    root.add("light-mode");
    root.add("light-mode");
    assert_eq!(root.classes(), ["light-mode".to_owned()]);
}

#[test]
fn toggle_leaves_other_classes_alone() {
    let mut root = FakeRoot::new();
    root.add("light-mode");
    root.toggle("dark-mode");
    assert!(root.contains("light-mode"));
    assert!(root.contains("dark-mode"));
}

#[test]
fn first_text_returns_first_match_only() {
    let page = FakePage::new()
        .with_element(".error-message", "first")
        .with_element(".error-message", "second");
    assert_eq!(page.first_text(".error-message").as_deref(), Some("first"));
    assert_eq!(page.first_text(".reservation-message"), None);
}

//! DOM capabilities consumed by the page hooks.
//!
//! DESIGN
//! ======
//! `ClassList` models the root visual container (the `<body>`), and
//! `MessageQuery` models `querySelector` + `textContent`. The fakes here are
//! deliberately tiny: a class set and an ordered list of marked elements.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Class-list access on the root visual container.
pub trait ClassList {
    fn contains(&self, class: &str) -> bool;
    /// Flip `class`; returns whether it is present afterwards.
    fn toggle(&mut self, class: &str) -> bool;
    fn add(&mut self, class: &str);
}

/// First-match text lookup over the rendered page.
pub trait MessageQuery {
    /// Text content of the first element matching `selector`, if any.
    fn first_text(&self, selector: &str) -> Option<String>;
}

/// In-memory root container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FakeRoot {
    classes: Vec<String>,
}

impl FakeRoot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classes in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl ClassList for FakeRoot {
    fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn toggle(&mut self, class: &str) -> bool {
        if let Some(pos) = self.classes.iter().position(|c| c == class) {
            self.classes.remove(pos);
            false
        } else {
            self.classes.push(class.to_owned());
            true
        }
    }

    fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_owned());
        }
    }
}

/// In-memory page: elements as `(selector, text)` pairs in document order.
#[derive(Clone, Debug, Default)]
pub struct FakePage {
    elements: Vec<(String, String)>,
}

impl FakePage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element matched by `selector`.
    #[must_use]
    pub fn with_element(mut self, selector: &str, text: &str) -> Self {
        self.elements.push((selector.to_owned(), text.to_owned()));
        self
    }
}

impl MessageQuery for FakePage {
    fn first_text(&self, selector: &str) -> Option<String> {
        self.elements
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, text)| text.clone())
    }
}

//! Mobile navigation menu.

use crate::dom::ClassList;

pub const OPEN_CLASS: &str = "open";

/// Open state of the burger-driven navigation container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu and return whether it is now open.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Classes for the nav container, given its static base classes.
    pub fn classes(&self, base: &str) -> ClassList {
        let mut classes = ClassList::parse(base);
        classes.set(OPEN_CLASS, self.open);
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_open_class() {
        let mut nav = NavMenu::new();
        assert_eq!(nav.classes("pp-nav").to_string(), "pp-nav");
        assert!(nav.toggle());
        assert_eq!(nav.classes("pp-nav").to_string(), "pp-nav open");
        assert!(!nav.toggle());
        assert!(!nav.classes("pp-nav").contains("open"));
    }
}

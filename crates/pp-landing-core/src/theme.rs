//! Light/dark ambience toggle.

/// Class set on `<body>` while the light theme is active.
pub const LIGHT_CLASS: &str = "light";

/// Page-session theme state. Starts dark; nothing is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    is_light: bool,
}

impl ThemeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_light(&self) -> bool {
        self.is_light
    }

    /// Flip the theme and return the new light flag.
    pub fn toggle(&mut self) -> bool {
        self.is_light = !self.is_light;
        tracing::debug!(is_light = self.is_light, "theme toggled");
        self.is_light
    }

    /// Glyph shown on the toggle: sun in light mode, moon in dark mode.
    pub fn icon(&self) -> &'static str {
        if self.is_light {
            "\u{2600}\u{FE0F}"
        } else {
            "\u{1F319}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dark() {
        let theme = ThemeState::new();
        assert!(!theme.is_light());
        assert_eq!(theme.icon(), "🌙");
    }

    #[test]
    fn toggle_to_light() {
        let mut theme = ThemeState::new();
        assert!(theme.toggle());
        assert_eq!(theme.icon(), "☀️");
        assert!(theme.is_light());
    }
}

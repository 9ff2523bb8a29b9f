//! Keyboard input as seen by the controllers.

/// Keys the landing page components react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Enter,
    Space,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl KeyInput {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(key: &str) -> Self {
        match key {
            "Enter" => KeyInput::Enter,
            " " | "Spacebar" => KeyInput::Space,
            "ArrowLeft" => KeyInput::ArrowLeft,
            "ArrowRight" => KeyInput::ArrowRight,
            _ => KeyInput::Other,
        }
    }

    /// Keys that activate a focused control.
    pub fn is_activation(&self) -> bool {
        matches!(self, KeyInput::Enter | KeyInput::Space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_dom_key_names() {
        assert_eq!(KeyInput::from_key_name("Enter"), KeyInput::Enter);
        assert_eq!(KeyInput::from_key_name(" "), KeyInput::Space);
        assert_eq!(KeyInput::from_key_name("ArrowLeft"), KeyInput::ArrowLeft);
        assert_eq!(KeyInput::from_key_name("ArrowRight"), KeyInput::ArrowRight);
        assert_eq!(KeyInput::from_key_name("a"), KeyInput::Other);
    }

    #[test]
    fn activation_keys() {
        assert!(KeyInput::Enter.is_activation());
        assert!(KeyInput::Space.is_activation());
        assert!(!KeyInput::ArrowLeft.is_activation());
    }
}

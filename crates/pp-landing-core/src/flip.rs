//! Flip cards.
//!
//! Hover-capable devices flip on pointer enter/leave; touch-only devices
//! flip on tap. Enter/Space always toggle, whatever the modality.

use crate::dom::{ClassList, NodePath};
use crate::input::KeyInput;

pub const FLIP_CARD_CLASS: &str = "flip-card";
pub const FLIPPED_CLASS: &str = "is-flipped";
/// Taps on this control keep their default behaviour and never flip
pub const JOIN_BUTTON_CLASS: &str = "pp-join-btn";

/// Primary input of the device, from the `(hover: hover)` media query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputModality {
    #[default]
    Hover,
    Touch,
}

impl InputModality {
    pub fn from_hover_query(hover_matches: bool) -> Self {
        if hover_matches {
            InputModality::Hover
        } else {
            InputModality::Touch
        }
    }
}

/// Interaction delivered to a flip card.
#[derive(Debug, Clone, PartialEq)]
pub enum FlipInput {
    PointerEnter,
    PointerLeave,
    Tap(NodePath),
    Key(KeyInput),
}

/// Result of handling one [`FlipInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlipOutcome {
    pub changed: bool,
    /// The event's default action must be suppressed
    pub prevent_default: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FlipCard {
    flipped: bool,
    modality: InputModality,
}

impl FlipCard {
    pub fn new(modality: InputModality) -> Self {
        Self {
            flipped: false,
            modality,
        }
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn modality(&self) -> InputModality {
        self.modality
    }

    /// The media query can change (e.g. a tablet docking a mouse).
    pub fn set_modality(&mut self, modality: InputModality) {
        self.modality = modality;
    }

    pub fn handle(&mut self, input: FlipInput) -> FlipOutcome {
        match input {
            FlipInput::PointerEnter if self.modality == InputModality::Hover => self.set(true),
            FlipInput::PointerLeave if self.modality == InputModality::Hover => self.set(false),
            FlipInput::Tap(path) if self.modality == InputModality::Touch => {
                if path.closest_class(JOIN_BUTTON_CLASS).is_some() {
                    return FlipOutcome::default();
                }
                self.set(!self.flipped)
            }
            FlipInput::Key(key) if key.is_activation() => FlipOutcome {
                prevent_default: true,
                ..self.set(!self.flipped)
            },
            _ => FlipOutcome::default(),
        }
    }

    fn set(&mut self, flipped: bool) -> FlipOutcome {
        let changed = self.flipped != flipped;
        self.flipped = flipped;
        FlipOutcome {
            changed,
            prevent_default: false,
        }
    }

    pub fn classes(&self) -> ClassList {
        let mut classes = ClassList::parse(FLIP_CARD_CLASS);
        classes.set(FLIPPED_CLASS, self.flipped);
        classes
    }
}

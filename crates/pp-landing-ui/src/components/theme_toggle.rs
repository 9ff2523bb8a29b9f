//! Theme Toggle Component
//!
//! Flips the page between the dark default and the light ambience.

use dioxus::prelude::*;
use pp_landing_core::theme::{ThemeState, LIGHT_CLASS};

use crate::bridge;

/// Sun/moon toggle button.
///
/// The theme class lives on `<body>` so the whole document restyles. State
/// resets to dark on reload.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_signal(ThemeState::new);

    use_effect(move || {
        let is_light = theme.read().is_light();
        bridge::set_body_class(LIGHT_CLASS, is_light);
    });

    let icon = theme.read().icon();

    rsx! {
        button {
            id: "themeToggle",
            class: "pp-theme-toggle",
            r#type: "button",
            "aria-label": "Toggle light and dark theme",
            onclick: move |_| {
                theme.write().toggle();
            },
            "{icon}"
        }
    }
}

//! Mobile Navigation Component
//!
//! Burger button toggling the main navigation on small screens.

use dioxus::prelude::*;
use pp_landing_core::NavMenu;

/// Burger button plus the navigation container it opens.
#[component]
pub fn MobileNav(children: Element) -> Element {
    let mut menu = use_signal(NavMenu::new);
    let open = menu.read().is_open();
    let classes = menu.read().classes("pp-nav");

    rsx! {
        button {
            id: "burgerBtn",
            class: "pp-burger",
            r#type: "button",
            "aria-label": "Menu",
            "aria-controls": "mainNav",
            "aria-expanded": if open { "true" } else { "false" },
            onclick: move |_| {
                menu.write().toggle();
            },
            span {}
            span {}
            span {}
        }
        nav { id: "mainNav", class: "{classes}", {children} }
    }
}

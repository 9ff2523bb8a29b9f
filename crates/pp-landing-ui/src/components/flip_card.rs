//! Flip Card Component
//!
//! Trip card with a front and a back face. Hover devices flip on pointer
//! enter/leave, touch devices on tap; Enter/Space always toggle.

use dioxus::prelude::*;
use pp_landing_core::flip::{FlipInput, FLIP_CARD_CLASS, JOIN_BUTTON_CLASS};
use pp_landing_core::{FlipCard as FlipState, KeyInput, NodeInfo, NodePath};

use crate::context::{use_click_trail, use_modality};

/// Flip card with front and back content.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FlipCard {
///         front: rsx! { h3 { "Lofoten Islands" } },
///         back: rsx! {
///             p { "7 nights, small group" }
///             JoinButton { href: "#join", "Join trip" }
///         },
///     }
/// }
/// ```
#[component]
pub fn FlipCard(front: Element, back: Element) -> Element {
    let modality = use_modality();
    let trail = use_click_trail();
    let mut card = use_signal(|| FlipState::new(*modality.peek()));

    use_effect(move || {
        let current = modality();
        if card.peek().modality() != current {
            card.write().set_modality(current);
        }
    });

    let on_click = move |_: MouseEvent| {
        // Nested elements (the join button) have already recorded themselves.
        let mut path = trail.peek();
        if path.is_empty() {
            path = NodePath::new(vec![NodeInfo::with_classes(FLIP_CARD_CLASS)]);
        }
        card.write().handle(FlipInput::Tap(path));
    };

    let on_key = move |evt: KeyboardEvent| {
        let key = KeyInput::from_key_name(&evt.key().to_string());
        let outcome = card.write().handle(FlipInput::Key(key));
        if outcome.prevent_default {
            evt.prevent_default();
        }
    };

    let classes = card.read().classes();
    let flipped = card.read().is_flipped();

    rsx! {
        div {
            class: "{classes}",
            tabindex: "0",
            role: "button",
            "aria-pressed": if flipped { "true" } else { "false" },
            onpointerenter: move |_| {
                card.write().handle(FlipInput::PointerEnter);
            },
            onpointerleave: move |_| {
                card.write().handle(FlipInput::PointerLeave);
            },
            onclick: on_click,
            onkeydown: on_key,
            div { class: "flip-card-inner",
                div { class: "flip-card-front", {front} }
                div { class: "flip-card-back", {back} }
            }
        }
    }
}

/// Call-to-action inside a flip card. Taps on it never flip the card.
#[component]
pub fn JoinButton(href: String, children: Element) -> Element {
    let trail = use_click_trail();

    rsx! {
        a {
            class: "{JOIN_BUTTON_CLASS}",
            href: "{href}",
            onclick: move |_| trail.push(NodeInfo::with_classes(JOIN_BUTTON_CLASS)),
            {children}
        }
    }
}

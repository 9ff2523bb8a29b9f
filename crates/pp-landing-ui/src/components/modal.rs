//! Modal Components
//!
//! Overlay panels opened by trigger buttons and closed through one
//! delegated click handler.
//!
//! ```text
//! DelegatedClicks            routes the finished path (runs last)
//!   Modal overlay            pushes .pp-modal-overlay#id
//!     .pp-modal              pushes .pp-modal
//!       .pp-modal-close      pushes .pp-modal-close[data-close=id]
//! ```

use dioxus::prelude::*;
use pp_landing_core::modal::{CLOSE_CLASS, CLOSE_TARGET_ATTR, OVERLAY_CLASS};
use pp_landing_core::{ModalAction, NodeInfo};

use crate::context::{use_click_trail, use_modals};

const PANEL_CLASS: &str = "pp-modal";

/// Document-level click handler.
///
/// Wraps the page; every click bubbles here after the elements it crossed
/// have recorded themselves in the click trail.
#[component]
pub fn DelegatedClicks(children: Element) -> Element {
    let trail = use_click_trail();
    let mut modals = use_modals();

    let on_click = move |_: MouseEvent| {
        let path = trail.take();
        if path.is_empty() {
            return;
        }
        match modals.write().route_click(&path) {
            ModalAction::Closed(id) => tracing::debug!(modal = %id, "closed by control"),
            ModalAction::OverlayDismissed(id) => {
                tracing::debug!(modal = %id, "closed by overlay click")
            }
            ModalAction::Ignored => {}
        }
    };

    rsx! {
        div { class: "pp-page", onclick: on_click, {children} }
    }
}

/// A named modal dialog, hidden until a trigger opens it.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Modal { id: "signupModal", title: "Join the next trip",
///         SignupForm {}
///     }
/// }
/// ```
#[component]
pub fn Modal(id: String, title: String, children: Element) -> Element {
    let mut modals = use_modals();
    let trail = use_click_trail();

    let register_id = id.clone();
    use_effect(move || {
        modals.write().register(&register_id);
    });

    let display = modals.read().display(&id);

    let overlay_node = NodeInfo::with_classes(OVERLAY_CLASS).id(id.clone());
    let close_node = NodeInfo::with_classes(CLOSE_CLASS).data(CLOSE_TARGET_ATTR, id.clone());

    let overlay_trail = trail.clone();
    let on_overlay_click = move |_: MouseEvent| overlay_trail.push(overlay_node.clone());

    let panel_trail = trail.clone();
    let on_panel_click = move |_: MouseEvent| panel_trail.push(NodeInfo::with_classes(PANEL_CLASS));

    let on_close_click = move |_: MouseEvent| trail.push(close_node.clone());

    rsx! {
        div {
            id: "{id}",
            class: "{OVERLAY_CLASS}",
            style: "display: {display};",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "{id}-title",
            onclick: on_overlay_click,
            div { class: "{PANEL_CLASS}", onclick: on_panel_click,
                button {
                    class: "{CLOSE_CLASS}",
                    r#type: "button",
                    "data-close": "{id}",
                    "aria-label": "Close",
                    onclick: on_close_click,
                    "\u{00D7}"
                }
                h2 { id: "{id}-title", class: "pp-modal-title", "{title}" }
                {children}
            }
        }
    }
}

/// Button opening whichever modal the trigger table maps its id to.
#[component]
pub fn ModalTrigger(
    /// Control id, looked up in the modal trigger table
    id: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let mut modals = use_modals();
    let control = id.clone();

    rsx! {
        button {
            id: "{id}",
            class: "{class}",
            r#type: "button",
            onclick: move |_| {
                if modals.write().activate_control(&control).is_none() {
                    tracing::trace!(control = %control, "trigger has no modal on this page");
                }
            },
            {children}
        }
    }
}

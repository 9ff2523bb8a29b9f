//! Modal dialogs and the delegated click router.
//!
//! Modals are named overlay panels. Opening is driven by trigger controls
//! (looked up in a trigger table); closing goes through one document-level
//! click handler that inspects the click's [`NodePath`]:
//!
//! 1. nearest `.pp-modal-close` ancestor: close the modal named in its
//!    `data-close` attribute
//! 2. otherwise, if the target *is* a `.pp-modal-overlay`: hide that overlay
//!
//! A click on content inside the overlay has the overlay as an ancestor but
//! not as its target, so it leaves the modal open.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dom::NodePath;

pub const CLOSE_CLASS: &str = "pp-modal-close";
pub const OVERLAY_CLASS: &str = "pp-modal-overlay";
/// `data-*` key naming the modal a close control dismisses
pub const CLOSE_TARGET_ATTR: &str = "close";

/// Controls that open one modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalTriggers {
    pub modal: String,
    pub controls: Vec<String>,
}

impl ModalTriggers {
    pub fn new(modal: &str, controls: &[&str]) -> Self {
        Self {
            modal: modal.to_string(),
            controls: controls.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Trigger table shipped with the landing page.
pub fn default_triggers() -> Vec<ModalTriggers> {
    vec![
        ModalTriggers::new(
            "signupModal",
            &["openSignup", "heroSignup", "ctaSignup", "membershipSignup"],
        ),
        ModalTriggers::new("signinModal", &["openSignin", "heroSignin", "ctaSignin"]),
    ]
}

/// Outcome of routing one document click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// A close control dismissed the named modal
    Closed(String),
    /// A click landed exactly on the named overlay's background
    OverlayDismissed(String),
    /// The click was not modal-related, or changed nothing
    Ignored,
}

/// Visibility of every registered modal.
#[derive(Debug, Clone, Default)]
pub struct ModalManager {
    visible: BTreeMap<String, bool>,
    /// control id -> modal id
    controls: BTreeMap<String, String>,
}

impl ModalManager {
    pub fn new(triggers: &[ModalTriggers]) -> Self {
        let mut controls = BTreeMap::new();
        for t in triggers {
            for control in &t.controls {
                controls.insert(control.clone(), t.modal.clone());
            }
        }
        Self {
            visible: BTreeMap::new(),
            controls,
        }
    }

    /// Register a modal rendered on this page. Modals start hidden.
    pub fn register(&mut self, id: &str) {
        self.visible.entry(id.to_string()).or_insert(false);
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.visible.contains_key(id)
    }

    /// Show a modal. Unknown ids are a silent no-op.
    pub fn open(&mut self, id: &str) -> bool {
        self.set_visible(id, true)
    }

    /// Hide a modal. Unknown ids are a silent no-op.
    pub fn close(&mut self, id: &str) -> bool {
        self.set_visible(id, false)
    }

    fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        match self.visible.get_mut(id) {
            Some(state) if *state != visible => {
                *state = visible;
                tracing::debug!(modal = id, visible, "modal visibility changed");
                true
            }
            Some(_) => false,
            None => {
                tracing::trace!(modal = id, "modal not on page, ignoring");
                false
            }
        }
    }

    /// A trigger control was activated. Returns the modal it opened.
    pub fn activate_control(&mut self, control_id: &str) -> Option<String> {
        let modal = self.controls.get(control_id)?.clone();
        if !self.is_registered(&modal) {
            return None;
        }
        self.open(&modal);
        Some(modal)
    }

    /// Route a document-level click.
    pub fn route_click(&mut self, path: &NodePath) -> ModalAction {
        if let Some((_, close)) = path.closest_class(CLOSE_CLASS) {
            return match close.data_attr(CLOSE_TARGET_ATTR) {
                Some(target) => {
                    let target = target.to_string();
                    if self.close(&target) {
                        ModalAction::Closed(target)
                    } else {
                        ModalAction::Ignored
                    }
                }
                None => ModalAction::Ignored,
            };
        }

        if let Some((0, overlay)) = path.closest_class(OVERLAY_CLASS) {
            if let Some(id) = overlay.id.clone() {
                if self.close(&id) {
                    return ModalAction::OverlayDismissed(id);
                }
            }
        }
        ModalAction::Ignored
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.visible.get(id).copied().unwrap_or(false)
    }

    /// Inline `display` value for a modal overlay.
    pub fn display(&self, id: &str) -> &'static str {
        if self.is_open(id) {
            "flex"
        } else {
            "none"
        }
    }

    pub fn open_modals(&self) -> impl Iterator<Item = &str> {
        self.visible
            .iter()
            .filter(|(_, open)| **open)
            .map(|(id, _)| id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeInfo;

    fn manager() -> ModalManager {
        let mut m = ModalManager::new(&default_triggers());
        m.register("signupModal");
        m.register("signinModal");
        m
    }

    fn overlay(id: &str) -> NodeInfo {
        NodeInfo::with_classes(OVERLAY_CLASS).id(id)
    }

    #[test]
    fn modals_start_hidden() {
        let m = manager();
        assert_eq!(m.display("signupModal"), "none");
        assert_eq!(m.open_modals().count(), 0);
    }

    #[test]
    fn control_opens_mapped_modal() {
        let mut m = manager();
        assert_eq!(m.activate_control("ctaSignin").as_deref(), Some("signinModal"));
        assert!(m.is_open("signinModal"));
        assert!(!m.is_open("signupModal"));
        assert_eq!(m.activate_control("unknownBtn"), None);
    }

    #[test]
    fn unknown_modal_is_noop() {
        let mut m = manager();
        assert!(!m.open("ghostModal"));
        assert!(!m.is_registered("ghostModal"));
    }

    #[test]
    fn unregistered_modal_control_is_noop() {
        let mut m = ModalManager::new(&default_triggers());
        m.register("signinModal");
        assert_eq!(m.activate_control("heroSignup"), None);
    }

    #[test]
    fn close_control_uses_data_attribute() {
        let mut m = manager();
        m.open("signupModal");
        let path = NodePath::new(vec![
            NodeInfo::with_classes(CLOSE_CLASS).data(CLOSE_TARGET_ATTR, "signupModal"),
            NodeInfo::with_classes("pp-modal"),
            overlay("signupModal"),
        ]);
        assert_eq!(m.route_click(&path), ModalAction::Closed("signupModal".into()));
        assert!(!m.is_open("signupModal"));
    }

    #[test]
    fn close_control_without_target_does_nothing() {
        let mut m = manager();
        m.open("signupModal");
        let path = NodePath::new(vec![
            NodeInfo::with_classes(CLOSE_CLASS),
            overlay("signupModal"),
        ]);
        assert_eq!(m.route_click(&path), ModalAction::Ignored);
        assert!(m.is_open("signupModal"));
    }

    #[test]
    fn overlay_background_click_closes() {
        let mut m = manager();
        m.open("signinModal");
        let path = NodePath::new(vec![overlay("signinModal")]);
        assert_eq!(
            m.route_click(&path),
            ModalAction::OverlayDismissed("signinModal".into())
        );
        assert!(!m.is_open("signinModal"));
    }

    #[test]
    fn content_click_keeps_modal_open() {
        let mut m = manager();
        m.open("signinModal");
        let path = NodePath::new(vec![
            NodeInfo::with_classes("pp-modal"),
            overlay("signinModal"),
        ]);
        assert_eq!(m.route_click(&path), ModalAction::Ignored);
        assert!(m.is_open("signinModal"));
    }
}

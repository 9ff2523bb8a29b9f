//! Shared page context.
//!
//! Provides configuration, the modal manager, the click trail and the
//! browser-derived signals (viewport width, input modality) to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In the root component
//! use_landing_provider(config);
//!
//! // In child components
//! let width = use_viewport_width();
//! let mut modals = use_modals();
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use pp_landing_core::{
    ClickTrail, InputModality, LandingConfig, ModalManager, NodeInfo, NodePath,
};

use crate::bridge;

/// Width assumed until the browser reports the real one.
pub const FALLBACK_VIEWPORT_WIDTH: u32 = 1280;

/// `window.innerWidth`, updated on every raw resize event.
///
/// Consumers debounce on their own.
#[derive(Clone, Copy)]
pub struct ViewportWidth(pub Signal<u32>);

/// Result of the `(hover: hover)` media query.
#[derive(Clone, Copy)]
pub struct Modality(pub Signal<InputModality>);

#[derive(Clone, Copy)]
pub struct Modals(pub Signal<ModalManager>);

/// Click path shared by every handler taking part in delegated routing.
///
/// Kept outside the signal system: pushing to it must not re-render.
#[derive(Clone, Default)]
pub struct SharedClickTrail(Rc<RefCell<ClickTrail>>);

impl SharedClickTrail {
    pub fn push(&self, node: NodeInfo) {
        self.0.borrow_mut().push(node);
    }

    pub fn peek(&self) -> NodePath {
        self.0.borrow().peek()
    }

    pub fn take(&self) -> NodePath {
        self.0.borrow_mut().take()
    }
}

static NEXT_ELEMENT_ID: AtomicUsize = AtomicUsize::new(1);

/// Page-unique element id with a readable prefix.
pub fn next_element_id(prefix: &str) -> String {
    format!("{}-{}", prefix, NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Install the landing page context. Call once, from the root component.
pub fn use_landing_provider(config: LandingConfig) {
    let triggers = config.modals.clone();
    use_context_provider(|| Rc::new(config));
    use_context_provider(SharedClickTrail::default);

    let modals = use_signal(|| ModalManager::new(&triggers));
    use_context_provider(|| Modals(modals));

    let mut width = use_signal(|| FALLBACK_VIEWPORT_WIDTH);
    use_context_provider(|| ViewportWidth(width));

    let mut modality = use_signal(InputModality::default);
    use_context_provider(|| Modality(modality));

    use_future(move || async move {
        let mut eval = bridge::viewport_width_stream();
        while let Ok(reported) = eval.recv::<f64>().await {
            let reported = reported.max(0.0).round() as u32;
            if *width.peek() != reported {
                width.set(reported);
            }
        }
        tracing::debug!("viewport width stream ended");
    });

    use_future(move || async move {
        let mut eval = bridge::hover_query_stream();
        while let Ok(hover) = eval.recv::<bool>().await {
            let next = InputModality::from_hover_query(hover);
            if *modality.peek() != next {
                tracing::debug!(?next, "input modality changed");
                modality.set(next);
            }
        }
    });
}

pub fn use_config() -> Rc<LandingConfig> {
    use_context::<Rc<LandingConfig>>()
}

pub fn use_click_trail() -> SharedClickTrail {
    use_context::<SharedClickTrail>()
}

pub fn use_modals() -> Signal<ModalManager> {
    use_context::<Modals>().0
}

pub fn use_viewport_width() -> Signal<u32> {
    use_context::<ViewportWidth>().0
}

pub fn use_modality() -> Signal<InputModality> {
    use_context::<Modality>().0
}

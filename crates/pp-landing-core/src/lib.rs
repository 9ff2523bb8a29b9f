//! Landing Page Interaction Core
//!
//! Framework-agnostic state for the landing page's interactive pieces.
//!
//! ## Overview
//!
//! Every component is an explicit state object built once at page load and
//! driven by the UI layer's event handlers. Nothing here touches the DOM:
//! state is reported as class lists, inline styles and track moves, and the
//! host applies them.
//!
//! | Component        | State type                     |
//! |------------------|--------------------------------|
//! | Theme toggle     | [`ThemeState`]                 |
//! | Mobile nav       | [`NavMenu`]                    |
//! | Modals           | [`ModalManager`]               |
//! | Scroll reveal    | [`RevealTarget`], [`StaggerPlan`] |
//! | Carousels        | [`Carousel`]                   |
//! | Hero card sizing | [`HeroCardSizer`]              |
//! | Flip cards       | [`FlipCard`]                   |
//!
//! ## Missing elements
//!
//! Constructors report an absent structure as
//! [`LandingError::MissingElement`]. The UI treats that as "feature not on
//! this page" and leaves the component inert; one component's absence never
//! affects another.
//!
//! ## Quick Start
//!
//! ```
//! use pp_landing_core::{Carousel, CarouselConfig};
//!
//! let mut reviews = Carousel::new(CarouselConfig::reviews(), 6, 500).unwrap();
//! reviews.next();
//! reviews.next();
//! assert_eq!(reviews.index(), 2);
//! assert!(!reviews.buttons().prev_disabled);
//! ```

pub mod carousel;
pub mod config;
pub mod defer;
pub mod dom;
pub mod error;
pub mod flip;
pub mod footer;
pub mod hero;
pub mod input;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod theme;

// Re-exports
pub use carousel::{
    Breakpoint, ButtonStates, CardMetrics, Carousel, CarouselClasses, CarouselConfig,
    CarouselKind, Positioning, TrackMove, TrackStyle, VisibleCountRule,
};
pub use config::{CarouselsConfig, LandingConfig, RevealConfig};
pub use defer::{timer_ms, DebounceTicket, Debouncer};
pub use dom::{ClassList, ClickTrail, InlineStyle, NodeInfo, NodePath};
pub use error::{LandingError, LandingResult};
pub use flip::{FlipCard, FlipInput, FlipOutcome, InputModality};
pub use hero::{HeroCardSizer, HeroConfig};
pub use input::KeyInput;
pub use modal::{ModalAction, ModalManager, ModalTriggers};
pub use nav::NavMenu;
pub use reveal::{
    IntersectionReport, RevealEffect, RevealMode, RevealTarget, StaggerPlan, StaggerStep,
};
pub use theme::ThemeState;

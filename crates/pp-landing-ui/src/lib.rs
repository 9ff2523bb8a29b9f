//! Landing Page UI Components
//!
//! Dioxus components rendering the landing page's class and style contract
//! and driving the state objects from `pp-landing-core`.
//!
//! ## Contract with the stylesheet
//!
//! State reaches the stylesheet only through class names and inline styles:
//! - **Classes**: `light` (on `<body>`), `open`, `visible`, `is-flipped`,
//!   `reveal-child`
//! - **Inline styles**: `display`, `transform`, `transition-delay`,
//!   `--pp-hero-scale`, `--pp-hero-image-percent`
//!
//! ## Wiring
//!
//! The root component calls [`use_landing_provider`] once, then wraps the
//! page in [`DelegatedClicks`] so modal close/overlay clicks are routed by a
//! single handler.

pub mod bridge;
pub mod components;
pub mod context;

pub use components::*;
pub use context::*;

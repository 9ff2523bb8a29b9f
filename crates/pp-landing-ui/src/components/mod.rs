//! Landing page components.
//!
//! Each component owns one state object from `pp-landing-core` and renders
//! the matching class/style contract.

mod carousel;
mod flip_card;
mod footer_year;
mod hero_card;
mod mobile_nav;
mod modal;
mod reveal;
mod theme_toggle;

pub use carousel::CardCarousel;
pub use flip_card::{FlipCard, JoinButton};
pub use footer_year::FooterYear;
pub use hero_card::HeroCard;
pub use mobile_nav::MobileNav;
pub use modal::{DelegatedClicks, Modal, ModalTrigger};
pub use reveal::{use_reveal, Reveal, StaggerGroup};
pub use theme_toggle::ThemeToggle;

//! Page-specific components built from the shared landing widgets.

mod review_card;
mod trip_card;

pub use review_card::ReviewCard;
pub use trip_card::{HeroSlide, TripCard};

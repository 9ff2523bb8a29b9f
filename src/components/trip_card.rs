//! Trip Cards
//!
//! Hosted trips flip to show details and a join link; hero slides are
//! plain picture cards.

use dioxus::prelude::*;
use pp_landing_ui::{FlipCard, JoinButton};

use crate::content::Trip;

#[derive(Props, Clone, PartialEq)]
pub struct TripCardProps {
    pub trip: Trip,
}

/// Hosted trip card.
///
/// Front: title and place. Back: summary, host and the join link.
#[component]
pub fn TripCard(props: TripCardProps) -> Element {
    let trip = props.trip;
    let spots = match trip.spots_left {
        0 => "Waitlist only".to_string(),
        1 => "1 spot left".to_string(),
        n => format!("{} spots left", n),
    };

    rsx! {
        article { class: "pp-trip-card",
            FlipCard {
                front: rsx! {
                    div { class: "pp-trip-photo pp-trip-photo-{trip.slug}" }
                    h3 { class: "pp-trip-title", "{trip.title}" }
                    p { class: "pp-trip-meta", "{trip.location} \u{00B7} {trip.dates}" }
                },
                back: rsx! {
                    p { class: "pp-trip-summary", "{trip.summary}" }
                    p { class: "pp-trip-host", "Hosted by {trip.host}" }
                    p { class: "pp-trip-spots", "{spots}" }
                    JoinButton { href: "#join-{trip.slug}", "Join this trip" }
                },
            }
        }
    }
}

/// One slide of the hero trip carousel.
#[component]
pub fn HeroSlide(title: String, caption: String) -> Element {
    rsx! {
        figure { class: "pp-trip-card pp-hero-slide",
            div { class: "pp-hero-image" }
            figcaption {
                strong { "{title}" }
                span { "{caption}" }
            }
        }
    }
}

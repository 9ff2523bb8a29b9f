//! Landing page.
//!
//! Header with theme and auth triggers, hero with the trip carousel,
//! hosted trips, reviews, membership, closing call to action and footer.
//! The two auth modals sit at the end of the page.

use dioxus::prelude::*;
use pp_landing_core::CarouselKind;
use pp_landing_ui::{
    CardCarousel, DelegatedClicks, FooterYear, HeroCard, MobileNav, Modal, ModalTrigger, Reveal,
    StaggerGroup, ThemeToggle,
};

use crate::components::{HeroSlide, ReviewCard, TripCard};
use crate::content::{HERO_SLIDES, HOSTED_TRIPS, REVIEWS};

const PERKS: &[(&str, &str)] = &[
    ("Small groups", "Never more than twelve travellers per trip."),
    ("Local hosts", "Every trip is led by someone who lives there."),
    ("Member pricing", "Members book at cost, two weeks before everyone else."),
];

#[component]
fn Header() -> Element {
    rsx! {
        header { class: "pp-header",
            a { class: "pp-logo", href: "#top", "Passport Pals" }
            MobileNav {
                a { href: "#trips", "Trips" }
                a { href: "#reviews", "Reviews" }
                a { href: "#membership", "Membership" }
            }
            div { class: "pp-header-actions",
                ThemeToggle {}
                ModalTrigger { id: "openSignin", class: "pp-btn pp-btn-ghost", "Sign in" }
                ModalTrigger { id: "openSignup", class: "pp-btn", "Join" }
            }
        }
    }
}

#[component]
fn Hero() -> Element {
    let slides: Vec<Element> = HERO_SLIDES
        .iter()
        .map(|(title, caption)| {
            rsx! {
                HeroSlide { title: "{title}", caption: "{caption}" }
            }
        })
        .collect();

    rsx! {
        section { id: "top", class: "pp-hero",
            Reveal { class: "pp-hero-copy",
                h1 { "Travel with people worth meeting" }
                p { "Small-group trips hosted by locals, planned by a community of friends." }
                div { class: "pp-hero-actions",
                    ModalTrigger { id: "heroSignup", class: "pp-btn", "Find your trip" }
                    ModalTrigger { id: "heroSignin", class: "pp-btn pp-btn-ghost", "I'm a member" }
                }
            }
            HeroCard {
                CardCarousel {
                    kind: CarouselKind::HeroTrip,
                    label: "Featured trips",
                    cards: slides,
                }
            }
        }
    }
}

#[component]
fn HostedTrips() -> Element {
    let cards: Vec<Element> = HOSTED_TRIPS
        .iter()
        .map(|trip| rsx! { TripCard { trip: trip.clone() } })
        .collect();

    rsx! {
        section { id: "trips", class: "pp-section",
            Reveal { class: "pp-section-title",
                h2 { "Upcoming hosted trips" }
                p { "Hover or tap a card for the details." }
            }
            Reveal { delay_ms: 150,
                CardCarousel {
                    kind: CarouselKind::HostedTrips,
                    label: "Hosted trips",
                    cards: cards,
                }
            }
        }
    }
}

#[component]
fn Reviews() -> Element {
    let cards: Vec<Element> = REVIEWS
        .iter()
        .map(|review| rsx! { ReviewCard { review: review.clone() } })
        .collect();

    rsx! {
        section { id: "reviews", class: "pp-section",
            Reveal { class: "pp-section-title",
                h2 { "What members say" }
            }
            CardCarousel {
                kind: CarouselKind::Reviews,
                label: "Member reviews",
                cards: cards,
            }
        }
    }
}

#[component]
fn Membership() -> Element {
    let perks: Vec<Element> = PERKS
        .iter()
        .map(|(title, body)| {
            rsx! {
                div { class: "pp-perk",
                    h3 { "{title}" }
                    p { "{body}" }
                }
            }
        })
        .collect();

    rsx! {
        section { id: "membership", class: "pp-section pp-membership",
            Reveal { class: "pp-section-title",
                h2 { "Membership" }
            }
            StaggerGroup { class: "pp-perks", items: perks }
            Reveal { delay_ms: 300,
                ModalTrigger { id: "membershipSignup", class: "pp-btn", "Become a member" }
            }
        }
    }
}

#[component]
fn ClosingCta() -> Element {
    rsx! {
        section { class: "pp-section pp-cta",
            Reveal {
                h2 { "Your next trip is already planned" }
                div { class: "pp-hero-actions",
                    ModalTrigger { id: "ctaSignup", class: "pp-btn", "Sign up free" }
                    ModalTrigger { id: "ctaSignin", class: "pp-btn pp-btn-ghost", "Sign in" }
                }
            }
        }
    }
}

#[component]
fn AuthForm(submit: String, with_name: bool) -> Element {
    rsx! {
        form { class: "pp-form",
            onsubmit: move |evt| evt.prevent_default(),
            if with_name {
                label { "Name" input { r#type: "text", name: "name", autocomplete: "name" } }
            }
            label { "Email" input { r#type: "email", name: "email", autocomplete: "email" } }
            label { "Password" input { r#type: "password", name: "password" } }
            button { class: "pp-btn", r#type: "submit", "{submit}" }
        }
    }
}

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    rsx! {
        DelegatedClicks {
            Header {}
            main { class: "pp-main",
                Hero {}
                HostedTrips {}
                Reviews {}
                Membership {}
                ClosingCta {}
            }
            footer { class: "pp-footer",
                p { "\u{00A9} " FooterYear {} " Passport Pals" }
            }
            Modal { id: "signupModal", title: "Join Passport Pals",
                AuthForm { submit: "Create account", with_name: true }
            }
            Modal { id: "signinModal", title: "Welcome back",
                AuthForm { submit: "Sign in", with_name: false }
            }
        }
    }
}

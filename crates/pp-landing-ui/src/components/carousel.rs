//! Card Carousel Component
//!
//! Prev/next carousel over a fixed row of cards. The kind selects the markup
//! classes and the configuration (visible counts, positioning strategy,
//! keyboard support) from the page config.

use dioxus::prelude::*;
use gloo::timers::future::TimeoutFuture;
use pp_landing_core::{
    timer_ms, ButtonStates, CardMetrics, Carousel, CarouselKind, Debouncer, KeyInput, TrackMove,
    TrackStyle,
};

use crate::bridge;
use crate::context::{next_element_id, use_config, use_viewport_width};

/// Element ids of one carousel instance.
#[derive(Clone, PartialEq)]
struct CarouselIds {
    viewport: String,
    track: String,
}

impl CarouselIds {
    fn new(kind: CarouselKind) -> Self {
        let base = next_element_id(kind.name());
        Self {
            viewport: format!("{}-viewport", base),
            track: format!("{}-track", base),
        }
    }
}

/// Apply a track move: scroll the viewport or update the track transform.
async fn position_track(mv: TrackMove, ids: CarouselIds, mut transform: Signal<String>) {
    let metrics = if mv.needs_metrics() {
        match bridge::measure_track(&ids.track).await {
            Ok(metrics) => metrics,
            Err(err) => {
                tracing::trace!(track = %ids.track, "skipping reposition: {}", err);
                return;
            }
        }
    } else {
        CardMetrics::default()
    };

    match mv.resolve(&metrics) {
        Some(TrackStyle::ScrollLeft(left)) => bridge::scroll_viewport(&ids.viewport, left),
        Some(TrackStyle::Transform(value)) => transform.set(value),
        None => {}
    }
}

/// Move one card forward or back from a prev/next button.
fn step(
    mut state: Signal<Option<Carousel>>,
    transform: Signal<String>,
    forward: bool,
    ids: CarouselIds,
) {
    let mv = state
        .write()
        .as_mut()
        .and_then(|c| if forward { c.next() } else { c.prev() });
    if let Some(mv) = mv {
        spawn(position_track(mv, ids, transform));
    }
}

/// Carousel of cards with prev/next controls.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CardCarousel {
///         kind: CarouselKind::Reviews,
///         label: "Member reviews",
///         cards: reviews.iter().map(|r| rsx! { ReviewCard { review: r.clone() } }).collect(),
///     }
/// }
/// ```
#[component]
pub fn CardCarousel(
    kind: CarouselKind,
    #[props(default)] label: String,
    cards: Vec<Element>,
) -> Element {
    let config = use_config().carousels.get(kind).clone();
    let width = use_viewport_width();
    let ids = use_hook(|| CarouselIds::new(kind));
    let classes = kind.classes();

    let card_count = cards.len();
    let init_config = config.clone();
    let mut state = use_signal(move || {
        match Carousel::new(init_config, card_count, *width.peek()) {
            Ok(carousel) => Some(carousel),
            Err(err) => {
                tracing::trace!(carousel = kind.name(), "carousel inert: {}", err);
                None
            }
        }
    });
    let transform = use_signal(String::new);
    let mut debouncer = use_signal(|| Debouncer::new(config.resize_debounce()));

    // Initial positioning, after the configured layout settle delay.
    let initial_ids = ids.clone();
    let initial_delay = config.initial_delay();
    use_future(move || {
        let ids = initial_ids.clone();
        async move {
            if !initial_delay.is_zero() {
                TimeoutFuture::new(timer_ms(initial_delay)).await;
            }
            let mv = state.write().as_mut().and_then(|c| c.scroll_to_index(0));
            if let Some(mv) = mv {
                position_track(mv, ids, transform).await;
            }
        }
    });

    // Debounced resize: recompute the visible count once the storm settles.
    let resize_ids = ids.clone();
    use_effect(move || {
        let viewport_width = width();
        if state.peek().is_none() {
            return;
        }
        let ticket = debouncer.write().schedule();
        let ids = resize_ids.clone();
        spawn(async move {
            TimeoutFuture::new(ticket.delay_ms()).await;
            if !debouncer.write().fire(&ticket) {
                return;
            }
            let mv = state.write().as_mut().map(|c| c.resize(viewport_width));
            if let Some(mv) = mv {
                position_track(mv, ids, transform).await;
            }
        });
    });

    let wired = state.read().is_some();
    let buttons = state
        .read()
        .as_ref()
        .map(Carousel::buttons)
        .unwrap_or(ButtonStates {
            prev_disabled: true,
            next_disabled: true,
        });
    let keyboard = config.keyboard;

    let prev_ids = ids.clone();
    let next_ids = ids.clone();
    let key_ids = ids.clone();

    let on_key = move |evt: KeyboardEvent| {
        if !keyboard {
            return;
        }
        let key = KeyInput::from_key_name(&evt.key().to_string());
        let mv = state.write().as_mut().and_then(|c| c.handle_key(key));
        if let Some(mv) = mv {
            evt.prevent_default();
            spawn(position_track(mv, key_ids.clone(), transform));
        }
    };

    let current_transform = transform.read().clone();
    let track_style = if current_transform.is_empty() {
        String::new()
    } else {
        format!("transform: {};", current_transform)
    };

    rsx! {
        div {
            class: "{classes.root}",
            role: "region",
            "aria-roledescription": "carousel",
            "aria-label": "{label}",
            tabindex: if keyboard { "0" } else { "-1" },
            onkeydown: on_key,
            button {
                class: "{classes.button} prev",
                r#type: "button",
                "aria-label": "Previous",
                disabled: buttons.prev_disabled,
                onclick: move |_| {
                    if wired {
                        step(state, transform, false, prev_ids.clone());
                    }
                },
                "\u{2039}"
            }
            div { id: "{ids.viewport}", class: "{classes.viewport}",
                div { id: "{ids.track}", class: "{classes.track}", style: "{track_style}",
                    for card in cards.iter() {
                        {card.clone()}
                    }
                }
            }
            button {
                class: "{classes.button} next",
                r#type: "button",
                "aria-label": "Next",
                disabled: buttons.next_disabled,
                onclick: move |_| {
                    if wired {
                        step(state, transform, true, next_ids.clone());
                    }
                },
                "\u{203A}"
            }
        }
    }
}

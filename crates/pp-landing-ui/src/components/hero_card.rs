//! Hero Card Component
//!
//! The floating hero card. It reveals like any `.reveal` element, then is
//! pinned to a fixed square once its class list says it is visible.

use dioxus::prelude::*;
use gloo::timers::future::TimeoutFuture;
use pp_landing_core::reveal::VISIBLE_CLASS;
use pp_landing_core::{timer_ms, ClassList, Debouncer, HeroCardSizer, InlineStyle, RevealMode};

use crate::components::reveal::use_reveal;
use crate::context::{next_element_id, use_config, use_viewport_width};

const BASE_CLASSES: &str = "pp-hero-card float-card reveal";

/// Apply the sizing now, if the card currently qualifies.
fn apply_now(sizer: &HeroCardSizer, classes: &ClassList, mut style: Signal<InlineStyle>) {
    if let Some(sized) = sizer.apply(classes) {
        if *style.peek() != sized {
            style.set(sized);
        }
    }
}

/// Schedule a debounced re-apply, superseding any pending one.
fn schedule_apply(
    sizer: HeroCardSizer,
    mut debouncer: Signal<Debouncer>,
    classes: Memo<ClassList>,
    style: Signal<InlineStyle>,
) {
    let ticket = debouncer.write().schedule();
    spawn(async move {
        TimeoutFuture::new(ticket.delay_ms()).await;
        if debouncer.write().fire(&ticket) {
            apply_now(&sizer, &classes.peek(), style);
        }
    });
}

/// Hero card wrapper.
///
/// Re-sizing is triggered by class changes on the card (the reveal adding
/// `visible`) and by debounced viewport resizes.
#[component]
pub fn HeroCard(children: Element) -> Element {
    let config = use_config();
    let sizer = HeroCardSizer::new(config.hero.clone());
    let width = use_viewport_width();

    let id = use_hook(|| next_element_id("hero-card"));
    let effect = use_reveal(id.clone(), RevealMode::Single { delay_ms: 0 });
    let classes = use_memo(move || {
        let mut classes = ClassList::parse(BASE_CLASSES);
        classes.set(VISIBLE_CLASS, effect.read().is_some());
        classes
    });
    let style = use_signal(InlineStyle::new);
    let debouncer = use_signal(|| Debouncer::new(sizer.resize_debounce()));

    // On load: apply immediately, then once more after layout settles.
    let load_sizer = sizer.clone();
    use_future(move || {
        let sizer = load_sizer.clone();
        async move {
            apply_now(&sizer, &classes.peek(), style);
            TimeoutFuture::new(timer_ms(sizer.settle_delay())).await;
            apply_now(&sizer, &classes.peek(), style);
        }
    });

    // Class mutations on the card.
    let mutation_sizer = sizer.clone();
    use_effect(move || {
        let current = classes();
        if mutation_sizer.on_class_mutation(&current) {
            schedule_apply(mutation_sizer.clone(), debouncer, classes, style);
        }
    });

    // Viewport resizes.
    use_effect(move || {
        let _ = width();
        schedule_apply(sizer.clone(), debouncer, classes, style);
    });

    let class_attr = classes.read().to_string();
    let style_attr = style.read().to_string();

    rsx! {
        div { id: "{id}", class: "{class_attr}", style: "{style_attr}", {children} }
    }
}

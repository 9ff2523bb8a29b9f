//! Reveal Components
//!
//! Scroll-triggered entrance animations. An element is observed until it
//! first crosses the configured intersection threshold, then gets
//! `visible` and is never observed again.

use dioxus::prelude::*;
use gloo::timers::future::TimeoutFuture;
use pp_landing_core::reveal::{REVEAL_CHILD_CLASS, REVEAL_CLASS, STAGGER_CLASS, VISIBLE_CLASS};
use pp_landing_core::{
    ClassList, IntersectionReport, RevealEffect, RevealMode, RevealTarget, StaggerPlan,
};

use crate::bridge;
use crate::context::{next_element_id, use_config};

/// Observe `element_id` and report the reveal effect once it fires.
///
/// The signal stays `None` if the element never mounts or the browser has
/// no `IntersectionObserver`.
pub fn use_reveal(element_id: String, mode: RevealMode) -> Signal<Option<RevealEffect>> {
    let config = use_config();
    let mut effect = use_signal(|| None);

    use_future(move || {
        let element_id = element_id.clone();
        let threshold = config.reveal.threshold;
        let lead_in = config.reveal.stagger_lead_in_ms;
        async move {
            let mut target = RevealTarget::new(mode, threshold).with_lead_in(lead_in);
            let mut eval = bridge::observe_intersection(&element_id, threshold);
            loop {
                match eval.recv::<IntersectionReport>().await {
                    Ok(report) => {
                        if let Some(fired) = target.observe(&report) {
                            if let Err(err) = eval.send(serde_json::Value::Bool(true)) {
                                tracing::trace!(
                                    element = %element_id,
                                    "could not stop intersection observer: {}",
                                    err
                                );
                            }
                            effect.set(Some(fired));
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::trace!(element = %element_id, "reveal observation ended: {}", err);
                        break;
                    }
                }
            }
        }
    });

    effect
}

fn container_classes(base: &str, extra: &str, revealed: bool) -> ClassList {
    let mut classes = ClassList::parse(base);
    for name in extra.split_whitespace() {
        classes.add(name);
    }
    classes.set(VISIBLE_CLASS, revealed);
    classes
}

/// A `.reveal` element.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Reveal { class: "pp-section-title", delay_ms: 150,
///         h2 { "Upcoming trips" }
///     }
/// }
/// ```
#[component]
pub fn Reveal(
    #[props(default)] class: String,
    /// Extra transition delay applied when revealed
    #[props(default)]
    delay_ms: u32,
    children: Element,
) -> Element {
    let id = use_hook(|| next_element_id("reveal"));
    let effect = use_reveal(id.clone(), RevealMode::Single { delay_ms });

    let (revealed, style) = match &*effect.read() {
        Some(RevealEffect::Single { style }) => (true, style.to_string()),
        Some(RevealEffect::Stagger(_)) => (true, String::new()),
        None => (false, String::new()),
    };
    let classes = container_classes(REVEAL_CLASS, &class, revealed);

    rsx! {
        div {
            id: "{id}",
            class: "{classes}",
            style: "{style}",
            "data-reveal-delay": "{delay_ms}",
            {children}
        }
    }
}

/// Set each child visible on its step of the plan.
async fn run_stagger(plan: StaggerPlan, mut shown: Signal<Vec<bool>>) {
    let mut elapsed = 0;
    for step in plan.steps() {
        let wait = step.visible_at_ms.saturating_sub(elapsed);
        TimeoutFuture::new(wait).await;
        elapsed = step.visible_at_ms;
        if let Some(flag) = shown.write().get_mut(step.index) {
            *flag = true;
        }
    }
}

/// Class and style of stagger child `i`; both empty until the plan exists.
fn child_attrs(plan: Option<&StaggerPlan>, i: usize, visible: bool) -> (String, String) {
    match plan.and_then(|p| p.steps().get(i)) {
        Some(step) => {
            let mut classes = ClassList::parse(REVEAL_CHILD_CLASS);
            classes.set(VISIBLE_CLASS, visible);
            (classes.to_string(), step.style().to_string())
        }
        None => (String::new(), String::new()),
    }
}

/// A `.reveal.stagger` container whose items cascade in one after another.
///
/// Item K gets `transition-delay: K * gap` and turns visible
/// `lead_in + K * gap` ms after the container is revealed.
#[component]
pub fn StaggerGroup(
    #[props(default)] class: String,
    /// Per-item gap, overriding the configured default
    #[props(default)]
    gap_ms: Option<u32>,
    items: Vec<Element>,
) -> Element {
    let config = use_config();
    let gap = gap_ms.unwrap_or(config.reveal.stagger_gap_ms);
    let count = items.len();

    let id = use_hook(|| next_element_id("stagger"));
    let effect = use_reveal(
        id.clone(),
        RevealMode::Stagger {
            gap_ms: gap,
            child_count: count,
        },
    );
    let shown = use_signal(|| vec![false; count]);

    use_effect(move || {
        if let Some(RevealEffect::Stagger(plan)) = effect() {
            spawn(run_stagger(plan, shown));
        }
    });

    let plan = match &*effect.read() {
        Some(RevealEffect::Stagger(plan)) => Some(plan.clone()),
        _ => None,
    };
    let classes = container_classes(
        &format!("{REVEAL_CLASS} {STAGGER_CLASS}"),
        &class,
        plan.is_some(),
    );

    rsx! {
        div {
            id: "{id}",
            class: "{classes}",
            "data-stagger-gap": "{gap}",
            for (i, item) in items.iter().enumerate() {
                {
                    let visible = shown.read().get(i).copied().unwrap_or(false);
                    let (child_class, child_style) = child_attrs(plan.as_ref(), i, visible);
                    rsx! {
                        div {
                            key: "{i}",
                            class: "{child_class}",
                            style: "{child_style}",
                            {item.clone()}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_classes_merge_and_flag() {
        let hidden = container_classes("reveal stagger", "pp-trip-grid reveal", false);
        assert_eq!(hidden.to_string(), "reveal stagger pp-trip-grid");
        let shown = container_classes("reveal", "", true);
        assert_eq!(shown.to_string(), "reveal visible");
    }

    #[test]
    fn child_attrs_follow_plan() {
        assert_eq!(child_attrs(None, 0, true), (String::new(), String::new()));

        let plan = StaggerPlan::new(3, 100, 20);
        let (class, style) = child_attrs(Some(&plan), 2, false);
        assert_eq!(class, "reveal-child");
        assert!(style.contains("200ms"));
        let (class, _) = child_attrs(Some(&plan), 2, true);
        assert_eq!(class, "reveal-child visible");
        assert_eq!(child_attrs(Some(&plan), 3, true), (String::new(), String::new()));
    }
}

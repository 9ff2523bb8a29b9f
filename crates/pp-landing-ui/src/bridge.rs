//! Browser bridge.
//!
//! The few things Dioxus does not expose as events (viewport resize,
//! intersection observation, the hover media query, layout measurement,
//! smooth scrolling, `<body>` classes) go through `document::eval`. Scripts
//! are rendered by plain functions so they can be checked without a browser.
//!
//! Every script treats a missing element as "nothing to do": it sends
//! `null` (or nothing) and returns.

use dioxus::document::{self, Eval};
use pp_landing_core::{CardMetrics, LandingError, LandingResult};

/// How many animation frames a script waits for its element to mount.
const MOUNT_RETRY_FRAMES: u32 = 10;

/// Quote a string as a JS string literal.
fn js_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '<' => out.push_str("\\u003c"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Prelude that resolves `el` to the element with `id`, waiting a few
/// frames for it to mount.
fn find_element(id: &str) -> String {
    format!(
        r#"let el = document.getElementById({id});
for (let i = 0; !el && i < {frames}; i++) {{
  await new Promise((r) => requestAnimationFrame(r));
  el = document.getElementById({id});
}}"#,
        id = js_str(id),
        frames = MOUNT_RETRY_FRAMES,
    )
}

pub fn body_class_script(class: &str, present: bool) -> String {
    format!(
        "document.body.classList.toggle({}, {});",
        js_str(class),
        present
    )
}

pub fn viewport_width_script() -> String {
    r#"dioxus.send(window.innerWidth);
window.addEventListener("resize", () => dioxus.send(window.innerWidth));
await new Promise(() => {});"#
        .to_string()
}

pub fn hover_query_script() -> String {
    r#"const mq = window.matchMedia("(hover: hover)");
dioxus.send(mq.matches);
mq.addEventListener("change", (e) => dioxus.send(e.matches));
await new Promise(() => {});"#
        .to_string()
}

/// Streams `{ is_intersecting, ratio }` reports for one element until the
/// Rust side answers, then disconnects the observer.
pub fn intersection_script(element_id: &str, threshold: f64) -> String {
    format!(
        r#"{find}
if (!el || !("IntersectionObserver" in window)) return;
const observer = new IntersectionObserver((entries) => {{
  for (const entry of entries) {{
    dioxus.send({{ is_intersecting: entry.isIntersecting, ratio: entry.intersectionRatio }});
  }}
}}, {{ threshold: {threshold} }});
observer.observe(el);
await dioxus.recv();
observer.unobserve(el);
observer.disconnect();"#,
        find = find_element(element_id),
        threshold = threshold,
    )
}

pub fn measure_track_script(track_id: &str) -> String {
    format!(
        r#"{find}
if (!el) {{ dioxus.send(null); return; }}
const cards = Array.from(el.children);
dioxus.send({{
  track_offset_left: el.offsetLeft,
  card_offsets: cards.map((c) => c.offsetLeft),
  card_width: cards.length ? cards[0].getBoundingClientRect().width : 0,
  gap: parseFloat(getComputedStyle(el).gap) || 0,
}});"#,
        find = find_element(track_id),
    )
}

pub fn scroll_script(viewport_id: &str, left: f64) -> String {
    format!(
        r#"const el = document.getElementById({id});
if (el) el.scrollTo({{ left: {left}, behavior: "smooth" }});"#,
        id = js_str(viewport_id),
        left = left,
    )
}

fn bridge_err(err: impl std::fmt::Display) -> LandingError {
    LandingError::Bridge(err.to_string())
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, present: bool) {
    let _ = document::eval(&body_class_script(class, present));
}

/// Smooth-scroll a carousel viewport.
pub fn scroll_viewport(viewport_id: &str, left: f64) {
    let _ = document::eval(&scroll_script(viewport_id, left));
}

/// Stream of `window.innerWidth`, first value immediately.
pub fn viewport_width_stream() -> Eval {
    document::eval(&viewport_width_script())
}

/// Stream of `(hover: hover)` matches, first value immediately.
pub fn hover_query_stream() -> Eval {
    document::eval(&hover_query_script())
}

/// Intersection reports for one element. Send any value to stop observing.
pub fn observe_intersection(element_id: &str, threshold: f64) -> Eval {
    document::eval(&intersection_script(element_id, threshold))
}

/// Measure a rendered carousel track.
pub async fn measure_track(track_id: &str) -> LandingResult<CardMetrics> {
    let mut eval = document::eval(&measure_track_script(track_id));
    let metrics: Option<CardMetrics> = eval.recv().await.map_err(bridge_err)?;
    metrics.ok_or_else(|| LandingError::MissingElement(format!("carousel track #{}", track_id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_strings_are_escaped() {
        assert_eq!(js_str("plain"), "\"plain\"");
        assert_eq!(js_str("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(js_str("</script>"), "\"\\u003c/script>\"");
    }

    #[test]
    fn body_class_toggle() {
        assert_eq!(
            body_class_script("light", true),
            "document.body.classList.toggle(\"light\", true);"
        );
    }

    #[test]
    fn intersection_script_uses_threshold() {
        let script = intersection_script("reveal-3", 0.15);
        assert!(script.contains("document.getElementById(\"reveal-3\")"));
        assert!(script.contains("{ threshold: 0.15 }"));
        assert!(script.contains("observer.disconnect()"));
    }

    #[test]
    fn measure_script_reports_null_when_missing() {
        let script = measure_track_script("carousel-1-track");
        assert!(script.contains("dioxus.send(null)"));
        assert!(script.contains("track_offset_left"));
    }

    #[test]
    fn scroll_script_is_smooth() {
        assert!(scroll_script("vp", 320.0).contains("{ left: 320, behavior: \"smooth\" }"));
    }
}

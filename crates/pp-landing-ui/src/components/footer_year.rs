use dioxus::prelude::*;
use pp_landing_core::footer::copyright_year;

/// Current year for the footer copyright line.
#[component]
pub fn FooterYear() -> Element {
    let year = use_hook(|| copyright_year(&chrono::Local::now()));
    rsx! {
        span { id: "year", "{year}" }
    }
}

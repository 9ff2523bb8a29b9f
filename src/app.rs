use dioxus::prelude::*;
use pp_landing_core::LandingConfig;
use pp_landing_ui::use_landing_provider;

use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Page configuration shipped with the bundle.
const LANDING_CONFIG: &str = include_str!("../assets/landing.json");

/// Parse the bundled configuration, falling back to the built-in defaults.
pub fn load_config(json: &str) -> LandingConfig {
    match LandingConfig::from_json(json) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid landing config, using defaults: {}", e);
            LandingConfig::default()
        }
    }
}

/// Root application component.
///
/// Provides global styles and the shared page context.
#[component]
pub fn App() -> Element {
    let config = use_hook(|| load_config(LANDING_CONFIG));
    use_landing_provider(config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Landing {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_is_valid() {
        let config = LandingConfig::from_json(LANDING_CONFIG).unwrap();
        assert_eq!(config.modals.len(), 2);
        assert_eq!(config, load_config(LANDING_CONFIG));
    }

    #[test]
    fn broken_config_falls_back() {
        let config = load_config(r#"{ "reveal": { "threshold": 4.0 } }"#);
        assert_eq!(config, LandingConfig::default());
    }
}

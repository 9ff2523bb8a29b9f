//! Hero card sizing.
//!
//! Once the hero card has been revealed it is pinned to a fixed square and
//! publishes a scale ratio for dependent elements:
//!
//! ```text
//! width / height            = {target}px
//! --pp-hero-scale           = target / baseline   (3 decimals)
//! --pp-hero-image-percent   = {image_percent}%
//! ```
//!
//! The sizing is re-applied whenever the card's class list changes and after
//! a debounced viewport resize.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dom::{ClassList, InlineStyle};
use crate::error::{LandingError, LandingResult};

pub const HERO_CARD_CLASS: &str = "pp-hero-card";
/// Classes the card must carry before it is sized
pub const SIZED_WHEN: [&str; 4] = [HERO_CARD_CLASS, "float-card", "reveal", "visible"];

pub const SCALE_PROPERTY: &str = "--pp-hero-scale";
pub const IMAGE_PERCENT_PROPERTY: &str = "--pp-hero-image-percent";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub target_px: u32,
    pub baseline_px: u32,
    pub image_percent: u32,
    pub resize_debounce_ms: u64,
    /// Second apply after load, once late layout has settled
    pub settle_ms: u64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            target_px: 500,
            baseline_px: 500,
            image_percent: 60,
            resize_debounce_ms: 80,
            settle_ms: 120,
        }
    }
}

impl HeroConfig {
    pub(crate) fn validate(&self) -> LandingResult<()> {
        if self.baseline_px == 0 {
            return Err(LandingError::InvalidConfig(
                "hero baseline must be positive".to_string(),
            ));
        }
        if self.image_percent > 100 {
            return Err(LandingError::InvalidConfig(format!(
                "hero image percent {} exceeds 100",
                self.image_percent
            )));
        }
        Ok(())
    }
}

/// Computes the hero card's inline sizing.
#[derive(Debug, Clone)]
pub struct HeroCardSizer {
    config: HeroConfig,
}

impl HeroCardSizer {
    pub fn new(config: HeroConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.config.resize_debounce_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.config.settle_ms)
    }

    /// Whether an element with these classes gets sized.
    pub fn applies_to(&self, classes: &ClassList) -> bool {
        classes.contains_all(&SIZED_WHEN)
    }

    /// `target / baseline`, formatted with three decimals.
    pub fn scale(&self) -> String {
        let ratio = f64::from(self.config.target_px) / f64::from(self.config.baseline_px);
        format!("{:.3}", ratio)
    }

    pub fn style(&self) -> InlineStyle {
        let size = format!("{}px", self.config.target_px);
        let mut style = InlineStyle::new();
        style
            .set("width", size.clone())
            .set("height", size)
            .set(SCALE_PROPERTY, self.scale())
            .set(
                IMAGE_PERCENT_PROPERTY,
                format!("{}%", self.config.image_percent),
            );
        style
    }

    /// Sizing for an element with these classes, if it qualifies.
    pub fn apply(&self, classes: &ClassList) -> Option<InlineStyle> {
        self.applies_to(classes).then(|| self.style())
    }

    /// A class attribute changed. Returns whether a re-apply should be
    /// scheduled.
    pub fn on_class_mutation(&self, classes: &ClassList) -> bool {
        classes.contains(HERO_CARD_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrevealed_card_is_not_sized() {
        let sizer = HeroCardSizer::new(HeroConfig::default());
        let classes = ClassList::parse("pp-hero-card float-card reveal");
        assert!(sizer.apply(&classes).is_none());
        assert!(sizer.on_class_mutation(&classes));
    }

    #[test]
    fn visible_card_gets_fixed_size() {
        let sizer = HeroCardSizer::new(HeroConfig::default());
        let classes = ClassList::parse("pp-hero-card float-card reveal visible");
        let style = sizer.apply(&classes).unwrap();
        assert_eq!(style.get("width"), Some("500px"));
        assert_eq!(style.get("height"), Some("500px"));
        assert_eq!(style.get(SCALE_PROPERTY), Some("1.000"));
        assert_eq!(style.get(IMAGE_PERCENT_PROPERTY), Some("60%"));
    }

    #[test]
    fn scale_tracks_baseline() {
        let sizer = HeroCardSizer::new(HeroConfig {
            target_px: 420,
            baseline_px: 500,
            ..HeroConfig::default()
        });
        assert_eq!(sizer.scale(), "0.840");
    }

    #[test]
    fn unrelated_mutation_ignored() {
        let sizer = HeroCardSizer::new(HeroConfig::default());
        assert!(!sizer.on_class_mutation(&ClassList::parse("reveal visible")));
    }

    #[test]
    fn zero_baseline_rejected() {
        let config = HeroConfig {
            baseline_px: 0,
            ..HeroConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

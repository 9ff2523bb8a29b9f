//! Landing page configuration.
//!
//! Every tunable the page uses (reveal threshold, stagger timing, carousel
//! breakpoints, modal trigger table, hero sizing) lives here with the
//! shipped values as defaults. All sections are optional in JSON.
//!
//! ```json
//! {
//!   "reveal": { "threshold": 0.2 },
//!   "carousels": { "reviews": { "visible": { "wide_visible": 4 } } }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::carousel::{CarouselConfig, CarouselKind, CarouselOverride};
use crate::error::{LandingError, LandingResult};
use crate::hero::HeroConfig;
use crate::modal::{default_triggers, ModalTriggers};
use crate::reveal::{DEFAULT_STAGGER_GAP_MS, STAGGER_LEAD_IN_MS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Intersection ratio at which an element counts as seen
    pub threshold: f64,
    /// Per-child gap when a stagger container sets none
    pub stagger_gap_ms: u32,
    pub stagger_lead_in_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            stagger_gap_ms: DEFAULT_STAGGER_GAP_MS,
            stagger_lead_in_ms: STAGGER_LEAD_IN_MS,
        }
    }
}

/// Carousel settings per instance.
///
/// Deserialized through [`CarouselsOverride`], so a partial entry keeps the
/// rest of its own instance preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CarouselsOverride")]
pub struct CarouselsConfig {
    pub reviews: CarouselConfig,
    pub hosted_trips: CarouselConfig,
    pub hero_trip: CarouselConfig,
}

impl Default for CarouselsConfig {
    fn default() -> Self {
        Self {
            reviews: CarouselConfig::reviews(),
            hosted_trips: CarouselConfig::hosted_trips(),
            hero_trip: CarouselConfig::hero_trip(),
        }
    }
}

/// The `carousels` section as written in JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CarouselsOverride {
    pub reviews: CarouselOverride,
    pub hosted_trips: CarouselOverride,
    pub hero_trip: CarouselOverride,
}

impl From<CarouselsOverride> for CarouselsConfig {
    fn from(o: CarouselsOverride) -> Self {
        Self {
            reviews: o.reviews.apply_to(CarouselConfig::reviews()),
            hosted_trips: o.hosted_trips.apply_to(CarouselConfig::hosted_trips()),
            hero_trip: o.hero_trip.apply_to(CarouselConfig::hero_trip()),
        }
    }
}

impl CarouselsConfig {
    pub fn get(&self, kind: CarouselKind) -> &CarouselConfig {
        match kind {
            CarouselKind::Reviews => &self.reviews,
            CarouselKind::HostedTrips => &self.hosted_trips,
            CarouselKind::HeroTrip => &self.hero_trip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub reveal: RevealConfig,
    pub carousels: CarouselsConfig,
    pub modals: Vec<ModalTriggers>,
    pub hero: HeroConfig,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            reveal: RevealConfig::default(),
            carousels: CarouselsConfig::default(),
            modals: default_triggers(),
            hero: HeroConfig::default(),
        }
    }
}

impl LandingConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> LandingResult<Self> {
        let config: LandingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> LandingResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> LandingResult<()> {
        let threshold = self.reveal.threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(LandingError::InvalidConfig(format!(
                "reveal threshold {} outside (0, 1]",
                threshold
            )));
        }
        for kind in [
            CarouselKind::Reviews,
            CarouselKind::HostedTrips,
            CarouselKind::HeroTrip,
        ] {
            self.carousels.get(kind).visible.validate().map_err(|e| {
                LandingError::InvalidConfig(format!("{} carousel: {}", kind.name(), e))
            })?;
        }
        for trigger in &self.modals {
            if trigger.modal.is_empty() {
                return Err(LandingError::InvalidConfig(
                    "modal trigger without a modal id".to_string(),
                ));
            }
        }
        self.hero.validate()
    }
}

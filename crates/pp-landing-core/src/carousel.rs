//! Card carousel controller.
//!
//! A carousel shows a window of `visible` cards out of a fixed sequence and
//! moves that window one card at a time. Three instances exist on the
//! landing page (reviews, hosted trips, hero trip); they differ only in
//! configuration.
//!
//! ## Invariant
//!
//! ```text
//! 0 <= index <= max(0, card_count - visible)
//! ```
//!
//! Every operation clamps, so the invariant holds after any sequence of
//! `next`, `prev`, `resize` and `scroll_to_index` calls.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LandingError, LandingResult};
use crate::input::KeyInput;

/// The carousel instances the landing page ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CarouselKind {
    /// Member reviews, three across on wide screens
    Reviews,
    /// Hosted trips section, four across on wide screens
    HostedTrips,
    /// Single trip inside the hero card
    HeroTrip,
}

impl CarouselKind {
    pub fn name(&self) -> &'static str {
        match self {
            CarouselKind::Reviews => "reviews",
            CarouselKind::HostedTrips => "hosted-trips",
            CarouselKind::HeroTrip => "hero-trip",
        }
    }

    /// Class names forming this carousel's markup contract.
    pub fn classes(&self) -> CarouselClasses {
        match self {
            CarouselKind::Reviews => CarouselClasses {
                root: "pp-review-carousel",
                viewport: "pp-review-viewport",
                track: "pp-review-track",
                button: "pp-carousel-btn",
            },
            CarouselKind::HostedTrips => CarouselClasses {
                root: "pp-trip-carousel hosted-trips",
                viewport: "pp-trip-viewport",
                track: "pp-trip-track",
                button: "pp-trip-btn",
            },
            CarouselKind::HeroTrip => CarouselClasses {
                root: "pp-trip-carousel",
                viewport: "pp-trip-viewport",
                track: "pp-trip-track",
                button: "pp-trip-btn",
            },
        }
    }
}

/// Class names of a carousel's structural elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselClasses {
    pub root: &'static str,
    pub viewport: &'static str,
    pub track: &'static str,
    pub button: &'static str,
}

/// How the track is moved to show a given leading card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Positioning {
    /// Native smooth scroll of the viewport to the card's offset
    Scroll,
    /// `translateX` by whole card widths plus the track gap, in pixels
    TranslatePitch,
    /// `translateX` by 100% per card (each card fills the viewport)
    TranslatePercent,
}

/// Viewport width ceiling mapped to a visible card count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Widths up to and including this value use `visible`
    pub max_width: u32,
    pub visible: usize,
}

/// Maps a viewport width to the number of cards shown at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleCountRule {
    /// Ascending by `max_width`; first match wins
    pub breakpoints: Vec<Breakpoint>,
    /// Count used above the last breakpoint
    pub wide_visible: usize,
}

impl VisibleCountRule {
    /// Standard responsive rule: 1 card up to 640px, 2 up to 900px.
    pub fn responsive(wide_visible: usize) -> Self {
        Self {
            breakpoints: vec![
                Breakpoint {
                    max_width: 640,
                    visible: 1,
                },
                Breakpoint {
                    max_width: 900,
                    visible: 2,
                },
            ],
            wide_visible,
        }
    }

    /// Always exactly `visible` cards.
    pub fn fixed(visible: usize) -> Self {
        Self {
            breakpoints: Vec::new(),
            wide_visible: visible,
        }
    }

    pub fn visible_for(&self, viewport_width: u32) -> usize {
        self.breakpoints
            .iter()
            .find(|bp| viewport_width <= bp.max_width)
            .map(|bp| bp.visible)
            .unwrap_or(self.wide_visible)
    }

    pub(crate) fn validate(&self) -> LandingResult<()> {
        if self.wide_visible == 0 || self.breakpoints.iter().any(|bp| bp.visible == 0) {
            return Err(LandingError::InvalidConfig(
                "visible card counts must be at least 1".to_string(),
            ));
        }
        if self
            .breakpoints
            .windows(2)
            .any(|w| w[0].max_width >= w[1].max_width)
        {
            return Err(LandingError::InvalidConfig(
                "carousel breakpoints must be strictly ascending".to_string(),
            ));
        }
        Ok(())
    }
}


/// Per-instance carousel configuration.
///
/// There is no generic default: each instance starts from its own preset
/// and JSON only overrides fields on top of it (see [`CarouselOverride`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    pub visible: VisibleCountRule,
    pub positioning: Positioning,
    /// Arrow keys move the carousel while it has focus
    pub keyboard: bool,
    /// Quiet period before a resize is acted on
    pub resize_debounce_ms: u64,
    /// Delay before the first positioning, letting layout settle
    pub initial_delay_ms: u64,
}

impl CarouselConfig {
    pub fn reviews() -> Self {
        Self {
            visible: VisibleCountRule::responsive(3),
            positioning: Positioning::Scroll,
            keyboard: false,
            resize_debounce_ms: 120,
            initial_delay_ms: 0,
        }
    }

    pub fn hosted_trips() -> Self {
        Self {
            visible: VisibleCountRule::responsive(4),
            positioning: Positioning::TranslatePitch,
            keyboard: false,
            resize_debounce_ms: 120,
            initial_delay_ms: 50,
        }
    }

    pub fn hero_trip() -> Self {
        Self {
            visible: VisibleCountRule::fixed(1),
            positioning: Positioning::TranslatePercent,
            keyboard: true,
            resize_debounce_ms: 80,
            initial_delay_ms: 0,
        }
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }
}

/// Partial [`VisibleCountRule`]; absent fields keep the preset's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VisibleCountOverride {
    pub breakpoints: Option<Vec<Breakpoint>>,
    pub wide_visible: Option<usize>,
}

impl VisibleCountOverride {
    pub fn apply_to(self, mut rule: VisibleCountRule) -> VisibleCountRule {
        if let Some(breakpoints) = self.breakpoints {
            rule.breakpoints = breakpoints;
        }
        if let Some(wide_visible) = self.wide_visible {
            rule.wide_visible = wide_visible;
        }
        rule
    }
}

/// Partial [`CarouselConfig`] as it appears in JSON.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselOverride {
    pub visible: Option<VisibleCountOverride>,
    pub positioning: Option<Positioning>,
    pub keyboard: Option<bool>,
    pub resize_debounce_ms: Option<u64>,
    pub initial_delay_ms: Option<u64>,
}

impl CarouselOverride {
    /// Layer the present fields over an instance preset.
    pub fn apply_to(self, mut config: CarouselConfig) -> CarouselConfig {
        if let Some(visible) = self.visible {
            config.visible = visible.apply_to(config.visible);
        }
        if let Some(positioning) = self.positioning {
            config.positioning = positioning;
        }
        if let Some(keyboard) = self.keyboard {
            config.keyboard = keyboard;
        }
        if let Some(ms) = self.resize_debounce_ms {
            config.resize_debounce_ms = ms;
        }
        if let Some(ms) = self.initial_delay_ms {
            config.initial_delay_ms = ms;
        }
        config
    }
}

/// Disabled state of the prev/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonStates {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// Layout measurements the host reads from the rendered track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardMetrics {
    /// `offsetLeft` of the track element
    pub track_offset_left: f64,
    /// `offsetLeft` of every card, in card order
    pub card_offsets: Vec<f64>,
    /// Rendered width of the first card
    pub card_width: f64,
    /// Computed `gap` of the track
    pub gap: f64,
}

/// A pending repositioning of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackMove {
    pub index: usize,
    pub positioning: Positioning,
}

impl TrackMove {
    /// Whether resolving this move needs layout measurements.
    pub fn needs_metrics(&self) -> bool {
        !matches!(self.positioning, Positioning::TranslatePercent)
    }

    /// Concrete style change for this move.
    ///
    /// Returns `None` for a scroll move whose card has no measured offset.
    pub fn resolve(&self, metrics: &CardMetrics) -> Option<TrackStyle> {
        match self.positioning {
            Positioning::Scroll => {
                let card_left = metrics.card_offsets.get(self.index)?;
                Some(TrackStyle::ScrollLeft(card_left - metrics.track_offset_left))
            }
            Positioning::TranslatePitch => {
                let offset = self.index as f64 * (metrics.card_width + metrics.gap);
                Some(TrackStyle::Transform(format!("translateX(-{}px)", offset)))
            }
            Positioning::TranslatePercent => Some(TrackStyle::Transform(format!(
                "translateX(-{}%)",
                self.index * 100
            ))),
        }
    }
}

/// Style change to apply to the viewport or track.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackStyle {
    /// Smooth-scroll the viewport to this left offset
    ScrollLeft(f64),
    /// Set the track's `transform` to this value
    Transform(String),
}

/// Index state of one carousel instance.
#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    card_count: usize,
    index: usize,
    visible: usize,
}

impl Carousel {
    /// Create a carousel over `card_count` cards at the given viewport width.
    ///
    /// A carousel with no cards has nothing to drive and reports
    /// [`LandingError::MissingElement`].
    pub fn new(
        config: CarouselConfig,
        card_count: usize,
        viewport_width: u32,
    ) -> LandingResult<Self> {
        if card_count == 0 {
            return Err(LandingError::MissingElement("carousel cards".to_string()));
        }
        let visible = config.visible.visible_for(viewport_width);
        Ok(Self {
            config,
            card_count,
            index: 0,
            visible,
        })
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Largest valid leading index for the current visible count.
    pub fn max_index(&self) -> usize {
        self.card_count.saturating_sub(self.visible)
    }

    /// Advance by one card. Returns the move, or `None` when already at the end.
    pub fn next(&mut self) -> Option<TrackMove> {
        let target = (self.index + 1).min(self.max_index());
        self.step_to(target)
    }

    /// Retreat by one card. Returns the move, or `None` when already at 0.
    pub fn prev(&mut self) -> Option<TrackMove> {
        let target = self.index.saturating_sub(1);
        self.step_to(target)
    }

    fn step_to(&mut self, target: usize) -> Option<TrackMove> {
        if target == self.index {
            return None;
        }
        self.scroll_to_index(target)
    }

    /// Make card `i` the leading visible card.
    ///
    /// Indexes without a card are ignored. Indexes past the current maximum
    /// are clamped.
    pub fn scroll_to_index(&mut self, i: usize) -> Option<TrackMove> {
        if i >= self.card_count {
            return None;
        }
        self.index = i.min(self.max_index());
        tracing::debug!(
            carousel_index = self.index,
            visible = self.visible,
            "carousel positioned"
        );
        Some(self.track_move())
    }

    /// Recompute the visible count for a new viewport width.
    ///
    /// Clamps the index to the new maximum and always repositions.
    pub fn resize(&mut self, viewport_width: u32) -> TrackMove {
        self.visible = self.config.visible.visible_for(viewport_width);
        let max = self.max_index();
        if self.index > max {
            self.index = max;
        }
        self.track_move()
    }

    /// Arrow-key navigation, when enabled for this instance.
    pub fn handle_key(&mut self, key: KeyInput) -> Option<TrackMove> {
        if !self.config.keyboard {
            return None;
        }
        match key {
            KeyInput::ArrowLeft => self.prev(),
            KeyInput::ArrowRight => self.next(),
            _ => None,
        }
    }

    /// The move that shows the current index.
    pub fn track_move(&self) -> TrackMove {
        TrackMove {
            index: self.index,
            positioning: self.config.positioning,
        }
    }

    pub fn buttons(&self) -> ButtonStates {
        ButtonStates {
            prev_disabled: self.index == 0,
            next_disabled: self.index >= self.max_index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reviews(cards: usize, width: u32) -> Carousel {
        Carousel::new(CarouselConfig::reviews(), cards, width).unwrap()
    }

    #[test]
    fn visible_count_breakpoints() {
        let rule = VisibleCountRule::responsive(4);
        assert_eq!(rule.visible_for(320), 1);
        assert_eq!(rule.visible_for(640), 1);
        assert_eq!(rule.visible_for(641), 2);
        assert_eq!(rule.visible_for(900), 2);
        assert_eq!(rule.visible_for(901), 4);
        assert_eq!(VisibleCountRule::fixed(1).visible_for(1920), 1);
    }

    #[test]
    fn empty_carousel_is_missing_element() {
        let err = Carousel::new(CarouselConfig::reviews(), 0, 1200).unwrap_err();
        assert!(err.is_missing_element());
    }

    #[test]
    fn prev_at_start_is_noop() {
        let mut c = reviews(6, 1200);
        assert!(c.prev().is_none());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn next_clamps_at_max() {
        let mut c = reviews(5, 1200);
        assert_eq!(c.max_index(), 2);
        c.next();
        c.next();
        assert_eq!(c.index(), 2);
        assert!(c.next().is_none());
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn fewer_cards_than_visible() {
        let mut c = reviews(2, 1200);
        assert_eq!(c.max_index(), 0);
        assert!(c.next().is_none());
        assert_eq!(
            c.buttons(),
            ButtonStates {
                prev_disabled: true,
                next_disabled: true
            }
        );
    }

    #[test]
    fn resize_clamps_index() {
        let mut c = reviews(6, 500);
        c.scroll_to_index(5);
        assert_eq!(c.index(), 5);
        let mv = c.resize(1200);
        assert_eq!(c.visible(), 3);
        assert_eq!(c.index(), 3);
        assert_eq!(mv.index, 3);
    }

    #[test]
    fn resize_keeps_valid_index() {
        let mut c = reviews(6, 1200);
        c.next();
        c.resize(500);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn scroll_to_missing_card_ignored() {
        let mut c = reviews(3, 500);
        assert!(c.scroll_to_index(3).is_none());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn buttons_reflect_position() {
        let mut c = reviews(4, 500);
        assert!(c.buttons().prev_disabled);
        assert!(!c.buttons().next_disabled);
        c.scroll_to_index(3);
        assert!(!c.buttons().prev_disabled);
        assert!(c.buttons().next_disabled);
    }

    #[test]
    fn hero_trip_keyboard() {
        let mut c = Carousel::new(CarouselConfig::hero_trip(), 3, 1400).unwrap();
        assert_eq!(c.max_index(), 2);
        c.handle_key(KeyInput::ArrowRight);
        c.handle_key(KeyInput::ArrowRight);
        c.handle_key(KeyInput::ArrowRight);
        assert_eq!(c.index(), 2);
        c.handle_key(KeyInput::ArrowLeft);
        assert_eq!(c.index(), 1);
        assert!(c.handle_key(KeyInput::Enter).is_none());
    }

    #[test]
    fn keyboard_disabled_for_reviews() {
        let mut c = reviews(6, 500);
        assert!(c.handle_key(KeyInput::ArrowRight).is_none());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn resolve_scroll_uses_card_offset() {
        let metrics = CardMetrics {
            track_offset_left: 10.0,
            card_offsets: vec![10.0, 330.0, 650.0],
            card_width: 300.0,
            gap: 20.0,
        };
        let mv = TrackMove {
            index: 2,
            positioning: Positioning::Scroll,
        };
        assert_eq!(mv.resolve(&metrics), Some(TrackStyle::ScrollLeft(640.0)));

        let missing = TrackMove {
            index: 5,
            positioning: Positioning::Scroll,
        };
        assert_eq!(missing.resolve(&metrics), None);
    }

    #[test]
    fn resolve_translate_pitch() {
        let metrics = CardMetrics {
            card_width: 280.0,
            gap: 24.0,
            ..CardMetrics::default()
        };
        let mv = TrackMove {
            index: 2,
            positioning: Positioning::TranslatePitch,
        };
        assert_eq!(
            mv.resolve(&metrics),
            Some(TrackStyle::Transform("translateX(-608px)".to_string()))
        );
    }

    #[test]
    fn resolve_translate_percent_needs_no_metrics() {
        let mv = TrackMove {
            index: 3,
            positioning: Positioning::TranslatePercent,
        };
        assert!(!mv.needs_metrics());
        assert_eq!(
            mv.resolve(&CardMetrics::default()),
            Some(TrackStyle::Transform("translateX(-300%)".to_string()))
        );
    }

    #[test]
    fn breakpoints_must_ascend() {
        let rule = VisibleCountRule {
            breakpoints: vec![
                Breakpoint {
                    max_width: 900,
                    visible: 2,
                },
                Breakpoint {
                    max_width: 640,
                    visible: 1,
                },
            ],
            wide_visible: 3,
        };
        assert!(rule.validate().is_err());
        assert!(VisibleCountRule::fixed(0).validate().is_err());
        assert!(VisibleCountRule::responsive(3).validate().is_ok());
    }
}

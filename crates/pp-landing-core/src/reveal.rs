//! Scroll-triggered reveal animations.
//!
//! Each observed element moves through a one-shot state machine:
//!
//! ```text
//! Unrevealed --(intersecting, ratio >= threshold)--> Revealed
//! ```
//!
//! `Revealed` is terminal: the host stops observing and later intersection
//! reports are ignored. A stagger container additionally cascades its
//! children in with a per-child delay, see [`StaggerPlan`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dom::InlineStyle;

pub const REVEAL_CLASS: &str = "reveal";
pub const STAGGER_CLASS: &str = "stagger";
pub const VISIBLE_CLASS: &str = "visible";
pub const REVEAL_CHILD_CLASS: &str = "reveal-child";

/// Gap between stagger children when the container sets none.
pub const DEFAULT_STAGGER_GAP_MS: u32 = 120;
/// Lead-in before the first child is flagged visible, so the transition
/// delays are registered first.
pub const STAGGER_LEAD_IN_MS: u32 = 20;

/// One intersection observer callback entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionReport {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionReport {
    pub fn entering(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            ratio,
        }
    }

    pub fn leaving() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// What kind of element is being revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// A plain `.reveal` element with an optional transition delay
    Single { delay_ms: u32 },
    /// A `.reveal.stagger` container whose children cascade in
    Stagger { gap_ms: u32, child_count: usize },
}

/// Changes to apply when an element is revealed. The host stops observing
/// the element once it has applied these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealEffect {
    /// Add `visible` to the element, with this inline style first
    Single { style: InlineStyle },
    /// Add `visible` to the container and run the children's plan
    Stagger(StaggerPlan),
}

/// Reveal state of one observed element.
#[derive(Debug, Clone)]
pub struct RevealTarget {
    mode: RevealMode,
    threshold: f64,
    lead_in_ms: u32,
    revealed: bool,
}

impl RevealTarget {
    pub fn new(mode: RevealMode, threshold: f64) -> Self {
        Self {
            mode,
            threshold,
            lead_in_ms: STAGGER_LEAD_IN_MS,
            revealed: false,
        }
    }

    pub fn with_lead_in(mut self, lead_in_ms: u32) -> Self {
        self.lead_in_ms = lead_in_ms;
        self
    }

    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed an intersection report. Returns the effect on the first
    /// qualifying report only.
    pub fn observe(&mut self, report: &IntersectionReport) -> Option<RevealEffect> {
        if self.revealed || !report.is_intersecting || report.ratio < self.threshold {
            return None;
        }
        self.revealed = true;

        let effect = match self.mode {
            RevealMode::Single { delay_ms } => {
                let mut style = InlineStyle::new();
                if delay_ms > 0 {
                    style.set("transition-delay", format!("{}ms", delay_ms));
                }
                RevealEffect::Single { style }
            }
            RevealMode::Stagger {
                gap_ms,
                child_count,
            } => RevealEffect::Stagger(StaggerPlan::new(child_count, gap_ms, self.lead_in_ms)),
        };
        tracing::debug!(mode = ?self.mode, ratio = report.ratio, "element revealed");
        Some(effect)
    }
}

/// Timing for one stagger child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerStep {
    /// Child position in document order
    pub index: usize,
    /// CSS `transition-delay` applied immediately
    pub transition_delay_ms: u32,
    /// When `visible` is added, measured from the container's reveal
    pub visible_at_ms: u32,
}

impl StaggerStep {
    pub fn visible_at(&self) -> Duration {
        Duration::from_millis(u64::from(self.visible_at_ms))
    }

    /// Inline style for the child.
    pub fn style(&self) -> InlineStyle {
        let mut style = InlineStyle::new();
        style.set("transition-delay", format!("{}ms", self.transition_delay_ms));
        style
    }
}

/// Cascade schedule for a stagger container's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaggerPlan {
    steps: Vec<StaggerStep>,
}

impl StaggerPlan {
    /// Child K gets delay `K * gap` and turns visible at `lead_in + K * gap`.
    pub fn new(child_count: usize, gap_ms: u32, lead_in_ms: u32) -> Self {
        let steps = (0..child_count)
            .map(|index| {
                let delay = (index as u32).saturating_mul(gap_ms);
                StaggerStep {
                    index,
                    transition_delay_ms: delay,
                    visible_at_ms: lead_in_ms.saturating_add(delay),
                }
            })
            .collect();
        Self { steps }
    }

    pub fn steps(&self) -> &[StaggerStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Time until the last child turns visible.
    pub fn total_duration(&self) -> Duration {
        self.steps
            .last()
            .map(StaggerStep::visible_at)
            .unwrap_or_default()
    }

    /// Children due by `elapsed_ms` after the reveal.
    pub fn due_by(&self, elapsed_ms: u32) -> impl Iterator<Item = &StaggerStep> {
        self.steps
            .iter()
            .filter(move |s| s.visible_at_ms <= elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_does_not_reveal() {
        let mut target = RevealTarget::new(RevealMode::Single { delay_ms: 0 }, 0.15);
        assert!(target.observe(&IntersectionReport::entering(0.1)).is_none());
        assert!(target.observe(&IntersectionReport::leaving()).is_none());
        assert!(!target.is_revealed());
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut target = RevealTarget::new(RevealMode::Single { delay_ms: 0 }, 0.15);
        assert!(target.observe(&IntersectionReport::entering(0.5)).is_some());
        assert!(target.is_revealed());
        assert!(target.observe(&IntersectionReport::leaving()).is_none());
        assert!(target.observe(&IntersectionReport::entering(1.0)).is_none());
        assert!(target.is_revealed());
    }

    #[test]
    fn single_reveal_delay_sets_transition() {
        let mut target = RevealTarget::new(RevealMode::Single { delay_ms: 200 }, 0.15);
        match target.observe(&IntersectionReport::entering(0.2)) {
            Some(RevealEffect::Single { style }) => {
                assert_eq!(style.get("transition-delay"), Some("200ms"));
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn zero_delay_leaves_style_empty() {
        let mut target = RevealTarget::new(RevealMode::Single { delay_ms: 0 }, 0.15);
        match target.observe(&IntersectionReport::entering(0.2)) {
            Some(RevealEffect::Single { style }) => assert!(style.is_empty()),
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn stagger_plan_timing() {
        let plan = StaggerPlan::new(4, 120, 20);
        let at: Vec<u32> = plan.steps().iter().map(|s| s.visible_at_ms).collect();
        assert_eq!(at, vec![20, 140, 260, 380]);
        let delays: Vec<u32> = plan.steps().iter().map(|s| s.transition_delay_ms).collect();
        assert_eq!(delays, vec![0, 120, 240, 360]);
        assert_eq!(plan.total_duration(), Duration::from_millis(380));
        assert_eq!(plan.due_by(150).count(), 2);
        assert_eq!(plan.steps()[2].style().to_string(), "transition-delay: 240ms;");
    }

    #[test]
    fn empty_stagger_group() {
        let plan = StaggerPlan::new(0, 120, 20);
        assert!(plan.is_empty());
        assert_eq!(plan.total_duration(), Duration::ZERO);
    }

    #[test]
    fn stagger_target_produces_plan() {
        let mut target = RevealTarget::new(
            RevealMode::Stagger {
                gap_ms: 80,
                child_count: 3,
            },
            0.2,
        );
        match target.observe(&IntersectionReport::entering(0.25)) {
            Some(RevealEffect::Stagger(plan)) => {
                assert_eq!(plan.len(), 3);
                assert_eq!(plan.steps()[2].visible_at_ms, 180);
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }
}

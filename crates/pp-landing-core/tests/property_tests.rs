//! Property-based tests for the carousel and toggle state machines
//!
//! Uses proptest to verify the invariants hold under arbitrary input.

use proptest::prelude::*;
use pp_landing_core::{
    Carousel, CarouselConfig, IntersectionReport, KeyInput, RevealMode, RevealTarget, ThemeState,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Operations a visitor can perform on a carousel
#[derive(Debug, Clone)]
enum CarouselOp {
    Next,
    Prev,
    Resize(u32),
    Jump(usize),
    Key(KeyInput),
}

fn config_strategy() -> impl Strategy<Value = CarouselConfig> {
    prop_oneof![
        Just(CarouselConfig::reviews()),
        Just(CarouselConfig::hosted_trips()),
        Just(CarouselConfig::hero_trip()),
    ]
}

fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        Just(KeyInput::ArrowLeft),
        Just(KeyInput::ArrowRight),
        Just(KeyInput::Enter),
    ]
}

fn ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<CarouselOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => Just(CarouselOp::Next),
            3 => Just(CarouselOp::Prev),
            2 => (200u32..2000).prop_map(CarouselOp::Resize),
            1 => (0usize..20).prop_map(CarouselOp::Jump),
            1 => key_strategy().prop_map(CarouselOp::Key),
        ],
        0..max_ops,
    )
}

fn assert_invariant(c: &Carousel) -> Result<(), TestCaseError> {
    let max = c.card_count().saturating_sub(c.visible());
    prop_assert!(c.index() <= max, "index {} > max {}", c.index(), max);
    prop_assert_eq!(c.buttons().prev_disabled, c.index() == 0);
    prop_assert_eq!(c.buttons().next_disabled, c.index() >= max);
    Ok(())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The index stays within [0, max(0, cards - visible)] after any sequence
    #[test]
    fn index_always_in_bounds(
        config in config_strategy(),
        cards in 1usize..12,
        width in 200u32..2000,
        ops in ops_strategy(60)
    ) {
        let mut c = Carousel::new(config, cards, width).unwrap();
        assert_invariant(&c)?;
        for op in ops {
            match op {
                CarouselOp::Next => { c.next(); }
                CarouselOp::Prev => { c.prev(); }
                CarouselOp::Resize(w) => { c.resize(w); }
                CarouselOp::Jump(i) => { c.scroll_to_index(i); }
                CarouselOp::Key(k) => { c.handle_key(k); }
            }
            assert_invariant(&c)?;
        }
    }

    /// prev at index 0 and next at the maximum leave the index unchanged
    #[test]
    fn boundary_moves_are_noops(
        config in config_strategy(),
        cards in 1usize..12,
        width in 200u32..2000
    ) {
        let mut c = Carousel::new(config, cards, width).unwrap();
        prop_assert!(c.prev().is_none());
        prop_assert_eq!(c.index(), 0);

        let max = c.max_index();
        c.scroll_to_index(max);
        prop_assert!(c.next().is_none());
        prop_assert_eq!(c.index(), max);
    }

    /// Resizing never leaves the index past the new maximum
    #[test]
    fn resize_clamps(
        cards in 1usize..12,
        start in 200u32..2000,
        end in 200u32..2000,
        jump in 0usize..12
    ) {
        let mut c = Carousel::new(CarouselConfig::reviews(), cards, start).unwrap();
        c.scroll_to_index(jump);
        let mv = c.resize(end);
        prop_assert!(c.index() <= c.max_index());
        prop_assert_eq!(mv.index, c.index());
    }

    /// Toggle is an involution: toggle(toggle(x)) == x
    #[test]
    fn theme_toggle_is_involution(toggles in 0usize..10) {
        let mut theme = ThemeState::new();
        for _ in 0..toggles {
            theme.toggle();
        }
        let before = theme;
        theme.toggle();
        theme.toggle();
        prop_assert_eq!(theme, before);
        prop_assert_eq!(theme.icon(), before.icon());
    }

    /// Once revealed, no report sequence produces a second effect
    #[test]
    fn reveal_fires_at_most_once(
        reports in prop::collection::vec((any::<bool>(), 0.0f64..=1.0), 0..30)
    ) {
        let mut target = RevealTarget::new(RevealMode::Single { delay_ms: 0 }, 0.15);
        let mut effects = 0;
        for (is_intersecting, ratio) in reports {
            if target.observe(&IntersectionReport { is_intersecting, ratio }).is_some() {
                effects += 1;
            }
        }
        prop_assert!(effects <= 1);
        prop_assert_eq!(effects == 1, target.is_revealed());
    }
}

//! Integration tests for the vibe ranking engine.
//!
//! Covers the traveler scenarios end to end and checks the ordering and
//! boost properties over generated inputs.

use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use proptest::prelude::*;

use terminalplus_core::category::is_permutation;
use terminalplus_core::{
    blend, boosts, evaluate, kendall_tau_distance, merge, select_profile, Category, CategoryOrder,
    ContextEngine, ContextSnapshot, UrgencyTier, UrgencyWeights,
};

fn at(hour: u32, minute: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2025, 9, 16, hour, minute, 0)
        .unwrap()
}

fn permutation() -> impl Strategy<Value = CategoryOrder> {
    Just(Category::ALL.to_vec())
        .prop_shuffle()
        .prop_map(|v| -> CategoryOrder { v.try_into().unwrap() })
}

fn tier() -> impl Strategy<Value = UrgencyTier> {
    prop::sample::select(UrgencyTier::ALL.to_vec())
}

#[test]
fn test_morning_arrival_without_flight() {
    let ctx = evaluate(at(8, 0), None);
    assert_eq!(
        ctx.priority,
        [Category::Comfort, Category::Chill, Category::Refuel]
    );
    assert_eq!(ctx.tier, UrgencyTier::Normal);
    assert!(!ctx.is_urgent);
}

#[test]
fn test_morning_rush_boosts() {
    let now = at(8, 0);
    let ctx = evaluate(now, Some(now + Duration::minutes(10)));
    assert_eq!(ctx.tier, UrgencyTier::Rush);

    let profile = boosts(ctx.tier, None);
    assert_eq!(profile.get(Category::Quick), 2.0);
    assert_eq!(profile.get(Category::Refuel), 1.5);
    assert_eq!(profile.get(Category::Discover), 0.5);
}

#[test]
fn test_delayed_afternoon_flight() {
    let now = at(15, 0);
    let snapshot = ContextSnapshot::new(now, Some(now + Duration::minutes(200)));
    let engine = ContextEngine::new();

    let ctx = engine.evaluate(&snapshot);
    assert_eq!(ctx.tier, UrgencyTier::Extended);
    assert_eq!(engine.boosts(&snapshot).get(Category::Discover), 2.0);

    let quick = ctx.order.iter().position(|c| *c == Category::Quick).unwrap();
    let discover = ctx.order.iter().position(|c| *c == Category::Discover).unwrap();
    let comfort = ctx.order.iter().position(|c| *c == Category::Comfort).unwrap();
    assert!(discover < quick);
    assert!(comfort < quick);
}

#[test]
fn test_missed_boarding_does_not_fail() {
    let now = at(21, 30);
    let ctx = evaluate(now, Some(now - Duration::minutes(5)));
    assert_eq!(ctx.tier, UrgencyTier::Imminent);
    assert!(ctx.boarding_closed);
    assert!(is_permutation(&ctx.order));
}

#[test]
fn test_late_night_profile_wraps_midnight() {
    for hour in [23, 0, 2, 4] {
        let ctx = evaluate(at(hour, 15), None);
        assert_eq!(ctx.message, "After midnight crew - I've got you covered.");
        assert_eq!(ctx.tone, "Supportive");
    }
}

#[test]
fn test_order_tightens_as_boarding_approaches() {
    // Same base order and urgency order, only the weight changes.
    let base = select_profile(at(18, 0)).base_order;
    let urgency = UrgencyTier::Imminent.urgency_order();
    let weights = UrgencyWeights::default();
    let distances: Vec<usize> = [
        weights.extended,
        weights.normal,
        weights.soon,
        weights.imminent,
    ]
    .into_iter()
    .map(|w| kendall_tau_distance(&blend(&base, urgency, w), urgency))
    .collect();

    assert!(distances.windows(2).all(|w| w[1] <= w[0]), "{distances:?}");
    assert!(distances[3] < distances[0]);
}

proptest! {
    #[test]
    fn prop_merge_is_a_permutation(base in permutation(), tier in tier()) {
        let merged = merge(&base, tier);
        prop_assert!(is_permutation(&merged));
    }

    #[test]
    fn prop_blend_is_monotonic_in_weight(base in permutation(), urgency in permutation()) {
        let mut previous = usize::MAX;
        for w in [0.3, 0.5, 0.7, 0.9] {
            let d = kendall_tau_distance(&blend(&base, &urgency, w), &urgency);
            prop_assert!(d <= previous);
            previous = d;
        }
    }

    #[test]
    fn prop_boosts_are_complete_and_positive(
        tier in tier(),
        hour in proptest::option::of(0u32..24),
    ) {
        let profile = boosts(tier, hour);
        prop_assert_eq!(profile.iter().count(), 7);
        for (_, factor) in profile.iter() {
            prop_assert!(factor > 0.0);
        }
    }

    #[test]
    fn prop_no_boarding_is_identity(now_ms in 0i64..4_102_444_800_000) {
        let utc = FixedOffset::east_opt(0).unwrap();
        let snapshot = ContextSnapshot::from_epoch_millis(now_ms, None, utc).unwrap();
        let ctx = ContextEngine::new().evaluate(&snapshot);
        prop_assert_eq!(ctx.order, select_profile(snapshot.now).base_order);
        prop_assert_eq!(&ctx.priority[..], &ctx.order[..3]);
    }

    #[test]
    fn prop_evaluate_is_deterministic(
        now_ms in 0i64..4_102_444_800_000,
        offset_ms in -86_400_000i64..86_400_000,
    ) {
        let utc = FixedOffset::east_opt(0).unwrap();
        let deadline_ms = Some(now_ms + offset_ms);
        let snapshot = ContextSnapshot::from_epoch_millis(now_ms, deadline_ms, utc).unwrap();
        let engine = ContextEngine::new();
        let first = engine.evaluate(&snapshot);
        let second = engine.evaluate(&snapshot);
        prop_assert_eq!(&first, &second);
        prop_assert!(is_permutation(&first.order));
        let urgent = matches!(first.tier, UrgencyTier::Rush | UrgencyTier::Imminent);
        prop_assert_eq!(first.is_urgent, urgent);
    }
}

//! Weighted rank-position blend of two category orders.
//!
//! Each category gets a score from its position in the time-of-day order and
//! its position in the urgency order:
//!
//! ```text
//! score(c) = time_pos(c) * (1 - w) + urgency_pos(c) * w
//! ```
//!
//! Lower scores rank first. Because the score of every pair is linear in `w`,
//! a pair can only flip once as `w` grows, and it flips towards the urgency
//! order. Raising the weight never moves the blend further from the urgency
//! order.

use crate::boarding::UrgencyTier;
use crate::category::{position_in, Category, CategoryOrder, CATEGORY_COUNT};
use crate::policy::UrgencyWeights;

/// Blend `base_order` with the tier's urgency order using default weights.
pub fn merge(base_order: &CategoryOrder, tier: UrgencyTier) -> CategoryOrder {
    merge_with(&UrgencyWeights::default(), base_order, tier)
}

/// Blend `base_order` with the tier's urgency order using `weights`.
pub fn merge_with(
    weights: &UrgencyWeights,
    base_order: &CategoryOrder,
    tier: UrgencyTier,
) -> CategoryOrder {
    blend(base_order, tier.urgency_order(), weights.for_tier(tier))
}

/// Blend two full orders with the given urgency weight.
///
/// Ties keep `base_order` sequence (stable sort over `base_order`). Both
/// inputs are full permutations, so there is nothing to fall back to from the
/// urgency order.
pub fn blend(
    base_order: &CategoryOrder,
    urgency_order: &CategoryOrder,
    urgency_weight: f64,
) -> CategoryOrder {
    let time_weight = 1.0 - urgency_weight;

    let mut scored: Vec<(Category, f64)> = base_order
        .iter()
        .enumerate()
        .map(|(time_pos, &category)| {
            let urgency_pos = position_in(urgency_order, category);
            let score = time_pos as f64 * time_weight + urgency_pos as f64 * urgency_weight;
            (category, score)
        })
        .collect();

    scored.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut merged = *base_order;
    for (slot, (category, _)) in merged.iter_mut().zip(scored) {
        *slot = category;
    }
    merged
}

/// Number of category pairs ranked in opposite order by `a` and `b`.
///
/// 0 for identical orders, 21 for exact reversals.
pub fn kendall_tau_distance(a: &CategoryOrder, b: &CategoryOrder) -> usize {
    let mut discordant = 0;
    for i in 0..CATEGORY_COUNT {
        for j in (i + 1)..CATEGORY_COUNT {
            // a ranks a[i] ahead of a[j]; count it if b disagrees
            if position_in(b, a[i]) > position_in(b, a[j]) {
                discordant += 1;
            }
        }
    }
    discordant
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::is_permutation;
    use crate::day_part::DayPart;

    use Category::{Chill, Comfort, Discover, Quick, Refuel, Shop, Work};

    #[test]
    fn always_a_permutation() {
        for part in DayPart::ALL {
            for tier in UrgencyTier::ALL {
                let merged = merge(&part.profile().base_order, tier);
                assert!(is_permutation(&merged), "{part} / {tier}");
            }
        }
    }

    #[test]
    fn extended_afternoon_keeps_discover_first() {
        let base = DayPart::Afternoon.profile().base_order;
        let merged = merge(&base, UrgencyTier::Extended);
        assert_eq!(
            merged,
            [Discover, Refuel, Shop, Chill, Comfort, Quick, Work]
        );
    }

    #[test]
    fn rush_is_blended_not_overridden() {
        let base = DayPart::Morning.profile().base_order;
        let merged = merge(&base, UrgencyTier::Rush);
        // quick: 3*0.1 + 0*0.9 = 0.3, refuel: 2*0.1 + 1*0.9 = 1.1, chill: 0.1 + 1.8 = 1.9
        assert_eq!(&merged[..3], &[Quick, Refuel, Chill]);
        assert!(is_permutation(&merged));
    }

    #[test]
    fn weight_extremes_reproduce_inputs() {
        let base = DayPart::Evening.profile().base_order;
        let urgency = UrgencyTier::Soon.urgency_order();
        assert_eq!(blend(&base, urgency, 0.0), base);
        assert_eq!(blend(&base, urgency, 1.0), *urgency);
    }

    #[test]
    fn ties_follow_base_order() {
        // base puts Work at 1 and Comfort at 2; urgency swaps them. At w = 0.5
        // both score 1.5 and base order wins.
        let base = [Refuel, Work, Comfort, Discover, Chill, Shop, Quick];
        let urgency = [Refuel, Comfort, Work, Discover, Chill, Shop, Quick];
        let merged = blend(&base, &urgency, 0.5);
        assert_eq!(merged, base);
    }

    #[test]
    fn distance_grows_monotonically_with_weight() {
        for part in DayPart::ALL {
            let base = part.profile().base_order;
            for tier in UrgencyTier::ALL {
                let urgency = tier.urgency_order();
                let mut previous = usize::MAX;
                for w in [0.3, 0.5, 0.7, 0.9] {
                    let d = kendall_tau_distance(&blend(&base, urgency, w), urgency);
                    assert!(d <= previous, "{part} / {tier} at {w}");
                    previous = d;
                }
            }
        }
    }

    #[test]
    fn kendall_tau_bounds() {
        let forward = Category::ALL;
        let mut reversed = Category::ALL;
        reversed.reverse();
        assert_eq!(kendall_tau_distance(&forward, &forward), 0);
        assert_eq!(kendall_tau_distance(&forward, &reversed), 21);

        let mut one_swap = Category::ALL;
        one_swap.swap(0, 1);
        assert_eq!(kendall_tau_distance(&forward, &one_swap), 1);
    }

    #[test]
    fn custom_weights_are_honoured() {
        let weights = UrgencyWeights {
            extended: 1.0,
            ..UrgencyWeights::default()
        };
        let base = DayPart::Midday.profile().base_order;
        let merged = merge_with(&weights, &base, UrgencyTier::Extended);
        assert_eq!(merged, *UrgencyTier::Extended.urgency_order());
    }
}

//! Per-category relevance multipliers.
//!
//! A boost profile scales the relevance score of a category's amenities
//! independently of where the category sits in the ranked order. Tier and
//! hour adjustments stack multiplicatively:
//!
//! ```text
//! boost(c) = 1.0 × tier_factor(c) × hour_factor(c)
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::boarding::UrgencyTier;
use crate::category::{Category, CATEGORY_COUNT};
use crate::policy::{CategoryFactors, RankingPolicy};

/// Multiplier for every category. Always complete; neutral is `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostProfile {
    factors: [f64; CATEGORY_COUNT],
}

impl BoostProfile {
    /// All categories at `1.0`.
    pub fn neutral() -> Self {
        Self {
            factors: [1.0; CATEGORY_COUNT],
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        self.factors[category.index()]
    }

    /// Iterate in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Multiply every category by the matching factor.
    pub fn scale(&mut self, factors: &CategoryFactors) {
        for category in Category::ALL {
            self.factors[category.index()] *= factors.get(category);
        }
    }

    /// Scale a raw relevance score by the category's multiplier.
    pub fn apply(&self, category: Category, score: f64) -> f64 {
        score * self.get(category)
    }

    /// Sort items by boosted score, highest first.
    ///
    /// `key` yields each item's category and raw score. Equal boosted scores
    /// keep their input order.
    pub fn rank_scored<T, F>(&self, items: impl IntoIterator<Item = T>, key: F) -> Vec<(T, f64)>
    where
        F: Fn(&T) -> (Category, f64),
    {
        let mut ranked: Vec<(T, f64)> = items
            .into_iter()
            .map(|item| {
                let (category, score) = key(&item);
                let boosted = self.apply(category, score);
                (item, boosted)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

impl Default for BoostProfile {
    fn default() -> Self {
        Self::neutral()
    }
}

impl Serialize for BoostProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CATEGORY_COUNT))?;
        for (category, factor) in self.iter() {
            map.serialize_entry(category.as_str(), &factor)?;
        }
        map.end()
    }
}

/// Boosts with the default policy.
///
/// `hour` is the local wall-clock hour; `None` skips hour adjustments.
pub fn boosts(tier: UrgencyTier, hour: Option<u32>) -> BoostProfile {
    boosts_with(&RankingPolicy::default(), tier, hour)
}

/// Boosts with an explicit policy.
pub fn boosts_with(policy: &RankingPolicy, tier: UrgencyTier, hour: Option<u32>) -> BoostProfile {
    let mut profile = BoostProfile::neutral();
    profile.scale(policy.tier_boosts.for_tier(tier));

    if let Some(hour) = hour {
        for window in policy.hour_boosts.windows() {
            if window.contains(hour % 24) {
                profile.scale(&window.factors);
            }
        }
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn normal_midday_is_neutral() {
        let profile = boosts(UrgencyTier::Normal, Some(12));
        assert_eq!(profile, BoostProfile::neutral());
    }

    #[test]
    fn rush_without_hour() {
        let profile = boosts(UrgencyTier::Rush, None);
        assert_eq!(profile.get(Category::Quick), 2.0);
        assert_eq!(profile.get(Category::Refuel), 1.5);
        assert_eq!(profile.get(Category::Discover), 0.5);
        assert_eq!(profile.get(Category::Shop), 0.3);
        assert_eq!(profile.get(Category::Work), 1.0);
    }

    #[test]
    fn rush_in_the_morning_stacks() {
        let profile = boosts(UrgencyTier::Rush, Some(8));
        assert!(close(profile.get(Category::Refuel), 1.95));
        assert!(close(profile.get(Category::Comfort), 1.2));
        assert_eq!(profile.get(Category::Quick), 2.0);
    }

    #[test]
    fn extended_late_night_stacks() {
        let profile = boosts(UrgencyTier::Extended, Some(23));
        assert_eq!(profile.get(Category::Discover), 2.0);
        assert!(close(profile.get(Category::Comfort), 2.7));
        assert!(close(profile.get(Category::Quick), 0.65));
        assert!(close(profile.get(Category::Shop), 0.7));
        assert_eq!(profile.get(Category::Work), 1.5);
    }

    #[test]
    fn late_night_window_starts_at_22() {
        // The boost window opens an hour before the Late Night day part.
        let profile = boosts(UrgencyTier::Normal, Some(22));
        assert!(close(profile.get(Category::Comfort), 1.5));
        let profile = boosts(UrgencyTier::Normal, Some(5));
        assert!(close(profile.get(Category::Comfort), 1.2));
    }

    #[test]
    fn serializes_all_seven_keys() {
        let json = serde_json::to_value(boosts(UrgencyTier::Rush, None)).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 7);
        assert_eq!(obj["quick"], serde_json::json!(2.0));
        assert_eq!(obj["chill"], serde_json::json!(1.0));
    }

    #[test]
    fn rank_scored_applies_multipliers() {
        let profile = boosts(UrgencyTier::Rush, None);
        let items = vec![
            ("gift shop", Category::Shop, 0.9),
            ("noodle bar", Category::Refuel, 0.5),
            ("grab-and-go", Category::Quick, 0.4),
            ("museum", Category::Discover, 0.9),
        ];
        let ranked = profile.rank_scored(items, |(_, c, s)| (*c, *s));
        let names: Vec<_> = ranked.iter().map(|((n, _, _), _)| *n).collect();
        assert_eq!(names, vec!["grab-and-go", "noodle bar", "museum", "gift shop"]);
        assert!(close(ranked[0].1, 0.8));
    }

    #[test]
    fn rank_scored_is_stable_on_ties() {
        let profile = BoostProfile::neutral();
        let ranked = profile.rank_scored(vec![("a", 1.0), ("b", 1.0), ("c", 2.0)], |(_, s)| {
            (Category::Chill, *s)
        });
        let names: Vec<_> = ranked.iter().map(|((n, _), _)| *n).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}

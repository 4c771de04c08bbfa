//! Tunable ranking policy.
//!
//! Urgency weights, tier thresholds and boost multipliers are policy, not
//! algorithm. They live here as named fields with serde defaults so they can
//! be tuned from `config.toml` without touching the merge or boost code.

use serde::{Deserialize, Serialize};

use crate::boarding::UrgencyTier;
use crate::category::Category;
use crate::error::ValidationError;

/// How strongly each tier pulls the order towards its urgency ranking.
///
/// The time-of-day weight is always `1 - urgency_weight`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgencyWeights {
    #[serde(default = "default_rush_weight")]
    pub rush: f64,
    #[serde(default = "default_imminent_weight")]
    pub imminent: f64,
    #[serde(default = "default_soon_weight")]
    pub soon: f64,
    #[serde(default = "default_normal_weight")]
    pub normal: f64,
    #[serde(default = "default_extended_weight")]
    pub extended: f64,
}

impl UrgencyWeights {
    pub fn for_tier(&self, tier: UrgencyTier) -> f64 {
        match tier {
            UrgencyTier::Rush => self.rush,
            UrgencyTier::Imminent => self.imminent,
            UrgencyTier::Soon => self.soon,
            UrgencyTier::Normal => self.normal,
            UrgencyTier::Extended => self.extended,
        }
    }
}

impl Default for UrgencyWeights {
    fn default() -> Self {
        Self {
            rush: default_rush_weight(),
            imminent: default_imminent_weight(),
            soon: default_soon_weight(),
            normal: default_normal_weight(),
            extended: default_extended_weight(),
        }
    }
}

/// Upper bounds (inclusive, in minutes to boarding) of each tier.
///
/// Anything above `normal_minutes` is [`UrgencyTier::Extended`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    #[serde(default = "default_rush_minutes")]
    pub rush_minutes: f64,
    #[serde(default = "default_imminent_minutes")]
    pub imminent_minutes: f64,
    #[serde(default = "default_soon_minutes")]
    pub soon_minutes: f64,
    #[serde(default = "default_normal_minutes")]
    pub normal_minutes: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            rush_minutes: default_rush_minutes(),
            imminent_minutes: default_imminent_minutes(),
            soon_minutes: default_soon_minutes(),
            normal_minutes: default_normal_minutes(),
        }
    }
}

/// One multiplier per category. `1.0` leaves a category untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFactors {
    #[serde(default = "neutral")]
    pub refuel: f64,
    #[serde(default = "neutral")]
    pub discover: f64,
    #[serde(default = "neutral")]
    pub chill: f64,
    #[serde(default = "neutral")]
    pub comfort: f64,
    #[serde(default = "neutral")]
    pub work: f64,
    #[serde(default = "neutral")]
    pub shop: f64,
    #[serde(default = "neutral")]
    pub quick: f64,
}

impl CategoryFactors {
    /// All factors at `1.0`.
    pub fn neutral() -> Self {
        Self {
            refuel: 1.0,
            discover: 1.0,
            chill: 1.0,
            comfort: 1.0,
            work: 1.0,
            shop: 1.0,
            quick: 1.0,
        }
    }

    /// Neutral factors with the given overrides applied.
    pub fn with(overrides: &[(Category, f64)]) -> Self {
        let mut factors = Self::neutral();
        for &(category, factor) in overrides {
            *factors.get_mut(category) = factor;
        }
        factors
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Refuel => self.refuel,
            Category::Discover => self.discover,
            Category::Chill => self.chill,
            Category::Comfort => self.comfort,
            Category::Work => self.work,
            Category::Shop => self.shop,
            Category::Quick => self.quick,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut f64 {
        match category {
            Category::Refuel => &mut self.refuel,
            Category::Discover => &mut self.discover,
            Category::Chill => &mut self.chill,
            Category::Comfort => &mut self.comfort,
            Category::Work => &mut self.work,
            Category::Shop => &mut self.shop,
            Category::Quick => &mut self.quick,
        }
    }

    fn validate(&self, key: &str) -> Result<(), ValidationError> {
        for category in Category::ALL {
            let factor = self.get(category);
            if !factor.is_finite() || factor <= 0.0 {
                return Err(ValidationError::InvalidValue {
                    field: format!("{key}.{category}"),
                    message: format!("multiplier must be a positive number, got {factor}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for CategoryFactors {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Multipliers applied per urgency tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierBoosts {
    #[serde(default = "default_rush_boosts")]
    pub rush: CategoryFactors,
    #[serde(default)]
    pub imminent: CategoryFactors,
    #[serde(default)]
    pub soon: CategoryFactors,
    #[serde(default)]
    pub normal: CategoryFactors,
    #[serde(default = "default_extended_boosts")]
    pub extended: CategoryFactors,
}

impl TierBoosts {
    pub fn for_tier(&self, tier: UrgencyTier) -> &CategoryFactors {
        match tier {
            UrgencyTier::Rush => &self.rush,
            UrgencyTier::Imminent => &self.imminent,
            UrgencyTier::Soon => &self.soon,
            UrgencyTier::Normal => &self.normal,
            UrgencyTier::Extended => &self.extended,
        }
    }
}

impl Default for TierBoosts {
    fn default() -> Self {
        Self {
            rush: default_rush_boosts(),
            imminent: CategoryFactors::neutral(),
            soon: CategoryFactors::neutral(),
            normal: CategoryFactors::neutral(),
            extended: default_extended_boosts(),
        }
    }
}

/// Multipliers applied while the local hour falls in `[start_hour, end_hour)`.
///
/// A window with `start_hour > end_hour` wraps past midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourWindow {
    pub start_hour: u32,
    pub end_hour: u32,
    #[serde(default)]
    pub factors: CategoryFactors,
}

impl HourWindow {
    pub fn contains(&self, hour: u32) -> bool {
        if self.start_hour <= self.end_hour {
            (self.start_hour..self.end_hour).contains(&hour)
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }
}

/// Hour-of-day multipliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourBoosts {
    #[serde(default = "default_morning_window")]
    pub morning: HourWindow,
    #[serde(default = "default_late_night_window")]
    pub late_night: HourWindow,
}

impl HourBoosts {
    pub fn windows(&self) -> [&HourWindow; 2] {
        [&self.morning, &self.late_night]
    }
}

impl Default for HourBoosts {
    fn default() -> Self {
        Self {
            morning: default_morning_window(),
            late_night: default_late_night_window(),
        }
    }
}

/// Complete ranking policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RankingPolicy {
    #[serde(default)]
    pub urgency_weights: UrgencyWeights,
    #[serde(default)]
    pub thresholds: TierThresholds,
    #[serde(default)]
    pub tier_boosts: TierBoosts,
    #[serde(default)]
    pub hour_boosts: HourBoosts,
}

impl RankingPolicy {
    /// Check every tunable against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as [`ValidationError::InvalidValue`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        for tier in UrgencyTier::ALL {
            let weight = self.urgency_weights.for_tier(tier);
            if !(0.0..=1.0).contains(&weight) {
                return Err(ValidationError::InvalidValue {
                    field: format!("policy.urgency_weights.{}", tier.as_str()),
                    message: format!("weight must be within [0, 1], got {weight}"),
                });
            }
        }

        let w = &self.urgency_weights;
        let rising = [
            ("normal", w.extended, w.normal),
            ("soon", w.normal, w.soon),
            ("imminent", w.soon, w.imminent),
            ("rush", w.soon, w.rush),
        ];
        for (name, lower, value) in rising {
            if value < lower {
                return Err(ValidationError::InvalidValue {
                    field: format!("policy.urgency_weights.{name}"),
                    message: format!(
                        "weight must not be below the less urgent tier's {lower}, got {value}"
                    ),
                });
            }
        }

        let t = &self.thresholds;
        let bounds = [
            ("rush_minutes", t.rush_minutes),
            ("imminent_minutes", t.imminent_minutes),
            ("soon_minutes", t.soon_minutes),
            ("normal_minutes", t.normal_minutes),
        ];
        let mut previous = 0.0;
        for (name, value) in bounds {
            if !value.is_finite() || value <= previous {
                return Err(ValidationError::InvalidValue {
                    field: format!("policy.thresholds.{name}"),
                    message: format!(
                        "thresholds must be positive and strictly ascending, got {value}"
                    ),
                });
            }
            previous = value;
        }

        for tier in UrgencyTier::ALL {
            self.tier_boosts
                .for_tier(tier)
                .validate(&format!("policy.tier_boosts.{}", tier.as_str()))?;
        }

        let windows = [
            ("morning", &self.hour_boosts.morning),
            ("late_night", &self.hour_boosts.late_night),
        ];
        for (name, window) in windows {
            if window.start_hour > 23 || window.end_hour > 24 {
                return Err(ValidationError::InvalidValue {
                    field: format!("policy.hour_boosts.{name}"),
                    message: format!(
                        "hours must be within 0-24, got {}-{}",
                        window.start_hour, window.end_hour
                    ),
                });
            }
            window
                .factors
                .validate(&format!("policy.hour_boosts.{name}.factors"))?;
        }

        Ok(())
    }
}

// Default functions
fn neutral() -> f64 {
    1.0
}
fn default_rush_weight() -> f64 {
    0.9
}
fn default_imminent_weight() -> f64 {
    0.9
}
fn default_soon_weight() -> f64 {
    0.7
}
fn default_normal_weight() -> f64 {
    0.5
}
fn default_extended_weight() -> f64 {
    0.3
}
fn default_rush_minutes() -> f64 {
    15.0
}
fn default_imminent_minutes() -> f64 {
    45.0
}
fn default_soon_minutes() -> f64 {
    90.0
}
fn default_normal_minutes() -> f64 {
    180.0
}
fn default_rush_boosts() -> CategoryFactors {
    CategoryFactors::with(&[
        (Category::Quick, 2.0),
        (Category::Refuel, 1.5),
        (Category::Discover, 0.5),
        (Category::Shop, 0.3),
    ])
}
fn default_extended_boosts() -> CategoryFactors {
    CategoryFactors::with(&[
        (Category::Discover, 2.0),
        (Category::Comfort, 1.8),
        (Category::Work, 1.5),
        (Category::Quick, 0.5),
    ])
}
fn default_morning_window() -> HourWindow {
    // Breakfast and wake-up spaces
    HourWindow {
        start_hour: 5,
        end_hour: 11,
        factors: CategoryFactors::with(&[(Category::Refuel, 1.3), (Category::Comfort, 1.2)]),
    }
}
fn default_late_night_window() -> HourWindow {
    // Rest first, 24h options next, most shops are shut
    HourWindow {
        start_hour: 22,
        end_hour: 5,
        factors: CategoryFactors::with(&[
            (Category::Comfort, 1.5),
            (Category::Quick, 1.3),
            (Category::Shop, 0.7),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        assert_eq!(RankingPolicy::default().validate(), Ok(()));
    }

    #[test]
    fn default_weights_rise_with_urgency() {
        let w = UrgencyWeights::default();
        assert_eq!(w.extended, 0.3);
        assert_eq!(w.normal, 0.5);
        assert_eq!(w.soon, 0.7);
        assert_eq!(w.imminent, 0.9);
        assert_eq!(w.rush, 0.9);
    }

    #[test]
    fn hour_window_wraps_midnight() {
        let late = default_late_night_window();
        assert!(late.contains(22));
        assert!(late.contains(23));
        assert!(late.contains(0));
        assert!(late.contains(4));
        assert!(!late.contains(5));
        assert!(!late.contains(21));

        let morning = default_morning_window();
        assert!(morning.contains(5));
        assert!(morning.contains(10));
        assert!(!morning.contains(11));
        assert!(!morning.contains(4));
    }

    fn invalid_field(err: ValidationError) -> String {
        match err {
            ValidationError::InvalidValue { field, .. } => field,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_weight_out_of_range() {
        let mut policy = RankingPolicy::default();
        policy.urgency_weights.soon = 1.5;
        let err = policy.validate().unwrap_err();
        assert_eq!(invalid_field(err), "policy.urgency_weights.soon");
    }

    #[test]
    fn rejects_weights_that_fall_with_urgency() {
        let mut policy = RankingPolicy::default();
        policy.urgency_weights.extended = 1.0;
        policy.urgency_weights.rush = 0.0;
        let err = policy.validate().unwrap_err();
        assert_eq!(invalid_field(err), "policy.urgency_weights.normal");

        let mut policy = RankingPolicy::default();
        policy.urgency_weights.rush = 0.6;
        let err = policy.validate().unwrap_err();
        assert_eq!(invalid_field(err), "policy.urgency_weights.rush");
    }

    #[test]
    fn accepts_equal_neighbouring_weights() {
        let mut policy = RankingPolicy::default();
        policy.urgency_weights.rush = 0.7;
        policy.urgency_weights.imminent = 0.7;
        policy.urgency_weights.normal = 0.3;
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn rejects_unordered_thresholds() {
        let mut policy = RankingPolicy::default();
        policy.thresholds.soon_minutes = 30.0;
        assert!(policy.validate().is_err());

        let mut policy = RankingPolicy::default();
        policy.thresholds.rush_minutes = 0.0;
        assert!(policy.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_multiplier() {
        let mut policy = RankingPolicy::default();
        policy.tier_boosts.rush.shop = 0.0;
        let err = policy.validate().unwrap_err();
        assert_eq!(invalid_field(err), "policy.tier_boosts.rush.shop");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let policy: RankingPolicy = toml::from_str(
            r#"
            [urgency_weights]
            extended = 0.2

            [tier_boosts.rush]
            quick = 3.0
            "#,
        )
        .unwrap();
        assert_eq!(policy.urgency_weights.extended, 0.2);
        assert_eq!(policy.urgency_weights.rush, 0.9);
        assert_eq!(policy.tier_boosts.rush.quick, 3.0);
        // Fields left out of a partially specified table fall back to neutral.
        assert_eq!(policy.tier_boosts.rush.refuel, 1.0);
        assert_eq!(policy.tier_boosts.extended.discover, 2.0);
    }
}

//! Boarding urgency classification.
//!
//! Maps the time left before boarding onto one of five urgency tiers. Each
//! tier carries its own preferred category order, status message and the
//! categories worth highlighting while it is active.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryOrder};
use crate::policy::TierThresholds;

use Category::{Chill, Comfort, Discover, Quick, Refuel, Shop, Work};

/// How soon the traveler has to board, most urgent first.
///
/// The derived ordering follows declaration order, so `Rush < Extended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    /// Boarding within 15 minutes.
    Rush,
    /// Boarding within 45 minutes (or already past, see [`classify`]).
    Imminent,
    /// Boarding within 90 minutes.
    Soon,
    /// Boarding within 3 hours, or no boarding time known.
    Normal,
    /// More than 3 hours to wait.
    Extended,
}

impl UrgencyTier {
    /// Every tier, most urgent first.
    pub const ALL: [UrgencyTier; 5] = [
        UrgencyTier::Rush,
        UrgencyTier::Imminent,
        UrgencyTier::Soon,
        UrgencyTier::Normal,
        UrgencyTier::Extended,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyTier::Rush => "rush",
            UrgencyTier::Imminent => "imminent",
            UrgencyTier::Soon => "soon",
            UrgencyTier::Normal => "normal",
            UrgencyTier::Extended => "extended",
        }
    }

    /// Category order this tier prefers on its own.
    pub fn urgency_order(&self) -> &'static CategoryOrder {
        match self {
            // Grab essentials only
            UrgencyTier::Rush => &[Quick, Refuel, Chill, Comfort, Work, Shop, Discover],
            // Quick bite time
            UrgencyTier::Imminent => &[Refuel, Quick, Chill, Shop, Comfort, Work, Discover],
            // Relaxation time
            UrgencyTier::Soon => &[Comfort, Refuel, Chill, Shop, Work, Quick, Discover],
            // Productivity and exploration
            UrgencyTier::Normal => &[Work, Comfort, Discover, Refuel, Chill, Shop, Quick],
            // Long delay, entertainment first
            UrgencyTier::Extended => &[Discover, Comfort, Refuel, Work, Shop, Chill, Quick],
        }
    }

    /// Short status line for this tier.
    pub fn status_message(&self) -> &'static str {
        match self {
            UrgencyTier::Rush => "Boarding soon - essentials only",
            UrgencyTier::Imminent => "Quick bite time before boarding",
            UrgencyTier::Soon => "Time to relax before your flight",
            UrgencyTier::Normal => "Plenty of time to be productive",
            UrgencyTier::Extended => "Extended wait - explore the terminal",
        }
    }

    /// Whether this tier replaces the day-part greeting with its own message.
    pub fn overrides_greeting(&self) -> bool {
        matches!(self, UrgencyTier::Rush | UrgencyTier::Extended)
    }

    /// Tiers that warrant urgent styling.
    pub fn is_urgent(&self) -> bool {
        matches!(self, UrgencyTier::Rush | UrgencyTier::Imminent)
    }

    /// Categories to visually emphasise while this tier is active.
    pub fn highlighted(&self) -> &'static [Category] {
        match self {
            UrgencyTier::Rush => &[Quick],
            UrgencyTier::Imminent => &[Refuel, Quick],
            UrgencyTier::Soon => &[Comfort, Refuel],
            UrgencyTier::Normal => &[Work, Comfort],
            UrgencyTier::Extended => &[Discover, Comfort],
        }
    }
}

impl std::fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UrgencyTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rush" => Ok(UrgencyTier::Rush),
            "imminent" => Ok(UrgencyTier::Imminent),
            "soon" => Ok(UrgencyTier::Soon),
            "normal" => Ok(UrgencyTier::Normal),
            "extended" => Ok(UrgencyTier::Extended),
            _ => Err(format!(
                "Unknown urgency tier: {} (expected rush, imminent, soon, normal or extended)",
                s
            )),
        }
    }
}

/// Fractional minutes from `now` until `deadline`. Negative once passed.
pub fn minutes_until(now: DateTime<FixedOffset>, deadline: DateTime<FixedOffset>) -> f64 {
    deadline.signed_duration_since(now).num_milliseconds() as f64 / 60_000.0
}

/// Classify with the default thresholds.
pub fn classify(
    now: DateTime<FixedOffset>,
    deadline: Option<DateTime<FixedOffset>>,
) -> UrgencyTier {
    classify_with(&TierThresholds::default(), now, deadline)
}

/// Classify the time left before boarding.
///
/// No deadline means [`UrgencyTier::Normal`]. Only `Rush` requires time to be
/// left on the clock, so a deadline that has already passed lands in
/// [`UrgencyTier::Imminent`].
pub fn classify_with(
    thresholds: &TierThresholds,
    now: DateTime<FixedOffset>,
    deadline: Option<DateTime<FixedOffset>>,
) -> UrgencyTier {
    let Some(deadline) = deadline else {
        return UrgencyTier::Normal;
    };
    classify_minutes(thresholds, minutes_until(now, deadline))
}

/// Tier for a raw minutes-to-boarding value.
pub fn classify_minutes(thresholds: &TierThresholds, minutes: f64) -> UrgencyTier {
    if minutes > 0.0 && minutes <= thresholds.rush_minutes {
        UrgencyTier::Rush
    } else if minutes <= thresholds.imminent_minutes {
        UrgencyTier::Imminent
    } else if minutes <= thresholds.soon_minutes {
        UrgencyTier::Soon
    } else if minutes <= thresholds.normal_minutes {
        UrgencyTier::Normal
    } else {
        // Also catches NaN
        UrgencyTier::Extended
    }
}

/// Whole minutes left, floored and clamped at zero.
pub fn whole_minutes_left(minutes: f64) -> u64 {
    if minutes > 0.0 {
        minutes.floor() as u64
    } else {
        0
    }
}

/// Countdown line for a banner, e.g. "12 minutes - grab something quick".
///
/// Empty when no whole minute is left.
pub fn countdown_message(tier: UrgencyTier, minutes: f64) -> String {
    let left = whole_minutes_left(minutes);
    if left == 0 {
        return String::new();
    }
    match tier {
        UrgencyTier::Rush => format!("Board in {} minutes!", left),
        UrgencyTier::Imminent => format!("{} minutes - grab something quick", left),
        UrgencyTier::Soon => format!("{} minutes to relax", left),
        UrgencyTier::Normal => format!("{}h {}m until boarding", left / 60, left % 60),
        UrgencyTier::Extended => format!("{}+ hours to explore", left / 60),
    }
}

/// Whether `category` should be highlighted. Never true without a tier.
pub fn should_highlight(category: Category, tier: Option<UrgencyTier>) -> bool {
    tier.is_some_and(|t| t.highlighted().contains(&category))
}

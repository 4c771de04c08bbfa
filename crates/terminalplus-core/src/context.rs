//! Unified vibe context.
//!
//! Combines the day-part profile, boarding classification, order merge and
//! boost calculation into one call. Every evaluation works on a fresh
//! [`ContextSnapshot`] and returns a plain value; nothing is cached or stored,
//! so callers can recompute as often as they like (once a minute while
//! boarding approaches is typical).

use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

use crate::boarding::{classify_with, countdown_message, minutes_until, UrgencyTier};
use crate::boost::{boosts_with, BoostProfile};
use crate::category::{Category, CategoryOrder};
use crate::day_part::{select_profile, DayPart};
use crate::error::{Result, ValidationError};
use crate::merge::merge_with;
use crate::policy::RankingPolicy;
use crate::storage::Config;

/// Number of categories in the above-the-fold priority subset.
pub const PRIORITY_COUNT: usize = 3;

/// Inputs for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextSnapshot {
    /// Current wall-clock time in the traveler's local offset.
    pub now: DateTime<FixedOffset>,
    /// When boarding starts, if known.
    pub boarding_deadline: Option<DateTime<FixedOffset>>,
}

impl ContextSnapshot {
    pub fn new(
        now: DateTime<FixedOffset>,
        boarding_deadline: Option<DateTime<FixedOffset>>,
    ) -> Self {
        Self {
            now,
            boarding_deadline,
        }
    }

    /// Build a snapshot from epoch-millisecond timestamps.
    ///
    /// `offset` decides which wall-clock hour selects the day part.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimestamp`] when either value is
    /// outside chrono's representable range.
    pub fn from_epoch_millis(
        now_ms: i64,
        boarding_deadline_ms: Option<i64>,
        offset: FixedOffset,
    ) -> Result<Self, ValidationError> {
        let now = millis_to_datetime("now", now_ms, offset)?;
        let boarding_deadline = boarding_deadline_ms
            .map(|ms| millis_to_datetime("boardingDeadline", ms, offset))
            .transpose()?;
        Ok(Self::new(now, boarding_deadline))
    }

    /// Fractional minutes until boarding; negative once the deadline passed.
    pub fn minutes_to_boarding(&self) -> Option<f64> {
        self.boarding_deadline
            .map(|deadline| minutes_until(self.now, deadline))
    }
}

fn millis_to_datetime(
    field: &'static str,
    millis: i64,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, ValidationError> {
    DateTime::from_timestamp_millis(millis)
        .map(|utc| utc.with_timezone(&offset))
        .ok_or(ValidationError::InvalidTimestamp { field, millis })
}

/// Result of an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VibeContext {
    /// All seven categories, most relevant first.
    pub order: CategoryOrder,
    /// First three of `order`.
    pub priority: [Category; PRIORITY_COUNT],
    pub tier: UrgencyTier,
    pub is_urgent: bool,
    /// Headline: the day-part greeting unless the tier overrides it.
    pub message: String,
    pub day_part: DayPart,
    pub tone: &'static str,
    /// Tier status line, present only when a boarding time is known.
    pub boarding_message: Option<&'static str>,
    /// Categories to emphasise; empty without a boarding time.
    pub highlighted: Vec<Category>,
    pub minutes_to_boarding: Option<f64>,
    /// The boarding deadline is at or before `now`.
    pub boarding_closed: bool,
    /// Countdown banner text, if at least a whole minute is left.
    pub countdown: Option<String>,
}

/// An evaluation together with the boost profile for the same snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextReport {
    pub context: VibeContext,
    pub boosts: BoostProfile,
}

impl ContextReport {
    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Evaluates snapshots against a ranking policy.
#[derive(Debug, Clone, Default)]
pub struct ContextEngine {
    policy: RankingPolicy,
}

impl ContextEngine {
    /// Engine with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom policy.
    ///
    /// # Errors
    ///
    /// Rejects policies that fail [`RankingPolicy::validate`].
    pub fn with_policy(policy: RankingPolicy) -> Result<Self, ValidationError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Engine using the policy of a loaded config.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::Config`] naming the offending key when
    /// the config does not validate.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            policy: config.policy.clone(),
        })
    }

    pub fn policy(&self) -> &RankingPolicy {
        &self.policy
    }

    /// Tier for a snapshot. `Normal` without a boarding time.
    pub fn tier(&self, snapshot: &ContextSnapshot) -> UrgencyTier {
        classify_with(&self.policy.thresholds, snapshot.now, snapshot.boarding_deadline)
    }

    /// Rank the categories for a snapshot.
    pub fn evaluate(&self, snapshot: &ContextSnapshot) -> VibeContext {
        let profile = select_profile(snapshot.now);

        let context = match snapshot.boarding_deadline {
            None => VibeContext {
                order: profile.base_order,
                priority: priority_of(&profile.base_order),
                tier: UrgencyTier::Normal,
                is_urgent: false,
                message: profile.greeting.to_string(),
                day_part: profile.day_part,
                tone: profile.tone,
                boarding_message: None,
                highlighted: Vec::new(),
                minutes_to_boarding: None,
                boarding_closed: false,
                countdown: None,
            },
            Some(deadline) => {
                let minutes = minutes_until(snapshot.now, deadline);
                let tier = self.tier(snapshot);
                let order = merge_with(&self.policy.urgency_weights, &profile.base_order, tier);
                let message = if tier.overrides_greeting() {
                    tier.status_message()
                } else {
                    profile.greeting
                };
                let countdown = countdown_message(tier, minutes);

                VibeContext {
                    order,
                    priority: priority_of(&order),
                    tier,
                    is_urgent: tier.is_urgent(),
                    message: message.to_string(),
                    day_part: profile.day_part,
                    tone: profile.tone,
                    boarding_message: Some(tier.status_message()),
                    highlighted: tier.highlighted().to_vec(),
                    minutes_to_boarding: Some(minutes),
                    boarding_closed: minutes <= 0.0,
                    countdown: (!countdown.is_empty()).then_some(countdown),
                }
            }
        };

        tracing::debug!(
            day_part = %context.day_part,
            tier = %context.tier,
            minutes_to_boarding = ?context.minutes_to_boarding,
            order = ?context.order,
            "evaluated vibe context"
        );

        context
    }

    /// Evaluate raw epoch-millisecond input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::Validation`] for unrepresentable timestamps.
    pub fn evaluate_millis(
        &self,
        now_ms: i64,
        boarding_deadline_ms: Option<i64>,
        offset: FixedOffset,
    ) -> Result<VibeContext> {
        let snapshot = ContextSnapshot::from_epoch_millis(now_ms, boarding_deadline_ms, offset)?;
        Ok(self.evaluate(&snapshot))
    }

    /// Evaluation plus boosts for one snapshot.
    pub fn report(&self, snapshot: &ContextSnapshot) -> ContextReport {
        ContextReport {
            context: self.evaluate(snapshot),
            boosts: self.boosts(snapshot),
        }
    }

    /// Boost profile for a snapshot's tier and local hour.
    pub fn boosts(&self, snapshot: &ContextSnapshot) -> BoostProfile {
        boosts_with(&self.policy, self.tier(snapshot), Some(snapshot.now.hour()))
    }
}

fn priority_of(order: &CategoryOrder) -> [Category; PRIORITY_COUNT] {
    [order[0], order[1], order[2]]
}

/// Evaluate with the default policy.
pub fn evaluate(
    now: DateTime<FixedOffset>,
    boarding_deadline: Option<DateTime<FixedOffset>>,
) -> VibeContext {
    ContextEngine::new().evaluate(&ContextSnapshot::new(now, boarding_deadline))
}

//! # Terminal+ Core Library
//!
//! Context-aware ranking of the seven airport "vibe" categories. Given the
//! wall-clock time and an optional boarding time, the engine decides in
//! which order the categories are shown and how strongly each category's
//! amenities are boosted.
//!
//! ## Architecture
//!
//! - **Boarding**: classifies minutes-to-boarding into an urgency tier
//! - **Day part**: selects the time-of-day profile (greeting, tone, base order)
//! - **Merge**: weighted rank-position blend of the two orders
//! - **Boost**: per-category relevance multipliers from tier and hour
//! - **Context**: one-call facade combining all of the above
//!
//! Every component is a pure function of its inputs. The engine never reads
//! the clock, fetches data, or keeps state between calls.
//!
//! ## Key Components
//!
//! - [`ContextEngine`]: Evaluates a [`ContextSnapshot`] into a [`VibeContext`]
//! - [`RankingPolicy`]: Tunable weights, thresholds and multipliers
//! - [`Config`]: TOML-backed configuration holding the policy

pub mod boarding;
pub mod boost;
pub mod category;
pub mod context;
pub mod day_part;
pub mod error;
pub mod merge;
pub mod policy;
pub mod storage;

pub use boarding::{classify, classify_with, countdown_message, should_highlight, UrgencyTier};
pub use boost::{boosts, boosts_with, BoostProfile};
pub use category::{Category, CategoryOrder, CATEGORY_COUNT};
pub use context::{evaluate, ContextEngine, ContextReport, ContextSnapshot, VibeContext};
pub use day_part::{profile_for_hour, select_profile, DayPart, DayPartProfile};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use merge::{blend, kendall_tau_distance, merge, merge_with};
pub use policy::{CategoryFactors, HourWindow, RankingPolicy, TierThresholds, UrgencyWeights};
pub use storage::{Config, DisplayConfig};

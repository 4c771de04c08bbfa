//! Time-of-day profiles.
//!
//! The day is cut into five half-open bands. Each band has a fixed greeting,
//! tone and baseline vibe order; selection is a pure function of the hour.

use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryOrder};

use Category::{Chill, Comfort, Discover, Quick, Refuel, Shop, Work};

/// Segment of the 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DayPart {
    /// 05:00-11:00
    Morning,
    /// 11:00-14:00
    Midday,
    /// 14:00-17:00
    Afternoon,
    /// 17:00-23:00
    Evening,
    /// 23:00-05:00, wrapping midnight
    LateNight,
}

impl DayPart {
    pub const ALL: [DayPart; 5] = [
        DayPart::Morning,
        DayPart::Midday,
        DayPart::Afternoon,
        DayPart::Evening,
        DayPart::LateNight,
    ];

    /// Day part containing `hour`. Hours past 23 are reduced modulo 24.
    pub fn from_hour(hour: u32) -> Self {
        match hour % 24 {
            5..=10 => DayPart::Morning,
            11..=13 => DayPart::Midday,
            14..=16 => DayPart::Afternoon,
            17..=22 => DayPart::Evening,
            _ => DayPart::LateNight,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DayPart::Morning => "Morning",
            DayPart::Midday => "Midday",
            DayPart::Afternoon => "Afternoon",
            DayPart::Evening => "Evening",
            DayPart::LateNight => "Late Night",
        }
    }

    pub fn profile(&self) -> &'static DayPartProfile {
        match self {
            DayPart::Morning => &MORNING,
            DayPart::Midday => &MIDDAY,
            DayPart::Afternoon => &AFTERNOON,
            DayPart::Evening => &EVENING,
            DayPart::LateNight => &LATE_NIGHT,
        }
    }
}

impl std::fmt::Display for DayPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Greeting, tone and baseline ordering for one day part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPartProfile {
    pub day_part: DayPart,
    pub greeting: &'static str,
    pub tone: &'static str,
    pub base_order: CategoryOrder,
}

impl DayPartProfile {
    pub fn label(&self) -> &'static str {
        self.day_part.label()
    }
}

static MORNING: DayPartProfile = DayPartProfile {
    day_part: DayPart::Morning,
    greeting: "Morning at the terminal. Let's get you sorted.",
    tone: "Energetic",
    base_order: [Comfort, Chill, Refuel, Quick, Work, Discover, Shop],
};

static MIDDAY: DayPartProfile = DayPartProfile {
    day_part: DayPart::Midday,
    greeting: "Peak hours. Navigate like a pro.",
    tone: "Confident",
    base_order: [Refuel, Quick, Discover, Shop, Chill, Work, Comfort],
};

static AFTERNOON: DayPartProfile = DayPartProfile {
    day_part: DayPart::Afternoon,
    greeting: "Afternoon vibes. Time to explore.",
    tone: "Adventurous",
    base_order: [Discover, Refuel, Shop, Chill, Quick, Comfort, Work],
};

static EVENING: DayPartProfile = DayPartProfile {
    day_part: DayPart::Evening,
    greeting: "Evening at the terminal. Make the most of it.",
    tone: "Confident",
    base_order: [Refuel, Shop, Comfort, Discover, Chill, Quick, Work],
};

static LATE_NIGHT: DayPartProfile = DayPartProfile {
    day_part: DayPart::LateNight,
    greeting: "After midnight crew - I've got you covered.",
    tone: "Supportive",
    base_order: [Comfort, Quick, Chill, Refuel, Work, Discover, Shop],
};

/// Profile for the wall-clock hour of `now`.
pub fn select_profile(now: DateTime<FixedOffset>) -> &'static DayPartProfile {
    profile_for_hour(now.hour())
}

pub fn profile_for_hour(hour: u32) -> &'static DayPartProfile {
    DayPart::from_hour(hour).profile()
}

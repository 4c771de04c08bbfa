//! Clock and time-argument helpers shared by the commands.

use chrono::{DateTime, FixedOffset, Local, NaiveTime, TimeZone, Utc};

use terminalplus_core::Config;

/// Current time in the configured offset, or the system zone if none is set.
pub fn now(config: &Config) -> DateTime<FixedOffset> {
    match config.utc_offset() {
        Some(offset) => Utc::now().with_timezone(&offset),
        None => Local::now().fixed_offset(),
    }
}

/// Parse an RFC 3339 timestamp (keeping its own offset), or an `HH:MM`
/// wall-clock time on the same day as `reference` (in its offset).
pub fn parse_time(
    value: &str,
    reference: DateTime<FixedOffset>,
) -> Result<DateTime<FixedOffset>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt);
    }

    let time = NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| {
        format!(
            "Invalid time: '{}'. Use HH:MM or RFC 3339 (e.g. 2025-09-16T08:00:00+08:00)",
            value
        )
    })?;
    let naive = reference.date_naive().and_time(time);
    reference
        .offset()
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| format!("Ambiguous local time: '{}'", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn reference() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2025-09-16T08:00:00+08:00").unwrap()
    }

    #[test]
    fn parses_wall_clock_time_in_reference_offset() {
        let dt = parse_time("14:30", reference()).unwrap();
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);
        assert_eq!(dt.offset().local_minus_utc(), 8 * 3600);
    }

    #[test]
    fn rfc3339_keeps_its_own_offset() {
        let dt = parse_time("2025-09-16T00:00:00Z", reference()).unwrap();
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.offset().local_minus_utc(), 0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_time("soon", reference()).is_err());
        assert!(parse_time("25:00", reference()).is_err());
    }
}

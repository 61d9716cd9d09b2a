use anyhow::{Context, Result, anyhow};
use chrono::Duration;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Date format of the first line of every entry, e.g. `March 4, 2024`.
pub const DATE_HEADER_FORMAT: &str = "%B %-d, %Y";

/// Format used when reading the header back. Day numbers may be one or two digits.
pub(crate) const DATE_HEADER_PARSE_FORMAT: &str = "%B %d, %Y";

static DATE_DURATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)([a-z])$").unwrap());

/// Units accepted by [`parse_date_duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr, EnumString)]
pub enum DateUnit {
    #[strum(serialize = "d")]
    Day,
    #[strum(serialize = "w")]
    Week,
}

impl DateUnit {
    fn span(self, count: i64) -> Option<Duration> {
        match self {
            DateUnit::Day => Duration::try_days(count),
            DateUnit::Week => Duration::try_weeks(count),
        }
    }

    /// `d, w`
    pub fn accepted() -> String {
        DateUnit::iter()
            .map(|unit| unit.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Parses a day-granular span such as `7d` (days) or `2w` (weeks).
///
/// # Examples
///
/// ```
/// # use chrono::Duration;
/// # use wj_core::dates::parse_date_duration;
/// assert_eq!(parse_date_duration("7d").unwrap(), Duration::days(7));
/// assert_eq!(parse_date_duration("2w").unwrap(), Duration::days(14));
/// assert!(parse_date_duration("3 days").is_err());
/// ```
pub fn parse_date_duration(input: &str) -> Result<Duration> {
    let caps = DATE_DURATION
        .captures(input.trim())
        .ok_or_else(|| anyhow!("`{input}` is not a span like `7d` or `2w`"))?;
    let count: i64 = caps[1]
        .parse()
        .with_context(|| format!("count in `{input}` is too large"))?;
    let unit = DateUnit::from_str(&caps[2])
        .with_context(|| {
            format!(
                "unknown unit `{}` in `{input}`, expected one of {}",
                &caps[2],
                DateUnit::accepted()
            )
        })?;
    unit.span(count)
        .ok_or_else(|| anyhow!("`{input}` is out of range"))
}

/// Compact duration text: `1h15m`, `45m`, `0m`, `-30m`.
pub fn format_duration(duration: Duration) -> String {
    let minutes = duration.num_minutes();
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.unsigned_abs();
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if hours == 0 {
        format!("{sign}{minutes}m")
    } else {
        format!("{sign}{hours}h{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_duration_days_and_weeks() {
        assert_eq!(parse_date_duration("1d").unwrap(), Duration::days(1));
        assert_eq!(parse_date_duration("10d").unwrap(), Duration::days(10));
        assert_eq!(parse_date_duration(" 2w ").unwrap(), Duration::weeks(2));
        assert_eq!(parse_date_duration("0w").unwrap(), Duration::zero());
    }

    #[test]
    fn date_duration_rejects_unknown_units() {
        let err = parse_date_duration("3h").unwrap_err();
        assert!(err.to_string().contains("unknown unit `h`"));
        assert!(err.to_string().ends_with("expected one of d, w"));
        assert!(parse_date_duration("d").is_err());
        assert!(parse_date_duration("-1d").is_err());
        assert!(parse_date_duration("").is_err());
    }

    #[test]
    fn accepted_units_follow_declaration_order() {
        assert_eq!(DateUnit::accepted(), "d, w");
    }

    #[test]
    fn date_duration_rejects_overflow() {
        assert!(parse_date_duration("99999999999999999999d").is_err());
        assert!(parse_date_duration("9999999999999w").is_err());
    }

    #[test]
    fn duration_text_is_compact() {
        assert_eq!(format_duration(Duration::zero()), "0m");
        assert_eq!(format_duration(Duration::minutes(45)), "45m");
        assert_eq!(format_duration(Duration::minutes(75)), "1h15m");
        assert_eq!(format_duration(Duration::hours(2)), "2h0m");
        assert_eq!(format_duration(Duration::minutes(-30)), "-30m");
        assert_eq!(format_duration(Duration::minutes(-90)), "-1h30m");
    }
}

use chrono::Duration;

/// Right-aligned, six columns wide: `"    9m"`, `" 4h 9m"`, `"13h29m"`.
pub fn pretty_duration(duration: Duration) -> String {
    let minutes = duration.num_minutes();
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.unsigned_abs();
    let (hours, minutes) = (minutes / 60, minutes % 60);

    let text = if hours == 0 {
        format!("{sign}{minutes:>2}m")
    } else {
        format!("{sign}{hours}h{minutes:>2}m")
    };
    format!("{text:>6}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_durations() {
        let cases = [
            (9, "    9m"),
            (52, "   52m"),
            (4 * 60 + 9, " 4h 9m"),
            (13 * 60 + 9, "13h 9m"),
            (4 * 60 + 29, " 4h29m"),
            (13 * 60 + 29, "13h29m"),
            (0, "    0m"),
            (-30, "  -30m"),
        ];
        for (minutes, expected) in cases {
            assert_eq!(pretty_duration(Duration::minutes(minutes)), expected, "{minutes}m");
        }
    }

    #[test]
    fn seconds_are_dropped() {
        assert_eq!(pretty_duration(Duration::seconds(59)), "    0m");
    }
}

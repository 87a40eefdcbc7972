use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime, Utc};

const LEGACY_SUFFIX: &str = " UTC";

/// Converts an API kick-off time to the local timezone.
///
/// Accepts ISO-8601 UTC timestamps (`2016-04-17T08:00:00Z`) and the legacy
/// live-feed encoding (`8:00 PM UTC`), which carries no date; today's UTC
/// date is assumed for it. Anything else is returned unchanged so the caller
/// can still show the raw value.
///
/// # Arguments
///
/// * `timestamp` - Time string as received from the API
/// * `use_12_hour` - Render `08:00 PM` instead of `20:00`
/// * `include_date` - Prefix the weekday and day of month, e.g. `Sun 17, `
pub fn to_local(timestamp: &str, use_12_hour: bool, include_date: bool) -> String {
    let offset = *Local::now().offset();
    to_local_with_offset(timestamp, offset, use_12_hour, include_date)
}

/// Like [`to_local`] but with an explicit UTC offset instead of the
/// machine's current one.
pub fn to_local_with_offset(
    timestamp: &str,
    offset: FixedOffset,
    use_12_hour: bool,
    include_date: bool,
) -> String {
    convert(
        timestamp,
        offset,
        Utc::now().date_naive(),
        use_12_hour,
        include_date,
    )
}

fn convert(
    timestamp: &str,
    offset: FixedOffset,
    today: NaiveDate,
    use_12_hour: bool,
    include_date: bool,
) -> String {
    let Some(utc) = parse_utc(timestamp, today) else {
        tracing::debug!("Leaving unrecognised time '{timestamp}' unconverted");
        return timestamp.to_string();
    };

    let pattern = match (use_12_hour, include_date) {
        (true, true) => "%a %d, %I:%M %p",
        (true, false) => "%I:%M %p",
        (false, true) => "%a %d, %H:%M",
        (false, false) => "%H:%M",
    };
    utc.with_timezone(&offset).format(pattern).to_string()
}

fn parse_utc(timestamp: &str, today: NaiveDate) -> Option<DateTime<Utc>> {
    let trimmed = timestamp.trim();

    if trimmed.ends_with('Z') {
        return trimmed.parse::<DateTime<Utc>>().ok();
    }

    let clock = trimmed.strip_suffix(LEGACY_SUFFIX)?;
    let time = NaiveTime::parse_from_str(clock.trim(), "%I:%M %p").ok()?;
    Some(today.and_time(time).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 4, 17).unwrap()
    }

    #[test]
    fn test_iso_timestamp_all_formats() {
        let ts = "2016-04-17T08:00:00Z";
        assert_eq!(to_local_with_offset(ts, utc(), true, true), "Sun 17, 08:00 AM");
        assert_eq!(to_local_with_offset(ts, utc(), true, false), "08:00 AM");
        assert_eq!(to_local_with_offset(ts, utc(), false, true), "Sun 17, 08:00");
        assert_eq!(to_local_with_offset(ts, utc(), false, false), "08:00");
    }

    #[test]
    fn test_iso_timestamp_with_offset_crosses_midnight() {
        let helsinki_summer = FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(
            to_local_with_offset("2016-04-17T22:30:00Z", helsinki_summer, false, true),
            "Mon 18, 01:30"
        );

        let new_york = FixedOffset::west_opt(4 * 3600).unwrap();
        assert_eq!(
            to_local_with_offset("2016-04-17T02:00:00Z", new_york, true, false),
            "10:00 PM"
        );
    }

    #[test]
    fn test_legacy_live_time() {
        assert_eq!(convert("8:00 PM UTC", utc(), day(), false, false), "20:00");
        assert_eq!(convert("8:00 PM UTC", utc(), day(), true, true), "Sun 17, 08:00 PM");

        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(convert("11:30 AM UTC", cet, day(), false, false), "12:30");
    }

    #[test]
    fn test_unrecognised_input_is_returned_unchanged() {
        assert_eq!(to_local("63'", true, false), "63'");
        assert_eq!(to_local("FT", false, false), "FT");
        assert_eq!(to_local("", false, true), "");
        assert_eq!(to_local("garbageZ", false, true), "garbageZ");
    }
}

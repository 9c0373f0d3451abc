use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};

use crate::models::{DayHours, Hours};

/// Sentinel opening/closing value meaning the clinic never closes that day.
const OPEN_ALL_DAY: &str = "open 24 hours";

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a wall-clock time string from the dataset or a filter window.
///
/// Accepts "h:mmam"/"h:mmpm" 12-hour forms (hour 12 with "am" maps to 0,
/// "pm" adds 12 for hours below 12) and plain "HH:mm" 24-hour forms.
/// Minutes are optional.
pub fn parse_clock(raw: &str) -> Option<NaiveTime> {
    let lowered = raw.trim().to_ascii_lowercase();
    let (digits, meridiem) = if let Some(rest) = lowered.strip_suffix("am") {
        (rest.trim_end(), Some(false))
    } else if let Some(rest) = lowered.strip_suffix("pm") {
        (rest.trim_end(), Some(true))
    } else {
        (lowered.as_str(), None)
    };

    let mut parts = digits.splitn(2, ':');
    let hour: u32 = parts.next()?.trim().parse().ok()?;
    let minute: u32 = match parts.next() {
        Some(m) => m.trim().parse().ok()?,
        None => 0,
    };

    let hour = match meridiem {
        Some(true) if hour < 12 => hour + 12,
        Some(false) if hour == 12 => 0,
        _ => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn is_all_day(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(OPEN_ALL_DAY)
}

/// The day's opening/closing strings, if the clinic is not closed that day.
fn span_for<'a>(hours: &'a Hours, day: Weekday) -> Option<(&'a str, &'a str)> {
    match hours.for_day(weekday_name(day))? {
        DayHours::Span { opening, closing } => Some((opening, closing)),
        DayHours::Closed(_) => None,
    }
}

/// Whether the clinic is open at `at`, by the detail-panel rule.
///
/// A span whose closing time is before its opening time (intended to wrap
/// past midnight) reads as closed whenever the plain inequality fails; see
/// [`is_open_at_overnight`] for the wraparound-aware rule.
pub fn is_open_at(hours: &Hours, at: NaiveDateTime) -> bool {
    let (opening, closing) = match span_for(hours, at.weekday()) {
        Some(span) => span,
        None => return false,
    };
    if is_all_day(opening) || is_all_day(closing) {
        return true;
    }
    let (open, close) = match (parse_clock(opening), parse_clock(closing)) {
        (Some(open), Some(close)) => (open, close),
        // Unparsable hours degrade to "closed", never to an error.
        _ => return false,
    };

    let t = at.time();
    open <= t && t <= close
}

/// Whether the clinic is open at `at`, treating a closing time earlier than
/// the opening time as a span that wraps past midnight.
pub fn is_open_at_overnight(hours: &Hours, at: NaiveDateTime) -> bool {
    let (opening, closing) = match span_for(hours, at.weekday()) {
        Some(span) => span,
        None => return false,
    };
    if is_all_day(opening) || is_all_day(closing) {
        return true;
    }
    let (open, close) = match (parse_clock(opening), parse_clock(closing)) {
        (Some(open), Some(close)) => (open, close),
        _ => return false,
    };

    let t = at.time();
    if close < open {
        t >= open || t <= close
    } else {
        open <= t && t <= close
    }
}

/// Whether the clinic's span on `day` overlaps the half-open window
/// `[start, end)`. Missing or Closed entries fail the window.
pub fn is_open_in_window(hours: &Hours, day: Weekday, start: NaiveTime, end: NaiveTime) -> bool {
    let (opening, closing) = match span_for(hours, day) {
        Some(span) => span,
        None => return false,
    };
    if is_all_day(opening) || is_all_day(closing) {
        return true;
    }
    let (open, close) = match (parse_clock(opening), parse_clock(closing)) {
        (Some(open), Some(close)) => (open, close),
        _ => return false,
    };

    !(close <= start || open >= end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn clock(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn weekday_hours(json: &str) -> Hours {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_twelve_hour_times() {
        assert_eq!(parse_clock("8:00am"), Some(clock(8, 0)));
        assert_eq!(parse_clock("5:00pm"), Some(clock(17, 0)));
        assert_eq!(parse_clock("12:00am"), Some(clock(0, 0)));
        assert_eq!(parse_clock("12:30pm"), Some(clock(12, 30)));
        assert_eq!(parse_clock(" 11:59PM "), Some(clock(23, 59)));
        assert_eq!(parse_clock("9am"), Some(clock(9, 0)));
    }

    #[test]
    fn parses_twenty_four_hour_times() {
        assert_eq!(parse_clock("17:30"), Some(clock(17, 30)));
        assert_eq!(parse_clock("00:00"), Some(clock(0, 0)));
    }

    #[test]
    fn rejects_garbage_times() {
        assert_eq!(parse_clock(""), None);
        assert_eq!(parse_clock("noon"), None);
        assert_eq!(parse_clock("25:00"), None);
        assert_eq!(parse_clock("8:61am"), None);
    }

    #[test]
    fn monday_span_opens_and_closes() {
        let hours = weekday_hours(r#"{"Monday":{"opening":"8:00am","closing":"5:00pm"}}"#);

        // 2025-06-02 is a Monday.
        assert!(is_open_at(&hours, at(2025, 6, 2, 10, 0)));
        assert!(is_open_at(&hours, at(2025, 6, 2, 8, 0)));
        assert!(is_open_at(&hours, at(2025, 6, 2, 17, 0)));
        assert!(!is_open_at(&hours, at(2025, 6, 2, 18, 0)));
        // Tuesday has no entry.
        assert!(!is_open_at(&hours, at(2025, 6, 3, 10, 0)));
    }

    #[test]
    fn closed_sentinel_means_closed() {
        let hours = weekday_hours(r#"{"Monday":"Closed"}"#);
        assert!(!is_open_at(&hours, at(2025, 6, 2, 10, 0)));
        assert!(!is_open_at_overnight(&hours, at(2025, 6, 2, 10, 0)));
    }

    #[test]
    fn open_24_hours_covers_the_whole_day() {
        let hours =
            weekday_hours(r#"{"Wednesday":{"opening":"Open 24 hours","closing":"Open 24 hours"}}"#);

        // 2025-06-04 is a Wednesday.
        assert!(is_open_at(&hours, at(2025, 6, 4, 0, 0)));
        assert!(is_open_at(&hours, at(2025, 6, 4, 23, 59)));
        assert!(is_open_at(&hours, at(2025, 6, 4, 12, 0)));
        // But not on Thursday.
        assert!(!is_open_at(&hours, at(2025, 6, 5, 12, 0)));
    }

    #[test]
    fn blank_endpoint_reads_as_open_all_day() {
        let hours = weekday_hours(r#"{"Monday":{"opening":"","closing":"5:00pm"}}"#);
        assert!(is_open_at(&hours, at(2025, 6, 2, 23, 0)));
    }

    #[test]
    fn unparsable_span_reads_as_closed() {
        let hours = weekday_hours(r#"{"Monday":{"opening":"early","closing":"late"}}"#);
        assert!(!is_open_at(&hours, at(2025, 6, 2, 10, 0)));
        assert!(!is_open_in_window(
            &hours,
            Weekday::Mon,
            clock(8, 0),
            clock(14, 0)
        ));
    }

    #[test]
    fn overnight_span_diverges_between_the_two_variants() {
        // Friday 8:00am - 2:00am, a span that wraps past midnight.
        let hours = weekday_hours(r#"{"Friday":{"opening":"8:00am","closing":"2:00am"}}"#);

        // 2025-06-06 is a Friday. At 11pm the plain inequality fails but the
        // wraparound rule holds.
        let late_friday = at(2025, 6, 6, 23, 0);
        assert!(!is_open_at(&hours, late_friday));
        assert!(is_open_at_overnight(&hours, late_friday));

        // Both agree mid-afternoon and before opening.
        let afternoon = at(2025, 6, 6, 15, 0);
        assert!(is_open_at(&hours, afternoon));
        assert!(is_open_at_overnight(&hours, afternoon));
        let early = at(2025, 6, 6, 1, 0);
        assert!(!is_open_at(&hours, early));
        assert!(is_open_at_overnight(&hours, early));
    }

    #[test]
    fn window_overlap_is_half_open() {
        let hours = weekday_hours(r#"{"Monday":{"opening":"9:00am","closing":"1:00pm"}}"#);

        // Overlapping window.
        assert!(is_open_in_window(
            &hours,
            Weekday::Mon,
            clock(8, 0),
            clock(14, 0)
        ));
        // Window ends exactly when the clinic opens: no overlap.
        assert!(!is_open_in_window(
            &hours,
            Weekday::Mon,
            clock(7, 0),
            clock(9, 0)
        ));
        // Window starts exactly when the clinic closes: no overlap.
        assert!(!is_open_in_window(
            &hours,
            Weekday::Mon,
            clock(13, 0),
            clock(15, 0)
        ));
        // Missing day fails.
        assert!(!is_open_in_window(
            &hours,
            Weekday::Tue,
            clock(8, 0),
            clock(14, 0)
        ));
    }

    #[test]
    fn window_accepts_all_day_entries() {
        let hours =
            weekday_hours(r#"{"Monday":{"opening":"Open 24 hours","closing":"Open 24 hours"}}"#);
        assert!(is_open_in_window(
            &hours,
            Weekday::Mon,
            clock(2, 0),
            clock(3, 0)
        ));
    }
}

//! Time formatting and host clock queries.
//!
//! The formatter turns a wall-clock timestamp into the four short strings the
//! face displays. It is a pure function of `(now, use_24h)`: no hidden state,
//! idempotent, called once eagerly at window load and once per minute tick.
//!
//! # Optimization: Heapless Strings
//!
//! The four display strings are bounded `heapless::String` buffers written
//! with `core::fmt::Write`. Their maxima are known at compile time (two
//! digits for hour/minute/date, three letters for the weekday), so the tick
//! path never touches the heap and the buffers are reused in place.
//!
//! # 12-hour Hours
//!
//! The original face formatted `%I` and then stripped a leading `'0'` from
//! the buffer. chrono's `hour12()` already yields 1..=12, so "1".."12" falls
//! out directly: no stripping, nothing to misfire on "10" or "12", and
//! midnight is "12" rather than "0".

use core::fmt::Write;

use chrono::{Datelike, Local, NaiveDateTime, Timelike, Weekday};
use heapless::String;

// =============================================================================
// Host Clock Queries
// =============================================================================

/// The two clock queries the host exposes to the watchface.
///
/// Production code uses [`SystemClock`]; tests substitute a fixed clock so
/// the formatter and lifecycle can be driven deterministically.
pub trait HostClock {
    /// Current wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Whether the user prefers 24-hour time display.
    fn is_24h_style(&self) -> bool;
}

/// Host clock backed by the local system time.
///
/// The 24-hour preference stands in for the platform locale query: it
/// defaults to 24-hour style and flips to 12-hour when the `WATCHFACE_12H`
/// environment variable is set. Read once at construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    use_24h: bool,
}

impl SystemClock {
    /// Build a clock with the display preference taken from the environment.
    pub fn from_env() -> Self {
        Self {
            use_24h: std::env::var_os("WATCHFACE_12H").is_none(),
        }
    }
}

impl HostClock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn is_24h_style(&self) -> bool {
        self.use_24h
    }
}

// =============================================================================
// Display Strings
// =============================================================================

/// The four short text values shown on the face.
///
/// Buffer capacities are compile-time maxima: hour/minute/date never exceed
/// two digits, the weekday abbreviation never exceeds three letters. The
/// buffers are created at window load and rewritten in place on each tick.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DisplayStrings {
    /// Hour field: "00".."23" in 24-hour style, "1".."12" otherwise.
    pub hour: String<3>,
    /// Minute field, always two digits: "00".."59".
    pub minute: String<3>,
    /// Day-of-month field, always two digits: "01".."31".
    pub date: String<3>,
    /// Weekday field, locale-independent three-letter abbreviation.
    pub day: String<4>,
}

impl DisplayStrings {
    /// Rewrite all four strings in place from a timestamp.
    ///
    /// Writes cannot fail: every formatted value fits its buffer capacity by
    /// construction.
    pub fn update(&mut self, now: NaiveDateTime, use_24h: bool) {
        self.hour.clear();
        if use_24h {
            let _ = write!(self.hour, "{:02}", now.hour());
        } else {
            // hour12() yields 1..=12; no leading zero by construction.
            let (_, hour12) = now.hour12();
            let _ = write!(self.hour, "{hour12}");
        }

        self.minute.clear();
        let _ = write!(self.minute, "{:02}", now.minute());

        self.date.clear();
        let _ = write!(self.date, "{:02}", now.day());

        self.day.clear();
        let _ = self.day.push_str(weekday_abbrev(now.weekday()));
    }
}

/// Format a timestamp into fresh display strings.
///
/// Pure over `(now, use_24h)`; [`DisplayStrings::update`] is the in-place
/// variant used on the tick path.
pub fn format_time(now: NaiveDateTime, use_24h: bool) -> DisplayStrings {
    let mut strings = DisplayStrings::default();
    strings.update(now, use_24h);
    strings
}

/// Locale-independent 3-letter weekday abbreviation.
///
/// An explicit match rather than strftime `%a`, which would be at the mercy
/// of the host locale.
fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        // 2024-01-07 was a Sunday.
        NaiveDate::from_ymd_opt(2024, 1, 7)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn on_day(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    // -------------------------------------------------------------------------
    // Hour Formatting
    // -------------------------------------------------------------------------

    #[test]
    fn test_hour_24h_is_zero_padded() {
        assert_eq!(format_time(at(0, 0), true).hour, "00", "midnight should be 00 in 24h style");
        assert_eq!(format_time(at(9, 0), true).hour, "09", "9am should be zero-padded in 24h style");
        assert_eq!(format_time(at(23, 0), true).hour, "23", "11pm should be 23 in 24h style");
    }

    #[test]
    fn test_hour_12h_midnight_is_twelve() {
        // Never "0" or "00": 12-hour midnight reads 12.
        assert_eq!(format_time(at(0, 15), false).hour, "12");
    }

    #[test]
    fn test_hour_12h_strips_leading_zero() {
        assert_eq!(format_time(at(1, 0), false).hour, "1", "1am should have no leading zero");
        assert_eq!(format_time(at(9, 0), false).hour, "9", "9am should have no leading zero");
        assert_eq!(format_time(at(13, 0), false).hour, "1", "1pm should read 1");
    }

    #[test]
    fn test_hour_12h_two_digit_hours_untouched() {
        // The interesting cases from the original's buffer fixup: a leading
        // '1' must never be mistaken for a strippable zero.
        assert_eq!(format_time(at(10, 0), false).hour, "10");
        assert_eq!(format_time(at(11, 0), false).hour, "11");
        assert_eq!(format_time(at(12, 0), false).hour, "12", "noon should read 12");
        assert_eq!(format_time(at(22, 0), false).hour, "10", "10pm should read 10");
    }

    // -------------------------------------------------------------------------
    // Minute and Date Formatting
    // -------------------------------------------------------------------------

    #[test]
    fn test_minute_always_two_digits() {
        assert_eq!(format_time(at(12, 0), true).minute, "00");
        assert_eq!(format_time(at(12, 5), true).minute, "05", "minute 5 should be zero-padded");
        assert_eq!(format_time(at(12, 59), true).minute, "59");
    }

    #[test]
    fn test_date_always_two_digits() {
        assert_eq!(format_time(on_day(2024, 1, 7), true).date, "07");
        assert_eq!(format_time(on_day(2024, 1, 31), true).date, "31");
    }

    // -------------------------------------------------------------------------
    // Weekday Abbreviations
    // -------------------------------------------------------------------------

    #[test]
    fn test_known_sunday_and_saturday() {
        assert_eq!(format_time(on_day(2024, 1, 7), true).day, "Sun", "2024-01-07 was a Sunday");
        assert_eq!(format_time(on_day(2024, 1, 6), true).day, "Sat", "2024-01-06 was a Saturday");
    }

    #[test]
    fn test_full_week_of_abbreviations() {
        // 2024-01-01 was a Monday; the first week of 2024 covers all seven.
        let expected = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        for (offset, abbrev) in expected.iter().enumerate() {
            let strings = format_time(on_day(2024, 1, 1 + offset as u32), true);
            assert_eq!(strings.day, *abbrev, "wrong abbreviation for 2024-01-{:02}", 1 + offset);
        }
    }

    // -------------------------------------------------------------------------
    // Determinism and In-place Update
    // -------------------------------------------------------------------------

    #[test]
    fn test_format_time_is_idempotent() {
        let now = at(18, 42);
        assert_eq!(format_time(now, true), format_time(now, true));
        assert_eq!(format_time(now, false), format_time(now, false));
    }

    #[test]
    fn test_update_in_place_replaces_previous_values() {
        let mut strings = format_time(at(9, 5), true);
        assert_eq!(strings.hour, "09");

        strings.update(at(23, 59), true);
        assert_eq!(strings.hour, "23", "stale hour must be fully replaced");
        assert_eq!(strings.minute, "59", "stale minute must be fully replaced");
    }

    #[test]
    fn test_strings_are_never_empty() {
        for hour in 0..24 {
            for use_24h in [true, false] {
                let strings = format_time(at(hour, 0), use_24h);
                assert!(!strings.hour.is_empty());
                assert!(!strings.minute.is_empty());
                assert!(!strings.date.is_empty());
                assert!(!strings.day.is_empty());
            }
        }
    }

    #[test]
    fn test_system_clock_default_style() {
        // Without the env override the clock reports 24-hour style.
        // (Set/removed in other processes only; tests avoid mutating env.)
        let clock = SystemClock { use_24h: true };
        assert!(clock.is_24h_style());
    }
}

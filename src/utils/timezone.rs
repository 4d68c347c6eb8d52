//! Reporting timezone helpers
//!
//! All period boundaries ("today", start of week/month/year) are evaluated
//! in Cambodia time regardless of where the bot or its users run.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Asia/Phnom_Penh is UTC+7 year-round with no daylight saving, so a fixed
/// offset is exact.
const PHNOM_PENH_OFFSET_SECS: i32 = 7 * 3600;

pub fn reporting_offset() -> FixedOffset {
    FixedOffset::east_opt(PHNOM_PENH_OFFSET_SECS).expect("UTC+7 is a valid offset")
}

/// Current datetime in the reporting timezone.
pub fn now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&reporting_offset())
}

/// Current calendar date in the reporting timezone.
pub fn today() -> NaiveDate {
    now().date_naive()
}

/// ISO date string (`YYYY-MM-DD`) for passing to SQL.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn offset_is_seven_hours_east() {
        assert_eq!(reporting_offset().local_minus_utc(), 7 * 3600);
    }

    #[test]
    fn late_utc_evening_is_next_day_in_phnom_penh() {
        let utc = Utc.with_ymd_and_hms(2026, 8, 23, 18, 30, 0).unwrap();
        let local = utc.with_timezone(&reporting_offset());
        assert_eq!(iso_date(local.date_naive()), "2026-08-24");
    }

    #[test]
    fn early_utc_morning_is_same_day() {
        let utc = Utc.with_ymd_and_hms(2026, 8, 24, 3, 0, 0).unwrap();
        let local = utc.with_timezone(&reporting_offset());
        assert_eq!(iso_date(local.date_naive()), "2026-08-24");
    }
}

use chrono::{Datelike, Duration, NaiveDate};

/// Reporting period for totals and exports.
///
/// `Week` is a rolling last-7-days window; `Month` and `Year` start at the
/// calendar boundary. All boundaries are computed against the reporting
/// timezone's current date (see `utils::timezone`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    Week,
    Month,
    Year,
    All,
}

impl Period {
    pub fn parse(s: &str) -> Option<Period> {
        match s.to_lowercase().as_str() {
            "today" => Some(Period::Today),
            "week" => Some(Period::Week),
            "month" => Some(Period::Month),
            "year" => Some(Period::Year),
            "all" => Some(Period::All),
            _ => None,
        }
    }

    /// First date included in the period, `None` meaning unbounded.
    pub fn start_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Period::Today => Some(today),
            Period::Week => Some(today - Duration::days(7)),
            Period::Month => today.with_day(1),
            Period::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1),
            Period::All => None,
        }
    }

    /// Lowercase keyword, as used in command arguments and filenames.
    pub fn name(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
            Period::All => "all",
        }
    }

    /// Human-readable label for embed titles.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Today => "Today's",
            Period::Week => "This Week's",
            Period::Month => "This Month's",
            Period::Year => "This Year's",
            Period::All => "All-Time",
        }
    }

    /// Datestamp suffix for export filenames.
    pub fn file_stamp(&self, today: NaiveDate) -> String {
        match self {
            Period::Month => today.format("%Y%m").to_string(),
            Period::Year => today.year().to_string(),
            _ => today.format("%Y%m%d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Period::parse("Week"), Some(Period::Week));
        assert_eq!(Period::parse("ALL"), Some(Period::All));
        assert_eq!(Period::parse("fortnight"), None);
    }

    #[test]
    fn today_starts_today() {
        let today = date(2026, 8, 24);
        assert_eq!(Period::Today.start_date(today), Some(today));
    }

    #[test]
    fn week_is_rolling_seven_days() {
        let today = date(2026, 8, 24);
        assert_eq!(Period::Week.start_date(today), Some(date(2026, 8, 17)));
    }

    #[test]
    fn month_and_year_start_at_calendar_boundary() {
        let today = date(2026, 8, 24);
        assert_eq!(Period::Month.start_date(today), Some(date(2026, 8, 1)));
        assert_eq!(Period::Year.start_date(today), Some(date(2026, 1, 1)));
    }

    #[test]
    fn all_is_unbounded() {
        assert_eq!(Period::All.start_date(date(2026, 8, 24)), None);
    }

    #[test]
    fn file_stamps() {
        let today = date(2026, 8, 24);
        assert_eq!(Period::Week.file_stamp(today), "20260824");
        assert_eq!(Period::Month.file_stamp(today), "202608");
        assert_eq!(Period::Year.file_stamp(today), "2026");
    }
}

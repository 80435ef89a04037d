use chrono::{DateTime, Datelike, Duration, Months, TimeZone, Utc};

/// Relative publish-date filter offered in the post list sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    LastWeek,
    LastMonth,
    LastThreeMonths,
    ThisYear,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [
        DateRange::LastWeek,
        DateRange::LastMonth,
        DateRange::LastThreeMonths,
        DateRange::ThisYear,
    ];

    pub fn from_keyword(keyword: &str) -> Option<DateRange> {
        Self::ALL.into_iter().find(|range| range.keyword() == keyword)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            DateRange::LastWeek => "last-week",
            DateRange::LastMonth => "last-month",
            DateRange::LastThreeMonths => "last-3-months",
            DateRange::ThisYear => "this-year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::LastWeek => "Last week",
            DateRange::LastMonth => "Last month",
            DateRange::LastThreeMonths => "Last 3 months",
            DateRange::ThisYear => "This year",
        }
    }

    /// Earliest publish time matched by the range. Month arithmetic clamps to
    /// the last day of the target month. `ThisYear` starts at midnight in the
    /// time zone of `now`.
    pub fn lower_bound<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<DateTime<Utc>> {
        let bound = match self {
            DateRange::LastWeek => now.clone().checked_sub_signed(Duration::days(7)),
            // Clamps (Mar 31 - 1 month is Feb 29) instead of rolling over into March
            DateRange::LastMonth => now.clone().checked_sub_months(Months::new(1)),
            DateRange::LastThreeMonths => now.clone().checked_sub_months(Months::new(3)),
            DateRange::ThisYear => now.timezone().with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0).earliest(),
        };
        bound.map(|date_time| date_time.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, mn: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, mn, 0).unwrap()
    }

    #[test]
    fn test_keywords() {
        for range in DateRange::ALL {
            assert_eq!(DateRange::from_keyword(range.keyword()), Some(range));
        }
        assert_eq!(DateRange::from_keyword("last-year"), None);
        assert_eq!(DateRange::from_keyword(""), None);
        assert_eq!(DateRange::from_keyword("Last-Week"), None);
        assert_eq!(DateRange::LastThreeMonths.label(), "Last 3 months");
    }

    #[test]
    fn test_lower_bounds() {
        let now = utc(2024, 3, 31, 10, 30);
        assert_eq!(DateRange::LastWeek.lower_bound(&now), Some(utc(2024, 3, 24, 10, 30)));
        assert_eq!(DateRange::LastMonth.lower_bound(&now), Some(utc(2024, 2, 29, 10, 30)));
        assert_eq!(DateRange::LastThreeMonths.lower_bound(&now), Some(utc(2023, 12, 31, 10, 30)));
        assert_eq!(DateRange::ThisYear.lower_bound(&now), Some(utc(2024, 1, 1, 0, 0)));
    }

    #[test]
    fn test_bounds_are_not_cumulative() {
        let now = utc(2024, 7, 15, 0, 0);
        assert_eq!(DateRange::LastMonth.lower_bound(&now), Some(utc(2024, 6, 15, 0, 0)));
        assert_eq!(DateRange::LastThreeMonths.lower_bound(&now), Some(utc(2024, 4, 15, 0, 0)));
    }

    #[test]
    fn test_this_year_uses_local_midnight() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = offset.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap();
        assert_eq!(DateRange::ThisYear.lower_bound(&now), Some(utc(2023, 12, 31, 22, 0)));
    }
}

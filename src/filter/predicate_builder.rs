use chrono::{DateTime, TimeZone};
use spdlog::debug;

use crate::filter::date_range::DateRange;
use crate::filter::read_time::{ReadTimeBucket, ReadTimeRange};
use crate::filter::{Condition, QueryPredicate, ReadTimeClause};

/// Builds the published-post query for the selected filters.
/// Unknown keywords add no constraint.
pub fn build_predicate<Tz: TimeZone>(
    category_ids: &[String],
    date_keyword: &str,
    read_time_keyword: &str,
    now: &DateTime<Tz>,
) -> QueryPredicate {
    let mut predicate = QueryPredicate::published();

    if !category_ids.is_empty() {
        predicate.category = Some(Condition::In(category_ids.to_vec()));
    }

    match DateRange::from_keyword(date_keyword) {
        Some(range) => {
            predicate.published_at = range.lower_bound(now).map(Condition::GreaterThan);
        }
        None if !date_keyword.is_empty() => {
            debug!("Ignoring unknown date filter '{}'", date_keyword);
        }
        None => {}
    }

    match ReadTimeBucket::from_keyword(read_time_keyword) {
        Some(bucket) => apply_read_time(&mut predicate, bucket.range()),
        None if !read_time_keyword.is_empty() => {
            debug!("Ignoring unknown read time filter '{}'", read_time_keyword);
        }
        None => {}
    }

    predicate
}

fn apply_read_time(predicate: &mut QueryPredicate, range: ReadTimeRange) {
    match (range.min, range.max) {
        (Some(min), Some(max)) => {
            predicate.and.push(ReadTimeClause { read_time: Condition::GreaterThanEqual(min) });
            predicate.and.push(ReadTimeClause { read_time: Condition::LessThanEqual(max) });
        }
        (None, Some(max)) => predicate.read_time = Some(Condition::LessThanEqual(max)),
        (Some(min), None) => predicate.read_time = Some(Condition::GreaterThanEqual(min)),
        (None, None) => {}
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 20, 14, 0, 0).unwrap()
    }

    #[test]
    fn test_no_filters() {
        let predicate = build_predicate(&[], "", "", &now());
        assert_eq!(predicate, QueryPredicate::published());
    }

    #[test]
    fn test_unknown_keywords_are_ignored() {
        let predicate = build_predicate(&[], "yesterday", "forever", &now());
        assert_eq!(predicate, QueryPredicate::published());
    }

    #[test]
    fn test_categories_week_and_short_reads() {
        let ids = vec!["catA".to_string(), "catB".to_string()];
        let predicate = build_predicate(&ids, "last-week", "under-5", &now());
        assert_eq!(predicate, QueryPredicate {
            status: Condition::Equals("published".to_string()),
            category: Some(Condition::In(ids.clone())),
            published_at: Some(Condition::GreaterThan(now() - Duration::days(7))),
            read_time: Some(Condition::LessThanEqual(4)),
            and: vec![],
        });
    }

    #[test]
    fn test_this_year_and_medium_reads() {
        let predicate = build_predicate(&[], "this-year", "5-10", &now());
        assert_eq!(predicate.category, None);
        assert_eq!(predicate.published_at, Some(Condition::GreaterThan(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())));
        assert_eq!(predicate.read_time, None);
        assert_eq!(predicate.and, vec![
            ReadTimeClause { read_time: Condition::GreaterThanEqual(5) },
            ReadTimeClause { read_time: Condition::LessThanEqual(10) },
        ]);
    }

    #[test]
    fn test_long_reads() {
        let predicate = build_predicate(&[], "", "over-10", &now());
        assert_eq!(predicate.read_time, Some(Condition::GreaterThanEqual(11)));
        assert!(predicate.and.is_empty());
    }

    #[test]
    fn test_month_ranges() {
        let predicate = build_predicate(&[], "last-month", "", &now());
        assert_eq!(predicate.published_at, Some(Condition::GreaterThan(Utc.with_ymd_and_hms(2024, 4, 20, 14, 0, 0).unwrap())));

        let predicate = build_predicate(&[], "last-3-months", "", &now());
        assert_eq!(predicate.published_at, Some(Condition::GreaterThan(Utc.with_ymd_and_hms(2024, 2, 20, 14, 0, 0).unwrap())));
    }

    #[test]
    fn test_idempotent() {
        let ids = vec!["catA".to_string()];
        assert_eq!(build_predicate(&ids, "last-month", "5-10", &now()),
                   build_predicate(&ids, "last-month", "5-10", &now()));
    }
}

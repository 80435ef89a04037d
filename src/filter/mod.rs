use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::text_utils::serialize_timestamp;

pub mod category;
pub mod date_range;
pub mod predicate_builder;
pub mod read_time;
pub mod selection;

/// Only published posts are ever listed.
pub const PUBLISHED_STATUS: &str = "published";

/// One comparison, serialized the way the content store's `where` clause expects,
/// e.g. `{"greater_than_equal": 5}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Equals(String),
    In(Vec<String>),
    #[serde(serialize_with = "serialize_timestamp")]
    GreaterThan(DateTime<Utc>),
    GreaterThanEqual(u32),
    LessThanEqual(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadTimeClause {
    #[serde(rename = "readTime")]
    pub read_time: Condition,
}

/// Post list query. A two-sided read-time range lives in `and`; a one-sided
/// one in `read_time`. Both are never set together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPredicate {
    #[serde(rename = "_status")]
    pub status: Condition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Condition>,
    #[serde(rename = "publishedAt", skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Condition>,
    #[serde(rename = "readTime", skip_serializing_if = "Option::is_none")]
    pub read_time: Option<Condition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub and: Vec<ReadTimeClause>,
}

impl QueryPredicate {
    pub fn published() -> Self {
        QueryPredicate {
            status: Condition::Equals(PUBLISHED_STATUS.to_string()),
            category: None,
            published_at: None,
            read_time: None,
            and: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn to_json(predicate: &QueryPredicate) -> serde_json::Value {
        serde_json::to_value(predicate).unwrap()
    }

    #[test]
    fn test_status_only_json() {
        let predicate = QueryPredicate::published();
        assert_eq!(to_json(&predicate), json!({ "_status": { "equals": "published" } }));
    }

    #[test]
    fn test_full_json() {
        let predicate = QueryPredicate {
            status: Condition::Equals("published".to_string()),
            category: Some(Condition::In(vec!["c1".to_string(), "c2".to_string()])),
            published_at: Some(Condition::GreaterThan(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())),
            read_time: None,
            and: vec![
                ReadTimeClause { read_time: Condition::GreaterThanEqual(5) },
                ReadTimeClause { read_time: Condition::LessThanEqual(10) },
            ],
        };
        assert_eq!(to_json(&predicate), json!({
            "_status": { "equals": "published" },
            "category": { "in": ["c1", "c2"] },
            "publishedAt": { "greater_than": "2024-01-01T00:00:00.000Z" },
            "and": [
                { "readTime": { "greater_than_equal": 5 } },
                { "readTime": { "less_than_equal": 10 } }
            ]
        }));
    }

    #[test]
    fn test_one_sided_read_time_json() {
        let mut predicate = QueryPredicate::published();
        predicate.read_time = Some(Condition::LessThanEqual(4));
        assert_eq!(to_json(&predicate), json!({
            "_status": { "equals": "published" },
            "readTime": { "less_than_equal": 4 }
        }));
    }
}

use chrono::{DateTime, TimeZone};

use crate::filter::category::{resolve_category_ids, Category};
use crate::filter::predicate_builder::build_predicate;
use crate::filter::QueryPredicate;
use crate::query_string::QueryString;

pub const CATEGORIES_PARAM: &str = "categories";
pub const DATE_PARAM: &str = "date";
pub const READ_TIME_PARAM: &str = "readTime";

/// Filters picked in the post list sidebar, as raw URL values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSelection {
    pub categories: Vec<String>,
    pub date: String,
    pub read_time: String,
}

impl FilterSelection {
    pub fn from_query(qs: &QueryString) -> Self {
        FilterSelection {
            categories: qs.get_list(CATEGORIES_PARAM),
            date: qs.get(DATE_PARAM).unwrap_or_default().to_string(),
            read_time: qs.get(READ_TIME_PARAM).unwrap_or_default().to_string(),
        }
    }

    pub fn has_filters(&self) -> bool {
        !self.categories.is_empty() || !self.date.is_empty() || !self.read_time.is_empty()
    }

    pub fn toggle_category(&mut self, slug: &str) {
        if let Some(pos) = self.categories.iter().position(|s| s == slug) {
            self.categories.remove(pos);
        } else {
            self.categories.push(slug.to_string());
        }
    }

    /// Selecting the active date range again clears it.
    pub fn toggle_date(&mut self, keyword: &str) {
        Self::toggle_value(&mut self.date, keyword);
    }

    pub fn toggle_read_time(&mut self, keyword: &str) {
        Self::toggle_value(&mut self.read_time, keyword);
    }

    fn toggle_value(current: &mut String, keyword: &str) {
        if current.as_str() == keyword {
            current.clear();
        } else {
            *current = keyword.to_string();
        }
    }

    /// Query string for the selection, without the leading `?`. Empty when no filter is set.
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<(&str, String)> = vec![];
        if !self.categories.is_empty() {
            params.push((CATEGORIES_PARAM, self.categories.join(",")));
        }
        if !self.date.is_empty() {
            params.push((DATE_PARAM, self.date.clone()));
        }
        if !self.read_time.is_empty() {
            params.push((READ_TIME_PARAM, self.read_time.clone()));
        }
        serde_urlencoded::to_string(params).unwrap_or_default()
    }

    pub fn to_predicate<Tz: TimeZone>(&self, categories: &[Category], now: &DateTime<Tz>) -> QueryPredicate {
        let category_ids = resolve_category_ids(&self.categories, categories);
        build_predicate(&category_ids, &self.date, &self.read_time, now)
    }
}

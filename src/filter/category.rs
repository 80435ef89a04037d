use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
}

pub fn parse_categories(buf: &str) -> Result<Vec<Category>> {
    serde_json::from_str(buf).context("Error parsing category list")
}

pub fn load_categories(path: &Path) -> Result<Vec<Category>> {
    let buf = fs::read_to_string(path)
        .with_context(|| format!("Error opening category list {}", path.display()))?;
    parse_categories(&buf)
}

/// Ids of the categories whose slug was selected, in category-list order.
/// Slugs that match no category are dropped.
pub fn resolve_category_ids(slugs: &[String], categories: &[Category]) -> Vec<String> {
    if slugs.is_empty() {
        return vec![];
    }

    categories.iter()
        .filter(|category| slugs.contains(&category.slug))
        .map(|category| category.id.clone())
        .collect()
}

use std::collections::HashMap;

#[derive(PartialEq, Debug, Default)]
pub struct QueryString {
    items: HashMap<String, String>,
}

impl QueryString {
    /// Parses `a=1&b=2`. Malformed input yields an empty query string.
    /// When a key repeats, the last value wins.
    pub fn from(buf: &str) -> Self {
        let buf = buf.strip_prefix('?').unwrap_or(buf);
        let vs: Vec<(String, String)> = serde_urlencoded::from_str(buf).unwrap_or_else(|_| vec![]);
        let items: HashMap<String, String> = vs.into_iter().collect();

        QueryString {
            items,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(|v| v.as_str())
    }

    /// Comma separated values, empty entries dropped.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(val) => val.split(',')
                .filter(|x| !x.is_empty())
                .map(|s| s.to_string())
                .collect(),
            None => vec![],
        }
    }
}

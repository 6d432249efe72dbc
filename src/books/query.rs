//! OpenSearch query parameters
//!
//! [`SearchQuery`] is an insertion-ordered map of parameter names to values.
//! Setting a name that is already present replaces its value in place, so the
//! encoded query string is stable for a given sequence of builder calls.

use crate::error::{CiNiiError, Result};

/// Name of the API key parameter
pub const APPID_PARAM: &str = "appid";

/// Builder for CiNii Books OpenSearch parameters
///
/// # Example
///
/// ```
/// use cinii_client::SearchQuery;
///
/// let query = SearchQuery::new()
///     .keyword("夏目漱石")
///     .year_from(1990)
///     .count(50);
///
/// assert_eq!(query.get("q"), Some("夏目漱石"));
/// assert_eq!(query.to_query_string(), "q=%E5%A4%8F%E7%9B%AE%E6%BC%B1%E7%9F%B3&year_from=1990&count=50");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    params: Vec<(String, String)>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary parameter, replacing any previous value
    pub fn param<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.set(name, value);
        self
    }

    /// Set an arbitrary parameter in place
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        let name = name.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((name, value)),
        }
    }

    /// Free keyword search (`q`)
    pub fn keyword<S: Into<String>>(self, keyword: S) -> Self {
        self.param("q", keyword)
    }

    pub fn title<S: Into<String>>(self, title: S) -> Self {
        self.param("title", title)
    }

    pub fn author<S: Into<String>>(self, author: S) -> Self {
        self.param("author", author)
    }

    pub fn publisher<S: Into<String>>(self, publisher: S) -> Self {
        self.param("publisher", publisher)
    }

    pub fn isbn<S: Into<String>>(self, isbn: S) -> Self {
        self.param("isbn", isbn)
    }

    pub fn issn<S: Into<String>>(self, issn: S) -> Self {
        self.param("issn", issn)
    }

    pub fn ncid<S: Into<String>>(self, ncid: S) -> Self {
        self.param("ncid", ncid)
    }

    /// Earliest publication year
    pub fn year_from(self, year: u16) -> Self {
        self.param("year_from", year.to_string())
    }

    /// Latest publication year
    pub fn year_to(self, year: u16) -> Self {
        self.param("year_to", year.to_string())
    }

    /// Number of entries per page
    pub fn count(self, count: u32) -> Self {
        self.param("count", count.to_string())
    }

    /// 1-based index of the first entry
    pub fn start(self, start: u32) -> Self {
        self.param("start", start.to_string())
    }

    /// API key for this query; overrides the client's configured appid
    pub fn appid<S: Into<String>>(self, appid: S) -> Self {
        self.param(APPID_PARAM, appid)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a non-empty appid is present
    pub fn has_appid(&self) -> bool {
        self.get(APPID_PARAM).is_some_and(|v| !v.trim().is_empty())
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Reject queries that carry no search parameter besides the appid
    pub fn validate(&self) -> Result<()> {
        let has_criteria = self
            .params
            .iter()
            .any(|(k, v)| k != APPID_PARAM && !v.trim().is_empty());
        if has_criteria {
            Ok(())
        } else {
            Err(CiNiiError::InvalidQuery(
                "Search query has no parameters".to_string(),
            ))
        }
    }

    /// Percent-encoded `name=value` pairs joined by `&`, in insertion order
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SearchQuery {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = SearchQuery::new();
        for (k, v) in iter {
            query.set(k, v);
        }
        query
    }
}

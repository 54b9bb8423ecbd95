//! Addressable location made of a path and a form-urlencoded query.

use crate::query::QueryMap;
use log::*;
use reqwest::Url;
use std::fmt;

// Only used to borrow the url crate's form-urlencoded query handling.
const SCRATCH_ORIGIN: &str = "http://localhost/";

/// Path plus query state, as shared in bookmarks and links.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: QueryMap,
}

impl Location {
    pub fn new(path: &str, query: QueryMap) -> Location {
        Location {
            path: normalize_path(path),
            query,
        }
    }

    /// Parse `path?query`. Never fails: an unreadable query is dropped and an
    /// empty path becomes `/`.
    ///
    pub fn parse(raw: &str) -> Location {
        let raw = raw.trim();
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, query),
            None => (raw, ""),
        };
        Location::new(path, parse_query(query))
    }

    /// Render the query part alone, without the leading `?`.
    ///
    pub fn query_string(&self) -> String {
        if self.query.is_empty() {
            return String::new();
        }
        let pairs: Vec<(&str, &str)> = self.query.iter().collect();
        match Url::parse_with_params(SCRATCH_ORIGIN, &pairs) {
            Ok(url) => url.query().unwrap_or_default().to_owned(),
            Err(e) => {
                warn!("Failed to render query {:?}: {}", self.query, e);
                String::new()
            }
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query = self.query_string();
        if query.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}?{}", self.path, query)
        }
    }
}

fn normalize_path(path: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        String::from("/")
    } else if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{}", path)
    }
}

/// Decode a form-urlencoded query. Later duplicates win.
///
fn parse_query(query: &str) -> QueryMap {
    if query.is_empty() {
        return QueryMap::new();
    }
    let mut url = match Url::parse(SCRATCH_ORIGIN) {
        Ok(url) => url,
        Err(e) => {
            warn!("Failed to prepare query parser: {}", e);
            return QueryMap::new();
        }
    };
    url.set_query(Some(query));
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

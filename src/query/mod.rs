//! Query state module.
//!
//! This module holds the string-keyed representation of list state that is
//! reflected into the addressable location, and the codec translating it to and
//! from positional filter values plus a page number.

pub mod codec;

use std::collections::BTreeMap;

/// String-keyed, string-valued mapping reflected into the location query.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap(BTreeMap<String, String>);

impl QueryMap {
    /// Return a new empty instance.
    ///
    pub fn new() -> QueryMap {
        QueryMap(BTreeMap::new())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over key/value pairs in key order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        QueryMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_map_from_pairs() {
        let query: QueryMap = vec![("f0", "acme"), ("page", "2")].into_iter().collect();
        assert_eq!(query.len(), 2);
        assert_eq!(query.get("f0"), Some("acme"));
        assert_eq!(query.get("page"), Some("2"));
        assert_eq!(query.get("f1"), None);
    }

    #[test]
    fn test_query_map_insert_overwrites() {
        let mut query = QueryMap::new();
        query.insert("page", "1").insert("page", "4");
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("page"), Some("4"));
    }

    #[test]
    fn test_query_map_iter_is_key_ordered() {
        let query: QueryMap = vec![("page", "1"), ("f1", "b"), ("f0", "a")]
            .into_iter()
            .collect();
        let keys: Vec<&str> = query.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["f0", "f1", "page"]);
    }
}

//! Translation between positional filter values plus a page number and the
//! sparse [`QueryMap`] form.
//!
//! Decoding is total: missing, extra and malformed keys degrade to defaults.
//! The codec only parses the page; clamping it to a valid value is left to
//! the list controller.

use super::QueryMap;

/// Key holding the 1-based page number.
pub const PAGE_KEY: &str = "page";

/// Page assumed when the query carries none or an unparsable one.
pub const DEFAULT_PAGE: i64 = 1;

/// Return the query key for the filter slot at `index`.
///
pub fn slot_key(index: usize) -> String {
    format!("f{}", index)
}

/// Decode `field_count` filter values and the raw page from `raw`.
///
/// Missing slots decode to the empty string. A missing or non-numeric page
/// decodes to [`DEFAULT_PAGE`]; zero and negative pages are passed through.
///
pub fn decode(raw: &QueryMap, field_count: usize) -> (Vec<String>, i64) {
    let values = (0..field_count)
        .map(|i| raw.get(&slot_key(i)).unwrap_or_default().to_owned())
        .collect();
    let page = raw
        .get(PAGE_KEY)
        .and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_PAGE);
    (values, page)
}

/// Encode filter values and a page, omitting every empty slot.
///
pub fn encode<S: AsRef<str>>(values: &[S], page: i64) -> QueryMap {
    let mut raw = QueryMap::new();
    for (i, value) in values.iter().enumerate() {
        let value = value.as_ref();
        if !value.is_empty() {
            raw.insert(slot_key(i), value);
        }
    }
    raw.insert(PAGE_KEY, page.to_string());
    raw
}

/// Return the representation of an unfiltered list at its first page.
///
pub fn clear() -> QueryMap {
    QueryMap::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn query(pairs: &[(&str, &str)]) -> QueryMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_decode_empty_defaults() {
        for n in 0..5 {
            let (values, page) = decode(&QueryMap::new(), n);
            assert_eq!(values, vec![String::new(); n]);
            assert_eq!(page, 1);
        }
    }

    #[test]
    fn test_decode_non_numeric_page() {
        let (values, page) = decode(&query(&[("page", "abc"), ("f0", "x")]), 1);
        assert_eq!(values, vec!["x".to_string()]);
        assert_eq!(page, 1);
    }

    #[test]
    fn test_decode_passes_through_non_positive_page() {
        assert_eq!(decode(&query(&[("page", "0")]), 0).1, 0);
        assert_eq!(decode(&query(&[("page", "-3")]), 0).1, -3);
    }

    #[test]
    fn test_decode_ignores_unknown_and_out_of_range_keys() {
        let raw = query(&[("f0", "a"), ("f5", "ignored"), ("sort", "name"), ("page", "2")]);
        let (values, page) = decode(&raw, 2);
        assert_eq!(values, vec!["a".to_string(), String::new()]);
        assert_eq!(page, 2);
    }

    #[test]
    fn test_decode_page_overflow_defaults() {
        let (_, page) = decode(&query(&[("page", "99999999999999999999999")]), 0);
        assert_eq!(page, 1);
    }

    #[test]
    fn test_encode_is_sparse() {
        let raw = encode(&["acme", "", "active"], 1);
        assert_eq!(raw, query(&[("f0", "acme"), ("f2", "active"), ("page", "1")]));
        assert!(!raw.contains_key("f1"));
    }

    #[test]
    fn test_encode_always_emits_page() {
        let raw = encode::<&str>(&[], 7);
        assert_eq!(raw, query(&[("page", "7")]));
    }

    #[test]
    fn test_clear_is_empty() {
        assert!(clear().is_empty());
        assert_eq!(decode(&clear(), 3), (vec![String::new(); 3], 1));
    }

    proptest! {
        #[test]
        fn prop_round_trip(values in prop::collection::vec(".*", 0..8), page in 1i64..10_000) {
            let raw = encode(&values, page);
            prop_assert_eq!(decode(&raw, values.len()), (values, page));
        }

        #[test]
        fn prop_sparsity(values in prop::collection::vec("(|[a-z]{1,4})", 0..8), page in 1i64..100) {
            let raw = encode(&values, page);
            for (i, value) in values.iter().enumerate() {
                prop_assert_eq!(raw.contains_key(&slot_key(i)), !value.is_empty());
            }
            prop_assert!(raw.contains_key(PAGE_KEY));
        }
    }
}

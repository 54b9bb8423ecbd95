//! List controller.

use crate::navigation::History;
use crate::query::codec;
use log::*;

/// Effective query for one page of a list endpoint.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Non-empty filters in the view's field order.
    pub filters: Vec<(String, String)>,
    pub page: u64,
    pub page_size: u64,
}

impl ListQuery {
    /// Pair field names with positional values, dropping empty values.
    ///
    pub fn new<F: AsRef<str>, V: AsRef<str>>(
        fields: &[F],
        values: &[V],
        page: u64,
        page_size: u64,
    ) -> ListQuery {
        let filters = fields
            .iter()
            .zip(values.iter())
            .filter(|(_, value)| !value.as_ref().is_empty())
            .map(|(field, value)| (field.as_ref().to_owned(), value.as_ref().to_owned()))
            .collect();
        ListQuery {
            filters,
            page: page.max(1),
            page_size,
        }
    }

    /// Return request parameters: `page`, `pageSize`, then every filter.
    ///
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ];
        params.extend(self.filters.iter().cloned());
        params
    }
}

/// Single mutable authority over a list view's filter and page state.
///
/// Holds no copy of that state: every read decodes the query held by the
/// history and every write replaces it whole.
#[derive(Debug)]
pub struct ListController<H: History> {
    history: H,
    field_count: usize,
}

impl<H: History> ListController<H> {
    /// Return a controller over `field_count` positional filter slots.
    ///
    pub fn new(history: H, field_count: usize) -> Self {
        ListController {
            history,
            field_count,
        }
    }

    pub fn field_count(&self) -> usize {
        self.field_count
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Return exactly `field_count` filter values and a page of at least 1.
    ///
    pub fn read(&self) -> (Vec<String>, u64) {
        let (values, page) = codec::decode(&self.history.query(), self.field_count);
        (values, clamp_page(page))
    }

    /// Replace every filter value and return to the first page.
    ///
    /// # Panics
    /// Panics if `values` does not hold exactly `field_count` entries.
    pub fn update<S: AsRef<str>>(&mut self, values: &[S]) {
        assert_eq!(
            values.len(),
            self.field_count,
            "list filter arity mismatch"
        );
        debug!("Updating list filters, page reset to 1");
        self.history.set_query(codec::encode(values, 1));
    }

    /// Reset every filter and the page.
    ///
    pub fn clear(&mut self) {
        debug!("Clearing list filters");
        self.history.set_query(codec::clear());
    }

    /// Move to `page`, keeping the current filters. Pages below 1 become 1.
    ///
    pub fn set_page(&mut self, page: i64) {
        let (values, _) = self.read();
        let page = clamp_page(page);
        debug!("Moving list to page {}", page);
        self.history.set_query(codec::encode(&values, page as i64));
    }

    /// Return the effective query for the data source.
    ///
    /// # Panics
    /// Panics if `fields` does not hold exactly `field_count` names.
    pub fn query<F: AsRef<str>>(&self, fields: &[F], page_size: u64) -> ListQuery {
        assert_eq!(fields.len(), self.field_count, "list field arity mismatch");
        let (values, page) = self.read();
        ListQuery::new(fields, &values, page, page_size)
    }
}

fn clamp_page(page: i64) -> u64 {
    if page < 1 {
        1
    } else {
        page as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MemoryHistory;
    use crate::query::QueryMap;

    fn query(pairs: &[(&str, &str)]) -> QueryMap {
        pairs.iter().copied().collect()
    }

    fn controller(field_count: usize) -> ListController<MemoryHistory> {
        ListController::new(MemoryHistory::new(), field_count)
    }

    #[test]
    fn test_read_clamps_invalid_pages() {
        for raw in ["0", "-4"] {
            let list = ListController::new(MemoryHistory::with_query(query(&[("page", raw)])), 1);
            assert_eq!(list.read(), (vec![String::new()], 1));
        }
    }

    #[test]
    fn test_update_resets_page() {
        let mut list = ListController::new(
            MemoryHistory::with_query(query(&[("f0", "old"), ("page", "7")])),
            2,
        );
        list.update(&["new", "x"]);
        assert_eq!(list.read(), (vec!["new".to_string(), "x".to_string()], 1));
    }

    #[test]
    fn test_update_with_unchanged_values_still_resets_page() {
        let mut list = ListController::new(
            MemoryHistory::with_query(query(&[("f0", "acme"), ("page", "3")])),
            1,
        );
        list.update(&["acme"]);
        assert_eq!(list.read().1, 1);
    }

    #[test]
    fn test_update_last_write_wins() {
        let mut list = controller(2);
        list.update(&["a", "b"]);
        list.update(&["", "c"]);
        assert_eq!(list.history().query(), query(&[("f1", "c"), ("page", "1")]));
    }

    #[test]
    #[should_panic(expected = "arity mismatch")]
    fn test_update_wrong_arity_panics() {
        let mut list = controller(2);
        list.update(&["only one"]);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut list = ListController::new(
            MemoryHistory::with_query(query(&[("f0", "a"), ("page", "5")])),
            2,
        );
        list.clear();
        let once = list.history().query();
        list.clear();
        assert_eq!(list.history().query(), once);
        assert_eq!(list.read(), (vec![String::new(), String::new()], 1));
    }

    #[test]
    fn test_set_page_keeps_filters() {
        let mut list = controller(2);
        list.update(&["acme", ""]);
        list.set_page(4);
        assert_eq!(list.history().query(), query(&[("f0", "acme"), ("page", "4")]));
        list.set_page(-2);
        assert_eq!(list.read().1, 1);
    }

    #[test]
    fn test_two_field_scenario() {
        let mut list = controller(2);
        list.update(&["acme", ""]);
        assert_eq!(list.history().query(), query(&[("f0", "acme"), ("page", "1")]));
        assert_eq!(list.read(), (vec!["acme".to_string(), String::new()], 1));

        list.update(&["acme", "active"]);
        assert_eq!(
            list.history().query(),
            query(&[("f0", "acme"), ("f1", "active"), ("page", "1")])
        );

        list.history_mut()
            .set_query(query(&[("f0", "acme"), ("f1", "active"), ("page", "3")]));
        assert_eq!(
            list.read(),
            (vec!["acme".to_string(), "active".to_string()], 3)
        );

        list.clear();
        assert!(list.history().query().is_empty());
        assert_eq!(list.read(), (vec![String::new(), String::new()], 1));
    }

    #[test]
    fn test_back_restores_previous_filters() {
        let mut list = controller(1);
        list.update(&["first"]);
        list.update(&["second"]);
        assert!(list.history_mut().back());
        assert_eq!(list.read().0, vec!["first".to_string()]);
    }

    #[test]
    fn test_query_maps_fields_to_values() {
        let mut list = controller(3);
        list.update(&["acme", "", "active"]);
        list.set_page(2);
        let effective = list.query(&["name", "country", "status"], 25);
        assert_eq!(
            effective,
            ListQuery {
                filters: vec![
                    ("name".to_string(), "acme".to_string()),
                    ("status".to_string(), "active".to_string()),
                ],
                page: 2,
                page_size: 25,
            }
        );
        assert_eq!(
            effective.params(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("pageSize".to_string(), "25".to_string()),
                ("name".to_string(), "acme".to_string()),
                ("status".to_string(), "active".to_string()),
            ]
        );
    }

    #[test]
    fn test_controller_over_borrowed_history() {
        let mut history = MemoryHistory::new();
        {
            let mut list = ListController::new(&mut history, 1);
            list.update(&["acme"]);
        }
        assert_eq!(history.query(), query(&[("f0", "acme"), ("page", "1")]));
    }
}

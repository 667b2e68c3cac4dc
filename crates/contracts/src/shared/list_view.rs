//! Client-side quick filter and pagination shared by every list page.
//!
//! Lists hold the fetched collection untouched and derive the visible page
//! from a [`ListQuery`] on each change. Filtering never issues a request.

/// Rows per page on every list page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Text shown instead of a table when the filtered set is empty
pub const NO_RECORDS_FOUND: &str = "No records found";

/// Types that can be matched by the quick filter
pub trait Searchable {
    /// Display fields the filter is matched against
    fn search_fields(&self) -> Vec<String>;

    /// Case-insensitive substring match against any search field
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Number of pages needed for `count` rows. Never less than one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if count == 0 || page_size == 0 {
        1
    } else {
        count.div_ceil(page_size)
    }
}

/// Rows matching the filter, in their original order
pub fn filter_items<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Filter text plus the 1-based page index of a list page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    filter: String,
    page: usize,
    page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: String::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Update the filter text. A changed filter always lands on page 1.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        let filter = filter.into();
        if filter != self.filter {
            self.filter = filter;
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Filter and slice a fully fetched collection
    pub fn apply<T: Searchable + Clone>(&self, items: &[T]) -> ListPage<T> {
        let matched = filter_items(items, &self.filter);
        let total_count = matched.len();
        let total_pages = total_pages(total_count, self.page_size);
        let page = self.page.min(total_pages);
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(total_count);

        ListPage {
            items: matched.get(start..end).unwrap_or(&[]).to_vec(),
            page,
            total_pages,
            total_count,
        }
    }

    /// Filter one page that the server already sliced.
    ///
    /// Page numbers come from the server; the filter only narrows the rows
    /// of the page at hand.
    pub fn apply_to_server_page<T: Searchable + Clone>(
        &self,
        items: &[T],
        server: ServerPage,
    ) -> ListPage<T> {
        let matched = filter_items(items, &self.filter);
        ListPage {
            total_count: if self.filter.trim().is_empty() {
                server.total_count.max(matched.len())
            } else {
                matched.len()
            },
            items: matched,
            page: server.current_page.max(1),
            total_pages: server.total_pages.max(1),
        }
    }
}

/// Paging metadata reported by endpoints that paginate server-side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServerPage {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Visible slice of a list page
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 1,
            total_count: 0,
        }
    }
}

impl<T> ListPage<T> {
    /// True when the "no records found" state must be shown
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Pager caption, e.g. `2 / 3 (25)`
    pub fn caption(&self) -> String {
        format!("{} / {} ({})", self.page, self.total_pages, self.total_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<String> {
            vec![self.name.clone()]
        }
    }

    fn rows() -> Vec<Row> {
        let mut names: Vec<String> = (1..=22).map(|i| format!("Item {i:02}")).collect();
        names.push("Blue Widget".into());
        names.push("WIDGET pro".into());
        names.push("Mini widget".into());
        names.into_iter().map(|name| Row { name }).collect()
    }

    #[test]
    fn test_filter_matches_three_of_25_and_resets_page() {
        let data = rows();
        assert_eq!(data.len(), 25);

        let mut query = ListQuery::default();
        query.set_page(3);
        assert_eq!(query.page(), 3);

        query.set_filter("wIdGeT");
        assert_eq!(query.page(), 1);

        let page = query.apply(&data);
        let names: Vec<_> = page.items.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Blue Widget", "WIDGET pro", "Mini widget"]);
        assert_eq!(page.total_count, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_pagination_slices_by_page_size() {
        let data = rows();
        let mut query = ListQuery::default();

        let first = query.apply(&data);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_prev());
        assert!(first.has_next());

        query.set_page(3);
        let last = query.apply(&data);
        assert_eq!(last.items.len(), 5);
        assert_eq!(last.items[0].name, "Item 21");
        assert!(!last.has_next());
        assert_eq!(last.caption(), "3 / 3 (25)");
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let data = rows();
        let mut query = ListQuery::default();
        query.set_page(9);
        let page = query.apply(&data);
        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 5);
    }

    #[test]
    fn test_empty_result_reports_empty() {
        let data = rows();
        let mut query = ListQuery::default();
        query.set_filter("does-not-exist");
        let page = query.apply(&data);
        assert!(page.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_refilter_is_idempotent() {
        let data = rows();
        let snapshot = data.clone();
        let mut query = ListQuery::default();
        query.set_filter("item 1");
        let first = query.apply(&data);
        query.set_filter("item 1");
        let second = query.apply(&data);
        assert_eq!(first, second);
        assert_eq!(data, snapshot);
    }

    #[test]
    fn test_same_filter_keeps_page() {
        let mut query = ListQuery::default();
        query.set_filter("item");
        query.set_page(2);
        query.set_filter("item");
        assert_eq!(query.page(), 2);
    }

    #[test]
    fn test_blank_filter_matches_everything() {
        let data = rows();
        assert_eq!(filter_items(&data, "   ").len(), 25);
    }

    #[test]
    fn test_server_page_keeps_remote_paging() {
        let data = rows();
        let mut query = ListQuery::default();
        let server = ServerPage {
            current_page: 2,
            total_pages: 4,
            total_count: 40,
        };
        let page = query.apply_to_server_page(&data[..10], server);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total_count, 40);

        query.set_filter("item 0");
        let narrowed = query.apply_to_server_page(&data[..10], server);
        assert_eq!(narrowed.items.len(), 9);
        assert_eq!(narrowed.total_count, 9);
        assert_eq!(narrowed.page, 2);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }
}

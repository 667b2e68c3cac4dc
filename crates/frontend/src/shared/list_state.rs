//! State of list pages.
//!
//! [`ClientListState`] serves endpoints that return the whole collection:
//! filtering and paging happen here, never on the server.
//! [`ServerListState`] serves endpoints that page on the server: the filter
//! only narrows the page at hand and a page change means a new request.

use contracts::shared::list_view::{ListPage, ListQuery, Searchable, ServerPage};
use leptos::prelude::*;

use super::config::config;

#[derive(Clone, Debug)]
pub struct ClientListState<T> {
    /// Everything the server returned; never touched by filtering
    pub all: Vec<T>,
    pub query: ListQuery,
    /// What the table shows
    pub view: ListPage<T>,
    pub is_loaded: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Searchable + Clone> ClientListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            all: Vec::new(),
            query: ListQuery::new(page_size),
            view: ListPage::default(),
            is_loaded: false,
            loading: false,
            error: None,
        }
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.all = items;
        self.is_loaded = true;
        self.loading = false;
        self.error = None;
        self.refresh();
    }

    pub fn set_filter(&mut self, filter: String) {
        self.query.set_filter(filter);
        self.refresh();
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.set_page(page);
        self.refresh();
    }

    pub fn refresh(&mut self) {
        self.view = self.query.apply(&self.all);
        // Keep the stored page in sync with the clamped one
        self.query.set_page(self.view.page);
    }
}

#[derive(Clone, Debug)]
pub struct ServerListState<T> {
    /// Rows of the page the server returned
    pub rows: Vec<T>,
    pub server: ServerPage,
    /// Filter text; its page index is not used
    pub query: ListQuery,
    /// 1-based page to request next
    pub page: usize,
    pub page_size: usize,
    pub view: ListPage<T>,
    pub is_loaded: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Searchable + Clone> ServerListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            rows: Vec::new(),
            server: ServerPage::default(),
            query: ListQuery::new(page_size),
            page: 1,
            page_size: page_size.max(1),
            view: ListPage::default(),
            is_loaded: false,
            loading: false,
            error: None,
        }
    }

    pub fn set_page_data(&mut self, rows: Vec<T>, server: ServerPage) {
        self.rows = rows;
        self.server = server;
        self.page = server.current_page.max(1);
        self.is_loaded = true;
        self.loading = false;
        self.error = None;
        self.refresh();
    }

    pub fn set_filter(&mut self, filter: String) {
        self.query.set_filter(filter);
        self.refresh();
    }

    /// Store the page to request. Returns false when it is the current one.
    pub fn go_to(&mut self, page: usize) -> bool {
        let page = page.clamp(1, self.server.total_pages.max(1));
        if page == self.page && self.is_loaded {
            return false;
        }
        self.page = page;
        true
    }

    fn refresh(&mut self) {
        self.view = self.query.apply_to_server_page(&self.rows, self.server);
    }
}

pub fn create_list_state<T>() -> RwSignal<ClientListState<T>>
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    RwSignal::new(ClientListState::new(config().page_size))
}

pub fn create_server_list_state<T>() -> RwSignal<ServerListState<T>>
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    RwSignal::new(ServerListState::new(config().page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(String);

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<String> {
            vec![self.0.clone()]
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n).map(|i| Row(format!("row {i}"))).collect()
    }

    #[test]
    fn test_filter_resets_page() {
        let mut state = ClientListState::new(10);
        state.set_items(rows(25));
        state.set_page(3);
        assert_eq!(state.view.page, 3);

        state.set_filter("row 1".into());
        assert_eq!(state.view.page, 1);
        // row 1, row 10..=19
        assert_eq!(state.view.total_count, 11);
        assert_eq!(state.all.len(), 25);
    }

    #[test]
    fn test_reload_clamps_page() {
        let mut state = ClientListState::new(10);
        state.set_items(rows(25));
        state.set_page(3);
        state.set_items(rows(5));
        assert_eq!(state.view.page, 1);
        assert_eq!(state.query.page(), 1);
    }

    #[test]
    fn test_server_page_filter_stays_local() {
        let mut state = ServerListState::new(10);
        state.set_page_data(
            rows(10),
            ServerPage {
                current_page: 2,
                total_pages: 4,
                total_count: 37,
            },
        );
        assert_eq!(state.view.total_count, 37);

        state.set_filter("row 3".into());
        assert_eq!(state.view.items, vec![Row("row 3".into())]);
        assert_eq!(state.view.total_count, 1);
        // Filtering does not move to another server page
        assert_eq!(state.page, 2);
        assert_eq!(state.view.page, 2);
    }

    #[test]
    fn test_server_go_to_clamps() {
        let mut state: ServerListState<Row> = ServerListState::new(10);
        state.set_page_data(
            rows(10),
            ServerPage {
                current_page: 1,
                total_pages: 3,
                total_count: 30,
            },
        );
        assert!(!state.go_to(1));
        assert!(state.go_to(9));
        assert_eq!(state.page, 3);
        assert!(state.go_to(0));
        assert_eq!(state.page, 1);
    }
}

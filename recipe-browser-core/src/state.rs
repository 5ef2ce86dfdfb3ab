//! Application state for a browsing session: the fetched catalog, the
//! current query and its filtered view, the page position and the layout.
//!
//! Front-ends own one [`AppStatus`] and drive it through these methods; the
//! filtered view is only recomputed when the query changes, paging and
//! layout toggles reuse it.

use log::{debug, error};
use std::fmt;

use crate::dummyjson::{Recipe, RecipeCatalog};
use crate::filter::{Query, SortKey, compute_filtered_view, derive_categories};
use crate::pagination::{ITEMS_PER_PAGE, Page, PageCursor, paginate};

/// Shown in place of the results when the catalog could not be fetched.
pub const FETCH_ERROR_MESSAGE: &str = "Error loading recipes. Please try again later.";

#[derive(Debug, Clone)]
pub struct ViewState {
    catalog: RecipeCatalog,
    categories: Vec<String>,
    query: Query,
    filtered: Vec<Recipe>,
    cursor: PageCursor,
    is_grid_view: bool,
}

impl ViewState {
    pub fn new(catalog: RecipeCatalog) -> Self {
        Self::with_page_size(catalog, ITEMS_PER_PAGE)
    }

    pub fn with_page_size(catalog: RecipeCatalog, items_per_page: usize) -> Self {
        let categories = derive_categories(&catalog.recipes);
        let query = Query::default();
        let filtered = compute_filtered_view(&catalog.recipes, &query);
        let cursor = PageCursor::new(filtered.len(), items_per_page);

        Self {
            catalog,
            categories,
            query,
            filtered,
            cursor,
            is_grid_view: true,
        }
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn filtered(&self) -> &[Recipe] {
        &self.filtered
    }

    pub fn is_grid_view(&self) -> bool {
        self.is_grid_view
    }

    pub fn current_page(&self) -> usize {
        self.cursor.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.cursor.total_pages()
    }

    pub fn page(&self) -> Page<'_, Recipe> {
        paginate(
            &self.filtered,
            self.cursor.items_per_page,
            self.cursor.current_page as i64,
        )
    }

    /// Replace the whole query, recompute the filtered view and go back to
    /// page 1.
    pub fn apply_query(&mut self, query: Query) {
        self.query = query;
        self.refilter();
    }

    pub fn set_search(&mut self, search_term: &str) {
        self.query.search_term = search_term.to_string();
        self.refilter();
    }

    pub fn set_cuisine_filter(&mut self, cuisine: Option<&str>) {
        self.query.cuisine_filter = cuisine.filter(|c| !c.is_empty()).map(String::from);
        self.refilter();
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.query.sort_key = sort_key;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = compute_filtered_view(&self.catalog.recipes, &self.query);
        self.cursor.reset(self.filtered.len());
        debug!(
            "query {:?} matched {} of {} recipes",
            self.query,
            self.filtered.len(),
            self.catalog.len()
        );
    }

    pub fn go_to_page(&mut self, page: i64) -> bool {
        self.cursor.go_to_page(page)
    }

    pub fn next_page(&mut self) -> bool {
        self.cursor.next_page()
    }

    pub fn prev_page(&mut self) -> bool {
        self.cursor.prev_page()
    }

    pub fn toggle_layout(&mut self) {
        self.is_grid_view = !self.is_grid_view;
    }
}

/// Where a session is in its lifecycle. `Failed` is terminal.
#[derive(Debug, Clone, Default)]
pub enum AppStatus {
    #[default]
    Loading,
    Ready(ViewState),
    Failed(String),
}

impl AppStatus {
    /// Settle the single fetch. Only a `Loading` session accepts a result.
    pub fn finish_loading<E: fmt::Display>(&mut self, result: Result<RecipeCatalog, E>) {
        if !matches!(self, AppStatus::Loading) {
            debug!("ignoring catalog result, session already settled");
            return;
        }

        *self = match result {
            Ok(catalog) => AppStatus::Ready(ViewState::new(catalog)),
            Err(e) => {
                error!("Error fetching recipes: {}", e);
                AppStatus::Failed(FETCH_ERROR_MESSAGE.to_string())
            }
        };
    }

    pub fn view_state(&self) -> Option<&ViewState> {
        match self {
            AppStatus::Ready(state) => Some(state),
            _ => None,
        }
    }

    /// Run `f` against the view state if there is one; a loading or failed
    /// session ignores the interaction.
    pub fn interact<R>(&mut self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        match self {
            AppStatus::Ready(state) => Some(f(state)),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, AppStatus::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecipeError;

    fn numbered_catalog(count: usize) -> RecipeCatalog {
        let recipes = (0..count)
            .map(|i| Recipe {
                name: format!("Recipe {:02}", i),
                cuisine: Some(if i % 2 == 0 { "Italian" } else { "Thai" }.to_string()),
                rating: Some(3.0 + (i % 5) as f64 * 0.4),
                prep_time_minutes: Some((i * 7 % 40) as u32),
                ..Default::default()
            })
            .collect();
        RecipeCatalog::new(recipes)
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::new(numbered_catalog(25));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 3);
        assert!(state.is_grid_view());
        assert_eq!(state.filtered().len(), 25);
        assert_eq!(state.categories(), &["Italian", "Thai"]);
        assert_eq!(state.page().items, &state.catalog().recipes[0..10]);
    }

    #[test]
    fn test_query_change_resets_page() {
        let mut state = ViewState::new(numbered_catalog(25));
        state.go_to_page(3);
        assert_eq!(state.current_page(), 3);

        state.set_sort_key(SortKey::Rating);
        assert_eq!(state.current_page(), 1);

        state.go_to_page(2);
        state.set_search("recipe 1");
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.filtered().len(), 10);

        state.go_to_page(2);
        state.set_cuisine_filter(Some("Thai"));
        assert_eq!(state.current_page(), 1);
        assert!(
            state
                .filtered()
                .iter()
                .all(|r| r.cuisine.as_deref() == Some("Thai"))
        );
    }

    #[test]
    fn test_paging_does_not_refilter() {
        let mut state = ViewState::new(numbered_catalog(25));
        state.set_sort_key(SortKey::PrepTime);
        let before = state.filtered().to_vec();

        assert!(state.next_page());
        assert!(state.next_page());
        assert!(!state.next_page());
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.page().items.len(), 5);

        assert!(state.prev_page());
        assert_eq!(state.filtered(), before.as_slice());
    }

    #[test]
    fn test_prev_on_first_page_is_noop() {
        let mut state = ViewState::new(numbered_catalog(25));
        assert!(!state.prev_page());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_toggle_layout_twice_is_identity() {
        let mut state = ViewState::new(numbered_catalog(25));
        state.go_to_page(2);
        let items_before = state.page().items.to_vec();

        state.toggle_layout();
        assert!(!state.is_grid_view());
        assert_eq!(state.current_page(), 2);

        state.toggle_layout();
        assert!(state.is_grid_view());
        assert_eq!(state.page().items, items_before.as_slice());
    }

    #[test]
    fn test_apply_query_replaces_everything() {
        let mut state = ViewState::new(numbered_catalog(25));
        state.apply_query(Query::new("2", Some("Italian"), SortKey::Name));
        let names: Vec<&str> = state.filtered().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Recipe 02", "Recipe 12", "Recipe 20", "Recipe 22", "Recipe 24"]
        );
    }

    #[test]
    fn test_no_matches_gives_single_empty_page() {
        let mut state = ViewState::new(numbered_catalog(25));
        state.set_search("lasagna");
        assert_eq!(state.total_pages(), 1);
        assert!(state.page().items.is_empty());
        assert!(!state.next_page());
    }

    #[test]
    fn test_fetch_failure_is_terminal() {
        let mut status = AppStatus::Loading;
        status.finish_loading(Err(RecipeError::Status(500)));
        assert!(status.is_failed());
        match &status {
            AppStatus::Failed(message) => assert_eq!(message, FETCH_ERROR_MESSAGE),
            other => panic!("expected Failed, got {:?}", other),
        }

        assert_eq!(status.interact(|s| s.next_page()), None);
        status.finish_loading(Ok::<_, RecipeError>(numbered_catalog(3)));
        assert!(status.is_failed());
        assert!(status.view_state().is_none());
    }

    #[test]
    fn test_successful_load_becomes_ready() {
        let mut status = AppStatus::default();
        assert!(status.view_state().is_none());

        status.finish_loading(Ok::<_, RecipeError>(numbered_catalog(12)));
        assert_eq!(status.interact(|s| s.next_page()), Some(true));
        assert_eq!(status.view_state().map(|s| s.current_page()), Some(2));
    }
}

pub mod dummyjson;
pub mod error;
pub mod filter;
pub mod format;
pub mod pagination;
pub mod render;
pub mod state;

pub use dummyjson::{ClientConfig, Recipe, RecipeCatalog, RecipeClient, parse_recipes_payload};
pub use error::RecipeError;
pub use filter::{Query, SortKey, UnknownSortKey, compute_filtered_view, derive_categories};
pub use format::{format_categories, format_pagination, format_results};
pub use pagination::{ITEMS_PER_PAGE, Page, PageCursor, paginate};
pub use render::{
    Layout, PageControl, PaginationControls, RecipeCard, ResultsView, pagination_controls, render,
};
pub use state::{AppStatus, FETCH_ERROR_MESSAGE, ViewState};

/// Fetch the recipe collection once. There is no retry: the caller either
/// gets the complete catalog or the error.
pub async fn load_catalog(config: ClientConfig) -> Result<RecipeCatalog, RecipeError> {
    let client = RecipeClient::with_config(config)?;
    client.fetch_all().await
}

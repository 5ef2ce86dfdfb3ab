//! Pure projection of the session state into a view description.
//!
//! Adapters (the iced front-end, the text formatter) only walk a
//! [`ResultsView`]; they never look at the state directly.

use crate::dummyjson::Recipe;
use crate::state::{AppStatus, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Grid,
    List,
}

impl Layout {
    pub fn from_grid_flag(is_grid_view: bool) -> Self {
        if is_grid_view { Layout::Grid } else { Layout::List }
    }

    /// Cards per row.
    pub fn columns(&self) -> usize {
        match self {
            Layout::Grid => 3,
            Layout::List => 1,
        }
    }

    /// Label of the layout toggle, naming the layout currently shown.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Layout::Grid => "Grid",
            Layout::List => "List",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub id: Option<u64>,
    pub title: String,
    pub rating_line: String,
    pub details_line: String,
    pub tags_line: String,
    pub image_url: Option<String>,
}

impl RecipeCard {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let rating = recipe
            .rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| "n/a".to_string());

        Self {
            id: recipe.id,
            title: recipe.name.clone(),
            rating_line: format!(
                "★ {} ({} reviews)",
                rating,
                recipe.review_count.unwrap_or(0)
            ),
            details_line: format!(
                "Prep: {} | Cook: {} | {}",
                minutes_label(recipe.prep_time_minutes),
                minutes_label(recipe.cook_time_minutes),
                recipe.difficulty.as_deref().unwrap_or("Unknown")
            ),
            tags_line: recipe.tags.join(", "),
            image_url: recipe.image.clone(),
        }
    }
}

fn minutes_label(minutes: Option<u32>) -> String {
    match minutes {
        Some(m) => format!("{}min", m),
        None => "?min".to_string(),
    }
}

/// A clickable page selector. `enabled` is false for Previous on the first
/// page and Next on the last; `active` marks the current page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub target: usize,
    pub enabled: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    pub current_page: usize,
    pub total_pages: usize,
    pub previous: PageControl,
    pub pages: Vec<PageControl>,
    pub next: PageControl,
}

/// Page selectors for `current_page` of `total_pages`; `None` when
/// everything fits on one page.
pub fn pagination_controls(total_pages: usize, current_page: usize) -> Option<PaginationControls> {
    if total_pages <= 1 {
        return None;
    }

    let pages = (1..=total_pages)
        .map(|page| PageControl {
            target: page,
            enabled: true,
            active: page == current_page,
        })
        .collect();

    Some(PaginationControls {
        current_page,
        total_pages,
        previous: PageControl {
            target: current_page.saturating_sub(1).max(1),
            enabled: current_page > 1,
            active: false,
        },
        pages,
        next: PageControl {
            target: (current_page + 1).min(total_pages),
            enabled: current_page < total_pages,
            active: false,
        },
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    Loading,
    Error {
        message: String,
    },
    Listing {
        layout: Layout,
        cards: Vec<RecipeCard>,
        total_matches: usize,
        pagination: Option<PaginationControls>,
    },
}

impl ResultsView {
    /// Cards grouped into rows of `layout.columns()`; empty for non-listings.
    pub fn card_rows(&self) -> Vec<&[RecipeCard]> {
        match self {
            ResultsView::Listing { layout, cards, .. } => cards.chunks(layout.columns()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn pagination(&self) -> Option<&PaginationControls> {
        match self {
            ResultsView::Listing { pagination, .. } => pagination.as_ref(),
            _ => None,
        }
    }
}

pub fn render(status: &AppStatus) -> ResultsView {
    match status {
        AppStatus::Loading => ResultsView::Loading,
        AppStatus::Failed(message) => ResultsView::Error {
            message: message.clone(),
        },
        AppStatus::Ready(state) => render_listing(state),
    }
}

pub fn render_listing(state: &ViewState) -> ResultsView {
    let page = state.page();

    ResultsView::Listing {
        layout: Layout::from_grid_flag(state.is_grid_view()),
        cards: page.items.iter().map(RecipeCard::from_recipe).collect(),
        total_matches: state.filtered().len(),
        pagination: pagination_controls(page.total_pages, page.clamped_page),
    }
}

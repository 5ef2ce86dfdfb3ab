use iced::widget::{
    Column, Row, button, column, container, image, pick_list, row, scrollable, text, text_input,
};
use iced::{ContentFit, Element, Length, Task};
use recipe_browser_core::{
    AppStatus, Layout, PageControl, PaginationControls, RecipeCard, RecipeCatalog, RecipeClient,
    ResultsView, SortKey, ViewState, render,
};
use std::collections::{HashMap, HashSet};
use std::fmt;

const CARD_IMAGE_HEIGHT: f32 = 200.0;

/// Entry of the cuisine pick list; `All` clears the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CuisineOption {
    All,
    Cuisine(String),
}

impl CuisineOption {
    fn as_filter(&self) -> Option<&str> {
        match self {
            CuisineOption::All => None,
            CuisineOption::Cuisine(name) => Some(name),
        }
    }
}

impl fmt::Display for CuisineOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CuisineOption::All => write!(f, "All cuisines"),
            CuisineOption::Cuisine(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    CatalogLoaded(Result<RecipeCatalog, String>),
    SearchChanged(String),
    CuisineSelected(CuisineOption),
    SortSelected(SortKey),
    ToggleLayout,
    GoToPage(usize),
    PrevPage,
    NextPage,
    ImageLoaded(String, Result<Vec<u8>, String>),
}

pub struct AppState {
    status: AppStatus,
    client: Option<RecipeClient>,
    images: HashMap<String, image::Handle>,
    requested_images: HashSet<String>,
}

impl AppState {
    pub fn new(client: Option<RecipeClient>) -> Self {
        Self {
            status: AppStatus::Loading,
            client,
            images: HashMap::new(),
            requested_images: HashSet::new(),
        }
    }
}

pub fn initialize() -> (AppState, Task<Message>) {
    match RecipeClient::new() {
        Ok(client) => {
            let fetch_client = client.clone();
            (
                AppState::new(Some(client)),
                Task::perform(
                    async move { fetch_client.fetch_all().await.map_err(|e| e.to_string()) },
                    Message::CatalogLoaded,
                ),
            )
        }
        Err(e) => {
            let mut state = AppState::new(None);
            state.status.finish_loading(Err::<RecipeCatalog, _>(e));
            (state, Task::none())
        }
    }
}

/// Image URLs of the recipes on the page currently shown.
fn page_image_urls(status: &AppStatus) -> Vec<String> {
    status
        .view_state()
        .map(|view_state| {
            view_state
                .page()
                .items
                .iter()
                .filter_map(|recipe| recipe.image.clone())
                .collect()
        })
        .unwrap_or_default()
}

/// Start a download for every visible image not requested yet.
fn request_page_images(state: &mut AppState) -> Task<Message> {
    let Some(client) = &state.client else {
        return Task::none();
    };

    let tasks: Vec<Task<Message>> = page_image_urls(&state.status)
        .into_iter()
        .filter(|url| state.requested_images.insert(url.clone()))
        .map(|url| {
            let client = client.clone();
            Task::perform(
                async move {
                    let result = client.get_image_bytes(&url).await.map_err(|e| e.to_string());
                    (url, result)
                },
                |(url, result)| Message::ImageLoaded(url, result),
            )
        })
        .collect();

    Task::batch(tasks)
}

pub fn update(state: &mut AppState, message: Message) -> Task<Message> {
    match message {
        Message::CatalogLoaded(result) => {
            state.status.finish_loading(result);
            if let Some(view_state) = state.status.view_state() {
                log::info!(
                    "Loaded {} recipes in {} cuisines",
                    view_state.catalog().len(),
                    view_state.categories().len()
                );
            }
        }
        Message::ImageLoaded(url, result) => {
            match result {
                Ok(bytes) => {
                    state.images.insert(url, image::Handle::from_bytes(bytes));
                }
                Err(e) => log::warn!("Failed to load image {}: {}", url, e),
            }
            return Task::none();
        }
        Message::SearchChanged(term) => {
            state.status.interact(|s| s.set_search(&term));
        }
        Message::CuisineSelected(option) => {
            state
                .status
                .interact(|s| s.set_cuisine_filter(option.as_filter()));
        }
        Message::SortSelected(sort_key) => {
            state.status.interact(|s| s.set_sort_key(sort_key));
        }
        Message::ToggleLayout => {
            state.status.interact(|s| s.toggle_layout());
        }
        Message::GoToPage(page) => {
            state.status.interact(|s| s.go_to_page(page as i64));
        }
        Message::PrevPage => {
            state.status.interact(|s| s.prev_page());
        }
        Message::NextPage => {
            state.status.interact(|s| s.next_page());
        }
    }
    request_page_images(state)
}

fn controls_view(view_state: &ViewState) -> Element<'_, Message> {
    let query = view_state.query();

    let mut cuisines = vec![CuisineOption::All];
    cuisines.extend(
        view_state
            .categories()
            .iter()
            .cloned()
            .map(CuisineOption::Cuisine),
    );
    let selected_cuisine = match &query.cuisine_filter {
        Some(name) => CuisineOption::Cuisine(name.clone()),
        None => CuisineOption::All,
    };

    let layout_label = Layout::from_grid_flag(view_state.is_grid_view()).toggle_label();

    row![
        text_input("Search recipes...", &query.search_term)
            .on_input(Message::SearchChanged)
            .padding(8)
            .width(Length::FillPortion(3)),
        pick_list(cuisines, Some(selected_cuisine), Message::CuisineSelected)
            .width(Length::FillPortion(1)),
        pick_list(SortKey::all(), Some(query.sort_key), Message::SortSelected)
            .width(Length::FillPortion(1)),
        button(layout_label)
            .on_press(Message::ToggleLayout)
            .padding(8),
    ]
    .spacing(10)
    .into()
}

fn card_image<'a>(
    card: &RecipeCard,
    images: &HashMap<String, image::Handle>,
) -> Element<'a, Message> {
    match card.image_url.as_ref().and_then(|url| images.get(url)) {
        Some(handle) => image::Image::<image::Handle>::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        // Placeholder while the image loads, or when it failed to load
        None => container(text("...").size(12))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(CARD_IMAGE_HEIGHT))
            .into(),
    }
}

fn card_view<'a>(
    card: &RecipeCard,
    images: &HashMap<String, image::Handle>,
) -> Element<'a, Message> {
    let mut body = column![
        card_image(card, images),
        text(card.title.clone()).size(18),
        text(card.rating_line.clone()).size(14),
        text(card.details_line.clone())
            .size(12)
            .color(iced::Color::from_rgb(0.4, 0.4, 0.4)),
    ]
    .spacing(6);

    if !card.tags_line.is_empty() {
        body = body.push(
            text(card.tags_line.clone())
                .size(12)
                .color(iced::Color::from_rgb(0.4, 0.4, 0.4)),
        );
    }

    container(body)
        .style(|_theme| container::Style {
            background: Some(iced::Color::WHITE.into()),
            border: iced::Border {
                color: iced::Color::from_rgb(0.8, 0.8, 0.8),
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        })
        .padding(12)
        .width(Length::Fill)
        .height(Length::Shrink)
        .into()
}

fn results_view<'a>(
    results: &ResultsView,
    images: &HashMap<String, image::Handle>,
) -> Element<'a, Message> {
    match results {
        ResultsView::Loading => text("Loading recipes...").size(16).into(),
        ResultsView::Error { message } => container(text(message.clone()).size(16))
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(20)
            .into(),
        ResultsView::Listing {
            layout,
            total_matches,
            ..
        } => {
            if *total_matches == 0 {
                return text("No recipes match your search.").size(16).into();
            }

            let columns = layout.columns();
            let rows = results.card_rows().into_iter().map(|cards| {
                let mut cells: Vec<Element<'a, Message>> =
                    cards.iter().map(|card| card_view(card, images)).collect();
                // Pad a short last row so grid cells keep their width.
                while cells.len() < columns {
                    cells.push(container(text("")).width(Length::Fill).into());
                }
                Row::with_children(cells)
                    .spacing(15)
                    .height(Length::Shrink)
                    .into()
            });

            Column::with_children(rows)
                .spacing(15)
                .width(Length::Fill)
                .into()
        }
    }
}

fn page_button<'a>(label: String, control: &PageControl, message: Message) -> Element<'a, Message> {
    let style = if control.active {
        button::primary
    } else {
        button::secondary
    };
    button(text(label).size(14))
        .style(style)
        .on_press_maybe(control.enabled.then_some(message))
        .padding(5)
        .into()
}

fn pagination_view<'a>(controls: &PaginationControls) -> Element<'a, Message> {
    let mut buttons: Vec<Element<'a, Message>> = vec![page_button(
        "Previous".to_string(),
        &controls.previous,
        Message::PrevPage,
    )];
    buttons.extend(controls.pages.iter().map(|page| {
        page_button(page.target.to_string(), page, Message::GoToPage(page.target))
    }));
    buttons.push(page_button(
        "Next".to_string(),
        &controls.next,
        Message::NextPage,
    ));

    Row::with_children(buttons).spacing(5).into()
}

fn status_line(status: &AppStatus) -> String {
    match status.view_state() {
        Some(view_state) => {
            let fetched = view_state
                .catalog()
                .fetched_at
                .and_then(|t| {
                    t.format(&time::format_description::well_known::Rfc3339)
                        .ok()
                })
                .unwrap_or_else(|| "Unknown".to_string());
            format!(
                "{} of {} recipes, page {} of {}, fetched {}",
                view_state.filtered().len(),
                view_state.catalog().len(),
                view_state.current_page(),
                view_state.total_pages(),
                fetched
            )
        }
        None => String::new(),
    }
}

pub fn view(state: &AppState) -> Element<'_, Message> {
    let results = render(&state.status);

    let mut content = column![text("Recipe Browser").size(28)]
        .spacing(15)
        .padding(20);

    if let Some(view_state) = state.status.view_state() {
        content = content.push(controls_view(view_state));
    }

    content = content.push(results_view(&results, &state.images));

    if let Some(controls) = results.pagination() {
        content = content.push(container(pagination_view(controls)).center_x(Length::Fill));
    }

    let status = status_line(&state.status);
    if !status.is_empty() {
        content = content.push(text(status).size(12));
    }

    scrollable(content.width(Length::Fill).height(Length::Shrink))
        .height(Length::Fill)
        .into()
}

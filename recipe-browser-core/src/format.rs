//! Plain-text rendering of a [`ResultsView`], used by the command line.

use crate::render::{Layout, PageControl, PaginationControls, RecipeCard, ResultsView};

const GRID_CELL_WIDTH: usize = 34;

fn card_lines(card: &RecipeCard) -> Vec<String> {
    let mut lines = vec![
        card.title.clone(),
        card.rating_line.clone(),
        card.details_line.clone(),
    ];
    if !card.tags_line.is_empty() {
        lines.push(card.tags_line.clone());
    }
    lines
}

/// Cut to `width` characters, marking the cut with an ellipsis.
fn fit(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.to_string();
    }
    let mut cut: String = line.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn format_grid_row(row: &[RecipeCard]) -> String {
    let columns: Vec<Vec<String>> = row.iter().map(card_lines).collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    (0..height)
        .map(|i| {
            columns
                .iter()
                .map(|lines| {
                    let cell = fit(lines.get(i).map(String::as_str).unwrap_or(""), GRID_CELL_WIDTH);
                    format!("{:<width$}", cell, width = GRID_CELL_WIDTH)
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_list_card(card: &RecipeCard) -> String {
    let mut lines = card_lines(card);
    if let Some(url) = &card.image_url {
        lines.push(url.clone());
    }
    let mut out = format!("• {}", lines[0]);
    for line in &lines[1..] {
        out.push_str("\n  ");
        out.push_str(line);
    }
    out
}

fn format_control(label: &str, control: &PageControl) -> String {
    if control.enabled {
        label.to_string()
    } else {
        format!("({})", label)
    }
}

/// `Previous  1 [2] 3  Next`, with disabled ends in parentheses.
pub fn format_pagination(controls: &PaginationControls) -> String {
    let pages = controls
        .pages
        .iter()
        .map(|p| {
            if p.active {
                format!("[{}]", p.target)
            } else {
                p.target.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{}  {}  {}",
        format_control("Previous", &controls.previous),
        pages,
        format_control("Next", &controls.next)
    )
}

pub fn format_results(view: &ResultsView) -> String {
    match view {
        ResultsView::Loading => "Loading recipes...".to_string(),
        ResultsView::Error { message } => message.clone(),
        ResultsView::Listing {
            layout,
            cards,
            total_matches,
            pagination,
        } => {
            if cards.is_empty() {
                return "No recipes match.".to_string();
            }

            let separator = match layout {
                Layout::Grid => "\n\n",
                Layout::List => "\n",
            };
            let body = view
                .card_rows()
                .into_iter()
                .map(|row| match layout {
                    Layout::Grid => format_grid_row(row),
                    Layout::List => row.iter().map(format_list_card).collect::<Vec<_>>().join("\n"),
                })
                .collect::<Vec<_>>()
                .join(separator);

            let summary = match pagination {
                Some(controls) => format!(
                    "Page {} of {} ({} recipes)\n{}",
                    controls.current_page,
                    controls.total_pages,
                    total_matches,
                    format_pagination(controls)
                ),
                None => format!("{} recipes", total_matches),
            };

            format!("{}\n\n{}", body, summary)
        }
    }
}

pub fn format_categories(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No cuisines".to_string();
    }
    categories
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:>3}. {}", i + 1, c))
        .collect::<Vec<_>>()
        .join("\n")
}

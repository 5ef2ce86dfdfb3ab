use clap::{Parser, Subcommand};
use recipe_browser_core::{
    AppStatus, ClientConfig, Query, SortKey, format_categories, format_results, load_catalog,
    render,
};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "recipe-browser-cli")]
#[command(about = "Search, filter and page through the dummyjson recipe collection")]
struct Cli {
    /// Recipes endpoint to fetch from
    #[arg(long, global = true, default_value = recipe_browser_core::dummyjson::client::RECIPES_ENDPOINT)]
    endpoint: String,
    /// Give up on the request after this many seconds (no limit by default)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of recipes
    List {
        /// Case-insensitive text to look for in recipe names
        #[arg(short, long, default_value = "")]
        search: String,
        /// Only show recipes of this cuisine (exact match)
        #[arg(short, long)]
        cuisine: Option<String>,
        /// Sort order: none, name, rating or prepTime
        #[arg(long, default_value = "none")]
        sort: SortKey,
        /// Page to show, clamped to the available pages
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        page: i64,
        /// Use the one-per-row list layout instead of the grid
        #[arg(long)]
        list: bool,
    },
    /// List the available cuisines in the order they first appear
    Categories,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = ClientConfig {
        endpoint: cli.endpoint,
        timeout: cli.timeout_secs.map(Duration::from_secs),
    };

    let mut status = AppStatus::Loading;
    status.finish_loading(load_catalog(config).await);
    if status.is_failed() {
        eprintln!("{}", format_results(&render(&status)));
        std::process::exit(1);
    }

    match cli.command {
        Commands::List {
            search,
            cuisine,
            sort,
            page,
            list,
        } => {
            status.interact(|state| {
                state.apply_query(Query::new(&search, cuisine.as_deref(), sort));
                state.go_to_page(page);
                if list {
                    state.toggle_layout();
                }
                log::debug!(
                    "showing page {} of {}",
                    state.current_page(),
                    state.total_pages()
                );
            });
            println!("{}", format_results(&render(&status)));
        }
        Commands::Categories => {
            if let Some(state) = status.view_state() {
                println!("{}", format_categories(state.categories()));
            } else {
                eprintln!("No recipes loaded.");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

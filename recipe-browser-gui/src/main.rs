mod app;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            // Default to info level, but allow override via RUST_LOG
            // Example: RUST_LOG=recipe_browser_core::state=debug
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_browser_core=info,recipe_browser_gui=info".into()),
        )
        .init();
}

fn main() -> iced::Result {
    init_logging();

    iced::application("Recipe Browser", app::update, app::view).run_with(app::initialize)
}

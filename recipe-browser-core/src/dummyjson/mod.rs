pub mod api;
pub mod client;
pub mod models;

pub use client::{ClientConfig, RecipeClient};
pub use models::{Recipe, RecipeCatalog, parse_recipes_payload};

use super::{client::RecipeClient, models::*};
use crate::error::RecipeError;
use log::info;

impl RecipeClient {
    /// Fetch the complete recipe collection from the configured endpoint.
    pub async fn fetch_all(&self) -> Result<RecipeCatalog, RecipeError> {
        let response = self.call(self.endpoint()).await?;
        let body = response.text().await?;

        let mut catalog = parse_recipes_payload(&body)?;
        catalog.fetched_at = Some(time::OffsetDateTime::now_utc());

        match catalog.total_available {
            Some(total) if total as usize > catalog.len() => info!(
                "Fetched {} recipes (server reports {} in total)",
                catalog.len(),
                total
            ),
            _ => info!("Fetched {} recipes", catalog.len()),
        }

        Ok(catalog)
    }
}

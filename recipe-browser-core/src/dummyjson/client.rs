use log::debug;
use std::time::Duration;

use crate::error::RecipeError;

const USER_AGENT: &str = "recipe-browser-core/0.1";
const ACCEPT: &str = "application/json";

pub const RECIPES_ENDPOINT: &str = "https://dummyjson.com/recipes/";

/// Where and how the single catalog request is made.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub endpoint: String,
    /// `None` waits for as long as the server takes.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: RECIPES_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecipeClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RecipeClient {
    pub fn new() -> Result<Self, RecipeError> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, RecipeError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(USER_AGENT),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(ACCEPT),
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(RecipeClient {
            client,
            endpoint: config.endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One GET, no retry. Non-success statuses are turned into errors here so
    /// callers never see an error page as a body.
    pub async fn call(&self, uri: &str) -> Result<reqwest::Response, RecipeError> {
        debug!("calling recipes API: {}", uri);

        let response = self.client.get(uri).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!("recipes API answered {} for {}", status, uri);
            return Err(RecipeError::Status(status.as_u16()));
        }

        Ok(response)
    }

    /// Raw bytes of a recipe image, decoded by the front-end.
    pub async fn get_image_bytes(&self, url: &str) -> Result<Vec<u8>, RecipeError> {
        let response = self.call(url).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

use crate::error::RecipeError;

/// Top-level shape of the `/recipes` response. Individual recipes are kept
/// as raw JSON objects so that one odd field never rejects the whole payload.
#[derive(Serialize, Deserialize, Debug)]
pub struct RecipesAnswer {
    pub recipes: Vec<Map<String, Value>>,
    pub total: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Option<u64>,
    pub name: String,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u64>,
    pub prep_time_minutes: Option<u32>,
    pub cook_time_minutes: Option<u32>,
    pub difficulty: Option<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
}

impl Recipe {
    /// Missing or mistyped fields decode as absent instead of failing.
    pub fn from_dummyjson_object(d: &Map<String, Value>) -> Recipe {
        Recipe {
            id: d.get("id").and_then(Value::as_u64),
            name: text_field(d, "name").unwrap_or_default(),
            cuisine: text_field(d, "cuisine"),
            rating: d.get("rating").and_then(Value::as_f64),
            review_count: d.get("reviewCount").and_then(Value::as_u64),
            prep_time_minutes: minutes_field(d, "prepTimeMinutes"),
            cook_time_minutes: minutes_field(d, "cookTimeMinutes"),
            difficulty: text_field(d, "difficulty"),
            tags: d
                .get("tags")
                .and_then(Value::as_array)
                .map(|tags| {
                    tags.iter()
                        .filter_map(Value::as_str)
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            image: text_field(d, "image"),
        }
    }
}

fn text_field(d: &Map<String, Value>, key: &str) -> Option<String> {
    d.get(key).and_then(Value::as_str).map(String::from)
}

fn minutes_field(d: &Map<String, Value>, key: &str) -> Option<u32> {
    d.get(key)
        .and_then(Value::as_u64)
        .and_then(|m| u32::try_from(m).ok())
}

/// The full recipe collection as fetched once at startup.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RecipeCatalog {
    pub recipes: Vec<Recipe>,
    pub total_available: Option<u64>,
    pub fetched_at: Option<OffsetDateTime>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            total_available: None,
            fetched_at: None,
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Decode a `/recipes` response body. Either the whole collection decodes
/// or the call fails; there is no partial result.
pub fn parse_recipes_payload(body: &str) -> Result<RecipeCatalog, RecipeError> {
    let answer: RecipesAnswer = serde_json::from_str(body)?;
    let recipes = answer
        .recipes
        .iter()
        .map(Recipe::from_dummyjson_object)
        .collect();

    Ok(RecipeCatalog {
        recipes,
        total_available: answer.total,
        fetched_at: None,
    })
}

use std::fmt;

#[derive(Debug)]
pub enum RecipeError {
    Network(reqwest::Error),
    Status(u16),
    Json(serde_json::Error),
}

impl fmt::Display for RecipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeError::Network(e) => write!(f, "Network error: {}", e),
            RecipeError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            RecipeError::Json(e) => write!(f, "JSON parsing error: {}", e),
        }
    }
}

impl std::error::Error for RecipeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecipeError::Network(e) => Some(e),
            RecipeError::Json(e) => Some(e),
            RecipeError::Status(_) => None,
        }
    }
}

impl From<reqwest::Error> for RecipeError {
    fn from(err: reqwest::Error) -> Self {
        RecipeError::Network(err)
    }
}

impl From<serde_json::Error> for RecipeError {
    fn from(err: serde_json::Error) -> Self {
        RecipeError::Json(err)
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    pub ingredients: String,
}

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub recipe: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

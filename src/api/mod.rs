mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

pub use handlers::{generate_recipe, health, not_found, panic_response};
pub use models::{ErrorResponse, HealthResponse, RecipeRequest, RecipeResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate-recipe", post(generate_recipe))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

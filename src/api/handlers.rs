use std::any::Any;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{gemini::RelayError, AppState};

use super::models::{ErrorResponse, HealthResponse, RecipeRequest, RecipeResponse};

pub async fn generate_recipe(
    State(state): State<AppState>,
    payload: Result<Json<RecipeRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "rejected recipe request body");
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    tracing::info!(ingredients = %payload.ingredients, "received ingredients");

    match state.gemini.generate_recipe(&payload.ingredients).await {
        Ok(recipe) => (StatusCode::OK, Json(RecipeResponse { recipe })).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not Found".to_string())
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "recipe generation failed");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
    }
}

/// Turns a handler panic into the same 500 body as any other failure.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };
    RelayError::Unexpected(message).into_response()
}

fn error_response(status: StatusCode, detail: String) -> Response {
    (status, Json(ErrorResponse { detail })).into_response()
}

use axum::{
    extract::{rejection::JsonRejection, Request, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info_span;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;
use crate::translate::{TranslationRequest, TranslationResult};
use crate::transliterate::{TransliterationRequest, TransliterationResult};

pub const READY_MESSAGE: &str = "Bharat Linguist Backend Ready";

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Liveness
        .route("/", get(root))
        .route("/transliterate", post(transliterate_text))
        .route("/translate/text", post(translate_text))
}

/// Full application: routes, CORS, request tracing and shared state.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            info_span!(
                "request",
                id = %Uuid::new_v4(),
                method = %request.method(),
                uri = %request.uri()
            )
        }))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": READY_MESSAGE }))
}

/// Converts Roman text to Indic script phonetically,
/// e.g. "namaste" -> "नमस्ते" for `hi`.
async fn transliterate_text(
    State(state): State<AppState>,
    payload: Result<Json<TransliterationRequest>, JsonRejection>,
) -> Result<Json<TransliterationResult>, ApiError> {
    let Json(request) = payload?;

    if !state.transliterator.is_ready() {
        return Err(ApiError::service_unavailable(
            "Transliteration engine not initialized",
        ));
    }

    state
        .transliterator
        .transliterate(&request.text, &request.target_lang_code)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal(format!("Transliteration failed: {}", e)))
}

async fn translate_text(
    State(state): State<AppState>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Result<Json<TranslationResult>, ApiError> {
    let Json(request) = payload?;

    if request.text.trim().is_empty() {
        return Err(ApiError::unprocessable("text must not be empty"));
    }

    state
        .translator
        .translate(&request.text, &request.source_lang, &request.target_lang)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal(format!("Translation failed: {}", e)))
}

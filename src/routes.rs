use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::services::ServeDir;

use crate::generator::{self, GeneratedString};
use crate::pages::{self, random_string::RandomStringQuery};
use crate::state::AppState;
use crate::translate::{
    TargetLanguage, TranslateError, TranslateRequest, TranslateResponse, TranslationSession,
};

type ApiError = (StatusCode, Json<Value>);

pub fn create_routes(state: AppState) -> Router<AppState> {
    let static_dir = &state.config.system_config.static_dir;

    Router::new()
        // Pages
        .route("/", get(pages::home))
        .route("/translate", get(pages::translate_page).post(pages::translate_submit))
        .route("/random", get(pages::random_page))

        // Health check
        .route("/api/health", get(health_check))

        // JSON API
        .route("/api/languages", get(list_languages))
        .route("/api/translate", post(translate))
        .route("/api/random-string", get(random_string))

        // Static file serving
        .nest_service("/static", ServeDir::new(static_dir))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn list_languages() -> Json<Value> {
    let languages: Vec<Value> = TargetLanguage::ALL
        .iter()
        .map(|lang| json!({ "code": lang.code(), "name": lang.name() }))
        .collect();
    Json(json!(languages))
}

async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    TranslationSession::new(state.translator.clone())
        .with_input(request.text, request.target)
        .into_translation()
        .await
        .map(|translated_text| Json(TranslateResponse { translated_text }))
        .map_err(translate_error_response)
}

fn translate_error_response(err: TranslateError) -> ApiError {
    let status = match err {
        TranslateError::EmptyInput => StatusCode::UNPROCESSABLE_ENTITY,
        TranslateError::Provider { .. } => StatusCode::BAD_GATEWAY,
        TranslateError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };

    let mut body = json!({
        "error": err.to_string(),
        "kind": err.kind(),
    });
    if let TranslateError::Provider { status, .. } = &err {
        body["provider_status"] = json!(status);
    }

    (status, Json(body))
}

async fn random_string(
    State(state): State<AppState>,
    Query(query): Query<RandomStringQuery>,
) -> Result<Json<GeneratedString>, ApiError> {
    let config = query
        .to_strict_config(state.config.generator_config.default_length)
        .map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string() })),
            )
        })?;

    Ok(Json(generator::generate(&config)))
}

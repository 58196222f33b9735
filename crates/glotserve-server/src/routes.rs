//! HTTP surface: routing, shared state, and error mapping.
//!
//! Error bodies keep the upstream service contract: a single `detail` field
//! carrying a fixed Portuguese message per failure class.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::error;

use glotserve_core::{IdentifyError, LanguageIdentifier, LanguagePrediction, TextInput};

/// State shared across request handlers.
pub struct AppState {
    pub identifier: LanguageIdentifier,
}

impl AppState {
    pub fn new(identifier: LanguageIdentifier) -> Self {
        Self { identifier }
    }
}

/// JSON error body: `{"detail": "..."}`.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Maps service errors onto status codes and fixed detail messages.
struct ApiError(IdentifyError);

impl From<IdentifyError> for ApiError {
    fn from(err: IdentifyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            IdentifyError::ModelNotReady => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Modelo não inicializado.",
            ),
            IdentifyError::EmptyInput => (
                StatusCode::BAD_REQUEST,
                "O texto fornecido não contém conteúdo analisável.",
            ),
            IdentifyError::Inference(err) => {
                error!(error = %err, "inference failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno ao processar a predição.",
                )
            }
        };
        (
            status,
            Json(ErrorBody {
                detail: detail.to_string(),
            }),
        )
            .into_response()
    }
}

/// Build the HTTP router for the service.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/identify", post(identify))
        .route("/healthz", get(health))
        .route("/readyz", get(readiness))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Identify the language of the submitted text.
async fn identify(
    State(state): State<Arc<AppState>>,
    Json(input): Json<TextInput>,
) -> Result<Json<LanguagePrediction>, ApiError> {
    let prediction = state.identifier.identify(&input.text_content)?;
    Ok(Json(prediction))
}

/// Liveness probe endpoint.
async fn health() -> &'static str {
    "OK"
}

/// Readiness probe endpoint: ready once the model is loaded.
async fn readiness(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if state.identifier.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

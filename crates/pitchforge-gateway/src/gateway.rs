//! Main Gateway implementation
//!
//! Stateless HTTP front end over the deck generation engine. Every
//! request carries its own context (and deck, for export); the server
//! holds only configuration and the text generator.

use std::path::Path;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use pitchforge_core::{
    generate_full_deck, generate_section, Deck, DeckError, GeminiClient, Section, StartupContext,
    TextGenerator,
};

use crate::config::GatewayConfig;
use crate::{ApiError, Result};

/// Content type served for exported decks.
const PPTX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// Header naming sections that fell back to placeholders.
const FAILED_SECTIONS_HEADER: &str = "x-failed-sections";

/// Gateway state shared across handlers
#[derive(Clone)]
pub struct GatewayState {
    pub config: GatewayConfig,
    pub generator: Arc<dyn TextGenerator>,
}

impl std::fmt::Debug for GatewayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayState")
            .field("config", &self.config)
            .field("generator", &self.generator.name())
            .finish()
    }
}

/// Main Gateway
pub struct Gateway {
    state: Arc<GatewayState>,
}

impl Gateway {
    /// Create a gateway backed by the Gemini client from the environment.
    ///
    /// Fails fast when `GEMINI_API_KEY` is not set, as the original
    /// service refused to boot without it.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = GeminiClient::from_env()?.with_model(config.model.clone());
        Ok(Self::with_generator(config, Arc::new(client)))
    }

    /// Create a gateway with an explicit generator.
    pub fn with_generator(config: GatewayConfig, generator: Arc<dyn TextGenerator>) -> Self {
        let state = Arc::new(GatewayState { config, generator });
        Self { state }
    }

    /// Get gateway state
    pub fn state(&self) -> Arc<GatewayState> {
        self.state.clone()
    }

    /// Build the Axum router
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/api/generate-slide", post(Self::handle_generate_slide))
            .route(
                "/api/generate-full-deck",
                post(Self::handle_generate_full_deck),
            )
            .route("/api/generate-ppt", post(Self::handle_generate_ppt))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Start the gateway server
    pub async fn start(&self) -> Result<()> {
        let addr = self.state.config.socket_addr();
        let router = self.build_router();

        tracing::info!("🎯 Pitchforge Gateway starting on {}", addr);
        tracing::info!("Generator: {}", self.state.generator.name());

        let listener = tokio::net::TcpListener::bind(addr).await.map_err(ApiError::Io)?;

        axum::serve(listener, router)
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        Ok(())
    }

    // HTTP handlers

    async fn handle_health() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "healthy",
            "version": crate::VERSION
        }))
    }

    async fn handle_generate_slide(
        State(state): State<Arc<GatewayState>>,
        Json(request): Json<GenerateSlideRequest>,
    ) -> Result<Json<GenerateSlideResponse>> {
        let name = request
            .section
            .ok_or_else(|| ApiError::Validation("Section is required".to_string()))?;
        let section: Section = name.parse()?;

        let content = generate_section(state.generator.as_ref(), section, &request.context).await?;
        Ok(Json(GenerateSlideResponse { section, content }))
    }

    async fn handle_generate_full_deck(
        State(state): State<Arc<GatewayState>>,
        Json(context): Json<StartupContext>,
    ) -> Result<Response> {
        let request_id = Uuid::new_v4();
        tracing::info!(
            "[{}] Generating full deck for '{}'",
            request_id,
            context.startup_name.trim()
        );

        let report = generate_full_deck(state.generator.as_ref(), &context).await?;
        if !report.failed.is_empty() {
            tracing::warn!(
                "[{}] {} of {} sections fell back to placeholders",
                request_id,
                report.failed.len(),
                Section::ALL.len()
            );
        }

        let failed: Vec<&str> = report.failed.iter().map(|s| s.wire_name()).collect();
        let mut response = Json(report.deck).into_response();
        if !failed.is_empty() {
            let value = HeaderValue::from_str(&failed.join(","))
                .map_err(|e| ApiError::Internal(e.to_string()))?;
            response.headers_mut().insert(FAILED_SECTIONS_HEADER, value);
        }
        Ok(response)
    }

    async fn handle_generate_ppt(
        State(state): State<Arc<GatewayState>>,
        Json(request): Json<GeneratePptRequest>,
    ) -> Result<Response> {
        let missing = request.form_data.missing_fields();
        if !missing.is_empty() {
            return Err(ApiError::Validation(format!(
                "Missing or empty required fields from formData: {}",
                missing.join(", ")
            )));
        }
        if request.deck.is_empty() {
            return Err(ApiError::Deck(DeckError::EmptyDeck));
        }

        let path = pitchforge_pptx::export_deck(
            &request.form_data,
            &request.deck,
            Path::new(&state.config.output_dir),
        )?;
        let bytes = tokio::fs::read(&path).await?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("pitch_deck.pptx")
            .to_string();

        tracing::info!("Exported {} ({} bytes)", filename, bytes.len());

        let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        Ok((
            StatusCode::OK,
            [
                (
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(PPTX_CONTENT_TYPE),
                ),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            bytes,
        )
            .into_response())
    }
}

/// Body of `POST /api/generate-slide`.
#[derive(Debug, Deserialize)]
struct GenerateSlideRequest {
    #[serde(default)]
    section: Option<String>,

    #[serde(default)]
    context: StartupContext,
}

/// Response of `POST /api/generate-slide`.
#[derive(Debug, Serialize)]
struct GenerateSlideResponse {
    section: Section,
    content: String,
}

/// Body of `POST /api/generate-ppt`: the submitted form plus the deck
/// the client already holds.
#[derive(Debug, Deserialize)]
struct GeneratePptRequest {
    #[serde(rename = "formData", default)]
    form_data: StartupContext,

    #[serde(default)]
    deck: Deck,
}

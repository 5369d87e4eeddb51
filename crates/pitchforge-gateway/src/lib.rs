//! Pitchforge Gateway - HTTP API for deck generation
//!
//! This crate exposes the Pitchforge engine over REST: per-section
//! generation, full-deck generation and PPTX export, each backed by the
//! same orchestrator the CLI uses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 Pitchforge Gateway                   │
//! ├─────────────────────────────────────────────────────┤
//! │  POST /api/generate-slide      single section        │
//! │  POST /api/generate-full-deck  all ten sections      │
//! │  POST /api/generate-ppt        deck -> .pptx bytes   │
//! │  GET  /health                  liveness              │
//! │                      │                               │
//! │           ┌──────────▼──────────┐                   │
//! │           │   pitchforge-core   │                   │
//! │           │ (prompts, Gemini,   │                   │
//! │           │  orchestrator)      │                   │
//! │           └──────────┬──────────┘                   │
//! │           ┌──────────▼──────────┐                   │
//! │           │   pitchforge-pptx   │                   │
//! │           │ (package assembly)  │                   │
//! │           └─────────────────────┘                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Features
//!
//! - **Stateless**: the deck travels in request and response bodies,
//!   never in server-side sessions
//! - **Partial failure**: full-deck responses flag failed sections in
//!   the `x-failed-sections` header instead of aborting
//! - **Staged exports**: generated files also land in the configured
//!   output directory, mirroring the download the API returns

pub mod config;
pub mod error;
pub mod gateway;

pub use config::GatewayConfig;
pub use error::{ApiError, Result};
pub use gateway::{Gateway, GatewayState};

/// Gateway version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

/// Default host
pub const DEFAULT_HOST: &str = "127.0.0.1";

//! Pitchforge Core - The text engine behind AI-generated investor pitch decks
//!
//! Pitchforge Core turns a structured startup description into the prose of a
//! ten-section pitch deck. It owns the canonical section list, the prompt
//! templates, the deck state, and the orchestration loop that drives a remote
//! generation provider one section at a time.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐     ┌────────────────┐     ┌─────────────────┐
//! │ StartupContext │ ──▶ │ Prompt Builder │ ──▶ │  TextGenerator  │
//! │  (form fields) │     │  (per section) │     │ (Gemini client) │
//! └────────────────┘     └────────────────┘     └────────┬────────┘
//!                                                        │
//!                        ┌────────────────┐              │
//!                        │  Orchestrator  │ ◀────────────┘
//!                        │ (10 sections,  │
//!                        │  in order)     │
//!                        └───────┬────────┘
//!                                │
//!                        ┌───────▼────────┐
//!                        │      Deck      │  ──▶  pitchforge-pptx
//!                        │ (section→text) │       (slide rendering)
//!                        └────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use pitchforge_core::{build_prompt, Section, StartupContext};
//!
//! let context = StartupContext {
//!     startup_name: "NovaHealth".into(),
//!     problem: "Clinics lose hours every day to manual scheduling".into(),
//!     solution: "An assistant that fills schedule gaps automatically".into(),
//!     industry: "Healthcare".into(),
//!     ..StartupContext::default()
//! };
//!
//! let prompt = build_prompt(Section::Problem, &context);
//! assert!(prompt.contains("NovaHealth"));
//! assert!(prompt.contains("problem section"));
//! ```
//!
//! # Design Principles
//!
//! 1. **One section table**: wire name, slide title and body format live in a
//!    single place; every loop and lookup derives from it
//! 2. **Validation before spend**: a context that cannot produce a full deck
//!    is rejected before the first provider call
//! 3. **Partial failure over no deck**: a section that fails to generate gets
//!    a placeholder and is reported; the remaining sections still run
//! 4. **Caller-owned state**: decks are plain values, regeneration replaces
//!    one key; there is no session store in this crate

#![deny(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod context;
pub mod deck;
pub mod error;
pub mod orchestrator;
pub mod prompt;
pub mod providers;
pub mod section;

// Re-export commonly used types for convenience
pub use context::{StartupContext, DEFAULT_TAGLINE, REQUIRED_FIELDS};
pub use deck::{Deck, GenerationReport};
pub use error::{DeckError, Result};
pub use orchestrator::{failure_placeholder, generate_full_deck, generate_section};
pub use prompt::build_prompt;
pub use providers::gemini::{API_KEY_ENV, DEFAULT_MODEL};
pub use providers::{GeminiClient, TextGenerator};
pub use section::{BodyFormat, Section};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

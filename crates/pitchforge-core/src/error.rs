//! Error types for deck generation.
//!
//! `thiserror` enums throughout; validation failures carry enough structure
//! for callers to report every offending field at once.

use thiserror::Error;

/// Result type alias for deck operations
pub type Result<T> = std::result::Result<T, DeckError>;

/// Main error type for deck generation operations
#[derive(Error, Debug)]
pub enum DeckError {
    /// Required context fields are missing or blank.
    #[error("Missing or empty required fields: {}", .fields.join(", "))]
    MissingFields {
        /// Names of the offending fields, in canonical field order.
        fields: Vec<String>,
    },

    /// The startup name is blank. Single-section generation only requires
    /// the name, so this is its entire validation gate.
    #[error("Startup name is required")]
    BlankStartupName,

    /// A section name that is not one of the ten known sections.
    #[error("Unknown section: {name}")]
    UnknownSection {
        /// The name as received.
        name: String,
    },

    /// Document export was requested for a deck with no content.
    #[error("Generated pitch deck content is missing.")]
    EmptyDeck,

    /// The generation request could not be sent, or timed out.
    #[error("Generation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The generation service answered with a non-success status.
    #[error("Gemini API error: {status} {body}")]
    ServiceStatus {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// The generation service answered success but the body was unusable.
    #[error("Unexpected generation response: {0}")]
    MalformedResponse(String),

    /// `GEMINI_API_KEY` is not set in the environment.
    #[error("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
}

//! Section orchestration: single-section generation and the full-deck loop.
//!
//! The full-deck path validates the context before the first provider call,
//! then walks the ten sections strictly in canonical order. A section whose
//! generation fails gets a fixed placeholder and is named in the report; the
//! remaining sections still run. The single-section path (used for
//! regeneration) propagates failures to the caller instead.

use crate::context::StartupContext;
use crate::deck::{Deck, GenerationReport};
use crate::error::{DeckError, Result};
use crate::prompt::build_prompt;
use crate::providers::TextGenerator;
use crate::section::Section;

/// Placeholder content stored for a section whose generation failed.
pub fn failure_placeholder(section: Section) -> String {
    format!(
        "Error generating content for {}. Please try regenerating this slide.",
        section.wire_name()
    )
}

/// Generate content for a single section.
///
/// Only the startup name is required here; regeneration of one slide should
/// not be blocked by unrelated blank fields. Failures propagate verbatim.
pub async fn generate_section(
    generator: &dyn TextGenerator,
    section: Section,
    context: &StartupContext,
) -> Result<String> {
    if context.startup_name.trim().is_empty() {
        return Err(DeckError::BlankStartupName);
    }

    let prompt = build_prompt(section, context);
    tracing::debug!("Generating {} via {}", section, generator.name());
    generator.complete(&prompt).await
}

/// Generate the full ten-section deck.
///
/// Returns a [`GenerationReport`] whose deck always carries all ten
/// sections; the `failed` list names the ones holding placeholders.
pub async fn generate_full_deck(
    generator: &dyn TextGenerator,
    context: &StartupContext,
) -> Result<GenerationReport> {
    context.validate()?;

    let mut deck = Deck::new();
    let mut failed = Vec::new();

    for section in Section::ALL {
        let prompt = build_prompt(section, context);
        match generator.complete(&prompt).await {
            Ok(content) => {
                deck.insert(section, content);
            }
            Err(e) => {
                tracing::warn!("Error generating {}: {}", section, e);
                deck.insert(section, failure_placeholder(section));
                failed.push(section);
            }
        }
    }

    Ok(GenerationReport { deck, failed })
}

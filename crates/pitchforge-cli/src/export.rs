//! `pitchforge export` - render a saved deck into a .pptx file.
//!
//! Reads a deck JSON file produced by `generate --save-deck` and assembles
//! the presentation locally; no API calls are made.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use pitchforge_core::{Deck, DeckError, StartupContext};
use pitchforge_pptx::export_deck;

/// Render `deck_path` into a timestamped .pptx under `output_dir`.
pub fn run(context: &StartupContext, deck_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    context.validate()?;

    let content = std::fs::read_to_string(deck_path)
        .with_context(|| format!("reading deck file {}", deck_path.display()))?;
    let deck: Deck = serde_json::from_str(&content)
        .with_context(|| format!("parsing deck JSON in {}", deck_path.display()))?;

    if deck.is_empty() {
        return Err(DeckError::EmptyDeck.into());
    }

    let path = export_deck(context, &deck, output_dir).context("exporting the PPTX package")?;
    println!("📦 Exported {} ({} sections)", path.display(), deck.len());
    Ok(path)
}

//! `pitchforge generate` - Gemini-backed deck generation.
//!
//! Pipeline: StartupContext → per-section prompt → Gemini completion → Deck
//!           → optional deck JSON save → optional PPTX export
//!
//! A failed section never aborts the run: it receives a fixed placeholder and
//! is listed in the summary so it can be regenerated later with `--section`.

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use pitchforge_core::{
    failure_placeholder, generate_section, Deck, GeminiClient, GenerationReport, Section,
    StartupContext, TextGenerator,
};
use pitchforge_pptx::export_deck;

/// Options for the `pitchforge generate` command.
pub struct GenerateOptions {
    pub section: Option<String>,
    pub save_deck: Option<PathBuf>,
    pub export: bool,
    pub output_dir: PathBuf,
    pub model: Option<String>,
}

/// Run deck generation against the live Gemini API.
///
/// With `--section` a single slide is regenerated and printed; otherwise all
/// ten sections are generated in canonical deck order behind a progress bar.
pub async fn run(context: StartupContext, opts: GenerateOptions) -> Result<GenerationReport> {
    let mut client = GeminiClient::from_env().context("building the Gemini client")?;
    if let Some(model) = &opts.model {
        client = client.with_model(model.clone());
    }

    let report = match opts.section.as_deref() {
        Some(name) => {
            let section: Section = name.parse()?;
            println!(
                "▶ Regenerating \"{}\" for: {}",
                section.title(),
                context.startup_name.trim().bold()
            );
            let content = generate_section(&client, section, &context).await?;
            println!();
            println!("{}", content);

            let mut deck = Deck::new();
            deck.insert(section, content);
            GenerationReport {
                deck,
                failed: Vec::new(),
            }
        }
        None => generate_deck(&client, &context).await?,
    };

    if let Some(path) = &opts.save_deck {
        let json =
            serde_json::to_string_pretty(&report.deck).context("serialising deck to JSON")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing deck to {}", path.display()))?;
        println!("💾 Deck saved to {}", path.display());
    }

    if opts.export {
        let path = export_deck(&context, &report.deck, &opts.output_dir)
            .context("exporting the PPTX package")?;
        println!("📦 Exported {}", path.display());
    }

    Ok(report)
}

/// Generate all ten sections, placeholders standing in for failures.
///
/// Drives `generate_section` directly rather than the one-shot orchestrator
/// call so each section can be reported as it finishes.
async fn generate_deck(
    generator: &dyn TextGenerator,
    context: &StartupContext,
) -> Result<GenerationReport> {
    context.validate()?;

    println!(
        "▶ Generating pitch deck for: {}",
        context.startup_name.trim().bold()
    );
    println!(
        "  Provider: {}  Sections: {}",
        generator.name(),
        Section::ALL.len()
    );
    println!();

    let bar = ProgressBar::new(Section::ALL.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("  [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress template is static")
            .progress_chars("=> "),
    );

    let mut deck = Deck::new();
    let mut failed = Vec::new();

    for section in Section::ALL {
        bar.set_message(section.title());
        match generate_section(generator, section, context).await {
            Ok(content) => {
                bar.println(format!("  {} {}", "✓".green(), section.title()));
                deck.insert(section, content);
            }
            Err(e) => {
                bar.println(format!("  {} {}: {}", "✗".red(), section.title(), e));
                deck.insert(section, failure_placeholder(section));
                failed.push(section);
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    println!();
    println!("{}", "─".repeat(60));
    println!(
        "{} Deck generation complete: {} sections, {} placeholders",
        if failed.is_empty() { "✅" } else { "⚠️" },
        deck.len(),
        failed.len()
    );

    if !failed.is_empty() {
        println!("\nFailed sections (regenerate with --section):");
        for section in &failed {
            println!("  • {}", section.wire_name());
        }
    }

    Ok(GenerationReport { deck, failed })
}

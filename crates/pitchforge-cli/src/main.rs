use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use pitchforge_core::{BodyFormat, Section, StartupContext};

mod export;
mod generate;

/// Pitchforge CLI - AI pitch deck generation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate deck content from a startup context
    Generate {
        #[command(flatten)]
        context: ContextArgs,

        /// Generate a single section instead of the full deck
        #[arg(long, value_name = "SECTION")]
        section: Option<String>,

        /// Write the generated deck as JSON
        #[arg(long, value_name = "FILE")]
        save_deck: Option<PathBuf>,

        /// Export the deck as a .pptx file after generation
        #[arg(long)]
        export: bool,

        /// Directory exported files are written to
        #[arg(long, default_value = pitchforge_pptx::DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// Gemini model to generate with
        #[arg(long)]
        model: Option<String>,
    },

    /// Render a previously saved deck into a .pptx file (no API calls)
    Export {
        #[command(flatten)]
        context: ContextArgs,

        /// Deck JSON file produced by `generate --save-deck`
        #[arg(long, value_name = "FILE")]
        deck: PathBuf,

        /// Directory the file is written to
        #[arg(long, default_value = pitchforge_pptx::DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },

    /// List the canonical slide sections
    Sections,
}

/// Startup context fields, from a JSON file and/or flags.
#[derive(Args)]
struct ContextArgs {
    /// Context JSON file; individual flags override its fields
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Startup name
    #[arg(long)]
    name: Option<String>,

    /// Problem the startup solves
    #[arg(long)]
    problem: Option<String>,

    /// The proposed solution
    #[arg(long)]
    solution: Option<String>,

    /// Target audience
    #[arg(long)]
    audience: Option<String>,

    /// Industry
    #[arg(long)]
    industry: Option<String>,

    /// Revenue model
    #[arg(long)]
    revenue_model: Option<String>,

    /// Company stage
    #[arg(long)]
    stage: Option<String>,

    /// Tagline for the title slide
    #[arg(long)]
    tagline: Option<String>,

    /// Team summary
    #[arg(long)]
    team: Option<String>,

    /// Long-term vision
    #[arg(long)]
    vision: Option<String>,

    /// Unique selling proposition
    #[arg(long)]
    usp: Option<String>,

    /// Competitive landscape
    #[arg(long)]
    competition: Option<String>,
}

impl ContextArgs {
    fn resolve(self) -> anyhow::Result<StartupContext> {
        let mut context = match &self.input {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read context file {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("Invalid context JSON in {}", path.display()))?
            }
            None => StartupContext::default(),
        };

        if let Some(name) = self.name {
            context.startup_name = name;
        }
        if let Some(problem) = self.problem {
            context.problem = problem;
        }
        if let Some(solution) = self.solution {
            context.solution = solution;
        }
        if let Some(audience) = self.audience {
            context.target_audience = audience;
        }
        if let Some(industry) = self.industry {
            context.industry = industry;
        }
        if let Some(revenue_model) = self.revenue_model {
            context.revenue_model = revenue_model;
        }
        if let Some(stage) = self.stage {
            context.stage = stage;
        }
        if self.tagline.is_some() {
            context.tagline = self.tagline;
        }
        if self.team.is_some() {
            context.team = self.team;
        }
        if self.vision.is_some() {
            context.vision = self.vision;
        }
        if self.usp.is_some() {
            context.usp = self.usp;
        }
        if self.competition.is_some() {
            context.competition = self.competition;
        }

        Ok(context)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_target(false)
            .init();
    }

    match cli.command {
        Commands::Generate {
            context,
            section,
            save_deck,
            export,
            output_dir,
            model,
        } => {
            let context = context.resolve()?;
            let opts = generate::GenerateOptions {
                section,
                save_deck,
                export,
                output_dir,
                model,
            };
            generate::run(context, opts).await?;
        }
        Commands::Export {
            context,
            deck,
            output_dir,
        } => {
            let context = context.resolve()?;
            export::run(&context, &deck, &output_dir)?;
        }
        Commands::Sections => {
            println!("{:<16} {:<26} FORMAT", "SECTION", "TITLE");
            println!("{}", "─".repeat(56));
            for section in Section::ALL {
                let format = match section.body_format() {
                    BodyFormat::Bulleted => "bulleted",
                    BodyFormat::Paragraph => "paragraph",
                };
                println!("{:<16} {:<26} {}", section.wire_name(), section.title(), format);
            }
        }
    }

    Ok(())
}

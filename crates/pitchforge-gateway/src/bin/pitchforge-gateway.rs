//! Pitchforge Gateway Binary
//!
//! Standalone HTTP gateway for pitch deck generation.
//!
//! # Usage
//! ```bash
//! pitchforge-gateway [--port 5000] [--host 127.0.0.1] [--verbose]
//! ```

use anyhow::Context;
use clap::Parser;
use pitchforge_gateway::{Gateway, GatewayConfig};

/// Pitchforge Gateway - AI pitch deck generation over HTTP
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (default: 5000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (default: 127.0.0.1)
    #[arg(long)]
    host: Option<String>,

    /// Directory exported decks are written to
    #[arg(long)]
    output_dir: Option<String>,

    /// Gemini model to generate with
    #[arg(long)]
    model: Option<String>,

    /// Configuration file (JSON)
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_target(false)
            .init();
    }

    let mut config = match &args.config {
        Some(path) => GatewayConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => GatewayConfig::from_env(),
    };
    if let Some(host) = args.host {
        config = config.with_host(host);
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if let Some(dir) = args.output_dir {
        config = config.with_output_dir(dir);
    }
    if let Some(model) = args.model {
        config = config.with_model(model);
    }

    print_banner(&config);

    let gateway = Gateway::new(config).context("Failed to initialise the Gemini client")?;
    gateway.start().await.context("Gateway terminated")?;

    Ok(())
}

fn print_banner(config: &GatewayConfig) {
    println!();
    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                                                               ║");
    println!("║              🎯  PITCHFORGE GATEWAY  🎯                       ║");
    println!("║                                                               ║");
    println!("║          AI Pitch Deck Generation over HTTP                   ║");
    println!("║                                                               ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("🔗 HTTP Endpoints");
    println!("   ├─ GET  /health                  — Health check");
    println!("   ├─ POST /api/generate-slide      — Generate one section");
    println!("   ├─ POST /api/generate-full-deck  — Generate all sections");
    println!("   └─ POST /api/generate-ppt        — Export deck as .pptx");
    println!();
    println!("⚙️  Configuration");
    println!("   ├─ Address   http://{}:{}", config.host, config.port);
    println!("   ├─ Model     {}", config.model);
    println!("   └─ Output    {}/", config.output_dir);
    println!();
    println!("─────────────────────────────────────────────────────────────────");
    println!("Press Ctrl+C to stop the gateway");
    println!();
}

//! ColorFlash - Spoken color flashcards
//!
//! Run with: cargo run -- --verbose

use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use colorflash::config::Config;
use colorflash::gui::FlashcardApp;
use colorflash::tts::SpeechService;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// TTS engine to use (system, speechd, none), overriding the config file
    #[arg(long)]
    tts: Option<String>,

    /// Do not speak, only show colors
    #[arg(long)]
    mute: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Could not read config, using defaults: {}", e);
        Config::default()
    });
    if let Some(engine) = args.tts {
        config.tts_engine = engine;
    }
    if args.mute {
        config.tts_engine = "none".to_string();
    }

    // Setup logging: RUST_LOG wins, then --verbose, then the config file
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if args.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new(config.log_directive())
        }
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🎨 ColorFlash v{} starting...", env!("CARGO_PKG_VERSION"));

    let speech = SpeechService::start(&config);
    if speech.is_muted() {
        warn!("🔇 Running without speech");
    }

    iced::application(FlashcardApp::title, FlashcardApp::update, FlashcardApp::view)
        .theme(FlashcardApp::theme)
        .subscription(FlashcardApp::subscription)
        .exit_on_close_request(false)
        .run_with(move || FlashcardApp::new(Arc::new(speech)))
        .map_err(|e| anyhow::anyhow!("GUI failed: {}", e))?;

    Ok(())
}

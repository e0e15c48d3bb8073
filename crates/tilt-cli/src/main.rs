//! CLI frontend for the tilt tracker.

mod commands;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tilt_core::PhraseSource;
use tracing_subscriber::EnvFilter;

/// Win phrases shipped with the binary, used when no file is given.
const BUNDLED_WIN_PHRASES: &str = include_str!("../phrases/win_phrases.txt");
/// Loss phrases shipped with the binary, used when no file is given.
const BUNDLED_LOSE_PHRASES: &str = include_str!("../phrases/lose_phrases.txt");

#[derive(Parser)]
#[command(
    name = "tilt",
    about = "Tilt tracker: keep an eye on your mood between games",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session reading win/lose commands from stdin
    Play {
        /// Player name substituted into phrases
        #[arg(short, long, default_value = "Player")]
        name: String,

        /// Starting tilt score (-200 to 200)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        score: i32,

        /// RNG seed for reproducible sessions
        #[arg(long)]
        seed: Option<u64>,

        /// How many recent phrases to avoid repeating
        #[arg(long, default_value_t = 5)]
        history: usize,

        /// File with one win phrase per line (default: bundled phrases)
        #[arg(long)]
        win_phrases: Option<PathBuf>,

        /// File with one loss phrase per line (default: bundled phrases)
        #[arg(long)]
        lose_phrases: Option<PathBuf>,

        /// Print one JSON object per event instead of the scale
        #[arg(long)]
        json: bool,
    },

    /// Print the mood band table
    Bands,
}

fn phrase_source(path: Option<PathBuf>, bundled: &str) -> PhraseSource {
    match path {
        Some(path) => PhraseSource::File(path),
        None => PhraseSource::inline(bundled),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            name,
            score,
            seed,
            history,
            win_phrases,
            lose_phrases,
            json,
        } => {
            let mut config = tilt_core::TiltConfig::default()
                .with_player_name(name)
                .with_start_score(score)
                .with_history_capacity(history)
                .with_win_source(phrase_source(win_phrases, BUNDLED_WIN_PHRASES))
                .with_lose_source(phrase_source(lose_phrases, BUNDLED_LOSE_PHRASES));
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            commands::play::run(config, json)
        }
        Commands::Bands => commands::bands::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

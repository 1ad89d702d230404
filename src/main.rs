//! Wordle - CLI
//!
//! Terminal Wordle with a TUI and a line-based mode.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use wordle_game::{
    commands::{run_simple, score_guess},
    config::{GameConfig, WordSource},
    interactive::{App, run_tui},
    logging::{LogTarget, init_logging},
    output::print_row,
    provider::datamuse::DEFAULT_API_URL,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word source: 'remote' (default, online word service), 'embedded', or path to file
    #[arg(short = 'w', long, global = true, default_value = "remote")]
    words: String,

    /// Word service endpoint used by the remote source
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Delay between revealing tiles, in milliseconds (0 disables the animation)
    #[arg(long, global = true, default_value_t = 150)]
    reveal_delay_ms: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score a single guess against a target word
    Score {
        /// Hidden word
        target: String,

        /// Guessed word
        guess: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_target = match (&command, cli.log_file.as_deref()) {
        (_, Some(path)) => LogTarget::File(path),
        (Commands::Play, None) => LogTarget::Disabled,
        _ => LogTarget::Stderr,
    };
    init_logging(cli.verbose, log_target)?;

    let config = GameConfig {
        source: WordSource::from_arg(&cli.words),
        api_url: cli.api_url,
        reveal_delay: Duration::from_millis(cli.reveal_delay_ms),
    };

    match command {
        Commands::Play => run_play_command(&config).await,
        Commands::Simple => run_simple_command(&config).await,
        Commands::Score { target, guess } => run_score_command(&target, &guess),
    }
}

async fn run_play_command(config: &GameConfig) -> Result<()> {
    let provider = config.provider()?;
    info!(source = provider.name(), "starting TUI");

    let app = App::new(config, provider.name());
    run_tui(app, provider).await
}

async fn run_simple_command(config: &GameConfig) -> Result<()> {
    let provider = config.provider()?;
    info!(source = provider.name(), "starting simple mode");

    run_simple(provider.as_ref(), config).await
}

fn run_score_command(target: &str, guess: &str) -> Result<()> {
    let evaluated = score_guess(target, guess)?;
    print_row(1, &evaluated);
    Ok(())
}

//! AeroGame - Morse code listening challenge
//!
//! Main entry point: encode messages to WAV, play the guessing game,
//! inspect rendered audio.

use aerogame_codecs::prelude::*;
use aerogame_core::wav::read_wav;
use aerogame_game::prelude::*;
use aerogame_tools::{init_logging, run_play, GameConfig, TimingArgs};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// AeroGame Morse challenge tool
#[derive(Parser)]
#[command(name = "aerogame")]
#[command(about = "Morse code audio encoder and listening challenge")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Game configuration file (TOML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text as a Morse WAV file
    Encode(EncodeArgs),
    /// Play the guessing game on the terminal
    Play(PlayArgs),
    /// Show the contents of a WAV file
    Inspect(InspectArgs),
    /// Show the Morse table and active timing
    Info(InfoArgs),
}

#[derive(Parser)]
struct EncodeArgs {
    /// Text to encode
    #[arg(short, long)]
    text: String,

    /// Output WAV file
    #[arg(short, long)]
    output: PathBuf,

    #[command(flatten)]
    timing: TimingArgs,
}

#[derive(Parser)]
struct PlayArgs {
    /// Where each challenge's audio is written
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Comma-separated word list, overrides the config file
    #[arg(long)]
    words: Option<String>,

    #[command(flatten)]
    timing: TimingArgs,
}

#[derive(Parser)]
struct InspectArgs {
    /// Input WAV file
    #[arg(short, long)]
    input: PathBuf,
}

#[derive(Parser)]
struct InfoArgs {
    #[command(flatten)]
    timing: TimingArgs,
}

fn load_game_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    match path {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            GameConfig::from_file(path)
        }
        None => Ok(GameConfig::default()),
    }
}

fn encode_command(mut config: GameConfig, args: EncodeArgs) -> Result<()> {
    args.timing.apply(&mut config.timing);

    let audio = encode(&args.text, &config.timing)?;
    std::fs::write(&args.output, audio.as_bytes())
        .with_context(|| format!("Failed to write WAV file: {:?}", args.output))?;

    println!(
        "✓ Encoded {:?}: {} samples ({:.2}s) written to {:?}",
        args.text,
        audio.num_samples(),
        audio.duration_seconds(),
        args.output
    );
    Ok(())
}

fn play_command(mut config: GameConfig, args: PlayArgs) -> Result<()> {
    args.timing.apply(&mut config.timing);
    if let Some(raw) = &args.words {
        config.words = parse_word_list(raw);
    }
    let output = args.output.unwrap_or_else(|| config.output.clone());

    let mut session = Session::new(config.word_source(), config.timing.clone())?;
    if let Some(code) = &config.reward_code {
        session = session.with_reward_code(code.clone());
    }

    let stdin = std::io::stdin();
    let stats = run_play(&mut session, &output, stdin.lock(), std::io::stdout())?;

    println!(
        "✓ {} of {} challenge(s) solved in {} answer(s)",
        stats.solved, stats.rounds, stats.attempts
    );
    Ok(())
}

fn inspect_command(args: InspectArgs) -> Result<()> {
    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("Failed to open WAV file: {:?}", args.input))?;
    let buffer = read_wav(&bytes)?;

    let peak = buffer
        .data()
        .iter()
        .map(|s| s.unsigned_abs())
        .max()
        .unwrap_or(0);

    println!("File:        {:?}", args.input);
    println!("Sample rate: {} Hz", buffer.sample_rate());
    println!("Samples:     {}", buffer.len());
    println!("Duration:    {:.3} s", buffer.duration_seconds());
    println!("Peak:        {}", peak);
    Ok(())
}

fn info_command(mut config: GameConfig, args: InfoArgs) {
    args.timing.apply(&mut config.timing);
    let timing = &config.timing;
    let table = MorseTable::global();

    println!("\n=== AeroGame Morse ===");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));

    println!("\n=== Timing ===");
    println!("  Sample rate:      {} Hz", timing.sample_rate);
    println!("  Tone:             {} Hz", timing.tone_frequency);
    println!("  Dot / dash:       {} ms / {} ms", timing.dot_ms, timing.dash_ms);
    println!("  Symbol gap:       {} ms", timing.intra_symbol_gap_ms);
    println!("  Letter gap:       {} ms", timing.letter_gap_ms);
    println!("  Word gap:         {} ms", timing.word_gap_ms);

    println!("\n=== Alphabet ===");
    for ch in table.characters() {
        if let Some(code) = table.render(ch) {
            println!("  {}  {}", ch, code);
        }
    }

    println!("\n=== Example Usage ===");
    println!("  Encode: aerogame encode -t \"SOS\" -o sos.wav");
    println!("  Play:   aerogame play --words SKY,MOON,STAR");
    println!("  Check:  aerogame inspect -i sos.wav");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    let config = load_game_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Encode(args) => encode_command(config, args)?,
        Commands::Play(args) => play_command(config, args)?,
        Commands::Inspect(args) => inspect_command(args)?,
        Commands::Info(args) => info_command(config, args),
    }

    Ok(())
}

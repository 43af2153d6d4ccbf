//! Matrix Anim CLI - Encode, decode and play 8x13 LED matrix animations.
//!
//! # Commands
//!
//! - `matrix-anim encode` - ASCII frame sheet to a `uint32_t` array listing
//! - `matrix-anim decode` - Listing or `.lmxa` container back to a frame sheet
//! - `matrix-anim play` - Loop an animation in the terminal
//! - `matrix-anim example-config` - Print the default JSON configuration

use std::fs;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};

use matrix_anim::{
    animation::{AnimationSequence, PlaybackStats, Player, format},
    codec::Notice,
    schema::{AnimConfig, OutputFormat, PixelStyle, ShortRowPolicy},
    text::{extract_word_rows, split_frames, to_c_array, to_frame_sheet, to_json},
};

/// Matrix Anim - 8x13 LED matrix animation codec
#[derive(Parser)]
#[command(name = "matrix-anim")]
#[command(about = "Encode, decode and play 8x13 LED matrix animations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode an ASCII frame sheet into a firmware word array
    Encode {
        /// Frame sheet; frames separated by blank lines
        input: PathBuf,
        /// Duration of every frame in milliseconds
        #[arg(short, long)]
        delay: Option<u32>,
        /// Name of the emitted C array
        #[arg(short, long)]
        name: Option<String>,
        /// Output representation
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Decode a word array listing or .lmxa container into a frame sheet
    Decode {
        /// C listing or .lmxa container
        input: PathBuf,
        /// Fail on rows with fewer than 5 values instead of skipping them
        #[arg(long)]
        strict: bool,
        /// Glyph for lit pixels
        #[arg(long)]
        lit: Option<char>,
        /// Glyph for unlit pixels
        #[arg(long)]
        unlit: Option<char>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Play an animation in the terminal (Ctrl+C to stop)
    Play {
        /// C listing or .lmxa container
        #[arg(default_value = "animation.h")]
        input: PathBuf,
        /// Use ASCII characters for legacy terminals
        #[arg(long)]
        ascii: bool,
        /// Number of passes (default: loop forever)
        #[arg(long)]
        loops: Option<u64>,
        /// Fail on rows with fewer than 5 values instead of skipping them
        #[arg(long)]
        strict: bool,
        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the default configuration as JSON
    ExampleConfig,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// C uint32_t array listing
    C,
    /// JSON array of packed frames
    Json,
    /// Normalized ASCII frame sheet
    Sheet,
    /// .lmxa binary container
    Binary,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::C => OutputFormat::CArray,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sheet => OutputFormat::Sheet,
            FormatArg::Binary => OutputFormat::Binary,
        }
    }
}

fn main() -> Result<()> {
    // Normalization notices are warnings; show them unless RUST_LOG says otherwise.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            delay,
            name,
            format,
            output,
            config,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(delay) = delay {
                config.encode.duration_ms = delay;
            }
            if let Some(name) = name {
                config.encode.array_name = name;
            }
            if let Some(format) = format {
                config.encode.format = format.into();
            }
            config.validate()?;

            let bytes = encode(&input, &config)?;
            emit(output.as_deref(), &bytes)?;
        }
        Commands::Decode {
            input,
            strict,
            lit,
            unlit,
            output,
            config,
        } => {
            let mut config = load_config(config.as_deref())?;
            if strict {
                config.decode.short_row_policy = ShortRowPolicy::Reject;
            }
            if let Some(lit) = lit {
                config.decode.lit_glyph = lit;
            }
            if let Some(unlit) = unlit {
                config.decode.unlit_glyph = unlit;
            }
            config.validate()?;

            let sequence = load_sequence(&input, config.decode.short_row_policy)?;
            let sheet = to_frame_sheet(
                &sequence,
                config.decode.lit_glyph,
                config.decode.unlit_glyph,
            );
            emit(output.as_deref(), sheet.as_bytes())?;
        }
        Commands::Play {
            input,
            ascii,
            loops,
            strict,
            config,
        } => {
            let mut config = load_config(config.as_deref())?;
            if ascii {
                config.decode.style = PixelStyle::Ascii;
            }
            if loops.is_some() {
                config.decode.loops = loops;
            }
            if strict {
                config.decode.short_row_policy = ShortRowPolicy::Reject;
            }
            config.validate()?;

            let sequence = load_sequence(&input, config.decode.short_row_policy)?;
            let player = Player::new(&sequence)
                .style(config.decode.style)
                .loops(config.decode.loops)
                .title(format!(
                    "Animation from {} (Ctrl+C to stop)",
                    input.display()
                ));

            let stop = player.stop_handle();
            ctrlc::set_handler(move || stop.store(true, Ordering::Relaxed))
                .context("Failed to install Ctrl+C handler")?;

            let stats = player.play(&mut io::stdout().lock())?;
            log::info!(
                "Played {} frames over {} loops",
                stats.frames_shown,
                stats.loops_completed
            );
            if let Some(message) = stop_message(&stats) {
                println!("\n{}", message);
            }
        }
        Commands::ExampleConfig => {
            println!("{}", serde_json::to_string_pretty(&AnimConfig::default())?);
        }
    }

    Ok(())
}

/// Read a JSON configuration, or the defaults when no path is given.
fn load_config(path: Option<&Path>) -> Result<AnimConfig> {
    let Some(path) = path else {
        return Ok(AnimConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse config {}", path.display()))
}

/// Closing line for a playback run ended by the stop flag.
fn stop_message(stats: &PlaybackStats) -> Option<&'static str> {
    stats.stopped.then_some("Animation stopped.")
}

fn log_notices(notices: &[Notice]) {
    for notice in notices {
        log::warn!("{}", notice);
    }
}

/// Encode a frame sheet file into the configured output representation.
fn encode(input: &Path, config: &AnimConfig) -> Result<Vec<u8>> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let groups = split_frames(&source);
    let normalized = AnimationSequence::from_frame_groups(&groups, config.encode.duration_ms)
        .with_context(|| format!("No frames in {}", input.display()))?;
    log_notices(&normalized.notices);
    let sequence = normalized.value;
    log::info!("Encoded {} frames from {}", sequence.len(), input.display());

    let bytes = match config.encode.format {
        OutputFormat::CArray => to_c_array(&sequence, &config.encode.array_name).into_bytes(),
        OutputFormat::Json => {
            let mut json = to_json(&sequence)?;
            json.push('\n');
            json.into_bytes()
        }
        OutputFormat::Sheet => to_frame_sheet(&sequence, '#', '.').into_bytes(),
        OutputFormat::Binary => {
            let mut buf = Vec::new();
            format::write_sequence(&mut buf, &sequence)?;
            buf
        }
    };
    Ok(bytes)
}

/// Load a sequence from a C listing or an `.lmxa` container.
fn load_sequence(input: &Path, policy: ShortRowPolicy) -> Result<AnimationSequence> {
    let bytes =
        fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;

    if format::is_container(&bytes) {
        let sequence = format::read_sequence(&mut Cursor::new(&bytes))
            .with_context(|| format!("Invalid container {}", input.display()))?;
        log::info!("Loaded {} frames from container", sequence.len());
        return Ok(sequence);
    }

    let Ok(source) = std::str::from_utf8(&bytes) else {
        bail!("{} is neither a text listing nor an .lmxa container", input.display());
    };
    let rows = extract_word_rows(source)
        .with_context(|| format!("Could not find a valid animation array in {}", input.display()))?;
    let normalized = AnimationSequence::from_word_rows(&rows, policy)
        .with_context(|| format!("Failed to load animation data from {}", input.display()))?;
    log_notices(&normalized.notices);
    Ok(normalized.value)
}

fn emit(output: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

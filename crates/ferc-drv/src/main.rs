//! Ferc CLI - driver for the Ferrum lexer.
//!
//! This is the main entry point for the `ferc` binary. It uses clap for
//! argument parsing and dispatches to the `tokens` and `highlight`
//! command handlers.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_highlight, run_tokens, HighlightArgs, TokensArgs};
use config::Config;
use ferc_hl::ColorMode;

/// Ferc - lexer and terminal highlighter for Ferrum source
#[derive(Parser, Debug)]
#[command(name = "ferc")]
#[command(author = "Ferrum Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexer and terminal highlighter for Ferrum source", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "FERC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FERC_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the ferc CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a source file
    ///
    /// Each token is printed as `line:column<TAB>KIND<TAB>text`, with the
    /// text column omitted for tokens whose spelling is implied by the
    /// kind. Errors appear in-stream with their diagnostic message.
    Tokens(TokensCommand),

    /// Print a source file with syntax highlighting
    ///
    /// The original file is replayed byte for byte with ANSI styles
    /// switched at token boundaries; lexical errors are shown on a red
    /// background.
    Highlight(HighlightCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file to scan
    file: PathBuf,

    /// Emit the token stream as JSON
    #[arg(long)]
    json: bool,
}

/// Arguments for the highlight subcommand.
#[derive(Parser, Debug)]
struct HighlightCommand {
    /// Source file to highlight
    file: PathBuf,

    /// When to use colors
    #[arg(long, value_enum)]
    color: Option<ColorArg>,
}

/// Color mode as spelled on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// Installs the tracing subscriber. `FERC_LOG` overrides the default
/// filter; `--verbose` bumps it to debug.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("FERC_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Tokens(cmd) => run_tokens(TokensArgs {
            file: cmd.file,
            json: cmd.json || config.tokens.json,
        }),
        Commands::Highlight(cmd) => run_highlight(HighlightArgs {
            file: cmd.file,
            mode: cmd.color.map(ColorMode::from).unwrap_or(config.color_mode()),
        }),
    }
}

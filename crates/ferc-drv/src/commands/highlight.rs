//! The `highlight` subcommand: print a source file with per-token styling.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use ferc_hl::{write_highlighted, ColorMode};
use ferc_lex::tokenize;

/// Arguments for [`run_highlight`].
pub struct HighlightArgs {
    /// Source file to highlight.
    pub file: PathBuf,
    /// Color mode; `Auto` checks whether stdout is a terminal.
    pub mode: ColorMode,
}

/// Scans the file and replays it to stdout with ANSI styling.
pub fn run_highlight(args: HighlightArgs) -> Result<()> {
    let source = fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let tokens = tokenize(&source);

    let stdout = io::stdout();
    let colors = args.mode.should_use_colors(stdout.is_terminal());
    debug!(tokens = tokens.len(), colors, "rendering highlighted source");

    let mut out = io::BufWriter::new(stdout.lock());
    write_highlighted(&mut out, &source, &tokens, colors)?;
    out.flush()?;
    Ok(())
}

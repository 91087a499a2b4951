//! The `tokens` subcommand: scan a file and print its token stream.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use ferc_lex::tokenize;

/// Arguments for [`run_tokens`].
pub struct TokensArgs {
    /// Source file to scan.
    pub file: PathBuf,
    /// Emit the token stream as a JSON array instead of one line per token.
    pub json: bool,
}

/// Scans the file and prints one `line:column<TAB>KIND<TAB>text` line per
/// token, or a JSON array with `--json`.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let source = fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let tokens = tokenize(&source);
    debug!(bytes = source.len(), tokens = tokens.len(), "scanned input");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if args.json {
        serde_json::to_writer_pretty(&mut out, &tokens).context("failed to serialize tokens")?;
        writeln!(&mut out)?;
    } else {
        for token in &tokens {
            writeln!(&mut out, "{token}")?;
        }
    }
    out.flush()?;
    Ok(())
}

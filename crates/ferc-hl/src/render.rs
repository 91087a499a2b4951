//! Source replay: prints the original character stream with styles applied
//! at token boundaries.

use std::io::{self, Write};

use ferc_lex::Token;

use crate::style::{ansi, style_for};

/// Writes `source` to `out`, switching styles wherever a token starts.
///
/// The source is replayed byte for byte; a 0-based (line, column) cursor is
/// kept in the same way the scanner keeps its cursor, and whenever the next
/// pending token starts at the cursor the style for its kind is emitted
/// before the byte. Styles persist until the next token boundary, so an
/// error's background highlight covers everything up to the following
/// token. With `colors` false the source passes through untouched.
///
/// Tokens must be ordered by start position, which is how the scanner
/// produces them.
pub fn write_highlighted<W: Write>(
    out: &mut W,
    source: &[u8],
    tokens: &[Token],
    colors: bool,
) -> io::Result<()> {
    let mut line: u32 = 0;
    let mut column: u32 = 0;
    let mut next = 0;

    for &byte in source {
        while next < tokens.len() && tokens[next].line == line && tokens[next].column == column {
            if colors {
                out.write_all(ansi::RESET.as_bytes())?;
                let style = style_for(tokens[next].kind);
                if !style.is_empty() {
                    out.write_all(style.as_bytes())?;
                }
            }
            next += 1;
        }

        out.write_all(&[byte])?;

        if byte == b'\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }

    if colors {
        out.write_all(ansi::RESET.as_bytes())?;
    }
    Ok(())
}

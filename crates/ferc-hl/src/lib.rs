//! ferc-hl - Terminal Syntax Highlighter for Ferrum Source
//!
//! This crate consumes a token stream from `ferc-lex` together with the
//! original character stream and replays the source to a terminal with
//! ANSI styling applied per token kind. It contains no lexical logic of
//! its own: token boundaries and kinds come entirely from the scanner.
//!
//! # Example
//!
//! ```
//! use ferc_hl::write_highlighted;
//! use ferc_lex::tokenize;
//!
//! let source = b"let x = 1;\n";
//! let tokens = tokenize(source);
//!
//! let mut out = Vec::new();
//! write_highlighted(&mut out, source, &tokens, true).unwrap();
//! assert!(out.starts_with(b"\x1b[0m"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod render;
mod style;

pub use render::write_highlighted;
pub use style::{style_for, ColorMode};

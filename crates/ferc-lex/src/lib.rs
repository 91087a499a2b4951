//! ferc-lex - Lexical Analyzer for the Ferrum Programming Language
//!
//! This crate provides the lexer (tokenizer) for Ferrum source code. It
//! transforms a stream of 8-bit characters into an ordered sequence of
//! classified tokens with source positions, recovering from malformed
//! input by emitting error tokens instead of failing.
//!
//! # Overview
//!
//! The scanner is a single-pass finite-state machine: it consumes one
//! character per step, with every ambiguity (`'` opening a char literal, a
//! lifetime or a label; `r` opening a raw string or an identifier; `0`
//! opening a decimal or radix-prefixed literal) resolved by dedicated
//! states rather than input lookahead. Consumers such as the `ferc-hl`
//! highlighter replay the original source against the token positions.
//!
//! # Example Usage
//!
//! ```
//! use ferc_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize(b"let x = 42; // answer\n");
//!
//! assert_eq!(tokens[0].kind, TokenKind::Let);
//! assert_eq!(tokens[3].kind, TokenKind::IntLiteralDec);
//! assert_eq!(tokens[3].text.as_deref(), Some("42"));
//! assert_eq!(tokens[5].kind, TokenKind::Comment);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token record, kind enumeration and the keyword table
//! - [`scanner`] - The scanning engine and its per-state handlers
//!
//! # Token Categories
//!
//! The scanner produces the following token groups:
//!
//! - **Keywords**: the ~50 reserved words, each with its own kind, plus
//!   the weak keyword `union` and the `'static` lifetime
//! - **Identifiers**: `[a-zA-Z0-9_]+` not matching a reserved word, and
//!   the bare `_` wildcard
//! - **Lifetimes and labels**: `'a`, `'outer:`
//! - **Literals**: char, byte, string, byte-string, raw-string,
//!   raw-byte-string, decimal/hex/octal/binary integers, floats
//! - **Comments**: plain, inner doc (`//!`, `/*!`) and outer doc (`///`,
//!   `/**`), line and block forms, with nesting for blocks
//! - **Operators and punctuation**: maximal munch, `<<=` over `<<` over `<`
//! - **Errors**: malformed input, carrying a diagnostic message

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod scanner;
pub mod token;

mod edge_cases;
mod state;

// Re-export main types for convenience
pub use scanner::{tokenize, Scanner};
pub use token::{keyword_from_ident, Token, TokenKind};

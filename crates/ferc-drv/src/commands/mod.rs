//! Command handlers for the ferc CLI.

mod highlight;
mod tokens;

pub use highlight::{run_highlight, HighlightArgs};
pub use tokens::{run_tokens, TokensArgs};

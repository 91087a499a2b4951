//! Raw string scanning: `r"..."`, `r#"..."#`, `br"..."` and the
//! `#`-count matching between opener and closer.

use super::{Scanner, Step};
use crate::state::State;
use crate::token::TokenKind;

impl Scanner {
    /// An `r` was seen in the initial state. A quote or `#` commits to a
    /// raw string; anything else falls back to an ordinary identifier.
    pub(crate) fn possibly_raw_string(&mut self, c: u8) -> Step {
        match c {
            b'"' => {
                self.push_char(c);
                self.raw_is_byte = false;
                self.raw_open_hashes = 0;
                self.state = State::RawStringBody;
                Step::Done
            }
            b'#' => {
                self.push_char(c);
                self.raw_is_byte = false;
                self.raw_open_hashes = 1;
                self.state = State::RawStringOpen;
                Step::Done
            }
            _ => {
                self.state = State::IdentOrKeyword;
                Step::Redispatch
            }
        }
    }

    /// Counting the opening `#` run, or — for a bare `br` prefix — still
    /// deciding whether this is a raw byte string at all. Once a `#` has
    /// been consumed the scanner is committed: a character that is neither
    /// `#` nor `"` is an error.
    pub(crate) fn raw_string_open(&mut self, c: u8) -> Step {
        match c {
            b'#' => {
                self.push_char(c);
                self.raw_open_hashes += 1;
                Step::Done
            }
            b'"' => {
                self.push_char(c);
                self.state = State::RawStringBody;
                Step::Done
            }
            _ if self.raw_open_hashes == 0 => {
                // `br` followed by something else: an ordinary identifier
                // after all (`break`, `brand`, ...).
                self.raw_is_byte = false;
                self.state = State::IdentOrKeyword;
                Step::Redispatch
            }
            _ => {
                self.error_at_start("expected \" or # after raw string prefix");
                Step::Redispatch
            }
        }
    }

    /// Raw string body: everything is taken verbatim until a `"` starts a
    /// closing candidate.
    pub(crate) fn raw_string_body(&mut self, c: u8) -> Step {
        self.push_char(c);
        if c == b'"' {
            if self.raw_open_hashes == 0 {
                self.finish_raw_string();
            } else {
                self.raw_close_hashes = 0;
                self.state = State::RawStringClose;
            }
        }
        Step::Done
    }

    /// Counting a closing `#` run. The literal only closes when the run
    /// length reaches the opener's count; a short run is body content.
    pub(crate) fn raw_string_close(&mut self, c: u8) -> Step {
        self.push_char(c);
        match c {
            b'#' => {
                self.raw_close_hashes += 1;
                if self.raw_close_hashes == self.raw_open_hashes {
                    self.finish_raw_string();
                }
            }
            b'"' => {
                // A new quote restarts the closing candidate.
                self.raw_close_hashes = 0;
            }
            _ => {
                self.raw_close_hashes = 0;
                self.state = State::RawStringBody;
            }
        }
        Step::Done
    }

    fn finish_raw_string(&mut self) {
        let kind = if self.raw_is_byte {
            TokenKind::RawByteStringLiteral
        } else {
            TokenKind::RawStringLiteral
        };
        self.push_text_at_start(kind);
    }
}

//! String, char and byte literal scanning, including escape sequences,
//! and the `'`-prefix disambiguation between char literals, lifetimes and
//! labels.

use super::{is_hex_digit, is_ident_char, Scanner, Step};
use crate::state::{Escape, State};
use crate::token::{keyword_from_ident, TokenKind};

impl Scanner {
    /// A `b` was seen in the initial state. The next character decides
    /// between a byte literal, a byte string, a raw byte string and an
    /// ordinary identifier.
    pub(crate) fn possibly_byte(&mut self, c: u8) -> Step {
        match c {
            b'\'' => {
                self.push_char(c);
                self.state = State::ByteLiteral;
                self.escape = Escape::None;
                Step::Done
            }
            b'"' => {
                self.push_char(c);
                self.state = State::ByteStringLiteral;
                self.escape = Escape::None;
                Step::Done
            }
            b'r' => {
                self.push_char(c);
                self.state = State::RawStringOpen;
                self.raw_is_byte = true;
                self.raw_open_hashes = 0;
                Step::Done
            }
            _ => {
                self.state = State::IdentOrKeyword;
                Step::Redispatch
            }
        }
    }

    /// A `'` was seen. The buffer length and the character class decide
    /// between a char literal, a lifetime and a label:
    ///
    /// - `'\...'` or `'x'` → char literal
    /// - `'ident:` → label, `'ident` otherwise → lifetime
    /// - `'` followed by anything else → error
    pub(crate) fn char_or_lifetime_or_label(&mut self, c: u8) -> Step {
        if c == b'\\' && self.buffer.len() == 1 {
            self.push_char(c);
            self.state = State::CharLiteral;
            self.escape = Escape::Slash;
            Step::Done
        } else if c == b'\'' {
            self.push_char(c);
            if self.buffer.len() == 2 {
                self.error_at_start("empty char literal");
            } else {
                self.push_text_at_start(TokenKind::CharLiteral);
            }
            Step::Done
        } else if self.buffer.len() == 1 {
            if is_ident_char(c) {
                self.push_char(c);
                Step::Done
            } else {
                self.error_at_start("expected char literal, lifetime, or label");
                Step::Done
            }
        } else {
            self.state = State::LifetimeOrLabel;
            Step::Redispatch
        }
    }

    /// Accumulates a lifetime or label. A trailing `:` makes it a label;
    /// the spelling `'static` maps to its own kind via the keyword table.
    pub(crate) fn lifetime_or_label(&mut self, c: u8) -> Step {
        if is_ident_char(c) {
            self.push_char(c);
            Step::Done
        } else if c == b':' {
            self.push_char(c);
            self.push_text_at_start(TokenKind::Label);
            Step::Done
        } else {
            match keyword_from_ident(&self.buffer) {
                Some(kind) => self.push_at_start(kind),
                None => self.push_text_at_start(TokenKind::Lifetime),
            }
            Step::Redispatch
        }
    }

    /// Dispatch for the four literal states governed by the escape
    /// sub-state.
    pub(crate) fn string_like(&mut self, c: u8) -> Step {
        match self.escape {
            Escape::None => self.escape_none(c),
            Escape::Slash => self.escape_slash(c),
            Escape::AsciiOrByte => self.escape_ascii_or_byte(c),
            Escape::Unicode => self.escape_unicode(c),
        }
    }

    /// Whether the literal in progress is byte-oriented (`b'...'`,
    /// `b"..."`). Byte contexts reject unicode escapes, allow `\xNN` up to
    /// 0xFF, and reject raw bytes above 0x7F.
    fn in_byte_context(&self) -> bool {
        matches!(self.state, State::ByteLiteral | State::ByteStringLiteral)
    }

    /// Plain accumulation: the quote character closes the literal, `\`
    /// opens an escape.
    fn escape_none(&mut self, c: u8) -> Step {
        match self.state {
            State::StringLiteral => {
                self.push_char(c);
                match c {
                    b'"' => self.push_text_at_start(TokenKind::StringLiteral),
                    b'\\' => self.escape = Escape::Slash,
                    _ => {}
                }
            }
            State::ByteStringLiteral => {
                if c >= 0x80 {
                    self.error_at_start("bytes above 0x7F are not allowed in byte strings");
                    return Step::Done;
                }
                self.push_char(c);
                match c {
                    b'"' => self.push_text_at_start(TokenKind::ByteStringLiteral),
                    b'\\' => self.escape = Escape::Slash,
                    _ => {}
                }
            }
            State::CharLiteral => {
                // Only reachable after a completed escape: the closing
                // quote is the one legal continuation.
                if c == b'\'' {
                    self.push_char(c);
                    self.push_text_at_start(TokenKind::CharLiteral);
                } else {
                    self.error_at_start("did not expect more than one character");
                }
            }
            State::ByteLiteral => {
                if c == b'\'' {
                    self.push_char(c);
                    self.push_text_at_start(TokenKind::ByteLiteral);
                } else if c >= 0x80 {
                    self.error_at_start("bytes above 0x7F are not allowed in byte literals");
                } else if self.buffer.len() == 2 {
                    // Nothing after `b'` yet: first content character.
                    if c == b'\\' {
                        self.push_char(c);
                        self.escape = Escape::Slash;
                    } else {
                        self.push_char(c);
                    }
                } else {
                    self.error_at_start("did not expect more than one character");
                }
            }
            _ => unreachable!("escape_none outside literal states"),
        }
        Step::Done
    }

    /// A `\` has been consumed; classify the escape.
    fn escape_slash(&mut self, c: u8) -> Step {
        self.push_char(c);
        match c {
            b'\'' | b'"' | b'n' | b'r' | b't' | b'\\' | b'0' => self.escape = Escape::None,
            b'\n' => {
                // Line continuation, legal only in ordinary strings.
                if self.state == State::StringLiteral {
                    self.escape = Escape::None;
                } else {
                    self.error_at_start(
                        "backslash before newline is only allowed in string literals",
                    );
                }
            }
            b'x' => self.escape = Escape::AsciiOrByte,
            b'u' => {
                if self.in_byte_context() {
                    self.error_at_start("unicode escapes are not allowed in byte strings");
                } else {
                    self.escape = Escape::Unicode;
                }
            }
            // Any other character stays in the escape: the scanner keeps
            // looking for a recognizable escape character.
            _ => {}
        }
        Step::Done
    }

    /// Inside `\xNN`. The buffer tells which digit this is: right after
    /// the `x` it is the first one. In non-byte contexts the first digit
    /// is capped at 7, keeping code points at or below 0x7F.
    fn escape_ascii_or_byte(&mut self, c: u8) -> Step {
        let first_digit = self.buffer.ends_with('x');
        self.push_char(c);

        if !is_hex_digit(c) {
            self.error_at_start("unexpected symbol in hex character code");
        } else if first_digit {
            if !self.in_byte_context() && !(b'0'..=b'7').contains(&c) {
                self.error_at_start("ascii escape character code must be at most 0x7F");
            }
        } else {
            self.escape = Escape::None;
        }
        Step::Done
    }

    /// Inside `\u{...}`: a mandatory `{`, then up to six hex digits, then
    /// `}`.
    fn escape_unicode(&mut self, c: u8) -> Step {
        if self.buffer.ends_with('u') {
            self.push_char(c);
            if c != b'{' {
                self.error_at_start("unicode escape must start with {");
            }
            return Step::Done;
        }

        let digits = self
            .buffer
            .bytes()
            .rev()
            .take_while(|&b| b != b'{')
            .count();
        self.push_char(c);

        if is_hex_digit(c) {
            if digits + 1 > 6 {
                self.error_at_start("too many digits in unicode escape");
            }
        } else if c == b'}' {
            self.escape = Escape::None;
        } else {
            self.error_at_start("unexpected symbol in hex character code");
        }
        Step::Done
    }
}

//! The scanning engine: a single-pass, character-driven state machine.
//!
//! The scanner consumes one 8-bit code unit at a time. The active
//! [`State`](crate::state::State) selects a handler; a handler either
//! consumes the character into the working buffer, transitions, or
//! completes a token and asks for the same character to be offered to the
//! new state again. Malformed input becomes [`TokenKind::Error`] tokens —
//! the scanner always recovers and keeps going.

mod comment;
mod ident;
mod number;
mod operator;
mod raw_string;
mod string;

use crate::state::{Escape, Radix, State};
use crate::token::{Token, TokenKind};

/// What a state handler wants done with the character it was offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// The character was consumed; advance to the next one.
    Done,
    /// A token completed (or an error was recorded) without consuming the
    /// character; offer the same character to the new state.
    Redispatch,
}

/// The lexical scanner.
///
/// One `Scanner` instance processes exactly one input to completion. All
/// transient lexical state — the FSM state, the escape sub-state, the
/// working buffer, raw-string hash counters, nested-comment depth and the
/// cursor — is owned by the scanner value and never shared.
///
/// # Example
///
/// ```
/// use ferc_lex::{Scanner, TokenKind};
///
/// let tokens = Scanner::scan(b"let x = 42;");
/// assert_eq!(tokens[0].kind, TokenKind::Let);
/// assert_eq!(tokens[1].kind, TokenKind::Identifier);
/// assert_eq!(tokens[1].text.as_deref(), Some("x"));
/// ```
#[derive(Debug)]
pub struct Scanner {
    /// Completed tokens, in source order.
    tokens: Vec<Token>,

    /// Current FSM state.
    state: State,

    /// Escape sub-state for string/char/byte literals.
    escape: Escape,

    /// Text of the lexeme under construction, including delimiters.
    buffer: String,

    /// Position of the first character of the lexeme under construction.
    start_line: u32,
    start_column: u32,

    /// Radix of the integer literal being scanned (valid in `RadixInt`).
    radix: Radix,

    /// `#` count of the raw-string opener being matched.
    raw_open_hashes: u32,

    /// `#` run length of the closing candidate currently being counted.
    raw_close_hashes: u32,

    /// Whether the raw string in progress is a byte string (`br` prefix).
    raw_is_byte: bool,

    /// Block-comment nesting depth. Zero exactly when no block comment is
    /// in progress.
    comment_depth: u32,

    /// Kind the comment in progress will be emitted as. Fixed at the
    /// outermost opening; nesting never changes it.
    comment_kind: TokenKind,

    /// Cursor position of the character currently being dispatched
    /// (0-based; `column` resets to 0 after a newline).
    line: u32,
    column: u32,

    /// Last byte fed, used to decide whether a trailing newline must be
    /// synthesized at end of input.
    last_byte: Option<u8>,
}

/// True for the ASCII letters, digits and `_` — the only identifier
/// characters the scanner recognizes.
pub(crate) fn is_ident_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Digit predicate for escape sequences. Deliberately lax: any ASCII
/// letter or digit counts.
pub(crate) fn is_hex_digit(c: u8) -> bool {
    c.is_ascii_alphanumeric()
}

impl Scanner {
    /// Creates a scanner with the cursor at the start of the input.
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            state: State::Initial,
            escape: Escape::None,
            buffer: String::new(),
            start_line: 0,
            start_column: 0,
            radix: Radix::Hex,
            raw_open_hashes: 0,
            raw_close_hashes: 0,
            raw_is_byte: false,
            comment_depth: 0,
            comment_kind: TokenKind::Comment,
            line: 0,
            column: 0,
            last_byte: None,
        }
    }

    /// Scans an entire input and returns the token sequence.
    ///
    /// This never fails: malformed input is reported through
    /// [`TokenKind::Error`] tokens interleaved with the valid ones.
    pub fn scan(source: &[u8]) -> Vec<Token> {
        let mut scanner = Scanner::new();
        for &byte in source {
            scanner.feed(byte);
        }
        scanner.finish()
    }

    /// Feeds a single byte to the scanner.
    ///
    /// The byte is offered to the active state's handler; if the handler
    /// completes a token the same byte is re-offered to the next state in
    /// a loop. The loop is bounded: every re-dispatch either consumes the
    /// byte or moves to a state that will.
    pub fn feed(&mut self, byte: u8) {
        let mut step = self.dispatch(byte);
        while step == Step::Redispatch {
            step = self.dispatch(byte);
        }

        if byte == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        self.last_byte = Some(byte);
    }

    /// Finishes the scan and returns the tokens.
    ///
    /// If the input did not end with a newline one is synthesized, so that
    /// line comments and lexemes in progress are closed exactly as they
    /// would have been mid-file. Unterminated string literals and block
    /// comments produce no token.
    pub fn finish(mut self) -> Vec<Token> {
        match self.last_byte {
            None | Some(b'\n') => {}
            Some(_) => self.feed(b'\n'),
        }
        self.tokens
    }

    /// Routes the character to the active state's handler.
    fn dispatch(&mut self, c: u8) -> Step {
        match self.state {
            State::Initial => self.initial_state(c),
            State::IdentOrUnderscore => self.ident_or_underscore(c),
            State::IdentOrKeyword => self.ident_or_keyword(c),
            State::PossiblyRawString => self.possibly_raw_string(c),
            State::PossiblyByte => self.possibly_byte(c),
            State::CharOrLifetimeOrLabel => self.char_or_lifetime_or_label(c),
            State::LifetimeOrLabel => self.lifetime_or_label(c),
            State::StringLiteral
            | State::CharLiteral
            | State::ByteLiteral
            | State::ByteStringLiteral => self.string_like(c),
            State::RawStringOpen => self.raw_string_open(c),
            State::RawStringBody => self.raw_string_body(c),
            State::RawStringClose => self.raw_string_close(c),
            State::IntDec => self.int_dec(c),
            State::RadixInt => self.radix_int(c),
            State::FloatDot => self.float_dot(c),
            State::FloatFraction => self.float_fraction(c),
            State::ExponentSign => self.exponent_sign(c),
            State::ExponentDigits => self.exponent_digits(c),
            State::Slash => self.slash(c),
            State::LineCommentStart => self.line_comment_start(c),
            State::LineCommentMaybeDoc => self.line_comment_maybe_doc(c),
            State::LineCommentBody => self.line_comment_body(c),
            State::BlockCommentStart => self.block_comment_start(c),
            State::BlockCommentMaybeDoc => self.block_comment_maybe_doc(c),
            State::BlockCommentBody => self.block_comment_body(c),
            State::BlockCommentStar => self.block_comment_star(c),
            State::BlockCommentMaybeNested => self.block_comment_maybe_nested(c),
            State::Punct => self.punct(c),
        }
    }

    /// Handler for `State::Initial`: classify the first character of the
    /// next lexeme.
    fn initial_state(&mut self, c: u8) -> Step {
        match c {
            b'_' => self.start_buffer(c, State::IdentOrUnderscore),
            b'r' => self.start_buffer(c, State::PossiblyRawString),
            b'b' => self.start_buffer(c, State::PossiblyByte),
            b'"' => {
                self.start_buffer(c, State::StringLiteral);
                self.escape = Escape::None;
            }
            b'\'' => self.start_buffer(c, State::CharOrLifetimeOrLabel),
            b'0'..=b'9' => self.start_buffer(c, State::IntDec),
            b'/' => self.start_buffer(c, State::Slash),
            c if is_ident_char(c) => self.start_buffer(c, State::IdentOrKeyword),

            // Punctuation with no compound form is emitted immediately.
            b'@' => self.push_here(TokenKind::At),
            b',' => self.push_here(TokenKind::Comma),
            b';' => self.push_here(TokenKind::Semicolon),
            b'#' => self.push_here(TokenKind::Pound),
            b'$' => self.push_here(TokenKind::Dollar),
            b'?' => self.push_here(TokenKind::Question),
            b'(' => self.push_here(TokenKind::ParenL),
            b')' => self.push_here(TokenKind::ParenR),
            b'[' => self.push_here(TokenKind::SquareL),
            b']' => self.push_here(TokenKind::SquareR),
            b'{' => self.push_here(TokenKind::CurlyL),
            b'}' => self.push_here(TokenKind::CurlyR),

            b'+' | b'-' | b'*' | b'%' | b'^' | b'!' | b'=' | b'&' | b'|' | b':' | b'<'
            | b'>' | b'.' => self.start_buffer(c, State::Punct),

            c if c.is_ascii_whitespace() => {}

            _ => {
                self.tokens.push(Token::with_text(
                    self.line,
                    self.column,
                    TokenKind::Error,
                    "unexpected symbol",
                ));
            }
        }
        Step::Done
    }

    /// Begins a new lexeme at the current cursor position.
    fn start_buffer(&mut self, c: u8, state: State) {
        self.buffer.clear();
        self.buffer.push(c as char);
        self.start_line = self.line;
        self.start_column = self.column;
        self.state = state;
    }

    /// Emits a fixed-spelling token at the current cursor position.
    fn push_here(&mut self, kind: TokenKind) {
        self.tokens.push(Token::new(self.line, self.column, kind));
    }

    /// Completes the current lexeme as a token without text and returns to
    /// the initial state.
    pub(crate) fn push_at_start(&mut self, kind: TokenKind) {
        self.tokens
            .push(Token::new(self.start_line, self.start_column, kind));
        self.buffer.clear();
        self.reset_sublex();
    }

    /// Completes the current lexeme as a token carrying the buffered text
    /// and returns to the initial state.
    pub(crate) fn push_text_at_start(&mut self, kind: TokenKind) {
        let text = std::mem::take(&mut self.buffer);
        self.tokens
            .push(Token::with_text(self.start_line, self.start_column, kind, text));
        self.reset_sublex();
    }

    /// Records an error token positioned where the current lexeme began and
    /// returns to the initial state. The lexeme in progress is abandoned.
    pub(crate) fn error_at_start(&mut self, message: &str) {
        self.tokens.push(Token::with_text(
            self.start_line,
            self.start_column,
            TokenKind::Error,
            message,
        ));
        self.buffer.clear();
        self.reset_sublex();
    }

    /// Clears every per-lexeme sub-state on return to `State::Initial`.
    fn reset_sublex(&mut self) {
        self.state = State::Initial;
        self.escape = Escape::None;
        self.raw_open_hashes = 0;
        self.raw_close_hashes = 0;
        self.raw_is_byte = false;
        self.comment_depth = 0;
    }

    /// Appends one input byte to the working buffer.
    ///
    /// Bytes are widened to chars one-to-one (no multi-byte decoding), so
    /// bytes above 0x7F land in the buffer as U+0080..U+00FF.
    pub(crate) fn push_char(&mut self, c: u8) {
        self.buffer.push(c as char);
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Scans `source` and returns the token sequence.
///
/// Convenience wrapper around [`Scanner::scan`].
///
/// # Example
///
/// ```
/// use ferc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize(b"fn main() {}");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Fn,
///         TokenKind::Identifier,
///         TokenKind::ParenL,
///         TokenKind::ParenR,
///         TokenKind::CurlyL,
///         TokenKind::CurlyR,
///     ]
/// );
/// ```
pub fn tokenize(source: &[u8]) -> Vec<Token> {
    Scanner::scan(source)
}

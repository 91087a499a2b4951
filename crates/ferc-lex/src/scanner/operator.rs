//! Operator scanning by maximal munch.
//!
//! Single-character punctuation with no compound form is emitted straight
//! from the initial state; everything else accumulates here until the next
//! character can no longer extend the operator.

use super::{Scanner, Step};
use crate::token::TokenKind;

impl Scanner {
    /// Extends or completes the buffered operator. Completion without
    /// consuming the character re-offers it to the initial state, which is
    /// how `a+=b` and `<<<` split correctly.
    pub(crate) fn punct(&mut self, c: u8) -> Step {
        match (self.buffer.as_str(), c) {
            ("+", b'=') => self.push_at_start(TokenKind::PlusEq),
            ("+", _) => return self.complete(TokenKind::Plus),

            ("-", b'>') => self.push_at_start(TokenKind::RArrow),
            ("-", b'=') => self.push_at_start(TokenKind::MinusEq),
            ("-", _) => return self.complete(TokenKind::Minus),

            ("*", b'=') => self.push_at_start(TokenKind::StarEq),
            ("*", _) => return self.complete(TokenKind::Star),

            ("%", b'=') => self.push_at_start(TokenKind::PercentEq),
            ("%", _) => return self.complete(TokenKind::Percent),

            ("^", b'=') => self.push_at_start(TokenKind::CaretEq),
            ("^", _) => return self.complete(TokenKind::Caret),

            ("!", b'=') => self.push_at_start(TokenKind::Ne),
            ("!", _) => return self.complete(TokenKind::Not),

            ("=", b'=') => self.push_at_start(TokenKind::EqEq),
            ("=", b'>') => self.push_at_start(TokenKind::FatArrow),
            ("=", _) => return self.complete(TokenKind::Eq),

            ("&", b'&') => self.push_at_start(TokenKind::AndAnd),
            ("&", b'=') => self.push_at_start(TokenKind::AndEq),
            ("&", _) => return self.complete(TokenKind::And),

            ("|", b'|') => self.push_at_start(TokenKind::OrOr),
            ("|", b'=') => self.push_at_start(TokenKind::OrEq),
            ("|", _) => return self.complete(TokenKind::Or),

            (":", b':') => self.push_at_start(TokenKind::PathSeparator),
            (":", _) => return self.complete(TokenKind::Colon),

            ("<", b'=') => self.push_at_start(TokenKind::Le),
            ("<", b'<') => self.push_char(c),
            ("<", _) => return self.complete(TokenKind::Lt),
            ("<<", b'=') => self.push_at_start(TokenKind::ShlEq),
            ("<<", _) => return self.complete(TokenKind::Shl),

            (">", b'=') => self.push_at_start(TokenKind::Ge),
            (">", b'>') => self.push_char(c),
            (">", _) => return self.complete(TokenKind::Gt),
            (">>", b'=') => self.push_at_start(TokenKind::ShrEq),
            (">>", _) => return self.complete(TokenKind::Shr),

            (".", b'.') => self.push_char(c),
            (".", _) => return self.complete(TokenKind::Dot),
            ("..", b'.') => self.push_at_start(TokenKind::DotDotDot),
            ("..", b'=') => self.push_at_start(TokenKind::DotDotEq),
            ("..", _) => return self.complete(TokenKind::DotDot),

            (buf, c) => unreachable!("operator state holds {buf:?} facing {c:?}"),
        }
        Step::Done
    }

    fn complete(&mut self, kind: TokenKind) -> Step {
        self.push_at_start(kind);
        Step::Redispatch
    }
}

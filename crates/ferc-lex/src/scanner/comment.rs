//! Comment scanning: line and block forms, doc-comment marking, and
//! nesting.
//!
//! The doc/plain decision is made within the first three characters and is
//! then fixed: `////` downgrades an outer line doc back to a plain comment,
//! `/***` does the same for blocks, and nested `/* */` pairs only move the
//! depth counter, never the kind.

use super::{Scanner, Step};
use crate::state::State;
use crate::token::TokenKind;

impl Scanner {
    /// A `/` was seen: comment opener, `/=`, or the bare operator.
    pub(crate) fn slash(&mut self, c: u8) -> Step {
        match c {
            b'/' => {
                self.push_char(c);
                self.state = State::LineCommentStart;
                Step::Done
            }
            b'*' => {
                self.push_char(c);
                self.state = State::BlockCommentStart;
                self.comment_depth = 1;
                self.comment_kind = TokenKind::Comment;
                Step::Done
            }
            b'=' => {
                self.push_at_start(TokenKind::SlashEq);
                Step::Done
            }
            _ => {
                self.push_at_start(TokenKind::Slash);
                Step::Redispatch
            }
        }
    }

    /// Right after `//`.
    pub(crate) fn line_comment_start(&mut self, c: u8) -> Step {
        match c {
            b'\n' => {
                self.push_text_at_start(TokenKind::Comment);
                Step::Redispatch
            }
            b'!' => {
                self.push_char(c);
                self.comment_kind = TokenKind::CommentInnerDoc;
                self.state = State::LineCommentBody;
                Step::Done
            }
            b'/' => {
                self.push_char(c);
                self.state = State::LineCommentMaybeDoc;
                Step::Done
            }
            _ => {
                self.push_char(c);
                self.comment_kind = TokenKind::Comment;
                self.state = State::LineCommentBody;
                Step::Done
            }
        }
    }

    /// Right after `///` — an outer doc comment unless a fourth slash
    /// downgrades it.
    pub(crate) fn line_comment_maybe_doc(&mut self, c: u8) -> Step {
        match c {
            b'\n' => {
                self.push_text_at_start(TokenKind::CommentOuterDoc);
                Step::Redispatch
            }
            b'/' => {
                // Too many slashes: plain after all.
                self.push_char(c);
                self.comment_kind = TokenKind::Comment;
                self.state = State::LineCommentBody;
                Step::Done
            }
            _ => {
                self.push_char(c);
                self.comment_kind = TokenKind::CommentOuterDoc;
                self.state = State::LineCommentBody;
                Step::Done
            }
        }
    }

    /// Line comment content, up to but not including the newline.
    pub(crate) fn line_comment_body(&mut self, c: u8) -> Step {
        if c == b'\n' {
            let kind = self.comment_kind;
            self.push_text_at_start(kind);
            Step::Redispatch
        } else {
            self.push_char(c);
            Step::Done
        }
    }

    /// Right after `/*`.
    pub(crate) fn block_comment_start(&mut self, c: u8) -> Step {
        self.push_char(c);
        match c {
            b'!' => {
                self.comment_kind = TokenKind::CommentInnerDoc;
                self.state = State::BlockCommentBody;
            }
            b'*' => self.state = State::BlockCommentMaybeDoc,
            b'/' => self.state = State::BlockCommentMaybeNested,
            _ => self.state = State::BlockCommentBody,
        }
        Step::Done
    }

    /// Right after `/**` — outer doc, a complete `/**/`, or a downgrade on
    /// the third asterisk.
    pub(crate) fn block_comment_maybe_doc(&mut self, c: u8) -> Step {
        self.push_char(c);
        match c {
            b'/' => {
                // `/**/`: the second asterisk was the closer's.
                self.comment_depth -= 1;
                self.push_text_at_start(TokenKind::Comment);
            }
            b'*' => {
                // Too many asterisks: plain — and this asterisk may itself
                // begin the closer.
                self.comment_kind = TokenKind::Comment;
                self.state = State::BlockCommentStar;
            }
            _ => {
                self.comment_kind = TokenKind::CommentOuterDoc;
                self.state = State::BlockCommentBody;
            }
        }
        Step::Done
    }

    /// Block comment content.
    pub(crate) fn block_comment_body(&mut self, c: u8) -> Step {
        self.push_char(c);
        match c {
            b'*' => self.state = State::BlockCommentStar,
            b'/' => self.state = State::BlockCommentMaybeNested,
            _ => {}
        }
        Step::Done
    }

    /// An asterisk inside a block comment: a following `/` closes one
    /// nesting level.
    pub(crate) fn block_comment_star(&mut self, c: u8) -> Step {
        self.push_char(c);
        match c {
            b'/' => {
                self.comment_depth -= 1;
                if self.comment_depth == 0 {
                    let kind = self.comment_kind;
                    self.push_text_at_start(kind);
                } else {
                    self.state = State::BlockCommentBody;
                }
            }
            b'*' => {}
            _ => self.state = State::BlockCommentBody,
        }
        Step::Done
    }

    /// A slash inside a block comment: a following `*` opens one nesting
    /// level.
    pub(crate) fn block_comment_maybe_nested(&mut self, c: u8) -> Step {
        self.push_char(c);
        match c {
            b'*' => {
                self.comment_depth += 1;
                self.state = State::BlockCommentBody;
            }
            b'/' => {}
            _ => self.state = State::BlockCommentBody,
        }
        Step::Done
    }
}

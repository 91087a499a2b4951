//! Identifier, keyword and underscore scanning.

use super::{is_ident_char, Scanner, Step};
use crate::state::State;
use crate::token::{keyword_from_ident, Token, TokenKind};

impl Scanner {
    /// A single `_` was seen. It becomes the wildcard token unless an
    /// identifier character follows.
    pub(crate) fn ident_or_underscore(&mut self, c: u8) -> Step {
        if is_ident_char(c) {
            self.push_char(c);
            self.state = State::IdentOrKeyword;
            Step::Done
        } else {
            self.push_at_start(TokenKind::Underscore);
            Step::Redispatch
        }
    }

    /// Accumulates an identifier-shaped lexeme. On completion the text is
    /// looked up in the keyword table; unmatched text is an identifier.
    pub(crate) fn ident_or_keyword(&mut self, c: u8) -> Step {
        if is_ident_char(c) {
            self.push_char(c);
            return Step::Done;
        }

        self.reclassify_weak_keyword();

        match keyword_from_ident(&self.buffer) {
            Some(kind) => self.push_at_start(kind),
            None => self.push_text_at_start(TokenKind::Identifier),
        }
        Step::Redispatch
    }

    /// Rewrites the most recently emitted token from `Identifier("union")`
    /// to the `union` keyword.
    ///
    /// Runs whenever an identifier-shaped lexeme completes, before the new
    /// token is classified. The check is on the previous token only and is
    /// not conditioned on grammatical position, so an identifier spelled
    /// `union` followed by another identifier always reclassifies.
    fn reclassify_weak_keyword(&mut self) {
        if let Some(last) = self.tokens.last_mut() {
            if last.kind == TokenKind::Identifier && last.text.as_deref() == Some("union") {
                *last = Token::new(last.line, last.column, TokenKind::Union);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{tokenize, TokenKind};

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source.as_bytes()).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_union_reclassified_before_identifier() {
        let tokens = tokenize(b"union Foo");
        assert_eq!(tokens[0].kind, TokenKind::Union);
        assert_eq!(tokens[0].text, None);
        assert_eq!((tokens[0].line, tokens[0].column), (0, 0));
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text.as_deref(), Some("Foo"));
    }

    #[test]
    fn test_union_alone_stays_an_identifier() {
        let tokens = tokenize(b"union;");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text.as_deref(), Some("union"));
    }

    #[test]
    fn test_union_chain() {
        // Each completion reclassifies only the previous token, so the last
        // occurrence is left as an identifier.
        assert_eq!(
            kinds("union union union"),
            [TokenKind::Union, TokenKind::Union, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_keyword_prefixed_identifiers() {
        let tokens = tokenize(b"letter iffy format");
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
    }

    #[test]
    fn test_digits_inside_identifier() {
        let tokens = tokenize(b"x2y");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text.as_deref(), Some("x2y"));
    }

    #[test]
    fn test_r_and_b_prefixed_identifiers() {
        // `r`, `b` and `br` open literal prefixes but fall back to ordinary
        // identifiers when no quote follows.
        let tokens = tokenize(b"ret rust base brand r b br");
        let texts: Vec<_> = tokens.iter().filter_map(|t| t.text.as_deref()).collect();
        assert_eq!(texts, ["ret", "rust", "base", "brand", "r", "b", "br"]);
    }
}

//! Numeric literal scanning: decimal, radix-prefixed and float forms.

use super::{Scanner, Step};
use crate::state::{Radix, State};
use crate::token::{Token, TokenKind};

impl Scanner {
    /// Decimal integer accumulation. A radix prefix is only recognized
    /// when the buffer is exactly `0`; `.` and `e`/`E` hand over to the
    /// float states.
    pub(crate) fn int_dec(&mut self, c: u8) -> Step {
        match c {
            b'0'..=b'9' | b'_' => {
                self.push_char(c);
                Step::Done
            }
            b'x' | b'o' | b'b' if self.buffer == "0" => {
                self.radix = match c {
                    b'x' => Radix::Hex,
                    b'o' => Radix::Octal,
                    _ => Radix::Binary,
                };
                self.push_char(c);
                self.state = State::RadixInt;
                Step::Done
            }
            b'.' => {
                self.push_char(c);
                self.state = State::FloatDot;
                Step::Done
            }
            b'e' | b'E' => {
                self.push_char(c);
                self.state = State::ExponentSign;
                Step::Done
            }
            _ => {
                self.push_text_at_start(TokenKind::IntLiteralDec);
                Step::Redispatch
            }
        }
    }

    /// Digits after a `0x`/`0o`/`0b` prefix. The literal completes at the
    /// first character outside the radix's digit class; a prefix with no
    /// digit at all is an error.
    pub(crate) fn radix_int(&mut self, c: u8) -> Step {
        if self.radix.is_digit(c) || c == b'_' {
            self.push_char(c);
            return Step::Done;
        }

        // Two prefix characters, then at least one real digit (separators
        // alone do not count).
        let radix = self.radix;
        let has_digit = self.buffer.bytes().skip(2).any(|b| radix.is_digit(b));
        if has_digit {
            self.push_text_at_start(radix.kind());
        } else {
            self.error_at_start(radix.missing_digits_message());
        }
        Step::Redispatch
    }

    /// Just after the `.` of a would-be float. Without a digit the dot is
    /// not part of the literal: the integer is emitted and the dot is
    /// re-scanned as punctuation, so `1..2` lexes as a range.
    pub(crate) fn float_dot(&mut self, c: u8) -> Step {
        if c.is_ascii_digit() {
            self.push_char(c);
            self.state = State::FloatFraction;
            return Step::Done;
        }

        self.buffer.pop();
        let dot_line = self.start_line;
        let dot_column = self.start_column + self.buffer.len() as u32;
        self.push_text_at_start(TokenKind::IntLiteralDec);

        self.start_buffer(b'.', State::Punct);
        self.start_line = dot_line;
        self.start_column = dot_column;
        Step::Redispatch
    }

    /// Digits of the fractional part.
    pub(crate) fn float_fraction(&mut self, c: u8) -> Step {
        match c {
            b'0'..=b'9' | b'_' => {
                self.push_char(c);
                Step::Done
            }
            b'e' | b'E' => {
                self.push_char(c);
                self.state = State::ExponentSign;
                Step::Done
            }
            _ => {
                self.push_text_at_start(TokenKind::FloatLiteral);
                Step::Redispatch
            }
        }
    }

    /// Right after `e`/`E`: the exponent sign is mandatory.
    pub(crate) fn exponent_sign(&mut self, c: u8) -> Step {
        if c == b'+' || c == b'-' {
            self.push_char(c);
            self.state = State::ExponentDigits;
            Step::Done
        } else {
            self.split_malformed_exponent(1, "expected + or - at start of exponent");
            Step::Redispatch
        }
    }

    /// Exponent digits; at least one is required after the sign.
    pub(crate) fn exponent_digits(&mut self, c: u8) -> Step {
        let after_sign = matches!(self.buffer.as_bytes().last(), Some(b'+') | Some(b'-'));
        if after_sign {
            if c.is_ascii_digit() {
                self.push_char(c);
                Step::Done
            } else {
                self.split_malformed_exponent(2, "exponent should have at least one digit");
                Step::Redispatch
            }
        } else if c.is_ascii_digit() || c == b'_' {
            self.push_char(c);
            Step::Done
        } else {
            self.push_text_at_start(TokenKind::FloatLiteral);
            Step::Redispatch
        }
    }

    /// Recovery for a malformed exponent: emit the literal scanned so far
    /// (without the trailing `e`/`e±`), then an error token positioned at
    /// the `e`, and re-scan from the offending character.
    fn split_malformed_exponent(&mut self, tail: usize, message: &str) {
        let split = self.buffer.len() - tail;
        let mantissa = self.buffer[..split].to_string();
        let kind = if mantissa.contains('.') {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntLiteralDec
        };

        // Numeric lexemes never span lines, so the `e` sits on the start
        // line at a fixed offset from the lexeme start.
        let e_column = self.start_column + split as u32;
        self.tokens.push(Token::with_text(
            self.start_line,
            self.start_column,
            kind,
            mantissa,
        ));
        self.tokens.push(Token::with_text(
            self.start_line,
            e_column,
            TokenKind::Error,
            message,
        ));
        self.buffer.clear();
        self.state = State::Initial;
    }
}

#[cfg(test)]
mod tests {
    use crate::{tokenize, TokenKind};

    fn lex(source: &str) -> Vec<crate::Token> {
        tokenize(source.as_bytes())
    }

    #[test]
    fn test_decimal_with_separators() {
        let tokens = lex("1_000_000");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::IntLiteralDec);
        assert_eq!(tokens[0].text.as_deref(), Some("1_000_000"));
    }

    #[test]
    fn test_radix_literals() {
        let tokens = lex("0x1f 0o77 0b1010");
        assert_eq!(tokens[0].kind, TokenKind::IntLiteralHex);
        assert_eq!(tokens[1].kind, TokenKind::IntLiteralOctal);
        assert_eq!(tokens[2].kind, TokenKind::IntLiteralBin);
    }

    #[test]
    fn test_octal_accepts_eight() {
        // The octal digit class is `'0'..='8'`; genuine octal stops at 7,
        // but the 8 stays part of the literal here.
        let tokens = lex("0o18");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::IntLiteralOctal);
        assert_eq!(tokens[0].text.as_deref(), Some("0o18"));
    }

    #[test]
    fn test_radix_prefix_needs_a_digit() {
        let tokens = lex("0x");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(
            tokens[0].text.as_deref(),
            Some("hex literal must contain at least one digit")
        );
    }

    #[test]
    fn test_radix_prefix_with_only_separators_is_an_error() {
        let tokens = lex("0b__");
        assert_eq!(tokens[0].kind, TokenKind::Error);
    }

    #[test]
    fn test_recovery_after_bare_prefix() {
        let tokens = lex("0x;");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!((tokens[0].line, tokens[0].column), (0, 0));
        assert_eq!(tokens[1].kind, TokenKind::Semicolon);
        assert_eq!((tokens[1].line, tokens[1].column), (0, 2));
    }

    #[test]
    fn test_float_forms() {
        let tokens = lex("1.5 0.25 1.5e+10 2e-3");
        assert!(tokens.iter().all(|t| t.kind == TokenKind::FloatLiteral));
        assert_eq!(tokens[2].text.as_deref(), Some("1.5e+10"));
    }

    #[test]
    fn test_exponent_requires_sign() {
        // `1.5e10` splits: the float scanned so far, an error for the bare
        // exponent start, then the digits restart as a fresh integer.
        let tokens = lex("1.5e10");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind, TokenKind::FloatLiteral);
        assert_eq!(tokens[0].text.as_deref(), Some("1.5"));
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(
            tokens[1].text.as_deref(),
            Some("expected + or - at start of exponent")
        );
        assert_eq!((tokens[1].line, tokens[1].column), (0, 3));
        assert_eq!(tokens[2].kind, TokenKind::IntLiteralDec);
        assert_eq!(tokens[2].text.as_deref(), Some("10"));
        assert_eq!((tokens[2].line, tokens[2].column), (0, 4));
    }

    #[test]
    fn test_exponent_requires_digits_after_sign() {
        let tokens = lex("2.5e+;");
        assert_eq!(tokens[0].kind, TokenKind::FloatLiteral);
        assert_eq!(tokens[0].text.as_deref(), Some("2.5"));
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(
            tokens[1].text.as_deref(),
            Some("exponent should have at least one digit")
        );
        assert_eq!(tokens[2].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_integer_then_range() {
        let tokens = lex("1..2");
        assert_eq!(tokens[0].kind, TokenKind::IntLiteralDec);
        assert_eq!(tokens[1].kind, TokenKind::DotDot);
        assert_eq!((tokens[1].line, tokens[1].column), (0, 1));
        assert_eq!(tokens[2].kind, TokenKind::IntLiteralDec);
    }

    #[test]
    fn test_trailing_dot_is_punctuation() {
        let tokens = lex("7.");
        assert_eq!(tokens[0].kind, TokenKind::IntLiteralDec);
        assert_eq!(tokens[0].text.as_deref(), Some("7"));
        assert_eq!(tokens[1].kind, TokenKind::Dot);
    }

    #[test]
    fn test_radix_literal_ends_at_foreign_digit() {
        let tokens = lex("0b102");
        assert_eq!(tokens[0].kind, TokenKind::IntLiteralBin);
        assert_eq!(tokens[0].text.as_deref(), Some("0b10"));
        assert_eq!(tokens[1].kind, TokenKind::IntLiteralDec);
        assert_eq!(tokens[1].text.as_deref(), Some("2"));
    }

    #[test]
    fn test_number_then_identifier() {
        let tokens = lex("10x");
        assert_eq!(tokens[0].kind, TokenKind::IntLiteralDec);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text.as_deref(), Some("x"));
    }
}

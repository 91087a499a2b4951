//! Edge case tests for ferc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Token, TokenKind};
    use proptest::prelude::*;

    fn lex(source: &str) -> Vec<Token> {
        tokenize(source.as_bytes())
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex("").is_empty());
    }

    #[test]
    fn test_edge_single_newline() {
        assert!(lex("\n").is_empty());
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let tokens = lex(&name);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text.as_deref(), Some(name.as_str()));
    }

    #[test]
    fn test_edge_deeply_nested_comment() {
        let mut source = String::new();
        for _ in 0..100 {
            source.push_str("/* ");
        }
        for _ in 0..100 {
            source.push_str("*/ ");
        }
        let tokens = lex(&source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Comment);
    }

    #[test]
    fn test_edge_crlf_line_comment() {
        // The carriage return is comment content; only the newline ends it.
        let tokens = lex("// x\r\nfn");
        assert_eq!(tokens[0].text.as_deref(), Some("// x\r"));
        assert_eq!(tokens[1].kind, TokenKind::Fn);
    }

    #[test]
    fn test_edge_all_keywords_roundtrip() {
        let source = "as break const continue crate else enum extern false fn for if impl in \
                      let loop match mod move mut pub ref return self Self static struct super \
                      trait true type unsafe use where while async await dyn abstract become \
                      box do final macro override priv typeof unsized virtual yield try";
        let tokens = lex(source);
        assert_eq!(tokens.len(), 51);
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Identifier));
        assert!(tokens.iter().all(|t| t.text.is_none()));
    }

    #[test]
    fn test_edge_declaration_snippet() {
        let tokens = lex("pub fn id<'a>(x: &'a str) -> &'a str { x }");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Pub,
                TokenKind::Fn,
                TokenKind::Identifier,
                TokenKind::Lt,
                TokenKind::Lifetime,
                TokenKind::Gt,
                TokenKind::ParenL,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::And,
                TokenKind::Lifetime,
                TokenKind::Identifier,
                TokenKind::ParenR,
                TokenKind::RArrow,
                TokenKind::And,
                TokenKind::Lifetime,
                TokenKind::Identifier,
                TokenKind::CurlyL,
                TokenKind::Identifier,
                TokenKind::CurlyR,
            ]
        );
    }

    #[test]
    fn test_edge_static_lifetime_in_reference() {
        let tokens = lex("&'static str");
        assert_eq!(tokens[0].kind, TokenKind::And);
        assert_eq!(tokens[1].kind, TokenKind::StaticLifetime);
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_char_literal_vs_label_vs_lifetime() {
        assert_eq!(kinds("'a'"), [TokenKind::CharLiteral]);
        assert_eq!(kinds("'a"), [TokenKind::Lifetime]);
        assert_eq!(kinds("'a:"), [TokenKind::Label]);
        assert_eq!(kinds("'abc,"), [TokenKind::Lifetime, TokenKind::Comma]);
    }

    #[test]
    fn test_edge_weak_keyword_positions() {
        let tokens = lex("union Foo");
        assert_eq!(tokens[0], Token::new(0, 0, TokenKind::Union));
        assert_eq!(tokens[1], Token::with_text(0, 6, TokenKind::Identifier, "Foo"));
    }

    #[test]
    fn test_edge_union_reclassified_even_as_a_value() {
        // The scanner has no grammatical context: an ordinary identifier
        // named `union` still flips when another identifier follows it.
        let tokens = lex("let union x");
        assert_eq!(tokens[0].kind, TokenKind::Let);
        assert_eq!(tokens[1].kind, TokenKind::Union);
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_mixed_literals_on_one_line() {
        let tokens = lex(r#"b'x' b"bytes" r"raw" "s" 'c' 0xff 1.0"#);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::ByteLiteral,
                TokenKind::ByteStringLiteral,
                TokenKind::RawStringLiteral,
                TokenKind::StringLiteral,
                TokenKind::CharLiteral,
                TokenKind::IntLiteralHex,
                TokenKind::FloatLiteral,
            ]
        );
    }

    #[test]
    fn test_edge_error_text_is_message_not_source() {
        let tokens = lex("0b");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(
            tokens[0].text.as_deref(),
            Some("binary literal must contain at least one digit")
        );
    }

    #[test]
    fn test_edge_shebang_like_line_is_just_tokens() {
        // `#` and `!` are ordinary punctuation to the scanner.
        assert_eq!(
            kinds("#!["),
            [TokenKind::Pound, TokenKind::Not, TokenKind::SquareL]
        );
    }

    #[test]
    fn test_edge_positions_after_multiline_block_comment() {
        let tokens = lex("/* a\n   b */ let");
        assert_eq!(tokens[1].kind, TokenKind::Let);
        assert_eq!((tokens[1].line, tokens[1].column), (1, 8));
    }

    #[test]
    fn test_edge_tab_does_not_collapse_columns() {
        // Tabs count as one column like any other character.
        let tokens = lex("\tfn");
        assert_eq!((tokens[0].line, tokens[0].column), (0, 1));
    }

    // ==================== RECOVERY ====================

    #[test]
    fn test_recovery_interleaves_errors_and_tokens() {
        let tokens = lex("let x = 0x; let y = 2;");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Let,
                TokenKind::Identifier,
                TokenKind::Eq,
                TokenKind::Error,
                TokenKind::Semicolon,
                TokenKind::Let,
                TokenKind::Identifier,
                TokenKind::Eq,
                TokenKind::IntLiteralDec,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_recovery_never_drops_earlier_tokens() {
        let tokens = lex("fn `");
        assert_eq!(tokens[0].kind, TokenKind::Fn);
        assert_eq!(tokens[1].kind, TokenKind::Error);
    }

    // ==================== PROPERTIES ====================

    proptest! {
        /// Scanning is a total function: any byte soup terminates and
        /// yields tokens in non-decreasing source order.
        #[test]
        fn prop_scan_terminates_with_monotonic_positions(
            input in proptest::collection::vec(any::<u8>(), 0..512)
        ) {
            let tokens = tokenize(&input);
            for pair in tokens.windows(2) {
                prop_assert!(
                    (pair[0].line, pair[0].column) <= (pair[1].line, pair[1].column),
                    "out of order: {:?} then {:?}",
                    pair[0],
                    pair[1]
                );
            }
        }

        /// ASCII-only inputs as well; this biases the generator toward
        /// inputs that exercise the interesting states rather than the
        /// unexpected-symbol path.
        #[test]
        fn prop_ascii_scan_is_stable(
            input in "[ -~\n]{0,200}"
        ) {
            let first = tokenize(input.as_bytes());
            let second = tokenize(input.as_bytes());
            prop_assert_eq!(first, second);
        }
    }
}

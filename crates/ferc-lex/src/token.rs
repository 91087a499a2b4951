//! Token type definitions for the Ferrum lexer.
//!
//! A [`Token`] records where a lexeme started, what kind of lexeme it was,
//! and — for kinds whose spelling is not implied by the kind itself — the
//! lexeme text. Error tokens reuse the text slot for a diagnostic message.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// A single token produced by the scanner.
///
/// `line` and `column` are 0-based and point at the first character of the
/// lexeme. Tokens are immutable once appended to the output sequence; the
/// scanner's weak-keyword reclassification replaces a whole token rather
/// than mutating one in place.
///
/// # Example
///
/// ```
/// use ferc_lex::{Token, TokenKind};
///
/// let token = Token::with_text(0, 4, TokenKind::Identifier, "main");
/// assert_eq!(token.column, 4);
/// assert_eq!(token.text.as_deref(), Some("main"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Line of the first character of the lexeme (0-based).
    pub line: u32,

    /// Column of the first character of the lexeme (0-based).
    pub column: u32,

    /// What kind of lexeme this is.
    pub kind: TokenKind,

    /// The lexeme text, including delimiters and prefixes (`"..."`, `r#"..."#`,
    /// `b'x'`, `//...`). Populated for identifiers, literals, comments,
    /// lifetimes and labels. For [`TokenKind::Error`] this holds the
    /// diagnostic message. `None` for keywords and fixed-spelling
    /// operators/punctuation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Token {
    /// Creates a token whose spelling is implied by its kind.
    pub fn new(line: u32, column: u32, kind: TokenKind) -> Self {
        Self {
            line,
            column,
            kind,
            text: None,
        }
    }

    /// Creates a token carrying its lexeme text (or, for error tokens, a
    /// diagnostic message).
    pub fn with_text(line: u32, column: u32, kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            line,
            column,
            kind,
            text: Some(text.into()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{}:{}\t{}\t{}", self.line, self.column, self.kind, text),
            None => write!(f, "{}:{}\t{}", self.line, self.column, self.kind),
        }
    }
}

/// Every kind of token the scanner can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Reserved keywords
    /// `as`
    As,
    /// `break`
    Break,
    /// `const`
    Const,
    /// `continue`
    Continue,
    /// `crate`
    Crate,
    /// `else`
    Else,
    /// `enum`
    Enum,
    /// `extern`
    Extern,
    /// `false`
    False,
    /// `fn`
    Fn,
    /// `for`
    For,
    /// `if`
    If,
    /// `impl`
    Impl,
    /// `in`
    In,
    /// `let`
    Let,
    /// `loop`
    Loop,
    /// `match`
    Match,
    /// `mod`
    Mod,
    /// `move`
    Move,
    /// `mut`
    Mut,
    /// `pub`
    Pub,
    /// `ref`
    Ref,
    /// `return`
    Return,
    /// `self`
    SelfValue,
    /// `Self`
    SelfType,
    /// `static`
    Static,
    /// `struct`
    Struct,
    /// `super`
    Super,
    /// `trait`
    Trait,
    /// `true`
    True,
    /// `type`
    Type,
    /// `unsafe`
    Unsafe,
    /// `use`
    Use,
    /// `where`
    Where,
    /// `while`
    While,
    /// `async`
    Async,
    /// `await`
    Await,
    /// `dyn`
    Dyn,

    // Keywords reserved for future use
    /// `abstract`
    Abstract,
    /// `become`
    Become,
    /// `box`
    Box,
    /// `do`
    Do,
    /// `final`
    Final,
    /// `macro`
    Macro,
    /// `override`
    Override,
    /// `priv`
    Priv,
    /// `typeof`
    Typeof,
    /// `unsized`
    Unsized,
    /// `virtual`
    Virtual,
    /// `yield`
    Yield,
    /// `try`
    Try,

    /// `union` — a weak keyword. It lexes as an identifier and is
    /// reclassified retroactively when the next identifier-shaped lexeme
    /// completes.
    Union,
    /// The lifetime `'static`.
    StaticLifetime,

    /// Any identifier that is not a reserved word.
    Identifier,
    /// A lifetime parameter such as `'a`.
    Lifetime,
    /// A loop label such as `'outer:` (the trailing `:` is part of the
    /// lexeme).
    Label,

    // Literals
    /// `'a'`, `'\n'`
    CharLiteral,
    /// `b'a'`
    ByteLiteral,
    /// `"..."`
    StringLiteral,
    /// `b"..."`
    ByteStringLiteral,
    /// `r"..."`, `r#"..."#`
    RawStringLiteral,
    /// `br"..."`, `br#"..."#`
    RawByteStringLiteral,
    /// `123`, `1_000`
    IntLiteralDec,
    /// `0x1f`
    IntLiteralHex,
    /// `0o777`
    IntLiteralOctal,
    /// `0b1010`
    IntLiteralBin,
    /// `1.5`, `1.5e+10`
    FloatLiteral,

    // Comments
    /// A plain comment, line (`//`) or block (`/* */`) form.
    Comment,
    /// An inner doc comment (`//!` or `/*!`).
    CommentInnerDoc,
    /// An outer doc comment (`///` or `/**`).
    CommentOuterDoc,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `!`
    Not,
    /// `&`
    And,
    /// `|`
    Or,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `+=`
    PlusEq,
    /// `-=`
    MinusEq,
    /// `*=`
    StarEq,
    /// `/=`
    SlashEq,
    /// `%=`
    PercentEq,
    /// `^=`
    CaretEq,
    /// `&=`
    AndEq,
    /// `|=`
    OrEq,
    /// `<<=`
    ShlEq,
    /// `>>=`
    ShrEq,
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `@`
    At,
    /// `_` on its own (not followed by identifier characters).
    Underscore,
    /// `.`
    Dot,
    /// `..`
    DotDot,
    /// `...`
    DotDotDot,
    /// `..=`
    DotDotEq,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `::`
    PathSeparator,
    /// `->`
    RArrow,
    /// `=>`
    FatArrow,
    /// `#`
    Pound,
    /// `$`
    Dollar,
    /// `?`
    Question,

    // Delimiters
    /// `{`
    CurlyL,
    /// `}`
    CurlyR,
    /// `[`
    SquareL,
    /// `]`
    SquareR,
    /// `(`
    ParenL,
    /// `)`
    ParenR,

    /// A lexical error. The token's text holds the diagnostic message.
    Error,
}

impl TokenKind {
    /// Returns the stable, SCREAMING_SNAKE_CASE name of this kind, as used
    /// in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::As => "AS",
            TokenKind::Break => "BREAK",
            TokenKind::Const => "CONST",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Crate => "CRATE",
            TokenKind::Else => "ELSE",
            TokenKind::Enum => "ENUM",
            TokenKind::Extern => "EXTERN",
            TokenKind::False => "FALSE",
            TokenKind::Fn => "FN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Impl => "IMPL",
            TokenKind::In => "IN",
            TokenKind::Let => "LET",
            TokenKind::Loop => "LOOP",
            TokenKind::Match => "MATCH",
            TokenKind::Mod => "MOD",
            TokenKind::Move => "MOVE",
            TokenKind::Mut => "MUT",
            TokenKind::Pub => "PUB",
            TokenKind::Ref => "REF",
            TokenKind::Return => "RETURN",
            TokenKind::SelfValue => "SELF_VALUE",
            TokenKind::SelfType => "SELF_TYPE",
            TokenKind::Static => "STATIC",
            TokenKind::Struct => "STRUCT",
            TokenKind::Super => "SUPER",
            TokenKind::Trait => "TRAIT",
            TokenKind::True => "TRUE",
            TokenKind::Type => "TYPE",
            TokenKind::Unsafe => "UNSAFE",
            TokenKind::Use => "USE",
            TokenKind::Where => "WHERE",
            TokenKind::While => "WHILE",
            TokenKind::Async => "ASYNC",
            TokenKind::Await => "AWAIT",
            TokenKind::Dyn => "DYN",
            TokenKind::Abstract => "ABSTRACT",
            TokenKind::Become => "BECOME",
            TokenKind::Box => "BOX",
            TokenKind::Do => "DO",
            TokenKind::Final => "FINAL",
            TokenKind::Macro => "MACRO",
            TokenKind::Override => "OVERRIDE",
            TokenKind::Priv => "PRIV",
            TokenKind::Typeof => "TYPEOF",
            TokenKind::Unsized => "UNSIZED",
            TokenKind::Virtual => "VIRTUAL",
            TokenKind::Yield => "YIELD",
            TokenKind::Try => "TRY",
            TokenKind::Union => "UNION",
            TokenKind::StaticLifetime => "STATIC_LIFETIME",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Lifetime => "LIFETIME",
            TokenKind::Label => "LABEL",
            TokenKind::CharLiteral => "CHAR_LITERAL",
            TokenKind::ByteLiteral => "BYTE_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::ByteStringLiteral => "BYTE_STRING_LITERAL",
            TokenKind::RawStringLiteral => "RAW_STRING_LITERAL",
            TokenKind::RawByteStringLiteral => "RAW_BYTE_STRING_LITERAL",
            TokenKind::IntLiteralDec => "INT_LITERAL_DEC",
            TokenKind::IntLiteralHex => "INT_LITERAL_HEX",
            TokenKind::IntLiteralOctal => "INT_LITERAL_OCTAL",
            TokenKind::IntLiteralBin => "INT_LITERAL_BIN",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::Comment => "COMMENT",
            TokenKind::CommentInnerDoc => "COMMENT_INNER_DOC",
            TokenKind::CommentOuterDoc => "COMMENT_OUTER_DOC",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::Caret => "CARET",
            TokenKind::Not => "NOT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::AndAnd => "AND_AND",
            TokenKind::OrOr => "OR_OR",
            TokenKind::Shl => "SHL",
            TokenKind::Shr => "SHR",
            TokenKind::PlusEq => "PLUS_EQ",
            TokenKind::MinusEq => "MINUS_EQ",
            TokenKind::StarEq => "STAR_EQ",
            TokenKind::SlashEq => "SLASH_EQ",
            TokenKind::PercentEq => "PERCENT_EQ",
            TokenKind::CaretEq => "CARET_EQ",
            TokenKind::AndEq => "AND_EQ",
            TokenKind::OrEq => "OR_EQ",
            TokenKind::ShlEq => "SHL_EQ",
            TokenKind::ShrEq => "SHR_EQ",
            TokenKind::Eq => "EQ",
            TokenKind::EqEq => "EQ_EQ",
            TokenKind::Ne => "NE",
            TokenKind::Gt => "GT",
            TokenKind::Lt => "LT",
            TokenKind::Ge => "GE",
            TokenKind::Le => "LE",
            TokenKind::At => "AT",
            TokenKind::Underscore => "UNDERSCORE",
            TokenKind::Dot => "DOT",
            TokenKind::DotDot => "DOT_DOT",
            TokenKind::DotDotDot => "DOT_DOT_DOT",
            TokenKind::DotDotEq => "DOT_DOT_EQ",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::PathSeparator => "PATH_SEPARATOR",
            TokenKind::RArrow => "R_ARROW",
            TokenKind::FatArrow => "FAT_ARROW",
            TokenKind::Pound => "POUND",
            TokenKind::Dollar => "DOLLAR",
            TokenKind::Question => "QUESTION",
            TokenKind::CurlyL => "CURLY_L",
            TokenKind::CurlyR => "CURLY_R",
            TokenKind::SquareL => "SQUARE_L",
            TokenKind::SquareR => "SQUARE_R",
            TokenKind::ParenL => "PAREN_L",
            TokenKind::ParenR => "PAREN_R",
            TokenKind::Error => "ERROR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The reserved-word table, built once and shared by read-only reference.
///
/// `union` is deliberately absent: it is a weak keyword and must lex as an
/// identifier first. `'static` is present so lifetime completion can map it
/// to [`TokenKind::StaticLifetime`].
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut map = FxHashMap::default();
    map.insert("as", TokenKind::As);
    map.insert("break", TokenKind::Break);
    map.insert("const", TokenKind::Const);
    map.insert("continue", TokenKind::Continue);
    map.insert("crate", TokenKind::Crate);
    map.insert("else", TokenKind::Else);
    map.insert("enum", TokenKind::Enum);
    map.insert("extern", TokenKind::Extern);
    map.insert("false", TokenKind::False);
    map.insert("fn", TokenKind::Fn);
    map.insert("for", TokenKind::For);
    map.insert("if", TokenKind::If);
    map.insert("impl", TokenKind::Impl);
    map.insert("in", TokenKind::In);
    map.insert("let", TokenKind::Let);
    map.insert("loop", TokenKind::Loop);
    map.insert("match", TokenKind::Match);
    map.insert("mod", TokenKind::Mod);
    map.insert("move", TokenKind::Move);
    map.insert("mut", TokenKind::Mut);
    map.insert("pub", TokenKind::Pub);
    map.insert("ref", TokenKind::Ref);
    map.insert("return", TokenKind::Return);
    map.insert("self", TokenKind::SelfValue);
    map.insert("Self", TokenKind::SelfType);
    map.insert("static", TokenKind::Static);
    map.insert("struct", TokenKind::Struct);
    map.insert("super", TokenKind::Super);
    map.insert("trait", TokenKind::Trait);
    map.insert("true", TokenKind::True);
    map.insert("type", TokenKind::Type);
    map.insert("unsafe", TokenKind::Unsafe);
    map.insert("use", TokenKind::Use);
    map.insert("where", TokenKind::Where);
    map.insert("while", TokenKind::While);
    map.insert("async", TokenKind::Async);
    map.insert("await", TokenKind::Await);
    map.insert("dyn", TokenKind::Dyn);
    map.insert("abstract", TokenKind::Abstract);
    map.insert("become", TokenKind::Become);
    map.insert("box", TokenKind::Box);
    map.insert("do", TokenKind::Do);
    map.insert("final", TokenKind::Final);
    map.insert("macro", TokenKind::Macro);
    map.insert("override", TokenKind::Override);
    map.insert("priv", TokenKind::Priv);
    map.insert("typeof", TokenKind::Typeof);
    map.insert("unsized", TokenKind::Unsized);
    map.insert("virtual", TokenKind::Virtual);
    map.insert("yield", TokenKind::Yield);
    map.insert("try", TokenKind::Try);
    map.insert("'static", TokenKind::StaticLifetime);
    map
});

/// Looks up a completed identifier-shaped (or lifetime-shaped) lexeme in the
/// keyword table.
///
/// # Example
///
/// ```
/// use ferc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("fn"), Some(TokenKind::Fn));
/// assert_eq!(keyword_from_ident("'static"), Some(TokenKind::StaticLifetime));
/// assert_eq!(keyword_from_ident("union"), None);
/// assert_eq!(keyword_from_ident("main"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}

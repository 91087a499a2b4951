//! Token styling: ANSI escape selection per token kind.

use ferc_lex::TokenKind;

/// ANSI escape sequences used by the highlighter.
pub(crate) mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const MAGENTA: &str = "\x1b[35m"; // Keywords
    pub const CYAN: &str = "\x1b[36m"; // Identifiers
    pub const YELLOW: &str = "\x1b[33m"; // Lifetimes and labels
    pub const GREEN: &str = "\x1b[32m"; // String-like literals
    pub const BLUE: &str = "\x1b[34m"; // Numeric literals
    pub const ITALIC_BLUE: &str = "\x1b[3;34m"; // Char and byte literals
    pub const ITALIC_BRIGHT_BLACK: &str = "\x1b[3;90m"; // Comments
    pub const BG_RED: &str = "\x1b[41m"; // Errors
}

/// Color output mode for the highlighter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    /// This parameter is ignored for `Always` and `Never` modes.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parses a mode name as used on the command line and in config files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Returns the ANSI style for a token kind, or `""` for token kinds that
/// print unstyled (operators and punctuation).
///
/// Error tokens get a background highlight rather than a foreground color
/// so that whitespace inside the bad span stays visible.
pub fn style_for(kind: TokenKind) -> &'static str {
    use TokenKind::*;
    match kind {
        As | Break | Const | Continue | Crate | Else | Enum | Extern | False | Fn | For | If
        | Impl | In | Let | Loop | Match | Mod | Move | Mut | Pub | Ref | Return | SelfValue
        | SelfType | Static | Struct | Super | Trait | True | Type | Unsafe | Use | Where
        | While | Async | Await | Dyn | Abstract | Become | Box | Do | Final | Macro
        | Override | Priv | Typeof | Unsized | Virtual | Yield | Try | Union
        | StaticLifetime => ansi::MAGENTA,

        Identifier => ansi::CYAN,

        Comment | CommentInnerDoc | CommentOuterDoc => ansi::ITALIC_BRIGHT_BLACK,

        Label | Lifetime => ansi::YELLOW,

        CharLiteral | ByteLiteral => ansi::ITALIC_BLUE,

        StringLiteral | RawStringLiteral | ByteStringLiteral | RawByteStringLiteral => {
            ansi::GREEN
        }

        IntLiteralDec | IntLiteralHex | IntLiteralOctal | IntLiteralBin | FloatLiteral => {
            ansi::BLUE
        }

        Plus | Minus | Star | Slash | Percent | Caret | Not | And | Or | AndAnd | OrOr | Shl
        | Shr | PlusEq | MinusEq | StarEq | SlashEq | PercentEq | CaretEq | AndEq | OrEq
        | ShlEq | ShrEq | Eq | EqEq | Ne | Gt | Lt | Ge | Le | At | Underscore | Dot | DotDot
        | DotDotDot | DotDotEq | Comma | Semicolon | Colon | PathSeparator | RArrow
        | FatArrow | Pound | Dollar | Question | CurlyL | CurlyR | SquareL | SquareR | ParenL
        | ParenR => "",

        Error => ansi::BG_RED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_resolution() {
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
    }

    #[test]
    fn test_color_mode_names() {
        assert_eq!(ColorMode::from_name("auto"), Some(ColorMode::Auto));
        assert_eq!(ColorMode::from_name("always"), Some(ColorMode::Always));
        assert_eq!(ColorMode::from_name("never"), Some(ColorMode::Never));
        assert_eq!(ColorMode::from_name("sometimes"), None);
    }

    #[test]
    fn test_style_groups() {
        assert_eq!(style_for(TokenKind::Fn), ansi::MAGENTA);
        assert_eq!(style_for(TokenKind::Union), ansi::MAGENTA);
        assert_eq!(style_for(TokenKind::Identifier), ansi::CYAN);
        assert_eq!(style_for(TokenKind::Lifetime), ansi::YELLOW);
        assert_eq!(style_for(TokenKind::RawStringLiteral), ansi::GREEN);
        assert_eq!(style_for(TokenKind::FloatLiteral), ansi::BLUE);
        assert_eq!(style_for(TokenKind::CommentOuterDoc), ansi::ITALIC_BRIGHT_BLACK);
        assert_eq!(style_for(TokenKind::Error), ansi::BG_RED);
    }

    #[test]
    fn test_punctuation_is_unstyled() {
        assert_eq!(style_for(TokenKind::Semicolon), "");
        assert_eq!(style_for(TokenKind::ShlEq), "");
        assert_eq!(style_for(TokenKind::ParenL), "");
    }
}

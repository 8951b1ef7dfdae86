use std::fmt;

/// Source location for error reporting.
///
/// `row` and `column` are 1-based; `column` counts characters, not bytes.
/// `source_line` is the full text of line `row`, kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub filename: String,
    pub source_line: String,
    pub row: usize,
    pub column: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.row, self.column)
    }
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Colon,
    Slash,
    Star,
    Question,
    Modulo,
    Bang,
    Equal,
    Greater,
    Less,

    // Two-character tokens.
    BangEqual,
    EqualEqual,
    GreaterEqual,
    LessEqual,
    PlusPlus,
    MinusMinus,
    Arrow,

    // Literals.
    Identifier,
    Number,
    String,

    // Keywords.
    And,
    Break,
    Do,
    Else,
    Enum,
    False,
    For,
    Fn,
    If,
    Impl,
    Let,
    Mut,
    Or,
    Print,
    Return,
    SelfKw,
    Skip,
    Struct,
    True,
    While,

    /// End of input. Always the last token of a scan.
    End,
    /// Labels the offending character of an `UnexpectedCharacter`
    /// diagnostic. A successful scan never contains it.
    Unknown,
}

impl TokenKind {
    /// Human-readable name used in "expected ..." messages.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::LeftBrace => "'{'",
            Self::RightBrace => "'}'",
            Self::LeftBracket => "'['",
            Self::RightBracket => "']'",
            Self::Comma => "','",
            Self::Dot => "'.'",
            Self::Minus => "'-'",
            Self::Plus => "'+'",
            Self::Semicolon => "';'",
            Self::Colon => "':'",
            Self::Slash => "'/'",
            Self::Star => "'*'",
            Self::Question => "'?'",
            Self::Modulo => "'%'",
            Self::Bang => "'!'",
            Self::Equal => "'='",
            Self::Greater => "'>'",
            Self::Less => "'<'",
            Self::BangEqual => "'!='",
            Self::EqualEqual => "'=='",
            Self::GreaterEqual => "'>='",
            Self::LessEqual => "'<='",
            Self::PlusPlus => "'++'",
            Self::MinusMinus => "'--'",
            Self::Arrow => "'->'",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::And => "'and'",
            Self::Break => "'break'",
            Self::Do => "'do'",
            Self::Else => "'else'",
            Self::Enum => "'enum'",
            Self::False => "'false'",
            Self::For => "'for'",
            Self::Fn => "'fn'",
            Self::If => "'if'",
            Self::Impl => "'impl'",
            Self::Let => "'let'",
            Self::Mut => "'mut'",
            Self::Or => "'or'",
            Self::Print => "'print'",
            Self::Return => "'return'",
            Self::SelfKw => "'self'",
            Self::Skip => "'skip'",
            Self::Struct => "'struct'",
            Self::True => "'true'",
            Self::While => "'while'",
            Self::End => "end of file",
            Self::Unknown => "unknown character",
        }
    }

    /// Whether this kind starts a fresh declaration, which makes it a
    /// safe place to resume parsing after a syntax error.
    #[must_use]
    pub const fn starts_declaration(self) -> bool {
        matches!(
            self,
            Self::Fn | Self::Let | Self::For | Self::If | Self::While | Self::Print | Self::Return
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A single token with its kind, lexeme, and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: SourceLocation,
}

impl Token {
    /// Build a token that did not come from the scanner, reusing the
    /// location of `anchor`. Used for nodes the parser desugars.
    #[must_use]
    pub fn synthetic(kind: TokenKind, lexeme: &str, anchor: &Self) -> Self {
        Self {
            kind,
            lexeme: lexeme.to_string(),
            location: anchor.location.clone(),
        }
    }
}

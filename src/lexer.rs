use tracing::{debug, trace};

use crate::diagnostic::{Diagnostic, ErrorKind};
use crate::token::{SourceLocation, Token, TokenKind};

const DOUBLE_TOKENS: &[(&[u8; 2], TokenKind)] = &[
    (b"!=", TokenKind::BangEqual),
    (b"==", TokenKind::EqualEqual),
    (b">=", TokenKind::GreaterEqual),
    (b"<=", TokenKind::LessEqual),
    (b"++", TokenKind::PlusPlus),
    (b"--", TokenKind::MinusMinus),
    (b"->", TokenKind::Arrow),
];

const SINGLE_TOKENS: &[(u8, TokenKind)] = &[
    (b'(', TokenKind::LeftParen),
    (b')', TokenKind::RightParen),
    (b'{', TokenKind::LeftBrace),
    (b'}', TokenKind::RightBrace),
    (b'[', TokenKind::LeftBracket),
    (b']', TokenKind::RightBracket),
    (b';', TokenKind::Semicolon),
    (b',', TokenKind::Comma),
    (b'.', TokenKind::Dot),
    (b'-', TokenKind::Minus),
    (b'+', TokenKind::Plus),
    (b'/', TokenKind::Slash),
    (b'*', TokenKind::Star),
    (b'%', TokenKind::Modulo),
    (b'!', TokenKind::Bang),
    (b'=', TokenKind::Equal),
    (b'<', TokenKind::Less),
    (b'>', TokenKind::Greater),
    (b'?', TokenKind::Question),
    (b':', TokenKind::Colon),
];

const KEYWORDS: &[(&str, TokenKind)] = &[
    ("and", TokenKind::And),
    ("break", TokenKind::Break),
    ("do", TokenKind::Do),
    ("else", TokenKind::Else),
    ("enum", TokenKind::Enum),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fn", TokenKind::Fn),
    ("if", TokenKind::If),
    ("impl", TokenKind::Impl),
    ("let", TokenKind::Let),
    ("mut", TokenKind::Mut),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("self", TokenKind::SelfKw),
    ("skip", TokenKind::Skip),
    ("struct", TokenKind::Struct),
    ("true", TokenKind::True),
    ("while", TokenKind::While),
];

fn double_token(pair: [u8; 2]) -> Option<TokenKind> {
    DOUBLE_TOKENS
        .iter()
        .find(|(text, _)| **text == pair)
        .map(|&(_, kind)| kind)
}

fn single_token(ch: u8) -> Option<TokenKind> {
    SINGLE_TOKENS
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|&(_, kind)| kind)
}

/// Look up a reserved word.
#[must_use]
pub fn keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|&(_, kind)| kind)
}

/// Tokenize a bds source buffer into a sequence of tokens ending with
/// [`TokenKind::End`].
///
/// # Errors
///
/// Returns a `Diagnostic` for the first unterminated string, unterminated
/// block comment, or unexpected character. Scanning stops there.
pub fn tokenize(filename: &str, source: &str) -> Result<Vec<Token>, Diagnostic> {
    Lexer::new(filename, source).tokenize()
}

/// Where the token being scanned started.
#[derive(Clone, Copy)]
struct Mark {
    pos: usize,
    row: usize,
    column: usize,
    line_start: usize,
}

struct Lexer<'a> {
    filename: &'a str,
    source: &'a str,
    input: &'a [u8],
    pos: usize,
    row: usize,
    column: usize,
    line_start: usize,
    start: Mark,
}

impl<'a> Lexer<'a> {
    fn new(filename: &'a str, source: &'a str) -> Self {
        let input = source.as_bytes();
        let start = if input.starts_with(&[0xEF, 0xBB, 0xBF]) {
            3
        } else {
            0
        };
        Self {
            filename,
            source,
            input,
            pos: start,
            row: 1,
            column: 1,
            line_start: start,
            start: Mark {
                pos: start,
                row: 1,
                column: 1,
                line_start: start,
            },
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token>, Diagnostic> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            self.start = self.mark();
            match self.scan_token() {
                Ok(Some(token)) => {
                    trace!(
                        kind = ?token.kind,
                        row = token.location.row,
                        column = token.location.column,
                        "token"
                    );
                    tokens.push(token);
                }
                Ok(None) => {}
                Err(diagnostic) => {
                    debug!(file = self.filename, %diagnostic, "lexing failed");
                    return Err(diagnostic);
                }
            }
        }

        self.start = self.mark();
        tokens.push(self.make_token(TokenKind::End, String::new()));
        debug!(file = self.filename, tokens = tokens.len(), "scanned source");
        Ok(tokens)
    }

    const fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            row: self.row,
            column: self.column,
            line_start: self.line_start,
        }
    }

    const fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.peek()?;
        self.pos += 1;
        if ch == b'\n' {
            self.row += 1;
            self.column = 1;
            self.line_start = self.pos;
        } else if ch & 0xC0 != 0x80 {
            // UTF-8 continuation bytes belong to the previous column.
            self.column += 1;
        }
        Some(ch)
    }

    fn line_at(&self, line_start: usize) -> String {
        let rest = &self.source[line_start..];
        rest.find('\n')
            .map_or(rest, |end| &rest[..end])
            .to_string()
    }

    fn location(&self, mark: Mark) -> SourceLocation {
        SourceLocation {
            filename: self.filename.to_string(),
            source_line: self.line_at(mark.line_start),
            row: mark.row,
            column: mark.column,
        }
    }

    fn make_token(&self, kind: TokenKind, lexeme: String) -> Token {
        Token {
            kind,
            lexeme,
            location: self.location(self.start),
        }
    }

    fn error(&self, kind: ErrorKind, token_kind: TokenKind, lexeme: &str) -> Diagnostic {
        let args = if kind == ErrorKind::UnexpectedCharacter {
            vec![lexeme.to_string()]
        } else {
            Vec::new()
        };
        Diagnostic::new(kind, self.make_token(token_kind, lexeme.to_string()), args)
    }

    fn text(&self) -> &'a str {
        &self.source[self.start.pos..self.pos]
    }

    fn scan_token(&mut self) -> Result<Option<Token>, Diagnostic> {
        if let (Some(a), Some(b)) = (self.peek(), self.peek_at(1)) {
            if let Some(kind) = double_token([a, b]) {
                self.advance();
                self.advance();
                return Ok(Some(self.make_token(kind, self.text().to_string())));
            }
        }

        let Some(ch) = self.advance() else {
            return Ok(None);
        };

        match ch {
            b' ' | b'\r' | b'\t' | b'\n' => Ok(None),
            b'#' => {
                self.skip_line();
                Ok(None)
            }
            b'/' if self.peek() == Some(b'/') => {
                self.skip_line();
                Ok(None)
            }
            b'/' if self.peek() == Some(b'*') => {
                self.skip_block_comment()?;
                Ok(None)
            }
            b'"' => self.read_string().map(Some),
            c if c.is_ascii_alphabetic() || c == b'_' => Ok(Some(self.read_identifier())),
            c if c.is_ascii_digit() => Ok(Some(self.read_number())),
            c => match single_token(c) {
                Some(kind) => Ok(Some(self.make_token(kind, char::from(c).to_string()))),
                None => Err(self.unexpected_character()),
            },
        }
    }

    fn unexpected_character(&self) -> Diagnostic {
        let ch = self.source[self.start.pos..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.error(
            ErrorKind::UnexpectedCharacter,
            TokenKind::Unknown,
            &ch.to_string(),
        )
    }

    fn skip_line(&mut self) {
        while self.peek().is_some_and(|c| c != b'\n') {
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), Diagnostic> {
        self.advance(); // skip '*'
        loop {
            match (self.peek(), self.peek_at(1)) {
                (None, _) => {
                    return Err(self.error(
                        ErrorKind::UnterminatedComment,
                        TokenKind::Slash,
                        "/*",
                    ));
                }
                (Some(b'*'), Some(b'/')) => {
                    self.advance();
                    self.advance();
                    return Ok(());
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    fn read_string(&mut self) -> Result<Token, Diagnostic> {
        loop {
            match self.advance() {
                None => {
                    return Err(self.error(
                        ErrorKind::UnterminatedString,
                        TokenKind::String,
                        "\"",
                    ));
                }
                Some(b'"') => break,
                Some(_) => {}
            }
        }

        let text = self.text();
        let value = text[1..text.len() - 1].to_string();
        Ok(self.make_token(TokenKind::String, value))
    }

    fn read_identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == b'_')
        {
            self.advance();
        }

        let text = self.text();
        let kind = keyword(text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, text.to_string())
    }

    fn read_number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some(b'.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // skip '.'
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        self.make_token(TokenKind::Number, self.text().to_string())
    }
}

//! Source-located error reports and their caret-annotated rendering.
//!
//! A [`Diagnostic`] names what went wrong, the token it is anchored at,
//! and kind-specific context. Rendering produces the message line and a
//! two-line excerpt of the offending source line:
//!
//! ```text
//! Unexpected token at main.bds:1:9! Expected ';'.
//!    1 |    print 1 2;
//!                   ^
//! ```

use std::fmt;

use crate::token::{SourceLocation, Token};

const RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Classifies a lexical or syntactic error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A string literal reached end of input before its closing quote.
    UnterminatedString,
    /// A `/*` comment reached end of input before its `*/`.
    UnterminatedComment,
    /// A character that cannot start any token.
    UnexpectedCharacter,
    /// The parser found a token the grammar does not allow here.
    UnexpectedToken,
    /// The left-hand side of `=` is not a variable or field.
    InvalidAssignmentTarget,
    /// A call site passes more arguments than allowed.
    TooManyArguments,
    /// A function declares more parameters than allowed.
    TooManyParameters,
}

impl ErrorKind {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::UnterminatedString => "Unterminated string",
            Self::UnterminatedComment => "Unterminated comment",
            Self::UnexpectedCharacter => "Unexpected character",
            Self::UnexpectedToken => "Unexpected token",
            Self::InvalidAssignmentTarget => "Invalid assignment target",
            Self::TooManyArguments => "Too many arguments",
            Self::TooManyParameters => "Too many parameters",
        }
    }

    /// Whether the lexer, rather than the parser, reports this kind.
    #[must_use]
    pub const fn is_lexical(self) -> bool {
        matches!(
            self,
            Self::UnterminatedString | Self::UnterminatedComment | Self::UnexpectedCharacter
        )
    }

    /// Extra text appended to the message line, built from `args`.
    #[must_use]
    pub fn detail(self, args: &[String]) -> String {
        if args.is_empty() {
            return String::new();
        }
        match self {
            Self::UnexpectedToken => format!(" Expected {}.", args.join(" or ")),
            Self::UnexpectedCharacter => {
                format!(" Character '{}' is not valid here.", args[0])
            }
            Self::TooManyArguments => {
                format!(" Can't have more than {} arguments.", args[0])
            }
            Self::TooManyParameters => {
                format!(" Can't have more than {} parameters.", args[0])
            }
            Self::UnterminatedString
            | Self::UnterminatedComment
            | Self::InvalidAssignmentTarget => String::new(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A single lexical or syntactic error, anchored at a token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {}!{}", token.location, kind.detail(args))]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub token: Token,
    pub args: Vec<String>,
}

impl Diagnostic {
    #[must_use]
    pub const fn new(kind: ErrorKind, token: Token, args: Vec<String>) -> Self {
        Self { kind, token, args }
    }

    #[must_use]
    pub const fn location(&self) -> &SourceLocation {
        &self.token.location
    }

    /// Render the message line and the annotated source excerpt.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(false)
    }

    /// Like [`render`](Self::render), with ANSI colours for terminals.
    #[must_use]
    pub fn render_colored(&self) -> String {
        self.render_with(true)
    }

    fn render_with(&self, color: bool) -> String {
        let location = self.location();
        let gutter = format!("{:>4} |    ", location.row);
        let line = location.source_line.trim_end_matches('\r');

        let mut out = String::new();
        if color {
            out.push_str(RED);
            out.push_str("error:");
            out.push_str(RESET);
            out.push(' ');
        }
        out.push_str(&self.to_string());
        out.push('\n');

        out.push_str(&gutter);
        out.push_str(line);
        out.push('\n');

        out.push_str(&" ".repeat(gutter.chars().count()));
        // Tabs before the column stay tabs so the caret lines up.
        for ch in line.chars().take(location.column.saturating_sub(1)) {
            out.push(if ch == '\t' { '\t' } else { ' ' });
        }
        if color {
            out.push_str(RED);
        }
        out.push('^');
        out.push_str(&"~".repeat(self.underline_width().saturating_sub(1)));
        if color {
            out.push_str(RESET);
        }
        out
    }

    fn underline_width(&self) -> usize {
        self.token
            .lexeme
            .lines()
            .next()
            .map_or(0, |first| first.chars().count())
    }
}

/// Render a batch of diagnostics, separated by blank lines.
#[must_use]
pub fn render_all(diagnostics: &[Diagnostic], color: bool) -> String {
    diagnostics
        .iter()
        .map(|d| if color { d.render_colored() } else { d.render() })
        .collect::<Vec<_>>()
        .join("\n\n")
}

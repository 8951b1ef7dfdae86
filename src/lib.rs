//! Front end for the bds scripting language: lexer, recursive-descent
//! parser, and source-located diagnostics.
//!
//! Source text goes through [`tokenize`] into a token stream, and
//! [`parse`] turns that into a syntax tree. A lexical error stops the scan
//! at once; syntax errors are collected across the whole file so they can
//! all be reported in one run.
//!
//! # Quick start
//!
//! ## Parse a program and print its tree
//!
//! ```
//! use bds::{tokenize, parse, print};
//!
//! let tokens = tokenize("main.bds", "let x = 1 + 2 * 3;").unwrap();
//! let program = parse(&tokens).unwrap();
//! assert_eq!(print(&program), "(let x (+ 1 (* 2 3)))\n");
//! ```
//!
//! ## Report syntax errors
//!
//! ```
//! use bds::{Error, parse_str};
//!
//! let err = parse_str("main.bds", "print 1 2;\nlet = 3;\n").unwrap_err();
//! let Error::Parse(diagnostics) = &err else { unreachable!() };
//! assert_eq!(diagnostics.len(), 2);
//! assert!(err.report(false).contains("   1 |    print 1 2;"));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod diagnostic;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;

pub use ast::{Expr, ExprVisitor, Stmt, StmtVisitor};
pub use diagnostic::{Diagnostic, ErrorKind, render_all};
pub use lexer::tokenize;
pub use parser::{MAX_ARGUMENTS, MAX_NESTING, MAX_PARAMETERS, parse};
pub use printer::{print, print_expr};
pub use token::{SourceLocation, Token, TokenKind};

/// Unified error type covering both lexing and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The first lexical error; scanning stopped there.
    #[error("{0}")]
    Lex(#[from] Diagnostic),
    /// Every syntax error found in the pass, in source order.
    #[error("{} syntax error(s), first: {}", .0.len(), first_message(.0))]
    Parse(Vec<Diagnostic>),
}

fn first_message(diagnostics: &[Diagnostic]) -> String {
    diagnostics.first().map(ToString::to_string).unwrap_or_default()
}

impl Error {
    /// All diagnostics carried by this error.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Lex(diagnostic) => std::slice::from_ref(diagnostic),
            Self::Parse(diagnostics) => diagnostics,
        }
    }

    /// Render every diagnostic with its source excerpt.
    #[must_use]
    pub fn report(&self, color: bool) -> String {
        render_all(self.diagnostics(), color)
    }
}

/// Tokenize and parse a source buffer in one step.
pub fn parse_str(filename: &str, source: &str) -> Result<Vec<Stmt>, Error> {
    let tokens = tokenize(filename, source)?;
    parse(&tokens).map_err(Error::Parse)
}

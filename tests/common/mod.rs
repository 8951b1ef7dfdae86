#![allow(dead_code)]

use bds::{Diagnostic, Stmt, Token, TokenKind, parse, print, tokenize};

pub const FILE: &str = "test.bds";

pub fn lex(input: &str) -> Vec<Token> {
    tokenize(FILE, input).expect("tokenize failed")
}

pub fn kinds(input: &str) -> Vec<TokenKind> {
    lex(input).iter().map(|t| t.kind).collect()
}

pub fn parse_ok(input: &str) -> Vec<Stmt> {
    let tokens = lex(input);
    parse(&tokens).unwrap_or_else(|diagnostics| {
        panic!(
            "unexpected syntax errors:\n{}",
            bds::render_all(&diagnostics, false)
        )
    })
}

pub fn parse_err(input: &str) -> Vec<Diagnostic> {
    let tokens = lex(input);
    match parse(&tokens) {
        Ok(stmts) => panic!("expected syntax errors, got:\n{}", print(&stmts)),
        Err(diagnostics) => diagnostics,
    }
}

/// Parse and print, asserting the tree renders as `expected`.
pub fn assert_tree(input: &str, expected: &str) {
    let output = print(&parse_ok(input));
    assert_eq!(
        output, expected,
        "tree mismatch:\n--- expected ---\n{expected}\n--- got ---\n{output}"
    );
}

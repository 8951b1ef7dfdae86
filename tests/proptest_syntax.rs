//! Property-based tests with proptest.
//!
//! Random token soups check the lexer's invariants (lexemes reproduce the
//! input, locations never move backwards). Random well-formed programs
//! check that parsing is a pure function of its tokens and that a single
//! injected syntax error stays confined to its own statement.

use bds::lexer::keyword;
use bds::{parse, tokenize};
use proptest::prelude::*;
use proptest::sample::{Index, select};

const FILE: &str = "prop.bds";

const PUNCTUATION: &[&str] = &[
    "(", ")", "{", "}", "[", "]", ",", ".", "-", "+", ";", ":", "*", "?", "%", "!", "=", ">", "<",
];

const WHITESPACE: &[&str] = &["", " ", "\t", "\n", "\r\n"];

const PIECES: &[&str] = &[
    "alpha",
    "x1",
    "_tmp",
    "42",
    "3.5",
    "\"text\"",
    "\"two\nlines\"",
    "(",
    ")",
    "{",
    "}",
    ";",
    "+",
    "-",
    "==",
    "->",
    "!",
    "# note\n",
    "/* c\nc */",
    " ",
    "\t",
    "\n",
    "let",
    "while",
];

const UNARY_OPS: &[&str] = &["-", "!"];

const BINARY_OPS: &[&str] = &[
    "+", "-", "*", "/", "%", "==", "!=", "<", "<=", ">", ">=", "and", "or",
];

// -- Leaf strategies --

/// Identifier that is not a reserved word.
fn identifier() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,6}".prop_filter("reserved word", |s| keyword(s).is_none())
}

fn number() -> impl Strategy<Value = String> {
    "[0-9]{1,4}(\\.[0-9]{1,3})?".prop_map(|s| s)
}

fn string_literal() -> impl Strategy<Value = String> {
    "[a-z ]{0,8}".prop_map(|s| format!("\"{s}\""))
}

/// Source text of a well-formed expression. Operators are separated by
/// spaces so that e.g. `- -x` never lexes as `--`.
fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        identifier(),
        number(),
        string_literal(),
        Just("true".to_string()),
        Just("false".to_string()),
    ];

    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), select(BINARY_OPS), inner.clone())
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            (select(UNARY_OPS), inner.clone()).prop_map(|(op, e)| format!("{op} {e}")),
            inner.clone().prop_map(|e| format!("({e})")),
            (identifier(), prop::collection::vec(inner, 0..4))
                .prop_map(|(f, args)| format!("{f}({})", args.join(", "))),
        ]
    })
}

/// Single-line statements, one per row.
fn statements() -> impl Strategy<Value = Vec<String>> {
    let stmt = prop_oneof![
        (identifier(), expression()).prop_map(|(name, e)| format!("let {name} = {e};")),
        expression().prop_map(|e| format!("print {e};")),
        (identifier(), expression()).prop_map(|(name, e)| format!("{name} = {e};")),
    ];
    prop::collection::vec(stmt, 1..6)
}

proptest! {
    #[test]
    fn punctuation_lexemes_reproduce_input(
        pieces in prop::collection::vec((select(PUNCTUATION), select(WHITESPACE)), 0..40)
    ) {
        let input: String = pieces.iter().map(|(p, ws)| format!("{p}{ws}")).collect();
        let tokens = tokenize(FILE, &input).expect("punctuation always lexes");

        let expected: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        let joined: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn token_locations_never_go_backwards(
        pieces in prop::collection::vec(select(PIECES), 0..60)
    ) {
        let input = pieces.concat();
        let tokens = tokenize(FILE, &input).expect("pieces always lex");

        for pair in tokens.windows(2) {
            let a = (pair[0].location.row, pair[0].location.column);
            let b = (pair[1].location.row, pair[1].location.column);
            prop_assert!(a <= b, "{:?} at {:?} precedes {:?} at {:?}", pair[0].kind, a, pair[1].kind, b);
        }
    }

    #[test]
    fn parsing_is_a_pure_function_of_tokens(stmts in statements()) {
        let program = stmts.join("\n");
        let tokens = tokenize(FILE, &program).expect("generated program lexes");

        let first = parse(&tokens);
        let second = parse(&tokens);
        prop_assert!(first.is_ok(), "generated program failed to parse:\n{}", program);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn injected_error_stays_in_its_statement(stmts in statements(), which in any::<Index>()) {
        let broken = which.index(stmts.len());
        let program: Vec<String> = stmts
            .iter()
            .enumerate()
            .map(|(i, s)| {
                if i == broken {
                    format!("{} );", s.trim_end_matches(';'))
                } else {
                    s.clone()
                }
            })
            .collect();
        let program = program.join("\n");

        let tokens = tokenize(FILE, &program).expect("generated program lexes");
        let diagnostics = parse(&tokens).expect_err("a stray ')' must be reported");

        prop_assert_eq!(diagnostics.len(), 1);
        prop_assert_eq!(diagnostics[0].token.location.row, broken + 1);
        prop_assert_eq!(&diagnostics[0].token.lexeme, ")");
    }
}

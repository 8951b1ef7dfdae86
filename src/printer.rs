//! Debug printer that renders a syntax tree as S-expressions.
//!
//! Each top-level statement goes on its own line. Nested statements start
//! a new line indented two spaces deeper, and closing parens stay on the
//! last line of the node:
//!
//! ```text
//! (fn add (a b)
//!   (block
//!     (return (+ a b))))
//! ```

use crate::ast::{Expr, ExprVisitor, Stmt, StmtVisitor};
use crate::token::{Token, TokenKind};

const INDENT: &str = "  ";

/// Render statements, one top-level statement per line.
#[must_use]
pub fn print(statements: &[Stmt]) -> String {
    let mut printer = Printer::default();
    let mut out = String::new();
    for stmt in statements {
        out.push_str(&stmt.accept(&mut printer));
        out.push('\n');
    }
    out
}

/// Render a single expression on one line.
#[must_use]
pub fn print_expr(expr: &Expr) -> String {
    expr.accept(&mut Printer::default())
}

#[derive(Default)]
struct Printer {
    depth: usize,
}

impl Printer {
    fn sexpr(&mut self, head: &str, parts: &[&Expr]) -> String {
        let mut out = format!("({head}");
        for part in parts {
            out.push(' ');
            out.push_str(&part.accept(self));
        }
        out.push(')');
        out
    }

    /// A statement node whose children go on their own, deeper lines.
    fn nested(&mut self, head: &str, children: &[&Stmt]) -> String {
        let mut out = format!("({head}");
        self.depth += 1;
        for child in children {
            out.push('\n');
            out.push_str(&INDENT.repeat(self.depth));
            out.push_str(&child.accept(self));
        }
        self.depth -= 1;
        out.push(')');
        out
    }
}

impl ExprVisitor for Printer {
    type Output = String;

    fn visit_literal(&mut self, value: &Token) -> String {
        if value.kind == TokenKind::String {
            format!("\"{}\"", value.lexeme)
        } else {
            value.lexeme.clone()
        }
    }

    fn visit_variable(&mut self, name: &Token) -> String {
        name.lexeme.clone()
    }

    fn visit_grouping(&mut self, inner: &Expr) -> String {
        self.sexpr("group", &[inner])
    }

    fn visit_unary(&mut self, op: &Token, operand: &Expr) -> String {
        self.sexpr(&op.lexeme, &[operand])
    }

    fn visit_binary(&mut self, left: &Expr, op: &Token, right: &Expr) -> String {
        self.sexpr(&op.lexeme, &[left, right])
    }

    fn visit_logical(&mut self, left: &Expr, op: &Token, right: &Expr) -> String {
        self.sexpr(&op.lexeme, &[left, right])
    }

    fn visit_assign(&mut self, name: &Token, value: &Expr) -> String {
        format!("(= {} {})", name.lexeme, value.accept(self))
    }

    fn visit_get(&mut self, object: &Expr, name: &Token) -> String {
        format!("(. {} {})", object.accept(self), name.lexeme)
    }

    fn visit_set(&mut self, object: &Expr, name: &Token, value: &Expr) -> String {
        let target = format!("(. {} {})", object.accept(self), name.lexeme);
        format!("(= {target} {})", value.accept(self))
    }

    fn visit_call(&mut self, callee: &Expr, _paren: &Token, arguments: &[Expr]) -> String {
        let mut parts = vec![callee];
        parts.extend(arguments);
        self.sexpr("call", &parts)
    }

    fn visit_this(&mut self, keyword: &Token) -> String {
        keyword.lexeme.clone()
    }
}

impl StmtVisitor for Printer {
    type Output = String;

    fn visit_expression(&mut self, expr: &Expr) -> String {
        self.sexpr("expr", &[expr])
    }

    fn visit_print(&mut self, expr: &Expr) -> String {
        self.sexpr("print", &[expr])
    }

    fn visit_var(&mut self, name: &Token, initializer: Option<&Expr>) -> String {
        let head = format!("let {}", name.lexeme);
        match initializer {
            Some(init) => self.sexpr(&head, &[init]),
            None => self.sexpr(&head, &[]),
        }
    }

    fn visit_block(&mut self, statements: &[Stmt]) -> String {
        let children: Vec<&Stmt> = statements.iter().collect();
        self.nested("block", &children)
    }

    fn visit_if(
        &mut self,
        condition: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
    ) -> String {
        let head = format!("if {}", condition.accept(self));
        let mut children = vec![then_branch];
        children.extend(else_branch);
        self.nested(&head, &children)
    }

    fn visit_while(&mut self, condition: &Expr, body: &Stmt) -> String {
        let head = format!("while {}", condition.accept(self));
        self.nested(&head, &[body])
    }

    fn visit_break(&mut self, _keyword: &Token) -> String {
        "(break)".to_string()
    }

    fn visit_function(&mut self, name: &Token, params: &[Token], body: &Stmt) -> String {
        let params: Vec<&str> = params.iter().map(|p| p.lexeme.as_str()).collect();
        let head = format!("fn {} ({})", name.lexeme, params.join(" "));
        self.nested(&head, &[body])
    }

    fn visit_return(&mut self, _keyword: &Token, value: Option<&Expr>) -> String {
        match value {
            Some(value) => self.sexpr("return", &[value]),
            None => "(return)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn print_source(input: &str) -> String {
        let tokens = tokenize("test.bds", input).expect("tokenize failed");
        let stmts = parse(&tokens).expect("parse failed");
        print(&stmts)
    }

    #[test]
    fn arithmetic() {
        assert_eq!(
            print_source("let x = 1 + 2 * 3;"),
            "(let x (+ 1 (* 2 3)))\n"
        );
    }

    #[test]
    fn var_without_initializer() {
        assert_eq!(print_source("let x;"), "(let x)\n");
    }

    #[test]
    fn grouping_and_unary() {
        assert_eq!(
            print_source("print -(1 + 2) * !x;"),
            "(print (* (- (group (+ 1 2))) (! x)))\n"
        );
    }

    #[test]
    fn strings_are_requoted() {
        assert_eq!(print_source("print \"hi\";"), "(print \"hi\")\n");
    }

    #[test]
    fn nested_statements_are_indented() {
        assert_eq!(
            print_source("fn add(a, b) { return a + b; }"),
            "(fn add (a b)\n  (block\n    (return (+ a b))))\n"
        );
    }

    #[test]
    fn if_else() {
        assert_eq!(
            print_source("if (a and b) print 1; else { }"),
            "(if (and a b)\n  (print 1)\n  (block))\n"
        );
    }

    #[test]
    fn calls_gets_and_sets() {
        assert_eq!(
            print_source("self.items = list(1, two);"),
            "(expr (= (. self items) (call list 1 two)))\n"
        );
    }

    #[test]
    fn while_with_break() {
        assert_eq!(
            print_source("while (true) break;"),
            "(while true\n  (break))\n"
        );
    }

    #[test]
    fn single_expression() {
        let tokens = tokenize("test.bds", "a = b or c;").expect("tokenize failed");
        let stmts = parse(&tokens).expect("parse failed");
        let Stmt::Expression(expr) = &stmts[0] else {
            panic!("expected expression statement");
        };
        assert_eq!(print_expr(expr), "(= a (or b c))");
    }
}

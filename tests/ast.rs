//! Tree traversal through the visitor traits.

mod common;

use std::collections::BTreeMap;

use bds::{Expr, ExprVisitor, Stmt, StmtVisitor, Token};
use common::parse_ok;

/// Counts every node it reaches, keyed by variant name.
#[derive(Default)]
struct Census {
    counts: BTreeMap<&'static str, usize>,
}

impl Census {
    fn bump(&mut self, name: &'static str) {
        *self.counts.entry(name).or_default() += 1;
    }

    fn of(input: &str) -> BTreeMap<&'static str, usize> {
        let mut census = Self::default();
        for stmt in parse_ok(input) {
            stmt.accept(&mut census);
        }
        census.counts
    }
}

impl ExprVisitor for Census {
    type Output = ();

    fn visit_literal(&mut self, _value: &Token) {
        self.bump("Literal");
    }

    fn visit_variable(&mut self, _name: &Token) {
        self.bump("Variable");
    }

    fn visit_grouping(&mut self, inner: &Expr) {
        self.bump("Grouping");
        inner.accept(self);
    }

    fn visit_unary(&mut self, _op: &Token, operand: &Expr) {
        self.bump("Unary");
        operand.accept(self);
    }

    fn visit_binary(&mut self, left: &Expr, _op: &Token, right: &Expr) {
        self.bump("Binary");
        left.accept(self);
        right.accept(self);
    }

    fn visit_logical(&mut self, left: &Expr, _op: &Token, right: &Expr) {
        self.bump("Logical");
        left.accept(self);
        right.accept(self);
    }

    fn visit_assign(&mut self, _name: &Token, value: &Expr) {
        self.bump("Assign");
        value.accept(self);
    }

    fn visit_get(&mut self, object: &Expr, _name: &Token) {
        self.bump("Get");
        object.accept(self);
    }

    fn visit_set(&mut self, object: &Expr, _name: &Token, value: &Expr) {
        self.bump("Set");
        object.accept(self);
        value.accept(self);
    }

    fn visit_call(&mut self, callee: &Expr, _paren: &Token, arguments: &[Expr]) {
        self.bump("Call");
        callee.accept(self);
        for arg in arguments {
            arg.accept(self);
        }
    }

    fn visit_this(&mut self, _keyword: &Token) {
        self.bump("This");
    }
}

impl StmtVisitor for Census {
    type Output = ();

    fn visit_expression(&mut self, expr: &Expr) {
        self.bump("Expression");
        expr.accept(self);
    }

    fn visit_print(&mut self, expr: &Expr) {
        self.bump("Print");
        expr.accept(self);
    }

    fn visit_var(&mut self, _name: &Token, initializer: Option<&Expr>) {
        self.bump("Var");
        if let Some(init) = initializer {
            init.accept(self);
        }
    }

    fn visit_block(&mut self, statements: &[Stmt]) {
        self.bump("Block");
        for stmt in statements {
            stmt.accept(self);
        }
    }

    fn visit_if(&mut self, condition: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) {
        self.bump("If");
        condition.accept(self);
        then_branch.accept(self);
        if let Some(stmt) = else_branch {
            stmt.accept(self);
        }
    }

    fn visit_while(&mut self, condition: &Expr, body: &Stmt) {
        self.bump("While");
        condition.accept(self);
        body.accept(self);
    }

    fn visit_break(&mut self, _keyword: &Token) {
        self.bump("Break");
    }

    fn visit_function(&mut self, _name: &Token, _params: &[Token], body: &Stmt) {
        self.bump("Function");
        body.accept(self);
    }

    fn visit_return(&mut self, _keyword: &Token, value: Option<&Expr>) {
        self.bump("Return");
        if let Some(value) = value {
            value.accept(self);
        }
    }
}

#[test]
fn visitor_reaches_every_variant() {
    let counts = Census::of(
        "fn area(shape) {\n\
         \tlet w = shape.width;\n\
         \tif (!w or w < 0) return;\n\
         \tself.last = (w * 2);\n\
         \twhile (true) break;\n\
         \treturn w;\n\
         }\n\
         print area(box) and \"done\";\n\
         x = 1;\n",
    );

    for name in [
        "Literal", "Variable", "Grouping", "Unary", "Binary", "Logical", "Assign", "Get", "Set",
        "Call", "This", "Expression", "Print", "Var", "Block", "If", "While", "Break", "Function",
        "Return",
    ] {
        assert!(counts.contains_key(name), "visitor never reached {name}");
    }
    assert_eq!(counts["Return"], 2);
    assert_eq!(counts["Function"], 1);
}

#[test]
fn visitor_counts_desugared_for() {
    let counts = Census::of("for (let i = 0; i < 3; i = i + 1) print i;");
    assert_eq!(counts["Block"], 2);
    assert_eq!(counts["While"], 1);
    assert_eq!(counts["Var"], 1);
    assert_eq!(counts["Assign"], 1);
}

#[test]
fn variant_names_match_visitor_keys() {
    let stmts = parse_ok("let a = b.c;");
    let Stmt::Var {
        initializer: Some(init),
        ..
    } = &stmts[0]
    else {
        panic!("expected var");
    };
    assert_eq!(stmts[0].variant_name(), "Var");
    assert_eq!(init.variant_name(), "Get");
}

#[test]
fn trees_are_plain_owned_values() {
    let stmts = parse_ok("print 1 + 2;");
    let copy = stmts.clone();
    drop(stmts);
    assert_eq!(copy.len(), 1);
    assert!(matches!(&copy[0], Stmt::Print(Expr::Binary { .. })));
}

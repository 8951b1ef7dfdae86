//! Syntax tree produced by the parser.
//!
//! Both node categories are closed enums. Every child is owned by exactly
//! one parent and nothing points back up the tree. Consumers walk it
//! either by matching on the variants directly or through the
//! [`ExprVisitor`] / [`StmtVisitor`] traits, whose `accept` dispatch has no
//! wildcard arm: adding a variant breaks every visitor until it handles it.

use crate::token::Token;

/// Expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Number, string, `true` or `false`.
    Literal(Token),
    Variable(Token),
    /// Parenthesized expression.
    Grouping(Box<Self>),
    Unary {
        op: Token,
        operand: Box<Self>,
    },
    Binary {
        left: Box<Self>,
        op: Token,
        right: Box<Self>,
    },
    /// `and` / `or`, kept apart from `Binary` because they short-circuit.
    Logical {
        left: Box<Self>,
        op: Token,
        right: Box<Self>,
    },
    Assign {
        name: Token,
        value: Box<Self>,
    },
    /// Field read: `object.name`.
    Get {
        object: Box<Self>,
        name: Token,
    },
    /// Field write: `object.name = value`.
    Set {
        object: Box<Self>,
        name: Token,
        value: Box<Self>,
    },
    Call {
        callee: Box<Self>,
        /// Closing parenthesis, used to locate errors at the call site.
        paren: Token,
        arguments: Vec<Self>,
    },
    /// `self`.
    This(Token),
}

/// Statement node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Expression(Expr),
    Print(Expr),
    /// `let name = initializer;`
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
    Block(Vec<Self>),
    If {
        condition: Expr,
        then_branch: Box<Self>,
        else_branch: Option<Box<Self>>,
    },
    While {
        condition: Expr,
        body: Box<Self>,
    },
    Break(Token),
    Function {
        name: Token,
        params: Vec<Token>,
        body: Box<Self>,
    },
    Return {
        keyword: Token,
        value: Option<Expr>,
    },
}

/// One method per [`Expr`] variant.
pub trait ExprVisitor {
    type Output;

    fn visit_literal(&mut self, value: &Token) -> Self::Output;
    fn visit_variable(&mut self, name: &Token) -> Self::Output;
    fn visit_grouping(&mut self, inner: &Expr) -> Self::Output;
    fn visit_unary(&mut self, op: &Token, operand: &Expr) -> Self::Output;
    fn visit_binary(&mut self, left: &Expr, op: &Token, right: &Expr) -> Self::Output;
    fn visit_logical(&mut self, left: &Expr, op: &Token, right: &Expr) -> Self::Output;
    fn visit_assign(&mut self, name: &Token, value: &Expr) -> Self::Output;
    fn visit_get(&mut self, object: &Expr, name: &Token) -> Self::Output;
    fn visit_set(&mut self, object: &Expr, name: &Token, value: &Expr) -> Self::Output;
    fn visit_call(&mut self, callee: &Expr, paren: &Token, arguments: &[Expr]) -> Self::Output;
    fn visit_this(&mut self, keyword: &Token) -> Self::Output;
}

/// One method per [`Stmt`] variant.
pub trait StmtVisitor {
    type Output;

    fn visit_expression(&mut self, expr: &Expr) -> Self::Output;
    fn visit_print(&mut self, expr: &Expr) -> Self::Output;
    fn visit_var(&mut self, name: &Token, initializer: Option<&Expr>) -> Self::Output;
    fn visit_block(&mut self, statements: &[Stmt]) -> Self::Output;
    fn visit_if(
        &mut self,
        condition: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
    ) -> Self::Output;
    fn visit_while(&mut self, condition: &Expr, body: &Stmt) -> Self::Output;
    fn visit_break(&mut self, keyword: &Token) -> Self::Output;
    fn visit_function(&mut self, name: &Token, params: &[Token], body: &Stmt) -> Self::Output;
    fn visit_return(&mut self, keyword: &Token, value: Option<&Expr>) -> Self::Output;
}

impl Expr {
    /// Dispatch to the visitor method for this variant.
    pub fn accept<V: ExprVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Literal(value) => visitor.visit_literal(value),
            Self::Variable(name) => visitor.visit_variable(name),
            Self::Grouping(inner) => visitor.visit_grouping(inner),
            Self::Unary { op, operand } => visitor.visit_unary(op, operand),
            Self::Binary { left, op, right } => visitor.visit_binary(left, op, right),
            Self::Logical { left, op, right } => visitor.visit_logical(left, op, right),
            Self::Assign { name, value } => visitor.visit_assign(name, value),
            Self::Get { object, name } => visitor.visit_get(object, name),
            Self::Set {
                object,
                name,
                value,
            } => visitor.visit_set(object, name, value),
            Self::Call {
                callee,
                paren,
                arguments,
            } => visitor.visit_call(callee, paren, arguments),
            Self::This(keyword) => visitor.visit_this(keyword),
        }
    }

    /// Variant name, for logs and test messages.
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Literal(_) => "Literal",
            Self::Variable(_) => "Variable",
            Self::Grouping(_) => "Grouping",
            Self::Unary { .. } => "Unary",
            Self::Binary { .. } => "Binary",
            Self::Logical { .. } => "Logical",
            Self::Assign { .. } => "Assign",
            Self::Get { .. } => "Get",
            Self::Set { .. } => "Set",
            Self::Call { .. } => "Call",
            Self::This(_) => "This",
        }
    }
}

impl Stmt {
    /// Dispatch to the visitor method for this variant.
    pub fn accept<V: StmtVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Expression(expr) => visitor.visit_expression(expr),
            Self::Print(expr) => visitor.visit_print(expr),
            Self::Var { name, initializer } => visitor.visit_var(name, initializer.as_ref()),
            Self::Block(statements) => visitor.visit_block(statements),
            Self::If {
                condition,
                then_branch,
                else_branch,
            } => visitor.visit_if(condition, then_branch, else_branch.as_deref()),
            Self::While { condition, body } => visitor.visit_while(condition, body),
            Self::Break(keyword) => visitor.visit_break(keyword),
            Self::Function { name, params, body } => visitor.visit_function(name, params, body),
            Self::Return { keyword, value } => visitor.visit_return(keyword, value.as_ref()),
        }
    }

    /// Variant name, for logs and test messages.
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Expression(_) => "Expression",
            Self::Print(_) => "Print",
            Self::Var { .. } => "Var",
            Self::Block(_) => "Block",
            Self::If { .. } => "If",
            Self::While { .. } => "While",
            Self::Break(_) => "Break",
            Self::Function { .. } => "Function",
            Self::Return { .. } => "Return",
        }
    }
}

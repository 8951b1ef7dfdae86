use tracing::debug;

use crate::ast::{Expr, Stmt};
use crate::diagnostic::{Diagnostic, ErrorKind};
use crate::token::{Token, TokenKind};

/// Most arguments a single call site may pass.
pub const MAX_ARGUMENTS: usize = 255;
/// Most parameters a function may declare.
pub const MAX_PARAMETERS: usize = 255;
/// Deepest the parser recurses into nested expressions and statements.
pub const MAX_NESTING: usize = 64;

type ParseResult<T> = Result<T, Diagnostic>;

/// Parse a token stream into the program's top-level statements.
///
/// Syntax errors do not stop the pass: after each one the parser skips to
/// the next statement boundary and keeps going, so independent errors are
/// all reported together.
///
/// # Errors
///
/// Returns every `Diagnostic` recorded during the pass, in source order.
/// No statements are returned when there is at least one.
pub fn parse(tokens: &[Token]) -> Result<Vec<Stmt>, Vec<Diagnostic>> {
    let (statements, diagnostics) = Parser::new(tokens).parse();
    if diagnostics.is_empty() {
        Ok(statements)
    } else {
        Err(diagnostics)
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
    diagnostics: Vec<Diagnostic>,
    /// Blocks currently open around the cursor.
    block_depth: usize,
    nesting: usize,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            current: 0,
            diagnostics: Vec::new(),
            block_depth: 0,
            nesting: 0,
        }
    }

    /// Run the whole pass. Statements that failed to parse are left out
    /// of the first vector, so it is only usable when the second is empty.
    fn parse(mut self) -> (Vec<Stmt>, Vec<Diagnostic>) {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        debug!(
            statements = statements.len(),
            errors = self.diagnostics.len(),
            "parse finished"
        );
        (statements, self.diagnostics)
    }

    // -----------------------------------------------------------
    // Cursor.
    // -----------------------------------------------------------

    fn is_at_end(&self) -> bool {
        self.tokens
            .get(self.current)
            .is_none_or(|t| t.kind == TokenKind::End)
    }

    fn peek(&self) -> &'a Token {
        let index = self.current.min(self.tokens.len().saturating_sub(1));
        &self.tokens[index]
    }

    fn previous(&self) -> &'a Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    fn advance(&mut self) -> &'a Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_kind(&mut self, kind: TokenKind) -> bool {
        self.match_any(&[kind])
    }

    fn consume(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            return Ok(self.advance().clone());
        }
        Err(self.unexpected(kind.description()))
    }

    fn unexpected(&self, expected: &str) -> Diagnostic {
        Diagnostic::new(
            ErrorKind::UnexpectedToken,
            self.peek().clone(),
            vec![expected.to_string()],
        )
    }

    /// Record an error that does not unwind the current statement.
    fn report(&mut self, diagnostic: Diagnostic) {
        debug!(%diagnostic, "syntax error");
        self.diagnostics.push(diagnostic);
    }

    /// Run `parse` one level deeper, failing once `MAX_NESTING` is hit.
    fn nested<T>(&mut self, parse: fn(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.nesting >= MAX_NESTING {
            return Err(self.unexpected("shallower nesting"));
        }
        self.nesting += 1;
        let result = parse(self);
        self.nesting -= 1;
        result
    }

    fn at_block_end(&self) -> bool {
        self.block_depth > 0 && self.check(TokenKind::RightBrace)
    }

    /// Skip tokens until a statement boundary: just past a `;`, or before
    /// a token that starts a declaration. Inside a block the closing `}` is
    /// never skipped.
    fn synchronize(&mut self) {
        if !self.at_block_end() {
            self.advance();
        }

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                break;
            }
            if self.peek().kind.starts_declaration() || self.at_block_end() {
                break;
            }
            self.advance();
        }

        let resume = self.peek();
        debug!(
            row = resume.location.row,
            column = resume.location.column,
            kind = ?resume.kind,
            "resuming after syntax error"
        );
    }

    // -----------------------------------------------------------
    // Declarations and statements.
    // -----------------------------------------------------------

    fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.match_kind(TokenKind::Fn) {
            self.function()
        } else if self.match_kind(TokenKind::Let) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => Some(stmt),
            Err(diagnostic) => {
                self.report(diagnostic);
                self.synchronize();
                None
            }
        }
    }

    fn function(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier)?;
        self.consume(TokenKind::LeftParen)?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                if params.len() == MAX_PARAMETERS {
                    let diagnostic = Diagnostic::new(
                        ErrorKind::TooManyParameters,
                        self.peek().clone(),
                        vec![MAX_PARAMETERS.to_string()],
                    );
                    self.report(diagnostic);
                }
                params.push(self.consume(TokenKind::Identifier)?);
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RightParen)?;

        self.consume(TokenKind::LeftBrace)?;
        let body = Stmt::Block(self.block()?);

        Ok(Stmt::Function {
            name,
            params,
            body: Box::new(body),
        })
    }

    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier)?;

        let initializer = if self.match_kind(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenKind::Semicolon)?;
        Ok(Stmt::Var { name, initializer })
    }

    fn statement(&mut self) -> ParseResult<Stmt> {
        self.nested(Self::statement_by_keyword)
    }

    fn statement_by_keyword(&mut self) -> ParseResult<Stmt> {
        if self.match_kind(TokenKind::Print) {
            return self.print_statement();
        }
        if self.match_kind(TokenKind::LeftBrace) {
            return Ok(Stmt::Block(self.block()?));
        }
        if self.match_kind(TokenKind::If) {
            return self.if_statement();
        }
        if self.match_kind(TokenKind::While) {
            return self.while_statement();
        }
        if self.match_kind(TokenKind::For) {
            return self.for_statement();
        }
        if self.match_kind(TokenKind::Break) {
            return self.break_statement();
        }
        if self.match_kind(TokenKind::Return) {
            return self.return_statement();
        }
        self.expression_statement()
    }

    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon)?;
        Ok(Stmt::Print(value))
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon)?;
        Ok(Stmt::Expression(expr))
    }

    /// Parse the rest of a block; the `{` is already consumed.
    fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        self.nested(Self::block_body)
    }

    fn block_body(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        self.block_depth += 1;
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        self.block_depth -= 1;

        self.consume(TokenKind::RightBrace)?;
        Ok(statements)
    }

    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen)?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen)?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_kind(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen)?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen)?;
        let body = Box::new(self.statement()?);

        Ok(Stmt::While { condition, body })
    }

    /// `for` has no node of its own; it is rewritten into a `while` loop
    /// wrapped in blocks for the initializer and increment.
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.previous();
        self.consume(TokenKind::LeftParen)?;

        let initializer = if self.match_kind(TokenKind::Semicolon) {
            None
        } else if self.match_kind(TokenKind::Let) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon)?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RightParen)?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        let condition = condition.unwrap_or_else(|| {
            Expr::Literal(Token::synthetic(TokenKind::True, "true", keyword))
        });
        body = Stmt::While {
            condition,
            body: Box::new(body),
        };

        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        Ok(body)
    }

    fn break_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.previous().clone();
        self.consume(TokenKind::Semicolon)?;
        Ok(Stmt::Break(keyword))
    }

    fn return_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.previous().clone();
        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon)?;

        Ok(Stmt::Return { keyword, value })
    }

    // -----------------------------------------------------------
    // Expressions, lowest precedence first.
    // -----------------------------------------------------------

    fn expression(&mut self) -> ParseResult<Expr> {
        self.nested(Self::assignment)
    }

    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.logical_or()?;

        if !self.match_kind(TokenKind::Equal) {
            return Ok(expr);
        }

        let equals = self.previous().clone();
        let value = Box::new(self.expression()?);

        match expr {
            Expr::Variable(name) => Ok(Expr::Assign { name, value }),
            Expr::Get { object, name } => Ok(Expr::Set {
                object,
                name,
                value,
            }),
            other => {
                self.report(Diagnostic::new(
                    ErrorKind::InvalidAssignmentTarget,
                    equals,
                    Vec::new(),
                ));
                Ok(other)
            }
        }
    }

    fn logical_or(&mut self) -> ParseResult<Expr> {
        self.logical_layer(TokenKind::Or, Self::logical_and)
    }

    fn logical_and(&mut self) -> ParseResult<Expr> {
        self.logical_layer(TokenKind::And, Self::equality)
    }

    fn equality(&mut self) -> ParseResult<Expr> {
        self.binary_layer(
            &[TokenKind::BangEqual, TokenKind::EqualEqual],
            Self::comparison,
        )
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        self.binary_layer(
            &[
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
            ],
            Self::addition,
        )
    }

    fn addition(&mut self) -> ParseResult<Expr> {
        self.binary_layer(&[TokenKind::Plus, TokenKind::Minus], Self::multiplication)
    }

    fn multiplication(&mut self) -> ParseResult<Expr> {
        self.binary_layer(
            &[TokenKind::Star, TokenKind::Slash, TokenKind::Modulo],
            Self::unary,
        )
    }

    /// One left-associative tier: `operand ( op operand )*`.
    fn binary_layer(
        &mut self,
        operators: &[TokenKind],
        operand: fn(&mut Self) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        let mut expr = operand(self)?;

        while self.match_any(operators) {
            let op = self.previous().clone();
            let right = operand(self)?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn logical_layer(
        &mut self,
        operator: TokenKind,
        operand: fn(&mut Self) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        let mut expr = operand(self)?;

        while self.match_kind(operator) {
            let op = self.previous().clone();
            let right = operand(self)?;
            expr = Expr::Logical {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn unary(&mut self) -> ParseResult<Expr> {
        if self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let op = self.previous().clone();
            let operand = Box::new(self.nested(Self::unary)?);
            return Ok(Expr::Unary { op, operand });
        }

        self.call()
    }

    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;

        loop {
            if self.match_kind(TokenKind::LeftParen) {
                expr = self.finish_call(expr)?;
            } else if self.match_kind(TokenKind::Dot) {
                let name = self.consume(TokenKind::Identifier)?;
                expr = Expr::Get {
                    object: Box::new(expr),
                    name,
                };
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let mut arguments = Vec::new();

        if !self.check(TokenKind::RightParen) {
            loop {
                if arguments.len() == MAX_ARGUMENTS {
                    let diagnostic = Diagnostic::new(
                        ErrorKind::TooManyArguments,
                        self.peek().clone(),
                        vec![MAX_ARGUMENTS.to_string()],
                    );
                    self.report(diagnostic);
                }
                arguments.push(self.expression()?);
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }

        let paren = self.consume(TokenKind::RightParen)?;

        Ok(Expr::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        })
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        if self.match_any(&[
            TokenKind::False,
            TokenKind::True,
            TokenKind::Number,
            TokenKind::String,
        ]) {
            return Ok(Expr::Literal(self.previous().clone()));
        }

        if self.match_kind(TokenKind::SelfKw) {
            return Ok(Expr::This(self.previous().clone()));
        }

        if self.match_kind(TokenKind::Identifier) {
            return Ok(Expr::Variable(self.previous().clone()));
        }

        if self.match_kind(TokenKind::LeftParen) {
            let expr = self.expression()?;
            self.consume(TokenKind::RightParen)?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }

        Err(self.unexpected("primary expression"))
    }
}

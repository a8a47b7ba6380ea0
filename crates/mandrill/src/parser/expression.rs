//! Expression parsing: precedence climbing plus the prefix/infix functions

use tracing::trace;

use super::Parser;
use crate::ast::{Expression, Identifier, InfixOperator, PrefixOperator};
use crate::token::{TokenKind, TokenSource};

/// Binding strength of operators, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything binds tighter
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// Unary `-x` `!x`
    Prefix,
    /// `f(x)`, reserved
    Call,
}

impl Precedence {
    /// Precedence of a token in infix position.
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            _ => Precedence::Lowest,
        }
    }
}

fn prefix_operator(kind: TokenKind) -> Option<PrefixOperator> {
    match kind {
        TokenKind::Bang => Some(PrefixOperator::Bang),
        TokenKind::Minus => Some(PrefixOperator::Minus),
        _ => None,
    }
}

fn infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Plus),
        TokenKind::Minus => Some(InfixOperator::Minus),
        TokenKind::Asterisk => Some(InfixOperator::Asterisk),
        TokenKind::Slash => Some(InfixOperator::Slash),
        TokenKind::Lt => Some(InfixOperator::Lt),
        TokenKind::Gt => Some(InfixOperator::Gt),
        TokenKind::Eq => Some(InfixOperator::Eq),
        TokenKind::NotEq => Some(InfixOperator::NotEq),
        _ => None,
    }
}

impl<S: TokenSource> Parser<S> {
    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur.kind)
    }

    /// Parse an expression whose operators all bind tighter than `precedence`.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        self.nested(|p| p.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Option<Expression> {
        trace!(token = %self.cur.kind, ?precedence, "parse expression");

        let Some(prefix) = self.prefix_fns.get(&self.cur.kind).copied() else {
            let message = format!("no prefix parse function for {} found", self.cur.kind);
            self.push_error(message, &self.cur.clone());
            return None;
        };
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = self.infix_fns.get(&self.peek.kind).copied() else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Prefix Parse Functions
    // ═══════════════════════════════════════════════════════════════════

    pub(crate) fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::new(
            self.cur.literal.clone(),
        )))
    }

    pub(crate) fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.cur.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(value)),
            Err(_) => {
                let message = format!("could not parse {} as integer", self.cur.literal);
                self.push_error(message, &self.cur.clone());
                None
            }
        }
    }

    pub(crate) fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(self.cur_is(TokenKind::True)))
    }

    pub(crate) fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let operator = prefix_operator(self.cur.kind)?;
        self.next_token();

        let operand = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::prefix(operator, operand))
    }

    /// `( <expr> )`
    pub(crate) fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    /// `if (<condition>) { ... } [else { ... }]`
    pub(crate) fn parse_if_expression(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) || !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Some(Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    // ═══════════════════════════════════════════════════════════════════
    // Infix Parse Functions
    // ═══════════════════════════════════════════════════════════════════

    /// Binary operator, entered with the current token on the operator.
    ///
    /// The right operand is parsed at the operator's own precedence, so an
    /// equal-precedence operator after it is left for the caller's loop.
    /// That is what makes `a - b - c` group as `(a - b) - c`.
    pub(crate) fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let operator = infix_operator(self.cur.kind)?;
        let precedence = self.cur_precedence();
        self.next_token();

        let right = self.parse_expression(precedence)?;
        Some(Expression::infix(operator, left, right))
    }
}

//! Pratt parser from tokens to [`Program`]
//!
//! Each token kind that can start an expression has a prefix parse
//! function; each binary operator token has an infix parse function and a
//! [`Precedence`]. Both tables live on the parser instance and are filled
//! in by [`Parser::new`].
//!
//! Syntax errors are collected rather than returned: `parse_program`
//! always yields a `Program`, and callers must check [`Parser::errors`]
//! before trusting it.

mod error;
mod expression;

pub use error::{ParseError, ParseErrors};
pub use expression::Precedence;

use std::collections::HashMap;

use tracing::debug;

use crate::ast::{BlockStatement, Expression, Identifier, Program, Statement};
use crate::token::{Token, TokenKind, TokenSource};

/// Expressions and blocks nested deeper than this are rejected.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Starts an expression at the current token.
pub(crate) type PrefixParseFn<S> = fn(&mut Parser<S>) -> Option<Expression>;

/// Extends an already-parsed left operand at the current token.
pub(crate) type InfixParseFn<S> = fn(&mut Parser<S>, Expression) -> Option<Expression>;

/// Operator-precedence parser over any [`TokenSource`].
///
/// # Example
///
/// ```
/// use mandrill::{Lexer, Parser};
///
/// let mut parser = Parser::new(Lexer::new("let x = 1 + 2 * 3;"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
/// ```
pub struct Parser<S: TokenSource> {
    source: S,
    cur: Token,
    peek: Token,
    errors: Vec<ParseError>,

    /// Current expression/block nesting
    depth: usize,

    /// Set once the nesting limit is hit; the rest of the input is dropped
    aborted: bool,

    prefix_fns: HashMap<TokenKind, PrefixParseFn<S>>,
    infix_fns: HashMap<TokenKind, InfixParseFn<S>>,
}

impl<S: TokenSource> Parser<S> {
    /// Create a parser, priming the current and peek tokens.
    pub fn new(mut source: S) -> Self {
        let cur = source.next_token();
        let peek = source.next_token();

        let mut parser = Self {
            source,
            cur,
            peek,
            errors: Vec::new(),
            depth: 0,
            aborted: false,
            prefix_fns: HashMap::new(),
            infix_fns: HashMap::new(),
        };

        parser.register_prefix(TokenKind::Ident, Self::parse_identifier);
        parser.register_prefix(TokenKind::Int, Self::parse_integer_literal);
        parser.register_prefix(TokenKind::True, Self::parse_boolean);
        parser.register_prefix(TokenKind::False, Self::parse_boolean);
        parser.register_prefix(TokenKind::Bang, Self::parse_prefix_expression);
        parser.register_prefix(TokenKind::Minus, Self::parse_prefix_expression);
        parser.register_prefix(TokenKind::LParen, Self::parse_grouped_expression);
        parser.register_prefix(TokenKind::If, Self::parse_if_expression);

        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
        ] {
            parser.register_infix(kind, Self::parse_infix_expression);
        }

        parser
    }

    /// Register the function that starts an expression at `kind`.
    pub(crate) fn register_prefix(&mut self, kind: TokenKind, f: PrefixParseFn<S>) {
        self.prefix_fns.insert(kind, f);
    }

    /// Register the function that continues an expression at `kind`.
    pub(crate) fn register_infix(&mut self, kind: TokenKind, f: InfixParseFn<S>) {
        self.infix_fns.insert(kind, f);
    }

    /// Syntax errors recorded so far.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consume the parser, keeping its errors.
    pub fn into_errors(self) -> ParseErrors {
        ParseErrors(self.errors)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Program and Statements
    // ═══════════════════════════════════════════════════════════════════

    /// Parse statements until end of input.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.cur_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::LBrace => self.parse_block_statement().map(Statement::Block),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr> [;]`
    fn parse_let_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::new(self.cur.literal.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Let { name, value })
    }

    /// `return <expr> [;]`
    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();
        Some(Statement::Expression(expr))
    }

    /// `{ <statements> }`, entered with the current token on `{`.
    ///
    /// Leaves the current token on the closing `}`. Running out of input
    /// records an error but still yields the statements collected so far.
    pub(crate) fn parse_block_statement(&mut self) -> Option<BlockStatement> {
        self.nested(|p| {
            let mut block = BlockStatement::default();
            p.next_token();

            while !p.cur_is(TokenKind::RBrace) {
                if p.cur_is(TokenKind::Eof) {
                    p.unexpected(TokenKind::RBrace, &p.cur.clone());
                    break;
                }
                if let Some(stmt) = p.parse_statement() {
                    block.statements.push(stmt);
                }
                p.next_token();
            }

            Some(block)
        })
    }

    // ═══════════════════════════════════════════════════════════════════
    // Token Cursor
    // ═══════════════════════════════════════════════════════════════════

    pub(crate) fn next_token(&mut self) {
        let next = self.source.next_token();
        self.cur = std::mem::replace(&mut self.peek, next);
    }

    pub(crate) fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur.is(kind)
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advance if the peek token is `kind`, otherwise record an error.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.unexpected(kind, &self.peek.clone());
            false
        }
    }

    fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Diagnostics
    // ═══════════════════════════════════════════════════════════════════

    pub(crate) fn push_error(&mut self, message: impl Into<String>, token: &Token) {
        if self.aborted {
            return;
        }
        self.errors
            .push(ParseError::new(message).with_location(token.span));
    }

    fn unexpected(&mut self, expected: TokenKind, got: &Token) {
        self.push_error(
            format!(
                "expected next token to be {}, got {} instead",
                expected, got.kind
            ),
            got,
        );
    }

    /// Run `f` one nesting level deeper, bailing out past the limit.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            self.push_error("expression nested too deeply", &self.cur.clone());
            self.abort();
            return None;
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Drop the remaining input and silence further diagnostics.
    fn abort(&mut self) {
        self.aborted = true;
        while !self.cur_is(TokenKind::Eof) {
            self.next_token();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::token::{Span, TokenBuffer};
    use pretty_assertions::assert_eq;

    fn parse(src: &str) -> (Program, Vec<ParseError>) {
        let mut parser = Parser::new(Lexer::new(src));
        let program = parser.parse_program();
        (program, parser.errors().to_vec())
    }

    fn messages(src: &str) -> Vec<String> {
        parse(src).1.into_iter().map(|e| e.message).collect()
    }

    #[test]
    fn test_let_statements() {
        let (program, errors) = parse("let x = 5; let y = true; let foobar = y;");
        assert!(errors.is_empty());
        assert_eq!(
            program.statements,
            vec![
                Statement::Let {
                    name: Identifier::new("x"),
                    value: Expression::Integer(5),
                },
                Statement::Let {
                    name: Identifier::new("y"),
                    value: Expression::Boolean(true),
                },
                Statement::Let {
                    name: Identifier::new("foobar"),
                    value: Expression::ident("y"),
                },
            ]
        );
    }

    #[test]
    fn test_let_value_is_full_expression() {
        let (program, errors) = parse("let a = 1 + 2 * 3; a");
        assert!(errors.is_empty());
        assert_eq!(program.to_string(), "let a = (1 + (2 * 3)); a");
    }

    #[test]
    fn test_return_statements() {
        let (program, errors) = parse("return 5; return x + 1;");
        assert!(errors.is_empty());
        assert_eq!(program.to_string(), "return 5; return (x + 1);");
    }

    #[test]
    fn test_semicolons_are_optional() {
        let (program, errors) = parse("let x = 5\nreturn x");
        assert!(errors.is_empty());
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn test_let_missing_identifier() {
        let errors = messages("let = 5;");
        assert_eq!(errors[0], "expected next token to be IDENT, got = instead");
    }

    #[test]
    fn test_let_missing_assign() {
        let errors = messages("let x 5;");
        assert_eq!(errors, vec!["expected next token to be =, got INT instead"]);
    }

    #[test]
    fn test_let_missing_value_yields_no_statement() {
        let (program, errors) = parse("let x = ;");
        assert!(program.is_empty());
        assert_eq!(errors[0].message, "no prefix parse function for ; found");
    }

    #[test]
    fn test_error_location() {
        let (_, errors) = parse("let x 5;");
        assert_eq!(errors[0].location, Some(Span::new(1, 7)));
    }

    #[test]
    fn test_block_statement() {
        let (program, errors) = parse("{ let x = 1; x }");
        assert!(errors.is_empty());
        assert_eq!(
            program.statements,
            vec![Statement::Block(BlockStatement::new(vec![
                Statement::Let {
                    name: Identifier::new("x"),
                    value: Expression::Integer(1),
                },
                Statement::Expression(Expression::ident("x")),
            ]))]
        );
    }

    #[test]
    fn test_unterminated_block() {
        let (program, errors) = parse("{ 1; 2");
        assert_eq!(program.statements.len(), 1);
        assert_eq!(errors[0].message, "expected next token to be }, got EOF instead");
    }

    #[test]
    fn test_nesting_limit() {
        let src = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
        let (_, errors) = parse(&src);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "expression nested too deeply");
    }

    #[test]
    fn test_nesting_below_limit() {
        let src = format!("{}1{}", "(".repeat(100), ")".repeat(100));
        let (program, errors) = parse(&src);
        assert!(errors.is_empty());
        assert_eq!(program.statements, vec![Statement::Expression(Expression::Integer(1))]);
    }

    #[test]
    fn test_token_buffer_source() {
        let tokens = vec![
            Token::new(TokenKind::Int, "1", Span::new(1, 1)),
            Token::new(TokenKind::Plus, "+", Span::new(1, 3)),
            Token::new(TokenKind::Int, "2", Span::new(1, 5)),
        ];
        let mut parser = Parser::new(TokenBuffer::new(tokens));
        let program = parser.parse_program();
        assert!(parser.errors().is_empty());
        assert_eq!(program.to_string(), "(1 + 2)");
    }

    #[test]
    fn test_reparse_is_structurally_equal() {
        let src = "let a = -5 * (2 + b); if (a < 3) { return a; } else { !a }";
        let (first, _) = parse(src);
        let (second, _) = parse(src);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rendered_program_parses_back() {
        let src = "let a = 1 + 2; if (a > 1) { a } else { return 0; } { -a }";
        let (first, errors) = parse(src);
        assert!(errors.is_empty());
        let (second, errors) = parse(&first.to_string());
        assert!(errors.is_empty());
        assert_eq!(first, second);
    }
}

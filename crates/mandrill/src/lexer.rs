//! Source text to token stream

use logos::Logos;

use crate::token::{lookup_ident, Span, Token, TokenKind, TokenSource};

/// Raw lexeme classes recognized by logos.
///
/// Keywords are not listed here: they lex as identifiers and are
/// classified afterwards by [`lookup_ident`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LineTracker)]
#[logos(skip r"[ \t\r\f]+")]
enum RawToken {
    #[token("\n", newline)]
    Newline,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r"[0-9]+")]
    Int,

    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token(">")]
    Gt,
    #[token("<")]
    Lt,

    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
}

/// Line bookkeeping carried through the logos lexer.
#[derive(Debug, Clone, Copy, Default)]
struct LineTracker {
    /// Zero-based line number
    line: usize,
    /// Byte offset where the current line starts
    line_start: usize,
}

fn newline(lex: &mut logos::Lexer<RawToken>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

/// Tokenizer over a borrowed source string.
///
/// # Example
///
/// ```
/// use mandrill::{Lexer, TokenKind, TokenSource};
///
/// let mut lexer = Lexer::new("let x = 5;");
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().literal, "x");
/// ```
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, RawToken>,
}

impl<'source> Lexer<'source> {
    /// Create a lexer for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            inner: RawToken::lexer(source),
        }
    }

    fn span_at(&self, offset: usize) -> Span {
        let tracker = self.inner.extras;
        let column = self.inner.source()[tracker.line_start..offset]
            .chars()
            .count();
        Span::new(tracker.line + 1, column + 1)
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        let Some(raw) = self.inner.next() else {
            return Token::eof(self.span_at(self.inner.source().len()));
        };

        let span = self.span_at(self.inner.span().start);
        let literal = self.inner.slice();
        let kind = match raw {
            Ok(raw) => classify(raw, literal),
            Err(()) => TokenKind::Illegal,
        };
        Token::new(kind, literal, span)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, the end marker.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is(TokenKind::Eof)).then_some(token)
    }
}

fn classify(raw: RawToken, literal: &str) -> TokenKind {
    match raw {
        RawToken::Ident => lookup_ident(literal),
        RawToken::Int => TokenKind::Int,
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Asterisk => TokenKind::Asterisk,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        // Skipped by its callback, never yielded.
        RawToken::Newline => TokenKind::Illegal,
    }
}

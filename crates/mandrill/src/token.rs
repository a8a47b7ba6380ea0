//! Token model shared by the lexer and the parser

use std::fmt;

/// The closed set of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Repeats forever once the source is exhausted.
    Eof,
    /// A character the lexer does not recognize.
    Illegal,

    // ═══════════════════════════════════════════════════════════════════
    // Identifiers and Literals
    // ═══════════════════════════════════════════════════════════════════
    /// Identifier: `x`, `my_var`
    Ident,
    /// Integer literal: `42`
    Int,

    // ═══════════════════════════════════════════════════════════════════
    // Operators
    // ═══════════════════════════════════════════════════════════════════
    /// `=`
    Assign,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `>`
    Gt,
    /// `<`
    Lt,

    // ═══════════════════════════════════════════════════════════════════
    // Delimiters
    // ═══════════════════════════════════════════════════════════════════
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // ═══════════════════════════════════════════════════════════════════
    // Keywords
    // ═══════════════════════════════════════════════════════════════════
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
}

impl TokenKind {
    /// Stable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Gt => ">",
            TokenKind::Lt => "<",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reserved words, matched exactly against identifier-shaped lexemes.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

/// Classify an identifier-shaped lexeme as a keyword or a plain identifier.
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == ident)
        .map(|(_, kind)| *kind)
        .unwrap_or(TokenKind::Ident)
}

/// Position of a token's first character (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Line number
    pub line: usize,
    /// Column number, counted in characters
    pub column: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A single lexeme with its kind and source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What sort of token this is
    pub kind: TokenKind,
    /// The source text of the token (empty for `Eof`)
    pub literal: String,
    /// Where the token starts
    pub span: Span,
}

impl Token {
    /// Create a token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// The end-of-input marker at the given position.
    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, "", span)
    }

    /// Check the token kind.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Anything that can feed tokens to the parser.
///
/// Implementations must keep returning an `Eof` token once the
/// underlying input is exhausted.
pub trait TokenSource {
    /// Produce the next token.
    fn next_token(&mut self) -> Token;
}

/// A pre-lexed token buffer.
///
/// Useful for feeding the parser tokens that did not come from source
/// text. An `Eof` is synthesized after the last buffered token.
#[derive(Debug, Clone, Default)]
pub struct TokenBuffer {
    tokens: std::vec::IntoIter<Token>,
    last: Span,
}

impl TokenBuffer {
    /// Wrap a list of tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            last: Span::default(),
        }
    }
}

impl TokenSource for TokenBuffer {
    fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) => {
                self.last = token.span;
                token
            }
            None => Token::eof(self.last),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_keywords() {
        assert_eq!(lookup_ident("fn"), TokenKind::Function);
        assert_eq!(lookup_ident("let"), TokenKind::Let);
        assert_eq!(lookup_ident("true"), TokenKind::True);
        assert_eq!(lookup_ident("false"), TokenKind::False);
        assert_eq!(lookup_ident("if"), TokenKind::If);
        assert_eq!(lookup_ident("else"), TokenKind::Else);
        assert_eq!(lookup_ident("return"), TokenKind::Return);
    }

    #[test]
    fn test_lookup_identifier() {
        assert_eq!(lookup_ident("letter"), TokenKind::Ident);
        assert_eq!(lookup_ident("iff"), TokenKind::Ident);
        assert_eq!(lookup_ident("Let"), TokenKind::Ident);
    }

    #[test]
    fn test_token_kind_names() {
        assert_eq!(TokenKind::Ident.to_string(), "IDENT");
        assert_eq!(TokenKind::NotEq.to_string(), "!=");
        assert_eq!(TokenKind::Function.to_string(), "FUNCTION");
    }

    #[test]
    fn test_token_buffer_repeats_eof() {
        let mut buffer = TokenBuffer::new(vec![Token::new(TokenKind::Int, "5", Span::new(1, 1))]);
        assert_eq!(buffer.next_token().kind, TokenKind::Int);
        assert_eq!(buffer.next_token().kind, TokenKind::Eof);
        assert_eq!(buffer.next_token().kind, TokenKind::Eof);
    }
}

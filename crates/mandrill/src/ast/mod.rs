//! Abstract syntax tree
//!
//! A closed tree of statements and expressions. Nodes own their children
//! exclusively and are never mutated after the parser builds them.

mod display;

/// Root of a parsed source text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order
    pub statements: Vec<Statement>,
}

impl Program {
    /// Create a program from statements.
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Check if the program has no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// Name being bound
        name: Identifier,
        /// Bound expression
        value: Expression,
    },

    /// `return <value>;`
    Return {
        /// Returned expression
        value: Expression,
    },

    /// An expression in statement position.
    Expression(Expression),

    /// `{ ... }`
    Block(BlockStatement),
}

/// A braced sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockStatement {
    /// Statements in source order
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    /// Create a block from statements.
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

/// A bare name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The identifier text
    pub name: String,
}

impl Identifier {
    /// Create an identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Variable reference
    Identifier(Identifier),

    /// Integer literal
    Integer(i64),

    /// `true` or `false`
    Boolean(bool),

    /// `<op><operand>`
    Prefix {
        /// Unary operator
        operator: PrefixOperator,
        /// Operand expression
        operand: Box<Expression>,
    },

    /// `<left> <op> <right>`
    Infix {
        /// Binary operator
        operator: InfixOperator,
        /// Left operand
        left: Box<Expression>,
        /// Right operand
        right: Box<Expression>,
    },

    /// `if (<condition>) { ... } else { ... }`
    If {
        /// Condition expression
        condition: Box<Expression>,
        /// Block evaluated when the condition is truthy
        consequence: BlockStatement,
        /// Block evaluated otherwise, if present
        alternative: Option<BlockStatement>,
    },
}

impl Expression {
    /// Build a prefix expression.
    pub fn prefix(operator: PrefixOperator, operand: Expression) -> Self {
        Expression::Prefix {
            operator,
            operand: Box::new(operand),
        }
    }

    /// Build an infix expression.
    pub fn infix(operator: InfixOperator, left: Expression, right: Expression) -> Self {
        Expression::Infix {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Build an identifier reference.
    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    /// `!`
    Bang,
    /// `-`
    Minus,
}

impl PrefixOperator {
    /// Source text of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            PrefixOperator::Bang => "!",
            PrefixOperator::Minus => "-",
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfixOperator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
}

impl InfixOperator {
    /// Source text of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            InfixOperator::Plus => "+",
            InfixOperator::Minus => "-",
            InfixOperator::Asterisk => "*",
            InfixOperator::Slash => "/",
            InfixOperator::Lt => "<",
            InfixOperator::Gt => ">",
            InfixOperator::Eq => "==",
            InfixOperator::NotEq => "!=",
        }
    }
}

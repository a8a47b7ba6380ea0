//! Canonical source rendering for AST nodes

use std::fmt;

use super::*;

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

/// Statements separated by single spaces, so the output parses again.
fn write_statements(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for (i, stmt) in statements.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", stmt)?;
    }
    Ok(())
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {} = {};", name, value),
            Statement::Return { value } => write!(f, "return {};", value),
            Statement::Expression(expr) => write!(f, "{}", expr),
            Statement::Block(block) => write!(f, "{}", block),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{}}");
        }
        write!(f, "{{ ")?;
        write_statements(f, &self.statements)?;
        write!(f, " }}")
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::Integer(n) => write!(f, "{}", n),
            Expression::Boolean(b) => write!(f, "{}", b),
            // Parenthesized so the grouping the parser chose is visible
            Expression::Prefix { operator, operand } => write!(f, "({}{})", operator, operand),
            Expression::Infix {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if ({}) {}", condition, consequence)?;
                if let Some(alt) = alternative {
                    write!(f, " else {}", alt)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_let_statement_display() {
        let program = Program::new(vec![Statement::Let {
            name: Identifier::new("myVar"),
            value: Expression::ident("anotherVar"),
        }]);
        assert_eq!(program.to_string(), "let myVar = anotherVar;");
    }

    #[test]
    fn test_return_statement_display() {
        let stmt = Statement::Return {
            value: Expression::Integer(5),
        };
        assert_eq!(stmt.to_string(), "return 5;");
    }

    #[test]
    fn test_nested_operators_display() {
        let expr = Expression::infix(
            InfixOperator::Asterisk,
            Expression::prefix(PrefixOperator::Minus, Expression::ident("a")),
            Expression::ident("b"),
        );
        assert_eq!(expr.to_string(), "((-a) * b)");
    }

    #[test]
    fn test_if_else_display() {
        let expr = Expression::If {
            condition: Box::new(Expression::infix(
                InfixOperator::Lt,
                Expression::ident("x"),
                Expression::ident("y"),
            )),
            consequence: BlockStatement::new(vec![Statement::Expression(Expression::ident("x"))]),
            alternative: Some(BlockStatement::new(vec![Statement::Expression(
                Expression::ident("y"),
            )])),
        };
        assert_eq!(expr.to_string(), "if ((x < y)) { x } else { y }");
    }

    #[test]
    fn test_empty_block_display() {
        let stmt = Statement::Block(BlockStatement::default());
        assert_eq!(stmt.to_string(), "{}");
    }
}

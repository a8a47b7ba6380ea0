//! Identifier lookup

use crate::ast::Identifier;
use crate::value::Value;
use crate::Environment;

/// Resolve a name against the environment chain.
pub(crate) fn eval_identifier(ident: &Identifier, env: &Environment) -> Value {
    env.get(&ident.name)
        .cloned()
        .unwrap_or_else(|| Value::error(format!("identifier not found: {}", ident.name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_identifier() {
        let mut env = Environment::new();
        env.set("x", Value::Integer(3));
        assert_eq!(eval_identifier(&Identifier::new("x"), &env), Value::Integer(3));
    }

    #[test]
    fn test_unbound_identifier() {
        let env = Environment::new();
        assert_eq!(
            eval_identifier(&Identifier::new("foobar"), &env),
            Value::error("identifier not found: foobar")
        );
    }

    #[test]
    fn test_identifier_in_outer_scope() {
        let mut global = Environment::new();
        global.set("x", Value::Integer(3));
        let inner = Environment::enclosed(global);
        assert_eq!(eval_identifier(&Identifier::new("x"), &inner), Value::Integer(3));
    }
}

//! Runtime environment managing variable bindings

use indexmap::IndexMap;

use crate::value::Value;

/// Name → value bindings with an optional enclosing scope.
///
/// Lookups walk outward through enclosing scopes; [`set`](Self::set)
/// always writes the innermost one. Bindings are never removed, and an
/// environment can be reused across evaluations (a REPL keeps one for the
/// whole session).
///
/// # Example
///
/// ```
/// use mandrill::{Environment, Value};
///
/// let mut global = Environment::new();
/// global.set("x", Value::Integer(1));
///
/// let mut inner = Environment::enclosed(global);
/// inner.set("y", Value::Integer(2));
/// inner.set("x", Value::Integer(10)); // Shadows outer x
///
/// assert_eq!(inner.get("x"), Some(&Value::Integer(10)));
/// assert_eq!(inner.get("y"), Some(&Value::Integer(2)));
///
/// let global = inner.into_outer().unwrap();
/// assert_eq!(global.get("x"), Some(&Value::Integer(1)));
/// assert_eq!(global.get("y"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Bindings of this scope, in definition order
    store: IndexMap<String, Value>,

    /// Enclosing scope
    outer: Option<Box<Environment>>,
}

impl Environment {
    /// Create a new empty top-level environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scope nested inside `outer`.
    pub fn enclosed(outer: Environment) -> Self {
        Self {
            store: IndexMap::new(),
            outer: Some(Box::new(outer)),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up a binding by name, innermost scope first.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self.store.get(name) {
            Some(value) => Some(value),
            None => self.outer.as_deref().and_then(|outer| outer.get(name)),
        }
    }

    /// Check if a binding exists in any scope.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Check if a binding exists in the innermost scope only.
    pub fn contains_in_current_scope(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Definition
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` in the innermost scope, returning the bound value.
    ///
    /// Rebinding a name in the same scope replaces the old value but keeps
    /// its original position in definition order.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Value {
        self.store.insert(name.into(), value.clone());
        value
    }

    // ═══════════════════════════════════════════════════════════════════
    // Scope Chain
    // ═══════════════════════════════════════════════════════════════════

    /// The enclosing scope, if any.
    pub fn outer(&self) -> Option<&Environment> {
        self.outer.as_deref()
    }

    /// Discard this scope and hand back the enclosing one.
    pub fn into_outer(self) -> Option<Environment> {
        self.outer.map(|outer| *outer)
    }

    /// Number of scopes in the chain, this one included.
    pub fn depth(&self) -> usize {
        1 + self.outer.as_ref().map_or(0, |outer| outer.depth())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Iterate over the innermost scope's bindings in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.store.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Every visible binding name, outermost scope first, without
    /// duplicates for shadowed names.
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.outer.as_ref().map_or_else(Vec::new, |outer| outer.names());
        for name in self.store.keys() {
            if !names.contains(&name.as_str()) {
                names.push(name.as_str());
            }
        }
        names
    }

    /// Number of bindings in the innermost scope.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the innermost scope has no bindings.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::TRUE;

    #[test]
    fn test_set_returns_bound_value() {
        let mut env = Environment::new();
        assert_eq!(env.set("x", Value::Integer(5)), Value::Integer(5));
        assert_eq!(env.get("x"), Some(&Value::Integer(5)));
    }

    #[test]
    fn test_rebinding_replaces() {
        let mut env = Environment::new();
        env.set("x", Value::Integer(1));
        env.set("y", TRUE);
        env.set("x", Value::Integer(2));
        assert_eq!(env.len(), 2);
        assert_eq!(env.get("x"), Some(&Value::Integer(2)));
        assert_eq!(env.names(), vec!["x", "y"]);
    }

    #[test]
    fn test_lookup_walks_outward() {
        let mut global = Environment::new();
        global.set("a", Value::Integer(1));
        let inner = Environment::enclosed(global);

        assert_eq!(inner.get("a"), Some(&Value::Integer(1)));
        assert!(inner.contains("a"));
        assert!(!inner.contains_in_current_scope("a"));
        assert_eq!(inner.depth(), 2);
    }

    #[test]
    fn test_set_writes_innermost() {
        let mut global = Environment::new();
        global.set("a", Value::Integer(1));
        let mut inner = Environment::enclosed(global);
        inner.set("a", Value::Integer(2));

        assert_eq!(inner.get("a"), Some(&Value::Integer(2)));
        assert_eq!(inner.outer().and_then(|o| o.get("a")), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_names_across_scopes() {
        let mut global = Environment::new();
        global.set("a", Value::Integer(1));
        global.set("b", Value::Integer(2));
        let mut inner = Environment::enclosed(global);
        inner.set("c", Value::Integer(3));
        inner.set("a", Value::Integer(4));

        assert_eq!(inner.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_into_outer_of_top_level() {
        assert!(Environment::new().into_outer().is_none());
    }
}

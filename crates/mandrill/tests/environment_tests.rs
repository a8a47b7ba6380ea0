//! Environment tests

use mandrill::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════
// Basic Operations
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_environment_new_is_empty() {
    let env = Environment::new();
    assert!(env.is_empty());
    assert_eq!(env.len(), 0);
    assert_eq!(env.depth(), 1);
    assert!(env.outer().is_none());
}

#[test]
fn test_environment_set_and_get() {
    let mut env = Environment::new();
    assert_eq!(env.set("x", Value::Integer(42)), Value::Integer(42));

    assert_eq!(env.get("x"), Some(&Value::Integer(42)));
    assert_eq!(env.get("y"), None);
    assert!(env.contains("x"));
    assert!(!env.contains("y"));
}

#[test]
fn test_environment_rebinding_keeps_order() {
    let mut env = Environment::new();
    env.set("a", Value::Integer(1));
    env.set("b", Value::Integer(2));
    env.set("a", Value::Integer(3));

    let bindings: Vec<(&str, &Value)> = env.iter().collect();
    assert_eq!(
        bindings,
        vec![("a", &Value::Integer(3)), ("b", &Value::Integer(2))]
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Scope Chain
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_enclosed_lookup_walks_outward() {
    let mut global = Environment::new();
    global.set("x", Value::Integer(1));
    global.set("y", TRUE);

    let mut inner = Environment::enclosed(global);
    inner.set("x", Value::Integer(2));

    assert_eq!(inner.depth(), 2);
    assert_eq!(inner.get("x"), Some(&Value::Integer(2)));
    assert_eq!(inner.get("y"), Some(&TRUE));
    assert!(inner.contains_in_current_scope("x"));
    assert!(!inner.contains_in_current_scope("y"));
    assert_eq!(inner.names(), vec!["x", "y"]);
    assert_eq!(inner.len(), 1);
}

#[test]
fn test_set_never_touches_outer_scope() {
    let mut global = Environment::new();
    global.set("x", Value::Integer(1));

    let mut inner = Environment::enclosed(global);
    inner.set("x", Value::Integer(99));

    let global = inner.into_outer().unwrap();
    assert_eq!(global.get("x"), Some(&Value::Integer(1)));
}

#[test]
fn test_program_in_enclosed_scope() {
    let mut global = Environment::new();
    run("let base = 10;", &mut global).unwrap();

    let mut inner = Environment::enclosed(global);
    assert_eq!(run("let y = base * 2; y + 1", &mut inner).unwrap(), Value::Integer(21));

    let global = inner.into_outer().unwrap();
    assert!(!global.contains("y"));
}

// ═══════════════════════════════════════════════════════════════════════
// Session Reuse
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_environment_reused_across_runs() {
    let mut env = Environment::new();
    run("let a = 5;", &mut env).unwrap();
    run("let b = a * 2;", &mut env).unwrap();

    assert_eq!(run("b + a", &mut env).unwrap(), Value::Integer(15));
    assert_eq!(env.names(), vec!["a", "b"]);
}

#[test]
fn test_failed_run_keeps_earlier_bindings() {
    let mut env = Environment::new();
    run("let a = 1;", &mut env).unwrap();

    assert!(run("let b = a + true;", &mut env).is_err());
    assert_eq!(env.get("a"), Some(&Value::Integer(1)));
    assert!(!env.contains("b"));
}

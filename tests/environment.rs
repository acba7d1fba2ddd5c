use ember::{
    Environment, ScopeId, Value,
    error::ResolutionError,
    interpreter::value::{function::UserFunction, object::ObjectValue},
};
use pretty_assertions::assert_eq;

#[test]
fn declare_then_lookup() {
    let mut env = Environment::global();

    assert_eq!(env.declare_var(ScopeId::GLOBAL, "x", Value::Number(5.0), false, 1),
               Ok(Value::Number(5.0)));
    assert_eq!(env.lookup_var(ScopeId::GLOBAL, "x", 2), Ok(Value::Number(5.0)));
}

#[test]
fn redeclaring_in_the_same_scope_fails() {
    let mut env = Environment::new();
    env.declare_var(ScopeId::GLOBAL, "x", Value::Null, false, 1).unwrap();

    assert_eq!(env.declare_var(ScopeId::GLOBAL, "x", Value::Null, false, 4),
               Err(ResolutionError::Redeclaration { name: "x".to_string(),
                                                    line: 4, }));
}

#[test]
fn unknown_names_fail_to_resolve() {
    let mut env = Environment::global();
    let child = env.push_scope(ScopeId::GLOBAL);

    assert_eq!(env.resolve(child, "missing", 7),
               Err(ResolutionError::UnknownVariable { name: "missing".to_string(),
                                                      line: 7, }));
    assert!(env.lookup_var(child, "missing", 7).is_err());
    assert!(env.assign_var(child, "missing", Value::Null, 7).is_err());
}

#[test]
fn child_scopes_see_their_ancestors() {
    let mut env = Environment::global();
    let child = env.push_scope(ScopeId::GLOBAL);
    let grandchild = env.push_scope(child);

    assert_eq!(env.parent(grandchild), Some(child));
    assert_eq!(env.parent(child), Some(ScopeId::GLOBAL));
    assert_eq!(env.parent(ScopeId::GLOBAL), None);

    assert_eq!(env.resolve(grandchild, "true", 1), Ok(ScopeId::GLOBAL));
    assert_eq!(env.lookup_var(grandchild, "false", 1), Ok(Value::Bool(false)));
}

#[test]
fn shadowing_is_per_scope() {
    let mut env = Environment::global();
    env.declare_var(ScopeId::GLOBAL, "x", Value::Number(1.0), true, 1).unwrap();
    let child = env.push_scope(ScopeId::GLOBAL);

    env.declare_var(child, "x", Value::Number(2.0), false, 2).unwrap();

    assert_eq!(env.resolve(child, "x", 3), Ok(child));
    assert_eq!(env.lookup_var(child, "x", 3), Ok(Value::Number(2.0)));
    assert_eq!(env.lookup_var(ScopeId::GLOBAL, "x", 3), Ok(Value::Number(1.0)));
}

#[test]
fn assignment_updates_the_declaring_scope() {
    let mut env = Environment::global();
    env.declare_var(ScopeId::GLOBAL, "x", Value::Number(1.0), false, 1).unwrap();
    let child = env.push_scope(ScopeId::GLOBAL);

    assert_eq!(env.assign_var(child, "x", Value::Number(9.0), 2), Ok(Value::Number(9.0)));

    assert_eq!(env.resolve(child, "x", 3), Ok(ScopeId::GLOBAL));
    assert_eq!(env.lookup_var(ScopeId::GLOBAL, "x", 3), Ok(Value::Number(9.0)));
}

#[test]
fn constants_cannot_be_reassigned() {
    let mut env = Environment::global();
    env.declare_var(ScopeId::GLOBAL, "k", Value::Number(1.0), true, 1).unwrap();
    let child = env.push_scope(ScopeId::GLOBAL);

    assert!(env.is_constant(ScopeId::GLOBAL, "k"));
    assert!(!env.is_constant(child, "k"));
    assert_eq!(env.assign_var(child, "k", Value::Number(2.0), 5),
               Err(ResolutionError::ConstantReassignment { name: "k".to_string(),
                                                           line: 5, }));
    assert_eq!(env.lookup_var(child, "k", 6), Ok(Value::Number(1.0)));
}

#[test]
fn shadowing_a_constant_makes_a_mutable_binding() {
    let mut env = Environment::global();
    let child = env.push_scope(ScopeId::GLOBAL);

    env.declare_var(child, "null", Value::Number(0.0), false, 1).unwrap();

    assert_eq!(env.assign_var(child, "null", Value::Number(1.0), 2), Ok(Value::Number(1.0)));
    assert_eq!(env.lookup_var(ScopeId::GLOBAL, "null", 3), Ok(Value::Null));
}

#[test]
fn new_environment_has_no_builtins() {
    let env = Environment::new();

    assert_eq!(env.len(), 1);
    assert!(!env.is_empty());
    assert!(env.lookup_var(ScopeId::GLOBAL, "true", 1).is_err());
}

fn closure(name: &str, scope: ScopeId) -> Value {
    Value::from(UserFunction { name: name.to_string(),
                               parameters: Vec::new(),
                               body: Vec::new(),
                               scope,
                               line: 1 })
}

#[test]
fn release_drops_call_scopes() {
    let mut env = Environment::global();
    let frame = env.frame();
    let child = env.push_scope(ScopeId::GLOBAL);
    env.push_scope(child);

    assert_eq!(env.len(), 3);
    assert!(env.release(frame, Some(&Value::Number(1.0))));
    assert_eq!(env.len(), 1);
}

#[test]
fn release_keeps_scopes_reachable_from_the_result() {
    let mut env = Environment::global();
    let frame = env.frame();
    let child = env.push_scope(ScopeId::GLOBAL);
    env.declare_var(child, "kept", Value::Number(3.0), false, 1).unwrap();
    env.record_closure();

    assert!(!env.release(frame, Some(&closure("inner", child))));
    assert_eq!(env.len(), 2);
    assert_eq!(env.lookup_var(child, "kept", 2), Ok(Value::Number(3.0)));
}

#[test]
fn release_keeps_scopes_reachable_from_an_older_binding() {
    let mut env = Environment::global();
    let frame = env.frame();
    let child = env.push_scope(ScopeId::GLOBAL);
    env.record_closure();

    let mut holder = ObjectValue::new();
    holder.insert("callback", closure("inner", child));
    env.declare_var(ScopeId::GLOBAL, "holder", holder.into(), false, 1).unwrap();

    assert!(!env.release(frame, None));
    assert_eq!(env.len(), 2);
}

#[test]
fn release_drops_closures_nothing_refers_to() {
    let mut env = Environment::global();
    let frame = env.frame();
    let child = env.push_scope(ScopeId::GLOBAL);
    env.declare_var(child, "inner", closure("inner", child), true, 1).unwrap();
    env.record_closure();

    assert!(env.release(frame, Some(&Value::Null)));
    assert_eq!(env.len(), 1);
}

#[test]
fn release_ignores_functions_from_older_scopes() {
    let mut env = Environment::global();
    let outer = env.push_scope(ScopeId::GLOBAL);
    let frame = env.frame();
    env.push_scope(outer);
    env.record_closure();

    assert!(env.release(frame, Some(&closure("outer", outer))));
    assert_eq!(env.len(), 2);
}

#[test]
fn release_never_drops_the_root() {
    let mut env = Environment::global();
    let frame = env.frame();

    assert!(env.release(frame, None));
    assert_eq!(env.len(), 1);
    assert_eq!(env.lookup_var(ScopeId::GLOBAL, "true", 1), Ok(Value::Bool(true)));
}

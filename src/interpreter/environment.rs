use std::collections::{HashMap, HashSet};

use crate::{error::ResolutionError, interpreter::value::core::Value};

/// Handle to a scope inside an [`Environment`].
///
/// Handles are only meaningful for the environment that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The root scope every environment starts with.
    pub const GLOBAL: Self = Self(0);
}

/// A single lexical scope.
#[derive(Debug, Default)]
struct Scope {
    parent:    Option<ScopeId>,
    variables: HashMap<String, Value>,
    constants: HashSet<String>,
}

/// Arena state recorded before a call, used to release the call's scopes
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    len:      usize,
    closures: usize,
}

/// All scopes of a running program, stored in one arena.
///
/// Every scope except the root has a parent, and a parent is always stored
/// before its children. Lookups walk from a scope towards the root; writes
/// land in the scope that declared the name.
///
/// Call scopes are pushed on entry and released with
/// [`Environment::release`] on exit, unless a value that outlives the call
/// still holds a function declared in one of them.
#[derive(Debug)]
pub struct Environment {
    scopes:   Vec<Scope>,
    closures: usize,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding a single, empty root scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes:   vec![Scope::default()],
               closures: 0, }
    }

    /// Creates a root environment seeded with the builtin constants `true`,
    /// `false` and `null`.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::{
    ///     environment::{Environment, ScopeId},
    ///     value::core::Value,
    /// };
    ///
    /// let env = Environment::global();
    ///
    /// assert_eq!(env.lookup_var(ScopeId::GLOBAL, "true", 1), Ok(Value::Bool(true)));
    /// assert_eq!(env.lookup_var(ScopeId::GLOBAL, "null", 1), Ok(Value::Null));
    /// assert!(env.is_constant(ScopeId::GLOBAL, "false"));
    /// ```
    #[must_use]
    pub fn global() -> Self {
        let mut env = Self::new();
        for (name, value) in [("true", Value::Bool(true)),
                              ("false", Value::Bool(false)),
                              ("null", Value::Null)]
        {
            env.bind(ScopeId::GLOBAL, name, value, true);
        }
        env
    }

    /// Creates a child scope of `parent` and returns its handle.
    pub fn push_scope(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope { parent: Some(parent),
                                 ..Scope::default() });
        tracing::trace!(scope = id.0, parent = parent.0, "pushed scope");
        id
    }

    /// Returns the parent of `scope`, or `None` for the root.
    #[must_use]
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scope(scope).parent
    }

    /// Number of live scopes, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Always `false`: the root scope is never released.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Declares `name` in `scope`.
    ///
    /// Only `scope` itself is checked: a name bound in an ancestor may be
    /// shadowed.
    ///
    /// # Errors
    /// `Redeclaration` if `scope` already binds `name`.
    ///
    /// # Returns
    /// The bound value.
    pub fn declare_var(&mut self,
                       scope: ScopeId,
                       name: &str,
                       value: Value,
                       constant: bool,
                       line: usize)
                       -> Result<Value, ResolutionError> {
        if self.scope(scope).variables.contains_key(name) {
            return Err(ResolutionError::Redeclaration { name: name.to_string(),
                                                        line });
        }

        tracing::debug!(name, constant, "declared variable");
        self.bind(scope, name, value.clone(), constant);
        Ok(value)
    }

    /// Finds the nearest scope, starting at `scope` and moving towards the
    /// root, that binds `name`.
    ///
    /// # Errors
    /// `UnknownVariable` if no scope in the chain binds `name`.
    pub fn resolve(&self, scope: ScopeId, name: &str, line: usize) -> Result<ScopeId, ResolutionError> {
        let mut current = Some(scope);

        while let Some(id) = current {
            let candidate = self.scope(id);
            if candidate.variables.contains_key(name) {
                return Ok(id);
            }
            current = candidate.parent;
        }

        Err(ResolutionError::UnknownVariable { name: name.to_string(),
                                               line })
    }

    /// Overwrites the binding of `name` in the scope that declared it.
    ///
    /// Assignment never creates a binding in `scope` itself.
    ///
    /// # Errors
    /// - `UnknownVariable` if `name` is not bound anywhere in the chain.
    /// - `ConstantReassignment` if the declaring scope marked it constant.
    ///
    /// # Returns
    /// The assigned value.
    pub fn assign_var(&mut self,
                      scope: ScopeId,
                      name: &str,
                      value: Value,
                      line: usize)
                      -> Result<Value, ResolutionError> {
        let owner = self.resolve(scope, name, line)?;
        let owner = self.scope_mut(owner);

        if owner.constants.contains(name) {
            return Err(ResolutionError::ConstantReassignment { name: name.to_string(),
                                                               line });
        }

        tracing::debug!(name, "assigned variable");
        owner.variables.insert(name.to_string(), value.clone());
        Ok(value)
    }

    /// Returns the current value of `name` as seen from `scope`.
    ///
    /// # Errors
    /// `UnknownVariable` if `name` is not bound anywhere in the chain.
    pub fn lookup_var(&self, scope: ScopeId, name: &str, line: usize) -> Result<Value, ResolutionError> {
        let owner = self.resolve(scope, name, line)?;
        self.scope(owner)
            .variables
            .get(name)
            .cloned()
            .ok_or_else(|| ResolutionError::UnknownVariable { name: name.to_string(),
                                                              line })
    }

    /// Whether `name` is bound as a constant directly in `scope`.
    #[must_use]
    pub fn is_constant(&self, scope: ScopeId, name: &str) -> bool {
        self.scope(scope).constants.contains(name)
    }

    /// Records that a user function value was created.
    pub fn record_closure(&mut self) {
        self.closures += 1;
    }

    /// Snapshot of the arena taken before pushing a call scope.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame { len:      self.scopes.len(),
                closures: self.closures, }
    }

    /// Drops every scope created since `frame` was taken, unless one of them
    /// is still reachable.
    ///
    /// A scope stays reachable through a user function declared in it. The
    /// values checked are `result`, the value the call produced, and every
    /// binding in the scopes older than `frame`, including functions nested in
    /// objects. When no function was declared since `frame`, nothing can
    /// reach the new scopes and they are dropped without a scan. Retained
    /// scopes are kept for the lifetime of the environment.
    ///
    /// # Returns
    /// `true` if the scopes were released.
    pub fn release(&mut self, frame: Frame, result: Option<&Value>) -> bool {
        let mark = frame.len.max(1);
        if mark >= self.scopes.len() {
            return true;
        }

        if self.closures != frame.closures {
            let reachable = result.is_some_and(|value| reaches(value, mark))
                            || self.scopes[..mark].iter()
                                                  .flat_map(|scope| scope.variables.values())
                                                  .any(|value| reaches(value, mark));
            if reachable {
                tracing::trace!(mark, live = self.scopes.len(), "retained reachable scopes");
                return false;
            }
        }

        self.scopes.truncate(mark);
        true
    }

    fn bind(&mut self, scope: ScopeId, name: &str, value: Value, constant: bool) {
        let scope = self.scope_mut(scope);
        scope.variables.insert(name.to_string(), value);
        if constant {
            scope.constants.insert(name.to_string());
        }
    }

    fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }

    fn scope_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id.0]
    }
}

/// Whether `value` holds a user function declared in a scope at or above
/// `mark`.
fn reaches(value: &Value, mark: usize) -> bool {
    match value {
        Value::Function(function) => function.scope.0 >= mark,
        Value::Object(object) => object.iter().any(|(_, value)| reaches(value, mark)),
        _ => false,
    }
}

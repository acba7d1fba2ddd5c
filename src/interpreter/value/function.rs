use crate::{
    ast::Statement,
    interpreter::{
        environment::{Environment, ScopeId},
        evaluator::core::EvalResult,
        value::core::Value,
    },
};

/// Signature of a host-provided function.
///
/// A native receives the evaluated arguments, the environment together with
/// the scope the call was made from, and the line of the call for error
/// reporting.
pub type NativeFn = fn(&[Value], &mut Environment, ScopeId, usize) -> EvalResult<Value>;

/// A function implemented by the host rather than in source text.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    /// Name the function is registered under in the global scope.
    pub name: &'static str,
    /// The implementation.
    pub func: NativeFn,
}

impl NativeFunction {
    /// Creates a native function binding.
    #[must_use]
    pub const fn new(name: &'static str, func: NativeFn) -> Self {
        Self { name, func }
    }
}

impl std::fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeFunction")
         .field("name", &self.name)
         .finish_non_exhaustive()
    }
}

// Natives are registered once under a unique name, so the name identifies
// the function.
impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// A function whose body is interpreted.
///
/// The function keeps the scope it was declared in; each call evaluates the
/// body in a fresh child of that scope.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFunction {
    /// The declared name.
    pub name:       String,
    /// Parameter names, bound positionally.
    pub parameters: Vec<String>,
    /// Statements evaluated on each call.
    pub body:       Vec<Statement>,
    /// The scope active at declaration time.
    pub scope:      ScopeId,
    /// Line of the declaration.
    pub line:       usize,
}

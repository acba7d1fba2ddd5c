use thiserror::Error;

/// Errors raised by scope operations on the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// No scope in the chain binds the name.
    #[error("Error on line {line}: Cannot resolve '{name}' as it does not exist.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The name is already bound in the same scope.
    #[error("Error on line {line}: Cannot declare variable '{name}' as it is already defined.")]
    Redeclaration {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The name was declared with `const`.
    #[error("Error on line {line}: Cannot reassign to variable '{name}' as it was declared constant.")]
    ConstantReassignment {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A name could not be declared, resolved or assigned.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    /// The syntax tree contains a node the evaluator has no rule for.
    #[error("Error on line {line}: {kind} has not yet been set up for interpretation.")]
    Unsupported {
        /// The kind of node.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left-hand side of an assignment was not a plain identifier.
    #[error("Error on line {line}: Invalid left-hand side in assignment expression.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to call a value that is not a function.
    #[error("Error on line {line}: Cannot call value that is not a function: {value}.")]
    NotCallable {
        /// Rendering of the value that was called.
        value: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A native binding reported a failure.
    #[error("Error on line {line}: Native function '{name}' failed: {message}.")]
    Native {
        /// Name the native function is registered under.
        name:    &'static str,
        /// Details reported by the native function.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

use crate::{
    ast::{Expr, Program, Statement},
    error::{Error, EvalError},
    interpreter::{
        environment::{Environment, ScopeId},
        evaluator::native::NATIVE_FUNCTIONS,
        parser::core::parse,
        value::{core::Value, function::NativeFunction},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the runtime evaluation state.
///
/// `Interpreter` owns the scope arena. It is created once and reused for
/// every program evaluated against it, so declarations made by one call to
/// [`Interpreter::run`] remain visible to the next.
#[derive(Debug)]
pub struct Interpreter {
    /// All scopes of the running program. The global scope is
    /// [`ScopeId::GLOBAL`].
    pub environment: Environment,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter whose global scope holds the builtin constants
    /// and the default native functions (`print`, `time`).
    #[must_use]
    pub fn new() -> Self {
        Self::with_natives(NATIVE_FUNCTIONS)
    }

    /// Creates an interpreter whose global scope holds only `true`, `false`
    /// and `null`.
    #[must_use]
    pub fn empty() -> Self {
        Self { environment: Environment::global() }
    }

    /// Creates an interpreter with the builtin constants and the given native
    /// functions, each declared as a global constant.
    ///
    /// A native whose name is already taken is skipped.
    #[must_use]
    pub fn with_natives(natives: &[NativeFunction]) -> Self {
        let mut interpreter = Self::empty();
        for native in natives {
            if let Err(error) = interpreter.environment
                                           .declare_var(ScopeId::GLOBAL,
                                                        native.name,
                                                        Value::NativeFunction(*native),
                                                        true,
                                                        0)
            {
                tracing::warn!(%error, "skipped native function");
            }
        }
        interpreter
    }

    /// Parses `source` and evaluates it in the global scope.
    ///
    /// # Errors
    /// Returns the first lexical, syntax or evaluation error.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::{evaluator::core::Interpreter, value::core::Value};
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.run("let x = 5;").unwrap();
    ///
    /// assert_eq!(interpreter.run("x * 2").unwrap(), Value::Number(10.0));
    /// ```
    pub fn run(&mut self, source: &str) -> Result<Value, Error> {
        let program = parse(source)?;
        Ok(self.evaluate_program(&program, ScopeId::GLOBAL)?)
    }

    /// Evaluates every statement of `program` in order, in `scope`.
    ///
    /// # Returns
    /// The value of the last statement, or `Value::Null` for an empty
    /// program.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn evaluate_program(&mut self, program: &Program, scope: ScopeId) -> EvalResult<Value> {
        self.eval_statements(&program.body, scope)
    }

    /// Evaluates a sequence of statements, keeping the last result.
    pub(crate) fn eval_statements(&mut self,
                                  statements: &[Statement],
                                  scope: ScopeId)
                                  -> EvalResult<Value> {
        let mut last = Value::Null;
        for statement in statements {
            last = self.eval_statement(statement, scope)?;
        }
        Ok(last)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant; member access parses but has no
    /// evaluation rule yet and is reported as unsupported.
    ///
    /// # Errors
    /// Any `EvalError` raised while evaluating `expr` or its children.
    pub fn eval(&mut self, expr: &Expr, scope: ScopeId) -> EvalResult<Value> {
        match expr {
            Expr::NumericLiteral { value, .. } => Ok(Value::Number(*value)),
            Expr::Identifier { symbol, line } => {
                Ok(self.environment.lookup_var(scope, symbol, *line)?)
            },
            Expr::ObjectLiteral { properties, .. } => self.eval_object_expr(properties, scope),
            Expr::CallExpr { caller,
                             arguments,
                             line, } => self.eval_call_expr(caller, arguments, *line, scope),
            Expr::AssignmentExpr { assignee,
                                   value,
                                   line, } => self.eval_assignment(assignee, value, *line, scope),
            Expr::BinaryExpr { left,
                               right,
                               operator,
                               .. } => self.eval_binary_expr(left, right, *operator, scope),
            Expr::MemberExpr { line, .. } => Err(EvalError::Unsupported { kind: expr.kind_name(),
                                                                          line: *line, }),
        }
    }
}

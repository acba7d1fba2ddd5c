use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        environment::ScopeId,
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, function::UserFunction},
    },
};

impl Interpreter {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments from left to right.
    /// Native functions receive the arguments together with the calling
    /// scope; user functions run in a new child of the scope they were
    /// declared in.
    ///
    /// # Errors
    /// - `NotCallable` when the callee is neither kind of function.
    /// - Any error raised while evaluating the callee, an argument or the
    ///   function itself.
    pub(crate) fn eval_call_expr(&mut self,
                                 caller: &Expr,
                                 arguments: &[Expr],
                                 line: usize,
                                 scope: ScopeId)
                                 -> EvalResult<Value> {
        let callee = self.eval(caller, scope)?;
        let arguments = arguments.iter()
                                 .map(|argument| self.eval(argument, scope))
                                 .collect::<EvalResult<Vec<_>>>()?;

        match callee {
            Value::NativeFunction(native) => {
                tracing::debug!(function = native.name, "calling native function");
                (native.func)(&arguments, &mut self.environment, scope, line)
            },
            Value::Function(function) => self.call_user_function(&function, arguments),
            other => Err(EvalError::NotCallable { value: other.to_string(),
                                                  line }),
        }
    }

    /// Executes a user-defined function.
    ///
    /// Parameters are bound positionally in a fresh scope whose parent is the
    /// function's declaration scope. There is no arity check: parameters
    /// without an argument are bound to `null`, and surplus arguments are
    /// ignored. The value of the last body statement is the result.
    ///
    /// The call scope is released afterwards unless a function declared
    /// during the call is still reachable from the result or from an older
    /// scope.
    #[tracing::instrument(level = "debug", skip_all, fields(function = %function.name))]
    fn call_user_function(&mut self,
                          function: &UserFunction,
                          arguments: Vec<Value>)
                          -> EvalResult<Value> {
        let frame = self.environment.frame();
        let scope = self.environment.push_scope(function.scope);

        let result = self.bind_parameters(function, arguments, scope)
                         .and_then(|()| self.eval_statements(&function.body, scope));

        if !self.environment.release(frame, result.as_ref().ok()) {
            tracing::debug!(scopes = self.environment.len(), "call scope outlives the call");
        }
        result
    }

    fn bind_parameters(&mut self,
                       function: &UserFunction,
                       arguments: Vec<Value>,
                       scope: ScopeId)
                       -> EvalResult<()> {
        let mut arguments = arguments.into_iter();

        for parameter in &function.parameters {
            let value = arguments.next().unwrap_or(Value::Null);
            self.environment
                .declare_var(scope, parameter, value, false, function.line)?;
        }

        Ok(())
    }
}

use crate::{
    ast::{Expr, FunctionDeclaration, Statement},
    error::EvalError,
    interpreter::{
        environment::ScopeId,
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, function::UserFunction},
    },
};

impl Interpreter {
    /// Evaluates a single statement in `scope`.
    ///
    /// Declarations bind a name in `scope` and yield the bound value;
    /// expression statements yield the value of their expression.
    ///
    /// # Errors
    /// - `Redeclaration` when `scope` already binds the declared name.
    /// - Any error from evaluating the initializer or expression.
    pub fn eval_statement(&mut self, statement: &Statement, scope: ScopeId) -> EvalResult<Value> {
        match statement {
            Statement::VarDeclaration { identifier,
                                        constant,
                                        value,
                                        line, } => {
                let value = match value {
                    Some(expr) => self.eval(expr, scope)?,
                    None => Value::Null,
                };
                Ok(self.environment
                       .declare_var(scope, identifier, value, *constant, *line)?)
            },
            Statement::FunctionDeclaration(declaration) => {
                self.eval_function_declaration(declaration, scope)
            },
            Statement::Expression { expr, .. } => self.eval(expr, scope),
        }
    }

    /// Creates a user function closing over `scope` and declares it there as
    /// a constant.
    ///
    /// The function is only recorded as a closure once the declaration
    /// succeeded.
    fn eval_function_declaration(&mut self,
                                 declaration: &FunctionDeclaration,
                                 scope: ScopeId)
                                 -> EvalResult<Value> {
        let function = UserFunction { name:       declaration.name.clone(),
                                      parameters: declaration.parameters.clone(),
                                      body:       declaration.body.clone(),
                                      scope,
                                      line:       declaration.line, };

        let value = self.environment.declare_var(scope,
                                                 &declaration.name,
                                                 function.into(),
                                                 true,
                                                 declaration.line)?;
        self.environment.record_closure();
        Ok(value)
    }

    /// Evaluates an assignment.
    ///
    /// The right-hand side is evaluated first. Only a bare identifier is a
    /// valid target; the binding is updated in the scope that declared it.
    ///
    /// # Errors
    /// - `InvalidAssignmentTarget` for any target other than an identifier.
    /// - `UnknownVariable` or `ConstantReassignment` from the environment.
    pub(crate) fn eval_assignment(&mut self,
                                  assignee: &Expr,
                                  value: &Expr,
                                  line: usize,
                                  scope: ScopeId)
                                  -> EvalResult<Value> {
        let value = self.eval(value, scope)?;

        let Expr::Identifier { symbol, .. } = assignee else {
            return Err(EvalError::InvalidAssignmentTarget { line });
        };

        Ok(self.environment.assign_var(scope, symbol, value, line)?)
    }
}

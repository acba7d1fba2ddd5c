use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        environment::ScopeId,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary expression.
    ///
    /// Both operands are always evaluated, left before right. Arithmetic is
    /// applied only when both are numbers; every other combination yields
    /// `Value::Null` rather than an error.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::{evaluator::core::Interpreter, value::core::Value};
    ///
    /// let mut interpreter = Interpreter::new();
    ///
    /// assert_eq!(interpreter.run("7 % 4").unwrap(), Value::Number(3.0));
    /// assert_eq!(interpreter.run("true + 1").unwrap(), Value::Null);
    /// ```
    pub(crate) fn eval_binary_expr(&mut self,
                                   left: &Expr,
                                   right: &Expr,
                                   operator: BinaryOperator,
                                   scope: ScopeId)
                                   -> EvalResult<Value> {
        let lhs = self.eval(left, scope)?;
        let rhs = self.eval(right, scope)?;

        match (lhs, rhs) {
            (Value::Number(l), Value::Number(r)) => {
                Ok(Value::Number(Self::eval_numeric_binary(operator, l, r)))
            },
            _ => Ok(Value::Null),
        }
    }

    /// Applies an arithmetic operator to two numbers.
    ///
    /// Follows IEEE 754 throughout: dividing by zero gives an infinity or
    /// `NaN`, and `%` keeps the sign of the dividend.
    ///
    /// # Example
    /// ```
    /// use ember::{ast::BinaryOperator, interpreter::evaluator::core::Interpreter};
    ///
    /// assert_eq!(Interpreter::eval_numeric_binary(BinaryOperator::Sub, 2.0, 5.0), -3.0);
    /// assert_eq!(Interpreter::eval_numeric_binary(BinaryOperator::Mod, -7.0, 3.0), -1.0);
    /// assert!(Interpreter::eval_numeric_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
    /// assert!(Interpreter::eval_numeric_binary(BinaryOperator::Mod, 1.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval_numeric_binary(operator: BinaryOperator, left: f64, right: f64) -> f64 {
        match operator {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Mod => left % right,
        }
    }
}

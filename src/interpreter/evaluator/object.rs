use crate::{
    ast::Property,
    interpreter::{
        environment::ScopeId,
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, object::ObjectValue},
    },
};

impl Interpreter {
    /// Evaluates an object literal.
    ///
    /// Properties are evaluated in source order. A shorthand property takes
    /// the current value of the variable named like its key, resolved from
    /// `scope` at this point of evaluation.
    ///
    /// # Errors
    /// `UnknownVariable` when a shorthand key names no variable, or any error
    /// raised by a property value.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::{evaluator::core::Interpreter, value::core::Value};
    ///
    /// let mut interpreter = Interpreter::new();
    /// let value = interpreter.run("let b = 2; { a: 1, b }").unwrap();
    ///
    /// let object = value.as_object().unwrap();
    /// assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    /// assert_eq!(object.get("b"), Some(&Value::Number(2.0)));
    /// ```
    pub(crate) fn eval_object_expr(&mut self,
                                   properties: &[Property],
                                   scope: ScopeId)
                                   -> EvalResult<Value> {
        let mut object = ObjectValue::new();

        for property in properties {
            let value = match &property.value {
                Some(expr) => self.eval(expr, scope)?,
                None => self.environment
                            .lookup_var(scope, &property.key, property.line)?,
            };
            object.insert(property.key.as_str(), value);
        }

        Ok(object.into())
    }
}

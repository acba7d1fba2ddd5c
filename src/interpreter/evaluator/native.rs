use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    error::EvalError,
    interpreter::{
        environment::{Environment, ScopeId},
        evaluator::core::EvalResult,
        value::{core::Value, function::NativeFunction},
    },
};

/// Defines the default native functions.
///
/// Each entry maps the name the function is declared under in the global
/// scope to its implementation. The macro produces `NATIVE_FUNCTIONS`, the
/// table [`Interpreter::new`](crate::interpreter::evaluator::core::Interpreter::new)
/// registers.
macro_rules! native_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        /// Native functions registered by default, in declaration order.
        pub const NATIVE_FUNCTIONS: &[NativeFunction] = &[
            $(
                NativeFunction::new($name, $func),
            )*
        ];
    };
}

native_functions! {
    "print" => print,
    "time"  => time,
}

/// Prints its arguments to standard output, separated by spaces.
///
/// Accepts any number of arguments of any type.
///
/// # Returns
/// `Value::Null`.
///
/// # Example
/// ```
/// use ember::interpreter::{
///     environment::{Environment, ScopeId},
///     evaluator::native::print,
///     value::core::Value,
/// };
///
/// let mut env = Environment::global();
/// let result = print(&[Value::Number(42.0)], &mut env, ScopeId::GLOBAL, 1).unwrap();
///
/// assert_eq!(result, Value::Null);
/// ```
pub fn print(args: &[Value], _env: &mut Environment, _scope: ScopeId, _line: usize) -> EvalResult<Value> {
    let rendered = args.iter().map(ToString::to_string).collect::<Vec<_>>();
    println!("{}", rendered.join(" "));
    Ok(Value::Null)
}

/// Returns the current time as milliseconds since the Unix epoch.
///
/// # Errors
/// Fails when the system clock is set before the epoch.
#[allow(clippy::cast_precision_loss)]
pub fn time(_args: &[Value], _env: &mut Environment, _scope: ScopeId, line: usize) -> EvalResult<Value> {
    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH)
                                   .map_err(|error| EvalError::Native { name: "time",
                                                                        message: error.to_string(),
                                                                        line })?;
    Ok(Value::Number(elapsed.as_millis() as f64))
}

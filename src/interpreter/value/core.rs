use std::rc::Rc;

use crate::interpreter::value::{
    function::{NativeFunction, UserFunction},
    object::ObjectValue,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the values that expressions, declarations and calls
/// can produce. Objects and user functions are shared behind `Rc` and are
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value. Also the result of arithmetic on non-numbers.
    Null,
    /// A boolean value, reachable through the `true` and `false` constants.
    Bool(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A mapping from keys to values, in insertion order.
    Object(Rc<ObjectValue>),
    /// A function implemented by the host.
    NativeFunction(NativeFunction),
    /// A function whose body is interpreted.
    Function(Rc<UserFunction>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<ObjectValue> for Value {
    fn from(v: ObjectValue) -> Self {
        Self::Object(Rc::new(v))
    }
}

impl From<NativeFunction> for Value {
    fn from(v: NativeFunction) -> Self {
        Self::NativeFunction(v)
    }
}

impl From<UserFunction> for Value {
    fn from(v: UserFunction) -> Self {
        Self::Function(Rc::new(v))
    }
}

impl Value {
    /// Returns the number held by `self`, if any.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
    /// assert_eq!(Value::Null.as_number(), None);
    /// ```
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the object held by `self`, if any.
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Whether the value can be called.
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::NativeFunction(_) | Self::Function(_))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Object(object) => write!(f, "{object}"),
            Self::NativeFunction(native) => write!(f, "<native fn {}>", native.name),
            Self::Function(function) => write!(f, "<fn {}>", function.name),
        }
    }
}

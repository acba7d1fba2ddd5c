use crate::interpreter::value::core::Value;

/// The contents of an object value.
///
/// Keys are unique and keep the order in which they were first inserted.
/// Lookups scan the entries linearly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectValue {
    entries: Vec<(String, Value)>,
}

impl ObjectValue {
    /// Creates an empty object.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Binds `key` to `value`.
    ///
    /// An existing key keeps its position and has its value replaced.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::value::{core::Value, object::ObjectValue};
    ///
    /// let mut object = ObjectValue::new();
    /// object.insert("b", Value::Number(1.0));
    /// object.insert("a", Value::Number(2.0));
    /// object.insert("b", Value::Number(3.0));
    ///
    /// assert_eq!(object.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    /// assert_eq!(object.get("b"), Some(&Value::Number(3.0)));
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value bound to `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(existing, value)| (existing == key).then_some(value))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the object has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "{{}}");
        }

        write!(f, "{{ ")?;
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{key}: {value}")?;
        }
        write!(f, " }}")
    }
}

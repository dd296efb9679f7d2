use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// The variable store of one interpreter instance.
///
/// Maps names to values. Assigning a name that is already bound replaces the
/// old value; there are no nested scopes.
///
/// # Example
/// ```
/// use wordscript::interpreter::{environment::Environment, value::core::Value};
///
/// let mut env = Environment::default();
/// env.assign("x", Value::Integer(1));
/// env.assign("x", Value::Integer(2));
///
/// assert_eq!(env.get("x"), Some(&Value::Integer(2)));
/// assert_eq!(env.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, overwriting any previous binding.
    pub fn assign(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// All bindings sorted by name.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &Value)> {
        let mut bindings: Vec<_> = self.iter().collect();
        bindings.sort_unstable_by_key(|(name, _)| *name);
        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_name_is_absent() {
        let env = Environment::default();
        assert!(env.get("x").is_none());
        assert!(env.is_empty());
    }

    #[test]
    fn rebinding_may_change_variant() {
        let mut env = Environment::default();
        env.assign("x", Value::Integer(1));
        env.assign("x", Value::from("one"));
        assert_eq!(env.get("x"), Some(&Value::from("one")));
    }

    #[test]
    fn sorted_by_name() {
        let mut env = Environment::default();
        env.assign("b", Value::Integer(2));
        env.assign("a", Value::Integer(1));
        env.assign("c", Value::Bool(true));

        let names: Vec<_> = env.sorted().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}

use std::collections::HashMap;

use crate::error::{Error, Result};

/// The single flat scope holding every variable of one interpretation run
///
/// Names are stored in lowercase so `Number`, `NUMBER` and `number` share a
/// slot. There is no implicit initialisation: reading a name that was never
/// assigned is an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalScope {
    variables: HashMap<String, i64>,
}

impl GlobalScope {
    /// Creates an empty scope
    pub fn new() -> Self {
        GlobalScope {
            variables: HashMap::new(),
        }
    }

    /// Gets the value of a variable, ignoring case
    pub fn get(&self, name: &str) -> Result<i64> {
        self.variables
            .get(&fold(name))
            .copied()
            .ok_or_else(|| Error::UndefinedVariable {
                name: name.to_string(),
            })
    }

    /// Sets a variable, overwriting any previous value
    pub fn set(&mut self, name: &str, value: i64) {
        self.variables.insert(fold(name), value);
    }

    /// Whether the variable has been assigned
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(&fold(name))
    }

    /// Number of distinct variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether nothing has been assigned yet
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over `(lowercase name, value)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Copy of the current bindings
    pub fn snapshot(&self) -> HashMap<String, i64> {
        self.variables.clone()
    }

    /// Consumes the scope, returning its bindings
    pub fn into_map(self) -> HashMap<String, i64> {
        self.variables
    }
}

fn fold(name: &str) -> String {
    name.to_ascii_lowercase()
}

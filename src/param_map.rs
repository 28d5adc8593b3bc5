use indexmap::IndexMap;

use crate::compat::{String, ToString, Vec};

/// Hasher for parameter names; available without `std`.
type ParamHasher = hashbrown::DefaultHashBuilder;

/// Insertion-ordered mapping from parameter name to its ordered values.
#[derive(Debug, Clone, Default)]
pub struct ParamMap {
    entries: IndexMap<String, Vec<String>, ParamHasher>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::with_hasher(ParamHasher::default()),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Append a value to the key's list, creating the list at the end of the
    /// key order if the key is new.
    pub fn append(&mut self, key: &str, value: String) {
        match self.entries.get_mut(key) {
            Some(values) => values.push(value),
            None => {
                self.entries.insert(key.to_string(), Vec::from([value]));
            }
        }
    }

    /// Store a whole list under a key, replacing any existing list in place.
    pub fn insert(&mut self, key: String, values: Vec<String>) {
        self.entries.insert(key, values);
    }

    /// Remove the first occurrence of `value` under `key`.
    /// The key is dropped whenever its list ends up empty, including a list
    /// that was already empty.
    pub fn remove_value(&mut self, key: &str, value: &str) {
        let Some(values) = self.entries.get_mut(key) else {
            return;
        };
        if let Some(j) = values.iter().position(|v| v == value) {
            values.remove(j);
        }
        if values.is_empty() {
            self.entries.shift_remove(key);
        }
    }

    /// Remove a key, keeping the order of the remaining keys.
    pub fn remove(&mut self, key: &str) {
        self.entries.shift_remove(key);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Key order is part of the value, so equality compares in order.
impl PartialEq for ParamMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for ParamMap {}

//! Name-keyed tables of values.
//!
//! A thin wrapper around the `im` crate's ordered map. Cloning a table is
//! O(1) through structural sharing, but the semantics are those of a deep
//! value copy: writes through one table are never visible through another.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A mapping from unique variable names to exclusively-owned values.
///
/// Enumeration order is by name, but callers must not rely on any
/// particular order.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Table {
    entries: im::OrdMap<String, Value>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the entry for `name`, inserting an invalid value if absent.
    pub fn create(&mut self, name: &str) -> &mut Value {
        self.entries
            .entry(name.to_owned())
            .or_insert_with(Value::default)
    }

    /// Stores a copy of `value` under `name`, replacing any previous value.
    ///
    /// The entry count only changes when `name` was absent.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> &mut Value {
        let slot = self.create(name);
        *slot = value.into();
        slot
    }

    /// Inserts only if `name` is absent. Returns false if it was present.
    pub fn insert_new(&mut self, name: &str, value: Value) -> bool {
        if self.contains(name) {
            return false;
        }
        self.entries.insert(name.to_owned(), value);
        true
    }

    /// Looks up a value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Looks up a value by name for in-place mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.entries.get_mut(name)
    }

    /// Removes and returns a value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.remove(name)
    }

    /// Replaces all entries with deep copies of `other`'s.
    pub fn copy_from(&mut self, other: &Table) {
        self.entries.clone_from(&other.entries);
    }

    /// Returns all entry names.
    #[must_use]
    pub fn list_all(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Iterates over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name} {value}")?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Table {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

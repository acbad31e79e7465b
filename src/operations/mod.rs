//! Operation storage
//!
//! An [`OperationSet`] records the operations requested for one URL, keyed by
//! operation name. Iteration follows first-insertion order; setting a name
//! again replaces its value but keeps its original position.

pub mod value;
pub mod vocabulary;

use indexmap::IndexMap;

pub use value::{Number, OperationValue};
pub use vocabulary::{lookup, sanitize, Dispatch, OperationKind, OperationSpec, REGISTRY};

/// Insertion-ordered mapping from operation name to value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationSet {
    entries: IndexMap<String, OperationValue>,
}

impl OperationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an operation
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OperationValue>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&OperationValue> {
        self.entries.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Remove an operation, preserving the order of the rest
    pub fn remove(&mut self, name: &str) -> Option<OperationValue> {
        self.entries.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OperationValue)> + '_ {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for OperationSet
where
    K: Into<String>,
    V: Into<OperationValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = OperationSet::new();
        for (name, value) in iter {
            set.set(name, value);
        }
        set
    }
}

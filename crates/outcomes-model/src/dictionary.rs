use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Ordered mapping from an opaque id to a display name.
///
/// Iteration order is ascending id order, which fixes the axis and legend
/// index order consumers must use consistently with index-based cells.
/// Lookups of ids the dictionary does not know are the caller's
/// data-consistency bug; builders surface them as missing-entry errors
/// instead of producing placeholder names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameDictionary<K: Ord> {
    entries: BTreeMap<K, String>,
}

impl<K: Ord + Clone> NameDictionary<K> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        S: Into<String>,
    {
        let mut dictionary = Self::new();
        for (id, name) in entries {
            dictionary.insert(id, name);
        }
        dictionary
    }

    /// Insert an entry. The first name registered for an id wins; retrieval
    /// sources repeat entity records once per parent row.
    pub fn insert(&mut self, id: K, name: impl Into<String>) {
        self.entries.entry(id).or_insert_with(|| name.into());
    }

    pub fn get(&self, id: &K) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &K) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &str)> {
        self.entries.iter().map(|(id, name)| (id, name.as_str()))
    }

    /// Display names in iteration order, one per entry.
    pub fn names(&self) -> Vec<String> {
        self.entries.values().cloned().collect()
    }

    /// Lookup table from id to its position in [`Self::names`].
    pub fn index_by_id(&self) -> HashMap<K, usize>
    where
        K: Hash + Eq,
    {
        self.entries
            .keys()
            .enumerate()
            .map(|(index, id)| (id.clone(), index))
            .collect()
    }

    /// Find the id carrying the given display name, first match in id order.
    pub fn find_by_name(&self, name: &str) -> Option<&K> {
        self.entries
            .iter()
            .find(|(_, entry_name)| entry_name.as_str() == name)
            .map(|(id, _)| id)
    }
}

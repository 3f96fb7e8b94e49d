// file: src/parser/section.rs
// version: 1.0.0
// guid: 041c7e20-5de9-4b5a-bb69-0b57a17b9d52

//! Parsed resource configuration tree

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Names mapped to their sections, ordered by name.
pub type ResourceTree = BTreeMap<String, Section>;

/// One node of a parsed `pcs resource config` dump.
///
/// Serializes untagged: a leaf becomes a plain string and a branch becomes
/// `{"name": ..., "value": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Section {
    Leaf(String),
    Branch { name: String, value: ResourceTree },
}

impl Section {
    /// Value of a leaf binding
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Branch { .. } => None,
        }
    }

    /// Nested tree of a branch binding
    pub fn children(&self) -> Option<&ResourceTree> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch { value, .. } => Some(value),
        }
    }

    /// Walk down a path of names, e.g. `["Operations", "monitor"]`.
    pub fn lookup<'a>(&'a self, path: &[&str]) -> Option<&'a Section> {
        match path.split_first() {
            None => Some(self),
            Some((head, rest)) => self.children()?.get(*head)?.lookup(rest),
        }
    }
}

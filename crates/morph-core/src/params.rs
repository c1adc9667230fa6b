//! Ordered name/value parameter lists exchanged with configurable objects.
//!
//! A [`ParameterList`] is the lingua franca of the configuration layer:
//! components report their state as one and accept one back, front ends
//! build them from whatever raw text they parse. Entries keep insertion
//! order and names stay unique under every mutating operation.

use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::text::{to_text, TextFormat};

/// Single name/value entry held by a [`ParameterList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterEntry {
    /// Parameter name as announced by the owning component.
    pub name: String,
    /// Parameter value rendered as text.
    pub value: String,
}

/// Ordered list of parameter name/value pairs with unique names.
///
/// Updating the value of an existing name leaves its position unchanged;
/// new names append at the end. The list is an owned value: clone it to
/// copy, there is no sharing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterList {
    entries: Vec<ParameterEntry>,
}

impl ParameterList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the position of the first entry named `name`, if any.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    /// Returns `true` when an entry named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Returns the value associated with `name`, or `""` when absent.
    ///
    /// Absence is not an error here; use [`ParameterList::contains`] or
    /// [`ParameterList::find`] to distinguish a missing name from an empty
    /// value.
    pub fn get(&self, name: &str) -> &str {
        match self.find(name) {
            Some(index) => self.entries[index].value.as_str(),
            None => "",
        }
    }

    /// Inserts or replaces the value associated with `name`.
    ///
    /// The value is rendered through [`to_text`] with the default format,
    /// so typed values normalize exactly as they would anywhere else in
    /// the layer. An existing entry is updated in place and keeps its
    /// position.
    pub fn insert<V: fmt::Display>(&mut self, name: &str, value: V) -> &mut Self {
        let value = to_text(&value, &TextFormat::default());
        match self.find(name) {
            Some(index) => self.entries[index].value = value,
            None => self.entries.push(ParameterEntry {
                name: name.to_string(),
                value,
            }),
        }
        self
    }

    /// Copies every entry of `other` into this list, in `other`'s order,
    /// using the same replace-or-append rule as [`ParameterList::insert`].
    pub fn merge(&mut self, other: &ParameterList) -> &mut Self {
        for entry in &other.entries {
            self.insert(&entry.name, &entry.value);
        }
        self
    }

    /// Like [`ParameterList::merge`], but rewrites each copied name to
    /// `"<prefix> <name>"` with the original first character lowercased.
    ///
    /// This namespaces a sub-component's parameters under its parent, e.g.
    /// a force listing its spring term's `"Weight"` as `"Spring weight"`.
    pub fn merge_prefixed(&mut self, other: &ParameterList, prefix: &str) -> &mut Self {
        for entry in &other.entries {
            let name = format!("{} {}", prefix, lower_first(&entry.name));
            self.insert(&name, &entry.value);
        }
        self
    }

    /// Removes the first entry named `name`; returns whether one existed.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.find(name) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns an iterator over the entries in order.
    pub fn iter(&self) -> slice::Iter<'_, ParameterEntry> {
        self.entries.iter()
    }

    /// Returns the entries as a slice.
    pub fn entries(&self) -> &[ParameterEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a ParameterEntry;
    type IntoIter = slice::Iter<'a, ParameterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for ParameterList {
    type Item = ParameterEntry;
    type IntoIter = std::vec::IntoIter<ParameterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<N, V> FromIterator<(N, V)> for ParameterList
where
    N: AsRef<str>,
    V: fmt::Display,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(pairs: I) -> Self {
        let mut list = ParameterList::new();
        for (name, value) in pairs {
            list.insert(name.as_ref(), value);
        }
        list
    }
}

impl fmt::Display for ParameterList {
    /// Renders the entries as `Name = value` lines with aligned names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .entries
            .iter()
            .map(|entry| entry.name.chars().count())
            .max()
            .unwrap_or(0);
        let format = TextFormat {
            width,
            pad: ' ',
            left_align: true,
        };
        for entry in &self.entries {
            writeln!(f, "{} = {}", to_text(&entry.name, &format), entry.value)?;
        }
        Ok(())
    }
}

/// Lowercases the first character of `name`, leaving the rest untouched.
fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! Selection state shared by the table and its rows.
//!
//! Selection uses string IDs so it stays stable when rows are re-rendered or
//! scrolled out of a virtualized window. The ordered list is what the host
//! sees; the set is only a membership index and always holds the same members.

use std::collections::HashSet;

use serde::Deserialize;

/// Selection mode for the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum SelectionMode {
    /// No interactive selection. A host-supplied list is still displayed.
    #[default]
    None,
    /// At most one row selected through interaction
    Single,
    /// Any number of rows, plus select-all from the header
    Multiple,
}

impl SelectionMode {
    /// Parse a `selects` attribute value.
    ///
    /// Unknown values fall back to [`SelectionMode::None`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "single" => Self::Single,
            "multiple" => Self::Multiple,
            _ => Self::None,
        }
    }

    /// The attribute value this mode reflects as, if any.
    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Single => Some("single"),
            Self::Multiple => Some("multiple"),
        }
    }

    /// Whether users can change the selection in this mode.
    pub fn is_interactive(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl From<&str> for SelectionMode {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<Option<String>> for SelectionMode {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::parse).unwrap_or_default()
    }
}

/// Ordered, duplicate-free selection of row IDs.
///
/// The order is the order in which IDs were selected, not row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    order: Vec<String>,
    members: HashSet<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from IDs, keeping the first occurrence of duplicates.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for id in ids {
            selection.insert(id);
        }
        selection
    }

    /// Selected IDs in selection order.
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    /// Owned copy of the selected IDs.
    pub fn to_vec(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Check if an ID is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// Get the number of selected items.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Append an ID. Returns false if it was already selected.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.members.contains(&id) {
            return false;
        }
        self.members.insert(id.clone());
        self.order.push(id);
        true
    }

    /// Remove an ID. Returns false if it was not selected.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.members.remove(id) {
            return false;
        }
        self.order.retain(|selected| selected != id);
        true
    }

    /// Clear all selection.
    /// Returns the IDs that were deselected.
    pub fn clear(&mut self) -> Vec<String> {
        self.members.clear();
        std::mem::take(&mut self.order)
    }

    /// Append every ID that is not selected yet, in the given order.
    /// Returns the IDs that were newly selected.
    pub fn select_all<'a, I>(&mut self, ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut added = Vec::new();
        for id in ids {
            if self.insert(id) {
                added.push(id.to_string());
            }
        }
        added
    }

    /// Keep only the IDs for which `keep` returns true.
    /// Returns the IDs that were dropped, in selection order.
    pub fn retain<F>(&mut self, mut keep: F) -> Vec<String>
    where
        F: FnMut(&str) -> bool,
    {
        let (kept, dropped): (Vec<String>, Vec<String>) =
            std::mem::take(&mut self.order).into_iter().partition(|id| keep(id.as_str()));
        for id in &dropped {
            self.members.remove(id);
        }
        self.order = kept;
        dropped
    }

    /// Replace the whole selection, dropping duplicates.
    pub fn replace<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self = Self::from_ids(ids);
    }

    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        self.order.len() == self.members.len()
            && self.order.iter().all(|id| self.members.contains(id))
    }
}

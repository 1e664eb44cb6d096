//! Table body: either a fixed set of rows or a virtualized item source.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::components::virtualizer::{Virtualizer, VisibleRange};

use super::item::{ItemValueFn, RenderItemFn, TableCell, index_value};
use super::row::TableRow;

/// A virtualized item source.
///
/// Holds the full backing item list and the IDs derived from it, but only
/// materializes rows for the visible window.
pub struct VirtualBody<T> {
    items: Vec<T>,
    /// `item_value(item, index)` for every item, in item order
    values: Vec<String>,
    known: HashSet<String>,
    item_value: ItemValueFn<T>,
    render_item: RenderItemFn<T>,
    virtualizer: Virtualizer,
    rows: Vec<TableRow>,
}

impl<T: 'static> VirtualBody<T> {
    /// Create a body over `items` with index-based IDs and one-row items.
    pub fn new(items: Vec<T>) -> Self {
        let virtualizer = Virtualizer::new(items.len(), 1);
        let mut body = Self {
            items,
            values: Vec::new(),
            known: HashSet::new(),
            item_value: Arc::new(index_value::<T>),
            render_item: Arc::new(|_, _| Vec::new()),
            virtualizer,
            rows: Vec::new(),
        };
        body.recompute_values();
        body
    }

    /// Set the identity function.
    pub fn item_value<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, usize) -> String + Send + Sync + 'static,
    {
        self.item_value = Arc::new(f);
        self.recompute_values();
        self
    }

    /// Set the row content factory.
    pub fn render_item<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, usize) -> Vec<TableCell> + Send + Sync + 'static,
    {
        self.render_item = Arc::new(f);
        self
    }
}

impl<T> VirtualBody<T> {
    /// Set the height of every item in terminal rows.
    pub fn row_height(mut self, height: u16) -> Self {
        let viewport = self.virtualizer.viewport_height();
        self.virtualizer = Virtualizer::new(self.items.len(), height);
        self.virtualizer.set_viewport_height(viewport);
        self
    }

    /// Set the initial viewport height.
    pub fn viewport_height(mut self, height: u16) -> Self {
        self.virtualizer.set_viewport_height(height);
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn virtualizer(&self) -> &Virtualizer {
        &self.virtualizer
    }

    pub(crate) fn virtualizer_mut(&mut self) -> &mut Virtualizer {
        &mut self.virtualizer
    }

    /// Replace the backing items. Returns the new visible range if it moved.
    pub(crate) fn set_items(&mut self, items: Vec<T>) -> Option<VisibleRange> {
        self.items = items;
        self.recompute_values();
        self.virtualizer.set_item_count(self.items.len())
    }

    fn recompute_values(&mut self) {
        self.values = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| (self.item_value)(item, index))
            .collect();
        self.known = self
            .values
            .iter()
            .filter(|value| !value.is_empty())
            .cloned()
            .collect();
    }

    /// Rebuild the rows of the visible window.
    ///
    /// Rows come out unselected and undecorated; the table applies selection
    /// state before anything else can observe them.
    pub(crate) fn materialize(&mut self) {
        self.rows = match self.virtualizer.visible_range() {
            Some(range) => range
                .indices()
                .map(|index| {
                    TableRow::new(self.values[index].clone())
                        .with_cells((self.render_item)(&self.items[index], index))
                        .at_index(index)
                })
                .collect(),
            None => Vec::new(),
        };
    }
}

impl<T> fmt::Debug for VirtualBody<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualBody")
            .field("items", &self.items.len())
            .field("virtualizer", &self.virtualizer)
            .field("rows", &self.rows.len())
            .finish()
    }
}

/// Rows of a table.
#[derive(Debug)]
pub enum TableBody<T> {
    /// Every row is materialized
    Rows(Vec<TableRow>),
    /// Only the visible window is materialized
    Virtual(VirtualBody<T>),
}

impl<T> TableBody<T> {
    /// Build a static body, numbering rows in order.
    pub fn rows(rows: Vec<TableRow>) -> Self {
        Self::Rows(
            rows.into_iter()
                .enumerate()
                .map(|(index, row)| row.at_index(index))
                .collect(),
        )
    }

    pub fn role(&self) -> &'static str {
        "rowgroup"
    }

    pub fn is_virtualized(&self) -> bool {
        matches!(self, Self::Virtual(_))
    }

    /// Total number of rows, including unmaterialized ones.
    pub fn row_count(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            Self::Virtual(body) => body.items.len(),
        }
    }

    /// Every row ID in row order, including unmaterialized rows.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Rows(rows) => rows.iter().filter_map(TableRow::value).collect(),
            Self::Virtual(body) => body
                .values
                .iter()
                .map(String::as_str)
                .filter(|value| !value.is_empty())
                .collect(),
        }
    }

    /// Number of distinct row IDs. Rows without an ID can never be selected,
    /// so this is the count a full selection reaches.
    pub fn value_count(&self) -> usize {
        match self {
            Self::Rows(rows) => rows
                .iter()
                .filter_map(TableRow::value)
                .collect::<HashSet<_>>()
                .len(),
            Self::Virtual(body) => body.known.len(),
        }
    }

    /// Check if any row, materialized or not, has this ID.
    pub fn contains_value(&self, value: &str) -> bool {
        match self {
            Self::Rows(rows) => rows.iter().any(|row| row.value() == Some(value)),
            Self::Virtual(body) => body.known.contains(value),
        }
    }

    /// Materialized rows.
    pub fn materialized(&self) -> &[TableRow] {
        match self {
            Self::Rows(rows) => rows,
            Self::Virtual(body) => &body.rows,
        }
    }

    pub(crate) fn materialized_mut(&mut self) -> &mut [TableRow] {
        match self {
            Self::Rows(rows) => rows,
            Self::Virtual(body) => &mut body.rows,
        }
    }

    /// Materialized row at a body index.
    pub fn row_at(&self, index: usize) -> Option<&TableRow> {
        self.materialized().iter().find(|row| row.index() == index)
    }

    pub(crate) fn row_at_mut(&mut self, index: usize) -> Option<&mut TableRow> {
        self.materialized_mut()
            .iter_mut()
            .find(|row| row.index() == index)
    }

    pub fn as_virtual(&self) -> Option<&VirtualBody<T>> {
        match self {
            Self::Virtual(body) => Some(body),
            Self::Rows(_) => None,
        }
    }

    pub(crate) fn as_virtual_mut(&mut self) -> Option<&mut VirtualBody<T>> {
        match self {
            Self::Virtual(body) => Some(body),
            Self::Rows(_) => None,
        }
    }
}

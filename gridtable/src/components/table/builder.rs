//! Builder for Table components.

use crate::components::selection::SelectionMode;
use crate::config::TableConfig;

use super::body::{TableBody, VirtualBody};
use super::head::{TableHead, TableHeadCell};
use super::item::TableCell;
use super::row::TableRow;
use super::state::{Table, TableInner};

/// Assembles a [`Table`] from a configuration plus rows or items.
///
/// The host-supplied `selected` list is applied once, in
/// [`build`](TableBuilder::build), against the rows that exist at that point.
#[derive(Debug)]
pub struct TableBuilder<T = ()> {
    config: TableConfig,
    head: TableHead,
    rows: Vec<TableRow>,
    source: Option<VirtualBody<T>>,
}

impl TableBuilder<()> {
    /// Start a table whose rows are all materialized.
    pub fn new() -> Self {
        Self {
            config: TableConfig::default(),
            head: TableHead::new(),
            rows: Vec::new(),
            source: None,
        }
    }

    /// Append a row.
    pub fn row(mut self, row: TableRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Append rows.
    pub fn rows(mut self, rows: impl IntoIterator<Item = TableRow>) -> Self {
        self.rows.extend(rows);
        self
    }
}

impl Default for TableBuilder<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> TableBuilder<T> {
    /// Start a table that materializes only the visible window of `items`.
    pub fn virtualized(items: Vec<T>) -> Self {
        Self {
            config: TableConfig::default(),
            head: TableHead::new(),
            rows: Vec::new(),
            source: Some(VirtualBody::new(items)),
        }
    }

    /// Set the function deriving a row ID from an item and its index.
    pub fn item_value<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, usize) -> String + Send + Sync + 'static,
    {
        self.source = self.source.map(|body| body.item_value(f));
        self
    }

    /// Set the function producing a row's cells from an item.
    pub fn render_item<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, usize) -> Vec<TableCell> + Send + Sync + 'static,
    {
        self.source = self.source.map(|body| body.render_item(f));
        self
    }
}

impl<T> TableBuilder<T> {
    /// Replace the whole configuration.
    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    pub fn selects(mut self, mode: SelectionMode) -> Self {
        self.config.selects = mode;
        self
    }

    pub fn selected<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.selected = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn row_height(mut self, height: u16) -> Self {
        self.config.row_height = height;
        self
    }

    pub fn viewport_height(mut self, height: u16) -> Self {
        self.config.viewport_height = height;
        self
    }

    pub fn head(mut self, head: TableHead) -> Self {
        self.head = head;
        self
    }

    /// Append a header cell.
    pub fn column(mut self, cell: TableHeadCell) -> Self {
        self.head = self.head.cell(cell);
        self
    }

    /// Build the table.
    ///
    /// Materializes the rows (or the first window of items), drops selected
    /// IDs that match no row and renders checkbox cells for the mode. No
    /// change event is emitted for IDs dropped here.
    pub fn build(self) -> Table<T> {
        let TableConfig {
            selects,
            selected,
            row_height,
            viewport_height,
        } = self.config;

        let body = match self.source {
            Some(source) => TableBody::Virtual(
                source
                    .row_height(row_height)
                    .viewport_height(viewport_height),
            ),
            None => TableBody::rows(self.rows),
        };

        let mut inner = TableInner::new(selects, selected, self.head, body);
        inner.rematerialize();
        let dropped = inner.drop_stale();
        inner.sync();

        let table = Table::from_inner(inner);
        if !dropped.is_empty() {
            log::debug!("{}: initial selection dropped unknown ids {:?}", table.id(), dropped);
        }
        table
    }
}

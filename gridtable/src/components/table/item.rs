//! Cell content and item identity for table rows.

use std::sync::Arc;

/// Derives a row ID from a backing item and its index.
pub type ItemValueFn<T> = Arc<dyn Fn(&T, usize) -> String + Send + Sync>;

/// Produces the cells of a row for a backing item.
pub type RenderItemFn<T> = Arc<dyn Fn(&T, usize) -> Vec<TableCell> + Send + Sync>;

/// Default item identity: the stringified index.
pub fn index_value<T>(_item: &T, index: usize) -> String {
    index.to_string()
}

/// A plain content cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCell {
    content: String,
}

impl TableCell {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn role(&self) -> &'static str {
        "gridcell"
    }
}

impl From<&str> for TableCell {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for TableCell {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

//! Table component - checkbox row selection over static or virtualized rows.
//!
//! The Table component provides:
//! - An ordered `selected` list the host can read and replace
//! - Checkbox cells per row and a tri-state select-all header checkbox
//! - `None`, `Single` and `Multiple` selection modes, switchable at runtime
//! - Virtualized bodies that materialize only the visible window of items
//! - Sortable head cells (the host sorts the data)
//!
//! # Example
//!
//! ```ignore
//! use gridtable::prelude::*;
//!
//! let cx = TableContext::new();
//! let table = TableBuilder::new()
//!     .selects(SelectionMode::Multiple)
//!     .column(TableHeadCell::new("Name").sortable())
//!     .rows((1..=5).map(|i| TableRow::new(format!("row{i}")).cell(format!("Row {i}"))))
//!     .selected(["row1", "row2"])
//!     .build();
//!
//! table.handle_row_toggle("row3", true, &cx);
//! assert_eq!(table.selected(), ["row1", "row2", "row3"]);
//! ```

mod body;
mod builder;
mod events;
mod head;
mod item;
mod row;
mod state;

pub use body::{TableBody, VirtualBody};
pub use builder::TableBuilder;
pub use head::{HeaderCheckboxState, SortDirection, TableHead, TableHeadCell};
pub use item::{ItemValueFn, RenderItemFn, TableCell, index_value};
pub use row::TableRow;
pub use state::{Table, TableId};

//! UI components with self-managed state.
//!
//! Each component lives in its own module with:
//! - `state.rs` - the component state type
//! - `render.rs` - rendering logic, where the component has any
//! - `mod.rs` - public exports

pub mod checkbox;
pub mod events;
pub mod selection;
pub mod table;
pub mod virtualizer;

pub use checkbox::{CHECKBOX_WIDTH, CheckboxCell, checkbox_indicator};
pub use events::{
    ComponentEvent, ComponentEventKind, ComponentEvents, EventDetail, EventResult,
};
pub use selection::{Selection, SelectionMode};
pub use table::{
    HeaderCheckboxState, SortDirection, Table, TableBuilder, TableCell, TableHead, TableHeadCell,
    TableId, TableRow,
};
pub use virtualizer::{Virtualizer, VisibleRange};

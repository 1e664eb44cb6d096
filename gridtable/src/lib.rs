//! Data-grid table with checkbox row selection.
//!
//! The crate keeps a host-visible `selected` list in sync with row and header
//! checkbox clicks, runtime selection mode changes and virtualized scrolling.
//! Rendering is left to the host; components expose roles and state for it.

pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod focus;
pub mod keybinds;

pub mod prelude {
    pub use crate::components::{
        CheckboxCell, ComponentEvent, ComponentEventKind, ComponentEvents, EventDetail,
        EventResult, HeaderCheckboxState, Selection, SelectionMode, SortDirection, Table,
        TableBuilder, TableCell, TableHead, TableHeadCell, TableId, TableRow, VisibleRange,
    };
    pub use crate::config::TableConfig;
    pub use crate::context::TableContext;
    pub use crate::error::TableError;
    pub use crate::focus::FocusState;
    pub use crate::keybinds::{Key, KeyCombo, Modifiers};
}

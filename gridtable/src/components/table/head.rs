//! Table head: column header cells and the select-all checkbox slot.

use crate::components::checkbox::CheckboxCell;
use crate::components::selection::SelectionMode;

/// Default header cell width in terminal columns.
const DEFAULT_WIDTH: u16 = 16;

/// Sort direction shown on a sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Attribute value (`asc`/`desc`).
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Direction after activating a column currently sorted `current`.
    pub fn next(current: Option<Self>) -> Self {
        match current {
            Some(Self::Ascending) => Self::Descending,
            Some(Self::Descending) | None => Self::Ascending,
        }
    }
}

/// A column header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeadCell {
    label: String,
    width: u16,
    sortable: bool,
    sorted: Option<SortDirection>,
}

impl TableHeadCell {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            width: DEFAULT_WIDTH,
            sortable: false,
            sorted: None,
        }
    }

    /// Set the column width in terminal columns.
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Make the column sortable. Sortable cells are tab stops.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the initial sort direction.
    pub fn sorted(mut self, direction: SortDirection) -> Self {
        self.sorted = Some(direction);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn column_width(&self) -> u16 {
        self.width
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.sorted
    }

    pub fn role(&self) -> &'static str {
        "columnheader"
    }

    pub fn tab_index(&self) -> i32 {
        if self.sortable { 0 } else { -1 }
    }

    pub fn aria_sort(&self) -> &'static str {
        match self.sorted {
            Some(SortDirection::Ascending) => "ascending",
            Some(SortDirection::Descending) => "descending",
            None => "none",
        }
    }
}

/// Derived state of the header checkbox.
///
/// Never stored as truth; always recomputed from the selection and the total
/// row count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderCheckboxState {
    pub checked: bool,
    pub indeterminate: bool,
    pub enabled: bool,
    pub single_mode: bool,
}

impl HeaderCheckboxState {
    pub fn derive(mode: SelectionMode, selected_count: usize, total_rows: usize) -> Self {
        let all_selected = selected_count > 0 && selected_count == total_rows;
        Self {
            checked: all_selected,
            indeterminate: selected_count > 0 && !all_selected,
            // Display-only selection supplied by the host
            enabled: !(mode == SelectionMode::None && selected_count > 0),
            single_mode: mode == SelectionMode::Single,
        }
    }
}

/// The head row of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableHead {
    cells: Vec<TableHeadCell>,
    checkbox: Option<CheckboxCell>,
}

impl TableHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header cell.
    pub fn cell(mut self, cell: TableHeadCell) -> Self {
        self.cells.push(cell);
        self
    }

    pub fn cells(&self) -> &[TableHeadCell] {
        &self.cells
    }

    pub fn checkbox(&self) -> Option<&CheckboxCell> {
        self.checkbox.as_ref()
    }

    pub(crate) fn checkbox_mut(&mut self) -> Option<&mut CheckboxCell> {
        self.checkbox.as_mut()
    }

    pub fn role(&self) -> &'static str {
        "row"
    }

    /// Indices of cells that take keyboard focus.
    pub fn tab_stops(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.sortable)
            .map(|(i, _)| i)
            .collect()
    }

    /// Column index under a head-relative x position, skipping the checkbox slot.
    pub fn column_at(&self, x: u16, checkbox_width: u16) -> Option<usize> {
        let offset = if self.checkbox.is_some() { checkbox_width } else { 0 };
        let mut x = x.checked_sub(offset)?;
        for (i, cell) in self.cells.iter().enumerate() {
            if x < cell.width {
                return Some(i);
            }
            x -= cell.width;
        }
        None
    }

    /// Render the checkbox slot for `mode` and the derived `state`.
    pub(crate) fn apply(&mut self, mode: SelectionMode, state: HeaderCheckboxState) {
        if !mode.is_interactive() {
            self.checkbox = None;
            return;
        }
        let checkbox = self.checkbox.get_or_insert_with(CheckboxCell::new);
        checkbox.set_checked(state.checked);
        checkbox.set_indeterminate(state.indeterminate);
        checkbox.set_disabled(!state.enabled);
        checkbox.set_selects_single(state.single_mode);
    }

    /// Activate a sortable column. Other columns lose their sort state.
    ///
    /// Returns the new direction, or `None` if the column is not sortable.
    pub(crate) fn sort(&mut self, column: usize) -> Option<SortDirection> {
        let current = self.cells.get(column).filter(|c| c.sortable)?.sorted;
        let direction = SortDirection::next(current);
        for (i, cell) in self.cells.iter_mut().enumerate() {
            cell.sorted = (i == column).then_some(direction);
        }
        Some(direction)
    }
}

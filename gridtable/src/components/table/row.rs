//! Table row: one row's selected flag and its checkbox slot.

use crate::components::checkbox::CheckboxCell;
use crate::components::selection::SelectionMode;

use super::item::TableCell;

/// A materialized table row.
///
/// The row owns its `selected` flag and keeps the checkbox cell (when the
/// selection mode renders one) equal to it. The table sets the flag through
/// [`set_selected`](TableRow::set_selected); user clicks go through
/// [`on_checkbox_change`](TableRow::on_checkbox_change) and are then reported
/// to the table by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    value: Option<String>,
    selected: bool,
    checkbox: Option<CheckboxCell>,
    cells: Vec<TableCell>,
    /// Position among all rows of the body (0-based)
    index: usize,
}

impl TableRow {
    /// Create a row identified by `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Create a row with no identity. Such rows display but never select.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Append a content cell.
    pub fn cell(mut self, content: impl Into<TableCell>) -> Self {
        self.cells.push(content.into());
        self
    }

    /// Replace all content cells.
    pub fn with_cells(mut self, cells: Vec<TableCell>) -> Self {
        self.cells = cells;
        self
    }

    pub(crate) fn at_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// The row ID, if it has a non-empty one.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref().filter(|value| !value.is_empty())
    }

    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn role(&self) -> &'static str {
        "row"
    }

    /// 1-based row index for assistive technology.
    pub fn aria_rowindex(&self) -> usize {
        self.index + 1
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn aria_selected(&self) -> &'static str {
        if self.selected { "true" } else { "false" }
    }

    pub fn checkbox(&self) -> Option<&CheckboxCell> {
        self.checkbox.as_ref()
    }

    /// Set the selected flag and mirror it onto the checkbox cell.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        if let Some(checkbox) = &mut self.checkbox {
            checkbox.set_checked(selected);
        }
    }

    /// Render the checkbox slot for `mode`.
    ///
    /// Interactive modes get a cell matching `selected`; `None` gets no cell.
    pub(crate) fn decorate(&mut self, mode: SelectionMode) {
        self.checkbox = mode.is_interactive().then(|| {
            let mut checkbox = CheckboxCell::with_checked(self.selected);
            checkbox.set_selects_single(mode == SelectionMode::Single);
            checkbox
        });
    }

    /// Toggle the checkbox cell as a click would and pull its value into
    /// `selected`.
    ///
    /// Returns the new value, or `None` when there is no enabled checkbox.
    pub fn on_checkbox_change(&mut self) -> Option<bool> {
        let checked = self.checkbox.as_mut()?.toggle()?;
        self.selected = checked;
        Some(checked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_mirrors_onto_checkbox() {
        let mut row = TableRow::new("row1");
        row.decorate(SelectionMode::Multiple);
        row.set_selected(true);
        assert!(row.checkbox().is_some_and(|c| c.checked()));
        row.set_selected(false);
        assert!(row.checkbox().is_some_and(|c| !c.checked()));
    }

    #[test]
    fn test_checkbox_change_updates_selected() {
        let mut row = TableRow::new("row1");
        row.decorate(SelectionMode::Single);
        assert_eq!(row.on_checkbox_change(), Some(true));
        assert!(row.is_selected());
        assert!(row.checkbox().is_some_and(|c| c.selects_single()));
    }

    #[test]
    fn test_no_checkbox_in_none_mode() {
        let mut row = TableRow::new("row3");
        row.set_selected(true);
        row.decorate(SelectionMode::None);
        assert!(row.checkbox().is_none());
        assert_eq!(row.on_checkbox_change(), None);
        assert!(row.is_selected());
    }

    #[test]
    fn test_empty_value_is_no_identity() {
        assert_eq!(TableRow::new("").value(), None);
        assert_eq!(TableRow::anonymous().value(), None);
        assert_eq!(TableRow::new("a").at_index(4).aria_rowindex(), 5);
    }
}

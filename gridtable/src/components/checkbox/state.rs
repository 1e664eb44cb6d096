//! Checkbox cell state.

/// A checkbox cell: checked, unchecked or indeterminate.
///
/// The cell knows nothing about rows or selection modes. The owning row or
/// head reads its value after a toggle and decides what it means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckboxCell {
    checked: bool,
    indeterminate: bool,
    disabled: bool,
    /// Rendering hint: the table only allows one selected row
    selects_single: bool,
}

impl CheckboxCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell with an initial checked value.
    pub fn with_checked(checked: bool) -> Self {
        Self {
            checked,
            ..Self::default()
        }
    }

    pub fn role(&self) -> &'static str {
        "gridcell"
    }

    /// Cells are reached through their row, never tabbed to directly.
    pub fn tab_index(&self) -> i32 {
        -1
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn indeterminate(&self) -> bool {
        self.indeterminate
    }

    pub fn set_indeterminate(&mut self, indeterminate: bool) {
        self.indeterminate = indeterminate;
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn selects_single(&self) -> bool {
        self.selects_single
    }

    pub fn set_selects_single(&mut self, selects_single: bool) {
        self.selects_single = selects_single;
    }

    /// Toggle as a user click would.
    ///
    /// An indeterminate cell becomes checked. Returns the new checked value,
    /// or `None` when the cell is disabled and nothing changed.
    pub fn toggle(&mut self) -> Option<bool> {
        if self.disabled {
            return None;
        }
        if self.indeterminate {
            self.indeterminate = false;
            self.checked = true;
        } else {
            self.checked = !self.checked;
        }
        Some(self.checked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_checked() {
        let mut cell = CheckboxCell::new();
        assert_eq!(cell.toggle(), Some(true));
        assert_eq!(cell.toggle(), Some(false));
    }

    #[test]
    fn test_toggle_from_indeterminate_checks() {
        let mut cell = CheckboxCell::new();
        cell.set_indeterminate(true);
        assert_eq!(cell.toggle(), Some(true));
        assert!(!cell.indeterminate());
    }

    #[test]
    fn test_disabled_cell_ignores_toggle() {
        let mut cell = CheckboxCell::with_checked(true);
        cell.set_disabled(true);
        assert_eq!(cell.toggle(), None);
        assert!(cell.checked());
    }
}

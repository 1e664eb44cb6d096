//! Keyboard focus between tab stops.
//!
//! Tab stops are identified by position in an ordered list supplied by the
//! owner (for the table: the indices of sortable head cells).

/// Tracks which tab stop is focused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusState {
    focused: Option<usize>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused stop.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Programmatically focus a stop.
    /// Returns true if focus changed.
    pub fn focus(&mut self, stop: usize) -> bool {
        if self.focused == Some(stop) {
            return false;
        }
        self.focused = Some(stop);
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next stop (Tab navigation), wrapping around.
    /// Returns the newly focused stop if focus changed.
    pub fn focus_next(&mut self, stops: &[usize]) -> Option<usize> {
        if stops.is_empty() {
            return None;
        }

        let next = match self.focused.and_then(|f| stops.iter().position(|&s| s == f)) {
            Some(i) => stops[(i + 1) % stops.len()],
            None => stops[0],
        };
        self.focus(next).then_some(next)
    }

    /// Focus the previous stop (Shift+Tab navigation), wrapping around.
    /// Returns the newly focused stop if focus changed.
    pub fn focus_prev(&mut self, stops: &[usize]) -> Option<usize> {
        if stops.is_empty() {
            return None;
        }

        let prev = match self.focused.and_then(|f| stops.iter().position(|&s| s == f)) {
            Some(0) | None => stops[stops.len() - 1],
            Some(i) => stops[i - 1],
        };
        self.focus(prev).then_some(prev)
    }

    /// Drop focus if the focused stop is no longer in `stops`.
    pub fn retain(&mut self, stops: &[usize]) {
        if let Some(focused) = self.focused
            && !stops.contains(&focused)
        {
            log::debug!("focused stop {} is gone, blurring", focused);
            self.focused = None;
        }
    }
}

//! Component event types and the input-handling trait.
//!
//! Components handle their own input and push `ComponentEvent`s onto the
//! `TableContext`, keeping the host loop a thin dispatcher.

use crate::context::TableContext;
use crate::keybinds::KeyCombo;

use super::table::SortDirection;
use super::virtualizer::VisibleRange;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentEventKind {
    /// The selected list changed
    Change,
    /// The materialized row window changed
    RangeChanged,
    /// The set of rows on screen changed
    VisibilityChanged,
    /// A sortable column was activated
    Sort,
}

/// Payload carried by an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDetail {
    Selection(Vec<String>),
    Range(VisibleRange),
    Sort {
        column: usize,
        direction: SortDirection,
    },
}

/// An event emitted by a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEvent {
    pub kind: ComponentEventKind,
    /// ID of the emitting component (e.g. `__table_0`)
    pub component_id: String,
    pub bubbles: bool,
    pub cancelable: bool,
    pub detail: EventDetail,
    default_prevented: bool,
}

impl ComponentEvent {
    fn new(
        kind: ComponentEventKind,
        component_id: impl Into<String>,
        cancelable: bool,
        detail: EventDetail,
    ) -> Self {
        Self {
            kind,
            component_id: component_id.into(),
            bubbles: true,
            cancelable,
            detail,
            default_prevented: false,
        }
    }

    /// Selection changed. Bubbling and cancelable.
    pub fn change(component_id: impl Into<String>, selected: Vec<String>) -> Self {
        Self::new(
            ComponentEventKind::Change,
            component_id,
            true,
            EventDetail::Selection(selected),
        )
    }

    pub fn range_changed(component_id: impl Into<String>, range: VisibleRange) -> Self {
        Self::new(
            ComponentEventKind::RangeChanged,
            component_id,
            false,
            EventDetail::Range(range),
        )
    }

    pub fn visibility_changed(component_id: impl Into<String>, range: VisibleRange) -> Self {
        Self::new(
            ComponentEventKind::VisibilityChanged,
            component_id,
            false,
            EventDetail::Range(range),
        )
    }

    pub fn sort(component_id: impl Into<String>, column: usize, direction: SortDirection) -> Self {
        Self::new(
            ComponentEventKind::Sort,
            component_id,
            true,
            EventDetail::Sort { column, direction },
        )
    }

    /// Selected IDs, for change events.
    pub fn selected(&self) -> Option<&[String]> {
        match &self.detail {
            EventDetail::Selection(ids) => Some(ids.as_slice()),
            _ => None,
        }
    }

    /// Visible range, for range and visibility events.
    pub fn range(&self) -> Option<VisibleRange> {
        match self.detail {
            EventDetail::Range(range) => Some(range),
            _ => None,
        }
    }

    /// Mark the event as cancelled. Has no effect on non-cancelable events.
    ///
    /// State changes the event reports have already been applied.
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Trait for components that handle input.
///
/// All methods default to `EventResult::Ignored`, so components only implement
/// the events they care about.
pub trait ComponentEvents {
    /// Handle a click at a component-relative position.
    fn on_click(&self, _x: u16, _y: u16, _cx: &TableContext) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a scroll wheel event. Positive amounts scroll down.
    fn on_scroll(&self, _amount: i32, _cx: &TableContext) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a key event while the component is focused.
    fn on_key(&self, _key: &KeyCombo, _cx: &TableContext) -> EventResult {
        EventResult::Ignored
    }
}

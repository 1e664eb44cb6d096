//! Host-facing event queue.
//!
//! Components push events here while handling input or host updates. The host
//! drains the queue after each call and reacts to the events it cares about.
//! By the time an event is drained, the component state it describes is
//! already fully applied.

use std::sync::{Arc, RwLock};

use crate::components::events::{ComponentEvent, ComponentEventKind};

#[derive(Debug, Default)]
struct TableContextInner {
    /// Events not yet drained by the host
    pending_events: Vec<ComponentEvent>,
    /// Selected IDs reported by the most recent change event
    selected_ids: Option<Vec<String>>,
}

/// Shared event sink passed to table operations.
///
/// Cloning is cheap; clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct TableContext {
    inner: Arc<RwLock<TableContextInner>>,
}

impl TableContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a component event to the queue.
    pub fn push_event(&self, event: ComponentEvent) {
        if let Ok(mut inner) = self.inner.write() {
            if event.kind == ComponentEventKind::Change
                && let Some(selected) = event.selected()
            {
                inner.selected_ids = Some(selected.to_vec());
            }
            inner.pending_events.push(event);
        }
    }

    /// Drain all pending events, oldest first.
    pub fn drain_events(&self) -> Vec<ComponentEvent> {
        self.inner
            .write()
            .ok()
            .map(|mut inner| std::mem::take(&mut inner.pending_events))
            .unwrap_or_default()
    }

    /// Number of events waiting to be drained.
    pub fn pending_count(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.pending_events.len())
            .unwrap_or(0)
    }

    /// Number of pending events of a given kind.
    pub fn pending_of(&self, kind: ComponentEventKind) -> usize {
        self.inner
            .read()
            .map(|inner| {
                inner
                    .pending_events
                    .iter()
                    .filter(|event| event.kind == kind)
                    .count()
            })
            .unwrap_or(0)
    }

    /// Selected IDs carried by the latest change event.
    pub fn selected_ids(&self) -> Option<Vec<String>> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.selected_ids.clone())
    }

    /// Forget the last reported selection.
    pub fn clear_selected(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.selected_ids = None;
        }
    }
}

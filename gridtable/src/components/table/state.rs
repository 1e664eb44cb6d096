//! Table component state and the selection engine.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::components::checkbox::CheckboxCell;
use crate::components::events::ComponentEvent;
use crate::components::selection::{Selection, SelectionMode};
use crate::components::virtualizer::VisibleRange;
use crate::context::TableContext;
use crate::error::TableError;
use crate::focus::FocusState;

use super::body::TableBody;
use super::head::{HeaderCheckboxState, TableHead};
use super::row::TableRow;

/// Unique identifier for a Table component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Internal state for the Table component.
///
/// `selection` is the only source of truth. Row flags, checkbox cells and the
/// header state are re-rendered from it by [`TableInner::sync`] after every
/// mutation.
#[derive(Debug)]
pub(super) struct TableInner<T> {
    pub mode: SelectionMode,
    pub selection: Selection,
    pub head: TableHead,
    pub body: TableBody<T>,
    pub focus: FocusState,
    /// Row cursor (body index) for keyboard navigation
    pub cursor: Option<usize>,
}

impl<T> TableInner<T> {
    pub fn new(mode: SelectionMode, selected: Vec<String>, head: TableHead, body: TableBody<T>) -> Self {
        Self {
            mode,
            selection: Selection::from_ids(selected),
            head,
            body,
            focus: FocusState::new(),
            cursor: None,
        }
    }

    pub fn header_state(&self) -> HeaderCheckboxState {
        HeaderCheckboxState::derive(self.mode, self.selection.len(), self.body.value_count())
    }

    /// Push selection-derived state down to rows and the head.
    pub fn sync(&mut self) {
        let mode = self.mode;
        for row in self.body.materialized_mut() {
            let selected = row.value().is_some_and(|value| self.selection.contains(value));
            row.set_selected(selected);
            row.decorate(mode);
        }
        let state = self.header_state();
        self.head.apply(mode, state);
    }

    /// Drop selected IDs that no longer match any row.
    pub fn drop_stale(&mut self) -> Vec<String> {
        let body = &self.body;
        self.selection.retain(|id| body.contains_value(id))
    }

    /// Rebuild the virtual window (if any) and re-apply selection to it.
    pub fn rematerialize(&mut self) {
        if let Some(body) = self.body.as_virtual_mut() {
            body.materialize();
        }
        self.sync();
    }

    /// Apply a row checkbox change. Returns false if the mode ignores it.
    pub fn toggle_row(&mut self, value: &str, checked: bool) -> bool {
        match self.mode {
            SelectionMode::None => return false,
            SelectionMode::Single => {
                self.selection.clear();
                if checked {
                    self.selection.insert(value);
                }
            }
            SelectionMode::Multiple => {
                if checked {
                    self.selection.insert(value);
                } else {
                    self.selection.remove(value);
                }
            }
        }
        self.sync();
        true
    }

    /// Apply a header checkbox change. Returns false if the mode ignores it.
    pub fn toggle_header(&mut self, checked: bool) -> bool {
        match self.mode {
            SelectionMode::None => return false,
            // No select-all with a single selection; the header only clears.
            SelectionMode::Single => {
                self.selection.clear();
            }
            SelectionMode::Multiple => {
                if checked {
                    let values = self.body.values();
                    self.selection.select_all(values);
                } else {
                    self.selection.clear();
                }
            }
        }
        self.sync();
        true
    }

    pub fn clamp_cursor(&mut self) {
        let count = self.body.row_count();
        if let Some(cursor) = self.cursor
            && cursor >= count
        {
            self.cursor = count.checked_sub(1);
        }
    }
}

/// A table with checkbox row selection.
///
/// `Table<T>` reconciles the host-visible `selected` list with row checkbox
/// clicks, header select-all, selection mode changes and (for virtualized
/// bodies) the scrolling row window. `T` is the backing item type of a
/// virtualized body; static tables use `Table<()>`.
///
/// Cloning gives another handle to the same table.
#[derive(Debug)]
pub struct Table<T = ()> {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    pub(super) inner: Arc<RwLock<TableInner<T>>>,
    /// Dirty flag for re-render.
    pub(super) dirty: Arc<AtomicBool>,
}

impl<T> Table<T> {
    pub(super) fn from_inner(inner: TableInner<T>) -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(inner)),
            dirty: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    pub fn role(&self) -> &'static str {
        "grid"
    }

    pub(super) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Selection mode
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn selects(&self) -> SelectionMode {
        self.inner.read().map(|g| g.mode).unwrap_or_default()
    }

    /// Set the selection mode.
    ///
    /// Checkbox cells appear or disappear with the mode. The selected list is
    /// kept as is, even when switching to `Single` with several rows selected.
    pub fn set_selects(&self, mode: SelectionMode) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.mode == mode {
                return;
            }
            log::debug!("{}: selects {:?} -> {:?}", self.id, guard.mode, mode);
            guard.mode = mode;
            guard.sync();
            self.mark_dirty();
        }
    }

    /// Set the selection mode from a `selects` attribute value.
    pub fn set_selects_attr(&self, value: Option<&str>) {
        self.set_selects(value.map(SelectionMode::parse).unwrap_or_default());
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Selected row IDs, in selection order.
    pub fn selected(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.selection.to_vec())
            .unwrap_or_default()
    }

    /// Number of selected rows.
    pub fn selected_count(&self) -> usize {
        self.inner.read().map(|g| g.selection.len()).unwrap_or(0)
    }

    /// Check if a row ID is selected.
    pub fn is_selected(&self, value: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.contains(value))
            .unwrap_or(false)
    }

    /// Replace the selection.
    ///
    /// IDs that match no row are dropped; if any were, a change event reports
    /// the filtered list.
    pub fn set_selected<I, S>(&self, ids: I, cx: &TableContext)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let changed = if let Ok(mut guard) = self.inner.write() {
            guard.selection.replace(ids);
            let dropped = guard.drop_stale();
            guard.sync();
            self.mark_dirty();
            if dropped.is_empty() {
                None
            } else {
                log::debug!("{}: dropped unknown selected ids {:?}", self.id, dropped);
                Some(guard.selection.to_vec())
            }
        } else {
            None
        };

        if let Some(selected) = changed {
            cx.push_event(ComponentEvent::change(self.id_string(), selected));
        }
    }

    /// Derived header checkbox state.
    pub fn header_state(&self) -> HeaderCheckboxState {
        self.inner
            .read()
            .map(|g| g.header_state())
            .unwrap_or_default()
    }

    /// The rendered header checkbox, if the mode shows one.
    pub fn header_checkbox(&self) -> Option<CheckboxCell> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.head.checkbox().cloned())
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Get the head row.
    pub fn head(&self) -> TableHead {
        self.inner.read().map(|g| g.head.clone()).unwrap_or_default()
    }

    /// Replace the head cells. Focus is dropped if its cell stopped being a
    /// tab stop.
    pub fn set_head(&self, head: TableHead) {
        if let Ok(mut guard) = self.inner.write() {
            guard.head = head;
            let stops = guard.head.tab_stops();
            guard.focus.retain(&stops);
            guard.sync();
            self.mark_dirty();
        }
    }

    /// Total number of rows, including unmaterialized ones.
    pub fn row_count(&self) -> usize {
        self.inner.read().map(|g| g.body.row_count()).unwrap_or(0)
    }

    /// Materialized rows, in order.
    pub fn rows(&self) -> Vec<TableRow> {
        self.inner
            .read()
            .map(|g| g.body.materialized().to_vec())
            .unwrap_or_default()
    }

    /// Materialized row at a body index.
    pub fn row(&self, index: usize) -> Option<TableRow> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.body.row_at(index).cloned())
    }

    /// Materialized row with the given ID.
    pub fn row_by_value(&self, value: &str) -> Option<TableRow> {
        self.inner.read().ok().and_then(|g| {
            g.body
                .materialized()
                .iter()
                .find(|row| row.value() == Some(value))
                .cloned()
        })
    }

    /// Whether rows come from a virtualized item source.
    pub fn is_virtualized(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.body.is_virtualized())
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Virtualization
    // -------------------------------------------------------------------------

    /// The materialized window of a virtualized body.
    pub fn visible_range(&self) -> Option<VisibleRange> {
        self.inner.read().ok().and_then(|g| {
            g.body
                .as_virtual()
                .and_then(|body| body.virtualizer().visible_range())
        })
    }

    /// Height of one row in terminal rows.
    pub fn row_height(&self) -> u16 {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.body.as_virtual().map(|b| b.virtualizer().item_height()))
            .unwrap_or(1)
    }

    /// Current scroll offset of a virtualized body.
    pub fn scroll_offset(&self) -> u32 {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.body.as_virtual().map(|b| b.virtualizer().scroll_offset()))
            .unwrap_or(0)
    }

    /// Run a virtualizer operation, re-materialize the window and report a
    /// range change.
    pub(super) fn with_virtualizer<F>(&self, cx: &TableContext, f: F) -> Result<(), TableError>
    where
        F: FnOnce(&mut crate::components::virtualizer::Virtualizer) -> Result<Option<VisibleRange>, TableError>,
    {
        let range = {
            let Ok(mut guard) = self.inner.write() else {
                return Ok(());
            };
            let body = guard.body.as_virtual_mut().ok_or(TableError::NotVirtualized)?;
            let had_window = body.virtualizer().visible_range().is_some();
            let range = f(body.virtualizer_mut())?;
            // A collapsed viewport reports no range but still empties the window.
            let collapsed = had_window && body.virtualizer().visible_range().is_none();
            if range.is_some() || collapsed {
                guard.rematerialize();
                self.mark_dirty();
            }
            range
        };

        if let Some(range) = range {
            self.push_range_events(range, cx);
        }
        Ok(())
    }

    fn push_range_events(&self, range: VisibleRange, cx: &TableContext) {
        cx.push_event(ComponentEvent::range_changed(self.id_string(), range));
        if let Some(on_screen) = self.on_screen_range() {
            cx.push_event(ComponentEvent::visibility_changed(self.id_string(), on_screen));
        }
    }

    /// Rows actually inside the viewport, without overscan.
    pub fn on_screen_range(&self) -> Option<VisibleRange> {
        self.inner.read().ok().and_then(|g| {
            g.body
                .as_virtual()
                .and_then(|body| body.virtualizer().on_screen_range())
        })
    }

    /// Set the viewport height of a virtualized body (called by the renderer).
    pub fn set_viewport_height(&self, height: u16, cx: &TableContext) -> Result<(), TableError> {
        self.with_virtualizer(cx, |v| Ok(v.set_viewport_height(height)))
    }

    /// Scroll a virtualized body to an absolute offset.
    pub fn scroll_to(&self, offset: u32, cx: &TableContext) -> Result<(), TableError> {
        self.with_virtualizer(cx, |v| Ok(v.scroll_to(offset)))
    }

    /// Scroll a virtualized body until item `index` is visible.
    ///
    /// Selection is untouched; rows entering the window show their selected
    /// state immediately.
    pub fn scroll_to_index(&self, index: usize, cx: &TableContext) -> Result<(), TableError> {
        let result = self.with_virtualizer(cx, |v| v.scroll_to_index(index));
        if let Err(TableError::IndexOutOfRange { index, len }) = &result {
            log::debug!("{}: scroll_to_index({}) past {} items", self.id, index, len);
        }
        result
    }

    // -------------------------------------------------------------------------
    // Row set changes
    // -------------------------------------------------------------------------

    /// Apply a row-set change made by `f`, then filter the selection.
    pub(super) fn change_rows<F>(&self, cx: &TableContext, f: F)
    where
        F: FnOnce(&mut TableInner<T>) -> Option<VisibleRange>,
    {
        let outcome = if let Ok(mut guard) = self.inner.write() {
            let range = f(&mut *guard);
            guard.rematerialize();
            let dropped = guard.drop_stale();
            guard.sync();
            guard.clamp_cursor();
            self.mark_dirty();
            let changed = if dropped.is_empty() {
                None
            } else {
                log::debug!("{}: rows changed, dropped selected ids {:?}", self.id, dropped);
                Some(guard.selection.to_vec())
            };
            Some((range, changed))
        } else {
            None
        };

        let Some((range, changed)) = outcome else {
            return;
        };
        if let Some(range) = range {
            self.push_range_events(range, cx);
        }
        if let Some(selected) = changed {
            cx.push_event(ComponentEvent::change(self.id_string(), selected));
        }
    }

    /// Replace the backing items of a virtualized body.
    pub fn set_items(&self, items: Vec<T>, cx: &TableContext) -> Result<(), TableError> {
        if !self.is_virtualized() {
            return Err(TableError::NotVirtualized);
        }
        self.change_rows(cx, move |inner| inner.body.as_virtual_mut()?.set_items(items));
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Focus and cursor
    // -------------------------------------------------------------------------

    /// Focus the first sortable head cell. Returns its column index.
    pub fn focus(&self) -> Option<usize> {
        let mut guard = self.inner.write().ok()?;
        let first = guard.head.tab_stops().first().copied()?;
        if guard.focus.focus(first) {
            self.mark_dirty();
        }
        Some(first)
    }

    /// Focused head cell column, if any.
    pub fn focused_column(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|g| g.focus.focused())
    }

    /// Move focus to the next sortable head cell.
    pub fn focus_next(&self) -> Option<usize> {
        let mut guard = self.inner.write().ok()?;
        let stops = guard.head.tab_stops();
        let moved = guard.focus.focus_next(&stops);
        if moved.is_some() {
            self.mark_dirty();
        }
        moved
    }

    /// Move focus to the previous sortable head cell.
    pub fn focus_prev(&self) -> Option<usize> {
        let mut guard = self.inner.write().ok()?;
        let stops = guard.head.tab_stops();
        let moved = guard.focus.focus_prev(&stops);
        if moved.is_some() {
            self.mark_dirty();
        }
        moved
    }

    /// Drop head focus.
    pub fn blur(&self) -> bool {
        let blurred = self
            .inner
            .write()
            .map(|mut g| g.focus.blur())
            .unwrap_or(false);
        if blurred {
            self.mark_dirty();
        }
        blurred
    }

    /// Row cursor position (body index).
    pub fn cursor(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|g| g.cursor)
    }

    /// Set the row cursor. Returns the previous position.
    pub fn set_cursor(&self, index: usize) -> Option<usize> {
        let mut guard = self.inner.write().ok()?;
        let previous = guard.cursor;
        if index < guard.body.row_count() && previous != Some(index) {
            guard.cursor = Some(index);
            self.mark_dirty();
        }
        previous
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Table<()> {
    /// Replace the rows of a static table.
    pub fn set_rows(&self, rows: Vec<TableRow>, cx: &TableContext) {
        self.change_rows(cx, move |inner| {
            inner.body = TableBody::rows(rows);
            None
        });
    }
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

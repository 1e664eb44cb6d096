//! Event handling for the Table component.

use crate::components::checkbox::CHECKBOX_WIDTH;
use crate::components::events::{ComponentEvent, ComponentEvents, EventResult};
use crate::components::selection::SelectionMode;
use crate::context::TableContext;
use crate::keybinds::{Key, KeyCombo};

use super::state::Table;

impl<T> Table<T> {
    /// A row checkbox changed to `checked`.
    ///
    /// Applies the change to the selection according to the mode, re-renders
    /// rows and the header, then emits one change event. Ignored in `None`
    /// mode and for IDs that match no row.
    pub fn handle_row_toggle(&self, value: &str, checked: bool, cx: &TableContext) -> EventResult {
        if value.is_empty() {
            log::warn!("{}: row toggle without a row id ignored", self.id());
            return EventResult::Ignored;
        }

        let selected = {
            let Ok(mut guard) = self.inner.write() else {
                return EventResult::Ignored;
            };
            if !guard.body.contains_value(value) {
                log::warn!("{}: no row with id {:?}, toggle ignored", self.id(), value);
                return EventResult::Ignored;
            }
            if !guard.toggle_row(value, checked) {
                return EventResult::Ignored;
            }
            guard.selection.to_vec()
        };

        log::debug!("{}: row {} -> {}", self.id(), value, checked);
        self.mark_dirty();
        cx.push_event(ComponentEvent::change(self.id_string(), selected));
        EventResult::Consumed
    }

    /// The header checkbox changed.
    ///
    /// `checked` is true when the click should select everything (the box was
    /// unchecked or indeterminate). In virtualized tables this covers every
    /// backing item, not just the materialized window.
    pub fn handle_header_toggle(&self, checked: bool, cx: &TableContext) -> EventResult {
        let selected = {
            let Ok(mut guard) = self.inner.write() else {
                return EventResult::Ignored;
            };
            if !guard.toggle_header(checked) {
                return EventResult::Ignored;
            }
            guard.selection.to_vec()
        };

        log::debug!("{}: header -> {}", self.id(), checked);
        self.mark_dirty();
        cx.push_event(ComponentEvent::change(self.id_string(), selected));
        EventResult::Consumed
    }

    /// Click on the checkbox of the materialized row at body index `index`.
    pub fn on_row_checkbox(&self, index: usize, cx: &TableContext) -> EventResult {
        let toggled = {
            let Ok(mut guard) = self.inner.write() else {
                return EventResult::Ignored;
            };
            let Some(row) = guard.body.row_at_mut(index) else {
                return EventResult::Ignored;
            };
            let Some(value) = row.value().map(str::to_string) else {
                log::warn!("{}: row {} has no id, checkbox click ignored", self.id(), index);
                return EventResult::Ignored;
            };
            row.on_checkbox_change().map(|checked| (value, checked))
        };

        match toggled {
            Some((value, checked)) => self.handle_row_toggle(&value, checked, cx),
            None => EventResult::Ignored,
        }
    }

    /// Click on the header checkbox.
    pub fn on_header_checkbox(&self, cx: &TableContext) -> EventResult {
        let checked = self
            .inner
            .write()
            .ok()
            .and_then(|mut g| g.head.checkbox_mut().and_then(|checkbox| checkbox.toggle()));
        match checked {
            Some(checked) => self.handle_header_toggle(checked, cx),
            None => EventResult::Ignored,
        }
    }

    /// Activate a sortable head cell.
    pub fn on_head_cell_activate(&self, column: usize, cx: &TableContext) -> EventResult {
        let direction = self.inner.write().ok().and_then(|mut g| g.head.sort(column));
        let Some(direction) = direction else {
            return EventResult::Ignored;
        };

        log::debug!("{}: sort column {} {}", self.id(), column, direction.as_attr());
        self.mark_dirty();
        cx.push_event(ComponentEvent::sort(self.id_string(), column, direction));
        EventResult::Consumed
    }

    /// Body index under a body-relative y position.
    fn index_from_body_y(&self, y: u16) -> Option<usize> {
        self.inner.read().ok().and_then(|g| {
            let index = match g.body.as_virtual() {
                Some(body) => {
                    let v = body.virtualizer();
                    ((v.scroll_offset() + y as u32) / v.item_height() as u32) as usize
                }
                None => y as usize,
            };
            (index < g.body.row_count()).then_some(index)
        })
    }

    fn has_checkboxes(&self) -> bool {
        self.selects().is_interactive()
    }

    /// Move the row cursor by `delta`, scrolling it into view.
    fn move_cursor(&self, delta: isize, cx: &TableContext) -> EventResult {
        let target = match self.cursor() {
            Some(cursor) => cursor.saturating_add_signed(delta),
            None => 0,
        };
        self.move_cursor_to(target, cx)
    }

    fn move_cursor_to(&self, index: usize, cx: &TableContext) -> EventResult {
        let count = self.row_count();
        if count == 0 {
            return EventResult::Ignored;
        }
        let target = index.min(count - 1);
        self.blur();
        self.set_cursor(target);
        if self.is_virtualized() {
            // Target is clamped to the item count, so this cannot fail
            let _ = self.scroll_to_index(target, cx);
        }
        EventResult::Consumed
    }

    fn page_size(&self) -> usize {
        self.on_screen_range()
            .map(|range| range.len())
            .unwrap_or(1)
            .max(1)
    }
}

fn consumed_if(handled: bool) -> EventResult {
    if handled {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

impl<T> ComponentEvents for Table<T> {
    fn on_click(&self, x: u16, y: u16, cx: &TableContext) -> EventResult {
        // Head row
        if y == 0 {
            if x < CHECKBOX_WIDTH && self.has_checkboxes() {
                return self.on_header_checkbox(cx);
            }
            let column = self.head().column_at(x, CHECKBOX_WIDTH);
            return match column {
                Some(column) => self.on_head_cell_activate(column, cx),
                None => EventResult::Ignored,
            };
        }

        let Some(index) = self.index_from_body_y(y - 1) else {
            return EventResult::Ignored;
        };
        self.set_cursor(index);
        if x < CHECKBOX_WIDTH && self.has_checkboxes() {
            return self.on_row_checkbox(index, cx);
        }
        EventResult::Consumed
    }

    fn on_scroll(&self, amount: i32, cx: &TableContext) -> EventResult {
        if !self.is_virtualized() {
            return EventResult::Ignored;
        }
        match self.with_virtualizer(cx, |v| Ok(v.scroll_by(amount))) {
            Ok(()) => EventResult::Consumed,
            Err(_) => EventResult::Ignored,
        }
    }

    fn on_key(&self, key: &KeyCombo, cx: &TableContext) -> EventResult {
        if matches!(key.key, Key::Enter | Key::Space)
            && let Some(column) = self.focused_column()
        {
            return self.on_head_cell_activate(column, cx);
        }

        match key.key {
            Key::Tab if key.modifiers.shift => consumed_if(self.focus_prev().is_some()),
            Key::Tab => consumed_if(self.focus_next().is_some()),
            Key::BackTab => consumed_if(self.focus_prev().is_some()),
            Key::Escape => consumed_if(self.blur()),
            Key::Space => match self.cursor() {
                Some(cursor) => self.on_row_checkbox(cursor, cx),
                None => EventResult::Ignored,
            },
            Key::Char('a') if key.modifiers.ctrl => {
                if self.selects() != SelectionMode::Multiple {
                    return EventResult::Ignored;
                }
                self.on_header_checkbox(cx)
            }
            Key::Up => self.move_cursor(-1, cx),
            Key::Down => self.move_cursor(1, cx),
            Key::PageUp => self.move_cursor(-(self.page_size() as isize), cx),
            Key::PageDown => self.move_cursor(self.page_size() as isize, cx),
            Key::Home => self.move_cursor_to(0, cx),
            Key::End => self.move_cursor_to(self.row_count().saturating_sub(1), cx),
            _ => EventResult::Ignored,
        }
    }
}

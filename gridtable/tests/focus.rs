//! Tests for head focus, sorting and keyboard handling.

use gridtable::components::EventDetail;
use gridtable::prelude::*;

fn head() -> TableHead {
    TableHead::new()
        .cell(TableHeadCell::new("Name").sortable())
        .cell(TableHeadCell::new("Email"))
        .cell(TableHeadCell::new("Age").sortable().sorted(SortDirection::Descending))
}

fn table() -> Table {
    TableBuilder::new()
        .selects(SelectionMode::Multiple)
        .head(head())
        .rows((1..=3).map(|i| TableRow::new(format!("row{i}"))))
        .build()
}

fn key(key: Key) -> KeyCombo {
    KeyCombo::key(key)
}

#[test]
fn test_focus_targets_first_sortable_cell() {
    let table = table();
    assert_eq!(table.focused_column(), None);

    assert_eq!(table.focus(), Some(0));
    assert_eq!(table.focused_column(), Some(0));
    assert_eq!(table.head().cells()[0].tab_index(), 0);
    assert_eq!(table.head().cells()[1].tab_index(), -1);
}

#[test]
fn test_focus_without_sortable_cells() {
    let cx = TableContext::new();
    let table = TableBuilder::new()
        .column(TableHeadCell::new("Name"))
        .row(TableRow::new("row1"))
        .build();

    assert_eq!(table.focus(), None);
    assert_eq!(table.on_key(&key(Key::Tab), &cx), EventResult::Ignored);
}

#[test]
fn test_tab_cycles_sortable_cells() {
    let cx = TableContext::new();
    let table = table();
    table.focus();

    assert_eq!(table.on_key(&key(Key::Tab), &cx), EventResult::Consumed);
    assert_eq!(table.focused_column(), Some(2));
    table.on_key(&key(Key::Tab), &cx);
    assert_eq!(table.focused_column(), Some(0));
    table.on_key(&key(Key::BackTab), &cx);
    assert_eq!(table.focused_column(), Some(2));
    table.on_key(&key(Key::Tab).shift(), &cx);
    assert_eq!(table.focused_column(), Some(0));
}

#[test]
fn test_enter_sorts_focused_cell() {
    let cx = TableContext::new();
    let table = table();
    table.focus();

    assert_eq!(table.on_key(&key(Key::Enter), &cx), EventResult::Consumed);
    let head = table.head();
    assert_eq!(head.cells()[0].sort_direction(), Some(SortDirection::Ascending));
    assert_eq!(head.cells()[0].aria_sort(), "ascending");
    assert_eq!(head.cells()[2].sort_direction(), None);

    table.on_key(&key(Key::Enter), &cx);
    assert_eq!(table.head().cells()[0].aria_sort(), "descending");

    let events = cx.drain_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, ComponentEventKind::Sort);
    assert_eq!(
        events[1].detail,
        EventDetail::Sort {
            column: 0,
            direction: SortDirection::Descending
        }
    );
    assert!(table.selected().is_empty());
}

#[test]
fn test_space_on_focused_head_sorts_instead_of_selecting() {
    let cx = TableContext::new();
    let table = table();
    table.set_cursor(0);
    table.focus();
    table.on_key(&key(Key::Tab), &cx);

    table.on_key(&key(Key::Space), &cx);

    assert_eq!(table.head().cells()[2].sort_direction(), Some(SortDirection::Ascending));
    assert!(table.selected().is_empty());
}

#[test]
fn test_row_keys_blur_head() {
    let cx = TableContext::new();
    let table = table();
    table.focus();

    table.on_key(&key(Key::Down), &cx);
    assert_eq!(table.focused_column(), None);
    assert_eq!(table.cursor(), Some(0));

    table.on_key(&key(Key::Down), &cx);
    table.on_key(&key(Key::Space), &cx);
    assert_eq!(table.selected(), ["row2"]);

    // Cursor stops at the last row
    table.on_key(&key(Key::Down), &cx);
    table.on_key(&key(Key::Down), &cx);
    assert_eq!(table.cursor(), Some(2));
}

#[test]
fn test_escape_blurs() {
    let cx = TableContext::new();
    let table = table();
    table.focus();

    assert_eq!(table.on_key(&key(Key::Escape), &cx), EventResult::Consumed);
    assert_eq!(table.focused_column(), None);
    assert_eq!(table.on_key(&key(Key::Escape), &cx), EventResult::Ignored);
}

#[test]
fn test_head_click() {
    let cx = TableContext::new();
    let table = table();

    // Checkbox slot, then 16 columns per cell
    assert_eq!(table.on_click(2, 0, &cx), EventResult::Consumed);
    assert_eq!(table.head().cells()[0].sort_direction(), Some(SortDirection::Ascending));

    assert_eq!(table.on_click(20, 0, &cx), EventResult::Ignored);

    table.on_click(0, 0, &cx);
    assert_eq!(table.selected(), ["row1", "row2", "row3"]);
    assert_eq!(cx.pending_of(ComponentEventKind::Sort), 1);
    assert_eq!(cx.pending_of(ComponentEventKind::Change), 1);
}

#[test]
fn test_set_head_drops_stale_focus() {
    let table = table();
    table.focus();

    table.set_head(TableHead::new().cell(TableHeadCell::new("Name")));

    assert_eq!(table.focused_column(), None);
    assert!(table.header_checkbox().is_some());
}

#[test]
fn test_ctrl_a_ignored_in_single_mode() {
    let cx = TableContext::new();
    let table = table();
    table.set_selects(SelectionMode::Single);

    assert_eq!(
        table.on_key(&key(Key::Char('a')).ctrl(), &cx),
        EventResult::Ignored
    );
    assert!(table.selected().is_empty());
}

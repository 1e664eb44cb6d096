//! Tests for selection on virtualized tables.

use gridtable::prelude::*;

fn items(count: u32) -> Vec<u32> {
    (0..count).collect()
}

fn virtual_table(count: u32, selected: &[&str]) -> Table<u32> {
    TableBuilder::virtualized(items(count))
        .render_item(|item, _| vec![TableCell::new(format!("Item {item}"))])
        .selects(SelectionMode::Multiple)
        .selected(selected.iter().copied())
        .viewport_height(10)
        .build()
}

fn kinds(events: &[ComponentEvent]) -> Vec<ComponentEventKind> {
    events.iter().map(|event| event.kind).collect()
}

#[test]
fn test_partial_selection_over_offscreen_items() {
    let table = virtual_table(50, &["1", "47"]);

    let state = table.header_state();
    assert!(!state.checked);
    assert!(state.indeterminate);

    let header = table.header_checkbox().unwrap();
    assert!(!header.checked());
    assert!(header.indeterminate());

    assert_eq!(table.row_count(), 50);
    assert_eq!(table.rows().len(), 11);
    assert!(table.row(1).unwrap().is_selected());
    assert!(table.row(47).is_none());
}

#[test]
fn test_offscreen_selection_shows_after_scroll() {
    let cx = TableContext::new();
    let table = virtual_table(50, &[]);

    table.set_selected(["47"], &cx);
    assert_eq!(cx.pending_count(), 0);

    table.scroll_to_index(47, &cx).unwrap();

    let row = table.row(47).unwrap();
    assert!(row.is_selected());
    assert!(row.checkbox().unwrap().checked());
    assert_eq!(row.aria_rowindex(), 48);
    assert_eq!(table.scroll_offset(), 38);
    assert_eq!(table.selected(), ["47"]);

    let events = cx.drain_events();
    assert_eq!(
        kinds(&events),
        [ComponentEventKind::RangeChanged, ComponentEventKind::VisibilityChanged]
    );
    assert_eq!(events[0].range(), Some(VisibleRange::new(38, 48)));
    assert_eq!(events[1].range(), Some(VisibleRange::new(38, 47)));
}

#[test]
fn test_scroll_to_visible_index_is_quiet() {
    let cx = TableContext::new();
    let table = virtual_table(50, &["3"]);

    table.scroll_to_index(3, &cx).unwrap();

    assert_eq!(table.scroll_offset(), 0);
    assert_eq!(cx.pending_count(), 0);
    assert_eq!(table.selected(), ["3"]);
}

#[test]
fn test_shrinking_items_drops_selected_id() {
    let cx = TableContext::new();
    let table = virtual_table(50, &["1", "47"]);

    table.set_items(items(40), &cx).unwrap();

    assert_eq!(table.selected(), ["1"]);
    let events = cx.drain_events();
    assert_eq!(kinds(&events), [ComponentEventKind::Change]);
    assert_eq!(events[0].selected(), Some(&["1".to_string()][..]));
    assert_eq!(table.row_count(), 40);
}

#[test]
fn test_shrinking_items_while_scrolled() {
    let cx = TableContext::new();
    let table = virtual_table(50, &["47"]);
    table.scroll_to_index(47, &cx).unwrap();
    cx.drain_events();

    table.set_items(items(40), &cx).unwrap();

    assert!(table.selected().is_empty());
    assert_eq!(table.scroll_offset(), 30);
    assert_eq!(table.visible_range(), Some(VisibleRange::new(30, 39)));
    assert_eq!(
        kinds(&cx.drain_events()),
        [
            ComponentEventKind::RangeChanged,
            ComponentEventKind::VisibilityChanged,
            ComponentEventKind::Change
        ]
    );
}

#[test]
fn test_replacing_items_keeps_surviving_ids_quietly() {
    let cx = TableContext::new();
    let table = virtual_table(50, &["1", "7"]);

    table.set_items(items(60), &cx).unwrap();

    assert_eq!(table.selected(), ["1", "7"]);
    assert_eq!(cx.pending_count(), 0);
    assert!(table.header_state().indeterminate);
}

#[test]
fn test_custom_item_value_filters_stale_ids() {
    let table = TableBuilder::virtualized(items(50))
        .item_value(|item, _| format!("applied-{item}"))
        .selects(SelectionMode::Multiple)
        .selected(["0", "48", "applied-47"])
        .viewport_height(10)
        .build();

    assert_eq!(table.selected(), ["applied-47"]);
    assert_eq!(table.rows()[0].value(), Some("applied-0"));
    assert!(table.header_state().indeterminate);
}

#[test]
fn test_header_selects_every_item() {
    let cx = TableContext::new();
    let table = virtual_table(50, &["1", "47"]);

    table.on_header_checkbox(&cx);

    let selected = table.selected();
    assert_eq!(selected.len(), 50);
    assert_eq!(selected[..3], ["1", "47", "0"]);
    assert!(table.header_state().checked);
    assert_eq!(cx.pending_of(ComponentEventKind::Change), 1);

    table.scroll_to_index(49, &cx).unwrap();
    assert!(table.row(49).unwrap().is_selected());
}

#[test]
fn test_wheel_scroll_rematerializes_window() {
    let cx = TableContext::new();
    let table = virtual_table(50, &["6", "15"]);

    assert_eq!(table.on_scroll(5, &cx), EventResult::Consumed);

    let rows = table.rows();
    assert_eq!(rows.len(), 11);
    assert_eq!(rows[0].index(), 5);
    assert!(table.row(6).unwrap().is_selected());
    assert!(table.row(15).unwrap().is_selected());
    assert!(!table.row(7).unwrap().is_selected());

    let events = cx.drain_events();
    assert_eq!(events[0].range(), Some(VisibleRange::new(5, 15)));
    assert_eq!(events[1].range(), Some(VisibleRange::new(5, 14)));

    // Scrolling past the top clamps to zero
    table.on_scroll(-100, &cx);
    table.on_scroll(-1, &cx);
    assert_eq!(table.scroll_offset(), 0);
    assert_eq!(cx.pending_of(ComponentEventKind::RangeChanged), 1);
}

#[test]
fn test_nothing_materialized_without_viewport() {
    let cx = TableContext::new();
    let table = TableBuilder::virtualized(items(50))
        .selects(SelectionMode::Multiple)
        .selected(["2"])
        .build();

    assert!(table.rows().is_empty());
    assert_eq!(table.visible_range(), None);
    assert!(table.header_state().indeterminate);

    table.set_viewport_height(5, &cx).unwrap();

    assert_eq!(table.visible_range(), Some(VisibleRange::new(0, 5)));
    assert!(table.row(2).unwrap().is_selected());
    assert_eq!(cx.pending_of(ComponentEventKind::RangeChanged), 1);
}

#[test]
fn test_click_maps_through_scroll_offset() {
    let cx = TableContext::new();
    let table = virtual_table(50, &[]);
    table.scroll_to(40, &cx).unwrap();

    table.on_click(0, 1, &cx);

    assert_eq!(table.selected(), ["40"]);
    assert_eq!(table.cursor(), Some(40));
}

#[test]
fn test_click_maps_through_row_height() {
    let cx = TableContext::new();
    let table = TableBuilder::virtualized(items(10))
        .selects(SelectionMode::Multiple)
        .row_height(2)
        .viewport_height(4)
        .build();

    assert_eq!(table.visible_range(), Some(VisibleRange::new(0, 2)));
    table.on_click(0, 3, &cx);

    assert_eq!(table.selected(), ["1"]);
}

#[test]
fn test_keyboard_end_then_space() {
    let cx = TableContext::new();
    let table = virtual_table(50, &[]);

    table.on_key(&KeyCombo::key(Key::End), &cx);
    assert_eq!(table.cursor(), Some(49));
    assert_eq!(table.visible_range(), Some(VisibleRange::new(40, 49)));

    table.on_key(&KeyCombo::key(Key::Space), &cx);
    assert_eq!(table.selected(), ["49"]);
}

#[test]
fn test_keyboard_page_down_scrolls_cursor_into_view() {
    let cx = TableContext::new();
    let table = virtual_table(50, &[]);

    table.on_key(&KeyCombo::key(Key::Down), &cx);
    assert_eq!(table.cursor(), Some(0));

    table.on_key(&KeyCombo::key(Key::PageDown), &cx);
    assert_eq!(table.cursor(), Some(10));
    assert_eq!(table.scroll_offset(), 1);

    table.on_key(&KeyCombo::key(Key::Home), &cx);
    assert_eq!(table.cursor(), Some(0));
    assert_eq!(table.scroll_offset(), 0);
}

#[test]
fn test_ctrl_a_selects_all_items() {
    let cx = TableContext::new();
    let table = virtual_table(20, &[]);

    table.on_key(&KeyCombo::key(Key::Char('a')).ctrl(), &cx);

    assert_eq!(table.selected_count(), 20);
    assert!(table.is_selected("19"));
}

#[test]
fn test_scroll_errors() {
    let cx = TableContext::new();
    let table = virtual_table(50, &[]);
    assert!(matches!(
        table.scroll_to_index(50, &cx),
        Err(TableError::IndexOutOfRange { index: 50, len: 50 })
    ));

    let table = TableBuilder::new().row(TableRow::new("row1")).build();
    assert!(matches!(table.scroll_to_index(0, &cx), Err(TableError::NotVirtualized)));
    assert!(matches!(table.scroll_to(3, &cx), Err(TableError::NotVirtualized)));
    assert!(matches!(table.set_items(vec![()], &cx), Err(TableError::NotVirtualized)));
    assert_eq!(table.on_scroll(1, &cx), EventResult::Ignored);
    assert_eq!(cx.pending_count(), 0);
}

#[test]
fn test_collapsed_viewport_empties_window() {
    let cx = TableContext::new();
    let table = virtual_table(50, &["3"]);
    assert_eq!(table.rows().len(), 11);

    table.set_viewport_height(0, &cx).unwrap();

    assert_eq!(table.visible_range(), None);
    assert!(table.rows().is_empty());
    assert_eq!(cx.pending_count(), 0);
    assert_eq!(table.selected(), ["3"]);

    table.set_viewport_height(10, &cx).unwrap();

    assert_eq!(table.rows().len(), 11);
    assert!(table.row(3).unwrap().is_selected());
    assert_eq!(cx.pending_of(ComponentEventKind::RangeChanged), 1);
}

#[test]
fn test_empty_item_ids_are_not_selectable() {
    let cx = TableContext::new();
    let table = TableBuilder::virtualized(items(4))
        .item_value(|item, _| if item % 2 == 0 { String::new() } else { format!("v{item}") })
        .selects(SelectionMode::Multiple)
        .viewport_height(10)
        .build();

    table.on_header_checkbox(&cx);

    assert_eq!(table.selected(), ["v1", "v3"]);
    assert!(table.header_state().checked);
    assert_eq!(table.handle_row_toggle("", true, &cx), EventResult::Ignored);
}

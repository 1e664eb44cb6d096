//! Drawing a table with crossterm commands.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use gridtable::components::{CHECKBOX_WIDTH, SortDirection, Table, TableHeadCell, checkbox_indicator};

/// Screen rows taken by things other than table rows (head and status line).
pub const CHROME_HEIGHT: u16 = 2;

fn fit(text: &str, width: u16) -> String {
    let width = width as usize;
    let text: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{text:<width$}")
}

fn head_label(cell: &TableHeadCell) -> String {
    match cell.sort_direction() {
        Some(SortDirection::Ascending) => format!("{} ▲", cell.label()),
        Some(SortDirection::Descending) => format!("{} ▼", cell.label()),
        None => cell.label().to_string(),
    }
}

/// Draw the head, the visible rows and a status line.
pub fn draw<T>(out: &mut impl Write, table: &Table<T>, height: u16, status: &str) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    let head = table.head();
    let gutter = " ".repeat(CHECKBOX_WIDTH as usize);
    match table.header_checkbox() {
        Some(checkbox) => queue!(out, Print(checkbox_indicator(&checkbox)))?,
        None => queue!(out, Print(&gutter))?,
    }
    let focused = table.focused_column();
    for (i, cell) in head.cells().iter().enumerate() {
        let label = fit(&head_label(cell), cell.column_width());
        if focused == Some(i) {
            queue!(
                out,
                SetAttribute(Attribute::Reverse),
                Print(label),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            queue!(out, SetAttribute(Attribute::Bold), Print(label), SetAttribute(Attribute::Reset))?;
        }
    }

    let body_height = height.saturating_sub(CHROME_HEIGHT) as i64;
    let row_height = table.row_height() as i64;
    let scroll_offset = table.scroll_offset() as i64;
    let cursor = table.cursor();

    for row in table.rows() {
        let top = row.index() as i64 * row_height - scroll_offset;
        if top < 0 || top >= body_height {
            continue;
        }
        queue!(out, MoveTo(0, 1 + top as u16))?;
        if cursor == Some(row.index()) {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        match row.checkbox() {
            Some(checkbox) => queue!(out, Print(checkbox_indicator(checkbox)))?,
            None if row.is_selected() => queue!(out, Print("* "))?,
            None => queue!(out, Print(&gutter))?,
        }
        for (cell, column) in row.cells().iter().zip(head.cells()) {
            queue!(out, Print(fit(cell.content(), column.column_width())))?;
        }
        queue!(out, SetAttribute(Attribute::Reset))?;
    }

    queue!(
        out,
        MoveTo(0, height.saturating_sub(1)),
        SetAttribute(Attribute::Dim),
        Print(status),
        SetAttribute(Attribute::Reset)
    )?;
    out.flush()
}

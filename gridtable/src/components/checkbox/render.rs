//! Checkbox cell rendering.

use super::CheckboxCell;

/// Terminal columns taken by the checkbox slot of a row or the head.
pub const CHECKBOX_WIDTH: u16 = 2;

/// Indicator glyph for a checkbox cell.
///
/// Single-select tables never show the partial-selection glyph; an
/// indeterminate header there reads as unchecked.
pub fn checkbox_indicator(cell: &CheckboxCell) -> &'static str {
    if cell.indeterminate() && !cell.selects_single() {
        return "▣ ";
    }
    match (cell.checked(), cell.disabled()) {
        (true, false) => "■ ",
        (true, true) => "▪ ",
        (false, false) => "□ ",
        (false, true) => "▫ ",
    }
}

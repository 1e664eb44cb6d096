//! Tri-state checkbox cell used in the table head and in each row.

mod render;
mod state;

pub use render::{CHECKBOX_WIDTH, checkbox_indicator};
pub use state::CheckboxCell;

//! Host-facing table configuration.

use serde::Deserialize;

use crate::components::selection::SelectionMode;
use crate::error::TableError;

fn default_row_height() -> u16 {
    1
}

/// Attributes a host sets on a table.
///
/// Parsed leniently: an unknown `selects` value means no selection, missing
/// fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    /// Selection mode.
    #[serde(default)]
    pub selects: SelectionMode,

    /// Initially selected row IDs, in selection order.
    #[serde(default)]
    pub selected: Vec<String>,

    /// Height of each virtualized item in terminal rows.
    #[serde(default = "default_row_height")]
    pub row_height: u16,

    /// Initial viewport height of a virtualized body. Nothing is
    /// materialized while this is 0.
    #[serde(default)]
    pub viewport_height: u16,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            selects: SelectionMode::None,
            selected: Vec::new(),
            row_height: default_row_height(),
            viewport_height: 0,
        }
    }
}

impl TableConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = TableConfig::from_json("{}").unwrap();
        assert_eq!(config, TableConfig::default());
    }

    #[test]
    fn test_null_selects_is_none() {
        let config = TableConfig::from_json(r#"{"selects": null}"#).unwrap();
        assert_eq!(config.selects, SelectionMode::None);
    }
}

//! Error types for table configuration and scrolling.
//!
//! Selection operations never fail: stale IDs are dropped and reported through
//! the regular change event instead.

use thiserror::Error;

/// Errors returned by table operations that can be rejected.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("invalid table configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("item index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("operation requires a virtualized table body")]
    NotVirtualized,
}

//! Virtualizer viewport state.

use crate::error::TableError;

use super::VisibleRange;

/// Rows rendered past the bottom edge of the viewport.
const OVERSCAN: usize = 1;

/// Viewport math for a fixed-height item list.
///
/// Offsets and heights are in terminal rows. `visible_range` covers every
/// item that intersects the viewport plus one overscan item.
#[derive(Debug, Clone)]
pub struct Virtualizer {
    item_count: usize,
    item_height: u16,
    viewport_height: u16,
    scroll_offset: u32,
    /// Last range reported to the owner, used to detect changes.
    reported: Option<VisibleRange>,
}

impl Virtualizer {
    /// Create a virtualizer for `item_count` items of `item_height` rows each.
    pub fn new(item_count: usize, item_height: u16) -> Self {
        Self {
            item_count,
            item_height: item_height.max(1),
            viewport_height: 0,
            scroll_offset: 0,
            reported: None,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn item_height(&self) -> u16 {
        self.item_height
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Current scroll offset (the scrollTop of the body).
    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    /// Total content height.
    pub fn total_height(&self) -> u32 {
        self.item_count as u32 * self.item_height as u32
    }

    fn max_scroll_offset(&self) -> u32 {
        self.total_height()
            .saturating_sub(self.viewport_height as u32)
    }

    /// Get the visible item range.
    pub fn visible_range(&self) -> Option<VisibleRange> {
        if self.item_count == 0 || self.viewport_height == 0 {
            return None;
        }
        let item_height = self.item_height as u32;
        let first = (self.scroll_offset / item_height) as usize;
        let visible_count = (self.viewport_height as u32).div_ceil(item_height) as usize;
        let last = (first + visible_count + OVERSCAN - 1).min(self.item_count - 1);
        Some(VisibleRange::new(first.min(last), last))
    }

    /// Items that intersect the viewport, without overscan.
    pub fn on_screen_range(&self) -> Option<VisibleRange> {
        if self.item_count == 0 || self.viewport_height == 0 {
            return None;
        }
        let item_height = self.item_height as u32;
        let first = (self.scroll_offset / item_height) as usize;
        let bottom = self.scroll_offset + self.viewport_height as u32;
        let last = (bottom.div_ceil(item_height) as usize)
            .saturating_sub(1)
            .min(self.item_count - 1);
        Some(VisibleRange::new(first.min(last), last))
    }

    /// Set the item count, clamping the scroll offset.
    pub fn set_item_count(&mut self, count: usize) -> Option<VisibleRange> {
        self.item_count = count;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
        self.refresh()
    }

    /// Set the viewport height (called by the renderer).
    pub fn set_viewport_height(&mut self, height: u16) -> Option<VisibleRange> {
        self.viewport_height = height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
        self.refresh()
    }

    /// Scroll to an absolute offset.
    pub fn scroll_to(&mut self, offset: u32) -> Option<VisibleRange> {
        self.scroll_offset = offset.min(self.max_scroll_offset());
        self.refresh()
    }

    /// Scroll by a signed number of rows.
    pub fn scroll_by(&mut self, delta: i32) -> Option<VisibleRange> {
        let offset = (self.scroll_offset as i64 + delta as i64).max(0) as u32;
        self.scroll_to(offset)
    }

    /// Scroll the minimum distance that makes `index` fully visible.
    pub fn scroll_to_index(&mut self, index: usize) -> Result<Option<VisibleRange>, TableError> {
        if index >= self.item_count {
            return Err(TableError::IndexOutOfRange {
                index,
                len: self.item_count,
            });
        }
        let viewport = self.viewport_height as u32;
        if viewport == 0 {
            return Ok(None);
        }

        let item_top = index as u32 * self.item_height as u32;
        let item_bottom = item_top + self.item_height as u32;

        if item_top < self.scroll_offset {
            self.scroll_offset = item_top;
        } else if item_bottom > self.scroll_offset + viewport {
            self.scroll_offset = item_bottom.saturating_sub(viewport);
        }
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
        Ok(self.refresh())
    }

    /// Returns the visible range if it differs from the last one reported.
    fn refresh(&mut self) -> Option<VisibleRange> {
        let range = self.visible_range();
        if range == self.reported {
            return None;
        }
        self.reported = range;
        if let Some(range) = range {
            log::trace!("visible range now {}..={}", range.first, range.last);
        }
        range
    }
}

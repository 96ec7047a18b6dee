//! Fixed four-slot card layout
//!
//! Each card is a 2x2 grid of slots. Slot index 0 and 1 form the top
//! row, 2 and 3 the bottom row; the column is `index % 2`.

use crate::types::Rect;

/// Every card holds exactly this many slots.
pub const SLOTS_PER_CARD: usize = 4;

/// Outer and padding-inset inner bounds of one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotRect {
    /// Quadrant bounds before padding
    pub outer: Rect,
    /// Bounds after insetting by padding, floored at 1x1 px
    pub inner: Rect,
}

impl SlotRect {
    /// Center point of the inner rectangle
    pub fn center(&self) -> (f32, f32) {
        (self.inner.center_x(), self.inner.center_y())
    }
}

/// Compute the bounds of slot `index` (0..4) on a sheet of the given
/// pixel size. Pure function of its inputs, so preview and export
/// rendering agree at any scale.
///
/// Padding is clamped to half the smaller slot dimension minus one
/// pixel, which keeps the inner rectangle from going degenerate.
pub fn slot_rect(index: usize, sheet_width: f32, sheet_height: f32, padding: f32) -> SlotRect {
    debug_assert!(index < SLOTS_PER_CARD);

    let slot_width = sheet_width / 2.0;
    let slot_height = sheet_height / 2.0;
    let col = index % 2;
    let row = index / 2;

    let outer = Rect::new(
        col as f32 * slot_width,
        row as f32 * slot_height,
        slot_width,
        slot_height,
    );

    let max_padding = (slot_width.min(slot_height) / 2.0 - 1.0).max(0.0);
    let padding = padding.clamp(0.0, max_padding);

    let inner = Rect::new(
        outer.x + padding,
        outer.y + padding,
        (outer.width - 2.0 * padding).max(1.0),
        (outer.height - 2.0 * padding).max(1.0),
    );

    SlotRect { outer, inner }
}

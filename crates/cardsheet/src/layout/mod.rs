//! Layout calculations
//!
//! Pure geometry: the free-form grid packer, the fixed four-slot card
//! layout, and cover-fit image placement. Nothing in this module touches
//! pixels or holds state, so interactive preview and export rendering
//! get identical results at different physical scales.

mod grid;
mod placement;
mod slots;

pub use grid::{GridFit, pack_grid};
pub use placement::{Placement, clamp_offset, max_overscan, place_image};
pub use slots::{SLOTS_PER_CARD, SlotRect, slot_rect};

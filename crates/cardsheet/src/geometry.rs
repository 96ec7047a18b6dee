//! Physical sheet geometry
//!
//! Resolves the fixed 10x15 cm print sheet into pixel dimensions at the
//! output resolution, and computes the per-card upscale factor that lets
//! high-resolution source photos export near their native size.

use crate::card::Card;
use crate::layout::slot_rect;
use crate::library::Library;
use crate::types::Orientation;

/// Output resolution in pixels per inch
pub const SHEET_DPI: f32 = 300.0;
/// Long edge of the physical sheet in centimeters
pub const SHEET_LONG_CM: f32 = 15.0;
/// Short edge of the physical sheet in centimeters
pub const SHEET_SHORT_CM: f32 = 10.0;
/// Ceiling on the per-card upscale factor
pub const MAX_UPSCALE: f32 = 4.0;

const CM_PER_INCH: f32 = 2.54;

/// Pixel dimensions of the sheet at base resolution.
///
/// Landscape is the base orientation (1772x1181 at 300 DPI); portrait
/// swaps width and height.
pub fn sheet_pixel_size(orientation: Orientation) -> (u32, u32) {
    let long = (SHEET_LONG_CM / CM_PER_INCH * SHEET_DPI).round() as u32;
    let short = (SHEET_SHORT_CM / CM_PER_INCH * SHEET_DPI).round() as u32;
    match orientation {
        Orientation::Landscape => (long, short),
        Orientation::Portrait => (short, long),
    }
}

/// Uniform upscale factor for a card, in `[1.0, MAX_UPSCALE]`.
///
/// Scans the placed images' natural dimensions against the inner slot
/// size at base resolution; the largest width/height overage wins.
/// Cards whose images fit at base resolution are never upsampled.
pub fn upscale_factor(card: &Card, library: &Library, padding: f32) -> f32 {
    let (sheet_w, sheet_h) = sheet_pixel_size(card.orientation);
    // All four slots share one size; slot 0 stands in for the rest.
    let inner = slot_rect(0, sheet_w as f32, sheet_h as f32, padding).inner;

    let mut factor = 1.0f32;
    for slot in &card.slots {
        let Some(id) = slot.image else { continue };
        let Some(image) = library.get(id) else {
            continue;
        };
        let need_w = image.width as f32 / inner.width;
        let need_h = image.height as f32 / inner.height;
        factor = factor.max(need_w.max(need_h));
    }
    factor.clamp(1.0, MAX_UPSCALE)
}

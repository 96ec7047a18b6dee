//! Cover-fit image placement
//!
//! Scales a source image so it fully covers a slot's inner rectangle
//! (cropping overflow), then applies the user's pan offset clamped to
//! the overscan so dragging can never reveal the padding behind the
//! clip mask.

use crate::types::{Rect, Rotation};

/// Where and how to draw an image inside a slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Draw rectangle for the unrotated source image
    pub rect: Rect,
    /// Rotation in degrees, applied about the rectangle's center
    pub rotation_degrees: f32,
}

impl Placement {
    /// The point the rotation pivots around
    pub fn pivot(&self) -> (f32, f32) {
        (self.rect.center_x(), self.rect.center_y())
    }
}

/// Maximum allowable pan in one axis: half the overscan of the drawn
/// footprint past the inner rectangle, never negative.
pub fn max_overscan(footprint: f32, inner: f32) -> f32 {
    ((footprint - inner) / 2.0).max(0.0)
}

/// Clamp a stored offset into `[-max, +max]`. Idempotent and monotonic.
pub fn clamp_offset(offset: f32, max: f32) -> f32 {
    offset.clamp(-max, max)
}

/// Compute the cover-fit placement of an image in a slot's inner
/// rectangle.
///
/// For quarter turns that swap axes (90/270) the cover scale is taken
/// against the swapped extents, so the rotated footprint still covers
/// the inner rectangle. Offsets are in device pixels at the same scale
/// as `inner`.
pub fn place_image(
    inner: &Rect,
    image_width: f32,
    image_height: f32,
    rotation: Rotation,
    offset_x: f32,
    offset_y: f32,
) -> Placement {
    // Footprint extents after rotation.
    let (foot_w, foot_h) = if rotation.swaps_axes() {
        (image_height, image_width)
    } else {
        (image_width, image_height)
    };

    let scale = (inner.width / foot_w).max(inner.height / foot_h);
    let draw_w = image_width * scale;
    let draw_h = image_height * scale;

    let max_x = max_overscan(foot_w * scale, inner.width);
    let max_y = max_overscan(foot_h * scale, inner.height);
    let cx = inner.center_x() + clamp_offset(offset_x, max_x);
    let cy = inner.center_y() + clamp_offset(offset_y, max_y);

    Placement {
        rect: Rect::new(cx - draw_w / 2.0, cy - draw_h / 2.0, draw_w, draw_h),
        rotation_degrees: rotation.degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_cover_never_undercovers() {
        let inner = Rect::new(18.0, 18.0, 850.0, 554.5);
        let sizes = [
            (4000.0, 3000.0),
            (3000.0, 4000.0),
            (100.0, 100.0),
            (10.0, 2000.0),
            (851.0, 555.0),
        ];
        for (w, h) in sizes {
            let p = place_image(&inner, w, h, Rotation::None, 0.0, 0.0);
            assert!(p.rect.width >= inner.width - EPS, "{w}x{h}");
            assert!(p.rect.height >= inner.height - EPS, "{w}x{h}");
        }
    }

    #[test]
    fn test_quarter_turn_covers_with_swapped_extents() {
        let inner = Rect::new(0.0, 0.0, 800.0, 500.0);
        let p = place_image(&inner, 3000.0, 2000.0, Rotation::Clockwise90, 0.0, 0.0);
        // After a 90 degree turn the drawn width covers the inner height
        // and vice versa.
        assert!(p.rect.width >= inner.height - EPS);
        assert!(p.rect.height >= inner.width - EPS);
        assert_eq!(p.rotation_degrees, 90.0);
    }

    #[test]
    fn test_centered_without_offset() {
        let inner = Rect::new(100.0, 100.0, 400.0, 300.0);
        let p = place_image(&inner, 800.0, 600.0, Rotation::None, 0.0, 0.0);
        assert!((p.rect.center_x() - inner.center_x()).abs() < EPS);
        assert!((p.rect.center_y() - inner.center_y()).abs() < EPS);
    }

    #[test]
    fn test_offset_clamped_to_overscan() {
        let inner = Rect::new(0.0, 0.0, 400.0, 400.0);
        // 800x400 image cover-fits to 800x400: 200 px overscan each side
        // horizontally, none vertically.
        let p = place_image(&inner, 800.0, 400.0, Rotation::None, 10_000.0, 10_000.0);
        assert!((p.rect.center_x() - (inner.center_x() + 200.0)).abs() < EPS);
        assert!((p.rect.center_y() - inner.center_y()).abs() < EPS);
    }

    #[test]
    fn test_clamp_idempotent_and_monotonic() {
        let max = 37.5;
        let clamped = clamp_offset(123.0, max);
        assert_eq!(clamped, max);
        assert_eq!(clamp_offset(clamped, max), clamped);
        assert_eq!(clamp_offset(-123.0, max), -max);
        assert_eq!(clamp_offset(12.0, max), 12.0);
    }

    #[test]
    fn test_max_overscan_never_negative() {
        assert_eq!(max_overscan(100.0, 400.0), 0.0);
        assert_eq!(max_overscan(500.0, 400.0), 50.0);
    }
}

//! Card compositing
//!
//! Renders one card to a raster surface: background fill, per-slot
//! rounded-rectangle clip mask, rotated cover-fit image draw, and a
//! border stroke around the sheet. Compositing is a pure function of the
//! card, library, and options, so identical inputs produce pixel
//! identical output, and separate cards can render concurrently.

use crate::card::Card;
use crate::geometry::{sheet_pixel_size, upscale_factor};
use crate::layout::{SLOTS_PER_CARD, place_image, slot_rect};
use crate::library::Library;
use crate::options::LayoutOptions;
use crate::types::{Rect, Result, SheetError};
use tiny_skia::{
    FillRule, FilterQuality, Mask, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform,
};

/// Bezier circle-quadrant approximation constant
const KAPPA: f32 = 0.552_284_8;

/// Border stroke: black at low opacity, one base-resolution pixel wide
const BORDER_ALPHA: u8 = 64;

/// Pixel dimensions `compose_card` will produce for this card, after
/// per-card upscaling.
pub fn composed_size(card: &Card, library: &Library, options: &LayoutOptions) -> (u32, u32) {
    let (base_w, base_h) = sheet_pixel_size(card.orientation);
    let factor = upscale_factor(card, library, options.padding);
    (
        (base_w as f32 * factor).round() as u32,
        (base_h as f32 * factor).round() as u32,
    )
}

/// Render a card to a raster surface.
///
/// Empty slots simply leave the background visible; a card with no
/// images at all renders as a blank background-colored sheet. Slots
/// referencing an id missing from the library are skipped (placement
/// mutations keep references consistent, so this only guards against
/// callers composing from a stale snapshot).
pub fn compose_card(card: &Card, library: &Library, options: &LayoutOptions) -> Result<Pixmap> {
    let (width, height) = composed_size(card, library, options);
    let factor = upscale_factor(card, library, options.padding);

    let mut surface = Pixmap::new(width, height).ok_or(SheetError::Surface { width, height })?;
    surface.fill(card.background.to_skia());

    let padding = options.padding * factor;
    let rounding = options.rounding * factor;

    for (index, slot) in card.slots.iter().enumerate() {
        debug_assert!(index < SLOTS_PER_CARD);
        let Some(id) = slot.image else { continue };
        let Some(image) = library.get(id) else {
            log::warn!("slot {index} references missing image {id:?}, skipping");
            continue;
        };

        let bounds = slot_rect(index, width as f32, height as f32, padding);
        let placement = place_image(
            &bounds.inner,
            image.width as f32,
            image.height as f32,
            slot.rotation,
            slot.offset_x * factor,
            slot.offset_y * factor,
        );

        let Some(mask) = clip_mask(width, height, &bounds.inner, rounding) else {
            continue;
        };

        let scale_x = placement.rect.width / image.width as f32;
        let scale_y = placement.rect.height / image.height as f32;
        let (pivot_x, pivot_y) = placement.pivot();
        let transform = Transform::from_row(scale_x, 0.0, 0.0, scale_y, placement.rect.x, placement.rect.y)
            .post_concat(Transform::from_rotate_at(
                placement.rotation_degrees,
                pivot_x,
                pivot_y,
            ));

        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        let source: &Pixmap = &image.pixels;
        surface.draw_pixmap(0, 0, source.as_ref(), &paint, transform, Some(&mask));
    }

    stroke_border(&mut surface, factor);
    Ok(surface)
}

/// Rounded-rectangle clip mask for one slot's inner bounds. The radius
/// is capped to half the smaller inner dimension.
fn clip_mask(width: u32, height: u32, inner: &Rect, radius: f32) -> Option<Mask> {
    let radius = radius.clamp(0.0, inner.width.min(inner.height) / 2.0);
    let path = rounded_rect_path(inner, radius)?;
    let mut mask = Mask::new(width, height)?;
    mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
    Some(mask)
}

fn rounded_rect_path(rect: &Rect, radius: f32) -> Option<Path> {
    let mut pb = PathBuilder::new();
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.right(), rect.bottom());

    if radius <= 0.0 {
        pb.push_rect(tiny_skia::Rect::from_ltrb(left, top, right, bottom)?);
        return pb.finish();
    }

    let k = radius * KAPPA;
    pb.move_to(left + radius, top);
    pb.line_to(right - radius, top);
    pb.cubic_to(right - radius + k, top, right, top + radius - k, right, top + radius);
    pb.line_to(right, bottom - radius);
    pb.cubic_to(right, bottom - radius + k, right - radius + k, bottom, right - radius, bottom);
    pb.line_to(left + radius, bottom);
    pb.cubic_to(left + radius - k, bottom, left, bottom - radius + k, left, bottom - radius);
    pb.line_to(left, top + radius);
    pb.cubic_to(left, top + radius - k, left + radius - k, top, left + radius, top);
    pb.close();
    pb.finish()
}

/// Thin, low-opacity edge marker around the full sheet bounds.
fn stroke_border(surface: &mut Pixmap, factor: f32) {
    let width = surface.width() as f32;
    let height = surface.height() as f32;
    let stroke_width = factor.max(1.0);
    let inset = stroke_width / 2.0;

    let Some(rect) =
        tiny_skia::Rect::from_ltrb(inset, inset, width - inset, height - inset)
    else {
        return;
    };
    let path = PathBuilder::from_rect(rect);

    let mut paint = Paint::default();
    paint.set_color_rgba8(0, 0, 0, BORDER_ALPHA);
    paint.anti_alias = false;

    let stroke = Stroke {
        width: stroke_width,
        ..Stroke::default()
    };
    surface.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

//! Free-form grid packing
//!
//! Searches column/row configurations to fit an arbitrary number of
//! images onto one sheet, trading per-cell usable area against wasted
//! grid cells.

use crate::types::Rect;

/// Weight subtracted from a configuration's score per empty grid cell.
/// Larger values favor tighter packing over maximal individual cell size.
const EMPTY_CELL_PENALTY: f32 = 40_000.0;

/// Photos are assumed close to 3:2; cells are scored by how much of a
/// 3:2 image they can hold, not by raw cell area (a degenerate strip has
/// a large raw area but wastes most of it once a photo is fitted).
const REFERENCE_ASPECT_W: f32 = 3.0;
const REFERENCE_ASPECT_H: f32 = 2.0;

/// The chosen grid configuration for a free-form sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFit {
    pub cols: usize,
    pub rows: usize,
    /// Usable cell width after padding, in pixels
    pub cell_width: f32,
    /// Usable cell height after padding, in pixels
    pub cell_height: f32,
}

impl GridFit {
    /// Grid cells left without an image for `count` items
    pub fn empty_cells(&self, count: usize) -> usize {
        (self.cols * self.rows).saturating_sub(count)
    }

    /// Bounds of the cell holding item `index` (row-major order).
    pub fn cell_bounds(&self, index: usize, padding: f32) -> Rect {
        let col = index % self.cols;
        let row = index / self.cols;
        let stride_x = self.cell_width + 2.0 * padding;
        let stride_y = self.cell_height + 2.0 * padding;
        Rect::new(
            col as f32 * stride_x + padding,
            row as f32 * stride_y + padding,
            self.cell_width,
            self.cell_height,
        )
    }
}

/// Choose the grid that best fits `count` images on a `width` x `height`
/// canvas with `padding` pixels of symmetric padding per cell side.
///
/// Scans `cols` from 1 to `count` with `rows = ceil(count / cols)`,
/// rejecting configurations whose cells collapse to zero. Ties keep the
/// first (lowest `cols`) configuration. A count of zero yields a single
/// full-canvas cell. If padding leaves no feasible configuration, falls
/// back to a best-effort single column so callers never see a failure.
pub fn pack_grid(count: usize, width: f32, height: f32, padding: f32) -> GridFit {
    if count == 0 {
        return GridFit {
            cols: 1,
            rows: 1,
            cell_width: width,
            cell_height: height,
        };
    }

    let mut best: Option<(f32, GridFit)> = None;

    for cols in 1..=count {
        let rows = count.div_ceil(cols);
        let cell_width = width / cols as f32 - 2.0 * padding;
        let cell_height = height / rows as f32 - 2.0 * padding;
        if cell_width <= 0.0 || cell_height <= 0.0 {
            continue;
        }

        let fit = GridFit {
            cols,
            rows,
            cell_width,
            cell_height,
        };
        let score =
            fitted_photo_area(cell_width, cell_height) - fit.empty_cells(count) as f32 * EMPTY_CELL_PENALTY;

        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, fit));
        }
    }

    best.map(|(_, fit)| fit).unwrap_or_else(|| {
        // Padding too large for any feasible grid: degrade to a single
        // column with cell sizes floored at zero.
        let rows = count;
        GridFit {
            cols: 1,
            rows,
            cell_width: (width - 2.0 * padding).max(0.0),
            cell_height: (height / rows as f32 - 2.0 * padding).max(0.0),
        }
    })
}

/// Area a reference-aspect photo occupies when contain-fitted in a cell.
fn fitted_photo_area(cell_width: f32, cell_height: f32) -> f32 {
    let scale = (cell_width / REFERENCE_ASPECT_W).min(cell_height / REFERENCE_ASPECT_H);
    REFERENCE_ASPECT_W * scale * REFERENCE_ASPECT_H * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_count_full_canvas() {
        let fit = pack_grid(0, 1772.0, 1181.0, 18.0);
        assert_eq!((fit.cols, fit.rows), (1, 1));
        assert_eq!(fit.cell_width, 1772.0);
        assert_eq!(fit.cell_height, 1181.0);
    }

    #[test]
    fn test_three_images_prefer_square_grid() {
        // One empty cell, but each cell holds far more photo than the
        // 3x1 or 1x3 strips do.
        let fit = pack_grid(3, 1772.0, 1181.0, 18.0);
        assert_eq!((fit.cols, fit.rows), (2, 2));
        assert_eq!(fit.empty_cells(3), 1);
    }

    #[test]
    fn test_deterministic() {
        let a = pack_grid(7, 1772.0, 1181.0, 12.0);
        let b = pack_grid(7, 1772.0, 1181.0, 12.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_coverage_all_counts() {
        for count in 1..=50 {
            let fit = pack_grid(count, 1772.0, 1181.0, 8.0);
            assert!(fit.cell_width > 0.0, "count {count}");
            assert!(fit.cell_height > 0.0, "count {count}");
            assert!(fit.cols * fit.rows >= count, "count {count}");
        }
    }

    #[test]
    fn test_degenerate_padding_falls_back() {
        // Padding wider than any possible cell: no feasible grid.
        let fit = pack_grid(10, 100.0, 100.0, 200.0);
        assert_eq!(fit.cols, 1);
        assert_eq!(fit.rows, 10);
        assert_eq!(fit.cell_width, 0.0);
        assert_eq!(fit.cell_height, 0.0);
    }

    #[test]
    fn test_cell_bounds_row_major() {
        let fit = pack_grid(4, 1000.0, 1000.0, 10.0);
        assert_eq!((fit.cols, fit.rows), (2, 2));
        let first = fit.cell_bounds(0, 10.0);
        let third = fit.cell_bounds(2, 10.0);
        assert_eq!(first.x, 10.0);
        assert_eq!(first.y, 10.0);
        assert_eq!(third.x, 10.0);
        assert!(third.y > first.y);
    }
}

//! Layout engine: text regions and divider geometry from a canvas rectangle.
//!
//! The face splits the canvas with a Y-shaped divider whose apex sits at 60%
//! of the canvas height, horizontally centered. Above the apex, hour and
//! minute regions mirror each other across the vertical segment; below it,
//! date and day regions stack inside the triangle formed by the diagonals.
//!
//! ```text
//! ┌─────────┬─────────┐
//! │         │         │
//! │  HOUR   │  MINUTE │
//! │         │         │
//! ├────── apex ───────┤   60% height
//! │ \     DATE      / │
//! │   \    DAY    /   │
//! └─────────────────────┘
//! ```
//!
//! Geometry is computed exactly once per window load and never again; the
//! per-minute tick only rewrites text. All math is integer with truncation
//! toward zero, and every computed extent saturates at zero so a degenerate
//! canvas yields empty regions instead of wrapping.

use embedded_graphics::{prelude::*, primitives::Rectangle};

// =============================================================================
// Geometry Types
// =============================================================================

/// A single divider line segment as a start/end point pair.
pub type Segment = (Point, Point);

/// The three line segments of the Y-shaped divider.
///
/// All three meet at the apex: the vertical drop from the top edge, and the
/// two diagonals running to the bottom corners (last valid pixel row and
/// columns, so `height - 1` / `width - 1`).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DividerGeometry {
    /// Vertical segment from the top-center of the canvas down to the apex.
    pub top_to_apex: Segment,
    /// Diagonal from the apex to the bottom-left corner.
    pub apex_to_bottom_left: Segment,
    /// Diagonal from the apex to the bottom-right corner.
    pub apex_to_bottom_right: Segment,
}

/// Computed geometry for one window instance: four text regions plus the
/// divider. Created on window load, immutable afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Layout {
    /// Hour digits, left half of the upper area.
    pub hour_region: Rectangle,
    /// Minute digits, right half of the upper area.
    pub minute_region: Rectangle,
    /// Day-of-month, upper half of the lower band.
    pub date_region: Rectangle,
    /// Weekday abbreviation, lower half of the lower band.
    pub day_region: Rectangle,
    /// The Y-shaped divider drawn beneath the text regions.
    pub divider: DividerGeometry,
}

// =============================================================================
// Layout Computation
// =============================================================================

/// Clamp a computed extent to a valid pixel size.
///
/// Small canvases can drive the arithmetic negative; an empty region is the
/// correct degenerate result (it draws nothing and overlaps nothing).
#[inline]
const fn extent(value: i32) -> u32 {
    if value > 0 { value as u32 } else { 0 }
}

/// Compute the four text regions and the divider for a canvas.
///
/// Pure geometry: materializing drawables from these rectangles is the
/// caller's concern. Total over all inputs with positive canvas dimensions;
/// there are no error paths.
///
/// Region math (canvas-relative, then offset by the canvas origin):
/// - `midx = width / 2`, `apex_y = height * 3 / 5`
/// - hour: `(pad, pad)` to `(midx - 3*pad/2, apex_y - pad)`
/// - minute: same size, origin `(midx + pad/2, pad)`
/// - lower band `bottom_h = height - apex_y`; date takes its upper half from
///   `apex_y + pad/2`, day takes the rest down to the canvas bottom
pub fn compute_layout(canvas: Rectangle, padding: i32) -> Layout {
    let origin = canvas.top_left;
    let width = canvas.size.width as i32;
    let height = canvas.size.height as i32;

    let midx = width / 2;
    let apex_y = height * 3 / 5;

    // Upper area: hour on the left, minute mirrored on the right. The hour
    // region runs from the padded left edge to 1.5 paddings short of the
    // midline; the minute region starts half a padding past the midline.
    let upper_size = Size::new(extent(midx - 3 * padding / 2 - padding), extent(apex_y - 2 * padding));
    let hour_region = Rectangle::new(origin + Point::new(padding, padding), upper_size);
    let minute_region = Rectangle::new(origin + Point::new(midx + padding / 2, padding), upper_size);

    // Lower band: date stacked over day, full padded width. Date takes the
    // band's upper half starting half a padding below the apex; day takes
    // whatever remains down to the canvas bottom. The edge-to-edge stack
    // keeps the two regions disjoint.
    let bottom_h = height - apex_y;
    let band_width = extent(width - 2 * padding);
    let date_top = apex_y + padding / 2;
    let day_top = date_top + bottom_h / 2;
    let date_region = Rectangle::new(
        origin + Point::new(padding, date_top),
        Size::new(band_width, extent(bottom_h / 2)),
    );
    let day_region = Rectangle::new(
        origin + Point::new(padding, day_top),
        Size::new(band_width, extent(height - day_top)),
    );

    // Divider endpoints. Bottom corners use height-1 / width-1, the last
    // valid pixel row and columns.
    let top_center = origin + Point::new(midx, 0);
    let apex = origin + Point::new(midx, apex_y);
    let bottom_left = origin + Point::new(0, height - 1);
    let bottom_right = origin + Point::new(width - 1, height - 1);

    Layout {
        hour_region,
        minute_region,
        date_region,
        day_region,
        divider: DividerGeometry {
            top_to_apex: (top_center, apex),
            apex_to_bottom_left: (apex, bottom_left),
            apex_to_bottom_right: (apex, bottom_right),
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

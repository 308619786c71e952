use core::cmp;

use crate::WindowRange;

/// Computes the visible `[start, end)` row range for a fixed-row-height list.
///
/// `start` is the first row intersecting the viewport (`floor(offset / row_height)`),
/// `end` the first row past it (`ceil((offset + viewport) / row_height)`), both
/// clamped into `[0, count]`. Offsets past the scrollable extent are clamped
/// first, so an overscrolled offset maps to the final window rather than an
/// empty one.
///
/// A zero `viewport` means the container has not been laid out yet and yields
/// an empty range; callers should defer rendering until a non-zero size is
/// observed. A zero `row_height` is rejected at configuration time by
/// [`crate::ListOptions::validate`]; called directly with one anyway, this
/// returns an empty range instead of dividing by zero.
pub fn visible_range(scroll_offset: u64, viewport: u32, row_height: u32, count: usize) -> WindowRange {
    if count == 0 || viewport == 0 || row_height == 0 {
        return WindowRange::EMPTY;
    }

    let row_height = row_height as u64;
    let total = (count as u64).saturating_mul(row_height);
    let max_scroll = total.saturating_sub(viewport as u64);
    let offset = scroll_offset.min(max_scroll);
    let end_offset = offset.saturating_add(viewport as u64);

    let start = cmp::min((offset / row_height) as usize, count);
    let end = cmp::min(end_offset.div_ceil(row_height) as usize, count);
    debug_assert!(start <= end, "inverted visible range ({start}..{end})");

    WindowRange { start, end }
}

/// Same as [`visible_range`], widened by `overscan` rows on each side and
/// clamped into `[0, count]`.
///
/// An empty visible range (no rows, or viewport not laid out yet) stays
/// empty: overscan buffers scroll latency around visible content, it never
/// materializes rows when nothing is visible.
pub fn windowed_range(
    scroll_offset: u64,
    viewport: u32,
    row_height: u32,
    count: usize,
    overscan: usize,
) -> WindowRange {
    let visible = visible_range(scroll_offset, viewport, row_height, count);
    if visible.is_empty() {
        return visible;
    }

    WindowRange {
        start: visible.start.saturating_sub(overscan),
        end: cmp::min(count, visible.end.saturating_add(overscan)),
    }
}

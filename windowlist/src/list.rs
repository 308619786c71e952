use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::cmp;

use crate::options::{InitialOffset, ListOptions};
use crate::window::SlotWindow;
use crate::{
    Align, ConfigError, FrameState, PlacedRow, Rect, ScrollDirection, ScrollState, ViewportState,
    WindowRange, range,
};

/// The windowed-list container.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or item data, only row count, row
///   height, overscan, and viewport/scroll geometry.
/// - Your adapter drives it by feeding geometry and scroll offsets; every
///   triggering change synchronously recomputes the cached window range.
/// - The current range is exposed read-only via [`Self::window_range`]; host
///   rendering reconciles against it through [`SlotWindow`] /
///   [`Self::sync_slots`].
///
/// Recomputation is idempotent: setting an unchanged value is a no-op and
/// fires no callback, and handing an unchanged range to [`Self::sync_slots`]
/// creates and destroys nothing.
///
/// For frame-coalesced event plumbing, see the `windowlist-adapter` crate.
#[derive(Clone, Debug)]
pub struct VirtualList {
    options: ListOptions,
    viewport_size: u32,
    scroll_offset: u64,
    scroll_rect: Rect,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    last_scroll_event_ms: Option<u64>,
    range: WindowRange,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl VirtualList {
    /// Creates a new list from options.
    ///
    /// Fails fast on invalid configuration (see [`ListOptions::validate`]).
    /// If `options.initial_rect` and/or `options.initial_offset` are set,
    /// those values are applied immediately.
    pub fn new(options: ListOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        let scroll_rect = options.initial_rect.unwrap_or_default();
        let scroll_offset = options.initial_offset.resolve();
        wdebug!(
            count = options.count,
            row_height = options.row_height,
            overscan = options.overscan,
            "VirtualList::new"
        );
        let mut list = Self {
            viewport_size: scroll_rect.main,
            scroll_offset,
            scroll_rect,
            is_scrolling: false,
            scroll_direction: None,
            last_scroll_event_ms: None,
            range: WindowRange::EMPTY,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        list.range = list.window_range_for(list.scroll_offset, list.viewport_size);
        Ok(list)
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// Replaces the whole configuration, re-validating it first.
    pub fn set_options(&mut self, options: ListOptions) -> Result<(), ConfigError> {
        options.validate()?;
        self.options = options;
        wtrace!(
            count = self.options.count,
            row_height = self.options.row_height,
            overscan = self.options.overscan,
            "VirtualList::set_options"
        );
        self.refresh();
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to
    /// [`Self::set_options`].
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut ListOptions),
    ) -> Result<(), ConfigError> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&VirtualList, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn set_initial_offset(&mut self, initial_offset: u64) {
        self.options.initial_offset = InitialOffset::Value(initial_offset);
        self.notify();
    }

    pub fn set_initial_offset_provider(
        &mut self,
        initial_offset: impl Fn() -> u64 + Send + Sync + 'static,
    ) {
        self.options.initial_offset = InitialOffset::Provider(Arc::new(initial_offset));
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_scrolling);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Recomputes the cached window range and notifies.
    fn refresh(&mut self) {
        self.range = self.window_range_for(self.scroll_offset, self.viewport_size);
        self.notify();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// On a typical frame an adapter updates the scroll rect, scroll offset,
    /// and `is_scrolling` state together; without batching each setter may
    /// trigger `on_change`, which can be expensive if the callback drives
    /// rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    /// Updates the row count after the host's dataset grew, shrank, or was
    /// replaced wholesale.
    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.refresh();
    }

    pub fn row_height(&self) -> u32 {
        self.options.row_height
    }

    pub fn set_row_height(&mut self, row_height: u32) -> Result<(), ConfigError> {
        if row_height == 0 {
            return Err(ConfigError::ZeroRowHeight);
        }
        if self.options.row_height == row_height {
            return Ok(());
        }
        self.options.row_height = row_height;
        self.refresh();
        Ok(())
    }

    pub fn overscan(&self) -> usize {
        self.options.overscan
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        if self.options.overscan == overscan {
            return;
        }
        self.options.overscan = overscan;
        self.refresh();
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.scroll_direction = None;
            self.last_scroll_event_ms = None;
        }
        self.notify();
    }

    /// Marks a scroll as in progress, timestamped for later debouncing.
    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Resets `is_scrolling` once no scroll event has arrived for the
    /// configured delay. Call once per frame/timer tick.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    pub fn viewport_size(&self) -> u32 {
        self.viewport_size
    }

    pub fn scroll_rect(&self) -> Rect {
        self.scroll_rect
    }

    pub fn set_scroll_rect(&mut self, rect: Rect) {
        if self.scroll_rect == rect {
            return;
        }
        self.scroll_rect = rect;
        self.viewport_size = rect.main;
        self.refresh();
    }

    /// Applies a scroll rect update from your UI layer (e.g. a resize
    /// observation) as a single batched update.
    pub fn apply_scroll_rect_event(&mut self, rect: Rect) {
        self.batch_update(|list| {
            list.set_scroll_rect(rect);
        });
    }

    pub fn set_viewport_size(&mut self, size: u32) {
        if self.viewport_size == size && self.scroll_rect.main == size {
            return;
        }
        self.viewport_size = size;
        self.scroll_rect.main = size;
        self.refresh();
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.refresh();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    /// Applies a scroll offset update from your UI layer (e.g. wheel/drag),
    /// and marks the list as scrolling.
    pub fn apply_scroll_offset_event(&mut self, offset: u64, now_ms: u64) {
        wtrace!(offset, now_ms, "apply_scroll_offset_event");
        self.batch_update(|list| {
            list.set_scroll_offset(offset);
            list.notify_scroll_event(now_ms);
        });
    }

    /// Same as [`Self::apply_scroll_offset_event`], but clamps the offset.
    pub fn apply_scroll_offset_event_clamped(&mut self, offset: u64, now_ms: u64) {
        wtrace!(offset, now_ms, "apply_scroll_offset_event_clamped");
        self.batch_update(|list| {
            list.set_scroll_offset_clamped(offset);
            list.notify_scroll_event(now_ms);
        });
    }

    pub fn set_viewport_and_scroll(&mut self, viewport_size: u32, scroll_offset: u64) {
        self.batch_update(|list| {
            list.set_viewport_size(viewport_size);
            list.set_scroll_offset(scroll_offset);
        });
    }

    pub fn set_viewport_and_scroll_clamped(&mut self, viewport_size: u32, scroll_offset: u64) {
        self.batch_update(|list| {
            list.set_viewport_size(viewport_size);
            list.set_scroll_offset_clamped(scroll_offset);
        });
    }

    /// Applies both scroll rect and scroll offset in a single coalesced
    /// update.
    ///
    /// This is the recommended entry point for UI adapters that receive
    /// scroll events along with updated viewport information.
    pub fn apply_scroll_frame(&mut self, rect: Rect, scroll_offset: u64, now_ms: u64) {
        wtrace!(
            rect_main = rect.main,
            rect_cross = rect.cross,
            scroll_offset,
            now_ms,
            "apply_scroll_frame"
        );
        self.batch_update(|list| {
            list.set_scroll_rect(rect);
            list.set_scroll_offset(scroll_offset);
            list.notify_scroll_event(now_ms);
        });
    }

    /// Same as [`Self::apply_scroll_frame`], but clamps the offset.
    pub fn apply_scroll_frame_clamped(&mut self, rect: Rect, scroll_offset: u64, now_ms: u64) {
        wtrace!(
            rect_main = rect.main,
            rect_cross = rect.cross,
            scroll_offset,
            now_ms,
            "apply_scroll_frame_clamped"
        );
        self.batch_update(|list| {
            list.set_scroll_rect(rect);
            list.set_scroll_offset_clamped(scroll_offset);
            list.notify_scroll_event(now_ms);
        });
    }

    /// Returns a lightweight snapshot of the current viewport state.
    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            rect: self.scroll_rect,
        }
    }

    /// Returns a lightweight snapshot of the current scroll state.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            is_scrolling: self.is_scrolling,
        }
    }

    /// Returns a combined snapshot of viewport + scroll state.
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport: self.viewport_state(),
            scroll: self.scroll_state(),
        }
    }

    /// Restores viewport geometry from a previously captured snapshot.
    pub fn restore_viewport_state(&mut self, viewport: ViewportState) {
        self.set_scroll_rect(viewport.rect);
    }

    /// Restores scroll state from a previously captured snapshot.
    ///
    /// When `scroll.is_scrolling` is `true`, this updates the internal
    /// scrolling timers as if a scroll event happened at `now_ms`.
    pub fn restore_scroll_state(&mut self, scroll: ScrollState, now_ms: u64) {
        if scroll.is_scrolling {
            self.apply_scroll_offset_event_clamped(scroll.offset, now_ms);
            return;
        }
        self.batch_update(|list| {
            list.set_scroll_offset_clamped(scroll.offset);
            list.set_is_scrolling(false);
        });
    }

    /// Restores both viewport + scroll state from a previously captured
    /// snapshot.
    pub fn restore_frame_state(&mut self, frame: FrameState, now_ms: u64) {
        if frame.scroll.is_scrolling {
            self.apply_scroll_frame_clamped(frame.viewport.rect, frame.scroll.offset, now_ms);
            return;
        }
        self.batch_update(|list| {
            list.set_scroll_rect(frame.viewport.rect);
            list.set_scroll_offset_clamped(frame.scroll.offset);
            list.set_is_scrolling(false);
        });
    }

    /// The full scrollable extent: `count * row_height`.
    ///
    /// Hosts size their spacer element to this so the scroll container gets
    /// the correct total height without materializing any rows.
    pub fn total_size(&self) -> u64 {
        (self.options.count as u64).saturating_mul(self.options.row_height as u64)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_size().saturating_sub(self.viewport_size as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// The last-computed overscanned range: the set of rows that must be
    /// materialized right now.
    pub fn window_range(&self) -> WindowRange {
        self.range
    }

    /// The overscanned range for an arbitrary offset/viewport, without
    /// touching the container state.
    pub fn window_range_for(&self, scroll_offset: u64, viewport_size: u32) -> WindowRange {
        range::windowed_range(
            scroll_offset,
            viewport_size,
            self.options.row_height,
            self.options.count,
            self.options.overscan,
        )
    }

    /// The strictly visible range (no overscan) at the current state.
    pub fn visible_range(&self) -> WindowRange {
        self.visible_range_for(self.scroll_offset, self.viewport_size)
    }

    pub fn visible_range_for(&self, scroll_offset: u64, viewport_size: u32) -> WindowRange {
        range::visible_range(
            scroll_offset,
            viewport_size,
            self.options.row_height,
            self.options.count,
        )
    }

    /// Start offset of a row inside the spacer, or `None` past the end.
    pub fn row_start(&self, index: usize) -> Option<u64> {
        (index < self.options.count)
            .then(|| (index as u64).saturating_mul(self.options.row_height as u64))
    }

    pub fn row_end(&self, index: usize) -> Option<u64> {
        let start = self.row_start(index)?;
        Some(start.saturating_add(self.options.row_height as u64))
    }

    pub fn placed_row(&self, index: usize) -> Option<PlacedRow> {
        (index < self.options.count).then(|| self.place(index))
    }

    /// Maps an absolute offset to the row index containing it, clamped to the
    /// last row for offsets past the end. `None` when the list is empty.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        if self.options.count == 0 {
            return None;
        }
        let index = (offset / self.options.row_height as u64) as usize;
        Some(index.min(self.options.count - 1))
    }

    pub fn row_at_offset(&self, offset: u64) -> Option<PlacedRow> {
        let index = self.index_at_offset(offset)?;
        Some(self.place(index))
    }

    /// Visits every index in the current window, ascending.
    pub fn for_each_window_index(&self, mut f: impl FnMut(usize)) {
        for index in self.range.start..self.range.end {
            f(index);
        }
    }

    /// Visits every row in the current window with its placement, ascending.
    pub fn for_each_placed_row(&self, mut f: impl FnMut(PlacedRow)) {
        for index in self.range.start..self.range.end {
            f(self.place(index));
        }
    }

    /// Collects the current window's placed rows into `out` (clears `out`
    /// first).
    ///
    /// This is a convenience wrapper around [`Self::for_each_placed_row`];
    /// adapters chasing allocations should reuse a scratch buffer.
    pub fn collect_placed_rows(&self, out: &mut Vec<PlacedRow>) {
        out.clear();
        self.for_each_placed_row(|row| out.push(row));
    }

    /// Reconciles a [`SlotWindow`] against the current window range.
    ///
    /// Rows entering the range get a handle from `create` (with their
    /// placement); rows leaving it are handed back through `destroy`; rows
    /// staying put are untouched. Calling this again without an intervening
    /// state change performs no slot work at all.
    pub fn sync_slots<S>(
        &self,
        window: &mut SlotWindow<S>,
        mut create: impl FnMut(PlacedRow) -> S,
        destroy: impl FnMut(usize, S),
    ) {
        window.sync(self.range, |index| create(self.place(index)), destroy);
    }

    /// Programmatically scrolls to a row (no animation).
    ///
    /// This sets the internal `scroll_offset` to the computed (clamped)
    /// target and triggers `on_change`. It does **not** mark the list as
    /// "scrolling"; for user-scroll semantics, feed
    /// [`Self::scroll_to_index_offset`] through
    /// [`Self::apply_scroll_offset_event_clamped`] instead.
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }

    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        if self.options.count == 0 {
            return 0;
        }
        let row = self.place(index.min(self.options.count - 1));
        let view = self.viewport_size as u64;

        let target = match align {
            Align::Start => row.start,
            Align::End => row.end().saturating_sub(view),
            Align::Center => {
                let center = row.start.saturating_add(row.size as u64 / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.scroll_offset;
                let cur_end = cur.saturating_add(view);
                if row.start >= cur && row.end() <= cur_end {
                    cur
                } else if row.start < cur {
                    row.start
                } else {
                    row.end().saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target)
    }

    fn place(&self, index: usize) -> PlacedRow {
        let row_height = self.options.row_height;
        PlacedRow {
            index,
            start: (index as u64).saturating_mul(row_height as u64),
            size: row_height,
        }
    }
}

use windowlist::{
    Align, ConfigError, ListOptions, PlacedRow, Rect, SlotWindow, VirtualList, WindowRange,
};

use crate::FrameSampler;

/// A framework-neutral controller that wires a [`VirtualList`] to a
/// [`FrameSampler`] and a [`SlotWindow`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - [`Self::on_scroll`] / [`Self::on_viewport`] when raw UI events occur
///   (any number of times per frame; only the latest values survive)
/// - [`Self::frame`] once per frame/timer tick, which drains the sampler,
///   advances the list as a single batched update, and reconciles the slot
///   window against the new range
///
/// [`Self::teardown`] cancels pending samples and destroys every live slot;
/// call it when the hosting container goes away. A torn-down controller holds
/// no slots and no pending work (a later `frame` call would re-materialize
/// the window, which is the desired behavior on re-attach).
pub struct Controller<S> {
    list: VirtualList,
    sampler: FrameSampler,
    window: SlotWindow<S>,
}

impl<S> Controller<S> {
    pub fn new(options: ListOptions) -> Result<Self, ConfigError> {
        Ok(Self::from_list(VirtualList::new(options)?))
    }

    pub fn from_list(list: VirtualList) -> Self {
        Self {
            list,
            sampler: FrameSampler::new(),
            window: SlotWindow::new(),
        }
    }

    pub fn list(&self) -> &VirtualList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut VirtualList {
        &mut self.list
    }

    pub fn window(&self) -> &SlotWindow<S> {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut SlotWindow<S> {
        &mut self.window
    }

    pub fn is_scrolling(&self) -> bool {
        self.list.is_scrolling()
    }

    pub fn has_pending_sample(&self) -> bool {
        self.sampler.has_pending()
    }

    /// Call this when the UI reports a scroll offset change (e.g. wheel/drag).
    pub fn on_scroll(&mut self, offset: u64) {
        self.sampler.note_scroll(offset);
    }

    /// Call this when the UI reports new viewport geometry (e.g. a resize
    /// observation).
    pub fn on_viewport(&mut self, rect: Rect) {
        self.sampler.note_viewport(rect);
    }

    /// Advances the controller by one frame.
    ///
    /// Drains the coalesced sample (if any) into the list as one batched,
    /// clamped update, runs the is-scrolling debounce, then reconciles the
    /// slot window: `create` is called for rows entering the window (with
    /// their placement), `destroy` for rows leaving it. With no pending
    /// sample and an unchanged range this performs no slot work at all.
    ///
    /// Returns the window range rendered this frame.
    pub fn frame(
        &mut self,
        now_ms: u64,
        create: impl FnMut(PlacedRow) -> S,
        destroy: impl FnMut(usize, S),
    ) -> WindowRange {
        if let Some(sample) = self.sampler.take() {
            match (sample.viewport, sample.scroll_offset) {
                (Some(rect), Some(offset)) => {
                    self.list.apply_scroll_frame_clamped(rect, offset, now_ms);
                }
                (Some(rect), None) => self.list.apply_scroll_rect_event(rect),
                (None, Some(offset)) => {
                    self.list.apply_scroll_offset_event_clamped(offset, now_ms);
                }
                (None, None) => {}
            }
        }
        self.list.update_scrolling(now_ms);

        self.list.sync_slots(&mut self.window, create, destroy);
        self.list.window_range()
    }

    /// Applies a scroll-to-index immediately, with user-scroll semantics.
    ///
    /// The slot window catches up on the next [`Self::frame`] call.
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align, now_ms: u64) -> u64 {
        let offset = self.list.scroll_to_index_offset(index, align);
        self.list.apply_scroll_offset_event_clamped(offset, now_ms);
        self.list.scroll_offset()
    }

    /// Applies a scroll-to-offset immediately, with user-scroll semantics.
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_offset(&mut self, offset: u64, now_ms: u64) -> u64 {
        self.list.apply_scroll_offset_event_clamped(offset, now_ms);
        self.list.scroll_offset()
    }

    /// Cancels pending samples and destroys every live slot.
    pub fn teardown(&mut self, destroy: impl FnMut(usize, S)) {
        self.sampler.clear();
        self.window.clear(destroy);
    }
}

impl<S> core::fmt::Debug for Controller<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("list", &self.list)
            .field("sampler", &self.sampler)
            .field("window", &self.window)
            .finish()
    }
}

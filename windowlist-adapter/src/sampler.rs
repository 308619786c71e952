use windowlist::Rect;

/// The pending state drained from a [`FrameSampler`] at a frame boundary.
///
/// Either half may be absent when no event of that kind arrived since the
/// last drain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSample {
    pub scroll_offset: Option<u64>,
    pub viewport: Option<Rect>,
}

impl FrameSample {
    pub fn is_empty(&self) -> bool {
        self.scroll_offset.is_none() && self.viewport.is_none()
    }
}

/// Coalesces raw scroll/viewport events into at most one sample per frame.
///
/// UI layers deliver scroll events far more often than the display refreshes.
/// Recording events here and draining once per frame ([`Self::take`]) keeps
/// range recomputation at one pass per paint: each new event replaces the
/// pending value, it never stacks. A missed frame only delays the next
/// recomputation; the next event re-arms the sampler, so no state is ever
/// permanently stale.
///
/// Samplers are plain values with no timers or global registration; dropping
/// one (or calling [`Self::clear`] at teardown) cancels all pending work.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameSampler {
    pending: FrameSample,
}

impl FrameSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a scroll offset event, replacing any unsampled one.
    pub fn note_scroll(&mut self, offset: u64) {
        self.pending.scroll_offset = Some(offset);
    }

    /// Records a viewport measurement, replacing any unsampled one.
    pub fn note_viewport(&mut self, rect: Rect) {
        self.pending.viewport = Some(rect);
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drains the pending sample, if any. Called once per frame.
    pub fn take(&mut self) -> Option<FrameSample> {
        if self.pending.is_empty() {
            return None;
        }
        Some(core::mem::take(&mut self.pending))
    }

    /// Discards any pending sample (teardown path).
    pub fn clear(&mut self) {
        self.pending = FrameSample::default();
    }
}

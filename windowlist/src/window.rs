#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::WindowRange;

#[cfg(feature = "std")]
type SlotMap<S> = HashMap<usize, S>;
#[cfg(not(feature = "std"))]
type SlotMap<S> = BTreeMap<usize, S>;

/// A keyed slot store (row index → opaque host handle) that tracks which rows
/// are currently materialized.
///
/// `S` is whatever the host renders a row into: a widget, a DOM node id, a
/// buffer region. The window owns each handle from creation until the row
/// leaves the range, at which point it hands the handle back through the
/// `destroy` callback. Rows that stay in range across a [`Self::sync`] keep
/// their handle untouched, so host-side per-row UI state (focus, animation)
/// survives scrolling.
///
/// The live slot count is always `range().len()`, bounded by the window
/// length regardless of how large the underlying list is.
pub struct SlotWindow<S> {
    slots: SlotMap<S>,
    range: WindowRange,
}

impl<S> SlotWindow<S> {
    pub fn new() -> Self {
        Self {
            slots: SlotMap::new(),
            range: WindowRange::EMPTY,
        }
    }

    /// The range the window was last synced to.
    pub fn range(&self) -> WindowRange {
        self.range
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.slots.contains_key(&index)
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.slots.get(&index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut S> {
        self.slots.get_mut(&index)
    }

    /// Visits every live slot in ascending index order.
    pub fn for_each(&self, mut f: impl FnMut(usize, &S)) {
        for index in self.range.start..self.range.end {
            if let Some(slot) = self.slots.get(&index) {
                f(index, slot);
            }
        }
    }

    /// Reconciles the slot store against `next`:
    ///
    /// - rows that left the range are removed and passed to `destroy`;
    /// - rows that entered it get a fresh handle from `create`;
    /// - rows present in both ranges are left untouched.
    ///
    /// Syncing twice with the same range is a no-op: the second call performs
    /// zero creates and zero destroys.
    pub fn sync(
        &mut self,
        next: WindowRange,
        mut create: impl FnMut(usize) -> S,
        mut destroy: impl FnMut(usize, S),
    ) {
        let prev = self.range;
        if prev == next {
            return;
        }

        for index in prev.start..prev.end {
            if !next.contains(index) {
                if let Some(slot) = self.slots.remove(&index) {
                    destroy(index, slot);
                }
            }
        }

        for index in next.start..next.end {
            if !prev.contains(index) {
                self.slots.insert(index, create(index));
            }
        }

        self.range = next;
        debug_assert_eq!(
            self.slots.len(),
            self.range.len(),
            "slot count out of sync with range"
        );
        wtrace!(
            start = next.start,
            end = next.end,
            slots = self.slots.len(),
            "SlotWindow::sync"
        );
    }

    /// Destroys every live slot and resets the range (teardown path).
    pub fn clear(&mut self, mut destroy: impl FnMut(usize, S)) {
        let range = self.range;
        self.range = WindowRange::EMPTY;
        for index in range.start..range.end {
            if let Some(slot) = self.slots.remove(&index) {
                destroy(index, slot);
            }
        }
        debug_assert!(self.slots.is_empty(), "slots leaked past clear");
    }
}

impl<S> Default for SlotWindow<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> core::fmt::Debug for SlotWindow<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SlotWindow")
            .field("range", &self.range)
            .field("slots", &self.slots.len())
            .finish()
    }
}

use alloc::sync::Arc;

use crate::list::VirtualList;
use crate::{ConfigError, Rect};

/// A callback fired when a list state update occurs.
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback = Arc<dyn Fn(&VirtualList, bool) + Send + Sync>;

/// Initial scroll offset configuration.
#[derive(Clone)]
pub enum InitialOffset {
    /// A fixed initial offset.
    Value(u64),
    /// A lazily evaluated initial offset provider (called by `VirtualList::new`).
    Provider(Arc<dyn Fn() -> u64 + Send + Sync>),
}

impl InitialOffset {
    pub(crate) fn resolve(&self) -> u64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialOffset {
    fn default() -> Self {
        Self::Value(0)
    }
}

impl core::fmt::Debug for InitialOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::VirtualList`].
///
/// Cheap to clone: the callback fields are stored in `Arc`s so adapters can
/// update a few fields and call `VirtualList::set_options` without
/// reallocating closures.
#[derive(Clone)]
pub struct ListOptions {
    /// Number of rows in the host's dataset.
    pub count: usize,

    /// Fixed rendered height of every row in the scroll axis. Must be
    /// non-zero; see [`Self::validate`].
    pub row_height: u32,

    /// Extra rows materialized on each side of the visible range, masking
    /// scroll-induced render latency.
    pub overscan: usize,

    /// The initial viewport rectangle, when known before the first layout
    /// pass. `None` starts at a zero rect, which renders nothing until the
    /// host reports a real size.
    pub initial_rect: Option<Rect>,

    /// Initial scroll offset.
    pub initial_offset: InitialOffset,

    /// Optional callback fired when the list's internal state changes.
    ///
    /// The `is_scrolling` argument indicates whether a scroll is in progress.
    pub on_change: Option<OnChangeCallback>,

    /// Debounced duration after the last scroll event before `is_scrolling`
    /// resets, driven by `VirtualList::update_scrolling`.
    pub is_scrolling_reset_delay_ms: u64,
}

impl ListOptions {
    pub fn new(count: usize, row_height: u32) -> Self {
        Self {
            count,
            row_height,
            overscan: 5,
            initial_rect: None,
            initial_offset: InitialOffset::default(),
            on_change: None,
            is_scrolling_reset_delay_ms: 150,
        }
    }

    /// Rejects configurations the range math cannot support.
    ///
    /// `count` and `overscan` are unsigned so every value is meaningful; the
    /// one invalid configuration is a zero row height, which would leave
    /// offset → index mapping undefined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.row_height == 0 {
            return Err(ConfigError::ZeroRowHeight);
        }
        Ok(())
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Sets the initial viewport rectangle.
    pub fn with_initial_rect(mut self, initial_rect: Option<Rect>) -> Self {
        self.initial_rect = initial_rect;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: InitialOffset) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_initial_offset_value(mut self, initial_offset: u64) -> Self {
        self.initial_offset = InitialOffset::Value(initial_offset);
        self
    }

    pub fn with_initial_offset_provider(
        mut self,
        initial_offset: impl Fn() -> u64 + Send + Sync + 'static,
    ) -> Self {
        self.initial_offset = InitialOffset::Provider(Arc::new(initial_offset));
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&VirtualList, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }
}

impl core::fmt::Debug for ListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("count", &self.count)
            .field("row_height", &self.row_height)
            .field("overscan", &self.overscan)
            .field("initial_rect", &self.initial_rect)
            .field("initial_offset", &self.initial_offset)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}

//! A headless windowed-rendering core for fixed-row-height lists.
//!
//! For adapter-level utilities (frame-coalesced event sampling, a per-frame
//! controller), see the `windowlist-adapter` crate.
//!
//! This crate keeps huge lists cheap to render by materializing only the rows
//! that intersect the viewport (plus an overscan buffer): a pure offset → index
//! range calculation, a keyed slot map that creates/destroys host handles as
//! rows enter and leave the window, and a container that recomputes the window
//! on every geometry change.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - viewport size (height/width)
//! - scroll offset
//! - the rendered content for each live row index
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod list;
mod options;
mod range;
mod types;
mod window;


pub use error::ConfigError;
pub use list::VirtualList;
pub use options::{InitialOffset, ListOptions, OnChangeCallback};
pub use range::{visible_range, windowed_range};
pub use types::{
    Align, FrameState, PlacedRow, Rect, ScrollDirection, ScrollState, ViewportState, WindowRange,
};
pub use window::SlotWindow;

//! Adapter utilities for the `windowlist` crate.
//!
//! The `windowlist` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides the small, framework-neutral plumbing an
//! adapter needs between raw UI events and the per-frame render pass:
//!
//! - Frame-coalesced sampling of scroll/viewport events (latest wins, one
//!   sample per frame)
//! - A controller that drains the sampler, advances the list, and reconciles
//!   the slot window once per frame, with an explicit teardown path
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod sampler;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use sampler::{FrameSample, FrameSampler};

// Copyright 2025 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Margin layout and data-to-pixel mapping for Tickwise axes.
//!
//! The crate sits between `tickwise_core` (which resolves axis ranges and ticks in data
//! space) and a renderer:
//! - **Axis geometry** measures the margin band an axis needs: line, ticks, rotated tick
//!   labels, and title, via the `tickwise_text` measurement seam.
//! - **Frame layout** solves the four margins and the plot rectangle from the window
//!   size, pinned margins, title, and legend, and derives the scale/offset pairs that
//!   map data values to window pixels and back.
//!
//! Everything is a plain value type recomputed per layout pass; nothing draws.

#![no_std]

#[cfg(not(feature = "std"))]
mod float;
mod frame;
mod geometry;

pub use frame::{FrameLayout, FrameSpec, LegendSite, MarginSpec, PlotRect};
pub use geometry::{AxisExtents, AxisGeometry, AxisOrient, AxisPlacement, rotated_extent};

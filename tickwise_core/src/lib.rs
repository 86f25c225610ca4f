// Copyright 2025 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis range resolution and tick generation.
//!
//! This crate turns data extrema plus per-axis configuration into render-ready axis
//! geometry in data space:
//! - **Nice numbers** pick 1/2/5-of-a-decade quanta for spans and steps.
//! - **Range resolution** combines data extrema, explicit overrides, scroll windows, and
//!   bounds policies into a visible `[min, max]` interval, for linear and log10 axes.
//! - **Tick sweeps** describe major/minor tick progressions compactly and materialize
//!   them on demand, clipped to the visible range.
//! - **The axis registry** stores named axis configurations with use-counted removal.
//!
//! Pixel mapping and margin layout live one crate up; nothing here knows about screen
//! coordinates.

#![no_std]

extern crate alloc;

// With `std` enabled the float shim is compiled out; linking `std` here keeps the
// inherent `f64` math methods resolvable even though the crate itself stays `no_std`.
#[cfg(feature = "std")]
extern crate std;

mod axis;
#[cfg(not(feature = "std"))]
mod float;
mod nice;
mod range;
mod registry;
mod sweep;

pub use axis::{AxisError, AxisOptions, ResolvedAxis};
pub use nice::nice_num;
pub use range::{AxisRange, BoundsPolicy};
pub use registry::{AxisHandle, AxisRegistry, RegistryError};
pub use sweep::{MAX_TICK_COUNT, TickSweep, Ticks};

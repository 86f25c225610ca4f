// Copyright 2025 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick sweeps and their materialization.
//!
//! A sweep is the compact description of a tick progression; it is expanded on demand into
//! concrete values once per layout pass. The log mantissa table is an explicit variant
//! rather than a sentinel value of the arithmetic fields.

use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Materialized tick values for one sweep, in ascending order.
pub type Ticks = SmallVec<[f64; 12]>;

/// Hard cap on the number of major ticks a sweep may describe.
///
/// A misconfigured step can otherwise ask for millions of ticks; planners clamp silently
/// at this bound so every layout pass terminates.
pub const MAX_TICK_COUNT: u32 = 10_001;

/// Precomputed `log10(1..=10)`, the minor-tick positions inside one decade.
pub(crate) const LOG_MANTISSAS: [f64; 10] = [
    0.0,
    0.301_029_995_663_981_2,
    0.477_121_254_719_662_1,
    0.602_059_991_327_962_4,
    0.698_970_004_336_018_8,
    0.778_151_250_383_643_6,
    0.845_098_040_014_256_8,
    0.903_089_986_991_943_6,
    0.954_242_509_439_324_9,
    1.0,
];

/// A compact description of one axis's major or minor tick progression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickSweep {
    /// An arithmetic progression of `count` values starting at `initial`.
    ///
    /// Minor sweeps store `initial`/`step` as fractions of the major step; the planner
    /// scales them into axis units when expanding minors per major interval.
    Arithmetic {
        /// First tick value.
        initial: f64,
        /// Distance between consecutive ticks.
        step: f64,
        /// Number of ticks.
        count: u32,
    },
    /// The fixed log10 mantissa table: minor positions within one decade.
    LogMantissa {
        /// Number of table entries to emit (at most 10).
        count: u32,
    },
}

impl TickSweep {
    /// Returns the number of ticks this sweep describes.
    pub fn count(&self) -> u32 {
        match *self {
            Self::Arithmetic { count, .. } => count,
            Self::LogMantissa { count } => count.min(10),
        }
    }

    /// Expands the sweep into concrete tick values.
    ///
    /// Arithmetic sweeps re-snap to the step unit on every iteration
    /// (`round(prev/step)*step + step`) instead of computing `initial + i*step`; the
    /// re-snap keeps long progressions exactly aligned to the step grid.
    pub fn values(&self) -> Ticks {
        match *self {
            Self::LogMantissa { count } => LOG_MANTISSAS
                .iter()
                .take(count.min(10) as usize)
                .copied()
                .collect(),
            Self::Arithmetic {
                initial,
                step,
                count,
            } => {
                let mut out = Ticks::new();
                let mut value = initial;
                for _ in 0..count {
                    out.push(value);
                    if step > 0.0 {
                        value = round_to_unit(value, step) + step;
                    }
                }
                out
            }
        }
    }
}

/// Snaps `value` to the nearest multiple of `unit`.
pub(crate) fn round_to_unit(value: f64, unit: f64) -> f64 {
    (value / unit).round() * unit
}

// Copyright 2025 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved axis ranges and range membership.
//!
//! An [`AxisRange`] is the final, per-pass answer to "what interval does this axis show".
//! It is a plain value type: rebuilt wholesale on every layout pass, never patched in place.
//! Membership tests are epsilon-normalized so ticks that were rounded outward by a loose
//! bounds policy can be clipped without drifting on float noise.

/// Bounds policy for one side of an axis.
///
/// Tight bounds pin the visible extremum to the data extremum (or an explicit override);
/// loose bounds round outward to the nearest major tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundsPolicy {
    /// Use the data extremum (or explicit override) as the visible bound.
    #[default]
    Tight,
    /// Round auto-derived bounds outward to the tick ladder; explicit overrides stay tight.
    Loose,
    /// Round outward to the tick ladder even when the bound was explicitly overridden.
    AlwaysLoose,
}

/// A resolved `[min, max]` axis interval with its cached span and reciprocal.
///
/// For log-scale axes the fields are in log10 units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    /// Lower visible bound.
    pub min: f64,
    /// Upper visible bound.
    pub max: f64,
    /// `max - min`, forced to `1.0` when the interval collapses below epsilon.
    pub range: f64,
    /// `1.0 / range`, used for normalized-position tests and pixel mapping.
    pub scale: f64,
}

impl AxisRange {
    /// Builds a range from resolved bounds, guarding the span against collapse.
    pub fn new(min: f64, max: f64) -> Self {
        let mut range = max - min;
        if range.abs() < f64::EPSILON {
            range = 1.0;
        }
        Self {
            min,
            max,
            range,
            scale: 1.0 / range,
        }
    }

    /// Returns whether `value` lies inside this range, within epsilon.
    ///
    /// Values are normalized into `[0, 1]` by the cached scale, so the tolerance is
    /// relative to the span rather than absolute. The `range < epsilon` branch keeps
    /// the inherited distance-from-max behavior verbatim (see DESIGN.md); it is only
    /// reachable for inverted ranges, since construction forces collapsed spans to 1.
    pub fn contains(&self, value: f64) -> bool {
        if self.range < f64::EPSILON {
            return (self.max - value).abs() >= f64::EPSILON;
        }
        let norm = (value - self.min) * self.scale;
        norm > -f64::EPSILON && norm - 1.0 <= f64::EPSILON
    }
}

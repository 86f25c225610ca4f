// Copyright 2025 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis configuration and range/tick resolution.
//!
//! [`AxisOptions`] collects everything a caller may request for one axis: explicit bounds,
//! a preferred step, tick counts, per-side bounds policies, log scaling, and a scroll
//! window. [`AxisOptions::resolve`] combines those requests with the observed data extrema
//! into a [`ResolvedAxis`]: the visible [`AxisRange`] plus major and minor [`TickSweep`]s.
//!
//! Resolution is total over the numeric domain: collapsed spans, non-positive log inputs,
//! and runaway steps all fall back to documented substitutions. The only error is a
//! configuration contradiction (`min >= max` requested explicitly), surfaced eagerly
//! before any tick is planned.

use crate::nice::nice_num;
use crate::range::{AxisRange, BoundsPolicy};
use crate::sweep::{MAX_TICK_COUNT, TickSweep, Ticks};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Errors detected while resolving an axis configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisError {
    /// Explicit limits were requested with `min >= max`.
    EmptyLimits {
        /// The requested lower bound.
        min: f64,
        /// The requested upper bound.
        max: f64,
    },
}

impl core::fmt::Display for AxisError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyLimits { min, max } => {
                write!(f, "impossible axis limits: min {min} >= max {max}")
            }
        }
    }
}

impl core::error::Error for AxisError {}

/// Per-axis scaling configuration.
///
/// Unset options (`None`) are derived from the data; set options win. All fields are plain
/// values; an `AxisOptions` can be cloned, stored in a registry, and re-resolved every
/// layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisOptions {
    /// Explicit lower bound, in data units.
    pub req_min: Option<f64>,
    /// Explicit upper bound, in data units.
    pub req_max: Option<f64>,
    /// Explicit major tick step. Non-positive values are ignored.
    pub req_step: Option<f64>,
    /// Requested number of major ticks when the step is auto-derived.
    pub major_ticks: u32,
    /// Requested number of minor subdivisions between adjacent major ticks.
    pub minor_ticks: u32,
    /// Bounds policy for the lower side.
    pub loose_min: BoundsPolicy,
    /// Bounds policy for the upper side.
    pub loose_max: BoundsPolicy,
    /// Whether this axis is log10-scaled.
    pub log_scale: bool,
    /// Optional scroll-window floor: the visible minimum never goes below this.
    pub scroll_min: Option<f64>,
    /// Optional scroll-window ceiling: the visible maximum never goes above this.
    pub scroll_max: Option<f64>,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            req_min: None,
            req_max: None,
            req_step: None,
            major_ticks: 10,
            minor_ticks: 2,
            loose_min: BoundsPolicy::Tight,
            loose_max: BoundsPolicy::Tight,
            log_scale: false,
            scroll_min: None,
            scroll_max: None,
        }
    }
}

impl AxisOptions {
    /// Creates options with defaults: auto bounds, 10 major ticks, 2 minors, tight, linear.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit lower bound.
    pub fn with_min(mut self, min: f64) -> Self {
        self.req_min = Some(min);
        self
    }

    /// Set an explicit upper bound.
    pub fn with_max(mut self, max: f64) -> Self {
        self.req_max = Some(max);
        self
    }

    /// Set an explicit major tick step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.req_step = Some(step);
        self
    }

    /// Set the requested major tick count.
    pub fn with_major_ticks(mut self, count: u32) -> Self {
        self.major_ticks = count;
        self
    }

    /// Set the requested minor subdivision count.
    pub fn with_minor_ticks(mut self, count: u32) -> Self {
        self.minor_ticks = count;
        self
    }

    /// Set the bounds policy for both sides.
    pub fn with_bounds_policy(mut self, policy: BoundsPolicy) -> Self {
        self.loose_min = policy;
        self.loose_max = policy;
        self
    }

    /// Set the bounds policy for the lower side only.
    pub fn with_loose_min(mut self, policy: BoundsPolicy) -> Self {
        self.loose_min = policy;
        self
    }

    /// Set the bounds policy for the upper side only.
    pub fn with_loose_max(mut self, policy: BoundsPolicy) -> Self {
        self.loose_max = policy;
        self
    }

    /// Enable or disable log10 scaling.
    pub fn with_log_scale(mut self, log_scale: bool) -> Self {
        self.log_scale = log_scale;
        self
    }

    /// Clamp the visible span into `[min, max]` regardless of data or overrides.
    pub fn with_scroll_window(mut self, min: f64, max: f64) -> Self {
        self.scroll_min = Some(min);
        self.scroll_max = Some(max);
        self
    }

    /// Resolves this configuration against the observed data extrema.
    ///
    /// Returns the visible range and tick sweeps, or an error if explicit limits
    /// contradict each other. Degenerate data never errors; see module docs.
    pub fn resolve(&self, data_min: f64, data_max: f64) -> Result<ResolvedAxis, AxisError> {
        if let (Some(min), Some(max)) = (self.req_min, self.req_max)
            && min >= max
        {
            return Err(AxisError::EmptyLimits { min, max });
        }
        if self.log_scale {
            Ok(self.resolve_log(data_min, data_max))
        } else {
            Ok(self.resolve_linear(data_min, data_max))
        }
    }

    fn resolve_linear(&self, data_min: f64, data_max: f64) -> ResolvedAxis {
        let (mut min, mut max) = self.clamped_extrema(data_min, data_max);

        let mut range = max - min;
        if range <= 0.0 {
            // Collapsed or inverted data: widen to a nice span around the midpoint so the
            // rest of the pipeline never divides by zero.
            let magnitude = max.abs().max(min.abs()).max(1.0);
            let span = nice_num(magnitude, false);
            let mid = 0.5 * (min + max);
            min = mid - 0.5 * span;
            max = mid + 0.5 * span;
            range = span;
        }

        let step = match self.req_step.filter(|s| *s > 0.0) {
            Some(requested) => {
                // A designated interval is honored but never enlarged; halve until at
                // least two steps fit the span.
                let mut step = requested;
                while 2.0 * step >= range {
                    step *= 0.5;
                }
                step
            }
            None => nice_num(
                nice_num(range, false) / f64::from(self.major_ticks.max(1)),
                true,
            ),
        };

        let (tick_min, tick_max, count) = outer_ticks(min, max, step);

        let axis_min = pick_bound(self.loose_min, self.req_min.is_some(), min, tick_min);
        let axis_max = pick_bound(self.loose_max, self.req_max.is_some(), max, tick_max);

        ResolvedAxis {
            range: AxisRange::new(axis_min, axis_max),
            major: TickSweep::Arithmetic {
                initial: tick_min,
                step,
                count,
            },
            minor: fractional_minors(self.minor_ticks),
            log_scale: false,
        }
    }

    fn resolve_log(&self, data_min: f64, data_max: f64) -> ResolvedAxis {
        let (min, max) = self.clamped_extrema(data_min, data_max);

        // Never take log(0): non-positive extrema pin to decades 0 and 1.
        let log_min = if min > 0.0 { min.log10() } else { 0.0 };
        let log_max = if max > 0.0 { max.log10() } else { 1.0 };

        let mut tick_min = log_min.floor();
        let mut tick_max = log_max.ceil();
        let span = tick_max - tick_min;

        let (step, count, minor) = if span > 10.0 {
            // Too many decades for one tick each; fall back to the linear ladder over
            // log values.
            let step = nice_num(
                nice_num(span, false) / f64::from(self.major_ticks.max(1)),
                true,
            );
            let snapped = outer_ticks(tick_min, tick_max, step);
            tick_min = snapped.0;
            tick_max = snapped.1;
            (step, snapped.2, decade_minors(step))
        } else {
            if tick_min == tick_max {
                tick_max += 1.0;
            }
            let count = clamp_count(tick_max - tick_min + 1.0);
            (1.0, count, TickSweep::LogMantissa { count: 10 })
        };

        let axis_min = pick_bound(self.loose_min, self.req_min.is_some(), log_min, tick_min);
        let axis_max = pick_bound(self.loose_max, self.req_max.is_some(), log_max, tick_max);

        ResolvedAxis {
            range: AxisRange::new(axis_min, axis_max),
            major: TickSweep::Arithmetic {
                initial: tick_min,
                step,
                count,
            },
            minor,
            log_scale: true,
        }
    }

    /// Applies explicit overrides, then the scroll-window clamp, to the data extrema.
    fn clamped_extrema(&self, data_min: f64, data_max: f64) -> (f64, f64) {
        let mut min = self.req_min.unwrap_or(data_min);
        let mut max = self.req_max.unwrap_or(data_max);
        if let Some(floor) = self.scroll_min {
            min = min.max(floor);
        }
        if let Some(ceiling) = self.scroll_max {
            max = max.min(ceiling);
        }
        (min, max)
    }
}

/// Rounds `[min, max]` outward to the step ladder and counts the covering ticks.
fn outer_ticks(min: f64, max: f64, step: f64) -> (f64, f64, u32) {
    // `+ 0.0` folds a negative zero from the division back to positive zero.
    let tick_min = (min / step).floor() * step + 0.0;
    let tick_max = (max / step).ceil() * step + 0.0;
    let count = clamp_count((tick_max - tick_min) / step + 1.0);
    (tick_min, tick_max, count)
}

fn clamp_count(count: f64) -> u32 {
    let count = count.round();
    if count.is_finite() && count >= 1.0 {
        let count = count.min(f64::from(MAX_TICK_COUNT));
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/positive checks and capped at the tick limit"
        )]
        {
            count as u32
        }
    } else {
        1
    }
}

fn pick_bound(policy: BoundsPolicy, overridden: bool, extremum: f64, tick_bound: f64) -> f64 {
    match policy {
        BoundsPolicy::Tight => extremum,
        BoundsPolicy::Loose => {
            if overridden {
                extremum
            } else {
                tick_bound
            }
        }
        BoundsPolicy::AlwaysLoose => tick_bound,
    }
}

/// Minor sweep for linear axes: `n` subdivisions as fractions of one major interval.
fn fractional_minors(minor_ticks: u32) -> TickSweep {
    if minor_ticks > 0 {
        let step = 1.0 / f64::from(minor_ticks + 1);
        TickSweep::Arithmetic {
            initial: step,
            step,
            count: minor_ticks,
        }
    } else {
        // Reserved placeholder: midpoint step, zero ticks.
        TickSweep::Arithmetic {
            initial: 0.5,
            step: 0.5,
            count: 0,
        }
    }
}

/// Minor sweep for a multi-decade major step, as a fraction of the major step.
fn decade_minors(major_step: f64) -> TickSweep {
    let minor_abs = 10.0_f64.powf(major_step.log10().floor());
    if minor_abs == major_step {
        TickSweep::Arithmetic {
            initial: 0.2,
            step: 0.2,
            count: 4,
        }
    } else {
        let count = clamp_count(major_step / minor_abs) - 1;
        let fraction = minor_abs / major_step;
        TickSweep::Arithmetic {
            initial: fraction,
            step: fraction,
            count,
        }
    }
}

/// A fully resolved axis: visible range plus major and minor tick sweeps.
///
/// For log axes all values (range bounds, tick values) are in log10 units; the renderer
/// un-logs when labeling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedAxis {
    /// The visible axis interval.
    pub range: AxisRange,
    /// Major tick sweep, covering the data span rounded outward.
    pub major: TickSweep,
    /// Minor tick sweep, in fractions of one major interval (or the mantissa table).
    pub minor: TickSweep,
    /// Whether range and ticks are in log10 units.
    pub log_scale: bool,
}

impl ResolvedAxis {
    /// Materializes the major ticks that fall inside the visible range.
    ///
    /// Loose rounding can push the sweep's outermost ticks past a tight bound; those are
    /// clipped here rather than during planning.
    pub fn major_ticks(&self) -> Ticks {
        self.major
            .values()
            .into_iter()
            .filter(|v| self.range.contains(*v))
            .collect()
    }

    /// Materializes the minor ticks that fall inside the visible range.
    ///
    /// Minor fractions are expanded against every major interval of the sweep, including
    /// intervals whose own major tick lies outside the range; only the resulting minor
    /// positions are range-clipped.
    pub fn minor_ticks(&self) -> Ticks {
        let step = match self.major {
            TickSweep::Arithmetic { step, .. } => step,
            TickSweep::LogMantissa { .. } => 1.0,
        };
        let offsets = self.minor.values();
        let mut out = Ticks::new();
        for base in self.major.values() {
            for offset in &offsets {
                let value = match self.minor {
                    // Mantissa offsets are already in log units within the decade.
                    TickSweep::LogMantissa { .. } => base + offset,
                    TickSweep::Arithmetic { .. } => base + offset * step,
                };
                if self.range.contains(value) {
                    out.push(value);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1.0e-9, "{a} != {b}");
    }

    #[test]
    fn tight_linear_axis_keeps_data_extrema() {
        // Data [0, 95] with 10 requested majors: step 10, sweep 0..=100, tight bounds.
        let axis = AxisOptions::new().resolve(0.0, 95.0).unwrap();
        assert_eq!(
            axis.major,
            TickSweep::Arithmetic {
                initial: 0.0,
                step: 10.0,
                count: 11,
            }
        );
        assert_close(axis.range.min, 0.0);
        assert_close(axis.range.max, 95.0);

        // The outermost sweep tick (100) is clipped by the tight bound.
        let ticks = axis.major_ticks();
        assert_eq!(ticks.len(), 10);
        assert_close(ticks[0], 0.0);
        assert_close(ticks[9], 90.0);
    }

    #[test]
    fn loose_linear_axis_rounds_to_the_tick_ladder() {
        let axis = AxisOptions::new()
            .with_bounds_policy(BoundsPolicy::Loose)
            .resolve(0.0, 95.0)
            .unwrap();
        assert_close(axis.range.min, 0.0);
        assert_close(axis.range.max, 100.0);
        assert_eq!(axis.major_ticks().len(), 11);
    }

    #[test]
    fn loose_policy_defers_to_explicit_overrides() {
        let axis = AxisOptions::new()
            .with_bounds_policy(BoundsPolicy::Loose)
            .with_max(95.0)
            .resolve(0.0, 80.0)
            .unwrap();
        // The overridden side stays tight; the auto side still rounds out.
        assert_close(axis.range.max, 95.0);
        assert_close(axis.range.min, 0.0);
    }

    #[test]
    fn always_loose_rounds_even_overridden_bounds() {
        let axis = AxisOptions::new()
            .with_bounds_policy(BoundsPolicy::AlwaysLoose)
            .with_max(95.0)
            .resolve(0.0, 80.0)
            .unwrap();
        assert_close(axis.range.max, 100.0);
    }

    #[test]
    fn contradictory_limits_are_a_configuration_error() {
        let err = AxisOptions::new()
            .with_min(5.0)
            .with_max(5.0)
            .resolve(0.0, 10.0)
            .unwrap_err();
        assert_eq!(err, AxisError::EmptyLimits { min: 5.0, max: 5.0 });
    }

    #[test]
    fn resolution_is_total_over_flat_data() {
        let axis = AxisOptions::new().resolve(5.0, 5.0).unwrap();
        assert!(axis.range.range > 0.0);
        assert!(axis.range.min < 5.0);
        assert!(axis.range.max > 5.0);
        assert!(!axis.major_ticks().is_empty());
    }

    #[test]
    fn resolver_never_returns_an_empty_span() {
        for &(lo, hi) in &[(0.0, 0.0), (-3.0, -3.0), (7.0, 2.0), (0.0, 1.0e-18)] {
            let axis = AxisOptions::new().resolve(lo, hi).unwrap();
            assert!(axis.range.range > 0.0, "empty span for ({lo}, {hi})");
        }
    }

    #[test]
    fn requested_step_is_halved_but_never_increased() {
        let axis = AxisOptions::new()
            .with_step(80.0)
            .resolve(0.0, 100.0)
            .unwrap();
        let TickSweep::Arithmetic { step, .. } = axis.major else {
            panic!("expected arithmetic majors");
        };
        // 80 halves once to 40, where two steps no longer cover the span of 100.
        assert_close(step, 40.0);
    }

    #[test]
    fn scroll_window_clamps_the_visible_span() {
        let axis = AxisOptions::new()
            .with_scroll_window(10.0, 50.0)
            .resolve(0.0, 95.0)
            .unwrap();
        assert_close(axis.range.min, 10.0);
        assert_close(axis.range.max, 50.0);
    }

    #[test]
    fn minor_sweep_subdivides_major_intervals_fractionally() {
        let axis = AxisOptions::new()
            .with_minor_ticks(4)
            .resolve(0.0, 100.0)
            .unwrap();
        assert_eq!(
            axis.minor,
            TickSweep::Arithmetic {
                initial: 0.2,
                step: 0.2,
                count: 4,
            }
        );
        let minors = axis.minor_ticks();
        // Each of the 10 in-range intervals carries 4 minors.
        assert_eq!(minors.len(), 40);
        assert_close(minors[0], 2.0);
        assert_close(minors[3], 8.0);
    }

    #[test]
    fn zero_requested_minors_yields_the_reserved_sweep() {
        let axis = AxisOptions::new()
            .with_minor_ticks(0)
            .resolve(0.0, 100.0)
            .unwrap();
        assert_eq!(
            axis.minor,
            TickSweep::Arithmetic {
                initial: 0.5,
                step: 0.5,
                count: 0,
            }
        );
        assert!(axis.minor_ticks().is_empty());
    }

    #[test]
    fn log_axis_places_one_tick_per_decade() {
        // Data [3, 8000]: decades 0..=4, one major per decade, mantissa minors.
        let axis = AxisOptions::new()
            .with_log_scale(true)
            .with_bounds_policy(BoundsPolicy::Loose)
            .resolve(3.0, 8000.0)
            .unwrap();
        assert_eq!(
            axis.major,
            TickSweep::Arithmetic {
                initial: 0.0,
                step: 1.0,
                count: 5,
            }
        );
        assert_eq!(axis.minor, TickSweep::LogMantissa { count: 10 });
        assert_close(axis.range.min, 0.0);
        assert_close(axis.range.max, 4.0);

        let ticks = axis.major_ticks();
        let expected: Vec<f64> = (0..5).map(f64::from).collect();
        assert_eq!(ticks.len(), 5);
        for (t, e) in ticks.iter().zip(&expected) {
            assert_close(*t, *e);
        }

        // Mantissa minors land between decades: log10(2), log10(3), ...
        let minors = axis.minor_ticks();
        assert!(minors.iter().any(|m| (m - 2.0_f64.log10()).abs() < 1e-9));
        assert!(
            minors
                .iter()
                .any(|m| (m - (3.0 + 5.0_f64.log10())).abs() < 1e-9)
        );
    }

    #[test]
    fn log_axis_with_tight_bounds_clips_outer_decades() {
        let axis = AxisOptions::new()
            .with_log_scale(true)
            .resolve(3.0, 8000.0)
            .unwrap();
        assert_close(axis.range.min, 3.0_f64.log10());
        assert_close(axis.range.max, 8000.0_f64.log10());
        // Decade ticks 1..=3 survive; 0 and 4 are outside the tight range.
        assert_eq!(axis.major_ticks().len(), 3);
    }

    #[test]
    fn log_axis_treats_nonpositive_data_as_unit_decades() {
        let axis = AxisOptions::new()
            .with_log_scale(true)
            .with_bounds_policy(BoundsPolicy::Loose)
            .resolve(0.0, 0.0)
            .unwrap();
        assert_close(axis.range.min, 0.0);
        assert_close(axis.range.max, 1.0);
    }

    #[test]
    fn wide_log_axis_degrades_to_a_linear_decade_ladder() {
        // 24 decades of span: more than one tick per decade would fit.
        let axis = AxisOptions::new()
            .with_log_scale(true)
            .with_bounds_policy(BoundsPolicy::Loose)
            .resolve(1.0e-12, 1.0e12)
            .unwrap();
        let TickSweep::Arithmetic { step, count, .. } = axis.major else {
            panic!("expected arithmetic majors");
        };
        assert!(step > 1.0, "expected a multi-decade step, got {step}");
        assert!(count <= 15);
        // Minors subdivide the multi-decade step fractionally.
        let TickSweep::Arithmetic {
            count: minor_count, ..
        } = axis.minor
        else {
            panic!("expected arithmetic minors");
        };
        assert!(minor_count >= 1);
    }

    #[test]
    fn major_tick_count_is_capped() {
        let axis = AxisOptions::new()
            .with_step(1.0e-6)
            .resolve(0.0, 1.0e6)
            .unwrap();
        assert!(axis.major.count() <= MAX_TICK_COUNT);
    }
}

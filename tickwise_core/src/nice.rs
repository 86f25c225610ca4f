// Copyright 2025 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nice-number selection.
//!
//! Axis steps look best when they are 1, 2, or 5 times a power of ten. This module picks
//! the "nice" decimal quantum for a raw span, either rounding to the nearest quantum (used
//! for tick steps) or taking the smallest quantum not below the input (used for spans).

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Returns a "nice" decimal number (1, 2, 5, or 10 times a power of ten) for `x`.
///
/// With `round` set, the nearest quantum is chosen (break points 1.5, 3, 7); otherwise the
/// smallest quantum `>= x` is chosen, so the result never rounds down.
///
/// Callers must pass `x > 0`; the result is meaningless for zero or negative inputs.
pub fn nice_num(x: f64, round: bool) -> f64 {
    let exp = x.log10().floor();
    let base = 10.0_f64.powf(exp);
    let frac = x / base;
    let nice = if round {
        if frac < 1.5 {
            1.0
        } else if frac < 3.0 {
            2.0
        } else if frac < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn ceiling_mode_never_rounds_down() {
        for &x in &[0.003, 0.04, 0.7, 1.0, 1.1, 3.2, 8.9, 42.0, 95.0, 777.0] {
            assert!(
                nice_num(x, false) >= x,
                "nice_num({x}, false) rounded down"
            );
        }
    }

    #[test]
    fn round_mode_stays_within_bounded_relative_error() {
        // Worst cases sit at the break points: just above 3 rounds up to 5 (ratio 5/3),
        // just under 1.5 rounds down to 1 (ratio 2/3).
        for &x in &[0.002, 0.31, 1.4, 2.9, 3.1, 6.9, 7.1, 12.0, 95.0, 9_999.0] {
            let n = nice_num(x, true);
            let ratio = n / x;
            assert!(
                (0.6..=5.0 / 3.0).contains(&ratio),
                "nice_num({x}, true) = {n} is off by ratio {ratio}"
            );
        }
    }

    #[test]
    fn idempotent_under_decimal_scaling() {
        for &x in &[0.7, 1.0, 2.3, 4.9, 6.0, 95.0] {
            for round in [false, true] {
                let n = nice_num(x, round);
                for k in -3_i32..=3 {
                    let scale = 10.0_f64.powi(k);
                    let rescaled = nice_num(n * scale, round);
                    assert!(
                        (rescaled - n * scale).abs() <= 1e-9 * scale,
                        "nice_num not stable at {x} * 10^{k}"
                    );
                }
            }
        }
    }

    #[test]
    fn known_quanta() {
        assert_eq!(nice_num(95.0, false), 100.0);
        assert_eq!(nice_num(10.0, true), 10.0);
        assert_eq!(nice_num(0.13, true), 0.1);
        assert_eq!(nice_num(4.0, false), 5.0);
        assert_eq!(nice_num(7.0, true), 10.0);
        assert_eq!(nice_num(6.9, true), 5.0);
    }
}

// Copyright 2025 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The margin solver: window size in, four margins and a plot rectangle out.
//!
//! Solving is a two-pass constraint pass over value types, recomputed wholesale every
//! layout event:
//! 1. computed margin sizes (axis requirements, perpendicular label floors, pinned
//!    overrides, title and legend additions), then
//! 2. plot sizing (window minus margins minus insets, aspect correction, and surplus
//!    redistribution when a plot dimension was explicitly requested).
//!
//! No stage errors: a window smaller than its decorations yields a one-pixel plot.

use kurbo::Rect;
use tickwise_core::AxisRange;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Size constraints for one margin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarginSpec {
    /// Computed requirement from the axis occupying this margin, in pixels.
    pub required: i32,
    /// Explicit override; replaces the computed requirement unconditionally.
    pub pinned: Option<i32>,
}

impl MarginSpec {
    /// A margin sized by its computed requirement.
    pub fn new(required: i32) -> Self {
        Self {
            required,
            pinned: None,
        }
    }

    /// A margin pinned to an explicit size.
    pub fn pinned(size: i32) -> Self {
        Self {
            required: 0,
            pinned: Some(size),
        }
    }

    /// Base size: the pinned override, or the computed requirement floored by the
    /// perpendicular label overhang.
    fn base(self, overhang_floor: i32) -> i32 {
        match self.pinned {
            Some(size) => size.max(0),
            None => self.required.max(overhang_floor).max(0),
        }
    }
}

/// Where the legend sits relative to the plot.
///
/// Only the four window-edge sites consume margin space; a legend inside the plot, at
/// explicit plot coordinates, or in its own toplevel window does not affect layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendSite {
    /// In the left margin.
    Left,
    /// In the right margin.
    #[default]
    Right,
    /// In the top margin.
    Top,
    /// In the bottom margin.
    Bottom,
    /// Inside the plot rectangle.
    Plot,
    /// At explicit plot coordinates.
    Xy,
    /// In a separate window.
    Window,
}

/// Layout inputs for one frame: window geometry, margins, title, and legend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSpec {
    /// Outer window width in pixels.
    pub width: i32,
    /// Outer window height in pixels.
    pub height: i32,
    /// Explicitly requested plot width; surplus window space goes to the margins.
    pub req_plot_width: Option<i32>,
    /// Explicitly requested plot height; surplus window space goes to the margins.
    pub req_plot_height: Option<i32>,
    /// Width/height ratio to impose on the plot when neither dimension is requested.
    pub aspect_ratio: Option<f64>,
    /// Outer border width; insets the plot on every side.
    pub border_width: i32,
    /// Border width of the plot rectangle itself; also insets every side.
    pub plot_border_width: i32,
    /// Frame title height, reserved in the top margin.
    pub title_height: i32,
    /// Left margin constraints.
    pub left: MarginSpec,
    /// Right margin constraints.
    pub right: MarginSpec,
    /// Top margin constraints.
    pub top: MarginSpec,
    /// Bottom margin constraints.
    pub bottom: MarginSpec,
    /// Legend width in pixels.
    pub legend_width: i32,
    /// Legend height in pixels.
    pub legend_height: i32,
    /// Which margin (if any) the legend occupies.
    pub legend_site: LegendSite,
    /// Widest horizontal-axis tick label; half of it floors the left/right margins.
    pub x_label_overhang: i32,
    /// Tallest vertical-axis tick label; half of it floors the top/bottom margins.
    pub y_label_overhang: i32,
}

impl Default for FrameSpec {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            req_plot_width: None,
            req_plot_height: None,
            aspect_ratio: None,
            border_width: 0,
            plot_border_width: 1,
            title_height: 0,
            left: MarginSpec::default(),
            right: MarginSpec::default(),
            top: MarginSpec::default(),
            bottom: MarginSpec::default(),
            legend_width: 0,
            legend_height: 0,
            legend_site: LegendSite::Right,
            x_label_overhang: 0,
            y_label_overhang: 0,
        }
    }
}

impl FrameSpec {
    /// Creates a spec for the given window size with empty margins.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the margin constraints, in left/right/top/bottom order.
    pub fn with_margins(mut self, left: MarginSpec, right: MarginSpec, top: MarginSpec, bottom: MarginSpec) -> Self {
        self.left = left;
        self.right = right;
        self.top = top;
        self.bottom = bottom;
        self
    }

    /// Set the legend size and site.
    pub fn with_legend(mut self, width: i32, height: i32, site: LegendSite) -> Self {
        self.legend_width = width;
        self.legend_height = height;
        self.legend_site = site;
        self
    }

    /// Set the frame title height.
    pub fn with_title_height(mut self, height: i32) -> Self {
        self.title_height = height;
        self
    }

    /// Set the width/height ratio to impose on an unconstrained plot.
    pub fn with_aspect_ratio(mut self, ratio: f64) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    /// Request an exact plot size.
    pub fn with_plot_size(mut self, width: i32, height: i32) -> Self {
        self.req_plot_width = Some(width);
        self.req_plot_height = Some(height);
        self
    }

    /// Solves the margins and plot rectangle for this spec.
    pub fn arrange(&self) -> FrameLayout {
        let half_x = self.x_label_overhang.max(0) / 2;
        let half_y = self.y_label_overhang.max(0) / 2;
        let mut left = self.left.base(half_x);
        let mut right = self.right.base(half_x);
        let mut top = self.top.base(half_y);
        let mut bottom = self.bottom.base(half_y);

        top += self.title_height.max(0);
        match self.legend_site {
            LegendSite::Left => left += self.legend_width.max(0),
            LegendSite::Right => right += self.legend_width.max(0),
            LegendSite::Top => top += self.legend_height.max(0),
            LegendSite::Bottom => bottom += self.legend_height.max(0),
            LegendSite::Plot | LegendSite::Xy | LegendSite::Window => {}
        }

        let inset = self.border_width.max(0) + self.plot_border_width.max(0);
        let inner_width = self.width - left - right - 2 * inset;
        let inner_height = self.height - top - bottom - 2 * inset;
        let mut plot_width = self.req_plot_width.unwrap_or(inner_width).max(1);
        let mut plot_height = self.req_plot_height.unwrap_or(inner_height).max(1);

        if self.req_plot_width.is_none()
            && self.req_plot_height.is_none()
            && let Some(ratio) = self.aspect_ratio.filter(|r| r.is_finite() && *r > 0.0)
        {
            let current = f64::from(plot_width) / f64::from(plot_height);
            if current > ratio {
                // Too wide: shrink the width and donate the freed pixels to the right.
                let corrected = round_px(f64::from(plot_height) * ratio).max(1);
                right += plot_width - corrected;
                plot_width = corrected;
            } else if current < ratio {
                // Too tall: shrink the height and donate the freed pixels to the top.
                let corrected = round_px(f64::from(plot_width) / ratio).max(1);
                top += plot_height - corrected;
                plot_height = corrected;
            }
        }

        if self.req_plot_width.is_some() {
            let surplus = self.width - 2 * inset - plot_width - left - right;
            let (to_left, to_right) =
                split_surplus(surplus, self.left.pinned.is_some(), self.right.pinned.is_some());
            left += to_left;
            right += to_right;
        }
        if self.req_plot_height.is_some() {
            let surplus = self.height - 2 * inset - plot_height - top - bottom;
            let (to_top, to_bottom) =
                split_surplus(surplus, self.top.pinned.is_some(), self.bottom.pinned.is_some());
            top += to_top;
            bottom += to_bottom;
        }

        FrameLayout {
            left_margin: left,
            right_margin: right,
            top_margin: top,
            bottom_margin: bottom,
            plot: PlotRect::new(left + inset, top + inset, plot_width, plot_height),
        }
    }
}

/// Splits surplus window space between the two margins of one axis.
///
/// Unpinned margins share it; a pinned margin passes its share to the other side; two
/// pinned margins absorb nothing (the plot simply does not fill the window).
fn split_surplus(surplus: i32, first_pinned: bool, second_pinned: bool) -> (i32, i32) {
    if surplus <= 0 {
        return (0, 0);
    }
    match (first_pinned, second_pinned) {
        (false, false) => (surplus / 2, surplus - surplus / 2),
        (true, false) => (0, surplus),
        (false, true) => (surplus, 0),
        (true, true) => (0, 0),
    }
}

fn round_px(value: f64) -> i32 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "plot dimensions are bounded by the i32 window size"
    )]
    {
        value.round() as i32
    }
}

/// The solved frame: four margins plus the plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameLayout {
    /// Final left margin size.
    pub left_margin: i32,
    /// Final right margin size.
    pub right_margin: i32,
    /// Final top margin size.
    pub top_margin: i32,
    /// Final bottom margin size.
    pub bottom_margin: i32,
    /// The plot rectangle with its derived mapping fields.
    pub plot: PlotRect,
}

/// The plot rectangle and the scale/offset contract renderers map through.
///
/// Edges are window pixels; `h_scale`/`v_scale` are reciprocals of the pixel spans, so
/// mapping a data value costs two multiplies and an add.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    /// Left edge in window pixels.
    pub left: i32,
    /// Top edge in window pixels.
    pub top: i32,
    /// Right edge in window pixels.
    pub right: i32,
    /// Bottom edge in window pixels.
    pub bottom: i32,
    /// Horizontal pixel origin (same as `left`).
    pub h_offset: i32,
    /// Horizontal pixel span.
    pub h_range: i32,
    /// Vertical pixel origin (same as `top`).
    pub v_offset: i32,
    /// Vertical pixel span.
    pub v_range: i32,
    /// `1.0 / h_range`.
    pub h_scale: f64,
    /// `1.0 / v_range`.
    pub v_scale: f64,
}

impl PlotRect {
    fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
            h_offset: left,
            h_range: width,
            v_offset: top,
            v_range: height,
            h_scale: 1.0 / f64::from(width),
            v_scale: 1.0 / f64::from(height),
        }
    }

    /// Maps a data value on `range` to a horizontal window pixel.
    pub fn map_x(&self, range: &AxisRange, value: f64) -> f64 {
        let norm = (value - range.min) * range.scale;
        f64::from(self.h_offset) + norm * f64::from(self.h_range)
    }

    /// Maps a data value on `range` to a vertical window pixel.
    ///
    /// Window y grows downward, so the range minimum lands on the bottom edge.
    pub fn map_y(&self, range: &AxisRange, value: f64) -> f64 {
        let norm = (value - range.min) * range.scale;
        f64::from(self.v_offset) + (1.0 - norm) * f64::from(self.v_range)
    }

    /// Inverse of [`map_x`](Self::map_x): window pixel back to a data value.
    pub fn invert_x(&self, range: &AxisRange, px: f64) -> f64 {
        range.min + (px - f64::from(self.h_offset)) * self.h_scale * range.range
    }

    /// Inverse of [`map_y`](Self::map_y): window pixel back to a data value.
    pub fn invert_y(&self, range: &AxisRange, py: f64) -> f64 {
        range.min + (1.0 - (py - f64::from(self.v_offset)) * self.v_scale) * range.range
    }

    /// The plot rectangle as a [`kurbo::Rect`].
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }
}

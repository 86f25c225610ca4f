// Copyright 2025 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis margin requirements.
//!
//! An axis occupies a band along one window edge: the axis line, then ticks, then the
//! (possibly rotated) tick labels, then the axis title. [`AxisGeometry::measure`] sums
//! those into the thickness the margin solver needs, and reports the largest label
//! extents so perpendicular margins can be floored against outermost labels.

use tickwise_text::{LabelExtent, LabelMeasurer, LabelStyle};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Which window edge an axis runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// A vertical axis at the left edge.
    Left,
    /// A vertical axis at the right edge.
    Right,
    /// A horizontal axis at the top edge.
    Top,
    /// A horizontal axis at the bottom edge.
    Bottom,
}

impl AxisOrient {
    /// Whether the axis runs horizontally (top or bottom edge).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Which side of the axis line ticks and labels sit on.
///
/// Exterior decorations point away from the plot (the usual arrangement); interior ones
/// point into it. The choice flips the signed tick direction but not the measured
/// thickness: the margin band is the same size either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisPlacement {
    /// Ticks and labels on the window side of the axis line.
    #[default]
    Exterior,
    /// Ticks and labels on the plot side of the axis line.
    Interior,
}

/// Returns the axis-aligned bounding box of `extent` rotated by `angle_degrees`.
pub fn rotated_extent(extent: LabelExtent, angle_degrees: f64) -> LabelExtent {
    let theta = angle_degrees.to_radians();
    let sin = theta.sin().abs();
    let cos = theta.cos().abs();
    LabelExtent {
        width: cos * extent.width + sin * extent.height,
        height: sin * extent.width + cos * extent.height,
    }
}

/// Decoration sizes for one axis, the inputs to its margin requirement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisGeometry {
    /// Stroke width of the axis line.
    pub line_width: f64,
    /// Length of a major tick mark.
    pub tick_length: f64,
    /// Whether tick marks are drawn at all.
    pub show_ticks: bool,
    /// Gap between a tick mark and its label.
    pub tick_padding: f64,
    /// Gap between the label band and the axis title.
    pub title_padding: f64,
    /// Tick label rotation angle in degrees.
    pub label_angle: f64,
    /// Which side of the axis line the decorations sit on.
    pub placement: AxisPlacement,
}

impl Default for AxisGeometry {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            tick_length: 5.0,
            show_ticks: true,
            tick_padding: 2.0,
            title_padding: 4.0,
            label_angle: 0.0,
            placement: AxisPlacement::Exterior,
        }
    }
}

impl AxisGeometry {
    /// Creates the default geometry: 1px line, 5px exterior ticks, unrotated labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tick label rotation angle in degrees.
    pub fn with_label_angle(mut self, angle_degrees: f64) -> Self {
        self.label_angle = angle_degrees;
        self
    }

    /// Set the placement of ticks and labels relative to the axis line.
    pub fn with_placement(mut self, placement: AxisPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Hide tick marks (labels still contribute to the thickness).
    pub fn without_ticks(mut self) -> Self {
        self.show_ticks = false;
        self
    }

    /// Signed outward direction for tick marks: `+1` exterior, `-1` interior.
    pub fn tick_direction(&self) -> f64 {
        match self.placement {
            AxisPlacement::Exterior => 1.0,
            AxisPlacement::Interior => -1.0,
        }
    }

    /// Measures the margin band this axis needs.
    ///
    /// `labels` are the formatted major tick labels; `title` is the axis title, if any.
    /// The thickness runs normal to the axis: label extents are rotated, then the extent
    /// normal to the edge (height for horizontal axes, width for vertical ones) is
    /// stacked with the line, ticks, paddings, and title.
    pub fn measure<'a>(
        &self,
        measurer: &dyn LabelMeasurer,
        style: &LabelStyle,
        orient: AxisOrient,
        labels: impl IntoIterator<Item = &'a str>,
        title: Option<&str>,
    ) -> AxisExtents {
        let mut max_label = LabelExtent::default();
        for label in labels {
            let rotated = rotated_extent(measurer.measure(label, style), self.label_angle);
            max_label = max_label.max(rotated);
        }

        let label_depth = if orient.is_horizontal() {
            max_label.height
        } else {
            max_label.width
        };
        let tick_extent = if self.show_ticks {
            self.tick_length.abs()
        } else {
            0.0
        };
        let title_extent = match title {
            Some(title) => self.title_padding + measurer.measure(title, style).height,
            None => 0.0,
        };

        AxisExtents {
            thickness: self.line_width + tick_extent + self.tick_padding + label_depth
                + title_extent,
            label_width: max_label.width,
            label_height: max_label.height,
        }
    }
}

/// Measured margin requirements for one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisExtents {
    /// Size of the margin band, normal to the axis.
    pub thickness: f64,
    /// Widest rotated tick label; floors the perpendicular left/right margins.
    pub label_width: f64,
    /// Tallest rotated tick label; floors the perpendicular top/bottom margins.
    pub label_height: f64,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use tickwise_text::HeuristicLabelMeasurer;

    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1.0e-9, "{a} != {b}");
    }

    #[test]
    fn rotation_swaps_extents_at_ninety_degrees() {
        let r = rotated_extent(LabelExtent::new(30.0, 10.0), 90.0);
        assert_close(r.width, 10.0);
        assert_close(r.height, 30.0);
    }

    #[test]
    fn rotation_by_zero_is_identity() {
        let e = LabelExtent::new(30.0, 10.0);
        assert_eq!(rotated_extent(e, 0.0), e);
    }

    #[test]
    fn forty_five_degrees_grows_both_extents() {
        let r = rotated_extent(LabelExtent::new(30.0, 10.0), 45.0);
        let sqrt_half = core::f64::consts::FRAC_1_SQRT_2;
        assert_close(r.width, sqrt_half * 40.0);
        assert_close(r.height, sqrt_half * 40.0);
    }

    #[test]
    fn bottom_axis_thickness_stacks_line_ticks_labels_and_title() {
        let geometry = AxisGeometry::new();
        let style = LabelStyle::new(10.0);
        let extents = geometry.measure(
            &HeuristicLabelMeasurer,
            &style,
            AxisOrient::Bottom,
            ["0", "50", "100"],
            Some("time"),
        );
        // line 1 + ticks 5 + padding 2 + label height 10 + title padding 4 + title 10.
        assert_close(extents.thickness, 32.0);
        // "100" is the widest label: 3 glyphs at 6px.
        assert_close(extents.label_width, 18.0);
    }

    #[test]
    fn left_axis_thickness_uses_label_width() {
        let geometry = AxisGeometry::new();
        let style = LabelStyle::new(10.0);
        let extents = geometry.measure(
            &HeuristicLabelMeasurer,
            &style,
            AxisOrient::Left,
            ["0", "5000"],
            None,
        );
        // line 1 + ticks 5 + padding 2 + widest label 24.
        assert_close(extents.thickness, 32.0);
    }

    #[test]
    fn interior_placement_flips_direction_not_thickness() {
        let style = LabelStyle::new(10.0);
        let exterior = AxisGeometry::new();
        let interior = AxisGeometry::new().with_placement(AxisPlacement::Interior);
        let labels = ["0", "50"];
        let a = exterior.measure(
            &HeuristicLabelMeasurer,
            &style,
            AxisOrient::Bottom,
            labels,
            None,
        );
        let b = interior.measure(
            &HeuristicLabelMeasurer,
            &style,
            AxisOrient::Bottom,
            labels,
            None,
        );
        assert_eq!(a, b);
        assert_close(exterior.tick_direction(), 1.0);
        assert_close(interior.tick_direction(), -1.0);
    }

    #[test]
    fn rotated_labels_deepen_a_horizontal_axis() {
        let style = LabelStyle::new(10.0);
        let flat = AxisGeometry::new().measure(
            &HeuristicLabelMeasurer,
            &style,
            AxisOrient::Bottom,
            ["10000"],
            None,
        );
        let steep = AxisGeometry::new().with_label_angle(90.0).measure(
            &HeuristicLabelMeasurer,
            &style,
            AxisOrient::Bottom,
            ["10000"],
            None,
        );
        // Upright the label contributes its height (10); rotated, its width (30).
        assert_close(steep.thickness - flat.thickness, 20.0);
    }
}

// Copyright 2025 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end axis layout demo.
//!
//! Resolves a linear bottom axis and a log left axis from sample data, measures the
//! margins they need, arranges a frame with a right-sited legend, and dumps the result
//! as an SVG sketch: plot rectangle, domain lines, major/minor ticks, and labels.

mod svg;

use tickwise_core::{AxisOptions, AxisRegistry, BoundsPolicy, ResolvedAxis};
use tickwise_layout::{AxisGeometry, AxisOrient, FrameLayout, FrameSpec, LegendSite, MarginSpec};
use tickwise_text::{HeuristicLabelMeasurer, LabelMeasurer, LabelStyle};

use svg::{Anchor, SvgDoc};

const WIDTH: i32 = 640;
const HEIGHT: i32 = 420;
const FONT_SIZE: f64 = 11.0;
const TITLE_HEIGHT: i32 = 20;

const LEGEND_ENTRIES: [(&str, &str); 2] = [("measured", "#4c78a8"), ("modeled", "#f58518")];

fn main() {
    let mut registry = AxisRegistry::new();
    let x_handle = registry
        .create(
            "x",
            AxisOptions::new().with_bounds_policy(BoundsPolicy::Loose),
        )
        .expect("fresh registry");
    let y_handle = registry
        .create(
            "y",
            AxisOptions::new()
                .with_log_scale(true)
                .with_bounds_policy(BoundsPolicy::Loose),
        )
        .expect("fresh registry");

    // Data extrema as an extent provider would report them.
    let x_axis = registry
        .options(x_handle)
        .expect("live handle")
        .resolve(0.0, 95.0)
        .expect("no explicit limits");
    let y_axis = registry
        .options(y_handle)
        .expect("live handle")
        .resolve(3.0, 8000.0)
        .expect("no explicit limits");

    let x_labels: Vec<String> = x_axis
        .major_ticks()
        .iter()
        .map(|v| format_tick(*v, major_step(&x_axis)))
        .collect();
    let y_labels: Vec<String> = y_axis
        .major_ticks()
        .iter()
        .map(|t| format!("{:.0}", 10.0_f64.powf(*t)))
        .collect();

    let measurer = HeuristicLabelMeasurer;
    let style = LabelStyle::new(FONT_SIZE);
    let geometry = AxisGeometry::new();
    let bottom_extents = geometry.measure(
        &measurer,
        &style,
        AxisOrient::Bottom,
        x_labels.iter().map(String::as_str),
        Some("input level"),
    );
    let left_extents = geometry.measure(
        &measurer,
        &style,
        AxisOrient::Left,
        y_labels.iter().map(String::as_str),
        Some("response"),
    );

    let (legend_width, legend_height) = legend_size(&measurer, &style);

    let layout = FrameSpec {
        x_label_overhang: px(bottom_extents.label_width),
        y_label_overhang: px(left_extents.label_height),
        ..FrameSpec::new(WIDTH, HEIGHT)
    }
    .with_margins(
        MarginSpec::new(px(left_extents.thickness)),
        MarginSpec::new(8),
        MarginSpec::new(8),
        MarginSpec::new(px(bottom_extents.thickness)),
    )
    .with_legend(legend_width, legend_height, LegendSite::Right)
    .with_title_height(TITLE_HEIGHT)
    .arrange();

    let mut doc = SvgDoc::new(WIDTH, HEIGHT);
    doc.text(
        f64::from(WIDTH) / 2.0,
        14.0,
        FONT_SIZE + 2.0,
        Anchor::Middle,
        "tickwise demo",
    );
    doc.rect(layout.plot.as_rect(), "none", "black");
    draw_bottom_axis(&mut doc, &layout, &x_axis, &x_labels, &geometry);
    draw_left_axis(&mut doc, &layout, &y_axis, &y_labels, &geometry);
    draw_legend(&mut doc, &layout);

    std::fs::write("tickwise_demo.svg", doc.finish()).expect("write tickwise_demo.svg");
    println!("wrote tickwise_demo.svg");
}

fn major_step(axis: &ResolvedAxis) -> f64 {
    match axis.major {
        tickwise_core::TickSweep::Arithmetic { step, .. } => step,
        tickwise_core::TickSweep::LogMantissa { .. } => 1.0,
    }
}

/// Formats a tick value with just enough decimals for its step.
fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "negated floor of a small step's log10 is a small positive integer"
        )]
        {
            (-step.log10().floor()) as usize
        }
    };
    format!("{value:.decimals$}")
}

fn legend_size(measurer: &dyn LabelMeasurer, style: &LabelStyle) -> (i32, i32) {
    let mut widest = 0.0_f64;
    for (name, _) in LEGEND_ENTRIES {
        widest = widest.max(measurer.measure(name, style).width);
    }
    // swatch + gap + label, padded on both sides; one line per entry.
    let width = px(12.0 + 4.0 + widest) + 16;
    let height = px(LEGEND_ENTRIES.len() as f64 * 16.0) + 16;
    (width, height)
}

fn draw_bottom_axis(
    doc: &mut SvgDoc,
    layout: &FrameLayout,
    axis: &ResolvedAxis,
    labels: &[String],
    geometry: &AxisGeometry,
) {
    let plot = &layout.plot;
    let y = f64::from(plot.bottom);
    let tick = geometry.tick_length * geometry.tick_direction();
    doc.line(f64::from(plot.left), y, f64::from(plot.right), y, "black");
    for (value, label) in axis.major_ticks().iter().zip(labels) {
        let x = plot.map_x(&axis.range, *value);
        doc.line(x, y, x, y + tick, "black");
        doc.text(
            x,
            y + tick.max(0.0) + geometry.tick_padding + FONT_SIZE,
            FONT_SIZE,
            Anchor::Middle,
            label,
        );
    }
    for value in axis.minor_ticks() {
        let x = plot.map_x(&axis.range, value);
        doc.line(x, y, x, y + 0.5 * tick, "gray");
    }
    doc.text(
        f64::from(plot.left + plot.right) / 2.0,
        y + f64::from(layout.bottom_margin) - 4.0,
        FONT_SIZE,
        Anchor::Middle,
        "input level",
    );
}

fn draw_left_axis(
    doc: &mut SvgDoc,
    layout: &FrameLayout,
    axis: &ResolvedAxis,
    labels: &[String],
    geometry: &AxisGeometry,
) {
    let plot = &layout.plot;
    let x = f64::from(plot.left);
    let tick = geometry.tick_length * geometry.tick_direction();
    doc.line(x, f64::from(plot.top), x, f64::from(plot.bottom), "black");
    for (value, label) in axis.major_ticks().iter().zip(labels) {
        let y = plot.map_y(&axis.range, *value);
        doc.line(x, y, x - tick, y, "black");
        doc.text(
            x - tick.max(0.0) - geometry.tick_padding,
            y + 0.35 * FONT_SIZE,
            FONT_SIZE,
            Anchor::End,
            label,
        );
    }
    for value in axis.minor_ticks() {
        let y = plot.map_y(&axis.range, value);
        doc.line(x, y, x - 0.5 * tick, y, "gray");
    }
    doc.text(
        12.0,
        f64::from(plot.top + plot.bottom) / 2.0,
        FONT_SIZE,
        Anchor::Middle,
        "response",
    );
}

fn draw_legend(doc: &mut SvgDoc, layout: &FrameLayout) {
    let x0 = f64::from(layout.plot.right) + 10.0;
    let y0 = f64::from(layout.plot.top);
    for (i, (name, color)) in LEGEND_ENTRIES.iter().enumerate() {
        let y = y0 + 8.0 + 16.0 * i as f64;
        doc.rect(
            kurbo::Rect::new(x0, y, x0 + 12.0, y + 12.0),
            color,
            "none",
        );
        doc.text(
            x0 + 16.0,
            y + 10.0,
            FONT_SIZE,
            Anchor::Start,
            name,
        );
    }
}

fn px(value: f64) -> i32 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "measured extents are bounded by the window size"
    )]
    {
        value.ceil() as i32
    }
}

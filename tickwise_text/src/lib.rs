// Copyright 2025 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label measurement hooks for axis layout.
//!
//! Margin and axis layout is driven by the extents of tick labels and titles, which are
//! only known to whatever text system eventually renders them. To keep shaping and glyph
//! layout downstream, layout code depends on this tiny measurement interface instead.
//!
//! This crate is intentionally:
//! - small and dependency-light,
//! - `no_std`-friendly (it uses `alloc` for owned font family names), and
//! - renderer-agnostic (native shaping engines and web canvas measurement can
//!   both implement the same trait).

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A minimal label measurement interface used by axis and margin layout.
///
/// Implementations can be:
/// - heuristic (fast, but inaccurate),
/// - backed by a shaping engine, or
/// - backed by web platform text measurement (e.g. HTML canvas).
pub trait LabelMeasurer {
    /// Measure a single line of label text.
    ///
    /// `text` is treated as a single line; callers should split on `\n` if they
    /// want multi-line labels.
    fn measure(&self, text: &str, style: &LabelStyle) -> LabelExtent;
}

/// Label styling inputs relevant to measurement.
///
/// Just enough to make axis layout consistent; richer typography belongs in a
/// higher-level text system.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Font size in the chart's coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
}

impl LabelStyle {
    /// Creates a default `LabelStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
        }
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// The measured bounding box of one label, before any rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LabelExtent {
    /// Horizontal extent of the laid-out text.
    pub width: f64,
    /// Vertical extent of the laid-out text (one line height).
    pub height: f64,
}

impl LabelExtent {
    /// Creates an extent from a width/height pair.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the extent that covers both `self` and `other`.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

/// A tiny heuristic label measurer suitable for demos and early layout.
///
/// It assumes an average glyph width of ~0.6em and a line height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicLabelMeasurer;

impl LabelMeasurer for HeuristicLabelMeasurer {
    fn measure(&self, text: &str, style: &LabelStyle) -> LabelExtent {
        #[allow(
            clippy::cast_precision_loss,
            reason = "label lengths are far below 2^52 glyphs"
        )]
        let glyphs = text.chars().count() as f64;
        LabelExtent {
            width: 0.6 * style.font_size * glyphs,
            height: style.font_size,
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Solid and gradient color values.

use kurbo::{Point, Rect};
use peniko::{Brush, ColorStop, Extend, Gradient, GradientKind, LinearGradientPosition};

use crate::Argb;
use crate::parse::parse_css_color;

/// Direction of a two-stop linear gradient, relative to the painted rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GradientMode {
    /// Left edge to right edge.
    Horizontal,
    /// Top edge to bottom edge.
    Vertical,
    /// Top-left corner to bottom-right corner.
    ForwardDiagonal,
    /// Top-right corner to bottom-left corner.
    BackwardDiagonal,
}

impl GradientMode {
    /// Returns the start and end points of this gradient over `rect`.
    #[must_use]
    pub fn endpoints(self, rect: Rect) -> (Point, Point) {
        match self {
            Self::Horizontal => (Point::new(rect.x0, rect.y0), Point::new(rect.x1, rect.y0)),
            Self::Vertical => (Point::new(rect.x0, rect.y0), Point::new(rect.x0, rect.y1)),
            Self::ForwardDiagonal => (Point::new(rect.x0, rect.y0), Point::new(rect.x1, rect.y1)),
            Self::BackwardDiagonal => (Point::new(rect.x1, rect.y0), Point::new(rect.x0, rect.y1)),
        }
    }
}

/// A color as used by style properties: either solid or a linear gradient.
///
/// Equality is structural. A solid color never equals a gradient, even a
/// gradient whose two stops are that same color.
///
/// # Example
///
/// ```rust
/// use understory_color::{Argb, ColorValue, GradientMode};
///
/// let solid = ColorValue::solid(Argb::WHITE);
/// let flat = ColorValue::linear_gradient(GradientMode::Vertical, Argb::WHITE, Argb::WHITE);
///
/// assert_eq!(solid, ColorValue::solid_css("#fff"));
/// assert_ne!(solid, flat);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorValue {
    /// A single color.
    Solid(Argb),
    /// A two-stop linear gradient.
    LinearGradient {
        /// Direction of the gradient.
        mode: GradientMode,
        /// Color at the start point.
        start: Argb,
        /// Color at the end point.
        end: Argb,
    },
}

impl ColorValue {
    /// Creates a solid color.
    #[must_use]
    #[inline]
    pub const fn solid(color: Argb) -> Self {
        Self::Solid(color)
    }

    /// Creates a solid color from CSS-like text.
    ///
    /// Unrecognized text gives transparent black.
    #[must_use]
    pub fn solid_css(text: &str) -> Self {
        Self::Solid(parse_css_color(text))
    }

    /// Creates a linear gradient.
    #[must_use]
    #[inline]
    pub const fn linear_gradient(mode: GradientMode, start: Argb, end: Argb) -> Self {
        Self::LinearGradient { mode, start, end }
    }

    /// Creates a linear gradient from CSS-like stop colors.
    #[must_use]
    pub fn linear_gradient_css(mode: GradientMode, start: &str, end: &str) -> Self {
        Self::linear_gradient(mode, parse_css_color(start), parse_css_color(end))
    }

    /// Returns the color if this is a solid color.
    #[must_use]
    pub fn as_solid(&self) -> Option<Argb> {
        match *self {
            Self::Solid(color) => Some(color),
            Self::LinearGradient { .. } => None,
        }
    }

    /// Builds a brush that paints this color over `rect`.
    ///
    /// Gradients are placed according to their [`GradientMode`] and padded
    /// outside the rectangle.
    #[must_use]
    pub fn to_brush(&self, rect: Rect) -> Brush {
        match *self {
            Self::Solid(color) => Brush::Solid(color.to_color()),
            Self::LinearGradient { mode, start, end } => {
                let (p0, p1) = mode.endpoints(rect);
                let stops = [
                    ColorStop::from((0.0, start.to_color())),
                    ColorStop::from((1.0, end.to_color())),
                ];
                Brush::Gradient(Gradient {
                    kind: GradientKind::Linear(LinearGradientPosition::new(p0, p1)),
                    extend: Extend::Pad,
                    stops: stops.as_slice().into(),
                    ..Gradient::default()
                })
            }
        }
    }
}

impl From<Argb> for ColorValue {
    fn from(color: Argb) -> Self {
        Self::Solid(color)
    }
}

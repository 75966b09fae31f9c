// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Color: color values for style properties.
//!
//! This crate provides the color model used by `understory_property` and
//! `understory_style`:
//!
//! - [`Argb`]: a packed `0xAARRGGBB` color.
//! - [`ColorValue`]: a solid color or a two-stop linear gradient, compared
//!   structurally.
//! - [`parse_css_color`]: CSS-like color text (`#rgb`, `#rrggbb`, `rgb()`,
//!   `rgba()`, percentages, and a few names) that degrades to transparent
//!   black instead of failing.
//!
//! Colors convert to [`peniko`] brushes only when painting, via
//! [`ColorValue::to_brush`].
//!
//! ```rust
//! use kurbo::Rect;
//! use peniko::Brush;
//! use understory_color::{ColorValue, GradientMode};
//!
//! let background = ColorValue::linear_gradient_css(GradientMode::Vertical, "#f5f6f6", "#e4e4e3");
//! let brush = background.to_brush(Rect::new(0.0, 0.0, 80.0, 24.0));
//! assert!(matches!(brush, Brush::Gradient(_)));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std`. Enable the `libm` feature instead of `std` when
//! building without the standard library.

#![no_std]

mod argb;
mod parse;
mod value;

pub use argb::Argb;
pub use parse::{named_color, parse_css_color};
pub use value::{ColorValue, GradientMode};

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property values.
//!
//! This module provides [`PropertyValue`], the closed set of values a style
//! can carry, along with its payload types [`FontStyle`] and [`Padding`].

use alloc::boxed::Box;

use understory_color::{Argb, ColorValue};

use crate::kind::{ColorTarget, Edge, PropertyKind};

bitflags::bitflags! {
    /// Font style word: weight plus decorations.
    ///
    /// Bit values match the classic GDI+ `FontStyle` enumeration, so a font
    /// backend can pass them through unchanged.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct FontStyle: u8 {
        /// Bold weight.
        const BOLD = 1;
        /// Italic slant.
        const ITALIC = 2;
        /// Underline decoration.
        const UNDERLINE = 4;
        /// Strike-through decoration.
        const STRIKEOUT = 8;
        /// Bold and italic.
        const BOLD_ITALIC = Self::BOLD.bits() | Self::ITALIC.bits();
    }
}

impl FontStyle {
    /// Regular weight, no decorations.
    pub const REGULAR: Self = Self::empty();
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::REGULAR
    }
}

/// A padding box, in CSS order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Padding {
    /// Top padding.
    pub top: i32,
    /// Right padding.
    pub right: i32,
    /// Bottom padding.
    pub bottom: i32,
    /// Left padding.
    pub left: i32,
}

impl Padding {
    /// Creates a padding box from its four sides.
    #[must_use]
    #[inline]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates a padding box with the same value on every side.
    #[must_use]
    #[inline]
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the padding on one edge.
    #[must_use]
    pub const fn edge(&self, edge: Edge) -> i32 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }
}

/// A single style property value.
///
/// Equality is structural and kind-sensitive: two values of different kinds
/// are never equal, even with identical payloads.
///
/// # Example
///
/// ```rust
/// use understory_property::{Edge, PropertyKind, PropertyValue};
///
/// let top = PropertyValue::BorderWidth(Edge::Top, 1.0);
/// let left = PropertyValue::BorderWidth(Edge::Left, 1.0);
///
/// assert_eq!(top.kind(), PropertyKind::BorderTopWidth);
/// assert_ne!(top, left);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// Font family name.
    FontName(Box<str>),
    /// Font size in points.
    FontSize(f32),
    /// Font style word.
    FontWeight(FontStyle),
    /// Padding box.
    Padding(Padding),
    /// Border width on one edge.
    BorderWidth(Edge, f32),
    /// A foreground, background or border color.
    Color(ColorTarget, ColorValue),
}

impl PropertyValue {
    /// Creates a solid color value.
    #[must_use]
    pub const fn solid(target: ColorTarget, color: Argb) -> Self {
        Self::Color(target, ColorValue::Solid(color))
    }

    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        match self {
            Self::FontName(_) => PropertyKind::FontName,
            Self::FontSize(_) => PropertyKind::FontSize,
            Self::FontWeight(_) => PropertyKind::FontWeight,
            Self::Padding(_) => PropertyKind::Padding,
            Self::BorderWidth(edge, _) => edge.width_kind(),
            Self::Color(target, _) => target.kind(),
        }
    }

    /// Returns the font name, if this is a font name value.
    #[must_use]
    pub fn as_font_name(&self) -> Option<&str> {
        match self {
            Self::FontName(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the font size, if this is a font size value.
    #[must_use]
    pub fn as_font_size(&self) -> Option<f32> {
        match *self {
            Self::FontSize(size) => Some(size),
            _ => None,
        }
    }

    /// Returns the font style, if this is a font weight value.
    #[must_use]
    pub fn as_font_weight(&self) -> Option<FontStyle> {
        match *self {
            Self::FontWeight(style) => Some(style),
            _ => None,
        }
    }

    /// Returns the padding box, if this is a padding value.
    #[must_use]
    pub fn as_padding(&self) -> Option<Padding> {
        match *self {
            Self::Padding(padding) => Some(padding),
            _ => None,
        }
    }

    /// Returns the width, if this is a border width value.
    #[must_use]
    pub fn as_width(&self) -> Option<f32> {
        match *self {
            Self::BorderWidth(_, width) => Some(width),
            _ => None,
        }
    }

    /// Returns the color, if this is a color value.
    #[must_use]
    pub fn as_color(&self) -> Option<&ColorValue> {
        match self {
            Self::Color(_, color) => Some(color),
            _ => None,
        }
    }
}

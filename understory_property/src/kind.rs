// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property kinds and the narrowed tags used by border and color properties.

use core::fmt;

/// The kind (tag) of a style property.
///
/// A style holds at most one property of each kind, and cascade resolution
/// looks properties up by kind.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum PropertyKind {
    /// Font family name.
    FontName,
    /// Font size in points.
    FontSize,
    /// Font style word (bold, italic, ...).
    FontWeight,
    /// Padding box.
    Padding,
    /// Top border width.
    BorderTopWidth,
    /// Right border width.
    BorderRightWidth,
    /// Bottom border width.
    BorderBottomWidth,
    /// Left border width.
    BorderLeftWidth,
    /// Foreground (text) color.
    Color,
    /// Background color.
    BgColor,
    /// Top border color.
    BorderTopColor,
    /// Right border color.
    BorderRightColor,
    /// Bottom border color.
    BorderBottomColor,
    /// Left border color.
    BorderLeftColor,
}

impl PropertyKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::FontName,
        Self::FontSize,
        Self::FontWeight,
        Self::Padding,
        Self::BorderTopWidth,
        Self::BorderRightWidth,
        Self::BorderBottomWidth,
        Self::BorderLeftWidth,
        Self::Color,
        Self::BgColor,
        Self::BorderTopColor,
        Self::BorderRightColor,
        Self::BorderBottomColor,
        Self::BorderLeftColor,
    ];

    /// Returns the CSS-like name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FontName => "font-family",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
            Self::Padding => "padding",
            Self::BorderTopWidth => "border-top-width",
            Self::BorderRightWidth => "border-right-width",
            Self::BorderBottomWidth => "border-bottom-width",
            Self::BorderLeftWidth => "border-left-width",
            Self::Color => "color",
            Self::BgColor => "background-color",
            Self::BorderTopColor => "border-top-color",
            Self::BorderRightColor => "border-right-color",
            Self::BorderBottomColor => "border-bottom-color",
            Self::BorderLeftColor => "border-left-color",
        }
    }

    /// Returns `true` for the four border width kinds.
    #[must_use]
    #[inline]
    pub const fn is_width(self) -> bool {
        self.edge().is_some()
    }

    /// Returns `true` for the six color kinds.
    #[must_use]
    #[inline]
    pub const fn is_color(self) -> bool {
        self.color_target().is_some()
    }

    /// Returns the border edge if this is a border width kind.
    #[must_use]
    pub const fn edge(self) -> Option<Edge> {
        match self {
            Self::BorderTopWidth => Some(Edge::Top),
            Self::BorderRightWidth => Some(Edge::Right),
            Self::BorderBottomWidth => Some(Edge::Bottom),
            Self::BorderLeftWidth => Some(Edge::Left),
            _ => None,
        }
    }

    /// Returns the color target if this is a color kind.
    #[must_use]
    pub const fn color_target(self) -> Option<ColorTarget> {
        match self {
            Self::Color => Some(ColorTarget::Foreground),
            Self::BgColor => Some(ColorTarget::Background),
            Self::BorderTopColor => Some(ColorTarget::BorderTop),
            Self::BorderRightColor => Some(ColorTarget::BorderRight),
            Self::BorderBottomColor => Some(ColorTarget::BorderBottom),
            Self::BorderLeftColor => Some(ColorTarget::BorderLeft),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One side of a box.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Edge {
    /// Top side.
    Top,
    /// Right side.
    Right,
    /// Bottom side.
    Bottom,
    /// Left side.
    Left,
}

impl Edge {
    /// All edges in CSS order (top, right, bottom, left).
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The border width kind for this edge.
    #[must_use]
    pub const fn width_kind(self) -> PropertyKind {
        match self {
            Self::Top => PropertyKind::BorderTopWidth,
            Self::Right => PropertyKind::BorderRightWidth,
            Self::Bottom => PropertyKind::BorderBottomWidth,
            Self::Left => PropertyKind::BorderLeftWidth,
        }
    }

    /// The border color target for this edge.
    #[must_use]
    pub const fn color_target(self) -> ColorTarget {
        match self {
            Self::Top => ColorTarget::BorderTop,
            Self::Right => ColorTarget::BorderRight,
            Self::Bottom => ColorTarget::BorderBottom,
            Self::Left => ColorTarget::BorderLeft,
        }
    }
}

/// What a color property paints.
///
/// Color interning takes a `ColorTarget` rather than a [`PropertyKind`], so a
/// color can only ever be stored under one of the six color kinds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ColorTarget {
    /// Foreground (text) color.
    Foreground,
    /// Background color.
    Background,
    /// Top border color.
    BorderTop,
    /// Right border color.
    BorderRight,
    /// Bottom border color.
    BorderBottom,
    /// Left border color.
    BorderLeft,
}

impl ColorTarget {
    /// The property kind for this target.
    #[must_use]
    pub const fn kind(self) -> PropertyKind {
        match self {
            Self::Foreground => PropertyKind::Color,
            Self::Background => PropertyKind::BgColor,
            Self::BorderTop => PropertyKind::BorderTopColor,
            Self::BorderRight => PropertyKind::BorderRightColor,
            Self::BorderBottom => PropertyKind::BorderBottomColor,
            Self::BorderLeft => PropertyKind::BorderLeftColor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_and_color_kinds_are_disjoint() {
        let widths = PropertyKind::ALL.iter().filter(|k| k.is_width()).count();
        let colors = PropertyKind::ALL.iter().filter(|k| k.is_color()).count();
        assert_eq!(widths, 4);
        assert_eq!(colors, 6);
        assert!(
            PropertyKind::ALL
                .iter()
                .all(|k| !(k.is_width() && k.is_color())),
            "no kind is both a width and a color"
        );
    }

    #[test]
    fn edge_round_trips_through_kinds() {
        for edge in Edge::ALL {
            assert_eq!(edge.width_kind().edge(), Some(edge));
            assert_eq!(edge.color_target().kind().color_target(), Some(edge.color_target()));
        }
    }

    #[test]
    fn font_kinds_are_neither_width_nor_color() {
        for kind in [
            PropertyKind::FontName,
            PropertyKind::FontSize,
            PropertyKind::FontWeight,
            PropertyKind::Padding,
        ] {
            assert!(!kind.is_width());
            assert!(!kind.is_color());
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packed 32-bit colors.

use core::fmt;

use peniko::Color;

/// A packed `0xAARRGGBB` color.
///
/// This is the storage format for every color that flows through the style
/// system. It is `Copy`, compares bitwise, and converts to a [`peniko::Color`]
/// only at the point where a renderer needs one.
///
/// # Example
///
/// ```rust
/// use understory_color::Argb;
///
/// let gray = Argb::rgb(0x99, 0x99, 0x99);
/// assert_eq!(gray.to_u32(), 0xff99_9999);
/// assert_eq!(gray.alpha(), 0xff);
/// assert!(Argb::TRANSPARENT.is_transparent());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Argb(u32);

impl Argb {
    /// Fully transparent black, the result of parsing unrecognized color text.
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);

    /// Creates a color from alpha, red, green and blue channels.
    #[must_use]
    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(u32::from_be_bytes([a, r, g, b]))
    }

    /// Creates an opaque color.
    #[must_use]
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(0xff, r, g, b)
    }

    /// Wraps an already packed `0xAARRGGBB` value.
    #[must_use]
    #[inline]
    pub const fn from_u32(packed: u32) -> Self {
        Self(packed)
    }

    /// Returns the packed `0xAARRGGBB` value.
    #[must_use]
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Alpha channel.
    #[must_use]
    #[inline]
    pub const fn alpha(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// Red channel.
    #[must_use]
    #[inline]
    pub const fn red(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// Green channel.
    #[must_use]
    #[inline]
    pub const fn green(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    /// Blue channel.
    #[must_use]
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0.to_be_bytes()[3]
    }

    /// Returns `true` if the alpha channel is zero.
    #[must_use]
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.alpha() == 0
    }

    /// Converts to an sRGB [`peniko::Color`] for painting.
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::from_rgba8(self.red(), self.green(), self.blue(), self.alpha())
    }
}

impl From<u32> for Argb {
    fn from(packed: u32) -> Self {
        Self(packed)
    }
}

impl From<Argb> for Color {
    fn from(argb: Argb) -> Self {
        argb.to_color()
    }
}

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb(#{:08x})", self.0)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

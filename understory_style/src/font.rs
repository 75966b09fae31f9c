// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font object cache keyed on interned property handles.
//!
//! [`FontCache`] resolves the font name, size and style of a style pair
//! through the cascade and maps the resulting handle triple to one font
//! object. Because the three handles are interned, two style pairs that
//! resolve to the same font always produce the same triple, so the cache can
//! compare handles instead of values.
//!
//! Font objects are built by a [`FontBackend`] and owned by the cache until
//! it is dropped.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use understory_property::{FontStyle, PropertyHandle, PropertyKind, PropertyTable, PropertyValue};

use crate::resolve::{PropertyRequest, find_properties_with_fallback};
use crate::style::Style;

/// The resolved values a font object is built from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FontDescriptor<'a> {
    /// Font family name.
    pub name: &'a str,
    /// Size in points.
    pub size: f32,
    /// Weight and decorations.
    pub style: FontStyle,
}

/// Builds font objects for a [`FontCache`].
///
/// Implement this for the text stack in use (a `DirectWrite` font, a
/// `parley` font context entry, ...). [`FontFaces`] is a backend that only
/// records the descriptor.
pub trait FontBackend {
    /// The font object type.
    type Font;

    /// Builds a font object for `descriptor`.
    ///
    /// Called at most once per distinct (name, size, style) handle triple.
    fn create_font(&mut self, descriptor: &FontDescriptor<'_>) -> Self::Font;
}

/// An owned description of a font.
#[derive(Clone, Debug, PartialEq)]
pub struct FontFace {
    /// Font family name.
    pub family: Box<str>,
    /// Size in points.
    pub size: f32,
    /// Weight and decorations.
    pub style: FontStyle,
}

impl FontFace {
    /// Sizes compare by bit pattern so a NaN size still matches itself.
    fn matches(&self, descriptor: &FontDescriptor<'_>) -> bool {
        *self.family == *descriptor.name
            && self.size.to_bits() == descriptor.size.to_bits()
            && self.style == descriptor.style
    }
}

impl From<&FontDescriptor<'_>> for FontFace {
    fn from(descriptor: &FontDescriptor<'_>) -> Self {
        Self {
            family: Box::from(descriptor.name),
            size: descriptor.size,
            style: descriptor.style,
        }
    }
}

/// A [`FontBackend`] whose fonts are plain [`FontFace`] descriptions.
#[derive(Copy, Clone, Debug, Default)]
pub struct FontFaces;

impl FontBackend for FontFaces {
    type Font = FontFace;

    fn create_font(&mut self, descriptor: &FontDescriptor<'_>) -> FontFace {
        FontFace::from(descriptor)
    }
}

/// A handle to a font object owned by a [`FontCache`].
///
/// Two lookups that resolve to the same font return equal handles.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct FontHandle(u32);

impl FontHandle {
    /// Returns the position of the font in its cache.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Error returned when a style pair does not define one of the font
/// properties anywhere in either chain.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct MissingFontProperty {
    /// The kind that could not be resolved.
    pub kind: PropertyKind,
}

impl fmt::Debug for MissingFontProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MissingFontProperty {{ kind: {:?} }}", self.kind)
    }
}

impl fmt::Display for MissingFontProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no style in the cascade defines {}", self.kind)
    }
}

impl core::error::Error for MissingFontProperty {}

/// The interned (name, size, weight) triple a font is keyed on.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
struct FontKey {
    name: PropertyHandle,
    size: PropertyHandle,
    weight: PropertyHandle,
}

/// Caches font objects by their interned (name, size, weight) handles.
///
/// A cache belongs to the [`PropertyTable`] its styles were interned in.
/// Each entry remembers the values it was built from, and a hit is checked
/// against the table passed to the lookup, so reusing a cache with another
/// table panics instead of returning a font built for different values.
///
/// # Example
///
/// ```rust
/// use understory_property::{FontStyle, PropertyTable};
/// use understory_style::{FontCache, FontFaces, StyleBuilder};
///
/// let mut table = PropertyTable::new();
/// let defaults = StyleBuilder::new(&mut table)
///     .font_name("Times New Roman")
///     .font_size(14.0)
///     .font_weight(FontStyle::BOLD)
///     .build();
/// let small = StyleBuilder::new(&mut table).font_size(8.0).build();
///
/// let mut fonts = FontCache::new(FontFaces);
/// let a = fonts.font_for(&table, Some(&small), &defaults);
/// let b = fonts.font_for(&table, Some(&small), &defaults);
/// let c = fonts.font_for(&table, None, &defaults);
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// assert_eq!(fonts.len(), 2);
/// assert_eq!(&*fonts.font(a).family, "Times New Roman");
/// assert_eq!(fonts.font(a).size, 8.0);
/// ```
pub struct FontCache<B: FontBackend> {
    backend: B,
    entries: Vec<CacheEntry<B::Font>>,
}

struct CacheEntry<F> {
    key: FontKey,
    face: FontFace,
    font: F,
}

impl<B: FontBackend + fmt::Debug> fmt::Debug for FontCache<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontCache")
            .field("backend", &self.backend)
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<B: FontBackend + Default> Default for FontCache<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<B: FontBackend> FontCache<B> {
    /// Creates an empty cache that builds fonts with `backend`.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            entries: Vec::new(),
        }
    }

    /// Returns the number of cached fonts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no font has been built yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the font object behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not produced by this cache.
    #[must_use]
    pub fn font(&self, handle: FontHandle) -> &B::Font {
        &self.entries[handle.0 as usize].font
    }

    /// Returns the font for `first` falling back to `second`, building it on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFontProperty`] if the font name, size or weight is
    /// not defined anywhere in either chain.
    ///
    /// # Panics
    ///
    /// Panics if the styles hold handles that were not interned in `table`,
    /// or if the cached font for the resolved handles was built from
    /// different values than `table` holds for them.
    pub fn try_font_for(
        &mut self,
        table: &PropertyTable,
        first: Option<&Style>,
        second: &Style,
    ) -> Result<FontHandle, MissingFontProperty> {
        let mut wanted = [
            PropertyRequest::new(PropertyKind::FontName),
            PropertyRequest::new(PropertyKind::FontSize),
            PropertyRequest::new(PropertyKind::FontWeight),
        ];
        find_properties_with_fallback(first, second, &mut wanted);
        let [name, size, weight] = wanted.map(|request| {
            request.found().ok_or(MissingFontProperty {
                kind: request.kind(),
            })
        });
        let key = FontKey {
            name: name?,
            size: size?,
            weight: weight?,
        };

        let descriptor = describe(table, key);
        if let Some(index) = self.entries.iter().position(|entry| entry.key == key) {
            assert!(
                self.entries[index].face.matches(&descriptor),
                "font cache was filled from a different PropertyTable: {key:?} now resolves to {descriptor:?}"
            );
            return Ok(Self::handle_at(index));
        }

        log::debug!(
            "building font {:?} {}pt {:?}",
            descriptor.name,
            descriptor.size,
            descriptor.style
        );
        let font = self.backend.create_font(&descriptor);
        let handle = Self::handle_at(self.entries.len());
        self.entries.push(CacheEntry {
            key,
            face: FontFace::from(&descriptor),
            font,
        });
        Ok(handle)
    }

    /// Returns the font for `first` falling back to `second`, building it on
    /// first use.
    ///
    /// The returned handle stays valid for the lifetime of the cache.
    ///
    /// # Panics
    ///
    /// Panics if the font name, size or weight is not defined anywhere in
    /// either chain. The built-in default styles always define all three.
    /// Also panics in the cases listed on [`try_font_for`](Self::try_font_for).
    pub fn font_for(
        &mut self,
        table: &PropertyTable,
        first: Option<&Style>,
        second: &Style,
    ) -> FontHandle {
        match self.try_font_for(table, first, second) {
            Ok(handle) => handle,
            Err(err) => panic!("{err}"),
        }
    }

    /// Iterates over every cached font in build order.
    pub fn iter(&self) -> impl Iterator<Item = (FontHandle, &B::Font)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (Self::handle_at(index), &entry.font))
    }

    fn handle_at(index: usize) -> FontHandle {
        FontHandle(u32::try_from(index).expect("too many cached fonts for FontHandle (u32)"))
    }
}

fn describe(table: &PropertyTable, key: FontKey) -> FontDescriptor<'_> {
    match (table.get(key.name), table.get(key.size), table.get(key.weight)) {
        (
            PropertyValue::FontName(name),
            &PropertyValue::FontSize(size),
            &PropertyValue::FontWeight(style),
        ) => FontDescriptor { name, size, style },
        _ => panic!("font properties {key:?} were not interned in this table"),
    }
}

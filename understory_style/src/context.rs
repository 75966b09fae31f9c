// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style context: one owner for the property table, default styles and
//! font cache.

use core::fmt;

use understory_property::{PropertyHandle, PropertyKind, PropertyTable, PropertyValue};

use crate::defaults::DefaultStyles;
use crate::font::{FontBackend, FontCache, FontFaces, FontHandle, MissingFontProperty};
use crate::resolve::find_property;
use crate::style::{Style, StyleBuilder};

/// Owns everything the styling subsystem needs for its lifetime.
///
/// Creating a context interns the built-in [`DefaultStyles`]. Dropping it
/// releases the table, the default styles and every cached font at once.
/// Styles built by the caller hold only handles into the table, so they must
/// not outlive the context they were built against.
///
/// # Example
///
/// ```rust
/// use understory_property::{ColorTarget, PropertyKind};
/// use understory_style::StyleContext;
///
/// let mut cx = StyleContext::new();
/// let style = cx
///     .builder()
///     .color_css(ColorTarget::Foreground, "#333")
///     .font_size(10.0)
///     .build();
///
/// let font = cx.font_for(Some(&style), None);
/// assert_eq!(cx.font(font).size, 10.0);
/// assert_eq!(&*cx.font(font).family, "Times New Roman");
///
/// let default_font = cx.font_for(None, None);
/// assert_ne!(font, default_font);
/// assert!(cx.property_value(Some(&style), None, PropertyKind::Padding).is_some());
/// ```
pub struct StyleContext<B: FontBackend = FontFaces> {
    table: PropertyTable,
    defaults: DefaultStyles,
    fonts: FontCache<B>,
}

impl StyleContext<FontFaces> {
    /// Creates a context with the stock defaults and [`FontFaces`] fonts.
    #[must_use]
    pub fn new() -> Self {
        Self::with_backend(FontFaces)
    }
}

impl Default for StyleContext<FontFaces> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: FontBackend> StyleContext<B> {
    /// Creates a context with the stock defaults whose fonts are built by
    /// `backend`.
    #[must_use]
    pub fn with_backend(backend: B) -> Self {
        Self::with_default_styles(backend, DefaultStyles::new)
    }

    /// Creates a context whose defaults are produced by `build`.
    ///
    /// `build` runs against the fresh table, so the styles it returns may use
    /// any values it interns there.
    ///
    /// ```rust
    /// use std::rc::Rc;
    /// use understory_property::FontStyle;
    /// use understory_style::{DefaultStyles, FontFaces, StyleBuilder, StyleContext};
    ///
    /// let cx = StyleContext::with_default_styles(FontFaces, |table| {
    ///     let base = Rc::new(
    ///         StyleBuilder::new(table)
    ///             .font_name("Georgia")
    ///             .font_size(12.0)
    ///             .font_weight(FontStyle::REGULAR)
    ///             .build(),
    ///     );
    ///     let button = Rc::new(StyleBuilder::new(table).inherits_from(base.clone()).build());
    ///     let hover = Rc::new(StyleBuilder::new(table).inherits_from(button.clone()).build());
    ///     DefaultStyles::from_styles(base, button, hover)
    /// });
    /// assert_eq!(cx.table().len(), 3);
    /// ```
    #[must_use]
    pub fn with_default_styles(
        backend: B,
        build: impl FnOnce(&mut PropertyTable) -> DefaultStyles,
    ) -> Self {
        let mut table = PropertyTable::new();
        let defaults = build(&mut table);
        log::debug!(
            "style context created with {} interned properties",
            table.len()
        );
        Self {
            table,
            defaults,
            fonts: FontCache::new(backend),
        }
    }

    /// The property table.
    #[must_use]
    pub fn table(&self) -> &PropertyTable {
        &self.table
    }

    /// The property table, for interning new values.
    pub fn table_mut(&mut self) -> &mut PropertyTable {
        &mut self.table
    }

    /// The default styles.
    #[must_use]
    pub fn defaults(&self) -> &DefaultStyles {
        &self.defaults
    }

    /// The font cache.
    #[must_use]
    pub fn fonts(&self) -> &FontCache<B> {
        &self.fonts
    }

    /// Starts a new style whose values are interned in this context.
    pub fn builder(&mut self) -> StyleBuilder<'_> {
        StyleBuilder::new(&mut self.table)
    }

    /// Returns the font for `first` falling back to `second`.
    ///
    /// When `second` is `None` the base default style is used in its place,
    /// so the lookup always has a complete fallback.
    ///
    /// # Panics
    ///
    /// Panics if a caller-supplied `second` chain leaves the font name, size
    /// or weight undefined.
    pub fn font_for(&mut self, first: Option<&Style>, second: Option<&Style>) -> FontHandle {
        let second = second.unwrap_or(self.defaults.base());
        self.fonts.font_for(&self.table, first, second)
    }

    /// Fallible form of [`font_for`](Self::font_for).
    ///
    /// # Errors
    ///
    /// Returns [`MissingFontProperty`] if the font name, size or weight is
    /// not defined in either chain.
    pub fn try_font_for(
        &mut self,
        first: Option<&Style>,
        second: Option<&Style>,
    ) -> Result<FontHandle, MissingFontProperty> {
        let second = second.unwrap_or(self.defaults.base());
        self.fonts.try_font_for(&self.table, first, second)
    }

    /// Returns the font for a button drawn with `style`, falling back to the
    /// default button style.
    pub fn button_font(&mut self, style: Option<&Style>) -> FontHandle {
        self.fonts.font_for(&self.table, style, self.defaults.button())
    }

    /// The font object behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `handle` came from a different context.
    #[must_use]
    pub fn font(&self, handle: FontHandle) -> &B::Font {
        self.fonts.font(handle)
    }

    /// Resolves `kind` for `first`, falling back to `second` or, when that is
    /// `None`, to the base default style.
    #[must_use]
    pub fn property(
        &self,
        first: Option<&Style>,
        second: Option<&Style>,
        kind: PropertyKind,
    ) -> Option<PropertyHandle> {
        find_property(first, second.unwrap_or(self.defaults.base()), kind)
    }

    /// Like [`property`](Self::property), but returns the interned value.
    #[must_use]
    pub fn property_value(
        &self,
        first: Option<&Style>,
        second: Option<&Style>,
        kind: PropertyKind,
    ) -> Option<&PropertyValue> {
        self.property(first, second, kind)
            .map(|handle| self.table.get(handle))
    }
}

impl<B: FontBackend> Drop for StyleContext<B> {
    fn drop(&mut self) {
        log::debug!(
            "style context dropped: {} properties, {} fonts",
            self.table.len(),
            self.fonts.len()
        );
    }
}

impl<B: FontBackend + fmt::Debug> fmt::Debug for StyleContext<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleContext")
            .field("table", &self.table)
            .field("defaults", &self.defaults)
            .field("fonts", &self.fonts)
            .finish()
    }
}

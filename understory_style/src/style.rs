// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styles: kind-keyed property sets with single inheritance.
//!
//! This module provides [`Style`] and [`StyleBuilder`].

use alloc::rc::Rc;

use smallvec::SmallVec;
use understory_color::{Argb, GradientMode};
use understory_property::{ColorTarget, Edge, FontStyle, PropertyHandle, PropertyKind, PropertyTable};

/// Default inline capacity for a style's properties.
///
/// The built-in styles carry at most 14 properties and widget styles usually
/// far fewer, so this avoids heap allocation in the common case.
const INLINE_CAPACITY: usize = 8;

/// An ordered set of interned properties, at most one per [`PropertyKind`],
/// plus an optional parent style.
///
/// A style only stores [`PropertyHandle`]s, never raw values, so setting a
/// property never touches the [`PropertyTable`].
///
/// The parent is a shared [`Rc`] to a style that was fully built before this
/// one. A parent cannot be mutated while a child refers to it, so parent
/// chains are finite and acyclic.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use understory_property::{PropertyKind, PropertyTable};
/// use understory_style::Style;
///
/// let mut table = PropertyTable::new();
///
/// let mut base = Style::new();
/// base.set(table.font_size(14.0));
/// let base = Rc::new(base);
///
/// let mut button = Style::with_parent(base.clone());
/// button.set(table.font_size(8.0));
/// button.set(table.font_size(9.0));
///
/// assert_eq!(button.len(), 1);
/// assert_eq!(button.get(PropertyKind::FontSize), Some(table.font_size(9.0)));
/// assert_eq!(button.chain().count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Style {
    properties: SmallVec<[PropertyHandle; INLINE_CAPACITY]>,
    parent: Option<Rc<Self>>,
}

impl Style {
    /// Creates an empty style with no parent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty style that inherits from `parent`.
    #[must_use]
    pub fn with_parent(parent: Rc<Self>) -> Self {
        Self {
            properties: SmallVec::new(),
            parent: Some(parent),
        }
    }

    /// Returns the number of properties set directly on this style.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if no properties are set directly on this style.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Sets a property, replacing any existing property of the same kind.
    ///
    /// A replaced property keeps its position; a new kind is appended.
    /// Returns the handle that was replaced, if any.
    pub fn set(&mut self, property: PropertyHandle) -> Option<PropertyHandle> {
        match self
            .properties
            .iter_mut()
            .find(|existing| existing.kind() == property.kind())
        {
            Some(slot) => Some(core::mem::replace(slot, property)),
            None => {
                self.properties.push(property);
                None
            }
        }
    }

    /// Sets the same border width on all four edges.
    pub fn set_border_width(&mut self, table: &mut PropertyTable, width: f32) {
        for edge in Edge::ALL {
            self.set(table.border_width(edge, width));
        }
    }

    /// Sets the same solid border color on all four edges.
    pub fn set_border_color(&mut self, table: &mut PropertyTable, color: Argb) {
        for edge in Edge::ALL {
            self.set(table.color_solid(edge.color_target(), color));
        }
    }

    /// Returns the property of `kind` set directly on this style.
    ///
    /// Parents are not consulted; use the cascade functions for that.
    #[must_use]
    pub fn get(&self, kind: PropertyKind) -> Option<PropertyHandle> {
        self.properties.iter().copied().find(|p| p.kind() == kind)
    }

    /// Returns `true` if a property of `kind` is set directly on this style.
    #[must_use]
    pub fn contains(&self, kind: PropertyKind) -> bool {
        self.get(kind).is_some()
    }

    /// Returns the properties set directly on this style, in order.
    #[must_use]
    #[inline]
    pub fn properties(&self) -> &[PropertyHandle] {
        &self.properties
    }

    /// Returns the parent style, if any.
    #[must_use]
    #[inline]
    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    /// Links (or unlinks) the parent style.
    ///
    /// This only stores the reference. The parent's properties are neither
    /// copied nor checked.
    pub fn set_parent(&mut self, parent: Option<Rc<Self>>) {
        self.parent = parent;
    }

    /// Iterates over this style and then each ancestor, innermost first.
    #[must_use]
    pub fn chain(&self) -> StyleChain<'_> {
        StyleChain { next: Some(self) }
    }
}

/// Iterator over a style and its ancestors.
///
/// Returned by [`Style::chain`].
#[derive(Clone, Debug)]
pub struct StyleChain<'a> {
    next: Option<&'a Style>,
}

impl<'a> Iterator for StyleChain<'a> {
    type Item = &'a Style;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}

impl core::iter::FusedIterator for StyleChain<'_> {}

/// Builder for constructing [`Style`] instances against a [`PropertyTable`].
///
/// Each setter interns its value and sets the resulting handle.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use understory_property::{ColorTarget, FontStyle, PropertyKind, PropertyTable};
/// use understory_style::StyleBuilder;
///
/// let mut table = PropertyTable::new();
/// let base = Rc::new(
///     StyleBuilder::new(&mut table)
///         .font_name("Times New Roman")
///         .font_size(14.0)
///         .font_weight(FontStyle::BOLD)
///         .build(),
/// );
/// let label = StyleBuilder::new(&mut table)
///     .color_css(ColorTarget::Foreground, "#333")
///     .inherits_from(base)
///     .build();
///
/// assert!(label.contains(PropertyKind::Color));
/// assert!(!label.contains(PropertyKind::FontName));
/// assert!(label.parent().is_some());
/// ```
#[derive(Debug)]
pub struct StyleBuilder<'t> {
    table: &'t mut PropertyTable,
    style: Style,
}

impl<'t> StyleBuilder<'t> {
    /// Creates a builder for an empty style.
    #[must_use]
    pub fn new(table: &'t mut PropertyTable) -> Self {
        Self {
            table,
            style: Style::new(),
        }
    }

    /// Sets an already interned property.
    #[must_use]
    pub fn set(mut self, property: PropertyHandle) -> Self {
        self.style.set(property);
        self
    }

    /// Sets the font family name.
    #[must_use]
    pub fn font_name(mut self, name: &str) -> Self {
        let handle = self.table.font_name(name);
        self.set(handle)
    }

    /// Sets the font size.
    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        let handle = self.table.font_size(size);
        self.set(handle)
    }

    /// Sets the font style word.
    #[must_use]
    pub fn font_weight(mut self, style: FontStyle) -> Self {
        let handle = self.table.font_weight(style);
        self.set(handle)
    }

    /// Sets the padding box.
    #[must_use]
    pub fn padding(mut self, top: i32, right: i32, bottom: i32, left: i32) -> Self {
        let handle = self.table.padding(top, right, bottom, left);
        self.set(handle)
    }

    /// Sets a solid color.
    #[must_use]
    pub fn color(mut self, target: ColorTarget, color: Argb) -> Self {
        let handle = self.table.color_solid(target, color);
        self.set(handle)
    }

    /// Sets a solid color from CSS-like text.
    #[must_use]
    pub fn color_css(mut self, target: ColorTarget, text: &str) -> Self {
        let handle = self.table.color_solid_css(target, text);
        self.set(handle)
    }

    /// Sets a linear gradient background.
    #[must_use]
    pub fn background_gradient(mut self, mode: GradientMode, start: Argb, end: Argb) -> Self {
        let handle = self
            .table
            .linear_gradient(ColorTarget::Background, mode, start, end);
        self.set(handle)
    }

    /// Sets the same border width on all four edges.
    #[must_use]
    pub fn border_width(mut self, width: f32) -> Self {
        self.style.set_border_width(self.table, width);
        self
    }

    /// Sets the same solid border color on all four edges.
    #[must_use]
    pub fn border_color(mut self, color: Argb) -> Self {
        self.style.set_border_color(self.table, color);
        self
    }

    /// Sets the parent style.
    #[must_use]
    pub fn inherits_from(mut self, parent: Rc<Style>) -> Self {
        self.style.set_parent(Some(parent));
        self
    }

    /// Builds the style.
    #[must_use]
    pub fn build(self) -> Style {
        self.style
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The property interning table.
//!
//! [`PropertyTable`] canonicalizes [`PropertyValue`]s: interning a value that
//! is structurally equal to one already in the table returns the existing
//! [`PropertyHandle`]. Handle equality therefore stands in for value equality,
//! which is what lets the font cache key on handle triples.
//!
//! The table is append-only. Values are never removed or moved, so handles
//! stay valid until the table is dropped. Lookups scan the candidates of the
//! same [`PropertyKind`] linearly; the number of distinct values in a styled
//! application is small, and interning happens while building styles rather
//! than while painting.

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;
use understory_color::{Argb, ColorValue, GradientMode, parse_css_color};

use crate::id::PropertyHandle;
use crate::kind::{ColorTarget, Edge, PropertyKind};
use crate::value::{FontStyle, Padding, PropertyValue};

/// Interns [`PropertyValue`]s into stable [`PropertyHandle`]s.
///
/// The table has no internal synchronization. It is meant to live inside the
/// host GUI's single event-processing context.
///
/// # Example
///
/// ```rust
/// use understory_color::Argb;
/// use understory_property::{ColorTarget, Edge, PropertyTable};
///
/// let mut table = PropertyTable::new();
///
/// let top = table.border_width(Edge::Top, 1.0);
/// let left = table.border_width(Edge::Left, 1.0);
/// assert_ne!(top, left);
///
/// let gray = table.color_solid(ColorTarget::BorderBottom, Argb::rgb(0x88, 0x88, 0x88));
/// assert_eq!(table.color_solid_css(ColorTarget::BorderBottom, "#888"), gray);
/// assert_eq!(table.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyTable {
    values: Vec<PropertyValue>,
    by_kind: HashMap<PropertyKind, SmallVec<[u32; 4]>>,
}

impl PropertyTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of interned values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been interned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of interned values of one kind.
    #[must_use]
    pub fn count_of(&self, kind: PropertyKind) -> usize {
        self.by_kind.get(&kind).map_or(0, SmallVec::len)
    }

    /// Returns the value behind a handle.
    ///
    /// Handles carry no table identity. A handle from another table is
    /// caught only when its index is out of range here or lands on a value
    /// of a different kind; otherwise it silently reads this table's value
    /// at that index.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is out of range for this table, or if the value at
    /// its index is not of `handle`'s kind.
    #[must_use]
    pub fn get(&self, handle: PropertyHandle) -> &PropertyValue {
        let value = &self.values[handle.as_usize()];
        assert_eq!(
            value.kind(),
            handle.kind(),
            "{handle} was produced by a different table"
        );
        value
    }

    /// Returns the value behind a handle, or `None` if it is out of range or
    /// the value at its index is of a different kind.
    #[must_use]
    pub fn try_get(&self, handle: PropertyHandle) -> Option<&PropertyValue> {
        self.values
            .get(handle.as_usize())
            .filter(|value| value.kind() == handle.kind())
    }

    /// Iterates over every interned value in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyHandle, &PropertyValue)> + '_ {
        self.values.iter().enumerate().map(|(index, value)| {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "insert keeps the table length within u32"
            )]
            let index = index as u32;
            (PropertyHandle::new(value.kind(), index), value)
        })
    }

    /// Returns the handle of an interned value equal to `value`, without
    /// interning it.
    #[must_use]
    pub fn lookup(&self, value: &PropertyValue) -> Option<PropertyHandle> {
        self.find(value.kind(), |existing| existing == value)
    }

    /// Interns `value`.
    ///
    /// If an equal value is already in the table, its handle is returned and
    /// `value` is dropped. Otherwise `value` is appended.
    pub fn intern(&mut self, value: PropertyValue) -> PropertyHandle {
        match self.lookup(&value) {
            Some(handle) => handle,
            None => self.insert(value),
        }
    }

    /// Interns a font family name.
    ///
    /// Only allocates when the name is not already in the table.
    pub fn font_name(&mut self, name: &str) -> PropertyHandle {
        match self.find(PropertyKind::FontName, |v| v.as_font_name() == Some(name)) {
            Some(handle) => handle,
            None => self.insert(PropertyValue::FontName(Box::from(name))),
        }
    }

    /// Interns a font size.
    pub fn font_size(&mut self, size: f32) -> PropertyHandle {
        self.intern(PropertyValue::FontSize(size))
    }

    /// Interns a font style word.
    pub fn font_weight(&mut self, style: FontStyle) -> PropertyHandle {
        self.intern(PropertyValue::FontWeight(style))
    }

    /// Interns a padding box.
    pub fn padding(&mut self, top: i32, right: i32, bottom: i32, left: i32) -> PropertyHandle {
        self.intern(PropertyValue::Padding(Padding::new(top, right, bottom, left)))
    }

    /// Interns a border width for one edge.
    pub fn border_width(&mut self, edge: Edge, width: f32) -> PropertyHandle {
        self.intern(PropertyValue::BorderWidth(edge, width))
    }

    /// Interns a color.
    pub fn color(&mut self, target: ColorTarget, color: ColorValue) -> PropertyHandle {
        self.intern(PropertyValue::Color(target, color))
    }

    /// Interns a solid color.
    pub fn color_solid(&mut self, target: ColorTarget, color: Argb) -> PropertyHandle {
        self.color(target, ColorValue::Solid(color))
    }

    /// Parses CSS-like color text and interns it as a solid color.
    ///
    /// Unrecognized text interns transparent black.
    pub fn color_solid_css(&mut self, target: ColorTarget, text: &str) -> PropertyHandle {
        self.color_solid(target, parse_css_color(text))
    }

    /// Interns a two-stop linear gradient.
    pub fn linear_gradient(
        &mut self,
        target: ColorTarget,
        mode: GradientMode,
        start: Argb,
        end: Argb,
    ) -> PropertyHandle {
        self.color(target, ColorValue::linear_gradient(mode, start, end))
    }

    /// Parses CSS-like stop colors and interns a two-stop linear gradient.
    pub fn linear_gradient_css(
        &mut self,
        target: ColorTarget,
        mode: GradientMode,
        start: &str,
        end: &str,
    ) -> PropertyHandle {
        self.linear_gradient(target, mode, parse_css_color(start), parse_css_color(end))
    }

    fn find(
        &self,
        kind: PropertyKind,
        mut matches: impl FnMut(&PropertyValue) -> bool,
    ) -> Option<PropertyHandle> {
        let candidates = self.by_kind.get(&kind)?;
        candidates
            .iter()
            .copied()
            .find(|&index| matches(&self.values[index as usize]))
            .map(|index| PropertyHandle::new(kind, index))
    }

    fn insert(&mut self, value: PropertyValue) -> PropertyHandle {
        let kind = value.kind();
        let index = u32::try_from(self.values.len())
            .expect("too many interned properties for PropertyHandle (u32)");
        self.values.push(value);
        self.by_kind.entry(kind).or_default().push(index);
        let handle = PropertyHandle::new(kind, index);
        log::trace!("interned {handle}");
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn interns_duplicates_to_same_handle() {
        let mut t = PropertyTable::new();
        let a0 = t.font_size(14.0);
        let a1 = t.font_size(14.0);
        let b = t.font_size(8.0);

        assert_eq!(a0, a1);
        assert_ne!(a0, b);
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(a0), &PropertyValue::FontSize(14.0));
        assert_eq!(t.get(b), &PropertyValue::FontSize(8.0));
    }

    #[test]
    fn font_names_intern_by_text_not_instance() {
        let mut t = PropertyTable::new();
        let first = String::from("Times New Roman");
        let second = String::from("Times New Roman");
        let a = t.font_name(&first);
        let b = t.font_name(&second);
        let c = t.intern(PropertyValue::FontName(second.into_boxed_str()));

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(t.count_of(PropertyKind::FontName), 1);
        assert_eq!(t.get(a).as_font_name(), Some("Times New Roman"));
    }

    #[test]
    fn same_payload_different_kind_is_distinct() {
        let mut t = PropertyTable::new();
        let top = t.border_width(Edge::Top, 1.0);
        let left = t.border_width(Edge::Left, 1.0);
        let fg = t.color_solid(ColorTarget::Foreground, Argb::BLACK);
        let bg = t.color_solid(ColorTarget::Background, Argb::BLACK);

        assert_ne!(top, left);
        assert_ne!(fg, bg);
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn text_colors_parse_before_interning() {
        let mut t = PropertyTable::new();
        let named = t.color_solid_css(ColorTarget::Foreground, "black");
        let hex = t.color_solid_css(ColorTarget::Foreground, "#000");
        let packed = t.color_solid(ColorTarget::Foreground, Argb::rgb(0, 0, 0));
        assert_eq!(named, hex);
        assert_eq!(named, packed);

        let junk = t.color_solid_css(ColorTarget::Foreground, "not-a-color");
        assert_eq!(
            t.get(junk).as_color(),
            Some(&ColorValue::Solid(Argb::TRANSPARENT))
        );
    }

    #[test]
    fn gradients_intern_structurally() {
        let mut t = PropertyTable::new();
        let a = t.linear_gradient(
            ColorTarget::Background,
            GradientMode::Vertical,
            Argb::rgb(0xf5, 0xf6, 0xf6),
            Argb::rgb(0xe4, 0xe4, 0xe3),
        );
        let b = t.linear_gradient_css(
            ColorTarget::Background,
            GradientMode::Vertical,
            "#f5f6f6",
            "#e4e4e3",
        );
        let c = t.linear_gradient_css(
            ColorTarget::Background,
            GradientMode::Horizontal,
            "#f5f6f6",
            "#e4e4e3",
        );
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn solid_never_matches_gradient() {
        let mut t = PropertyTable::new();
        let solid = t.color_solid(ColorTarget::Background, Argb::WHITE);
        let flat = t.linear_gradient(
            ColorTarget::Background,
            GradientMode::Vertical,
            Argb::WHITE,
            Argb::WHITE,
        );
        assert_ne!(solid, flat);
    }

    #[test]
    fn padding_and_weight() {
        let mut t = PropertyTable::new();
        let p = t.padding(4, 8, 4, 8);
        assert_eq!(t.padding(4, 8, 4, 8), p);
        assert_ne!(t.padding(8, 4, 8, 4), p);
        assert_eq!(t.get(p).as_padding(), Some(Padding::new(4, 8, 4, 8)));

        let bold = t.font_weight(FontStyle::BOLD);
        assert_eq!(t.font_weight(FontStyle::BOLD), bold);
        assert_ne!(t.font_weight(FontStyle::BOLD_ITALIC), bold);
    }

    #[test]
    fn handles_stay_valid_as_table_grows() {
        let mut t = PropertyTable::new();
        let first = t.font_name("Lucida Grande");
        for size in 0..100_u16 {
            t.font_size(f32::from(size));
        }
        assert_eq!(t.get(first).as_font_name(), Some("Lucida Grande"));
        assert_eq!(t.font_name("Lucida Grande"), first);
        assert_eq!(t.len(), 101);
    }

    #[test]
    fn lookup_does_not_insert() {
        let mut t = PropertyTable::new();
        assert!(t.lookup(&PropertyValue::FontSize(3.0)).is_none());
        assert!(t.is_empty());
        let h = t.font_size(3.0);
        assert_eq!(t.lookup(&PropertyValue::FontSize(3.0)), Some(h));
    }

    #[test]
    fn iter_visits_in_insertion_order() {
        let mut t = PropertyTable::new();
        let a = t.font_size(1.0);
        let b = t.padding(0, 0, 0, 0);
        let seen: Vec<_> = t.iter().map(|(h, _)| h).collect();
        assert_eq!(seen, [a, b]);
    }

    #[test]
    fn try_get_rejects_foreign_handles() {
        let mut big = PropertyTable::new();
        big.font_size(1.0);
        let foreign = big.font_size(2.0);

        let small = PropertyTable::new();
        assert!(small.try_get(foreign).is_none());
        assert!(big.try_get(foreign).is_some());
    }

    #[test]
    #[should_panic(expected = "was produced by a different table")]
    fn get_rejects_in_range_handle_of_another_kind() {
        let mut other = PropertyTable::new();
        let size = other.font_size(14.0);

        let mut t = PropertyTable::new();
        let _ = t.font_name("Georgia");
        let _ = t.get(size);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn get_rejects_out_of_range_handle() {
        let mut other = PropertyTable::new();
        let _ = other.font_size(1.0);
        let size = other.font_size(2.0);

        let _ = PropertyTable::new().get(size);
    }

    #[test]
    fn get_cannot_tell_same_kind_handles_apart() {
        let mut other = PropertyTable::new();
        let foreign = other.font_size(14.0);

        let mut t = PropertyTable::new();
        let own = t.font_size(8.0);
        assert_eq!(foreign, own, "equal kind and index make equal handles");
        assert_eq!(t.get(foreign), &PropertyValue::FontSize(8.0));
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interned property handles.

use core::fmt;

use crate::kind::PropertyKind;

/// A stable handle to an interned [`PropertyValue`](crate::PropertyValue).
///
/// Handles are returned by [`PropertyTable`](crate::PropertyTable) and stay
/// valid for the lifetime of that table. Because the table never stores two
/// equal values, two handles from the same table are equal exactly when
/// their values are equal.
///
/// The handle carries its [`PropertyKind`], so styles and the cascade can
/// match on kind without going back to the table.
///
/// # Example
///
/// ```rust
/// use understory_property::{PropertyKind, PropertyTable};
///
/// let mut table = PropertyTable::new();
/// let a = table.font_size(12.0);
/// let b = table.font_size(12.0);
///
/// assert_eq!(a, b);
/// assert_eq!(a.kind(), PropertyKind::FontSize);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PropertyHandle {
    kind: PropertyKind,
    index: u32,
}

impl PropertyHandle {
    #[inline]
    pub(crate) const fn new(kind: PropertyKind, index: u32) -> Self {
        Self { kind, index }
    }

    /// Returns the kind of the value this handle refers to.
    #[must_use]
    #[inline]
    pub const fn kind(self) -> PropertyKind {
        self.kind
    }

    /// Returns the position of the value in its table.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    #[inline]
    pub(crate) const fn as_usize(self) -> usize {
        self.index as usize
    }
}

impl fmt::Debug for PropertyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PropertyHandle")
            .field(&self.kind)
            .field(&self.index)
            .finish()
    }
}

impl fmt::Display for PropertyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.index)
    }
}

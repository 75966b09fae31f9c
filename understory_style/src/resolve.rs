// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascade resolution over style chains.
//!
//! Resolution walks a style, then its parent, then the parent's parent, and
//! so on. Within each style, properties are visited in order. The first
//! property of a requested kind wins; later (outer) ones are never consulted
//! for that kind. The walk stops as soon as every request is satisfied.
//!
//! The two-chain forms run the same walk over `first` and then over
//! `second`. Requests already satisfied by `first` are skipped, so `second`
//! acts as `first`'s outermost ancestor without being linked to it. This lets
//! a widget pair its own (possibly absent) style with a shared default style.

use understory_property::{PropertyHandle, PropertyKind};

use crate::style::Style;

/// One slot in a cascade query: the kind wanted and, once found, its handle.
///
/// # Example
///
/// ```rust
/// use understory_property::{PropertyKind, PropertyTable};
/// use understory_style::{PropertyRequest, Style, find_properties};
///
/// let mut table = PropertyTable::new();
/// let mut style = Style::new();
/// style.set(table.font_size(14.0));
///
/// let mut wanted = [
///     PropertyRequest::new(PropertyKind::FontSize),
///     PropertyRequest::new(PropertyKind::FontName),
/// ];
/// let walk = find_properties(&style, &mut wanted);
///
/// assert_eq!(wanted[0].found(), Some(table.font_size(14.0)));
/// assert_eq!(wanted[1].found(), None);
/// assert!(!walk.complete);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PropertyRequest {
    kind: PropertyKind,
    found: Option<PropertyHandle>,
}

impl PropertyRequest {
    /// Creates an unfilled request for `kind`.
    #[must_use]
    #[inline]
    pub const fn new(kind: PropertyKind) -> Self {
        Self { kind, found: None }
    }

    /// The kind this request asks for.
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// The handle found for this request, if any.
    #[must_use]
    #[inline]
    pub const fn found(&self) -> Option<PropertyHandle> {
        self.found
    }

    /// Returns `true` once this request has been filled.
    #[must_use]
    #[inline]
    pub const fn is_found(&self) -> bool {
        self.found.is_some()
    }
}

/// What a cascade walk did.
///
/// This is informational; results are written into the
/// [`PropertyRequest`]s.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CascadeWalk {
    /// Number of styles whose properties were examined.
    pub styles_visited: usize,
    /// Number of individual properties examined.
    pub properties_scanned: usize,
    /// Whether every request was filled when the walk ended.
    pub complete: bool,
}

/// Fills `wanted` from `chain` and its ancestors.
///
/// Requests that are already filled are left untouched. If a kind appears in
/// more than one request, only the first request of that kind is filled.
pub fn find_properties(chain: &Style, wanted: &mut [PropertyRequest]) -> CascadeWalk {
    let mut walk = CascadeWalk {
        complete: all_found(wanted),
        ..CascadeWalk::default()
    };
    if walk.complete {
        return walk;
    }
    'styles: for style in chain.chain() {
        walk.styles_visited += 1;
        for &property in style.properties() {
            walk.properties_scanned += 1;
            if fill(property, wanted) && all_found(wanted) {
                walk.complete = true;
                break 'styles;
            }
        }
    }
    log::trace!(
        "cascade walk visited {} styles, {} properties, complete: {}",
        walk.styles_visited,
        walk.properties_scanned,
        walk.complete
    );
    walk
}

/// Fills `wanted` from `first`'s chain, then from `second`'s chain.
///
/// Values found in `first`'s chain are never overwritten by `second`'s.
/// `first` may be absent, in which case only `second` is walked.
pub fn find_properties_with_fallback(
    first: Option<&Style>,
    second: &Style,
    wanted: &mut [PropertyRequest],
) -> CascadeWalk {
    let head = match first {
        Some(style) => find_properties(style, wanted),
        None => CascadeWalk::default(),
    };
    let tail = find_properties(second, wanted);
    CascadeWalk {
        styles_visited: head.styles_visited + tail.styles_visited,
        properties_scanned: head.properties_scanned + tail.properties_scanned,
        complete: tail.complete,
    }
}

/// Resolves a single property kind across `first`'s chain, then `second`'s.
///
/// Returns `None` if neither chain defines `kind`.
///
/// # Example
///
/// ```rust
/// use understory_property::{FontStyle, PropertyKind, PropertyTable};
/// use understory_style::{StyleBuilder, find_property};
///
/// let mut table = PropertyTable::new();
/// let defaults = StyleBuilder::new(&mut table).font_weight(FontStyle::BOLD).build();
/// let mine = StyleBuilder::new(&mut table).font_size(10.0).build();
///
/// let weight = find_property(Some(&mine), &defaults, PropertyKind::FontWeight);
/// assert_eq!(weight, Some(table.font_weight(FontStyle::BOLD)));
/// assert_eq!(find_property(Some(&mine), &defaults, PropertyKind::Padding), None);
/// ```
#[must_use]
pub fn find_property(
    first: Option<&Style>,
    second: &Style,
    kind: PropertyKind,
) -> Option<PropertyHandle> {
    let mut wanted = [PropertyRequest::new(kind)];
    find_properties_with_fallback(first, second, &mut wanted);
    wanted[0].found
}

fn all_found(wanted: &[PropertyRequest]) -> bool {
    wanted.iter().all(PropertyRequest::is_found)
}

/// Offers `property` to the first request of the same kind.
///
/// Returns `true` if that request was empty and is now filled.
fn fill(property: PropertyHandle, wanted: &mut [PropertyRequest]) -> bool {
    match wanted.iter_mut().find(|r| r.kind == property.kind()) {
        Some(request) if request.found.is_none() => {
            request.found = Some(property);
            true
        }
        _ => false,
    }
}

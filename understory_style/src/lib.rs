// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Style: CSS-like style chains, cascade resolution and font caching.
//!
//! This crate builds on the interned values of `understory_property`.
//!
//! ## Core Concepts
//!
//! ### Styles
//!
//! A [`Style`] is an ordered list of interned property handles plus an
//! optional parent. A style never holds two properties of the same kind:
//! setting a kind that is already present replaces it in place. Parents are
//! shared through `Rc`, so a chain of styles is always finite.
//!
//! ```rust
//! use std::rc::Rc;
//! use understory_property::{FontStyle, PropertyKind, PropertyTable};
//! use understory_style::StyleBuilder;
//!
//! let mut table = PropertyTable::new();
//! let base = Rc::new(
//!     StyleBuilder::new(&mut table)
//!         .font_name("Times New Roman")
//!         .font_size(14.0)
//!         .font_weight(FontStyle::BOLD)
//!         .build(),
//! );
//! let button = StyleBuilder::new(&mut table)
//!     .font_size(8.0)
//!     .inherits_from(base)
//!     .build();
//!
//! assert_eq!(button.chain().count(), 2);
//! assert_eq!(button.get(PropertyKind::FontSize), Some(table.font_size(8.0)));
//! ```
//!
//! ### Cascade
//!
//! [`find_properties`] fills a list of [`PropertyRequest`]s by walking a
//! style and its ancestors. The first property of a kind wins and the walk
//! stops once every request is filled. [`find_properties_with_fallback`] and
//! [`find_property`] continue into a second chain for whatever the first one
//! left unresolved.
//!
//! ```rust
//! use understory_property::{PropertyKind, PropertyTable};
//! use understory_style::{StyleBuilder, find_property};
//!
//! let mut table = PropertyTable::new();
//! let defaults = StyleBuilder::new(&mut table).padding(0, 0, 0, 0).font_size(14.0).build();
//! let mine = StyleBuilder::new(&mut table).font_size(10.0).build();
//!
//! assert_eq!(
//!     find_property(Some(&mine), &defaults, PropertyKind::FontSize),
//!     Some(table.font_size(10.0)),
//! );
//! assert_eq!(
//!     find_property(Some(&mine), &defaults, PropertyKind::Padding),
//!     Some(table.padding(0, 0, 0, 0)),
//! );
//! ```
//!
//! ### Fonts
//!
//! [`FontCache`] turns the resolved font name, size and weight of a style
//! pair into a font object built by a [`FontBackend`]. Fonts are keyed on
//! interned handles, so equal font properties always share one object.
//!
//! ### Context
//!
//! [`StyleContext`] owns the property table, the built-in [`DefaultStyles`]
//! and the font cache. Creating one initializes the subsystem; dropping it
//! tears everything down.
//!
//! ```rust
//! use understory_style::StyleContext;
//!
//! let mut cx = StyleContext::new();
//! let font = cx.button_font(None);
//! assert_eq!(&*cx.font(font).family, "Lucida Grande");
//! assert_eq!(cx.font(font).size, 8.0);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod context;
mod defaults;
mod font;
mod resolve;
mod style;

pub use context::StyleContext;
pub use defaults::DefaultStyles;
pub use font::{
    FontBackend, FontCache, FontDescriptor, FontFace, FontFaces, FontHandle, MissingFontProperty,
};
pub use resolve::{
    CascadeWalk, PropertyRequest, find_properties, find_properties_with_fallback, find_property,
};
pub use style::{Style, StyleBuilder, StyleChain};

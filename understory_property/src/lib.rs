// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Property: interned style property values.
//!
//! This crate provides the value layer of the style system:
//!
//! - [`PropertyValue`]: a closed set of property values (font name, size and
//!   style, padding, per-edge border widths, and foreground, background and
//!   per-edge border colors), compared structurally.
//! - [`PropertyTable`]: an append-only interning table that hands out stable
//!   [`PropertyHandle`]s and never stores two equal values.
//!
//! Cascade resolution over styles is provided by `understory_style`.
//!
//! ## Interning
//!
//! Equal values share one handle, so handle equality implies value equality:
//!
//! ```rust
//! use understory_property::{FontStyle, PropertyKind, PropertyTable};
//!
//! let mut table = PropertyTable::new();
//!
//! let name = String::from("Lucida Grande");
//! let a = table.font_name(&name);
//! let b = table.font_name("Lucida Grande");
//! assert_eq!(a, b);
//!
//! let bold = table.font_weight(FontStyle::BOLD);
//! assert_eq!(bold.kind(), PropertyKind::FontWeight);
//! assert_eq!(table.get(bold).as_font_weight(), Some(FontStyle::BOLD));
//! assert_eq!(table.len(), 2);
//! ```
//!
//! Values of different kinds never collapse, even when their payloads match:
//!
//! ```rust
//! use understory_property::{Edge, PropertyTable};
//!
//! let mut table = PropertyTable::new();
//! assert_ne!(table.border_width(Edge::Top, 1.0), table.border_width(Edge::Left, 1.0));
//! ```
//!
//! ## Lifetime
//!
//! Interned values are never evicted. Everything is released when the table
//! is dropped.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod id;
mod kind;
mod table;
mod value;

pub use id::PropertyHandle;
pub use kind::{ColorTarget, Edge, PropertyKind};
pub use table::PropertyTable;
pub use value::{FontStyle, Padding, PropertyValue};

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in default styles.

use alloc::rc::Rc;

use understory_color::{Argb, GradientMode};
use understory_property::{ColorTarget, FontStyle, PropertyTable};

use crate::style::{Style, StyleBuilder};

/// The three built-in styles every [`StyleContext`](crate::StyleContext)
/// carries.
///
/// `button` inherits from `base`, and `button_hover` inherits from `button`.
/// Every style chain that ends in `base` resolves a complete font, so
/// [`FontCache::font_for`](crate::FontCache::font_for) never panics for it.
#[derive(Clone, Debug)]
pub struct DefaultStyles {
    base: Rc<Style>,
    button: Rc<Style>,
    button_hover: Rc<Style>,
}

impl DefaultStyles {
    /// Interns and builds the stock defaults in `table`.
    ///
    /// | style          | properties                                                            |
    /// |----------------|-----------------------------------------------------------------------|
    /// | `base`         | Times New Roman, 14pt, bold; black text; `#f5f6f6`→`#e4e4e3` vertical background; 1px `#999999` border with a `#888` bottom edge; zero padding |
    /// | `button`       | Lucida Grande, 8pt, bold; padding 4 8 4 8                             |
    /// | `button_hover` | `#777` top and right borders, `#666` bottom border                    |
    #[must_use]
    pub fn new(table: &mut PropertyTable) -> Self {
        let base = Rc::new(
            StyleBuilder::new(table)
                .font_name("Times New Roman")
                .font_size(14.0)
                .font_weight(FontStyle::BOLD)
                .color_css(ColorTarget::Foreground, "black")
                .background_gradient(
                    GradientMode::Vertical,
                    Argb::rgb(0xf5, 0xf6, 0xf6),
                    Argb::rgb(0xe4, 0xe4, 0xe3),
                )
                .border_width(1.0)
                .border_color(Argb::rgb(0x99, 0x99, 0x99))
                .color_css(ColorTarget::BorderBottom, "#888")
                .padding(0, 0, 0, 0)
                .build(),
        );
        let button = Rc::new(
            StyleBuilder::new(table)
                .padding(4, 8, 4, 8)
                .font_name("Lucida Grande")
                .font_size(8.0)
                .font_weight(FontStyle::BOLD)
                .inherits_from(base.clone())
                .build(),
        );
        let button_hover = Rc::new(
            StyleBuilder::new(table)
                .color_css(ColorTarget::BorderTop, "#777")
                .color_css(ColorTarget::BorderRight, "#777")
                .color_css(ColorTarget::BorderBottom, "#666")
                .inherits_from(button.clone())
                .build(),
        );
        Self::from_styles(base, button, button_hover)
    }

    /// Uses caller-built styles as the defaults.
    ///
    /// The styles are taken as they are; nothing links `button` to `base`
    /// unless the caller did.
    #[must_use]
    pub fn from_styles(base: Rc<Style>, button: Rc<Style>, button_hover: Rc<Style>) -> Self {
        Self {
            base,
            button,
            button_hover,
        }
    }

    /// The root style.
    #[must_use]
    pub fn base(&self) -> &Rc<Style> {
        &self.base
    }

    /// The default button style.
    #[must_use]
    pub fn button(&self) -> &Rc<Style> {
        &self.button
    }

    /// The button style while hovered.
    #[must_use]
    pub fn button_hover(&self) -> &Rc<Style> {
        &self.button_hover
    }
}

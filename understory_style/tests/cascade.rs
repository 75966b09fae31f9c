// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for `understory_style`.
//!
//! These drive interning, style chains, the cascade and the font cache
//! together through the public API, the way a widget toolkit would.

use std::rc::Rc;

use understory_color::{Argb, ColorValue, parse_css_color};
use understory_property::{
    ColorTarget, Edge, FontStyle, PropertyKind, PropertyTable, PropertyValue,
};
use understory_style::{
    FontBackend, FontCache, FontDescriptor, PropertyRequest, Style, StyleBuilder, StyleContext,
    find_properties, find_property,
};

#[test]
fn equal_values_intern_to_one_handle() {
    let mut table = PropertyTable::new();
    let owned = String::from("Lucida Grande");
    let a = table.font_name("Lucida Grande");
    let b = table.font_name(&owned);
    let c = table.intern(PropertyValue::FontName(owned.into_boxed_str()));

    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(table.count_of(PropertyKind::FontName), 1);
    assert_eq!(table.len(), 1);
}

#[test]
fn equal_payloads_of_different_kinds_stay_distinct() {
    let mut table = PropertyTable::new();
    let top = table.border_width(Edge::Top, 1.0);
    let left = table.border_width(Edge::Left, 1.0);
    let fg = table.color_solid(ColorTarget::Foreground, Argb::BLACK);
    let bg = table.color_solid(ColorTarget::Background, Argb::BLACK);

    assert_ne!(top, left);
    assert_ne!(fg, bg);
    assert_eq!(table.len(), 4);
}

#[test]
fn nearest_style_in_the_chain_wins() {
    let mut table = PropertyTable::new();
    let c = Rc::new(StyleBuilder::new(&mut table).font_size(14.0).build());
    let b = Rc::new(
        StyleBuilder::new(&mut table)
            .font_weight(FontStyle::ITALIC)
            .inherits_from(c)
            .build(),
    );
    let a = StyleBuilder::new(&mut table)
        .font_size(8.0)
        .inherits_from(b)
        .build();

    assert_eq!(
        find_property(None, &a, PropertyKind::FontSize),
        Some(table.font_size(8.0))
    );
}

#[test]
fn second_chain_only_fills_gaps() {
    let mut table = PropertyTable::new();
    let second = StyleBuilder::new(&mut table)
        .font_weight(FontStyle::BOLD)
        .font_size(14.0)
        .build();
    let first = StyleBuilder::new(&mut table).font_size(9.0).build();

    assert_eq!(
        find_property(Some(&first), &second, PropertyKind::FontWeight),
        Some(table.font_weight(FontStyle::BOLD))
    );
    assert_eq!(
        find_property(Some(&first), &second, PropertyKind::FontSize),
        Some(table.font_size(9.0))
    );
}

#[test]
fn satisfied_walk_does_not_visit_ancestors() {
    let mut table = PropertyTable::new();
    let c = Rc::new(StyleBuilder::new(&mut table).font_name("Georgia").build());
    let b = Rc::new(
        StyleBuilder::new(&mut table)
            .font_size(12.0)
            .inherits_from(c)
            .build(),
    );
    let a = StyleBuilder::new(&mut table)
        .font_size(8.0)
        .font_weight(FontStyle::BOLD)
        .inherits_from(b)
        .build();

    let mut wanted = [
        PropertyRequest::new(PropertyKind::FontWeight),
        PropertyRequest::new(PropertyKind::FontSize),
    ];
    let walk = find_properties(&a, &mut wanted);

    assert!(walk.complete);
    assert_eq!(walk.styles_visited, 1);
    assert_eq!(walk.properties_scanned, 2);
}

#[test]
fn color_text_forms_agree() {
    let white = Argb::rgb(255, 255, 255);
    assert_eq!(parse_css_color("#fff"), white);
    assert_eq!(parse_css_color("#ffffff"), white);
    assert_eq!(parse_css_color("rgb(255,255,255)"), white);

    assert_eq!(parse_css_color("rgba(0,0,0,0)"), Argb::TRANSPARENT);
    assert_eq!(parse_css_color("transparent"), Argb::TRANSPARENT);
    assert_eq!(parse_css_color("not-a-color"), Argb::TRANSPARENT);
}

#[test]
fn css_text_and_packed_colors_intern_together() {
    let mut table = PropertyTable::new();
    let parsed = table.color_solid_css(ColorTarget::BorderTop, "#777");
    let packed = table.color_solid(ColorTarget::BorderTop, Argb::rgb(0x77, 0x77, 0x77));
    assert_eq!(parsed, packed);
    assert_eq!(
        table.get(parsed),
        &PropertyValue::Color(
            ColorTarget::BorderTop,
            ColorValue::solid(Argb::rgb(0x77, 0x77, 0x77))
        )
    );
}

#[derive(Debug, Default)]
struct Recording {
    built: Vec<(String, f32, FontStyle)>,
}

impl FontBackend for Recording {
    type Font = usize;

    fn create_font(&mut self, descriptor: &FontDescriptor<'_>) -> usize {
        self.built
            .push((descriptor.name.into(), descriptor.size, descriptor.style));
        self.built.len() - 1
    }
}

#[test]
fn font_cache_shares_fonts_for_equal_triples() {
    let mut cx = StyleContext::with_backend(Recording::default());
    let one = cx.builder().font_size(14.0).build();
    let other = cx.builder().font_name("Times New Roman").build();

    // Both restate base values, so all three lookups share the base font.
    let base = cx.font_for(None, None);
    assert_eq!(cx.font_for(Some(&one), None), base);
    assert_eq!(cx.font_for(Some(&other), None), base);
    assert_eq!(cx.fonts().len(), 1);

    let smaller = cx.builder().font_size(13.0).build();
    let renamed = cx.builder().font_name("Georgia").build();
    let plain = cx.builder().font_weight(FontStyle::REGULAR).build();
    let fonts = [
        cx.font_for(Some(&smaller), None),
        cx.font_for(Some(&renamed), None),
        cx.font_for(Some(&plain), None),
    ];
    for font in fonts {
        assert_ne!(font, base);
    }
    assert_eq!(cx.fonts().len(), 4);
    assert_eq!(
        cx.fonts().backend().built[3],
        (String::from("Times New Roman"), 14.0, FontStyle::REGULAR)
    );
}

#[test]
fn standalone_font_cache_over_caller_table() {
    let mut table = PropertyTable::new();
    let defaults = StyleBuilder::new(&mut table)
        .font_name("Verdana")
        .font_size(11.0)
        .font_weight(FontStyle::BOLD | FontStyle::UNDERLINE)
        .build();
    let mut fonts = FontCache::new(Recording::default());
    let handle = fonts.font_for(&table, None, &defaults);
    assert_eq!(*fonts.font(handle), 0);
    assert_eq!(
        fonts.backend().built,
        [(
            String::from("Verdana"),
            11.0,
            FontStyle::BOLD | FontStyle::UNDERLINE
        )]
    );
}

#[test]
fn setting_a_kind_twice_keeps_the_last_value() {
    let mut table = PropertyTable::new();
    let mut style = Style::new();
    style.set(table.color_solid_css(ColorTarget::Foreground, "red"));
    style.set(table.font_size(10.0));
    style.set(table.color_solid_css(ColorTarget::Foreground, "blue"));

    assert_eq!(style.len(), 2);
    assert_eq!(
        style.get(PropertyKind::Color),
        Some(table.color_solid(ColorTarget::Foreground, Argb::rgb(0, 0, 255)))
    );
    assert_eq!(style.properties()[0].kind(), PropertyKind::Color);
}

#[test]
fn dropping_the_context_releases_defaults_and_fonts() {
    let mut cx = StyleContext::new();
    let _ = cx.font_for(None, None);
    let _ = cx.button_font(None);
    let defaults = [
        Rc::downgrade(cx.defaults().base()),
        Rc::downgrade(cx.defaults().button()),
        Rc::downgrade(cx.defaults().button_hover()),
    ];
    // Caller-held clones keep a style alive past the context.
    let kept = Rc::clone(cx.defaults().button());

    drop(cx);

    assert!(defaults[0].upgrade().is_some(), "button still links to base");
    assert!(defaults[1].upgrade().is_some());
    assert!(defaults[2].upgrade().is_none());

    drop(kept);
    assert!(defaults.iter().all(|weak| weak.upgrade().is_none()));
}

#[test]
fn style_can_be_reparented_to_a_defaults_style() {
    let mut cx = StyleContext::new();
    let mut style = cx.builder().font_size(20.0).build();
    style.set_parent(Some(Rc::clone(cx.defaults().button())));

    assert_eq!(style.chain().count(), 3);
    assert_eq!(
        cx.property_value(None, Some(&style), PropertyKind::Padding),
        Some(&PropertyValue::Padding(understory_property::Padding::new(
            4, 8, 4, 8
        )))
    );
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_property` + `understory_style`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::rc::Rc;
use std::sync::Once;

use understory_color::parse_css_color;
use understory_property::{ColorTarget, FontStyle, PropertyKind, PropertyTable};
use understory_style::{
    PropertyRequest, Style, StyleBuilder, StyleContext, find_properties,
    find_properties_with_fallback,
};

/// Builds a chain `depth` styles deep whose root defines every font property.
fn chain(table: &mut PropertyTable, depth: u32) -> Style {
    let mut parent = Rc::new(
        StyleBuilder::new(table)
            .font_name("Times New Roman")
            .font_size(14.0)
            .font_weight(FontStyle::BOLD)
            .build(),
    );
    for i in 1..depth.max(1) {
        let level = StyleBuilder::new(table)
            .padding(i as i32, 0, 0, 0)
            .inherits_from(parent)
            .build();
        parent = Rc::new(level);
    }
    Style::with_parent(parent)
}

fn bench_style(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: Style={} PropertyHandle={} PropertyValue={}",
            size_of::<Style>(),
            size_of::<understory_property::PropertyHandle>(),
            size_of::<understory_property::PropertyValue>(),
        );
    });

    let mut group = c.benchmark_group("style/intern");

    group.bench_function("hit", |b| {
        let mut table = PropertyTable::new();
        for i in 0..64 {
            let _ = table.font_size(i as f32);
        }
        b.iter(|| black_box(table.font_size(black_box(32.0))))
    });

    group.bench_function("miss", |b| {
        b.iter_batched(
            PropertyTable::new,
            |mut table| {
                for i in 0..64 {
                    black_box(table.font_size(i as f32));
                }
                table
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("font_name_hit", |b| {
        let mut table = PropertyTable::new();
        let _ = table.font_name("Lucida Grande");
        b.iter(|| black_box(table.font_name(black_box("Lucida Grande"))))
    });

    group.finish();

    let mut group = c.benchmark_group("style/cascade");

    for depth in [1_u32, 4, 16] {
        let mut table = PropertyTable::new();
        let leaf = chain(&mut table, depth);
        group.bench_function(BenchmarkId::new("font_triple", depth), |b| {
            b.iter(|| {
                let mut wanted = [
                    PropertyRequest::new(PropertyKind::FontName),
                    PropertyRequest::new(PropertyKind::FontSize),
                    PropertyRequest::new(PropertyKind::FontWeight),
                ];
                black_box(find_properties(&leaf, &mut wanted));
                wanted
            })
        });
    }

    group.bench_function("two_chain_missing", |b| {
        let mut table = PropertyTable::new();
        let first = chain(&mut table, 4);
        let second = chain(&mut table, 4);
        b.iter(|| {
            let mut wanted = [PropertyRequest::new(PropertyKind::BgColor)];
            black_box(find_properties_with_fallback(
                Some(&first),
                &second,
                &mut wanted,
            ))
        })
    });

    group.finish();

    let mut group = c.benchmark_group("style/fonts");

    group.bench_function("cached", |b| {
        let mut cx = StyleContext::new();
        let style = cx.builder().font_size(10.0).build();
        let _ = cx.font_for(Some(&style), None);
        b.iter(|| black_box(cx.font_for(Some(&style), None)))
    });

    group.bench_function("context_new", |b| {
        b.iter(|| black_box(StyleContext::new()))
    });

    group.finish();

    let mut group = c.benchmark_group("style/color");

    for text in ["#f5f6f6", "rgba(10,20,30,40)", "rgb(50%,25%,0%)", "black"] {
        group.bench_function(BenchmarkId::new("parse", text), |b| {
            b.iter(|| black_box(parse_css_color(black_box(text))))
        });
    }

    group.bench_function("intern_css", |b| {
        let mut table = PropertyTable::new();
        b.iter(|| black_box(table.color_solid_css(ColorTarget::BorderTop, black_box("#777"))))
    });

    group.finish();
}

criterion_group!(benches, bench_style);
criterion_main!(benches);

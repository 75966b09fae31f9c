// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS-like color text parsing.
//!
//! Supported forms:
//!
//! - `#rgb` (each digit doubled) and `#rrggbb`
//! - `rgb(r, g, b)` and `rgba(r, g, b, a)` with integer channels in `0..=255`
//! - `rgb(r%, g%, b%)` and `rgba(r%, g%, b%, a%)`, where each channel is
//!   `p * 2.55` truncated, so `50%` is 127
//! - a small table of color names, matched case-insensitively
//!
//! Parsing never fails. Anything unrecognized becomes [`Argb::TRANSPARENT`],
//! so malformed style data renders as invisible rather than aborting.

use crate::Argb;

/// Named colors, matched ASCII case-insensitively.
const NAMED_COLORS: &[(&str, Argb)] = &[
    ("black", Argb::rgb(0, 0, 0)),
    ("white", Argb::rgb(255, 255, 255)),
    ("gray", Argb::rgb(128, 128, 128)),
    ("red", Argb::rgb(255, 0, 0)),
    ("green", Argb::rgb(0, 128, 0)),
    ("blue", Argb::rgb(0, 0, 255)),
    ("transparent", Argb::new(0, 0, 0, 0)),
    ("yellow", Argb::rgb(255, 255, 0)),
];

/// Parses CSS-like color text into a packed color.
///
/// Returns [`Argb::TRANSPARENT`] for anything it does not understand.
///
/// # Example
///
/// ```rust
/// use understory_color::{Argb, parse_css_color};
///
/// assert_eq!(parse_css_color("#fff"), Argb::WHITE);
/// assert_eq!(parse_css_color("rgb(255, 255, 255)"), Argb::WHITE);
/// assert_eq!(parse_css_color("Gray"), Argb::rgb(128, 128, 128));
/// assert_eq!(parse_css_color("not-a-color"), Argb::TRANSPARENT);
/// ```
#[must_use]
pub fn parse_css_color(text: &str) -> Argb {
    let text = text.trim();
    let parsed = if let Some(hex) = text.strip_prefix('#') {
        parse_hex(hex)
    } else if let Some(args) = strip_function(text, "rgba") {
        parse_channels::<4>(args).map(|[r, g, b, a]| Argb::new(a, r, g, b))
    } else if let Some(args) = strip_function(text, "rgb") {
        parse_channels::<3>(args).map(|[r, g, b]| Argb::rgb(r, g, b))
    } else {
        named_color(text)
    };
    parsed.unwrap_or_else(|| {
        log::trace!("unrecognized color {text:?}, using transparent");
        Argb::TRANSPARENT
    })
}

/// Looks up a color by name, ignoring ASCII case.
#[must_use]
pub fn named_color(name: &str) -> Option<Argb> {
    NAMED_COLORS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|&(_, color)| color)
}

fn parse_hex(hex: &str) -> Option<Argb> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 0x11);
            Some(Argb::rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Argb::rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

/// Returns the text between `name(` and the closing `)`.
fn strip_function<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let head = text.get(..name.len())?;
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    text[name.len()..].strip_prefix('(')?.strip_suffix(')')
}

/// Parses exactly `N` comma-separated channels.
///
/// Either every channel is an integer or every channel is a percentage.
fn parse_channels<const N: usize>(args: &str) -> Option<[u8; N]> {
    let mut out = [0_u8; N];
    let mut parts = args.split(',').map(str::trim);
    let mut percent = None;
    for slot in &mut out {
        let part = parts.next()?;
        let (value, is_percent) = match part.strip_suffix('%') {
            Some(p) => (percent_channel(p.trim_end())?, true),
            None => (integer_channel(part)?, false),
        };
        if *percent.get_or_insert(is_percent) != is_percent {
            return None;
        }
        *slot = value;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}

fn integer_channel(text: &str) -> Option<u8> {
    let value: i32 = text.parse().ok()?;
    u8::try_from(value.clamp(0, 255)).ok()
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is clamped to 0..=255 before the truncating cast"
)]
fn percent_channel(text: &str) -> Option<u8> {
    let value: f32 = text.parse().ok()?;
    if value.is_nan() {
        return None;
    }
    Some((value.clamp(0.0, 100.0) * 2.55) as u8)
}

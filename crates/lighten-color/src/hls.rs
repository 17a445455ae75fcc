//! RGB ↔ HLS conversion.
//!
//! The standard six-sector piecewise transform, over f64 with all
//! components normalized to [0,1]. Denormalization back to 8-bit
//! channels truncates rather than rounds, so a round trip reproduces
//! each channel within ±1.

use crate::color::Color;

/// Hue/lightness/saturation triple, each component in [0,1].
///
/// Intermediate form only: it exists to scale lightness between the
/// two conversions and has no meaning across calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    pub h: f64,
    pub l: f64,
    pub s: f64,
}

pub fn rgb_to_hls(color: Color) -> Hls {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic: hue and saturation are degenerate.
        return Hls { h: 0.0, l, s: 0.0 };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hls { h: h / 6.0, l, s }
}

pub fn hls_to_rgb(hls: Hls) -> Color {
    let Hls { h, l, s } = hls;

    if s == 0.0 {
        let v = denormalize(l);
        return Color::from_rgb(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Color::from_rgb(
        denormalize(hue_to_channel(p, q, h + 1.0 / 3.0)),
        denormalize(hue_to_channel(p, q, h)),
        denormalize(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Truncating denormalization, saturating at the u8 bounds.
fn denormalize(v: f64) -> u8 {
    (v * 255.0) as u8
}

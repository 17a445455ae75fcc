//! The lightness-scaling transform.
//!
//! Parse, scale in HLS space, format back. Parse failures do not
//! surface as errors here: the result degrades to the input echoed
//! with a `#` prefix, so a shell pipeline wrapping this always gets a
//! hex-shaped string on stdout.


use std::sync::LazyLock;

use regex::Regex;

use crate::color::Color;
use crate::hls::{hls_to_rgb, rgb_to_hls};

/// Regex for the accepted input shape: 6 hex digits, optional `#`.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9a-fA-F]{6}$").unwrap());

/// Outcome of [`lighten`].
///
/// `Adjusted` means the input parsed and the transform ran; `Degraded`
/// means the input did not parse and is passed through with a `#`
/// prefix. Both render to an output string, so callers that only want
/// the original fire-and-forget behavior can ignore the distinction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lightened {
    Adjusted(Color),
    Degraded(String),
}

impl Lightened {
    /// The output string: a valid lowercase `#rrggbb` on the adjusted
    /// path, the echoed input on the degraded path.
    pub fn render(&self) -> String {
        match self {
            Self::Adjusted(color) => color.to_hex(),
            Self::Degraded(echo) => echo.clone(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }
}

/// Scale the lightness of a hex color by `factor`.
///
/// Factors above 1.0 brighten, factors in (0,1) darken, 0 drives the
/// color to black. Lightness is clamped to [0,1] after scaling, so
/// large factors saturate at white and negative factors floor at
/// black.
pub fn lighten(color: &str, factor: f64) -> Lightened {
    let parsed = match Color::from_hex(color) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!("passing input through unmodified: {e}");
            return Lightened::Degraded(format!("#{}", e.stripped()));
        }
    };

    let mut hls = rgb_to_hls(parsed);
    // min-then-max rather than clamp so a NaN factor resolves to the
    // ceiling instead of propagating into the channel math.
    hls.l = (hls.l * factor).min(1.0).max(0.0);

    Lightened::Adjusted(hls_to_rgb(hls))
}

/// Validate that a string has the accepted input shape
/// (`#?RRGGBB`).
pub fn is_hex_color(s: &str) -> bool {
    HEX_RE.is_match(s.trim())
}

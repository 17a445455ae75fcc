use serde::{Deserialize, Serialize};

use crate::errors::ColorError;

/// An RGB color with 8-bit channels. Canonical textual form is
/// lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color, with or without a leading `#`.
    ///
    /// Exactly 6 digits are required; 3-digit shorthand is not
    /// expanded. Both error variants carry the stripped input.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorError::BadLength(hex.to_string()));
        }
        let parse = |range| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorError::BadDigit(hex.to_string()))
        };
        let r = parse(0..2)?;
        let g = parse(2..4)?;
        let b = parse(4..6)?;
        Ok(Self { r, g, b })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

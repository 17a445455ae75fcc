//! Hex-color lightness scaling.
//!
//! Parses a 6-digit hex RGB color, scales its lightness in HLS space,
//! and formats the result back to lowercase `#rrggbb`. Malformed input
//! never produces an error from [`lighten`]: the transform degrades to
//! echoing the input, so callers piping the output into a theme file
//! always get *some* hex-shaped string back.
//!
//! # Quick Start
//!
//! ```rust
//! use lighten_color::lighten;
//!
//! let brighter = lighten("#336699", 1.3);
//! println!("{}", brighter.render());
//! ```

pub mod color;
pub mod errors;
pub mod hls;
pub mod transform;

// Re-export core types for convenience
pub use color::Color;
pub use errors::ColorError;
pub use hls::Hls;
pub use transform::{is_hex_color, lighten, Lightened};

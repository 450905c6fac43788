//! The `Colour` value type
//!
//! A colour is four 8-bit channels: alpha, red, green and blue. The public
//! API speaks straight (non-premultiplied) channel values; storage and the
//! pixel-export path are premultiplied. All operations are pure functions
//! returning fresh values, and every numeric input is clamped into range
//! rather than rejected, so construction never fails.
//!
//! # Example
//!
//! ```
//! use ui_colour::Colour;
//!
//! let orange = Colour::from_argb(0xFFFF8000);
//! assert_eq!(orange.red(), 255);
//! assert_eq!(orange.green(), 128);
//! assert_eq!(orange.to_string(), "FFFF8000");
//!
//! let dimmed = orange.darker(0.4).with_alpha(200);
//! assert_eq!(Colour::from_string(&dimmed.to_string()), dimmed);
//! ```

mod argb;
mod codec;
mod contrast;
mod error;
mod hsb;

pub use argb::Colour;
pub use error::ParseColourError;

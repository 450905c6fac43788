//! ui-colour: an ARGB colour value type for UI toolkits
//!
//! This crate provides [`Colour`], an immutable 8-bit-per-channel ARGB
//! colour with colour-space conversions, alpha compositing, perceptual
//! brighten/darken/contrast operations and a lossless textual encoding.
//!
//! # Quick Start
//!
//! ```
//! use ui_colour::Colour;
//!
//! let base = Colour::from_rgb(255, 128, 0);
//! let highlight = base.brighter(0.4).with_alpha_f32(0.8);
//! let composed = base.overlaid_with(highlight);
//!
//! // The hex codec is lossless for every representable colour
//! assert_eq!(Colour::from_string(&composed.to_string()), composed);
//! ```
//!
//! # Storage Model
//!
//! Getting the numeric details right is the whole point of this crate, so
//! they are spelled out here. Subtle changes (rounding direction, where the
//! un-premultiply happens, which packed form the codec encodes) silently
//! break the invariants below.
//!
//! A `Colour` stores a single packed `u32` in
//! `(alpha << 24) | (red << 16) | (green << 8) | blue` order whose colour
//! channels are **premultiplied** by `alpha / 255` -- the representation
//! bitmap layers consume, exposed via [`Colour::pixel_argb`]. The public
//! API speaks **straight** (non-premultiplied) values: every constructor
//! premultiplies on the way in and every getter un-premultiplies on the way
//! out.
//!
//! Three rules keep the arithmetic coherent:
//!
//! - **One quantization rule.** Floats in [0, 1] become 8-bit values by
//!   clamp-then-round-to-nearest, through a single shared helper. No code
//!   path rounds differently from any other.
//! - **Round-to-nearest in both premultiply directions.** This makes
//!   re-premultiplying an un-premultiplied channel exact, which in turn
//!   makes the string codec lossless: `from_string(c.to_string()) == c`
//!   for every colour. (The converse -- recovering constructor inputs at low
//!   alpha -- is limited by what premultiplied 8-bit storage can represent.)
//! - **Clamp, never fail.** Every numeric input is clamped (or wrapped, for
//!   hue) into its valid domain. Construction and parsing always produce a
//!   valid colour; the only fallible API is the opt-in strict [`FromStr`]
//!   parser.
//!
//! Because equality compares the packed premultiplied form, all colours
//! with alpha 0 are equal to each other: premultiplication collapses their
//! RGB to zero. This is intentional and relied upon by the codec.
//!
//! # Thread Safety
//!
//! `Colour` is a plain `Copy` value with no interior mutability; every
//! operation reads `self` and returns a fresh value, so instances can be
//! used freely across threads.
//!
//! [`FromStr`]: std::str::FromStr

pub mod colour;
pub mod pixel;


pub use colour::{Colour, ParseColourError};
pub use pixel::PixelArgb;

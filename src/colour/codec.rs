//! Textual encoding of colours
//!
//! The wire format is 8 uppercase hex digits in `AARRGGBB` order, encoding
//! the packed non-premultiplied ARGB value, fixed width and zero padded.
//! This is the persisted/interchange form (config files, serialized UI
//! themes) and must stay bit-exact across implementations.
//!
//! Two parsers are provided: [`Colour::from_string`] degrades gracefully on
//! malformed input (colour strings often come from user-edited config), and
//! a strict [`FromStr`] implementation reports errors for callers that want
//! validation. Serde support (behind the `serde` feature) serializes the
//! display form and deserializes with the strict parser.

use std::fmt;
use std::str::FromStr;

use super::argb::Colour;
use super::error::ParseColourError;

impl fmt::Display for Colour {
    /// Format as 8 uppercase hex digits, alpha first: `AARRGGBB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.argb())
    }
}

impl Colour {
    /// Parse a colour from the string form produced by `to_string`.
    ///
    /// This parser never fails: leading and trailing whitespace and an
    /// optional `#` are ignored, then up to 8 leading hex digits are
    /// consumed, stopping at the first non-hex character. Whatever was not
    /// parsed reads as zero, so an empty or fully malformed string yields
    /// transparent black.
    ///
    /// Round-trip law: `Colour::from_string(&c.to_string()) == c` for every
    /// colour.
    ///
    /// # Example
    /// ```
    /// use ui_colour::Colour;
    /// assert_eq!(Colour::from_string("FFFF8000"), Colour::from_argb(0xFFFF8000));
    /// assert_eq!(Colour::from_string("bogus"), Colour::default());
    /// ```
    pub fn from_string(encoded: &str) -> Self {
        let trimmed = encoded.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        let mut argb: u32 = 0;
        for c in hex.chars().take(8) {
            match c.to_digit(16) {
                Some(digit) => argb = (argb << 4) | digit,
                None => break,
            }
        }
        Self::from_argb(argb)
    }
}

impl FromStr for Colour {
    type Err = ParseColourError;

    /// Strict parse: exactly 8 hex digits (case-insensitive), optionally
    /// preceded by `#`, surrounding whitespace allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if s.len() != 8 {
            return Err(ParseColourError::InvalidLength(s.len()));
        }
        Ok(Self::from_argb(u32::from_str_radix(s, 16)?))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Colour {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Colour {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_fixed_width_uppercase() {
        assert_eq!(Colour::from_argb(0xFFFF8000).to_string(), "FFFF8000");
        assert_eq!(Colour::from_argb(0x00000001).to_string(), "00000000");
        assert_eq!(Colour::default().to_string(), "00000000");
        assert_eq!(Colour::from_rgba(0xAB, 0xCD, 0xEF, 0xFF).to_string(), "FFABCDEF");
    }

    #[test]
    fn test_from_string_parses_wire_form() {
        let c = Colour::from_string("FFFF8000");
        assert_eq!((c.alpha(), c.red(), c.green(), c.blue()), (255, 255, 128, 0));
        // Lowercase and hash-prefixed forms are accepted
        assert_eq!(Colour::from_string("ffff8000"), c);
        assert_eq!(Colour::from_string("#FFFF8000"), c);
        assert_eq!(Colour::from_string("  FFFF8000  "), c);
    }

    #[test]
    fn test_from_string_malformed_falls_back() {
        // No parsable digits at all: transparent black
        assert_eq!(Colour::from_string(""), Colour::default());
        assert_eq!(Colour::from_string("zzz"), Colour::default());

        // Parsing stops at the first non-hex character
        assert_eq!(Colour::from_string("FFx12345"), Colour::from_argb(0xFF));

        // Short strings read as their value with leading zeros
        assert_eq!(Colour::from_string("1234"), Colour::from_argb(0x1234));

        // Extra digits beyond 8 are ignored
        assert_eq!(
            Colour::from_string("FFFF8000AB"),
            Colour::from_argb(0xFFFF8000)
        );
    }

    #[test]
    fn test_strict_parse() {
        let c: Colour = "#FF123456".parse().unwrap();
        assert_eq!(c, Colour::from_argb(0xFF123456));

        assert!(matches!(
            "FFF".parse::<Colour>(),
            Err(ParseColourError::InvalidLength(3))
        ));
        assert!(matches!(
            "GGGGGGGG".parse::<Colour>(),
            Err(ParseColourError::InvalidHex(_))
        ));
    }

    /// Every representable colour survives to_string/from_string unchanged.
    /// (Exhaustive sweeps live in the crate-level domain tests.)
    #[test]
    fn test_round_trip_samples() {
        for argb in [0x00000000u32, 0xFFFF8000, 0x01020304, 0x80FF0080, 0xFEDCBA98] {
            let c = Colour::from_argb(argb);
            assert_eq!(Colour::from_string(&c.to_string()), c);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let c = Colour::from_argb(0x80FF8000);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, format!("\"{c}\""));
        let back: Colour = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);

        assert!(serde_json::from_str::<Colour>("\"nope\"").is_err());
    }
}

//! Perceptual brighten/darken and contrast derivation
//!
//! All operations here work in HSB space on the straight channel values and
//! preserve alpha. Brightening desaturates proportionally so that fully
//! brightened colours converge on white rather than on a saturated pastel;
//! darkening only scales brightness, since brightness 0 already collapses to
//! black.

use crate::pixel::unit_to_u8;

use super::argb::Colour;

impl Colour {
    /// A brighter version of this colour.
    ///
    /// `amount` 0 leaves the colour bitwise unchanged; 1 produces white.
    /// Brightness moves toward 1 by `(1 - brightness) * amount` while
    /// saturation is scaled by `1 - amount`; both are clamped to [0, 1], so
    /// amounts above 1 behave like 1. Alpha is unchanged.
    pub fn brighter(self, amount: f32) -> Self {
        if amount.is_nan() || amount <= 0.0 {
            return self;
        }
        let (h, s, b) = self.hsb();
        Self::from_hsb_u8(h, s * (1.0 - amount), b + (1.0 - b) * amount, self.alpha())
    }

    /// A darker version of this colour.
    ///
    /// `amount` 0 leaves the colour bitwise unchanged; 1 produces black.
    /// Brightness is scaled by `1 - amount` and clamped; hue, saturation and
    /// alpha are unchanged.
    pub fn darker(self, amount: f32) -> Self {
        if amount.is_nan() || amount <= 0.0 {
            return self;
        }
        let (h, s, b) = self.hsb();
        Self::from_hsb_u8(h, s, b * (1.0 - amount), self.alpha())
    }

    /// A colour that stands out against this one.
    ///
    /// Brightness is pushed toward whichever extreme is farther away (white
    /// when brightness is below 0.5, black otherwise), desaturating
    /// proportionally along the way. `amount` 0 returns the colour
    /// unchanged; 1 returns pure white or pure black. Alpha is unchanged.
    pub fn contrasting(self, amount: f32) -> Self {
        if amount.is_nan() || amount <= 0.0 {
            return self;
        }
        let (h, s, b) = self.hsb();
        let target = if b < 0.5 { 1.0 } else { 0.0 };
        Self::from_hsb_u8(h, s * (1.0 - amount), b + (target - b) * amount, self.alpha())
    }

    /// An opaque colour contrasting with both of the given colours.
    ///
    /// Returns pure white when the two brightnesses sum to less than 1, and
    /// pure black otherwise. For two equally bright inputs this reduces to:
    /// white when that brightness is below 0.5, black otherwise.
    pub fn contrasting_pair(colour1: Colour, colour2: Colour) -> Self {
        if colour1.brightness() + colour2.brightness() < 1.0 {
            Self::from_rgb(255, 255, 255)
        } else {
            Self::from_rgb(0, 0, 0)
        }
    }

    /// An opaque grey with the given brightness in [0, 1].
    #[inline]
    pub fn grey_level(brightness: f32) -> Self {
        let level = unit_to_u8(brightness);
        Self::from_rgb(level, level, level)
    }
}

//! RGB↔HSB conversion and hue/saturation/brightness operations
//!
//! The conversions implement the standard HSV sector algorithm over the
//! straight (non-premultiplied) 8-bit channels, computed in `f32`. Hue is a
//! cyclic value normalized to [0, 1) rather than degrees; saturation and
//! brightness are in [0, 1]. Converting RGB to HSB and back reproduces the
//! original channels to within 1 LSB, and exactly for achromatic and
//! primary-aligned colours.

use crate::pixel::unit_to_u8;

use super::argb::Colour;

/// Wrap a cyclic value into [0, 1). Non-finite input maps to 0.
pub(super) fn wrap_unit(value: f32) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    let wrapped = value - value.floor();
    // Tiny negatives can wrap to exactly 1.0 after rounding.
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Convert straight 8-bit RGB channels to (hue, saturation, brightness).
///
/// Hue is in [0, 1) and is 0 for achromatic colours; saturation is 0 when
/// brightness is 0.
pub(crate) fn rgb_to_hsb(red: u8, green: u8, blue: u8) -> (f32, f32, f32) {
    let r = red as f32 / 255.0;
    let g = green as f32 / 255.0;
    let b = blue as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let brightness = max;
    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (hue, saturation, brightness)
}

/// Convert (hue, saturation, brightness) to straight 8-bit RGB channels.
///
/// Hue wraps into [0, 1); saturation and brightness are clamped to [0, 1].
/// Channels are quantized round-to-nearest.
pub(crate) fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> (u8, u8, u8) {
    let s = saturation.clamp(0.0, 1.0);
    let v = brightness.clamp(0.0, 1.0);
    let h = wrap_unit(hue) * 6.0;

    // h < 6.0 always holds, the clamp just guards the float-to-int cast
    let sector = (h.floor() as i32).clamp(0, 5);
    let f = h - h.floor();

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    (unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
}

impl Colour {
    /// Hue, saturation and brightness, each in [0, 1] (hue in [0, 1)).
    #[inline]
    pub fn hsb(self) -> (f32, f32, f32) {
        rgb_to_hsb(self.red(), self.green(), self.blue())
    }

    /// Hue in [0, 1); 0 for achromatic colours.
    #[inline]
    pub fn hue(self) -> f32 {
        self.hsb().0
    }

    /// Saturation in [0, 1].
    #[inline]
    pub fn saturation(self) -> f32 {
        self.hsb().1
    }

    /// Brightness in [0, 1].
    #[inline]
    pub fn brightness(self) -> f32 {
        self.hsb().2
    }

    /// The same colour with a different hue; saturation, brightness and
    /// alpha are preserved.
    #[inline]
    pub fn with_hue(self, hue: f32) -> Self {
        let (_, s, b) = self.hsb();
        Self::from_hsb_u8(hue, s, b, self.alpha())
    }

    /// The same colour with a different saturation; hue, brightness and
    /// alpha are preserved.
    #[inline]
    pub fn with_saturation(self, saturation: f32) -> Self {
        let (h, _, b) = self.hsb();
        Self::from_hsb_u8(h, saturation, b, self.alpha())
    }

    /// The same colour with a different brightness; hue, saturation and
    /// alpha are preserved.
    #[inline]
    pub fn with_brightness(self, brightness: f32) -> Self {
        let (h, s, _) = self.hsb();
        Self::from_hsb_u8(h, s, brightness, self.alpha())
    }

    /// The same colour with its hue rotated by `amount` turns.
    ///
    /// The new hue is `(hue + amount) mod 1.0`; negative amounts wrap up
    /// into [0, 1). Whole-turn rotations return the colour bitwise
    /// unchanged.
    pub fn with_rotated_hue(self, amount: f32) -> Self {
        let turn = wrap_unit(amount);
        if turn == 0.0 {
            return self;
        }
        let (h, s, b) = self.hsb();
        Self::from_hsb_u8(wrap_unit(h + turn), s, b, self.alpha())
    }

    /// The same colour with its saturation multiplied by `multiplier` and
    /// clamped to [0, 1].
    #[inline]
    pub fn with_multiplied_saturation(self, multiplier: f32) -> Self {
        let (h, s, b) = self.hsb();
        Self::from_hsb_u8(h, s * multiplier, b, self.alpha())
    }

    /// The same colour with its brightness multiplied by `multiplier` and
    /// clamped to [0, 1].
    #[inline]
    pub fn with_multiplied_brightness(self, multiplier: f32) -> Self {
        let (h, s, b) = self.hsb();
        Self::from_hsb_u8(h, s, b * multiplier, self.alpha())
    }
}

//! Core colour type: construction, channel access, alpha and compositing

use std::fmt;

use crate::pixel::{unit_to_u8, PixelArgb};

use super::hsb;

/// An ARGB colour with 8 bits per channel.
///
/// The channels are stored premultiplied (each colour channel scaled by
/// `alpha / 255`) inside a [`PixelArgb`]; every public accessor
/// un-premultiplies before returning, so constructors and getters agree on
/// straight channel values. Both conversions round to nearest, which makes
/// the hex string codec lossless. Note that premultiplied 8-bit storage
/// cannot distinguish all straight values at low alpha: `from_rgba(r, g, b, a)`
/// getters reproduce `r`, `g`, `b` exactly when `a` is 255, and to the
/// nearest representable value otherwise.
///
/// Equality compares the packed premultiplied form, so any two colours with
/// alpha 0 are equal regardless of their stated RGB.
///
/// The default value is fully transparent black.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pixel: PixelArgb,
}

impl Colour {
    /// Create a colour from a packed 32-bit ARGB value.
    ///
    /// The layout is `(alpha << 24) | (red << 16) | (green << 8) | blue`,
    /// with straight (non-premultiplied) colour channels. This is the same
    /// packed form produced by [`argb`](Colour::argb) and encoded by the
    /// string codec.
    ///
    /// # Example
    /// ```
    /// use ui_colour::Colour;
    /// let c = Colour::from_argb(0xFFFF8000);
    /// assert_eq!((c.alpha(), c.red(), c.green(), c.blue()), (255, 255, 128, 0));
    /// ```
    #[inline]
    pub fn from_argb(argb: u32) -> Self {
        Self {
            pixel: PixelArgb::from_unpremultiplied(
                (argb >> 24) as u8,
                (argb >> 16) as u8,
                (argb >> 8) as u8,
                argb as u8,
            ),
        }
    }

    /// Create an opaque colour from 8-bit red, green and blue values.
    #[inline]
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba(red, green, blue, 255)
    }

    /// Create a colour from 8-bit red, green, blue and alpha values.
    #[inline]
    pub fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            pixel: PixelArgb::from_unpremultiplied(alpha, red, green, blue),
        }
    }

    /// Create a colour from 8-bit RGB values and a floating-point alpha.
    ///
    /// The alpha is clamped to [0, 1] and quantized round-to-nearest.
    #[inline]
    pub fn from_rgb_with_alpha(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self::from_rgba(red, green, blue, unit_to_u8(alpha))
    }

    /// Create a colour from hue, saturation, brightness and alpha, all in [0, 1].
    ///
    /// Out-of-range inputs are clamped (hue wraps). See the module docs of
    /// the HSB operations for the conversion rules.
    #[inline]
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        Self::from_hsb_u8(hue, saturation, brightness, unit_to_u8(alpha))
    }

    /// Create a colour from hue, saturation and brightness in [0, 1] and an
    /// 8-bit alpha.
    #[inline]
    pub fn from_hsb_u8(hue: f32, saturation: f32, brightness: f32, alpha: u8) -> Self {
        let (red, green, blue) = hsb::hsb_to_rgb(hue, saturation, brightness);
        Self::from_rgba(red, green, blue, alpha)
    }

    /// Alpha channel: 0 is fully transparent, 255 fully opaque.
    #[inline]
    pub fn alpha(self) -> u8 {
        self.pixel.alpha()
    }

    /// Straight (non-premultiplied) red channel.
    #[inline]
    pub fn red(self) -> u8 {
        self.pixel.unpremultiplied_red()
    }

    /// Straight (non-premultiplied) green channel.
    #[inline]
    pub fn green(self) -> u8 {
        self.pixel.unpremultiplied_green()
    }

    /// Straight (non-premultiplied) blue channel.
    #[inline]
    pub fn blue(self) -> u8 {
        self.pixel.unpremultiplied_blue()
    }

    /// Alpha as a float in [0, 1].
    #[inline]
    pub fn alpha_f32(self) -> f32 {
        self.alpha() as f32 / 255.0
    }

    /// Red as a float in [0, 1].
    #[inline]
    pub fn red_f32(self) -> f32 {
        self.red() as f32 / 255.0
    }

    /// Green as a float in [0, 1].
    #[inline]
    pub fn green_f32(self) -> f32 {
        self.green() as f32 / 255.0
    }

    /// Blue as a float in [0, 1].
    #[inline]
    pub fn blue_f32(self) -> f32 {
        self.blue() as f32 / 255.0
    }

    /// The packed 32-bit ARGB value with straight colour channels.
    ///
    /// This is the wire form used by [`from_argb`](Colour::from_argb) and by
    /// the string codec.
    #[inline]
    pub fn argb(self) -> u32 {
        ((self.alpha() as u32) << 24)
            | ((self.red() as u32) << 16)
            | ((self.green() as u32) << 8)
            | self.blue() as u32
    }

    /// The premultiplied pixel value, as consumed by bitmap layers.
    ///
    /// This is the only place the premultiplied channels are exposed
    /// directly.
    #[inline]
    pub fn pixel_argb(self) -> PixelArgb {
        self.pixel
    }

    /// True if alpha is 255.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.alpha() == 255
    }

    /// True if alpha is 0.
    #[inline]
    pub fn is_transparent(self) -> bool {
        self.alpha() == 0
    }

    /// The same colour with a new 8-bit alpha.
    #[inline]
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self::from_rgba(self.red(), self.green(), self.blue(), alpha)
    }

    /// The same colour with a new alpha given as a float in [0, 1].
    #[inline]
    pub fn with_alpha_f32(self, alpha: f32) -> Self {
        self.with_alpha(unit_to_u8(alpha))
    }

    /// The same colour with its alpha multiplied by `multiplier`.
    ///
    /// The result is rounded and clamped to [0, 255].
    #[inline]
    pub fn with_multiplied_alpha(self, multiplier: f32) -> Self {
        self.with_alpha(unit_to_u8(self.alpha_f32() * multiplier))
    }

    /// Alpha-composite `foreground` on top of this colour.
    ///
    /// Standard "over" compositing, computed in premultiplied space. A fully
    /// opaque foreground replaces the background; a fully transparent one
    /// leaves it unchanged.
    #[inline]
    pub fn overlaid_with(self, foreground: Colour) -> Self {
        Self {
            pixel: foreground.pixel.composited_over(self.pixel),
        }
    }
}

impl fmt::Debug for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Colour(\"{self}\")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_transparent_black() {
        let c = Colour::default();
        assert_eq!(c.argb(), 0);
        assert!(c.is_transparent());
        assert!(!c.is_opaque());
    }

    #[test]
    fn test_packed_argb_unpacking() {
        let c = Colour::from_argb(0xFFFF8000);
        assert_eq!(c.alpha(), 255);
        assert_eq!(c.red(), 255);
        assert_eq!(c.green(), 128);
        assert_eq!(c.blue(), 0);
        assert_eq!(c.argb(), 0xFFFF8000);
    }

    #[test]
    fn test_rgb_defaults_to_opaque() {
        let c = Colour::from_rgb(10, 20, 30);
        assert_eq!(c.alpha(), 255);
        assert!(c.is_opaque());
        assert_eq!((c.red(), c.green(), c.blue()), (10, 20, 30));
    }

    /// Opaque colours round-trip every channel exactly through the
    /// premultiplied storage.
    #[test]
    fn test_opaque_channel_round_trip() {
        for v in 0..=255u8 {
            let c = Colour::from_rgba(v, 255 - v, v / 2, 255);
            assert_eq!((c.red(), c.green(), c.blue()), (v, 255 - v, v / 2));
        }
    }

    #[test]
    fn test_float_alpha_is_quantized_and_clamped() {
        assert_eq!(Colour::from_rgb_with_alpha(1, 2, 3, 0.5).alpha(), 128);
        assert_eq!(Colour::from_rgb_with_alpha(1, 2, 3, -1.0).alpha(), 0);
        assert_eq!(Colour::from_rgb_with_alpha(1, 2, 3, 7.0).alpha(), 255);
    }

    #[test]
    fn test_float_accessors() {
        let c = Colour::from_rgba(255, 0, 128, 255);
        assert_eq!(c.red_f32(), 1.0);
        assert_eq!(c.green_f32(), 0.0);
        assert!((c.blue_f32() - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.alpha_f32(), 1.0);
    }

    /// Premultiplication collapses RGB at alpha 0, so all fully transparent
    /// colours compare equal.
    #[test]
    fn test_transparent_colours_are_equal() {
        let a = Colour::from_rgba(200, 100, 50, 0);
        let b = Colour::from_rgba(1, 2, 3, 0);
        assert_eq!(a, b);
        assert_eq!(a, Colour::default());
    }

    #[test]
    fn test_with_alpha_keeps_rgb() {
        let c = Colour::from_rgb(40, 80, 120).with_alpha(255);
        assert_eq!((c.red(), c.green(), c.blue()), (40, 80, 120));

        let half = Colour::from_rgb(40, 80, 120).with_alpha_f32(0.5);
        assert_eq!(half.alpha(), 128);
    }

    #[test]
    fn test_with_multiplied_alpha() {
        let c = Colour::from_rgba(10, 20, 30, 200);
        assert_eq!(c.with_multiplied_alpha(0.5).alpha(), 100);
        assert_eq!(c.with_multiplied_alpha(0.0).alpha(), 0);
        assert_eq!(c.with_multiplied_alpha(10.0).alpha(), 255);
        assert_eq!(c.with_multiplied_alpha(1.0).alpha(), 200);
    }

    #[test]
    fn test_overlay_boundary_alphas() {
        let background = Colour::from_rgba(10, 20, 30, 255);
        let opaque = Colour::from_rgba(200, 150, 100, 255);
        let clear = Colour::from_rgba(200, 150, 100, 0);

        assert_eq!(background.overlaid_with(opaque), opaque);
        assert_eq!(background.overlaid_with(clear), background);
    }

    /// Bit-exact "over" result derived from the premultiplied blend formula:
    /// blue at alpha 128 over opaque red gives (127, 0, 128) at alpha 255.
    #[test]
    fn test_overlay_half_blue_over_red() {
        let red = Colour::from_rgba(255, 0, 0, 255);
        let blue = Colour::from_rgba(0, 0, 255, 128);
        assert_eq!(red.overlaid_with(blue), Colour::from_rgba(127, 0, 128, 255));
    }

    #[test]
    fn test_pixel_export_is_premultiplied() {
        let c = Colour::from_rgba(255, 128, 0, 128);
        let pixel = c.pixel_argb();
        assert_eq!(pixel.alpha(), 128);
        assert_eq!(pixel.red(), 128);
        assert_eq!(pixel.green(), 64);
        assert_eq!(pixel.blue(), 0);
    }

    #[test]
    fn test_debug_shows_hex() {
        let c = Colour::from_argb(0x80FF8000);
        assert_eq!(format!("{c:?}"), format!("Colour(\"{c}\")"));
    }
}

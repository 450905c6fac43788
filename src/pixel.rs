//! Premultiplied ARGB pixel type
//!
//! This is the canonical storage representation of a [`Colour`](crate::Colour)
//! and the value handed to bitmap/rendering layers. The colour channels are
//! premultiplied by alpha so that "over" compositing is a single linear blend
//! per channel.

/// A packed 32-bit ARGB pixel with premultiplied colour channels.
///
/// The bit layout is `(alpha << 24) | (red << 16) | (green << 8) | blue`,
/// where red, green and blue have already been scaled by `alpha / 255`
/// (round-to-nearest). A premultiplied channel therefore never exceeds the
/// alpha channel; [`from_premultiplied`](PixelArgb::from_premultiplied)
/// clamps raw input to restore that invariant.
///
/// Use [`unpremultiplied_red`](PixelArgb::unpremultiplied_red) and friends to
/// recover the straight (non-premultiplied) channel values. Both conversion
/// directions use round-to-nearest integer division, which makes
/// re-premultiplying an un-premultiplied channel exact:
/// `multiply(unmultiply(p, a), a) == p` for every valid `p <= a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelArgb {
    argb: u32,
}

/// Round-to-nearest division by 255, exact for all `x <= 255 * 255`.
#[inline]
const fn div_round_255(x: u32) -> u32 {
    (x + 127) / 255
}

/// Premultiply a straight 8-bit channel by an 8-bit alpha, round-to-nearest.
#[inline]
pub(crate) const fn multiply(channel: u8, alpha: u8) -> u8 {
    div_round_255(channel as u32 * alpha as u32) as u8
}

/// Recover a straight 8-bit channel from a premultiplied one, round-to-nearest.
///
/// Alpha 0 yields 0 (the premultiplied channel carries no colour information).
#[inline]
pub(crate) const fn unmultiply(channel: u8, alpha: u8) -> u8 {
    if alpha == 0 {
        0
    } else {
        let a = alpha as u32;
        let v = (channel as u32 * 255 + a / 2) / a;
        // Only reachable when channel > alpha, i.e. raw packed input.
        if v > 255 { 255 } else { v as u8 }
    }
}

/// Quantize a float in [0, 1] to 8 bits: clamp, scale, round-to-nearest.
///
/// Every construction and mutation path that accepts floats funnels through
/// this single rule so that no two code paths round differently.
#[inline]
pub(crate) fn unit_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl PixelArgb {
    /// Create a pixel from an already-premultiplied packed ARGB value.
    ///
    /// Each colour channel is clamped to the alpha channel, so any `u32` is
    /// accepted and the premultiplied invariant always holds afterwards.
    #[inline]
    pub fn from_premultiplied(argb: u32) -> Self {
        let alpha = (argb >> 24) as u8;
        let clamp = |c: u32| -> u32 {
            let c = c as u8;
            if c > alpha { alpha as u32 } else { c as u32 }
        };
        Self {
            argb: ((alpha as u32) << 24)
                | (clamp(argb >> 16) << 16)
                | (clamp(argb >> 8) << 8)
                | clamp(argb),
        }
    }

    /// Create a pixel by premultiplying straight 8-bit channels.
    #[inline]
    pub fn from_unpremultiplied(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            argb: ((alpha as u32) << 24)
                | ((multiply(red, alpha) as u32) << 16)
                | ((multiply(green, alpha) as u32) << 8)
                | multiply(blue, alpha) as u32,
        }
    }

    /// The packed premultiplied ARGB value.
    #[inline]
    pub fn argb(self) -> u32 {
        self.argb
    }

    /// Alpha channel (0 = transparent, 255 = opaque).
    #[inline]
    pub fn alpha(self) -> u8 {
        (self.argb >> 24) as u8
    }

    /// Premultiplied red channel.
    #[inline]
    pub fn red(self) -> u8 {
        (self.argb >> 16) as u8
    }

    /// Premultiplied green channel.
    #[inline]
    pub fn green(self) -> u8 {
        (self.argb >> 8) as u8
    }

    /// Premultiplied blue channel.
    #[inline]
    pub fn blue(self) -> u8 {
        self.argb as u8
    }

    /// Straight (non-premultiplied) red channel.
    #[inline]
    pub fn unpremultiplied_red(self) -> u8 {
        unmultiply(self.red(), self.alpha())
    }

    /// Straight (non-premultiplied) green channel.
    #[inline]
    pub fn unpremultiplied_green(self) -> u8 {
        unmultiply(self.green(), self.alpha())
    }

    /// Straight (non-premultiplied) blue channel.
    #[inline]
    pub fn unpremultiplied_blue(self) -> u8 {
        unmultiply(self.blue(), self.alpha())
    }

    /// Porter-Duff "over": composite `self` on top of `background`.
    ///
    /// Computed entirely in premultiplied space with round-to-nearest:
    ///
    /// ```text
    /// outA = fgA + round(bgA * (255 - fgA) / 255)
    /// outC = fgC + round(bgC * (255 - fgA) / 255)
    /// ```
    ///
    /// Because every premultiplied channel is bounded by its alpha, the
    /// output channels are bounded by the output alpha; in particular an
    /// output alpha of 0 forces the output RGB to 0.
    #[inline]
    pub fn composited_over(self, background: PixelArgb) -> PixelArgb {
        let inverse = 255 - self.alpha() as u32;
        let blend = |fg: u8, bg: u8| fg as u32 + div_round_255(bg as u32 * inverse);
        PixelArgb {
            argb: (blend(self.alpha(), background.alpha()) << 24)
                | (blend(self.red(), background.red()) << 16)
                | (blend(self.green(), background.green()) << 8)
                | blend(self.blue(), background.blue()),
        }
    }
}

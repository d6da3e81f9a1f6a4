//! 8-bit RGBA colors.

/// An 8-bit per channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create from an `[r, g, b, a]` array.
    pub const fn from_array(c: [u8; 4]) -> Self {
        Self { r: c[0], g: c[1], b: c[2], a: c[3] }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    // Common colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
}

/// Mix `src` over `dst` with an 8-bit coverage value.
///
/// All four channels are interpolated, so blending onto an opaque
/// destination with an opaque source stays opaque.
pub fn blend8(dst: Color8, alpha: u8, src: Color8) -> Color8 {
    let q = alpha as u16;
    let nq = 255 - q;
    let mix = |d: u8, s: u8| ((d as u16 * nq + s as u16 * q) / 255) as u8;
    Color8 {
        r: mix(dst.r, src.r),
        g: mix(dst.g, src.g),
        b: mix(dst.b, src.b),
        a: mix(dst.a, src.a),
    }
}

/// Scale the color channels by `1 + f`, saturating at 255. Alpha becomes opaque.
pub fn lighten(c: Color8, f: f32) -> Color8 {
    let k = 1.0 + f;
    let scale = |v: u8| (v as f32 * k).clamp(0.0, 255.0) as u8;
    Color8::rgb(scale(c.r), scale(c.g), scale(c.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_extremes() {
        let dst = Color8::rgb(10, 20, 30);
        let src = Color8::rgb(200, 100, 50);
        assert_eq!(blend8(dst, 0, src), dst);
        assert_eq!(blend8(dst, 255, src), src);
    }

    #[test]
    fn test_blend_half() {
        let out = blend8(Color8::BLACK, 128, Color8::WHITE);
        assert_eq!(out.r, 128);
        assert_eq!(out.a, 255);
    }

    #[test]
    fn test_lighten_saturates() {
        let c = lighten(Color8::rgb(200, 100, 0), 0.5);
        assert_eq!(c, Color8::rgb(255, 150, 0));
    }
}

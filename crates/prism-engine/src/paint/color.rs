use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA color.
///
/// Channels are not clamped on construction: values above `1.0` are legal and
/// saturate when written to a unorm render target. The layout matches a WGSL
/// `vec4<f32>`, so a `Color` can be uploaded to a uniform as-is.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray with all three channels set to `v`.
    #[inline]
    pub const fn gray(v: f32) -> Self {
        Self::rgba(v, v, v, 1.0)
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_is_opaque() {
        assert_eq!(Color::gray(0.25), Color::rgba(0.25, 0.25, 0.25, 1.0));
    }

    #[test]
    fn bytes_match_vec4_layout() {
        let c = Color::rgba(1.0, 2.0, 3.0, 4.0);
        assert_eq!(bytemuck::bytes_of(&c).len(), 16);
        assert_eq!(bytemuck::cast::<Color, [f32; 4]>(c), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn converts_to_wgpu_clear_color() {
        let w: wgpu::Color = Color::BLACK.into();
        assert_eq!(w, wgpu::Color::BLACK);
    }
}

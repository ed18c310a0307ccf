//! Static scene geometry.
//!
//! All positions are in normalized device coordinates and uploaded once.
//! The scene is drawn as a fixed sequence of [`Layer`]s, each a contiguous
//! vertex range with its own color.

use std::ops::Range;

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const fn v(x: f32, y: f32) -> Vertex {
    Vertex { pos: [x, y] }
}

pub const VERTEX_COUNT: usize = 66;

#[rustfmt::skip]
pub const VERTICES: [Vertex; VERTEX_COUNT] = [
    // background
    v(-1.0, -1.0), v( 1.0, -1.0), v( 1.0,  1.0),
    v( 1.0,  1.0), v(-1.0,  1.0), v(-1.0, -1.0),

    // prism
    v(-0.5, -0.5), v( 0.5, -0.5), v( 0.0,  0.5),

    // incoming white beam
    v(-1.0, -0.1), v(-1.0, -0.2), v(-0.25, 0.0),

    // fan inside the prism, red → violet
    v(-0.25, 0.0), v(0.20,  0.10), v(0.21,  0.08),
    v(-0.25, 0.0), v(0.21,  0.08), v(0.22,  0.06),
    v(-0.25, 0.0), v(0.22,  0.06), v(0.23,  0.04),
    v(-0.25, 0.0), v(0.23,  0.04), v(0.24,  0.02),
    v(-0.25, 0.0), v(0.24,  0.02), v(0.25,  0.00),
    v(-0.25, 0.0), v(0.25,  0.00), v(0.26, -0.02),

    // bands leaving the prism, red → violet
    v(0.20,  0.10), v(1.0,  0.0), v(1.0, -0.1),
    v(1.0,  -0.1),  v(0.21, 0.08), v(0.20, 0.10),

    v(0.21,  0.08), v(1.0, -0.1), v(1.0, -0.2),
    v(0.21,  0.08), v(1.0, -0.2), v(0.22, 0.06),

    v(0.22,  0.06), v(1.0, -0.2), v(1.0, -0.3),
    v(0.23,  0.04), v(1.0, -0.3), v(0.22, 0.06),

    v(0.23,  0.04), v(1.0, -0.3), v(1.0, -0.4),
    v(0.24,  0.02), v(1.0, -0.4), v(0.23, 0.04),

    v(0.24,  0.02), v(1.0, -0.4), v(1.0, -0.5),
    v(0.25,  0.00), v(1.0, -0.5), v(0.24, 0.02),

    v(0.25,  0.00), v(1.0, -0.5), v(1.0, -0.6),
    v(0.26, -0.02), v(1.0, -0.6), v(0.25, 0.00),
];

/// One draw call of the scene, in draw order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Layer {
    Background,
    Prism,
    WhiteBeam,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    RedTrail,
    OrangeTrail,
    YellowTrail,
    GreenTrail,
    BlueTrail,
    VioletTrail,
}

impl Layer {
    pub const COUNT: usize = 15;

    pub const ALL: [Layer; Self::COUNT] = [
        Layer::Background,
        Layer::Prism,
        Layer::WhiteBeam,
        Layer::Red,
        Layer::Orange,
        Layer::Yellow,
        Layer::Green,
        Layer::Blue,
        Layer::Violet,
        Layer::RedTrail,
        Layer::OrangeTrail,
        Layer::YellowTrail,
        Layer::GreenTrail,
        Layer::BlueTrail,
        Layer::VioletTrail,
    ];

    /// Vertex range of this layer inside [`VERTICES`].
    pub const fn vertices(self) -> Range<u32> {
        match self {
            Layer::Background => 0..6,
            Layer::Prism => 6..9,
            Layer::WhiteBeam => 9..12,
            Layer::Red => 12..15,
            Layer::Orange => 15..18,
            Layer::Yellow => 18..21,
            Layer::Green => 21..24,
            Layer::Blue => 24..27,
            Layer::Violet => 27..30,
            Layer::RedTrail => 30..36,
            Layer::OrangeTrail => 36..42,
            Layer::YellowTrail => 42..48,
            Layer::GreenTrail => 48..54,
            Layer::BlueTrail => 54..60,
            Layer::VioletTrail => 60..66,
        }
    }

    /// Position in [`Layer::ALL`], also the uniform slot index.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_data_is_132_floats() {
        let floats: &[f32] = bytemuck::cast_slice(&VERTICES);
        assert_eq!(floats.len(), 6 * 22);
    }

    #[test]
    fn layers_tile_the_buffer_in_order() {
        let mut next = 0;
        for layer in Layer::ALL {
            let r = layer.vertices();
            assert_eq!(r.start, next, "{layer:?} does not continue the previous layer");
            assert!(r.end > r.start);
            assert_eq!((r.end - r.start) % 3, 0, "{layer:?} is not whole triangles");
            next = r.end;
        }
        assert_eq!(next as usize, VERTEX_COUNT);
    }

    #[test]
    fn index_matches_draw_order() {
        for (i, layer) in Layer::ALL.into_iter().enumerate() {
            assert_eq!(layer.index(), i);
        }
    }

    #[test]
    fn everything_is_on_screen() {
        for v in VERTICES {
            assert!(v.pos.iter().all(|c| (-1.0..=1.0).contains(c)), "{v:?}");
        }
    }

    #[test]
    fn spectrum_fans_out_from_the_beam_tip() {
        let tip = VERTICES[Layer::WhiteBeam.vertices().end as usize - 1];
        for layer in [Layer::Red, Layer::Orange, Layer::Yellow, Layer::Green, Layer::Blue, Layer::Violet] {
            assert_eq!(VERTICES[layer.vertices().start as usize], tip);
        }
    }
}

//! Light-dispersion animation.
//!
//! Five scalars drive every animated color in the scene:
//!
//! | Scalar | Start | Meaning |
//! |--------|-------|---------|
//! | `a` | 0 | white beam brightness, rises to 2 |
//! | `b` | 1 | wash-out of the spectrum inside the prism, falls to 0 |
//! | `c` | 1 | green channel of orange, falls to 0.5 |
//! | `d` | 0 | brightness of the bands leaving the prism, rises to 2 |
//! | `e` | 0 | green channel of the orange band, rises to 0.5 |
//!
//! [`Spectrum::step`] advances them by one frame; once `d` reaches 2 the
//! cycle starts over.

use prism_engine::paint::Color;

use crate::scene::Layer;

const BEAM_STEP: f32 = 0.01;
const SPLIT_STEP: f32 = 0.01;
const ORANGE_STEP: f32 = 0.005;
const TRAIL_STEP: f32 = 0.01;

const BEAM_FULL: f32 = 2.0;
const TRAIL_FULL: f32 = 2.0;
const ORANGE_LIMIT: f32 = 0.5;

/// Stage of the animation cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// The white beam brightens.
    Illuminating,
    /// The colors inside the prism saturate.
    Dispersing,
    /// The bands leaving the prism brighten.
    Projecting,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spectrum {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
}

impl Default for Spectrum {
    fn default() -> Self {
        Self {
            a: 0.0,
            b: 1.0,
            c: 1.0,
            d: 0.0,
            e: 0.0,
        }
    }
}

impl Spectrum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances one frame. Returns `true` when the cycle wrapped back to the start.
    ///
    /// The rules run in order and each sees the values written by the ones
    /// before it.
    pub fn step(&mut self) -> bool {
        if self.a <= BEAM_FULL {
            self.a += BEAM_STEP;
        }
        if self.a >= BEAM_FULL && self.b >= 0.0 {
            self.b -= SPLIT_STEP;
        }
        if self.a >= BEAM_FULL && self.c > ORANGE_LIMIT {
            self.c -= ORANGE_STEP;
        }
        if self.b <= 0.0 && self.d <= TRAIL_FULL {
            self.d += TRAIL_STEP;
        }
        if self.b <= 0.0 && self.e < ORANGE_LIMIT {
            self.e += ORANGE_STEP;
        }

        if self.d >= TRAIL_FULL {
            *self = Self::default();
            return true;
        }
        false
    }

    pub fn phase(&self) -> Phase {
        if self.b <= 0.0 {
            Phase::Projecting
        } else if self.a >= BEAM_FULL {
            Phase::Dispersing
        } else {
            Phase::Illuminating
        }
    }

    /// Uniform color of `layer` for the current frame.
    pub fn color(&self, layer: Layer) -> Color {
        let Self { a, b, c, d, e } = *self;
        match layer {
            Layer::Background => Color::BLACK,
            Layer::Prism => Color::rgba(1.0, 1.0, 1.0, 0.5),
            Layer::WhiteBeam => Color::gray(a),

            Layer::Red => Color::rgba(1.0, b, b, 1.0),
            Layer::Orange if a > BEAM_FULL => Color::rgba(1.0, c, b, 1.0),
            Layer::Orange => Color::WHITE,
            Layer::Yellow => Color::rgba(1.0, 1.0, b, 1.0),
            Layer::Green => Color::rgba(b, 1.0, b, 1.0),
            Layer::Blue => Color::rgba(b, b, 1.0, 1.0),
            Layer::Violet => Color::rgba(1.0, b, 1.0, 1.0),

            Layer::RedTrail => Color::rgba(d, 0.0, 0.0, 1.0),
            Layer::OrangeTrail if b < 0.0 => Color::rgba(d, e, 0.0, 1.0),
            Layer::OrangeTrail => Color::BLACK,
            Layer::YellowTrail => Color::rgba(d, d, 0.0, 1.0),
            Layer::GreenTrail => Color::rgba(0.0, d, 0.0, 1.0),
            Layer::BlueTrail => Color::rgba(0.0, 0.0, d, 1.0),
            Layer::VioletTrail => Color::rgba(d, 0.0, d, 1.0),
        }
    }

    /// Colors of every layer, indexed by [`Layer::index`].
    pub fn colors(&self) -> [Color; Layer::COUNT] {
        Layer::ALL.map(|layer| self.color(layer))
    }
}

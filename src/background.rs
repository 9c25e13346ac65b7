/// Static starfield drawn behind everything else.

use rand::Rng;

/// Roughly one star per this many cells.
const CELLS_PER_STAR: usize = 40;

const STAR_GLYPHS: [char; 3] = ['.', '·', '*'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Star {
    pub x: u16,
    pub y: u16,
    pub glyph: char,
}

#[derive(Clone, Debug, Default)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Scatter stars over a `width` x `height` playfield.  All randomness
    /// comes through `rng`, so a seeded RNG gives the same sky every time.
    pub fn generate(width: u16, height: u16, rng: &mut impl Rng) -> Self {
        if width == 0 || height == 0 {
            return Starfield::default();
        }
        let count = (width as usize * height as usize) / CELLS_PER_STAR;
        let stars = (0..count)
            .map(|_| Star {
                x: rng.gen_range(0..width),
                y: rng.gen_range(0..height),
                glyph: STAR_GLYPHS[rng.gen_range(0..STAR_GLYPHS.len())],
            })
            .collect();
        Starfield { stars }
    }
}

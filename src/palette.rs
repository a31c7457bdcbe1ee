use crate::color::Color;
use rand::Rng;

/// Swatch count the toolbar layout is sized for: 12 columns by 3 rows.
pub const PALETTE_LEN: usize = 36;

/// The fixed palette, reds through grays row by row.
pub fn fixed_palette() -> Vec<Color> {
    vec![
        Color::rgb(0xff, 0x00, 0x00),
        Color::rgb(0xff, 0x80, 0x00),
        Color::rgb(0xff, 0xff, 0x00),
        Color::rgb(0x00, 0xff, 0x00),
        Color::rgb(0x00, 0xff, 0x80),
        Color::rgb(0x00, 0x00, 0xff),
        Color::rgb(0x80, 0x00, 0xff),
        Color::rgb(0xff, 0x00, 0xff),
        Color::rgb(0xc0, 0xc0, 0xc0),
        Color::rgb(0x80, 0x80, 0x80),
        Color::rgb(0x40, 0x40, 0x40),
        Color::rgb(0x00, 0x00, 0x00),
        Color::rgb(0xff, 0x40, 0x00),
        Color::rgb(0xff, 0xa0, 0x00),
        Color::rgb(0xff, 0xff, 0x80),
        Color::rgb(0x00, 0xff, 0x40),
        Color::rgb(0x00, 0x80, 0xff),
        Color::rgb(0x80, 0x40, 0xff),
        Color::rgb(0xff, 0x40, 0xff),
        Color::rgb(0xe0, 0xe0, 0xe0),
        Color::rgb(0xa0, 0xa0, 0xa0),
        Color::rgb(0x60, 0x60, 0x60),
        Color::rgb(0xff, 0x00, 0x80),
        Color::rgb(0xff, 0x00, 0x40),
        Color::rgb(0xff, 0xc0, 0x00),
        Color::rgb(0x80, 0xff, 0x00),
        Color::rgb(0x00, 0xff, 0xc0),
        Color::rgb(0x00, 0x40, 0xff),
        Color::rgb(0xc0, 0x00, 0xff),
        Color::rgb(0xff, 0xc0, 0xff),
        Color::rgb(0x90, 0x90, 0x90),
        Color::rgb(0x30, 0x30, 0x30),
        Color::rgb(0x40, 0x80, 0x00),
        Color::rgb(0x80, 0x40, 0x00),
        Color::rgb(0x80, 0xff, 0x80),
        Color::rgb(0x00, 0x80, 0x80),
    ]
}

/// A palette of the same shape with random colors, for the randomized
/// palette setting.
pub fn random_palette<R: Rng>(rng: &mut R) -> Vec<Color> {
    (0..PALETTE_LEN)
        .map(|_| Color::rgb(rng.gen(), rng.gen(), rng.gen()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{fixed_palette, random_palette, PALETTE_LEN};
    use crate::color::Color;
    use rand::rngs::mock::StepRng;

    #[test]
    fn fixed_palette_fills_the_swatch_grid() {
        assert_eq!(fixed_palette().len(), PALETTE_LEN);
    }

    #[test]
    fn fixed_palette_swatch_three_is_green() {
        assert_eq!(fixed_palette()[3], Color::rgb(0x00, 0xff, 0x00));
    }

    #[test]
    fn random_palette_matches_fixed_palette_shape() {
        let mut rng = StepRng::new(7, 0x9e37_79b9_7f4a_7c15);
        assert_eq!(random_palette(&mut rng).len(), PALETTE_LEN);
    }
}

/// The seven cell colors, in cycling order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
}

pub const PALETTE: [Color; 7] = [
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Indigo,
    Color::Violet,
];

impl Color {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        PALETTE[index % PALETTE.len()]
    }

    /// The entry after this one, wrapping from violet back to red.
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn rgba(self) -> [u8; 4] {
        match self {
            Color::Red => [0xff, 0x00, 0x00, 0xff],
            Color::Orange => [0xff, 0x7f, 0x00, 0xff],
            Color::Yellow => [0xff, 0xff, 0x00, 0xff],
            Color::Green => [0x00, 0xff, 0x00, 0xff],
            Color::Blue => [0x00, 0x00, 0xff, 0xff],
            Color::Indigo => [0x4b, 0x00, 0x82, 0xff],
            Color::Violet => [0x8b, 0x00, 0xff, 0xff],
        }
    }

    /// Pick a color from a uniform draw in `[0, 1)`.
    pub fn from_unit(u: f32) -> Self {
        let index = (u * PALETTE.len() as f32) as usize;
        Self::from_index(index.min(PALETTE.len() - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_the_palette_and_wraps() {
        let mut color = Color::Red;
        for expected in PALETTE.iter().skip(1) {
            color = color.next();
            assert_eq!(color, *expected);
        }
        assert_eq!(Color::Violet.next(), Color::Red);
    }

    #[test]
    fn from_unit_covers_both_ends() {
        assert_eq!(Color::from_unit(0.0), Color::Red);
        assert_eq!(Color::from_unit(0.999_999), Color::Violet);
    }

    #[test]
    fn indices_match_palette_order() {
        for (i, color) in PALETTE.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(Color::from_index(i), *color);
        }
    }
}

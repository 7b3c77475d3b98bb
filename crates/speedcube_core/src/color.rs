use serde::{Deserialize, Serialize};

/// Color of a single facelet.
#[derive(
    Serialize,
    Deserialize,
    EnumIter,
    Display,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// White.
    White,
    /// Yellow.
    Yellow,
    /// Red.
    Red,
    /// Orange.
    Orange,
    /// Green.
    Green,
    /// Blue.
    Blue,
}
impl Color {
    /// All colors, in declaration order.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Green,
        Color::Blue,
    ];

    /// Returns the single-letter abbreviation used in text output.
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }

    /// Returns the sRGB value conventionally used to display the color.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Color::White => [0xff, 0xff, 0xff],
            Color::Yellow => [0xff, 0xd5, 0x00],
            Color::Red => [0xc4, 0x1e, 0x3a],
            Color::Orange => [0xff, 0x58, 0x00],
            Color::Green => [0x00, 0x9e, 0x60],
            Color::Blue => [0x00, 0x51, 0xba],
        }
    }
}
